use std::time::Duration;

use balldontlie_api::query::epl::{EplLeadersQuery, PlayerStatType};
use balldontlie_api::query::nba::LeadersQuery;
use balldontlie_api::types::{ApiResponse, NbaLeaderStat, NbaTeam};
use balldontlie_api::{
    BalldontlieApi, Client, ClientConfig, ErrorKind, Paginated, PlayerQuery, Request,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn config(mock_server: &MockServer) -> ClientConfig {
    ClientConfig::from_key("test-key")
        .unwrap()
        .with_base_url(&mock_server.uri())
        .unwrap()
}

fn api(mock_server: &MockServer) -> BalldontlieApi {
    BalldontlieApi::new(config(mock_server)).unwrap()
}

async fn mount_status(mock_server: &MockServer, route: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn get_players_sends_headers_and_list_params() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("nba_players.json");

    Mock::given(method("GET"))
        .and(path("/nba/v1/players"))
        .and(header("authorization", "test-key"))
        .and(header("x-bdl-client", "rust"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = PlayerQuery::default()
        .with_team_ids(&[1, 2])
        .with_search("lebron");
    let resp = api(&mock_server).nba.get_players(&query).await.unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.next_cursor(), Some(51));

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let pairs: Vec<(String, String)> = requests[0].url.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("team_ids[]".to_string(), "1".to_string()),
            ("team_ids[]".to_string(), "2".to_string()),
            ("search".to_string(), "lebron".to_string()),
        ]
    );
    assert!(!requests[0].url.as_str().contains("per_page"));
}

#[tokio::test]
async fn cursor_from_previous_page_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nba/v1/players"))
        .and(query_param("cursor", "51"))
        .and(query_param("per_page", "25"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": [], "meta": {"per_page": 25}})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = api(&mock_server);
    let resp = api
        .nba
        .get_players(&PlayerQuery::default().with_cursor(51).with_per_page(25))
        .await
        .unwrap();
    assert!(resp.data.is_empty());
    assert_eq!(resp.next_cursor(), None);
}

#[tokio::test]
async fn status_codes_map_to_error_kinds() {
    let cases = [
        (400, ErrorKind::Validation),
        (401, ErrorKind::Authentication),
        (404, ErrorKind::NotFound),
        (429, ErrorKind::RateLimit),
        (500, ErrorKind::Server),
        (502, ErrorKind::Server),
        (503, ErrorKind::Server),
        (504, ErrorKind::Server),
        (403, ErrorKind::Generic),
        (418, ErrorKind::Generic),
    ];

    for (status, kind) in cases {
        let mock_server = MockServer::start().await;
        mount_status(
            &mock_server,
            "/nba/v1/teams/1",
            ResponseTemplate::new(status).set_body_json(json!({"message": "nope"})),
        )
        .await;

        let err = api(&mock_server).nba.get_team(1).await.unwrap_err();
        assert_eq!(err.kind(), kind, "status {}", status);
        assert_eq!(err.status(), status);
        assert_eq!(err.message(), "nope");
        assert_eq!(err.body(), Some(&json!({"message": "nope"})));
    }
}

#[tokio::test]
async fn not_found_uses_error_field() {
    let mock_server = MockServer::start().await;
    mount_status(
        &mock_server,
        "/nba/v1/teams/999",
        ResponseTemplate::new(404).set_body_json(json!({"error": "Team not found"})),
    )
    .await;

    let err = api(&mock_server).nba.get_team(999).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.status(), 404);
    insta::assert_snapshot!(err.to_string(), @"not found (HTTP 404): Team not found");
}

#[tokio::test]
async fn error_field_wins_over_message_field() {
    let mock_server = MockServer::start().await;
    mount_status(
        &mock_server,
        "/nfl/v1/teams/1",
        ResponseTemplate::new(400).set_body_json(json!({"error": "bad season", "message": "ignored"})),
    )
    .await;

    let err = api(&mock_server).nfl.get_team(1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.message(), "bad season");
}

#[tokio::test]
async fn plain_text_body_becomes_message() {
    let mock_server = MockServer::start().await;
    mount_status(
        &mock_server,
        "/mlb/v1/teams/1",
        ResponseTemplate::new(500).set_body_string("oops"),
    )
    .await;

    let err = api(&mock_server).mlb.get_team(1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Server);
    assert_eq!(err.message(), "oops");
    assert_eq!(err.body(), Some(&json!("oops")));
}

#[tokio::test]
async fn empty_body_falls_back_to_reason_phrase() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, "/nba/v1/games/1", ResponseTemplate::new(429)).await;

    let err = api(&mock_server).nba.get_game(1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RateLimit);
    assert_eq!(err.message(), "Too Many Requests");
    assert!(err.body().is_none());
    assert!(err.is_retryable());
}

#[tokio::test]
async fn object_without_message_uses_reason_phrase() {
    let mock_server = MockServer::start().await;
    mount_status(
        &mock_server,
        "/nba/v1/games/2",
        ResponseTemplate::new(401).set_body_json(json!({"detail": "x"})),
    )
    .await;

    let err = api(&mock_server).nba.get_game(2).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert_eq!(err.message(), "Unauthorized");
    assert_eq!(err.body(), Some(&json!({"detail": "x"})));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn malformed_success_body_is_generic_error() {
    let mock_server = MockServer::start().await;
    mount_status(
        &mock_server,
        "/nba/v1/teams/1",
        ResponseTemplate::new(200).set_body_string("{not valid json}"),
    )
    .await;

    let err = api(&mock_server).nba.get_team(1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Generic);
    assert_eq!(err.status(), 200);
    assert_eq!(err.body(), Some(&json!("{not valid json}")));
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    let config = ClientConfig::from_key("test-key")
        .unwrap()
        .with_base_url("http://127.0.0.1:1")
        .unwrap();
    let api = BalldontlieApi::new(config).unwrap();

    let err = api.nba.get_team(1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert_eq!(err.status(), 500);
    assert!(err.body().is_none());
    assert!(err.message().starts_with("Network error"));
}

#[tokio::test]
async fn transport_timeout_is_network_error() {
    let mock_server = MockServer::start().await;
    mount_status(
        &mock_server,
        "/nba/v1/teams/1",
        ResponseTemplate::new(200)
            .set_body_string(load_fixture("nba_team.json"))
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let config = config(&mock_server).with_timeout(Duration::from_millis(100));
    let api = BalldontlieApi::new(config).unwrap();
    let err = api.nba.get_team(1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
}

#[tokio::test]
async fn request_header_overrides_default() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nba/v1/teams/14"))
        .and(header("authorization", "override-key"))
        .and(header("x-bdl-client", "rust"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("nba_team.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(config(&mock_server)).unwrap();
    let resp: ApiResponse<NbaTeam> = client
        .execute(Request::get("/nba/v1/teams/14").with_header("Authorization", "override-key"))
        .await
        .unwrap();
    assert_eq!(resp.data.id, 14);
}

#[tokio::test]
async fn nba_leaders_sends_stat_type() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nba/v1/leaders"))
        .and(query_param("stat_type", "pts"))
        .and(query_param("season", "2023"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let resp = api(&mock_server)
        .nba
        .get_leaders(&LeadersQuery::new(NbaLeaderStat::Points, 2023))
        .await
        .unwrap();
    assert!(resp.data.is_empty());
}

#[tokio::test]
async fn epl_player_leaders_sends_type() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/epl/v1/player_stats/leaders"))
        .and(query_param("season", "2024"))
        .and(query_param("type", "goals"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("epl_player_leaders.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let resp = api(&mock_server)
        .epl
        .get_player_stats_leaders(&EplLeadersQuery::new(2024, PlayerStatType::Goals))
        .await
        .unwrap();
    assert_eq!(resp.data[0].player.name.as_deref(), Some("Mohamed Salah"));
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    let mock_server = MockServer::start().await;
    mount_status(
        &mock_server,
        "/nba/v1/teams/14",
        ResponseTemplate::new(200).set_body_string(load_fixture("nba_team.json")),
    )
    .await;

    let api = api(&mock_server);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let nba = api.nba.clone();
            tokio::spawn(async move { nba.get_team(14).await })
        })
        .collect();
    for handle in handles {
        let resp = handle.await.unwrap().unwrap();
        assert_eq!(resp.data.abbreviation, "LAL");
    }
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 8);
}
