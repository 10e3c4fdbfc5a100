use balldontlie_api::query::epl::{EplGameQuery, EplLeadersQuery, PlayerStatType, TeamStatType};
use balldontlie_api::query::mlb::TeamSeasonStatsQuery;
use balldontlie_api::query::nba::{LeadersQuery, OddsQuery, SeasonAveragesQuery};
use balldontlie_api::query::nfl::AdvancedStatsQuery;
use balldontlie_api::types::NbaLeaderStat;
use balldontlie_api::{
    GameQuery, InjuryQuery, Paginated, PlayerQuery, Query, SeasonQuery, SeasonStatsQuery,
    SortOrder, StatsQuery, TeamQuery,
};
use chrono::NaiveDate;
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com").unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn default_queries_add_nothing() {
    assert_eq!(TeamQuery::default().add_to_url(&base_url()).query(), None);
    assert_eq!(PlayerQuery::default().add_to_url(&base_url()).query(), None);
    assert_eq!(GameQuery::default().add_to_url(&base_url()).query(), None);
    assert_eq!(StatsQuery::default().add_to_url(&base_url()).query(), None);
    assert_eq!(InjuryQuery::default().add_to_url(&base_url()).query(), None);
    assert_eq!(OddsQuery::default().add_to_url(&base_url()).query(), None);
}

#[test]
fn team_query_conference_and_league() {
    let url = TeamQuery::default()
        .with_conference("East")
        .with_division("Atlantic")
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("division=Atlantic&conference=East"));

    let url = TeamQuery::default().with_league("American").add_to_url(&base_url());
    assert_eq!(url.query(), Some("league=American"));
}

#[test]
fn player_query_lists_and_pagination() {
    let url = PlayerQuery::default()
        .with_per_page(100)
        .with_player_ids(&[237, 115])
        .with_first_name("Stephen")
        .add_to_url(&base_url());
    insta::assert_snapshot!(url.query().unwrap(), @"per_page=100&player_ids%5B%5D=237&player_ids%5B%5D=115&first_name=Stephen");
}

#[test]
fn game_query_date_range() {
    let url = GameQuery::default()
        .with_team_id(14)
        .with_start_date(date(2024, 1, 1))
        .with_end_date(date(2024, 1, 31))
        .add_to_url(&base_url());
    assert_eq!(
        url.query(),
        Some("team_ids%5B%5D=14&start_date=2024-01-01&end_date=2024-01-31")
    );
}

#[test]
fn game_query_multiple_dates_keep_order() {
    let params = GameQuery::default()
        .with_dates(&[date(2024, 3, 2), date(2024, 3, 1)])
        .to_params();
    assert_eq!(
        params.pairs(),
        vec![
            ("dates[]".to_string(), "2024-03-02".to_string()),
            ("dates[]".to_string(), "2024-03-01".to_string()),
        ]
    );
}

#[test]
fn stats_query_games_and_postseason() {
    let url = StatsQuery::default()
        .with_game_ids(&[1, 2, 3])
        .with_postseason(true)
        .add_to_url(&base_url());
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(pairs.iter().filter(|(k, _)| k == "game_ids[]").count(), 3);
    assert!(pairs.contains(&("postseason".to_string(), "true".to_string())));
}

#[test]
fn injury_query_filters() {
    let url = InjuryQuery::default()
        .with_team_id(5)
        .with_player_id(9)
        .with_cursor(10)
        .add_to_url(&base_url());
    assert_eq!(
        url.query(),
        Some("cursor=10&team_ids%5B%5D=5&player_ids%5B%5D=9")
    );
}

#[test]
fn season_queries_always_send_season() {
    assert_eq!(
        SeasonQuery::new(2024).add_to_url(&base_url()).query(),
        Some("season=2024")
    );
    assert_eq!(
        SeasonStatsQuery::new(2023)
            .with_player_id(19)
            .with_postseason(false)
            .add_to_url(&base_url())
            .query(),
        Some("season=2023&player_ids%5B%5D=19&postseason=false")
    );
    assert_eq!(
        SeasonStatsQuery::new(2023)
            .with_sort("batting_avg", SortOrder::Asc)
            .add_to_url(&base_url())
            .query(),
        Some("season=2023&sort_by=batting_avg&sort_order=asc")
    );
}

#[test]
fn nba_specific_queries() {
    assert_eq!(
        SeasonAveragesQuery::new(2023, 237).add_to_url(&base_url()).query(),
        Some("season=2023&player_id=237")
    );
    assert_eq!(
        OddsQuery::default().with_game_id(42).add_to_url(&base_url()).query(),
        Some("game_id=42")
    );
    assert_eq!(
        LeadersQuery::new(NbaLeaderStat::Assists, 2024)
            .add_to_url(&base_url())
            .query(),
        Some("stat_type=ast&season=2024")
    );
}

#[test]
fn nfl_advanced_stats_query() {
    assert_eq!(
        AdvancedStatsQuery::new(2024).add_to_url(&base_url()).query(),
        Some("season=2024")
    );
    assert_eq!(
        AdvancedStatsQuery::new(2024)
            .with_player_id(33)
            .with_week(0)
            .add_to_url(&base_url())
            .query(),
        Some("season=2024&player_id=33&week=0")
    );
}

#[test]
fn mlb_team_season_stats_query() {
    assert_eq!(
        TeamSeasonStatsQuery::new(2024)
            .with_team_id(14)
            .with_postseason(true)
            .add_to_url(&base_url())
            .query(),
        Some("season=2024&team_id=14&postseason=true")
    );
}

#[test]
fn epl_queries() {
    assert_eq!(
        EplGameQuery::default()
            .with_season(2024)
            .with_week(3)
            .add_to_url(&base_url())
            .query(),
        Some("season=2024&week=3")
    );
    assert_eq!(
        EplLeadersQuery::new(2024, TeamStatType::CleanSheet)
            .with_per_page(10)
            .add_to_url(&base_url())
            .query(),
        Some("per_page=10&season=2024&type=clean_sheet")
    );
    assert_eq!(
        EplLeadersQuery::new(2024, PlayerStatType::GoalAssist)
            .add_to_url(&base_url())
            .query(),
        Some("season=2024&type=goal_assist")
    );
}

#[test]
fn epl_players_require_season_param() {
    let url = PlayerQuery::default()
        .with_season(2024)
        .with_team_id(3)
        .add_to_url(&base_url());
    assert_eq!(url.query(), Some("team_ids%5B%5D=3&season=2024"));
}
