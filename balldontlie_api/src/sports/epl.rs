use crate::client::{Client, Request};
use crate::query::epl::{EplGameQuery, EplLeadersQuery, PlayerStatType, TeamStatType};
use crate::query::{PlayerQuery, SeasonQuery};
use crate::types::{
    ApiResponse, EplGame, EplGameGoal, EplGameLineup, EplGamePlayerStats, EplGameTeamStats,
    EplPlayer, EplPlayerSeasonStat, EplPlayerStatLeader, EplStanding, EplTeam,
    EplTeamSeasonStat, EplTeamStatLeader,
};
use crate::Error;

const BASE: &str = "/epl/v1";

/// English Premier League endpoints under `/epl/v1`.
///
/// Most EPL listings are scoped to a season, so the season is a required
/// argument rather than an optional filter.
#[derive(Clone, Debug)]
pub struct EplClient {
    client: Client,
}

impl EplClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn get_games(&self, query: &EplGameQuery) -> Result<ApiResponse<Vec<EplGame>>, Error> {
        self.client.get(&format!("{BASE}/games"), query).await
    }

    pub async fn get_game_lineups(
        &self,
        game_id: i64,
    ) -> Result<ApiResponse<Vec<EplGameLineup>>, Error> {
        self.client
            .execute(Request::get(format!("{BASE}/games/{game_id}/lineups")))
            .await
    }

    pub async fn get_game_goals(
        &self,
        game_id: i64,
    ) -> Result<ApiResponse<Vec<EplGameGoal>>, Error> {
        self.client
            .execute(Request::get(format!("{BASE}/games/{game_id}/goals")))
            .await
    }

    pub async fn get_game_team_stats(
        &self,
        game_id: i64,
    ) -> Result<ApiResponse<EplGameTeamStats>, Error> {
        self.client
            .execute(Request::get(format!("{BASE}/games/{game_id}/team_stats")))
            .await
    }

    pub async fn get_game_player_stats(
        &self,
        game_id: i64,
    ) -> Result<ApiResponse<EplGamePlayerStats>, Error> {
        self.client
            .execute(Request::get(format!("{BASE}/games/{game_id}/player_stats")))
            .await
    }

    /// Player listing. The API requires `season`, set it with [`PlayerQuery::with_season`].
    pub async fn get_players(
        &self,
        query: &PlayerQuery,
    ) -> Result<ApiResponse<Vec<EplPlayer>>, Error> {
        self.client.get(&format!("{BASE}/players"), query).await
    }

    pub async fn get_player_season_stats(
        &self,
        player_id: i64,
        season: i32,
    ) -> Result<ApiResponse<Vec<EplPlayerSeasonStat>>, Error> {
        self.client
            .get(
                &format!("{BASE}/players/{player_id}/season_stats"),
                &SeasonQuery::new(season),
            )
            .await
    }

    pub async fn get_player_stats_leaders(
        &self,
        query: &EplLeadersQuery<PlayerStatType>,
    ) -> Result<ApiResponse<Vec<EplPlayerStatLeader>>, Error> {
        self.client
            .get(&format!("{BASE}/player_stats/leaders"), query)
            .await
    }

    pub async fn get_team_stats_leaders(
        &self,
        query: &EplLeadersQuery<TeamStatType>,
    ) -> Result<ApiResponse<Vec<EplTeamStatLeader>>, Error> {
        self.client
            .get(&format!("{BASE}/team_stats/leaders"), query)
            .await
    }

    pub async fn get_standings(&self, season: i32) -> Result<ApiResponse<Vec<EplStanding>>, Error> {
        self.client
            .get(&format!("{BASE}/standings"), &SeasonQuery::new(season))
            .await
    }

    pub async fn get_teams(&self, season: i32) -> Result<ApiResponse<Vec<EplTeam>>, Error> {
        self.client
            .get(&format!("{BASE}/teams"), &SeasonQuery::new(season))
            .await
    }

    pub async fn get_team_players(
        &self,
        team_id: i64,
        season: i32,
    ) -> Result<ApiResponse<Vec<EplPlayer>>, Error> {
        self.client
            .get(
                &format!("{BASE}/teams/{team_id}/players"),
                &SeasonQuery::new(season),
            )
            .await
    }

    pub async fn get_team_season_stats(
        &self,
        team_id: i64,
        season: i32,
    ) -> Result<ApiResponse<Vec<EplTeamSeasonStat>>, Error> {
        self.client
            .get(
                &format!("{BASE}/teams/{team_id}/season_stats"),
                &SeasonQuery::new(season),
            )
            .await
    }
}
