use crate::client::{Client, Request};
use crate::query::mlb::TeamSeasonStatsQuery;
use crate::query::{
    GameQuery, InjuryQuery, PlayerQuery, SeasonQuery, SeasonStatsQuery, StatsQuery, TeamQuery,
};
use crate::types::{
    ApiResponse, MlbGame, MlbPlayer, MlbPlayerInjury, MlbSeasonStats, MlbStandings, MlbStats,
    MlbTeam, MlbTeamSeasonStats,
};
use crate::Error;

const BASE: &str = "/mlb/v1";

/// MLB endpoints under `/mlb/v1`.
#[derive(Clone, Debug)]
pub struct MlbClient {
    client: Client,
}

impl MlbClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Team listing, filtered by `division` and `league`.
    pub async fn get_teams(&self, query: &TeamQuery) -> Result<ApiResponse<Vec<MlbTeam>>, Error> {
        self.client.get(&format!("{BASE}/teams"), query).await
    }

    pub async fn get_team(&self, id: i64) -> Result<ApiResponse<MlbTeam>, Error> {
        self.client
            .execute(Request::get(format!("{BASE}/teams/{id}")))
            .await
    }

    pub async fn get_players(
        &self,
        query: &PlayerQuery,
    ) -> Result<ApiResponse<Vec<MlbPlayer>>, Error> {
        self.client.get(&format!("{BASE}/players"), query).await
    }

    pub async fn get_player(&self, id: i64) -> Result<ApiResponse<MlbPlayer>, Error> {
        self.client
            .execute(Request::get(format!("{BASE}/players/{id}")))
            .await
    }

    pub async fn get_active_players(
        &self,
        query: &PlayerQuery,
    ) -> Result<ApiResponse<Vec<MlbPlayer>>, Error> {
        self.client.get(&format!("{BASE}/players/active"), query).await
    }

    pub async fn get_games(&self, query: &GameQuery) -> Result<ApiResponse<Vec<MlbGame>>, Error> {
        self.client.get(&format!("{BASE}/games"), query).await
    }

    pub async fn get_game(&self, id: i64) -> Result<ApiResponse<MlbGame>, Error> {
        self.client
            .execute(Request::get(format!("{BASE}/games/{id}")))
            .await
    }

    pub async fn get_stats(&self, query: &StatsQuery) -> Result<ApiResponse<Vec<MlbStats>>, Error> {
        self.client.get(&format!("{BASE}/stats"), query).await
    }

    pub async fn get_standings(&self, season: i32) -> Result<ApiResponse<Vec<MlbStandings>>, Error> {
        self.client
            .get(&format!("{BASE}/standings"), &SeasonQuery::new(season))
            .await
    }

    pub async fn get_player_injuries(
        &self,
        query: &InjuryQuery,
    ) -> Result<ApiResponse<Vec<MlbPlayerInjury>>, Error> {
        self.client.get(&format!("{BASE}/player_injuries"), query).await
    }

    pub async fn get_season_stats(
        &self,
        query: &SeasonStatsQuery,
    ) -> Result<ApiResponse<Vec<MlbSeasonStats>>, Error> {
        self.client.get(&format!("{BASE}/season_stats"), query).await
    }

    pub async fn get_team_season_stats(
        &self,
        query: &TeamSeasonStatsQuery,
    ) -> Result<ApiResponse<Vec<MlbTeamSeasonStats>>, Error> {
        self.client
            .get(&format!("{BASE}/teams/season_stats"), query)
            .await
    }
}
