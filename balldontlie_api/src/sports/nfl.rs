use crate::client::{Client, Request};
use crate::query::nfl::AdvancedStatsQuery;
use crate::query::{
    GameQuery, InjuryQuery, PlayerQuery, SeasonQuery, SeasonStatsQuery, StatsQuery, TeamQuery,
};
use crate::types::{
    ApiResponse, NflAdvancedPassingStats, NflAdvancedReceivingStats, NflAdvancedRushingStats,
    NflGame, NflPlayer, NflPlayerInjury, NflSeasonStats, NflStandings, NflStats, NflTeam,
};
use crate::Error;

const BASE: &str = "/nfl/v1";

/// NFL endpoints under `/nfl/v1`.
#[derive(Clone, Debug)]
pub struct NflClient {
    client: Client,
}

impl NflClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn get_teams(&self, query: &TeamQuery) -> Result<ApiResponse<Vec<NflTeam>>, Error> {
        self.client.get(&format!("{BASE}/teams"), query).await
    }

    pub async fn get_team(&self, id: i64) -> Result<ApiResponse<NflTeam>, Error> {
        self.client
            .execute(Request::get(format!("{BASE}/teams/{id}")))
            .await
    }

    pub async fn get_players(
        &self,
        query: &PlayerQuery,
    ) -> Result<ApiResponse<Vec<NflPlayer>>, Error> {
        self.client.get(&format!("{BASE}/players"), query).await
    }

    pub async fn get_player(&self, id: i64) -> Result<ApiResponse<NflPlayer>, Error> {
        self.client
            .execute(Request::get(format!("{BASE}/players/{id}")))
            .await
    }

    pub async fn get_active_players(
        &self,
        query: &PlayerQuery,
    ) -> Result<ApiResponse<Vec<NflPlayer>>, Error> {
        self.client.get(&format!("{BASE}/players/active"), query).await
    }

    /// Game listing; honours `weeks[]` in addition to the shared filters.
    pub async fn get_games(&self, query: &GameQuery) -> Result<ApiResponse<Vec<NflGame>>, Error> {
        self.client.get(&format!("{BASE}/games"), query).await
    }

    pub async fn get_game(&self, id: i64) -> Result<ApiResponse<NflGame>, Error> {
        self.client
            .execute(Request::get(format!("{BASE}/games/{id}")))
            .await
    }

    pub async fn get_stats(&self, query: &StatsQuery) -> Result<ApiResponse<Vec<NflStats>>, Error> {
        self.client.get(&format!("{BASE}/stats"), query).await
    }

    pub async fn get_standings(&self, season: i32) -> Result<ApiResponse<Vec<NflStandings>>, Error> {
        self.client
            .get(&format!("{BASE}/standings"), &SeasonQuery::new(season))
            .await
    }

    pub async fn get_player_injuries(
        &self,
        query: &InjuryQuery,
    ) -> Result<ApiResponse<Vec<NflPlayerInjury>>, Error> {
        self.client.get(&format!("{BASE}/player_injuries"), query).await
    }

    pub async fn get_season_stats(
        &self,
        query: &SeasonStatsQuery,
    ) -> Result<ApiResponse<Vec<NflSeasonStats>>, Error> {
        self.client.get(&format!("{BASE}/season_stats"), query).await
    }

    pub async fn get_advanced_rushing_stats(
        &self,
        query: &AdvancedStatsQuery,
    ) -> Result<ApiResponse<Vec<NflAdvancedRushingStats>>, Error> {
        self.client
            .get(&format!("{BASE}/advanced_stats/rushing"), query)
            .await
    }

    pub async fn get_advanced_passing_stats(
        &self,
        query: &AdvancedStatsQuery,
    ) -> Result<ApiResponse<Vec<NflAdvancedPassingStats>>, Error> {
        self.client
            .get(&format!("{BASE}/advanced_stats/passing"), query)
            .await
    }

    pub async fn get_advanced_receiving_stats(
        &self,
        query: &AdvancedStatsQuery,
    ) -> Result<ApiResponse<Vec<NflAdvancedReceivingStats>>, Error> {
        self.client
            .get(&format!("{BASE}/advanced_stats/receiving"), query)
            .await
    }
}
