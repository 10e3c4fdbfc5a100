use chrono::NaiveDate;

use crate::client::{Client, Request};
use crate::query::nba::{LeadersQuery, OddsQuery, SeasonAveragesQuery};
use crate::query::{
    GameQuery, InjuryQuery, PlayerQuery, QueryParams, SeasonQuery, StatsQuery, TeamQuery,
};
use crate::types::{
    ApiResponse, NbaAdvancedStats, NbaBoxScore, NbaGame, NbaLeader, NbaOdds, NbaPlayer,
    NbaPlayerInjury, NbaSeasonAverages, NbaStandings, NbaStats, NbaTeam,
};
use crate::Error;

const BASE: &str = "/nba/v1";

/// NBA endpoints under `/nba/v1`.
#[derive(Clone, Debug)]
pub struct NbaClient {
    client: Client,
}

impl NbaClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn get_teams(&self, query: &TeamQuery) -> Result<ApiResponse<Vec<NbaTeam>>, Error> {
        self.client.get(&format!("{BASE}/teams"), query).await
    }

    pub async fn get_team(&self, id: i64) -> Result<ApiResponse<NbaTeam>, Error> {
        self.client
            .execute(Request::get(format!("{BASE}/teams/{id}")))
            .await
    }

    pub async fn get_players(
        &self,
        query: &PlayerQuery,
    ) -> Result<ApiResponse<Vec<NbaPlayer>>, Error> {
        self.client.get(&format!("{BASE}/players"), query).await
    }

    pub async fn get_player(&self, id: i64) -> Result<ApiResponse<NbaPlayer>, Error> {
        self.client
            .execute(Request::get(format!("{BASE}/players/{id}")))
            .await
    }

    /// Players currently on a roster.
    pub async fn get_active_players(
        &self,
        query: &PlayerQuery,
    ) -> Result<ApiResponse<Vec<NbaPlayer>>, Error> {
        self.client.get(&format!("{BASE}/players/active"), query).await
    }

    pub async fn get_games(&self, query: &GameQuery) -> Result<ApiResponse<Vec<NbaGame>>, Error> {
        self.client.get(&format!("{BASE}/games"), query).await
    }

    pub async fn get_game(&self, id: i64) -> Result<ApiResponse<NbaGame>, Error> {
        self.client
            .execute(Request::get(format!("{BASE}/games/{id}")))
            .await
    }

    pub async fn get_stats(&self, query: &StatsQuery) -> Result<ApiResponse<Vec<NbaStats>>, Error> {
        self.client.get(&format!("{BASE}/stats"), query).await
    }

    pub async fn get_season_averages(
        &self,
        query: &SeasonAveragesQuery,
    ) -> Result<ApiResponse<Vec<NbaSeasonAverages>>, Error> {
        self.client.get(&format!("{BASE}/season_averages"), query).await
    }

    pub async fn get_standings(&self, season: i32) -> Result<ApiResponse<Vec<NbaStandings>>, Error> {
        self.client
            .get(&format!("{BASE}/standings"), &SeasonQuery::new(season))
            .await
    }

    /// Box scores for games in progress.
    pub async fn get_live_box_scores(&self) -> Result<ApiResponse<Vec<NbaBoxScore>>, Error> {
        self.client
            .execute(Request::get(format!("{BASE}/box_scores/live")))
            .await
    }

    pub async fn get_box_scores(
        &self,
        date: NaiveDate,
    ) -> Result<ApiResponse<Vec<NbaBoxScore>>, Error> {
        let mut params = QueryParams::new();
        params.push("date", date);
        self.client.get(&format!("{BASE}/box_scores"), &params).await
    }

    pub async fn get_player_injuries(
        &self,
        query: &InjuryQuery,
    ) -> Result<ApiResponse<Vec<NbaPlayerInjury>>, Error> {
        self.client.get(&format!("{BASE}/player_injuries"), query).await
    }

    pub async fn get_odds(&self, query: &OddsQuery) -> Result<ApiResponse<Vec<NbaOdds>>, Error> {
        self.client.get(&format!("{BASE}/odds"), query).await
    }

    pub async fn get_advanced_stats(
        &self,
        query: &StatsQuery,
    ) -> Result<ApiResponse<Vec<NbaAdvancedStats>>, Error> {
        self.client.get(&format!("{BASE}/stats/advanced"), query).await
    }

    pub async fn get_leaders(
        &self,
        query: &LeadersQuery,
    ) -> Result<ApiResponse<Vec<NbaLeader>>, Error> {
        self.client.get(&format!("{BASE}/leaders"), query).await
    }
}
