use super::common::Query;
use super::params::QueryParams;

/// Season totals per team.
#[derive(Clone, Copy, Debug)]
pub struct TeamSeasonStatsQuery {
    pub season: i32,
    pub team_id: Option<i64>,
    pub postseason: Option<bool>,
}

impl TeamSeasonStatsQuery {
    pub fn new(season: i32) -> Self {
        Self {
            season,
            team_id: None,
            postseason: None,
        }
    }
    pub fn with_team_id(mut self, team_id: i64) -> Self {
        self.team_id = Some(team_id);
        self
    }
    pub fn with_postseason(mut self, postseason: bool) -> Self {
        self.postseason = Some(postseason);
        self
    }
}

impl Query for TeamSeasonStatsQuery {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("season", self.season)
            .push_opt("team_id", self.team_id)
            .push_opt("postseason", self.postseason);
        params
    }
}
