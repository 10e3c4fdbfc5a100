use super::common::Query;
use super::params::QueryParams;

/// Next Gen Stats style advanced rushing, passing and receiving numbers.
#[derive(Clone, Copy, Debug)]
pub struct AdvancedStatsQuery {
    pub season: i32,
    pub player_id: Option<i64>,
    /// Week 0 returns full-season figures.
    pub week: Option<i32>,
}

impl AdvancedStatsQuery {
    pub fn new(season: i32) -> Self {
        Self {
            season,
            player_id: None,
            week: None,
        }
    }
    pub fn with_player_id(mut self, player_id: i64) -> Self {
        self.player_id = Some(player_id);
        self
    }
    pub fn with_week(mut self, week: i32) -> Self {
        self.week = Some(week);
        self
    }
}

impl Query for AdvancedStatsQuery {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("season", self.season)
            .push_opt("player_id", self.player_id)
            .push_opt("week", self.week);
        params
    }
}
