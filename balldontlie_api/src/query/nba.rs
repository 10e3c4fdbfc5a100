use chrono::NaiveDate;

use crate::types::NbaLeaderStat;

use super::common::Query;
use super::params::QueryParams;

/// Season averages for one player.
#[derive(Clone, Copy, Debug)]
pub struct SeasonAveragesQuery {
    pub season: i32,
    pub player_id: i64,
}

impl SeasonAveragesQuery {
    pub fn new(season: i32, player_id: i64) -> Self {
        Self { season, player_id }
    }
}

impl Query for SeasonAveragesQuery {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("season", self.season)
            .push("player_id", self.player_id);
        params
    }
}

/// Betting odds, by date or by game.
#[derive(Clone, Copy, Debug, Default)]
pub struct OddsQuery {
    pub date: Option<NaiveDate>,
    pub game_id: Option<i64>,
}

impl Query for OddsQuery {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("date", self.date)
            .push_opt("game_id", self.game_id);
        params
    }
}

impl OddsQuery {
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
    pub fn with_game_id(mut self, game_id: i64) -> Self {
        self.game_id = Some(game_id);
        self
    }
}

/// League leaders for one stat in one season.
#[derive(Clone, Copy, Debug)]
pub struct LeadersQuery {
    pub stat_type: NbaLeaderStat,
    pub season: i32,
}

impl LeadersQuery {
    pub fn new(stat_type: NbaLeaderStat, season: i32) -> Self {
        Self { stat_type, season }
    }
}

impl Query for LeadersQuery {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("stat_type", self.stat_type.to_string())
            .push("season", self.season);
        params
    }
}
