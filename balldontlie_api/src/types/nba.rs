use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NbaTeam {
    pub id: i64,
    /// "East" or "West"; empty for defunct franchises.
    pub conference: String,
    pub division: String,
    pub city: String,
    pub name: String,
    pub full_name: String,
    pub abbreviation: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NbaPlayer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub jersey_number: Option<String>,
    pub college: Option<String>,
    pub country: Option<String>,
    pub draft_year: Option<i32>,
    pub draft_round: Option<i32>,
    pub draft_number: Option<i32>,
    /// Present on player endpoints; stat lines carry `team_id` instead.
    pub team: Option<NbaTeam>,
    pub team_id: Option<i64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NbaGame {
    pub id: i64,
    pub date: String,
    pub season: i32,
    pub status: String,
    pub period: Option<i32>,
    pub time: Option<String>,
    pub postseason: bool,
    pub home_team_score: i32,
    pub visitor_team_score: i32,
    pub home_team: Option<NbaTeam>,
    pub visitor_team: Option<NbaTeam>,
    pub home_team_id: Option<i64>,
    pub visitor_team_id: Option<i64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NbaStats {
    pub id: i64,
    pub min: Option<String>,
    pub fgm: Option<i32>,
    pub fga: Option<i32>,
    pub fg_pct: Option<f64>,
    pub fg3m: Option<i32>,
    pub fg3a: Option<i32>,
    pub fg3_pct: Option<f64>,
    pub ftm: Option<i32>,
    pub fta: Option<i32>,
    pub ft_pct: Option<f64>,
    pub oreb: Option<i32>,
    pub dreb: Option<i32>,
    pub reb: Option<i32>,
    pub ast: Option<i32>,
    pub stl: Option<i32>,
    pub blk: Option<i32>,
    pub turnover: Option<i32>,
    pub pf: Option<i32>,
    pub pts: Option<i32>,
    pub player: NbaPlayer,
    pub team: NbaTeam,
    pub game: NbaGame,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NbaSeasonAverages {
    pub player_id: i64,
    pub season: i32,
    pub games_played: i32,
    pub min: String,
    pub pts: f64,
    pub ast: f64,
    pub reb: f64,
    pub stl: f64,
    pub blk: f64,
    pub turnover: f64,
    pub fgm: f64,
    pub fga: f64,
    pub fg_pct: f64,
    pub fg3m: f64,
    pub fg3a: f64,
    pub fg3_pct: f64,
    pub ftm: f64,
    pub fta: f64,
    pub ft_pct: f64,
    pub oreb: f64,
    pub dreb: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NbaStandings {
    pub team: NbaTeam,
    pub season: i32,
    pub conference_record: String,
    pub conference_rank: i32,
    pub division_record: String,
    pub division_rank: i32,
    pub wins: i32,
    pub losses: i32,
    pub home_record: String,
    pub road_record: String,
}

/// One player's line inside a box score.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NbaBoxScorePlayer {
    pub min: Option<String>,
    pub fgm: Option<i32>,
    pub fga: Option<i32>,
    pub fg_pct: Option<f64>,
    pub fg3m: Option<i32>,
    pub fg3a: Option<i32>,
    pub fg3_pct: Option<f64>,
    pub ftm: Option<i32>,
    pub fta: Option<i32>,
    pub ft_pct: Option<f64>,
    pub oreb: Option<i32>,
    pub dreb: Option<i32>,
    pub reb: Option<i32>,
    pub ast: Option<i32>,
    pub stl: Option<i32>,
    pub blk: Option<i32>,
    pub turnover: Option<i32>,
    pub pf: Option<i32>,
    pub pts: Option<i32>,
    pub player: NbaPlayer,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NbaBoxScore {
    pub date: String,
    pub season: i32,
    pub status: String,
    pub period: Option<i32>,
    pub time: Option<String>,
    pub postseason: bool,
    pub home_team_score: i32,
    pub visitor_team_score: i32,
    pub home_team: NbaTeam,
    pub visitor_team: NbaTeam,
    #[serde(default)]
    pub players: Vec<NbaBoxScorePlayer>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NbaPlayerInjury {
    pub player: NbaPlayer,
    pub return_date: Option<String>,
    pub description: Option<String>,
    pub status: String,
}

/// Stat categories ranked by the leaders endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NbaLeaderStat {
    #[serde(rename = "pts")]
    Points,
    #[serde(rename = "reb")]
    Rebounds,
    #[serde(rename = "dreb")]
    DefensiveRebounds,
    #[serde(rename = "oreb")]
    OffensiveRebounds,
    #[serde(rename = "ast")]
    Assists,
    #[serde(rename = "stl")]
    Steals,
    #[serde(rename = "blk")]
    Blocks,
    #[serde(rename = "tov")]
    Turnovers,
    #[serde(rename = "min")]
    Minutes,
}

impl fmt::Display for NbaLeaderStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NbaLeaderStat::Points => "pts",
            NbaLeaderStat::Rebounds => "reb",
            NbaLeaderStat::DefensiveRebounds => "dreb",
            NbaLeaderStat::OffensiveRebounds => "oreb",
            NbaLeaderStat::Assists => "ast",
            NbaLeaderStat::Steals => "stl",
            NbaLeaderStat::Blocks => "blk",
            NbaLeaderStat::Turnovers => "tov",
            NbaLeaderStat::Minutes => "min",
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NbaLeader {
    pub player: NbaPlayer,
    pub value: f64,
    pub stat_type: NbaLeaderStat,
    pub rank: i32,
    pub season: i32,
    pub games_played: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NbaOdds {
    /// "2way", "spread" or "over/under".
    #[serde(rename = "type")]
    pub odds_type: String,
    pub vendor: String,
    pub live: bool,
    pub game_id: i64,
    pub odds_decimal_home: Option<String>,
    pub odds_decimal_visitor: Option<String>,
    pub odds_american_home: Option<String>,
    pub odds_american_visitor: Option<String>,
    pub away_spread: Option<String>,
    pub over_under: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NbaAdvancedStats {
    pub id: i64,
    pub pie: f64,
    pub pace: f64,
    pub assist_percentage: f64,
    pub assist_ratio: f64,
    pub assist_to_turnover: f64,
    pub defensive_rating: f64,
    pub defensive_rebound_percentage: f64,
    pub effective_field_goal_percentage: f64,
    pub net_rating: f64,
    pub offensive_rating: f64,
    pub offensive_rebound_percentage: f64,
    pub rebound_percentage: f64,
    pub true_shooting_percentage: f64,
    pub turnover_ratio: f64,
    pub usage_percentage: f64,
    pub player: NbaPlayer,
    pub team: NbaTeam,
    pub game: NbaGame,
}
