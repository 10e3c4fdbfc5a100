use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EplTeam {
    pub id: i64,
    pub name: String,
    pub short_name: Option<String>,
    pub abbr: Option<String>,
    pub city: Option<String>,
    pub stadium: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EplPlayer {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub name: Option<String>,
    pub position: Option<String>,
    pub national_team: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub birth_date: Option<String>,
    pub age: Option<String>,
    #[serde(default)]
    pub team_ids: Vec<i64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EplGame {
    pub id: i64,
    pub season: i32,
    pub week: i32,
    pub kickoff: Option<String>,
    pub status: Option<String>,
    pub home_team_id: Option<i64>,
    pub away_team_id: Option<i64>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub clock: Option<i32>,
    pub clock_display: Option<String>,
    pub phase: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EplGameLineup {
    pub team_id: i64,
    pub player: EplPlayer,
    pub substitute: bool,
    pub captain: bool,
    pub position: Option<String>,
    pub position_abbreviation: Option<String>,
    pub shirt_number: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EplGameGoal {
    pub game_id: i64,
    pub scorer: EplPlayer,
    pub assister: Option<EplPlayer>,
    /// Match minute.
    pub clock: i32,
    pub phase: Option<String>,
    #[serde(rename = "type")]
    pub goal_type: Option<String>,
}

/// A named numeric stat, e.g. `{"name": "possession_percentage", "value": 61.2}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EplNamedStat {
    pub name: String,
    pub value: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EplTeamStatLine {
    pub team_id: i64,
    #[serde(default)]
    pub stats: Vec<EplNamedStat>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EplGameTeamStats {
    pub game_id: i64,
    #[serde(default)]
    pub teams: Vec<EplTeamStatLine>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EplPlayerStatLine {
    pub team_id: i64,
    pub player_id: i64,
    #[serde(default)]
    pub stats: Vec<EplNamedStat>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EplGamePlayerStats {
    pub game_id: i64,
    #[serde(default)]
    pub players: Vec<EplPlayerStatLine>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EplStanding {
    pub team: EplTeam,
    pub season: i32,
    pub position: i32,
    pub form: Option<String>,
    pub home_played: Option<i32>,
    pub home_won: Option<i32>,
    pub home_drawn: Option<i32>,
    pub home_lost: Option<i32>,
    pub home_goals_for: Option<i32>,
    pub home_goals_against: Option<i32>,
    pub home_points: i32,
    pub away_played: Option<i32>,
    pub away_won: Option<i32>,
    pub away_drawn: Option<i32>,
    pub away_lost: Option<i32>,
    pub away_goals_for: Option<i32>,
    pub away_goals_against: Option<i32>,
    pub away_points: i32,
    pub overall_played: i32,
    pub overall_won: i32,
    pub overall_drawn: i32,
    pub overall_lost: i32,
    pub overall_goals_for: Option<i32>,
    pub overall_goals_against: Option<i32>,
    pub overall_goal_difference: Option<i32>,
    pub overall_points: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EplPlayerStatLeader {
    pub player: EplPlayer,
    pub season: i32,
    /// The stat ranked, e.g. "goals".
    pub name: String,
    pub value: f64,
    pub rank: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EplTeamStatLeader {
    pub team: EplTeam,
    pub season: i32,
    pub name: String,
    pub value: f64,
    pub rank: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EplPlayerSeasonStat {
    pub player_id: Option<i64>,
    pub season: Option<i32>,
    pub name: String,
    pub value: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EplTeamSeasonStat {
    pub team_id: Option<i64>,
    pub season: i32,
    pub name: String,
    pub value: f64,
    pub rank: Option<i32>,
}
