use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NflTeam {
    pub id: i64,
    /// "AFC" or "NFC".
    pub conference: String,
    pub division: String,
    pub location: String,
    pub name: String,
    pub full_name: String,
    pub abbreviation: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NflPlayer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    pub position_abbreviation: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub jersey_number: Option<String>,
    pub college: Option<String>,
    pub experience: Option<String>,
    pub age: Option<i32>,
    pub team: Option<NflTeam>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NflGame {
    pub id: i64,
    pub visitor_team: NflTeam,
    pub home_team: NflTeam,
    pub summary: Option<String>,
    pub venue: Option<String>,
    pub week: i32,
    pub date: String,
    pub season: i32,
    pub postseason: bool,
    pub status: String,
    pub home_team_score: Option<i32>,
    pub visitor_team_score: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NflStats {
    pub player: NflPlayer,
    pub team: NflTeam,
    pub game: NflGame,
    pub passing_completions: Option<i32>,
    pub passing_attempts: Option<i32>,
    pub passing_yards: Option<i32>,
    pub yards_per_pass_attempt: Option<f64>,
    pub passing_touchdowns: Option<i32>,
    pub passing_interceptions: Option<i32>,
    pub sacks: Option<i32>,
    pub qbr: Option<f64>,
    pub qb_rating: Option<f64>,
    pub rushing_attempts: Option<i32>,
    pub rushing_yards: Option<i32>,
    pub yards_per_rush_attempt: Option<f64>,
    pub rushing_touchdowns: Option<i32>,
    pub receptions: Option<i32>,
    pub receiving_yards: Option<i32>,
    pub yards_per_reception: Option<f64>,
    pub receiving_touchdowns: Option<i32>,
    pub fumbles: Option<i32>,
    pub fumbles_lost: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NflStandings {
    pub team: NflTeam,
    pub season: i32,
    pub win_streak: i32,
    pub points_for: i32,
    pub points_against: i32,
    pub playoff_seed: Option<i32>,
    pub point_differential: i32,
    pub overall_record: String,
    pub conference_record: String,
    pub division_record: String,
    pub wins: i32,
    pub losses: i32,
    pub ties: i32,
    pub home_record: String,
    pub road_record: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NflPlayerInjury {
    pub player: NflPlayer,
    pub status: String,
    pub comment: Option<String>,
    pub date: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NflSeasonStats {
    pub player: NflPlayer,
    pub games_played: Option<i32>,
    pub season: i32,
    pub postseason: bool,
    pub passing_completions: Option<i32>,
    pub passing_attempts: Option<i32>,
    pub passing_yards: Option<i32>,
    pub passing_yards_per_game: Option<f64>,
    pub passing_touchdowns: Option<i32>,
    pub passing_interceptions: Option<i32>,
    pub passing_completion_pct: Option<f64>,
    pub rushing_attempts: Option<i32>,
    pub rushing_yards: Option<i32>,
    pub rushing_yards_per_game: Option<f64>,
    pub rushing_touchdowns: Option<i32>,
    pub receiving_receptions: Option<i32>,
    pub receiving_yards: Option<i32>,
    pub receiving_touchdowns: Option<i32>,
    pub receiving_targets: Option<i32>,
}

/// Advanced rushing metrics. The wire names are camelCase.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NflAdvancedRushingStats {
    pub player: NflPlayer,
    pub season: i32,
    pub week: i32,
    pub avg_time_to_los: Option<f64>,
    pub expected_rush_yards: Option<f64>,
    pub rush_attempts: Option<i32>,
    pub rush_pct_over_expected: Option<f64>,
    pub rush_touchdowns: Option<i32>,
    pub rush_yards: Option<i32>,
    pub rush_yards_over_expected: Option<f64>,
    pub rush_yards_over_expected_per_att: Option<f64>,
    pub efficiency: Option<f64>,
    pub percent_attempts_gte_eight_defenders: Option<f64>,
    pub avg_rush_yards: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NflAdvancedPassingStats {
    pub player: NflPlayer,
    pub season: i32,
    pub week: i32,
    pub aggressiveness: Option<f64>,
    pub attempts: Option<i32>,
    pub avg_air_distance: Option<f64>,
    pub avg_air_yards_differential: Option<f64>,
    pub avg_air_yards_to_sticks: Option<f64>,
    pub avg_completed_air_yards: Option<f64>,
    pub avg_intended_air_yards: Option<f64>,
    pub avg_time_to_throw: Option<f64>,
    pub completion_percentage: Option<f64>,
    pub completion_percentage_above_expectation: Option<f64>,
    pub completions: Option<i32>,
    pub expected_completion_percentage: Option<f64>,
    pub max_air_distance: Option<f64>,
    pub max_completed_air_distance: Option<f64>,
    pub passer_rating: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NflAdvancedReceivingStats {
    pub player: NflPlayer,
    pub season: i32,
    pub week: i32,
    pub avg_cushion: Option<f64>,
    pub avg_expected_yac: Option<f64>,
    pub avg_intended_air_yards: Option<f64>,
    pub avg_separation: Option<f64>,
    pub avg_yac: Option<f64>,
    pub avg_yac_above_expectation: Option<f64>,
    pub catch_percentage: Option<f64>,
    pub percent_share_of_intended_air_yards: Option<f64>,
    pub rec_touchdowns: Option<i32>,
    pub receptions: Option<i32>,
    pub targets: Option<i32>,
    pub yards: Option<i32>,
}
