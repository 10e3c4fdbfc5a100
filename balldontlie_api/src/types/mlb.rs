use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MlbTeam {
    pub id: i64,
    pub slug: String,
    pub abbreviation: String,
    pub display_name: String,
    pub short_display_name: String,
    pub name: String,
    pub location: String,
    /// "American" or "National".
    pub league: String,
    pub division: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MlbPlayer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub debut_year: Option<i32>,
    pub jersey: Option<String>,
    pub college: Option<String>,
    pub position: Option<String>,
    pub active: Option<bool>,
    pub birth_place: Option<String>,
    pub dob: Option<String>,
    pub age: Option<i32>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub draft: Option<String>,
    pub bats_throws: Option<String>,
    pub team: Option<MlbTeam>,
}

/// Line score totals for one side of a game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MlbGameTeamData {
    pub hits: i32,
    pub runs: i32,
    pub errors: i32,
    #[serde(default)]
    pub inning_scores: Vec<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MlbGame {
    pub id: i64,
    pub home_team_name: String,
    pub away_team_name: String,
    pub home_team: MlbTeam,
    pub away_team: MlbTeam,
    pub season: i32,
    pub postseason: bool,
    pub date: String,
    pub home_team_data: Option<MlbGameTeamData>,
    pub away_team_data: Option<MlbGameTeamData>,
    pub venue: Option<String>,
    pub attendance: Option<i64>,
    pub status: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MlbStats {
    pub player: MlbPlayer,
    pub game: MlbGame,
    pub team_name: String,
    pub at_bats: Option<i32>,
    pub runs: Option<i32>,
    pub hits: Option<i32>,
    pub rbi: Option<i32>,
    pub hr: Option<i32>,
    pub bb: Option<i32>,
    pub k: Option<i32>,
    pub avg: Option<f64>,
    pub obp: Option<f64>,
    pub slg: Option<f64>,
    pub ip: Option<f64>,
    pub p_hits: Option<i32>,
    pub p_runs: Option<i32>,
    pub er: Option<i32>,
    pub p_bb: Option<i32>,
    pub p_k: Option<i32>,
    pub p_hr: Option<i32>,
    pub pitch_count: Option<i32>,
    pub strikes: Option<i32>,
    pub era: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MlbStandings {
    pub team: MlbTeam,
    pub season: i32,
    pub league_name: String,
    pub league_short_name: String,
    pub division_name: String,
    pub division_short_name: String,
    pub wins: i32,
    pub losses: i32,
    pub win_percent: f64,
    pub games_behind: f64,
    pub streak: i32,
    pub last_ten_games: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MlbSeasonStats {
    pub player: MlbPlayer,
    pub team_name: Option<String>,
    pub season: i32,
    pub postseason: bool,
    pub batting_gp: Option<i32>,
    pub batting_ab: Option<i32>,
    pub batting_r: Option<i32>,
    pub batting_h: Option<i32>,
    pub batting_avg: Option<f64>,
    #[serde(rename = "batting_2b")]
    pub batting_doubles: Option<i32>,
    #[serde(rename = "batting_3b")]
    pub batting_triples: Option<i32>,
    pub batting_hr: Option<i32>,
    pub batting_rbi: Option<i32>,
    pub batting_bb: Option<i32>,
    pub batting_so: Option<i32>,
    pub batting_sb: Option<i32>,
    pub batting_obp: Option<f64>,
    pub batting_slg: Option<f64>,
    pub batting_ops: Option<f64>,
    pub batting_war: Option<f64>,
    pub pitching_gp: Option<i32>,
    pub pitching_gs: Option<i32>,
    pub pitching_w: Option<i32>,
    pub pitching_l: Option<i32>,
    pub pitching_era: Option<f64>,
    pub pitching_sv: Option<i32>,
    pub pitching_ip: Option<f64>,
    pub pitching_h: Option<i32>,
    pub pitching_er: Option<i32>,
    pub pitching_hr: Option<i32>,
    pub pitching_bb: Option<i32>,
    pub pitching_k: Option<i32>,
    pub pitching_war: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MlbTeamSeasonStats {
    pub team: MlbTeam,
    pub team_name: String,
    pub postseason: bool,
    pub season: i32,
    pub gp: Option<i32>,
    pub batting_ab: Option<i32>,
    pub batting_r: Option<i32>,
    pub batting_h: Option<i32>,
    #[serde(rename = "batting_2b")]
    pub batting_doubles: Option<i32>,
    #[serde(rename = "batting_3b")]
    pub batting_triples: Option<i32>,
    pub batting_hr: Option<i32>,
    pub batting_rbi: Option<i32>,
    pub batting_bb: Option<i32>,
    pub batting_so: Option<i32>,
    pub batting_sb: Option<i32>,
    pub batting_avg: Option<f64>,
    pub batting_obp: Option<f64>,
    pub batting_slg: Option<f64>,
    pub batting_ops: Option<f64>,
    pub pitching_w: Option<i32>,
    pub pitching_l: Option<i32>,
    pub pitching_era: Option<f64>,
    pub pitching_sv: Option<i32>,
    pub pitching_ip: Option<f64>,
    pub pitching_h: Option<i32>,
    pub pitching_er: Option<i32>,
    pub pitching_hr: Option<i32>,
    pub pitching_bb: Option<i32>,
    pub pitching_k: Option<i32>,
    pub fielding_e: Option<i32>,
    pub fielding_fp: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MlbPlayerInjury {
    pub player: MlbPlayer,
    pub date: Option<String>,
    pub return_date: Option<String>,
    #[serde(rename = "type")]
    pub injury_type: Option<String>,
    pub detail: Option<String>,
    pub side: Option<String>,
    pub status: String,
    pub long_comment: Option<String>,
    pub short_comment: Option<String>,
}
