use std::fmt;
use std::str::FromStr;

use super::common::{Paginated, Pagination, Query};
use super::params::QueryParams;

/// Filters for EPL fixtures.
#[derive(Clone, Copy, Debug, Default)]
pub struct EplGameQuery {
    pub pagination: Pagination,
    pub season: Option<i32>,
    pub team_id: Option<i64>,
    pub week: Option<i32>,
}

impl Query for EplGameQuery {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.pagination.add_to_params(&mut params);
        params
            .push_opt("season", self.season)
            .push_opt("team_id", self.team_id)
            .push_opt("week", self.week);
        params
    }
}

impl Paginated for EplGameQuery {
    fn pagination_mut(&mut self) -> &mut Pagination {
        &mut self.pagination
    }
}

impl EplGameQuery {
    pub fn with_season(mut self, season: i32) -> Self {
        self.season = Some(season);
        self
    }
    pub fn with_team_id(mut self, team_id: i64) -> Self {
        self.team_id = Some(team_id);
        self
    }
    pub fn with_week(mut self, week: i32) -> Self {
        self.week = Some(week);
        self
    }
}

/// Stat categories ranked by the player leaders endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerStatType {
    Goals,
    GoalAssist,
    Appearances,
    MinsPlayed,
    CleanSheet,
    Saves,
    TotalPass,
    Touches,
    TotalScoringAtt,
    YellowCard,
    RedCard,
}

impl fmt::Display for PlayerStatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlayerStatType::Goals => "goals",
            PlayerStatType::GoalAssist => "goal_assist",
            PlayerStatType::Appearances => "appearances",
            PlayerStatType::MinsPlayed => "mins_played",
            PlayerStatType::CleanSheet => "clean_sheet",
            PlayerStatType::Saves => "saves",
            PlayerStatType::TotalPass => "total_pass",
            PlayerStatType::Touches => "touches",
            PlayerStatType::TotalScoringAtt => "total_scoring_att",
            PlayerStatType::YellowCard => "yellow_card",
            PlayerStatType::RedCard => "red_card",
        })
    }
}

impl FromStr for PlayerStatType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "goals" => Ok(PlayerStatType::Goals),
            "goal_assist" => Ok(PlayerStatType::GoalAssist),
            "appearances" => Ok(PlayerStatType::Appearances),
            "mins_played" => Ok(PlayerStatType::MinsPlayed),
            "clean_sheet" => Ok(PlayerStatType::CleanSheet),
            "saves" => Ok(PlayerStatType::Saves),
            "total_pass" => Ok(PlayerStatType::TotalPass),
            "touches" => Ok(PlayerStatType::Touches),
            "total_scoring_att" => Ok(PlayerStatType::TotalScoringAtt),
            "yellow_card" => Ok(PlayerStatType::YellowCard),
            "red_card" => Ok(PlayerStatType::RedCard),
            _ => Err(()),
        }
    }
}

/// Stat categories ranked by the team leaders endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeamStatType {
    Goals,
    GoalsConceded,
    CleanSheet,
    Wins,
    Losses,
    TotalPass,
    TotalScoringAtt,
    TotalYelCard,
    TotalRedCard,
}

impl fmt::Display for TeamStatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TeamStatType::Goals => "goals",
            TeamStatType::GoalsConceded => "goals_conceded",
            TeamStatType::CleanSheet => "clean_sheet",
            TeamStatType::Wins => "wins",
            TeamStatType::Losses => "losses",
            TeamStatType::TotalPass => "total_pass",
            TeamStatType::TotalScoringAtt => "total_scoring_att",
            TeamStatType::TotalYelCard => "total_yel_card",
            TeamStatType::TotalRedCard => "total_red_card",
        })
    }
}

impl FromStr for TeamStatType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "goals" => Ok(TeamStatType::Goals),
            "goals_conceded" => Ok(TeamStatType::GoalsConceded),
            "clean_sheet" => Ok(TeamStatType::CleanSheet),
            "wins" => Ok(TeamStatType::Wins),
            "losses" => Ok(TeamStatType::Losses),
            "total_pass" => Ok(TeamStatType::TotalPass),
            "total_scoring_att" => Ok(TeamStatType::TotalScoringAtt),
            "total_yel_card" => Ok(TeamStatType::TotalYelCard),
            "total_red_card" => Ok(TeamStatType::TotalRedCard),
            _ => Err(()),
        }
    }
}

/// Stat leaders for a season, ranked by `stat_type` (sent as `type`).
#[derive(Clone, Copy, Debug)]
pub struct EplLeadersQuery<S> {
    pub pagination: Pagination,
    pub season: i32,
    pub stat_type: S,
}

impl<S> EplLeadersQuery<S> {
    pub fn new(season: i32, stat_type: S) -> Self {
        Self {
            pagination: Pagination::default(),
            season,
            stat_type,
        }
    }
}

impl<S: fmt::Display> Query for EplLeadersQuery<S> {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.pagination.add_to_params(&mut params);
        params
            .push("season", self.season)
            .push("type", self.stat_type.to_string());
        params
    }
}

impl<S: fmt::Display> Paginated for EplLeadersQuery<S> {
    fn pagination_mut(&mut self) -> &mut Pagination {
        &mut self.pagination
    }
}
