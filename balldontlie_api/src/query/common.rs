//! Shared query infrastructure: the [`Query`] trait, cursor [`Pagination`], and
//! the parameter objects reused across sports.

use std::fmt;

use chrono::NaiveDate;
use url::Url;

use super::params::QueryParams;

/// Trait implemented by all query builders.
pub trait Query {
    /// Converts this query into its ordered parameter list.
    fn to_params(&self) -> QueryParams;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        self.to_params().add_to_url(url)
    }
}

/// Builder methods for list endpoints that page with a cursor.
pub trait Paginated: Query {
    /// Returns a mutable reference to the pagination fields.
    fn pagination_mut(&mut self) -> &mut Pagination;

    /// Continues from a `meta.next_cursor` returned by a previous page.
    fn with_cursor(mut self, cursor: u64) -> Self
    where
        Self: Sized,
    {
        self.pagination_mut().cursor = Some(cursor);
        self
    }

    /// Sets the number of results per page.
    fn with_per_page(mut self, per_page: u32) -> Self
    where
        Self: Sized,
    {
        self.pagination_mut().per_page = Some(per_page);
        self
    }
}

/// Cursor pagination fields. Both are omitted when unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    pub cursor: Option<u64>,
    pub per_page: Option<u32>,
}

impl Pagination {
    /// Appends `cursor` and `per_page` when set.
    pub fn add_to_params(&self, params: &mut QueryParams) {
        params
            .push_opt("cursor", self.cursor)
            .push_opt("per_page", self.per_page);
    }
}

/// Sort order for season stat listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

/// Filters for team listings. NBA and NFL use `conference`, MLB uses `league`.
#[derive(Clone, Debug, Default)]
pub struct TeamQuery {
    pub division: Option<String>,
    pub conference: Option<String>,
    pub league: Option<String>,
}

impl Query for TeamQuery {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("division", self.division.as_deref())
            .push_opt("conference", self.conference.as_deref())
            .push_opt("league", self.league.as_deref());
        params
    }
}

impl TeamQuery {
    pub fn with_division(mut self, division: &str) -> Self {
        self.division = Some(division.to_string());
        self
    }
    pub fn with_conference(mut self, conference: &str) -> Self {
        self.conference = Some(conference.to_string());
        self
    }
    pub fn with_league(mut self, league: &str) -> Self {
        self.league = Some(league.to_string());
        self
    }
}

/// Filters for player listings (`/players` and `/players/active`).
#[derive(Clone, Debug, Default)]
pub struct PlayerQuery {
    pub pagination: Pagination,
    pub team_ids: Vec<i64>,
    pub player_ids: Vec<i64>,
    pub search: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Only honoured by the EPL endpoint, where it is required.
    pub season: Option<i32>,
}

impl Query for PlayerQuery {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.pagination.add_to_params(&mut params);
        params
            .push_list("team_ids", self.team_ids.iter().copied())
            .push_list("player_ids", self.player_ids.iter().copied())
            .push_opt("search", self.search.as_deref())
            .push_opt("first_name", self.first_name.as_deref())
            .push_opt("last_name", self.last_name.as_deref())
            .push_opt("season", self.season);
        params
    }
}

impl Paginated for PlayerQuery {
    fn pagination_mut(&mut self) -> &mut Pagination {
        &mut self.pagination
    }
}

impl PlayerQuery {
    pub fn with_team_id(mut self, team_id: i64) -> Self {
        self.team_ids.push(team_id);
        self
    }
    pub fn with_team_ids(mut self, team_ids: &[i64]) -> Self {
        self.team_ids.extend_from_slice(team_ids);
        self
    }
    pub fn with_player_id(mut self, player_id: i64) -> Self {
        self.player_ids.push(player_id);
        self
    }
    pub fn with_player_ids(mut self, player_ids: &[i64]) -> Self {
        self.player_ids.extend_from_slice(player_ids);
        self
    }
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
    pub fn with_first_name(mut self, first_name: &str) -> Self {
        self.first_name = Some(first_name.to_string());
        self
    }
    pub fn with_last_name(mut self, last_name: &str) -> Self {
        self.last_name = Some(last_name.to_string());
        self
    }
    pub fn with_season(mut self, season: i32) -> Self {
        self.season = Some(season);
        self
    }
}

/// Filters for game listings. `weeks` is only honoured by the NFL endpoint.
#[derive(Clone, Debug, Default)]
pub struct GameQuery {
    pub pagination: Pagination,
    pub dates: Vec<NaiveDate>,
    pub team_ids: Vec<i64>,
    pub seasons: Vec<i32>,
    pub postseason: Option<bool>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub weeks: Vec<i32>,
}

impl Query for GameQuery {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.pagination.add_to_params(&mut params);
        params
            .push_list("dates", self.dates.iter().copied())
            .push_list("team_ids", self.team_ids.iter().copied())
            .push_list("seasons", self.seasons.iter().copied())
            .push_opt("postseason", self.postseason)
            .push_opt("start_date", self.start_date)
            .push_opt("end_date", self.end_date)
            .push_list("weeks", self.weeks.iter().copied());
        params
    }
}

impl Paginated for GameQuery {
    fn pagination_mut(&mut self) -> &mut Pagination {
        &mut self.pagination
    }
}

impl GameQuery {
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.dates.push(date);
        self
    }
    pub fn with_dates(mut self, dates: &[NaiveDate]) -> Self {
        self.dates.extend_from_slice(dates);
        self
    }
    pub fn with_team_id(mut self, team_id: i64) -> Self {
        self.team_ids.push(team_id);
        self
    }
    pub fn with_team_ids(mut self, team_ids: &[i64]) -> Self {
        self.team_ids.extend_from_slice(team_ids);
        self
    }
    pub fn with_season(mut self, season: i32) -> Self {
        self.seasons.push(season);
        self
    }
    pub fn with_seasons(mut self, seasons: &[i32]) -> Self {
        self.seasons.extend_from_slice(seasons);
        self
    }
    pub fn with_postseason(mut self, postseason: bool) -> Self {
        self.postseason = Some(postseason);
        self
    }
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }
    pub fn with_week(mut self, week: i32) -> Self {
        self.weeks.push(week);
        self
    }
    pub fn with_weeks(mut self, weeks: &[i32]) -> Self {
        self.weeks.extend_from_slice(weeks);
        self
    }
}

/// Filters for per-game player stat listings.
#[derive(Clone, Debug, Default)]
pub struct StatsQuery {
    pub pagination: Pagination,
    pub player_ids: Vec<i64>,
    pub game_ids: Vec<i64>,
    pub dates: Vec<NaiveDate>,
    pub seasons: Vec<i32>,
    pub postseason: Option<bool>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Query for StatsQuery {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.pagination.add_to_params(&mut params);
        params
            .push_list("player_ids", self.player_ids.iter().copied())
            .push_list("game_ids", self.game_ids.iter().copied())
            .push_list("dates", self.dates.iter().copied())
            .push_list("seasons", self.seasons.iter().copied())
            .push_opt("postseason", self.postseason)
            .push_opt("start_date", self.start_date)
            .push_opt("end_date", self.end_date);
        params
    }
}

impl Paginated for StatsQuery {
    fn pagination_mut(&mut self) -> &mut Pagination {
        &mut self.pagination
    }
}

impl StatsQuery {
    pub fn with_player_id(mut self, player_id: i64) -> Self {
        self.player_ids.push(player_id);
        self
    }
    pub fn with_player_ids(mut self, player_ids: &[i64]) -> Self {
        self.player_ids.extend_from_slice(player_ids);
        self
    }
    pub fn with_game_id(mut self, game_id: i64) -> Self {
        self.game_ids.push(game_id);
        self
    }
    pub fn with_game_ids(mut self, game_ids: &[i64]) -> Self {
        self.game_ids.extend_from_slice(game_ids);
        self
    }
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.dates.push(date);
        self
    }
    pub fn with_season(mut self, season: i32) -> Self {
        self.seasons.push(season);
        self
    }
    pub fn with_seasons(mut self, seasons: &[i32]) -> Self {
        self.seasons.extend_from_slice(seasons);
        self
    }
    pub fn with_postseason(mut self, postseason: bool) -> Self {
        self.postseason = Some(postseason);
        self
    }
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }
}

/// Filters for injury report listings.
#[derive(Clone, Debug, Default)]
pub struct InjuryQuery {
    pub pagination: Pagination,
    pub team_ids: Vec<i64>,
    pub player_ids: Vec<i64>,
}

impl Query for InjuryQuery {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.pagination.add_to_params(&mut params);
        params
            .push_list("team_ids", self.team_ids.iter().copied())
            .push_list("player_ids", self.player_ids.iter().copied());
        params
    }
}

impl Paginated for InjuryQuery {
    fn pagination_mut(&mut self) -> &mut Pagination {
        &mut self.pagination
    }
}

impl InjuryQuery {
    pub fn with_team_id(mut self, team_id: i64) -> Self {
        self.team_ids.push(team_id);
        self
    }
    pub fn with_player_id(mut self, player_id: i64) -> Self {
        self.player_ids.push(player_id);
        self
    }
}

/// Season-long player totals (NFL and MLB `/season_stats`).
#[derive(Clone, Debug)]
pub struct SeasonStatsQuery {
    pub season: i32,
    pub player_ids: Vec<i64>,
    pub team_id: Option<i64>,
    pub postseason: Option<bool>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl Query for SeasonStatsQuery {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("season", self.season)
            .push_list("player_ids", self.player_ids.iter().copied())
            .push_opt("team_id", self.team_id)
            .push_opt("postseason", self.postseason)
            .push_opt("sort_by", self.sort_by.as_deref())
            .push_opt("sort_order", self.sort_order.map(|o| o.to_string()));
        params
    }
}

impl SeasonStatsQuery {
    pub fn new(season: i32) -> Self {
        Self {
            season,
            player_ids: Vec::new(),
            team_id: None,
            postseason: None,
            sort_by: None,
            sort_order: None,
        }
    }
    pub fn with_player_id(mut self, player_id: i64) -> Self {
        self.player_ids.push(player_id);
        self
    }
    pub fn with_team_id(mut self, team_id: i64) -> Self {
        self.team_id = Some(team_id);
        self
    }
    pub fn with_postseason(mut self, postseason: bool) -> Self {
        self.postseason = Some(postseason);
        self
    }
    pub fn with_sort(mut self, sort_by: &str, sort_order: SortOrder) -> Self {
        self.sort_by = Some(sort_by.to_string());
        self.sort_order = Some(sort_order);
        self
    }
}

/// A query carrying only a required `season`.
#[derive(Clone, Copy, Debug)]
pub struct SeasonQuery {
    pub season: i32,
}

impl SeasonQuery {
    pub fn new(season: i32) -> Self {
        Self { season }
    }
}

impl Query for SeasonQuery {
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.push("season", self.season);
        params
    }
}
