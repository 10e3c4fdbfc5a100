mod common;
pub use self::common::{
    GameQuery, InjuryQuery, Paginated, Pagination, PlayerQuery, Query, SeasonQuery,
    SeasonStatsQuery, SortOrder, StatsQuery, TeamQuery,
};

mod params;
pub use self::params::{ParamValue, QueryParams, Scalar};

pub mod nba;
pub mod nfl;
pub mod mlb;
pub mod epl;
