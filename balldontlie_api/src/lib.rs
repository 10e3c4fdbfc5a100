mod api;
mod client;
mod config;
mod errors;
pub mod query;
pub mod sports;
pub mod types;
pub use self::api::BalldontlieApi;
pub use self::client::{Client, Request, CLIENT_HEADER, CLIENT_ID};
pub use self::config::{ApiKey, ClientConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::{Error, ErrorKind, NETWORK_ERROR_STATUS};
pub use self::query::{
    GameQuery, InjuryQuery, Paginated, Pagination, PlayerQuery, Query, QueryParams,
    SeasonQuery, SeasonStatsQuery, SortOrder, StatsQuery, TeamQuery,
};
