//! Per-sport endpoint groups. Each wraps a clone of the shared [`crate::Client`].

mod epl;
mod mlb;
mod nba;
mod nfl;

pub use self::epl::EplClient;
pub use self::mlb::MlbClient;
pub use self::nba::NbaClient;
pub use self::nfl::NflClient;
