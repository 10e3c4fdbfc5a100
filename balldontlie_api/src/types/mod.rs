mod meta;
pub use self::meta::{ApiResponse, Meta};

mod nba;
pub use self::nba::{
    NbaAdvancedStats, NbaBoxScore, NbaBoxScorePlayer, NbaGame, NbaLeader, NbaLeaderStat,
    NbaOdds, NbaPlayer, NbaPlayerInjury, NbaSeasonAverages, NbaStandings, NbaStats, NbaTeam,
};

mod nfl;
pub use self::nfl::{
    NflAdvancedPassingStats, NflAdvancedReceivingStats, NflAdvancedRushingStats, NflGame,
    NflPlayer, NflPlayerInjury, NflSeasonStats, NflStandings, NflStats, NflTeam,
};

mod mlb;
pub use self::mlb::{
    MlbGame, MlbGameTeamData, MlbPlayer, MlbPlayerInjury, MlbSeasonStats, MlbStandings,
    MlbStats, MlbTeam, MlbTeamSeasonStats,
};

mod epl;
pub use self::epl::{
    EplGame, EplGameGoal, EplGameLineup, EplGamePlayerStats, EplGameTeamStats, EplNamedStat,
    EplPlayer, EplPlayerSeasonStat, EplPlayerStatLeader, EplPlayerStatLine, EplStanding,
    EplTeam, EplTeamSeasonStat, EplTeamStatLeader, EplTeamStatLine,
};
