use crate::client::Client;
use crate::config::{ClientConfig, ConfigError};
use crate::sports::{EplClient, MlbClient, NbaClient, NflClient};

/// Entry point bundling the per-sport clients.
///
/// All four share one [`Client`], so they share its configuration and
/// connection pool.
///
/// ```no_run
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// use balldontlie_api::{BalldontlieApi, ClientConfig, PlayerQuery};
///
/// let api = BalldontlieApi::new(ClientConfig::from_key("your-api-key")?)?;
/// let players = api
///     .nba
///     .get_players(&PlayerQuery::default().with_search("lebron"))
///     .await?;
/// println!("{} players", players.data.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct BalldontlieApi {
    pub nba: NbaClient,
    pub nfl: NflClient,
    pub mlb: MlbClient,
    pub epl: EplClient,
}

impl BalldontlieApi {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_client(Client::new(config)?))
    }

    pub fn with_client(client: Client) -> Self {
        Self {
            nba: NbaClient::new(client.clone()),
            nfl: NflClient::new(client.clone()),
            mlb: MlbClient::new(client.clone()),
            epl: EplClient::new(client),
        }
    }
}
