use log::debug;
use postgres::{Client, Config, NoTls};

use crate::config::DbConfig;
use crate::Error;

/// Database connection manager
pub struct DbConnection;

impl DbConnection {
    /// Open a blocking client from resolved configuration.
    ///
    /// The configured timeout bounds the TCP connect, and is also installed
    /// as the session's `statement_timeout` so a wedged query fails the
    /// refresh cycle instead of hanging it. The client releases the
    /// connection when dropped, on every exit path.
    pub fn connect(config: &DbConfig) -> Result<Client, Error> {
        let statement_timeout_ms = config.connect_timeout.as_millis();
        let client = Config::new()
            .host(&config.host)
            .port(config.port)
            .dbname(&config.database)
            .user(&config.user)
            .password(&config.password)
            .connect_timeout(config.connect_timeout)
            .options(&format!("-c statement_timeout={}", statement_timeout_ms))
            .application_name("orderlens")
            .connect(NoTls)
            .map_err(|source| Error::Connection { source })?;

        debug!(
            "connected to {}:{}/{} as {}",
            config.host, config.port, config.database, config.user
        );
        Ok(client)
    }
}
