use std::time::Duration;

use folio_config::DatabaseConfig;
use folio_persistence_postgres::{PostgresDatabase, PostgresDatabaseConfig};

pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<PostgresDatabase> {
    PostgresDatabase::connect(&PostgresDatabaseConfig {
        url: config.url.clone(),
        max_connections: config.max_connections,
        min_connections: config.min_connections,
        acquire_timeout: Duration::from_secs(config.acquire_timeout_secs),
        idle_timeout: config.idle_timeout_secs.map(Duration::from_secs),
        max_lifetime: config.max_lifetime_secs.map(Duration::from_secs),
    })
    .await
}
