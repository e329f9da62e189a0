use redis::aio::ConnectionManager;
use redis::Client;

/// Connect to the key/value cache store. The manager reconnects on its own,
/// so one instance is shared through the app state for the process lifetime.
pub async fn connect(cache_url: &str) -> Result<ConnectionManager, redis::RedisError> {
    let client = Client::open(cache_url)?;
    client.get_connection_manager().await
}
