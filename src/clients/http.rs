use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("eisaku/", env!("CARGO_PKG_VERSION"));

// Shared across sources and invocations so warm Lambdas reuse connections.
static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|_| Client::new())
});

#[must_use]
pub fn shared_client() -> Client {
    HTTP_CLIENT.clone()
}
