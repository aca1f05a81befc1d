use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub sitecore_client_id: String,
    pub sitecore_client_secret: String,
    pub sitecore_graphql_endpoint: String,
    pub sitecore_token_url: String,
    pub sitecore_audience: String,
    pub http_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("sitecore_client_id", &self.sitecore_client_id)
            .field("sitecore_client_secret", &"[redacted]")
            .field("sitecore_graphql_endpoint", &self.sitecore_graphql_endpoint)
            .field("sitecore_token_url", &self.sitecore_token_url)
            .field("sitecore_audience", &self.sitecore_audience)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
