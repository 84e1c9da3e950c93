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

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Number of posts the sample producer emits per batch.
    pub sample_post_count: usize,
    /// Sample post timestamps fall within `now - sample_max_age_hours`.
    pub sample_max_age_hours: u32,
    /// Length of the engagement timeline in calendar days.
    pub engagement_days: u32,
}
