use std::time::Duration;

pub const DEFAULT_AGENT: &str = "robots-check";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct CheckerConfig {
    agent: String,
    timeout: Duration,
}

impl CheckerConfig {
    pub fn new(agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            agent: agent.into(),
            timeout,
        }
    }

    /// Sent as the `User-Agent` header and used to select rules.
    pub fn agent(&self) -> &str {
        &self.agent
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig::new(DEFAULT_AGENT, DEFAULT_TIMEOUT)
    }
}
