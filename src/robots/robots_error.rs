#[derive(Debug, thiserror::Error)]
pub enum RobotsError {
    #[error("missing user agent")]
    MissingUserAgent,

    #[error("no such user agent: {0}")]
    NoSuchUserAgent(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
