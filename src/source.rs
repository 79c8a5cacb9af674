mod checker_config;
mod fetch_error;
mod robots_txt_source;

pub use checker_config::CheckerConfig;
pub use fetch_error::FetchError;
pub use robots_txt_source::RobotsTxtSource;
