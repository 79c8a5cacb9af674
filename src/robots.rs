mod directive;
mod robots_data;
mod robots_data_builder;
mod robots_error;
mod rule;
mod user_agent;

pub use directive::{DirectiveKind, classify_line};
pub use robots_data::RobotsData;
pub use robots_data_builder::RobotsDataBuilder;
pub use robots_error::RobotsError;
pub use rule::Rule;
pub use user_agent::UserAgent;
