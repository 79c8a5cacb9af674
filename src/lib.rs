//! Parsing and querying of robots.txt exclusion rules.
//!
//! ```
//! use robots_checker::RobotsData;
//!
//! let robots = RobotsData::from_string("User-agent: *\nDisallow: /admin").unwrap();
//! assert!(!robots.is_allowed("my-bot", "/admin/users"));
//! assert!(robots.is_allowed("my-bot", "/blog"));
//! ```

pub mod robots;
pub mod source;

pub use robots::*;
pub use source::*;
