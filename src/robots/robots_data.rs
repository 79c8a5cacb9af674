use crate::robots::robots_data_builder::RobotsDataBuilder;
use crate::robots::robots_error::RobotsError;
use crate::robots::rule::Rule;
use crate::robots::user_agent::UserAgent;
use std::collections::HashMap;
use std::io::BufRead;
use std::str::FromStr;

const WILDCARD_USER_AGENT: &str = "*";

/// A parsed robots.txt document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RobotsData {
    sitemaps: Vec<String>,
    user_agents: HashMap<String, UserAgent>,
}

impl RobotsData {
    pub fn new(sitemaps: Vec<String>, user_agents: HashMap<String, UserAgent>) -> Self {
        Self {
            sitemaps,
            user_agents,
        }
    }

    /// Parses robots.txt from a line-oriented reader. The caller keeps ownership of the reader.
    ///
    /// Each line is decoded lossily, so only a failing read is an `Io` error.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, RobotsError> {
        let mut builder = RobotsDataBuilder::new();
        let mut line = Vec::new();
        while reader.read_until(b'\n', &mut line)? > 0 {
            builder.push_line(&String::from_utf8_lossy(&line))?;
            line.clear();
        }
        Ok(builder.finish())
    }

    pub fn from_string(text: &str) -> Result<Self, RobotsError> {
        Self::from_reader(text.as_bytes())
    }

    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RobotsError> {
        Self::from_reader(bytes)
    }

    /// Parses the body of an HTTP response. The status code is not inspected.
    pub async fn from_response(response: reqwest::Response) -> Result<Self, crate::FetchError> {
        let body = response.bytes().await?;
        Ok(Self::from_bytes(&body)?)
    }

    pub fn sitemaps(&self) -> &[String] {
        &self.sitemaps
    }

    pub fn user_agents(&self) -> &HashMap<String, UserAgent> {
        &self.user_agents
    }

    /// Exact-name lookup; the `*` group is not used as a fallback here.
    pub fn user_agent(&self, name: &str) -> Result<&UserAgent, RobotsError> {
        self.user_agents
            .get(name)
            .ok_or_else(|| RobotsError::NoSuchUserAgent(name.to_owned()))
    }

    pub fn crawl_delay(&self, name: &str) -> Result<Option<u64>, RobotsError> {
        self.user_agent(name).map(UserAgent::crawl_delay)
    }

    /// The first rule, in document order, whose path prefixes `path` decides.
    /// Without a matching rule the path is allowed.
    pub fn is_allowed(&self, name: &str, path: &str) -> bool {
        self.applicable_rules(name)
            .iter()
            .find(|rule| rule.matches(path))
            .map(Rule::is_allow)
            .unwrap_or(true)
    }

    fn applicable_rules(&self, name: &str) -> &[Rule] {
        self.user_agents
            .get(name)
            .or_else(|| self.user_agents.get(WILDCARD_USER_AGENT))
            .map(UserAgent::rules)
            .unwrap_or(&[])
    }
}

impl FromStr for RobotsData {
    type Err = RobotsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROBOTS_TXT: &str = "User-agent: *\nCrawl-delay: 5\nDisallow: /search/advanced\nAllow: /search/about\n\nSitemap: https://example.com/sitemap.xml";

    #[test]
    fn parses_wildcard_group_and_sitemap() {
        let robots = RobotsData::from_string(ROBOTS_TXT).unwrap();

        let expected = RobotsData::new(
            vec!["https://example.com/sitemap.xml".to_owned()],
            HashMap::from([(
                "*".to_owned(),
                UserAgent::new(
                    "*",
                    Some(5),
                    vec![
                        Rule::disallow("/search/advanced"),
                        Rule::allow("/search/about"),
                    ],
                ),
            )]),
        );
        assert_eq!(robots, expected);
    }

    #[test]
    fn crawl_delay_lookup() {
        let robots: RobotsData = "User-agent: *\nCrawl-delay: 5\nUser-agent: quiet\nDisallow: /"
            .parse()
            .unwrap();

        assert_eq!(robots.crawl_delay("*").unwrap(), Some(5));
        assert_eq!(robots.crawl_delay("quiet").unwrap(), None);
        assert!(matches!(
            robots.crawl_delay("unknown"),
            Err(RobotsError::NoSuchUserAgent(name)) if name == "unknown"
        ));
    }

    #[test]
    fn first_matching_rule_wins_over_more_specific_one() {
        let robots =
            RobotsData::from_string("User-agent: *\nDisallow: /admin\nAllow: /admin/edit").unwrap();

        assert!(!robots.is_allowed("*", "/admin/edit"));
        assert!(!robots.is_allowed("*", "/admin"));
        assert!(robots.is_allowed("*", "/adm"));
    }

    #[test]
    fn unknown_agent_falls_back_to_wildcard() {
        let robots =
            RobotsData::from_string("User-agent: *\nDisallow: /private\nUser-agent: bot\nAllow: /")
                .unwrap();

        assert!(!robots.is_allowed("crawler", "/private/page"));
        assert!(robots.is_allowed("bot", "/private/page"));
    }

    #[test]
    fn unknown_agent_without_wildcard_is_allowed_everywhere() {
        let robots = RobotsData::from_string("User-agent: bot\nDisallow: /").unwrap();

        assert!(robots.is_allowed("crawler", "/"));
        assert!(robots.is_allowed("crawler", "/anything"));
    }

    #[test]
    fn empty_disallow_blocks_everything() {
        let robots = RobotsData::from_string("User-agent: *\nDisallow:").unwrap();
        assert!(!robots.is_allowed("*", "/"));
    }

    #[test]
    fn failed_lookup_leaves_model_unchanged() {
        let robots = RobotsData::from_string(ROBOTS_TXT).unwrap();
        let before = robots.clone();

        assert!(matches!(
            robots.user_agent("missing"),
            Err(RobotsError::NoSuchUserAgent(_))
        ));
        assert_eq!(robots, before);
    }

    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("connection reset"))
        }
    }

    #[test]
    fn invalid_utf8_in_reader_matches_bytes() {
        let bytes: &[u8] = b"# Caf\xe9 rules\nUser-agent: *\nDisallow: /private\n";

        let from_reader = RobotsData::from_reader(std::io::BufReader::new(bytes)).unwrap();
        let from_bytes = RobotsData::from_bytes(bytes).unwrap();

        assert_eq!(from_reader, from_bytes);
        assert!(!from_reader.is_allowed("*", "/private"));
    }

    #[test]
    fn read_failure_is_an_io_error() {
        let result = RobotsData::from_reader(std::io::BufReader::new(FailingReader));
        assert!(matches!(result, Err(RobotsError::Io(_))));
    }

    #[test]
    fn invalid_utf8_in_bytes_is_replaced() {
        let robots = RobotsData::from_bytes(b"User-agent: *\nDisallow: /\xff\n").unwrap();
        assert_eq!(robots.user_agent("*").unwrap().rules(), [Rule::disallow("/\u{fffd}")]);
    }

    #[test]
    fn windows_line_endings_are_trimmed() {
        let robots = RobotsData::from_string("User-agent: bot\r\nDisallow: /x\r\n").unwrap();
        assert_eq!(robots.user_agent("bot").unwrap().rules(), [Rule::disallow("/x")]);
    }
}
