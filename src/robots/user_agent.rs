use crate::robots::rule::Rule;

/// The rules and crawl-delay declared for one user-agent token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgent {
    name: String,
    crawl_delay: Option<u64>,
    rules: Vec<Rule>,
}

impl UserAgent {
    pub fn new(name: impl Into<String>, crawl_delay: Option<u64>, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            crawl_delay,
            rules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Crawl-delay in seconds, `None` when the group declared none.
    pub fn crawl_delay(&self) -> Option<u64> {
        self.crawl_delay
    }

    /// Rules in the order they appeared in the document.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}
