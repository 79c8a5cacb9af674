use crate::robots::directive::{DirectiveKind, classify_line};
use crate::robots::robots_data::RobotsData;
use crate::robots::robots_error::RobotsError;
use crate::robots::rule::Rule;
use crate::robots::user_agent::UserAgent;
use std::collections::HashMap;

/// Accumulates classified lines into a `RobotsData`.
///
/// State lives only for the duration of one parse; `finish` freezes it into the read model.
#[derive(Default)]
pub struct RobotsDataBuilder {
    current_user_agent: String,
    rules: HashMap<String, Vec<Rule>>,
    delays: HashMap<String, Option<u64>>,
    sitemaps: Vec<String>,
}

impl RobotsDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: &str) -> Result<(), RobotsError> {
        let (kind, value) = classify_line(line);
        match kind {
            DirectiveKind::UserAgent => {
                self.current_user_agent = value.to_owned();
                self.rules.entry(value.to_owned()).or_default();
                // A re-declared group keeps its rules but forgets its delay.
                self.delays.insert(value.to_owned(), None);
            }
            DirectiveKind::Allow => self.active_rules()?.push(Rule::allow(value)),
            DirectiveKind::Disallow => self.active_rules()?.push(Rule::disallow(value)),
            DirectiveKind::CrawlDelay => {
                let current_user_agent = self.active_user_agent()?.to_owned();
                let delay = value.parse::<u64>().ok();
                if delay.is_none() {
                    tracing::debug!(
                        user_agent = %current_user_agent,
                        value,
                        "ignoring unparsable crawl-delay"
                    );
                }
                self.delays.insert(current_user_agent, delay);
            }
            DirectiveKind::Sitemap => self.sitemaps.push(value.to_owned()),
            DirectiveKind::Unknown => {}
        }
        Ok(())
    }

    pub fn finish(self) -> RobotsData {
        let Self {
            rules,
            mut delays,
            sitemaps,
            ..
        } = self;

        let user_agents = rules
            .into_iter()
            .map(|(name, rules)| {
                let crawl_delay = delays.remove(&name).flatten();
                let user_agent = UserAgent::new(name.clone(), crawl_delay, rules);
                (name, user_agent)
            })
            .collect::<HashMap<String, UserAgent>>();

        tracing::debug!(
            user_agents = user_agents.len(),
            sitemaps = sitemaps.len(),
            "parsed robots.txt"
        );
        RobotsData::new(sitemaps, user_agents)
    }

    fn active_user_agent(&self) -> Result<&str, RobotsError> {
        if self.current_user_agent.is_empty() {
            return Err(RobotsError::MissingUserAgent);
        }
        Ok(self.current_user_agent.as_str())
    }

    fn active_rules(&mut self) -> Result<&mut Vec<Rule>, RobotsError> {
        self.active_user_agent()?;
        Ok(self
            .rules
            .entry(self.current_user_agent.clone())
            .or_default())
    }
}
