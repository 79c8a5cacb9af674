use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use robots_checker::RobotsData;
use std::io::{Stdout, Write, stdout};

pub struct ConsoleReport {
    stdout: Stdout,
    agent: String,
    paths: Vec<String>,
}

impl ConsoleReport {
    pub fn new(agent: &str, paths: Vec<String>) -> Self {
        Self {
            stdout: stdout(),
            agent: agent.to_owned(),
            paths,
        }
    }

    pub fn print_robots(&self, source: &str, robots: &RobotsData) -> anyhow::Result<()> {
        // Crawl-delay follows the same exact-then-wildcard selection as the rules.
        let crawl_delay = robots
            .crawl_delay(&self.agent)
            .or_else(|_| robots.crawl_delay("*"))
            .ok()
            .flatten();
        let crawl_delay_str = match crawl_delay {
            Some(seconds) => format!("{seconds}s"),
            None => "none".to_owned(),
        };

        let mut stdout = &self.stdout;
        queue!(
            stdout,
            SetForegroundColor(Color::Cyan),
            Print(format!("{source}\n")),
            ResetColor,
            Print(format!("   Agent: {}, Crawl-delay: {crawl_delay_str}\n", self.agent)),
        )?;
        for sitemap in robots.sitemaps() {
            queue!(stdout, Print(format!("   Sitemap: {sitemap}\n")))?;
        }

        for path in &self.paths {
            let (color, verdict) = if robots.is_allowed(&self.agent, path) {
                (Color::Green, "allowed")
            } else {
                (Color::Red, "disallowed")
            };
            queue!(
                stdout,
                Print(format!("   {path} ")),
                SetForegroundColor(color),
                Print(verdict),
                ResetColor,
                Print("\n"),
            )?;
        }
        stdout.flush()?;
        Ok(())
    }

    pub fn print_error(&self, source: &str, error: &anyhow::Error) -> anyhow::Result<()> {
        let mut stdout = &self.stdout;
        queue!(
            stdout,
            SetForegroundColor(Color::Cyan),
            Print(format!("{source}\n")),
            SetForegroundColor(Color::Red),
            Print(format!("   Error: {error:#}\n")),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }
}
