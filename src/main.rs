use crate::console::ConsoleReport;
use anyhow::Context;
use clap::Parser;
use futures::future::join_all;
use robots_checker::{CheckerConfig, RobotsData, RobotsTxtSource};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tokio::task::JoinHandle;
use url::Url;

mod console;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CommandLineArgs {
    /// Site URLs whose robots.txt should be fetched
    #[arg(long, value_name = "URL")]
    url: Vec<String>,

    /// Local robots.txt files to check
    #[arg(long, value_name = "PATH")]
    file: Vec<PathBuf>,

    /// User-agent to check rules for
    #[arg(long, default_value = "robots-check")]
    agent: String,

    /// Paths to check against the rules
    #[arg(long, default_value = "/")]
    path: Vec<String>,

    /// Timeout for fetching robots.txt (seconds)
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}

struct SourceOutcome {
    source: String,
    robots: anyhow::Result<RobotsData>,
}

async fn load_urls(urls: &[String], config: &CheckerConfig) -> Vec<SourceOutcome> {
    let handles = urls
        .iter()
        .cloned()
        .map(|url_str| {
            let config = config.clone();
            tokio::task::spawn(async move {
                let robots = async {
                    let url = Url::parse(&url_str)?;
                    let source = RobotsTxtSource::load_from_url(&url, &config).await?;
                    Ok::<RobotsData, anyhow::Error>(source.parse()?)
                }
                .await;
                SourceOutcome {
                    source: url_str,
                    robots,
                }
            })
        })
        .collect::<Vec<JoinHandle<SourceOutcome>>>();

    join_all(handles)
        .await
        .into_iter()
        .zip(urls)
        .map(|(task_result, url_str)| {
            task_result.unwrap_or_else(|e| SourceOutcome {
                source: url_str.clone(),
                robots: Err(anyhow::anyhow!("Task failed: {e}")),
            })
        })
        .collect()
}

fn load_file(path: &PathBuf) -> SourceOutcome {
    let robots = File::open(path)
        .with_context(|| format!("Unable to open {}", path.display()))
        .and_then(|file| Ok(RobotsData::from_reader(BufReader::new(file))?));
    SourceOutcome {
        source: path.display().to_string(),
        robots,
    }
}

async fn main_impl(args: &CommandLineArgs) -> anyhow::Result<()> {
    if args.url.is_empty() && args.file.is_empty() {
        return Err(anyhow::anyhow!("Nothing to check, pass --url or --file"));
    }

    let config = CheckerConfig::new(args.agent.as_str(), Duration::from_secs(args.timeout));

    let mut outcomes = load_urls(&args.url, &config).await;
    outcomes.extend(args.file.iter().map(load_file));

    let report = ConsoleReport::new(config.agent(), args.path.clone());
    let mut num_failures = 0;
    for outcome in &outcomes {
        match &outcome.robots {
            Ok(robots) => report.print_robots(&outcome.source, robots)?,
            Err(e) => {
                tracing::debug!(source = %outcome.source, error = ?e, "source failed");
                num_failures += 1;
                report.print_error(&outcome.source, e)?;
            }
        }
    }

    if num_failures > 0 {
        return Err(anyhow::anyhow!(
            "{num_failures} of {} sources could not be checked",
            outcomes.len()
        ));
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CommandLineArgs::parse();

    if let Err(e) = main_impl(&args).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
