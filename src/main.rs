use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use famous_quotes::analytics::HttpAnalyticsTransport;
use famous_quotes::api::{auto_login, ApiClient, ProbeOutcome};
use famous_quotes::config::{Config, API_URL_ENV};
use famous_quotes::logging::init_tracing;
use famous_quotes::util::{contains_swear_word, password_strength};
use famous_quotes::{Action, Store};

#[derive(Debug, Parser)]
#[command(name = "famous-quotes", about = "Developer tools for the famous-quotes client core")]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Ask the backend whether this session is logged in
    Probe,
    /// Score a password
    Password { password: String },
    /// Check text against the profanity filter
    Check { text: String },
    /// Record analytics events and post any batch that becomes due
    Track {
        #[arg(required = true)]
        labels: Vec<String>,
        /// Flush the buffer after the last label
        #[arg(long)]
        commit: bool,
    },
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    Config::resolve(&path, std::env::var(API_URL_ENV).ok(), cli.api_url.clone())
        .with_context(|| format!("loading {}", path.display()))
}

/// Dispatch one analytics event per label, forcing a flush on the last one
/// when `commit` is set. Returns the number of events left buffered.
fn track(store: &Store, labels: &[String], commit: bool) -> usize {
    let last = labels.len().saturating_sub(1);
    for (i, label) in labels.iter().enumerate() {
        let action = if commit && i == last {
            Action::analytic_commit(label.clone())
        } else {
            Action::analytic(label.clone())
        };
        store.dispatch(action);
    }
    store.with(|state| state.analytics.len())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Command::Probe => {
            let config = load_config(&cli)?;
            let client = ApiClient::new(&config.api)?;
            let store = Store::connected(&config, HttpAnalyticsTransport::new(client.clone()));
            match auto_login(&store, &client).await {
                ProbeOutcome::LoggedIn(user) => {
                    println!("logged in as user {} ({})", user.id, user.email);
                }
                ProbeOutcome::Anonymous | ProbeOutcome::Skipped => println!("anonymous"),
            }
        }
        Command::Track { labels, commit } => {
            let config = load_config(&cli)?;
            let transport = HttpAnalyticsTransport::new(ApiClient::new(&config.api)?);
            let store = Store::connected(&config, transport.clone());
            let buffered = track(&store, labels, *commit);
            transport.wait_idle().await;
            println!("recorded {} event(s), {buffered} still buffered", labels.len());
        }
        Command::Password { password } => {
            let result = password_strength(password);
            for check in &result.checks {
                let mark = if check.passed { "x" } else { " " };
                println!("[{mark}] {}", check.name);
            }
            println!("strength: {:.2}", result.strength);
        }
        Command::Check { text } => {
            if contains_swear_word(text) {
                println!("flagged");
            } else {
                println!("clean");
            }
        }
    }

    Ok(())
}
