use clap::{Parser, Subcommand};

use release_lens::config::db_path;
use release_lens::release::api::SentryApi;
use release_lens::release::resolver::{Resolution, apply_settings, resolve_latest};
use release_lens::settings::store::SettingsStore;
use release_lens::settings::update::update_channel;

#[derive(Parser)]
#[command(name = "release-lens")]
#[command(version, about = "Release dashboard filtering and latest-release lookup")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the latest official release for a dashboard page
    Resolve {
        /// URL of the releases page, including the project query parameter
        page_url: String,
    },
    /// Resolve and persist the latest-release value
    Apply {
        /// URL of the releases page, including the project query parameter
        page_url: String,
        /// Use this value instead of resolving it
        #[arg(long)]
        latest: Option<String>,
        /// Persist the filter-latest toggle as enabled
        #[arg(long)]
        filter_latest: bool,
    },
    /// Read or write one persisted setting
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print a setting value
    Get { key: String },
    /// Write a setting value
    Set { key: String, value: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = release_lens::logging::init()?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let store = SettingsStore::new(&db_path())?;

    match cli.command {
        Command::Resolve { page_url } => {
            let api = SentryApi::default();
            let resolution = resolve_latest(&api, &store, &page_url).await?;
            println!("{}", render(resolution));
        }
        Command::Apply {
            page_url,
            latest,
            filter_latest,
        } => {
            let latest = match latest {
                Some(value) => value,
                None => {
                    let api = SentryApi::default();
                    match resolve_latest(&api, &store, &page_url).await? {
                        Resolution::Latest(value) => value,
                        other => {
                            println!("{}", render(other));
                            return Ok(());
                        }
                    }
                }
            };

            let (updates, _rx) = update_channel();
            apply_settings(&store, &updates, Some(latest.clone()), filter_latest)?;
            println!("Saved latest release {latest}");
        }
        Command::Config { action } => match action {
            ConfigAction::Get { key } => match store.get_raw(&key)? {
                Some(value) => println!("{value}"),
                None => println!("(unset)"),
            },
            ConfigAction::Set { key, value } => {
                store.set_raw(&key, &value)?;
                println!("Saved {key}");
            }
        },
    }

    Ok(())
}

fn render(resolution: Resolution) -> String {
    match resolution {
        Resolution::Latest(version) => version,
        Resolution::NoOfficialRelease => "No official releases found.".to_string(),
        Resolution::FetchFailed => "Failed to fetch releases.".to_string(),
    }
}
