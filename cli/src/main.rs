//! Mosquito CLI - submit kills and check your standing
//!
//! ```bash
//! mosquito submit kill.jpg --username skeeter   # Upload a photo, earn coins
//! mosquito profile --username skeeter           # Balance, rank, recent activity
//! mosquito leaderboard --limit 10               # Top hunters
//! mosquito transactions --username skeeter      # Coin history
//! ```
//!
//! `MOSQUITO_API_URL`, `MOSQUITO_USERNAME` and `MOSQUITO_TIMEOUT_SECS` are
//! read from the environment or a `.env` file.

use clap::{Parser, Subcommand};
use mosquito_cli::report::{leaderboard_lines, profile_lines, transaction_lines};
use mosquito_cli::{load_image, ApiClient, CliError, CliResult, ClientConfig};
use mosquito_core::{FormSnapshot, SubmissionFailure, SubmissionWorkflow};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mosquito")]
#[command(about = "Upload mosquito photos and earn Mosquito Coins", long_about = None)]
struct Cli {
    /// Backend API base URL (overrides MOSQUITO_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a mosquito image
    Submit {
        /// Image file (max 5 MB)
        image: PathBuf,

        /// Hunter name (defaults to MOSQUITO_USERNAME)
        #[arg(short, long)]
        username: Option<String>,

        /// Write the image's data URI preview to this file
        #[arg(long)]
        preview: Option<PathBuf>,
    },

    /// Show a hunter's profile
    Profile {
        #[arg(short, long)]
        username: Option<String>,

        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the leaderboard
    Leaderboard {
        /// Number of rows to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a hunter's transaction history
    Transactions {
        #[arg(short, long)]
        username: Option<String>,

        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = match ClientConfig::from_env() {
        Ok(config) => run(cli.command, config.with_api_url(cli.api_url)).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mosquito_cli=info,mosquito_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(command: Commands, config: ClientConfig) -> CliResult<()> {
    let client = ApiClient::new(&config)?;

    match command {
        Commands::Submit { image, username, preview } => {
            let username = config.username_or(username).unwrap_or_default();
            cmd_submit(client, &image, &username, preview.as_deref()).await
        }

        Commands::Profile { username, json } => {
            let username = config.username_or(username).ok_or(CliError::MissingUsername)?;
            cmd_profile(&client, &username, json).await
        }

        Commands::Leaderboard { limit, json } => cmd_leaderboard(&client, limit, json).await,

        Commands::Transactions { username, json } => {
            let username = config.username_or(username).ok_or(CliError::MissingUsername)?;
            cmd_transactions(&client, &username, json).await
        }
    }
}

async fn cmd_submit(
    client: ApiClient,
    image: &Path,
    username: &str,
    preview: Option<&Path>,
) -> CliResult<()> {
    eprintln!("📄 Loading: {}", image.display());
    let file = load_image(image)?;

    let workflow = SubmissionWorkflow::new(client);
    workflow.subscribe(Box::new(|snapshot: &FormSnapshot| {
        if snapshot.is_submitting {
            eprintln!("📤 Uploading...");
        }
    }));

    workflow
        .select_file(file)
        .map_err(SubmissionFailure::from_kind)?;

    if let Some(out) = preview {
        if let (Some(id), Some(selected)) = (workflow.selection_id(), workflow.selected_file()) {
            let uri = selected.preview_uri();
            tokio::fs::write(out, &uri)
                .await
                .map_err(|source| CliError::WriteFile { path: out.to_path_buf(), source })?;
            workflow.attach_preview(id, uri);
            eprintln!("🖼️  Preview written to: {}", out.display());
        }
    }

    let success = workflow.submit(username).await?;
    println!("✅ {}", success.display_message());

    // Refresh the balance; a failure here does not undo the submission
    match workflow.transport().fetch_profile(username.trim()).await {
        Ok(profile) => eprintln!("💰 Balance: {} coins (rank #{})", profile.balance, profile.rank),
        Err(e) => tracing::warn!("Could not refresh profile: {}", e),
    }

    Ok(())
}

async fn cmd_profile(client: &ApiClient, username: &str, json: bool) -> CliResult<()> {
    let profile = client.fetch_profile(username).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print_lines(&profile_lines(&profile));
    }
    Ok(())
}

async fn cmd_leaderboard(client: &ApiClient, limit: usize, json: bool) -> CliResult<()> {
    let entries = client.fetch_leaderboard().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print_lines(&leaderboard_lines(&entries, limit));
    }
    Ok(())
}

async fn cmd_transactions(client: &ApiClient, username: &str, json: bool) -> CliResult<()> {
    let history = client.fetch_transactions(username).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&history)?);
    } else {
        eprintln!("📜 Transaction History for {}", username);
        print_lines(&transaction_lines(&history.transactions));
    }
    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
