use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use league_stats::api::client::{fetch_champion_catalog, RiotApiClient};
use league_stats::api::models::DataDragonChampions;
use league_stats::api::Game;
use league_stats::config::Config;
use league_stats::display::output::{
    display_error, display_info, display_masteries, display_matches, display_rank,
    display_success, display_tft_matches,
};
use league_stats::error::AppError;
use league_stats::lookup::{champion_table_from_catalog, LookupTables};
use league_stats::server::{self, AppState};
use league_stats::service::StatsService;
use league_stats::stats::MatchWindow;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "League Stats")]
#[command(about = "Simplified League of Legends and TFT stats over HTTP", long_about = None)]
struct Args {
    /// Region (default: RIOT_REGION or na1)
    #[arg(short, long, global = true)]
    region: Option<String>,

    /// Print raw JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the JSON routes
    Serve {
        /// Address to bind (default: BIND_ADDR or 127.0.0.1:5000)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Ranked standing in SOLO or FLEX
    Rank {
        game_name: String,
        tag_line: String,
        #[arg(default_value = "SOLO")]
        queue: String,
    },

    /// Top champion masteries
    Mastery {
        game_name: String,
        tag_line: String,
        #[arg(short, long, default_value = "5")]
        count: usize,
    },

    /// Recent League matches
    Matches {
        game_name: String,
        tag_line: String,
        /// Number of matches to show
        #[arg(short, long, default_value = "5")]
        count: usize,
        /// 1-based offset, 1 is the most recent match
        #[arg(long, default_value = "1")]
        start: usize,
    },

    /// TFT ranked standing in SOLO or DOUBLEUP
    TftRank {
        game_name: String,
        tag_line: String,
        #[arg(default_value = "SOLO")]
        queue: String,
    },

    /// Recent TFT matches
    TftMatches {
        game_name: String,
        tag_line: String,
        #[arg(short, long, default_value = "5")]
        count: usize,
        #[arg(long, default_value = "1")]
        start: usize,
    },

    /// Write the champion id table from a Data Dragon champion.json
    BuildChampionTable {
        /// Local champion.json; downloads the latest one when omitted
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Output path (default: CHAMPION_TABLE or data/champion_ids.json)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Command::BuildChampionTable { catalog, output } => {
            build_champion_table(catalog.as_deref(), output)
        }
        command => run_command(command, args.region, args.json),
    }
}

fn run_command(command: Command, region: Option<String>, json: bool) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(region) = region {
        config.region = region;
    }

    let lookups = Arc::new(LookupTables::load(&config.champion_table, &config.queue_table)?);
    tracing::info!(
        champions = lookups.champion_count(),
        queues = lookups.queue_count(),
        "lookup tables loaded"
    );

    let client = RiotApiClient::new(&config);
    let service = StatsService::new(Arc::new(client), lookups, config.variant);

    match command {
        Command::Serve { bind } => {
            let bind_addr = bind.unwrap_or_else(|| config.bind_addr.clone());
            let state = AppState {
                service: Arc::new(service),
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(state, &bind_addr))?;
        }
        Command::Rank { game_name, tag_line, queue } => {
            let player = format!("{}#{}", game_name, tag_line);
            let rank = with_spinner(&player, || service.rank(Game::League, &game_name, &tag_line, &queue))?;
            emit(json, &rank, || display_rank(&player, &queue, rank.as_ref()))?;
        }
        Command::TftRank { game_name, tag_line, queue } => {
            let player = format!("{}#{}", game_name, tag_line);
            let rank = with_spinner(&player, || service.rank(Game::Tft, &game_name, &tag_line, &queue))?;
            emit(json, &rank, || display_rank(&player, &queue, rank.as_ref()))?;
        }
        Command::Mastery { game_name, tag_line, count } => {
            let player = format!("{}#{}", game_name, tag_line);
            let champs = with_spinner(&player, || service.top_champions(&game_name, &tag_line, count))?;
            emit(json, &champs, || display_masteries(&player, &champs))?;
        }
        Command::Matches { game_name, tag_line, count, start } => {
            let player = format!("{}#{}", game_name, tag_line);
            let window = MatchWindow::new(start, count);
            let matches = with_spinner(&player, || service.league_matches(&game_name, &tag_line, window))?;
            emit(json, &matches, || display_matches(&player, &matches))?;
        }
        Command::TftMatches { game_name, tag_line, count, start } => {
            let player = format!("{}#{}", game_name, tag_line);
            let window = MatchWindow::new(start, count);
            let matches = with_spinner(&player, || service.tft_matches(&game_name, &tag_line, window))?;
            emit(json, &matches, || display_tft_matches(&player, &matches))?;
        }
        Command::BuildChampionTable { catalog, output } => {
            build_champion_table(catalog.as_deref(), output)?;
        }
    }

    Ok(())
}

fn with_spinner<T>(player: &str, call: impl FnOnce() -> Result<T, AppError>) -> Result<T, AppError> {
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching data for {}", player));
    pb.enable_steady_tick(Duration::from_millis(120));
    let result = call();
    pb.finish_and_clear();
    result
}

fn emit<T: Serialize>(json: bool, value: &T, table: impl FnOnce()) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        table();
    }
    Ok(())
}

fn build_champion_table(catalog: Option<&std::path::Path>, output: Option<PathBuf>) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let catalog: DataDragonChampions = match catalog {
        Some(path) => {
            display_info(&format!("Reading catalog {}", path.display()));
            serde_json::from_str(&std::fs::read_to_string(path)?)?
        }
        None => {
            display_info("Downloading the latest Data Dragon catalog...");
            fetch_champion_catalog()?
        }
    };

    let output = output
        .or_else(|| std::env::var("CHAMPION_TABLE").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(league_stats::config::DEFAULT_CHAMPION_TABLE));

    let table = champion_table_from_catalog(&catalog);
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&output, serde_json::to_string_pretty(&table)?)?;

    display_success(&format!("Wrote {} champions to {}", table.len(), output.display()));
    Ok(())
}
