use clap::{Args, Parser, Subcommand};
use pl_core::SportData;
use pl_data::DataError;
use pl_ranking::{RankingLabel, RiderRecord, Selection};
use pl_store::{
    Mode, RaceStageView, SelectorId, StatePatch, Store, StoreConfig, StoreError, View,
};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pl-cli")]
#[command(about = "Peloton CLI - stage-by-stage race rankings", long_about = None)]
struct Cli {
    /// Failure handling: strict returns errors, lenient prints an empty view
    #[arg(long, global = true, default_value_t = Mode::Strict)]
    mode: Mode,

    /// Print the selected view as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SelectionArgs {
    /// Path to the race JSON document
    race_path: PathBuf,
    /// Stage number (0 = prologue)
    #[arg(short, long)]
    stage: Option<u32>,
    /// Classification: stage, general, points, mountain, youth or team
    #[arg(short, long)]
    classification: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ranking labels for a stage and classification
    Labels(SelectionArgs),
    /// Riders with their stage result and team
    Riders(SelectionArgs),
    /// Race stages relative to the selected stage
    Stages(SelectionArgs),
    /// Run any selector by name
    Select {
        /// Selector name (riders, rankingLabels, rankings, raceStages)
        selector: String,
        #[command(flatten)]
        selection: SelectionArgs,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Failed to read race file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = StoreConfig { mode: cli.mode };

    let (name, selection) = match &cli.command {
        Commands::Labels(sel) => (SelectorId::RankingLabels.name(), sel),
        Commands::Riders(sel) => (SelectorId::Riders.name(), sel),
        Commands::Stages(sel) => (SelectorId::RaceStages.name(), sel),
        Commands::Select {
            selector,
            selection,
        } => (selector.as_str(), selection),
    };

    let store = build_store(config, selection)?;
    let view = store.select_named(name, None)?;

    match view {
        Some(view) if cli.json => println!("{}", serde_json::to_string_pretty(&view)?),
        Some(view) => print_view(&view),
        None => println!("(no data)"),
    }
    Ok(())
}

fn load_race(path: &Path) -> CliResult<SportData> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let data = pl_data::decode_race(&content)?;
    info!(
        riders = data.riders.len(),
        teams = data.teams.len(),
        "race loaded"
    );
    Ok(data)
}

fn build_store(config: StoreConfig, args: &SelectionArgs) -> CliResult<Store> {
    let mut store = Store::new(config);
    store.set_state(StatePatch::sport_data(load_race(&args.race_path)?));
    store.set_state(StatePatch::selected(Selection {
        stage: args.stage,
        classification: args.classification.clone(),
        ..Selection::default()
    }));
    Ok(store)
}

fn print_view(view: &View) {
    if view.is_empty() {
        println!("(empty)");
        return;
    }
    match view {
        View::RankingLabels(labels) => print_labels(labels),
        View::Riders(riders) => print_riders(riders),
        View::RaceStages(stages) => print_stages(stages),
        View::Rankings(standings) => {
            for s in standings {
                let status = if s.has_abandoned { " (abandoned)" } else { "" };
                println!(
                    "{:>4}  {:<10} last stage {}{}",
                    s.ranking,
                    s.id.to_string(),
                    s.last_stage,
                    status
                );
            }
        }
        View::Custom(value) => println!("{}", value),
    }
}

fn print_labels(labels: &[RankingLabel]) {
    for l in labels {
        let status = if l.has_abandoned {
            format!("  out after stage {}", l.last_stage)
        } else {
            String::new()
        };
        println!("{:>4}  {}{}", l.ranking, l.label, status);
    }
}

fn print_riders(riders: &[RiderRecord]) {
    for r in riders {
        let result = &r.stage_rankings.result;
        println!(
            "{:>4}  #{:<4} {:<24} {:<4} {}",
            result.ranking,
            r.bib.0,
            r.name,
            r.flag.as_deref().unwrap_or("-"),
            r.team.as_ref().map_or("-", |t| t.name.as_str())
        );
    }
}

fn print_stages(stages: &[RaceStageView]) {
    for s in stages {
        let marker = if s.current {
            ">"
        } else if s.completed {
            "✓"
        } else {
            " "
        };
        println!(
            "{} {:>2}  {} {}",
            marker,
            s.number,
            s.name,
            s.kind.as_deref().map(|k| format!("[{k}]")).unwrap_or_default()
        );
    }
}
