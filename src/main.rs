use clap::{Args, Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use review_roulette::config::AssignConfig;
use review_roulette::{choose_assignees, choose_reviewers, includes_skip_keywords};

#[derive(Parser)]
#[command(name = "review-roulette", about = "Pull request reviewer and assignee picker")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Choose(ChooseArgs),
    Init(InitArgs),
}

#[derive(Args, Debug, Clone)]
struct ChooseArgs {
    /// PR author; always excluded from the draw.
    #[arg(long)]
    owner: String,
    /// PR title, checked against the configured skip keywords.
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seeds the draw for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct InitArgs {
    #[arg(long, default_value = "config/assign.toml")]
    path: PathBuf,
}

#[derive(Serialize)]
struct ChooseOutput {
    skipped: bool,
    reviewers: Vec<String>,
    team_reviewers: Vec<String>,
    assignees: Vec<String>,
}

fn main() {
    load_dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Choose(args) => run_choose(args),
        Command::Init(args) => run_init(args),
    }
}

fn run_choose(args: ChooseArgs) -> Result<(), String> {
    let (config, config_path) = AssignConfig::load(args.config)?;
    if let Some(path) = config_path.as_ref() {
        tracing::debug!(path = %path.display(), "loaded config");
    }

    let skipped = args
        .title
        .as_deref()
        .map(|title| includes_skip_keywords(title, &config.skip_keywords))
        .unwrap_or(false);

    let output = if skipped {
        ChooseOutput {
            skipped: true,
            reviewers: Vec::new(),
            team_reviewers: Vec::new(),
            assignees: Vec::new(),
        }
    } else {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let review = choose_reviewers(&mut rng, &args.owner, &config);
        let assignees = choose_assignees(&mut rng, &args.owner, &config);
        ChooseOutput {
            skipped: false,
            reviewers: review.reviewers,
            team_reviewers: review.team_reviewers,
            assignees: assignees.assignees,
        }
    };

    if args.json {
        let payload = serde_json::to_string_pretty(&output)
            .map_err(|err| format!("failed to serialize output: {}", err))?;
        println!("{}", payload);
        return Ok(());
    }

    if output.skipped {
        println!("Skipped: title matches a skip keyword");
        return Ok(());
    }

    println!("Reviewers: {}", format_list(&output.reviewers));
    println!("Team reviewers: {}", format_list(&output.team_reviewers));
    println!("Assignees: {}", format_list(&output.assignees));
    Ok(())
}

fn run_init(args: InitArgs) -> Result<(), String> {
    let config = AssignConfig::default();
    config.write(&args.path)?;
    println!("Wrote default config to {}", args.path.display());
    Ok(())
}

fn format_list(entries: &[String]) -> String {
    if entries.is_empty() {
        return "(none)".to_string();
    }
    entries.join(", ")
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
