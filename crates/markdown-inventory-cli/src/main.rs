mod output;
mod settings;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use markdown_inventory_config::Config;
use markdown_inventory_engine::report::{AgeTally, render_summary, score_rows, tally_age};
use markdown_inventory_engine::run_inventory;

#[derive(Parser)]
#[command(name = "markdown-inventory")]
#[command(about = "Find, classify and score term occurrences in Markdown docs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every configured inventory over every content set
    Inventory {
        /// Config file (defaults to ~/.config/markdown-inventory/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Directory for the result files
        #[arg(long, default_value = ".")]
        output: PathBuf,
    },
    /// Tally article ages per top-level folder and write them as JSON
    Age { root: PathBuf, json: PathBuf },
    /// Print mean and standard deviation from an age tally
    Summary { json: PathBuf },
    /// Write a starter config file
    Init {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Commands::Inventory { config, output } => inventory(config, &output, today),
        Commands::Age { root, json } => {
            let tally = tally_age(&root, today)
                .with_context(|| format!("Tallying ages under {}", root.display()))?;
            output::write_json(&json, &tally)
        }
        Commands::Summary { json } => {
            let content =
                fs::read_to_string(&json).with_context(|| format!("Reading {}", json.display()))?;
            let tally: AgeTally = serde_json::from_str(&content)
                .with_context(|| format!("Parsing {}", json.display()))?;
            print!("{}", render_summary(&tally));
            Ok(())
        }
        Commands::Init { config } => init(config),
    }
}

fn inventory(config_path: Option<PathBuf>, output: &Path, today: chrono::NaiveDate) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::config_path);
    let Some(config) = Config::load_from_path(&config_path)? else {
        bail!(
            "No config file at {}; run `markdown-inventory init` to create one",
            config_path.display()
        );
    };

    let content_sets = settings::content_sets(&config);
    let term_sets = settings::term_sets(&config)?;
    let classifier = settings::classifier(&config)?;
    let model = settings::scoring_model(&config)?;
    if term_sets.is_empty() {
        log::warn!("No inventories configured in {}", config_path.display());
    }

    let results = run_inventory(&content_sets, &term_sets, &classifier, config.strict_utf8)?;

    fs::create_dir_all(output).with_context(|| format!("Creating {}", output.display()))?;
    for result in results {
        let stem = output::next_result_stem(output, &result.name, today)?;
        let consolidated = result.consolidated();
        log::info!(
            "Inventory {}: {} occurrences in {} files",
            result.name,
            result.records.len(),
            consolidated.len()
        );

        output::write_json(&output::result_path(output, &stem, ""), &result.records)?;
        output::write_json(
            &output::result_path(output, &stem, "-consolidated"),
            &consolidated,
        )?;
        output::write_json(
            &output::result_path(output, &stem, "-scored"),
            &score_rows(consolidated, &model),
        )?;
    }
    Ok(())
}

fn init(config_path: Option<PathBuf>) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::config_path);
    if config_path.exists() {
        bail!("Config file already exists at {}", config_path.display());
    }
    Config::sample().save_to_path(&config_path)?;
    println!("Wrote sample config to {}", config_path.display());
    Ok(())
}
