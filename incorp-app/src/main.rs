use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use incorp_core::{EntityType, StateModel, resources::EXCLUDED_STEP, resources_for, validation};
use incorp_data::draft;
use tracing::{debug, info, warn};

use incorp_app::{WizardConfig, WizardSummary, logging, utils};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Inspect and validate incorporation application drafts.
#[derive(Debug, Parser)]
#[command(name = "incorp-wizard", version, about, long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level or EnvFilter directive; overrides the config file.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Date to validate against (YYYY-MM-DD); overrides the config file.
    #[arg(long, global = true, value_parser = utils::parse_date)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the step and button summary for a draft.
    Status { draft: PathBuf },

    /// List the wizard steps and thresholds for an entity type code.
    Steps { entity: String },

    /// Validate a draft; exits non-zero when it cannot be filed.
    Validate { draft: PathBuf },
}

// ─── commands ────────────────────────────────────────────────────────────────

/// Loads a draft, applies config defaults and recomputes step validity.
fn load_draft(
    path: &Path,
    config: &WizardConfig,
) -> Result<StateModel> {
    let mut state = draft::load_from_file(path)
        .with_context(|| format!("Failed to load draft: {}", path.display()))?;

    if let Some(date) = config.current_date {
        state.set_current_date(date);
    } else if state.get_current_date().is_none() {
        state.set_current_date(config.today());
    }

    if !state.is_entity_type()
        && let Some(entity_type) = config.default_entity_type
    {
        debug!(%entity_type, "applying default entity type");
        state.set_entity_type(entity_type)?;
    }

    validation::revalidate(&mut state);
    Ok(state)
}

fn print_steps(code: &str) -> Result<()> {
    let Some(entity_type) = EntityType::parse(code) else {
        let known: Vec<_> = EntityType::ALL.iter().map(|e| e.as_str()).collect();
        bail!("unknown entity type '{code}' (expected one of {})", known.join(", "));
    };
    let resources = resources_for(entity_type);

    println!("{} ({})", resources.title, entity_type.full_description());
    for step in resources.steps {
        let number = if step.step == EXCLUDED_STEP {
            "-".to_string()
        } else {
            step.step.to_string()
        };
        println!("  {number:>2}. {}", step.text);
    }
    println!(
        "Minimum directors:     {}",
        utils::opt_display(resources.directors.count_minimum)
    );
    println!(
        "Minimum share classes: {}",
        utils::opt_display(resources.share_classes.count_minimum)
    );
    for agreement in resources.incorporation_agreement {
        println!("Agreement option:      {} - {}", agreement.code, agreement.description);
    }
    Ok(())
}

fn validate_draft(
    path: &Path,
    config: &WizardConfig,
) -> Result<()> {
    let state = load_draft(path, config)?;
    let report = validation::validate(&state);

    for message in report.messages() {
        println!("  - {message}");
    }

    if state.is_application_valid() {
        info!(draft = %path.display(), "application is ready to file");
        println!("Application is ready to file.");
        Ok(())
    } else {
        warn!(draft = %path.display(), "application is not ready to file");
        bail!("{} is not ready to file", path.display())
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => WizardConfig::load(path)?,
        None => WizardConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if cli.today.is_some() {
        config.current_date = cli.today;
    }

    let _log = logging::init_logging(&config)?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Status { draft } => {
            let state = load_draft(&draft, &config)?;
            println!("{}", WizardSummary::from_state(&state));
        }
        Command::Steps { entity } => print_steps(&entity)?,
        Command::Validate { draft } => validate_draft(&draft, &config)?,
    }

    Ok(())
}
