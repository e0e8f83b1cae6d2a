use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use incorp_core::validation::revalidate;
use incorp_data::{PeopleLoader, ShareClassLoader, draft};

/// Import people and share classes from CSV files into a draft.
///
/// The draft is created when it does not exist yet. Step validity is
/// recomputed after the import.
#[derive(Parser, Debug)]
#[command(name = "incorp-data-loader")]
#[command(version, about, long_about = None)]
struct Args {
    /// Draft TOML file to update
    #[arg(short, long)]
    draft: PathBuf,

    /// CSV file with the people and roles roster
    #[arg(short, long)]
    people: Option<PathBuf>,

    /// CSV file with the share classes
    #[arg(short, long)]
    shares: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut state = if args.draft.exists() {
        draft::load_from_file(&args.draft)
            .with_context(|| format!("Failed to load draft: {}", args.draft.display()))?
    } else {
        println!("Creating new draft: {}", args.draft.display());
        Default::default()
    };

    if let Some(path) = &args.people {
        let file =
            File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
        let people = PeopleLoader::parse(file)
            .with_context(|| format!("Failed to parse CSV: {}", path.display()))?;
        println!("Parsed {} people from CSV", people.len());
        state.set_org_persons_list(people);
    }

    if let Some(path) = &args.shares {
        let file =
            File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
        let classes = ShareClassLoader::parse(file)
            .with_context(|| format!("Failed to parse CSV: {}", path.display()))?;
        println!("Parsed {} share classes from CSV", classes.len());
        state.set_share_classes(classes);
    }

    let report = revalidate(&mut state);
    for message in report.messages() {
        println!("  - {message}");
    }

    draft::save_to_file(&state, &args.draft)
        .with_context(|| format!("Failed to write draft: {}", args.draft.display()))?;
    println!("Draft saved to {}", args.draft.display());

    Ok(())
}
