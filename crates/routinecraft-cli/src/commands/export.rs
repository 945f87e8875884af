use clap::Args;
use std::path::PathBuf;

use routinecraft_core::{export_summary, Config};

use super::{load_or_seed, IntentArgs};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Routine file to export; defaults to a seeded day from config
    #[arg(long, short)]
    pub file: Option<PathBuf>,
    #[command(flatten)]
    pub intent: IntentArgs,
}

pub fn run(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let session = load_or_seed(args.file.as_deref(), &config)?.with_intent(&args.intent.to_patch());
    println!("{}", export_summary(&session.plan()));
    Ok(())
}
