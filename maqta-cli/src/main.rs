//! maqta — utterance segmentation for speech synthesis

use clap::{Parser, Subcommand};
use maqta_cli::commands::{segment::SegmentArgs, validate::ValidateArgs};

#[derive(Debug, Parser)]
#[command(name = "maqta", version, about = "Segment long text into bounded utterances")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Segment text into utterances
    Segment(SegmentArgs),
    /// Validate markup without segmenting
    Validate(ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Segment(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
    }
}
