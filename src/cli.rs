extern crate clap;

use std::{
    num::{NonZeroU64, NonZeroUsize},
    path::PathBuf,
};

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tweetprep", version, about = "Clean tweet datasets for sentiment classification")]
pub struct Cli {
    /// Log at debug level.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Clean a raw dataset into `,text,target` CSV.
    Clean(CleanArgs),
    /// Clean a single text and print it.
    Text(TextArgs),
    /// Print the first records next to their cleaned text.
    Preview(PreviewArgs),
}

#[derive(Debug, Parser)]
pub struct CleanArgs {
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// JSON file with defaults; flags given here take precedence.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    #[arg(long, short = 'w')]
    pub workers: Option<NonZeroUsize>,

    #[arg(long, short = 'b')]
    pub batch_size: Option<NonZeroUsize>,

    #[arg(long)]
    pub progress_every: Option<NonZeroU64>,

    /// Stop after this many records.
    #[arg(long, short = 'n')]
    pub limit: Option<u64>,

    /// Skip records whose cleaned text is empty.
    #[arg(long)]
    pub drop_empty: bool,

    #[arg(long)]
    pub has_headers: bool,

    /// Write a JSON run report here.
    #[arg(long, short = 'r')]
    pub report: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct TextArgs {
    pub text: String,
}

#[derive(Debug, Parser)]
pub struct PreviewArgs {
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    #[arg(long, short = 'n', default_value_t = 10)]
    pub count: usize,

    /// JSON config whose column layout is used to read the input.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub has_headers: bool,
}
