use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tweetprep::{reader::RecordReader, TweetCleaner};
use tweetprep_repo::{
    cli::{Cli, Command},
    config::Config,
    engine::{preview, CleanEngine},
    report::Report,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Clean(args) => {
            let config = Config::from_args(&args)?;
            let engine = CleanEngine::new(config);
            let summary = engine.run_files(&args.input, &args.output)?;

            if let Some(path) = &args.report {
                Report::from(&summary).write(path)?;
                info!(report = %path.display(), "wrote run report");
            }
        }
        Command::Text(args) => {
            let mut cleaner = TweetCleaner::new();
            println!("{}", cleaner.clean(&args.text));
        }
        Command::Preview(args) => {
            let layout = Config::preview_layout(&args)?;
            let reader = RecordReader::open(&args.input, layout)?;

            for (raw, clean) in preview(reader, args.count)? {
                println!("{raw}\n  -> {clean}");
            }
        }
    }

    Ok(())
}
