use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use rs_lm_core::{LanguageModel, ModelOptions, io};

/// Diagnostic rendering of the trained table.
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum DumpFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "rs-lm", version, about = "Character-level n-gram text generator")]
struct Cli {
    #[arg(help = "Corpus file used for training")]
    corpus: PathBuf,

    #[arg(short, long, default_value_t = 4, help = "Window length (symbols of context)")]
    window: usize,

    #[arg(short, long, help = "Seed for reproducible output")]
    seed: Option<u64>,

    #[arg(short, long, help = "Text to start from (defaults to the corpus start)")]
    initial: Option<String>,

    #[arg(short, long, default_value_t = 200, help = "Number of symbols to generate")]
    length: usize,

    #[arg(short = 'n', long, default_value_t = 1, help = "Number of texts to generate")]
    samples: usize,

    #[arg(long, value_enum, help = "Print the trained table instead of generating")]
    dump: Option<DumpFormat>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut options = ModelOptions::new(cli.window).context("invalid --window")?;
    options.seed = cli.seed;

    let corpus = io::read_corpus(&cli.corpus)
        .with_context(|| format!("failed to read {}", cli.corpus.display()))?;

    let mut model = LanguageModel::from_options(&options);
    model
        .train_str(&corpus)
        .with_context(|| format!("failed to train on {}", cli.corpus.display()))?;
    info!("model ready: {} windows", model.table().len());

    match cli.dump {
        Some(DumpFormat::Text) => {
            print!("{model}");
            return Ok(());
        }
        Some(DumpFormat::Json) => {
            println!("{}", serde_json::to_string_pretty(model.table())?);
            return Ok(());
        }
        None => {}
    }

    // Without an explicit start, reuse the first window of the corpus
    let initial = match cli.initial {
        Some(text) => text,
        None => corpus.chars().take(cli.window).collect(),
    };

    for _ in 0..cli.samples {
        println!("{}", model.generate(&initial, cli.length));
    }

    Ok(())
}
