use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use log::{info, LevelFilter};
use rhuffman::{
    config::UnknownSymbolPolicy, AppConfig, FrequencyTable, HuffmanCoder, TableEntry,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text used to compute the symbol frequencies
    #[arg(short, long, conflicts_with = "input")]
    corpus: Option<String>,

    /// Path of a file used as corpus
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path of a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reject words containing symbols without a code
    #[arg(long)]
    strict: bool,

    /// More log output, repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Words to encode, overriding the configured ones
    words: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut config = match &args.config {
        Some(path) => AppConfig::new(path)?,
        None => AppConfig::default(),
    };
    if args.strict {
        config.coder.unknown_symbols = UnknownSymbolPolicy::Fail;
    }

    let corpus = match (&args.corpus, &args.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Cannot read corpus from {:?}", path))?,
        (None, None) => String::new(),
    };

    let mut frequencies = FrequencyTable::count(&corpus, &config.coder.filter);
    if frequencies.is_empty() {
        info!("corpus has no symbol, using the fallback frequencies");
        frequencies = FrequencyTable::from_counts(config.fallback_frequencies.clone())
            .context("Invalid fallback frequencies")?;
    }
    let coder = HuffmanCoder::from_frequencies(frequencies, config.coder);

    print_table(&coder.dump_table());
    println!(
        "Average code length: {:.3} bits/symbol (entropy {:.3})",
        coder.average_code_length(),
        coder.entropy()
    );

    let words = if args.words.is_empty() {
        config.words
    } else {
        args.words
    };
    for word in &words {
        let encoded = coder
            .encode(word)
            .with_context(|| format!("Cannot encode {:?}", word))?;
        println!();
        println!("Huffman code of \"{}\": {}", word, encoded.code);
        println!("Code length: {} bits", encoded.bit_length());
        if !encoded.skipped.is_empty() {
            println!("Skipped: {}", encoded.skipped.iter().join(", "));
        }
    }

    Ok(())
}

fn print_table(entries: &[TableEntry]) {
    println!("===== Huffman code table =====");
    println!("Symbol\tFreq\tCode");
    println!("------------------------------");
    if entries.is_empty() {
        println!("(no codes)");
    }
    for entry in entries {
        println!("{:?}\t{}\t{}", entry.symbol, entry.frequency, entry.code);
    }
    println!("==============================");
}
