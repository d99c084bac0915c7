//! Command-line demo for bilingual-dict
//!
//! Usage:
//!   dict-cli [--dictionary en-ru] [--output dictionary.txt] [--log-level info]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bilingual_dict::{DictionaryEntry, DictionaryManager, DictionaryType, InMemoryManager};

#[derive(Parser)]
#[command(name = "dict-cli", about = "Bilingual dictionary manager demo")]
struct Cli {
    /// Dictionary to work on (en-ru, ru-en or the full type name)
    #[arg(long, default_value = "en-ru")]
    dictionary: DictionaryType,
    /// File the dictionary is exported to
    #[arg(long, default_value = "dictionary.txt")]
    output: PathBuf,
    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let ty = cli.dictionary;
    let mut manager = InMemoryManager::new();

    println!("{}", manager.create_dictionary(ty));
    println!(
        "{}",
        manager.add_word(ty, DictionaryEntry::new("hello", ["привіт", "добрий день"]))
    );
    println!(
        "{}",
        manager.add_word(ty, DictionaryEntry::new("world", ["світ", "універсум"]))
    );
    println!(
        "{}",
        manager.replace_word(ty, "world", DictionaryEntry::new("planet", ["планета"]))
    );
    println!("{}", manager.delete_word(ty, "hello"));

    let translations = manager.search_translation(ty, "planet");
    println!("Translations of 'planet': {}", translations.join(", "));

    let outcome = manager.export_to_file(ty, &cli.output);
    println!("{}", outcome);

    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
