use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use libtelex::{
    create_ime_engine_with_config, extract_tone, segment, utils, TelexConfig, TelexEngine,
};

#[derive(Parser)]
#[command(name = "libtelex")]
#[command(about = "Telex input method for Vietnamese")]
#[command(version)]
struct Cli {
    /// TOML config file (max_word_len, enabled)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive REPL mode: each line is typed key by key
    Repl,
    /// Type keystrokes and print the resulting text
    Type {
        /// Keystrokes; separate arguments are joined with spaces
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Show the edit a single keystroke produces
    Key {
        /// Text before the cursor
        word: String,
        /// Keystroke
        key: char,
    },
    /// Show the syllable structure and tone of a word
    Segment {
        word: String,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<TelexConfig> {
    match path {
        Some(path) => TelexConfig::load_toml(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(TelexConfig::default()),
    }
}

fn type_keys(config: &TelexConfig, keys: &str) -> String {
    let mut ime = create_ime_engine_with_config(config.clone());
    ime.type_str(keys);
    ime.commit()
}

fn run_repl(config: &TelexConfig) -> anyhow::Result<()> {
    println!("libtelex REPL: type Telex keystrokes and press Enter");
    println!("Example: tieengs vieetj -> tiếng việt");
    println!("Ctrl-D to exit.");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("error reading stdin")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        println!("{}", type_keys(config, input));
    }
    Ok(())
}

fn show_edit(config: &TelexConfig, word: &str, key: char) {
    let engine = TelexEngine::with_config(config.clone());
    let edit = engine.process(word, key);
    println!("delete: {}", edit.delete_before_cursor);
    println!("insert: {:?}", edit.insert_text);
}

fn show_segmentation(word: &str) {
    let word = utils::normalize(word);
    let (bare, tone) = extract_tone(&word);
    println!("word: {}  (tone-free: {}, tone: {})", word, bare, tone.name());
    match segment(&bare) {
        Some(s) => {
            println!("  initial: {:?}", s.initial);
            println!("  medial:  {:?}", s.medial);
            println!("  nucleus: {:?}", s.nucleus);
            println!("  final:   {:?}", s.coda);
        }
        None => println!("  (not a Vietnamese syllable)"),
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Some(Commands::Type { keys }) => println!("{}", type_keys(&config, &keys.join(" "))),
        Some(Commands::Key { word, key }) => show_edit(&config, &word, key),
        Some(Commands::Segment { word }) => show_segmentation(&word),
        Some(Commands::Repl) | None => run_repl(&config)?,
    }
    Ok(())
}
