//! Command-line interface for thaibreak-rs
//!
//! Usage:
//!   thaibreak [OPTIONS] [TEXT]
//!   echo "สวัสดีครับ" | thaibreak -d lexitron.txt

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use thaibreak::{loader, TextBreaker, Tokenizer, WhitespaceBreaker};
use tracing::debug;

#[derive(Parser)]
#[command(name = "thaibreak", version)]
#[command(about = "A fast dictionary-based Thai word breaker", long_about = None)]
struct Args {
    /// Word list file, one word per line
    #[arg(short, long, env = loader::DICT_ENV_VAR)]
    dict: Option<PathBuf>,

    /// Directory of *.txt word lists (overrides --dict)
    #[arg(long)]
    dict_dir: Option<PathBuf>,

    /// Break on whitespace only (no dictionary)
    #[arg(short, long)]
    simple: bool,

    /// Output tokens as JSON
    #[arg(short, long, conflicts_with = "simple")]
    json: bool,

    /// String printed between fragments
    #[arg(long, default_value = "|")]
    separator: String,

    /// Text to break; read line by line from stdin when omitted
    text: Option<String>,
}

fn build_tokenizer(args: &Args) -> Result<Tokenizer> {
    if let Some(dir) = &args.dict_dir {
        let (trie, patterns) = loader::load_dictionary_dir(dir)
            .with_context(|| format!("loading word lists from {}", dir.display()))?;
        return Ok(Tokenizer::new(trie, patterns));
    }

    debug!(dict = ?args.dict, "resolving dictionary");
    let (trie, patterns) =
        loader::load_configured_dictionary(args.dict.as_deref()).context("loading dictionary")?;
    Ok(Tokenizer::new(trie, patterns))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let lines: Vec<String> = match &args.text {
        Some(text) => vec![text.clone()],
        None => io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<_>>()
            .context("reading stdin")?,
    };

    if args.simple {
        for line in &lines {
            println!("{}", WhitespaceBreaker.break_text_to_tokens(line).join(&args.separator));
        }
        return Ok(());
    }

    let tokenizer = build_tokenizer(&args)?;

    for line in &lines {
        if args.json {
            let tokens = tokenizer.tokenize(line);
            println!("{}", serde_json::to_string(&tokens).context("serializing tokens")?);
        } else {
            println!("{}", tokenizer.break_text(line).join(&args.separator));
        }
    }

    Ok(())
}
