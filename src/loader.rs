//! Dictionary loading and location.
//!
//! A dictionary is a plain word list, one word per line. Loading reads every
//! line into a [`Trie`] and compiles the fixed [`PatternMatchers`]; both must
//! exist before a [`Tokenizer`](crate::Tokenizer) can be built.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::matcher::PatternMatchers;
use crate::trie::{Trie, TrieBuilder};

/// Environment variable naming the dictionary file
pub const DICT_ENV_VAR: &str = "THAIBREAK_DICT";

/// File name of the default word list
pub const DEFAULT_DICTIONARY: &str = "lexitron.txt";

/// Errors that can occur while loading a dictionary
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dictionary file could not be opened
    #[error("cannot open dictionary {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the word list failed part way
    #[error("cannot read dictionary: {0}")]
    Read(#[from] io::Error),

    /// One of the fixed matcher patterns failed to compile
    #[error("invalid matcher pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// No dictionary file was found at the resolved location
    #[error("dictionary not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// Get the default dictionary location
/// Returns <data dir>/thaibreak/lexitron.txt
pub fn default_dictionary_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("thaibreak")
        .join(DEFAULT_DICTIONARY)
}

/// Pick the dictionary to load: an explicit path, else `$THAIBREAK_DICT`,
/// else the default location. The result must exist.
pub fn resolve_dictionary_path(explicit: Option<&Path>) -> Result<PathBuf, LoadError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => std::env::var_os(DICT_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_dictionary_path),
    };

    if path.exists() {
        Ok(path)
    } else {
        Err(LoadError::NotFound(path))
    }
}

/// Read a word list and compile the fixed matchers.
pub fn load_dictionary<R: BufRead>(reader: R) -> Result<(Trie, PatternMatchers), LoadError> {
    let mut builder = TrieBuilder::new();
    let lines = builder.read_words(reader)?;
    let trie = builder.build();
    let patterns = PatternMatchers::new()?;

    info!(lines, words = trie.len(), "loaded dictionary");
    Ok((trie, patterns))
}

/// Load a word list file
pub fn load_dictionary_file(path: &Path) -> Result<(Trie, PatternMatchers), LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "reading dictionary file");
    load_dictionary(BufReader::new(file))
}

/// Resolve the dictionary location (see [`resolve_dictionary_path`]) and load it
pub fn load_configured_dictionary(
    explicit: Option<&Path>,
) -> Result<(Trie, PatternMatchers), LoadError> {
    let path = resolve_dictionary_path(explicit)?;
    load_dictionary_file(&path)
}

/// Load every `*.txt` word list below `dir` into one dictionary
pub fn load_dictionary_dir(dir: &Path) -> Result<(Trie, PatternMatchers), LoadError> {
    let files = list_dictionary_files(dir).map_err(|source| LoadError::Open {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut builder = TrieBuilder::new();
    for path in &files {
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.clone(),
            source,
        })?;
        let lines = builder.read_words(BufReader::new(file))?;
        debug!(path = %path.display(), lines, "read word list");
    }
    let trie = builder.build();
    let patterns = PatternMatchers::new()?;

    info!(files = files.len(), words = trie.len(), "loaded dictionary directory");
    Ok((trie, patterns))
}

/// List all word list files under a directory, sorted
pub fn list_dictionary_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_txt_files(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_txt_files(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_txt_files(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }
    Ok(())
}
