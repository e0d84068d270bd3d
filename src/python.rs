//! Python bindings for thaibreak-rs using PyO3
//!
//! This module provides Python-compatible wrappers around the Rust tokenizer.

use std::path::Path;
use std::sync::Arc;

use pyo3::exceptions::{PyIOError, PyRuntimeError};
use pyo3::prelude::*;

use crate::loader::{self, LoadError};
use crate::matcher::PatternMatchers;
use crate::token::Token as RustToken;
use crate::tokenizer::Tokenizer as RustTokenizer;
use crate::trie::{Trie, TrieBuilder};

fn to_py_err(e: LoadError) -> PyErr {
    match e {
        LoadError::Pattern(_) => PyRuntimeError::new_err(e.to_string()),
        _ => PyIOError::new_err(e.to_string()),
    }
}

/// A Python-compatible Token class
#[pyclass(name = "Token")]
#[derive(Clone)]
pub struct PyToken {
    #[pyo3(get)]
    pub text: String,
    #[pyo3(get)]
    pub start: usize,
    #[pyo3(get)]
    pub len: usize,
    #[pyo3(get)]
    pub kind: String,
}

impl From<RustToken> for PyToken {
    fn from(t: RustToken) -> Self {
        PyToken {
            text: t.text,
            start: t.start,
            len: t.len,
            kind: t.kind.as_str().to_string(),
        }
    }
}

#[pymethods]
impl PyToken {
    fn __repr__(&self) -> String {
        format!("Token('{}', kind='{}')", self.text, self.kind)
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }
}

/// Thai word breaker
///
/// Example:
///     >>> from thaibreak import ThaiTextBreak
///     >>> tb = ThaiTextBreak("lexitron.txt")
///     >>> tb.break_text("สวัสดีครับ")
///     ['สวัสดี', 'ครับ']
#[pyclass(name = "ThaiTextBreak")]
pub struct PyThaiTextBreak {
    /// Shared trie reference - avoids cloning the dictionary on each call
    trie: Arc<Trie>,
    patterns: PatternMatchers,
}

#[pymethods]
impl PyThaiTextBreak {
    /// Create a new breaker.
    ///
    /// Args:
    ///     dict_path: Word list file. Defaults to $THAIBREAK_DICT, then the
    ///         lexitron.txt in the user data directory.
    #[new]
    #[pyo3(signature = (dict_path=None))]
    fn new(dict_path: Option<&str>) -> PyResult<Self> {
        let (trie, patterns) =
            loader::load_configured_dictionary(dict_path.map(Path::new)).map_err(to_py_err)?;
        Ok(PyThaiTextBreak {
            trie: Arc::new(trie),
            patterns,
        })
    }

    /// Replace the dictionary with the words of a file
    fn load(&mut self, path: &str) -> PyResult<()> {
        let (trie, patterns) = loader::load_dictionary_file(Path::new(path)).map_err(to_py_err)?;
        self.trie = Arc::new(trie);
        self.patterns = patterns;
        Ok(())
    }

    /// Add the words of a newline-delimited string to the dictionary
    fn load_words(&mut self, content: &str) {
        let mut builder = TrieBuilder::new();
        builder.load_words(content);
        let mut trie = (*self.trie).clone();
        trie.merge(&builder.build());
        self.trie = Arc::new(trie);
    }

    /// Add a single word to the dictionary
    fn add_word(&mut self, word: &str) {
        let mut trie = (*self.trie).clone();
        trie.insert(word);
        self.trie = Arc::new(trie);
    }

    /// Break text into fragments
    fn break_text(&self, text: &str) -> Vec<String> {
        self.tokenizer()
            .break_text(text)
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Tokenize text into Token objects
    fn tokenize(&self, text: &str) -> Vec<PyToken> {
        self.tokenizer()
            .tokenize(text)
            .into_iter()
            .map(PyToken::from)
            .collect()
    }

    fn __len__(&self) -> usize {
        self.trie.len()
    }
}

impl PyThaiTextBreak {
    fn tokenizer(&self) -> RustTokenizer {
        RustTokenizer::with_arc(Arc::clone(&self.trie), self.patterns.clone())
    }
}

/// Create the Python module
#[pymodule]
fn thaibreak(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyToken>()?;
    m.add_class::<PyThaiTextBreak>()?;

    // Add version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
