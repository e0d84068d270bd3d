//! # thaibreak-rs
//!
//! A fast dictionary-based Thai word breaker written in Rust.
//!
//! Thai is written without spaces between words. This crate finds legal line
//! break points in Thai text using a word list and a greedy longest-match scan.
//! ASCII letter/digit runs are kept whole, and anything the dictionary does
//! not know is passed through as a single fragment. Concatenating the
//! fragments always gives back the input.
//!
//! ## Quick Start
//!
//! ```rust
//! use thaibreak::Tokenizer;
//!
//! // Load a word list (one word per line)
//! let words = "สวัสดี\nครับ";
//! let tokenizer = Tokenizer::from_reader(words.as_bytes()).unwrap();
//!
//! let fragments = tokenizer.break_text("สวัสดีครับ");
//! assert_eq!(fragments, vec!["สวัสดี", "ครับ"]);
//! ```
//!
//! ## Simple Breaking (No Dictionary)
//!
//! If you just need whitespace-level breaking:
//!
//! ```rust
//! use thaibreak::WhitespaceBreaker;
//!
//! let fragments = WhitespaceBreaker::break_text("ผค 555 กท");
//! assert_eq!(fragments, vec!["ผค", " ", "555", " ", "กท"]);
//! ```
//!
//! ## Python Bindings
//!
//! This library can be compiled as a Python extension module with the
//! `python` feature.

pub mod loader;
pub mod matcher;
pub mod token;
pub mod tokenizer;
pub mod trie;

// Python bindings (only compiled when the "python" feature is enabled)
#[cfg(feature = "python")]
pub mod python;

// Re-export main types for convenience
pub use loader::{
    load_configured_dictionary, load_dictionary, load_dictionary_dir, load_dictionary_file,
    LoadError,
};
pub use matcher::{PatternMatcher, PatternMatchers, Recognizer};
pub use token::{Token, TokenKind};
pub use tokenizer::{TextBreaker, Tokenizer, WhitespaceBreaker};
pub use trie::{Trie, TrieBuilder};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
