//! The main tokenizer implementing the greedy longest-match scan.
//!
//! At each position the tokenizer asks its recognizers, in priority order, for
//! a match: ASCII alphanumeric run, digit run, dictionary word, then any extra
//! recognizers. Characters nothing recognizes are collected into a pending
//! run that is emitted as one token before the next match or at end of input.

use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

use tracing::trace;

use crate::loader::{self, LoadError};
use crate::matcher::{PatternMatchers, Recognizer};
use crate::token::{Token, TokenKind};
use crate::trie::Trie;

/// Anything that can cut a text into legal line-break fragments.
///
/// Implementations must return fragments in input order whose concatenation
/// is the input.
pub trait TextBreaker {
    /// Break `text` into fragments that layout code must not split further
    fn break_text_to_tokens(&self, text: &str) -> Vec<String>;
}

/// Start offset of the characters seen since the last match.
///
/// Unmatched characters are always contiguous, so the run is fully described
/// by where it began. It is flushed before every match and at end of input.
#[derive(Debug, Default)]
struct PendingRun {
    start: Option<usize>,
}

impl PendingRun {
    fn push(&mut self, at: usize) {
        self.start.get_or_insert(at);
    }

    fn flush<'a>(&mut self, text: &'a str, end: usize) -> Option<(usize, &'a str)> {
        self.start.take().map(|start| (start, &text[start..end]))
    }
}

/// The main tokenizer
#[derive(Clone)]
pub struct Tokenizer {
    /// The dictionary trie (shared reference)
    trie: Arc<Trie>,
    /// Fixed ASCII matchers
    patterns: PatternMatchers,
    /// Recognizers consulted after the dictionary
    extra: Vec<Arc<dyn Recognizer>>,
}

impl Tokenizer {
    /// Create a new tokenizer from a loaded dictionary and its matchers
    pub fn new(trie: Trie, patterns: PatternMatchers) -> Self {
        Tokenizer::with_arc(Arc::new(trie), patterns)
    }

    /// Create a new tokenizer with a shared trie reference
    pub fn with_arc(trie: Arc<Trie>, patterns: PatternMatchers) -> Self {
        Tokenizer {
            trie,
            patterns,
            extra: Vec::new(),
        }
    }

    /// Load a word list from `reader` and build a tokenizer over it
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let (trie, patterns) = loader::load_dictionary(reader)?;
        Ok(Tokenizer::new(trie, patterns))
    }

    /// Load a word list file and build a tokenizer over it
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let (trie, patterns) = loader::load_dictionary_file(path.as_ref())?;
        Ok(Tokenizer::new(trie, patterns))
    }

    /// Append a recognizer, consulted after the dictionary
    pub fn with_recognizer(mut self, recognizer: impl Recognizer + 'static) -> Self {
        self.extra.push(Arc::new(recognizer));
        self
    }

    /// Get a reference to the trie
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Get the Arc reference to the trie (for sharing)
    pub fn trie_arc(&self) -> Arc<Trie> {
        Arc::clone(&self.trie)
    }

    /// Get the pattern matchers
    pub fn patterns(&self) -> &PatternMatchers {
        &self.patterns
    }

    /// First recognizer, in priority order, that claims the start of `text`
    fn recognize<'a>(&self, text: &'a str) -> Option<(TokenKind, &'a str)> {
        let fixed: [&dyn Recognizer; 3] = [
            &self.patterns.latin,
            &self.patterns.numeric,
            &*self.trie,
        ];
        fixed
            .into_iter()
            .chain(self.extra.iter().map(|r| &**r as &dyn Recognizer))
            .find_map(|r| {
                // Must be a non-empty prefix of `text`
                r.recognize(text)
                    .filter(|found| !found.is_empty() && text.starts_with(found))
                    .map(|found| (r.kind(), &text[..found.len()]))
            })
    }

    /// Run the scan, handing every fragment to `emit` in input order
    fn segment<'a>(&self, text: &'a str, mut emit: impl FnMut(TokenKind, usize, &'a str)) {
        let mut i = 0;
        let mut pending = PendingRun::default();

        while i < text.len() {
            let rest = &text[i..];
            match self.recognize(rest) {
                Some((kind, found)) => {
                    if let Some((start, run)) = pending.flush(text, i) {
                        emit(TokenKind::Unmatched, start, run);
                    }
                    emit(kind, i, found);
                    i += found.len();
                }
                None => {
                    pending.push(i);
                    i += rest.chars().next().map_or(1, char::len_utf8);
                }
            }
        }

        if let Some((start, run)) = pending.flush(text, text.len()) {
            emit(TokenKind::Unmatched, start, run);
        }
    }

    /// Break a string into fragments borrowed from it
    pub fn break_text<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut fragments = Vec::new();
        self.segment(text, |_, _, fragment| fragments.push(fragment));
        trace!(bytes = text.len(), fragments = fragments.len(), "broke text");
        fragments
    }

    /// Tokenize a string, keeping offsets and the recognizer of each token
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        self.segment(text, |kind, start, fragment| {
            tokens.push(Token::new(fragment, start, kind))
        });
        trace!(bytes = text.len(), tokens = tokens.len(), "tokenized text");
        tokens
    }
}

impl TextBreaker for Tokenizer {
    fn break_text_to_tokens(&self, text: &str) -> Vec<String> {
        self.break_text(text).into_iter().map(String::from).collect()
    }
}

/// A breaker that doesn't use a dictionary (alternating whitespace and
/// non-whitespace runs)
pub struct WhitespaceBreaker;

impl WhitespaceBreaker {
    /// Break text at every whitespace / non-whitespace transition
    pub fn break_text(text: &str) -> Vec<&str> {
        let mut fragments = Vec::new();
        let mut start = 0;
        let mut in_space: Option<bool> = None;

        for (i, c) in text.char_indices() {
            let is_space = c.is_whitespace();
            if in_space.is_some_and(|prev| prev != is_space) {
                fragments.push(&text[start..i]);
                start = i;
            }
            in_space = Some(is_space);
        }
        if start < text.len() {
            fragments.push(&text[start..]);
        }

        fragments
    }
}

impl TextBreaker for WhitespaceBreaker {
    fn break_text_to_tokens(&self, text: &str) -> Vec<String> {
        WhitespaceBreaker::break_text(text)
            .into_iter()
            .map(String::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::PatternMatcher;
    use crate::trie::TrieBuilder;

    fn kinds<'a>(tokens: &'a [Token]) -> Vec<(&'a str, TokenKind)> {
        tokens.iter().map(|t| (t.text.as_str(), t.kind)).collect()
    }

    fn make_test_tokenizer() -> Tokenizer {
        let mut builder = TrieBuilder::new();
        builder.load_words("สวัสดี\nครับ\nมา\nมาน\nนคร\nนครราชสีมา");
        Tokenizer::new(builder.build(), PatternMatchers::new().unwrap())
    }

    #[test]
    fn test_dictionary_words() {
        let tokenizer = make_test_tokenizer();
        assert_eq!(tokenizer.break_text("สวัสดีครับ"), vec!["สวัสดี", "ครับ"]);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = make_test_tokenizer();
        assert!(tokenizer.break_text("").is_empty());
        assert!(tokenizer.tokenize("").is_empty());
    }

    #[test]
    fn test_all_unmatched_is_one_token() {
        let tokenizer = make_test_tokenizer();
        let tokens = tokenizer.tokenize("ผค กท");

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "ผค กท");
        assert!(tokens[0].is_unmatched());
    }

    #[test]
    fn test_pending_run_flushed_before_match() {
        let tokenizer = make_test_tokenizer();
        let tokens = tokenizer.tokenize("ผค สวัสดี");

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "ผค ");
        assert_eq!(tokens[0].kind, TokenKind::Unmatched);
        assert_eq!(tokens[1].text, "สวัสดี");
        assert_eq!(tokens[1].kind, TokenKind::Word);
        assert_eq!(tokens[1].start, tokens[0].end());
    }

    #[test]
    fn test_latin_before_dictionary() {
        let tokenizer = make_test_tokenizer();
        let tokens = tokenizer.tokenize("AB12ครับ");

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "AB12");
        assert_eq!(tokens[0].kind, TokenKind::Latin);
        assert_eq!(tokens[1].kind, TokenKind::Word);
    }

    #[test]
    fn test_digits_reported_as_latin_run() {
        // The numeric matcher is shadowed by the alphanumeric one
        let tokenizer = make_test_tokenizer();
        let tokens = tokenizer.tokenize("5555");
        assert_eq!(tokens[0].kind, TokenKind::Latin);
    }

    #[test]
    fn test_ascii_runs_beat_dictionary_entries() {
        // ASCII entries in the word list never win over an alphanumeric run
        let trie: Trie = ["ab", "55", "A4ครับ"].into_iter().collect();
        let tokenizer = Tokenizer::new(trie, PatternMatchers::new().unwrap());
        let tokens = tokenizer.tokenize("abc A4ครับ 555");

        assert_eq!(
            kinds(&tokens),
            vec![
                ("abc", TokenKind::Latin),
                (" ", TokenKind::Unmatched),
                ("A4", TokenKind::Latin),
                ("ครับ ", TokenKind::Unmatched),
                ("555", TokenKind::Latin),
            ]
        );
    }

    #[test]
    fn test_numeric_runs_beat_dictionary_when_latin_is_narrowed() {
        let patterns = PatternMatchers {
            latin: PatternMatcher::new(TokenKind::Latin, "^[A-Za-z]+").unwrap(),
            numeric: PatternMatcher::new(TokenKind::Num, crate::matcher::NUMERIC_PATTERN).unwrap(),
        };
        let trie: Trie = ["55"].into_iter().collect();
        let tokenizer = Tokenizer::new(trie, patterns);

        assert_eq!(
            kinds(&tokenizer.tokenize("555ab")),
            vec![("555", TokenKind::Num), ("ab", TokenKind::Latin)]
        );
    }

    #[test]
    fn test_longest_match_wins() {
        let tokenizer = make_test_tokenizer();
        assert_eq!(
            tokenizer.break_text("นครราชสีมา"),
            vec!["นครราชสีมา"]
        );
        assert_eq!(tokenizer.break_text("นครปฐม"), vec!["นคร", "ปฐม"]);
    }

    #[test]
    fn test_offsets_cover_input() {
        let tokenizer = make_test_tokenizer();
        let text = "ผค 5555 นครราชสีมา";
        let tokens = tokenizer.tokenize(text);

        let mut expected_start = 0;
        for token in &tokens {
            assert_eq!(token.start, expected_start);
            assert_eq!(&text[token.start..token.end()], token.text);
            expected_start = token.end();
        }
        assert_eq!(expected_start, text.len());
    }

    struct PunctRecognizer;

    impl Recognizer for PunctRecognizer {
        fn kind(&self) -> TokenKind {
            TokenKind::Unmatched
        }

        fn recognize<'a>(&self, text: &'a str) -> Option<&'a str> {
            let end = text
                .char_indices()
                .find(|(_, c)| !c.is_ascii_punctuation())
                .map_or(text.len(), |(i, _)| i);
            (end > 0).then(|| &text[..end])
        }
    }

    #[test]
    fn test_extra_recognizer() {
        let tokenizer = make_test_tokenizer().with_recognizer(PunctRecognizer);
        assert_eq!(
            tokenizer.break_text("ผค...ครับ"),
            vec!["ผค", "...", "ครับ"]
        );
    }

    struct FixedRecognizer;

    impl Recognizer for FixedRecognizer {
        fn kind(&self) -> TokenKind {
            TokenKind::Word
        }

        fn recognize<'a>(&self, _text: &'a str) -> Option<&'a str> {
            Some("ค")
        }
    }

    #[test]
    fn test_recognizer_result_must_lead_the_text() {
        let tokenizer = make_test_tokenizer().with_recognizer(FixedRecognizer);

        // "ค" is ignored wherever it does not start the remaining text
        assert_eq!(tokenizer.break_text("กท"), vec!["กท"]);

        let text = "ผค";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(
            kinds(&tokens),
            vec![("ผ", TokenKind::Unmatched), ("ค", TokenKind::Word)]
        );
        assert_eq!(tokens[1].start, "ผ".len());
    }

    #[test]
    fn test_arc_sharing() {
        let tokenizer1 = make_test_tokenizer();
        let tokenizer2 = Tokenizer::with_arc(tokenizer1.trie_arc(), tokenizer1.patterns().clone());

        assert_eq!(
            tokenizer1.break_text("สวัสดีครับ"),
            tokenizer2.break_text("สวัสดีครับ")
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let tokenizer = Arc::new(make_test_tokenizer());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let tokenizer = Arc::clone(&tokenizer);
                std::thread::spawn(move || tokenizer.break_text_to_tokens("สวัสดีครับ"))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), vec!["สวัสดี", "ครับ"]);
        }
    }

    #[test]
    fn test_whitespace_breaker() {
        assert_eq!(
            WhitespaceBreaker::break_text("ผค  555\tกท"),
            vec!["ผค", "  ", "555", "\t", "กท"]
        );
        assert_eq!(WhitespaceBreaker::break_text(" a"), vec![" ", "a"]);
        assert!(WhitespaceBreaker::break_text("").is_empty());
    }
}
