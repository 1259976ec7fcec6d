//! Text normalization for similarity matching
//!
//! Query text and candidate text go through the same pipeline so their
//! tokens are directly comparable:
//! lower-case, split on anything that is not alphanumeric, drop short
//! tokens, then optionally drop stop words and stem.

use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Tokens shorter than this (in chars) are discarded
pub const MIN_TOKEN_CHARS: usize = 2;

/// Common English stop words to filter out during tokenization
static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Porter stemmer for English text
static STEMMER: OnceLock<Stemmer> = OnceLock::new();

fn get_stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| {
        [
            "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is",
            "it", "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there",
            "these", "they", "this", "to", "was", "will", "with",
        ]
        .iter()
        .copied()
        .collect()
    })
}

fn get_stemmer() -> &'static Stemmer {
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

/// Options controlling how text is turned into tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOptions {
    /// Drop common English stop words
    pub stop_words: bool,
    /// Apply Porter stemming ("habits" and "habit" match)
    pub stemming: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            stop_words: true,
            stemming: false,
        }
    }
}

/// Upper bound on stemming passes per token; English stems settle in two or three
const MAX_STEM_PASSES: usize = 8;

/// Stem until the stemmer stops changing the token.
///
/// A single pass is not stable ("agreed" -> "agre" -> "agr"), so stemming
/// an already stemmed token would drift.
fn stem_fully(stemmer: &Stemmer, token: &str) -> String {
    let mut current = token.to_string();
    for _ in 0..MAX_STEM_PASSES {
        let next = stemmer.stem(&current);
        if next == current {
            break;
        }
        current = next.into_owned();
    }
    current
}

fn keep_token(token: &str, options: TextOptions) -> bool {
    token.chars().count() >= MIN_TOKEN_CHARS
        && !(options.stop_words && get_stop_words().contains(token))
}

/// Normalize free text into an ordered sequence of comparable tokens.
///
/// Never fails: empty or whitespace-only input yields an empty vector.
/// Normalizing the joined output again returns the same tokens.
pub fn normalize(text: &str, options: TextOptions) -> Vec<String> {
    let tokens = text
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| keep_token(s, options))
        .map(|s| s.to_string())
        .collect::<Vec<_>>();

    if !options.stemming {
        return tokens;
    }

    // Stems can be short or collide with a stop word, so filter again
    let stemmer = get_stemmer();
    tokens
        .iter()
        .map(|t| stem_fully(stemmer, t))
        .filter(|t| keep_token(t, options))
        .collect()
}

/// Normalize with the default options
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text, TextOptions::default())
}
