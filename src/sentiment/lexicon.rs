//! Lexicon-based polarity scorer for financial headlines.
//!
//! Scoring walks the tokens of preprocessed text:
//! 1. Look up word polarities
//! 2. A negation flips and halves the next matched word
//! 3. An intensifier scales the next matched word
//!
//! The score is the mean over matched words, clamped to `[-1, 1]`; text with
//! no matched words scores exactly zero.

use std::collections::HashMap;

use crate::sentiment::preprocess::preprocess_text;
use crate::sentiment::scorer::PolarityScorer;
use crate::sentiment::SentimentError;

const NEGATION_FACTOR: f64 = -0.5;

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("great", 0.8),
    ("excellent", 1.0),
    ("good", 0.7),
    ("strong", 0.4),
    ("stronger", 0.5),
    ("beat", 0.5),
    ("beats", 0.5),
    ("exceed", 0.6),
    ("exceeds", 0.6),
    ("exceeded", 0.6),
    ("surge", 0.7),
    ("surges", 0.7),
    ("surged", 0.7),
    ("soar", 0.8),
    ("soars", 0.8),
    ("soared", 0.8),
    ("rally", 0.6),
    ("rallies", 0.6),
    ("gain", 0.5),
    ("gains", 0.5),
    ("growth", 0.5),
    ("grow", 0.4),
    ("grows", 0.4),
    ("profit", 0.5),
    ("profits", 0.5),
    ("profitable", 0.6),
    ("record", 0.4),
    ("rise", 0.4),
    ("rises", 0.4),
    ("higher", 0.3),
    ("upgrade", 0.6),
    ("upgraded", 0.6),
    ("outperform", 0.6),
    ("outperforms", 0.6),
    ("positive", 0.5),
    ("optimistic", 0.6),
    ("success", 0.6),
    ("successful", 0.7),
    ("win", 0.6),
    ("wins", 0.6),
    ("best", 1.0),
    ("recovery", 0.4),
    ("rebound", 0.4),
    ("boost", 0.5),
    ("boosts", 0.5),
    ("innovative", 0.5),
    ("impressive", 0.8),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("terrible", -1.0),
    ("awful", -1.0),
    ("bad", -0.7),
    ("poor", -0.4),
    ("weak", -0.4),
    ("weaker", -0.5),
    ("worst", -1.0),
    ("loss", -0.6),
    ("losses", -0.6),
    ("lose", -0.5),
    ("loses", -0.5),
    ("miss", -0.5),
    ("misses", -0.5),
    ("missed", -0.5),
    ("decline", -0.5),
    ("declines", -0.5),
    ("declined", -0.5),
    ("drop", -0.5),
    ("drops", -0.5),
    ("dropped", -0.5),
    ("fall", -0.4),
    ("falls", -0.4),
    ("fell", -0.4),
    ("plunge", -0.8),
    ("plunges", -0.8),
    ("plunged", -0.8),
    ("crash", -0.9),
    ("crashes", -0.9),
    ("slump", -0.6),
    ("slumps", -0.6),
    ("downgrade", -0.6),
    ("downgraded", -0.6),
    ("underperform", -0.6),
    ("lawsuit", -0.5),
    ("fraud", -0.9),
    ("scandal", -0.8),
    ("layoffs", -0.5),
    ("cut", -0.3),
    ("cuts", -0.3),
    ("warning", -0.4),
    ("warns", -0.4),
    ("concern", -0.4),
    ("concerns", -0.4),
    ("fear", -0.5),
    ("fears", -0.5),
    ("negative", -0.5),
    ("pessimistic", -0.6),
    ("lower", -0.3),
    ("disappointing", -0.7),
    ("disappoints", -0.7),
    ("bankruptcy", -0.9),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "cannot", "cant", "dont", "doesnt", "didnt",
    "wont", "isnt", "arent", "wasnt", "werent", "hardly", "barely",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("really", 1.2),
    ("significantly", 1.3),
    ("sharply", 1.4),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("marginally", 0.5),
];

/// Word-polarity lexicon with negation and intensifier handling.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    words: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        let words = POSITIVE_WORDS
            .iter()
            .chain(NEGATIVE_WORDS.iter())
            .map(|(word, score)| (word.to_string(), *score))
            .collect();
        let intensifiers = INTENSIFIERS
            .iter()
            .map(|(word, factor)| (word.to_string(), *factor))
            .collect();

        Self {
            words,
            intensifiers,
        }
    }

    /// Add or replace a word; the score is clamped to `[-1, 1]`.
    pub fn with_word(mut self, word: &str, score: f64) -> Self {
        self.add_word(word, score);
        self
    }

    /// The word is normalized like scored text, so `"Co-op"` matches `co-op`.
    /// Returns `false`, adding nothing, when it does not normalize to a
    /// single token.
    pub fn add_word(&mut self, word: &str, score: f64) -> bool {
        let normalized = preprocess_text(word);
        let mut tokens = normalized.split_whitespace();
        let (Some(token), None) = (tokens.next(), tokens.next()) else {
            return false;
        };
        self.words.insert(token.to_string(), score.clamp(-1.0, 1.0));
        true
    }

    pub fn word_score(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        NEGATIONS.contains(&word)
    }

    fn score_tokens(&self, text: &str) -> f64 {
        let mut matched = Vec::new();
        let mut negate = false;
        let mut intensity = 1.0;

        for token in text.split_whitespace() {
            if self.is_negation(token) {
                negate = true;
                continue;
            }
            if let Some(factor) = self.intensifiers.get(token) {
                intensity = *factor;
                continue;
            }

            if let Some(score) = self.word_score(token) {
                let sign = if negate { NEGATION_FACTOR } else { 1.0 };
                matched.push(score * intensity * sign);
            }
            negate = false;
            intensity = 1.0;
        }

        if matched.is_empty() {
            return 0.0;
        }
        let mean = matched.iter().sum::<f64>() / matched.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> Result<f64, SentimentError> {
        Ok(self.score_tokens(text))
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}
