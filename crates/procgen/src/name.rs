//! Syllable-chain name generation.
//!
//! A `NameModel` is built once from a corpus of hyphen-delimited syllable
//! chains and shared read-only afterwards. Generation draws from an ordinary
//! `rand` source, deliberately unrelated to the coordinate-seeded sector
//! streams so naming never perturbs star attributes.

use rand::Rng;
use thiserror::Error;

/// Suffix table; every other entry is empty so roughly half the names carry
/// no suffix.
const SUFFIXES: &[&str] = &[
    "prime", "", "B", "", "alpha", "", "proxima", "", "V", "", "C", "", "X", "", "D", "", "", "",
];

/// Errors detected while building a [`NameModel`].
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus contained no usable syllable chain.
    #[error("corpus contains no syllable chains")]
    Empty,
    /// A syllable has more than one outgoing transition, or one observed
    /// more than once. The walk requires every visited row to hold a unique
    /// successor seen exactly once; a branching corpus would leave the
    /// re-roll loop searching forever.
    #[error("syllable {syllable:?} has branching transitions")]
    Branching { syllable: String },
}

/// Transition-frequency model over a syllable vocabulary.
///
/// The matrix is `(n + 1) x (n + 1)`; row/column `n` is the end sentinel
/// that a chain's final syllable transitions into.
#[derive(Debug, Clone)]
pub struct NameModel {
    syllables: Vec<String>,
    freq: Vec<Vec<u32>>,
}

impl NameModel {
    /// Build the model from newline-delimited chains of hyphen-delimited
    /// syllables, collecting the vocabulary in first-seen order. Blank
    /// lines are skipped. Corpora that violate the unique-successor
    /// precondition are rejected here rather than surfacing as a hang in
    /// [`NameModel::generate`].
    pub fn from_corpus(corpus: &str) -> Result<Self, CorpusError> {
        let chains: Vec<Vec<&str>> = corpus
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.split('-').collect())
            .collect();
        if chains.is_empty() {
            return Err(CorpusError::Empty);
        }

        let mut syllables: Vec<String> = Vec::new();
        for chain in &chains {
            for syl in chain {
                if !syllables.iter().any(|s| s == syl) {
                    syllables.push((*syl).to_string());
                }
            }
        }

        let n = syllables.len();
        let index_of = |syl: &str, vocab: &[String]| {
            vocab.iter().position(|s| s == syl).unwrap_or(n)
        };

        let mut freq = vec![vec![0u32; n + 1]; n + 1];
        for chain in &chains {
            for pair in chain.windows(2) {
                let i = index_of(pair[0], &syllables);
                let j = index_of(pair[1], &syllables);
                freq[i][j] += 1;
            }
            if let Some(&last) = chain.last() {
                let i = index_of(last, &syllables);
                freq[i][n] += 1;
            }
        }

        for (i, row) in freq.iter().enumerate().take(n) {
            let outgoing = row.iter().filter(|&&count| count > 0).count();
            let repeated = row.iter().any(|&count| count > 1);
            if outgoing > 1 || repeated {
                return Err(CorpusError::Branching {
                    syllable: syllables[i].clone(),
                });
            }
        }

        Ok(Self { syllables, freq })
    }

    /// Number of distinct syllables in the vocabulary.
    pub fn syllable_count(&self) -> usize {
        self.syllables.len()
    }

    /// Generate one name: a 2–3 syllable walk from a random start, an
    /// optional suffix, every whitespace token title-cased.
    ///
    /// When the walk reaches the end sentinel before the length is used up,
    /// the cursor re-rolls to a fresh random syllable, same as the start.
    pub fn generate(&self, rng: &mut impl Rng) -> String {
        let n = self.syllables.len();
        let mut name = String::new();
        let mut remaining = rng.gen_range(2..=3);
        let mut cursor = rng.gen_range(0..n);

        while remaining > 0 {
            let successor = loop {
                if let Some(next) = self.freq[cursor].iter().position(|&count| count == 1) {
                    break next;
                }
                cursor = rng.gen_range(0..n);
            };
            name.push_str(&self.syllables[cursor]);
            cursor = successor;
            remaining -= 1;
        }

        name.push(' ');
        name.push_str(SUFFIXES[rng.gen_range(0..SUFFIXES.len())]);

        name.split_whitespace()
            .map(title_case)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Convenience wrapper over the thread-local random source.
    pub fn generate_name(&self) -> String {
        self.generate(&mut rand::thread_rng())
    }
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
