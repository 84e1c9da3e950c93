//! General-purpose polarity/subjectivity lexicon for social-media text.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Polarity and subjectivity weights for a single word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordSentiment {
    /// In `[-1.0, 1.0]`.
    pub polarity: f64,
    /// In `[0.0, 1.0]`.
    pub subjectivity: f64,
}

/// Word weights as `(word, polarity, subjectivity)`.
///
/// Keys are lowercase single words.
const WORDS: &[(&str, f64, f64)] = &[
    // Positive
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("brilliant", 0.9, 1.0),
    ("clean", 0.37, 0.69),
    ("comfortable", 0.4, 0.7),
    ("cool", 0.35, 0.65),
    ("decent", 0.167, 0.667),
    ("delicious", 1.0, 1.0),
    ("delighted", 0.7, 0.8),
    ("easy", 0.43, 0.83),
    ("efficient", 0.5, 0.6),
    ("enjoy", 0.4, 0.5),
    ("enjoyed", 0.4, 0.5),
    ("excellent", 1.0, 1.0),
    ("exceeded", 0.3, 0.4),
    ("excited", 0.375, 0.75),
    ("exciting", 0.3, 0.8),
    ("fantastic", 0.4, 0.9),
    ("fast", 0.2, 0.6),
    ("favorite", 0.5, 1.0),
    ("fine", 0.05, 0.5),
    ("fun", 0.3, 0.2),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("gorgeous", 0.7, 1.0),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("helpful", 0.5, 0.5),
    ("impressed", 0.7, 0.8),
    ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 0.9),
    ("interesting", 0.5, 0.5),
    ("like", 0.2, 0.4),
    ("liked", 0.3, 0.5),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("lovely", 0.5, 0.75),
    ("nice", 0.6, 1.0),
    ("okay", 0.15, 0.5),
    ("ok", 0.15, 0.5),
    ("perfect", 1.0, 1.0),
    ("pleased", 0.5, 0.8),
    ("positive", 0.23, 0.55),
    ("quality", 0.2, 0.3),
    ("recommend", 0.4, 0.5),
    ("recommended", 0.4, 0.5),
    ("reliable", 0.5, 0.6),
    ("satisfied", 0.5, 1.0),
    ("smooth", 0.4, 0.6),
    ("solid", 0.3, 0.4),
    ("special", 0.357, 0.571),
    ("stunning", 0.5, 1.0),
    ("superb", 1.0, 1.0),
    ("thanks", 0.2, 0.2),
    ("useful", 0.3, 0.3),
    ("valuable", 0.5, 0.6),
    ("win", 0.8, 0.4),
    ("wonderful", 1.0, 1.0),
    ("worth", 0.3, 0.1),
    ("wow", 0.1, 1.0),
    // Negative
    ("angry", -0.5, 1.0),
    ("annoying", -0.8, 0.9),
    ("average", -0.15, 0.4),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("boring", -1.0, 1.0),
    ("broken", -0.4, 0.4),
    ("cheap", -0.2, 0.7),
    ("confusing", -0.3, 0.5),
    ("crap", -0.8, 0.8),
    ("difficult", -0.5, 1.0),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("disgusting", -1.0, 1.0),
    ("dislike", -0.4, 0.6),
    ("expensive", -0.5, 0.7),
    ("fail", -0.5, 0.3),
    ("failed", -0.5, 0.3),
    ("fake", -0.5, 1.0),
    ("frustrated", -0.7, 0.4),
    ("frustrating", -0.4, 0.6),
    ("hate", -0.8, 0.9),
    ("hated", -0.9, 0.7),
    ("horrible", -1.0, 1.0),
    ("mediocre", -0.3, 0.6),
    ("poor", -0.4, 0.6),
    ("problem", -0.3, 0.3),
    ("rude", -0.3, 0.6),
    ("sad", -0.5, 1.0),
    ("scam", -0.8, 0.8),
    ("slow", -0.3, 0.39),
    ("terrible", -1.0, 1.0),
    ("ugly", -0.7, 1.0),
    ("unhappy", -0.6, 0.9),
    ("useless", -0.5, 0.2),
    ("waste", -0.2, 0.1),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
];

/// Words that scale the polarity and subjectivity of the next lexicon word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.4),
    ("particularly", 1.2),
    ("quite", 1.1),
    ("really", 1.3),
    ("so", 1.2),
    ("super", 1.3),
    ("too", 1.2),
    ("totally", 1.3),
    ("truly", 1.3),
    ("very", 1.3),
    // Downtoners
    ("barely", 0.5),
    ("kinda", 0.7),
    ("slightly", 0.5),
    ("somewhat", 0.7),
];

/// Words that invert the next lexicon word. Contractions ending in `n't` are
/// recognized separately.
const NEGATIONS: &[&str] = &[
    "cannot", "cant", "dont", "neither", "never", "no", "nobody", "none", "nor", "not",
    "nothing", "nowhere", "wont", "without",
];

static SHARED: OnceLock<Lexicon> = OnceLock::new();

/// Read-only lookup tables used by the scorer.
#[derive(Debug)]
pub struct Lexicon {
    words: HashMap<&'static str, WordSentiment>,
    intensifiers: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl Lexicon {
    /// Process-wide lexicon, built on first use.
    ///
    /// Concurrent first callers block until the single build completes.
    pub fn shared() -> &'static Lexicon {
        SHARED.get_or_init(|| {
            let lexicon = Lexicon::builtin();
            tracing::debug!(
                words = lexicon.words.len(),
                intensifiers = lexicon.intensifiers.len(),
                negations = lexicon.negations.len(),
                "sentiment lexicon initialized"
            );
            lexicon
        })
    }

    /// Build a fresh copy of the built-in tables.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            words: WORDS
                .iter()
                .map(|&(word, polarity, subjectivity)| {
                    (
                        word,
                        WordSentiment {
                            polarity,
                            subjectivity,
                        },
                    )
                })
                .collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }

    #[must_use]
    pub fn word(&self, token: &str) -> Option<WordSentiment> {
        self.words.get(token).copied()
    }

    #[must_use]
    pub fn intensifier(&self, token: &str) -> Option<f64> {
        self.intensifiers.get(token).copied()
    }

    #[must_use]
    pub fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(token) || token.ends_with("n't")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_returns_same_instance() {
        let a = Lexicon::shared();
        let b = Lexicon::shared();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn shared_initializes_once_across_threads() {
        let addrs: Vec<usize> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| std::ptr::from_ref(Lexicon::shared()) as usize))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("thread panicked"))
                .collect()
        });
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn word_weights_stay_in_domain() {
        for &(word, polarity, subjectivity) in WORDS {
            assert!(
                (-1.0..=1.0).contains(&polarity),
                "{word} polarity out of range: {polarity}"
            );
            assert!(
                (0.0..=1.0).contains(&subjectivity),
                "{word} subjectivity out of range: {subjectivity}"
            );
        }
    }

    #[test]
    fn words_are_lowercase_and_unique() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.words.len(), WORDS.len(), "duplicate lexicon key");
        for &(word, _, _) in WORDS {
            assert_eq!(word, word.to_lowercase());
        }
    }

    #[test]
    fn modifiers_do_not_overlap_words() {
        let lexicon = Lexicon::builtin();
        for &(word, _) in INTENSIFIERS {
            assert!(lexicon.word(word).is_none(), "{word} is both modifier and word");
        }
        for &word in NEGATIONS {
            assert!(lexicon.word(word).is_none(), "{word} is both negation and word");
        }
    }

    #[test]
    fn contractions_are_negations() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.is_negation("don't"));
        assert!(lexicon.is_negation("isn't"));
        assert!(lexicon.is_negation("not"));
        assert!(!lexicon.is_negation("note"));
    }
}
