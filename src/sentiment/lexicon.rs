//! Word lists for the lexicon analyzer.
//!
//! Each scored entry is `(word, polarity, subjectivity)`. Values follow the
//! conventions of adjective-based sentiment lexicons: polarity in `[-1, 1]`,
//! subjectivity in `[0, 1]`. Vocabulary leans toward nineteenth-century prose.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Scored vocabulary
pub static WORDS: Lazy<HashMap<&'static str, (f64, f64)>> = Lazy::new(|| {
    SCORED.iter().map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity))).collect()
});

/// Words that scale the next scored word
pub static INTENSIFIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    MODIFIERS.iter().copied().collect()
});

/// Words that flip the next scored word
pub const NEGATIONS: &[&str] = &[
    "not", "no", "never", "nor", "neither", "without", "cannot", "can't", "don't", "doesn't",
    "didn't", "isn't", "wasn't", "aren't", "weren't", "won't", "wouldn't", "couldn't",
    "shouldn't", "hardly", "scarcely",
];

const MODIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("exceedingly", 1.5),
    ("most", 1.3),
    ("more", 1.2),
    ("so", 1.2),
    ("too", 1.2),
    ("really", 1.2),
    ("truly", 1.2),
    ("quite", 1.1),
    ("utterly", 1.5),
    ("deeply", 1.3),
    ("perfectly", 1.3),
    ("entirely", 1.3),
    ("somewhat", 0.8),
    ("rather", 0.9),
    ("slightly", 0.7),
    ("less", 0.7),
    ("barely", 0.6),
];

const SCORED: &[(&str, f64, f64)] = &[
    // positive
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("happiness", 0.8, 1.0),
    ("joy", 0.8, 0.9),
    ("joyful", 0.8, 0.9),
    ("glad", 0.5, 1.0),
    ("kind", 0.6, 0.9),
    ("kindness", 0.6, 0.9),
    ("love", 0.5, 0.6),
    ("beautiful", 0.85, 1.0),
    ("free", 0.4, 0.8),
    ("freedom", 0.5, 0.7),
    ("liberty", 0.5, 0.6),
    ("hope", 0.5, 0.6),
    ("hopeful", 0.5, 0.7),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("noble", 0.6, 0.7),
    ("brave", 0.7, 0.8),
    ("courage", 0.6, 0.7),
    ("wise", 0.7, 0.7),
    ("just", 0.3, 0.4),
    ("justice", 0.4, 0.5),
    ("right", 0.3, 0.5),
    ("true", 0.35, 0.65),
    ("bright", 0.7, 0.8),
    ("safe", 0.5, 0.5),
    ("pleasant", 0.7, 0.8),
    ("pleasure", 0.6, 0.8),
    ("delight", 0.8, 0.9),
    ("delightful", 0.9, 1.0),
    ("excellent", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("glorious", 0.9, 1.0),
    ("blessed", 0.6, 0.8),
    ("holy", 0.4, 0.6),
    ("peace", 0.5, 0.5),
    ("peaceful", 0.6, 0.6),
    ("gentle", 0.5, 0.7),
    ("generous", 0.7, 0.8),
    ("grateful", 0.7, 0.9),
    ("proud", 0.5, 0.9),
    ("strong", 0.45, 0.7),
    ("honest", 0.6, 0.8),
    ("humane", 0.6, 0.7),
    ("fine", 0.4, 0.5),
    ("fair", 0.7, 0.9),
    ("triumph", 0.7, 0.8),
    ("victory", 0.6, 0.6),
    ("knowledge", 0.2, 0.3),
    ("learn", 0.2, 0.3),
    ("education", 0.2, 0.2),
    ("light", 0.3, 0.4),
    ("fortunate", 0.6, 0.8),
    ("dear", 0.4, 0.7),
    ("warm", 0.5, 0.6),
    ("worthy", 0.6, 0.7),
    ("sweet", 0.6, 0.8),
    ("comfort", 0.5, 0.6),
    ("sacred", 0.5, 0.6),
    ("righteous", 0.6, 0.8),
    ("manhood", 0.3, 0.5),
    // negative
    ("bad", -0.7, 0.67),
    ("worse", -0.6, 0.6),
    ("worst", -1.0, 1.0),
    ("evil", -1.0, 1.0),
    ("cruel", -1.0, 1.0),
    ("cruelty", -0.9, 1.0),
    ("brutal", -0.875, 1.0),
    ("brutality", -0.85, 0.9),
    ("savage", -0.8, 0.9),
    ("wicked", -0.9, 1.0),
    ("horrible", -1.0, 1.0),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("sad", -0.5, 1.0),
    ("sorrow", -0.6, 0.9),
    ("misery", -0.8, 0.9),
    ("miserable", -1.0, 1.0),
    ("wretched", -0.9, 1.0),
    ("wretchedness", -0.9, 1.0),
    ("pain", -0.6, 0.7),
    ("painful", -0.7, 0.9),
    ("suffering", -0.7, 0.8),
    ("agony", -0.9, 0.9),
    ("fear", -0.5, 0.8),
    ("afraid", -0.6, 0.9),
    ("dark", -0.15, 0.4),
    ("darkness", -0.3, 0.5),
    ("hate", -0.8, 0.9),
    ("hatred", -0.8, 0.9),
    ("slave", -0.5, 0.5),
    ("slavery", -0.7, 0.6),
    ("slaveholder", -0.5, 0.5),
    ("bondage", -0.6, 0.6),
    ("chains", -0.4, 0.5),
    ("whip", -0.6, 0.5),
    ("whipped", -0.7, 0.6),
    ("lash", -0.6, 0.5),
    ("blood", -0.3, 0.4),
    ("bloody", -0.8, 0.9),
    ("death", -0.5, 0.4),
    ("dead", -0.2, 0.4),
    ("dying", -0.4, 0.5),
    ("poor", -0.4, 0.6),
    ("hungry", -0.4, 0.6),
    ("cold", -0.6, 1.0),
    ("ignorant", -0.7, 0.8),
    ("ignorance", -0.6, 0.7),
    ("unjust", -0.8, 0.9),
    ("injustice", -0.8, 0.8),
    ("wrong", -0.5, 0.9),
    ("shame", -0.6, 0.8),
    ("shameful", -0.8, 0.9),
    ("guilty", -0.5, 0.7),
    ("angry", -0.5, 1.0),
    ("anger", -0.5, 0.9),
    ("bitter", -0.4, 0.7),
    ("degraded", -0.7, 0.8),
    ("degradation", -0.7, 0.8),
    ("inhuman", -0.8, 0.9),
    ("despair", -0.8, 0.9),
    ("desperate", -0.6, 0.9),
    ("lonely", -0.5, 0.9),
    ("sick", -0.7, 0.9),
    ("weak", -0.4, 0.7),
    ("helpless", -0.6, 0.8),
    ("hard", -0.3, 0.5),
    ("harsh", -0.6, 0.8),
    ("violent", -0.8, 0.9),
    ("violence", -0.7, 0.8),
    ("tyranny", -0.8, 0.8),
    ("tyrant", -0.7, 0.8),
    ("oppression", -0.7, 0.7),
    ("hell", -0.8, 0.9),
    ("curse", -0.7, 0.8),
    ("cursed", -0.7, 0.9),
    ("mean", -0.3125, 0.6875),
    ("ugly", -0.7, 1.0),
    ("stupid", -0.8, 1.0),
];
