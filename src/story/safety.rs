use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

/// Words that must never appear in a bedtime story, matched as whole words
/// against lowercased text. Some entries repeat across languages.
pub const UNSAFE_WORDS: &[&str] = &[
    // Italian - death/violence
    "morte", "morto", "morta", "muore", "uccide", "ucciso", "sangue", "violenza", "violento",
    "ferisce", "ferita", "orrore", "terrore",
    // English - death/violence
    "death", "dead", "dies", "died", "kill", "killed", "murder", "blood", "violence", "violent",
    "hurt", "pain", "horror", "terror",
    // French - death/violence
    "mort", "morte", "meurt", "tué", "tuée", "sang", "violence", "violent", "blessé", "horreur",
    "terreur",
    // Spanish - death/violence
    "muerte", "muerto", "muerta", "muere", "mata", "matado", "sangre", "violencia", "violento",
    "herido", "horror", "terror",
    // Italian - fear/negative
    "paura", "spaventoso", "mostro", "demonio", "inferno", "incubo", "male", "cattivo", "odio",
    "triste", "piange",
    // English - fear/negative
    "fear", "scary", "monster", "demon", "hell", "nightmare", "evil", "bad", "hate", "sad", "cry",
    "cries",
    // French - fear/negative
    "peur", "effrayant", "monstre", "démon", "enfer", "cauchemar", "mal", "mauvais", "haine",
    "triste", "pleure",
    // Spanish - fear/negative
    "miedo", "aterrador", "monstruo", "demonio", "infierno", "pesadilla", "malo", "mala", "odio",
    "triste", "llora",
    // Insults
    "stupid", "stupido", "idiot", "idiota", "ugly", "brutto",
];

static UNSAFE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    UNSAFE_WORDS
        .iter()
        .map(|word| {
            let pattern = format!(r"\b{}\b", regex::escape(word));
            (*word, Regex::new(&pattern).expect("valid regex"))
        })
        .collect()
});

/// Returns false as soon as any blocklisted word shows up in the text.
pub fn is_text_safe(text: &str) -> bool {
    let lowered = text.to_lowercase();
    for (word, pattern) in UNSAFE_PATTERNS.iter() {
        if pattern.is_match(&lowered) {
            warn!("Unsafe word detected: {word}");
            return false;
        }
    }
    true
}
