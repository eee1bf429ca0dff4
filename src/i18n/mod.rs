//! Languages, translated UI strings and the other localized data tables:
//! the astronomy dictionary, the about page and the poetic error messages.

mod about;
mod dictionary;
mod ui;

pub use about::{AboutContent, about_content};
pub use dictionary::{DictionaryTerm, dictionary_terms};
pub use ui::{UiText, ui_text};

use tracing::warn;

/// Languages the storyteller and the UI speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    It,
    Fr,
    Es,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::It, Language::Fr, Language::Es];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::It => "it",
            Language::Fr => "fr",
            Language::Es => "es",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::It => "Italiano",
            Language::Fr => "Français",
            Language::Es => "Español",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::En => "🇺🇸",
            Language::It => "🇮🇹",
            Language::Fr => "🇫🇷",
            Language::Es => "🇪🇸",
        }
    }

    /// Lenient lookup for user input: unknown codes warn and fall back to
    /// English instead of failing the request.
    pub fn from_code(code: &str) -> Language {
        match code.parse() {
            Ok(language) => language,
            Err(_) => {
                warn!("Unsupported language {code}, defaulting to 'en'");
                Language::En
            }
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug)]
pub struct UnsupportedLanguage(pub String);

impl std::fmt::Display for UnsupportedLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported language {}", self.0)
    }
}

impl std::error::Error for UnsupportedLanguage {}

impl std::str::FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "it" => Ok(Language::It),
            "fr" => Ok(Language::Fr),
            "es" => Ok(Language::Es),
            other => Err(UnsupportedLanguage(other.to_string())),
        }
    }
}

/// Cities offered by the location autocomplete.
pub const POPULAR_CITIES: &[&str] = &[
    "Paris, France", "London, UK", "New York, USA", "Tokyo, Japan",
    "Roma, Italia", "Berlin, Germany", "Madrid, Spain", "Amsterdam, Netherlands",
    "Vienna, Austria", "Prague, Czech Republic", "Barcelona, Spain", "Lisbon, Portugal",
    "Athens, Greece", "Stockholm, Sweden", "Copenhagen, Denmark", "Oslo, Norway",
    "Helsinki, Finland", "Warsaw, Poland", "Budapest, Hungary", "Dublin, Ireland",
    "Brussels, Belgium", "Zurich, Switzerland", "Milan, Italy", "Munich, Germany",
    "Venice, Italy", "Florence, Italy", "Naples, Italy", "Turin, Italy",
    "Los Angeles, USA", "San Francisco, USA", "Chicago, USA", "Boston, USA",
    "Seattle, USA", "Miami, USA", "Las Vegas, USA", "Washington DC, USA",
    "Toronto, Canada", "Vancouver, Canada", "Montreal, Canada", "Sydney, Australia",
    "Melbourne, Australia", "Auckland, New Zealand", "Singapore", "Hong Kong",
    "Seoul, South Korea", "Beijing, China", "Shanghai, China", "Bangkok, Thailand",
    "Mumbai, India", "Delhi, India", "Dubai, UAE", "Tel Aviv, Israel",
    "Istanbul, Turkey", "Cairo, Egypt", "Cape Town, South Africa",
    "Buenos Aires, Argentina", "Rio de Janeiro, Brazil", "São Paulo, Brazil",
    "Mexico City, Mexico", "Lima, Peru", "Santiago, Chile",
];

/// What went wrong, in categories a bedtime app can apologize for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoeticError {
    Location,
    StoryGeneration,
    Api,
    Network,
    Timeout,
    Generic,
}

impl PoeticError {
    pub fn code(self) -> &'static str {
        match self {
            PoeticError::Location => "location_error",
            PoeticError::StoryGeneration => "story_generation_error",
            PoeticError::Api => "api_error",
            PoeticError::Network => "network_error",
            PoeticError::Timeout => "timeout_error",
            PoeticError::Generic => "generic_error",
        }
    }

    pub fn message(self, language: Language) -> &'static str {
        match language {
            Language::En => match self {
                PoeticError::Location => {
                    "The stars are being shy tonight! Please try a different location."
                }
                PoeticError::StoryGeneration => {
                    "The Moon is playing hide and seek with the story! Please try again."
                }
                PoeticError::Api => {
                    "A comet just flew across the servers! Let's try again in a moment."
                }
                PoeticError::Network => {
                    "The cosmic winds are a bit strong tonight! Please check your connection."
                }
                PoeticError::Timeout => "Even the fastest star needs a break! Please try again.",
                PoeticError::Generic => {
                    "The universe is having a little nap right now. Please try again soon!"
                }
            },
            Language::It => match self {
                PoeticError::Location => {
                    "Le stelle sono timide stasera! Per favore, prova una posizione diversa."
                }
                PoeticError::StoryGeneration => {
                    "La Luna sta giocando a nascondino con la storia! Riprova."
                }
                PoeticError::Api => {
                    "Una cometa ha attraversato i server! Riproviamo tra un momento."
                }
                PoeticError::Network => {
                    "I venti cosmici sono forti stasera! Per favore, controlla la tua connessione."
                }
                PoeticError::Timeout => {
                    "Anche la stella più veloce ha bisogno di una pausa! Riprova."
                }
                PoeticError::Generic => {
                    "L'universo sta facendo un piccolo pisolino ora. Riprova presto!"
                }
            },
            Language::Fr => match self {
                PoeticError::Location => {
                    "Les étoiles sont timides ce soir! Veuillez essayer un endroit différent."
                }
                PoeticError::StoryGeneration => {
                    "La Lune joue à cache-cache avec l'histoire! Réessayez."
                }
                PoeticError::Api => {
                    "Une comète vient de traverser les serveurs! Réessayons dans un instant."
                }
                PoeticError::Network => {
                    "Les vents cosmiques sont forts ce soir! Vérifiez votre connexion."
                }
                PoeticError::Timeout => {
                    "Même la plus rapide des étoiles a besoin d'une pause! Réessayez."
                }
                PoeticError::Generic => {
                    "L'univers fait une petite sieste en ce moment. Réessayez bientôt!"
                }
            },
            Language::Es => match self {
                PoeticError::Location => {
                    "¡Las estrellas están tímidas esta noche! Por favor, intenta con una ubicación diferente."
                }
                PoeticError::StoryGeneration => {
                    "¡La Luna está jugando al escondite con la historia! Intenta de nuevo."
                }
                PoeticError::Api => {
                    "¡Un cometa acaba de atravesar los servidores! Intentemos de nuevo en un momento."
                }
                PoeticError::Network => {
                    "¡Los vientos cósmicos están fuertes esta noche! Por favor, verifica tu conexión."
                }
                PoeticError::Timeout => {
                    "¡Incluso la estrella más rápida necesita un descanso! Intenta de nuevo."
                }
                PoeticError::Generic => {
                    "¡El universo está tomando una pequeña siesta ahora! ¡Intenta de nuevo pronto!"
                }
            },
        }
    }
}

/// Full apology shown to the user, poetic message included.
pub fn format_error_message(kind: PoeticError, language: Language) -> String {
    let (oh_no, try_again) = match language {
        Language::En => ("✨ **Oh my!**", "Please try again!"),
        Language::It => ("✨ **Oh no!**", "Riprova!"),
        Language::Fr => ("✨ **Oh là là!**", "Réessayez!"),
        Language::Es => ("✨ **¡Ay, no!**", "¡Intenta de nuevo!"),
    };
    format!("{oh_no} {}\n\n{try_again}", kind.message(language))
}

pub fn did_you_know_title(language: Language) -> &'static str {
    match language {
        Language::En => "💡 Did You Know?",
        Language::It => "💡 Lo Sapevi?",
        Language::Fr => "💡 Le Saviez-Vous?",
        Language::Es => "💡 ¿Sabías?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), language);
        }
    }

    #[test]
    fn unknown_code_defaults_to_english() {
        assert_eq!(Language::from_code("de"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
    }

    #[test]
    fn strict_parse_rejects_unknown_codes() {
        let err = "EN".parse::<Language>().err().expect("error");
        assert_eq!(err.to_string(), "unsupported language EN");
    }

    #[test]
    fn poetic_errors_exist_for_every_language() {
        for language in Language::ALL {
            for kind in [
                PoeticError::Location,
                PoeticError::StoryGeneration,
                PoeticError::Api,
                PoeticError::Network,
                PoeticError::Timeout,
                PoeticError::Generic,
            ] {
                assert!(!kind.message(language).is_empty());
            }
        }
    }

    #[test]
    fn formatted_error_wraps_the_poetic_message() {
        let text = format_error_message(PoeticError::Location, Language::It);
        assert!(text.starts_with("✨ **Oh no!** Le stelle sono timide stasera!"));
        assert!(text.ends_with("Riprova!"));
    }

    #[test]
    fn display_prints_the_code() {
        assert_eq!(Language::Fr.to_string(), "fr");
    }
}
