//! Selection heuristic for tonight's featured object.
//!
//! Fixed bonuses, no magnitude term: the stories are read indoors, so
//! "interesting" beats "bright".

use crate::cache::ShownLedger;

use super::{ObjectKind, capitalize};

const SPECIAL_EVENT_BONUS: u32 = 100;
const PLANET_BONUS: u32 = 50;
const ICONIC_BONUS: u32 = 30;
const NOVELTY_BONUS: u32 = 20;

/// Planets kids ask for by name.
pub const ICONIC_PLANETS: &[&str] = &["Jupiter", "Saturn", "Mars", "Venus"];

pub fn score_object(
    name: &str,
    kind: ObjectKind,
    is_special_event: bool,
    ledger: &ShownLedger,
) -> u32 {
    let mut score = 0;

    if is_special_event {
        score += SPECIAL_EVENT_BONUS;
        tracing::info!("{name}: +{SPECIAL_EVENT_BONUS} (special event)");
    }

    let iconic = ICONIC_PLANETS.contains(&capitalize(name).as_str());
    if kind == ObjectKind::Planet || iconic {
        score += PLANET_BONUS;
        tracing::info!("{name}: +{PLANET_BONUS} (planet)");
    }
    if iconic {
        score += ICONIC_BONUS;
        tracing::info!("{name}: +{ICONIC_BONUS} (iconic)");
    }

    if ledger.is_recently_shown(name) {
        tracing::info!("{name}: Recently shown, no novelty bonus");
    } else {
        score += NOVELTY_BONUS;
        tracing::info!("{name}: +{NOVELTY_BONUS} (novel)");
    }

    tracing::info!("{name} total score: {score}");
    score
}
