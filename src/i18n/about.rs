use super::Language;

/// Localized content for the about page.
#[derive(Debug)]
pub struct AboutContent {
    pub mission_title: &'static str,
    pub mission_text: &'static str,
    pub how_title: &'static str,
    pub how_steps: [&'static str; 3],
    pub features_title: &'static str,
    pub features: [&'static str; 3],
    pub perfect_title: &'static str,
    pub perfect_for: [&'static str; 3],
}

const EN: AboutContent = AboutContent {
    mission_title: "🌟 Our Mission",
    mission_text: "Stellina transforms the night sky into magical bedtime stories. We believe every child deserves to fall asleep with wonder in their hearts.",
    how_title: "🔮 How It Works",
    how_steps: [
        "📍 Enter your city to find what's in YOUR sky tonight",
        "⭐ We identify the brightest star or planet visible above you",
        "✨ AI creates a personalized bedtime tale about that celestial friend",
    ],
    features_title: "✨ Features",
    features: [
        "🌍 Location-based astronomy",
        "🤖 AI-generated stories by Google Gemini",
        "🌟 Authentic astronomical data",
    ],
    perfect_title: "🎯 Perfect for",
    perfect_for: [
        "🛏️ Bedtime routines with children",
        "🔭 Astronomy education made magical",
        "👨‍👩‍👧 Family bonding moments",
    ],
};

const IT: AboutContent = AboutContent {
    mission_title: "🌟 La Nostra Missione",
    mission_text: "Stellina trasforma il cielo notturno in magiche storie della buonanotte.",
    how_title: "🔮 Come Funziona",
    how_steps: [
        "📍 Inserisci la tua città per scoprire cosa c'è nel TUO cielo stasera",
        "⭐ Identifichiamo la stella o il pianeta più luminoso sopra di te",
        "✨ L'IA crea un racconto personalizzato su quell'amico celeste",
    ],
    features_title: "✨ Funzionalità",
    features: [
        "🌍 Astronomia basata sulla posizione",
        "🤖 Storie generate dall'IA con Google Gemini",
        "🌟 Dati astronomici autentici",
    ],
    perfect_title: "🎯 Perfetto per",
    perfect_for: [
        "🛏️ Routine della buonanotte con i bambini",
        "🔭 Educazione astronomica resa magica",
        "👨‍👩‍👧 Momenti di legame familiare",
    ],
};

const FR: AboutContent = AboutContent {
    mission_title: "🌟 Notre Mission",
    mission_text: "Stellina transforme le ciel nocturne en histoires magiques du coucher.",
    how_title: "🔮 Comment Ça Marche",
    how_steps: [
        "📍 Entrez votre ville pour découvrir ce qu'il y a dans VOTRE ciel ce soir",
        "⭐ Nous identifions l'étoile ou la planète la plus brillante au-dessus de vous",
        "✨ L'IA crée un conte personnalisé sur cet ami céleste",
    ],
    features_title: "✨ Fonctionnalités",
    features: [
        "🌍 Astronomie basée sur la localisation",
        "🤖 Histoires générées par l'IA avec Google Gemini",
        "🌟 Données astronomiques authentiques",
    ],
    perfect_title: "🎯 Parfait pour",
    perfect_for: [
        "🛏️ Routines du coucher avec les enfants",
        "🔭 Éducation astronomique rendue magique",
        "👨‍👩‍👧 Moments de liens familiaux",
    ],
};

const ES: AboutContent = AboutContent {
    mission_title: "🌟 Nuestra Misión",
    mission_text: "Stellina transforma el cielo nocturno en mágicas historias para dormir.",
    how_title: "🔮 Cómo Funciona",
    how_steps: [
        "📍 Ingresa tu ciudad para descubrir qué hay en TU cielo esta noche",
        "⭐ Identificamos la estrella o planeta más brillante sobre ti",
        "✨ La IA crea un cuento personalizado sobre ese amigo celestial",
    ],
    features_title: "✨ Características",
    features: [
        "🌍 Astronomía basada en ubicación",
        "🤖 Historias generadas por IA con Google Gemini",
        "🌟 Datos astronómicos auténticos",
    ],
    perfect_title: "🎯 Perfecto para",
    perfect_for: [
        "🛏️ Rutinas de dormir con niños",
        "🔭 Educación astronómica hecha mágica",
        "👨‍👩‍👧 Momentos de unión familiar",
    ],
};

pub const fn about_content(language: Language) -> &'static AboutContent {
    match language {
        Language::En => &EN,
        Language::It => &IT,
        Language::Fr => &FR,
        Language::Es => &ES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_is_available_in_all_languages() {
        for language in Language::ALL {
            let about = about_content(language);
            assert!(about.mission_text.starts_with("Stellina"));
            assert_eq!(about.how_steps.len(), 3);
        }
    }
}
