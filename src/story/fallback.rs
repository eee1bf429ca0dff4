use tracing::info;

use super::Story;
use crate::i18n::Language;

struct FallbackText {
    title: &'static str,
    story: &'static str,
    haiku_title: &'static str,
    haiku: &'static str,
}

const EN: FallbackText = FallbackText {
    title: "The Tale of {name}",
    story: "Once upon a time, in the vast cosmic ocean of stars, there lived a special celestial friend named {name}.\n\n\
        Every night, {name} would light up the dark sky, waiting for children just like you to look up and notice its gentle glow. \
        It loved to watch over the world below, keeping everyone safe as they dreamed.\n\n\
        {name} had many friends in the sky - other stars, planets, and even the Moon would come to visit. \
        Together, they would paint beautiful patterns across the night, creating a magical show just for you.\n\n\
        Tonight, as you close your eyes, remember that {name} is up there, shining brightly and watching over you. \
        It will be there tomorrow night, and the night after that, always ready to be your friend in the sky.",
    haiku_title: "Goodnight Haiku",
    haiku: "Stars shine above—\nquiet wonder fills the night,\ndreams take gentle flight.",
};

const IT: FallbackText = FallbackText {
    title: "La Storia di {name}",
    story: "C'era una volta, nel vasto oceano cosmico di stelle, un amico celeste speciale di nome {name}.\n\n\
        Ogni notte, {name} illuminava il cielo buio, aspettando che bambini come te alzassero gli occhi per notare il suo dolce bagliore. \
        Amava vegliare sul mondo qui sotto, proteggendo tutti mentre sognavano.\n\n\
        {name} aveva tanti amici nel cielo - altre stelle, pianeti, e persino la Luna venivano a fargli visita. \
        Insieme, dipingevano bellissimi disegni nel cielo notturno, creando uno spettacolo magico solo per te.\n\n\
        Stanotte, mentre chiudi gli occhi, ricorda che {name} è lassù, che brilla intensamente e veglia su di te. \
        Sarà lì domani notte, e la notte dopo, sempre pronto a essere il tuo amico nel cielo.",
    haiku_title: "Haiku della Buonanotte",
    haiku: "Stelle brillano—\nmeraviglia silenziosa,\nsogni volano via.",
};

const FR: FallbackText = FallbackText {
    title: "L'Histoire de {name}",
    story: "Il était une fois, dans le vaste océan cosmique d'étoiles, un ami céleste spécial nommé {name}.\n\n\
        Chaque nuit, {name} illuminait le ciel sombre, attendant que des enfants comme toi lèvent les yeux pour remarquer sa douce lueur. \
        Il aimait veiller sur le monde en bas, gardant tout le monde en sécurité pendant leurs rêves.\n\n\
        {name} avait beaucoup d'amis dans le ciel - d'autres étoiles, des planètes, et même la Lune venaient lui rendre visite. \
        Ensemble, ils peignaient de magnifiques motifs à travers la nuit, créant un spectacle magique rien que pour toi.\n\n\
        Ce soir, en fermant les yeux, souviens-toi que {name} est là-haut, brillant intensément et veillant sur toi. \
        Il sera là demain soir, et le soir d'après, toujours prêt à être ton ami dans le ciel.",
    haiku_title: "Haïku de Bonne Nuit",
    haiku: "Les étoiles brillent—\nsilencieuse merveille,\nrêves prennent vol.",
};

const ES: FallbackText = FallbackText {
    title: "El Cuento de {name}",
    story: "Había una vez, en el vasto océano cósmico de estrellas, un amigo celestial especial llamado {name}.\n\n\
        Cada noche, {name} iluminaba el cielo oscuro, esperando que niños como tú miraran hacia arriba para notar su suave resplandor. \
        Le encantaba cuidar del mundo de abajo, manteniendo a todos seguros mientras soñaban.\n\n\
        {name} tenía muchos amigos en el cielo - otras estrellas, planetas, e incluso la Luna venían a visitarlo. \
        Juntos, pintaban hermosos patrones en el cielo nocturno, creando un espectáculo mágico solo para ti.\n\n\
        Esta noche, al cerrar los ojos, recuerda que {name} está allá arriba, brillando intensamente y cuidándote. \
        Estará allí mañana por la noche, y la noche siguiente, siempre listo para ser tu amigo en el cielo.",
    haiku_title: "Haiku de Buenas Noches",
    haiku: "Estrellas brillan—\nmaravilla silenciosa,\nsueños alzan vuelo.",
};

fn text_for(language: Language) -> &'static FallbackText {
    match language {
        Language::En => &EN,
        Language::It => &IT,
        Language::Fr => &FR,
        Language::Es => &ES,
    }
}

/// Pre-written story used whenever the model is unavailable or produced
/// something unusable.
pub fn fallback_story(object_name: &str, language: Language) -> Story {
    info!("Using fallback story for {object_name} in {language}");

    let text = text_for(language);
    let title = text.title.replace("{name}", object_name);
    let body = text.story.replace("{name}", object_name);
    let full_text = format!(
        "# {title}\n\n{body}\n\n### {}\n\n{}",
        text.haiku_title, text.haiku
    );

    Story {
        title,
        body,
        haiku_title: text.haiku_title.to_string(),
        haiku: text.haiku.to_string(),
        full_text,
        language,
        fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_fallback_mentions_the_object() {
        let story = fallback_story("Vega", Language::En);
        assert_eq!(story.title, "The Tale of Vega");
        assert!(story.fallback);
        assert!(story.body.contains("a special celestial friend named Vega"));
        assert!(story.full_text.starts_with("# The Tale of Vega\n\n"));
        assert!(story.full_text.contains("### Goodnight Haiku"));
        assert_eq!(story.haiku.lines().count(), 3);
    }

    #[test]
    fn every_language_has_its_own_text() {
        let it = fallback_story("Giove", Language::It);
        assert_eq!(it.title, "La Storia di Giove");
        assert_eq!(it.haiku_title, "Haiku della Buonanotte");

        let fr = fallback_story("Saturne", Language::Fr);
        assert_eq!(fr.title, "L'Histoire de Saturne");
        assert!(fr.body.contains("Il était une fois"));

        let es = fallback_story("Marte", Language::Es);
        assert_eq!(es.title, "El Cuento de Marte");
        assert!(es.haiku.starts_with("Estrellas brillan"));
    }

    #[test]
    fn fallback_text_passes_its_own_safety_filter() {
        for language in Language::ALL {
            let story = fallback_story("Polaris", language);
            assert!(
                crate::story::safety::is_text_safe(&story.full_text),
                "unsafe fallback for {language}"
            );
        }
    }
}
