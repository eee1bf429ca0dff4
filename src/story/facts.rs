use tracing::info;

use crate::i18n::Language;
use crate::sky::capitalize;

struct FactSet {
    en: [&'static str; 3],
    it: [&'static str; 3],
    fr: [&'static str; 3],
    es: [&'static str; 3],
}

impl FactSet {
    fn for_language(&self, language: Language) -> [&'static str; 3] {
        match language {
            Language::En => self.en,
            Language::It => self.it,
            Language::Fr => self.fr,
            Language::Es => self.es,
        }
    }
}

const JUPITER: FactSet = FactSet {
    en: [
        "Jupiter is SO big that 1,300 Earths could fit inside it! It's like a giant cosmic playground.",
        "Jupiter has a storm called the Great Red Spot that has been raging for over 400 years!",
        "Jupiter spins super fast - a day on Jupiter is only 10 hours long, even though it's huge!",
    ],
    it: [
        "Giove è così grande che dentro potrebbe stare 1.300 volte la Terra! È come un immenso parco giochi cosmico.",
        "Giove ha una tempesta chiamata la Grande Macchia Rossa che infuria da oltre 400 anni!",
        "Giove gira velocissimo - un giorno su Giove dura solo 10 ore, anche se è gigantesco!",
    ],
    fr: [
        "Jupiter est si grande que 1 300 Terres pourraient y tenir! C'est comme une immense cour de récréation cosmique.",
        "Jupiter a une tempête appelée la Grande Tache Rouge qui fait rage depuis plus de 400 ans!",
        "Jupiter tourne très vite - une journée sur Jupiter ne dure que 10 heures, même si elle est énorme!",
    ],
    es: [
        "¡Júpiter es tan grande que dentro cabrían 1.300 Tierras! Es como un gigantesco patio de juegos cósmico.",
        "¡Júpiter tiene una tormenta llamada la Gran Mancha Roja que ha estado rugiendo durante más de 400 años!",
        "¡Júpiter gira muy rápido - un día en Júpiter dura solo 10 horas, aunque sea gigantesco!",
    ],
};

const MARS: FactSet = FactSet {
    en: [
        "Mars is called the Red Planet because its soil is covered in rusty iron! It looks like a giant red ball in the sky.",
        "Mars has the biggest volcano in our whole solar system - it's called Olympus Mons!",
        "A year on Mars is almost twice as long as a year on Earth - imagine waiting that long for your birthday!",
    ],
    it: [
        "Marte si chiama il Pianeta Rosso perché il suo terreno è coperto di ferro arrugginito! Sembra una gigantesca palla rossa nel cielo.",
        "Marte ha il vulcano più grande di tutto il nostro sistema solare - si chiama Olympus Mons!",
        "Un anno su Marte è quasi il doppio di un anno sulla Terra - immagina aspettare così a lungo il tuo compleanno!",
    ],
    fr: [
        "Mars s'appelle la Planète Rouge parce que son sol est couvert de fer rouillé! Elle ressemble à une gigantesque boule rouge dans le ciel.",
        "Mars a le plus grand volcan de tout notre système solaire - il s'appelle Olympus Mons!",
        "Une année sur Mars est presque deux fois plus longue qu'une année sur Terre - imagine d'attendre si longtemps ton anniversaire!",
    ],
    es: [
        "¡Marte se llama el Planeta Rojo porque su suelo está cubierto de hierro oxidado! Se ve como una gigantesca bola roja en el cielo.",
        "¡Marte tiene el volcán más grande de todo nuestro sistema solar - se llama Olympus Mons!",
        "¡Un año en Marte es casi el doble de un año en la Tierra - imagina esperar tanto tiempo para tu cumpleaños!",
    ],
};

const SATURN: FactSet = FactSet {
    en: [
        "Saturn has beautiful rings made of billions of pieces of ice and rock! They sparkle like a cosmic necklace.",
        "Saturn is so light that it would float in water if you could find a bathtub big enough!",
        "Saturn has 82 moons orbiting around it - that's like having 82 little friends spinning in space!",
    ],
    it: [
        "Saturno ha bellissimi anelli fatti di miliardi di pezzi di ghiaccio e roccia! Brillano come una collana cosmica.",
        "Saturno è così leggero che galleggerebbe nell'acqua se potessi trovare una vasca abbastanza grande!",
        "Saturno ha 82 lune che gli orbitano intorno - è come avere 82 piccoli amici che girano nello spazio!",
    ],
    fr: [
        "Saturne a de beaux anneaux faits de milliards de morceaux de glace et de roche! Ils brillent comme un collier cosmique.",
        "Saturne est si légère qu'elle flotterait dans l'eau si vous pouviez trouver une baignoire assez grande!",
        "Saturne a 82 lunes qui tournent autour d'elle - c'est comme avoir 82 petits amis qui tournoient dans l'espace!",
    ],
    es: [
        "¡Saturno tiene hermosos anillos hechos de miles de millones de piezas de hielo y roca! Brillan como un collar cósmico.",
        "¡Saturno es tan ligero que flotaría en el agua si pudieras encontrar una bañera lo suficientemente grande!",
        "¡Saturno tiene 82 lunas orbitando alrededor - es como tener 82 pequeños amigos girando en el espacio!",
    ],
};

const VENUS: FactSet = FactSet {
    en: [
        "Venus is the hottest planet in our solar system - hotter than Mercury, even though it's farther from the Sun!",
        "Venus shines so brightly that sometimes you can see it in the daytime! It's called the Morning or Evening Star.",
        "A day on Venus is longer than a year on Venus - time works in a very strange way there!",
    ],
    it: [
        "Venere è il pianeta più caldo del nostro sistema solare - più caldo di Mercurio, anche se è più lontano dal Sole!",
        "Venere brilla così tanto che a volte puoi vederla durante il giorno! Si chiama la Stella del Mattino o della Sera.",
        "Un giorno su Venere è più lungo di un anno su Venere - il tempo funziona in modo molto strano lì!",
    ],
    fr: [
        "Vénus est la planète la plus chaude de notre système solaire - plus chaude que Mercure, même si elle est plus loin du Soleil!",
        "Vénus brille si intensément que parfois on peut la voir pendant la journée! On l'appelle l'Étoile du Matin ou du Soir.",
        "Un jour sur Vénus est plus long qu'une année sur Vénus - le temps fonctionne de façon très étrange là-bas!",
    ],
    es: [
        "¡Venus es el planeta más caliente de nuestro sistema solar - más caliente que Mercurio, aunque esté más lejos del Sol!",
        "¡Venus brilla tan intensamente que a veces puedes verla durante el día! Se llama la Estrella de la Mañana o de la Tarde.",
        "¡Un día en Venus es más largo que un año en Venus - ¡el tiempo funciona de manera muy extraña allí!",
    ],
};

const MERCURY: FactSet = FactSet {
    en: [
        "Mercury is the closest planet to the Sun and also the fastest - it zooms around the Sun like a cosmic speedster!",
        "Mercury has no atmosphere, so there's nothing to protect it from space rocks - it's all covered in craters!",
        "Mercury is tiny - you could fit it inside the Sun over 6 million times!",
    ],
    it: [
        "Mercurio è il pianeta più vicino al Sole ed è anche il più veloce - gira intorno al Sole come un corridore cosmico!",
        "Mercurio non ha atmosfera, quindi non c'è niente a proteggerlo dalle rocce spaziali - è tutto coperto di crateri!",
        "Mercurio è minuscolo - potresti far stare il Sole dentro di esso oltre 6 milioni di volte!",
    ],
    fr: [
        "Mercure est la planète la plus proche du Soleil et aussi la plus rapide - elle fonce autour du Soleil comme un coureur cosmique!",
        "Mercure n'a pas d'atmosphère, donc rien ne la protège des roches spatiales - elle est entièrement couverte de cratères!",
        "Mercure est minuscule - vous pourriez faire tenir le Soleil à l'intérieur plus de 6 millions de fois!",
    ],
    es: [
        "¡Mercurio es el planeta más cercano al Sol y también el más rápido - ¡se dispara alrededor del Sol como un velocista cósmico!",
        "¡Mercurio no tiene atmósfera, así que nada lo protege de las rocas espaciales - ¡está completamente cubierto de cráteres!",
        "¡Mercurio es diminuto - ¡podrías meter el Sol dentro más de 6 millones de veces!",
    ],
};

const DEFAULT: FactSet = FactSet {
    en: [
        "Every star you see at night is actually a sun, just like ours! Some are much bigger and brighter.",
        "The light from distant stars takes many years to reach your eyes - you're looking at the past when you see them!",
        "Our universe is so big that we've only discovered a tiny fraction of all the stars and planets that exist!",
    ],
    it: [
        "Ogni stella che vedi di notte è in realtà un sole, proprio come il nostro! Alcuni sono molto più grandi e luminosi.",
        "La luce dalle stelle lontane impiega molti anni per raggiungere i tuoi occhi - stai guardando il passato quando le vedi!",
        "L'universo è così grande che abbiamo scoperto solo una piccola frazione di tutte le stelle e i pianeti che esistono!",
    ],
    fr: [
        "Chaque étoile que vous voyez la nuit est en fait un soleil, comme le nôtre! Certains sont beaucoup plus grands et plus brillants.",
        "La lumière des étoiles lointaines prend de nombreuses années pour atteindre vos yeux - vous regardez le passé quand vous les voyez!",
        "Notre univers est si grand que nous n'avons découvert qu'une infime partie de toutes les étoiles et planètes qui existent!",
    ],
    es: [
        "¡Cada estrella que ves de noche es en realidad un sol, como el nuestro! Algunos son mucho más grandes y brillantes.",
        "¡La luz de las estrellas lejanas tarda muchos años en llegar a tus ojos - ¡estás mirando el pasado cuando las ves!",
        "¡Nuestro universo es tan grande que solo hemos descubierto una pequeña fracción de todas las estrellas y planetas que existen!",
    ],
};

/// Three child-friendly "Did You Know?" facts about a celestial object.
/// Objects without a dedicated entry get general night-sky facts.
pub fn fun_facts(object_name: &str, language: Language) -> [&'static str; 3] {
    info!("Generating fun facts for {object_name} in {language}");

    let normalized = capitalize(object_name);
    let set = match normalized.as_str() {
        "Jupiter" => &JUPITER,
        "Mars" => &MARS,
        "Saturn" => &SATURN,
        "Venus" => &VENUS,
        "Mercury" => &MERCURY,
        _ => &DEFAULT,
    };
    set.for_language(language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_planets_get_dedicated_facts() {
        let facts = fun_facts("Jupiter", Language::En);
        assert!(facts[0].contains("1,300 Earths"));
        assert!(facts[1].contains("Great Red Spot"));
    }

    #[test]
    fn lookup_ignores_input_casing() {
        assert_eq!(fun_facts("JUPITER", Language::It), JUPITER.it);
        assert_eq!(fun_facts("mars", Language::Fr), MARS.fr);
    }

    #[test]
    fn unknown_objects_fall_back_to_general_facts() {
        let facts = fun_facts("Vega", Language::Es);
        assert_eq!(facts, DEFAULT.es);
    }
}
