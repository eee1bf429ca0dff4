use super::Language;

/// One entry of the astronomy dictionary for little explorers. `color` is a
/// Tailwind-style token the page turns into an accent color.
#[derive(Debug)]
pub struct DictionaryTerm {
    pub emoji: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

const fn term(
    emoji: &'static str,
    title: &'static str,
    description: &'static str,
    color: &'static str,
) -> DictionaryTerm {
    DictionaryTerm {
        emoji,
        title,
        description,
        color,
    }
}

const EN: &[DictionaryTerm] = &[
    term("⭐", "Star", "A giant ball of hot gas that shines with its own light, just like our Sun!", "yellow-400"),
    term("🪐", "Planet", "A large round object in space that orbits around a star, like Earth orbits the Sun.", "pink-400"),
    term("🌌", "Galaxy", "A huge collection of billions of stars, planets, and space dust held together by gravity.", "purple-400"),
    term("🌙", "Moon", "A natural satellite that orbits a planet, like our Moon that lights up the night sky.", "blue-400"),
    term("☄️", "Comet", "A ball of ice and space dust that creates a beautiful tail when it gets close to the Sun.", "green-400"),
    term("🌟", "Constellation", "A group of stars that form a recognizable pattern in the sky, like a cosmic connect-the-dots!", "indigo-400"),
    term("💫", "Light Year", "The distance light travels in one year: about 9.46 trillion kilometers!", "red-400"),
    term("🔭", "Telescope", "An instrument that allows us to see objects very far away in space, like stars and galaxies.", "orange-400"),
    term("🌠", "Shooting Star", "Not actually a star! It's a small piece of space rock burning up in Earth's atmosphere.", "cyan-400"),
    term("🌑", "Eclipse", "When one celestial body passes in front of another and covers it, like when the Moon covers the Sun.", "gray-400"),
    term("🪨", "Asteroid", "A rocky object that orbits the Sun, smaller than a planet but bigger than a pebble!", "amber-400"),
    term("💥", "Supernova", "The giant explosion of a star at the end of its life, an incredible cosmic spectacle!", "rose-400"),
    term("🌌", "Milky Way", "Our galaxy! It contains our Solar System and about 200 billion stars.", "violet-400"),
    term("☀️", "Solar System", "The Sun and everything that orbits around it: planets, moons, asteroids, and comets.", "yellow-500"),
    term("🛰️", "Satellite", "An object that orbits a planet. Can be natural (like the Moon) or human-made!", "sky-400"),
    term("🌫️", "Nebula", "A colorful cloud of gas and dust in space where new stars are born.", "fuchsia-400"),
    term("⚫", "Black Hole", "A point in space with gravity so strong that not even light can escape!", "slate-400"),
    term("🔄", "Orbit", "The path an object takes while moving around another in space, like the Moon around Earth.", "teal-400"),
];

const IT: &[DictionaryTerm] = &[
    term("⭐", "Stella", "Una gigantesca palla di gas caldo che brilla di luce propria, proprio come il nostro Sole!", "yellow-400"),
    term("🪐", "Pianeta", "Un grande oggetto rotondo nello spazio che orbita attorno a una stella, come la Terra orbita il Sole.", "pink-400"),
    term("🌌", "Galassia", "Un'enorme collezione di miliardi di stelle, pianeti e polvere spaziale tenuti insieme dalla gravità.", "purple-400"),
    term("🌙", "Luna", "Un satellite naturale che orbita un pianeta, come la nostra Luna che illumina il cielo notturno.", "blue-400"),
    term("☄️", "Cometa", "Una palla di ghiaccio e polvere spaziale che crea una bellissima coda quando si avvicina al Sole.", "green-400"),
    term("🌟", "Costellazione", "Un gruppo di stelle che formano un disegno riconoscibile nel cielo, come un unisci-i-puntini cosmico!", "indigo-400"),
    term("💫", "Anno Luce", "La distanza che la luce percorre in un anno: circa 9,46 trilioni di chilometri!", "red-400"),
    term("🔭", "Telescopio", "Uno strumento che ci permette di vedere oggetti molto lontani nello spazio, come stelle e galassie.", "orange-400"),
    term("🌠", "Stella Cadente", "Non è veramente una stella! È un piccolo pezzo di roccia spaziale che brucia nell'atmosfera terrestre.", "cyan-400"),
    term("🌑", "Eclissi", "Quando un corpo celeste passa davanti a un altro e lo copre, come quando la Luna copre il Sole.", "gray-400"),
    term("🪨", "Asteroide", "Un oggetto roccioso che orbita il Sole, più piccolo di un pianeta ma più grande di un sassolino!", "amber-400"),
    term("💥", "Supernova", "L'esplosione gigantesca di una stella alla fine della sua vita, uno spettacolo cosmico incredibile!", "rose-400"),
    term("🌌", "Via Lattea", "La nostra galassia! Contiene il nostro Sistema Solare e circa 200 miliardi di stelle.", "violet-400"),
    term("☀️", "Sistema Solare", "Il Sole e tutto ciò che gli orbita attorno: pianeti, lune, asteroidi e comete.", "yellow-500"),
    term("🛰️", "Satellite", "Un oggetto che orbita attorno a un pianeta. Può essere naturale (come la Luna) o artificiale!", "sky-400"),
    term("🌫️", "Nebulosa", "Una nuvola colorata di gas e polvere nello spazio dove nascono nuove stelle.", "fuchsia-400"),
    term("⚫", "Buco Nero", "Un punto nello spazio con gravità così forte che nemmeno la luce può sfuggire!", "slate-400"),
    term("🔄", "Orbita", "Il percorso che un oggetto compie mentre gira attorno a un altro nello spazio, come la Luna intorno alla Terra.", "teal-400"),
];

const FR: &[DictionaryTerm] = &[
    term("⭐", "Étoile", "Une boule géante de gaz chaud qui brille de sa propre lumière, comme notre Soleil!", "yellow-400"),
    term("🪐", "Planète", "Un grand objet rond dans l'espace qui orbite autour d'une étoile, comme la Terre orbite le Soleil.", "pink-400"),
    term("🌌", "Galaxie", "Une énorme collection de milliards d'étoiles, de planètes et de poussière spatiale maintenues ensemble par la gravité.", "purple-400"),
    term("🌙", "Lune", "Un satellite naturel qui orbite une planète, comme notre Lune qui éclaire le ciel nocturne.", "blue-400"),
    term("☄️", "Comète", "Une boule de glace et de poussière spatiale qui crée une belle queue quand elle s'approche du Soleil.", "green-400"),
    term("🌟", "Constellation", "Un groupe d'étoiles qui forment un motif reconnaissable dans le ciel, comme un jeu de points à relier cosmique!", "indigo-400"),
    term("💫", "Année-Lumière", "La distance que la lumière parcourt en un an: environ 9,46 billions de kilomètres!", "red-400"),
    term("🔭", "Télescope", "Un instrument qui nous permet de voir des objets très éloignés dans l'espace, comme les étoiles et les galaxies.", "orange-400"),
    term("🌠", "Étoile Filante", "Ce n'est pas vraiment une étoile! C'est un petit morceau de roche spatiale qui brûle dans l'atmosphère terrestre.", "cyan-400"),
    term("🌑", "Éclipse", "Quand un corps céleste passe devant un autre et le couvre, comme quand la Lune couvre le Soleil.", "gray-400"),
    term("🪨", "Astéroïde", "Un objet rocheux qui orbite le Soleil, plus petit qu'une planète mais plus grand qu'un caillou!", "amber-400"),
    term("💥", "Supernova", "L'explosion géante d'une étoile à la fin de sa vie, un spectacle cosmique incroyable!", "rose-400"),
    term("🌌", "Voie Lactée", "Notre galaxie! Elle contient notre Système Solaire et environ 200 milliards d'étoiles.", "violet-400"),
    term("☀️", "Système Solaire", "Le Soleil et tout ce qui orbite autour de lui: planètes, lunes, astéroïdes et comètes.", "yellow-500"),
    term("🛰️", "Satellite", "Un objet qui orbite une planète. Peut être naturel (comme la Lune) ou artificiel!", "sky-400"),
    term("🌫️", "Nébuleuse", "Un nuage coloré de gaz et de poussière dans l'espace où naissent de nouvelles étoiles.", "fuchsia-400"),
    term("⚫", "Trou Noir", "Un point dans l'espace avec une gravité si forte que même la lumière ne peut pas s'échapper!", "slate-400"),
    term("🔄", "Orbite", "Le chemin qu'un objet prend en se déplaçant autour d'un autre dans l'espace, comme la Lune autour de la Terre.", "teal-400"),
];

const ES: &[DictionaryTerm] = &[
    term("⭐", "Estrella", "¡Una bola gigante de gas caliente que brilla con su propia luz, como nuestro Sol!", "yellow-400"),
    term("🪐", "Planeta", "Un gran objeto redondo en el espacio que orbita alrededor de una estrella, como la Tierra orbita el Sol.", "pink-400"),
    term("🌌", "Galaxia", "Una enorme colección de miles de millones de estrellas, planetas y polvo espacial unidos por la gravedad.", "purple-400"),
    term("🌙", "Luna", "Un satélite natural que orbita un planeta, como nuestra Luna que ilumina el cielo nocturno.", "blue-400"),
    term("☄️", "Cometa", "Una bola de hielo y polvo espacial que crea una hermosa cola cuando se acerca al Sol.", "green-400"),
    term("🌟", "Constelación", "¡Un grupo de estrellas que forman un patrón reconocible en el cielo, como un juego cósmico de conectar los puntos!", "indigo-400"),
    term("💫", "Año Luz", "¡La distancia que la luz viaja en un año: aproximadamente 9.46 billones de kilómetros!", "red-400"),
    term("🔭", "Telescopio", "Un instrumento que nos permite ver objetos muy lejanos en el espacio, como estrellas y galaxias.", "orange-400"),
    term("🌠", "Estrella Fugaz", "¡No es realmente una estrella! Es un pequeño trozo de roca espacial que se quema en la atmósfera terrestre.", "cyan-400"),
    term("🌑", "Eclipse", "Cuando un cuerpo celeste pasa frente a otro y lo cubre, como cuando la Luna cubre el Sol.", "gray-400"),
    term("🪨", "Asteroide", "¡Un objeto rocoso que orbita el Sol, más pequeño que un planeta pero más grande que una piedra!", "amber-400"),
    term("💥", "Supernova", "¡La explosión gigante de una estrella al final de su vida, un espectáculo cósmico increíble!", "rose-400"),
    term("🌌", "Vía Láctea", "¡Nuestra galaxia! Contiene nuestro Sistema Solar y unos 200 mil millones de estrellas.", "violet-400"),
    term("☀️", "Sistema Solar", "El Sol y todo lo que orbita a su alrededor: planetas, lunas, asteroides y cometas.", "yellow-500"),
    term("🛰️", "Satélite", "Un objeto que orbita un planeta. ¡Puede ser natural (como la Luna) o hecho por humanos!", "sky-400"),
    term("🌫️", "Nebulosa", "Una nube colorida de gas y polvo en el espacio donde nacen nuevas estrellas.", "fuchsia-400"),
    term("⚫", "Agujero Negro", "¡Un punto en el espacio con gravedad tan fuerte que ni siquiera la luz puede escapar!", "slate-400"),
    term("🔄", "Órbita", "El camino que toma un objeto mientras se mueve alrededor de otro en el espacio, como la Luna alrededor de la Tierra.", "teal-400"),
];

pub const fn dictionary_terms(language: Language) -> &'static [DictionaryTerm] {
    match language {
        Language::En => EN,
        Language::It => IT,
        Language::Fr => FR,
        Language::Es => ES,
    }
}
