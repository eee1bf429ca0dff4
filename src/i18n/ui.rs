use super::Language;

/// Every translatable string the web UI shows.
#[derive(Debug)]
pub struct UiText {
    pub app_title: &'static str,
    pub subtitle: &'static str,
    pub subsubtitle: &'static str,
    pub location_label: &'static str,
    pub location_placeholder: &'static str,
    pub location_info: &'static str,
    pub location_hint: &'static str,
    pub generate_btn: &'static str,
    pub quick_actions: &'static str,
    pub save_btn: &'static str,
    pub postcard_btn: &'static str,
    pub waiting_title: &'static str,
    pub waiting_subtitle: &'static str,
    pub tab_generate: &'static str,
    pub tab_saved: &'static str,
    pub tab_postcards: &'static str,
    pub tab_dict: &'static str,
    pub tab_about: &'static str,
    pub footer_love: &'static str,
    pub footer_powered: &'static str,
    pub dict_title: &'static str,
    pub dict_intro: &'static str,
    pub saved_title: &'static str,
    pub saved_intro: &'static str,
    pub canvas_title: &'static str,
    pub canvas_intro: &'static str,
    pub saved_empty: &'static str,
    pub postcards_empty: &'static str,
    pub delete_all_stories: &'static str,
    pub delete_all_canvas: &'static str,
    pub story_accordion: &'static str,
    pub generating_story: &'static str,
    pub tonight_sky_from: &'static str,
    pub info_location: &'static str,
    pub info_language: &'static str,
    pub info_generated: &'static str,
}

const EN: UiText = UiText {
    app_title: "Stellina 🔭",
    subtitle: "✨ Your Personalized Astronomical Bedtime Story ✨",
    subsubtitle: "Every night, a new star. Every star, a new story.",
    location_label: "😊 Discover which star is above you tonight!",
    location_placeholder: "e.g. Paris, France",
    location_info: "e.g. Paris",
    location_hint: "🌎 Type or select a city 📍",
    generate_btn: "✨ Generate Tonight's Story",
    quick_actions: "⚡ Quick Actions",
    save_btn: "💖 Save to Favorites",
    postcard_btn: "🎨 Create Dream Canvas",
    waiting_title: "🌙 Click \"Generate Story\" to begin",
    waiting_subtitle: "Every night, a new adventure among the stars awaits...",
    tab_generate: "🏠 Generate Story",
    tab_saved: "📚 Saved Stories",
    tab_postcards: "🎨 Dream Canvas",
    tab_dict: "📖 Astronomy Dictionary",
    tab_about: "ℹ️ About",
    footer_love: "Made with 🫶 to make sweet dreams",
    footer_powered: "Stories by Gemini AI · Real astronomical data",
    dict_title: "📚 Astronomy Dictionary for Little Explorers",
    dict_intro: "✨ Learn a new word every night and become a little astronomer!",
    saved_title: "📚 Your Saved Stories",
    saved_intro: "✨ Your collection of cosmic bedtime tales",
    canvas_title: "🎨 Your Dream Canvas Collection",
    canvas_intro: "✨ Download and draw what you dreamed tonight!",
    saved_empty: "No saved stories yet. Generate and save your first cosmic tale!",
    postcards_empty: "No Dream Canvas created yet. Generate a story and create your printable canvas!",
    delete_all_stories: "🗑️ Delete All Stories",
    delete_all_canvas: "🗑️ Delete All Dream Canvas",
    story_accordion: "📖 Your Cosmic Story",
    generating_story: "Generating your cosmic story...",
    tonight_sky_from: "Tonight's sky from",
    info_location: "Location",
    info_language: "Language",
    info_generated: "Generated",
};

const IT: UiText = UiText {
    app_title: "Stellina 🔭",
    subtitle: "✨ La Tua Favola Astronomica Personalizzata ✨",
    subsubtitle: "Ogni notte, una nuova stella. Ogni stella, una nuova storia.",
    location_label: "😊 Scopri quale stella è sopra la tua testa stasera!",
    location_placeholder: "es. Roma, Italia",
    location_info: "es. Roma",
    location_hint: "🌎 Scrivi o seleziona una città 📍",
    generate_btn: "✨ Genera la Storia di Stasera",
    quick_actions: "⚡ Azioni Rapide",
    save_btn: "💖 Salva nei Preferiti",
    postcard_btn: "🎨 Crea Tela dei Sogni",
    waiting_title: "🌙 Clicca \"Genera Storia\" per iniziare",
    waiting_subtitle: "Ogni notte, una nuova avventura tra le stelle ti aspetta...",
    tab_generate: "🏠 Genera Storia",
    tab_saved: "📚 Storie Salvate",
    tab_postcards: "🎨 Tela dei Sogni",
    tab_dict: "📖 Dizionario Astronomico",
    tab_about: "ℹ️ Info",
    footer_love: "Fatto con 🫶 per sogni dolci",
    footer_powered: "Storie di Gemini AI · Dati astronomici reali",
    dict_title: "📚 Dizionario Astronomico per Piccoli Esploratori",
    dict_intro: "✨ Impara una nuova parola ogni notte e diventa un piccolo astronomo!",
    saved_title: "📚 Le Tue Storie Salvate",
    saved_intro: "✨ La tua collezione di racconti cosmici della buonanotte",
    canvas_title: "🎨 La Tua Collezione di Tele dei Sogni",
    canvas_intro: "✨ Scarica e disegna quello che hai sognato stanotte!",
    saved_empty: "Nessuna storia salvata. Genera e salva il tuo primo racconto cosmico!",
    postcards_empty: "Nessuna Tela dei Sogni creata. Genera una storia e crea la tua tela stampabile!",
    delete_all_stories: "🗑️ Cancella Tutte le Storie",
    delete_all_canvas: "🗑️ Cancella Tutte le Tele",
    story_accordion: "📖 La Tua Storia Cosmica",
    generating_story: "Generando la tua storia cosmica...",
    tonight_sky_from: "Il cielo di stasera da",
    info_location: "Posizione",
    info_language: "Lingua",
    info_generated: "Generato",
};

const FR: UiText = UiText {
    app_title: "Stellina 🔭",
    subtitle: "✨ Votre Conte Astronomique Personnalisé ✨",
    subsubtitle: "Chaque nuit, une nouvelle étoile. Chaque étoile, une nouvelle histoire.",
    location_label: "😊 Découvrez quelle étoile est au-dessus de vous ce soir!",
    location_placeholder: "ex. Paris, France",
    location_info: "ex. Paris",
    location_hint: "🌎 Tapez ou sélectionnez une ville 📍",
    generate_btn: "✨ Générer l'Histoire de Ce Soir",
    quick_actions: "⚡ Actions Rapides",
    save_btn: "💖 Sauvegarder",
    postcard_btn: "🎨 Créer Toile de Rêves",
    waiting_title: "🌙 Cliquez sur \"Générer Histoire\" pour commencer",
    waiting_subtitle: "Chaque nuit, une nouvelle aventure parmi les étoiles vous attend...",
    tab_generate: "🏠 Générer Histoire",
    tab_saved: "📚 Histoires Sauvées",
    tab_postcards: "🎨 Toile de Rêves",
    tab_dict: "📖 Dictionnaire Astro",
    tab_about: "ℹ️ À Propos",
    footer_love: "Fait avec 🫶 pour de doux rêves",
    footer_powered: "Histoires par Gemini AI · Données astronomiques réelles",
    dict_title: "📚 Dictionnaire Astronomique pour Petits Explorateurs",
    dict_intro: "✨ Apprenez un nouveau mot chaque soir et devenez un petit astronome!",
    saved_title: "📚 Vos Histoires Sauvegardées",
    saved_intro: "✨ Votre collection de contes cosmiques du coucher",
    canvas_title: "🎨 Votre Collection de Toiles de Rêves",
    canvas_intro: "✨ Téléchargez et dessinez ce dont vous avez rêvé ce soir!",
    saved_empty: "Aucune histoire sauvegardée. Générez et sauvegardez votre premier conte cosmique!",
    postcards_empty: "Aucune Toile de Rêves créée. Générez une histoire et créez votre toile imprimable!",
    delete_all_stories: "🗑️ Supprimer Toutes les Histoires",
    delete_all_canvas: "🗑️ Supprimer Toutes les Toiles",
    story_accordion: "📖 Votre Histoire Cosmique",
    generating_story: "Génération de votre histoire cosmique...",
    tonight_sky_from: "Le ciel de ce soir depuis",
    info_location: "Localisation",
    info_language: "Langue",
    info_generated: "Généré",
};

const ES: UiText = UiText {
    app_title: "Stellina 🔭",
    subtitle: "✨ Tu Cuento Astronómico Personalizado ✨",
    subsubtitle: "Cada noche, una nueva estrella. Cada estrella, una nueva historia.",
    location_label: "😊 ¡Descubre qué estrella está sobre ti esta noche!",
    location_placeholder: "ej. Madrid, España",
    location_info: "ej. Madrid",
    location_hint: "🌎 Escribe o selecciona una ciudad 📍",
    generate_btn: "✨ Generar Historia de Esta Noche",
    quick_actions: "⚡ Acciones Rápidas",
    save_btn: "💖 Guardar",
    postcard_btn: "🎨 Crear Lienzo de Sueños",
    waiting_title: "🌙 Haz clic en \"Generar Historia\" para comenzar",
    waiting_subtitle: "Cada noche, una nueva aventura entre las estrellas te espera...",
    tab_generate: "🏠 Generar Historia",
    tab_saved: "📚 Historias Guardadas",
    tab_postcards: "🎨 Lienzo de Sueños",
    tab_dict: "📖 Diccionario Astro",
    tab_about: "ℹ️ Acerca de",
    footer_love: "Hecho con 🫶 para dulces sueños",
    footer_powered: "Historias por Gemini AI · Datos astronómicos reales",
    dict_title: "📚 Diccionario Astronómico para Pequeños Exploradores",
    dict_intro: "✨ ¡Aprende una nueva palabra cada noche y conviértete en un pequeño astrónomo!",
    saved_title: "📚 Tus Historias Guardadas",
    saved_intro: "✨ Tu colección de cuentos cósmicos antes de dormir",
    canvas_title: "🎨 Tu Colección de Lienzos de Sueños",
    canvas_intro: "✨ ¡Descarga y dibuja lo que soñaste esta noche!",
    saved_empty: "No hay historias guardadas. ¡Genera y guarda tu primer cuento cósmico!",
    postcards_empty: "No hay Lienzo de Sueños creado. ¡Genera una historia y crea tu lienzo imprimible!",
    delete_all_stories: "🗑️ Eliminar Todas las Historias",
    delete_all_canvas: "🗑️ Eliminar Todos los Lienzos",
    story_accordion: "📖 Tu Historia Cósmica",
    generating_story: "Generando tu historia cósmica...",
    tonight_sky_from: "El cielo de esta noche desde",
    info_location: "Ubicación",
    info_language: "Idioma",
    info_generated: "Generado",
};

pub const fn ui_text(language: Language) -> &'static UiText {
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
    fn every_language_has_a_full_set_of_strings() {
        for language in Language::ALL {
            let text = ui_text(language);
            assert!(!text.subtitle.is_empty());
            assert!(!text.generate_btn.is_empty());
            assert!(!text.tonight_sky_from.is_empty());
        }
    }

    #[test]
    fn tab_labels_are_localized() {
        assert_eq!(ui_text(Language::It).tab_saved, "📚 Storie Salvate");
        assert_eq!(ui_text(Language::Fr).tab_about, "ℹ️ À Propos");
        assert_eq!(ui_text(Language::Es).info_language, "Idioma");
    }
}
