//! Hand-picked portraits for the bright stars that come up most often.
//!
//! Entries are only trusted after a quick HEAD reachability check, so a
//! link that has gone stale degrades to the API chain instead of shipping
//! a broken image.

pub struct CuratedImage {
    pub name: &'static str,
    pub url: &'static str,
    pub credit: &'static str,
    pub alt_text: &'static str,
}

pub const CURATED_STAR_IMAGES: &[CuratedImage] = &[
    // Northern hemisphere bright stars
    CuratedImage {
        name: "Vega",
        url: "https://upload.wikimedia.org/wikipedia/commons/thumb/f/f3/Vega_-_20210629.png/1200px-Vega_-_20210629.png",
        credit: "Wikimedia Commons / ESO",
        alt_text: "Vega, a brilliant blue-white star in the constellation Lyra",
    },
    CuratedImage {
        name: "Polaris",
        url: "https://upload.wikimedia.org/wikipedia/commons/thumb/9/9c/Polaris_system.jpg/1200px-Polaris_system.jpg",
        credit: "Wikimedia Commons / NASA",
        alt_text: "Polaris, the North Star, a triple star system in Ursa Minor",
    },
    CuratedImage {
        name: "Arcturus",
        url: "https://upload.wikimedia.org/wikipedia/commons/thumb/8/84/Arcturus-star.jpg/1200px-Arcturus-star.jpg",
        credit: "Wikimedia Commons",
        alt_text: "Arcturus, a bright orange giant star in the constellation Boötes",
    },
    CuratedImage {
        name: "Deneb",
        url: "https://upload.wikimedia.org/wikipedia/commons/thumb/e/e4/Deneb_2MASS.jpg/1200px-Deneb_2MASS.jpg",
        credit: "Wikimedia Commons / 2MASS",
        alt_text: "Deneb, one of the most luminous stars visible, in the constellation Cygnus",
    },
    CuratedImage {
        name: "Altair",
        url: "https://upload.wikimedia.org/wikipedia/commons/thumb/0/04/Altair_-_Interferometric_Image.jpg/800px-Altair_-_Interferometric_Image.jpg",
        credit: "Wikimedia Commons / CHARA",
        alt_text: "Altair, a rapidly rotating star in the constellation Aquila",
    },
    // Southern hemisphere bright stars
    CuratedImage {
        name: "Sirius",
        url: "https://upload.wikimedia.org/wikipedia/commons/thumb/2/24/Sirius_A_and_B_artwork.jpg/1200px-Sirius_A_and_B_artwork.jpg",
        credit: "Wikimedia Commons / NASA",
        alt_text: "Sirius, the brightest star in the night sky, a binary system in Canis Major",
    },
    CuratedImage {
        name: "Canopus",
        url: "https://upload.wikimedia.org/wikipedia/commons/thumb/5/57/Canopus_seen_from_Tokyo.jpg/1200px-Canopus_seen_from_Tokyo.jpg",
        credit: "Wikimedia Commons",
        alt_text: "Canopus, the second brightest star in the night sky, in the constellation Carina",
    },
    CuratedImage {
        name: "Alpha Centauri",
        url: "https://upload.wikimedia.org/wikipedia/commons/thumb/1/12/Alpha_Centauri_AB_over_limb_of_Saturn.jpg/1200px-Alpha_Centauri_AB_over_limb_of_Saturn.jpg",
        credit: "Wikimedia Commons / NASA",
        alt_text: "Alpha Centauri, the closest star system to our Sun, in the constellation Centaurus",
    },
    CuratedImage {
        name: "Achernar",
        url: "https://upload.wikimedia.org/wikipedia/commons/thumb/c/c7/Achernar_Hubble.jpg/800px-Achernar_Hubble.jpg",
        credit: "Wikimedia Commons / Hubble",
        alt_text: "Achernar, a bright blue star in the constellation Eridanus",
    },
    // Other frequently selected stars
    CuratedImage {
        name: "Betelgeuse",
        url: "https://upload.wikimedia.org/wikipedia/commons/thumb/4/47/Betelgeuse_captured_by_ALMA.jpg/1200px-Betelgeuse_captured_by_ALMA.jpg",
        credit: "Wikimedia Commons / ALMA",
        alt_text: "Betelgeuse, a red supergiant star in the constellation Orion",
    },
    CuratedImage {
        name: "Rigel",
        url: "https://upload.wikimedia.org/wikipedia/commons/thumb/9/93/Rigel_star_system.jpg/1200px-Rigel_star_system.jpg",
        credit: "Wikimedia Commons",
        alt_text: "Rigel, a blue supergiant star in the constellation Orion",
    },
    CuratedImage {
        name: "Procyon",
        url: "https://upload.wikimedia.org/wikipedia/commons/thumb/8/88/Procyon.jpg/1200px-Procyon.jpg",
        credit: "Wikimedia Commons",
        alt_text: "Procyon, a bright star in the constellation Canis Minor",
    },
    CuratedImage {
        name: "Capella",
        url: "https://upload.wikimedia.org/wikipedia/commons/thumb/3/38/Capella_Hubble.jpg/1200px-Capella_Hubble.jpg",
        credit: "Wikimedia Commons / Hubble",
        alt_text: "Capella, a bright yellow star system in the constellation Auriga",
    },
];

pub fn curated_image(object_name: &str) -> Option<&'static CuratedImage> {
    CURATED_STAR_IMAGES
        .iter()
        .find(|image| image.name == object_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_exact_names_only() {
        assert_eq!(curated_image("Vega").map(|image| image.credit), Some("Wikimedia Commons / ESO"));
        assert!(curated_image("vega").is_none());
        assert!(curated_image("Jupiter").is_none());
    }

    #[test]
    fn every_entry_points_at_wikimedia_over_https() {
        for image in CURATED_STAR_IMAGES {
            assert!(
                image.url.starts_with("https://upload.wikimedia.org/"),
                "{} has unexpected URL {}",
                image.name,
                image.url
            );
            assert!(!image.alt_text.is_empty());
            assert!(!image.credit.is_empty());
        }
    }
}
