//! Slide list configuration ([[slides]] tables)

use crate::carousel::Slide;
use serde::Deserialize;

/// One `[[slides]]` entry as loaded from config file
#[derive(Debug, Deserialize, Clone)]
pub struct FileSlide {
    pub id: String,
    pub image: String,
    /// Defaults to "Banner {id}"
    pub alt_text: Option<String>,
}

impl From<FileSlide> for Slide {
    fn from(file: FileSlide) -> Self {
        let alt_text = file
            .alt_text
            .unwrap_or_else(|| format!("Banner {}", file.id));
        Slide::new(file.id, file.image, alt_text)
    }
}

/// Built-in banners shown when the config lists none
pub fn default_slides() -> Vec<Slide> {
    vec![
        Slide::new("1", "assets/banner1.png", "Full-stack bootcamp: enrolment open"),
        Slide::new("2", "assets/banner2.png", "Free video lessons every week"),
        Slide::new("3", "assets/banner3.png", "Study material for every course"),
    ]
}

/// Resolve the slide list: file entries if present (even an empty list), else defaults
pub fn slides_from_file(file: Option<Vec<FileSlide>>) -> Vec<Slide> {
    match file {
        Some(entries) => entries.into_iter().map(Slide::from).collect(),
        None => default_slides(),
    }
}
