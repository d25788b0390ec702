//! Slide data: the immutable, ordered content a carousel rotates through.
//!
//! Image references are opaque to the carousel. Whatever loads pixels (a web
//! page, a terminal renderer, an image decoder) interprets them; the carousel
//! only orders, identifies and labels slides.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Errors raised while constructing a carousel
///
/// These are programmer/configuration errors and are reported at
/// construction time. Nothing at runtime produces a `CarouselError`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("slide at position {position} has an empty id")]
    EmptySlideId { position: usize },

    #[error("duplicate slide id '{id}' at positions {first} and {second}")]
    DuplicateSlideId {
        id: String,
        first: usize,
        second: usize,
    },

    #[error("{name} must be greater than zero")]
    ZeroDuration { name: &'static str },
}

/// Stable identifier of a slide
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlideId(String);

impl SlideId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque handle to slide artwork (path, URL, asset key)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One unit of carousel content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: SlideId,
    pub image: ImageRef,
    pub alt_text: String,
}

impl Slide {
    pub fn new(id: impl Into<String>, image: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            id: SlideId::new(id),
            image: ImageRef::new(image),
            alt_text: alt_text.into(),
        }
    }
}

/// Validated, ordered slide sequence
///
/// An empty deck is valid: the carousel renders a placeholder and disables
/// navigation. Ids must be non-empty and unique so dot indicators and
/// rendered slides can be keyed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    pub fn new(slides: Vec<Slide>) -> Result<Self, CarouselError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(slides.len());

        for (position, slide) in slides.iter().enumerate() {
            let id = slide.id.as_str();
            if id.trim().is_empty() {
                return Err(CarouselError::EmptySlideId { position });
            }
            if !seen.insert(id) {
                let first = slides
                    .iter()
                    .position(|s| s.id.as_str() == id)
                    .unwrap_or(position);
                return Err(CarouselError::DuplicateSlideId {
                    id: id.to_string(),
                    first,
                    second: position,
                });
            }
        }

        Ok(Self { slides })
    }

    #[cfg(test)]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}
