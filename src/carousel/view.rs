//! Render model: what a host needs to draw the carousel.
//!
//! Pure function of the slide deck, the track position, the animation gate
//! and the motion preference. Geometry uses the single-row layout: each
//! strip cell sits at `cell * 100%` and the strip is translated by
//! `-position * 100%`. Accessibility metadata follows the WAI-ARIA carousel
//! pattern (region + roledescription, tab-role dots, labeled controls,
//! live region silenced while auto-rotating).

use super::index::Track;
use super::slide::{ImageRef, SlideDeck, SlideId};
use serde::Serialize;

/// Slide transition duration
pub const TRANSITION_MS: u64 = 500;

/// Transition easing (CSS timing function name)
pub const TRANSITION_EASING: &str = "ease-in-out";

/// Text shown instead of slides when the deck is empty
pub const PLACEHOLDER_TEXT: &str = "No banners to show";

/// Live-region politeness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Live {
    /// Auto-rotating: announcing every slide would be noise
    Off,
    /// Manual navigation: announce the new slide
    Polite,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    pub role: &'static str,
    pub roledescription: &'static str,
    pub label: String,
    pub live: Live,
    /// Container takes keyboard focus (tabindex 0)
    pub focusable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub duration_ms: u64,
    pub easing: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideView {
    pub id: SlideId,
    /// Unique per strip cell, clones included
    pub key: String,
    pub image: ImageRef,
    pub alt_text: String,
    /// "Slide k of n"
    pub label: String,
    pub offset_percent: i64,
    /// Hidden from assistive technology (not the cell on screen)
    pub hidden: bool,
    pub is_clone: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DotView {
    pub index: usize,
    pub role: &'static str,
    pub selected: bool,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlView {
    pub label: &'static str,
    pub enabled: bool,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselView {
    pub region: Region,
    pub slides: Vec<SlideView>,
    pub translate_percent: i64,
    pub transition: Option<Transition>,
    pub dots: Vec<DotView>,
    pub prev: ControlView,
    pub next: ControlView,
    pub placeholder: Option<&'static str>,
    /// Real slide index currently shown
    pub current_index: usize,
}

impl CarouselView {
    pub fn build(deck: &SlideDeck, track: &Track, reduced_motion: bool, auto_rotating: bool) -> Self {
        let count = deck.len();
        let has_slides = count > 0;
        let current = track.current_index();

        let slides = (0..track.strip_len())
            .filter_map(|cell| {
                let real = track.real_index_of(cell);
                let slide = deck.get(real)?;
                let is_clone = track.is_clone(cell);
                Some(SlideView {
                    id: slide.id.clone(),
                    key: format!("{}-{}", slide.id, cell),
                    image: slide.image.clone(),
                    alt_text: slide.alt_text.clone(),
                    label: format!("Slide {} of {}", real + 1, count),
                    offset_percent: cell as i64 * 100,
                    hidden: cell != track.position(),
                    is_clone,
                })
            })
            .collect();

        let dots = (0..count)
            .map(|index| DotView {
                index,
                role: "tab",
                selected: index == current,
                label: format!("Go to slide {}", index + 1),
            })
            .collect();

        let transition = (track.animation_enabled() && !reduced_motion).then_some(Transition {
            duration_ms: TRANSITION_MS,
            easing: TRANSITION_EASING,
        });

        Self {
            region: Region {
                role: "region",
                roledescription: "carousel",
                label: "Featured courses".to_string(),
                live: if auto_rotating { Live::Off } else { Live::Polite },
                focusable: true,
            },
            slides,
            translate_percent: -(track.position() as i64) * 100,
            transition,
            dots,
            prev: ControlView {
                label: "Previous slide",
                enabled: has_slides,
            },
            next: ControlView {
                label: "Next slide",
                enabled: has_slides,
            },
            placeholder: (!has_slides).then_some(PLACEHOLDER_TEXT),
            current_index: current,
        }
    }

    /// The slide currently on screen
    pub fn current_slide(&self) -> Option<&SlideView> {
        self.slides.iter().find(|s| !s.hidden)
    }
}
