//! Restaurant-page photo carousel.

use taj_data::GalleryImage;

/// At most this many gallery images become slides.
pub const MAX_SLIDES: usize = 5;

/// Auto-advance period.
pub const AUTOPLAY_MS: u32 = 5_000;

/// Slides and the current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    slides: Vec<GalleryImage>,
    current: usize,
}

impl Carousel {
    /// Build from the gallery response. `None` when there is nothing to show.
    pub fn from_images(images: Vec<GalleryImage>) -> Option<Self> {
        let slides: Vec<GalleryImage> = images.into_iter().take(MAX_SLIDES).collect();
        (!slides.is_empty()).then_some(Self { slides, current: 0 })
    }

    pub fn slides(&self) -> &[GalleryImage] {
        &self.slides
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Advance, wrapping to the first slide.
    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.slides.len();
        self.current
    }

    /// Go back, wrapping to the last slide.
    pub fn prev(&mut self) -> usize {
        self.current = (self.current + self.slides.len() - 1) % self.slides.len();
        self.current
    }

    /// `transform` for the track at the current slide.
    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.current * 100)
    }
}
