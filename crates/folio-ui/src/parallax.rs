//! Scroll-linked parallax offsets.

use serde::Serialize;

use crate::reveal::Viewport;

/// Speed used for layers registered without a valid one.
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;

/// A layer's vertical offset for one scroll position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerOffset {
    pub id: String,
    /// Pixels to translate the layer down by.
    pub offset: f64,
}

impl LayerOffset {
    /// CSS `transform` value for this offset.
    pub fn transform(&self) -> String {
        format!("translateY({:.2}px)", self.offset)
    }
}

#[derive(Debug, Clone)]
struct Layer {
    id: String,
    speed: f64,
}

/// Moves background layers at a fraction of the scroll speed.
///
/// A layer with speed `s` is offset by `scroll_top * s`: `0.0` scrolls with
/// the page, `1.0` stays fixed in the viewport.
///
/// # Example
///
/// ```rust
/// use folio_ui::{Parallax, Viewport};
///
/// let mut parallax = Parallax::new();
/// parallax.add_layer("hero-bg", 0.5);
///
/// let offsets = parallax.on_scroll(Viewport::new(200.0, 800.0));
/// assert_eq!(offsets[0].offset, 100.0);
/// assert_eq!(offsets[0].transform(), "translateY(100.00px)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parallax {
    layers: Vec<Layer>,
}

impl Parallax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a layer. Re-adding an id replaces its speed; a non-finite
    /// speed falls back to [`DEFAULT_PARALLAX_SPEED`].
    pub fn add_layer(&mut self, id: impl Into<String>, speed: f64) {
        let id = id.into();
        let speed = if speed.is_finite() {
            speed
        } else {
            DEFAULT_PARALLAX_SPEED
        };
        match self.layers.iter_mut().find(|layer| layer.id == id) {
            Some(existing) => existing.speed = speed,
            None => self.layers.push(Layer { id, speed }),
        }
    }

    /// Stops moving a layer. Returns `false` if it was not registered.
    pub fn remove_layer(&mut self, id: &str) -> bool {
        let before = self.layers.len();
        self.layers.retain(|layer| layer.id != id);
        self.layers.len() != before
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Offsets for every layer at this scroll position, in registration order.
    pub fn on_scroll(&self, viewport: Viewport) -> Vec<LayerOffset> {
        let scrolled = viewport.top.max(0.0);
        self.layers
            .iter()
            .map(|layer| LayerOffset {
                id: layer.id.clone(),
                offset: scrolled * layer.speed,
            })
            .collect()
    }
}
