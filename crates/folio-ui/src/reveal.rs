//! Scroll-triggered reveal animations and lazy image loading.
//!
//! Both trackers are one-shot: an element is reported once, the first time
//! it comes into view, and is then forgotten.

use serde::Serialize;

/// Fraction of an element that must be visible before it is revealed.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Pixels trimmed from the bottom of the viewport for reveal checks.
pub const DEFAULT_ROOT_MARGIN: f64 = 50.0;

/// Pixels beyond the viewport at which images start loading.
pub const DEFAULT_PRELOAD_MARGIN: f64 = 200.0;

/// Class added to an element when it is revealed.
pub const REVEALED_CLASS: &str = "visible";

/// The visible part of the page, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub top: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Vertical extent of an element, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Fraction of this element lying inside `[start, end]`.
    ///
    /// Zero-height elements count as fully visible when inside the range.
    fn visible_fraction(&self, start: f64, end: f64) -> f64 {
        if self.height <= 0.0 {
            return if self.top >= start && self.top <= end {
                1.0
            } else {
                0.0
            };
        }
        let overlap = self.bottom().min(end) - self.top.max(start);
        (overlap / self.height).clamp(0.0, 1.0)
    }

    fn intersects(&self, start: f64, end: f64) -> bool {
        self.top <= end && self.bottom() >= start
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

#[derive(Debug, Clone)]
struct Pending {
    id: String,
    bounds: Bounds,
}

/// Reveals elements as they scroll into view.
///
/// # Example
///
/// ```rust
/// use folio_ui::{Bounds, RevealTracker, Viewport};
///
/// let mut tracker = RevealTracker::new();
/// tracker.observe("about", Bounds::new(900.0, 400.0));
///
/// assert!(tracker.on_scroll(Viewport::new(0.0, 800.0)).is_empty());
/// assert_eq!(tracker.on_scroll(Viewport::new(300.0, 800.0)), vec!["about"]);
/// assert!(tracker.on_scroll(Viewport::new(300.0, 800.0)).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    root_margin: f64,
    pending: Vec<Pending>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::with_options(DEFAULT_THRESHOLD, DEFAULT_ROOT_MARGIN)
    }

    /// Creates a tracker with a custom threshold (clamped to `0.0..=1.0`)
    /// and bottom margin. Non-finite values fall back to the defaults.
    pub fn with_options(threshold: f64, root_margin: f64) -> Self {
        Self {
            threshold: finite_or(threshold, DEFAULT_THRESHOLD).clamp(0.0, 1.0),
            root_margin: finite_or(root_margin, DEFAULT_ROOT_MARGIN).max(0.0),
            pending: Vec::new(),
        }
    }

    /// Starts watching an element. Re-observing an id replaces its bounds.
    pub fn observe(&mut self, id: impl Into<String>, bounds: Bounds) {
        let id = id.into();
        match self.pending.iter_mut().find(|p| p.id == id) {
            Some(existing) => existing.bounds = bounds,
            None => self.pending.push(Pending { id, bounds }),
        }
    }

    /// Number of elements not yet revealed.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Returns ids revealed by this scroll position, in observation order.
    pub fn on_scroll(&mut self, viewport: Viewport) -> Vec<String> {
        let start = viewport.top;
        let end = (viewport.bottom() - self.root_margin).max(start);
        let threshold = self.threshold;

        let mut revealed = Vec::new();
        self.pending.retain(|p| {
            let fraction = p.bounds.visible_fraction(start, end);
            let hit = if threshold == 0.0 {
                p.bounds.intersects(start, end)
            } else {
                fraction >= threshold
            };
            if hit {
                revealed.push(p.id.clone());
            }
            !hit
        });

        if !revealed.is_empty() {
            tracing::trace!("revealed {:?}", revealed);
        }
        revealed
    }
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// An image whose real source is deferred until it nears the viewport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LazyImage {
    pub id: String,
    /// The deferred URL held in the element's `data-src` attribute.
    pub data_src: String,
    pub bounds: Bounds,
}

/// Swaps `data-src` into `src` for images approaching the viewport.
#[derive(Debug, Clone)]
pub struct LazyImages {
    preload_margin: f64,
    pending: Vec<LazyImage>,
}

impl LazyImages {
    pub fn new() -> Self {
        Self::with_preload_margin(DEFAULT_PRELOAD_MARGIN)
    }

    pub fn with_preload_margin(margin: f64) -> Self {
        Self {
            preload_margin: finite_or(margin, DEFAULT_PRELOAD_MARGIN).max(0.0),
            pending: Vec::new(),
        }
    }

    pub fn observe(&mut self, image: LazyImage) {
        self.pending.push(image);
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Returns the images to load for this scroll position.
    pub fn on_scroll(&mut self, viewport: Viewport) -> Vec<LazyImage> {
        let start = viewport.top - self.preload_margin;
        let end = viewport.bottom() + self.preload_margin;

        let (load, keep): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|image| image.bounds.intersects(start, end));
        self.pending = keep;
        load
    }
}

impl Default for LazyImages {
    fn default() -> Self {
        Self::new()
    }
}
