//! # Folio UI - presentation behaviors for the portfolio site
//!
//! Small, independent pieces of page behavior. None of them touch the theme
//! preference; they only read layout inputs and produce what the page
//! should show.
//!
//! - [`MobileNav`]: Hamburger menu open/closed state
//! - [`RevealTracker`] and [`LazyImages`]: One-shot scroll observers
//! - [`Parallax`]: Scroll-linked layer offsets
//! - [`RippleLayer`]: Button click ripples and their expiry
//! - [`ContactValidator`]: Contact form validation with simulated sending

mod contact;
mod nav;
mod parallax;
mod reveal;
mod ripple;

pub use contact::{
    ContactForm, ContactValidator, Field, FieldError, Receipt, SubmitError,
    DEFAULT_MIN_MESSAGE_LEN, DEFAULT_SIMULATED_LATENCY, MESSAGE_MAX_LEN, NAME_MAX_LEN,
    NAME_MIN_LEN, SUBJECT_MAX_LEN,
};
pub use nav::{MobileNav, NavAction, ACTIVE_CLASS, DEFAULT_BREAKPOINT};
pub use parallax::{LayerOffset, Parallax, DEFAULT_PARALLAX_SPEED};
pub use reveal::{
    Bounds, LazyImage, LazyImages, RevealTracker, Viewport, DEFAULT_PRELOAD_MARGIN,
    DEFAULT_ROOT_MARGIN, DEFAULT_THRESHOLD, REVEALED_CLASS,
};
pub use ripple::{Rect, Ripple, RippleLayer, RIPPLE_LIFETIME};
