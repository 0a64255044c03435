//! mosaic-ui - Dioxus components for the image gallery
//!
//! Contains the masonry grid, infinite scroll container, lightbox overlay
//! and the store the web app feeds them from. Gallery rules live in
//! `mosaic-core`; this crate wires them to the DOM.

pub mod browser;
pub mod components;
pub mod stores;
pub mod timer;
pub mod wasm_utils;

pub use components::*;
