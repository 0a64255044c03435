//! mosaic-core - Renderer-independent gallery logic
//!
//! Holds everything the gallery and lightbox decide without touching the DOM:
//! column breakpoints and masonry packing, the infinite-scroll trigger, the
//! lightbox controller with its playback timer, zoom/pan math, history
//! fragment markers and configuration. The Dioxus components in `mosaic-ui`
//! are thin views over these types.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod external_link;
pub mod gesture;
pub mod history;
pub mod idle;
pub mod infinite_scroll;
pub mod layout;
pub mod lightbox;
pub mod playback;
pub mod scroll_sync;
pub mod slide_buffer;
pub mod zoom;

pub use config::{ConfigError, GalleryConfig, GridConfig, LightboxConfig};
pub use descriptor::{ImageDescriptor, ImageVariant};
pub use error::GalleryError;
pub use external_link::ExternalLink;
pub use gesture::{SwipeDirection, SwipeGesture};
pub use idle::IdleWatch;
pub use infinite_scroll::{ScrollDemand, ScrollMetrics};
pub use layout::{Breakpoint, Breakpoints, MasonryLayout};
pub use lightbox::{LightboxController, OverlayHandle};
pub use playback::{PlaybackMode, PlaybackPeriods, TimerScheduler};
pub use slide_buffer::SlideBuffer;
pub use zoom::ZoomState;
