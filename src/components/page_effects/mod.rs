//! Interactive layer for the band site.
//!
//! Wires scroll-driven header and nav states, one-shot reveal animations,
//! the tagline typewriter, an ambient particle field, button ripples, and
//! the logo momentum spin onto the page markup. The work is split between
//! pure state machines (testable off the browser) and a thin component
//! that binds them to DOM events and a single animation-frame driver.
//!
//! # Example
//!
//! ```ignore
//! use little_whispers::{PageEffects, PageConfig};
//!
//! let page = PageConfig::default();
//! view! { <PageEffects config=page /> }
//! ```

mod component;
pub mod countdown;
pub mod momentum;
pub mod particles;
mod render;
pub mod reveal;
pub mod scroll;
pub mod theme;
mod types;

pub use component::{EffectsHandle, PageEffects};
pub use theme::EffectsConfig;
pub use types::PageConfig;
