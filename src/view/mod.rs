//! View-model layer
//!
//! Sits between the validated worker record and the renderer: `model` holds
//! the display-ready types, `reference` the fixed per-section content,
//! `assemble` the derivation logic.

pub mod assemble;
pub mod model;
pub mod reference;

pub use assemble::{assemble, page_meta, resolve_image_url, PROFILE_PLACEHOLDER};
pub use model::*;
pub use reference::{DemoContent, SectionSource};
