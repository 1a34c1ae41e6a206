//! Scaffolding core for React components.
//!
//! A request names a target directory and a [`variant::Variant`]. The
//! directory's base name becomes the component name, the single template
//! tagged with the variant is rendered with that name, and the result is
//! written next to an empty stylesheet.

pub mod error;
pub mod generator;
pub mod placeholder;
pub mod prelude;
pub mod source;
pub mod variant;
