//! Embedded board data
//!
//! Compile-time data shipped with the crate:
//! - Mesh preset catalog (named court layouts)

pub mod presets;

pub use presets::{preset, presets, MeshPreset, PRESETS_YAML};
