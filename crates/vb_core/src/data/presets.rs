//! Mesh preset catalog
//!
//! Named court layouts a coach can start from instead of the default
//! thirds split. The catalog ships inside the binary and is parsed once.
//!
//! ## Usage
//!
//! ```rust
//! use vb_core::data::presets::{preset, presets};
//!
//! let mesh = preset("strong-middle").map(|p| p.to_mesh());
//! println!("{} presets available", presets().len());
//! ```

use std::env;
use std::sync::OnceLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::court::Mesh;

// =============================================================================
// Embedded YAML Data
// =============================================================================

/// Preset catalog YAML (compile-time embedded)
pub const PRESETS_YAML: &str = include_str!("../../../../data/presets/mesh_presets.yaml");

// =============================================================================
// Static Caching
// =============================================================================

static PRESETS: OnceLock<Vec<MeshPreset>> = OnceLock::new();

#[derive(Debug, Deserialize)]
struct PresetFile {
    presets: Vec<MeshPreset>,
}

/// One named court layout: lane seam positions plus attack-line depth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MeshPreset {
    pub id: String,
    pub label: String,
    /// Shared x of seam A's top and bottom endpoints
    pub seam_a_x: f32,
    /// Shared x of seam B's top and bottom endpoints
    pub seam_b_x: f32,
    /// Attack-line depth
    pub attack_y: f32,
}

impl MeshPreset {
    /// Materialize the preset as a clamped mesh
    pub fn to_mesh(&self) -> Mesh {
        let mut mesh = Mesh::new();
        mesh.seam_a_top.0 = self.seam_a_x;
        mesh.seam_a_bottom.0 = self.seam_a_x;
        mesh.seam_b_top.0 = self.seam_b_x;
        mesh.seam_b_bottom.0 = self.seam_b_x;
        mesh.attack_left.1 = self.attack_y;
        mesh.attack_right.1 = self.attack_y;
        mesh.clamp();
        mesh
    }

    /// Load from environment variable VB_MESH_PRESET or use the default mesh
    pub fn from_env_or_default() -> Mesh {
        let id = env::var("VB_MESH_PRESET").unwrap_or_default().to_lowercase();
        preset(&id).map(MeshPreset::to_mesh).unwrap_or_default()
    }
}

// =============================================================================
// Public API
// =============================================================================

/// The embedded preset catalog
///
/// Parses the YAML on first call, then returns the cached list.
///
/// # Panics
///
/// Panics if the embedded YAML fails to parse (cannot happen in a normal
/// build; the catalog is compiled in).
pub fn presets() -> &'static [MeshPreset] {
    PRESETS
        .get_or_init(|| {
            let file: PresetFile =
                serde_yaml::from_str(PRESETS_YAML).expect("Failed to parse mesh_presets.yaml");
            file.presets
        })
        .as_slice()
}

/// Look up one preset by id
pub fn preset(id: &str) -> Option<&'static MeshPreset> {
    presets().iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::court::constants::seam;

    #[test]
    fn test_catalog_loads_and_ids_are_unique() {
        let all = presets();
        assert!(all.len() >= 3);

        let mut ids: Vec<&str> = all.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all.len());

        assert!(preset("balanced").is_some());
        assert!(preset("no-such-preset").is_none());
    }

    #[test]
    fn test_preset_meshes_satisfy_the_layout_invariants() {
        for entry in presets() {
            let mesh = entry.to_mesh();
            let mut reclamped = mesh;
            reclamped.clamp();
            assert_eq!(mesh, reclamped, "preset '{}' not clamped", entry.id);
            assert!(
                mesh.seam_a_top.0 + seam::MIN_GAP <= mesh.seam_b_top.0,
                "preset '{}' seams too close",
                entry.id
            );
        }
    }

    #[test]
    fn test_strong_middle_widens_the_center_lane() {
        let mesh = preset("strong-middle").unwrap().to_mesh();
        assert_eq!(mesh.seam_a_top, (250.0, 0.0));
        assert_eq!(mesh.seam_b_bottom, (750.0, 1400.0));
        assert_eq!(mesh.attack_left, (0.0, 700.0));
    }

    #[test]
    fn test_env_selection_falls_back_to_default() {
        std::env::set_var("VB_MESH_PRESET", "deep-attack");
        let mesh = MeshPreset::from_env_or_default();
        assert_eq!(mesh.attack_left.1, 900.0);

        std::env::set_var("VB_MESH_PRESET", "bogus");
        assert_eq!(MeshPreset::from_env_or_default(), Mesh::default());

        std::env::remove_var("VB_MESH_PRESET");
        assert_eq!(MeshPreset::from_env_or_default(), Mesh::default());
    }

    #[test]
    fn test_yaml_embedded() {
        assert!(!PRESETS_YAML.is_empty());
    }
}
