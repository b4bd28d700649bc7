//! # vb_core - Volleyball Lineup Board Engine
//!
//! This library provides the core of a coach's lineup board: a reshapeable
//! court zone mesh and a bench-fed rotation engine, with a JSON API for easy
//! integration with game engines and editor hosts.
//!
//! ## Features
//! - Six court zones derived live from a 10-point control mesh
//! - Clockwise / counter-clockwise rotation through two sideline benches
//! - Self-repairing lineup membership after every edit
//! - Compact save files with integrity checks

// Allow unused code for API surface consumed by embedding hosts
#![allow(dead_code)]
// Method naming conventions - as_str/from_str pairs mirror the wire format
#![allow(clippy::should_implement_trait)]

pub mod api;
pub mod court;
pub mod data;
pub mod error;
pub mod lineup;
pub mod save;
pub mod session;

// Re-export main API functions
pub use api::{clamp_mesh_json, resolve_drop_json, rotation_command_json, zone_layout_json};

// Re-export court geometry
pub use court::{
    all_zone_quads, point_in_quad, seam_junctions, zone_at, zone_centroid, CanvasPos,
    ControlPointId, Mesh, SeamJunctions, Zone, ZoneQuad,
};
pub use error::{BoardError, Result};

// Re-export lineup system types
pub use lineup::{
    is_normalized, normalize_rotation, BenchQueue, BenchSide, Placement, Player, PlayerId,
    Rotation, SlotAssignments, Team,
};

// Re-export save system
pub use save::{BoardSave, SaveError, SaveManager};

// Re-export the drag session layer
pub use session::{BoardContext, DragKind, DragSession};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_board_session() {
        let mut board = BoardContext::new(Team::new("Sharks"));

        // Reshape the attack line, pushing the front zones deeper.
        assert!(board.begin_drag(DragKind::ControlPoint(ControlPointId::AttackLeft), (0.0, 700.0)));
        board.drag_to((0.0, 900.0));
        board.end_drag((0.0, 900.0));
        assert_eq!(board.active_rotation().mesh.attack_depth(), 900.0);

        // Drag the top right-bench player onto the front-middle zone.
        let token = board.active_rotation().right_bench.iter().next().cloned().unwrap();
        let displaced = board.active_rotation().slots.front_middle.clone().unwrap();
        assert!(board.begin_drag(DragKind::Token(token.clone()), (1010.0, 200.0)));
        let target = board.end_drag((500.0, 350.0));
        assert_eq!(target, Some(Placement::Slot(Zone::FrontMiddle)));
        assert_eq!(board.active_rotation().slots.front_middle.as_ref(), Some(&token));
        assert!(board.active_rotation().right_bench.contains(&displaced));

        assert!(board.rotate_clockwise());

        // The JSON layer sees the same geometry the session mutated.
        let request = json!({
            "schema_version": 1,
            "mesh": board.active_rotation().mesh.to_named_points(),
        });
        let response = zone_layout_json(&request.to_string());
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["zones"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_rotation_cycle_returns_home() {
        let mut board = BoardContext::new(Team::new("Cycle"));
        let start = board.active_rotation().clone();

        // Six slots plus two three-player benches: one full lap is 12 steps.
        for _ in 0..12 {
            assert!(board.rotate_clockwise());
        }

        let end = board.active_rotation();
        assert_eq!(end.slots, start.slots);
        assert_eq!(end.left_bench, start.left_bench);
        assert_eq!(end.right_bench, start.right_bench);
    }

    #[test]
    fn test_save_roundtrip_preserves_a_session() {
        let mut board = BoardContext::new(Team::new("Sharks"));
        assert!(board.rotate_clockwise());

        let save = BoardSave::from_teams(vec![board.team.clone()]);
        let bytes = save::serialize_and_compress(&save).unwrap();
        let restored = save::decompress_and_deserialize(&bytes).unwrap();

        assert_eq!(restored.teams[0], board.team);
        assert_eq!(restored.active_team.as_deref(), Some(board.team.id.as_str()));
    }
}
