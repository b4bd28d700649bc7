//! JSON API layer
//!
//! String-based request/response endpoints for embedding the board engine
//! in hosts that speak JSON (editors, web views, scripting bridges).

pub mod board_json;

// Re-export endpoint functions
pub use board_json::{
    clamp_mesh_json, resolve_drop_json, rotation_command_json, zone_layout_json,
};

// Re-export request/response types
pub use board_json::{
    error_codes, ClampMeshRequest, ClampMeshResponse, DropTarget, JunctionPair,
    ResolveDropRequest, ResolveDropResponse, RotationCommand, RotationCommandRequest, ZoneEntry,
    ZoneLayoutRequest, ZoneLayoutResponse,
};
