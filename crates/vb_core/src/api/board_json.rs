//! JSON API for board operations
//!
//! String-in / string-out endpoints for embedding hosts: zone layout
//! derivation, drop-target resolution, mesh repair, and rotation commands
//! against a full team document. Every request carries a `schema_version`;
//! failures come back as `{"error": "CODE: detail"}` bodies.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::court::{all_zone_quads, centroid, seam_junctions, zone_at, CanvasPos, Mesh, Zone};
use crate::error::BoardError;
use crate::lineup::rotation::BenchSide;
use crate::lineup::{Placement, Team};

pub mod error_codes {
    pub const BAD_REQUEST: &str = "E_BAD_REQUEST";
    pub const MESH_INCOMPLETE: &str = "E_MESH_INCOMPLETE";
    pub const UNKNOWN_ZONE: &str = "E_UNKNOWN_ZONE";
    pub const UNKNOWN_ROTATION: &str = "E_UNKNOWN_ROTATION";
}

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(message: String) -> String {
    warn!("Board API request rejected: {}", message);
    serde_json::to_string(&ErrorResponse { error: message })
        .unwrap_or_else(|_| String::from(r#"{"error":"E_BAD_REQUEST: unserializable error"}"#))
}

fn parse_request<T: DeserializeOwned>(request_json: &str) -> Result<T, String> {
    serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::BAD_REQUEST, format!("invalid JSON request: {e}")))
}

fn check_schema_version(version: u8) -> Result<(), String> {
    if version != crate::SCHEMA_VERSION {
        return Err(err_code(
            error_codes::BAD_REQUEST,
            format!("Unsupported schema version: {version}"),
        ));
    }
    Ok(())
}

fn mesh_from_wire(points: &HashMap<String, CanvasPos>) -> Result<Mesh, String> {
    Mesh::from_named_points(points).map_err(|e| err_code(error_codes::MESH_INCOMPLETE, e))
}

fn parse_zone(name: &str) -> Result<Zone, String> {
    Zone::from_str(name).ok_or_else(|| {
        err_code(error_codes::UNKNOWN_ZONE, BoardError::UnknownZone(name.to_string()))
    })
}

fn parse_bench_side(name: &str) -> Result<BenchSide, String> {
    BenchSide::from_str(name).ok_or_else(|| {
        err_code(
            error_codes::BAD_REQUEST,
            format!("bench side must be 'left' or 'right', got '{name}'"),
        )
    })
}

// =============================================================================
// Zone layout
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ZoneLayoutRequest {
    pub schema_version: u8,
    /// Control points by wire name ("corner-top-left", "seam-a-top", ..)
    pub mesh: HashMap<String, CanvasPos>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ZoneLayoutResponse {
    pub schema_version: u8,
    pub zones: Vec<ZoneEntry>,
    pub junctions: JunctionPair,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ZoneEntry {
    pub zone: String,
    pub court_number: u8,
    /// Polygon corners in clockwise order
    pub quad: [CanvasPos; 4],
    pub centroid: CanvasPos,
}

/// Where the lane seams cross the attack line
#[derive(Debug, Serialize, JsonSchema)]
pub struct JunctionPair {
    pub a: CanvasPos,
    pub b: CanvasPos,
}

impl ZoneLayoutResponse {
    /// Generate JSON schema for the layout response
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(ZoneLayoutResponse)
    }
}

/// Derive the six zone polygons for a mesh supplied as a named-point map
pub fn zone_layout_json(request_json: &str) -> String {
    match zone_layout(request_json) {
        Ok(response) => response,
        Err(message) => error_response(message),
    }
}

fn zone_layout(request_json: &str) -> Result<String, String> {
    debug!("Processing zone layout request");
    let request: ZoneLayoutRequest = parse_request(request_json)?;
    check_schema_version(request.schema_version)?;
    let mesh = mesh_from_wire(&request.mesh)?;

    let junctions = seam_junctions(&mesh);
    let zones = all_zone_quads(&mesh)
        .iter()
        .map(|(zone, quad)| ZoneEntry {
            zone: zone.as_str().to_string(),
            court_number: zone.court_number(),
            quad: *quad,
            centroid: centroid(quad),
        })
        .collect();

    let response = ZoneLayoutResponse {
        schema_version: crate::SCHEMA_VERSION,
        zones,
        junctions: JunctionPair { a: junctions.a, b: junctions.b },
    };
    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {e}"))
}

// =============================================================================
// Drop resolution
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ResolveDropRequest {
    pub schema_version: u8,
    pub mesh: HashMap<String, CanvasPos>,
    pub point: CanvasPos,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ResolveDropResponse {
    pub schema_version: u8,
    /// Zone name, or null when the point misses every zone
    pub zone: Option<String>,
    pub court_number: Option<u8>,
}

/// Resolve which zone, if any, contains a query point
pub fn resolve_drop_json(request_json: &str) -> String {
    match resolve_drop(request_json) {
        Ok(response) => response,
        Err(message) => error_response(message),
    }
}

fn resolve_drop(request_json: &str) -> Result<String, String> {
    debug!("Processing drop resolution request");
    let request: ResolveDropRequest = parse_request(request_json)?;
    check_schema_version(request.schema_version)?;
    let mesh = mesh_from_wire(&request.mesh)?;

    let hit = zone_at(&mesh, request.point);
    let response = ResolveDropResponse {
        schema_version: crate::SCHEMA_VERSION,
        zone: hit.map(|z| z.as_str().to_string()),
        court_number: hit.map(|z| z.court_number()),
    };
    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {e}"))
}

// =============================================================================
// Mesh repair
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ClampMeshRequest {
    pub schema_version: u8,
    pub mesh: HashMap<String, CanvasPos>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ClampMeshResponse {
    pub schema_version: u8,
    pub mesh: HashMap<String, CanvasPos>,
}

/// Clamp an arbitrary named-point map back into a valid mesh
pub fn clamp_mesh_json(request_json: &str) -> String {
    match clamp_mesh(request_json) {
        Ok(response) => response,
        Err(message) => error_response(message),
    }
}

fn clamp_mesh(request_json: &str) -> Result<String, String> {
    debug!("Processing mesh clamp request");
    let request: ClampMeshRequest = parse_request(request_json)?;
    check_schema_version(request.schema_version)?;
    let mesh = mesh_from_wire(&request.mesh)?;

    let response =
        ClampMeshResponse { schema_version: crate::SCHEMA_VERSION, mesh: mesh.to_named_points() };
    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {e}"))
}

// =============================================================================
// Rotation commands
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct RotationCommandRequest {
    pub schema_version: u8,
    /// Full team document; the response returns it updated and normalized
    pub team: Team,
    pub rotation_id: String,
    pub command: RotationCommand,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum RotationCommand {
    RotateClockwise,
    RotateCounterClockwise,
    /// Raw slot write; the displaced occupant is re-parked by normalization
    SetSlot {
        zone: String,
        #[serde(default)]
        player: Option<String>,
    },
    QueueInsert {
        side: String,
        index: usize,
        player: String,
    },
    /// Drop with swap semantics, as if dragged on the board
    Place {
        player: String,
        target: DropTarget,
    },
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DropTarget {
    Slot { zone: String },
    Bench { side: String, index: usize },
}

/// Apply one rotation command to a team document and return it normalized
pub fn rotation_command_json(request_json: &str) -> String {
    match rotation_command(request_json) {
        Ok(response) => response,
        Err(message) => error_response(message),
    }
}

fn rotation_command(request_json: &str) -> Result<String, String> {
    debug!("Processing rotation command request");
    let request: RotationCommandRequest = parse_request(request_json)?;
    check_schema_version(request.schema_version)?;
    let RotationCommandRequest { mut team, rotation_id, command, .. } = request;

    let rotation = team.rotation_mut(&rotation_id).ok_or_else(|| {
        err_code(error_codes::UNKNOWN_ROTATION, BoardError::UnknownRotation(rotation_id.clone()))
    })?;

    match command {
        RotationCommand::RotateClockwise => rotation.rotate_clockwise(),
        RotationCommand::RotateCounterClockwise => rotation.rotate_counter_clockwise(),
        RotationCommand::SetSlot { zone, player } => {
            let zone = parse_zone(&zone)?;
            rotation.slots.set(zone, player);
        }
        RotationCommand::QueueInsert { side, index, player } => {
            let side = parse_bench_side(&side)?;
            rotation.bench_mut(side).insert(index, player);
        }
        RotationCommand::Place { player, target } => {
            let target = match target {
                DropTarget::Slot { zone } => Placement::Slot(parse_zone(&zone)?),
                DropTarget::Bench { side, index } => {
                    Placement::Bench { side: parse_bench_side(&side)?, index }
                }
            };
            rotation.place(player, target);
        }
    }

    team.normalize_all();
    team.touch();
    serde_json::to_string(&team).map_err(|e| format!("Failed to serialize response: {e}"))
}

// ============================================================================
// Tests
// ============================================================================
