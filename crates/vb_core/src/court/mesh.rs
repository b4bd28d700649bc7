//! Control-point mesh for the court canvas
//!
//! The court is drawn from 10 named control points on the fixed 1000x1400
//! canvas: four immovable corners, two endpoints per lane seam (top edge /
//! bottom edge), and the two attack-line endpoints pinned to the side edges.
//! Every mutation funnels through [`Mesh::clamp`], so any mesh a caller can
//! observe already satisfies the layout invariants.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::constants::{attack, canvas, seam};
use crate::error::{BoardError, Result};

/// Position on the logical canvas
/// - .0 = x (0 = left sideline, 1000 = right sideline)
/// - .1 = y (0 = net edge, 1400 = baseline; y grows downward)
pub type CanvasPos = (f32, f32);

/// Identifier of one mesh control point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlPointId {
    CornerTopLeft,
    CornerTopRight,
    CornerBottomLeft,
    CornerBottomRight,
    /// Left lane seam, net end
    SeamATop,
    /// Left lane seam, baseline end
    SeamABottom,
    /// Right lane seam, net end
    SeamBTop,
    /// Right lane seam, baseline end
    SeamBBottom,
    /// Attack line, left sideline endpoint
    AttackLeft,
    /// Attack line, right sideline endpoint
    AttackRight,
}

impl ControlPointId {
    /// All control points in order
    pub const ALL: [ControlPointId; 10] = [
        ControlPointId::CornerTopLeft,
        ControlPointId::CornerTopRight,
        ControlPointId::CornerBottomLeft,
        ControlPointId::CornerBottomRight,
        ControlPointId::SeamATop,
        ControlPointId::SeamABottom,
        ControlPointId::SeamBTop,
        ControlPointId::SeamBBottom,
        ControlPointId::AttackLeft,
        ControlPointId::AttackRight,
    ];

    /// Get point index (0-9)
    pub fn index(&self) -> usize {
        match self {
            ControlPointId::CornerTopLeft => 0,
            ControlPointId::CornerTopRight => 1,
            ControlPointId::CornerBottomLeft => 2,
            ControlPointId::CornerBottomRight => 3,
            ControlPointId::SeamATop => 4,
            ControlPointId::SeamABottom => 5,
            ControlPointId::SeamBTop => 6,
            ControlPointId::SeamBBottom => 7,
            ControlPointId::AttackLeft => 8,
            ControlPointId::AttackRight => 9,
        }
    }

    /// Create from index
    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    /// Get the string ID (for JSON compatibility)
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlPointId::CornerTopLeft => "corner-top-left",
            ControlPointId::CornerTopRight => "corner-top-right",
            ControlPointId::CornerBottomLeft => "corner-bottom-left",
            ControlPointId::CornerBottomRight => "corner-bottom-right",
            ControlPointId::SeamATop => "seam-a-top",
            ControlPointId::SeamABottom => "seam-a-bottom",
            ControlPointId::SeamBTop => "seam-b-top",
            ControlPointId::SeamBBottom => "seam-b-bottom",
            ControlPointId::AttackLeft => "attack-left",
            ControlPointId::AttackRight => "attack-right",
        }
    }

    /// Parse from string ID
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "corner-top-left" => Some(ControlPointId::CornerTopLeft),
            "corner-top-right" => Some(ControlPointId::CornerTopRight),
            "corner-bottom-left" => Some(ControlPointId::CornerBottomLeft),
            "corner-bottom-right" => Some(ControlPointId::CornerBottomRight),
            "seam-a-top" => Some(ControlPointId::SeamATop),
            "seam-a-bottom" => Some(ControlPointId::SeamABottom),
            "seam-b-top" => Some(ControlPointId::SeamBTop),
            "seam-b-bottom" => Some(ControlPointId::SeamBBottom),
            "attack-left" => Some(ControlPointId::AttackLeft),
            "attack-right" => Some(ControlPointId::AttackRight),
            _ => None,
        }
    }

    /// Corners never move; drags against them are absorbed by the clamp
    pub fn is_fixed(&self) -> bool {
        matches!(
            self,
            ControlPointId::CornerTopLeft
                | ControlPointId::CornerTopRight
                | ControlPointId::CornerBottomLeft
                | ControlPointId::CornerBottomRight
        )
    }
}

/// The full 10-point mesh. Field order matches [`ControlPointId::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Mesh {
    pub corner_top_left: CanvasPos,
    pub corner_top_right: CanvasPos,
    pub corner_bottom_left: CanvasPos,
    pub corner_bottom_right: CanvasPos,
    pub seam_a_top: CanvasPos,
    pub seam_a_bottom: CanvasPos,
    pub seam_b_top: CanvasPos,
    pub seam_b_bottom: CanvasPos,
    pub attack_left: CanvasPos,
    pub attack_right: CanvasPos,
}

impl Mesh {
    /// Canonical starting mesh: seams at the column thirds, attack line at
    /// half depth. Already clamped; `clamp` is the identity on it.
    pub fn new() -> Self {
        Mesh {
            corner_top_left: (0.0, 0.0),
            corner_top_right: (canvas::WIDTH, 0.0),
            corner_bottom_left: (0.0, canvas::HEIGHT),
            corner_bottom_right: (canvas::WIDTH, canvas::HEIGHT),
            seam_a_top: (canvas::WIDTH / 3.0, 0.0),
            seam_a_bottom: (canvas::WIDTH / 3.0, canvas::HEIGHT),
            seam_b_top: (canvas::WIDTH * 2.0 / 3.0, 0.0),
            seam_b_bottom: (canvas::WIDTH * 2.0 / 3.0, canvas::HEIGHT),
            attack_left: (0.0, canvas::HEIGHT / 2.0),
            attack_right: (canvas::WIDTH, canvas::HEIGHT / 2.0),
        }
    }

    /// Read one control point
    pub fn point(&self, id: ControlPointId) -> CanvasPos {
        match id {
            ControlPointId::CornerTopLeft => self.corner_top_left,
            ControlPointId::CornerTopRight => self.corner_top_right,
            ControlPointId::CornerBottomLeft => self.corner_bottom_left,
            ControlPointId::CornerBottomRight => self.corner_bottom_right,
            ControlPointId::SeamATop => self.seam_a_top,
            ControlPointId::SeamABottom => self.seam_a_bottom,
            ControlPointId::SeamBTop => self.seam_b_top,
            ControlPointId::SeamBBottom => self.seam_b_bottom,
            ControlPointId::AttackLeft => self.attack_left,
            ControlPointId::AttackRight => self.attack_right,
        }
    }

    fn write(&mut self, id: ControlPointId, pos: CanvasPos) {
        match id {
            ControlPointId::CornerTopLeft => self.corner_top_left = pos,
            ControlPointId::CornerTopRight => self.corner_top_right = pos,
            ControlPointId::CornerBottomLeft => self.corner_bottom_left = pos,
            ControlPointId::CornerBottomRight => self.corner_bottom_right = pos,
            ControlPointId::SeamATop => self.seam_a_top = pos,
            ControlPointId::SeamABottom => self.seam_a_bottom = pos,
            ControlPointId::SeamBTop => self.seam_b_top = pos,
            ControlPointId::SeamBBottom => self.seam_b_bottom = pos,
            ControlPointId::AttackLeft => self.attack_left = pos,
            ControlPointId::AttackRight => self.attack_right = pos,
        }
    }

    /// Move one control point and re-clamp the whole mesh.
    ///
    /// The attack line shares one y: writing either endpoint takes that
    /// endpoint's y as authoritative and levels its partner before the
    /// clamp runs. Writes against fixed corners are absorbed by the clamp.
    pub fn set_point(&mut self, id: ControlPointId, pos: CanvasPos) {
        match id {
            ControlPointId::AttackLeft | ControlPointId::AttackRight => {
                self.attack_left.1 = pos.1;
                self.attack_right.1 = pos.1;
            }
            _ => self.write(id, pos),
        }
        self.clamp();
    }

    /// Total, idempotent repair. Order matters:
    /// canvas bounds -> pinned axes -> attack-line leveling -> seam
    /// ordering (seam A first, seam B resolved against it).
    pub fn clamp(&mut self) {
        for id in ControlPointId::ALL {
            let p = self.point(id);
            self.write(id, clamp_to_canvas(p));
        }

        self.corner_top_left = (0.0, 0.0);
        self.corner_top_right = (canvas::WIDTH, 0.0);
        self.corner_bottom_left = (0.0, canvas::HEIGHT);
        self.corner_bottom_right = (canvas::WIDTH, canvas::HEIGHT);
        self.seam_a_top.1 = 0.0;
        self.seam_b_top.1 = 0.0;
        self.seam_a_bottom.1 = canvas::HEIGHT;
        self.seam_b_bottom.1 = canvas::HEIGHT;
        self.attack_left.0 = 0.0;
        self.attack_right.0 = canvas::WIDTH;

        // Shared attack-line depth; on disagreement the left endpoint wins
        // (set_point already leveled both ends to the dragged y).
        let depth = self
            .attack_left
            .1
            .clamp(attack::EDGE_MARGIN, canvas::HEIGHT - attack::EDGE_MARGIN);
        self.attack_left.1 = depth;
        self.attack_right.1 = depth;

        // Seam A keeps room on its right so seam B always has a legal band.
        let a_max = canvas::WIDTH - seam::SIDE_MARGIN - seam::MIN_GAP;
        self.seam_a_top.0 = self.seam_a_top.0.clamp(seam::SIDE_MARGIN, a_max);
        self.seam_a_bottom.0 = self.seam_a_bottom.0.clamp(seam::SIDE_MARGIN, a_max);

        let b_max = canvas::WIDTH - seam::SIDE_MARGIN;
        self.seam_b_top.0 = self.seam_b_top.0.clamp(self.seam_a_top.0 + seam::MIN_GAP, b_max);
        self.seam_b_bottom.0 =
            self.seam_b_bottom.0.clamp(self.seam_a_bottom.0 + seam::MIN_GAP, b_max);
    }

    /// Depth of the attack line (shared y of its two endpoints)
    #[inline]
    pub fn attack_depth(&self) -> f32 {
        self.attack_left.1
    }

    /// Build a mesh from a wire-side name -> position map.
    ///
    /// This is the string boundary: all 10 point names must be present
    /// (extra names are ignored). The result is clamped.
    pub fn from_named_points(points: &HashMap<String, CanvasPos>) -> Result<Mesh> {
        let mut missing = Vec::new();
        for id in ControlPointId::ALL {
            if !points.contains_key(id.as_str()) {
                missing.push(id.as_str().to_string());
            }
        }
        if !missing.is_empty() {
            return Err(BoardError::MeshIncomplete {
                expected: ControlPointId::ALL.len(),
                found: ControlPointId::ALL.len() - missing.len(),
                missing,
            });
        }

        let mut mesh = Mesh::new();
        for id in ControlPointId::ALL {
            // Presence was checked above.
            if let Some(&pos) = points.get(id.as_str()) {
                mesh.write(id, pos);
            }
        }
        mesh.clamp();
        Ok(mesh)
    }

    /// Export as a wire-side name -> position map
    pub fn to_named_points(&self) -> HashMap<String, CanvasPos> {
        ControlPointId::ALL.iter().map(|id| (id.as_str().to_string(), self.point(*id))).collect()
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a position into the canvas rectangle
#[inline]
pub fn clamp_to_canvas(pos: CanvasPos) -> CanvasPos {
    (pos.0.clamp(0.0, canvas::WIDTH), pos.1.clamp(0.0, canvas::HEIGHT))
}
