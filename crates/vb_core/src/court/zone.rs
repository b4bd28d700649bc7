//! Derived court zones and hit testing
//!
//! Zones are never stored: they are re-derived from the mesh on demand.
//! The two lane seams cut the attack line at the seam junctions, and a
//! fixed topology table turns corners, seam endpoints, attack endpoints
//! and junctions into six quadrilaterals (3x2 grid, front row at the net).

use super::constants::{canvas, hit, junction};
use super::mesh::{CanvasPos, Mesh};

/// Zone identifier for the 3x2 court grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Front row (net side), left column
    FrontLeft,
    /// Front row, middle column
    FrontMiddle,
    /// Front row, right column
    FrontRight,
    /// Back row (baseline side), left column
    BackLeft,
    /// Back row, middle column
    BackMiddle,
    /// Back row, right column
    BackRight,
}

impl Zone {
    /// All zones in reading order; this is also the fixed scan order for
    /// hit testing and membership normalization
    pub const ALL: [Zone; 6] = [
        Zone::FrontLeft,
        Zone::FrontMiddle,
        Zone::FrontRight,
        Zone::BackLeft,
        Zone::BackMiddle,
        Zone::BackRight,
    ];

    /// Get zone index (0-5)
    pub fn index(&self) -> usize {
        match self {
            Zone::FrontLeft => 0,
            Zone::FrontMiddle => 1,
            Zone::FrontRight => 2,
            Zone::BackLeft => 3,
            Zone::BackMiddle => 4,
            Zone::BackRight => 5,
        }
    }

    /// Create from index
    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    /// Get the string ID (for JSON compatibility)
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::FrontLeft => "front-left",
            Zone::FrontMiddle => "front-middle",
            Zone::FrontRight => "front-right",
            Zone::BackLeft => "back-left",
            Zone::BackMiddle => "back-middle",
            Zone::BackRight => "back-right",
        }
    }

    /// Parse from string ID
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "front-left" => Some(Zone::FrontLeft),
            "front-middle" => Some(Zone::FrontMiddle),
            "front-right" => Some(Zone::FrontRight),
            "back-left" => Some(Zone::BackLeft),
            "back-middle" => Some(Zone::BackMiddle),
            "back-right" => Some(Zone::BackRight),
            _ => None,
        }
    }

    /// International rotation position number (1 = back-right server)
    pub fn court_number(&self) -> u8 {
        match self {
            Zone::BackRight => 1,
            Zone::FrontRight => 2,
            Zone::FrontMiddle => 3,
            Zone::FrontLeft => 4,
            Zone::BackLeft => 5,
            Zone::BackMiddle => 6,
        }
    }

    /// Is this zone in the front (net) row?
    pub fn is_front(&self) -> bool {
        matches!(self, Zone::FrontLeft | Zone::FrontMiddle | Zone::FrontRight)
    }

    /// Front <-> back counterpart in the same column
    pub fn mirror(&self) -> Self {
        match self {
            Zone::FrontLeft => Zone::BackLeft,
            Zone::FrontMiddle => Zone::BackMiddle,
            Zone::FrontRight => Zone::BackRight,
            Zone::BackLeft => Zone::FrontLeft,
            Zone::BackMiddle => Zone::FrontMiddle,
            Zone::BackRight => Zone::FrontRight,
        }
    }
}

/// Where the lane seams cross the attack line. Ordered: `a.x + MIN_GAP <= b.x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeamJunctions {
    pub a: CanvasPos,
    pub b: CanvasPos,
}

/// One zone's polygon, vertices in clockwise order (y-down screen space)
pub type ZoneQuad = [CanvasPos; 4];

/// Intersection of the infinite lines (p1,p2) and (p3,p4).
///
/// Returns `None` when the determinant magnitude falls under
/// [`junction::INTERSECT_EPSILON`] (near-parallel lines).
fn line_intersection(
    p1: CanvasPos,
    p2: CanvasPos,
    p3: CanvasPos,
    p4: CanvasPos,
) -> Option<CanvasPos> {
    let denom = (p1.0 - p2.0) * (p3.1 - p4.1) - (p1.1 - p2.1) * (p3.0 - p4.0);
    if denom.abs() < junction::INTERSECT_EPSILON {
        return None;
    }
    let d12 = p1.0 * p2.1 - p1.1 * p2.0;
    let d34 = p3.0 * p4.1 - p3.1 * p4.0;
    let x = (d12 * (p3.0 - p4.0) - (p1.0 - p2.0) * d34) / denom;
    let y = (d12 * (p3.1 - p4.1) - (p1.1 - p2.1) * d34) / denom;
    Some((x, y))
}

fn seam_attack_junction(mesh: &Mesh, top: CanvasPos, bottom: CanvasPos) -> CanvasPos {
    match line_intersection(top, bottom, mesh.attack_left, mesh.attack_right) {
        Some(p) => p,
        // Degenerate (near-parallel) case: drop the junction onto the
        // seam's midline at the attack depth instead of erroring.
        None => ((top.0 + bottom.0) * 0.5, mesh.attack_depth()),
    }
}

/// Derive both seam junctions from the mesh. Total for any mesh.
///
/// The pair is re-ordered left-to-right and spread to the minimum gap so
/// the middle zones cannot invert, even on unclamped input.
pub fn seam_junctions(mesh: &Mesh) -> SeamJunctions {
    let mut a = seam_attack_junction(mesh, mesh.seam_a_top, mesh.seam_a_bottom);
    let mut b = seam_attack_junction(mesh, mesh.seam_b_top, mesh.seam_b_bottom);

    a.0 = a.0.clamp(0.0, canvas::WIDTH);
    b.0 = b.0.clamp(0.0, canvas::WIDTH);

    if a.0 > b.0 {
        std::mem::swap(&mut a, &mut b);
    }
    if b.0 - a.0 < junction::MIN_GAP {
        let mid = (a.0 + b.0) * 0.5;
        let mut left = mid - junction::MIN_GAP * 0.5;
        let mut right = mid + junction::MIN_GAP * 0.5;
        if left < 0.0 {
            right -= left;
            left = 0.0;
        }
        if right > canvas::WIDTH {
            left -= right - canvas::WIDTH;
            right = canvas::WIDTH;
        }
        a.0 = left;
        b.0 = right;
    }

    SeamJunctions { a, b }
}

fn quad_from(mesh: &Mesh, j: &SeamJunctions, zone: Zone) -> ZoneQuad {
    match zone {
        Zone::FrontLeft => [mesh.corner_top_left, mesh.seam_a_top, j.a, mesh.attack_left],
        Zone::FrontMiddle => [mesh.seam_a_top, mesh.seam_b_top, j.b, j.a],
        Zone::FrontRight => [mesh.seam_b_top, mesh.corner_top_right, mesh.attack_right, j.b],
        Zone::BackLeft => [mesh.attack_left, j.a, mesh.seam_a_bottom, mesh.corner_bottom_left],
        Zone::BackMiddle => [j.a, j.b, mesh.seam_b_bottom, mesh.seam_a_bottom],
        Zone::BackRight => [j.b, mesh.attack_right, mesh.corner_bottom_right, mesh.seam_b_bottom],
    }
}

/// Polygon of one zone
pub fn zone_quad(mesh: &Mesh, zone: Zone) -> ZoneQuad {
    quad_from(mesh, &seam_junctions(mesh), zone)
}

/// Polygons of all six zones, junctions derived once
pub fn all_zone_quads(mesh: &Mesh) -> [(Zone, ZoneQuad); 6] {
    let j = seam_junctions(mesh);
    Zone::ALL.map(|zone| (zone, quad_from(mesh, &j, zone)))
}

/// Vertex mean of a zone's quad; the token anchor renderers snap to
pub fn zone_centroid(mesh: &Mesh, zone: Zone) -> CanvasPos {
    centroid(&zone_quad(mesh, zone))
}

/// Vertex mean of a quad
#[inline]
pub fn centroid(quad: &ZoneQuad) -> CanvasPos {
    let (sx, sy) = quad.iter().fold((0.0, 0.0), |acc, p| (acc.0 + p.0, acc.1 + p.1));
    (sx / quad.len() as f32, sy / quad.len() as f32)
}

/// Ray-cast parity test: does `point` fall inside `quad`?
///
/// For each edge straddling the point's y, the point's x is compared
/// against the edge's x at that y; [`hit::EDGE_EPSILON`] in the slope
/// denominator keeps near-horizontal edges from dividing by zero.
/// Boundary points resolve by parity, deterministically.
pub fn point_in_quad(point: CanvasPos, quad: &ZoneQuad) -> bool {
    let (px, py) = point;
    let mut inside = false;
    let mut j = quad.len() - 1;
    for i in 0..quad.len() {
        let (xi, yi) = quad[i];
        let (xj, yj) = quad[j];
        if (yi > py) != (yj > py) {
            let cross_x = (xj - xi) * (py - yi) / (yj - yi + hit::EDGE_EPSILON) + xi;
            if px < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// First zone (in [`Zone::ALL`] order) containing the point, if any
pub fn zone_at(mesh: &Mesh, point: CanvasPos) -> Option<Zone> {
    let j = seam_junctions(mesh);
    Zone::ALL.into_iter().find(|zone| point_in_quad(point, &quad_from(mesh, &j, *zone)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::court::constants::{attack, seam};
    use crate::court::mesh::ControlPointId;

    #[test]
    fn test_zone_index_roundtrip() {
        for zone in Zone::ALL {
            assert_eq!(Zone::from_index(zone.index()), Some(zone));
            assert_eq!(Zone::from_str(zone.as_str()), Some(zone));
        }
        assert_eq!(Zone::from_str("middle-front"), None);
        assert_eq!(Zone::from_index(6), None);
    }

    #[test]
    fn test_zone_mirror_is_involution() {
        for zone in Zone::ALL {
            assert_eq!(zone.mirror().mirror(), zone);
            assert_ne!(zone.mirror().is_front(), zone.is_front());
        }
    }

    #[test]
    fn test_court_numbers_cover_one_to_six() {
        let mut seen = [false; 6];
        for zone in Zone::ALL {
            let n = zone.court_number() as usize;
            assert!((1..=6).contains(&n));
            assert!(!seen[n - 1], "duplicate court number {}", n);
            seen[n - 1] = true;
        }
    }

    #[test]
    fn test_default_mesh_junctions_sit_on_the_attack_line() {
        let mesh = Mesh::new();
        let j = seam_junctions(&mesh);
        assert!((j.a.1 - mesh.attack_depth()).abs() < 1e-3);
        assert!((j.b.1 - mesh.attack_depth()).abs() < 1e-3);
        assert!((j.a.0 - canvas::WIDTH / 3.0).abs() < 1e-3);
        assert!((j.b.0 - canvas::WIDTH * 2.0 / 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_slanted_seam_moves_its_junction() {
        let mut mesh = Mesh::new();
        // Lean seam A hard right at the net, keep its baseline end.
        mesh.set_point(ControlPointId::SeamATop, (500.0, 0.0));
        let j = seam_junctions(&mesh);
        // Junction slides along the seam: halfway down, halfway across.
        assert!((j.a.0 - (500.0 + mesh.seam_a_bottom.0) / 2.0).abs() < 1e-3);
        assert!((j.a.1 - 700.0).abs() < 1e-3);
    }

    #[test]
    fn test_each_centroid_resolves_to_its_own_zone() {
        let mut mesh = Mesh::new();
        mesh.set_point(ControlPointId::SeamATop, (520.0, 0.0));
        mesh.set_point(ControlPointId::SeamBBottom, (930.0, canvas::HEIGHT));
        mesh.set_point(ControlPointId::AttackLeft, (0.0, 980.0));

        for zone in Zone::ALL {
            let c = zone_centroid(&mesh, zone);
            assert_eq!(zone_at(&mesh, c), Some(zone), "centroid of {:?} misresolved", zone);
        }
    }

    #[test]
    fn test_interior_grid_is_covered_exactly_once() {
        let mesh = Mesh::new();
        let quads = all_zone_quads(&mesh);
        let mut x = 25.0;
        while x < canvas::WIDTH {
            let mut y = 25.0;
            while y < canvas::HEIGHT {
                let hits =
                    quads.iter().filter(|(_, quad)| point_in_quad((x, y), quad)).count();
                assert_eq!(hits, 1, "point ({}, {}) hit {} zones", x, y, hits);
                y += 50.0;
            }
            x += 50.0;
        }
    }

    #[test]
    fn test_points_outside_the_court_resolve_to_none() {
        let mesh = Mesh::new();
        assert_eq!(zone_at(&mesh, (-5.0, 700.0)), None);
        assert_eq!(zone_at(&mesh, (1005.0, 700.0)), None);
        assert_eq!(zone_at(&mesh, (500.0, -1.0)), None);
        assert_eq!(zone_at(&mesh, (500.0, 1401.0)), None);
    }

    #[test]
    fn test_degenerate_intersection_falls_back_to_seam_midpoint() {
        let mut mesh = Mesh::new();
        // Raw writes bypass the clamp: force the attack "line" vertical so
        // it runs parallel to seam A.
        mesh.seam_a_top = (400.0, 0.0);
        mesh.seam_a_bottom = (400.0, canvas::HEIGHT);
        mesh.attack_left = (400.0, 100.0);
        mesh.attack_right = (400.0, 1300.0);

        let j = seam_junctions(&mesh);
        assert!((j.a.0 - 400.0).abs() <= junction::MIN_GAP);
        assert_eq!(j.a.1, mesh.attack_depth());
        // Still total: derivation and hit testing keep working.
        let _ = all_zone_quads(&mesh);
        let _ = zone_at(&mesh, (200.0, 200.0));
    }

    #[test]
    fn test_junctions_keep_the_minimum_gap() {
        let mut mesh = Mesh::new();
        // Raw writes: both seams through nearly the same x at the attack depth.
        mesh.seam_a_top = (500.0, 0.0);
        mesh.seam_a_bottom = (500.0, canvas::HEIGHT);
        mesh.seam_b_top = (501.0, 0.0);
        mesh.seam_b_bottom = (501.0, canvas::HEIGHT);

        let j = seam_junctions(&mesh);
        assert!(j.b.0 - j.a.0 >= junction::MIN_GAP - 1e-3);
        assert!(j.a.0 >= 0.0 && j.b.0 <= canvas::WIDTH);
    }

    #[test]
    fn test_inverted_raw_seams_reorder_their_junctions() {
        let mut mesh = Mesh::new();
        mesh.seam_a_top = (800.0, 0.0);
        mesh.seam_a_bottom = (800.0, canvas::HEIGHT);
        mesh.seam_b_top = (200.0, 0.0);
        mesh.seam_b_bottom = (200.0, canvas::HEIGHT);

        let j = seam_junctions(&mesh);
        assert!(j.a.0 < j.b.0);
    }

    #[test]
    fn test_clamped_meshes_never_need_reordering() {
        // At both pinned edges seam A sits left of seam B by the gap, and
        // both seam lines are linear in y, so they cannot cross inside.
        let mut mesh = Mesh::new();
        mesh.set_point(ControlPointId::SeamATop, (820.0, 0.0));
        mesh.set_point(ControlPointId::SeamBBottom, (60.0, canvas::HEIGHT));
        assert!(mesh.seam_a_top.0 + seam::MIN_GAP <= mesh.seam_b_top.0);
        assert!(mesh.seam_a_bottom.0 + seam::MIN_GAP <= mesh.seam_b_bottom.0);

        let j = seam_junctions(&mesh);
        assert!(j.a.0 < j.b.0);
    }

    #[test]
    fn test_attack_line_extremes_keep_six_zones() {
        for depth in [attack::EDGE_MARGIN, canvas::HEIGHT - attack::EDGE_MARGIN] {
            let mut mesh = Mesh::new();
            mesh.set_point(ControlPointId::AttackLeft, (0.0, depth));
            for zone in Zone::ALL {
                let c = zone_centroid(&mesh, zone);
                assert_eq!(zone_at(&mesh, c), Some(zone));
            }
        }
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn clamped_mesh() -> impl Strategy<Value = Mesh> {
            (
                seam::SIDE_MARGIN..(canvas::WIDTH - seam::SIDE_MARGIN),
                seam::SIDE_MARGIN..(canvas::WIDTH - seam::SIDE_MARGIN),
                seam::SIDE_MARGIN..(canvas::WIDTH - seam::SIDE_MARGIN),
                seam::SIDE_MARGIN..(canvas::WIDTH - seam::SIDE_MARGIN),
                attack::EDGE_MARGIN..(canvas::HEIGHT - attack::EDGE_MARGIN),
            )
                .prop_map(|(a_top, a_bot, b_top, b_bot, depth)| {
                    let mut mesh = Mesh::new();
                    mesh.seam_a_top.0 = a_top;
                    mesh.seam_a_bottom.0 = a_bot;
                    mesh.seam_b_top.0 = b_top;
                    mesh.seam_b_bottom.0 = b_bot;
                    mesh.attack_left.1 = depth;
                    mesh.attack_right.1 = depth;
                    mesh.clamp();
                    mesh
                })
        }

        proptest! {
            /// Property: every zone's centroid hit-tests back to that zone
            #[test]
            fn prop_centroids_resolve_to_their_zone(mesh in clamped_mesh()) {
                for zone in Zone::ALL {
                    let c = zone_centroid(&mesh, zone);
                    prop_assert_eq!(zone_at(&mesh, c), Some(zone));
                }
            }

            /// Property: junctions stay ordered with the gap on any mesh
            #[test]
            fn prop_junctions_ordered(mesh in clamped_mesh()) {
                let j = seam_junctions(&mesh);
                prop_assert!(j.b.0 - j.a.0 >= junction::MIN_GAP - 1e-3);
            }
        }
    }
}
