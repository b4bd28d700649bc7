//! Lineup board CLI library
//!
//! Team-document IO plus the plain-text renderings the CLI prints. The
//! binary in `main.rs` stays a thin argument layer over these functions.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use vb_core::court::{all_zone_quads, centroid, seam_junctions, Mesh, Zone};
use vb_core::lineup::{BenchQueue, Rotation, Team};

/// Read a team document (pretty JSON) from disk
pub fn load_team(path: &Path) -> Result<Team> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read team file: {}", path.display()))?;
    let team: Team = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse team file: {}", path.display()))?;
    Ok(team)
}

/// Write a team document as pretty JSON, creating parent directories as needed
pub fn store_team(path: &Path, team: &Team) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    let text = serde_json::to_string_pretty(team).context("Failed to serialize team")?;
    fs::write(path, text)
        .with_context(|| format!("Failed to write team file: {}", path.display()))?;
    Ok(())
}

/// "#7 Mara Kim" for a rostered id, "--" for an empty cell
fn token(team: &Team, id: Option<&String>) -> String {
    match id {
        None => "--".to_string(),
        Some(id) => match team.player(id) {
            Some(player) => format!("#{} {}", player.number, player.name),
            // Unrostered ids only survive in un-normalized documents.
            None => format!("?{}", &id[..id.len().min(8)]),
        },
    }
}

fn bench_line(team: &Team, bench: &BenchQueue) -> String {
    if bench.is_empty() {
        return "(empty)".to_string();
    }
    bench.iter().map(|id| token(team, Some(id))).collect::<Vec<_>>().join(", ")
}

/// Render one rotation: the six court slots in reading order, then both
/// bench queues top to bottom.
pub fn render_rotation(team: &Team, rotation: &Rotation) -> String {
    let mut out = String::new();
    out.push_str(&format!("Rotation '{}'\n", rotation.name));
    for zone in Zone::ALL {
        out.push_str(&format!(
            "  [{}] {:<12} {}\n",
            zone.court_number(),
            zone.as_str(),
            token(team, rotation.slots.get(zone))
        ));
    }
    out.push_str(&format!(
        "  left bench  (top to bottom): {}\n",
        bench_line(team, &rotation.left_bench)
    ));
    out.push_str(&format!(
        "  right bench (top to bottom): {}\n",
        bench_line(team, &rotation.right_bench)
    ));
    out
}

/// Render the whole team document: roster first, then every rotation
pub fn render_team(team: &Team) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Team '{}' ({} players, {} rotations)\n",
        team.name,
        team.roster.len(),
        team.rotations.len()
    ));
    out.push_str("Roster:\n");
    for player in &team.roster {
        out.push_str(&format!("  #{:<3} {}\n", player.number, player.name));
    }
    for rotation in &team.rotations {
        out.push('\n');
        out.push_str(&render_rotation(team, rotation));
    }
    out
}

/// Render the zone layout a mesh derives: per zone the court number,
/// centroid and corner coordinates, plus the two seam/attack junctions
pub fn render_zones(mesh: &Mesh) -> String {
    let mut out = String::new();
    let junctions = seam_junctions(mesh);
    out.push_str(&format!(
        "Zone layout (attack depth {:.0}, junction A ({:.1}, {:.1}), junction B ({:.1}, {:.1}))\n",
        mesh.attack_depth(),
        junctions.a.0,
        junctions.a.1,
        junctions.b.0,
        junctions.b.1
    ));
    for (zone, quad) in all_zone_quads(mesh) {
        let mid = centroid(&quad);
        out.push_str(&format!(
            "  [{}] {:<12} centroid ({:>6.1}, {:>6.1})  corners",
            zone.court_number(),
            zone.as_str(),
            mid.0,
            mid.1
        ));
        for (x, y) in quad {
            out.push_str(&format!(" ({:.0}, {:.0})", x, y));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_store_and_load_round_trip() -> Result<()> {
        let team = Team::new("Riverside");
        let file = NamedTempFile::new()?;

        store_team(file.path(), &team)?;
        let loaded = load_team(file.path())?;

        assert_eq!(loaded, team);
        Ok(())
    }

    #[test]
    fn test_store_creates_parent_directories() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("team.json");

        let team = Team::new("Nested");
        store_team(&path, &team)?;

        assert_eq!(load_team(&path)?.name, "Nested");
        Ok(())
    }

    #[test]
    fn test_load_rejects_malformed_documents() -> Result<()> {
        let file = NamedTempFile::new()?;
        fs::write(file.path(), "not json at all")?;

        assert!(load_team(file.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_render_team_lists_every_player() {
        let team = Team::new("Render");
        let out = render_team(&team);

        for player in &team.roster {
            assert!(out.contains(&player.name), "missing {}", player.name);
        }
        assert!(out.contains("Rotation 'Rotation 1'"));
        assert!(out.contains("right bench"));
    }

    #[test]
    fn test_render_rotation_marks_empty_slots() {
        let mut team = Team::new("Sparse");
        team.rotations[0].slots.take(Zone::FrontMiddle);
        let out = render_rotation(&team, &team.rotations[0]);

        assert!(out.contains("front-middle --"));
    }

    #[test]
    fn test_render_zones_covers_all_six() {
        let out = render_zones(&Mesh::default());

        for zone in Zone::ALL {
            assert!(out.contains(zone.as_str()), "missing {}", zone.as_str());
        }
        assert!(out.contains("attack depth 700"));
    }
}
