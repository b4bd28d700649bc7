//! Membership repair for rotations
//!
//! After any roster or placement edit, a rotation must hold each rostered
//! player exactly once and nothing else. [`normalize_rotation`] restores
//! that invariant in one pass: slots are scanned in [`Zone::ALL`] order,
//! then the left bench top-down, then the right bench top-down. The first
//! occurrence of a player wins; later duplicates and ids missing from the
//! roster are dropped. Rostered players left unplaced are pushed onto the
//! right-bench top, roster order last-on-top.

use fxhash::FxHashSet;

use super::player::Player;
use super::rotation::{BenchSide, Rotation};
use crate::court::Zone;

/// Rebuild `rotation` so it holds each player in `roster` exactly once
pub fn normalize_rotation(roster: &[Player], rotation: &mut Rotation) {
    let roster_ids: FxHashSet<&str> = roster.iter().map(|p| p.id.as_str()).collect();
    let mut claimed: FxHashSet<String> = FxHashSet::default();

    for zone in Zone::ALL {
        if let Some(id) = rotation.slots.take(zone) {
            if roster_ids.contains(id.as_str()) && claimed.insert(id.clone()) {
                rotation.slots.set(zone, Some(id));
            }
        }
    }

    for side in [BenchSide::Left, BenchSide::Right] {
        rotation
            .bench_mut(side)
            .retain(|id| roster_ids.contains(id.as_str()) && claimed.insert(id.clone()));
    }

    for player in roster {
        if !claimed.contains(player.id.as_str()) {
            rotation.right_bench.push_top(player.id.clone());
        }
    }
}

/// Does `rotation` already hold each rostered player exactly once and no one else?
pub fn is_normalized(roster: &[Player], rotation: &Rotation) -> bool {
    let roster_ids: FxHashSet<&str> = roster.iter().map(|p| p.id.as_str()).collect();
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    let members = rotation
        .slots
        .iter()
        .filter_map(|(_, occupant)| occupant)
        .chain(rotation.left_bench.iter())
        .chain(rotation.right_bench.iter());
    for id in members {
        if !roster_ids.contains(id.as_str()) || !seen.insert(id.as_str()) {
            return false;
        }
    }
    seen.len() == roster_ids.len()
}
