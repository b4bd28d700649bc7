//! Team: the roster plus every saved rotation
//!
//! The team owns the player list; rotations only reference player ids.
//! Every mutating operation re-normalizes all rotations before returning,
//! so callers always observe the exactly-once membership invariant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::normalize::normalize_rotation;
use super::player::{Player, PlayerId};
use super::rotation::Rotation;
use crate::court::Zone;

/// Slot filling order for a fresh rotation: front row left-to-right, then
/// back row right-to-left, matching how numbers read on a real court.
pub const SEED_ORDER: [Zone; 6] = [
    Zone::FrontLeft,
    Zone::FrontMiddle,
    Zone::FrontRight,
    Zone::BackRight,
    Zone::BackMiddle,
    Zone::BackLeft,
];

/// Roster size a new team starts with
pub const DEFAULT_ROSTER_SIZE: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub roster: Vec<Player>,
    pub rotations: Vec<Rotation>,
}

impl Team {
    /// New team with a numbered default roster and one seeded rotation
    pub fn new(name: impl Into<String>) -> Self {
        let roster: Vec<Player> = (1..=DEFAULT_ROSTER_SIZE as u8)
            .map(|n| Player::new(format!("Player {}", n), n))
            .collect();
        Self::from_roster(name, roster)
    }

    /// New team around an existing roster, with one seeded rotation
    pub fn from_roster(name: impl Into<String>, roster: Vec<Player>) -> Self {
        let now = Utc::now();
        let mut team = Team {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: now,
            updated_at: now,
            roster,
            rotations: Vec::new(),
        };
        let first = team.seeded_rotation("Rotation 1");
        team.rotations.push(first);
        team
    }

    /// Fresh rotation filled from the current roster: the first six players
    /// take the slots in [`SEED_ORDER`], the rest alternate onto the
    /// right-bench top and the left-bench bottom.
    fn seeded_rotation(&self, name: impl Into<String>) -> Rotation {
        let mut rotation = Rotation::new(name);
        for (i, player) in self.roster.iter().enumerate() {
            if i < SEED_ORDER.len() {
                rotation.slots.set(SEED_ORDER[i], Some(player.id.clone()));
            } else if (i - SEED_ORDER.len()) % 2 == 0 {
                rotation.right_bench.push_top(player.id.clone());
            } else {
                rotation.left_bench.push_bottom(player.id.clone());
            }
        }
        rotation
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.roster.iter().find(|p| p.id == id)
    }

    pub fn player_by_number(&self, number: u8) -> Option<&Player> {
        self.roster.iter().find(|p| p.number == number)
    }

    /// Add a player to the roster. Normalization parks the newcomer on the
    /// right-bench top of every rotation.
    pub fn add_player(&mut self, name: impl Into<String>, number: u8) -> PlayerId {
        let player = Player::new(name, number);
        let id = player.id.clone();
        self.roster.push(player);
        self.normalize_all();
        self.touch();
        id
    }

    /// Drop a player from the roster. Every rotation sheds the id on the
    /// normalization pass; a vacated slot stays empty.
    pub fn remove_player(&mut self, id: &str) -> Option<Player> {
        let at = self.roster.iter().position(|p| p.id == id)?;
        let removed = self.roster.remove(at);
        self.normalize_all();
        self.touch();
        Some(removed)
    }

    pub fn rotation(&self, id: &str) -> Option<&Rotation> {
        self.rotations.iter().find(|r| r.id == id)
    }

    pub fn rotation_mut(&mut self, id: &str) -> Option<&mut Rotation> {
        self.rotations.iter_mut().find(|r| r.id == id)
    }

    /// Append a rotation seeded from the current roster, returning its id
    pub fn add_rotation(&mut self, name: impl Into<String>) -> String {
        let rotation = self.seeded_rotation(name);
        let id = rotation.id.clone();
        self.rotations.push(rotation);
        self.touch();
        id
    }

    /// Deep-copy an existing rotation under a new name and id
    pub fn clone_rotation(&mut self, id: &str, name: impl Into<String>) -> Option<String> {
        let mut copy = self.rotation(id)?.clone();
        copy.id = Uuid::new_v4().to_string();
        copy.name = name.into();
        let new_id = copy.id.clone();
        self.rotations.push(copy);
        self.touch();
        Some(new_id)
    }

    /// Remove a rotation. The last remaining rotation cannot be deleted.
    pub fn delete_rotation(&mut self, id: &str) -> Option<Rotation> {
        if self.rotations.len() <= 1 {
            return None;
        }
        let at = self.rotations.iter().position(|r| r.id == id)?;
        let removed = self.rotations.remove(at);
        self.touch();
        Some(removed)
    }

    /// Re-establish exactly-once membership in every rotation
    pub fn normalize_all(&mut self) {
        for rotation in &mut self.rotations {
            normalize_rotation(&self.roster, rotation);
        }
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lineup::normalize::is_normalized;
    use crate::lineup::rotation::BenchSide;

    fn id_of(team: &Team, number: u8) -> String {
        team.player_by_number(number).unwrap().id.clone()
    }

    fn slot_number(team: &Team, rotation: usize, zone: Zone) -> Option<u8> {
        let id = team.rotations[rotation].slots.get(zone)?;
        Some(team.player(id).unwrap().number)
    }

    fn bench_numbers(team: &Team, rotation: usize, side: BenchSide) -> Vec<u8> {
        team.rotations[rotation]
            .bench(side)
            .iter()
            .map(|id| team.player(id).unwrap().number)
            .collect()
    }

    #[test]
    fn test_new_team_seeds_the_canonical_lineup() {
        let team = Team::new("Falcons");
        assert_eq!(team.roster.len(), DEFAULT_ROSTER_SIZE);
        assert_eq!(team.rotations.len(), 1);

        assert_eq!(slot_number(&team, 0, Zone::FrontLeft), Some(1));
        assert_eq!(slot_number(&team, 0, Zone::FrontMiddle), Some(2));
        assert_eq!(slot_number(&team, 0, Zone::FrontRight), Some(3));
        assert_eq!(slot_number(&team, 0, Zone::BackRight), Some(4));
        assert_eq!(slot_number(&team, 0, Zone::BackMiddle), Some(5));
        assert_eq!(slot_number(&team, 0, Zone::BackLeft), Some(6));

        assert_eq!(bench_numbers(&team, 0, BenchSide::Right), vec![11, 9, 7]);
        assert_eq!(bench_numbers(&team, 0, BenchSide::Left), vec![8, 10, 12]);
        assert!(is_normalized(&team.roster, &team.rotations[0]));
    }

    #[test]
    fn test_twelve_player_lineup_cycles_in_twelve_steps() {
        let team = Team::new("Falcons");
        let start = team.rotations[0].clone();
        let mut rotation = start.clone();
        for step in 1..=12 {
            rotation.rotate_clockwise();
            if step < 12 {
                assert_ne!(rotation, start, "cycle closed early at step {}", step);
            }
        }
        assert_eq!(rotation, start);
    }

    #[test]
    fn test_added_player_lands_on_every_right_bench_top() {
        let mut team = Team::new("Falcons");
        team.add_rotation("Rotation 2");
        let id = team.add_player("Newcomer", 13);

        for rotation in &team.rotations {
            assert_eq!(rotation.right_bench.position_of(&id), Some(0));
            assert!(is_normalized(&team.roster, rotation));
        }
        assert!(team.updated_at >= team.created_at);
    }

    #[test]
    fn test_removed_player_leaves_an_empty_slot_everywhere() {
        let mut team = Team::new("Falcons");
        team.add_rotation("Rotation 2");
        let id = id_of(&team, 1);

        let removed = team.remove_player(&id).unwrap();
        assert_eq!(removed.number, 1);
        assert!(team.player(&id).is_none());
        for rotation in &team.rotations {
            assert_eq!(rotation.slots.front_left, None);
            assert!(rotation.locate(&id).is_none());
            assert!(is_normalized(&team.roster, rotation));
        }
    }

    #[test]
    fn test_remove_unknown_player_is_a_no_op() {
        let mut team = Team::new("Falcons");
        let before = team.clone();
        assert!(team.remove_player("nobody").is_none());
        assert_eq!(team, before);
    }

    #[test]
    fn test_added_rotation_seeds_from_the_current_roster() {
        let mut team = Team::new("Falcons");
        let gone = id_of(&team, 1);
        team.remove_player(&gone);
        let new_id = team.add_player("Sub", 14);

        let rid = team.add_rotation("Rotation 2");
        let rotation = team.rotation(&rid).unwrap();
        // Player 2 is now first on the roster and takes front-left.
        assert_eq!(rotation.slots.front_left.as_deref(), Some(id_of(&team, 2).as_str()));
        assert!(rotation.locate(&gone).is_none());
        assert!(rotation.locate(&new_id).is_some());
        assert!(is_normalized(&team.roster, rotation));
    }

    #[test]
    fn test_clone_rotation_is_a_deep_copy() {
        let mut team = Team::new("Falcons");
        let source_id = team.rotations[0].id.clone();
        let copy_id = team.clone_rotation(&source_id, "Copy").unwrap();
        assert_ne!(copy_id, source_id);

        // Mutating the source must not leak into the copy.
        let moved = id_of(&team, 1);
        team.rotation_mut(&source_id).unwrap().rotate_clockwise();
        let copy = team.rotation(&copy_id).unwrap();
        assert_eq!(copy.slots.front_left.as_deref(), Some(moved.as_str()));
        assert_eq!(copy.name, "Copy");
    }

    #[test]
    fn test_last_rotation_cannot_be_deleted() {
        let mut team = Team::new("Falcons");
        let only = team.rotations[0].id.clone();
        assert!(team.delete_rotation(&only).is_none());
        assert_eq!(team.rotations.len(), 1);

        let second = team.add_rotation("Rotation 2");
        assert!(team.delete_rotation(&second).is_some());
        assert_eq!(team.rotations.len(), 1);
        assert!(team.delete_rotation(&only).is_none(), "back to one rotation");
    }

    #[test]
    fn test_delete_unknown_rotation_returns_none() {
        let mut team = Team::new("Falcons");
        team.add_rotation("Rotation 2");
        assert!(team.delete_rotation("missing").is_none());
        assert_eq!(team.rotations.len(), 2);
    }
}
