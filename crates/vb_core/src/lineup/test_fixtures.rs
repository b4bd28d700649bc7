//! Test Fixtures Module
//!
//! Centralized test helpers for lineup and board tests. Fixture teams use
//! stable player ids ("p01", "p02", ..) so assertions can name players
//! directly instead of chasing generated uuids.
//!
//! ## Usage
//! ```rust
//! #[cfg(test)]
//! use crate::lineup::test_fixtures::*;
//! ```

use chrono::Utc;

use super::player::{generate_practice_roster, Player};
use super::team::Team;

// =============================================================================
// Team Creation Helpers
// =============================================================================

/// Create a test team with the default 12-player roster and one seeded
/// rotation.
///
/// Player ids run "p01".."p12", names "{name} Player N", jerseys 1-12.
pub fn create_test_team(name: &str) -> Team {
    create_test_team_with_roster_size(name, 12)
}

/// Create a test team with a roster of the given size.
pub fn create_test_team_with_roster_size(name: &str, size: u8) -> Team {
    let now = Utc::now();
    let roster: Vec<Player> = (1..=size)
        .map(|n| {
            Player::with_id(format!("p{:02}", n), format!("{} Player {}", name, n), n)
        })
        .collect();

    let mut team = Team {
        id: format!("team-{}", name.to_lowercase()),
        name: name.to_string(),
        created_at: now,
        updated_at: now,
        roster,
        rotations: Vec::new(),
    };
    team.add_rotation("Rotation 1");
    team
}

/// Stable id used by fixture players ("p01".."p99").
pub fn fixture_id(number: u8) -> String {
    format!("p{:02}", number)
}

// =============================================================================
// Roster Generation Helpers
// =============================================================================

/// Deterministic practice roster; see [`generate_practice_roster`].
pub fn create_practice_roster(seed: u64, count: usize) -> Vec<Player> {
    generate_practice_roster(seed, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lineup::normalize::is_normalized;

    #[test]
    fn test_fixture_team_is_normalized() {
        let team = create_test_team("Test");
        assert_eq!(team.roster.len(), 12);
        assert_eq!(team.rotations.len(), 1);
        assert!(is_normalized(&team.roster, &team.rotations[0]));
    }

    #[test]
    fn test_fixture_ids_are_stable() {
        let team = create_test_team("Test");
        assert_eq!(team.roster[0].id, fixture_id(1));
        assert_eq!(team.roster[11].id, fixture_id(12));
        assert_eq!(team.player_by_number(7).map(|p| p.id.as_str()), Some("p07"));
    }

    #[test]
    fn test_practice_roster_is_deterministic() {
        let a = create_practice_roster(42, 10);
        let b = create_practice_roster(42, 10);
        assert_eq!(a.len(), 10);
        for (left, right) in a.iter().zip(&b) {
            assert_eq!(left.name, right.name);
            assert_eq!(left.number, right.number);
        }
    }

    #[test]
    fn test_practice_roster_numbers_are_unique() {
        let roster = create_practice_roster(7, 30);
        let mut numbers: Vec<u8> = roster.iter().map(|p| p.number).collect();
        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(numbers.len(), 30);
    }
}
