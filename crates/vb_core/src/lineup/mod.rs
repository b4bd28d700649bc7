//! Lineup system module
//!
//! This module contains the roster and rotation state machine:
//! - Player identity and jersey numbers
//! - Rotation state: six zone slots plus the two bench queues
//! - Clockwise / counter-clockwise rotation transitions
//! - Membership normalization against the team roster
//! - Team container tying the roster to its saved rotations

pub mod normalize;
pub mod player;
pub mod rotation;
pub mod team;

// Re-export main types
pub use normalize::{is_normalized, normalize_rotation};
pub use player::{generate_practice_roster, Player, PlayerId};
pub use rotation::{BenchQueue, BenchSide, Placement, Rotation, SlotAssignments};
pub use team::{Team, DEFAULT_ROSTER_SIZE, SEED_ORDER};

#[cfg(test)]
pub mod test_fixtures;
