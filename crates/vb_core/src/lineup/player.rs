//! Roster player entity

use rand::prelude::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Player identifier (UUID v4 text); stable across renames and renumbering
pub type PlayerId = String;

/// One rostered player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Jersey number shown on the board token
    pub number: u8,
}

impl Player {
    pub fn new(name: impl Into<String>, number: u8) -> Self {
        Player { id: Uuid::new_v4().to_string(), name: name.into(), number }
    }

    /// Build with a caller-chosen id (deterministic fixtures, migrations)
    pub fn with_id(id: impl Into<PlayerId>, name: impl Into<String>, number: u8) -> Self {
        Player { id: id.into(), name: name.into(), number }
    }
}

const FIRST_NAMES: &[&str] = &[
    "Ana", "Bree", "Carla", "Dana", "Elif", "Freya", "Gia", "Hana", "Iris", "Jo", "Kira", "Lena",
    "Mara", "Noor", "Orla", "Pia",
];

const LAST_NAMES: &[&str] = &[
    "Alvarez", "Brandt", "Costa", "Demir", "Egan", "Fischer", "Grant", "Huang", "Ito", "Jansen",
    "Kim", "Laine", "Moreau", "Novak", "Okafor", "Park",
];

/// Generate a practice roster with randomized names and jersey numbers.
/// Uses deterministic random generation with ChaCha8Rng, so the same seed
/// always yields the same roster. `count` is capped at 99 (jersey range).
pub fn generate_practice_roster(seed: u64, count: usize) -> Vec<Player> {
    let count = count.min(99);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut numbers: Vec<u8> = (1..=99).collect();
    numbers.shuffle(&mut rng);
    numbers.truncate(count);

    numbers
        .into_iter()
        .map(|number| {
            let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Alex");
            let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Reyes");
            Player::new(format!("{} {}", first, last), number)
        })
        .collect()
}
