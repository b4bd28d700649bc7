use super::error::SaveError;
use super::SAVE_VERSION;
use crate::lineup::Team;
use serde::{Deserialize, Serialize};

use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use sha2::{Digest, Sha256};
use time::OffsetDateTime;

/// Upper bound on teams per document; a coach's board, not a league database
pub const MAX_TEAMS: usize = 64;

/// Top-level board document with all persistent data
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BoardSave {
    /// Save format version for migration
    pub version: u32,

    /// Save timestamp (unix milliseconds)
    pub timestamp: u64,

    /// Every coached team with its roster and rotations
    pub teams: Vec<Team>,

    /// Team shown when the board reopens
    #[serde(default)]
    pub active_team: Option<String>,
}

impl Default for BoardSave {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardSave {
    pub fn new() -> Self {
        Self {
            version: SAVE_VERSION,
            timestamp: current_timestamp(),
            teams: Vec::new(),
            active_team: None,
        }
    }

    pub fn from_teams(teams: Vec<Team>) -> Self {
        let active_team = teams.first().map(|team| team.id.clone());
        Self { version: SAVE_VERSION, timestamp: current_timestamp(), teams, active_team }
    }

    pub fn update_timestamp(&mut self) {
        self.timestamp = current_timestamp();
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.teams.len() > MAX_TEAMS {
            return Err(SaveError::DataTooLarge { size: self.teams.len() });
        }

        let mut team_ids = std::collections::HashSet::new();
        for team in &self.teams {
            if !team_ids.insert(&team.id) {
                return Err(SaveError::Corrupted(format!("duplicate team id: {}", team.id)));
            }

            if team.rotations.is_empty() {
                return Err(SaveError::Corrupted(format!(
                    "team '{}' has no rotations",
                    team.name
                )));
            }

            let mut player_ids = std::collections::HashSet::new();
            for player in &team.roster {
                if !player_ids.insert(&player.id) {
                    return Err(SaveError::Corrupted(format!(
                        "duplicate player id: {}",
                        player.id
                    )));
                }
            }

            let mut rotation_ids = std::collections::HashSet::new();
            for rotation in &team.rotations {
                if !rotation_ids.insert(&rotation.id) {
                    return Err(SaveError::Corrupted(format!(
                        "duplicate rotation id: {}",
                        rotation.id
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Serialize and compress a board document
pub fn serialize_and_compress(save: &BoardSave) -> Result<Vec<u8>, SaveError> {
    // Validate before serialization
    save.validate()?;

    // 1. Serialize to MessagePack with field names
    let msgpack = to_vec_named(save).map_err(SaveError::Serialization)?;

    // 2. Compress with LZ4 (size prepended for easy decompression)
    let compressed = compress_prepend_size(&msgpack);

    // 3. Add SHA256 checksum at the end
    let mut hasher = Sha256::new();
    hasher.update(&compressed);
    let checksum = hasher.finalize();

    let mut result = compressed;
    result.extend_from_slice(&checksum);

    Ok(result)
}

/// Decompress and deserialize a board document
pub fn decompress_and_deserialize(bytes: &[u8]) -> Result<BoardSave, SaveError> {
    // Check minimum size (header + checksum)
    if bytes.len() < 4 + 32 {
        return Err(SaveError::Corrupted("save file too short".to_string()));
    }

    // Split payload and checksum
    let (payload, checksum_bytes) = bytes.split_at(bytes.len() - 32);

    // Verify checksum
    let mut hasher = Sha256::new();
    hasher.update(payload);
    let calculated_checksum = hasher.finalize();

    if &calculated_checksum[..] != checksum_bytes {
        return Err(SaveError::ChecksumMismatch);
    }

    // Decompress
    let msgpack = decompress_size_prepended(payload).map_err(|_| SaveError::Decompression)?;

    // Deserialize
    let save: BoardSave = from_slice(&msgpack).map_err(SaveError::Deserialization)?;

    // Validate version
    if save.version > SAVE_VERSION {
        return Err(SaveError::VersionMismatch { found: save.version, expected: SAVE_VERSION });
    }

    Ok(save)
}

pub fn current_timestamp() -> u64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64
}
