// Save/Load System for the lineup board
// MessagePack + LZ4 compression with versioning and integrity checks

pub mod error;
pub mod format;
pub mod manager;
pub mod migration;

pub use error::SaveError;
pub use format::{
    current_timestamp, decompress_and_deserialize, serialize_and_compress, BoardSave, MAX_TEAMS,
};
pub use manager::{SaveManager, SaveSlotInfo, AUTO_SAVE_SLOT, SLOT_COUNT};
pub use migration::{migrate_save, needs_migration};

pub const SAVE_VERSION: u32 = 1;
