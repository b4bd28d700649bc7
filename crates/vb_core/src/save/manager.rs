use super::error::SaveError;
use super::format::{decompress_and_deserialize, serialize_and_compress, BoardSave};
use super::migration::migrate_save;

use std::fs::{remove_file, rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Slots 0..=3; slot 0 is reserved for the autosave
pub const SLOT_COUNT: u8 = 4;
pub const AUTO_SAVE_SLOT: u8 = 0;

/// Slot-based persistence over one board directory.
///
/// The embedding host decides where saves live (editor project dir,
/// platform data dir); the manager only owns the files inside it.
pub struct SaveManager {
    base_dir: PathBuf,
}

impl SaveManager {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into() }
    }

    /// Save a board document to a numbered slot
    pub fn save_to_slot(&self, slot: u8, save: &BoardSave) -> Result<(), SaveError> {
        Self::validate_slot(slot)?;

        let path = self.slot_path(slot);
        Self::save_to_path(&path, save)?;

        log::info!("Board saved to slot {}", slot);
        Ok(())
    }

    /// Load a board document from a numbered slot
    pub fn load_from_slot(&self, slot: u8) -> Result<BoardSave, SaveError> {
        Self::validate_slot(slot)?;

        let path = self.slot_path(slot);
        if !path.exists() {
            return Err(SaveError::SlotEmpty { slot });
        }
        let save = Self::load_from_path(&path)?;

        log::info!("Board loaded from slot {}", slot);
        Ok(save)
    }

    /// Write the autosave slot
    pub fn auto_save(&self, save: &BoardSave) -> Result<(), SaveError> {
        self.save_to_slot(AUTO_SAVE_SLOT, save)?;

        log::debug!("Auto-save completed");
        Ok(())
    }

    /// Load the autosave slot
    pub fn load_auto_save(&self) -> Result<BoardSave, SaveError> {
        self.load_from_slot(AUTO_SAVE_SLOT)
    }

    /// Check if a save slot exists
    pub fn slot_exists(&self, slot: u8) -> bool {
        if Self::validate_slot(slot).is_err() {
            return false;
        }

        self.slot_path(slot).exists()
    }

    /// Check if the autosave exists
    pub fn auto_save_exists(&self) -> bool {
        self.slot_exists(AUTO_SAVE_SLOT)
    }

    /// Delete a save slot
    pub fn delete_slot(&self, slot: u8) -> Result<(), SaveError> {
        Self::validate_slot(slot)?;

        let path = self.slot_path(slot);
        if path.exists() {
            remove_file(&path)?;
            log::info!("Deleted save slot {}", slot);
        }

        Ok(())
    }

    /// Get save slot info for UI display
    pub fn slot_info(&self, slot: u8) -> Result<Option<SaveSlotInfo>, SaveError> {
        Self::validate_slot(slot)?;

        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }

        let file_size = std::fs::metadata(&path)?.len();
        let save = Self::load_from_path(&path)?;

        Ok(Some(SaveSlotInfo {
            slot,
            timestamp: save.timestamp,
            version: save.version,
            team_count: save.teams.len(),
            player_count: save.teams.iter().map(|team| team.roster.len()).sum(),
            file_size,
        }))
    }

    /// Get info for every occupied slot, most recent first
    pub fn all_slot_info(&self) -> Vec<SaveSlotInfo> {
        let mut slots = Vec::new();

        for slot in 0..SLOT_COUNT {
            if let Ok(Some(info)) = self.slot_info(slot) {
                slots.push(info);
            }
        }

        slots.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        slots
    }

    // Private helper methods

    fn validate_slot(slot: u8) -> Result<(), SaveError> {
        if slot >= SLOT_COUNT {
            return Err(SaveError::InvalidSlot { slot });
        }
        Ok(())
    }

    fn slot_path(&self, slot: u8) -> PathBuf {
        self.base_dir.join(format!("board_slot_{}.dat", slot))
    }

    fn save_to_path(path: &Path, save: &BoardSave) -> Result<(), SaveError> {
        // Ensure save directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Serialize and compress
        let data = serialize_and_compress(save)?;

        // Atomic save: write to temp file, then rename
        let temp_path = path.with_extension("tmp");

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&data)?;
            file.flush()?;

            // sync_all ensures data is written to disk (portable fsync)
            file.sync_all()?;
        }

        // Atomic rename
        rename(&temp_path, path)?;

        log::debug!("Saved {} bytes to {:?}", data.len(), path);
        Ok(())
    }

    fn load_from_path(path: &Path) -> Result<BoardSave, SaveError> {
        let mut file = File::open(path)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        let mut save = decompress_and_deserialize(&data)?;

        // Apply migrations if needed
        save = migrate_save(save)?;

        log::debug!("Loaded {} bytes from {:?}", data.len(), path);
        Ok(save)
    }
}

#[derive(Debug, Clone)]
pub struct SaveSlotInfo {
    pub slot: u8,
    pub timestamp: u64,
    pub version: u32,
    pub team_count: usize,
    pub player_count: usize,
    pub file_size: u64,
}

impl SaveSlotInfo {
    pub fn format_timestamp(&self) -> String {
        use time::{format_description::well_known::Rfc3339, OffsetDateTime};

        let timestamp =
            OffsetDateTime::from_unix_timestamp_nanos((self.timestamp * 1_000_000) as i128)
                .unwrap_or_else(|_| OffsetDateTime::now_utc());

        timestamp.format(&Rfc3339).unwrap_or_else(|_| "Unknown".to_string())
    }

    pub fn get_display_text(&self) -> String {
        format!(
            "Slot {}: {} teams, {} players ({} bytes)",
            self.slot, self.team_count, self.player_count, self.file_size
        )
    }
}
