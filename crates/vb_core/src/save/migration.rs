use super::error::SaveError;
use super::format::BoardSave;
use super::SAVE_VERSION;

/// Migrate save data from older versions to current version
pub fn migrate_save(mut save: BoardSave) -> Result<BoardSave, SaveError> {
    let original_version = save.version;

    // Apply migrations step by step
    save = match save.version {
        0 => migrate_v0_to_v1(save)?,
        1 => save, // Current version, no migration needed
        v if v > SAVE_VERSION => {
            // Future version - might be compatible
            log::warn!("Loading save from future version {} (current: {})", v, SAVE_VERSION);
            save
        }
        _ => {
            return Err(SaveError::VersionMismatch { found: save.version, expected: SAVE_VERSION });
        }
    };

    if original_version != SAVE_VERSION {
        save.version = SAVE_VERSION;
        save.update_timestamp();
        log::info!("Migrated save from version {} to {}", original_version, SAVE_VERSION);
    }

    Ok(save)
}

/// Migrate from version 0 to version 1
fn migrate_v0_to_v1(mut save: BoardSave) -> Result<BoardSave, SaveError> {
    log::info!("Migrating save from version 0 to 1");

    // 1. Pre-release files could carry teams with no rotations
    for team in &mut save.teams {
        if team.rotations.is_empty() {
            team.add_rotation("Rotation 1");
        }
    }

    // 2. Re-establish lineup membership in every rotation
    for team in &mut save.teams {
        team.normalize_all();
    }

    // 3. Clear a stale active-team reference
    if let Some(active_id) = &save.active_team {
        if !save.teams.iter().any(|team| &team.id == active_id) {
            log::warn!("Active team '{}' not found in save, clearing", active_id);
            save.active_team = None;
        }
    }

    Ok(save)
}

/// Check if a save file needs migration
pub fn needs_migration(save: &BoardSave) -> bool {
    save.version < SAVE_VERSION
}

/// Get migration description for UI display
pub fn get_migration_description(from_version: u32, to_version: u32) -> String {
    match (from_version, to_version) {
        (0, 1) => "Seeding default rotations and repairing lineup membership".to_string(),
        _ => format!("Updating save format from version {} to {}", from_version, to_version),
    }
}
