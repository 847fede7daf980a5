//! Save version migration
//!
//! Walks a loaded save up the version ladder one step at a time. v1 is the
//! first released format, so the ladder is currently a single rung;
//! the structure is in place for when fields change shape.

use super::error::SaveError;
use super::format::ClubSave;
use super::SAVE_VERSION;

/// Migrate a save to the current version.
pub fn migrate_save(mut save: ClubSave) -> Result<ClubSave, SaveError> {
    if save.version > SAVE_VERSION {
        return Err(SaveError::VersionMismatch { found: save.version, expected: SAVE_VERSION });
    }

    while save.version < SAVE_VERSION {
        save = match save.version {
            // Future: 1 => migrate_v1_to_v2(save)?,
            other => {
                log::warn!("No migration path from save version {}", other);
                return Err(SaveError::VersionMismatch {
                    found: other,
                    expected: SAVE_VERSION,
                });
            }
        };
    }

    Ok(save)
}
