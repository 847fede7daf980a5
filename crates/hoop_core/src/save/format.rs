use super::error::SaveError;
use super::SAVE_VERSION;
use crate::court::Orientation;
use crate::models::{Action, Competition, Game, Player, Team};
use serde::{Deserialize, Serialize};

use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use sha2::{Digest, Sha256};
use time::OffsetDateTime;

/// Hard cap on stored actions; a season of live tracking stays far below
/// this, so exceeding it means a runaway writer.
const MAX_ACTIONS: usize = 200_000;

/// Full club snapshot with all persistent data.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClubSave {
    /// Save format version for migration
    pub version: u32,

    /// Save timestamp (unix milliseconds)
    pub timestamp: u64,

    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub competitions: Vec<Competition>,
    pub games: Vec<Game>,
    pub actions: Vec<Action>,

    /// Coach preferences
    pub settings: ClubSettings,
}

impl Default for ClubSave {
    fn default() -> Self {
        Self::new()
    }
}

impl ClubSave {
    pub fn new() -> Self {
        Self {
            version: SAVE_VERSION,
            timestamp: current_timestamp(),
            teams: Vec::new(),
            players: Vec::new(),
            competitions: Vec::new(),
            games: Vec::new(),
            actions: Vec::new(),
            settings: ClubSettings::default(),
        }
    }

    pub fn update_timestamp(&mut self) {
        self.timestamp = current_timestamp();
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.actions.len() > MAX_ACTIONS {
            return Err(SaveError::DataTooLarge { size: self.actions.len() });
        }

        // Duplicate ids mean the writer went wrong somewhere.
        let mut team_ids = std::collections::HashSet::new();
        for team in &self.teams {
            if !team_ids.insert(team.id) {
                return Err(SaveError::Corrupted);
            }
        }
        let mut action_ids = std::collections::HashSet::new();
        for action in &self.actions {
            if !action_ids.insert(action.id) {
                return Err(SaveError::Corrupted);
            }
        }

        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClubSettings {
    /// Auto-save after every recorded action
    pub auto_save: bool,

    /// Preferred court orientation for reports and replays
    pub preferred_orientation: Orientation,

    /// Show per-zone shot charts in reports
    pub show_shot_charts: bool,

    /// Language preference
    pub preferred_language: String,
}

impl Default for ClubSettings {
    fn default() -> Self {
        Self {
            auto_save: true,
            preferred_orientation: Orientation::Horizontal,
            show_shot_charts: true,
            preferred_language: "french".to_string(),
        }
    }
}

/// Serialize and compress a club save.
pub fn serialize_and_compress(save: &ClubSave) -> Result<Vec<u8>, SaveError> {
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

/// Decompress and deserialize a club save.
pub fn decompress_and_deserialize(bytes: &[u8]) -> Result<ClubSave, SaveError> {
    // Check minimum size (header + checksum)
    if bytes.len() < 4 + 32 {
        return Err(SaveError::Corrupted);
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
    let save: ClubSave = from_slice(&msgpack).map_err(SaveError::Deserialization)?;

    // Validate version
    if save.version > SAVE_VERSION {
        return Err(SaveError::VersionMismatch { found: save.version, expected: SAVE_VERSION });
    }

    Ok(save)
}

pub fn current_timestamp() -> u64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64
}
