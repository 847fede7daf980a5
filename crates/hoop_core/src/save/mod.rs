// Save/Load System for HoopStats
// MessagePack + LZ4 compression with versioning and integrity checks

pub mod error;
pub mod format;
pub mod manager;
pub mod migration;

pub use error::SaveError;
pub use format::{
    decompress_and_deserialize, serialize_and_compress, ClubSave, ClubSettings,
};
pub use manager::{SaveInfo, SaveManager};
pub use migration::migrate_save;

pub const SAVE_VERSION: u32 = 1;
