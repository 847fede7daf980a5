use thiserror::Error;

use crate::save::SaveError;
use crate::store::StoreError;

/// Crate-level error: anything a HoopStats operation can fail with.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Save(#[from] SaveError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
