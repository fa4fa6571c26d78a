#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Lesson `{number}' is out of range, lessons are numbered from 1 (the catalog has {len})")]
    OutOfRange { number: i64, len: usize },

    #[error("Invalid catalog: {reason}")]
    InvalidCatalog { reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

