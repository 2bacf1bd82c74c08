use thiserror::Error;

/// Why a decode (or a name encode) was rejected.
///
/// Every variant is terminal for the call that produced it; nothing is
/// retried and no partially decoded value is handed back alongside it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum Error {
    #[error("packet too short")]
    ShortBuffer,

    #[error("invalid name format")]
    InvalidName,

    #[error("invalid compression pointer")]
    InvalidPointer,

    #[error("compression pointer loop")]
    CompressionLoop,

    #[error("name too long")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, Error>;
