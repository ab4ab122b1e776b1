use std::fmt::Display;
use std::fmt::Formatter;

/// Errors surfaced by the probability table, hand index, and cluster engine.
///
/// Query-path errors are returned to the caller unchanged. Build-path errors
/// abort the build before anything is persisted; there is no partial-artifact
/// recovery and no automatic retry.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// `card_nb` (or a derived popcount) fell outside its valid range.
    OutOfRange { what: &'static str, value: i64 },
    /// A hand's index lookup returned the sentinel (popcount > 6).
    InvalidHand,
    /// `CHECK` was passed where a real bet was required, or a numeric bet id
    /// fell outside `[0, 67]`.
    InvalidBet,
    /// Opening, reading, or writing a persistence file failed.
    IOError(String),
    /// A file's magic bytes did not match the expected format tag.
    FormatError { expected: &'static str, found: String },
    /// A file's version field did not match the version this build expects.
    VersionMismatch { expected: u32, found: u32 },
    /// A file's declared dimensions did not match compile-time constants.
    DimensionMismatch { what: &'static str, expected: u32, found: u32 },
    /// k-means produced, or the caller requested, an empty cluster where a
    /// sample was required.
    BuildFailure(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { what, value } => {
                write!(f, "{} out of range: {}", what, value)
            }
            Self::InvalidHand => write!(f, "hand index lookup returned sentinel"),
            Self::InvalidBet => write!(f, "invalid bet: CHECK or out-of-range numeric id"),
            Self::IOError(msg) => write!(f, "i/o error: {}", msg),
            Self::FormatError { expected, found } => {
                write!(f, "bad magic: expected {:?}, found {:?}", expected, found)
            }
            Self::VersionMismatch { expected, found } => {
                write!(f, "version mismatch: expected {}, found {}", expected, found)
            }
            Self::DimensionMismatch {
                what,
                expected,
                found,
            } => write!(
                f,
                "dimension mismatch in {}: expected {}, found {}",
                what, expected, found
            ),
            Self::BuildFailure(msg) => write!(f, "build failure: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::IOError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
