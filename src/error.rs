use std::fmt::{self, Debug, Display};

/// Failures raised while building an archive.
///
/// Every variant is a precondition violation: the encoder does no I/O, so nothing here is
/// transient and none of them produce partial output.
#[derive(PartialEq, Eq)]
pub enum ArchiveError {
    /// The entry list was empty.
    EmptyArchive,
    /// More entries than the 16 bit entry count fields can describe.
    TooManyEntries(usize),
    /// A file name longer than the 16 bit file name length field allows.
    FileNameTooLong { name: String, len: usize },
    /// A payload too large for the 32 bit size fields.
    EntryTooLarge { name: String, size: u64 },
    /// The archive as a whole would not fit the 32 bit offset fields.
    ArchiveTooLarge(u64),
}

impl Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArchiveError::EmptyArchive => {
                write!(f, "Cannot build an archive without any entry")
            }
            ArchiveError::TooManyEntries(count) => {
                write!(f, "Too many entries for a non ZIP64 archive: {}", count)
            }
            ArchiveError::FileNameTooLong { name, len } => {
                write!(f, "The file name '{}' is too long ({} bytes)", name, len)
            }
            ArchiveError::EntryTooLarge { name, size } => {
                write!(
                    f,
                    "The entry '{}' is too large for a non ZIP64 archive ({} bytes)",
                    name, size
                )
            }
            ArchiveError::ArchiveTooLarge(size) => {
                write!(
                    f,
                    "The archive is too large for a non ZIP64 archive ({} bytes)",
                    size
                )
            }
        }
    }
}

impl Debug for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArchiveError::EmptyArchive => write!(f, "EmptyArchive"),
            ArchiveError::TooManyEntries(count) => write!(f, "TooManyEntries({:?})", count),
            _ => (self as &dyn Display).fmt(f),
        }
    }
}

impl std::error::Error for ArchiveError {}
