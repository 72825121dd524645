//! Archive assembly.
//!
//! An archive is built in one pass over the entries, in this order:
//!
//! 1. one local file header followed by the stored payload per entry, recording where each
//!    header starts, its CRC-32 and its size;
//! 2. one central directory record per entry, in the same order, pointing back to the local
//!    header offsets recorded in 1;
//! 3. the end of central directory record, holding the entry count, the central directory
//!    size and its offset (the total size of 1).
//!
//! Every entry is stored (method 0), so the compressed and uncompressed sizes are both the
//! payload length.

mod common;

use log::debug;

use crate::archive_common::ArchiveDescriptor;
use crate::compress::common::{
    build_central_directory, build_central_directory_end, build_local_file_records,
    check_entries,
};
use crate::constants::END_OF_CENTRAL_DIRECTORY_SIZE;
use crate::error::ArchiveError;
use crate::types::{FileDateTime, FileEntry};

/// Options applied to a whole archive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveOptions {
    /// The modified time written for every entry.
    pub last_modified_time: FileDateTime,
}

impl ArchiveOptions {
    /// Set the last modified time of the entries.
    ///
    /// The default is the local date and time when the archive is built.
    pub fn last_modified_time(mut self, mod_time: FileDateTime) -> ArchiveOptions {
        self.last_modified_time = mod_time;
        self
    }
}

/// Build a stored Zip archive holding `entries`, in the given order.
///
/// Entries are stamped with the current local date and time.
///
/// # Error
///
/// [`ArchiveError::EmptyArchive`] if `entries` is empty. Inputs that do not fit a non ZIP64
/// archive are rejected, see [`ArchiveError`].
///
/// ## Example
///
/// ```
/// use storezip::{build_archive, FileEntry};
///
/// let archive = build_archive(&[
///     FileEntry::new("INV-0001.pdf", vec![0u8; 37]),
///     FileEntry::new("INV-0002.pdf", vec![0u8; 50]),
/// ])
/// .unwrap();
///
/// assert_eq!(archive.len(), 309);
/// assert_eq!(&archive[..4], b"PK\x03\x04");
/// ```
pub fn build_archive(entries: &[FileEntry]) -> Result<Vec<u8>, ArchiveError> {
    build_archive_with_options(entries, &ArchiveOptions::default())
}

/// Same as [`build_archive`], with explicit options.
pub fn build_archive_with_options(
    entries: &[FileEntry],
    options: &ArchiveOptions,
) -> Result<Vec<u8>, ArchiveError> {
    let expected_size = check_entries(entries)?;

    // all entries share the instant sampled here
    let last_modified = options.last_modified_time.ms_dos();

    let mut archive = ArchiveDescriptor::new(expected_size as usize);

    let file_entries = build_local_file_records(&mut archive, entries, last_modified)?;

    let central_directory_offset = u32::try_from(archive.len())
        .map_err(|_| ArchiveError::ArchiveTooLarge(archive.len() as u64))?;

    let central_directory_size = build_central_directory(&mut archive, &file_entries)?;

    let end_of_central_directory = build_central_directory_end(
        file_entries.len(),
        central_directory_offset,
        central_directory_size,
    )?;
    end_of_central_directory.create_end_of_central_directory(&mut archive);

    debug!(
        "archive of {} entries built: {} bytes (central directory {} bytes at {}, end record {} bytes)",
        file_entries.len(),
        archive.len(),
        central_directory_size,
        central_directory_offset,
        END_OF_CENTRAL_DIRECTORY_SIZE
    );
    debug_assert_eq!(archive.len() as u64, expected_size);

    Ok(archive.finish())
}
