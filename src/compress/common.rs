use log::{debug, trace};

use crate::archive_common::{ArchiveDescriptor, ArchiveFileEntry, CentralDirectoryEnd};
use crate::constants::{
    CENTRAL_DIRECTORY_ENTRY_BASE_SIZE, END_OF_CENTRAL_DIRECTORY_SIZE, FILE_HEADER_BASE_SIZE,
    MAX_ENTRY_COUNT, MAX_FIELD_SIZE, MAX_FILE_NAME_LEN,
};
use crate::crc32::crc32;
use crate::error::ArchiveError;
use crate::types::{DosTimestamp, FileEntry};

/// Reject inputs the fixed-width (non ZIP64) fields cannot represent.
///
/// Returns the exact size of the archive to be built.
pub fn check_entries(entries: &[FileEntry]) -> Result<u64, ArchiveError> {
    if entries.is_empty() {
        return Err(ArchiveError::EmptyArchive);
    }

    if entries.len() > MAX_ENTRY_COUNT {
        return Err(ArchiveError::TooManyEntries(entries.len()));
    }

    check_sizes(
        entries
            .iter()
            .map(|entry| (entry.name.as_str(), entry.data.len() as u64)),
    )
}

/// Check each `(name, payload size)` pair and the resulting archive size against the 16 and 32
/// bit field limits.
///
/// Returns the exact size of the archive, as [`archive_size`](crate::archive_size) computes it.
pub fn check_sizes<'a, I: IntoIterator<Item = (&'a str, u64)>>(
    files: I,
) -> Result<u64, ArchiveError> {
    let mut total = END_OF_CENTRAL_DIRECTORY_SIZE as u64;

    for (name, size) in files {
        let len = name.len();
        if len > MAX_FILE_NAME_LEN {
            return Err(ArchiveError::FileNameTooLong {
                name: name.to_owned(),
                len,
            });
        }

        if size > MAX_FIELD_SIZE {
            return Err(ArchiveError::EntryTooLarge {
                name: name.to_owned(),
                size,
            });
        }

        let records = FILE_HEADER_BASE_SIZE + CENTRAL_DIRECTORY_ENTRY_BASE_SIZE + 2 * len;
        total += records as u64 + size;
    }

    if total > MAX_FIELD_SIZE {
        return Err(ArchiveError::ArchiveTooLarge(total));
    }

    Ok(total)
}

fn to_u32(value: usize) -> Result<u32, ArchiveError> {
    u32::try_from(value).map_err(|_| ArchiveError::ArchiveTooLarge(value as u64))
}

/// Append the local file header and payload of `entry` at `offset`.
///
/// Returns what the central directory record of this entry needs.
pub fn build_local_file_record(
    archive: &mut ArchiveDescriptor,
    entry: &FileEntry,
    offset: u32,
    last_modified: DosTimestamp,
) -> Result<ArchiveFileEntry, ArchiveError> {
    let size = u32::try_from(entry.data.len()).map_err(|_| ArchiveError::EntryTooLarge {
        name: entry.name.clone(),
        size: entry.data.len() as u64,
    })?;

    let archive_file_entry = ArchiveFileEntry {
        last_modified,
        crc32: crc32(&entry.data),
        compressed_size: size,
        uncompressed_size: size,
        file_name_as_bytes: entry.name.as_bytes().to_owned(),
        offset,
    };

    archive_file_entry.write_local_file_header(archive);
    archive.write_bytes(&entry.data);

    debug!(
        "local file record '{}' at {} ({} bytes, crc {:08x})",
        entry.name, offset, size, archive_file_entry.crc32
    );
    trace!("\n{}", archive_file_entry);

    Ok(archive_file_entry)
}

/// Append every local file record, in the order given.
///
/// The first record starts at offset 0 and each following one right after its predecessor's
/// payload.
pub fn build_local_file_records(
    archive: &mut ArchiveDescriptor,
    entries: &[FileEntry],
    last_modified: DosTimestamp,
) -> Result<Vec<ArchiveFileEntry>, ArchiveError> {
    let mut file_entries = Vec::with_capacity(entries.len());
    let mut offset = 0u32;

    for entry in entries {
        let archive_file_entry = build_local_file_record(archive, entry, offset, last_modified)?;
        offset = offset
            .checked_add(to_u32(archive_file_entry.local_record_size())?)
            .ok_or(ArchiveError::ArchiveTooLarge(archive.len() as u64))?;
        trace!("next local file record offset {}", offset);
        file_entries.push(archive_file_entry);
    }

    Ok(file_entries)
}

/// Append one central directory record per entry, in the same order as the local records.
///
/// Returns the central directory size in bytes.
pub fn build_central_directory(
    archive: &mut ArchiveDescriptor,
    file_entries: &[ArchiveFileEntry],
) -> Result<u32, ArchiveError> {
    let central_directory_offset = archive.len();

    for file_info in file_entries {
        trace!(
            "central directory record at {} for local header {}",
            archive.len(),
            file_info.offset
        );
        file_info.write_central_directory_file_header(archive);
    }

    let central_directory_size = archive.len() - central_directory_offset;
    debug_assert_eq!(
        central_directory_size,
        file_entries
            .iter()
            .map(ArchiveFileEntry::central_record_size)
            .sum::<usize>()
    );

    to_u32(central_directory_size)
}

pub fn build_central_directory_end(
    number_of_entries: usize,
    central_directory_offset: u32,
    central_directory_size: u32,
) -> Result<CentralDirectoryEnd, ArchiveError> {
    let entry_count = u16::try_from(number_of_entries)
        .map_err(|_| ArchiveError::TooManyEntries(number_of_entries))?;

    let end = CentralDirectoryEnd {
        number_of_this_disk: 0,
        number_of_the_disk_with_central_directory: 0,
        total_number_of_entries_on_this_disk: entry_count,
        total_number_of_entries_in_the_central_directory: entry_count,
        central_directory_size,
        offset_of_start_of_central_directory: central_directory_offset,
    };

    debug!("EOCD {:?}", end);

    Ok(end)
}
