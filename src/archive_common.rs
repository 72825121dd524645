use core::fmt;

use crate::constants::{
    CENTRAL_DIRECTORY_END_SIGNATURE, CENTRAL_DIRECTORY_ENTRY_BASE_SIZE,
    CENTRAL_DIRECTORY_ENTRY_SIGNATURE, FILE_HEADER_BASE_SIZE, GENERAL_PURPOSE_FLAGS,
    LOCAL_FILE_HEADER_SIGNATURE, STORE, VERSION_MADE_BY, VERSION_NEEDED_TO_EXTRACT,
};
use crate::types::{DateTimeCS, DosTimestamp};

/// Append-only little-endian byte builder.
#[derive(Debug)]
pub struct ArchiveDescriptor {
    buffer: Vec<u8>,
}

impl ArchiveDescriptor {
    pub fn new(capacity: usize) -> ArchiveDescriptor {
        ArchiveDescriptor {
            buffer: Vec::with_capacity(capacity),
        }
    }

    pub fn write_u16(&mut self, val: u16) {
        self.buffer.extend_from_slice(&val.to_le_bytes());
    }

    pub fn write_u32(&mut self, val: u32) {
        self.buffer.extend_from_slice(&val.to_le_bytes());
    }

    pub fn write_bytes(&mut self, val: &[u8]) {
        self.buffer.extend_from_slice(val);
    }

    pub fn write_dos_timestamp(&mut self, val: DosTimestamp) {
        self.write_u16(val.time);
        self.write_u16(val.date);
    }

    pub fn finish(self) -> Vec<u8> {
        self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }
}

/// What the local file record pass learned about one entry, kept to build its central
/// directory record.
#[derive(Debug, Clone)]
pub struct ArchiveFileEntry {
    pub last_modified: DosTimestamp,
    pub crc32: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub file_name_as_bytes: Vec<u8>,
    /// Offset of the local file header from the start of the archive.
    pub offset: u32,
}

impl ArchiveFileEntry {
    pub fn file_name_len(&self) -> u16 {
        self.file_name_as_bytes.len() as u16
    }

    /// Size of the local file header, file name and payload.
    pub fn local_record_size(&self) -> usize {
        FILE_HEADER_BASE_SIZE + self.file_name_as_bytes.len() + self.compressed_size as usize
    }

    pub fn central_record_size(&self) -> usize {
        CENTRAL_DIRECTORY_ENTRY_BASE_SIZE + self.file_name_as_bytes.len()
    }

    /// Write the local file header, without the payload that follows it.
    pub fn write_local_file_header(&self, descriptor: &mut ArchiveDescriptor) {
        descriptor.write_u32(LOCAL_FILE_HEADER_SIGNATURE);
        descriptor.write_u16(VERSION_NEEDED_TO_EXTRACT);
        descriptor.write_u16(GENERAL_PURPOSE_FLAGS);
        descriptor.write_u16(STORE);
        descriptor.write_dos_timestamp(self.last_modified);
        descriptor.write_u32(self.crc32);
        descriptor.write_u32(self.compressed_size);
        descriptor.write_u32(self.uncompressed_size);
        descriptor.write_u16(self.file_name_len());
        descriptor.write_u16(0); // extra field length
        descriptor.write_bytes(&self.file_name_as_bytes);
    }

    pub fn write_central_directory_file_header(&self, descriptor: &mut ArchiveDescriptor) {
        descriptor.write_u32(CENTRAL_DIRECTORY_ENTRY_SIGNATURE);
        descriptor.write_u16(VERSION_MADE_BY);
        descriptor.write_u16(VERSION_NEEDED_TO_EXTRACT);
        descriptor.write_u16(GENERAL_PURPOSE_FLAGS);
        descriptor.write_u16(STORE);
        descriptor.write_dos_timestamp(self.last_modified);
        descriptor.write_u32(self.crc32);
        descriptor.write_u32(self.compressed_size);
        descriptor.write_u32(self.uncompressed_size);
        descriptor.write_u16(self.file_name_len());
        descriptor.write_u16(0); // extra field length
        descriptor.write_u16(0); // file comment length
        descriptor.write_u16(0); // disk number start
        descriptor.write_u16(0); // internal file attributes
        descriptor.write_u32(0); // external file attributes
        descriptor.write_u32(self.offset);
        descriptor.write_bytes(&self.file_name_as_bytes);
    }
}

impl fmt::Display for ArchiveFileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let padding = 48;

        writeln!(
            f,
            "{: <padding$}{}",
            "file name:",
            String::from_utf8_lossy(&self.file_name_as_bytes)
        )?;
        writeln!(
            f,
            "{: <padding$}{}",
            "offset of local header from start of archive:", self.offset
        )?;

        let date_time = DateTimeCS::from_msdos(self.last_modified.date, self.last_modified.time);
        writeln!(
            f,
            "{: <padding$}{}",
            "file last modified on (DOS date/time):", date_time
        )?;
        writeln!(f, "{: <padding$}{:x}", "32-bit CRC value (hex):", self.crc32)?;
        writeln!(
            f,
            "{: <padding$}{} bytes",
            "compressed size:", self.compressed_size
        )?;
        writeln!(
            f,
            "{: <padding$}{} bytes",
            "uncompressed size:", self.uncompressed_size
        )
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CentralDirectoryEnd {
    pub number_of_this_disk: u16,
    pub number_of_the_disk_with_central_directory: u16,
    pub total_number_of_entries_on_this_disk: u16,
    pub total_number_of_entries_in_the_central_directory: u16,
    pub central_directory_size: u32,
    pub offset_of_start_of_central_directory: u32,
}

impl CentralDirectoryEnd {
    pub fn create_end_of_central_directory(&self, end_of_central_directory: &mut ArchiveDescriptor) {
        end_of_central_directory.write_u32(CENTRAL_DIRECTORY_END_SIGNATURE);
        end_of_central_directory.write_u16(self.number_of_this_disk);
        end_of_central_directory.write_u16(self.number_of_the_disk_with_central_directory);
        end_of_central_directory.write_u16(self.total_number_of_entries_on_this_disk);
        end_of_central_directory.write_u16(self.total_number_of_entries_in_the_central_directory);
        end_of_central_directory.write_u32(self.central_directory_size);
        end_of_central_directory.write_u32(self.offset_of_start_of_central_directory);
        end_of_central_directory.write_u16(0); // archive comment length
    }
}
