use std::mem::size_of;

pub const FILE_HEADER_BASE_SIZE: usize = 7 * size_of::<u16>() + 4 * size_of::<u32>();
pub const CENTRAL_DIRECTORY_ENTRY_BASE_SIZE: usize = 11 * size_of::<u16>() + 6 * size_of::<u32>();
pub const END_OF_CENTRAL_DIRECTORY_SIZE: usize = 5 * size_of::<u16>() + 3 * size_of::<u32>();

pub const LOCAL_FILE_HEADER_SIGNATURE: u32 = 0x04034b50;
pub const CENTRAL_DIRECTORY_ENTRY_SIGNATURE: u32 = 0x02014b50;
pub const CENTRAL_DIRECTORY_END_SIGNATURE: u32 = 0x06054b50;

/// PKZIP 2.0, MS-DOS host.
pub const VERSION_MADE_BY: u16 = 20;
pub const VERSION_NEEDED_TO_EXTRACT: u16 = 20;

/// No encryption, no data descriptor, no UTF-8 filename.
pub const GENERAL_PURPOSE_FLAGS: u16 = 0;
pub const STORE: u16 = 0;

/// Largest value a 16 bit field may hold before readers take it as a ZIP64 marker.
pub const MAX_ENTRY_COUNT: usize = u16::MAX as usize - 1;
/// Largest value a 32 bit field may hold before readers take it as a ZIP64 marker.
pub const MAX_FIELD_SIZE: u64 = u32::MAX as u64 - 1;
pub const MAX_FILE_NAME_LEN: usize = u16::MAX as usize;

/// Media type of the produced archive.
pub const ZIP_MIME_TYPE: &str = "application/zip";
