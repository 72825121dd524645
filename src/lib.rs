//! A library for building ZIP archives in memory from named byte buffers.
//!
//! Every entry is *stored* (no compression) and the whole archive is returned as one buffer,
//! ready to be saved or served with the [`ZIP_MIME_TYPE`] media type. Typical use is bundling a
//! batch of already rendered documents into a single download.
//!
//! The layout follows the PKZIP 2.0 structures of
//! [PKWARE's APPNOTE.TXT](https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT):
//! local file headers and payloads, then the central directory, then the end of central
//! directory record. There are no extra fields, no comments, no encryption and no ZIP64
//! support; inputs that would need ZIP64 are rejected.
//!
//! ## Example
//!
//!```rust
//! use storezip::{build_archive, error::ArchiveError, FileEntry};
//!
//! fn main() -> Result<(), ArchiveError> {
//!     let archive = build_archive(&[
//!         FileEntry::new("file1.txt", b"hello\n".to_vec()),
//!         FileEntry::new("file2.txt", b"world\n".to_vec()),
//!     ])?;
//!
//!     assert_eq!(archive.len(), storezip::archive_size([("file1.txt", 6), ("file2.txt", 6)]) as usize);
//!
//!     Ok(())
//! }
//!```
//!
//! Use [`build_archive_with_options`] with a fixed [`FileDateTime`] for byte-for-byte
//! reproducible archives.

mod constants;

mod archive_common;
pub mod compress;
pub mod crc32;
pub mod error;
mod tools;
pub mod types;

pub use compress::{build_archive, build_archive_with_options, ArchiveOptions};
pub use constants::ZIP_MIME_TYPE;
pub use error::ArchiveError;
pub use tools::archive_size;
pub use types::{DateTimeCS, FileDateTime, FileEntry};
