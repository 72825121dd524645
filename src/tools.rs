use crate::constants::{
    CENTRAL_DIRECTORY_ENTRY_BASE_SIZE, END_OF_CENTRAL_DIRECTORY_SIZE, FILE_HEADER_BASE_SIZE,
};

/// Calculate the exact size of the archive built from files with these names and sizes.
///
/// ## Example
///
/// ```
/// use storezip::archive_size;
///
/// assert_eq!(
///     archive_size([
///         ("INV-0001.pdf", 37),
///         ("INV-0002.pdf", 50),
///     ]),
///     309,
/// );
/// ```
pub fn archive_size<'a, I: IntoIterator<Item = (&'a str, usize)>>(files: I) -> u64 {
    files
        .into_iter()
        .map(|(name, size)| {
            (FILE_HEADER_BASE_SIZE + name.len() + CENTRAL_DIRECTORY_ENTRY_BASE_SIZE + name.len())
                as u64
                + size as u64
        })
        .sum::<u64>()
        + END_OF_CENTRAL_DIRECTORY_SIZE as u64
}
