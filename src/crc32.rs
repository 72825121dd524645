//! CRC-32 as used by PKZIP (ISO 3309, reflected polynomial `0xEDB88320`).

use crc32fast::Hasher;

/// Incremental CRC-32 computation.
///
/// ```
/// use storezip::crc32::Crc32;
///
/// let mut hasher = Crc32::new();
/// hasher.update(b"1234");
/// hasher.update(b"56789");
/// assert_eq!(hasher.finalize(), 0xCBF43926);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Crc32 {
    hasher: Hasher,
}

impl Crc32 {
    pub fn new() -> Self {
        Self {
            hasher: Hasher::new(),
        }
    }

    pub fn update(&mut self, buf: &[u8]) {
        self.hasher.update(buf);
    }

    pub fn finalize(self) -> u32 {
        self.hasher.finalize()
    }
}

/// Compute the CRC-32 of a whole buffer.
pub fn crc32(buf: &[u8]) -> u32 {
    crc32fast::hash(buf)
}
