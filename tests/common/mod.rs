#![allow(dead_code)]

use std::{
    fs::{create_dir_all, remove_file, File},
    path::{Path, PathBuf},
};

use byteorder::{ByteOrder, LittleEndian};
use storezip::{DateTimeCS, FileDateTime, FileEntry};

pub const LOCAL_HEADER_SIZE: usize = 30;
pub const CENTRAL_HEADER_SIZE: usize = 46;
pub const END_RECORD_SIZE: usize = 22;

pub fn create_new_clean_file(file_name: &str) -> (File, PathBuf) {
    let dir_prefix = "/tmp/storezip";
    let out_dir = Path::new(dir_prefix);
    if !out_dir.exists() {
        create_dir_all(out_dir).unwrap_or_else(|error| {
            panic!("creating dir {:?} failed, because {:?}", dir_prefix, error);
        })
    }

    let out_path = out_dir.join(file_name);

    if out_path.exists() {
        remove_file(&out_path).unwrap_or_else(|error| {
            panic!("deleting file {:?} failed, because {:?}", &out_path, error);
        });
    }
    let file = File::create(&out_path).unwrap_or_else(|error| {
        panic!("creating file {:?} failed, because {:?}", &out_path, error);
    });

    (file, out_path)
}

pub fn fixed_time() -> FileDateTime {
    FileDateTime::Custom(DateTimeCS::new(2024, 2, 29, 13, 37, 42))
}

/// Deterministic pseudo random payload.
pub fn payload(len: usize, seed: u8) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u32).wrapping_mul(2654435761).rotate_left(seed as u32 % 32) as u8 ^ seed)
        .collect()
}

/// Bit by bit CRC-32 (reflected `0xEDB88320`), kept apart from the crate's own.
pub fn reference_crc32(data: &[u8]) -> u32 {
    let mut crc: u32 = 0xFFFFFFFF;
    for &byte in data {
        crc ^= byte as u32;
        for _ in 0..8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ 0xEDB88320;
            } else {
                crc >>= 1;
            }
        }
    }
    !crc
}

pub fn invoices(count: usize) -> Vec<FileEntry> {
    (1..=count)
        .map(|i| {
            FileEntry::new(
                format!("INV-{:04}.pdf", i),
                payload(17 * i + (i % 3) * 101, i as u8),
            )
        })
        .collect()
}

#[derive(Debug)]
pub struct LocalHeader {
    pub signature: u32,
    pub version_needed: u16,
    pub flags: u16,
    pub compression_method: u16,
    pub time: u16,
    pub date: u16,
    pub crc32: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub file_name: Vec<u8>,
    pub extra_field_length: u16,
    pub data: Vec<u8>,
}

#[derive(Debug)]
pub struct CentralHeader {
    pub signature: u32,
    pub version_made_by: u16,
    pub version_needed: u16,
    pub flags: u16,
    pub compression_method: u16,
    pub time: u16,
    pub date: u16,
    pub crc32: u32,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub file_name: Vec<u8>,
    pub extra_field_length: u16,
    pub comment_length: u16,
    pub disk_number_start: u16,
    pub internal_attributes: u16,
    pub external_attributes: u32,
    pub local_header_offset: u32,
}

#[derive(Debug)]
pub struct EndRecord {
    pub signature: u32,
    pub disk_number: u16,
    pub central_directory_disk: u16,
    pub entries_on_this_disk: u16,
    pub total_entries: u16,
    pub central_directory_size: u32,
    pub central_directory_offset: u32,
    pub comment_length: u16,
}

pub fn read_end_record(archive: &[u8]) -> EndRecord {
    let b = &archive[archive.len() - END_RECORD_SIZE..];

    EndRecord {
        signature: LittleEndian::read_u32(&b[0..]),
        disk_number: LittleEndian::read_u16(&b[4..]),
        central_directory_disk: LittleEndian::read_u16(&b[6..]),
        entries_on_this_disk: LittleEndian::read_u16(&b[8..]),
        total_entries: LittleEndian::read_u16(&b[10..]),
        central_directory_size: LittleEndian::read_u32(&b[12..]),
        central_directory_offset: LittleEndian::read_u32(&b[16..]),
        comment_length: LittleEndian::read_u16(&b[20..]),
    }
}

pub fn read_central_headers(archive: &[u8]) -> Vec<CentralHeader> {
    let end = read_end_record(archive);
    let mut index = end.central_directory_offset as usize;
    let mut headers = Vec::new();

    for _ in 0..end.total_entries {
        let b = &archive[index..];
        let file_name_len = LittleEndian::read_u16(&b[28..]) as usize;

        headers.push(CentralHeader {
            signature: LittleEndian::read_u32(&b[0..]),
            version_made_by: LittleEndian::read_u16(&b[4..]),
            version_needed: LittleEndian::read_u16(&b[6..]),
            flags: LittleEndian::read_u16(&b[8..]),
            compression_method: LittleEndian::read_u16(&b[10..]),
            time: LittleEndian::read_u16(&b[12..]),
            date: LittleEndian::read_u16(&b[14..]),
            crc32: LittleEndian::read_u32(&b[16..]),
            compressed_size: LittleEndian::read_u32(&b[20..]),
            uncompressed_size: LittleEndian::read_u32(&b[24..]),
            extra_field_length: LittleEndian::read_u16(&b[30..]),
            comment_length: LittleEndian::read_u16(&b[32..]),
            disk_number_start: LittleEndian::read_u16(&b[34..]),
            internal_attributes: LittleEndian::read_u16(&b[36..]),
            external_attributes: LittleEndian::read_u32(&b[38..]),
            local_header_offset: LittleEndian::read_u32(&b[42..]),
            file_name: b[CENTRAL_HEADER_SIZE..CENTRAL_HEADER_SIZE + file_name_len].to_vec(),
        });

        index += CENTRAL_HEADER_SIZE + file_name_len;
    }

    headers
}

pub fn read_local_header(archive: &[u8], offset: u32) -> LocalHeader {
    let b = &archive[offset as usize..];
    let file_name_len = LittleEndian::read_u16(&b[26..]) as usize;
    let compressed_size = LittleEndian::read_u32(&b[18..]);
    let data_start = LOCAL_HEADER_SIZE + file_name_len;

    LocalHeader {
        signature: LittleEndian::read_u32(&b[0..]),
        version_needed: LittleEndian::read_u16(&b[4..]),
        flags: LittleEndian::read_u16(&b[6..]),
        compression_method: LittleEndian::read_u16(&b[8..]),
        time: LittleEndian::read_u16(&b[10..]),
        date: LittleEndian::read_u16(&b[12..]),
        crc32: LittleEndian::read_u32(&b[14..]),
        compressed_size,
        uncompressed_size: LittleEndian::read_u32(&b[22..]),
        extra_field_length: LittleEndian::read_u16(&b[28..]),
        file_name: b[LOCAL_HEADER_SIZE..data_start].to_vec(),
        data: b[data_start..data_start + compressed_size as usize].to_vec(),
    }
}
