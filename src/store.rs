//! Lease file loading and fixed-layout record decoding.
//!
//! A udhcpd lease file is an 8-byte write-time header followed by a
//! contiguous run of fixed 32-byte lease records. This module validates the
//! file size against that layout before exposing any record, then hands out
//! borrowed views decoded with explicit byte-offset reads.
//!
//! # File Structure
//!
//! ```text
//! offset 0: +----------------------------------+
//!           |          write_time (8)          |  byte-swapped epoch seconds
//! offset 8: +----------------------------------+  <- record 0
//!           |         expire_time (4)          |  epoch seconds, as stored
//!           +----------------------------------+
//!           |    ip (4, network byte order)    |
//!           +----------------------------------+
//!           |             mac (6)              |
//!           +----------------------------------+
//!           |          hostname (20)           |  NUL-terminated or -padded
//!           +----------------------------------+
//!           |             pad (2)              |
//! offset 40:+----------------------------------+  <- record 1
//!           |               ...                |
//! ```
//!
//! The write_time value is stored byte-swapped relative to the host order of
//! the server that wrote it, so it is decoded big-endian before display.
//! Field widths must add up to exactly [`LEASE_RECORD_SIZE`]; the total is
//! what validates the file length, not just what drives parsing.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

const EXPIRE_TIME_SIZE: usize = 4;
const IP_SIZE: usize = 4;
const MAC_SIZE: usize = 6;
const HOSTNAME_SIZE: usize = 20;
const PAD_SIZE: usize = 2;

const IP_OFFSET: usize = EXPIRE_TIME_SIZE;
const MAC_OFFSET: usize = IP_OFFSET + IP_SIZE;
const HOSTNAME_OFFSET: usize = MAC_OFFSET + MAC_SIZE;

/// Size of one on-disk lease record in bytes.
pub const LEASE_RECORD_SIZE: usize =
    EXPIRE_TIME_SIZE + IP_SIZE + MAC_SIZE + HOSTNAME_SIZE + PAD_SIZE;

/// Size of the write-time header that precedes the records.
pub const WRITE_TIME_SIZE: usize = 8;

/// A validated, read-only lease database loaded from disk.
///
/// Owns the backing bytes for every record; [`LeaseRecord`] values are
/// borrowed views into it and cannot outlive it. The file handle is released
/// as soon as the contents have been read.
#[derive(Debug)]
pub struct LeaseStore {
    data: Vec<u8>,
    record_count: usize,
}

impl LeaseStore {
    /// Loads and validates a lease file.
    ///
    /// The file is opened read-only, read fully into memory, and checked
    /// against the fixed layout before any record is exposed.
    ///
    /// # Errors
    ///
    /// - [`Error::Open`] if the path cannot be opened, with the OS reason
    /// - [`Error::TruncatedHeader`] if the file is smaller than the 8-byte
    ///   write-time header
    /// - [`Error::MisalignedSize`] if the bytes after the header are not an
    ///   exact multiple of [`LEASE_RECORD_SIZE`]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        Self::from_bytes(data, path)
    }

    fn from_bytes(data: Vec<u8>, path: &Path) -> Result<Self> {
        if data.len() < WRITE_TIME_SIZE {
            return Err(Error::TruncatedHeader {
                path: path.to_path_buf(),
                size: data.len() as u64,
            });
        }

        let remaining = data.len() - WRITE_TIME_SIZE;
        if remaining % LEASE_RECORD_SIZE != 0 {
            return Err(Error::MisalignedSize {
                path: path.to_path_buf(),
                remaining: remaining as u64,
                record_size: LEASE_RECORD_SIZE as u64,
            });
        }

        Ok(Self {
            data,
            record_count: remaining / LEASE_RECORD_SIZE,
        })
    }

    /// Returns when the server last wrote the lease file, in epoch seconds.
    ///
    /// The stored value is byte-swapped relative to the writing host, so it
    /// is decoded big-endian here to undo the swap.
    pub fn write_time(&self) -> i64 {
        let mut header = [0u8; WRITE_TIME_SIZE];
        header.copy_from_slice(&self.data[..WRITE_TIME_SIZE]);
        i64::from_be_bytes(header)
    }

    /// Returns the number of records in the store.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Returns the record at `index`, or `None` if out of range.
    ///
    /// O(1): computes the byte offset from the index and bounds-checks it
    /// against the validated length.
    pub fn record_at(&self, index: usize) -> Option<LeaseRecord<'_>> {
        if index >= self.record_count {
            return None;
        }
        let start = WRITE_TIME_SIZE + index * LEASE_RECORD_SIZE;
        Some(LeaseRecord {
            bytes: &self.data[start..start + LEASE_RECORD_SIZE],
        })
    }

    /// Iterates over all records in on-disk order.
    pub fn records(&self) -> impl Iterator<Item = LeaseRecord<'_>> {
        (0..self.record_count).filter_map(|index| self.record_at(index))
    }
}

/// A borrowed view of one 32-byte lease record.
///
/// All accessors decode at fixed offsets within the record and never read
/// past a field's declared width.
#[derive(Debug, Clone, Copy)]
pub struct LeaseRecord<'a> {
    bytes: &'a [u8],
}

impl<'a> LeaseRecord<'a> {
    /// Lease expiry in epoch seconds, as stored by the server.
    ///
    /// Decoded little-endian to match the writing host; this tool does not
    /// reinterpret or display the value.
    pub fn expire_time(&self) -> u32 {
        let mut field = [0u8; EXPIRE_TIME_SIZE];
        field.copy_from_slice(&self.bytes[..EXPIRE_TIME_SIZE]);
        u32::from_le_bytes(field)
    }

    /// The four IP address octets in ascending bit-position order.
    ///
    /// The address is stored in network byte order and is not converted to
    /// host order: octet 0 is the least-significant stored byte, exactly the
    /// first byte on disk.
    pub fn ip_octets(&self) -> [u8; 4] {
        let mut octets = [0u8; IP_SIZE];
        octets.copy_from_slice(&self.bytes[IP_OFFSET..IP_OFFSET + IP_SIZE]);
        octets
    }

    /// The client hardware address. Opaque bytes, not byte-order-sensitive.
    pub fn mac(&self) -> [u8; 6] {
        let mut mac = [0u8; MAC_SIZE];
        mac.copy_from_slice(&self.bytes[MAC_OFFSET..MAC_OFFSET + MAC_SIZE]);
        mac
    }

    /// The hostname bytes, up to the first NUL within the 20-byte field.
    ///
    /// A field packed with 20 non-NUL bytes yields all 20; the read never
    /// crosses the field boundary either way. The content is not validated
    /// or sanitized.
    pub fn hostname_bytes(&self) -> &'a [u8] {
        let field = &self.bytes[HOSTNAME_OFFSET..HOSTNAME_OFFSET + HOSTNAME_SIZE];
        let len = field
            .iter()
            .position(|&byte| byte == 0)
            .unwrap_or(HOSTNAME_SIZE);
        &field[..len]
    }
}

/// Builds one on-disk record image for tests.
#[cfg(test)]
pub(crate) fn record_bytes(
    expire_time: u32,
    ip_octets: [u8; 4],
    mac: [u8; 6],
    hostname: &[u8],
) -> [u8; LEASE_RECORD_SIZE] {
    assert!(hostname.len() <= HOSTNAME_SIZE);
    let mut record = [0u8; LEASE_RECORD_SIZE];
    record[..EXPIRE_TIME_SIZE].copy_from_slice(&expire_time.to_le_bytes());
    record[IP_OFFSET..IP_OFFSET + IP_SIZE].copy_from_slice(&ip_octets);
    record[MAC_OFFSET..MAC_OFFSET + MAC_SIZE].copy_from_slice(&mac);
    record[HOSTNAME_OFFSET..HOSTNAME_OFFSET + hostname.len()].copy_from_slice(hostname);
    record
}
