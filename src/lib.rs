//! # lease2zone
//!
//! Converts a udhcpd binary lease database into two DNS zone-file fragments:
//! forward A records and reverse PTR records.
//!
//! ## Features
//!
//! - Fixed-layout binary lease decoding with explicit byte-offset reads
//! - File-size validation before any record is exposed
//! - Streaming render: one A line and one PTR line per lease, on-disk order
//! - Tolerates untrusted input: truncated or misaligned files fail cleanly
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufWriter;
//!
//! use lease2zone::{render, LeaseStore};
//!
//! fn main() -> lease2zone::Result<()> {
//!     let store = LeaseStore::load("/var/lib/misc/udhcpd.leases")?;
//!     let mut forward = BufWriter::new(File::create("forward.zone")?);
//!     let mut reverse = BufWriter::new(File::create("reverse.zone")?);
//!     render(&store, &mut forward, &mut reverse)
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`LeaseStore`] - Validated, read-only lease database loaded from disk
//! - [`LeaseRecord`] - Borrowed view of one fixed 32-byte lease record
//! - [`render`] - One-pass conversion to forward and reverse zone sinks
//!
//! ## Known limitations
//!
//! The lease file is read without locking; a DHCP server rewriting it during
//! a run is an unguarded race. The two output files are not written
//! atomically as a pair: a late failure on the reverse file can leave a
//! complete forward file behind.

pub mod error;
pub mod store;
pub mod zone;

pub use error::{Error, Result};
pub use store::{LeaseRecord, LeaseStore, LEASE_RECORD_SIZE, WRITE_TIME_SIZE};
pub use zone::render;
