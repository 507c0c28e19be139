//! Zone-fragment rendering.
//!
//! Turns a validated [`LeaseStore`] into two plain-text zone fragments: one
//! forward line (A record) and one reverse line (PTR record) per lease, in
//! on-disk order. Hostname bytes are emitted exactly as stored; the records
//! come from an external DHCP server and this tool does not validate or
//! escape their content.

use std::io::Write;

use crate::error::{Error, Result};
use crate::store::{LeaseRecord, LeaseStore};

/// Fixed suffix for reverse-lookup names.
const REVERSE_SUFFIX: &str = "in-addr.arpa.";

/// Renders every record in the store to the two zone sinks.
///
/// Each record produces exactly one line in each sink:
///
/// ```text
/// <hostname>\tIN\tA\t<o0>.<o1>.<o2>.<o3>
/// <o3>.<o2>.<o1>.<o0>.in-addr.arpa.\tIN\tPTR\t<hostname>
/// ```
///
/// where `o0` is the least-significant stored byte of the address. The
/// address is kept in network byte order throughout; no host-order
/// conversion is performed.
///
/// # Errors
///
/// Returns [`Error::Write`] with the failing record index if either sink
/// rejects a write. Rendering stops at that record; earlier lines have
/// already been emitted and whichever sink succeeded may hold partial
/// content (no rollback across the two sinks).
pub fn render<F, R>(store: &LeaseStore, forward: &mut F, reverse: &mut R) -> Result<()>
where
    F: Write,
    R: Write,
{
    for (index, record) in store.records().enumerate() {
        write_forward_line(forward, &record)
            .and_then(|_| write_reverse_line(reverse, &record))
            .map_err(|source| Error::Write { index, source })?;
    }
    Ok(())
}

fn write_forward_line<W: Write>(sink: &mut W, record: &LeaseRecord<'_>) -> std::io::Result<()> {
    let [o0, o1, o2, o3] = record.ip_octets();
    sink.write_all(record.hostname_bytes())?;
    writeln!(sink, "\tIN\tA\t{o0}.{o1}.{o2}.{o3}")
}

fn write_reverse_line<W: Write>(sink: &mut W, record: &LeaseRecord<'_>) -> std::io::Result<()> {
    let [o0, o1, o2, o3] = record.ip_octets();
    write!(sink, "{o3}.{o2}.{o1}.{o0}.{REVERSE_SUFFIX}\tIN\tPTR\t")?;
    sink.write_all(record.hostname_bytes())?;
    writeln!(sink)
}
