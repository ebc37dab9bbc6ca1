//! Binary and text persistence for a fingerprint index.
//!
//! A thin collaborator over `std::fs`, not a format of its own: binary mode
//! is just the fingerprints' little-endian bytes back to back, text mode is
//! one [`crate::fingerprint::to_binary_string`] line per fingerprint. No
//! header, no checksum, no framing — matches the reference implementation's
//! `SaveToFile`/`LoadFromFile`, which is exactly this.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::fingerprint;

/// Writes `items` to `path`. Returns `false` on any I/O failure.
pub(crate) fn save(items: &[u64], path: impl AsRef<Path>, binary: bool) -> bool {
    let file = match File::create(path) {
        Ok(f) => f,
        Err(_) => return false,
    };
    let mut writer = BufWriter::new(file);

    let write_result = if binary {
        items.iter().try_for_each(|h| writer.write_all(&h.to_le_bytes()))
    } else {
        items
            .iter()
            .try_for_each(|&h| writeln!(writer, "{}", fingerprint::to_binary_string(h)))
    };

    write_result.is_ok() && writer.flush().is_ok()
}

/// Reads fingerprints from `path`. Returns `None` on any I/O failure or, in
/// binary mode, if the file length isn't a multiple of 8 bytes. In text
/// mode, lines that aren't valid 64-character binary strings are skipped
/// rather than treated as corruption — blank lines included.
pub(crate) fn load(path: impl AsRef<Path>, binary: bool) -> Option<Vec<u64>> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);

    if binary {
        let mut bytes = Vec::new();
        std::io::Read::read_to_end(&mut reader, &mut bytes).ok()?;
        if bytes.len() % 8 != 0 {
            return None;
        }
        Some(
            bytes
                .chunks_exact(8)
                .map(|c| u64::from_le_bytes(c.try_into().expect("chunk is exactly 8 bytes")))
                .collect(),
        )
    } else {
        let mut items = Vec::new();
        for line in reader.lines() {
            let line = line.ok()?;
            if fingerprint::is_valid_binary_string(&line) {
                items.push(fingerprint::from_binary_string(&line));
            }
        }
        Some(items)
    }
}
