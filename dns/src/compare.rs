//! Case-insensitive name matching for zone-style lookups.
//!
//! This is the reference behaviour any faster comparison has to reproduce byte
//! for byte. ASCII folding is applied to every byte of the wire form, length
//! bytes included, so `03 WWW` and `03 www` are equal.

use crate::{MAX_LABEL_LEN, MAX_NAME_LEN};

// Length bytes never reach the letter range, so folding cannot alter them.
const _: () = assert!(MAX_LABEL_LEN < b'A' as usize);

/// Compares two wire-format names, treating `A`-`Z` as `a`-`z`.
pub fn names_equal(a: &[u8], b: &[u8]) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Length of the wire-format name at the start of `entry`, root label included.
///
/// The label walk stops after `MAX_NAME_LEN` bytes or at the end of `entry`; in
/// the latter case the returned length is larger than `entry`.
pub fn wire_name_len(entry: &[u8]) -> usize {
    let mut pos = 0;

    while pos < MAX_NAME_LEN {
        match entry.get(pos) {
            Some(0) | None => break,
            Some(&label_len) => pos += 1 + usize::from(label_len),
        }
    }

    pos + 1
}

/// Index of the first `haystack` entry equal to `needle` under `names_equal`.
pub fn find_name<T: AsRef<[u8]>>(needle: &[u8], haystack: &[T]) -> Option<usize> {
    haystack.iter().position(|entry| {
        let entry = entry.as_ref();
        match entry.get(..wire_name_len(entry)) {
            Some(name) => names_equal(needle, name),
            None => false,
        }
    })
}
