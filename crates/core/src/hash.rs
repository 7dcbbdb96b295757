//! Content hashing for checkbox identities.
//!
//! A rolling 31-multiplier polynomial hash over UTF-16 code units, kept in a
//! wrapping 32-bit signed accumulator and rendered as lowercase base-36 of its
//! absolute value. The choice of UTF-16 units matches what a browser-side
//! implementation sees when iterating a string, so identities agree across
//! both.

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Hashes `text` and returns the base-36 digest.
pub fn content_hash(text: &str) -> String {
    hash_code_units(text.encode_utf16())
}

/// Hashes a sequence of UTF-16 code units.
pub fn hash_code_units(units: impl IntoIterator<Item = u16>) -> String {
    let mut hash: i32 = 0;
    for unit in units {
        // (hash << 5) - hash + unit, i.e. hash * 31 + unit
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    // Widen first: |i32::MIN| does not fit in an i32
    to_base36(i64::from(hash).unsigned_abs())
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::with_capacity(13);
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    // Only ASCII digits were pushed
    String::from_utf8(digits).unwrap_or_default()
}
