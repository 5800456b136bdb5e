//! Dense memo table mapping `sentence_mask -> dict_length_when_last_visited`.
//!
//! Sized `2^26` entries, one per possible [`LetterMask`] value, which is
//! the entire point: lookups and updates are O(1) array indexing, no
//! hashing. Zero means "never visited" (or "invalidated"); see
//! [`crate::search`] for how that's used.

use crate::error::{AnagramError, Result};
use crate::mask::LetterMask;

const TABLE_SIZE: usize = 1 << 26;

/// Counter width for the memo table's entries.
///
/// `Wide` (32-bit) is always safe. `Compact` (16-bit) halves the ~256 MiB
/// allocation but silently wraps if any single level's filtered
/// dictionary ever exceeds 65535 entries — safe for realistic dictionaries
/// (the post-reduction level-0 list is typically well under that), but a
/// deliberate opt-in via `--compact-memo` rather than a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    Wide,
    Compact,
}

enum Storage {
    Wide(Vec<u32>),
    Compact(Vec<u16>),
}

pub struct MemoTable {
    storage: Storage,
}

impl MemoTable {
    /// Allocate a fresh, zeroed table. Fails with
    /// [`AnagramError::MemoAllocationFailed`] rather than aborting the
    /// process.
    pub fn new(width: Width) -> Result<MemoTable> {
        let storage = match width {
            Width::Wide => {
                let mut v = Vec::new();
                v.try_reserve_exact(TABLE_SIZE).map_err(|_| {
                    AnagramError::MemoAllocationFailed {
                        requested_bytes: TABLE_SIZE * std::mem::size_of::<u32>(),
                    }
                })?;
                v.resize(TABLE_SIZE, 0u32);
                Storage::Wide(v)
            }
            Width::Compact => {
                let mut v = Vec::new();
                v.try_reserve_exact(TABLE_SIZE).map_err(|_| {
                    AnagramError::MemoAllocationFailed {
                        requested_bytes: TABLE_SIZE * std::mem::size_of::<u16>(),
                    }
                })?;
                v.resize(TABLE_SIZE, 0u16);
                Storage::Compact(v)
            }
        };
        Ok(MemoTable { storage })
    }

    /// Length of the dict when `mask` was last visited, or `0` if never
    /// visited (or invalidated since).
    #[inline]
    pub fn get(&self, mask: LetterMask) -> usize {
        match &self.storage {
            Storage::Wide(v) => v[mask as usize] as usize,
            Storage::Compact(v) => v[mask as usize] as usize,
        }
    }

    /// Record that a frame was created at `mask` with a dict of `len` entries.
    #[inline]
    pub fn set(&mut self, mask: LetterMask, len: usize) {
        match &mut self.storage {
            Storage::Wide(v) => v[mask as usize] = len as u32,
            Storage::Compact(v) => v[mask as usize] = len as u16,
        }
    }

    /// Mark `mask` as never-visited, reopening it for future exploration.
    #[inline]
    pub fn clear(&mut self, mask: LetterMask) {
        match &mut self.storage {
            Storage::Wide(v) => v[mask as usize] = 0,
            Storage::Compact(v) => v[mask as usize] = 0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let memo = MemoTable::new(Width::Wide).unwrap();
        assert_eq!(memo.get(0), 0);
        assert_eq!(memo.get(crate::mask::ALL_LETTERS_MASK), 0);
    }

    #[test]
    fn set_then_get_then_clear() {
        let mut memo = MemoTable::new(Width::Wide).unwrap();
        memo.set(42, 17);
        assert_eq!(memo.get(42), 17);
        memo.clear(42);
        assert_eq!(memo.get(42), 0);
    }

    #[test]
    fn compact_width_roundtrips_small_values() {
        let mut memo = MemoTable::new(Width::Compact).unwrap();
        memo.set(7, 65535);
        assert_eq!(memo.get(7), 65535);
    }
}
