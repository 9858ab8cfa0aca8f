//! Cross-medium duplicate detection for received frames.
//!
//! A frame transmitted on both media arrives twice, once per medium. The
//! filter keeps a short most-recent-first list of reception fingerprints
//! (source short address, MSDU length, CRC) and drops a frame whose
//! fingerprint matches a recent reception on the *other* medium. Repeats on
//! the same medium are that medium's own retransmissions and are left
//! alone. The table holds no timestamps; recency is insertion order, so the
//! dedup window is bounded by the table capacity.

use std::collections::VecDeque;

use hymac_core::crc::crc16_ccitt;
use hymac_core::types::{Medium, ShortAddress};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Fingerprint {
    src_address: ShortAddress,
    msdu_len: usize,
    crc: u16,
    medium: Medium,
}

/// Fixed-capacity recency cache of reception fingerprints.
pub struct DuplicateFilter {
    entries: VecDeque<Fingerprint>,
    capacity: usize,
}

impl DuplicateFilter {
    pub fn new(capacity: usize) -> Self {
        DuplicateFilter {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Check a reception against the table.
    ///
    /// Returns `true` if the same frame was recently received on the other
    /// medium; the table is left untouched in that case. Otherwise records
    /// the new fingerprint at the front, evicting the oldest entry when the
    /// table is full, and returns `false`.
    pub fn check_and_record(
        &mut self,
        src_address: ShortAddress,
        msdu: &[u8],
        medium: Medium,
    ) -> bool {
        let fingerprint = Fingerprint {
            src_address,
            msdu_len: msdu.len(),
            crc: crc16_ccitt(msdu),
            medium,
        };

        let duplicate = self.entries.iter().any(|entry| {
            entry.src_address == fingerprint.src_address
                && entry.msdu_len == fingerprint.msdu_len
                && entry.crc == fingerprint.crc
                && entry.medium != fingerprint.medium
        });

        if !duplicate {
            if self.entries.len() == self.capacity {
                self.entries.pop_back();
            }
            self.entries.push_front(fingerprint);
        }

        duplicate
    }

    /// Forget all recorded fingerprints.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
