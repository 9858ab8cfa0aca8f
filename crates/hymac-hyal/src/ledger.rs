//! Bounded pool of in-flight data requests.
//!
//! Each accepted data request occupies one slot until its single upward
//! confirm is emitted. The slot keeps a private copy of the MSDU because
//! the caller's buffer is only valid for the duration of the request call,
//! while a backup-medium resend or probe happens much later, from a confirm
//! callback.

use hymac_core::params::DataRequestParams;
use hymac_core::status::MacStatus;
use hymac_core::types::MediaPolicy;

/// One in-flight data request.
#[derive(Debug)]
pub struct PendingTransmit {
    /// Request parameters with `msdu` replaced by the private copy
    /// (empty when the original MSDU exceeded the copy limit).
    pub params: DataRequestParams,
    /// Whether a usable private MSDU copy exists. Without one, failover
    /// and probing resends are skipped.
    pub has_payload_copy: bool,
    pub policy: MediaPolicy,
    pub probing_interval_mins: u8,
    /// Status of the first confirmation of a dual-medium request.
    pub first_confirm_status: MacStatus,
    /// Set once the first of two expected confirmations has arrived.
    pub awaiting_second_confirm: bool,
    /// Task-clock time at which the request was accepted.
    pub submitted_at_ms: u64,
}

/// Fixed-capacity slot pool of [`PendingTransmit`] entries.
pub struct TransmitLedger {
    slots: Vec<Option<PendingTransmit>>,
}

impl TransmitLedger {
    pub fn new(capacity: usize) -> Self {
        TransmitLedger {
            slots: (0..capacity).map(|_| None).collect(),
        }
    }

    /// Claim a free slot for `entry`. Returns the slot index, or the entry
    /// back when every slot is occupied.
    pub fn insert(&mut self, entry: PendingTransmit) -> Result<usize, PendingTransmit> {
        match self.slots.iter_mut().enumerate().find(|(_, s)| s.is_none()) {
            Some((index, slot)) => {
                *slot = Some(entry);
                Ok(index)
            }
            None => Err(entry),
        }
    }

    /// Index of the in-use entry with the given MSDU handle.
    pub fn position_by_handle(&self, handle: u8) -> Option<usize> {
        self.slots.iter().position(|slot| {
            matches!(slot, Some(entry) if entry.params.msdu_handle == handle)
        })
    }

    pub fn get(&self, index: usize) -> Option<&PendingTransmit> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut PendingTransmit> {
        self.slots.get_mut(index).and_then(|slot| slot.as_mut())
    }

    /// Free the slot, returning its entry. The slot is immediately
    /// reusable by a new request.
    pub fn release(&mut self, index: usize) -> Option<PendingTransmit> {
        self.slots.get_mut(index).and_then(|slot| slot.take())
    }

    /// Number of occupied slots.
    pub fn in_flight(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Indices of entries awaiting their second confirmation whose wait
    /// started at or before `deadline`.
    pub fn awaiting_second_since(&self, deadline: u64) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Some(entry)
                    if entry.awaiting_second_confirm && entry.submitted_at_ms <= deadline =>
                {
                    Some(index)
                }
                _ => None,
            })
            .collect()
    }
}
