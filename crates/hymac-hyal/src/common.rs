//! Common PIB store for attributes shared by both media.
//!
//! Addresses, the PAN id and the POS aging parameters must agree between
//! the two MAC layers, so they live here rather than in either medium's
//! own PIB. Reads and writes arrive through the attribute router.

use hymac_core::pib::{PibAttribute, PibValue};
use hymac_core::status::MacStatus;
use hymac_core::types::{ExtendedAddress, PanId, ShortAddress};

/// Number of security key slots.
pub const KEY_TABLE_ENTRIES: usize = 2;

/// Security key length in bytes.
pub const SECURITY_KEY_LEN: usize = 16;

/// The shared attribute store.
#[derive(Debug, Clone)]
pub struct CommonPib {
    pub rc_coord: u16,
    pub pan_id: PanId,
    pub short_address: ShortAddress,
    /// POS table entry lifetime in minutes.
    pub pos_table_entry_ttl: u8,
    /// Recency threshold for POS table entries in minutes.
    pub pos_recent_entry_threshold: u8,
    pub extended_address: ExtendedAddress,
    key_table: [Option<[u8; SECURITY_KEY_LEN]>; KEY_TABLE_ENTRIES],
    pub promiscuous_mode: bool,
}

impl Default for CommonPib {
    fn default() -> Self {
        CommonPib {
            // RC_COORD starts at its maximum until a route to the
            // coordinator is learned.
            rc_coord: 0xFFFF,
            pan_id: PanId(0xFFFF),
            short_address: ShortAddress(0xFFFF),
            pos_table_entry_ttl: 255,
            pos_recent_entry_threshold: 120,
            extended_address: ExtendedAddress([0; 8]),
            key_table: [None; KEY_TABLE_ENTRIES],
            promiscuous_mode: false,
        }
    }
}

impl CommonPib {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every attribute to its default value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Synchronously read a shared attribute.
    pub fn get(&self, attribute: PibAttribute, index: u16) -> Result<PibValue, MacStatus> {
        if attribute != PibAttribute::KEY_TABLE && index != 0 {
            return Err(MacStatus::InvalidIndex);
        }

        match attribute {
            PibAttribute::PAN_ID => Ok(PibValue::from_u16(self.pan_id.0)),
            PibAttribute::PROMISCUOUS_MODE => Ok(PibValue::from_bool(self.promiscuous_mode)),
            PibAttribute::SHORT_ADDRESS => Ok(PibValue::from_u16(self.short_address.0)),
            PibAttribute::RC_COORD => Ok(PibValue::from_u16(self.rc_coord)),
            PibAttribute::POS_TABLE_ENTRY_TTL => Ok(PibValue::from_u8(self.pos_table_entry_ttl)),
            PibAttribute::POS_RECENT_ENTRY_THRESHOLD => {
                Ok(PibValue::from_u8(self.pos_recent_entry_threshold))
            }
            PibAttribute::MANUF_EXTENDED_ADDRESS => {
                Ok(PibValue::from_bytes(&self.extended_address.0))
            }
            // Security keys are write-only.
            PibAttribute::KEY_TABLE => Err(MacStatus::UnavailableKey),
            _ => Err(MacStatus::UnsupportedAttribute),
        }
    }

    /// Synchronously write a shared attribute.
    pub fn set(&mut self, attribute: PibAttribute, index: u16, value: &PibValue) -> MacStatus {
        if attribute != PibAttribute::KEY_TABLE && index != 0 {
            return MacStatus::InvalidIndex;
        }

        match attribute {
            PibAttribute::PAN_ID => match value.as_u16() {
                Ok(v) => {
                    self.pan_id = PanId(v);
                    MacStatus::Success
                }
                Err(_) => MacStatus::InvalidParameter,
            },
            PibAttribute::PROMISCUOUS_MODE => match value.as_bool() {
                Ok(v) => {
                    self.promiscuous_mode = v;
                    MacStatus::Success
                }
                Err(_) => MacStatus::InvalidParameter,
            },
            PibAttribute::SHORT_ADDRESS => match value.as_u16() {
                Ok(v) => {
                    self.short_address = ShortAddress(v);
                    MacStatus::Success
                }
                Err(_) => MacStatus::InvalidParameter,
            },
            PibAttribute::RC_COORD => match value.as_u16() {
                Ok(v) => {
                    self.rc_coord = v;
                    MacStatus::Success
                }
                Err(_) => MacStatus::InvalidParameter,
            },
            PibAttribute::POS_TABLE_ENTRY_TTL => match value.as_u8() {
                Ok(v) => {
                    self.pos_table_entry_ttl = v;
                    MacStatus::Success
                }
                Err(_) => MacStatus::InvalidParameter,
            },
            PibAttribute::POS_RECENT_ENTRY_THRESHOLD => match value.as_u8() {
                Ok(v) => {
                    self.pos_recent_entry_threshold = v;
                    MacStatus::Success
                }
                Err(_) => MacStatus::InvalidParameter,
            },
            PibAttribute::MANUF_EXTENDED_ADDRESS => {
                let bytes = value.bytes();
                if bytes.len() == 8 {
                    let mut address = [0u8; 8];
                    address.copy_from_slice(bytes);
                    self.extended_address = ExtendedAddress(address);
                    MacStatus::Success
                } else {
                    MacStatus::InvalidParameter
                }
            }
            PibAttribute::KEY_TABLE => self.set_key(index, value),
            _ => MacStatus::UnsupportedAttribute,
        }
    }

    /// Install, replace or invalidate a security key. An empty value
    /// invalidates the slot.
    fn set_key(&mut self, index: u16, value: &PibValue) -> MacStatus {
        let Some(slot) = self.key_table.get_mut(index as usize) else {
            return MacStatus::InvalidIndex;
        };
        let bytes = value.bytes();
        if bytes.len() == SECURITY_KEY_LEN {
            let mut key = [0u8; SECURITY_KEY_LEN];
            key.copy_from_slice(bytes);
            *slot = Some(key);
            MacStatus::Success
        } else if bytes.is_empty() {
            *slot = None;
            MacStatus::Success
        } else {
            MacStatus::InvalidParameter
        }
    }

    /// Whether a key is installed in the given slot.
    pub fn key_valid(&self, index: usize) -> bool {
        self.key_table.get(index).is_some_and(|slot| slot.is_some())
    }
}
