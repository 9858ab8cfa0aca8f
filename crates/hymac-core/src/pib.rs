//! PIB attribute identifiers, values and table-entry encodings.
//!
//! Attribute identifiers live in a single 32-bit space shared by both
//! medium MACs. Standard attributes sit below 0x400 (PLC below 0x200, RF
//! above), manufacturer attributes at 0x0800_0000 upward with the same
//! PLC/RF split at 0x0800_0200.

extern crate alloc;
use alloc::vec::Vec;

use core::fmt;

use crate::error::CodecError;
use crate::types::ShortAddress;

/// A PIB attribute identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct PibAttribute(pub u32);

impl PibAttribute {
    // Shared attributes, owned by the common store.
    pub const PAN_ID: PibAttribute = PibAttribute(0x0000_0050);
    pub const PROMISCUOUS_MODE: PibAttribute = PibAttribute(0x0000_0051);
    pub const SHORT_ADDRESS: PibAttribute = PibAttribute(0x0000_0053);
    pub const KEY_TABLE: PibAttribute = PibAttribute(0x0000_0071);
    pub const POS_TABLE_ENTRY_TTL: PibAttribute = PibAttribute(0x0000_010E);
    pub const RC_COORD: PibAttribute = PibAttribute(0x0000_010F);
    pub const POS_RECENT_ENTRY_THRESHOLD: PibAttribute = PibAttribute(0x0000_0121);
    pub const MANUF_EXTENDED_ADDRESS: PibAttribute = PibAttribute(0x0800_0001);

    // PLC-scoped attributes used by the access layer itself.
    pub const TMR_TTL: PibAttribute = PibAttribute(0x0000_010D);
    pub const MANUF_NEIGHBOUR_TABLE_ELEMENT: PibAttribute = PibAttribute(0x0800_0002);
    pub const MANUF_POS_TABLE_ELEMENT: PibAttribute = PibAttribute(0x0800_0027);
    pub const MANUF_RESET_TMR_TTL: PibAttribute = PibAttribute(0x0800_002E);

    // RF-scoped attributes used by the access layer itself.
    pub const MANUF_POS_TABLE_ELEMENT_RF: PibAttribute = PibAttribute(0x0800_021B);
}

impl fmt::Display for PibAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl fmt::Debug for PibAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PibAttribute(0x{:08X})", self.0)
    }
}

/// An attribute value as raw bytes, little-endian for integer attributes.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct PibValue(pub Vec<u8>);

impl PibValue {
    pub fn from_u8(v: u8) -> PibValue {
        PibValue([v].to_vec())
    }

    pub fn from_u16(v: u16) -> PibValue {
        PibValue(v.to_le_bytes().to_vec())
    }

    pub fn from_bool(v: bool) -> PibValue {
        PibValue::from_u8(v as u8)
    }

    pub fn from_bytes(bytes: &[u8]) -> PibValue {
        PibValue(bytes.to_vec())
    }

    pub fn as_u8(&self) -> Result<u8, CodecError> {
        match self.0.first() {
            Some(&v) => Ok(v),
            None => Err(CodecError::TooShort {
                expected: 1,
                actual: 0,
            }),
        }
    }

    pub fn as_u16(&self) -> Result<u16, CodecError> {
        if self.0.len() < 2 {
            return Err(CodecError::TooShort {
                expected: 2,
                actual: self.0.len(),
            });
        }
        Ok(u16::from_le_bytes([self.0[0], self.0[1]]))
    }

    pub fn as_bool(&self) -> Result<bool, CodecError> {
        Ok(self.as_u8()? != 0)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0
    }
}

/// A PLC POS (neighbour link quality) table entry.
///
/// Encoded form: short address (2, LE), LQI (1), POS valid time in
/// seconds (2, LE).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PlcPosEntry {
    pub short_address: ShortAddress,
    pub lqi: u8,
    pub pos_valid_time_secs: u16,
}

impl PlcPosEntry {
    pub const ENCODED_LEN: usize = 5;

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::ENCODED_LEN);
        out.extend_from_slice(&self.short_address.0.to_le_bytes());
        out.push(self.lqi);
        out.extend_from_slice(&self.pos_valid_time_secs.to_le_bytes());
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<PlcPosEntry, CodecError> {
        if bytes.len() < Self::ENCODED_LEN {
            return Err(CodecError::TooShort {
                expected: Self::ENCODED_LEN,
                actual: bytes.len(),
            });
        }
        Ok(PlcPosEntry {
            short_address: ShortAddress(u16::from_le_bytes([bytes[0], bytes[1]])),
            lqi: bytes[2],
            pos_valid_time_secs: u16::from_le_bytes([bytes[3], bytes[4]]),
        })
    }
}

/// An RF POS table entry.
///
/// Encoded form: short address (2, LE), forward LQI (1), reverse LQI (1),
/// duty cycle (1), forward TX power offset (1), reverse TX power offset (1),
/// POS valid time in seconds (2, LE), reverse LQI valid time in
/// seconds (2, LE).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RfPosEntry {
    pub short_address: ShortAddress,
    pub forward_lqi: u8,
    pub reverse_lqi: u8,
    pub duty_cycle: u8,
    pub forward_tx_power_offset: u8,
    pub reverse_tx_power_offset: u8,
    pub pos_valid_time_secs: u16,
    pub reverse_lqi_valid_time_secs: u16,
}

impl RfPosEntry {
    pub const ENCODED_LEN: usize = 11;

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::ENCODED_LEN);
        out.extend_from_slice(&self.short_address.0.to_le_bytes());
        out.push(self.forward_lqi);
        out.push(self.reverse_lqi);
        out.push(self.duty_cycle);
        out.push(self.forward_tx_power_offset);
        out.push(self.reverse_tx_power_offset);
        out.extend_from_slice(&self.pos_valid_time_secs.to_le_bytes());
        out.extend_from_slice(&self.reverse_lqi_valid_time_secs.to_le_bytes());
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<RfPosEntry, CodecError> {
        if bytes.len() < Self::ENCODED_LEN {
            return Err(CodecError::TooShort {
                expected: Self::ENCODED_LEN,
                actual: bytes.len(),
            });
        }
        Ok(RfPosEntry {
            short_address: ShortAddress(u16::from_le_bytes([bytes[0], bytes[1]])),
            forward_lqi: bytes[2],
            reverse_lqi: bytes[3],
            duty_cycle: bytes[4],
            forward_tx_power_offset: bytes[5],
            reverse_tx_power_offset: bytes[6],
            pos_valid_time_secs: u16::from_le_bytes([bytes[7], bytes[8]]),
            reverse_lqi_valid_time_secs: u16::from_le_bytes([bytes[9], bytes[10]]),
        })
    }
}

/// A PLC neighbour table entry, reduced to the fields the access layer
/// consumes.
///
/// Encoded form: short address (2, LE), LQI (1), TMR valid time in
/// seconds (2, LE).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NeighbourEntry {
    pub short_address: ShortAddress,
    pub lqi: u8,
    pub tmr_valid_time_secs: u16,
}

impl NeighbourEntry {
    pub const ENCODED_LEN: usize = 5;

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::ENCODED_LEN);
        out.extend_from_slice(&self.short_address.0.to_le_bytes());
        out.push(self.lqi);
        out.extend_from_slice(&self.tmr_valid_time_secs.to_le_bytes());
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<NeighbourEntry, CodecError> {
        if bytes.len() < Self::ENCODED_LEN {
            return Err(CodecError::TooShort {
                expected: Self::ENCODED_LEN,
                actual: bytes.len(),
            });
        }
        Ok(NeighbourEntry {
            short_address: ShortAddress(u16::from_le_bytes([bytes[0], bytes[1]])),
            lqi: bytes[2],
            tmr_valid_time_secs: u16::from_le_bytes([bytes[3], bytes[4]]),
        })
    }
}
