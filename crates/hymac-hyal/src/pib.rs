//! PIB attribute routing.
//!
//! Each attribute identifier is owned by exactly one of three stores: the
//! common store shared by both media, the PLC MAC, or the RF MAC. A fixed
//! allow-list routes the shared attributes regardless of their numeric
//! value; everything else is classified by identifier range.

use hymac_core::pib::PibAttribute;

/// Owner of a PIB attribute.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PibScope {
    /// Shared between both media; owned by the common store.
    Common,
    /// Owned by the PLC MAC.
    Plc,
    /// Owned by the RF MAC.
    Rf,
}

/// Attributes shared between the MAC layers.
const SHARED_ATTRIBUTES: [PibAttribute; 8] = [
    PibAttribute::MANUF_EXTENDED_ADDRESS,
    PibAttribute::PAN_ID,
    PibAttribute::PROMISCUOUS_MODE,
    PibAttribute::SHORT_ADDRESS,
    PibAttribute::POS_TABLE_ENTRY_TTL,
    PibAttribute::POS_RECENT_ENTRY_THRESHOLD,
    PibAttribute::RC_COORD,
    PibAttribute::KEY_TABLE,
];

/// Classify an attribute identifier to its owning store.
pub fn classify(attribute: PibAttribute) -> PibScope {
    if SHARED_ATTRIBUTES.contains(&attribute) {
        return PibScope::Common;
    }

    // Identifier ranges: standard attributes below 0x400 with the PLC/RF
    // split at 0x200, manufacturer attributes from 0x08000000 with the
    // same split at 0x08000200.
    let id = attribute.0;
    if id < 0x0000_0200 {
        PibScope::Plc
    } else if id < 0x0000_0400 {
        PibScope::Rf
    } else if id < 0x0800_0200 {
        PibScope::Plc
    } else {
        PibScope::Rf
    }
}
