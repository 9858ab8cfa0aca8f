//! Core types for the hybrid PLC/RF G3 MAC stack.
//!
//! This crate defines the shared vocabulary of the stack: addressing,
//! MAC status codes, media selection enums, the request/confirm/indication
//! parameter structures exchanged across the MAC service boundary, PIB
//! attribute identifiers with their table-entry encodings, and the CRC
//! used for received-frame fingerprints.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod crc;
pub mod error;
pub mod params;
pub mod pib;
pub mod status;
pub mod types;

pub use error::CodecError;
pub use params::{
    CommStatusParams, DataConfirmParams, DataIndicationParams, DataRequestParams, PanDescriptor,
    ResetRequestParams, ScanRequestParams, SnifferFrame, StartRequestParams,
};
pub use pib::{NeighbourEntry, PibAttribute, PibValue, PlcPosEntry, RfPosEntry};
pub use status::MacStatus;
pub use types::{
    Address, AddressMode, ConfirmMedia, ExtendedAddress, MediaPolicy, Medium, PanId,
    QualityOfService, SecurityLevel, ShortAddress,
};
