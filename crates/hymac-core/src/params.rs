//! Parameter structures for the MAC service primitives.
//!
//! These are the argument bundles exchanged across the MAC boundary in both
//! directions: requests flowing down into a medium MAC and the
//! confirm/indication payloads it produces. The access layer adds its media
//! tags on top of these when forwarding upward.

extern crate alloc;
use alloc::vec::Vec;

use crate::status::MacStatus;
use crate::types::{
    Address, AddressMode, MediaPolicy, PanId, QualityOfService, SecurityLevel, ShortAddress,
};

/// Parameters of a data transmission request.
#[derive(Clone, Debug)]
pub struct DataRequestParams {
    pub src_addr_mode: AddressMode,
    pub dest_pan_id: PanId,
    pub dest_address: Address,
    /// The MSDU to transmit. Only valid for the duration of the request
    /// call; the access layer keeps its own copy for any later resend.
    pub msdu: Vec<u8>,
    /// Caller-chosen handle correlating the eventual confirm.
    pub msdu_handle: u8,
    pub ack_request: bool,
    pub security_level: SecurityLevel,
    pub key_index: u8,
    pub quality_of_service: QualityOfService,
    /// Media selection policy, interpreted by the access layer only.
    pub media_policy: MediaPolicy,
    /// Backup-medium probing interval in minutes; 0 disables probing.
    pub probing_interval_mins: u8,
}

impl DataRequestParams {
    /// A unicast request with default transmission options.
    pub fn unicast(dest_pan_id: PanId, dest_address: Address, msdu: Vec<u8>, handle: u8) -> Self {
        DataRequestParams {
            src_addr_mode: AddressMode::Short,
            dest_pan_id,
            dest_address,
            msdu,
            msdu_handle: handle,
            ack_request: true,
            security_level: SecurityLevel::None,
            key_index: 0,
            quality_of_service: QualityOfService::Normal,
            media_policy: MediaPolicy::default(),
            probing_interval_mins: 0,
        }
    }
}

/// Confirm produced by a medium MAC for a data request.
#[derive(Clone, Copy, Debug)]
pub struct DataConfirmParams {
    pub msdu_handle: u8,
    pub status: MacStatus,
    /// Transmission timestamp in symbol time, as reported by the medium.
    pub timestamp: u32,
}

/// Indication produced by a medium MAC for a received frame.
#[derive(Clone, Debug)]
pub struct DataIndicationParams {
    pub src_pan_id: PanId,
    pub src_address: Address,
    pub dest_pan_id: PanId,
    pub dest_address: Address,
    pub msdu: Vec<u8>,
    pub link_quality: u8,
    pub dsn: u8,
    pub timestamp: u32,
    pub security_level: SecurityLevel,
    pub key_index: u8,
    pub quality_of_service: QualityOfService,
}

/// Parameters of a MAC reset request.
#[derive(Clone, Copy, Debug)]
pub struct ResetRequestParams {
    /// Also restore the PIB to its default values.
    pub set_default_pib: bool,
}

/// Parameters of a network scan request.
#[derive(Clone, Copy, Debug)]
pub struct ScanRequestParams {
    pub scan_duration_secs: u16,
}

/// Parameters of a network start request.
#[derive(Clone, Copy, Debug)]
pub struct StartRequestParams {
    pub pan_id: PanId,
}

/// Description of a PAN heard during a scan.
#[derive(Clone, Copy, Debug)]
pub struct PanDescriptor {
    pub pan_id: PanId,
    pub link_quality: u8,
    /// Address of the beacon originator (the LBA candidate).
    pub lba_address: ShortAddress,
    /// Route cost to the PAN coordinator.
    pub rc_coord: u16,
}

/// Communication status event reported by a medium MAC.
#[derive(Clone, Copy, Debug)]
pub struct CommStatusParams {
    pub pan_id: PanId,
    pub src_address: Address,
    pub dest_address: Address,
    pub status: MacStatus,
    pub security_level: SecurityLevel,
    pub key_index: u8,
}

/// A frame captured by the medium MAC sniffer tap.
#[derive(Clone, Debug)]
pub struct SnifferFrame {
    pub frame_type: u8,
    pub msdu: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Medium;

    #[test]
    fn unicast_constructor_defaults() {
        let params = DataRequestParams::unicast(
            PanId(0x1234),
            Address::Short(ShortAddress(0x0002)),
            [1, 2, 3].to_vec(),
            7,
        );
        assert_eq!(params.msdu_handle, 7);
        assert!(params.ack_request);
        assert_eq!(params.media_policy, MediaPolicy::PlcOnly);
        assert_eq!(params.media_policy.primary(), Medium::Plc);
        assert_eq!(params.probing_interval_mins, 0);
        assert_eq!(params.security_level, SecurityLevel::None);
    }
}
