//! Upward event types and handler registration.
//!
//! The access layer reports upward through optional callbacks. An
//! unregistered callback means the corresponding event is dropped, which is
//! deliberate: the adaptation layer only registers for the events it
//! consumes.

use hymac_core::params::{CommStatusParams, DataIndicationParams, PanDescriptor, SnifferFrame};
use hymac_core::status::MacStatus;
use hymac_core::types::{ConfirmMedia, Medium};

/// Aggregated transmission confirm reported to the upper layer.
#[derive(Clone, Copy, Debug)]
pub struct DataConfirm {
    pub msdu_handle: u8,
    pub status: MacStatus,
    pub timestamp: u32,
    /// How the frame was (or was not) delivered.
    pub media: ConfirmMedia,
}

/// Received frame reported to the upper layer.
#[derive(Clone, Debug)]
pub struct DataIndication {
    pub params: DataIndicationParams,
    /// Medium the surviving copy of the frame arrived on.
    pub medium: Medium,
}

/// Beacon heard during a scan, tagged with its medium.
#[derive(Clone, Copy, Debug)]
pub struct BeaconNotify {
    pub pan_descriptor: PanDescriptor,
    pub medium: Medium,
}

/// Communication status event, tagged with its medium.
#[derive(Clone, Copy, Debug)]
pub struct CommStatus {
    pub params: CommStatusParams,
    pub medium: Medium,
}

/// Sniffer tap frame, tagged with its medium.
#[derive(Clone, Debug)]
pub struct SnifferIndication {
    pub frame: SnifferFrame,
    pub medium: Medium,
}

/// Upward callback registrations. Every callback is optional.
#[derive(Default)]
pub struct Handlers {
    pub data_confirm: Option<Box<dyn FnMut(&DataConfirm)>>,
    pub data_indication: Option<Box<dyn FnMut(&DataIndication)>>,
    pub reset_confirm: Option<Box<dyn FnMut(MacStatus)>>,
    pub scan_confirm: Option<Box<dyn FnMut(MacStatus)>>,
    pub start_confirm: Option<Box<dyn FnMut(MacStatus)>>,
    pub beacon_notify: Option<Box<dyn FnMut(&BeaconNotify)>>,
    pub comm_status: Option<Box<dyn FnMut(&CommStatus)>>,
    pub sniffer_indication: Option<Box<dyn FnMut(&SnifferIndication)>>,
}

impl Handlers {
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for Handlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handlers")
            .field("data_confirm", &self.data_confirm.is_some())
            .field("data_indication", &self.data_indication.is_some())
            .field("reset_confirm", &self.reset_confirm.is_some())
            .field("scan_confirm", &self.scan_confirm.is_some())
            .field("start_confirm", &self.start_confirm.is_some())
            .field("beacon_notify", &self.beacon_notify.is_some())
            .field("comm_status", &self.comm_status.is_some())
            .field("sniffer_indication", &self.sniffer_indication.is_some())
            .finish()
    }
}
