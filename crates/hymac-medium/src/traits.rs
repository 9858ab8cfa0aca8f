//! Core medium MAC trait and event types.

use hymac_core::params::{
    CommStatusParams, DataConfirmParams, DataIndicationParams, DataRequestParams, PanDescriptor,
    ResetRequestParams, ScanRequestParams, SnifferFrame, StartRequestParams,
};
use hymac_core::pib::{PibAttribute, PibValue};
use hymac_core::status::MacStatus;
use hymac_core::types::Medium;

/// Lifecycle state reported by a medium MAC.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MediumStatus {
    Uninitialized,
    Busy,
    Ready,
    Error,
}

/// Trait implemented by each medium-specific MAC engine (PLC, RF).
///
/// Engines are driven cooperatively: requests are accepted synchronously and
/// never block, and all asynchronous outcomes are surfaced as [`MacEvent`]s
/// drained by [`MediumMac::poll`] from the owner's periodic task call. An
/// engine must eventually produce exactly one confirm event per accepted
/// request primitive.
pub trait MediumMac {
    /// The physical transport this engine drives.
    fn medium(&self) -> Medium;

    /// Current lifecycle state of the engine.
    fn status(&self) -> MediumStatus;

    /// Submit a frame for transmission. The eventual outcome arrives as a
    /// [`MacEvent::DataConfirm`] carrying the request's MSDU handle.
    fn data_request(&mut self, params: DataRequestParams);

    /// Reset the engine, optionally restoring its PIB defaults.
    fn reset_request(&mut self, params: ResetRequestParams);

    /// Scan for networks on this medium.
    fn scan_request(&mut self, params: ScanRequestParams);

    /// Start a network on this medium.
    fn start_request(&mut self, params: StartRequestParams);

    /// Synchronously read a PIB attribute owned by this engine.
    fn get_request_sync(&self, attribute: PibAttribute, index: u16)
        -> Result<PibValue, MacStatus>;

    /// Synchronously write a PIB attribute owned by this engine.
    fn set_request_sync(&mut self, attribute: PibAttribute, index: u16, value: &PibValue)
        -> MacStatus;

    /// Run the engine's internal state machines and drain the events they
    /// produced since the last poll, in production order.
    fn poll(&mut self) -> Vec<MacEvent>;
}

/// An asynchronous event produced by a medium MAC.
#[derive(Clone, Debug)]
pub enum MacEvent {
    DataConfirm(DataConfirmParams),
    DataIndication(DataIndicationParams),
    ResetConfirm { status: MacStatus },
    ScanConfirm { status: MacStatus },
    StartConfirm { status: MacStatus },
    BeaconNotify { pan_descriptor: PanDescriptor },
    CommStatus(CommStatusParams),
    Sniffer(SnifferFrame),
}
