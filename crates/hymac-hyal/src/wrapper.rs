//! The hybrid access layer itself.
//!
//! [`HybridMac`] owns the two medium MAC engines and everything needed to
//! present them as one logical MAC: the transmit ledger, the duplicate
//! filter, the shared PIB store and the per-operation dual-confirm state.
//! All processing runs in the owner's cooperative task context; requests
//! never block, and every asynchronous outcome is handled when the owning
//! task drains the media in [`HybridMac::tasks`].

use tracing::{debug, error, info, warn};

use hymac_core::params::{
    DataConfirmParams, DataIndicationParams, DataRequestParams, ResetRequestParams,
    ScanRequestParams, StartRequestParams,
};
use hymac_core::pib::{PibAttribute, PibValue};
use hymac_core::status::MacStatus;
use hymac_core::types::{Address, ConfirmMedia, MediaPolicy, Medium};
use hymac_medium::{MacEvent, MediumMac, MediumStatus};

use crate::common::CommonPib;
use crate::config::HyalConfig;
use crate::dedup::DuplicateFilter;
use crate::handlers::{
    BeaconNotify, CommStatus, DataConfirm, DataIndication, Handlers, SnifferIndication,
};
use crate::ledger::{PendingTransmit, TransmitLedger};
use crate::pib::{classify, PibScope};
use crate::probing;

/// Lifecycle state of the access layer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ModuleState {
    /// A medium MAC is missing its own initialization.
    NotReady,
    /// Constructed; request operations are not accepted yet.
    Idle,
    /// Fully operational.
    Open,
}

/// Aggregated status of the two medium MACs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ModuleStatus {
    Uninitialized,
    Busy,
    Ready,
    Error,
}

/// Which media are currently usable.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AvailableMedia {
    Neither,
    PlcOnly,
    RfOnly,
    Both,
}

/// Dual-confirm state of one singleton operation (reset, scan or start).
#[derive(Clone, Copy, Debug)]
struct SingletonOp {
    first_confirm_status: MacStatus,
    awaiting_second_confirm: bool,
    in_progress: bool,
    started_at_ms: u64,
}

impl SingletonOp {
    fn idle() -> Self {
        SingletonOp {
            first_confirm_status: MacStatus::Success,
            awaiting_second_confirm: false,
            in_progress: false,
            started_at_ms: 0,
        }
    }

    fn begin(&mut self, now_ms: u64) {
        *self = SingletonOp {
            in_progress: true,
            started_at_ms: now_ms,
            ..SingletonOp::idle()
        };
    }
}

/// How the two statuses of a dual-medium operation combine.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Aggregation {
    /// Success if either leg succeeded (data on both media, scan).
    EitherSuccess,
    /// Success only if both legs succeeded; the first failure wins
    /// (reset, start).
    BothSuccess,
}

fn aggregate(rule: Aggregation, first: MacStatus, second: MacStatus) -> MacStatus {
    match rule {
        Aggregation::EitherSuccess => {
            if first.is_success() || second.is_success() {
                MacStatus::Success
            } else {
                second
            }
        }
        Aggregation::BothSuccess => {
            if first.is_success() && second.is_success() {
                MacStatus::Success
            } else if !first.is_success() {
                first
            } else {
                second
            }
        }
    }
}

/// Media tag used on synchronously reported request errors.
fn error_tag(policy: MediaPolicy) -> ConfirmMedia {
    match policy {
        MediaPolicy::Both => ConfirmMedia::Both,
        _ => ConfirmMedia::direct(policy.primary()),
    }
}

/// The hybrid MAC access layer over one PLC and one RF medium MAC.
pub struct HybridMac<P: MediumMac, R: MediumMac> {
    state: ModuleState,
    config: HyalConfig,
    plc: P,
    rf: R,
    common: CommonPib,
    ledger: TransmitLedger,
    dedup: DuplicateFilter,
    reset_op: SingletonOp,
    scan_op: SingletonOp,
    start_op: SingletonOp,
    /// Set while a probe resend is outstanding on the backup medium.
    media_probing: bool,
    handlers: Handlers,
    /// Task-clock time of the latest `tasks` call, in milliseconds.
    now_ms: u64,
}

impl<P: MediumMac, R: MediumMac> HybridMac<P, R> {
    pub fn new(config: HyalConfig, plc: P, rf: R) -> Self {
        let ledger = TransmitLedger::new(config.ledger_capacity);
        let dedup = DuplicateFilter::new(config.dedup_capacity);
        HybridMac {
            state: ModuleState::Idle,
            config,
            plc,
            rf,
            common: CommonPib::new(),
            ledger,
            dedup,
            reset_op: SingletonOp::idle(),
            scan_op: SingletonOp::idle(),
            start_op: SingletonOp::idle(),
            media_probing: false,
            handlers: Handlers::new(),
            now_ms: 0,
        }
    }

    /// Register the upward callbacks.
    pub fn set_handlers(&mut self, handlers: Handlers) {
        self.handlers = handlers;
    }

    /// Mutable access to the upward callbacks.
    pub fn handlers_mut(&mut self) -> &mut Handlers {
        &mut self.handlers
    }

    /// Open the access layer once both medium MACs carry their own
    /// initialization. Clears all correlation state.
    pub fn open(&mut self) -> Result<(), MacStatus> {
        if self.plc.status() == MediumStatus::Uninitialized
            || self.rf.status() == MediumStatus::Uninitialized
        {
            self.state = ModuleState::NotReady;
            return Err(MacStatus::Denied);
        }

        self.reset_op = SingletonOp::idle();
        self.scan_op = SingletonOp::idle();
        self.start_op = SingletonOp::idle();
        self.media_probing = false;
        self.dedup.clear();
        self.state = ModuleState::Open;
        info!("hybrid access layer open");
        Ok(())
    }

    pub fn state(&self) -> ModuleState {
        self.state
    }

    /// Aggregated status of the two medium MACs.
    pub fn status(&self) -> ModuleStatus {
        let plc = self.plc.status();
        let rf = self.rf.status();
        if plc == MediumStatus::Uninitialized || rf == MediumStatus::Uninitialized {
            ModuleStatus::Uninitialized
        } else if plc == MediumStatus::Busy || rf == MediumStatus::Busy {
            ModuleStatus::Busy
        } else if plc == MediumStatus::Ready || rf == MediumStatus::Ready {
            ModuleStatus::Ready
        } else {
            ModuleStatus::Error
        }
    }

    /// Which media are currently usable for transmission.
    pub fn available_media(&self) -> AvailableMedia {
        let plc = self.plc.status() == MediumStatus::Ready;
        let rf = self.rf.status() == MediumStatus::Ready;
        match (plc, rf) {
            (true, true) => AvailableMedia::Both,
            (true, false) => AvailableMedia::PlcOnly,
            (false, true) => AvailableMedia::RfOnly,
            (false, false) => AvailableMedia::Neither,
        }
    }

    /// Shared attribute store.
    pub fn common_pib(&self) -> &CommonPib {
        &self.common
    }

    /// The PLC medium MAC.
    pub fn plc(&self) -> &P {
        &self.plc
    }

    /// Mutable access to the PLC medium MAC.
    pub fn plc_mut(&mut self) -> &mut P {
        &mut self.plc
    }

    /// The RF medium MAC.
    pub fn rf(&self) -> &R {
        &self.rf
    }

    /// Mutable access to the RF medium MAC.
    pub fn rf_mut(&mut self) -> &mut R {
        &mut self.rf
    }

    /// Drive both medium MACs and process everything they produced.
    ///
    /// `now_ms` is the caller's monotonic task clock; it stamps accepted
    /// requests and bounds the wait for second confirmations.
    pub fn tasks(&mut self, now_ms: u64) {
        self.now_ms = now_ms;

        for event in self.plc.poll() {
            self.process_event(Medium::Plc, event);
        }
        for event in self.rf.poll() {
            self.process_event(Medium::Rf, event);
        }

        self.expire_stalled_waits(now_ms);
    }

    // ---- Requests ------------------------------------------------------

    /// Submit a data request, dispatched per its media policy.
    ///
    /// Caller errors (layer not open, ledger full) are reported
    /// synchronously through the data-confirm handler with a zero
    /// timestamp; no ledger slot is consumed.
    pub fn data_request(&mut self, params: DataRequestParams) {
        let handle = params.msdu_handle;
        let policy = params.media_policy;

        if self.state != ModuleState::Open {
            self.emit_data_confirm(DataConfirm {
                msdu_handle: handle,
                status: MacStatus::InvalidHandle,
                timestamp: 0,
                media: error_tag(policy),
            });
            return;
        }

        debug!(
            handle,
            policy = ?policy,
            len = params.msdu.len(),
            dest = ?params.dest_address,
            "data request"
        );

        // Keep a private copy of the MSDU: the caller's buffer is only
        // valid for this call, while a backup resend happens later.
        let has_payload_copy = params.msdu.len() <= self.config.payload_copy_limit;
        let mut stored = params.clone();
        if !has_payload_copy {
            stored.msdu = Vec::new();
        }

        let entry = PendingTransmit {
            params: stored,
            has_payload_copy,
            policy,
            probing_interval_mins: params.probing_interval_mins,
            first_confirm_status: MacStatus::Success,
            awaiting_second_confirm: false,
            submitted_at_ms: self.now_ms,
        };

        if self.ledger.insert(entry).is_err() {
            warn!(handle, "transmit ledger full, refusing data request");
            self.emit_data_confirm(DataConfirm {
                msdu_handle: handle,
                status: MacStatus::QueueFull,
                timestamp: 0,
                media: error_tag(policy),
            });
            return;
        }

        match policy {
            MediaPolicy::PlcPreferredRfBackup | MediaPolicy::PlcOnly => {
                self.plc.data_request(params);
            }
            MediaPolicy::RfPreferredPlcBackup | MediaPolicy::RfOnly => {
                self.rf.data_request(params);
            }
            MediaPolicy::Both => {
                self.plc.data_request(params.clone());
                self.rf.data_request(params);
            }
        }
    }

    /// Reset both medium MACs; one aggregated confirm is reported.
    pub fn reset_request(&mut self, params: ResetRequestParams) {
        if self.state != ModuleState::Open {
            self.emit_reset_confirm(MacStatus::InvalidHandle);
            return;
        }
        if self.reset_op.in_progress {
            self.emit_reset_confirm(MacStatus::Denied);
            return;
        }

        debug!(set_default_pib = params.set_default_pib, "reset request");
        self.reset_op.begin(self.now_ms);
        self.plc.reset_request(params);
        self.rf.reset_request(params);
        if params.set_default_pib {
            self.common.reset();
        }
    }

    /// Scan on both media; one aggregated confirm is reported.
    pub fn scan_request(&mut self, params: ScanRequestParams) {
        if self.state != ModuleState::Open {
            self.emit_scan_confirm(MacStatus::InvalidHandle);
            return;
        }
        if self.scan_op.in_progress {
            self.emit_scan_confirm(MacStatus::Denied);
            return;
        }

        debug!(duration = params.scan_duration_secs, "scan request");
        self.scan_op.begin(self.now_ms);
        self.plc.scan_request(params);
        self.rf.scan_request(params);
    }

    /// Start a network on both media; one aggregated confirm is reported.
    pub fn start_request(&mut self, params: StartRequestParams) {
        if self.state != ModuleState::Open {
            self.emit_start_confirm(MacStatus::InvalidHandle);
            return;
        }
        if self.start_op.in_progress {
            self.emit_start_confirm(MacStatus::Denied);
            return;
        }

        debug!(pan_id = %params.pan_id, "start request");
        self.start_op.begin(self.now_ms);
        self.plc.start_request(params);
        self.rf.start_request(params);
    }

    /// Synchronously read a PIB attribute from its owning store.
    pub fn get_request_sync(
        &self,
        attribute: PibAttribute,
        index: u16,
    ) -> Result<PibValue, MacStatus> {
        if self.state != ModuleState::Open {
            return Err(MacStatus::InvalidHandle);
        }
        debug!(%attribute, index, "PIB get");
        match classify(attribute) {
            PibScope::Common => self.common.get(attribute, index),
            PibScope::Plc => self.plc.get_request_sync(attribute, index),
            PibScope::Rf => self.rf.get_request_sync(attribute, index),
        }
    }

    /// Synchronously write a PIB attribute to its owning store.
    pub fn set_request_sync(
        &mut self,
        attribute: PibAttribute,
        index: u16,
        value: &PibValue,
    ) -> MacStatus {
        if self.state != ModuleState::Open {
            return MacStatus::InvalidHandle;
        }
        debug!(%attribute, index, "PIB set");
        match classify(attribute) {
            PibScope::Common => self.common.set(attribute, index, value),
            PibScope::Plc => self.plc.set_request_sync(attribute, index, value),
            PibScope::Rf => self.rf.set_request_sync(attribute, index, value),
        }
    }

    // ---- Event processing ----------------------------------------------

    fn process_event(&mut self, medium: Medium, event: MacEvent) {
        match event {
            MacEvent::DataConfirm(confirm) => self.on_data_confirm(medium, confirm),
            MacEvent::DataIndication(params) => self.on_data_indication(medium, params),
            MacEvent::ResetConfirm { status } => self.on_reset_confirm(medium, status),
            MacEvent::ScanConfirm { status } => self.on_scan_confirm(medium, status),
            MacEvent::StartConfirm { status } => self.on_start_confirm(medium, status),
            MacEvent::BeaconNotify { pan_descriptor } => {
                self.emit_beacon_notify(BeaconNotify {
                    pan_descriptor,
                    medium,
                });
            }
            MacEvent::CommStatus(params) => {
                self.emit_comm_status(CommStatus { params, medium });
            }
            MacEvent::Sniffer(frame) => {
                self.emit_sniffer(SnifferIndication { frame, medium });
            }
        }
    }

    fn on_data_confirm(&mut self, medium: Medium, confirm: DataConfirmParams) {
        debug!(
            handle = confirm.msdu_handle,
            %medium,
            status = %confirm.status,
            "data confirm"
        );

        let Some(index) = self.ledger.position_by_handle(confirm.msdu_handle) else {
            warn!(
                handle = confirm.msdu_handle,
                %medium,
                "data confirm does not match any pending request, dropping"
            );
            return;
        };

        let Some(entry) = self.ledger.get(index) else {
            return;
        };
        let policy = entry.policy;

        match (policy, medium) {
            (MediaPolicy::PlcOnly, Medium::Plc) | (MediaPolicy::RfOnly, Medium::Rf) => {
                self.finish_data_request(
                    index,
                    confirm.status,
                    confirm.timestamp,
                    ConfirmMedia::direct(medium),
                );
            }
            (MediaPolicy::PlcOnly, Medium::Rf) | (MediaPolicy::RfOnly, Medium::Plc) => {
                // The request was never dispatched to this medium. Drop the
                // entry without confirming; the engine broke its contract.
                self.ledger.release(index);
                error!(
                    handle = confirm.msdu_handle,
                    %medium,
                    "confirm from a medium the request was never dispatched to"
                );
            }
            (MediaPolicy::PlcPreferredRfBackup, Medium::Plc) => {
                self.on_primary_confirm(index, Medium::Plc, confirm);
            }
            (MediaPolicy::RfPreferredPlcBackup, Medium::Rf) => {
                self.on_primary_confirm(index, Medium::Rf, confirm);
            }
            (MediaPolicy::PlcPreferredRfBackup, Medium::Rf) => {
                self.on_secondary_confirm(index, Medium::Plc, confirm);
            }
            (MediaPolicy::RfPreferredPlcBackup, Medium::Plc) => {
                self.on_secondary_confirm(index, Medium::Rf, confirm);
            }
            (MediaPolicy::Both, _) => self.on_dual_confirm(index, confirm),
        }
    }

    /// Confirm from the preferred medium of a backup-capable request.
    fn on_primary_confirm(&mut self, index: usize, primary: Medium, confirm: DataConfirmParams) {
        let Some(entry) = self.ledger.get(index) else {
            return;
        };
        let dest = entry.params.dest_address;
        let interval = entry.probing_interval_mins;
        let has_copy = entry.has_payload_copy;
        let backup = primary.other();

        if confirm.status.is_success() {
            let probe = has_copy
                && match backup {
                    Medium::Rf => probing::rf_probing_due(interval, &dest, &self.rf, &self.common),
                    Medium::Plc => probing::plc_probing_due(interval, &dest, &mut self.plc),
                };
            if probe {
                info!(%backup, dest = ?dest, "probing backup medium after successful delivery");
                self.media_probing = true;
                self.resend_on(index, backup);
            } else {
                self.media_probing = false;
                self.finish_data_request(
                    index,
                    confirm.status,
                    confirm.timestamp,
                    ConfirmMedia::direct(primary),
                );
            }
            return;
        }

        // Primary failed: fail over when the destination is reachable on
        // the backup medium.
        let allowed = has_copy
            && match dest {
                Address::Extended(_) => {
                    info!("extended destination always allows the backup medium");
                    true
                }
                Address::Short(short) => {
                    let found = match backup {
                        Medium::Rf => self
                            .rf
                            .get_request_sync(PibAttribute::MANUF_POS_TABLE_ELEMENT_RF, short.0)
                            .is_ok(),
                        Medium::Plc => self
                            .plc
                            .get_request_sync(PibAttribute::MANUF_POS_TABLE_ELEMENT, short.0)
                            .is_ok(),
                    };
                    if !found {
                        info!(dest = %short, %backup, "no POS entry on backup medium");
                    }
                    found
                }
            };

        if allowed {
            info!(%backup, status = %confirm.status, "retrying on backup medium");
            self.resend_on(index, backup);
        } else {
            self.finish_data_request(
                index,
                confirm.status,
                confirm.timestamp,
                ConfirmMedia::direct(primary),
            );
        }
    }

    /// Confirm from the backup medium of a backup-capable request: either
    /// the tail of a probe or the failover retry.
    fn on_secondary_confirm(&mut self, index: usize, primary: Medium, confirm: DataConfirmParams) {
        if self.media_probing {
            // The preferred medium already delivered; the probe outcome
            // only refines the reported tag.
            self.media_probing = false;
            let media = if confirm.status.is_success() {
                ConfirmMedia::direct(primary)
            } else {
                ConfirmMedia::as_backup(primary)
            };
            self.finish_data_request(index, MacStatus::Success, confirm.timestamp, media);
        } else {
            self.finish_data_request(
                index,
                confirm.status,
                confirm.timestamp,
                ConfirmMedia::as_backup(primary.other()),
            );
        }
    }

    /// Confirm for a request dispatched on both media at once.
    fn on_dual_confirm(&mut self, index: usize, confirm: DataConfirmParams) {
        let Some(entry) = self.ledger.get_mut(index) else {
            return;
        };
        if entry.awaiting_second_confirm {
            let status = aggregate(
                Aggregation::EitherSuccess,
                entry.first_confirm_status,
                confirm.status,
            );
            self.finish_data_request(index, status, confirm.timestamp, ConfirmMedia::Both);
        } else {
            entry.first_confirm_status = confirm.status;
            entry.awaiting_second_confirm = true;
        }
    }

    /// Re-send the private payload copy on the given medium.
    fn resend_on(&mut self, index: usize, medium: Medium) {
        let Some(entry) = self.ledger.get(index) else {
            return;
        };
        let params = entry.params.clone();
        match medium {
            Medium::Plc => self.plc.data_request(params),
            Medium::Rf => self.rf.data_request(params),
        }
    }

    /// Release the ledger slot and report the single upward confirm, in
    /// that order and in the same step: a new request may claim the slot
    /// from inside the callback.
    fn finish_data_request(
        &mut self,
        index: usize,
        status: MacStatus,
        timestamp: u32,
        media: ConfirmMedia,
    ) {
        let Some(entry) = self.ledger.release(index) else {
            return;
        };
        self.emit_data_confirm(DataConfirm {
            msdu_handle: entry.params.msdu_handle,
            status,
            timestamp,
            media,
        });
    }

    fn on_data_indication(&mut self, medium: Medium, params: DataIndicationParams) {
        // Broadcast repeats are expected and never suppressed. The filter
        // fingerprints the short source address; frames from an extended
        // source bypass it.
        if !params.dest_address.is_broadcast() {
            if let Some(src) = params.src_address.short() {
                if self.dedup.check_and_record(src, &params.msdu, medium) {
                    info!(
                        src = %src,
                        %medium,
                        "frame already received on the other medium, dropping"
                    );
                    return;
                }
            }
        }

        self.emit_data_indication(DataIndication { params, medium });
    }

    fn on_reset_confirm(&mut self, medium: Medium, status: MacStatus) {
        debug!(%medium, %status, "reset confirm");
        if !self.reset_op.in_progress {
            warn!(%medium, "reset confirm without a reset in progress, dropping");
            return;
        }
        if self.reset_op.awaiting_second_confirm {
            let final_status = aggregate(
                Aggregation::BothSuccess,
                self.reset_op.first_confirm_status,
                status,
            );
            self.reset_op = SingletonOp::idle();
            self.emit_reset_confirm(final_status);
        } else {
            self.reset_op.first_confirm_status = status;
            self.reset_op.awaiting_second_confirm = true;
        }
    }

    fn on_scan_confirm(&mut self, medium: Medium, status: MacStatus) {
        debug!(%medium, %status, "scan confirm");
        if !self.scan_op.in_progress {
            warn!(%medium, "scan confirm without a scan in progress, dropping");
            return;
        }
        if self.scan_op.awaiting_second_confirm {
            let final_status = aggregate(
                Aggregation::EitherSuccess,
                self.scan_op.first_confirm_status,
                status,
            );
            self.scan_op = SingletonOp::idle();
            self.emit_scan_confirm(final_status);
        } else {
            self.scan_op.first_confirm_status = status;
            self.scan_op.awaiting_second_confirm = true;
        }
    }

    fn on_start_confirm(&mut self, medium: Medium, status: MacStatus) {
        debug!(%medium, %status, "start confirm");
        if !self.start_op.in_progress {
            warn!(%medium, "start confirm without a start in progress, dropping");
            return;
        }
        if self.start_op.awaiting_second_confirm {
            let final_status = aggregate(
                Aggregation::BothSuccess,
                self.start_op.first_confirm_status,
                status,
            );
            self.start_op = SingletonOp::idle();
            self.emit_start_confirm(final_status);
        } else {
            self.start_op.first_confirm_status = status;
            self.start_op.awaiting_second_confirm = true;
        }
    }

    /// Force-resolve dual-medium waits whose second confirmation is
    /// overdue, so a silent medium cannot leak a ledger slot or wedge a
    /// singleton operation forever.
    fn expire_stalled_waits(&mut self, now_ms: u64) {
        let Some(timeout) = self.config.dual_confirm_timeout_ms else {
            return;
        };
        let Some(deadline) = now_ms.checked_sub(timeout) else {
            return;
        };

        for index in self.ledger.awaiting_second_since(deadline) {
            let Some(entry) = self.ledger.get(index) else {
                continue;
            };
            let first = entry.first_confirm_status;
            warn!(
                handle = entry.params.msdu_handle,
                "second data confirm overdue, resolving with first status"
            );
            self.finish_data_request(index, first, 0, ConfirmMedia::Both);
        }

        if Self::op_overdue(&self.reset_op, deadline) {
            let first = self.reset_op.first_confirm_status;
            self.reset_op = SingletonOp::idle();
            warn!("second reset confirm overdue, resolving with first status");
            self.emit_reset_confirm(first);
        }
        if Self::op_overdue(&self.scan_op, deadline) {
            let first = self.scan_op.first_confirm_status;
            self.scan_op = SingletonOp::idle();
            warn!("second scan confirm overdue, resolving with first status");
            self.emit_scan_confirm(first);
        }
        if Self::op_overdue(&self.start_op, deadline) {
            let first = self.start_op.first_confirm_status;
            self.start_op = SingletonOp::idle();
            warn!("second start confirm overdue, resolving with first status");
            self.emit_start_confirm(first);
        }
    }

    fn op_overdue(op: &SingletonOp, deadline: u64) -> bool {
        op.in_progress && op.awaiting_second_confirm && op.started_at_ms <= deadline
    }

    // ---- Upward dispatch -----------------------------------------------

    fn emit_data_confirm(&mut self, confirm: DataConfirm) {
        debug!(
            handle = confirm.msdu_handle,
            status = %confirm.status,
            media = ?confirm.media,
            "data confirm up"
        );
        if let Some(callback) = self.handlers.data_confirm.as_mut() {
            callback(&confirm);
        }
    }

    fn emit_data_indication(&mut self, indication: DataIndication) {
        if let Some(callback) = self.handlers.data_indication.as_mut() {
            callback(&indication);
        }
    }

    fn emit_reset_confirm(&mut self, status: MacStatus) {
        if let Some(callback) = self.handlers.reset_confirm.as_mut() {
            callback(status);
        }
    }

    fn emit_scan_confirm(&mut self, status: MacStatus) {
        if let Some(callback) = self.handlers.scan_confirm.as_mut() {
            callback(status);
        }
    }

    fn emit_start_confirm(&mut self, status: MacStatus) {
        if let Some(callback) = self.handlers.start_confirm.as_mut() {
            callback(status);
        }
    }

    fn emit_beacon_notify(&mut self, notify: BeaconNotify) {
        if let Some(callback) = self.handlers.beacon_notify.as_mut() {
            callback(&notify);
        }
    }

    fn emit_comm_status(&mut self, comm_status: CommStatus) {
        if let Some(callback) = self.handlers.comm_status.as_mut() {
            callback(&comm_status);
        }
    }

    fn emit_sniffer(&mut self, indication: SnifferIndication) {
        if let Some(callback) = self.handlers.sniffer_indication.as_mut() {
            callback(&indication);
        }
    }
}
