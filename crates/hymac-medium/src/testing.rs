//! Scripted mock medium for exercising the access layer.
//!
//! The mock records every request it receives and produces events according
//! to a small script: data requests are answered with queued or default
//! confirm statuses, control requests (reset/scan/start) confirm with a
//! configurable status, and arbitrary events can be injected for the next
//! poll. PIB reads are served from an in-memory table so tests can stand up
//! POS/neighbour entries without a real MAC engine.

use std::collections::{HashMap, VecDeque};

use hymac_core::params::{
    DataConfirmParams, DataIndicationParams, DataRequestParams, ResetRequestParams,
    ScanRequestParams, StartRequestParams,
};
use hymac_core::pib::{PibAttribute, PibValue};
use hymac_core::status::MacStatus;
use hymac_core::types::{Address, Medium, PanId, QualityOfService, SecurityLevel};

use crate::traits::{MacEvent, MediumMac, MediumStatus};

/// A scripted [`MediumMac`] implementation.
pub struct MockMedium {
    medium: Medium,
    status: MediumStatus,
    pending: VecDeque<MacEvent>,
    scripted_data_statuses: VecDeque<MacStatus>,
    default_data_status: Option<MacStatus>,
    control_status: Option<MacStatus>,
    pib: HashMap<(u32, u16), PibValue>,
    next_timestamp: u32,

    /// Every data request accepted, in order.
    pub data_requests: Vec<DataRequestParams>,
    /// Every reset request accepted, in order.
    pub reset_requests: Vec<ResetRequestParams>,
    /// Every scan request accepted, in order.
    pub scan_requests: Vec<ScanRequestParams>,
    /// Every start request accepted, in order.
    pub start_requests: Vec<StartRequestParams>,
    /// Every synchronous PIB write, in order.
    pub pib_sets: Vec<(PibAttribute, u16, PibValue)>,
}

impl MockMedium {
    /// A ready mock that confirms every primitive with SUCCESS.
    pub fn new(medium: Medium) -> Self {
        MockMedium {
            medium,
            status: MediumStatus::Ready,
            pending: VecDeque::new(),
            scripted_data_statuses: VecDeque::new(),
            default_data_status: Some(MacStatus::Success),
            control_status: Some(MacStatus::Success),
            pib: HashMap::new(),
            next_timestamp: 1,
            data_requests: Vec::new(),
            reset_requests: Vec::new(),
            scan_requests: Vec::new(),
            start_requests: Vec::new(),
            pib_sets: Vec::new(),
        }
    }

    pub fn set_status(&mut self, status: MediumStatus) {
        self.status = status;
    }

    /// Queue a confirm status consumed by the next data request.
    pub fn queue_data_status(&mut self, status: MacStatus) {
        self.scripted_data_statuses.push_back(status);
    }

    /// Status used for data confirms when no scripted status is queued;
    /// `None` suppresses automatic data confirms entirely.
    pub fn set_default_data_status(&mut self, status: Option<MacStatus>) {
        self.default_data_status = status;
    }

    /// Status used for reset/scan/start confirms; `None` suppresses them.
    pub fn set_control_status(&mut self, status: Option<MacStatus>) {
        self.control_status = status;
    }

    /// Inject an arbitrary event, delivered by the next poll.
    pub fn push_event(&mut self, event: MacEvent) {
        self.pending.push_back(event);
    }

    /// Stand up a PIB entry served by `get_request_sync`.
    pub fn set_pib(&mut self, attribute: PibAttribute, index: u16, value: PibValue) {
        self.pib.insert((attribute.0, index), value);
    }

    /// Remove a PIB entry so lookups fail again.
    pub fn clear_pib(&mut self, attribute: PibAttribute, index: u16) {
        self.pib.remove(&(attribute.0, index));
    }
}

impl MediumMac for MockMedium {
    fn medium(&self) -> Medium {
        self.medium
    }

    fn status(&self) -> MediumStatus {
        self.status
    }

    fn data_request(&mut self, params: DataRequestParams) {
        let handle = params.msdu_handle;
        self.data_requests.push(params);
        let status = self
            .scripted_data_statuses
            .pop_front()
            .or(self.default_data_status);
        if let Some(status) = status {
            let timestamp = self.next_timestamp;
            self.next_timestamp += 1;
            self.pending.push_back(MacEvent::DataConfirm(DataConfirmParams {
                msdu_handle: handle,
                status,
                timestamp,
            }));
        }
    }

    fn reset_request(&mut self, params: ResetRequestParams) {
        self.reset_requests.push(params);
        if let Some(status) = self.control_status {
            self.pending.push_back(MacEvent::ResetConfirm { status });
        }
    }

    fn scan_request(&mut self, params: ScanRequestParams) {
        self.scan_requests.push(params);
        if let Some(status) = self.control_status {
            self.pending.push_back(MacEvent::ScanConfirm { status });
        }
    }

    fn start_request(&mut self, params: StartRequestParams) {
        self.start_requests.push(params);
        if let Some(status) = self.control_status {
            self.pending.push_back(MacEvent::StartConfirm { status });
        }
    }

    fn get_request_sync(
        &self,
        attribute: PibAttribute,
        index: u16,
    ) -> Result<PibValue, MacStatus> {
        match self.pib.get(&(attribute.0, index)) {
            Some(value) => Ok(value.clone()),
            None => Err(MacStatus::InvalidIndex),
        }
    }

    fn set_request_sync(
        &mut self,
        attribute: PibAttribute,
        index: u16,
        value: &PibValue,
    ) -> MacStatus {
        self.pib_sets.push((attribute, index, value.clone()));
        self.pib.insert((attribute.0, index), value.clone());
        MacStatus::Success
    }

    fn poll(&mut self) -> Vec<MacEvent> {
        self.pending.drain(..).collect()
    }
}

/// A unicast data indication with quiet defaults, for reception tests.
pub fn indication(src: Address, dest: Address, msdu: &[u8]) -> DataIndicationParams {
    DataIndicationParams {
        src_pan_id: PanId(0x781D),
        src_address: src,
        dest_pan_id: PanId(0x781D),
        dest_address: dest,
        msdu: msdu.to_vec(),
        link_quality: 120,
        dsn: 0,
        timestamp: 0,
        security_level: SecurityLevel::None,
        key_index: 0,
        quality_of_service: QualityOfService::Normal,
    }
}
