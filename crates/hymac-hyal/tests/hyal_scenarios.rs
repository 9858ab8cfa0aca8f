//! End-to-end scenarios for the hybrid access layer over scripted media.

use std::cell::RefCell;
use std::rc::Rc;

use hymac_core::params::{
    DataRequestParams, ResetRequestParams, ScanRequestParams, StartRequestParams,
};
use hymac_core::pib::{PibAttribute, PibValue, RfPosEntry};
use hymac_core::status::MacStatus;
use hymac_core::types::{
    Address, ConfirmMedia, ExtendedAddress, MediaPolicy, Medium, PanId, ShortAddress,
};
use hymac_hyal::{DataConfirm, DataIndication, HyalConfig, HybridMac};
use hymac_medium::testing::{indication, MockMedium};
use hymac_medium::MacEvent;

const PAN: PanId = PanId(0x781D);
const DEST: Address = Address::Short(ShortAddress(0x0002));

struct Harness {
    mac: HybridMac<MockMedium, MockMedium>,
    confirms: Rc<RefCell<Vec<DataConfirm>>>,
    indications: Rc<RefCell<Vec<DataIndication>>>,
    reset_confirms: Rc<RefCell<Vec<MacStatus>>>,
    scan_confirms: Rc<RefCell<Vec<MacStatus>>>,
    start_confirms: Rc<RefCell<Vec<MacStatus>>>,
}

fn harness() -> Harness {
    harness_with(HyalConfig::default())
}

fn harness_with(config: HyalConfig) -> Harness {
    let mut mac = HybridMac::new(
        config,
        MockMedium::new(Medium::Plc),
        MockMedium::new(Medium::Rf),
    );

    let confirms = Rc::new(RefCell::new(Vec::new()));
    let indications = Rc::new(RefCell::new(Vec::new()));
    let reset_confirms = Rc::new(RefCell::new(Vec::new()));
    let scan_confirms = Rc::new(RefCell::new(Vec::new()));
    let start_confirms = Rc::new(RefCell::new(Vec::new()));

    let sink = confirms.clone();
    mac.handlers_mut().data_confirm = Some(Box::new(move |c: &DataConfirm| {
        sink.borrow_mut().push(*c);
    }));
    let sink = indications.clone();
    mac.handlers_mut().data_indication = Some(Box::new(move |i: &DataIndication| {
        sink.borrow_mut().push(i.clone());
    }));
    let sink = reset_confirms.clone();
    mac.handlers_mut().reset_confirm = Some(Box::new(move |s| sink.borrow_mut().push(s)));
    let sink = scan_confirms.clone();
    mac.handlers_mut().scan_confirm = Some(Box::new(move |s| sink.borrow_mut().push(s)));
    let sink = start_confirms.clone();
    mac.handlers_mut().start_confirm = Some(Box::new(move |s| sink.borrow_mut().push(s)));

    mac.open().expect("both media ready");

    Harness {
        mac,
        confirms,
        indications,
        reset_confirms,
        scan_confirms,
        start_confirms,
    }
}

fn request(handle: u8, policy: MediaPolicy) -> DataRequestParams {
    let mut params = DataRequestParams::unicast(PAN, DEST, b"frame payload".to_vec(), handle);
    params.media_policy = policy;
    params
}

fn rf_pos_entry_for(short: ShortAddress, reverse_lqi_valid_time_secs: u16) -> PibValue {
    let entry = RfPosEntry {
        short_address: short,
        forward_lqi: 210,
        reverse_lqi: 195,
        duty_cycle: 0,
        forward_tx_power_offset: 0,
        reverse_tx_power_offset: 0,
        pos_valid_time_secs: 600,
        reverse_lqi_valid_time_secs,
    };
    PibValue::from_bytes(&entry.to_bytes())
}

// ---- Single-medium policies -------------------------------------------

#[test]
fn plc_only_produces_one_confirm_tagged_plc() {
    let mut h = harness();
    h.mac.data_request(request(1, MediaPolicy::PlcOnly));
    h.mac.tasks(10);

    let confirms = h.confirms.borrow();
    assert_eq!(confirms.len(), 1);
    assert_eq!(confirms[0].msdu_handle, 1);
    assert_eq!(confirms[0].status, MacStatus::Success);
    assert_eq!(confirms[0].media, ConfirmMedia::Plc);
    assert!(h.mac.rf().data_requests.is_empty());
}

#[test]
fn rf_only_produces_one_confirm_tagged_rf() {
    let mut h = harness();
    h.mac.data_request(request(2, MediaPolicy::RfOnly));
    h.mac.tasks(10);

    let confirms = h.confirms.borrow();
    assert_eq!(confirms.len(), 1);
    assert_eq!(confirms[0].media, ConfirmMedia::Rf);
    assert!(h.mac.plc().data_requests.is_empty());
}

#[test]
fn ledger_slot_is_reusable_after_confirm() {
    let mut h = harness();
    for round in 0..5u8 {
        h.mac.data_request(request(round, MediaPolicy::PlcOnly));
        h.mac.tasks(u64::from(round) * 10);
    }
    assert_eq!(h.confirms.borrow().len(), 5);
    assert!(h
        .confirms
        .borrow()
        .iter()
        .all(|c| c.status == MacStatus::Success));
}

// ---- Caller errors -----------------------------------------------------

#[test]
fn request_before_open_fails_synchronously() {
    let mut mac = HybridMac::new(
        HyalConfig::default(),
        MockMedium::new(Medium::Plc),
        MockMedium::new(Medium::Rf),
    );
    let confirms: Rc<RefCell<Vec<DataConfirm>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = confirms.clone();
    mac.handlers_mut().data_confirm = Some(Box::new(move |c| sink.borrow_mut().push(*c)));

    mac.data_request(request(1, MediaPolicy::RfOnly));

    let confirms = confirms.borrow();
    assert_eq!(confirms.len(), 1);
    assert_eq!(confirms[0].status, MacStatus::InvalidHandle);
    assert_eq!(confirms[0].timestamp, 0);
    assert_eq!(confirms[0].media, ConfirmMedia::Rf);
    assert!(mac.rf().data_requests.is_empty());

    assert_eq!(
        mac.get_request_sync(PibAttribute::PAN_ID, 0).unwrap_err(),
        MacStatus::InvalidHandle
    );
}

#[test]
fn third_concurrent_request_is_refused_with_queue_full() {
    let mut h = harness();
    h.mac.data_request(request(1, MediaPolicy::PlcOnly));
    h.mac.data_request(request(2, MediaPolicy::PlcOnly));
    // No tasks() yet: both requests are still in flight.
    h.mac.data_request(request(3, MediaPolicy::PlcOnly));

    {
        let confirms = h.confirms.borrow();
        assert_eq!(confirms.len(), 1);
        assert_eq!(confirms[0].msdu_handle, 3);
        assert_eq!(confirms[0].status, MacStatus::QueueFull);
        assert_eq!(confirms[0].timestamp, 0);
    }

    // The two in-flight entries complete undisturbed.
    h.mac.tasks(10);
    let confirms = h.confirms.borrow();
    assert_eq!(confirms.len(), 3);
    assert!(confirms[1..]
        .iter()
        .all(|c| c.status == MacStatus::Success && c.media == ConfirmMedia::Plc));
}

#[test]
fn unmatched_confirm_is_dropped_without_corrupting_others() {
    let mut h = harness();
    h.mac.data_request(request(1, MediaPolicy::PlcOnly));
    // Spurious confirm for a handle that was never submitted.
    h.mac
        .plc_mut()
        .push_event(MacEvent::DataConfirm(hymac_core::DataConfirmParams {
            msdu_handle: 99,
            status: MacStatus::Success,
            timestamp: 5,
        }));
    h.mac.tasks(10);

    let confirms = h.confirms.borrow();
    assert_eq!(confirms.len(), 1);
    assert_eq!(confirms[0].msdu_handle, 1);
}

// ---- Failover ----------------------------------------------------------

#[test]
fn plc_failure_without_rf_pos_entry_reports_primary_failure() {
    let mut h = harness();
    h.mac.plc_mut().queue_data_status(MacStatus::NoAck);
    h.mac
        .data_request(request(1, MediaPolicy::PlcPreferredRfBackup));
    h.mac.tasks(10);
    h.mac.tasks(20);

    // No POS entry for 0x0002 on RF: no resend is attempted.
    assert!(h.mac.rf().data_requests.is_empty());
    let confirms = h.confirms.borrow();
    assert_eq!(confirms.len(), 1);
    assert_eq!(confirms[0].status, MacStatus::NoAck);
    assert_eq!(confirms[0].media, ConfirmMedia::Plc);
}

#[test]
fn plc_failure_with_rf_pos_entry_fails_over_to_rf() {
    let mut h = harness();
    h.mac.plc_mut().queue_data_status(MacStatus::NoAck);
    h.mac.rf_mut().set_pib(
        PibAttribute::MANUF_POS_TABLE_ELEMENT_RF,
        0x0002,
        rf_pos_entry_for(ShortAddress(0x0002), 30),
    );
    h.mac
        .data_request(request(1, MediaPolicy::PlcPreferredRfBackup));

    h.mac.tasks(10);
    // The PLC failure triggered the RF resend; no confirm yet.
    assert_eq!(h.mac.rf().data_requests.len(), 1);
    assert_eq!(h.mac.rf().data_requests[0].msdu, b"frame payload");
    assert!(h.confirms.borrow().is_empty());

    h.mac.tasks(20);
    let confirms = h.confirms.borrow();
    assert_eq!(confirms.len(), 1);
    assert_eq!(confirms[0].status, MacStatus::Success);
    assert_eq!(confirms[0].media, ConfirmMedia::RfAsBackup);
}

#[test]
fn rf_failure_with_plc_pos_entry_fails_over_to_plc() {
    let mut h = harness();
    h.mac.rf_mut().queue_data_status(MacStatus::ChannelAccessFailure);
    h.mac.plc_mut().set_pib(
        PibAttribute::MANUF_POS_TABLE_ELEMENT,
        0x0002,
        PibValue::from_bytes(&[0x02, 0x00, 0xB4, 0x58, 0x02]),
    );
    h.mac
        .data_request(request(7, MediaPolicy::RfPreferredPlcBackup));

    h.mac.tasks(10);
    assert_eq!(h.mac.plc().data_requests.len(), 1);
    h.mac.tasks(20);

    let confirms = h.confirms.borrow();
    assert_eq!(confirms.len(), 1);
    assert_eq!(confirms[0].media, ConfirmMedia::PlcAsBackup);
    assert_eq!(confirms[0].status, MacStatus::Success);
}

#[test]
fn extended_destination_always_allows_failover() {
    let mut h = harness();
    h.mac.plc_mut().queue_data_status(MacStatus::NoAck);
    let mut params = request(1, MediaPolicy::PlcPreferredRfBackup);
    params.dest_address = Address::Extended(ExtendedAddress([0x11; 8]));
    h.mac.data_request(params);

    h.mac.tasks(10);
    assert_eq!(h.mac.rf().data_requests.len(), 1);
    h.mac.tasks(20);

    let confirms = h.confirms.borrow();
    assert_eq!(confirms.len(), 1);
    assert_eq!(confirms[0].media, ConfirmMedia::RfAsBackup);
}

#[test]
fn backup_failure_reports_backup_status() {
    let mut h = harness();
    h.mac.plc_mut().queue_data_status(MacStatus::NoAck);
    h.mac.rf_mut().queue_data_status(MacStatus::ChannelAccessFailure);
    let mut params = request(1, MediaPolicy::PlcPreferredRfBackup);
    params.dest_address = Address::Extended(ExtendedAddress([0x11; 8]));
    h.mac.data_request(params);

    h.mac.tasks(10);
    h.mac.tasks(20);

    let confirms = h.confirms.borrow();
    assert_eq!(confirms.len(), 1);
    assert_eq!(confirms[0].status, MacStatus::ChannelAccessFailure);
    assert_eq!(confirms[0].media, ConfirmMedia::RfAsBackup);
}

// ---- Dual-medium policy ------------------------------------------------

#[test]
fn both_policy_aggregates_two_successes_into_one_confirm() {
    let mut h = harness();
    h.mac.data_request(request(1, MediaPolicy::Both));
    assert_eq!(h.mac.plc().data_requests.len(), 1);
    assert_eq!(h.mac.rf().data_requests.len(), 1);

    h.mac.tasks(10);
    let confirms = h.confirms.borrow();
    assert_eq!(confirms.len(), 1);
    assert_eq!(confirms[0].status, MacStatus::Success);
    assert_eq!(confirms[0].media, ConfirmMedia::Both);
}

#[test]
fn both_policy_succeeds_if_either_medium_succeeds() {
    let mut h = harness();
    h.mac.plc_mut().queue_data_status(MacStatus::NoAck);
    h.mac.data_request(request(1, MediaPolicy::Both));
    h.mac.tasks(10);

    let confirms = h.confirms.borrow();
    assert_eq!(confirms.len(), 1);
    assert_eq!(confirms[0].status, MacStatus::Success);
    assert_eq!(confirms[0].media, ConfirmMedia::Both);
}

#[test]
fn both_policy_reports_second_failure_when_none_succeeds() {
    let mut h = harness();
    h.mac.plc_mut().queue_data_status(MacStatus::NoAck);
    h.mac
        .rf_mut()
        .queue_data_status(MacStatus::ChannelAccessFailure);
    h.mac.data_request(request(1, MediaPolicy::Both));
    h.mac.tasks(10);

    let confirms = h.confirms.borrow();
    assert_eq!(confirms.len(), 1);
    // PLC is polled first, so the RF status is the second arrival.
    assert_eq!(confirms[0].status, MacStatus::ChannelAccessFailure);
}

#[test]
fn both_policy_is_order_independent() {
    let mut h = harness();
    // Suppress the PLC auto-confirm so RF arrives first.
    h.mac.plc_mut().set_default_data_status(None);
    h.mac.rf_mut().queue_data_status(MacStatus::NoAck);
    h.mac.data_request(request(1, MediaPolicy::Both));

    h.mac.tasks(10);
    assert!(h.confirms.borrow().is_empty());

    // Now the PLC confirm arrives as the second of the pair.
    h.mac
        .plc_mut()
        .push_event(MacEvent::DataConfirm(hymac_core::DataConfirmParams {
            msdu_handle: 1,
            status: MacStatus::ChannelAccessFailure,
            timestamp: 40,
        }));
    h.mac.tasks(20);

    let confirms = h.confirms.borrow();
    assert_eq!(confirms.len(), 1);
    assert_eq!(confirms[0].status, MacStatus::ChannelAccessFailure);
    assert_eq!(confirms[0].media, ConfirmMedia::Both);
}

// ---- Media probing -----------------------------------------------------

fn probing_request(handle: u8, policy: MediaPolicy, interval_mins: u8) -> DataRequestParams {
    let mut params = request(handle, policy);
    params.probing_interval_mins = interval_mins;
    params
}

#[test]
fn successful_plc_delivery_probes_stale_rf_link() {
    let mut h = harness();
    h.mac.rf_mut().set_pib(
        PibAttribute::MANUF_POS_TABLE_ELEMENT_RF,
        0x0002,
        rf_pos_entry_for(ShortAddress(0x0002), 125),
    );
    h.mac
        .data_request(probing_request(1, MediaPolicy::PlcPreferredRfBackup, 10));

    h.mac.tasks(10);
    // The PLC success triggered an RF probe; the confirm waits for it.
    assert_eq!(h.mac.rf().data_requests.len(), 1);
    assert_eq!(h.mac.rf().data_requests[0].msdu, b"frame payload");
    assert!(h.confirms.borrow().is_empty());

    h.mac.tasks(20);
    let confirms = h.confirms.borrow();
    assert_eq!(confirms.len(), 1);
    assert_eq!(confirms[0].status, MacStatus::Success);
    assert_eq!(confirms[0].media, ConfirmMedia::Plc);
}

#[test]
fn failed_probe_still_reports_success_tagged_as_backup() {
    let mut h = harness();
    h.mac.rf_mut().set_pib(
        PibAttribute::MANUF_POS_TABLE_ELEMENT_RF,
        0x0002,
        rf_pos_entry_for(ShortAddress(0x0002), 125),
    );
    h.mac.rf_mut().queue_data_status(MacStatus::NoAck);
    h.mac
        .data_request(probing_request(1, MediaPolicy::PlcPreferredRfBackup, 10));

    h.mac.tasks(10);
    h.mac.tasks(20);

    let confirms = h.confirms.borrow();
    assert_eq!(confirms.len(), 1);
    // The delivery itself succeeded on PLC; the probe outcome only
    // refines the tag.
    assert_eq!(confirms[0].status, MacStatus::Success);
    assert_eq!(confirms[0].media, ConfirmMedia::PlcAsBackup);
}

#[test]
fn probe_is_skipped_without_pos_entry_or_interval() {
    let mut h = harness();
    // No RF POS entry, interval set.
    h.mac
        .data_request(probing_request(1, MediaPolicy::PlcPreferredRfBackup, 10));
    h.mac.tasks(10);
    assert!(h.mac.rf().data_requests.is_empty());
    assert_eq!(h.confirms.borrow().len(), 1);
    assert_eq!(h.confirms.borrow()[0].media, ConfirmMedia::Plc);

    // POS entry present but probing disabled.
    h.mac.rf_mut().set_pib(
        PibAttribute::MANUF_POS_TABLE_ELEMENT_RF,
        0x0002,
        rf_pos_entry_for(ShortAddress(0x0002), 125),
    );
    h.mac
        .data_request(probing_request(2, MediaPolicy::PlcPreferredRfBackup, 0));
    h.mac.tasks(20);
    assert!(h.mac.rf().data_requests.is_empty());
    assert_eq!(h.confirms.borrow().len(), 2);
}

#[test]
fn successful_rf_delivery_probes_plc_and_resets_tmr_ttl() {
    let mut h = harness();
    h.mac.plc_mut().set_pib(
        PibAttribute::MANUF_POS_TABLE_ELEMENT,
        0x0002,
        PibValue::from_bytes(&[0x02, 0x00, 0xB4, 0x58, 0x02]),
    );
    h.mac
        .plc_mut()
        .set_pib(PibAttribute::TMR_TTL, 0, PibValue::from_u8(30));
    h.mac
        .data_request(probing_request(1, MediaPolicy::RfPreferredPlcBackup, 5));

    h.mac.tasks(10);
    assert_eq!(h.mac.plc().data_requests.len(), 1);
    // The TMR TTL reset was issued ahead of the probe.
    assert!(h
        .mac
        .plc()
        .pib_sets
        .iter()
        .any(|(attribute, index, _)| *attribute == PibAttribute::MANUF_RESET_TMR_TTL
            && *index == 0x0002));

    h.mac.tasks(20);
    let confirms = h.confirms.borrow();
    assert_eq!(confirms.len(), 1);
    assert_eq!(confirms[0].status, MacStatus::Success);
    assert_eq!(confirms[0].media, ConfirmMedia::Rf);
}

// ---- Receive fan-in ----------------------------------------------------

#[test]
fn cross_medium_duplicate_reception_is_suppressed() {
    let mut h = harness();
    let src = Address::Short(ShortAddress(0x00A1));
    let dest = Address::Short(ShortAddress(0x0001));
    // A LoWPAN-compressed UDP fragment as it would arrive from either MAC.
    let payload = hex::decode("7e f6 00 2155 f0 c3 0a68656c6c6f".replace(' ', "")).unwrap();

    h.mac
        .plc_mut()
        .push_event(MacEvent::DataIndication(indication(src, dest, &payload)));
    h.mac
        .rf_mut()
        .push_event(MacEvent::DataIndication(indication(src, dest, &payload)));
    h.mac.tasks(10);

    let indications = h.indications.borrow();
    assert_eq!(indications.len(), 1);
    assert_eq!(indications[0].medium, Medium::Plc);
    assert_eq!(indications[0].params.msdu, payload);
}

#[test]
fn same_medium_repeat_is_forwarded() {
    let mut h = harness();
    let src = Address::Short(ShortAddress(0x00A1));
    let dest = Address::Short(ShortAddress(0x0001));

    h.mac
        .plc_mut()
        .push_event(MacEvent::DataIndication(indication(src, dest, b"hello")));
    h.mac
        .plc_mut()
        .push_event(MacEvent::DataIndication(indication(src, dest, b"hello")));
    h.mac.tasks(10);

    assert_eq!(h.indications.borrow().len(), 2);
}

#[test]
fn broadcast_receptions_are_never_suppressed() {
    let mut h = harness();
    let src = Address::Short(ShortAddress(0x00A1));
    let broadcast = Address::Short(ShortAddress::BROADCAST);

    h.mac.plc_mut().push_event(MacEvent::DataIndication(indication(
        src, broadcast, b"hello",
    )));
    h.mac.rf_mut().push_event(MacEvent::DataIndication(indication(
        src, broadcast, b"hello",
    )));
    h.mac.tasks(10);

    let indications = h.indications.borrow();
    assert_eq!(indications.len(), 2);
    assert_eq!(indications[0].medium, Medium::Plc);
    assert_eq!(indications[1].medium, Medium::Rf);
}

// ---- PIB routing -------------------------------------------------------

#[test]
fn pib_requests_route_by_attribute() {
    let mut h = harness();

    // PLC-scoped standard attribute.
    h.mac
        .set_request_sync(PibAttribute(0x0000_0100), 0, &PibValue::from_u8(1));
    assert_eq!(h.mac.plc().pib_sets.len(), 1);
    assert!(h.mac.rf().pib_sets.is_empty());

    // RF-scoped standard attribute.
    h.mac
        .set_request_sync(PibAttribute(0x0000_0300), 0, &PibValue::from_u8(1));
    assert_eq!(h.mac.rf().pib_sets.len(), 1);

    // Shared attribute goes to the common store, not to either medium.
    let status = h
        .mac
        .set_request_sync(PibAttribute::PAN_ID, 0, &PibValue::from_u16(0x781D));
    assert_eq!(status, MacStatus::Success);
    assert_eq!(h.mac.plc().pib_sets.len(), 1);
    assert_eq!(h.mac.rf().pib_sets.len(), 1);
    assert_eq!(h.mac.common_pib().pan_id, PAN);
    assert_eq!(
        h.mac
            .get_request_sync(PibAttribute::PAN_ID, 0)
            .unwrap()
            .as_u16()
            .unwrap(),
        0x781D
    );
}

// ---- Singleton operations ----------------------------------------------

#[test]
fn reset_fans_out_and_aggregates_one_confirm() {
    let mut h = harness();
    h.mac
        .set_request_sync(PibAttribute::PAN_ID, 0, &PibValue::from_u16(0x1234));
    h.mac.reset_request(ResetRequestParams {
        set_default_pib: true,
    });

    assert_eq!(h.mac.plc().reset_requests.len(), 1);
    assert_eq!(h.mac.rf().reset_requests.len(), 1);
    // The common store was restored immediately.
    assert_eq!(h.mac.common_pib().pan_id, PanId(0xFFFF));

    h.mac.tasks(10);
    assert_eq!(*h.reset_confirms.borrow(), vec![MacStatus::Success]);
}

#[test]
fn reset_reports_first_failing_medium() {
    let mut h = harness();
    h.mac
        .plc_mut()
        .set_control_status(Some(MacStatus::Denied));
    h.mac.reset_request(ResetRequestParams {
        set_default_pib: false,
    });
    h.mac.tasks(10);

    assert_eq!(*h.reset_confirms.borrow(), vec![MacStatus::Denied]);
}

#[test]
fn scan_succeeds_if_either_medium_succeeds() {
    let mut h = harness();
    h.mac
        .plc_mut()
        .set_control_status(Some(MacStatus::LimitReached));
    h.mac.scan_request(ScanRequestParams {
        scan_duration_secs: 14,
    });
    assert_eq!(h.mac.plc().scan_requests.len(), 1);
    assert_eq!(h.mac.rf().scan_requests.len(), 1);

    h.mac.tasks(10);
    assert_eq!(*h.scan_confirms.borrow(), vec![MacStatus::Success]);
}

#[test]
fn concurrent_scan_is_denied() {
    let mut h = harness();
    // Keep the first scan outstanding.
    h.mac.plc_mut().set_control_status(None);
    h.mac.rf_mut().set_control_status(None);
    h.mac.scan_request(ScanRequestParams {
        scan_duration_secs: 14,
    });
    h.mac.scan_request(ScanRequestParams {
        scan_duration_secs: 14,
    });

    assert_eq!(*h.scan_confirms.borrow(), vec![MacStatus::Denied]);
    // Only the first scan reached the media.
    assert_eq!(h.mac.plc().scan_requests.len(), 1);
}

#[test]
fn concurrent_reset_and_start_are_denied() {
    let mut h = harness();
    h.mac.plc_mut().set_control_status(None);
    h.mac.rf_mut().set_control_status(None);

    h.mac.reset_request(ResetRequestParams {
        set_default_pib: false,
    });
    h.mac.reset_request(ResetRequestParams {
        set_default_pib: false,
    });
    assert_eq!(*h.reset_confirms.borrow(), vec![MacStatus::Denied]);

    h.mac.start_request(StartRequestParams { pan_id: PAN });
    h.mac.start_request(StartRequestParams { pan_id: PAN });
    assert_eq!(*h.start_confirms.borrow(), vec![MacStatus::Denied]);
}

#[test]
fn start_confirms_in_either_arrival_order() {
    let mut h = harness();
    h.mac.start_request(StartRequestParams { pan_id: PAN });
    h.mac.tasks(10);
    assert_eq!(*h.start_confirms.borrow(), vec![MacStatus::Success]);

    // A new start is accepted after the first one resolved.
    h.mac
        .rf_mut()
        .set_control_status(Some(MacStatus::ChannelAccessFailure));
    h.mac.start_request(StartRequestParams { pan_id: PAN });
    h.mac.tasks(20);
    assert_eq!(
        *h.start_confirms.borrow(),
        vec![MacStatus::Success, MacStatus::ChannelAccessFailure]
    );
}

// ---- Dual-confirm timeout ----------------------------------------------

#[test]
fn stalled_second_data_confirm_is_forced_after_timeout() {
    let mut h = harness();
    // RF never confirms.
    h.mac.rf_mut().set_default_data_status(None);
    h.mac.data_request(request(1, MediaPolicy::Both));

    h.mac.tasks(10);
    assert!(h.confirms.borrow().is_empty());

    // Not yet overdue.
    h.mac.tasks(100_000);
    assert!(h.confirms.borrow().is_empty());

    h.mac.tasks(120_011);
    {
        let confirms = h.confirms.borrow();
        assert_eq!(confirms.len(), 1);
        assert_eq!(confirms[0].status, MacStatus::Success);
        assert_eq!(confirms[0].media, ConfirmMedia::Both);
    }

    // The slot was released: a new request is accepted immediately.
    h.mac.data_request(request(2, MediaPolicy::PlcOnly));
    h.mac.tasks(120_020);
    assert_eq!(h.confirms.borrow().len(), 2);
    assert_eq!(
        h.confirms.borrow()[1].status,
        MacStatus::Success
    );
}

#[test]
fn stalled_singleton_confirm_is_forced_after_timeout() {
    let mut h = harness();
    h.mac.rf_mut().set_control_status(None);
    h.mac
        .plc_mut()
        .set_control_status(Some(MacStatus::NoAck));
    h.mac.scan_request(ScanRequestParams {
        scan_duration_secs: 14,
    });

    h.mac.tasks(10);
    assert!(h.scan_confirms.borrow().is_empty());

    h.mac.tasks(130_000);
    assert_eq!(*h.scan_confirms.borrow(), vec![MacStatus::NoAck]);

    // The guard is released: a new scan is accepted.
    h.mac.rf_mut().set_control_status(Some(MacStatus::Success));
    h.mac
        .plc_mut()
        .set_control_status(Some(MacStatus::Success));
    h.mac.scan_request(ScanRequestParams {
        scan_duration_secs: 14,
    });
    h.mac.tasks(130_010);
    assert_eq!(
        *h.scan_confirms.borrow(),
        vec![MacStatus::NoAck, MacStatus::Success]
    );
}

#[test]
fn timeout_can_be_disabled() {
    let mut config = HyalConfig::default();
    config.dual_confirm_timeout_ms = None;
    let mut h = harness_with(config);

    h.mac.rf_mut().set_default_data_status(None);
    h.mac.data_request(request(1, MediaPolicy::Both));
    h.mac.tasks(10);
    h.mac.tasks(10_000_000);

    // Reference behavior: the entry waits forever.
    assert!(h.confirms.borrow().is_empty());
}

// ---- Oversize payloads -------------------------------------------------

#[test]
fn oversize_payload_transmits_but_never_retries() {
    let mut config = HyalConfig::default();
    config.payload_copy_limit = 8;
    let mut h = harness_with(config);

    h.mac.plc_mut().queue_data_status(MacStatus::NoAck);
    let mut params = request(1, MediaPolicy::PlcPreferredRfBackup);
    params.dest_address = Address::Extended(ExtendedAddress([0x11; 8]));
    params.msdu = vec![0xAB; 32];
    h.mac.data_request(params);

    // The frame still went out on PLC.
    assert_eq!(h.mac.plc().data_requests.len(), 1);
    assert_eq!(h.mac.plc().data_requests[0].msdu.len(), 32);

    h.mac.tasks(10);
    h.mac.tasks(20);

    // Failover was skipped: no private copy to resend.
    assert!(h.mac.rf().data_requests.is_empty());
    let confirms = h.confirms.borrow();
    assert_eq!(confirms.len(), 1);
    assert_eq!(confirms[0].status, MacStatus::NoAck);
    assert_eq!(confirms[0].media, ConfirmMedia::Plc);
}

// ---- Tagged passthrough events -----------------------------------------

#[test]
fn beacon_and_comm_status_are_tagged_with_their_medium() {
    use hymac_core::params::{CommStatusParams, PanDescriptor};
    use hymac_core::types::SecurityLevel;

    let mut h = harness();
    let beacons: Rc<RefCell<Vec<(PanId, Medium)>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = beacons.clone();
    h.mac.handlers_mut().beacon_notify = Some(Box::new(move |b| {
        sink.borrow_mut().push((b.pan_descriptor.pan_id, b.medium));
    }));
    let comm: Rc<RefCell<Vec<Medium>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = comm.clone();
    h.mac.handlers_mut().comm_status = Some(Box::new(move |c| {
        sink.borrow_mut().push(c.medium);
    }));

    h.mac.rf_mut().push_event(MacEvent::BeaconNotify {
        pan_descriptor: PanDescriptor {
            pan_id: PAN,
            link_quality: 90,
            lba_address: ShortAddress(0x0030),
            rc_coord: 0x0100,
        },
    });
    h.mac.plc_mut().push_event(MacEvent::CommStatus(CommStatusParams {
        pan_id: PAN,
        src_address: Address::Short(ShortAddress(0x00A1)),
        dest_address: Address::Short(ShortAddress(0x0001)),
        status: MacStatus::SecurityError,
        security_level: SecurityLevel::EncMic32,
        key_index: 0,
    }));
    let sniffed: Rc<RefCell<Vec<Medium>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = sniffed.clone();
    h.mac.handlers_mut().sniffer_indication = Some(Box::new(move |s| {
        sink.borrow_mut().push(s.medium);
    }));
    h.mac
        .rf_mut()
        .push_event(MacEvent::Sniffer(hymac_core::SnifferFrame {
            frame_type: 1,
            msdu: b"raw".to_vec(),
        }));

    h.mac.tasks(10);

    assert_eq!(*beacons.borrow(), vec![(PAN, Medium::Rf)]);
    assert_eq!(*comm.borrow(), vec![Medium::Plc]);
    assert_eq!(*sniffed.borrow(), vec![Medium::Rf]);
}
