//! Backup-medium probing decision.
//!
//! After a successful delivery on the preferred medium, the frame can be
//! re-sent on the backup medium purely to refresh that medium's
//! link-quality estimate for the destination. The probe is due when the
//! backup medium still has a POS entry for the peer but has not validated
//! its link quality for at least the configured probing interval.

use tracing::debug;

use hymac_core::pib::{NeighbourEntry, PibAttribute, PibValue, RfPosEntry};
use hymac_core::types::Address;
use hymac_medium::MediumMac;

use crate::common::CommonPib;

/// Seconds to whole minutes, rounding up, saturating at the 8-bit TTL range.
fn whole_minutes(secs: u16) -> u8 {
    ((u32::from(secs) + 59) / 60).min(255) as u8
}

/// Whether an RF probe is due for `dest` after a successful PLC delivery.
///
/// Requires short addressing, a live RF POS entry for the destination, and
/// a reverse-LQI validation older than the probing interval relative to the
/// configured entry lifetime.
pub fn rf_probing_due(
    probing_interval_mins: u8,
    dest: &Address,
    rf: &impl MediumMac,
    common: &CommonPib,
) -> bool {
    if probing_interval_mins == 0 {
        return false;
    }
    let Some(short) = dest.short() else {
        return false;
    };

    let Ok(value) = rf.get_request_sync(PibAttribute::MANUF_POS_TABLE_ELEMENT_RF, short.0) else {
        return false;
    };
    let Ok(entry) = RfPosEntry::from_bytes(value.bytes()) else {
        debug!(dest = %short, "malformed RF POS entry, skipping probe");
        return false;
    };

    let ttl = common.pos_table_entry_ttl;
    let lqi_valid_mins = whole_minutes(entry.reverse_lqi_valid_time_secs);
    ttl > lqi_valid_mins && ttl - lqi_valid_mins >= probing_interval_mins
}

/// Whether a PLC probe is due for `dest` after a successful RF delivery.
///
/// Requires short addressing, a live PLC POS entry for the destination, and
/// a tone-map exchange older than the probing interval relative to the TMR
/// lifetime. When the probe is due, the peer's TMR TTL is reset as a side
/// effect so the probe frame actually triggers a fresh tone-map exchange.
pub fn plc_probing_due(
    probing_interval_mins: u8,
    dest: &Address,
    plc: &mut impl MediumMac,
) -> bool {
    if probing_interval_mins == 0 {
        return false;
    }
    let Some(short) = dest.short() else {
        return false;
    };

    if plc
        .get_request_sync(PibAttribute::MANUF_POS_TABLE_ELEMENT, short.0)
        .is_err()
    {
        return false;
    }

    let tmr_valid_mins = plc
        .get_request_sync(PibAttribute::MANUF_NEIGHBOUR_TABLE_ELEMENT, short.0)
        .ok()
        .and_then(|value| NeighbourEntry::from_bytes(value.bytes()).ok())
        .map(|entry| whole_minutes(entry.tmr_valid_time_secs))
        .unwrap_or(0);

    let Ok(ttl) = plc
        .get_request_sync(PibAttribute::TMR_TTL, 0)
        .and_then(|value| value.as_u8().map_err(|_| hymac_core::MacStatus::InvalidParameter))
    else {
        return false;
    };

    if ttl > tmr_valid_mins && ttl - tmr_valid_mins >= probing_interval_mins {
        debug!(dest = %short, "resetting peer TMR TTL ahead of PLC probe");
        let _ = plc.set_request_sync(
            PibAttribute::MANUF_RESET_TMR_TTL,
            short.0,
            &PibValue::default(),
        );
        true
    } else {
        false
    }
}
