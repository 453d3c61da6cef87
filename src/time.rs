//! # Calendar helpers for catalog epochs
//!
//! The comet catalog stores each orbit epoch as a **day offset** from a fixed reference date
//! (2000-01-01 00:00). This module turns such offsets into [`hifitime::Epoch`] values and extracts
//! calendar components from them.
//!
//! All arithmetic is done on the **TAI** scale: the catalog offsets are plain day counts with no
//! leap second bookkeeping, so a UTC computation would drift by the accumulated leap seconds and
//! land on the previous calendar day for offsets that fall exactly on midnight.
use hifitime::{Epoch, Unit};

/// Largest accepted day offset (in absolute value) around the reference date, about ±10 000 years.
pub const MAX_EPOCH_OFFSET_DAYS: f64 = 3_652_425.0;

/// Reference date of the catalog epoch offsets: 2000-01-01 00:00.
pub fn reference_epoch() -> Epoch {
    Epoch::from_gregorian_tai_at_midnight(2000, 1, 1)
}

/// Convert a catalog day offset into an absolute epoch.
///
/// Arguments
/// -----------------
/// * `days`: number of days elapsed since [`reference_epoch`] (may be negative or fractional).
///
/// Return
/// ----------
/// * `Some(epoch)` when the offset is finite and within [`MAX_EPOCH_OFFSET_DAYS`], `None` otherwise.
pub fn epoch_from_day_offset(days: f64) -> Option<Epoch> {
    if !days.is_finite() || days.abs() > MAX_EPOCH_OFFSET_DAYS {
        return None;
    }
    Some(reference_epoch() + Unit::Day * days)
}

/// Gregorian calendar year of an epoch.
pub fn calendar_year(epoch: &Epoch) -> i32 {
    epoch.to_gregorian_tai().0
}

/// Format an epoch as an ISO calendar date `YYYY-MM-DD`.
pub fn iso_date(epoch: &Epoch) -> String {
    let (year, month, day, ..) = epoch.to_gregorian_tai();
    format!("{year:04}-{month:02}-{day:02}")
}

#[cfg(test)]
mod time_test {
    use super::*;

    #[test]
    fn test_reference_epoch() {
        let epoch = epoch_from_day_offset(0.0).unwrap();
        assert_eq!(epoch, reference_epoch());
        assert_eq!(calendar_year(&epoch), 2000);
        assert_eq!(iso_date(&epoch), "2000-01-01");
    }

    #[test]
    fn test_day_offsets() {
        let epoch = epoch_from_day_offset(366.0).unwrap();
        assert_eq!(iso_date(&epoch), "2001-01-01");

        let epoch = epoch_from_day_offset(-1.0).unwrap();
        assert_eq!(iso_date(&epoch), "1999-12-31");
        assert_eq!(calendar_year(&epoch), 1999);

        // Offsets spanning many leap seconds still land on midnight of the right day
        let epoch = epoch_from_day_offset(6575.0).unwrap();
        assert_eq!(iso_date(&epoch), "2018-01-01");

        let epoch = epoch_from_day_offset(0.75).unwrap();
        assert_eq!(iso_date(&epoch), "2000-01-01");
    }

    #[test]
    fn test_invalid_offsets() {
        assert!(epoch_from_day_offset(f64::NAN).is_none());
        assert!(epoch_from_day_offset(f64::INFINITY).is_none());
        assert!(epoch_from_day_offset(1e12).is_none());
    }
}
