//! Date and timestamp conversion between domain and wire representations.
//!
//! Date-only fields cross the wire as `{year, month, day}` with a
//! zero-indexed month; timestamps as `{seconds, nanos}` since the Unix
//! epoch. Both directions are UTC throughout — the host timezone never
//! participates.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

use crate::{
  error::{Error, Result},
  wire,
};

// ─── Date-only ───────────────────────────────────────────────────────────────

pub(crate) fn date_to_wire(date: NaiveDate) -> wire::Date {
  wire::Date {
    year:  date.year(),
    month: date.month0(),
    day:   date.day(),
  }
}

pub(crate) fn date_from_wire(date: &wire::Date) -> Result<NaiveDate> {
  NaiveDate::from_ymd_opt(date.year, date.month + 1, date.day).ok_or(
    Error::InvalidDate {
      year:  date.year,
      month: date.month,
      day:   date.day,
    },
  )
}

/// Project an instant onto its UTC calendar date, whatever offset the
/// caller's wall clock carries.
pub fn utc_calendar_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
  instant.with_timezone(&Utc).date_naive()
}

// ─── Timestamps ──────────────────────────────────────────────────────────────

pub(crate) fn timestamp_to_wire(instant: DateTime<Utc>) -> wire::Timestamp {
  let millis = instant.timestamp_millis();
  wire::Timestamp {
    seconds: millis.div_euclid(1000),
    nanos:   (millis.rem_euclid(1000) * 1_000_000) as i32,
  }
}

pub(crate) fn timestamp_from_wire(
  ts: &wire::Timestamp,
) -> Result<DateTime<Utc>> {
  let invalid = Error::InvalidTimestamp {
    seconds: ts.seconds,
    nanos:   ts.nanos,
  };
  if !(0..1_000_000_000).contains(&ts.nanos) {
    return Err(invalid);
  }
  let millis = ts
    .seconds
    .checked_mul(1000)
    .and_then(|s| s.checked_add(i64::from(ts.nanos) / 1_000_000))
    .ok_or(invalid)?;
  Utc.timestamp_millis_opt(millis).single().ok_or_else(|| {
    Error::InvalidTimestamp {
      seconds: ts.seconds,
      nanos:   ts.nanos,
    }
  })
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use chrono::{FixedOffset, TimeZone};

  use super::*;

  #[test]
  fn wire_month_is_zero_indexed() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let wire = date_to_wire(date);
    assert_eq!((wire.year, wire.month, wire.day), (2024, 0, 2));
    assert_eq!(date_from_wire(&wire).unwrap(), date);
  }

  #[test]
  fn calendar_date_ignores_the_local_offset() {
    // 2024-01-01T23:30:00-05:00 is 2024-01-02T04:30:00Z.
    let instant = FixedOffset::west_opt(5 * 3600)
      .unwrap()
      .with_ymd_and_hms(2024, 1, 1, 23, 30, 0)
      .unwrap();
    let date = utc_calendar_date(&instant);
    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());

    let wire = date_to_wire(date);
    assert_eq!((wire.year, wire.month, wire.day), (2024, 0, 2));
  }

  #[test]
  fn out_of_range_wire_date_is_rejected() {
    let wire = wire::Date { year: 2024, month: 12, day: 1 };
    assert!(matches!(
      date_from_wire(&wire),
      Err(Error::InvalidDate { month: 12, .. })
    ));
  }

  #[test]
  fn timestamp_splits_millis_exactly() {
    let instant = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
    let wire = timestamp_to_wire(instant);
    assert_eq!(wire.seconds, 1_700_000_000);
    assert_eq!(wire.nanos, 123_000_000);
    assert_eq!(timestamp_from_wire(&wire).unwrap(), instant);
  }

  #[test]
  fn pre_epoch_timestamps_round_trip() {
    let instant = Utc.timestamp_millis_opt(-1_500).unwrap();
    let wire = timestamp_to_wire(instant);
    assert_eq!(timestamp_from_wire(&wire).unwrap(), instant);
  }

  #[test]
  fn oversized_nanos_are_rejected() {
    let wire = wire::Timestamp { seconds: 0, nanos: 2_000_000_000 };
    assert!(matches!(
      timestamp_from_wire(&wire),
      Err(Error::InvalidTimestamp { .. })
    ));
  }
}
