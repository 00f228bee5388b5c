//! Core services
//!
//! - **catalog**: per-restaurant product directory
//! - **ledger**: order lifecycle and consolidation engine
//! - **kitchen**: elapsed-preparation-time views
//! - **history**: delivered-order reporting windows
//! - **printing**: receipt document formatting
//! - **onboarding**: tenant registration and teardown

pub mod catalog;
pub mod history;
pub mod kitchen;
pub mod ledger;
pub mod onboarding;
pub mod printing;

use chrono::TimeZone;
use chrono_tz::Tz;
use shared::models::Restaurant;

/// The restaurant's IANA timezone, falling back to UTC on a bad identifier.
pub(crate) fn tz_of(restaurant: &Restaurant) -> Tz {
    restaurant.timezone.parse().unwrap_or(Tz::UTC)
}

/// Format a UTC millisecond timestamp as local `dd/mm/YYYY HH:MM`.
pub(crate) fn local_time_label(tz: Tz, timestamp_ms: i64) -> String {
    match tz.timestamp_millis_opt(timestamp_ms) {
        chrono::LocalResult::Single(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        _ => String::new(),
    }
}

/// Start of the current day in the restaurant's timezone, in UTC millis.
///
/// Falls back to a rolling 24h window on DST gaps where local midnight
/// does not exist.
pub(crate) fn local_midnight_ms(tz: Tz, now_ms: i64) -> i64 {
    let now = match tz.timestamp_millis_opt(now_ms) {
        chrono::LocalResult::Single(dt) => dt,
        _ => return now_ms - shared::util::DAY_MS,
    };
    let midnight = now.date_naive().and_time(chrono::NaiveTime::MIN);
    match tz.from_local_datetime(&midnight).earliest() {
        Some(dt) => dt.timestamp_millis(),
        None => now_ms - shared::util::DAY_MS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_time_label_respects_timezone() {
        // 2024-06-01 12:00:00 UTC
        let ms = 1_717_243_200_000;
        assert_eq!(local_time_label(Tz::UTC, ms), "01/06/2024 12:00");
        assert_eq!(
            local_time_label(chrono_tz::Europe::Madrid, ms),
            "01/06/2024 14:00"
        );
    }

    #[test]
    fn local_midnight_precedes_now_by_less_than_a_day() {
        let now = shared::util::now_millis();
        for tz in [Tz::UTC, chrono_tz::Europe::Madrid, chrono_tz::America::New_York] {
            let midnight = local_midnight_ms(tz, now);
            assert!(midnight <= now);
            assert!(now - midnight < shared::util::DAY_MS);
        }
    }
}
