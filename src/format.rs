use chrono::DateTime;

/// Base asset units per whole display unit (9 decimals).
pub const BASE_UNITS_PER_COIN: u64 = 1_000_000_000;

const SECONDS_PER_DAY: u64 = 86_400;

/// First 6 characters, an ellipsis, then the last 4. Short inputs pass
/// through untouched.
pub fn short_address(addr: &str) -> String {
    if addr.len() <= 10 {
        return addr.to_string();
    }
    format!("{}...{}", &addr[..6], &addr[addr.len() - 4..])
}

pub fn start_date_string(creation_secs: u64) -> String {
    timestamp_string(creation_secs)
}

/// Raffle close time: creation plus the configured number of days.
pub fn end_date_string(creation_secs: u64, duration_in_days: u64) -> String {
    let end = creation_secs.saturating_add(duration_in_days.saturating_mul(SECONDS_PER_DAY));
    timestamp_string(end)
}

pub fn end_timestamp(creation_secs: u64, duration_in_days: u64) -> u64 {
    creation_secs.saturating_add(duration_in_days.saturating_mul(SECONDS_PER_DAY))
}

fn timestamp_string(secs: u64) -> String {
    match DateTime::from_timestamp(secs as i64, 0) {
        Some(dt) => dt.format("%-d/%b/%Y %-H:%M:%S").to_string(),
        None => String::from("(invalid date)"),
    }
}

/// Base units rendered as whole coins.
pub fn display_units(base: u64) -> f64 {
    base as f64 / BASE_UNITS_PER_COIN as f64
}

pub fn base_units(display: f64) -> u64 {
    (display * BASE_UNITS_PER_COIN as f64).round() as u64
}

/// Ticket total as shown next to the buy control: unit price times
/// quantity, rounded to two decimals in display units.
pub fn total_price_display(unit_price_base: u64, quantity: u64) -> f64 {
    let total = display_units(unit_price_base) * quantity as f64;
    (total * 100.0).round() / 100.0
}

pub fn format_coins(base: u64) -> String {
    format!("{:.2}", display_units(base))
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]
    use super::*;

    #[test]
    fn short_address__keeps_head_and_tail_of_long_addresses() {
        // given
        let addr = "0x1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b";

        // when
        let short = short_address(addr);

        // then
        assert_eq!(short, "0x1a2b...9a0b");
    }

    #[test]
    fn short_address__passes_short_strings_through() {
        assert_eq!(short_address("0x1a2b"), "0x1a2b");
    }

    #[test]
    fn end_date_string__adds_duration_days_to_creation() {
        // given: 2021-01-01 00:00:00 UTC
        let creation = 1_609_459_200u64;

        // when
        let end = end_date_string(creation, 3);

        // then
        assert_eq!(end, "4/Jan/2021 0:00:00");
    }

    #[test]
    fn end_date_string__pads_minutes_and_seconds_to_two_digits() {
        // given: 2021-01-01 05:07:09 UTC
        let creation = 1_609_477_629u64;

        // when
        let formatted = end_date_string(creation, 0);

        // then
        assert_eq!(formatted, "1/Jan/2021 5:07:09");
    }

    #[test]
    fn total_price_display__rounds_to_two_decimals() {
        // given: 0.333 coins per ticket
        let unit_price = 333_000_000u64;

        // when
        let total = total_price_display(unit_price, 3);

        // then
        assert_eq!(total, 1.0);
    }

    #[test]
    fn display_units__converts_base_units_at_nine_decimals() {
        assert_eq!(display_units(1_500_000_000), 1.5);
        assert_eq!(base_units(1.5), 1_500_000_000);
    }
}
