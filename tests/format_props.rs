#![allow(non_snake_case)]

use open_raffles::format;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64, .. ProptestConfig::default()
    })]

    #[test]
    fn short_address__keeps_head_and_tail_of_long_inputs(addr in "0x[0-9a-f]{40}") {
        let short = format::short_address(&addr);
        prop_assert_eq!(short.len(), 13);
        prop_assert!(addr.starts_with(&short[..6]));
        prop_assert!(addr.ends_with(&short[9..]));
    }

    #[test]
    fn short_address__short_inputs_pass_through(addr in "[0-9a-f]{0,10}") {
        prop_assert_eq!(format::short_address(&addr), addr);
    }

    #[test]
    fn base_units__round_trips_through_display_units(base in 0u64..=1_000_000_000_000u64) {
        let display = format::display_units(base);
        prop_assert_eq!(format::base_units(display), base);
    }

    #[test]
    fn end_timestamp__never_precedes_creation(
        (creation, days) in (0u64..=4_102_444_800u64, 0u64..=10_000u64)
    ) {
        prop_assert!(format::end_timestamp(creation, days) >= creation);
    }

    #[test]
    fn end_timestamp__grows_with_duration(
        (creation, days) in (0u64..=4_102_444_800u64, 0u64..10_000u64)
    ) {
        let shorter = format::end_timestamp(creation, days);
        let longer = format::end_timestamp(creation, days + 1);
        prop_assert_eq!(longer - shorter, 86_400);
    }

    #[test]
    fn total_price_display__carries_at_most_two_decimals(
        (unit_price, quantity) in (0u64..=10_000_000_000u64, 1u64..=1_000u64)
    ) {
        let total = format::total_price_display(unit_price, quantity);
        let cents = total * 100.0;
        prop_assert!((cents - cents.round()).abs() < 1e-6);
    }
}
