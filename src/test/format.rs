#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal_macros::dec;

    use crate::app::utils::{
        format_large_number, format_percent_change, format_price, format_signed_price,
        format_time_ago, format_volume,
    };

    #[test]
    fn large_numbers_use_scale_suffixes() {
        assert_eq!(format_large_number(dec!(1500000000)), "$1.50B");
        assert_eq!(format_large_number(dec!(2850000000000)), "$2.85T");
        assert_eq!(format_large_number(dec!(7250000)), "$7.25M");
        assert_eq!(format_large_number(dec!(1000)), "$1.00K");
        assert_eq!(format_large_number(dec!(999.5)), "$999.50");
    }

    #[test]
    fn volume_has_no_currency_sign() {
        assert_eq!(format_volume(dec!(2300000)), "2.30M");
        assert_eq!(format_volume(dec!(4100000000)), "4.10B");
        assert_eq!(format_volume(dec!(12500)), "12.50K");
        assert_eq!(format_volume(dec!(999)), "999");
    }

    #[test]
    fn prices_are_dollars_with_two_decimals() {
        assert_eq!(format_price(dec!(42.5)), "$42.50");
        assert_eq!(format_price(dec!(1234.5)), "$1,234.50");
        assert_eq!(format_price(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_price(dec!(-3.2)), "-$3.20");
        assert_eq!(format_price(dec!(0.005)), "$0.01");
    }

    #[test]
    fn changes_carry_explicit_sign() {
        assert_eq!(format_signed_price(dec!(2.5)), "+$2.50");
        assert_eq!(format_signed_price(dec!(-2.5)), "-$2.50");
        assert_eq!(format_percent_change(dec!(1.4)), "+1.40%");
        assert_eq!(format_percent_change(dec!(-0.567)), "-0.57%");
        assert_eq!(format_percent_change(dec!(0)), "+0.00%");
    }

    #[test]
    fn publish_times_are_relative() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 15, 0, 0).unwrap();
        let ago = |delta: Duration| (now - delta).to_rfc3339();

        assert_eq!(format_time_ago(None, now), "Unknown");
        assert_eq!(format_time_ago(Some("yesterday-ish"), now), "Unknown");
        assert_eq!(
            format_time_ago(Some(&ago(Duration::seconds(10))), now),
            "less than a minute ago"
        );
        assert_eq!(
            format_time_ago(Some(&ago(Duration::minutes(5))), now),
            "5 minutes ago"
        );
        assert_eq!(
            format_time_ago(Some(&ago(Duration::hours(3))), now),
            "about 3 hours ago"
        );
        assert_eq!(
            format_time_ago(Some(&ago(Duration::days(4))), now),
            "4 days ago"
        );
    }
}
