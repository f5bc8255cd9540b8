use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

const SCALES: [(Decimal, &str); 4] = [
    (dec!(1000000000000), "T"),
    (dec!(1000000000), "B"),
    (dec!(1000000), "M"),
    (dec!(1000), "K"),
];

fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// US dollar formatting with two decimals and thousands separators.
pub fn format_price(price: Decimal) -> String {
    let rounded = round_cents(price);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{}${}.{}", sign, group_thousands(whole), fraction)
}

/// Price change with an explicit `+` for non-negative values.
pub fn format_signed_price(change: Decimal) -> String {
    if change >= Decimal::ZERO {
        format!("+{}", format_price(change))
    } else {
        format_price(change)
    }
}

pub fn format_percent_change(percent: Decimal) -> String {
    let rounded = round_cents(percent);
    if rounded >= Decimal::ZERO {
        format!("+{:.2}%", rounded)
    } else {
        format!("{:.2}%", rounded)
    }
}

fn format_scaled(value: Decimal) -> Option<String> {
    SCALES
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|(threshold, suffix)| format!("{:.2}{}", round_cents(value / *threshold), suffix))
}

pub fn format_large_number(num: Decimal) -> String {
    match format_scaled(num) {
        Some(scaled) => format!("${}", scaled),
        None => format!("${:.2}", round_cents(num)),
    }
}

pub fn format_volume(volume: Decimal) -> String {
    // Volume is never expressed in trillions.
    if volume >= dec!(1000000000000) {
        return format!("{:.2}B", round_cents(volume / dec!(1000000000)));
    }
    format_scaled(volume).unwrap_or_else(|| volume.normalize().to_string())
}

/// Accepts RFC 3339 as well as naive ISO timestamps, the latter read as local time.
pub fn parse_timestamp(field: &str) -> Option<DateTime<Local>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(field) {
        return Some(parsed.with_timezone(&Local));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(field, format).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

pub fn format_clock(field: &str, with_seconds: bool) -> String {
    match parse_timestamp(field) {
        Some(time) if with_seconds => time.format("%H:%M:%S").to_string(),
        Some(time) => time.format("%H:%M").to_string(),
        None => field.to_string(),
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

fn describe_distance(seconds: i64) -> String {
    let minutes = (seconds as f64 / 60.0).round() as i64;
    let hours = (minutes as f64 / 60.0).round() as i64;
    let days = (minutes as f64 / 1440.0).round() as i64;
    let months = (days as f64 / 30.0).round() as i64;

    match minutes {
        m if seconds < 30 || m == 0 => "less than a minute".to_string(),
        m if m < 45 => plural(m, "minute"),
        m if m < 90 => "about 1 hour".to_string(),
        m if m < 1440 => format!("about {}", plural(hours, "hour")),
        m if m < 2520 => "1 day".to_string(),
        m if m < 43200 => plural(days, "day"),
        m if m < 86400 => format!("about {}", plural(months.max(1), "month")),
        m if m < 525600 => plural(months, "month"),
        _ => format!("about {}", plural(days / 365, "year")),
    }
}

/// Relative publish time for news entries, "Unknown" when absent or unreadable.
pub fn format_time_ago(published_at: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(published) = published_at.and_then(parse_timestamp) else {
        return "Unknown".to_string();
    };

    let seconds = (now - published.with_timezone(&Utc)).num_seconds();
    if seconds >= 0 {
        format!("{} ago", describe_distance(seconds))
    } else {
        format!("in {}", describe_distance(-seconds))
    }
}
