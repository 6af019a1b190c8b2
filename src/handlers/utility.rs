//! Stateless utility operations behind the `/utils` routes.
//!
//! Every function here is pure apart from reading the clock, the random
//! number generator or the host's memory counters. Expected failures
//! (blank email, bad base64, unknown zone) come back as records with a
//! `valid`/`success` discriminator.

use crate::models::utility::{
    Base64Decoding, Base64Encoding, CurrentTime, EmailValidation, RandomData, SystemInfo,
    UnknownZone, ZonedTime,
};
use crate::validation::email_format::{matches_email_pattern, split_address};
use base64::engine::general_purpose::STANDARD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{Engine as _, alphabet};
use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Utc, Weekday};
use chrono_tz::{TZ_VARIANTS, Tz};
use rand::Rng;
use rand::distr::Alphanumeric;
use std::fmt::Display;
use sysinfo::System;

pub const MIN_RANDOM_COUNT: i64 = 1;
pub const MAX_RANDOM_COUNT: i64 = 100;
pub const DEFAULT_RANDOM_COUNT: i64 = 5;

const RANDOM_STRING_LENGTH: usize = 8;
const SAMPLE_ZONE_COUNT: usize = 10;
const BYTES_PER_MB: u64 = 1024 * 1024;

/// Standard alphabet; trailing `=` padding is optional on decode.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub fn validate_email(email: Option<&str>) -> EmailValidation {
    let mut validation = EmailValidation {
        email: email.map(str::to_string),
        timestamp: Utc::now().to_rfc3339(),
        valid: false,
        reason: "Email is empty or null".to_string(),
        domain: None,
        local_part: None,
    };

    let Some(email) = email.filter(|e| !e.trim().is_empty()) else {
        return validation;
    };

    match split_address(email).filter(|_| matches_email_pattern(email)) {
        Some((local_part, domain)) => {
            validation.valid = true;
            validation.reason = "Valid email format".to_string();
            validation.domain = Some(domain.to_string());
            validation.local_part = Some(local_part.to_string());
        }
        None => validation.reason = "Invalid email format".to_string(),
    }
    validation
}

pub fn encode_base64(input: Option<&str>) -> Base64Encoding {
    let timestamp = Utc::now().to_rfc3339();
    match input {
        Some(text) => {
            let encoded = STANDARD.encode(text.as_bytes());
            Base64Encoding {
                original_text: Some(text.to_string()),
                timestamp,
                original_length: Some(text.chars().count()),
                encoded_length: Some(encoded.len()),
                encoded: Some(encoded),
                error: None,
            }
        }
        None => Base64Encoding {
            original_text: None,
            timestamp,
            encoded: None,
            original_length: None,
            encoded_length: None,
            error: Some("Input is null".to_string()),
        },
    }
}

/// Decodes standard base64. Invalid UTF-8 in the payload is replaced with
/// U+FFFD rather than rejected.
pub fn decode_base64(encoded: Option<&str>) -> Base64Decoding {
    let mut decoding = Base64Decoding {
        encoded_text: encoded.map(str::to_string),
        timestamp: Utc::now().to_rfc3339(),
        decoded: None,
        success: false,
        error: None,
    };

    let Some(encoded) = encoded else {
        decoding.error = Some("Input is null".to_string());
        return decoding;
    };

    match LENIENT_STANDARD.decode(encoded) {
        Ok(bytes) => {
            decoding.decoded = Some(String::from_utf8_lossy(&bytes).into_owned());
            decoding.success = true;
        }
        Err(err) => decoding.error = Some(format!("Invalid Base64 string: {err}")),
    }
    decoding
}

/// Generates `count` numbers in `[1, 1000)` and `count` alphanumeric
/// strings, plus one boolean and one double rounded to 2 decimals.
///
/// The caller bounds `count`; see [`is_valid_random_count`].
pub fn generate_random_data(count: usize) -> RandomData {
    let mut rng = rand::rng();

    let random_numbers: Vec<u32> = (0..count).map(|_| rng.random_range(1..1000)).collect();
    let random_strings: Vec<String> = (0..count)
        .map(|_| random_string(&mut rng, RANDOM_STRING_LENGTH))
        .collect();

    RandomData {
        timestamp: Utc::now().to_rfc3339(),
        count,
        random_numbers,
        random_strings,
        random_boolean: rng.random_bool(0.5),
        random_double: round_two_places(rng.random::<f64>()),
    }
}

pub fn is_valid_random_count(count: i64) -> bool {
    (MIN_RANDOM_COUNT..=MAX_RANDOM_COUNT).contains(&count)
}

pub(crate) fn random_string<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

pub(crate) fn round_two_places(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Current wall-clock time in `timezone`, or in the host zone when `None`.
///
/// Accepts IANA names (`Europe/Paris`) and fixed offsets (`Z`, `+05:00`,
/// `UTC+2`, `GMT-0330`).
pub fn current_time(timezone: Option<&str>) -> CurrentTime {
    let now = Utc::now();
    let Some(name) = timezone else {
        let zone = system_zone();
        return CurrentTime::Resolved(zoned_time(&zone, zone.name(), now));
    };

    if let Ok(zone) = name.parse::<Tz>() {
        return CurrentTime::Resolved(zoned_time(&zone, zone.name(), now));
    }
    if let Some((offset, id)) = parse_fixed_offset(name) {
        return CurrentTime::Resolved(zoned_time(&offset, &id, now));
    }

    CurrentTime::UnknownZone(UnknownZone {
        timestamp: now.to_rfc3339(),
        error: format!("Invalid timezone: unknown time-zone ID: {name}"),
        success: false,
        available_timezones: TZ_VARIANTS
            .iter()
            .take(SAMPLE_ZONE_COUNT)
            .map(|tz| tz.name().to_string())
            .collect(),
    })
}

/// Parses `Z`, `+h`, `+hh`, `+hhmm` or `+hh:mm`, optionally prefixed with
/// `UTC`, `GMT` or `UT`. Returns the offset and its normalized id.
pub(crate) fn parse_fixed_offset(name: &str) -> Option<(FixedOffset, String)> {
    if name == "Z" {
        return Some((FixedOffset::east_opt(0)?, "Z".to_string()));
    }

    let (prefix, rest) = ["UTC", "GMT", "UT"]
        .iter()
        .find_map(|p| name.strip_prefix(p).map(|rest| (*p, rest)))
        .unwrap_or(("", name));

    let sign = match rest.chars().next()? {
        '+' => 1,
        '-' => -1,
        _ => return None,
    };
    let digits = &rest[1..];
    if !digits.chars().all(|c| c.is_ascii_digit() || c == ':') {
        return None;
    }
    let (hours, minutes) = match digits.split_once(':') {
        Some((hours, minutes)) if minutes.len() == 2 => (hours, minutes),
        Some(_) => return None,
        None if digits.len() <= 2 => (digits, "0"),
        None if digits.len() == 4 => digits.split_at(2),
        None => return None,
    };
    if hours.is_empty() || hours.len() > 2 || minutes.contains(':') {
        return None;
    }

    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 18 || minutes > 59 {
        return None;
    }

    let offset = FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))?;
    Some((offset, format!("{prefix}{offset}")))
}

pub(crate) fn zoned_time<Z>(zone: &Z, zone_id: &str, now: DateTime<Utc>) -> ZonedTime
where
    Z: TimeZone,
    Z::Offset: Display,
{
    let local = now.with_timezone(zone);
    let naive = local.naive_local();

    ZonedTime {
        timestamp: now.to_rfc3339(),
        timezone: zone_id.to_string(),
        date_time: local.to_rfc3339(),
        formatted: naive.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
        date: naive.format("%Y-%m-%d").to_string(),
        time: naive.format("%H:%M:%S%.f").to_string(),
        day_of_week: weekday_name(naive.weekday()).to_string(),
        day_of_year: naive.ordinal(),
        success: true,
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MONDAY",
        Weekday::Tue => "TUESDAY",
        Weekday::Wed => "WEDNESDAY",
        Weekday::Thu => "THURSDAY",
        Weekday::Fri => "FRIDAY",
        Weekday::Sat => "SATURDAY",
        Weekday::Sun => "SUNDAY",
    }
}

/// Host time zone, UTC when it cannot be determined.
pub fn system_zone() -> Tz {
    iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| name.parse::<Tz>().ok())
        .unwrap_or(Tz::UTC)
}

/// Host memory counters, in whole megabytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemorySnapshot {
    pub total_mb: u64,
    pub used_mb: u64,
    pub free_mb: u64,
}

impl MemorySnapshot {
    pub fn capture() -> Self {
        let mut system = System::new();
        system.refresh_memory();
        Self {
            total_mb: system.total_memory() / BYTES_PER_MB,
            used_mb: system.used_memory() / BYTES_PER_MB,
            free_mb: system.available_memory() / BYTES_PER_MB,
        }
    }
}

pub fn format_mb(value: u64) -> String {
    format!("{value} MB")
}

pub fn available_processors() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

pub fn system_info(service_version: &str) -> SystemInfo {
    let memory = MemorySnapshot::capture();
    SystemInfo {
        timestamp: Utc::now().to_rfc3339(),
        timezone: system_zone().name().to_string(),
        service_version: service_version.to_string(),
        os_name: System::name().unwrap_or_else(|| std::env::consts::OS.to_string()),
        os_version: System::os_version().unwrap_or_else(|| "unknown".to_string()),
        os_arch: std::env::consts::ARCH.to_string(),
        available_processors: available_processors(),
        total_memory: format_mb(memory.total_mb),
        used_memory: format_mb(memory.used_mb),
        free_memory: format_mb(memory.free_mb),
    }
}
