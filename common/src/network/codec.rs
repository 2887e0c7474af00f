//! # Numeric Codec
//!
//! Stateless conversions between address text and the `u128` every address
//! value is stored as.
//!
//! The text parsers only check *form*: segment counts, integer syntax and the
//! hextet range that is needed to fit 16 bits. IPv4 segment bounds are left to
//! [`crate::network::validate`], callers that want strict behaviour validate
//! first.

use std::borrow::Cow;

use tracing::debug;

use crate::error::{AddressError, AddressResult};
use crate::network::constants::{
    IPV4_MAX_SEGMENT_COUNT, IPV4_MAX_SEGMENT_VALUE, IPV6_MAX_SEGMENT_COUNT,
    IPV6_MAX_SEGMENT_VALUE, IPV6_MIN_SEGMENT_VALUE, IPV6_NUMBER_BIT_COUNT,
    IPV6_SEGMENT_BIT_COUNT,
};

const IPV4_SEGMENT_BASE: u128 = (IPV4_MAX_SEGMENT_VALUE + 1) as u128;
const IPV6_SEGMENT_BASE: u128 = (IPV6_MAX_SEGMENT_VALUE + 1) as u128;
const IPV6_SEGMENT_WIDTH: usize = (IPV6_SEGMENT_BIT_COUNT / IPV6_NUMBER_BIT_COUNT) as usize;
const ZERO_SEGMENT: &str = "0000";

/// Splits a leading sign off a trimmed token.
fn split_sign(token: &str) -> (bool, &str) {
    match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    }
}

/// Drops digit-group underscores (`1_000`). Every underscore must sit between
/// two digits of `radix`, anything else is not an integer.
fn strip_digit_groups(digits: &str, radix: u32) -> Option<Cow<'_, str>> {
    if digits.is_empty() || !digits.chars().all(|c| c == '_' || c.is_digit(radix)) {
        return None;
    }

    if !digits.contains('_') {
        return Some(Cow::Borrowed(digits));
    }

    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }

    Some(Cow::Owned(digits.replace('_', "")))
}

/// Unsigned digits to a value. Integers too wide for `i128` saturate, so they
/// still fail every range check while passing the form check.
fn parse_digits(digits: &str, radix: u32, negative: bool) -> Option<i128> {
    let digits = strip_digit_groups(digits, radix)?;
    let value = i128::from_str_radix(&digits, radix).unwrap_or(i128::MAX);
    Some(if negative { -value } else { value })
}

/// Parses a decimal integer token, tolerating surrounding whitespace and a sign.
pub(crate) fn parse_int(token: &str) -> Option<i128> {
    let (negative, digits) = split_sign(token.trim());
    parse_digits(digits, 10, negative)
}

/// Parses a hextet token. An empty token is a zero from a `::` boundary.
pub(crate) fn parse_hextet(token: &str) -> Option<i128> {
    if token.is_empty() {
        return Some(0);
    }

    let (negative, unsigned) = split_sign(token.trim());
    let digits = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .unwrap_or(unsigned);

    parse_digits(digits, IPV6_SEGMENT_BIT_COUNT, negative)
}

/// Restores the hextets hidden behind a `::`.
///
/// The result is *not* guaranteed to hold eight tokens: too many explicit
/// hextets stay too many, and a text without `::` keeps whatever count it had.
pub fn expand_hextets(address: &str) -> AddressResult<Vec<&str>> {
    let halves: Vec<&str> = address.split("::").collect();

    match halves.as_slice() {
        [left_half, right_half] => {
            let left: Vec<&str> = left_half.split(':').collect();
            let right: Vec<&str> = right_half.split(':').collect();
            let total_length = left.len() + right.len();

            let mut segments: Vec<&str> = Vec::with_capacity(IPV6_MAX_SEGMENT_COUNT);
            if left_half.is_empty() {
                segments.push(ZERO_SEGMENT);
            } else {
                segments.extend(left);
            }

            let skipped = IPV6_MAX_SEGMENT_COUNT.saturating_sub(total_length);
            segments.extend(std::iter::repeat_n(ZERO_SEGMENT, skipped));

            if right_half.is_empty() {
                segments.push(ZERO_SEGMENT);
            } else {
                segments.extend(right);
            }

            Ok(segments)
        }
        [full] => Ok(full.split(':').collect()),
        _ => Err(AddressError::MultipleElisions),
    }
}

/// Takes an IPv4 address and turns it into an equivalent integer value.
///
/// A negative total (only reachable through signed segments) becomes zero.
pub fn ipv4_to_num(address: &str) -> AddressResult<u128> {
    let segments: Vec<i128> = address
        .split('.')
        .map(|seg| parse_int(seg).ok_or_else(|| AddressError::InvalidIpv4Segment(seg.to_string())))
        .collect::<AddressResult<_>>()?;

    if segments.len() != IPV4_MAX_SEGMENT_COUNT {
        debug!("rejecting IPv4 '{address}': {} segments", segments.len());
        return Err(AddressError::Ipv4SegmentCount(segments.len()));
    }

    let total: i128 = segments
        .iter()
        .rev()
        .enumerate()
        .try_fold(0i128, |total, (idx, seg)| {
            seg.checked_mul((IPV4_SEGMENT_BASE as i128).pow(idx as u32))
                .and_then(|weighted| total.checked_add(weighted))
        })
        .ok_or_else(|| AddressError::NoRepresentation(address.to_string()))?;

    Ok(total.max(0) as u128)
}

/// Generates an IPv4 string from an integer. Bits above 32 are discarded.
pub fn num_to_ipv4(num: u128) -> String {
    let mut num = num;
    let mut segments: Vec<String> = Vec::with_capacity(IPV4_MAX_SEGMENT_COUNT);

    for _ in 0..IPV4_MAX_SEGMENT_COUNT {
        segments.push((num % IPV4_SEGMENT_BASE).to_string());
        num /= IPV4_SEGMENT_BASE;
    }

    segments.reverse();
    segments.join(".")
}

/// Takes an IPv6 address (without brackets or port) and turns it into an
/// equivalent integer value.
pub fn ipv6_to_num(address: &str) -> AddressResult<u128> {
    let segments: Vec<(&str, i128)> = expand_hextets(address)?
        .into_iter()
        .map(|seg| {
            parse_hextet(seg)
                .map(|value| (seg, value))
                .ok_or_else(|| AddressError::InvalidCharacters(seg.to_string()))
        })
        .collect::<AddressResult<_>>()?;

    if segments.len() != IPV6_MAX_SEGMENT_COUNT {
        debug!("rejecting IPv6 '{address}': {} segments", segments.len());
        return Err(AddressError::Ipv6SegmentCount(segments.len()));
    }

    if let Some((highest, _)) = segments
        .iter()
        .max_by_key(|(_, value)| *value)
        .filter(|(_, max)| *max > IPV6_MAX_SEGMENT_VALUE)
    {
        return Err(AddressError::SegmentTooLarge(highest.trim().to_string()));
    }

    if let Some((lowest, _)) = segments
        .iter()
        .min_by_key(|(_, value)| *value)
        .filter(|(_, min)| *min < IPV6_MIN_SEGMENT_VALUE)
    {
        return Err(AddressError::SegmentTooSmall(lowest.trim().to_string()));
    }

    let total = segments
        .iter()
        .rev()
        .enumerate()
        .fold(0u128, |total, (idx, &(_, seg))| {
            total | ((seg as u128) << (idx as u32 * IPV6_SEGMENT_BIT_COUNT))
        });

    Ok(total)
}

/// Generates an IPv6 string from an integer.
///
/// * `shorten`: hextets are written without leading zeroes, otherwise they
///   are padded to four digits.
/// * `remove_zeroes`: the longest run of zero hextets becomes `::`.
pub fn num_to_ipv6(num: u128, shorten: bool, remove_zeroes: bool) -> String {
    let mut num = num;

    // Least significant hextet first until the final reversal.
    let mut segments: Vec<String> = Vec::with_capacity(IPV6_MAX_SEGMENT_COUNT);
    for _ in 0..IPV6_MAX_SEGMENT_COUNT {
        segments.push(format!("{:X}", num % IPV6_SEGMENT_BASE));
        num /= IPV6_SEGMENT_BASE;
    }

    if remove_zeroes && segments.iter().any(|seg| seg == "0") {
        segments = elide_zero_run(segments);
    }

    if !shorten {
        for seg in segments.iter_mut().filter(|seg| !seg.is_empty()) {
            *seg = format!("{seg:0>IPV6_SEGMENT_WIDTH$}");
        }
    }

    segments.reverse();
    segments.join(":")
}

/// Finds the longest strip of zero hextets as `(start, length)`.
///
/// Ties keep the strip seen first, scanning from the least significant end.
fn longest_zero_run(segments: &[String]) -> (usize, usize) {
    let mut longest = 0;
    let mut longest_idx = 0;
    let mut current = 0;
    let mut current_idx = 0;

    for (idx, seg) in segments.iter().enumerate() {
        if seg == "0" {
            if current == 0 {
                current_idx = idx;
            }
            current += 1;
        } else {
            current = 0;
        }

        if current > longest {
            longest = current;
            longest_idx = current_idx;
        }
    }

    (longest_idx, longest)
}

/// Replaces the longest zero strip with a single empty placeholder.
///
/// A strip touching either end keeps an extra empty string on that side so
/// the final join still renders `::` there.
fn elide_zero_run(segments: Vec<String>) -> Vec<String> {
    let (start, length) = longest_zero_run(&segments);
    let end = start + length;

    let mut elided: Vec<String> = Vec::with_capacity(IPV6_MAX_SEGMENT_COUNT);

    if start == 0 {
        elided.push(String::new());
    } else {
        elided.extend_from_slice(&segments[..start]);
    }

    elided.push(String::new());

    if end == segments.len() {
        elided.push(String::new());
    } else {
        elided.extend_from_slice(&segments[end..]);
    }

    elided
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
