//! Canonical fixed-precision coordinate formatting.
//!
//! The checksum is computed over the strings produced here, so the rounding
//! rule is load-bearing: round-half-up (ties away from zero), not the
//! round-half-even that `format!("{:.6}")` applies at a decimal midpoint.
//! Rounding is decided on the decimal expansion of the value rather than on
//! a float scaled by a power of ten, which would reintroduce binary error.

/// Fractional digits for latitude and longitude fields.
pub const LAT_LNG_DECIMALS: usize = 6;
/// Fractional digits for the altitude field.
pub const ALT_DECIMALS: usize = 2;

/// Extra digits rendered before the half-up decision is made. A double near
/// a decimal midpoint differs from it within its ulp, which shows up well
/// inside this window.
const GUARD_DIGITS: usize = 20;

/// Render `value` with exactly `decimals` fractional digits, rounding
/// half-up on the magnitude. A single leading `-` appears only when the
/// rounded magnitude is nonzero, so zero has exactly one spelling.
///
/// Finite inputs only; NaN and infinities must be rejected upstream.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    debug_assert!(value.is_finite(), "format_fixed requires a finite value");

    let expanded = format!("{:.*}", decimals + GUARD_DIGITS, value.abs());
    let rounded = round_half_up(&expanded, decimals);

    if value.is_sign_negative() && rounded.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        format!("-{rounded}")
    } else {
        rounded
    }
}

/// The exact string the checksum engine digests: `v1|<lat:6>|<lng:6>|<alt:2>`.
pub fn build_canonical_payload(lat: f64, lng: f64, alt: f64) -> String {
    format!(
        "v1|{}|{}|{}",
        format_fixed(lat, LAT_LNG_DECIMALS),
        format_fixed(lng, LAT_LNG_DECIMALS),
        format_fixed(alt, ALT_DECIMALS),
    )
}

/// Truncate a non-negative decimal string to `decimals` fractional digits,
/// carrying +1 through the kept digits when the first dropped digit is >= 5.
fn round_half_up(expanded: &str, decimals: usize) -> String {
    let dot = expanded
        .find('.')
        .expect("fixed-precision rendering always contains a decimal point");
    let keep = dot + 1 + decimals;
    let mut digits: Vec<u8> = expanded.as_bytes()[..keep].to_vec();

    if expanded.as_bytes()[keep] >= b'5' {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'.' {
                continue;
            }
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    String::from_utf8(digits).expect("decimal digits are ascii")
}
