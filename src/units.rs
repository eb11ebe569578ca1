//! Length, weight, distance and price conversions.
//!
//! Numeric text accepts `,` as the decimal separator (`"1,5"` == `"1.5"`).

use crate::error::{Error, Result};
use serde::Serialize;

pub const INCH_IN_CM: f64 = 2.54;
pub const LBS_IN_KG: f64 = 0.45359237;
pub const DEFAULT_VAT_PERCENT: f64 = 5.0;
pub const MILE_IN_KM: f64 = 1.609344;
pub const MILE_IN_NAUTICAL: f64 = 0.8684;
/// Statute miles per nautical mile, applied to one minute of arc
const MILES_PER_ARC_MINUTE: f64 = 1.1515;
// f64 keeps no more significant decimals than this
const MAX_PRECISION: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeetInches {
    pub feet: u32,
    pub inches: u32,
}

fn parse_decimal(input: &str) -> Result<Option<f64>> {
    let text = input.trim().replace(',', ".");
    if text.is_empty() {
        return Ok(None);
    }
    let value: f64 = text
        .parse()
        .map_err(|_| Error::format(input, "not a number"))?;
    if !value.is_finite() {
        return Err(Error::format(input, "not a finite number"));
    }
    Ok(Some(value))
}

fn round_to(value: f64, precision: u32) -> f64 {
    if precision > MAX_PRECISION {
        return value;
    }
    let factor = 10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Whole feet and inches to centimetres. Fractions are dropped before converting.
pub fn feet_inches_to_cm(feet_text: &str, inches_text: &str) -> Result<i64> {
    let feet = parse_decimal(feet_text)?.unwrap_or(0.0).trunc();
    let inches = parse_decimal(inches_text)?.unwrap_or(0.0).trunc();
    let cm = ((feet * 12.0 + inches) * INCH_IN_CM).round();

    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if !cm.is_finite() || cm.abs() >= i64::MAX as f64 {
        return Err(Error::format(
            &format!("{}ft {}in", feet_text, inches_text),
            "value is too large",
        ));
    }
    Ok(cm as i64)
}

/// Centimetres to feet and remaining inches; `None` for empty or zero input.
pub fn cm_to_feet_inches(cm_text: &str) -> Result<Option<FeetInches>> {
    let cm = match parse_decimal(cm_text)? {
        Some(v) if v < 0.0 => return Err(Error::format(cm_text, "length must not be negative")),
        Some(v) if v != 0.0 => v,
        _ => return Ok(None),
    };
    if cm / INCH_IN_CM / 12.0 > f64::from(u32::MAX) {
        return Err(Error::format(cm_text, "value is too large"));
    }

    let inches = cm / INCH_IN_CM;
    Ok(Some(FeetInches {
        feet: (inches / 12.0).trunc() as u32,
        inches: (inches.trunc() as u32) % 12,
    }))
}

pub fn pounds_to_kg(pounds: &str) -> Result<f64> {
    Ok(parse_decimal(pounds)?.map_or(0.0, |lbs| lbs * LBS_IN_KG))
}

pub fn kg_to_pounds(kg: &str) -> Result<f64> {
    Ok(parse_decimal(kg)?.map_or(0.0, |kg| kg / LBS_IN_KG))
}

/// Price including VAT, to two decimals.
pub fn price_with_vat(price: f64, vat_percent: f64) -> f64 {
    round_to(price + price / 100.0 * vat_percent, 2)
}

/// Discount value of `percent` on `price`, to two decimals.
pub fn discount_amount(price: f64, percent: f64) -> f64 {
    round_to(price / 100.0 * percent, 2)
}

pub fn round_abs(value: f64, precision: u32) -> f64 {
    round_to(value.abs(), precision)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers,
    NauticalMiles,
}

impl DistanceUnit {
    /// `K` for kilometres, `N` for nautical miles; anything else is miles.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "K" => DistanceUnit::Kilometers,
            "N" => DistanceUnit::NauticalMiles,
            _ => DistanceUnit::Miles,
        }
    }
}

/// Great-circle distance between two coordinates given in degrees.
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64, unit: DistanceUnit) -> Result<f64> {
    for (lat, lon) in [(lat1, lon1), (lat2, lon2)] {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(Error::format(&lat.to_string(), "latitude must be within -90..=90"));
        }
        if !lon.is_finite() {
            return Err(Error::format(&lon.to_string(), "longitude must be finite"));
        }
    }

    let theta = (lon1 - lon2).to_radians();
    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());
    let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * theta.cos();
    // rounding can push identical points just past 1.0
    let degrees = cos_angle.clamp(-1.0, 1.0).acos().to_degrees();
    let miles = degrees * 60.0 * MILES_PER_ARC_MINUTE;

    Ok(match unit {
        DistanceUnit::Miles => miles,
        DistanceUnit::Kilometers => miles * MILE_IN_KM,
        DistanceUnit::NauticalMiles => miles * MILE_IN_NAUTICAL,
    })
}
