use std::str::FromStr;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::error::LocatorError;

// Absorbs binary representation error so exact inputs such as 45.1 keep their whole seconds.
const SECONDS_EPSILON: f64 = 1e-9;

static DECIMAL_DEGREES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+\.[0-9]+$").unwrap());

/// Degrees, minutes and seconds of an absolute decimal-degree value, seconds truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub hemisphere: char,
}

pub struct LatLongFormat {
    pos_token: char,
    neg_token: char,
    max_degree: f64,
}

impl LatLongFormat {
    pub fn lat_format() -> Self {
        LatLongFormat { pos_token: 'N', neg_token: 'S', max_degree: 90.0 }
    }

    pub fn long_format() -> Self {
        LatLongFormat { pos_token: 'E', neg_token: 'W', max_degree: 180.0 }
    }

    pub fn to_dms(&self, number: f64) -> Dms {
        let degrees = number.abs().trunc();
        let frac_seconds = (number.abs() - degrees) * 3600.0;
        // The allowance may never carry into the degree
        let mut seconds = (frac_seconds + SECONDS_EPSILON).floor();
        if seconds >= 3600.0 {
            seconds = frac_seconds.floor().min(3599.0);
        }
        let seconds = seconds as u32;
        Dms {
            degrees: degrees as u32,
            minutes: seconds / 60,
            seconds: seconds % 60,
            hemisphere: if number < 0.0 { self.neg_token } else { self.pos_token },
        }
    }

    fn dec_to_degree(&self, buff: &mut String, d: f64) {
        let dms = self.to_dms(d);
        buff.push_str(&format!(
            "{}\u{00b0}{}'{}\" {}",
            dms.degrees, dms.minutes, dms.seconds, dms.hemisphere
        ));
    }

    pub fn format(&self, number: f64) -> String {
        let mut buffer = String::new();
        self.dec_to_degree(&mut buffer, number);
        buffer
    }

    /// Parses a decimal-degree string such as `"-0.1278"` and checks it is in range for this axis.
    /// Only plain decimals with a fractional part are accepted, so `"51"` and `"1e1"` are rejected.
    pub fn parse(&self, source: &str) -> Result<f64, LocatorError> {
        let work = source.trim();
        if !DECIMAL_DEGREES.is_match(work) {
            return Err(LocatorError::Conversion(format!(
                "'{}' is not a decimal degree value",
                source
            )));
        }
        let value = f64::from_str(work)
            .map_err(|_| LocatorError::Conversion(format!("'{}' is not a decimal degree value", source)))?;
        if !value.is_finite() || value.abs() > self.max_degree {
            return Err(LocatorError::Conversion(format!(
                "'{}' is outside -{}..{}",
                source, self.max_degree, self.max_degree
            )));
        }
        Ok(value)
    }
}
