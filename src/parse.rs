use crate::complex::Complex;
use crate::error::ComplexError;
use regex::{Captures, Regex};
use simple_error::{bail, SimpleError};
use std::str::FromStr;
use std::sync::OnceLock;

static COMPLEX_PATTERN: OnceLock<Regex> = OnceLock::new();

// Forms: "a", "a+bi", "a-bi", "a+i", "bi", "-i"; `j` works in place of `i`.
fn complex_pattern() -> &'static Regex {
    COMPLEX_PATTERN.get_or_init(|| {
        let num = r"(?:(?:\d+(?:\.\d*)?|\.\d+)(?:e[+-]?\d+)?|inf(?:inity)?|nan)";
        let pattern = format!(
            r"(?i)^\s*(?:(?<re>[+-]?{num})(?:\s*(?<sign>[+-])\s*(?<im>{num})?\s*\*?\s*[ij])?|(?<isign>[+-]?)\s*(?<imag>{num})?\s*\*?\s*[ij])\s*$"
        );
        Regex::new(&pattern).expect("Invalid regex!")
    })
}

fn component(text: &str) -> Result<f64, SimpleError> {
    text.parse::<f64>()
        .map_err(|_| SimpleError::new(format!("invalid component '{}'", text)))
}

// Imaginary magnitude with an optional sign; a bare `i` means 1.
fn imaginary(sign: Option<&str>, magnitude: Option<&str>) -> Result<f64, SimpleError> {
    let value = match magnitude {
        Some(m) => component(m)?,
        None => 1.0,
    };
    Ok(if sign == Some("-") { -value } else { value })
}

fn from_captures(caps: &Captures) -> Result<Complex, SimpleError> {
    if let Some(re) = caps.name("re") {
        let re = component(re.as_str())?;
        let im = match caps.name("sign") {
            Some(sign) => imaginary(Some(sign.as_str()), caps.name("im").map(|m| m.as_str()))?,
            None => 0.0,
        };
        return Ok(Complex::new(re, im));
    }
    let im = imaginary(
        caps.name("isign").map(|m| m.as_str()),
        caps.name("imag").map(|m| m.as_str()),
    )?;
    Ok(Complex::from_imag(im))
}

/// Parse a complex number in rectangular form.
pub fn parse_complex(text: &str) -> Result<Complex, SimpleError> {
    let Some(caps) = complex_pattern().captures(text) else {
        bail!("not a complex number");
    };
    from_captures(&caps)
}

impl FromStr for Complex {
    type Err = ComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_complex(s).map_err(|err| {
            tracing::debug!(input = s, "rejected complex number text");
            ComplexError::Parse(format!("{} in '{}'", err.as_str(), s))
        })
    }
}
