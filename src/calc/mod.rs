//! Arithmetic and classification helpers

use std::fmt;
use std::ops::Add;

/// Threshold above which a temperature counts as hot
pub const HOT_THRESHOLD: f64 = 20.0;

/// Errors returned by the arithmetic helpers
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// Denominator was zero
    #[error("cannot divide by zero")]
    DivisionByZero,
}

/// Add two values
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Divide `a` by `b`, rejecting a zero denominator
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    // Matches -0.0 as well
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// Result of a weather classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weather {
    /// Above the threshold
    Hot,
    /// At or below the threshold
    Cold,
}

impl Weather {
    /// Label used when displaying the classification
    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Hot => "Hot",
            Weather::Cold => "Cold",
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a temperature: strictly above 20 is hot, anything else cold
pub fn weather(temperature: f64) -> Weather {
    if temperature > HOT_THRESHOLD {
        Weather::Hot
    } else {
        Weather::Cold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let cases = [(1, 5, 6), (6, 4, 10), (8, 3, 11), (5, -1, 4)];

        for (a, b, expected) in cases {
            assert_eq!(add(a, b), expected, "{} + {}", a, b);
        }
    }

    #[test]
    fn test_add_floats() {
        assert_eq!(add(1.5, 2.25), 3.75);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10.0, 4.0), Ok(2.5));
        assert_eq!(divide(-9.0, 3.0), Ok(-3.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(10.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(divide(10.0, -0.0), Err(CalcError::DivisionByZero));
        assert_eq!(
            CalcError::DivisionByZero.to_string(),
            "cannot divide by zero"
        );
    }

    #[test]
    fn test_weather() {
        assert_eq!(weather(21.0), Weather::Hot);
        assert_eq!(weather(21.0).to_string(), "Hot");
        assert_eq!(weather(20.0), Weather::Cold);
        assert_eq!(weather(-5.0).to_string(), "Cold");
    }
}
