use std::{fmt, ops::{Add, Mul, Neg}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A numeric value stored in a [`Kind::Num`](super::Kind::Num) node.
///
/// Numbers are kept normalized: a value with an integral floating-point representation (that
/// fits in an [`i64`]) is always stored as [`Number::Int`]. Integer arithmetic that overflows
/// falls back to floating-point arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    /// An integer, such as `2` or `-15`.
    Int(i64),

    /// A value with a fractional part, such as `0.5`.
    Float(f64),
}

impl Number {
    /// Creates a normalized number from a float.
    pub fn from_f64(value: f64) -> Self {
        // `i64::MAX as f64` rounds up to 2^63, which is out of range
        if value.is_finite()
            && value.fract() == 0.0
            && value >= i64::MIN as f64
            && value < i64::MAX as f64
        {
            Self::Int(value as i64)
        } else {
            Self::Float(value)
        }
    }

    /// Parses a numeric literal, such as `12`, `3.5`, `.5` or `2.`. Returns [`None`] if the
    /// literal is not a finite number.
    pub fn parse(literal: &str) -> Option<Self> {
        if let Ok(int) = literal.parse::<i64>() {
            return Some(Self::Int(int));
        }

        literal.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Self::from_f64)
    }

    /// Returns the number as a float.
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Int(int) => int as f64,
            Self::Float(float) => float,
        }
    }

    /// Returns the number as an integer, if it is one.
    pub fn as_int(self) -> Option<i64> {
        match self {
            Self::Int(int) => Some(int),
            Self::Float(float) => match Self::from_f64(float) {
                Self::Int(int) => Some(int),
                Self::Float(_) => None,
            },
        }
    }

    /// Returns true if the number is zero.
    pub fn is_zero(self) -> bool {
        self.to_f64() == 0.0
    }

    /// Returns true if the number is one.
    pub fn is_one(self) -> bool {
        self.to_f64() == 1.0
    }

    /// Returns true if the number is strictly negative.
    pub fn is_negative(self) -> bool {
        self.to_f64() < 0.0
    }

    /// Returns true if the number is neither infinite nor NaN.
    pub fn is_finite(self) -> bool {
        self.to_f64().is_finite()
    }

    /// Raises the number to the given power.
    ///
    /// The result may be non-finite (for example, `(-8)^0.5`); callers decide how to report it.
    pub fn pow(self, exponent: Self) -> Self {
        if let (Self::Int(base), Self::Int(exp)) = (self, exponent) {
            if let Some(int) = u32::try_from(exp).ok().and_then(|exp| base.checked_pow(exp)) {
                return Self::Int(int);
            }
        }

        Self::from_f64(self.to_f64().powf(exponent.to_f64()))
    }
}

impl From<i64> for Number {
    fn from(int: i64) -> Self {
        Self::Int(int)
    }
}

impl From<i32> for Number {
    fn from(int: i32) -> Self {
        Self::Int(int.into())
    }
}

impl From<f64> for Number {
    fn from(float: f64) -> Self {
        Self::from_f64(float)
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Int(lhs), Self::Int(rhs)) => lhs.checked_add(rhs)
                .map_or_else(|| Self::from_f64(lhs as f64 + rhs as f64), Self::Int),
            (lhs, rhs) => Self::from_f64(lhs.to_f64() + rhs.to_f64()),
        }
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Int(lhs), Self::Int(rhs)) => lhs.checked_mul(rhs)
                .map_or_else(|| Self::from_f64(lhs as f64 * rhs as f64), Self::Int),
            (lhs, rhs) => Self::from_f64(lhs.to_f64() * rhs.to_f64()),
        }
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Int(int) => int.checked_neg()
                .map_or_else(|| Self::from_f64(-(int as f64)), Self::Int),
            Self::Float(float) => Self::from_f64(-float),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(int) => write!(f, "{}", int),
            Self::Float(float) => write!(f, "{}", float),
        }
    }
}
