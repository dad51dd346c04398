//! The JSON numeric value type.

use bigdecimal::{BigDecimal, FromPrimitive, RoundingMode, ToPrimitive};
use num_bigint::{BigInt, Sign};

/// A JSON number, tagged by its backing representation.
///
/// Coercion rules:
/// - integral representations widen losslessly;
/// - floating representations truncate toward zero when coerced to an
///   integral type, an intentional precision loss rather than an error;
/// - coercion from an integral value to [`BigDecimal`] is exact;
/// - narrowing between integral types saturates at the bounds of the
///   target.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonNumber {
    Int(i32),
    Long(i64),
    BigInt(BigInt),
    Double(f64),
    Decimal(BigDecimal),
}

impl JsonNumber {
    /// Whether the backing representation is integral.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            JsonNumber::Int(_) | JsonNumber::Long(_) | JsonNumber::BigInt(_)
        )
    }

    /// Whether the backing representation carries a fractional part.
    pub fn is_floating_point(&self) -> bool {
        matches!(self, JsonNumber::Double(_) | JsonNumber::Decimal(_))
    }

    pub fn as_i32(&self) -> i32 {
        match self {
            JsonNumber::Int(v) => *v,
            JsonNumber::Long(v) => (*v).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            JsonNumber::BigInt(v) => v.to_i32().unwrap_or_else(|| saturate_i32(v.sign())),
            JsonNumber::Double(v) => *v as i32,
            JsonNumber::Decimal(v) => {
                let truncated = v.with_scale_round(0, RoundingMode::Down);
                truncated
                    .to_i32()
                    .unwrap_or_else(|| saturate_i32(v.sign()))
            }
        }
    }

    pub fn as_i64(&self) -> i64 {
        match self {
            JsonNumber::Int(v) => i64::from(*v),
            JsonNumber::Long(v) => *v,
            JsonNumber::BigInt(v) => v.to_i64().unwrap_or_else(|| saturate_i64(v.sign())),
            JsonNumber::Double(v) => *v as i64,
            JsonNumber::Decimal(v) => {
                let truncated = v.with_scale_round(0, RoundingMode::Down);
                truncated
                    .to_i64()
                    .unwrap_or_else(|| saturate_i64(v.sign()))
            }
        }
    }

    /// Lossy for values outside `f64`'s exact range; `NaN` when the
    /// backing value has no `f64` image at all.
    pub fn as_f64(&self) -> f64 {
        match self {
            JsonNumber::Int(v) => f64::from(*v),
            JsonNumber::Long(v) => *v as f64,
            JsonNumber::BigInt(v) => v.to_f64().unwrap_or(f64::NAN),
            JsonNumber::Double(v) => *v,
            JsonNumber::Decimal(v) => v.to_f64().unwrap_or(f64::NAN),
        }
    }

    /// Widens integral values exactly; floating values go through the
    /// truncating `i64` coercion first.
    pub fn as_big_int(&self) -> BigInt {
        match self {
            JsonNumber::BigInt(v) => v.clone(),
            JsonNumber::Int(v) => BigInt::from(*v),
            JsonNumber::Long(v) => BigInt::from(*v),
            JsonNumber::Double(_) | JsonNumber::Decimal(_) => BigInt::from(self.as_i64()),
        }
    }

    /// Exact for every integral representation. A non-finite `f64` has
    /// no decimal image and maps to zero.
    pub fn as_big_decimal(&self) -> BigDecimal {
        match self {
            JsonNumber::Int(v) => BigDecimal::from(*v),
            JsonNumber::Long(v) => BigDecimal::from(*v),
            JsonNumber::BigInt(v) => BigDecimal::from(v.clone()),
            JsonNumber::Double(v) => BigDecimal::from_f64(*v).unwrap_or_default(),
            JsonNumber::Decimal(v) => v.clone(),
        }
    }
}

fn saturate_i32(sign: Sign) -> i32 {
    if sign == Sign::Minus { i32::MIN } else { i32::MAX }
}

fn saturate_i64(sign: Sign) -> i64 {
    if sign == Sign::Minus { i64::MIN } else { i64::MAX }
}

impl From<i32> for JsonNumber {
    fn from(v: i32) -> Self {
        JsonNumber::Int(v)
    }
}

impl From<i64> for JsonNumber {
    fn from(v: i64) -> Self {
        JsonNumber::Long(v)
    }
}

impl From<BigInt> for JsonNumber {
    fn from(v: BigInt) -> Self {
        JsonNumber::BigInt(v)
    }
}

impl From<f64> for JsonNumber {
    fn from(v: f64) -> Self {
        JsonNumber::Double(v)
    }
}

impl From<BigDecimal> for JsonNumber {
    fn from(v: BigDecimal) -> Self {
        JsonNumber::Decimal(v)
    }
}

/// Maps a parsed JSON number onto the narrowest fitting representation:
/// `Int` when the value fits `i32`, `Long` for wider signed integers,
/// `BigInt` for unsigned values beyond `i64`, `Double` otherwise.
impl From<&serde_json::Number> for JsonNumber {
    fn from(n: &serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            i32::try_from(i)
                .map(JsonNumber::Int)
                .unwrap_or(JsonNumber::Long(i))
        } else if let Some(u) = n.as_u64() {
            JsonNumber::BigInt(BigInt::from(u))
        } else {
            JsonNumber::Double(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}
