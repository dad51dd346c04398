//! siphon-json — the JSON numeric value.
//!
//! [`JsonNumber`] is a tagged union over five backing representations
//! (`i32`, `i64`, [`num_bigint::BigInt`], `f64`,
//! [`bigdecimal::BigDecimal`]) with classification predicates and
//! explicit per-variant coercions. Narrowing a floating value to an
//! integral one truncates toward zero by design; widening an integral
//! value is always exact.

pub mod number;

pub use number::JsonNumber;
