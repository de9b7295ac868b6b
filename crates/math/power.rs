use num_traits::checked_pow;

use crate::error::{PowerError, UpowResult};
use crate::number::{bit_width, PowInt};

/// The base used everywhere a caller does not ask for another one.
pub const DEFAULT_BASE: u32 = 2;

/// A value together with the smallest power of a base that is greater
/// than or equal to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpperPower<T: PowInt> {
  /// The non-negative target value the power was computed for.
  pub value:    T,
  /// The exponent `k` with `result == base^k`.
  pub exponent: u32,
  /// The nearest upper power itself. Always `>= value`, and no smaller
  /// power of the base is.
  pub result:   T,
}

/// Arithmetic strategy for locating the nearest upper power. All three
/// produce identical results for every valid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
  /// Exponent taken from the bit length of `value - 1`. Exact, no
  /// floating point involved. Base 2 only.
  BitLength,
  /// Exponent from `ceil(ln value / ln base)`, re-anchored with exact
  /// integer arithmetic to absorb float rounding at power boundaries.
  Logarithmic,
  /// Multiply an accumulator by the base until it reaches the value.
  /// O(k) multiplications, kept as a cross-check oracle.
  Iterative,
}

impl Method {
  pub fn compute<T: PowInt>(self, value: T, base: T) -> UpowResult<UpperPower<T>> {
    validate(value, base)?;
    match self {
      Method::BitLength if base != two() => Err(PowerError::NonBinaryBase),
      Method::BitLength => by_bit_length(value),
      Method::Logarithmic => by_logarithm(value, base),
      Method::Iterative => by_iteration(value, base),
    }
  }
}

/// Smallest power of 2 greater than or equal to `value`.
///
/// The exponent is the bit length of `value - 1`:
/// ```text
/// value = 13:  12 = 0b1100, bit length 4, nearest = 2^4 = 16
/// value = 4:    3 = 0b0011, bit length 2, nearest = 2^2 = 4
/// ```
pub fn upper_power_of_two<T: PowInt>(value: T) -> UpowResult<UpperPower<T>> {
  if value < T::zero() {
    return Err(PowerError::NegativeValue);
  }
  by_bit_length(value)
}

/// Smallest power of `base` greater than or equal to `value`.
///
/// Dispatches to the exact bit-length method for base 2 and to the
/// guarded logarithm for every other base.
pub fn upper_power<T: PowInt>(value: T, base: T) -> UpowResult<UpperPower<T>> {
  validate(value, base)?;
  if base == two() {
    by_bit_length(value)
  } else {
    by_logarithm(value, base)
  }
}

fn validate<T: PowInt>(value: T, base: T) -> UpowResult<()> {
  if base < two() {
    Err(PowerError::InvalidBase)
  } else if value < T::zero() {
    Err(PowerError::NegativeValue)
  } else {
    Ok(())
  }
}

fn two<T: PowInt>() -> T {
  T::one() + T::one()
}

fn by_bit_length<T: PowInt>(value: T) -> UpowResult<UpperPower<T>> {
  // Zero items still require the unit capacity 2^0.
  if value <= T::one() {
    return Ok(UpperPower { value, exponent: 0, result: T::one() });
  }

  let width = bit_width::<T>();
  let exponent = width - (value - T::one()).leading_zeros();

  if exponent >= width {
    return Err(PowerError::Overflow);
  }

  let result = T::one() << exponent as usize;
  if result < value {
    // Shift landed in the sign bit of a signed type.
    return Err(PowerError::Overflow);
  }

  Ok(UpperPower { value, exponent, result })
}

fn by_logarithm<T: PowInt>(value: T, base: T) -> UpowResult<UpperPower<T>> {
  if value <= T::one() {
    return Ok(UpperPower { value, exponent: 0, result: T::one() });
  }

  let v = value.to_f64().ok_or(PowerError::Overflow)?;
  let b = base.to_f64().ok_or(PowerError::Overflow)?;
  let mut exponent = (v.ln() / b.ln()).ceil() as u32;

  // Float rounding can land one off on either side of a power boundary,
  // e.g. when `value` is itself an exact power. Re-anchor against exact
  // integer arithmetic.
  while exponent > 0 && pow_reaches(base, exponent - 1, value) {
    exponent -= 1;
  }
  while !pow_reaches(base, exponent, value) {
    exponent += 1;
  }

  let result = checked_pow(base, exponent as usize).ok_or(PowerError::Overflow)?;

  Ok(UpperPower { value, exponent, result })
}

/// Whether `base^exponent >= value`. A power too large for `T` reaches
/// any value of `T`.
fn pow_reaches<T: PowInt>(base: T, exponent: u32, value: T) -> bool {
  match checked_pow(base, exponent as usize) {
    Some(power) => power >= value,
    None => true,
  }
}

fn by_iteration<T: PowInt>(value: T, base: T) -> UpowResult<UpperPower<T>> {
  let mut result = T::one();
  let mut exponent = 0u32;

  while result < value {
    result = result.checked_mul(&base).ok_or(PowerError::Overflow)?;
    exponent += 1;
  }

  Ok(UpperPower { value, exponent, result })
}
