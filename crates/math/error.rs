use std::fmt::Display;

pub type UpowResult<T> = Result<T, PowerError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerError {
  /// The target value is below zero. Upper powers are only defined for
  /// non-negative values.
  NegativeValue,
  /// The base is below 2. Repeated multiplication by such a base can
  /// never reach an arbitrary target value.
  InvalidBase,
  /// The bit-length method was selected for a base other than 2.
  NonBinaryBase,
  /// The nearest upper power does not fit in the integer width of the
  /// target value.
  Overflow,
  /// Raw input that could not be read as an integer.
  MalformedInput,
}

impl Display for PowerError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      PowerError::NegativeValue => {
        f.write_str("cannot compute an upper power for a negative number")
      }
      PowerError::InvalidBase => f.write_str("base must be an integer greater than or equal to 2"),
      PowerError::NonBinaryBase => f.write_str("the bit-length method only supports base 2"),
      PowerError::Overflow => {
        f.write_str("the nearest upper power overflows the width of the input type")
      }
      PowerError::MalformedInput => f.write_str("input is not a valid integer"),
    }
  }
}

impl std::error::Error for PowerError {}
