use std::fmt::{Debug, Display};

use num_traits::{CheckedMul, PrimInt};

/// Primitive integers the upper-power calculator operates on.
pub trait PowInt: Debug + Display + PrimInt + CheckedMul + 'static {}

macro_rules! derive_pow_int {
  ($type:ident) => {
    impl PowInt for $type {}
  };
}
derive_pow_int!(u8);
derive_pow_int!(u16);
derive_pow_int!(u32);
derive_pow_int!(u64);
derive_pow_int!(u128);
derive_pow_int!(usize);
derive_pow_int!(i8);
derive_pow_int!(i16);
derive_pow_int!(i32);
derive_pow_int!(i64);
derive_pow_int!(i128);
derive_pow_int!(isize);

/// Number of bits in the representation of `T`.
pub(crate) fn bit_width<T: PowInt>() -> u32 {
  T::zero().count_zeros()
}
