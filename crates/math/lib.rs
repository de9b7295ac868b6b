pub mod error;
pub mod number;
pub mod power;

pub use error::*;
pub use number::*;
pub use power::*;
