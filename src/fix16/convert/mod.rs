use super::*;

/// Integers.
mod int;

/// IEEE floats.
mod float;

/// Decimal text: parsing, formatting, and compile-time literals.
pub(crate) mod text;
