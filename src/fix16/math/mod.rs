use super::*;

/// Square root.
mod sqrt;

/// Exponential.
mod exp;

/// Logarithms (base 2 and natural).
mod log;
