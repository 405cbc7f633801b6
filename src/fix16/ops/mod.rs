use super::*;

/// Addition and subtraction.
mod add;

/// Multiplication.
mod mul;

/// Division.
mod div;

/// Remainder.
mod rem;

/// Helper macro for implementing operators for all combinations of value and reference
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident) => {
    impl $trait<Fix16> for Fix16 {
      type Output = Fix16;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { self.$name(rhs) }
    }

    impl $trait<&Fix16> for Fix16 {
      type Output = Fix16;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { self.$name(*rhs) }
    }

    impl $trait<Fix16> for &Fix16 {
      type Output = Fix16;

      #[inline]
      fn $name(self, rhs: Fix16) -> Self::Output { (*self).$name(rhs) }
    }

    impl $trait<&Fix16> for &Fix16 {
      type Output = Fix16;

      #[inline]
      fn $name(self, rhs: &Fix16) -> Self::Output { (*self).$name(*rhs) }
    }

    impl $trait_assign<Fix16> for Fix16 {
      #[inline]
      fn $name_assign(&mut self, rhs: Fix16) { *self = self.$name(rhs) }
    }

    impl $trait_assign<&Fix16> for Fix16 {
      #[inline]
      fn $name_assign(&mut self, rhs: &Fix16) { *self = self.$name(*rhs) }
    }
  }
}

pub(crate) use mk_ops;

/// Macro for instantating the suite of tests for a binary operator of fixed point numbers.
///
/// `$oracle` is the expected result of the operation, computed on the *exact* rational values of
/// two operands that aren't the overflow sentinel.
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt, $oracle:expr) => {
    use crate::Fix16;
    use malachite::rational::Rational;
    use proptest::prelude::*;

    #[allow(dead_code)]
    fn ops() {
      let mut a = Fix16::ONE;
      let mut b = Fix16::MINUS_ONE;
      let _ = a $op b;
      let _ = &a $op b;
      let _ = a $op &b;
      let _ = &a $op &b;
      a $op_assign b;
      b $op_assign &a;
    }

    /// Aux function: check that `a $op b` matches the oracle exactly.
    fn is_correct(a: Fix16, b: Fix16) -> bool {
      let result = a $op b;
      if let (Ok(x), Ok(y)) = (Rational::try_from(a), Rational::try_from(b)) {
        let oracle: fn(Rational, Rational) -> Fix16 = $oracle;
        result == oracle(x, y)
      } else {
        result == Fix16::OVERFLOW
      }
    }

    #[test]
    fn special_exhaustive() {
      for a in Fix16::cases_special() {
        for b in Fix16::cases_special() {
          assert!(is_correct(a, b), "{:?} ⋅ {:?} = {:?}", a, b, a $op b)
        }
      }
    }

    #[test]
    fn sentinel_is_sticky() {
      for a in Fix16::cases_special() {
        assert_eq!(a $op Fix16::OVERFLOW, Fix16::OVERFLOW);
        assert_eq!(Fix16::OVERFLOW $op a, Fix16::OVERFLOW);
      }
    }

    proptest!{
      #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
      #[test]
      fn random_pairs(
        a in Fix16::cases_proptest(),
        b in Fix16::cases_proptest(),
      ) {
        assert!(is_correct(a, b), "{:?} ⋅ {:?} = {:?}", a, b, a $op b)
      }
    }
  }
}

pub(crate) use mk_tests;
