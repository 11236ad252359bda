//! Argumentos variádicos.

use std::ops::Mul;

/// Multiplica todos os argumentos.
///
/// Sem argumentos devolve zero (`T::default()`); com um único argumento
/// devolve o próprio valor.
pub fn multiply_arguments<T>(args: &[T]) -> T
where
    T: Copy + Default + Mul<Output = T>,
{
    match args {
        [] => T::default(),
        [only] => *only,
        [first, rest @ ..] => rest.iter().fold(*first, |acc, &x| acc * x),
    }
}

/// Versão variádica de [`multiply_arguments`].
///
/// ```rust
/// use kata::multiply;
///
/// let zero: i32 = multiply!();
/// assert_eq!(zero, 0);
/// assert_eq!(multiply!(7), 7);
/// assert_eq!(multiply!(2, 3, 4), 24);
/// ```
#[macro_export]
macro_rules! multiply {
    () => {
        ::core::default::Default::default()
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::exercises::arguments::multiply_arguments(&[$($arg),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_is_zero() {
        assert_eq!(multiply_arguments::<i32>(&[]), 0);
        let zero: i32 = multiply!();
        assert_eq!(zero, 0);
    }

    #[test]
    fn test_no_arguments_is_zero_for_floats() {
        let zero: f64 = multiply!();
        assert_eq!(zero, 0.0);
        assert_eq!(multiply_arguments::<f64>(&[]), 0.0);
    }

    #[test]
    fn test_single_argument_is_returned() {
        assert_eq!(multiply_arguments(&[7]), 7);
        assert_eq!(multiply!(-3), -3);
    }

    #[test]
    fn test_many_arguments() {
        assert_eq!(multiply_arguments(&[2, 3, 4]), 24);
        assert_eq!(multiply!(2, 3, 4), 24);
        assert_eq!(multiply!(1.5, 2.0), 3.0);
    }

    #[test]
    fn test_zero_in_arguments() {
        assert_eq!(multiply!(5, 0, 9), 0);
    }
}
