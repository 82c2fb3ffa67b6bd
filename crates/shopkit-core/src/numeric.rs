//! Small numeric helpers.

/// Returns the larger of two values, preferring `b` when they compare equal.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Classic fizz-buzz over any integer, negatives included.
///
/// ```rust
/// use shopkit_core::numeric::fizz_buzz;
///
/// assert_eq!(fizz_buzz(15), "FizzBuzz");
/// assert_eq!(fizz_buzz(7), "7");
/// ```
pub fn fizz_buzz(n: i64) -> String {
    match (n % 3 == 0, n % 5 == 0) {
        (true, true) => "FizzBuzz".to_string(),
        (true, false) => "Fizz".to_string(),
        (false, true) => "Buzz".to_string(),
        (false, false) => n.to_string(),
    }
}

/// Arithmetic mean. An empty slice has no mean and yields `NaN`.
pub fn calculate_average(numbers: &[f64]) -> f64 {
    if numbers.is_empty() {
        return f64::NAN;
    }

    numbers.iter().sum::<f64>() / numbers.len() as f64
}

/// `n!`, or `None` when `n` is negative or the result does not fit in a `u64`.
pub fn factorial(n: i64) -> Option<u64> {
    if n < 0 {
        return None;
    }

    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}
