//! Numeric predicates
//!
//! Trial-division based checks. All of them are total over `i64`: inputs
//! outside a predicate's domain simply yield `false` (or `0` for the digit sum).

/// Check whether `n` is prime
///
/// Values below 2 are never prime. Odd candidates are tried up to `sqrt(n)`.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut i = 3;
    // `i <= n / i` is `i * i <= n` without the overflow near i64::MAX
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Check whether `n` equals the sum of its proper divisors
pub fn is_perfect(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    // Divisor sums of large abundant numbers exceed i64
    let mut sum: i128 = 1;
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            sum += i128::from(i);
            let pair = n / i;
            if pair != i {
                sum += i128::from(pair);
            }
        }
        i += 1;
    }
    sum == i128::from(n)
}

/// Check whether `n` is an Armstrong (narcissistic) number
///
/// Each decimal digit is raised to the power of the digit count and summed.
/// Zero qualifies (`0^1 == 0`); negative numbers never do.
pub fn is_armstrong(n: i64) -> bool {
    let Ok(value) = u64::try_from(n) else {
        return false;
    };
    let digits = decimal_digits(value);
    let Ok(count) = u32::try_from(digits.len()) else {
        return false;
    };
    // 19 digits of 9^19 overflow u64
    let sum: u128 = digits.iter().map(|&d| u128::from(d).pow(count)).sum();
    sum == u128::from(value)
}

/// Sum of the decimal digits of `n`
///
/// Non-positive input yields 0.
pub fn digit_sum(n: i64) -> i64 {
    let mut rest = n;
    let mut sum = 0;
    while rest > 0 {
        sum += rest % 10;
        rest /= 10;
    }
    sum
}

/// Decimal digits of `value`, least significant first
fn decimal_digits(mut value: u64) -> Vec<u8> {
    if value == 0 {
        return vec![0];
    }
    let mut digits = Vec::with_capacity(20);
    while value > 0 {
        // value % 10 is always below 10
        #[allow(clippy::cast_possible_truncation)]
        digits.push((value % 10) as u8);
        value /= 10;
    }
    digits
}
