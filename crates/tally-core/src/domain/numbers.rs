//! List transformations over integers.
//!
//! Any `i64` is accepted as input. Arithmetic that would leave the `i64`
//! range fails with [`TallyError::Overflow`] instead of wrapping.

use crate::error::{Result, TallyError};

/// The sample list used by the `numbers` command.
pub const SAMPLE: [i64; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// Witness bases that make Miller-Rabin exact for every 64-bit integer.
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

pub fn evens(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().copied().filter(|n| n % 2 == 0).collect()
}

pub fn doubled_evens(numbers: &[i64]) -> Result<Vec<i64>> {
    evens(numbers)
        .into_iter()
        .map(|n| {
            n.checked_mul(2)
                .ok_or_else(|| TallyError::Overflow(format!("{} * 2", n)))
        })
        .collect()
}

/// Sum of every element strictly greater than `threshold`.
pub fn sum_greater_than(numbers: &[i64], threshold: i64) -> Result<i64> {
    numbers
        .iter()
        .filter(|&&n| n > threshold)
        .try_fold(0i64, |acc, &n| {
            acc.checked_add(n).ok_or_else(|| {
                TallyError::Overflow(format!("sum of numbers greater than {}", threshold))
            })
        })
}

/// Deterministic primality test; 0, 1 and negatives are not prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n as u64;
    for p in WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }

    let mut d = n - 1;
    let mut rounds = 0;
    while d % 2 == 0 {
        d /= 2;
        rounds += 1;
    }

    'witness: for a in WITNESSES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..rounds {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

pub fn primes(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().copied().filter(|&n| is_prime(n)).collect()
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}
