//! Trial-division prime search

use log::{debug, trace};

use crate::error::Error;

/// Whether `x` is prime, by trial division over every integer in `2..x`.
///
/// 0 and 1 are not prime.
pub fn is_prime(x: u64) -> bool {
    if x < 2 {
        return false;
    }
    for i in 2..x {
        if x % i == 0 {
            return false;
        }
    }
    true
}

/// Primes in increasing order, starting at 2.
///
/// Ends instead of wrapping once the candidate counter would overflow.
pub struct Primes {
    next_candidate: Option<u64>,
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            let candidate = self.next_candidate?;
            self.next_candidate = candidate.checked_add(1);
            if is_prime(candidate) {
                return Some(candidate);
            }
        }
    }
}

pub fn primes() -> Primes {
    Primes {
        next_candidate: Some(2),
    }
}

/// The `n`th prime, 1-indexed: `nth_prime(1) == 2`.
pub fn nth_prime(n: u64) -> Result<u64, Error> {
    if n == 0 {
        return Err(Error::ZeroIndex);
    }

    let mut found = 0;
    for prime in primes() {
        found += 1;
        trace!("prime #{} = {}", found, prime);
        if found == n {
            debug!("prime #{} is {}", n, prime);
            return Ok(prime);
        }
    }
    Err(Error::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(17));
        assert!(!is_prime(91));
        assert!(is_prime(7919));
    }

    #[test]
    fn iterator_starts_at_two() {
        let first: Vec<u64> = primes().take(10).collect();
        assert_eq!(first, [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn iterator_stops_at_counter_overflow() {
        // u64::MAX - 1 is even and u64::MAX is divisible by 3.
        let mut tail = Primes {
            next_candidate: Some(u64::MAX - 1),
        };
        assert_eq!(tail.next(), None);
        assert_eq!(tail.next(), None);
    }

    #[test]
    fn nth_prime_is_one_indexed() {
        assert_eq!(nth_prime(1), Ok(2));
        assert_eq!(nth_prime(2), Ok(3));
        assert_eq!(nth_prime(5), Ok(11));
        assert_eq!(nth_prime(1000), Ok(7919));
    }

    #[test]
    fn zeroth_prime_is_an_error() {
        assert_eq!(nth_prime(0), Err(Error::ZeroIndex));
    }

    #[test]
    fn exactly_n_primes_up_to_the_nth() {
        for n in 1..=60 {
            let p = nth_prime(n).unwrap();
            assert!(is_prime(p), "nth_prime({}) = {} is composite", n, p);
            let count = (2..=p).filter(|&x| is_prime(x)).count() as u64;
            assert_eq!(count, n, "primes in [2, {}]", p);
        }
    }
}
