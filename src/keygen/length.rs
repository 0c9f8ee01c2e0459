//! Prime key-length selection.
//!
//! The starting key length is the smallest prime strictly greater than the
//! number of records already in the store, counted before the write. Keys
//! created early are short; the floor rises as the store fills.

/// Trial-division primality test up to the square root of `n`.
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut i = 3u64;
    while i.saturating_mul(i) <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Smallest prime strictly greater than `n`.
pub fn next_prime_after(n: u64) -> u64 {
    let mut candidate = n.saturating_add(1).max(2);
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

/// Minimum candidate key length for a store holding `record_count` records.
pub fn select_length(record_count: u64) -> usize {
    next_prime_after(record_count) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime_small_values() {
        let primes: Vec<u64> = (0..30).filter(|n| is_prime(*n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_is_prime_squares_and_large() {
        assert!(!is_prime(49));
        assert!(!is_prime(121));
        assert!(!is_prime(7919 * 7919));
        assert!(is_prime(7919));
        assert!(is_prime(1_000_003));
    }

    #[test]
    fn test_next_prime_after_is_strict() {
        assert_eq!(next_prime_after(0), 2);
        assert_eq!(next_prime_after(1), 2);
        assert_eq!(next_prime_after(2), 3);
        assert_eq!(next_prime_after(3), 5);
        assert_eq!(next_prime_after(13), 17);
        assert_eq!(next_prime_after(24), 29);
    }

    #[test]
    fn test_select_length_empty_store() {
        assert_eq!(select_length(0), 2);
    }

    #[test]
    fn test_select_length_is_monotonic() {
        let mut previous = select_length(0);
        for n in 1..500 {
            let current = select_length(n);
            assert!(current >= previous, "length shrank at n={}", n);
            assert!(current as u64 > n);
            assert!(is_prime(current as u64));
            previous = current;
        }
    }
}
