//! # Fibonacci Generator
//!
//! A lazy iterator over `a(0)=0, a(1)=1, a(n)=a(n-1)+a(n-2)`.
//!
//! Terms are [`BigUint`], so the sequence never overflows and the iterator
//! never ends on its own. Bound it with `take`.

use num_bigint::BigUint;

/// Lazy, infinite Fibonacci sequence.
///
/// Every value holds its own state; two iterators never influence each other.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    current: BigUint,
    next: BigUint,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self {
            current: BigUint::from(0u8),
            next: BigUint::from(1u8),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        let following = &self.current + &self.next;
        let next = std::mem::replace(&mut self.next, following);
        Some(std::mem::replace(&mut self.current, next))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for Fibonacci {}

/// Returns the first `length` terms in order.
pub fn sequence(length: usize) -> Vec<BigUint> {
    Fibonacci::new().take(length).collect()
}

/// Returns the single term `a(n)` without keeping the ones before it.
///
/// The binary always streams through [`Fibonacci`]; this is a library helper
/// for callers that only need one value.
pub fn term(n: usize) -> BigUint {
    let mut a = BigUint::from(0u8);
    let mut b = BigUint::from(1u8);
    for _ in 0..n {
        let following = &a + &b;
        a = std::mem::replace(&mut b, following);
    }
    a
}
