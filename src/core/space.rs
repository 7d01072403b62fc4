//! Candidate-space enumeration
//!
//! The candidate space for length L is every one of the 2^L possible bit
//! vectors, ordered by integer value. The ordering is load-bearing: every
//! first-match tie-break in the solver is defined in terms of it.

use super::BitVec;

/// Enumerate all 2^L bit vectors of the given length, in index order
///
/// Element `i` of the result equals `BitVec::from_index(i, length)`. Pure
/// function of `length`; the space is regenerated on demand rather than
/// cached, so a `reset` can never observe stale state.
///
/// Lengths of zero are not meaningful for the puzzle and are the caller's
/// responsibility to avoid.
///
/// # Examples
/// ```
/// use bitbreaker::core::space;
///
/// let all = space::enumerate(3);
/// assert_eq!(all.len(), 8);
/// assert_eq!(all[5].to_string(), "101");
/// ```
#[must_use]
pub fn enumerate(length: usize) -> Vec<BitVec> {
    (0..1usize << length)
        .map(|i| BitVec::from_index(i, length))
        .collect()
}

/// Number of vectors in the candidate space for the given length
#[inline]
#[must_use]
pub const fn size(length: usize) -> usize {
    1 << length
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn enumerate_counts_match_for_small_lengths() {
        for length in 1..=8 {
            let all = enumerate(length);
            assert_eq!(all.len(), 1 << length);

            let distinct: HashSet<&BitVec> = all.iter().collect();
            assert_eq!(distinct.len(), all.len());
        }
    }

    #[test]
    fn enumerate_index_order() {
        for length in 1..=8 {
            let all = enumerate(length);
            for (i, v) in all.iter().enumerate() {
                assert_eq!(v.index(), i);
                assert_eq!(*v, BitVec::from_index(i, length));
            }
        }
    }

    #[test]
    fn enumerate_endpoints() {
        let all = enumerate(6);
        assert_eq!(all[0], BitVec::zeros(6));
        assert_eq!(all[63].to_string(), "111111");
    }

    #[test]
    fn size_matches_enumeration() {
        for length in 1..=8 {
            assert_eq!(size(length), enumerate(length).len());
        }
    }
}
