//! Fixed-length bit vector representation
//!
//! A `BitVec` is an ordered sequence of binary digits. Guesses, candidate
//! answers, and the hidden answer itself are all bit vectors of the same
//! configured length. The only comparison the puzzle ever reveals is
//! [`BitVec::match_count`]: how many positions two vectors agree on.

use std::fmt;

/// A fixed-length vector of binary digits
///
/// Immutable once constructed; cloning is the only way to duplicate one,
/// so stored history entries can never alias a caller's buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitVec {
    bits: Box<[u8]>,
}

/// Error type for invalid bit vectors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitVecError {
    Empty,
    InvalidDigit(char),
}

impl fmt::Display for BitVecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Bit vector must have at least one digit"),
            Self::InvalidDigit(ch) => {
                write!(f, "Bit vector digits must be 0 or 1, got {ch:?}")
            }
        }
    }
}

impl std::error::Error for BitVecError {}

impl BitVec {
    /// Create a new bit vector from raw digits
    ///
    /// # Errors
    /// Returns `BitVecError` if `bits` is empty or contains a digit other
    /// than 0 or 1.
    ///
    /// # Examples
    /// ```
    /// use bitbreaker::core::BitVec;
    ///
    /// let v = BitVec::new(vec![1, 0, 1]).unwrap();
    /// assert_eq!(v.len(), 3);
    ///
    /// assert!(BitVec::new(vec![]).is_err());
    /// assert!(BitVec::new(vec![0, 2]).is_err());
    /// ```
    pub fn new(bits: Vec<u8>) -> Result<Self, BitVecError> {
        if bits.is_empty() {
            return Err(BitVecError::Empty);
        }

        if let Some(&bad) = bits.iter().find(|&&b| b > 1) {
            return Err(BitVecError::InvalidDigit((b'0' + bad.min(9)) as char));
        }

        Ok(Self {
            bits: bits.into_boxed_slice(),
        })
    }

    /// The all-zero vector of the given length
    ///
    /// Used as the deterministic terminal fallback when no candidate can be
    /// produced any other way.
    #[must_use]
    pub fn zeros(length: usize) -> Self {
        Self {
            bits: vec![0; length].into_boxed_slice(),
        }
    }

    /// The `length`-bit binary representation of `index`, most-significant
    /// bit first
    ///
    /// This is the inverse of [`BitVec::index`] and defines the canonical
    /// candidate-space ordering.
    ///
    /// # Examples
    /// ```
    /// use bitbreaker::core::BitVec;
    ///
    /// let v = BitVec::from_index(5, 3);
    /// assert_eq!(v.to_string(), "101");
    /// ```
    #[must_use]
    pub fn from_index(index: usize, length: usize) -> Self {
        let bits: Vec<u8> = (0..length)
            .rev()
            .map(|shift| ((index >> shift) & 1) as u8)
            .collect();

        Self {
            bits: bits.into_boxed_slice(),
        }
    }

    /// Number of digits in the vector
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True if the vector has no digits (cannot occur via `new`)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Get the digit at a position (0-based, most-significant first)
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn bit(&self, position: usize) -> u8 {
        self.bits[position]
    }

    /// The digits as a slice
    #[inline]
    #[must_use]
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// The vector's value read as an unsigned binary integer
    ///
    /// `from_index(v.index(), v.len()) == v` for every vector. Candidate
    /// membership sets are keyed on this value rather than on the vector
    /// itself.
    #[must_use]
    pub fn index(&self) -> usize {
        self.bits.iter().fold(0, |acc, &b| (acc << 1) | b as usize)
    }

    /// Count the positions where two vectors agree
    ///
    /// This is the puzzle's entire feedback channel: the answer to a guess
    /// is `guess.match_count(&answer)` and nothing more.
    ///
    /// Commutative, and `v.match_count(&v) == v.len()`.
    ///
    /// # Examples
    /// ```
    /// use bitbreaker::core::BitVec;
    ///
    /// let a: BitVec = "1010".parse().unwrap();
    /// let b: BitVec = "1001".parse().unwrap();
    /// assert_eq!(a.match_count(&b), 2);
    /// ```
    #[must_use]
    pub fn match_count(&self, other: &Self) -> usize {
        debug_assert_eq!(self.len(), other.len(), "length mismatch");

        self.bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a == b)
            .count()
    }
}

impl fmt::Display for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            write!(f, "{b}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for BitVec {
    type Err = BitVecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(BitVecError::Empty);
        }

        let bits = s
            .chars()
            .map(|ch| match ch {
                '0' => Ok(0),
                '1' => Ok(1),
                other => Err(BitVecError::InvalidDigit(other)),
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Ok(Self {
            bits: bits.into_boxed_slice(),
        })
    }
}
