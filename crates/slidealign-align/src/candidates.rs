//! Candidate offsets
//!
//! A search sweeps from `0` down to `-span`; a replay evaluates exactly one
//! previously found offset. Both are the same descending inclusive range.

use crate::{AlignError, AlignResult};

/// Descending inclusive range of internal offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    next: i64,
    last: i64,
}

impl Candidates {
    /// `0, -1, ..., -span`
    pub fn sweep(span: u32) -> Self {
        Self {
            next: 0,
            last: -(span as i64),
        }
    }

    /// The single offset `round(offset)`
    ///
    /// # Errors
    ///
    /// Returns [`AlignError::InvalidOffset`] for NaN, infinities and values
    /// that do not fit an `i32`.
    pub fn replay(offset: f32) -> AlignResult<Self> {
        let rounded = offset.round();
        if !rounded.is_finite() || rounded < i32::MIN as f32 || rounded >= i32::MAX as f32 {
            return Err(AlignError::InvalidOffset(offset));
        }
        let o = rounded as i64;
        Ok(Self { next: o, last: o })
    }

    /// Remaining candidates
    pub fn remaining(&self) -> usize {
        (self.next - self.last + 1).max(0) as usize
    }
}

impl Iterator for Candidates {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.next < self.last {
            return None;
        }
        let offset = self.next as i32;
        self.next -= 1;
        Some(offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Candidates {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_is_descending_and_inclusive() {
        let c: Vec<i32> = Candidates::sweep(3).collect();
        assert_eq!(c, vec![0, -1, -2, -3]);
        assert_eq!(Candidates::sweep(0).collect::<Vec<_>>(), vec![0]);
        assert_eq!(Candidates::sweep(5).len(), 6);
    }

    #[test]
    fn test_replay_rounds() {
        assert_eq!(Candidates::replay(4.6).unwrap().collect::<Vec<_>>(), vec![5]);
        assert_eq!(Candidates::replay(-4.4).unwrap().collect::<Vec<_>>(), vec![-4]);
        assert_eq!(Candidates::replay(-2.5).unwrap().collect::<Vec<_>>(), vec![-3]);
        assert_eq!(Candidates::replay(7.0).unwrap().len(), 1);
    }

    #[test]
    fn test_replay_rejects_non_finite() {
        assert!(matches!(
            Candidates::replay(f32::NAN),
            Err(AlignError::InvalidOffset(_))
        ));
        assert!(Candidates::replay(f32::INFINITY).is_err());
        assert!(Candidates::replay(1e12).is_err());
    }
}
