//! Element-wise `f32` addition in 4-lane chunks
//!
//! The single-chunk add handles at most four elements per operand, one
//! register's worth. The driver splits arbitrary-length input into
//! consecutive chunks `[start, min(start + 4, len))`, adds each chunk, and
//! writes the lanes back in order. The final chunk may be shorter than four.
//!
//! All preconditions are checked before any arithmetic. Numeric edge cases
//! (NaN, infinities, overflow) are not errors; they follow IEEE-754.

use tracing::{debug, trace};

use crate::detect;
use crate::error::{Operand, Result, SseError};
use crate::lane::{Vec4F32, LANES};
use crate::strategy::AddStrategy;

/// Add two slices of at most 4 elements using the auto-detected strategy.
///
/// # Errors
///
/// Returns an argument error if the lengths differ or either side has more
/// than 4 elements.
pub fn add_single_vector128(left: &[f32], right: &[f32]) -> Result<Vec<f32>> {
    VectorAdder::detect().add_single(left, right)
}

/// Add two equal-length slices of any size using the auto-detected strategy.
///
/// # Errors
///
/// Returns an argument error if the lengths differ.
pub fn add(left: &[f32], right: &[f32]) -> Result<Vec<f32>> {
    VectorAdder::detect().add(left, right)
}

/// Element-wise adder bound to one [`AddStrategy`].
///
/// Holds no state besides the strategy, so it can be shared freely between
/// threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VectorAdder {
    strategy: AddStrategy,
}

impl VectorAdder {
    /// Create an adder for the given strategy.
    ///
    /// # Errors
    ///
    /// Returns [`SseError::Unsupported`] if `Accelerated` is requested on a
    /// host without a 128-bit float add.
    pub fn new(strategy: AddStrategy) -> Result<Self> {
        if strategy == AddStrategy::Accelerated && !detect::is_supported() {
            debug!("accelerated add requested but not supported by host");
            return Err(SseError::Unsupported);
        }
        debug!(%strategy, "vector adder created");
        Ok(Self { strategy })
    }

    /// Create an adder that never uses vector registers.
    pub fn scalar() -> Self {
        Self {
            strategy: AddStrategy::ScalarFallback,
        }
    }

    /// Create an adder using the best strategy the host supports.
    pub fn detect() -> Self {
        Self {
            strategy: AddStrategy::detect(),
        }
    }

    /// Get the active strategy.
    #[must_use]
    pub const fn strategy(&self) -> AddStrategy {
        self.strategy
    }

    /// Add two slices of at most 4 elements.
    ///
    /// # Errors
    ///
    /// Checked in order: lengths differ, `left` longer than 4, `right`
    /// longer than 4.
    pub fn add_single(&self, left: &[f32], right: &[f32]) -> Result<Vec<f32>> {
        check_lengths(left.len(), right.len())?;

        if left.len() > LANES {
            return Err(SseError::CapacityExceeded {
                operand: Operand::Left,
                len: left.len(),
            });
        }

        if right.len() > LANES {
            return Err(SseError::CapacityExceeded {
                operand: Operand::Right,
                len: right.len(),
            });
        }

        let sum = self.add_chunk(left, right);
        Ok(sum.as_array()[..left.len()].to_vec())
    }

    /// Add two equal-length slices of any size.
    ///
    /// # Errors
    ///
    /// Returns [`SseError::LengthMismatch`] if the lengths differ.
    pub fn add(&self, left: &[f32], right: &[f32]) -> Result<Vec<f32>> {
        check_lengths(left.len(), right.len())?;

        let mut result = vec![0.0; left.len()];
        self.add_into(left, right, &mut result)?;
        Ok(result)
    }

    /// Add two equal-length slices into caller-provided storage.
    ///
    /// # Errors
    ///
    /// Returns [`SseError::LengthMismatch`] if `left` and `right` differ in
    /// length, or if `out` does not have that same length.
    pub fn add_into(&self, left: &[f32], right: &[f32], out: &mut [f32]) -> Result<()> {
        check_lengths(left.len(), right.len())?;
        check_lengths(left.len(), out.len())?;

        trace!(
            len = left.len(),
            chunks = left.len().div_ceil(LANES),
            strategy = %self.strategy,
            "adding"
        );

        for ((l, r), o) in left
            .chunks(LANES)
            .zip(right.chunks(LANES))
            .zip(out.chunks_mut(LANES))
        {
            self.add_chunk(l, r).store_partial(o);
        }

        Ok(())
    }

    /// Add one chunk. Callers guarantee both sides have the same length,
    /// at most 4.
    #[inline]
    fn add_chunk(&self, left: &[f32], right: &[f32]) -> Vec4F32 {
        let a = Vec4F32::load_partial(left);
        let b = Vec4F32::load_partial(right);
        match self.strategy {
            AddStrategy::Accelerated => a.add(b),
            AddStrategy::ScalarFallback => a.add_scalar(b),
        }
    }
}

impl Default for VectorAdder {
    fn default() -> Self {
        Self::detect()
    }
}

fn check_lengths(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(SseError::LengthMismatch { left, right });
    }
    Ok(())
}
