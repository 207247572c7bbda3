//! The 4-lane `f32` vector
//!
//! `Vec4F32` is the unit of work for every addition in this crate: one
//! 128-bit register holding four `f32` lanes. The hardware path is an
//! internal detail; every path produces the same bits as a plain per-lane
//! `a + b`.

use std::ops::Add;

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

/// Number of `f32` lanes in a 128-bit register.
pub const LANES: usize = 4;

/// 4 x f32 SIMD vector (128-bit)
#[repr(C, align(16))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec4F32 {
    data: [f32; LANES],
}

impl Vec4F32 {
    /// Create a new vector with all elements set to the same value
    #[inline]
    pub fn splat(x: f32) -> Self {
        Self { data: [x; LANES] }
    }

    /// Create a new vector from 4 values
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Create a zero vector
    #[inline]
    pub fn zero() -> Self {
        Self::splat(0.0)
    }

    /// Create a vector from an array of lanes
    #[inline]
    pub fn from_array(data: [f32; LANES]) -> Self {
        Self { data }
    }

    /// Load up to 4 values from a slice.
    ///
    /// Lanes past the end of `src` are zero. Values past the fourth are
    /// ignored.
    #[inline]
    pub fn load_partial(src: &[f32]) -> Self {
        let mut result = Self::zero();
        let n = src.len().min(LANES);
        result.data[..n].copy_from_slice(&src[..n]);
        result
    }

    /// Write the first `min(4, dst.len())` lanes into `dst`.
    #[inline]
    pub fn store_partial(&self, dst: &mut [f32]) {
        let n = dst.len().min(LANES);
        dst[..n].copy_from_slice(&self.data[..n]);
    }

    /// Get element at index
    ///
    /// # Panics
    /// Panics if `idx >= 4`.
    #[inline]
    pub fn get(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// Borrow the lanes
    #[inline]
    pub fn as_array(&self) -> &[f32; LANES] {
        &self.data
    }

    /// Copy the lanes out
    #[inline]
    pub fn to_array(self) -> [f32; LANES] {
        self.data
    }

    /// Add two vectors lane-wise.
    ///
    /// Uses a single hardware add when the host has one, the scalar loop
    /// otherwise.
    #[inline]
    pub fn add(self, other: Self) -> Self {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            if is_x86_feature_detected!("sse") {
                // Safety: SSE detected at runtime.
                return unsafe { add_sse(self, other) };
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            if std::arch::is_aarch64_feature_detected!("neon") {
                // Safety: NEON detected at runtime.
                return unsafe { add_neon(self, other) };
            }
        }

        self.add_scalar(other)
    }

    /// Add two vectors lane-wise without touching vector registers.
    #[inline]
    pub fn add_scalar(self, other: Self) -> Self {
        Self {
            data: [
                self.data[0] + other.data[0],
                self.data[1] + other.data[1],
                self.data[2] + other.data[2],
                self.data[3] + other.data[3],
            ],
        }
    }
}

impl Add for Vec4F32 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vec4F32::add(self, rhs)
    }
}

impl From<[f32; LANES]> for Vec4F32 {
    fn from(data: [f32; LANES]) -> Self {
        Self::from_array(data)
    }
}

/// # Safety
/// Caller must ensure SSE is available.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[target_feature(enable = "sse")]
unsafe fn add_sse(a: Vec4F32, b: Vec4F32) -> Vec4F32 {
    let va = _mm_loadu_ps(a.data.as_ptr());
    let vb = _mm_loadu_ps(b.data.as_ptr());
    let r = _mm_add_ps(va, vb);
    let mut result = Vec4F32::zero();
    _mm_storeu_ps(result.data.as_mut_ptr(), r);
    result
}

/// # Safety
/// Caller must ensure NEON is available.
#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
unsafe fn add_neon(a: Vec4F32, b: Vec4F32) -> Vec4F32 {
    let va = vld1q_f32(a.data.as_ptr());
    let vb = vld1q_f32(b.data.as_ptr());
    let r = vaddq_f32(va, vb);
    let mut result = Vec4F32::zero();
    vst1q_f32(result.data.as_mut_ptr(), r);
    result
}
