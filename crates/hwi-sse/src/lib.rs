//! 128-bit SIMD element-wise addition of `f32` sequences.
//!
//! This crate is a low-level numeric primitive: it adds two equal-length
//! `f32` slices lane by lane, four elements at a time, using one hardware
//! vector add per chunk when the host CPU provides one.
//!
//! # Architecture
//!
//! | Layer | Module | Role |
//! |-------|--------|------|
//! | Probe | [`detect`] | Does the host expose a 128-bit float add? |
//! | Lanes | [`lane`] | [`Vec4F32`], the fixed 4-lane vector |
//! | Config | [`strategy`] | [`AddStrategy`]: accelerated or scalar |
//! | Driver | [`adder`] | Single-chunk add and the chunking driver |
//!
//! # Instruction Sets
//!
//! - **x86 / x86_64**: SSE `addps`, detected at runtime
//! - **aarch64**: NEON `vaddq_f32`
//! - **Everything else**: scalar per-lane loop, bit-identical results
//!
//! The chunk width is fixed at four lanes. Wider registers (AVX, AVX-512)
//! are never used.
//!
//! # Example
//!
//! ```
//! let left = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let right = [4.0, 3.0, 2.0, 1.0, 0.0];
//! let sum = hwi_sse::add(&left, &right).unwrap();
//! assert_eq!(sum, vec![5.0; 5]);
//! ```

#![warn(missing_docs)]
#![allow(unsafe_code)] // SIMD intrinsics require unsafe

pub mod adder;
pub mod detect;
pub mod error;
pub mod lane;
pub mod strategy;

pub use adder::{add, add_single_vector128, VectorAdder};
pub use detect::{is_supported, Capability};
pub use error::{Operand, Result, SseError};
pub use lane::{Vec4F32, LANES};
pub use strategy::AddStrategy;
