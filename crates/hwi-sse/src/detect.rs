//! Runtime detection of the 128-bit float add.
//!
//! The probe is stateless and has no side effects. Callers may consult it to
//! pick a strategy; the adder itself falls back to scalar lanes when the
//! instruction set is missing.

use std::fmt;

/// Instruction set used for a 4-lane `f32` add.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// x86 SSE (`addps`).
    Sse,
    /// ARM NEON (`vaddq_f32`).
    Neon,
    /// No 128-bit float add; scalar lanes only.
    None,
}

impl Capability {
    /// Detect the capability of the current host.
    pub fn detect() -> Self {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            if is_x86_feature_detected!("sse") {
                return Self::Sse;
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            if std::arch::is_aarch64_feature_detected!("neon") {
                return Self::Neon;
            }
        }

        Self::None
    }

    /// Returns true if a hardware vector add is available.
    #[must_use]
    pub const fn is_accelerated(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sse => write!(f, "SSE"),
            Self::Neon => write!(f, "NEON"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Check if the host CPU supports the 128-bit float vector add.
pub fn is_supported() -> bool {
    Capability::detect().is_accelerated()
}
