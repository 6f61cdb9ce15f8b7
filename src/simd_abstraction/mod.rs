//! SIMD abstraction layer
//!
//! This module exposes a single, portable naming convention for lane-level
//! data movement on fixed-width vector registers. Each submodule wraps one
//! (element type, register width) combination and reproduces the hardware
//! lane semantics exactly:
//!
//! - [`int32x4`]: 4 lanes of i32 in 128 bits (NEON on aarch64, SSE2 on x86_64)
//! - [`int64x2`]: 2 lanes of i64 in 128 bits (NEON on aarch64, SSE2 on x86_64)
//! - [`real64x2`]: 2 lanes of f64 in 128 bits (NEON on aarch64, SSE2 on x86_64)
//! - `int32x8`: 8 lanes of i32 in 256 bits (AVX2, x86_64 only)
//!
//! ## Lane convention
//!
//! Lane 0 is always the lowest-order element of the register and maps to the
//! first element in memory. Vector values are plain `Copy` values: every
//! "set" or permutation returns a new vector.
//!
//! ## Compile-time indices
//!
//! Lane and shift indices are const generics, checked when the function is
//! instantiated. Where an x86 instruction needs an immediate derived from the
//! index we expand a small `match` table, the same trick the variable-byte
//! shift helpers use.
//!
//! ## Safety model
//!
//! All operations are `unsafe` because they may:
//! - require specific CPU features (AVX2 for the 256-bit module),
//! - dereference raw pointers for loads/stores.
//!
//! Callers must ensure the CPU supports the features of the module they call,
//! and that pointer arguments address `LANES` readable (or writable) elements.
//! Alignment is never required.

/// Common surface over the four vector types.
///
/// This trait is resolved statically; it exists so generic code (and tests)
/// can move lanes in and out of any wrapper without naming the module.
pub trait SimdVector: Sized + Copy {
    /// Scalar type of a single lane.
    type Elem: Copy;
    /// Number of lanes in the register.
    const LANES: usize;

    /// Load `LANES` contiguous elements from unaligned memory.
    ///
    /// Safety: `ptr` must be valid for reading `LANES` elements and the CPU
    /// must support the vector type's feature set.
    unsafe fn load(ptr: *const Self::Elem) -> Self;

    /// Store all lanes to `LANES` contiguous elements of unaligned memory.
    ///
    /// Safety: `ptr` must be valid for writing `LANES` elements and the CPU
    /// must support the vector type's feature set.
    unsafe fn store(ptr: *mut Self::Elem, v: Self);

    /// Load from a slice holding exactly `LANES` elements.
    /// Panics if the slice length differs.
    #[inline]
    unsafe fn from_slice(slice: &[Self::Elem]) -> Self {
        assert_eq!(slice.len(), Self::LANES);
        unsafe { Self::load(slice.as_ptr()) }
    }

    /// Store into a slice holding exactly `LANES` elements.
    /// Panics if the slice length differs.
    #[inline]
    unsafe fn copy_to_slice(self, slice: &mut [Self::Elem]) {
        assert_eq!(slice.len(), Self::LANES);
        unsafe { Self::store(slice.as_mut_ptr(), self) }
    }
}

// Shift-merge of two 128-bit registers on SSE2: the window starting `$k`
// lanes into `x‖y` is `(x >> k*w bytes) | (y << (16 - k*w) bytes)`.
// `_mm_alignr_epi8` would do this in one instruction but needs SSSE3.
#[cfg(target_arch = "x86_64")]
macro_rules! sse_lane_window {
    ($x:expr, $y:expr, $k:expr; $($lane:literal => ($lo:literal, $hi:literal)),+ $(,)?) => {{
        let x = $x;
        let y = $y;
        match $k {
            $($lane => simd_arch::_mm_or_si128(
                simd_arch::_mm_srli_si128::<$lo>(x),
                simd_arch::_mm_slli_si128::<$hi>(y),
            ),)+
            _ => x,
        }
    }};
}

pub mod conformance;
pub mod int32x4;
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub mod int32x8;
pub mod int64x2;
pub mod real64x2;
pub mod reference;
pub mod types;


pub use types::{Float64x2, Int32x4, Int64x2};
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub use types::Int32x8;
