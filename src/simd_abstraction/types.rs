//! Vector types and architecture bindings
//!
//! This module provides the tiny portability layer the rest of
//! `simd_abstraction` builds on:
//!
//! - On x86_64 we re-export `std::arch::x86_64` as `simd_arch` and wrap the
//!   untyped `__m128i` / `__m128d` / `__m256i` registers.
//! - On aarch64 we re-export `std::arch::aarch64` as `simd_arch` and wrap the
//!   typed NEON registers directly.
//!
//! Every vector type is a `#[repr(transparent)]` newtype so the element type
//! travels with the value even where the hardware register is untyped (x86
//! integer registers). `to_array` / `from_array` are pure bitcasts: lane `i`
//! of the register is element `i` of the array.

use std::fmt;

#[cfg(target_arch = "x86_64")]
pub use std::arch::x86_64 as simd_arch;

#[cfg(target_arch = "aarch64")]
pub use std::arch::aarch64 as simd_arch;

/// Four 32-bit signed integer lanes in a 128-bit register.
#[cfg(target_arch = "x86_64")]
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Int32x4(pub simd_arch::__m128i);

/// Four 32-bit signed integer lanes in a 128-bit register.
#[cfg(target_arch = "aarch64")]
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Int32x4(pub simd_arch::int32x4_t);

/// Two 64-bit signed integer lanes in a 128-bit register.
#[cfg(target_arch = "x86_64")]
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Int64x2(pub simd_arch::__m128i);

/// Two 64-bit signed integer lanes in a 128-bit register.
#[cfg(target_arch = "aarch64")]
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Int64x2(pub simd_arch::int64x2_t);

/// Two 64-bit floating point lanes in a 128-bit register.
#[cfg(target_arch = "x86_64")]
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Float64x2(pub simd_arch::__m128d);

/// Two 64-bit floating point lanes in a 128-bit register.
#[cfg(target_arch = "aarch64")]
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Float64x2(pub simd_arch::float64x2_t);

/// Eight 32-bit signed integer lanes in a 256-bit AVX2 register.
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Int32x8(pub simd_arch::__m256i);

// The bitcasts below are sound because each newtype has exactly the size of
// the array it is cast to and every bit pattern is a valid value on both sides.

impl Int32x4 {
    /// Lanes in lane order.
    #[inline]
    pub fn to_array(self) -> [i32; 4] {
        unsafe { std::mem::transmute(self.0) }
    }

    /// Build a vector whose lane `i` is `lanes[i]`.
    #[inline]
    pub fn from_array(lanes: [i32; 4]) -> Self {
        Self(unsafe { std::mem::transmute(lanes) })
    }
}

impl Int64x2 {
    /// Lanes in lane order.
    #[inline]
    pub fn to_array(self) -> [i64; 2] {
        unsafe { std::mem::transmute(self.0) }
    }

    /// Build a vector whose lane `i` is `lanes[i]`.
    #[inline]
    pub fn from_array(lanes: [i64; 2]) -> Self {
        Self(unsafe { std::mem::transmute(lanes) })
    }
}

impl Float64x2 {
    /// Lanes in lane order.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        unsafe { std::mem::transmute(self.0) }
    }

    /// Build a vector whose lane `i` is `lanes[i]`.
    #[inline]
    pub fn from_array(lanes: [f64; 2]) -> Self {
        Self(unsafe { std::mem::transmute(lanes) })
    }

    /// Raw lane bit patterns. Use this to compare vectors holding NaN.
    #[inline]
    pub fn to_bits(self) -> [u64; 2] {
        unsafe { std::mem::transmute(self.0) }
    }

    /// Build a vector from raw lane bit patterns.
    #[inline]
    pub fn from_bits(bits: [u64; 2]) -> Self {
        Self(unsafe { std::mem::transmute(bits) })
    }
}

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
impl Int32x8 {
    /// Lanes in lane order.
    #[inline]
    pub fn to_array(self) -> [i32; 8] {
        unsafe { std::mem::transmute(self.0) }
    }

    /// Build a vector whose lane `i` is `lanes[i]`.
    #[inline]
    pub fn from_array(lanes: [i32; 8]) -> Self {
        Self(unsafe { std::mem::transmute(lanes) })
    }
}

impl fmt::Debug for Int32x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Int32x4({:?})", self.to_array())
    }
}

impl fmt::Debug for Int64x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Int64x2({:?})", self.to_array())
    }
}

impl fmt::Debug for Float64x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Bits alongside values so NaN payloads stay visible
        let [a, b] = self.to_bits();
        write!(
            f,
            "Float64x2({:?}, bits=[{:#018x}, {:#018x}])",
            self.to_array(),
            a,
            b
        )
    }
}

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
impl fmt::Debug for Int32x8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Int32x8({:?})", self.to_array())
    }
}
