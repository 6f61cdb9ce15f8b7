//! 2 x i64 in a 128-bit register
//!
//! NEON: `vgetq_lane_s64` / `vsetq_lane_s64` / `vextq_s64`. The SSE2 mirror
//! builds the same results from 64-bit unpacks and byte shifts.

use super::SimdVector;
use super::types::{Int64x2, simd_arch};

/// Read lane `LANE` (0 = lowest-order).
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn get_lane_64x2i<const LANE: i32>(v: Int64x2) -> i64 {
    const { assert!(LANE >= 0 && LANE < 2, "lane index out of range for 64x2") };
    #[cfg(target_arch = "x86_64")]
    {
        match LANE {
            0 => simd_arch::_mm_cvtsi128_si64(v.0),
            _ => simd_arch::_mm_cvtsi128_si64(simd_arch::_mm_unpackhi_epi64(v.0, v.0)),
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        simd_arch::vgetq_lane_s64::<LANE>(v.0)
    }
}

/// Return `v` with lane `LANE` replaced by `x`.
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn set_lane_64x2i<const LANE: i32>(v: Int64x2, x: i64) -> Int64x2 {
    const { assert!(LANE >= 0 && LANE < 2, "lane index out of range for 64x2") };
    #[cfg(target_arch = "x86_64")]
    {
        let x = simd_arch::_mm_cvtsi64_si128(x);
        match LANE {
            // (x, v1)
            0 => Int64x2(simd_arch::_mm_unpacklo_epi64(x, simd_arch::_mm_unpackhi_epi64(v.0, v.0))),
            // (v0, x)
            _ => Int64x2(simd_arch::_mm_unpacklo_epi64(v.0, x)),
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        Int64x2(simd_arch::vsetq_lane_s64::<LANE>(x, v.0))
    }
}

/// Load 2 contiguous i64 (unaligned).
///
/// Safety: `ptr` must be valid for reading 2 elements.
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn load_64x2i(ptr: *const i64) -> Int64x2 {
    #[cfg(target_arch = "x86_64")]
    {
        Int64x2(simd_arch::_mm_loadu_si128(ptr as *const simd_arch::__m128i))
    }
    #[cfg(target_arch = "aarch64")]
    {
        Int64x2(simd_arch::vld1q_s64(ptr))
    }
}

/// Store both lanes to contiguous i64 (unaligned).
///
/// Safety: `ptr` must be valid for writing 2 elements.
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn store_64x2i(ptr: *mut i64, v: Int64x2) {
    #[cfg(target_arch = "x86_64")]
    {
        simd_arch::_mm_storeu_si128(ptr as *mut simd_arch::__m128i, v.0)
    }
    #[cfg(target_arch = "aarch64")]
    {
        simd_arch::vst1q_s64(ptr, v.0)
    }
}

/// Lanes `[K, K+2)` of `x‖y`: `K = 0` gives `x`, `K = 1` gives `(x1, y0)`.
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn extract_vector_64x2i<const K: i32>(x: Int64x2, y: Int64x2) -> Int64x2 {
    const { assert!(K >= 0 && K < 2, "shift out of range for 64x2") };
    #[cfg(target_arch = "x86_64")]
    {
        Int64x2(sse_lane_window!(x.0, y.0, K; 1 => (8, 8)))
    }
    #[cfg(target_arch = "aarch64")]
    {
        Int64x2(simd_arch::vextq_s64::<K>(x.0, y.0))
    }
}

impl SimdVector for Int64x2 {
    type Elem = i64;
    const LANES: usize = 2;

    #[inline]
    unsafe fn load(ptr: *const i64) -> Self {
        unsafe { load_64x2i(ptr) }
    }

    #[inline]
    unsafe fn store(ptr: *mut i64, v: Self) {
        unsafe { store_64x2i(ptr, v) }
    }
}
