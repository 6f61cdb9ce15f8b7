//! 2 x f64 in a 128-bit register
//!
//! Every operation here is pure data movement, so lanes holding NaN keep their
//! exact bit pattern (payload and signalling bit included). Compare results
//! with [`Float64x2::to_bits`], never with `==`.

use super::SimdVector;
use super::types::{Float64x2, simd_arch};

/// Read lane `LANE` (0 = lowest-order).
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn get_lane_64x2r<const LANE: i32>(v: Float64x2) -> f64 {
    const { assert!(LANE >= 0 && LANE < 2, "lane index out of range for 64x2") };
    #[cfg(target_arch = "x86_64")]
    {
        match LANE {
            0 => simd_arch::_mm_cvtsd_f64(v.0),
            _ => simd_arch::_mm_cvtsd_f64(simd_arch::_mm_unpackhi_pd(v.0, v.0)),
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        simd_arch::vgetq_lane_f64::<LANE>(v.0)
    }
}

/// Return `v` with lane `LANE` replaced by `x`.
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn set_lane_64x2r<const LANE: i32>(v: Float64x2, x: f64) -> Float64x2 {
    const { assert!(LANE >= 0 && LANE < 2, "lane index out of range for 64x2") };
    #[cfg(target_arch = "x86_64")]
    {
        let x = simd_arch::_mm_set_sd(x);
        match LANE {
            0 => Float64x2(simd_arch::_mm_move_sd(v.0, x)),
            _ => Float64x2(simd_arch::_mm_unpacklo_pd(v.0, x)),
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        Float64x2(simd_arch::vsetq_lane_f64::<LANE>(x, v.0))
    }
}

/// Load 2 contiguous f64 (unaligned).
///
/// Safety: `ptr` must be valid for reading 2 elements.
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn load_64x2r(ptr: *const f64) -> Float64x2 {
    #[cfg(target_arch = "x86_64")]
    {
        Float64x2(simd_arch::_mm_loadu_pd(ptr))
    }
    #[cfg(target_arch = "aarch64")]
    {
        Float64x2(simd_arch::vld1q_f64(ptr))
    }
}

/// Store both lanes to contiguous f64 (unaligned).
///
/// Safety: `ptr` must be valid for writing 2 elements.
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn store_64x2r(ptr: *mut f64, v: Float64x2) {
    #[cfg(target_arch = "x86_64")]
    {
        simd_arch::_mm_storeu_pd(ptr, v.0)
    }
    #[cfg(target_arch = "aarch64")]
    {
        simd_arch::vst1q_f64(ptr, v.0)
    }
}

/// Lanes `[K, K+2)` of `x‖y`: `K = 0` gives `x`, `K = 1` gives `(x1, y0)`.
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn extract_vector_64x2r<const K: i32>(x: Float64x2, y: Float64x2) -> Float64x2 {
    const { assert!(K >= 0 && K < 2, "shift out of range for 64x2") };
    #[cfg(target_arch = "x86_64")]
    {
        match K {
            0 => x,
            // imm bit0 picks x1 for lane 0, bit1 clear picks y0 for lane 1
            _ => Float64x2(simd_arch::_mm_shuffle_pd::<0b01>(x.0, y.0)),
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        Float64x2(simd_arch::vextq_f64::<K>(x.0, y.0))
    }
}

impl SimdVector for Float64x2 {
    type Elem = f64;
    const LANES: usize = 2;

    #[inline]
    unsafe fn load(ptr: *const f64) -> Self {
        unsafe { load_64x2r(ptr) }
    }

    #[inline]
    unsafe fn store(ptr: *mut f64, v: Self) {
        unsafe { store_64x2r(ptr, v) }
    }
}
