//! 4 x i32 in a 128-bit register
//!
//! NEON maps one-to-one onto each operation (`vgetq_lane_s32`,
//! `vsetq_lane_s32`, `vextq_s32`, ...). The x86_64 bodies mirror the NEON
//! semantics with SSE2 only, so no runtime feature check is ever needed:
//!
//! - lane get/set go through `_mm_shuffle_epi32` and a one-lane select mask
//!   (`pextrd`/`pinsrd` would need SSE4.1),
//! - `extract_vector` is a byte shift-merge instead of `palignr` (SSSE3).
//!
//! `is_all_zeros_32x4i` is exact for any lane values: NEON reduces with an
//! unsigned maximum, since a signed-minimum reduction reports `(0, 5, 0, 0)`
//! as zero. `movemask_32x4i` packs lane `i`'s sign into bit `i` on both
//! architectures.

use super::SimdVector;
use super::types::{Int32x4, simd_arch};

/// Per-lane left shifts that move each isolated sign bit to its lane's bit.
#[cfg(target_arch = "aarch64")]
const MOVEMASK_SHIFTS: [i32; 4] = [0, 1, 2, 3];

/// Read lane `LANE` (0 = lowest-order).
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn get_lane_32x4i<const LANE: i32>(v: Int32x4) -> i32 {
    const { assert!(LANE >= 0 && LANE < 4, "lane index out of range for 32x4") };
    #[cfg(target_arch = "x86_64")]
    {
        match LANE {
            0 => simd_arch::_mm_cvtsi128_si32(v.0),
            1 => simd_arch::_mm_cvtsi128_si32(simd_arch::_mm_shuffle_epi32::<0x55>(v.0)),
            2 => simd_arch::_mm_cvtsi128_si32(simd_arch::_mm_shuffle_epi32::<0xAA>(v.0)),
            _ => simd_arch::_mm_cvtsi128_si32(simd_arch::_mm_shuffle_epi32::<0xFF>(v.0)),
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        simd_arch::vgetq_lane_s32::<LANE>(v.0)
    }
}

/// Return `v` with lane `LANE` replaced by `x`.
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn set_lane_32x4i<const LANE: i32>(v: Int32x4, x: i32) -> Int32x4 {
    const { assert!(LANE >= 0 && LANE < 4, "lane index out of range for 32x4") };
    #[cfg(target_arch = "x86_64")]
    {
        let mask = match LANE {
            0 => simd_arch::_mm_setr_epi32(-1, 0, 0, 0),
            1 => simd_arch::_mm_setr_epi32(0, -1, 0, 0),
            2 => simd_arch::_mm_setr_epi32(0, 0, -1, 0),
            _ => simd_arch::_mm_setr_epi32(0, 0, 0, -1),
        };
        let keep = simd_arch::_mm_andnot_si128(mask, v.0);
        let put = simd_arch::_mm_and_si128(mask, simd_arch::_mm_set1_epi32(x));
        Int32x4(simd_arch::_mm_or_si128(keep, put))
    }
    #[cfg(target_arch = "aarch64")]
    {
        Int32x4(simd_arch::vsetq_lane_s32::<LANE>(x, v.0))
    }
}

/// Load 4 contiguous i32 (unaligned), element `k` into lane `k`.
///
/// Safety: `ptr` must be valid for reading 4 elements.
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn load_32x4i(ptr: *const i32) -> Int32x4 {
    #[cfg(target_arch = "x86_64")]
    {
        Int32x4(simd_arch::_mm_loadu_si128(ptr as *const simd_arch::__m128i))
    }
    #[cfg(target_arch = "aarch64")]
    {
        Int32x4(simd_arch::vld1q_s32(ptr))
    }
}

/// Store the 4 lanes to contiguous i32 (unaligned), lane `k` into element `k`.
///
/// Safety: `ptr` must be valid for writing 4 elements.
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn store_32x4i(ptr: *mut i32, v: Int32x4) {
    #[cfg(target_arch = "x86_64")]
    {
        simd_arch::_mm_storeu_si128(ptr as *mut simd_arch::__m128i, v.0)
    }
    #[cfg(target_arch = "aarch64")]
    {
        simd_arch::vst1q_s32(ptr, v.0)
    }
}

/// Lanes `[K, K+4)` of the 8-lane concatenation `x‖y`.
///
/// `K = 0` returns `x`. Lanes are moved verbatim; nothing is sign-extended.
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn extract_vector_32x4i<const K: i32>(x: Int32x4, y: Int32x4) -> Int32x4 {
    const { assert!(K >= 0 && K < 4, "shift out of range for 32x4") };
    #[cfg(target_arch = "x86_64")]
    {
        Int32x4(sse_lane_window!(x.0, y.0, K; 1 => (4, 12), 2 => (8, 8), 3 => (12, 4)))
    }
    #[cfg(target_arch = "aarch64")]
    {
        Int32x4(simd_arch::vextq_s32::<K>(x.0, y.0))
    }
}

/// True iff every lane is exactly zero.
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn is_all_zeros_32x4i(x: Int32x4) -> bool {
    #[cfg(target_arch = "x86_64")]
    {
        let eq = simd_arch::_mm_cmpeq_epi32(x.0, simd_arch::_mm_setzero_si128());
        simd_arch::_mm_movemask_epi8(eq) == 0xFFFF
    }
    #[cfg(target_arch = "aarch64")]
    {
        simd_arch::vmaxvq_u32(simd_arch::vreinterpretq_u32_s32(x.0)) == 0
    }
}

/// Bit `i` of the result is the sign bit of lane `i`; bits 4.. are zero.
#[inline]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn movemask_32x4i(x: Int32x4) -> i32 {
    #[cfg(target_arch = "x86_64")]
    {
        simd_arch::_mm_movemask_ps(simd_arch::_mm_castsi128_ps(x.0))
    }
    #[cfg(target_arch = "aarch64")]
    {
        let signs = simd_arch::vshrq_n_u32::<31>(simd_arch::vreinterpretq_u32_s32(x.0));
        let shifts = simd_arch::vld1q_s32(MOVEMASK_SHIFTS.as_ptr());
        simd_arch::vaddvq_u32(simd_arch::vshlq_u32(signs, shifts)) as i32
    }
}

impl SimdVector for Int32x4 {
    type Elem = i32;
    const LANES: usize = 4;

    #[inline]
    unsafe fn load(ptr: *const i32) -> Self {
        unsafe { load_32x4i(ptr) }
    }

    #[inline]
    unsafe fn store(ptr: *mut i32, v: Self) {
        unsafe { store_32x4i(ptr, v) }
    }
}
