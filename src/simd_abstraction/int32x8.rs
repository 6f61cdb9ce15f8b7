//! 8 x i32 in a 256-bit register (AVX2)
//!
//! Lane permutations, interleaves and the pairwise add for x86_64. Every
//! function is `unsafe` and annotated with `#[target_feature(enable = "avx2")]`;
//! callers must make sure AVX2 is available.
//!
//! Lane maps (lane 0 first, `x`/`y` are the two inputs):
//!
//! ```text
//! swap_pairs            x1 x0 x3 x2 x5 x4 x7 x6
//! swap_low_high         x4 x5 x6 x7 x0 x1 x2 x3
//! reverse               x7 x6 x5 x4 x3 x2 x1 x0
//! rotate_left           x1 x2 x3 x4 x5 x6 x7 x0
//! rotate_right          x7 x0 x1 x2 x3 x4 x5 x6
//! interleave_lower      x0 y0 x1 y1 x2 y2 x3 y3
//! interleave_upper      x4 y4 x5 y5 x6 y6 x7 y7
//! deinterleave_lower    x0 x2 x4 x6 y0 y2 y4 y6
//! deinterleave_upper    x1 x3 x5 x7 y1 y3 y5 y7
//! blend_low_high        x0 x1 x2 x3 y4 y5 y6 y7
//! hadd                  x0+x1 x2+x3 x6+x7 x4+x5 y0+y1 y2+y3 y6+y7 y4+y5
//! ```
//!
//! Most of the 128-bit-lane AVX2 instructions (`unpack*`, `hadd`, `shuffle`)
//! work within each half independently, so the cross-half results above need a
//! `permute2x128` or `permutevar8x32` fix-up.

use super::SimdVector;
use super::types::{Int32x8, simd_arch};

/// Read lane `LANE` (0 = lowest-order).
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn get_lane_256epi32<const LANE: i32>(v: Int32x8) -> i32 {
    const { assert!(LANE >= 0 && LANE < 8, "lane index out of range for 32x8") };
    simd_arch::_mm256_extract_epi32::<LANE>(v.0)
}

/// Return `v` with lane `LANE` replaced by `x`.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn set_lane_256epi32<const LANE: i32>(v: Int32x8, x: i32) -> Int32x8 {
    const { assert!(LANE >= 0 && LANE < 8, "lane index out of range for 32x8") };
    Int32x8(simd_arch::_mm256_insert_epi32::<LANE>(v.0, x))
}

/// Load 8 contiguous i32 (unaligned).
///
/// Safety: `ptr` must be valid for reading 8 elements.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn load_256epi32(ptr: *const i32) -> Int32x8 {
    Int32x8(simd_arch::_mm256_loadu_si256(ptr as *const simd_arch::__m256i))
}

/// Store the 8 lanes to contiguous i32 (unaligned).
///
/// Safety: `ptr` must be valid for writing 8 elements.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn store_256epi32(ptr: *mut i32, v: Int32x8) {
    simd_arch::_mm256_storeu_si256(ptr as *mut simd_arch::__m256i, v.0)
}

/// Exchange each even/odd lane pair.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn swap_pairs_256epi32(x: Int32x8) -> Int32x8 {
    // (1, 0, 3, 2) within each 128-bit half
    Int32x8(simd_arch::_mm256_shuffle_epi32::<0b10_11_00_01>(x.0))
}

/// Exchange the low and high 4-lane halves.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn swap_low_high_256epi32(x: Int32x8) -> Int32x8 {
    Int32x8(simd_arch::_mm256_permute2x128_si256::<0x01>(x.0, x.0))
}

/// Full lane reversal.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn reverse_256epi32(x: Int32x8) -> Int32x8 {
    let idx = simd_arch::_mm256_setr_epi32(7, 6, 5, 4, 3, 2, 1, 0);
    Int32x8(simd_arch::_mm256_permutevar8x32_epi32(x.0, idx))
}

/// Rotate by one lane toward lane 0: new lane `i` is old lane `(i + 1) % 8`.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn rotate_left_256epi32(x: Int32x8) -> Int32x8 {
    let idx = simd_arch::_mm256_setr_epi32(1, 2, 3, 4, 5, 6, 7, 0);
    Int32x8(simd_arch::_mm256_permutevar8x32_epi32(x.0, idx))
}

/// Rotate by one lane away from lane 0: new lane `i` is old lane `(i + 7) % 8`.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn rotate_right_256epi32(x: Int32x8) -> Int32x8 {
    let idx = simd_arch::_mm256_setr_epi32(7, 0, 1, 2, 3, 4, 5, 6);
    Int32x8(simd_arch::_mm256_permutevar8x32_epi32(x.0, idx))
}

/// Interleave the low halves: `(x0, y0, x1, y1, x2, y2, x3, y3)`.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn interleave_lower_256epi32(x: Int32x8, y: Int32x8) -> Int32x8 {
    // lo = (x0 y0 x1 y1 | x4 y4 x5 y5), hi = (x2 y2 x3 y3 | x6 y6 x7 y7)
    let lo = simd_arch::_mm256_unpacklo_epi32(x.0, y.0);
    let hi = simd_arch::_mm256_unpackhi_epi32(x.0, y.0);
    Int32x8(simd_arch::_mm256_permute2x128_si256::<0x20>(lo, hi))
}

/// Interleave the high halves: `(x4, y4, x5, y5, x6, y6, x7, y7)`.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn interleave_upper_256epi32(x: Int32x8, y: Int32x8) -> Int32x8 {
    let lo = simd_arch::_mm256_unpacklo_epi32(x.0, y.0);
    let hi = simd_arch::_mm256_unpackhi_epi32(x.0, y.0);
    Int32x8(simd_arch::_mm256_permute2x128_si256::<0x31>(lo, hi))
}

/// Even lanes of `x` then even lanes of `y`: `(x0, x2, x4, x6, y0, y2, y4, y6)`.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn deinterleave_lower_256epi32(x: Int32x8, y: Int32x8) -> Int32x8 {
    let idx = simd_arch::_mm256_setr_epi32(0, 2, 4, 6, 0, 2, 4, 6);
    let ex = simd_arch::_mm256_permutevar8x32_epi32(x.0, idx);
    let ey = simd_arch::_mm256_permutevar8x32_epi32(y.0, idx);
    Int32x8(simd_arch::_mm256_blend_epi32::<0xF0>(ex, ey))
}

/// Odd lanes of `x` then odd lanes of `y`: `(x1, x3, x5, x7, y1, y3, y5, y7)`.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn deinterleave_upper_256epi32(x: Int32x8, y: Int32x8) -> Int32x8 {
    let idx = simd_arch::_mm256_setr_epi32(1, 3, 5, 7, 1, 3, 5, 7);
    let ox = simd_arch::_mm256_permutevar8x32_epi32(x.0, idx);
    let oy = simd_arch::_mm256_permutevar8x32_epi32(y.0, idx);
    Int32x8(simd_arch::_mm256_blend_epi32::<0xF0>(ox, oy))
}

/// Low half from `x`, high half from `y`.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn blend_low_high_256epi32(x: Int32x8, y: Int32x8) -> Int32x8 {
    Int32x8(simd_arch::_mm256_blend_epi32::<0xF0>(x.0, y.0))
}

/// Pairwise sums of adjacent lanes, `x` pairs in the low half and `y` pairs in
/// the high half, with the last two sums of each half swapped:
/// `(x0+x1, x2+x3, x6+x7, x4+x5, y0+y1, y2+y3, y6+y7, y4+y5)`.
///
/// Sums wrap on overflow.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn hadd_256epi32(x: Int32x8, y: Int32x8) -> Int32x8 {
    // hadd gives (sx0 sx1 sy0 sy1 | sx2 sx3 sy2 sy3)
    let sums = simd_arch::_mm256_hadd_epi32(x.0, y.0);
    let idx = simd_arch::_mm256_setr_epi32(0, 1, 5, 4, 2, 3, 7, 6);
    Int32x8(simd_arch::_mm256_permutevar8x32_epi32(sums, idx))
}

impl SimdVector for Int32x8 {
    type Elem = i32;
    const LANES: usize = 8;

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn load(ptr: *const i32) -> Self {
        unsafe { load_256epi32(ptr) }
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn store(ptr: *mut i32, v: Self) {
        unsafe { store_256epi32(ptr, v) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: [i32; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
    const Y: [i32; 8] = [10, 11, 12, 13, 14, 15, 16, 17];

    fn have_avx2() -> bool {
        is_x86_feature_detected!("avx2")
    }

    fn v(lanes: [i32; 8]) -> Int32x8 {
        Int32x8::from_array(lanes)
    }

    #[test]
    fn test_single_source_permutations() {
        if !have_avx2() {
            return;
        }
        let x = v(X);
        unsafe {
            assert_eq!(swap_pairs_256epi32(x).to_array(), [1, 0, 3, 2, 5, 4, 7, 6]);
            assert_eq!(swap_low_high_256epi32(x).to_array(), [4, 5, 6, 7, 0, 1, 2, 3]);
            assert_eq!(reverse_256epi32(x).to_array(), [7, 6, 5, 4, 3, 2, 1, 0]);
            assert_eq!(rotate_left_256epi32(x).to_array(), [1, 2, 3, 4, 5, 6, 7, 0]);
            assert_eq!(rotate_right_256epi32(x).to_array(), [7, 0, 1, 2, 3, 4, 5, 6]);
        }
    }

    #[test]
    fn test_two_source_permutations() {
        if !have_avx2() {
            return;
        }
        let (x, y) = (v(X), v(Y));
        unsafe {
            assert_eq!(
                interleave_lower_256epi32(x, y).to_array(),
                [0, 10, 1, 11, 2, 12, 3, 13]
            );
            assert_eq!(
                interleave_upper_256epi32(x, y).to_array(),
                [4, 14, 5, 15, 6, 16, 7, 17]
            );
            assert_eq!(
                deinterleave_lower_256epi32(x, y).to_array(),
                [0, 2, 4, 6, 10, 12, 14, 16]
            );
            assert_eq!(
                deinterleave_upper_256epi32(x, y).to_array(),
                [1, 3, 5, 7, 11, 13, 15, 17]
            );
            assert_eq!(
                blend_low_high_256epi32(x, y).to_array(),
                [0, 1, 2, 3, 14, 15, 16, 17]
            );
        }
    }

    #[test]
    fn test_hadd_swaps_last_pair_of_each_half() {
        if !have_avx2() {
            return;
        }
        let x = v([1, 2, 3, 4, 5, 6, 7, 8]);
        unsafe {
            assert_eq!(hadd_256epi32(x, x).to_array(), [3, 7, 15, 11, 3, 7, 15, 11]);
            assert_eq!(
                hadd_256epi32(v(X), v(Y)).to_array(),
                [1, 5, 13, 9, 21, 25, 33, 29]
            );
        }
    }

    #[test]
    fn test_hadd_wraps() {
        if !have_avx2() {
            return;
        }
        let x = v([i32::MAX, 1, 0, 0, 0, 0, i32::MIN, -1]);
        let r = unsafe { hadd_256epi32(x, x) };
        assert_eq!(r.to_array()[0], i32::MIN);
        assert_eq!(r.to_array()[2], i32::MAX);
    }

    #[test]
    fn test_lane_get_set() {
        if !have_avx2() {
            return;
        }
        let x = v(Y);
        unsafe {
            assert_eq!(get_lane_256epi32::<0>(x), 10);
            assert_eq!(get_lane_256epi32::<5>(x), 15);
            assert_eq!(get_lane_256epi32::<7>(x), 17);
            let r = set_lane_256epi32::<6>(x, i32::MIN);
            assert_eq!(r.to_array(), [10, 11, 12, 13, 14, 15, i32::MIN, 17]);
        }
    }

    #[test]
    fn test_load_store_round_trip() {
        if !have_avx2() {
            return;
        }
        let src = [0, -1, i32::MIN, i32::MAX, 1, -2, 0x5555_5555, -0x5555_5556];
        let mut dst = [0i32; 8];
        unsafe { store_256epi32(dst.as_mut_ptr(), load_256epi32(src.as_ptr())) };
        assert_eq!(dst, src);
    }
}
