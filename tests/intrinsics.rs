// tests/intrinsics.rs
//
// Lane-level contracts of every wrapper module, checked on the native backend
// of whichever architecture runs the suite.

use simd_wrappers::SimdVector;
use simd_wrappers::simd_abstraction::int32x4::*;
use simd_wrappers::simd_abstraction::int64x2::*;
use simd_wrappers::simd_abstraction::real64x2::*;
use simd_wrappers::{Float64x2, Int32x4, Int64x2};

fn round_trip<V: SimdVector>(src: &[V::Elem]) -> Vec<V::Elem>
where
    V::Elem: Default,
{
    let mut dst = vec![V::Elem::default(); V::LANES];
    unsafe {
        let v = V::from_slice(src);
        v.copy_to_slice(&mut dst);
    }
    dst
}

#[test]
fn test_round_trip_int32x4_boundaries() {
    for src in [
        [0, 0, 0, 0],
        [-1, -1, -1, -1],
        [i32::MIN, i32::MAX, i32::MIN, i32::MAX],
        [i32::MAX, 0, -1, i32::MIN],
    ] {
        assert_eq!(round_trip::<Int32x4>(&src), src, "test_round_trip_int32x4");
    }
}

#[test]
fn test_round_trip_int64x2_boundaries() {
    for src in [[0i64, 0], [-1, -1], [i64::MIN, i64::MAX], [i64::MAX, i64::MIN]] {
        assert_eq!(round_trip::<Int64x2>(&src), src, "test_round_trip_int64x2");
    }
}

#[test]
fn test_round_trip_float64x2_nan_bits() {
    let patterns = [
        [0x7ff8_0000_0000_0000u64, 0x7ff0_0000_0000_0001],
        [0xffff_ffff_ffff_ffff, 0x8000_0000_0000_0000],
        [0x0000_0000_0000_0001, 0x7ff0_0000_0000_0000],
    ];
    for bits in patterns {
        let src = bits.map(f64::from_bits);
        let out = round_trip::<Float64x2>(&src);
        let out_bits: Vec<u64> = out.iter().map(|f| f.to_bits()).collect();
        assert_eq!(out_bits, bits, "test_round_trip_float64x2_nan_bits");
    }
}

#[test]
#[should_panic]
fn test_from_slice_rejects_short_slice() {
    let short = [1i32, 2, 3];
    let _ = unsafe { Int32x4::from_slice(&short) };
}

#[test]
fn test_get_after_set_int32x4() {
    let v = Int32x4::from_array([11, 22, 33, 44]);
    unsafe {
        let r = set_lane_32x4i::<2>(v, i32::MIN);
        assert_eq!(get_lane_32x4i::<2>(r), i32::MIN);
        assert_eq!(get_lane_32x4i::<0>(r), 11);
        assert_eq!(get_lane_32x4i::<1>(r), 22);
        assert_eq!(get_lane_32x4i::<3>(r), 44);
    }
}

#[test]
fn test_get_after_set_int64x2() {
    let v = Int64x2::from_array([5, 6]);
    unsafe {
        let r = set_lane_64x2i::<1>(v, i64::MIN);
        assert_eq!(get_lane_64x2i::<1>(r), i64::MIN);
        assert_eq!(get_lane_64x2i::<0>(r), 5);
    }
}

#[test]
fn test_get_after_set_float64x2() {
    let v = Float64x2::from_array([0.5, 0.25]);
    let nan = f64::from_bits(0x7ff8_0000_0000_beef);
    unsafe {
        let r = set_lane_64x2r::<0>(v, nan);
        assert_eq!(get_lane_64x2r::<0>(r).to_bits(), nan.to_bits());
        assert_eq!(get_lane_64x2r::<1>(r), 0.25);
    }
}

#[test]
fn test_extract_vector_zero_is_identity() {
    unsafe {
        let x = Int32x4::from_array([1, -2, 3, -4]);
        let y = Int32x4::from_array([9, 9, 9, 9]);
        assert_eq!(extract_vector_32x4i::<0>(x, y).to_array(), x.to_array());

        let x = Int64x2::from_array([i64::MIN, 1]);
        let y = Int64x2::from_array([2, 3]);
        assert_eq!(extract_vector_64x2i::<0>(x, y).to_array(), x.to_array());

        let x = Float64x2::from_bits([0x7ff0_0000_0000_0001, 0]);
        let y = Float64x2::from_array([1.0, 2.0]);
        assert_eq!(extract_vector_64x2r::<0>(x, y).to_bits(), x.to_bits());
    }
}

#[test]
fn test_is_all_zeros_int32x4() {
    unsafe {
        assert!(is_all_zeros_32x4i(Int32x4::from_array([0; 4])));
        assert!(!is_all_zeros_32x4i(Int32x4::from_array([0, i32::MIN, 0, 0])));
        assert!(!is_all_zeros_32x4i(Int32x4::from_array([i32::MIN, 0, 0, 0])));
        assert!(!is_all_zeros_32x4i(Int32x4::from_array([0, 0, 1, 0])));
    }
}

#[test]
fn test_movemask_int32x4() {
    unsafe {
        assert_eq!(movemask_32x4i(Int32x4::from_array([-1, 0, 5, -7])), 0b1001);
        for lane in 0..4 {
            let mut lanes = [0i32; 4];
            lanes[lane] = i32::MIN;
            assert_eq!(
                movemask_32x4i(Int32x4::from_array(lanes)),
                1 << lane,
                "sign bit of lane {lane}"
            );
        }
    }
}

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
mod avx2_tests {
    use simd_wrappers::Int32x8;
    use simd_wrappers::SimdVector;
    use simd_wrappers::simd_abstraction::int32x8::*;
    use std::is_x86_feature_detected;

    const X: [i32; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
    const Y: [i32; 8] = [10, 11, 12, 13, 14, 15, 16, 17];

    #[test]
    fn test_documented_lane_maps() {
        if !is_x86_feature_detected!("avx2") {
            return;
        }
        unsafe {
            let x = Int32x8::from_slice(&X);
            let y = Int32x8::from_slice(&Y);
            assert_eq!(interleave_lower_256epi32(x, y).to_array(), [0, 10, 1, 11, 2, 12, 3, 13]);
            assert_eq!(interleave_upper_256epi32(x, y).to_array(), [4, 14, 5, 15, 6, 16, 7, 17]);
            assert_eq!(deinterleave_lower_256epi32(x, y).to_array(), [0, 2, 4, 6, 10, 12, 14, 16]);
            assert_eq!(deinterleave_upper_256epi32(x, y).to_array(), [1, 3, 5, 7, 11, 13, 15, 17]);
            assert_eq!(blend_low_high_256epi32(x, y).to_array(), [0, 1, 2, 3, 14, 15, 16, 17]);
        }
    }

    #[test]
    fn test_involutions_and_inverse_rotations() {
        if !is_x86_feature_detected!("avx2") {
            return;
        }
        unsafe {
            let x = Int32x8::from_array([i32::MIN, -1, 0, 1, i32::MAX, 42, -42, 7]);
            assert_eq!(reverse_256epi32(reverse_256epi32(x)).to_array(), x.to_array());
            assert_eq!(swap_pairs_256epi32(swap_pairs_256epi32(x)).to_array(), x.to_array());
            assert_eq!(
                swap_low_high_256epi32(swap_low_high_256epi32(x)).to_array(),
                x.to_array()
            );
            assert_eq!(
                rotate_left_256epi32(rotate_right_256epi32(x)).to_array(),
                x.to_array()
            );
            assert_eq!(
                rotate_right_256epi32(rotate_left_256epi32(x)).to_array(),
                x.to_array()
            );
        }
    }

    #[test]
    fn test_hadd_documented_order() {
        if !is_x86_feature_detected!("avx2") {
            return;
        }
        unsafe {
            let x = Int32x8::from_array([1, 2, 3, 4, 5, 6, 7, 8]);
            let r = hadd_256epi32(x, x).to_array();
            assert_eq!(&r[..4], &[3, 7, 15, 11]);
            assert_eq!(&r[4..], &[3, 7, 15, 11]);
        }
    }

    #[test]
    fn test_round_trip_int32x8() {
        if !is_x86_feature_detected!("avx2") {
            return;
        }
        let src = [i32::MIN, i32::MAX, 0, -1, 1, 0x7fff_0000, -0x8000, 3];
        let mut dst = [0i32; 8];
        unsafe {
            let v = load_256epi32(src.as_ptr());
            store_256epi32(dst.as_mut_ptr(), v);
        }
        assert_eq!(dst, src);
    }
}
