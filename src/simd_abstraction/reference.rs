//! Scalar reference model of every lane contract.
//!
//! Plain array code, independent of any ISA. Tests and the conformance check
//! compare the native wrappers against these functions.
//!
//! Single-source tables give, for each output lane, the input lane it reads.
//! Two-source tables index the concatenation `x‖y`: entries below `N` read
//! `x`, entries `N..2N` read `y`.

/// `swap_pairs_256epi32`
pub const SWAP_PAIRS: [usize; 8] = [1, 0, 3, 2, 5, 4, 7, 6];
/// `swap_low_high_256epi32`
pub const SWAP_LOW_HIGH: [usize; 8] = [4, 5, 6, 7, 0, 1, 2, 3];
/// `reverse_256epi32`
pub const REVERSE: [usize; 8] = [7, 6, 5, 4, 3, 2, 1, 0];
/// `rotate_left_256epi32`
pub const ROTATE_LEFT: [usize; 8] = [1, 2, 3, 4, 5, 6, 7, 0];
/// `rotate_right_256epi32`
pub const ROTATE_RIGHT: [usize; 8] = [7, 0, 1, 2, 3, 4, 5, 6];

/// `interleave_lower_256epi32`
pub const INTERLEAVE_LOWER: [usize; 8] = [0, 8, 1, 9, 2, 10, 3, 11];
/// `interleave_upper_256epi32`
pub const INTERLEAVE_UPPER: [usize; 8] = [4, 12, 5, 13, 6, 14, 7, 15];
/// `deinterleave_lower_256epi32`
pub const DEINTERLEAVE_LOWER: [usize; 8] = [0, 2, 4, 6, 8, 10, 12, 14];
/// `deinterleave_upper_256epi32`
pub const DEINTERLEAVE_UPPER: [usize; 8] = [1, 3, 5, 7, 9, 11, 13, 15];
/// `blend_low_high_256epi32`
pub const BLEND_LOW_HIGH: [usize; 8] = [0, 1, 2, 3, 12, 13, 14, 15];

/// Order in which `hadd` emits the four pair sums of each half.
pub const HADD_ORDER: [usize; 4] = [0, 1, 3, 2];

/// Apply a single-source lane table.
pub fn permute<T: Copy, const N: usize>(x: [T; N], table: &[usize; N]) -> [T; N] {
    std::array::from_fn(|i| x[table[i]])
}

/// Apply a two-source lane table over `x‖y`.
pub fn permute2<T: Copy, const N: usize>(x: [T; N], y: [T; N], table: &[usize; N]) -> [T; N] {
    std::array::from_fn(|i| {
        let src = table[i];
        if src < N { x[src] } else { y[src - N] }
    })
}

/// Lanes `[k, k+N)` of `x‖y`. `k` must be below `N`.
pub fn extract_window<T: Copy, const N: usize>(x: [T; N], y: [T; N], k: usize) -> [T; N] {
    assert!(k < N, "window start {k} out of range for {N} lanes");
    std::array::from_fn(|i| if k + i < N { x[k + i] } else { y[k + i - N] })
}

/// Pairwise wrapping sums of `x` (low half) and `y` (high half), each half
/// emitted in [`HADD_ORDER`].
pub fn hadd(x: [i32; 8], y: [i32; 8]) -> [i32; 8] {
    let pair_sums = |v: [i32; 8]| -> [i32; 4] {
        std::array::from_fn(|k| v[2 * k].wrapping_add(v[2 * k + 1]))
    };
    let sx = pair_sums(x);
    let sy = pair_sums(y);
    std::array::from_fn(|i| {
        if i < 4 {
            sx[HADD_ORDER[i]]
        } else {
            sy[HADD_ORDER[i - 4]]
        }
    })
}

/// True iff every lane is zero.
pub fn is_all_zeros(lanes: &[i32]) -> bool {
    lanes.iter().fold(0, |acc, &l| acc | l) == 0
}

/// Bit `i` set iff lane `i` is negative.
pub fn movemask(lanes: &[i32]) -> i32 {
    lanes
        .iter()
        .enumerate()
        .fold(0, |mask, (i, &l)| mask | ((((l as u32) >> 31) as i32) << i))
}

/// Lane `i` replaced by `x`.
pub fn set_lane<T: Copy, const N: usize>(v: [T; N], i: usize, x: T) -> [T; N] {
    let mut out = v;
    out[i] = x;
    out
}
