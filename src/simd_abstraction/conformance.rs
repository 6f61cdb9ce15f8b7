//! Runtime conformance check of the native wrappers.
//!
//! Each `check_*` function runs every operation of one module over a fixed set
//! of probe vectors (zero, all-ones, sign boundaries, alternating bit patterns,
//! NaN payloads for f64) and compares the result lane by lane against
//! [`reference`](super::reference). The first mismatch is logged with its
//! inputs and returned as an error naming the operation.
//!
//! Nothing here chooses a backend. Run the checks your target supports, e.g.
//! `check_int32x8` only after confirming AVX2 yourself.

use std::fmt::Debug;

use anyhow::{Result, bail};

use super::int32x4::*;
use super::int64x2::*;
use super::real64x2::*;
use super::reference;

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
use super::int32x8::*;
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
use super::types::Int32x8;

const PROBES_32X4: [[i32; 4]; 8] = [
    [0, 0, 0, 0],
    [-1, -1, -1, -1],
    [0, i32::MIN, 0, 0],
    [0, 5, 0, 0],
    [i32::MIN, i32::MAX, 0, -1],
    [1, 2, 3, 4],
    [0x5555_5555, 0xAAAA_AAAAu32 as i32, 0x0F0F_0F0F, 0xF0F0_F0F0u32 as i32],
    [-7, 5, 0, -1],
];

const PROBES_64X2: [[i64; 2]; 6] = [
    [0, 0],
    [-1, -1],
    [i64::MIN, i64::MAX],
    [0, i64::MIN],
    [1 << 40, -(1 << 40)],
    [0x5555_5555_5555_5555, 0xAAAA_AAAA_AAAA_AAAAu64 as i64],
];

const PROBES_64X2_BITS: [[u64; 2]; 6] = [
    [0, 0x8000_0000_0000_0000],          // +0.0, -0.0
    [0x7ff8_0000_0000_0001, 0x7ff0_0000_0000_0001], // quiet NaN, signalling NaN
    [0xfff8_dead_beef_0000, 0x7ff0_0000_0000_0000], // negative NaN payload, +inf
    [0x3ff0_0000_0000_0000, 0xc004_0000_0000_0000], // 1.0, -2.5
    [0x0000_0000_0000_0001, 0x7fef_ffff_ffff_ffff], // smallest subnormal, f64::MAX
    [u64::MAX, 0x5555_5555_5555_5555],
];

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
const PROBES_32X8: [[i32; 8]; 6] = [
    [0, 1, 2, 3, 4, 5, 6, 7],
    [10, 11, 12, 13, 14, 15, 16, 17],
    [1, 2, 3, 4, 5, 6, 7, 8],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [i32::MIN, i32::MAX, -1, 1, i32::MAX, 1, i32::MIN, -1],
    [0x5555_5555, -1, 0, 0xAAAA_AAAAu32 as i32, 7, -7, 1 << 30, -(1 << 30)],
];

/// Lane value written by the set-lane checks.
const SENTINEL_32: i32 = 0x1234_5678;
const SENTINEL_64: i64 = -0x0123_4567_89ab_cdef;
const SENTINEL_F64_BITS: u64 = 0x7ff4_0000_0000_abcd;

// Instantiates `$body` once per listed lane with `$name` bound to a
// const lane index, so const-generic wrappers can be driven from a list.
macro_rules! each_lane {
    ($name:ident in [$($lane:literal),+] => $body:block) => {{
        $({
            const $name: i32 = $lane;
            $body
        })+
    }};
}

fn expect_lanes<I: Debug, T: PartialEq + Debug>(
    module: &str,
    op: &str,
    inputs: I,
    expected: T,
    actual: T,
) -> Result<()> {
    if expected != actual {
        log::error!(
            "{}::{} mismatch: inputs={:?} expected={:?} actual={:?}",
            module,
            op,
            inputs,
            expected,
            actual
        );
        bail!("{module}::{op}: expected {expected:?}, got {actual:?} for inputs {inputs:?}");
    }
    Ok(())
}

/// Check every 4 x i32 operation against the reference model.
pub fn check_int32x4() -> Result<()> {
    const M: &str = "int32x4";
    for (n, &p) in PROBES_32X4.iter().enumerate() {
        let q = PROBES_32X4[(n + 1) % PROBES_32X4.len()];
        // SAFETY: NEON / SSE2 are baseline on the supported targets and every
        // pointer below addresses a local 4-element array.
        unsafe {
            let x = load_32x4i(p.as_ptr());
            let y = load_32x4i(q.as_ptr());

            let mut out = [0i32; 4];
            store_32x4i(out.as_mut_ptr(), x);
            expect_lanes(M, "load/store", p, p, out)?;

            each_lane!(LANE in [0, 1, 2, 3] => {
                let i = LANE as usize;
                expect_lanes(M, "get_lane", (p, i), p[i], get_lane_32x4i::<LANE>(x))?;
                expect_lanes(
                    M,
                    "set_lane",
                    (p, i),
                    reference::set_lane(p, i, SENTINEL_32),
                    set_lane_32x4i::<LANE>(x, SENTINEL_32).to_array(),
                )?;
                expect_lanes(
                    M,
                    "extract_vector",
                    (p, q, i),
                    reference::extract_window(p, q, i),
                    extract_vector_32x4i::<LANE>(x, y).to_array(),
                )?;
            });

            expect_lanes(M, "is_all_zeros", p, reference::is_all_zeros(&p), is_all_zeros_32x4i(x))?;
            expect_lanes(M, "movemask", p, reference::movemask(&p), movemask_32x4i(x))?;
        }
    }
    log::debug!("{}: {} probes conform", M, PROBES_32X4.len());
    Ok(())
}

/// Check every 2 x i64 operation against the reference model.
pub fn check_int64x2() -> Result<()> {
    const M: &str = "int64x2";
    for (n, &p) in PROBES_64X2.iter().enumerate() {
        let q = PROBES_64X2[(n + 1) % PROBES_64X2.len()];
        // SAFETY: baseline features only; pointers address local arrays.
        unsafe {
            let x = load_64x2i(p.as_ptr());
            let y = load_64x2i(q.as_ptr());

            let mut out = [0i64; 2];
            store_64x2i(out.as_mut_ptr(), x);
            expect_lanes(M, "load/store", p, p, out)?;

            each_lane!(LANE in [0, 1] => {
                let i = LANE as usize;
                expect_lanes(M, "get_lane", (p, i), p[i], get_lane_64x2i::<LANE>(x))?;
                expect_lanes(
                    M,
                    "set_lane",
                    (p, i),
                    reference::set_lane(p, i, SENTINEL_64),
                    set_lane_64x2i::<LANE>(x, SENTINEL_64).to_array(),
                )?;
                expect_lanes(
                    M,
                    "extract_vector",
                    (p, q, i),
                    reference::extract_window(p, q, i),
                    extract_vector_64x2i::<LANE>(x, y).to_array(),
                )?;
            });
        }
    }
    log::debug!("{}: {} probes conform", M, PROBES_64X2.len());
    Ok(())
}

/// Check every 2 x f64 operation against the reference model, comparing raw
/// lane bits so NaN payloads are verified too.
pub fn check_float64x2() -> Result<()> {
    const M: &str = "real64x2";
    for (n, &p) in PROBES_64X2_BITS.iter().enumerate() {
        let q = PROBES_64X2_BITS[(n + 1) % PROBES_64X2_BITS.len()];
        let pf = p.map(f64::from_bits);
        let qf = q.map(f64::from_bits);
        // SAFETY: baseline features only; pointers address local arrays.
        unsafe {
            let x = load_64x2r(pf.as_ptr());
            let y = load_64x2r(qf.as_ptr());

            let mut out = [0.0f64; 2];
            store_64x2r(out.as_mut_ptr(), x);
            expect_lanes(M, "load/store", p, p, out.map(f64::to_bits))?;

            each_lane!(LANE in [0, 1] => {
                let i = LANE as usize;
                expect_lanes(M, "get_lane", (p, i), p[i], get_lane_64x2r::<LANE>(x).to_bits())?;
                expect_lanes(
                    M,
                    "set_lane",
                    (p, i),
                    reference::set_lane(p, i, SENTINEL_F64_BITS),
                    set_lane_64x2r::<LANE>(x, f64::from_bits(SENTINEL_F64_BITS)).to_bits(),
                )?;
                expect_lanes(
                    M,
                    "extract_vector",
                    (p, q, i),
                    reference::extract_window(p, q, i),
                    extract_vector_64x2r::<LANE>(x, y).to_bits(),
                )?;
            });
        }
    }
    log::debug!("{}: {} probes conform", M, PROBES_64X2_BITS.len());
    Ok(())
}

/// Run the three 128-bit checks.
pub fn check_portable_128() -> Result<()> {
    check_int32x4()?;
    check_int64x2()?;
    check_float64x2()?;
    log::info!("128-bit wrappers conform to the lane reference model");
    Ok(())
}

/// Check every 8 x i32 operation against the reference model.
///
/// Safety: the CPU must support AVX2.
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn check_int32x8() -> Result<()> {
    const M: &str = "int32x8";
    type Unary = unsafe fn(Int32x8) -> Int32x8;
    type Binary = unsafe fn(Int32x8, Int32x8) -> Int32x8;

    let unary: [(&str, Unary, &[usize; 8]); 5] = [
        ("swap_pairs", swap_pairs_256epi32, &reference::SWAP_PAIRS),
        ("swap_low_high", swap_low_high_256epi32, &reference::SWAP_LOW_HIGH),
        ("reverse", reverse_256epi32, &reference::REVERSE),
        ("rotate_left", rotate_left_256epi32, &reference::ROTATE_LEFT),
        ("rotate_right", rotate_right_256epi32, &reference::ROTATE_RIGHT),
    ];
    let binary: [(&str, Binary, &[usize; 8]); 5] = [
        ("interleave_lower", interleave_lower_256epi32, &reference::INTERLEAVE_LOWER),
        ("interleave_upper", interleave_upper_256epi32, &reference::INTERLEAVE_UPPER),
        ("deinterleave_lower", deinterleave_lower_256epi32, &reference::DEINTERLEAVE_LOWER),
        ("deinterleave_upper", deinterleave_upper_256epi32, &reference::DEINTERLEAVE_UPPER),
        ("blend_low_high", blend_low_high_256epi32, &reference::BLEND_LOW_HIGH),
    ];

    for (n, &p) in PROBES_32X8.iter().enumerate() {
        let q = PROBES_32X8[(n + 1) % PROBES_32X8.len()];
        let x = load_256epi32(p.as_ptr());
        let y = load_256epi32(q.as_ptr());

        let mut out = [0i32; 8];
        store_256epi32(out.as_mut_ptr(), x);
        expect_lanes(M, "load/store", p, p, out)?;

        each_lane!(LANE in [0, 1, 2, 3, 4, 5, 6, 7] => {
            let i = LANE as usize;
            expect_lanes(M, "get_lane", (p, i), p[i], get_lane_256epi32::<LANE>(x))?;
            expect_lanes(
                M,
                "set_lane",
                (p, i),
                reference::set_lane(p, i, SENTINEL_32),
                set_lane_256epi32::<LANE>(x, SENTINEL_32).to_array(),
            )?;
        });

        for (op, f, table) in unary {
            expect_lanes(M, op, p, reference::permute(p, table), f(x).to_array())?;
        }
        for (op, f, table) in binary {
            expect_lanes(M, op, (p, q), reference::permute2(p, q, table), f(x, y).to_array())?;
        }
        expect_lanes(M, "hadd", (p, q), reference::hadd(p, q), hadd_256epi32(x, y).to_array())?;

        // interleave then deinterleave recovers both inputs
        let lo = interleave_lower_256epi32(x, y);
        let hi = interleave_upper_256epi32(x, y);
        let back_x = deinterleave_lower_256epi32(lo, hi).to_array();
        let back_y = deinterleave_upper_256epi32(lo, hi).to_array();
        expect_lanes(M, "deinterleave_lower(interleave)", (p, q), p, back_x)?;
        expect_lanes(M, "deinterleave_upper(interleave)", (p, q), q, back_y)?;
    }
    log::debug!("{}: {} probes conform", M, PROBES_32X8.len());
    Ok(())
}
