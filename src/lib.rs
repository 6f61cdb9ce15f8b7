//! Lane-exact wrappers over fixed-width SIMD registers.
//!
//! Four leaf modules, one per (element type, register width) pair, expose the
//! same naming convention on every architecture. See [`simd_abstraction`].

pub mod simd_abstraction;

pub use simd_abstraction::SimdVector;
pub use simd_abstraction::types::{Float64x2, Int32x4, Int64x2};
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
pub use simd_abstraction::types::Int32x8;

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
compile_error!("simd-wrappers supports x86_64 and aarch64 targets only");
