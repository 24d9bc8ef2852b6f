// Copyright 2025 the Tabula Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! `f64::sqrt` and `f64::floor` are not available in `core`. We provide a small trait that
//! dispatches to either `std` or `libm` depending on features.

/// Float math helpers for `f64` in `no_std` mode.
pub(crate) trait FloatExt {
    fn sqrt(self) -> Self;
    fn floor(self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    fn floor(self) -> Self {
        libm::floor(self)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("tabula_transforms requires either the `std` or `libm` feature");
