/*
 * // Copyright (c) Radzivon Bartoshyk. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use std::ops::{BitAnd, BitOr};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialOrd, PartialEq)]
pub struct ScanPoint1d<F> {
    pub weight: F,
}

impl<F> ScanPoint1d<F> {
    pub fn new(weight: F) -> ScanPoint1d<F> {
        ScanPoint1d { weight }
    }
}

pub(crate) fn scan_1d(kernel: &[f64]) -> Vec<ScanPoint1d<f64>> {
    kernel.iter().map(|&w| ScanPoint1d::new(w)).collect()
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialOrd, PartialEq)]
/// One non-zero tap of a dense 2-D kernel, coordinates are kernel-relative
pub struct ScanPoint2d {
    pub x: usize,
    pub y: usize,
    pub weight: f64,
}

/// Collects the non-zero taps of a row-major dense kernel.
///
/// Sparse structuring elements and derivative kernels commonly carry many
/// zeroes, skipping them at scan time keeps the inner accumulation loops
/// proportional to the live tap count.
pub(crate) fn scan_2d(kernel: &[f64], kernel_width: usize) -> Vec<ScanPoint2d> {
    kernel
        .iter()
        .enumerate()
        .filter(|(_, &w)| w != 0.)
        .map(|(i, &w)| ScanPoint2d {
            x: i % kernel_width,
            y: i / kernel_width,
            weight: w,
        })
        .collect()
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
/// Structural classification of a 1-D kernel, drives column path selection
pub struct KernelClass(u32);

impl KernelClass {
    pub const GENERAL: KernelClass = KernelClass(0);
    pub const SYMMETRICAL: KernelClass = KernelClass(1);
    pub const ASYMMETRICAL: KernelClass = KernelClass(2);
    pub const SMOOTH: KernelClass = KernelClass(4);
    pub const INTEGER: KernelClass = KernelClass(8);

    #[inline]
    pub fn contains(self, other: KernelClass) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    fn clear(&mut self, other: KernelClass) {
        self.0 &= !other.0;
    }
}

impl BitOr for KernelClass {
    type Output = KernelClass;
    fn bitor(self, rhs: Self) -> Self::Output {
        KernelClass(self.0 | rhs.0)
    }
}

impl BitAnd for KernelClass {
    type Output = KernelClass;
    fn bitand(self, rhs: Self) -> Self::Output {
        KernelClass(self.0 & rhs.0)
    }
}

/// Classifies a 1-D kernel by scanning mirrored coefficient pairs.
///
/// Symmetry flags are only attainable for an odd-length kernel anchored at
/// its center; smoothness additionally requires the coefficient sum to be 1
/// within floating epsilon.
pub fn classify_1d(kernel: &[f64], anchor: usize) -> KernelClass {
    let n = kernel.len();
    let centered = n & 1 == 1 && anchor == n / 2;
    let mut class = KernelClass::SMOOTH | KernelClass::INTEGER;
    if centered {
        class = class | KernelClass::SYMMETRICAL | KernelClass::ASYMMETRICAL;
    }
    let mut sum = 0f64;
    for (i, &a) in kernel.iter().enumerate() {
        let b = kernel[n - 1 - i];
        if a != b {
            class.clear(KernelClass::SYMMETRICAL);
        }
        if a != -b {
            class.clear(KernelClass::ASYMMETRICAL);
        }
        if a < 0. {
            class.clear(KernelClass::SMOOTH);
        }
        if a != a.floor() {
            class.clear(KernelClass::INTEGER);
        }
        sum += a;
    }
    if (sum - 1.).abs() > f32::EPSILON as f64 {
        class.clear(KernelClass::SMOOTH);
    }
    class
}
