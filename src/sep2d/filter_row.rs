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
use crate::mlaf::mlaf;
use crate::sep2d::filter_scan::ScanPoint1d;
use num_traits::AsPrimitive;

/// Convolves one bordered row against the horizontal kernel.
///
/// `dst` receives `width * cn` wide values, tap `k` of output scalar `i`
/// reads `src[i + k * cn]` so every channel convolves against its own lane.
pub(crate) fn filter_row_linear<S>(
    src: &[S],
    dst: &mut [f64],
    cn: usize,
    kernel: &[ScanPoint1d<f64>],
) where
    S: Copy + AsPrimitive<f64>,
{
    for (i, dst) in dst.iter_mut().enumerate() {
        let mut sum = 0f64;
        for (k, point) in kernel.iter().enumerate() {
            sum = mlaf(sum, src[i + k * cn].as_(), point.weight);
        }
        *dst = sum;
    }
}

/// Running-sum variant for a uniform horizontal kernel.
///
/// Produces unscaled window sums in O(width), normalization is folded into
/// the column kernel.
pub(crate) fn filter_row_running_sum<S, const N: usize>(
    src: &[S],
    dst: &mut [f64],
    kernel_width: usize,
) where
    S: Copy + AsPrimitive<f64>,
{
    let mut sums = [0f64; N];
    for px in src.chunks_exact(N).take(kernel_width) {
        for (sum, &v) in sums.iter_mut().zip(px.iter()) {
            *sum += v.as_();
        }
    }
    let width = dst.len() / N;
    for x in 0..width {
        for (c, &sum) in sums.iter().enumerate() {
            dst[x * N + c] = sum;
        }
        if x + 1 < width {
            for c in 0..N {
                sums[c] += src[(x + kernel_width) * N + c].as_() - src[x * N + c].as_();
            }
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MorphOp {
    Erode,
    Dilate,
}

/// Min/max sweep over the horizontal structuring-element taps.
///
/// Only taps flagged in `se_row` participate, a fully unset row never occurs
/// for valid structuring elements.
pub(crate) fn filter_row_morph<S>(src: &[S], dst: &mut [f64], cn: usize, se_row: &[bool], op: MorphOp)
where
    S: Copy + AsPrimitive<f64>,
{
    for (i, dst) in dst.iter_mut().enumerate() {
        let mut value = match op {
            MorphOp::Erode => f64::INFINITY,
            MorphOp::Dilate => f64::NEG_INFINITY,
        };
        for (k, &active) in se_row.iter().enumerate() {
            if !active {
                continue;
            }
            let v = src[i + k * cn].as_();
            value = match op {
                MorphOp::Erode => value.min(v),
                MorphOp::Dilate => value.max(v),
            };
        }
        *dst = value;
    }
}

/// Widens a bordered row verbatim, the dense 2-D path keeps its horizontal
/// padding inside the intermediate rows.
pub(crate) fn filter_row_copy<S>(src: &[S], dst: &mut [f64])
where
    S: Copy + AsPrimitive<f64>,
{
    for (dst, src) in dst.iter_mut().zip(src.iter()) {
        *dst = src.as_();
    }
}
