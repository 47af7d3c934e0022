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
use crate::to_storage::ToStorage;

/// General column path for kernels without the symmetric flag.
///
/// Written for anti-symmetric kernels, whose center weight is zero and whose
/// mirrored weights differ only in sign, so each pair reduces to one weight
/// times a row difference:
/// `v = Σ ky[half + k] * (rows[half - k][i] - rows[half + k][i])`.
pub(crate) fn filter_column_general<D>(
    rows: &[&[f64]],
    dst: &mut [D],
    kernel: &[ScanPoint1d<f64>],
    delta: f64,
) where
    D: Copy + 'static,
    f64: ToStorage<D>,
{
    let half = kernel.len() / 2;
    for (i, dst) in dst.iter_mut().enumerate() {
        let mut sum = 0f64;
        for k in 1..=half {
            let weight = kernel[half + k].weight;
            sum = mlaf(sum, weight, rows[half - k][i] - rows[half + k][i]);
        }
        *dst = (sum + delta).to_();
    }
}
