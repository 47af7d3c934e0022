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
use crate::sep2d::sep_filter_2d;
use crate::to_storage::ToStorage;
use crate::{EdgeMode, FilterError, ImageStore, ImageStoreMut, Scalar, ThreadingPolicy};
use num_traits::AsPrimitive;
use std::fmt::Debug;

/// Default sigma for a kernel size, the usual aperture-to-sigma fit.
pub fn sigma_size(kernel_size: usize) -> f64 {
    0.3 * ((kernel_size as f64 - 1.) * 0.5 - 1.) + 0.8
}

/// Normalized 1-D gaussian sampled at integer offsets from the center tap.
pub fn gaussian_kernel_1d(kernel_size: usize, sigma: f64) -> Vec<f64> {
    let mut sum_norm = 0f64;
    let mut kernel = vec![0f64; kernel_size];
    let scale = 1. / (f64::sqrt(2. * std::f64::consts::PI) * sigma);
    let mean = (kernel_size / 2) as f64;

    for (x, item) in kernel.iter_mut().enumerate() {
        let dx = (x as f64 - mean) / sigma;
        let new_weight = f64::exp(-0.5 * dx * dx) * scale;
        *item = new_weight;
        sum_norm += new_weight;
    }

    if sum_norm != 0f64 {
        let sum_scale = 1. / sum_norm;
        for item in kernel.iter_mut() {
            *item *= sum_scale;
        }
    }

    kernel
}

/// Gaussian blur through the separable engine.
///
/// `sigma <= 0` derives sigma from the kernel size; the same kernel is
/// applied on both axes.
pub fn gaussian_blur<T, const N: usize>(
    image: &ImageStore<T>,
    destination: &mut ImageStoreMut<T>,
    kernel_size: usize,
    sigma: f64,
    border_mode: EdgeMode,
    border_constant: Scalar,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    T: Copy + Default + Debug + Send + Sync + 'static + AsPrimitive<f64>,
    f64: AsPrimitive<T> + ToStorage<T>,
{
    if kernel_size & 1 == 0 {
        return Err(FilterError::OddKernel(kernel_size));
    }
    let sigma = if sigma > 0. {
        sigma
    } else {
        sigma_size(kernel_size)
    };
    let kernel = gaussian_kernel_1d(kernel_size, sigma);
    sep_filter_2d::<T, T, N>(
        image,
        destination,
        Some(&kernel),
        &kernel,
        None,
        0.,
        border_mode,
        border_constant,
        threading_policy,
    )
}
