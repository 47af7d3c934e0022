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

const MAX_SOBEL_KSIZE: usize = 31;

/// Builds one smoothing-or-derivative row of a Sobel kernel pair.
///
/// The smoothing row of size `n` is the binomial row of Pascal's triangle;
/// each derivative order turns one smoothing step into a finite difference.
fn deriv_row(size: usize, order: usize) -> Vec<f64> {
    debug_assert!(size > order);
    if size == 1 {
        return vec![1.];
    }
    if size == 3 {
        return match order {
            0 => vec![1., 2., 1.],
            1 => vec![-1., 0., 1.],
            _ => vec![1., -2., 1.],
        };
    }
    let mut ker = vec![0f64; size + 1];
    ker[0] = 1.;
    for _ in 0..size - order - 1 {
        let mut oldval = ker[0];
        for j in 1..=size {
            let newval = ker[j] + ker[j - 1];
            ker[j - 1] = oldval;
            oldval = newval;
        }
    }
    for _ in 0..order {
        let mut oldval = -ker[0];
        for j in 1..=size {
            let newval = ker[j - 1] - ker[j];
            ker[j - 1] = oldval;
            oldval = newval;
        }
    }
    ker.truncate(size);
    ker
}

/// Returns the `(horizontal, vertical)` derivative kernel pair for the
/// requested derivative orders.
///
/// `kernel_size` must be odd and not larger than 31. A `kernel_size` of 1
/// still produces 3-tap kernels on differentiated axes since a single tap
/// cannot express a difference.
pub fn get_deriv_kernels(
    dx: usize,
    dy: usize,
    kernel_size: usize,
) -> Result<(Vec<f64>, Vec<f64>), FilterError> {
    if kernel_size & 1 == 0 || kernel_size > MAX_SOBEL_KSIZE {
        return Err(FilterError::OddKernel(kernel_size));
    }
    if dx + dy == 0 {
        return Err(FilterError::InvalidArguments);
    }
    let mut ksize_x = kernel_size;
    let mut ksize_y = kernel_size;
    if ksize_x == 1 && dx > 0 {
        ksize_x = 3;
    }
    if ksize_y == 1 && dy > 0 {
        ksize_y = 3;
    }
    if ksize_x <= dx || ksize_y <= dy {
        return Err(FilterError::InvalidArguments);
    }
    Ok((deriv_row(ksize_x, dx), deriv_row(ksize_y, dy)))
}

/// Returns the `(horizontal, vertical)` Scharr kernel pair, first
/// derivatives only: smoothing `[3, 10, 3]`, difference `[-1, 0, 1]`.
pub fn get_scharr_kernels(dx: usize, dy: usize) -> Result<(Vec<f64>, Vec<f64>), FilterError> {
    if dx + dy == 0 || dx > 1 || dy > 1 {
        return Err(FilterError::InvalidArguments);
    }
    let row = |order: usize| -> Vec<f64> {
        if order == 0 {
            vec![3., 10., 3.]
        } else {
            vec![-1., 0., 1.]
        }
    };
    Ok((row(dx), row(dy)))
}

#[allow(clippy::too_many_arguments)]
fn edge_filter<S, D, const N: usize>(
    image: &ImageStore<S>,
    destination: &mut ImageStoreMut<D>,
    mut kernels: (Vec<f64>, Vec<f64>),
    dx: usize,
    scale: f64,
    delta: f64,
    border_mode: EdgeMode,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    S: Copy + Default + Debug + Send + Sync + 'static + AsPrimitive<f64>,
    D: Copy + Default + Debug + Send + Sync + 'static,
    f64: AsPrimitive<S> + ToStorage<D>,
{
    if scale != 1. {
        // the smoothing half dominates the cost, scale that one
        let smoothing = if dx == 0 { &mut kernels.0 } else { &mut kernels.1 };
        for w in smoothing.iter_mut() {
            *w *= scale;
        }
    }
    sep_filter_2d::<S, D, N>(
        image,
        destination,
        Some(&kernels.0),
        &kernels.1,
        None,
        delta,
        border_mode,
        Scalar::default(),
        threading_policy,
    )
}

/// Computes the Sobel derivative of order `(dx, dy)`.
///
/// Results are unnormalized, pick a destination depth wide enough for the
/// kernel gain or pass a compensating `scale`.
#[allow(clippy::too_many_arguments)]
pub fn sobel<S, D, const N: usize>(
    image: &ImageStore<S>,
    destination: &mut ImageStoreMut<D>,
    dx: usize,
    dy: usize,
    kernel_size: usize,
    scale: f64,
    delta: f64,
    border_mode: EdgeMode,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    S: Copy + Default + Debug + Send + Sync + 'static + AsPrimitive<f64>,
    D: Copy + Default + Debug + Send + Sync + 'static,
    f64: AsPrimitive<S> + ToStorage<D>,
{
    let kernels = get_deriv_kernels(dx, dy, kernel_size)?;
    edge_filter::<S, D, N>(
        image,
        destination,
        kernels,
        dx,
        scale,
        delta,
        border_mode,
        threading_policy,
    )
}

/// Computes the Scharr first derivative of order `(dx, dy)`.
#[allow(clippy::too_many_arguments)]
pub fn scharr<S, D, const N: usize>(
    image: &ImageStore<S>,
    destination: &mut ImageStoreMut<D>,
    dx: usize,
    dy: usize,
    scale: f64,
    delta: f64,
    border_mode: EdgeMode,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    S: Copy + Default + Debug + Send + Sync + 'static + AsPrimitive<f64>,
    D: Copy + Default + Debug + Send + Sync + 'static,
    f64: AsPrimitive<S> + ToStorage<D>,
{
    let kernels = get_scharr_kernels(dx, dy)?;
    edge_filter::<S, D, N>(
        image,
        destination,
        kernels,
        dx,
        scale,
        delta,
        border_mode,
        threading_policy,
    )
}
