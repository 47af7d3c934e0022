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
use crate::sep2d::{
    run_engine, EngineShape, KernelShape, LinearColumnStage, RunningSumRowStage,
};
use crate::to_storage::ToStorage;
use crate::{EdgeMode, FilterError, ImageStore, ImageStoreMut, Scalar, ThreadingPolicy};
use num_traits::AsPrimitive;
use std::fmt::Debug;

/// Box filter with a running-sum horizontal pass.
///
/// The horizontal pass maintains a sliding window sum, so its cost does not
/// grow with the kernel width; normalization `1 / (kw * kh)` is folded into
/// the vertical kernel when `normalize` is set.
#[allow(clippy::too_many_arguments)]
pub fn box_filter<S, D, const N: usize>(
    image: &ImageStore<S>,
    destination: &mut ImageStoreMut<D>,
    kernel_size: KernelShape,
    normalize: bool,
    border_mode: EdgeMode,
    border_constant: Scalar,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    S: Copy + Default + Debug + Send + Sync + 'static + AsPrimitive<f64>,
    D: Copy + Default + Debug + Send + Sync + 'static,
    f64: AsPrimitive<S> + ToStorage<D>,
{
    let mut kernel_size = kernel_size;
    if kernel_size.width == 0 || kernel_size.height == 0 {
        return Err(FilterError::ZeroBaseSize);
    }
    if kernel_size.width & 1 == 0 {
        return Err(FilterError::OddKernel(kernel_size.width));
    }
    if kernel_size.height & 1 == 0 {
        return Err(FilterError::OddKernel(kernel_size.height));
    }
    if border_mode != EdgeMode::Constant && normalize {
        if image.height == 1 {
            kernel_size.height = 1;
        }
        if image.width == 1 {
            kernel_size.width = 1;
        }
    }

    let scale = if normalize {
        1. / (kernel_size.width * kernel_size.height) as f64
    } else {
        1.
    };
    let column_kernel = vec![scale; kernel_size.height];

    let row_stage = RunningSumRowStage::new(kernel_size.width);
    let column_stage = LinearColumnStage::new(&column_kernel, kernel_size.height / 2, 0.);
    let shape = EngineShape {
        kernel_width: kernel_size.width,
        anchor_x: kernel_size.width / 2,
        kernel_height: kernel_size.height,
        anchor_y: kernel_size.height / 2,
        row_len: image.width as usize * N,
    };
    run_engine::<S, D, N>(
        image,
        destination,
        &row_stage,
        &column_stage,
        shape,
        border_mode,
        border_constant,
        threading_policy,
    )
}

/// Normalized box blur with replicated edges, the classic smoothing call.
pub fn blur<T, const N: usize>(
    image: &ImageStore<T>,
    destination: &mut ImageStoreMut<T>,
    kernel_size: KernelShape,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    T: Copy + Default + Debug + Send + Sync + 'static + AsPrimitive<f64>,
    f64: AsPrimitive<T> + ToStorage<T>,
{
    box_filter::<T, T, N>(
        image,
        destination,
        kernel_size,
        true,
        EdgeMode::Replicate,
        Scalar::default(),
        threading_policy,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImageChannels;

    /// Plain neighborhood mean with replicate clamping.
    fn reference_mean(src: &[u8], width: usize, height: usize, k: usize) -> Vec<f64> {
        let half = (k / 2) as i64;
        let mut out = vec![0f64; width * height];
        for y in 0..height {
            for x in 0..width {
                let mut sum = 0f64;
                for j in -half..=half {
                    for i in -half..=half {
                        let sy = (y as i64 + j).clamp(0, height as i64 - 1) as usize;
                        let sx = (x as i64 + i).clamp(0, width as i64 - 1) as usize;
                        sum += src[sy * width + sx] as f64;
                    }
                }
                out[y * width + x] = sum / (k * k) as f64;
            }
        }
        out
    }

    #[test]
    fn normalized_box_matches_direct_mean() {
        let src = [
            12u8, 200, 3, 45, 90, 7, 66, 131, 24, 88, 19, 240, 55, 101, 73, 9, 150, 32, 61, 14,
            222, 40, 5, 178, 99,
        ];
        let image = ImageStore::borrow(&src, 5, 5, ImageChannels::Plane);
        let mut dst = ImageStoreMut::<f64>::alloc(5, 5, ImageChannels::Plane);
        box_filter::<u8, f64, 1>(
            &image,
            &mut dst,
            KernelShape::new(3, 3),
            true,
            EdgeMode::Replicate,
            Scalar::default(),
            ThreadingPolicy::Single,
        )
        .unwrap();
        let expected = reference_mean(&src, 5, 5, 3);
        for (got, want) in dst.data.borrow().iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-9, "{got} vs {want}");
        }
    }

    #[test]
    fn unnormalized_box_sums_the_window() {
        let src = [2u8; 9];
        let image = ImageStore::borrow(&src, 3, 3, ImageChannels::Plane);
        let mut dst = ImageStoreMut::<i32>::alloc(3, 3, ImageChannels::Plane);
        box_filter::<u8, i32, 1>(
            &image,
            &mut dst,
            KernelShape::new(3, 3),
            false,
            EdgeMode::Replicate,
            Scalar::default(),
            ThreadingPolicy::Single,
        )
        .unwrap();
        assert!(dst.data.borrow().iter().all(|&v| v == 18));
    }

    #[test]
    fn flat_image_stays_flat_under_blur() {
        let src = [140u8; 7 * 5 * 3];
        let image = ImageStore::borrow(&src, 7, 5, ImageChannels::Channels3);
        let mut dst = ImageStoreMut::<u8>::alloc(7, 5, ImageChannels::Channels3);
        blur::<u8, 3>(&image, &mut dst, KernelShape::new(3, 3), ThreadingPolicy::Single).unwrap();
        assert!(dst.data.borrow().iter().all(|&v| v == 140));
    }

    #[test]
    fn rejects_even_window() {
        let src = [0u8; 16];
        let image = ImageStore::borrow(&src, 4, 4, ImageChannels::Plane);
        let mut dst = ImageStoreMut::<u8>::alloc(4, 4, ImageChannels::Plane);
        assert!(box_filter::<u8, u8, 1>(
            &image,
            &mut dst,
            KernelShape::new(4, 3),
            true,
            EdgeMode::Replicate,
            Scalar::default(),
            ThreadingPolicy::Single,
        )
        .is_err());
    }
}
