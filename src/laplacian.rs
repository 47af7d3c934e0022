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
use crate::sep2d::{filter_2d, KernelShape};
use crate::to_storage::ToStorage;
use crate::{EdgeMode, FilterError, ImageStore, ImageStoreMut, Scalar, ThreadingPolicy};
use num_traits::AsPrimitive;
use std::fmt::Debug;

/// Discrete Laplacian through the dense 2-D path.
///
/// Aperture 1 applies the 4-neighbour stencil, aperture 3 the diagonal
/// variant. `scale` multiplies the kernel, `delta` is the usual additive
/// bias before the saturating cast.
#[allow(clippy::too_many_arguments)]
pub fn laplacian<S, D, const N: usize>(
    image: &ImageStore<S>,
    destination: &mut ImageStoreMut<D>,
    aperture: usize,
    scale: f64,
    delta: f64,
    border_mode: EdgeMode,
    border_constant: Scalar,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    S: Copy + Default + Debug + Send + Sync + 'static + AsPrimitive<f64>,
    D: Copy + Default + Debug + Send + Sync + 'static,
    f64: AsPrimitive<S> + ToStorage<D>,
{
    #[rustfmt::skip]
    let mut kernel: Vec<f64> = match aperture {
        1 => vec![
            0., 1., 0.,
            1., -4., 1.,
            0., 1., 0.,
        ],
        3 => vec![
            2., 0., 2.,
            0., -8., 0.,
            2., 0., 2.,
        ],
        _ => return Err(FilterError::InvalidArguments),
    };
    if scale != 1. {
        for w in kernel.iter_mut() {
            *w *= scale;
        }
    }
    filter_2d::<S, D, N>(
        image,
        destination,
        &kernel,
        KernelShape::new(3, 3),
        None,
        delta,
        border_mode,
        border_constant,
        threading_policy,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImageChannels;

    #[test]
    fn flat_regions_respond_zero() {
        let src = [50u8; 25];
        let image = ImageStore::borrow(&src, 5, 5, ImageChannels::Plane);
        let mut dst = ImageStoreMut::<f64>::alloc(5, 5, ImageChannels::Plane);
        laplacian::<u8, f64, 1>(
            &image,
            &mut dst,
            1,
            1.,
            0.,
            EdgeMode::Replicate,
            Scalar::default(),
            ThreadingPolicy::Single,
        )
        .unwrap();
        assert!(dst.data.borrow().iter().all(|&v| v == 0.));
    }

    #[test]
    fn impulse_produces_four_neighbour_stencil() {
        let mut src = [0u8; 25];
        src[12] = 12;
        let image = ImageStore::borrow(&src, 5, 5, ImageChannels::Plane);
        let mut dst = ImageStoreMut::<f64>::alloc(5, 5, ImageChannels::Plane);
        laplacian::<u8, f64, 1>(
            &image,
            &mut dst,
            1,
            1.,
            0.,
            EdgeMode::Replicate,
            Scalar::default(),
            ThreadingPolicy::Single,
        )
        .unwrap();
        let out = dst.data.borrow();
        assert_eq!(out[12], -48.);
        assert_eq!(out[7], 12.);
        assert_eq!(out[11], 12.);
        assert_eq!(out[13], 12.);
        assert_eq!(out[17], 12.);
        assert_eq!(out[6], 0.);
        assert_eq!(out[0], 0.);
    }

    #[test]
    fn scale_and_delta_apply() {
        let mut src = [0u8; 25];
        src[12] = 10;
        let image = ImageStore::borrow(&src, 5, 5, ImageChannels::Plane);
        let mut dst = ImageStoreMut::<f64>::alloc(5, 5, ImageChannels::Plane);
        laplacian::<u8, f64, 1>(
            &image,
            &mut dst,
            1,
            0.5,
            100.,
            EdgeMode::Replicate,
            Scalar::default(),
            ThreadingPolicy::Single,
        )
        .unwrap();
        let out = dst.data.borrow();
        assert_eq!(out[12], -20. + 100.);
        assert_eq!(out[11], 5. + 100.);
        assert_eq!(out[0], 100.);
    }

    #[test]
    fn rejects_unknown_aperture() {
        let src = [0u8; 25];
        let image = ImageStore::borrow(&src, 5, 5, ImageChannels::Plane);
        let mut dst = ImageStoreMut::<u8>::alloc(5, 5, ImageChannels::Plane);
        assert!(laplacian::<u8, u8, 1>(
            &image,
            &mut dst,
            2,
            1.,
            0.,
            EdgeMode::Replicate,
            Scalar::default(),
            ThreadingPolicy::Single,
        )
        .is_err());
    }
}
