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
use crate::edge_mode::border_interpolate;
use crate::{EdgeMode, ImageStore, Scalar};
use num_traits::AsPrimitive;
use std::fmt::Debug;

/// Synthesizes one bordered source row.
///
/// `row` must hold `(width + kernel_width - 1) * N` scalars. The source row
/// is copied verbatim at pixel offset `anchor_x`, the `anchor_x` pixels on
/// the left and `kernel_width - 1 - anchor_x` pixels on the right are filled
/// per channel from the resolved in-range index. Constant padding never
/// resolves an index, it writes the scalar literally.
///
/// Layout must have been validated by the caller.
pub(crate) fn write_arena_row<T, const N: usize>(
    row: &mut [T],
    image: &ImageStore<T>,
    source_y: usize,
    kernel_width: usize,
    anchor_x: usize,
    border_mode: EdgeMode,
    scalar: Scalar,
) where
    T: Default + Copy + Send + Sync + 'static + Debug,
    f64: AsPrimitive<T>,
{
    let width = image.width as usize;
    let pad_left = anchor_x;
    let pad_right = kernel_width - 1 - anchor_x;
    debug_assert!(row.len() >= (width + kernel_width - 1) * N);

    let source_offset = source_y * image.row_stride() as usize;
    let source_row = &image.data.as_ref()[source_offset..(source_offset + width * N)];

    let row_dst = &mut row[pad_left * N..(pad_left + width) * N];
    row_dst.copy_from_slice(source_row);

    for (k, dst) in (0..pad_left).zip(row.chunks_exact_mut(N)) {
        if border_mode == EdgeMode::Constant {
            for (i, dst) in dst.iter_mut().enumerate() {
                *dst = scalar[i].as_();
            }
        } else {
            let old_x = border_interpolate(
                border_mode,
                k as i64 - pad_left as i64,
                width as i64,
            );
            dst.copy_from_slice(&source_row[old_x * N..(old_x + 1) * N]);
        }
    }

    let right_start = (pad_left + width) * N;
    for (k, dst) in (0..pad_right).zip(row[right_start..].chunks_exact_mut(N)) {
        if border_mode == EdgeMode::Constant {
            for (i, dst) in dst.iter_mut().enumerate() {
                *dst = scalar[i].as_();
            }
        } else {
            let old_x = border_interpolate(border_mode, (width + k) as i64, width as i64);
            dst.copy_from_slice(&source_row[old_x * N..(old_x + 1) * N]);
        }
    }
}

/// Fills a whole bordered row with the constant scalar, used for source rows
/// that fall entirely outside the image under [EdgeMode::Constant].
pub(crate) fn write_constant_row<T, const N: usize>(row: &mut [T], scalar: Scalar)
where
    T: Default + Copy + 'static,
    f64: AsPrimitive<T>,
{
    if scalar.is_zero() {
        row.fill(T::default());
        return;
    }
    for dst in row.chunks_exact_mut(N) {
        for (i, dst) in dst.iter_mut().enumerate() {
            *dst = scalar[i].as_();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImageChannels;

    fn make_row(
        source: &[u8],
        kernel_width: usize,
        anchor_x: usize,
        border_mode: EdgeMode,
        scalar: Scalar,
    ) -> Vec<u8> {
        let image = ImageStore::borrow(source, source.len() as u32, 1, ImageChannels::Plane);
        let mut row = vec![0u8; source.len() + kernel_width - 1];
        write_arena_row::<u8, 1>(&mut row, &image, 0, kernel_width, anchor_x, border_mode, scalar);
        row
    }

    #[test]
    fn replicate_pads_with_edges() {
        let row = make_row(&[1, 2, 3, 4], 5, 2, EdgeMode::Replicate, Scalar::default());
        assert_eq!(row, vec![1, 1, 1, 2, 3, 4, 4, 4]);
    }

    #[test]
    fn reflect101_skips_edge_sample() {
        let row = make_row(&[1, 2, 3, 4], 3, 1, EdgeMode::Reflect101, Scalar::default());
        assert_eq!(row, vec![2, 1, 2, 3, 4, 3]);
    }

    #[test]
    fn constant_pads_with_literal_scalar() {
        let row = make_row(&[1, 2, 3, 4], 3, 1, EdgeMode::Constant, Scalar::dup(9.));
        assert_eq!(row, vec![9, 1, 2, 3, 4, 9]);
    }

    #[test]
    fn unit_kernel_is_a_plain_copy() {
        let row = make_row(&[5, 6, 7], 1, 0, EdgeMode::Replicate, Scalar::default());
        assert_eq!(row, vec![5, 6, 7]);
    }

    #[test]
    fn asymmetric_anchor_shifts_the_padding() {
        let row = make_row(&[1, 2, 3, 4], 3, 0, EdgeMode::Replicate, Scalar::default());
        assert_eq!(row, vec![1, 2, 3, 4, 4, 4]);
    }

    #[test]
    fn multichannel_padding_is_per_pixel() {
        let source = [1u8, 10, 100, 2, 20, 200];
        let image = ImageStore::borrow(&source, 2, 1, ImageChannels::Channels3);
        let mut row = vec![0u8; (2 + 2) * 3];
        write_arena_row::<u8, 3>(
            &mut row,
            &image,
            0,
            3,
            1,
            EdgeMode::Replicate,
            Scalar::default(),
        );
        assert_eq!(row, vec![1, 10, 100, 1, 10, 100, 2, 20, 200, 2, 20, 200]);
    }

    #[test]
    fn constant_row_fill_honors_scalar() {
        let mut row = vec![0u8; 6];
        write_constant_row::<u8, 3>(&mut row, Scalar::new(1., 2., 3., 0.));
        assert_eq!(row, vec![1, 2, 3, 1, 2, 3]);
    }
}
