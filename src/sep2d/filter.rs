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
use crate::safe_math::{SafeAdd, SafeMul};
use crate::sep2d::arena::{write_arena_row, write_constant_row};
use crate::sep2d::filter_element::{Anchor, KernelShape};
use crate::sep2d::filter_scan::scan_2d;
use crate::sep2d::stage::{
    ColumnStage, CopyRowStage, Dense2dColumnStage, LinearColumnStage, LinearRowStage, RowStage,
};
use crate::to_storage::ToStorage;
use crate::{EdgeMode, FilterError, ImageStore, ImageStoreMut, MismatchedSize, Scalar, ThreadingPolicy};
use novtb::{ParallelZonedIterator, TbSliceMut};
use num_traits::AsPrimitive;
use std::fmt::Debug;

pub(crate) const ROWS_PER_BATCH: usize = 4;

#[derive(Copy, Clone, Debug)]
pub(crate) struct EngineShape {
    pub kernel_width: usize,
    pub anchor_x: usize,
    pub kernel_height: usize,
    pub anchor_y: usize,
    /// Wide scalars per intermediate row, `width * cn` for separable stages,
    /// `(width + kernel_width - 1) * cn` when padding survives the row pass
    pub row_len: usize,
}

/// Performs a separable 2-D convolution, horizontal pass then vertical pass.
///
/// The horizontal kernel may be omitted for a vertical-only pass. Kernels
/// are applied in wide `f64` precision and the result is cast with
/// destination saturation. `delta` is added before the cast.
///
/// The vertical kernel must be odd-sized and center-anchored; the column
/// pass dispatches between the symmetric and the anti-symmetric
/// accumulation, one of which applies to every kernel this crate generates.
///
/// # Arguments
///
/// * `image`: Source image
/// * `destination`: Destination image, same geometry, any supported depth
/// * `row_kernel`: Horizontal kernel, *size must be odd*, `None` skips the pass
/// * `column_kernel`: Vertical kernel, *size must be odd*
/// * `anchor`: Kernel origin, `None` uses the geometric center
/// * `delta`: Additive bias applied at the column stage
/// * `border_mode`: See [EdgeMode] for more info
/// * `border_constant`: Padding value for [EdgeMode::Constant]
/// * `threading_policy`: See [ThreadingPolicy] for more info
pub fn sep_filter_2d<S, D, const N: usize>(
    image: &ImageStore<S>,
    destination: &mut ImageStoreMut<D>,
    row_kernel: Option<&[f64]>,
    column_kernel: &[f64],
    anchor: Option<Anchor>,
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
    static UNIT_KERNEL: [f64; 1] = [1.];
    let row_kernel = row_kernel.unwrap_or(&UNIT_KERNEL);
    if row_kernel.len() & 1 == 0 {
        return Err(FilterError::OddKernel(row_kernel.len()));
    }
    if column_kernel.len() & 1 == 0 {
        return Err(FilterError::OddKernel(column_kernel.len()));
    }
    let kernel_shape = KernelShape::new(row_kernel.len(), column_kernel.len());
    let anchor = Anchor::resolve(anchor, kernel_shape)?;
    // both column accumulations fold mirrored taps around the center
    if anchor.y != column_kernel.len() / 2 {
        return Err(FilterError::InvalidArguments);
    }

    let row_stage = LinearRowStage::new(row_kernel);
    let column_stage = LinearColumnStage::new(column_kernel, anchor.y, delta);
    let shape = EngineShape {
        kernel_width: kernel_shape.width,
        anchor_x: anchor.x,
        kernel_height: kernel_shape.height,
        anchor_y: anchor.y,
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

/// Applies an arbitrary dense 2-D kernel.
///
/// Zero taps are skipped; the whole kernel window is accumulated in `f64`
/// with a single saturating cast at the end, so this path accepts any
/// anchor and any kernel shape.
pub fn filter_2d<S, D, const N: usize>(
    image: &ImageStore<S>,
    destination: &mut ImageStoreMut<D>,
    kernel: &[f64],
    kernel_shape: KernelShape,
    anchor: Option<Anchor>,
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
    if kernel_shape.width == 0 || kernel_shape.height == 0 {
        return Err(FilterError::ZeroBaseSize);
    }
    if kernel.len() != kernel_shape.width.safe_mul(kernel_shape.height)? {
        return Err(FilterError::KernelSizeMismatch(MismatchedSize {
            expected: kernel_shape.width * kernel_shape.height,
            received: kernel.len(),
        }));
    }
    let anchor = Anchor::resolve(anchor, kernel_shape)?;

    let row_stage = CopyRowStage {};
    let column_stage = Dense2dColumnStage::new(scan_2d(kernel, kernel_shape.width), N, delta);
    let shape = EngineShape {
        kernel_width: kernel_shape.width,
        anchor_x: anchor.x,
        kernel_height: kernel_shape.height,
        anchor_y: anchor.y,
        row_len: (image.width as usize + kernel_shape.width - 1) * N,
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

/// Validates geometry, splits the destination into row tiles and runs one
/// sliding-window pass per tile.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_engine<S, D, const N: usize>(
    image: &ImageStore<S>,
    destination: &mut ImageStoreMut<D>,
    row_stage: &dyn RowStage<S>,
    column_stage: &dyn ColumnStage<D>,
    shape: EngineShape,
    border_mode: EdgeMode,
    border_constant: Scalar,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    S: Copy + Default + Debug + Send + Sync + 'static + AsPrimitive<f64>,
    D: Copy + Default + Debug + Send + Sync + 'static,
    f64: AsPrimitive<S>,
{
    image.check_layout_channels(N)?;
    destination.check_layout_channels(N)?;
    image.sizes_match_mut(destination)?;

    let width = image.width as usize;
    let height = image.height as usize;

    // single-step index resolution tolerates overshoots below one extent only
    if shape.kernel_width > width || shape.kernel_height > height {
        return Err(FilterError::InvalidArguments);
    }

    _ = width.safe_add(shape.kernel_width - 1)?.safe_mul(N)?;
    _ = shape.row_len.safe_mul(
        (ROWS_PER_BATCH + 2 * (shape.kernel_height - 1)).saturating_sub(shape.anchor_y),
    )?;
    _ = (destination.row_stride() as usize).safe_mul(height)?;

    let dst_stride = destination.row_stride() as usize;
    let logical_len = dst_stride * (height - 1) + width * N;
    let dst_slice = &mut destination.data.borrow_mut()[..logical_len];

    let thread_count = threading_policy.thread_count(width as u32, height as u32);
    if thread_count <= 1 {
        filter_tile::<S, D, N>(
            image,
            dst_slice,
            dst_stride,
            0,
            height,
            row_stage,
            column_stage,
            shape,
            border_mode,
            border_constant,
        );
        return Ok(());
    }

    let pool = novtb::ThreadPool::new(thread_count);
    let tile_rows = height.div_ceil(thread_count);
    let chunk = dst_stride.safe_mul(tile_rows)?;

    let full_tiles = dst_slice.len() / chunk;
    dst_slice
        .tb_par_chunks_exact_mut(chunk)
        .for_each_enumerated(&pool, |tile_index, tile| {
            filter_tile::<S, D, N>(
                image,
                tile,
                dst_stride,
                tile_index * tile_rows,
                tile_rows,
                row_stage,
                column_stage,
                shape,
                border_mode,
                border_constant,
            );
        });

    let produced = full_tiles * tile_rows;
    if produced < height {
        let remainder = dst_slice.chunks_exact_mut(chunk).into_remainder();
        filter_tile::<S, D, N>(
            image,
            remainder,
            dst_stride,
            produced,
            height - produced,
            row_stage,
            column_stage,
            shape,
            border_mode,
            border_constant,
        );
    }
    Ok(())
}

/// Produces one bordered source row into a ring slot.
///
/// Slot `s` of a window based at output row `base` always holds source row
/// `base + s - anchor_y`; rows outside the image are synthesized from the
/// resolved in-range row, or from the literal scalar under constant padding.
#[allow(clippy::too_many_arguments)]
fn fill_slot<S, const N: usize>(
    ring_row: &mut [f64],
    bordered: &mut [S],
    image: &ImageStore<S>,
    source_y: i64,
    shape: EngineShape,
    row_stage: &dyn RowStage<S>,
    border_mode: EdgeMode,
    border_constant: Scalar,
) where
    S: Copy + Default + Debug + Send + Sync + 'static + AsPrimitive<f64>,
    f64: AsPrimitive<S>,
{
    let height = image.height as i64;
    if source_y >= 0 && source_y < height {
        write_arena_row::<S, N>(
            bordered,
            image,
            source_y as usize,
            shape.kernel_width,
            shape.anchor_x,
            border_mode,
            border_constant,
        );
    } else if border_mode == EdgeMode::Constant {
        write_constant_row::<S, N>(bordered, border_constant);
        row_stage.apply(bordered, ring_row, N);
        return;
    } else {
        let resolved = border_interpolate(border_mode, source_y, height);
        write_arena_row::<S, N>(
            bordered,
            image,
            resolved,
            shape.kernel_width,
            shape.anchor_x,
            border_mode,
            border_constant,
        );
    }
    row_stage.apply(bordered, ring_row, N);
}

/// Single pass over one tile of output rows.
///
/// Owns a ring of pre-allocated intermediate rows; the window slides down
/// the image in batches of [ROWS_PER_BATCH] and slots are recycled by
/// rotation, never reallocated, bounding scratch memory by the kernel
/// height regardless of image height.
#[allow(clippy::too_many_arguments)]
fn filter_tile<S, D, const N: usize>(
    image: &ImageStore<S>,
    tile: &mut [D],
    dst_stride: usize,
    tile_y: usize,
    tile_rows: usize,
    row_stage: &dyn RowStage<S>,
    column_stage: &dyn ColumnStage<D>,
    shape: EngineShape,
    border_mode: EdgeMode,
    border_constant: Scalar,
) where
    S: Copy + Default + Debug + Send + Sync + 'static + AsPrimitive<f64>,
    D: Copy + Default + Debug + Send + Sync + 'static,
    f64: AsPrimitive<S>,
{
    let width = image.width as usize;
    let taps = shape.kernel_height;
    let anchor_y = shape.anchor_y as i64;

    let mut bordered = vec![S::default(); (width + shape.kernel_width - 1) * N];
    let buf_rows = (ROWS_PER_BATCH + 2 * (taps - 1)).saturating_sub(shape.anchor_y);
    let mut ring: Vec<Vec<f64>> = (0..buf_rows).map(|_| vec![0f64; shape.row_len]).collect();

    for s in 0..taps - 1 {
        fill_slot::<S, N>(
            &mut ring[s],
            &mut bordered,
            image,
            tile_y as i64 + s as i64 - anchor_y,
            shape,
            row_stage,
            border_mode,
            border_constant,
        );
    }

    let mut produced = 0usize;
    while produced < tile_rows {
        let count = ROWS_PER_BATCH.min(tile_rows - produced);
        let base = (tile_y + produced) as i64;
        for j in 0..count {
            let slot = taps - 1 + j;
            fill_slot::<S, N>(
                &mut ring[slot],
                &mut bordered,
                image,
                base + slot as i64 - anchor_y,
                shape,
                row_stage,
                border_mode,
                border_constant,
            );
        }
        for j in 0..count {
            let window: Vec<&[f64]> = ring[j..j + taps]
                .iter()
                .map(|row| &row[..shape.row_len])
                .collect();
            let offset = (produced + j) * dst_stride;
            let dst_row = &mut tile[offset..(offset + width * N)];
            column_stage.apply(&window, dst_row);
        }
        ring.rotate_left(count);
        produced += count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImageChannels;
    use std::num::NonZeroUsize;

    fn splitmix(seed: &mut u64) -> u64 {
        *seed = seed.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = *seed;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    fn random_plane(width: usize, height: usize, seed: u64) -> Vec<u8> {
        let mut state = seed;
        (0..width * height)
            .map(|_| (splitmix(&mut state) >> 32) as u8)
            .collect()
    }

    /// Direct 2-D correlation with constant padding, the reference the
    /// staged engine must agree with.
    fn reference_constant<const N: usize>(
        src: &[u8],
        width: usize,
        height: usize,
        kernel: &[f64],
        kw: usize,
        kh: usize,
        ax: usize,
        ay: usize,
        constant: f64,
        delta: f64,
    ) -> Vec<f64> {
        let mut out = vec![0f64; width * height * N];
        for y in 0..height {
            for x in 0..width {
                for c in 0..N {
                    let mut sum = 0f64;
                    for j in 0..kh {
                        for i in 0..kw {
                            let sy = y as i64 + j as i64 - ay as i64;
                            let sx = x as i64 + i as i64 - ax as i64;
                            let v = if sy >= 0
                                && sy < height as i64
                                && sx >= 0
                                && sx < width as i64
                            {
                                src[(sy as usize * width + sx as usize) * N + c] as f64
                            } else {
                                constant
                            };
                            sum += kernel[j * kw + i] * v;
                        }
                    }
                    out[(y * width + x) * N + c] = sum + delta;
                }
            }
        }
        out
    }

    #[test]
    fn separable_matches_direct_2d() {
        let (width, height) = (13usize, 9usize);
        let src = random_plane(width, height, 42);
        let image = ImageStore::borrow(&src, width as u32, height as u32, ImageChannels::Plane);

        let kx = [0.1, 0.4, 0.3, 0.15, 0.05];
        let ky = [0.25, 0.5, 0.25];
        let mut dst = ImageStoreMut::<f64>::alloc(width as u32, height as u32, ImageChannels::Plane);
        sep_filter_2d::<u8, f64, 1>(
            &image,
            &mut dst,
            Some(&kx),
            &ky,
            None,
            0.,
            EdgeMode::Constant,
            Scalar::dup(7.),
            ThreadingPolicy::Single,
        )
        .unwrap();

        let mut outer = vec![0f64; kx.len() * ky.len()];
        for (j, wy) in ky.iter().enumerate() {
            for (i, wx) in kx.iter().enumerate() {
                outer[j * kx.len() + i] = wx * wy;
            }
        }
        let expected =
            reference_constant::<1>(&src, width, height, &outer, kx.len(), ky.len(), 2, 1, 7., 0.);
        for (got, want) in dst.data.borrow().iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-4, "{got} vs {want}");
        }
    }

    #[test]
    fn dense_matches_direct_2d() {
        let (width, height) = (11usize, 7usize);
        let src = random_plane(width, height, 7);
        let image = ImageStore::borrow(&src, width as u32, height as u32, ImageChannels::Plane);

        let mut state = 99u64;
        let kernel: Vec<f64> = (0..9)
            .map(|_| (splitmix(&mut state) >> 40) as f64 / 8388608. - 1.)
            .collect();
        let mut dst = ImageStoreMut::<f64>::alloc(width as u32, height as u32, ImageChannels::Plane);
        filter_2d::<u8, f64, 1>(
            &image,
            &mut dst,
            &kernel,
            KernelShape::new(3, 3),
            None,
            0.5,
            EdgeMode::Constant,
            Scalar::dup(3.),
            ThreadingPolicy::Single,
        )
        .unwrap();

        let expected = reference_constant::<1>(&src, width, height, &kernel, 3, 3, 1, 1, 3., 0.5);
        for (got, want) in dst.data.borrow().iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-4, "{got} vs {want}");
        }
    }

    #[test]
    fn unit_kernel_is_identity() {
        let (width, height) = (6usize, 5usize);
        let src = random_plane(width, height, 5);
        let image = ImageStore::borrow(&src, width as u32, height as u32, ImageChannels::Plane);
        let mut dst = ImageStoreMut::<u8>::alloc(width as u32, height as u32, ImageChannels::Plane);
        filter_2d::<u8, u8, 1>(
            &image,
            &mut dst,
            &[1.],
            KernelShape::new(1, 1),
            None,
            0.,
            EdgeMode::Replicate,
            Scalar::default(),
            ThreadingPolicy::Single,
        )
        .unwrap();
        assert_eq!(dst.data.borrow(), src.as_slice());
    }

    #[test]
    fn horizontal_sum_with_replicated_edges() {
        let src = vec![10u8; 25];
        let image = ImageStore::borrow(&src, 5, 5, ImageChannels::Plane);
        let mut dst = ImageStoreMut::<i32>::alloc(5, 5, ImageChannels::Plane);
        sep_filter_2d::<u8, i32, 1>(
            &image,
            &mut dst,
            Some(&[1., 1., 1.]),
            &[1.],
            None,
            0.,
            EdgeMode::Replicate,
            Scalar::default(),
            ThreadingPolicy::Single,
        )
        .unwrap();
        assert!(dst.data.borrow().iter().all(|&v| v == 30));
    }

    #[test]
    fn cast_saturates_at_destination_bounds() {
        let src = [200u8, 200, 200, 10, 10, 10, 10, 10, 10];
        let image = ImageStore::borrow(&src, 3, 3, ImageChannels::Plane);
        let mut dst = ImageStoreMut::<u8>::alloc(3, 3, ImageChannels::Plane);
        filter_2d::<u8, u8, 1>(
            &image,
            &mut dst,
            &[3.],
            KernelShape::new(1, 1),
            None,
            0.,
            EdgeMode::Replicate,
            Scalar::default(),
            ThreadingPolicy::Single,
        )
        .unwrap();
        assert_eq!(dst.data.borrow()[0], 255);
        assert_eq!(dst.data.borrow()[4], 30);

        let mut negated = ImageStoreMut::<u8>::alloc(3, 3, ImageChannels::Plane);
        filter_2d::<u8, u8, 1>(
            &image,
            &mut negated,
            &[-1.],
            KernelShape::new(1, 1),
            None,
            0.,
            EdgeMode::Replicate,
            Scalar::default(),
            ThreadingPolicy::Single,
        )
        .unwrap();
        assert!(negated.data.borrow().iter().all(|&v| v == 0));
    }

    #[test]
    fn threaded_run_matches_sequential() {
        let (width, height) = (23usize, 37usize);
        let src = random_plane(width, height, 1234);
        let image = ImageStore::borrow(&src, width as u32, height as u32, ImageChannels::Plane);
        let kernel = crate::gaussian_kernel_1d(5, 1.2);

        let mut single = ImageStoreMut::<u8>::alloc(width as u32, height as u32, ImageChannels::Plane);
        sep_filter_2d::<u8, u8, 1>(
            &image,
            &mut single,
            Some(&kernel),
            &kernel,
            None,
            0.,
            EdgeMode::Reflect101,
            Scalar::default(),
            ThreadingPolicy::Single,
        )
        .unwrap();

        let mut threaded = ImageStoreMut::<u8>::alloc(width as u32, height as u32, ImageChannels::Plane);
        sep_filter_2d::<u8, u8, 1>(
            &image,
            &mut threaded,
            Some(&kernel),
            &kernel,
            None,
            0.,
            EdgeMode::Reflect101,
            Scalar::default(),
            ThreadingPolicy::Fixed(NonZeroUsize::new(4).unwrap()),
        )
        .unwrap();

        assert_eq!(single.data.borrow(), threaded.data.borrow());
    }

    #[test]
    fn interleaved_channels_match_planes() {
        let (width, height) = (9usize, 6usize);
        let planes: Vec<Vec<u8>> = (0..3).map(|c| random_plane(width, height, 100 + c)).collect();
        let mut interleaved = vec![0u8; width * height * 3];
        for (i, px) in interleaved.chunks_exact_mut(3).enumerate() {
            for (c, v) in px.iter_mut().enumerate() {
                *v = planes[c][i];
            }
        }

        let image =
            ImageStore::borrow(&interleaved, width as u32, height as u32, ImageChannels::Channels3);
        let mut dst =
            ImageStoreMut::<u8>::alloc(width as u32, height as u32, ImageChannels::Channels3);
        let kernel = crate::gaussian_kernel_1d(3, 0.8);
        sep_filter_2d::<u8, u8, 3>(
            &image,
            &mut dst,
            Some(&kernel),
            &kernel,
            None,
            0.,
            EdgeMode::Reflect,
            Scalar::default(),
            ThreadingPolicy::Single,
        )
        .unwrap();

        for (c, plane) in planes.iter().enumerate() {
            let plane_image =
                ImageStore::borrow(plane, width as u32, height as u32, ImageChannels::Plane);
            let mut plane_dst =
                ImageStoreMut::<u8>::alloc(width as u32, height as u32, ImageChannels::Plane);
            sep_filter_2d::<u8, u8, 1>(
                &plane_image,
                &mut plane_dst,
                Some(&kernel),
                &kernel,
                None,
                0.,
                EdgeMode::Reflect,
                Scalar::default(),
                ThreadingPolicy::Single,
            )
            .unwrap();
            let expected = plane_dst.data.borrow();
            for (i, px) in dst.data.borrow().chunks_exact(3).enumerate() {
                assert_eq!(px[c], expected[i]);
            }
        }
    }

    #[test]
    fn respects_destination_stride() {
        let (width, height) = (4usize, 4usize);
        let src = random_plane(width, height, 3);
        let image = ImageStore::borrow(&src, width as u32, height as u32, ImageChannels::Plane);
        let stride = width + 3;
        let mut backing = vec![77u8; stride * height];
        let mut dst = ImageStoreMut::borrow_with_stride(
            &mut backing,
            width as u32,
            height as u32,
            stride as u32,
            ImageChannels::Plane,
        );
        filter_2d::<u8, u8, 1>(
            &image,
            &mut dst,
            &[1.],
            KernelShape::new(1, 1),
            None,
            0.,
            EdgeMode::Replicate,
            Scalar::default(),
            ThreadingPolicy::Single,
        )
        .unwrap();
        for y in 0..height {
            let row = &backing[y * stride..(y + 1) * stride];
            assert_eq!(&row[..width], &src[y * width..(y + 1) * width]);
            if y + 1 < height {
                assert!(row[width..].iter().all(|&v| v == 77));
            }
        }
    }

    #[test]
    fn rejects_kernel_larger_than_image() {
        let src = [0u8; 4];
        let image = ImageStore::borrow(&src, 2, 2, ImageChannels::Plane);
        let mut dst = ImageStoreMut::<u8>::alloc(2, 2, ImageChannels::Plane);
        assert!(sep_filter_2d::<u8, u8, 1>(
            &image,
            &mut dst,
            Some(&[1., 1., 1.]),
            &[1.],
            None,
            0.,
            EdgeMode::Replicate,
            Scalar::default(),
            ThreadingPolicy::Single,
        )
        .is_err());
    }

    #[test]
    fn rejects_even_kernels() {
        let src = [0u8; 16];
        let image = ImageStore::borrow(&src, 4, 4, ImageChannels::Plane);
        let mut dst = ImageStoreMut::<u8>::alloc(4, 4, ImageChannels::Plane);
        assert!(matches!(
            sep_filter_2d::<u8, u8, 1>(
                &image,
                &mut dst,
                Some(&[1., 1.]),
                &[1.],
                None,
                0.,
                EdgeMode::Replicate,
                Scalar::default(),
                ThreadingPolicy::Single,
            ),
            Err(FilterError::OddKernel(2))
        ));
    }
}
