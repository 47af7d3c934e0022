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
    run_engine, Anchor, CopyRowStage, DenseMorphColumnStage, EngineShape, KernelShape,
    MorphColumnStage, MorphOp, MorphRowStage, ScanPoint2d,
};
use crate::to_storage::ToStorage;
use crate::{EdgeMode, FilterError, ImageStore, ImageStoreMut, Scalar, ThreadingPolicy};
use num_traits::AsPrimitive;
use std::fmt::Debug;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MorphShape {
    Rect,
    Cross,
    Ellipse,
}

#[derive(Clone, Debug)]
/// Binary neighborhood a morphological operator sweeps over the image.
pub struct StructuringElement {
    pub size: KernelShape,
    pub anchor: Anchor,
    mask: Vec<bool>,
}

impl StructuringElement {
    /// Builds a rectangle, cross or inscribed-ellipse element.
    pub fn new(
        shape: MorphShape,
        size: KernelShape,
        anchor: Option<Anchor>,
    ) -> Result<StructuringElement, FilterError> {
        if size.width == 0 || size.height == 0 {
            return Err(FilterError::ZeroBaseSize);
        }
        let anchor = Anchor::resolve(anchor, size)?;
        let shape = if size.width == 1 && size.height == 1 {
            MorphShape::Rect
        } else {
            shape
        };

        let mut mask = vec![false; size.width * size.height];
        match shape {
            MorphShape::Rect => mask.fill(true),
            MorphShape::Cross => {
                for (i, row) in mask.chunks_exact_mut(size.width).enumerate() {
                    if i == anchor.y {
                        row.fill(true);
                    } else {
                        row[anchor.x] = true;
                    }
                }
            }
            MorphShape::Ellipse => {
                let r = (size.height >> 1) as i64;
                let c = (size.width >> 1) as i64;
                let inv_r2 = if r != 0 { 1. / ((r * r) as f64) } else { 0. };
                for (i, row) in mask.chunks_exact_mut(size.width).enumerate() {
                    let dy = i as i64 - r;
                    if dy.abs() > r {
                        continue;
                    }
                    let dx = (c as f64 * ((r * r - dy * dy) as f64 * inv_r2).sqrt()) as i64;
                    let j1 = (c - dx).max(0) as usize;
                    let j2 = ((c + dx + 1) as usize).min(size.width);
                    row[j1..j2].fill(true);
                }
            }
        }
        Ok(StructuringElement { size, anchor, mask })
    }

    /// Wraps a caller-provided mask, any non-empty pattern is accepted.
    pub fn custom(
        mask: Vec<bool>,
        size: KernelShape,
        anchor: Option<Anchor>,
    ) -> Result<StructuringElement, FilterError> {
        if size.width == 0 || size.height == 0 {
            return Err(FilterError::ZeroBaseSize);
        }
        if mask.len() != size.width * size.height {
            return Err(FilterError::KernelSizeMismatch(crate::MismatchedSize {
                expected: size.width * size.height,
                received: mask.len(),
            }));
        }
        if !mask.iter().any(|&v| v) {
            return Err(FilterError::InvalidArguments);
        }
        let anchor = Anchor::resolve(anchor, size)?;
        Ok(StructuringElement { size, anchor, mask })
    }

    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    fn is_full(&self) -> bool {
        self.mask.iter().all(|&v| v)
    }

    fn points(&self) -> Vec<ScanPoint2d> {
        self.mask
            .iter()
            .enumerate()
            .filter(|(_, &v)| v)
            .map(|(i, _)| ScanPoint2d {
                x: i % self.size.width,
                y: i / self.size.width,
                weight: 1.,
            })
            .collect()
    }
}

/// Erodes the image, each output sample is the neighborhood minimum.
pub fn erode<T, const N: usize>(
    image: &ImageStore<T>,
    destination: &mut ImageStoreMut<T>,
    element: Option<&StructuringElement>,
    iterations: usize,
    border_mode: EdgeMode,
    border_constant: Scalar,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    T: Copy + Default + Debug + Send + Sync + 'static + AsPrimitive<f64>,
    f64: AsPrimitive<T> + ToStorage<T>,
{
    morph_op::<T, N>(
        MorphOp::Erode,
        image,
        destination,
        element,
        iterations,
        border_mode,
        border_constant,
        threading_policy,
    )
}

/// Dilates the image, each output sample is the neighborhood maximum.
pub fn dilate<T, const N: usize>(
    image: &ImageStore<T>,
    destination: &mut ImageStoreMut<T>,
    element: Option<&StructuringElement>,
    iterations: usize,
    border_mode: EdgeMode,
    border_constant: Scalar,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    T: Copy + Default + Debug + Send + Sync + 'static + AsPrimitive<f64>,
    f64: AsPrimitive<T> + ToStorage<T>,
{
    morph_op::<T, N>(
        MorphOp::Dilate,
        image,
        destination,
        element,
        iterations,
        border_mode,
        border_constant,
        threading_policy,
    )
}

#[allow(clippy::too_many_arguments)]
fn morph_op<T, const N: usize>(
    op: MorphOp,
    image: &ImageStore<T>,
    destination: &mut ImageStoreMut<T>,
    element: Option<&StructuringElement>,
    iterations: usize,
    border_mode: EdgeMode,
    border_constant: Scalar,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    T: Copy + Default + Debug + Send + Sync + 'static + AsPrimitive<f64>,
    f64: AsPrimitive<T> + ToStorage<T>,
{
    if iterations == 0
        || element.is_some_and(|se| se.size.width * se.size.height == 1)
    {
        return copy_image::<T, N>(image, destination);
    }

    // a fully set element applied k times equals one bigger rectangle,
    // fuse up front and run a single pass
    let fused;
    let mut iterations = iterations;
    let element = match element {
        None => {
            fused = StructuringElement::new(
                MorphShape::Rect,
                KernelShape::new(1 + iterations * 2, 1 + iterations * 2),
                Some(Anchor::new(iterations, iterations)),
            )?;
            iterations = 1;
            &fused
        }
        Some(se) if iterations > 1 && se.is_full() => {
            let size = KernelShape::new(
                se.size.width + (iterations - 1) * (se.size.width - 1),
                se.size.height + (iterations - 1) * (se.size.height - 1),
            );
            fused = StructuringElement::new(
                MorphShape::Rect,
                size,
                Some(Anchor::new(
                    se.anchor.x * iterations,
                    se.anchor.y * iterations,
                )),
            )?;
            iterations = 1;
            &fused
        }
        Some(se) => se,
    };

    morph_pass::<T, N>(
        op,
        image,
        destination,
        element,
        border_mode,
        border_constant,
        threading_policy,
    )?;
    for _ in 1..iterations {
        let previous = snapshot::<T, N>(destination);
        morph_pass::<T, N>(
            op,
            &previous,
            destination,
            element,
            border_mode,
            border_constant,
            threading_policy,
        )?;
    }
    Ok(())
}

fn morph_pass<T, const N: usize>(
    op: MorphOp,
    image: &ImageStore<T>,
    destination: &mut ImageStoreMut<T>,
    element: &StructuringElement,
    border_mode: EdgeMode,
    border_constant: Scalar,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    T: Copy + Default + Debug + Send + Sync + 'static + AsPrimitive<f64>,
    f64: AsPrimitive<T> + ToStorage<T>,
{
    let size = element.size;
    let anchor = element.anchor;
    if element.is_full() {
        let row_stage = MorphRowStage::new(vec![true; size.width], op);
        let column_stage = MorphColumnStage::new(vec![true; size.height], op);
        let shape = EngineShape {
            kernel_width: size.width,
            anchor_x: anchor.x,
            kernel_height: size.height,
            anchor_y: anchor.y,
            row_len: image.width as usize * N,
        };
        run_engine::<T, T, N>(
            image,
            destination,
            &row_stage,
            &column_stage,
            shape,
            border_mode,
            border_constant,
            threading_policy,
        )
    } else {
        let row_stage = CopyRowStage {};
        let column_stage = DenseMorphColumnStage::new(element.points(), N, op);
        let shape = EngineShape {
            kernel_width: size.width,
            anchor_x: anchor.x,
            kernel_height: size.height,
            anchor_y: anchor.y,
            row_len: (image.width as usize + size.width - 1) * N,
        };
        run_engine::<T, T, N>(
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
}

/// Copies the destination into an owned tightly-packed store, used between
/// iterated passes since a pass cannot read and write one buffer.
fn snapshot<T, const N: usize>(destination: &ImageStoreMut<T>) -> ImageStore<'static, T>
where
    T: Copy + Default + Debug + 'static,
{
    let width = destination.width as usize;
    let height = destination.height as usize;
    let stride = destination.row_stride() as usize;
    let data = destination.data.borrow();
    let mut owned = Vec::with_capacity(width * height * N);
    for y in 0..height {
        owned.extend_from_slice(&data[y * stride..y * stride + width * N]);
    }
    ImageStore {
        data: std::borrow::Cow::Owned(owned),
        width: destination.width,
        height: destination.height,
        stride: (width * N) as u32,
        channels: destination.channels,
    }
}

fn copy_image<T, const N: usize>(
    image: &ImageStore<T>,
    destination: &mut ImageStoreMut<T>,
) -> Result<(), FilterError>
where
    T: Copy + Default + Debug + 'static,
{
    image.check_layout_channels(N)?;
    destination.check_layout_channels(N)?;
    image.sizes_match_mut(destination)?;
    let width = image.width as usize;
    let height = image.height as usize;
    let src_stride = image.row_stride() as usize;
    let dst_stride = destination.row_stride() as usize;
    let src = image.data.as_ref();
    let dst = destination.data.borrow_mut();
    for y in 0..height {
        dst[y * dst_stride..y * dst_stride + width * N]
            .copy_from_slice(&src[y * src_stride..y * src_stride + width * N]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImageChannels;

    fn plane(data: &[u8], width: u32, height: u32) -> ImageStore<'_, u8> {
        ImageStore::borrow(data, width, height, ImageChannels::Plane)
    }

    #[test]
    fn rect_element_is_full() {
        let se = StructuringElement::new(MorphShape::Rect, KernelShape::new(3, 3), None).unwrap();
        assert!(se.is_full());
        assert_eq!(se.anchor, Anchor::new(1, 1));
    }

    #[test]
    fn cross_element_pattern() {
        let se = StructuringElement::new(MorphShape::Cross, KernelShape::new(3, 3), None).unwrap();
        #[rustfmt::skip]
        let expected = [
            false, true, false,
            true, true, true,
            false, true, false,
        ];
        assert_eq!(se.mask(), &expected);
        assert!(!se.is_full());
        assert_eq!(se.points().len(), 5);
    }

    #[test]
    fn ellipse_5x5_pattern() {
        let se =
            StructuringElement::new(MorphShape::Ellipse, KernelShape::new(5, 5), None).unwrap();
        #[rustfmt::skip]
        let expected = [
            false, false, true, false, false,
            false, true, true, true, false,
            true, true, true, true, true,
            false, true, true, true, false,
            false, false, true, false, false,
        ];
        assert_eq!(se.mask(), &expected);
    }

    #[test]
    fn one_by_one_element_degrades_to_rect() {
        let se =
            StructuringElement::new(MorphShape::Ellipse, KernelShape::new(1, 1), None).unwrap();
        assert!(se.is_full());
    }

    #[test]
    fn erode_takes_neighborhood_minimum() {
        #[rustfmt::skip]
        let src = [
            9u8, 9, 9, 9,
            9, 1, 9, 9,
            9, 9, 9, 9,
            9, 9, 9, 9,
        ];
        let image = plane(&src, 4, 4);
        let mut dst = ImageStoreMut::<u8>::alloc(4, 4, ImageChannels::Plane);
        erode::<u8, 1>(
            &image,
            &mut dst,
            None,
            1,
            EdgeMode::Replicate,
            Scalar::default(),
            ThreadingPolicy::Single,
        )
        .unwrap();
        #[rustfmt::skip]
        let expected = [
            1u8, 1, 1, 9,
            1, 1, 1, 9,
            1, 1, 1, 9,
            9, 9, 9, 9,
        ];
        assert_eq!(dst.data.borrow(), &expected);
    }

    #[test]
    fn dilate_spreads_maximum_with_cross() {
        #[rustfmt::skip]
        let src = [
            0u8, 0, 0,
            0, 5, 0,
            0, 0, 0,
        ];
        let image = plane(&src, 3, 3);
        let se = StructuringElement::new(MorphShape::Cross, KernelShape::new(3, 3), None).unwrap();
        let mut dst = ImageStoreMut::<u8>::alloc(3, 3, ImageChannels::Plane);
        dilate::<u8, 1>(
            &image,
            &mut dst,
            Some(&se),
            1,
            EdgeMode::Replicate,
            Scalar::default(),
            ThreadingPolicy::Single,
        )
        .unwrap();
        #[rustfmt::skip]
        let expected = [
            0u8, 5, 0,
            5, 5, 5,
            0, 5, 0,
        ];
        assert_eq!(dst.data.borrow(), &expected);
    }

    #[test]
    fn zero_iterations_is_a_copy() {
        let src = [1u8, 2, 3, 4, 5, 6, 7, 8, 9];
        let image = plane(&src, 3, 3);
        let mut dst = ImageStoreMut::<u8>::alloc(3, 3, ImageChannels::Plane);
        erode::<u8, 1>(
            &image,
            &mut dst,
            None,
            0,
            EdgeMode::Replicate,
            Scalar::default(),
            ThreadingPolicy::Single,
        )
        .unwrap();
        assert_eq!(dst.data.borrow(), &src);
    }

    #[test]
    fn two_iterations_match_two_passes() {
        let src = [
            3u8, 7, 2, 8, 4, 1, 9, 5, 6, 2, 7, 3, 8, 1, 4, 6, 5, 9, 2, 7, 3, 8, 4, 1, 5,
        ];
        let image = plane(&src, 5, 5);
        let se = StructuringElement::new(MorphShape::Cross, KernelShape::new(3, 3), None).unwrap();

        let mut iterated = ImageStoreMut::<u8>::alloc(5, 5, ImageChannels::Plane);
        dilate::<u8, 1>(
            &image,
            &mut iterated,
            Some(&se),
            2,
            EdgeMode::Replicate,
            Scalar::default(),
            ThreadingPolicy::Single,
        )
        .unwrap();

        let mut once = ImageStoreMut::<u8>::alloc(5, 5, ImageChannels::Plane);
        dilate::<u8, 1>(
            &image,
            &mut once,
            Some(&se),
            1,
            EdgeMode::Replicate,
            Scalar::default(),
            ThreadingPolicy::Single,
        )
        .unwrap();
        let first = once.data.borrow().to_vec();
        let intermediate = plane(&first, 5, 5);
        let mut twice = ImageStoreMut::<u8>::alloc(5, 5, ImageChannels::Plane);
        dilate::<u8, 1>(
            &intermediate,
            &mut twice,
            Some(&se),
            1,
            EdgeMode::Replicate,
            Scalar::default(),
            ThreadingPolicy::Single,
        )
        .unwrap();

        assert_eq!(iterated.data.borrow(), twice.data.borrow());
    }
}
