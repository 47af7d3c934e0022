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
use crate::sep2d::filter_column::filter_column_general;
use crate::sep2d::filter_column_symmetric::filter_column_symmetric;
use crate::sep2d::filter_row::{
    filter_row_copy, filter_row_linear, filter_row_morph, filter_row_running_sum, MorphOp,
};
use crate::sep2d::filter_scan::{classify_1d, scan_1d, KernelClass, ScanPoint1d, ScanPoint2d};
use crate::to_storage::ToStorage;
use num_traits::AsPrimitive;

/// Turns one bordered source row into one wide intermediate row.
pub(crate) trait RowStage<S>: Send + Sync {
    fn apply(&self, bordered: &[S], dst: &mut [f64], cn: usize);
}

/// Combines a window of wide intermediate rows into one destination row.
pub(crate) trait ColumnStage<D>: Send + Sync {
    fn apply(&self, rows: &[&[f64]], dst: &mut [D]);
}

pub(crate) struct LinearRowStage {
    kernel: Vec<ScanPoint1d<f64>>,
}

impl LinearRowStage {
    pub(crate) fn new(kernel: &[f64]) -> LinearRowStage {
        LinearRowStage {
            kernel: scan_1d(kernel),
        }
    }
}

impl<S> RowStage<S> for LinearRowStage
where
    S: Copy + Send + Sync + AsPrimitive<f64>,
{
    fn apply(&self, bordered: &[S], dst: &mut [f64], cn: usize) {
        filter_row_linear(bordered, dst, cn, &self.kernel);
    }
}

/// Uniform-kernel row stage computing unscaled sliding window sums.
pub(crate) struct RunningSumRowStage {
    kernel_width: usize,
}

impl RunningSumRowStage {
    pub(crate) fn new(kernel_width: usize) -> RunningSumRowStage {
        RunningSumRowStage { kernel_width }
    }
}

impl<S> RowStage<S> for RunningSumRowStage
where
    S: Copy + Send + Sync + AsPrimitive<f64>,
{
    fn apply(&self, bordered: &[S], dst: &mut [f64], cn: usize) {
        match cn {
            1 => filter_row_running_sum::<S, 1>(bordered, dst, self.kernel_width),
            3 => filter_row_running_sum::<S, 3>(bordered, dst, self.kernel_width),
            4 => filter_row_running_sum::<S, 4>(bordered, dst, self.kernel_width),
            _ => unreachable!("channel layout is validated at the public surface"),
        }
    }
}

pub(crate) struct MorphRowStage {
    se_row: Vec<bool>,
    op: MorphOp,
}

impl MorphRowStage {
    pub(crate) fn new(se_row: Vec<bool>, op: MorphOp) -> MorphRowStage {
        MorphRowStage { se_row, op }
    }
}

impl<S> RowStage<S> for MorphRowStage
where
    S: Copy + Send + Sync + AsPrimitive<f64>,
{
    fn apply(&self, bordered: &[S], dst: &mut [f64], cn: usize) {
        filter_row_morph(bordered, dst, cn, &self.se_row, self.op);
    }
}

/// Pass-through stage for the dense 2-D path, keeps horizontal padding.
pub(crate) struct CopyRowStage {}

impl<S> RowStage<S> for CopyRowStage
where
    S: Copy + Send + Sync + AsPrimitive<f64>,
{
    fn apply(&self, bordered: &[S], dst: &mut [f64], _: usize) {
        filter_row_copy(bordered, dst);
    }
}

/// Linear column stage, dispatches on the kernel classification once at
/// construction time.
pub(crate) struct LinearColumnStage {
    kernel: Vec<ScanPoint1d<f64>>,
    symmetric: bool,
    delta: f64,
}

impl LinearColumnStage {
    pub(crate) fn new(kernel: &[f64], anchor: usize, delta: f64) -> LinearColumnStage {
        let class = classify_1d(kernel, anchor);
        LinearColumnStage {
            kernel: scan_1d(kernel),
            symmetric: class.contains(KernelClass::SYMMETRICAL),
            delta,
        }
    }
}

impl<D> ColumnStage<D> for LinearColumnStage
where
    D: Copy + Send + Sync + 'static,
    f64: ToStorage<D>,
{
    fn apply(&self, rows: &[&[f64]], dst: &mut [D]) {
        if self.symmetric {
            filter_column_symmetric(rows, dst, &self.kernel, self.delta);
        } else {
            filter_column_general(rows, dst, &self.kernel, self.delta);
        }
    }
}

pub(crate) struct MorphColumnStage {
    se_column: Vec<bool>,
    op: MorphOp,
}

impl MorphColumnStage {
    pub(crate) fn new(se_column: Vec<bool>, op: MorphOp) -> MorphColumnStage {
        MorphColumnStage { se_column, op }
    }
}

impl<D> ColumnStage<D> for MorphColumnStage
where
    D: Copy + Send + Sync + 'static,
    f64: ToStorage<D>,
{
    fn apply(&self, rows: &[&[f64]], dst: &mut [D]) {
        for (i, dst) in dst.iter_mut().enumerate() {
            let mut value = match self.op {
                MorphOp::Erode => f64::INFINITY,
                MorphOp::Dilate => f64::NEG_INFINITY,
            };
            for (row, &active) in rows.iter().zip(self.se_column.iter()) {
                if !active {
                    continue;
                }
                value = match self.op {
                    MorphOp::Erode => value.min(row[i]),
                    MorphOp::Dilate => value.max(row[i]),
                };
            }
            *dst = value.to_();
        }
    }
}

/// Dense 2-D column stage.
///
/// Intermediate rows keep their horizontal padding, so tap `(x, y)` of
/// output pixel `x0` reads `rows[y][(x0 + x) * cn + c]`, the anchor offset
/// cancels against the left padding.
pub(crate) struct Dense2dColumnStage {
    points: Vec<ScanPoint2d>,
    cn: usize,
    delta: f64,
}

impl Dense2dColumnStage {
    pub(crate) fn new(points: Vec<ScanPoint2d>, cn: usize, delta: f64) -> Dense2dColumnStage {
        Dense2dColumnStage { points, cn, delta }
    }
}

impl<D> ColumnStage<D> for Dense2dColumnStage
where
    D: Copy + Send + Sync + 'static,
    f64: ToStorage<D>,
{
    fn apply(&self, rows: &[&[f64]], dst: &mut [D]) {
        let cn = self.cn;
        for (x, px) in dst.chunks_exact_mut(cn).enumerate() {
            for (c, dst) in px.iter_mut().enumerate() {
                let mut sum = 0f64;
                for point in self.points.iter() {
                    sum = mlaf(sum, point.weight, rows[point.y][(x + point.x) * cn + c]);
                }
                *dst = (sum + self.delta).to_();
            }
        }
    }
}

/// Dense min/max stage over a sparse structuring element.
pub(crate) struct DenseMorphColumnStage {
    points: Vec<ScanPoint2d>,
    cn: usize,
    op: MorphOp,
}

impl DenseMorphColumnStage {
    pub(crate) fn new(points: Vec<ScanPoint2d>, cn: usize, op: MorphOp) -> DenseMorphColumnStage {
        DenseMorphColumnStage { points, cn, op }
    }
}

impl<D> ColumnStage<D> for DenseMorphColumnStage
where
    D: Copy + Send + Sync + 'static,
    f64: ToStorage<D>,
{
    fn apply(&self, rows: &[&[f64]], dst: &mut [D]) {
        let cn = self.cn;
        for (x, px) in dst.chunks_exact_mut(cn).enumerate() {
            for (c, dst) in px.iter_mut().enumerate() {
                let mut value = match self.op {
                    MorphOp::Erode => f64::INFINITY,
                    MorphOp::Dilate => f64::NEG_INFINITY,
                };
                for point in self.points.iter() {
                    let v = rows[point.y][(x + point.x) * cn + c];
                    value = match self.op {
                        MorphOp::Erode => value.min(v),
                        MorphOp::Dilate => value.max(v),
                    };
                }
                *dst = value.to_();
            }
        }
    }
}
