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
//! Separable and dense 2-D convolution over interleaved image buffers.
//!
//! The workhorse is [`sep_filter_2d`]: a horizontal pass widens each source
//! row into `f64`, a vertical pass folds the widened rows back into the
//! destination depth with a saturating cast. Rows are staged through a small
//! ring buffer so memory stays proportional to the kernel height, not the
//! image. [`filter_2d`] routes arbitrary non-separable kernels through the
//! same engine, and the classic operators (gaussian, box, sobel, scharr,
//! laplacian, erode/dilate) are thin adapters on top.
#![allow(clippy::too_many_arguments)]

mod box_filter;
mod channels_configuration;
mod edge_mode;
mod gaussian;
mod image;
mod img_size;
mod laplacian;
mod mlaf;
mod morphology;
mod safe_math;
mod sep2d;
mod sobel;
mod threading_policy;
mod to_storage;
mod util;

pub use box_filter::{blur, box_filter};
pub use channels_configuration::ImageChannels;
pub use edge_mode::{EdgeMode, Scalar};
pub use gaussian::{gaussian_blur, gaussian_kernel_1d, sigma_size};
pub use image::{BufferStore, ImageStore, ImageStoreMut};
pub use img_size::ImageSize;
pub use laplacian::laplacian;
pub use morphology::{dilate, erode, MorphShape, StructuringElement};
pub use sep2d::{
    classify_1d, filter_2d, sep_filter_2d, Anchor, KernelClass, KernelShape, MorphOp, ScanPoint1d,
    ScanPoint2d,
};
pub use sobel::{get_deriv_kernels, get_scharr_kernels, scharr, sobel};
pub use threading_policy::ThreadingPolicy;
pub use to_storage::ToStorage;
pub use util::{FilterError, MismatchedSize};

pub(crate) use util::check_slice_size;
