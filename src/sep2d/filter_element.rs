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
use crate::FilterError;

#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
/// Kernel dimensions in taps
pub struct KernelShape {
    pub width: usize,
    pub height: usize,
}

impl KernelShape {
    pub fn new(width: usize, height: usize) -> KernelShape {
        KernelShape { width, height }
    }
}

#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
/// Kernel coordinate aligned with the output pixel being produced.
///
/// When left unset it defaults to the kernel geometric center `(size - 1) / 2`.
pub struct Anchor {
    pub x: usize,
    pub y: usize,
}

impl Anchor {
    pub fn new(x: usize, y: usize) -> Anchor {
        Anchor { x, y }
    }

    pub(crate) fn resolve(
        anchor: Option<Anchor>,
        kernel_shape: KernelShape,
    ) -> Result<Anchor, FilterError> {
        let anchor = anchor.unwrap_or(Anchor {
            x: kernel_shape.width.saturating_sub(1) / 2,
            y: kernel_shape.height.saturating_sub(1) / 2,
        });
        if anchor.x >= kernel_shape.width || anchor.y >= kernel_shape.height {
            return Err(FilterError::AnchorOutOfBounds {
                x: anchor.x,
                y: anchor.y,
            });
        }
        Ok(anchor)
    }
}
