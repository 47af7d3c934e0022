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
use crate::{check_slice_size, FilterError, ImageChannels, ImageSize};
use std::fmt::Debug;

#[derive(Debug)]
pub enum BufferStore<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStore<'_, T> {
    #[allow(clippy::should_implement_trait)]
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn borrow_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

/// Immutable image store.
///
/// A lightweight header over row-major interleaved data. The store either
/// owns its buffer or borrows an external one, dropping an owner frees the
/// allocation exactly once; views never free.
pub struct ImageStore<'a, T: Clone + Copy + Default + Debug> {
    pub data: std::borrow::Cow<'a, [T]>,
    pub width: u32,
    pub height: u32,
    /// Image stride, items per row, might be 0
    pub stride: u32,
    pub channels: ImageChannels,
}

/// Mutable image store
pub struct ImageStoreMut<'a, T: Clone + Copy + Default + Debug> {
    pub data: BufferStore<'a, T>,
    pub width: u32,
    pub height: u32,
    /// Image stride, items per row, might be 0
    pub stride: u32,
    pub channels: ImageChannels,
}

impl<'a, T: Clone + Copy + Default + Debug> ImageStore<'a, T> {
    /// Allocates default image layout for given [ImageChannels]
    pub fn alloc(width: u32, height: u32, channels: ImageChannels) -> Self {
        Self {
            data: std::borrow::Cow::Owned(vec![
                T::default();
                width as usize
                    * height as usize
                    * channels.channels()
            ]),
            width,
            height,
            stride: width * channels.channels() as u32,
            channels,
        }
    }

    /// Borrows existing data.
    /// Stride will be default `width * channels.channels()`
    pub fn borrow(arr: &'a [T], width: u32, height: u32, channels: ImageChannels) -> Self {
        Self {
            data: std::borrow::Cow::Borrowed(arr),
            width,
            height,
            stride: width * channels.channels() as u32,
            channels,
        }
    }

    /// Borrows existing data with an explicit stride in items per row
    pub fn borrow_with_stride(
        arr: &'a [T],
        width: u32,
        height: u32,
        stride: u32,
        channels: ImageChannels,
    ) -> Self {
        Self {
            data: std::borrow::Cow::Borrowed(arr),
            width,
            height,
            stride,
            channels,
        }
    }

    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.width as usize, self.height as usize)
    }

    /// Image stride in items per row, never 0
    pub fn row_stride(&self) -> u32 {
        if self.stride == 0 {
            self.width * self.channels.channels() as u32
        } else {
            self.stride
        }
    }

    pub(crate) fn check_layout_channels(&self, cn: usize) -> Result<(), FilterError> {
        if self.channels.channels() != cn {
            return Err(FilterError::InvalidArguments);
        }
        check_slice_size(
            self.data.as_ref(),
            self.row_stride() as usize,
            self.width as usize,
            self.height as usize,
            self.channels.channels(),
        )
    }

    /// Checks that two stores cover the same geometry, element kinds may differ
    pub(crate) fn sizes_match_mut<R: Clone + Copy + Default + Debug>(
        &self,
        other: &ImageStoreMut<'_, R>,
    ) -> Result<(), FilterError> {
        if self.width != other.width
            || self.height != other.height
            || self.channels != other.channels
        {
            return Err(FilterError::ImagesMustMatch);
        }
        Ok(())
    }
}

impl<'a, T: Clone + Copy + Default + Debug> ImageStoreMut<'a, T> {
    /// Allocates default image layout for given [ImageChannels]
    pub fn alloc(width: u32, height: u32, channels: ImageChannels) -> Self {
        Self {
            data: BufferStore::Owned(vec![
                T::default();
                width as usize
                    * height as usize
                    * channels.channels()
            ]),
            width,
            height,
            stride: width * channels.channels() as u32,
            channels,
        }
    }

    /// Borrows existing data.
    /// Stride will be default `width * channels.channels()`
    pub fn borrow(arr: &'a mut [T], width: u32, height: u32, channels: ImageChannels) -> Self {
        Self {
            data: BufferStore::Borrowed(arr),
            width,
            height,
            stride: width * channels.channels() as u32,
            channels,
        }
    }

    /// Borrows existing data with an explicit stride in items per row
    pub fn borrow_with_stride(
        arr: &'a mut [T],
        width: u32,
        height: u32,
        stride: u32,
        channels: ImageChannels,
    ) -> Self {
        Self {
            data: BufferStore::Borrowed(arr),
            width,
            height,
            stride,
            channels,
        }
    }

    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.width as usize, self.height as usize)
    }

    /// Image stride in items per row, never 0
    pub fn row_stride(&self) -> u32 {
        if self.stride == 0 {
            self.width * self.channels.channels() as u32
        } else {
            self.stride
        }
    }

    pub(crate) fn check_layout_channels(&self, cn: usize) -> Result<(), FilterError> {
        if self.channels.channels() != cn {
            return Err(FilterError::InvalidArguments);
        }
        check_slice_size(
            self.data.borrow(),
            self.row_stride() as usize,
            self.width as usize,
            self.height as usize,
            self.channels.channels(),
        )
    }
}
