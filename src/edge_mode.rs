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
use std::ops::Index;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default)]
/// Declares an edge handling mode
pub enum EdgeMode {
    /// If filter goes out of bounds the padding is filled with a provided
    /// constant [crate::Scalar], zero by default. Out-of-range samples are
    /// never resolved back into the image for this mode.
    Constant = 0,
    /// If kernel goes out of bounds the edge pixel is replicated across the
    /// filter, with rule `aaaaaa|abcdefgh|hhhhhhh`
    #[default]
    Replicate = 1,
    /// If filter goes out of bounds image will be mirrored with rule
    /// `fedcba|abcdefgh|hgfedcb`
    Reflect = 2,
    /// If filter goes out of bounds image will be mirrored without repeating
    /// the edge sample, with rule `gfedcb|abcdefgh|gfedcba`
    Reflect101 = 3,
    /// If filter goes out of bounds image will be taken from the opposite
    /// side, with rule `cdefgh|abcdefgh|abcdefg`
    Wrap = 4,
}

impl From<usize> for EdgeMode {
    fn from(value: usize) -> Self {
        match value {
            0 => EdgeMode::Constant,
            1 => EdgeMode::Replicate,
            2 => EdgeMode::Reflect,
            3 => EdgeMode::Reflect101,
            4 => EdgeMode::Wrap,
            _ => {
                panic!("Unknown edge mode for value: {}", value);
            }
        }
    }
}

/// Maps an out-of-range `index` back into `[0, extent)` under the given mode.
///
/// `EdgeMode::Constant` must never reach this function, constant padding is
/// written literally by the caller. Valid only for overshoots smaller than
/// one extent, which always holds since a kernel extent never exceeds the
/// image extent it slides over.
#[inline]
pub(crate) fn border_interpolate(edge_mode: EdgeMode, index: i64, extent: i64) -> usize {
    debug_assert!(extent > 0);
    let i = match edge_mode {
        EdgeMode::Constant => {
            debug_assert!(false, "constant border is padded literally, never resolved");
            index.clamp(0, extent - 1)
        }
        EdgeMode::Replicate => index.clamp(0, extent - 1),
        EdgeMode::Reflect => {
            if index < 0 {
                -1 - index
            } else if index > extent - 1 {
                2 * extent - 1 - index
            } else {
                index
            }
        }
        EdgeMode::Reflect101 => {
            if index < 0 {
                -index
            } else if index > extent - 1 {
                2 * (extent - 1) - index
            } else {
                index
            }
        }
        EdgeMode::Wrap => {
            if index < 0 {
                extent - 1 + index
            } else if index > extent - 1 {
                index - extent
            } else {
                index
            }
        }
    };
    debug_assert!(
        i >= 0 && i < extent,
        "border index {index} resolved outside [0, {extent}) for {edge_mode:?}"
    );
    i as usize
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialOrd, PartialEq)]
/// Per-channel constant used by [EdgeMode::Constant] padding
pub struct Scalar {
    pub v0: f64,
    pub v1: f64,
    pub v2: f64,
    pub v3: f64,
}

impl Scalar {
    pub fn new(v0: f64, v1: f64, v2: f64, v3: f64) -> Self {
        Self { v0, v1, v2, v3 }
    }

    pub fn dup(v: f64) -> Self {
        Scalar::new(v, v, v, v)
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.v0 == 0. && self.v1 == 0. && self.v2 == 0. && self.v3 == 0.
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

impl Index<usize> for Scalar {
    type Output = f64;
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.v0,
            1 => &self.v1,
            2 => &self.v2,
            3 => &self.v3,
            _ => {
                unimplemented!("Index out of bounds: {}", index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESOLVING_MODES: [EdgeMode; 4] = [
        EdgeMode::Replicate,
        EdgeMode::Reflect,
        EdgeMode::Reflect101,
        EdgeMode::Wrap,
    ];

    #[test]
    fn in_range_indices_are_fixed_points() {
        for mode in RESOLVING_MODES {
            for extent in 1i64..9 {
                for i in 0..extent {
                    let r = border_interpolate(mode, i, extent);
                    assert_eq!(r as i64, i, "{mode:?} moved in-range index {i} of {extent}");
                    let rr = border_interpolate(mode, r as i64, extent);
                    assert_eq!(rr, r, "{mode:?} is not idempotent at {i} of {extent}");
                }
            }
        }
    }

    #[test]
    fn out_of_range_lands_in_range() {
        for mode in RESOLVING_MODES {
            for extent in 2i64..9 {
                for i in -(extent - 1)..(2 * extent - 1) {
                    let r = border_interpolate(mode, i, extent) as i64;
                    assert!(
                        r >= 0 && r < extent,
                        "{mode:?} resolved {i} of {extent} to {r}"
                    );
                }
            }
        }
    }

    #[test]
    fn replicate_clamps_to_edges() {
        for extent in 1i64..9 {
            for i in -8..0 {
                assert_eq!(border_interpolate(EdgeMode::Replicate, i, extent), 0);
            }
            for i in extent..extent + 8 {
                assert_eq!(
                    border_interpolate(EdgeMode::Replicate, i, extent) as i64,
                    extent - 1
                );
            }
        }
    }

    #[test]
    fn reflect_duplicates_edge_sample() {
        // fedcba|abcdefgh|hgfedcb
        assert_eq!(border_interpolate(EdgeMode::Reflect, -1, 8), 0);
        assert_eq!(border_interpolate(EdgeMode::Reflect, -2, 8), 1);
        assert_eq!(border_interpolate(EdgeMode::Reflect, 8, 8), 7);
        assert_eq!(border_interpolate(EdgeMode::Reflect, 9, 8), 6);
    }

    #[test]
    fn reflect101_shares_edge_sample() {
        for extent in 2i64..9 {
            assert_eq!(
                border_interpolate(EdgeMode::Reflect101, -1, extent),
                border_interpolate(EdgeMode::Reflect101, 1, extent)
            );
            assert_eq!(
                border_interpolate(EdgeMode::Reflect101, extent, extent) as i64,
                extent - 2
            );
        }
    }

    #[test]
    fn wrap_shifts_by_one_short_of_extent() {
        // the wrap rule deliberately offsets by extent - 1 below zero
        assert_eq!(border_interpolate(EdgeMode::Wrap, -1, 8), 6);
        assert_eq!(border_interpolate(EdgeMode::Wrap, 8, 8), 0);
        assert_eq!(border_interpolate(EdgeMode::Wrap, 9, 8), 1);
    }
}
