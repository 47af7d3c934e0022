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

/// Helper trait to round and clamp a wide accumulator into a storage type.
///
/// Integral destinations saturate to their representable range, floating
/// destinations convert without clamping.
pub trait ToStorage<T>: 'static + Copy
where
    T: 'static + Copy,
{
    /// Convert a value to another, using the `to` operator.
    fn to_(self) -> T;
}

macro_rules! impl_saturating_storage {
    ($from:ty, $to:ty) => {
        impl ToStorage<$to> for $from {
            #[inline(always)]
            fn to_(self) -> $to {
                self.round()
                    .max(<$to>::MIN as $from)
                    .min(<$to>::MAX as $from) as $to
            }
        }
    };
}

impl_saturating_storage!(f64, u8);
impl_saturating_storage!(f64, i8);
impl_saturating_storage!(f64, u16);
impl_saturating_storage!(f64, i16);
impl_saturating_storage!(f64, i32);

macro_rules! impl_direct_storage {
    ($from:ty, $to:ty) => {
        impl ToStorage<$to> for $from {
            #[inline(always)]
            fn to_(self) -> $to {
                self as $to
            }
        }
    };
}

impl_direct_storage!(f64, f32);
impl_direct_storage!(f64, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturates_u8() {
        assert_eq!(ToStorage::<u8>::to_(300.0f64), 255);
        assert_eq!(ToStorage::<u8>::to_(-10.0f64), 0);
        assert_eq!(ToStorage::<u8>::to_(127.4f64), 127);
        assert_eq!(ToStorage::<u8>::to_(127.5f64), 128);
    }

    #[test]
    fn saturates_signed() {
        assert_eq!(ToStorage::<i8>::to_(-300.0f64), -128);
        assert_eq!(ToStorage::<i8>::to_(300.0f64), 127);
        assert_eq!(ToStorage::<i16>::to_(-40000.0f64), -32768);
        assert_eq!(ToStorage::<i16>::to_(40000.0f64), 32767);
        assert_eq!(ToStorage::<i32>::to_(1e18f64), i32::MAX);
        assert_eq!(ToStorage::<i32>::to_(-1e18f64), i32::MIN);
    }

    #[test]
    fn saturates_u16() {
        assert_eq!(ToStorage::<u16>::to_(70000.0f64), 65535);
        assert_eq!(ToStorage::<u16>::to_(-1.0f64), 0);
    }

    #[test]
    fn floats_are_unclamped() {
        assert_eq!(ToStorage::<f32>::to_(1e30f64), 1e30f32);
        assert_eq!(ToStorage::<f64>::to_(-1e300f64), -1e300);
    }
}
