//! Storage types for the two sides of a conversion.
//!
//! The codec only ever looks at the bit pattern of a unit, so signed and
//! unsigned storage of the same width behave identically.

mod sealed {
    pub trait Sealed {}
}

/// An 8-bit code unit holding UTF-8 or WTF-8 data.
///
/// Implemented for `u8` and for `i8`, which is what a C `char` buffer looks
/// like on platforms where `char` is signed.
pub trait NarrowUnit: Copy + sealed::Sealed {
    fn to_byte(self) -> u8;
    fn from_byte(byte: u8) -> Self;
}

/// A 16-bit code unit holding (potentially ill-formed) UTF-16 data.
///
/// Implemented for `u16`, which also covers the 16-bit `wchar_t` of
/// Windows, and for `i16`.
pub trait WideUnit: Copy + sealed::Sealed {
    fn to_unit(self) -> u16;
    fn from_unit(unit: u16) -> Self;
}

macro_rules! impl_narrow_unit {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl NarrowUnit for $t {
            #[inline]
            fn to_byte(self) -> u8 {
                self as u8
            }

            #[inline]
            fn from_byte(byte: u8) -> Self {
                byte as $t
            }
        }
    )*};
}

macro_rules! impl_wide_unit {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl WideUnit for $t {
            #[inline]
            fn to_unit(self) -> u16 {
                self as u16
            }

            #[inline]
            fn from_unit(unit: u16) -> Self {
                unit as $t
            }
        }
    )*};
}

impl_narrow_unit!(u8, i8);
impl_wide_unit!(u16, i16);
