//! Exact output sizes, computed without allocating.

use crate::code_point::{WideCodePoints, len_wtf8};
use crate::unit::{NarrowUnit, WideUnit};

/// Number of bytes [`crate::convert_to_narrow`] writes for `src`.
///
/// A lead surrogate immediately followed by a trail surrogate counts as one
/// four-byte sequence, every other unit as one to three bytes.
#[inline]
pub fn narrow_len<W: WideUnit>(src: &[W]) -> usize {
    WideCodePoints::new(src).map(len_wtf8).sum()
}

/// Number of 16-bit units [`crate::convert_to_wide`] writes for well-formed
/// WTF-8 `src`.
///
/// Only lead bytes are looked at: a four-byte lead contributes a surrogate
/// pair, any other lead a single unit, continuation bytes nothing. For
/// ill-formed input the result is still an upper bound of what is written
/// before the conversion fails.
#[inline]
pub fn wide_len<N: NarrowUnit>(src: &[N]) -> usize {
    src.iter()
        .map(|b| match b.to_byte() {
            0x00..=0x7F => 1,
            0x80..=0xBF => 0,
            0xF0..=0xFF => 2,
            _ => 1,
        })
        .sum()
}

/// A sequence whose converted size can be computed, dispatched by unit
/// width: 8-bit input measures its UTF-16 form, 16-bit input its WTF-8
/// form.
pub trait ConvertSize {
    fn convert_size(&self) -> usize;
}

macro_rules! impl_convert_size {
    ($len:ident: $($t:ty),*) => {$(
        impl ConvertSize for [$t] {
            #[inline]
            fn convert_size(&self) -> usize {
                $len(self)
            }
        }

        impl<const L: usize> ConvertSize for [$t; L] {
            #[inline]
            fn convert_size(&self) -> usize {
                $len(self.as_slice())
            }
        }
    )*};
}

impl_convert_size!(wide_len: u8, i8);
impl_convert_size!(narrow_len: u16, i16);

impl ConvertSize for str {
    #[inline]
    fn convert_size(&self) -> usize {
        wide_len(self.as_bytes())
    }
}

/// Size of `src` once converted to the other width, in destination units.
#[inline]
pub fn convert_size<S: ConvertSize + ?Sized>(src: &S) -> usize {
    src.convert_size()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_len() {
        assert_eq!(narrow_len::<u16>(&[]), 0);
        assert_eq!(narrow_len(&[0x61u16, 0xE1, 0x2E81]), 1 + 2 + 3);
        // paired
        assert_eq!(narrow_len(&[0xD83Du16, 0xDE00]), 4);
        assert_eq!(narrow_len(&[0xD800u16, 0xDC00]), 4);
        // lone or reversed
        assert_eq!(narrow_len(&[0xD83Du16]), 3);
        assert_eq!(narrow_len(&[0xDE00u16, 0xD83D]), 6);
        assert_eq!(narrow_len(&[0xD83Du16, 0xD83D, 0xDE00]), 3 + 4);
    }

    #[test]
    fn test_wide_len() {
        assert_eq!(wide_len::<u8>(&[]), 0);
        assert_eq!(wide_len(b"a\xc3\xa1\xe2\xba\x81"), 3);
        assert_eq!(wide_len(b"\xf0\x9f\x98\x80"), 2);
        assert_eq!(wide_len(b"\xed\xa0\x80\xed\xb0\x80"), 2);
    }

    #[test]
    fn test_convert_size_dispatch() {
        assert_eq!(convert_size("\u{e1}\u{1F600}"), 3);
        assert_eq!(convert_size(b"\xc3\xa1"), 1);
        assert_eq!(convert_size(&[0xE1u16, 0xD83D, 0xDE00][..]), 6);
        assert_eq!(convert_size(&[0xE1u16 as i16]), 2);
        assert_eq!(convert_size(&(*b"abc").map(|b| b as i8)), 3);
    }
}
