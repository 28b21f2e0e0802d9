//! Conversion between WTF-8 and potentially ill-formed UTF-16.
//!
//! The `convert_to_*` functions write into a caller-provided buffer sized
//! with [`crate::size`]. The `to_*_string` functions allocate that buffer
//! themselves, exactly once.

use alloc::vec;
use alloc::vec::Vec;
use log::debug;

use crate::code_point::{MAX_LEN_WTF8, WideCodePoints, encode_surrogate_pair, encode_wtf8_raw};
use crate::error::{Encoding, InvalidSequence};
use crate::size::{narrow_len, wide_len};
use crate::unit::{NarrowUnit, WideUnit};
use crate::validate::decode_sequence;

/// Converts potentially ill-formed UTF-16 to WTF-8.
///
/// Surrogate pairs become four-byte sequences; unpaired surrogates are
/// encoded on their own, so the conversion never fails and
/// [`convert_to_wide`] restores the original units.
///
/// Returns the number of bytes written.
///
/// # Panics
///
/// Panics if `dst` is shorter than [`narrow_len`]`(src)`.
pub fn convert_to_narrow<N: NarrowUnit, W: WideUnit>(dst: &mut [N], src: &[W]) -> usize {
    let mut written = 0;
    let mut buf = [0; MAX_LEN_WTF8];
    for code in WideCodePoints::new(src) {
        let encoded = encode_wtf8_raw(code, &mut buf);
        let end = written + encoded.len();
        for (slot, &byte) in dst[written..end].iter_mut().zip(encoded) {
            *slot = N::from_byte(byte);
        }
        written = end;
    }
    written
}

/// Converts WTF-8 to potentially ill-formed UTF-16.
///
/// Returns the number of units written, or the first ill-formed sequence.
/// After an error the contents of `dst` are unspecified.
///
/// # Panics
///
/// Panics if `dst` is shorter than [`wide_len`]`(src)`.
pub fn convert_to_wide<W: WideUnit, N: NarrowUnit>(
    dst: &mut [W],
    src: &[N],
) -> Result<usize, InvalidSequence> {
    let mut read = 0;
    let mut written = 0;
    while read < src.len() {
        let (code, len) =
            decode_sequence(&src[read..], true).map_err(|e| e.at(Encoding::Wtf8, read))?;
        read += len;
        if code < 0x10000 {
            dst[written] = W::from_unit(code as u16);
            written += 1;
        } else {
            let [lead, trail] = encode_surrogate_pair(code);
            dst[written] = W::from_unit(lead);
            dst[written + 1] = W::from_unit(trail);
            written += 2;
        }
    }
    Ok(written)
}

/// Converts potentially ill-formed UTF-16 to a newly allocated WTF-8
/// sequence.
pub fn to_narrow_string<N: NarrowUnit, W: WideUnit>(src: &[W]) -> Vec<N> {
    let mut out = vec![N::from_byte(0); narrow_len(src)];
    let written = convert_to_narrow(&mut out, src);
    debug_assert_eq!(written, out.len());
    out
}

/// Converts WTF-8 to a newly allocated, potentially ill-formed UTF-16
/// sequence. Nothing is returned for ill-formed input.
pub fn to_wide_string<W: WideUnit, N: NarrowUnit>(
    src: &[N],
) -> Result<Vec<W>, InvalidSequence> {
    let mut out = vec![W::from_unit(0); wide_len(src)];
    match convert_to_wide(&mut out, src) {
        Ok(written) => {
            debug_assert_eq!(written, out.len());
            Ok(out)
        }
        Err(err) => {
            debug!("rejected {} byte input: {}", src.len(), err);
            Err(err)
        }
    }
}

/// WTF-8 bytes to UTF-16 code units.
#[inline]
pub fn to_utf16(src: &[u8]) -> Result<Vec<u16>, InvalidSequence> {
    to_wide_string(src)
}

/// UTF-16 code units to WTF-8 bytes.
///
/// The result is valid UTF-8 when `src` contains no unpaired surrogates.
#[inline]
pub fn to_wtf8(src: &[u16]) -> Vec<u8> {
    to_narrow_string(src)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_to_narrow() {
        let src: &[u16] = &[0x61, 0xE1, 0xD83D, 0xDE00, 0xDC00];
        let mut dst = [0u8; 16];
        let written = convert_to_narrow(&mut dst, src);
        assert_eq!(written, narrow_len(src));
        assert_eq!(&dst[..written], b"a\xc3\xa1\xf0\x9f\x98\x80\xed\xb0\x80");
    }

    #[test]
    fn test_convert_to_narrow_exact_buffer() {
        let src: &[u16] = &[0xD840, 0xDC00];
        let mut dst = [0u8; 4];
        assert_eq!(convert_to_narrow(&mut dst, src), 4);
        assert_eq!(&dst, b"\xf0\xa0\x80\x80");
    }

    #[test]
    #[should_panic]
    fn test_convert_to_narrow_short_buffer() {
        let mut dst = [0u8; 2];
        convert_to_narrow(&mut dst, &[0x2E81u16]);
    }

    #[test]
    fn test_convert_to_wide() {
        let src = b"a\xc3\xa1\xf0\x9f\x98\x80\xed\xa0\x80";
        let mut dst = [0u16; 8];
        let written = convert_to_wide(&mut dst, src).unwrap();
        assert_eq!(written, wide_len(src));
        assert_eq!(&dst[..written], &[0x61, 0xE1, 0xD83D, 0xDE00, 0xD800]);
    }

    #[test]
    fn test_convert_to_wide_failure() {
        let mut dst = [0u16; 8];
        let err = convert_to_wide(&mut dst, b"ab\xc3").unwrap_err();
        assert_eq!(
            err,
            InvalidSequence::Incomplete {
                encoding: Encoding::Wtf8,
                valid_up_to: 2,
            }
        );
        let err = convert_to_wide(&mut dst, b"a\xf4\x90\x80\x80").unwrap_err();
        assert_eq!(err.valid_up_to(), 1);
        assert_eq!(err.error_len(), Some(1));
    }

    #[test]
    fn test_owned_conversions() {
        assert!(to_utf16(b"").unwrap().is_empty());
        assert_eq!(to_utf16(b"a").unwrap(), [0x61]);
        assert_eq!(to_utf16(b"\xc3\xa1").unwrap(), [0xE1]);
        assert!(to_utf16(b"\xc3").is_err());
        assert!(to_wtf8(&[]).is_empty());
        assert_eq!(to_wtf8(&[0xE1]), b"\xc3\xa1");
    }

    #[test]
    fn test_signed_storage() {
        let narrow: Vec<i8> = to_narrow_string(&[0xE1u16 as i16]);
        assert_eq!(narrow, [0xC3u8 as i8, 0xA1u8 as i8]);
        let wide: Vec<i16> = to_wide_string(&narrow[..]).unwrap();
        assert_eq!(wide, [0xE1]);
    }
}
