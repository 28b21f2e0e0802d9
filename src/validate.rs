//! Well-formedness checks for UTF-8, WTF-8 and UTF-16.
//!
//! The 8-bit checks and the widening transcoder decode sequences with the
//! same routine, so WTF-8 input is converted exactly when [`is_wtf8`]
//! accepts it.

use crate::code_point::{is_pairable_lead, is_surrogate, is_trail_surrogate};
use crate::error::{Encoding, InvalidSequence};
use crate::unit::{NarrowUnit, WideUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SequenceError {
    /// The first `n` units of the sequence can never be completed.
    Malformed(u8),
    Incomplete,
}

impl SequenceError {
    #[inline]
    pub(crate) fn at(self, encoding: Encoding, valid_up_to: usize) -> InvalidSequence {
        match self {
            Self::Malformed(len) => InvalidSequence::Malformed {
                encoding,
                valid_up_to,
                len,
            },
            Self::Incomplete => InvalidSequence::Incomplete {
                encoding,
                valid_up_to,
            },
        }
    }
}

#[inline]
const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Decodes the sequence at the start of `src`, returning the code point and
/// the number of bytes it occupies.
///
/// The second byte decides overlong forms (`E0`, `F0`), code points past
/// U+10FFFF (`F4`) and encoded surrogates (`ED`); the latter are accepted
/// only when `allow_surrogates` is set.
///
/// `src` must not be empty.
#[inline]
pub(crate) fn decode_sequence<N: NarrowUnit>(
    src: &[N],
    allow_surrogates: bool,
) -> Result<(u32, usize), SequenceError> {
    let lead = src[0].to_byte();
    let width = match lead {
        0x00..=0x7F => return Ok((lead as u32, 1)),
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return Err(SequenceError::Malformed(1)),
    };

    let second = src.get(1).ok_or(SequenceError::Incomplete)?.to_byte();
    let second_ok = match (lead, second) {
        (0xE0, 0xA0..=0xBF) | (0xF0, 0x90..=0xBF) | (0xF4, 0x80..=0x8F) => true,
        (0xED, 0xA0..=0xBF) => allow_surrogates,
        (0xE0 | 0xF0 | 0xF4, _) => false,
        (_, byte) => is_continuation(byte),
    };
    if !second_ok {
        return Err(SequenceError::Malformed(1));
    }

    let mut code = (lead & (0x7F >> width)) as u32;
    code = code << 6 | (second & 0x3F) as u32;
    for i in 2..width {
        let byte = src.get(i).ok_or(SequenceError::Incomplete)?.to_byte();
        if !is_continuation(byte) {
            return Err(SequenceError::Malformed(i as u8));
        }
        code = code << 6 | (byte & 0x3F) as u32;
    }
    Ok((code, width))
}

fn run_utf8_validation<N: NarrowUnit>(
    src: &[N],
    encoding: Encoding,
) -> Result<(), InvalidSequence> {
    let allow_surrogates = encoding == Encoding::Wtf8;
    let mut pos = 0;
    while pos < src.len() {
        if src[pos].to_byte() < 0x80 {
            pos += 1;
            continue;
        }
        match decode_sequence(&src[pos..], allow_surrogates) {
            Ok((_, len)) => pos += len,
            Err(e) => return Err(e.at(encoding, pos)),
        }
    }
    Ok(())
}

/// Checks that `src` is well-formed WTF-8: UTF-8 that may additionally
/// contain the three-byte encoding of any surrogate code point.
pub fn check_wtf8<N: NarrowUnit>(src: &[N]) -> Result<(), InvalidSequence> {
    run_utf8_validation(src, Encoding::Wtf8)
}

/// Checks that `src` is well-formed UTF-8. Encoded surrogates are rejected.
pub fn check_utf8<N: NarrowUnit>(src: &[N]) -> Result<(), InvalidSequence> {
    run_utf8_validation(src, Encoding::Utf8)
}

/// Checks that every surrogate in `src` is part of a lead/trail pair.
///
/// Only `0xD840..=0xDBFF` counts as a lead surrogate here. A unit in
/// `0xD800..0xD840` is rejected even when a trail surrogate follows it.
pub fn check_utf16<W: WideUnit>(src: &[W]) -> Result<(), InvalidSequence> {
    let malformed = |valid_up_to| InvalidSequence::Malformed {
        encoding: Encoding::Utf16,
        valid_up_to,
        len: 1,
    };

    let mut expect_trail = false;
    for (index, unit) in src.iter().map(|u| u.to_unit()).enumerate() {
        if expect_trail {
            if !is_trail_surrogate(unit) {
                return Err(malformed(index - 1));
            }
            expect_trail = false;
        } else if is_surrogate(unit) {
            if !is_pairable_lead(unit) {
                return Err(malformed(index));
            }
            expect_trail = true;
        }
    }

    if expect_trail {
        Err(InvalidSequence::Incomplete {
            encoding: Encoding::Utf16,
            valid_up_to: src.len() - 1,
        })
    } else {
        Ok(())
    }
}

#[inline]
pub fn is_wtf8<N: NarrowUnit>(src: &[N]) -> bool {
    check_wtf8(src).is_ok()
}

#[inline]
pub fn is_utf8<N: NarrowUnit>(src: &[N]) -> bool {
    check_utf8(src).is_ok()
}

#[inline]
pub fn is_utf16<W: WideUnit>(src: &[W]) -> bool {
    check_utf16(src).is_ok()
}
