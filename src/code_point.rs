//! Code point level helpers shared by the estimator and the transcoder.

use core::iter::FusedIterator;

use crate::unit::WideUnit;

pub(crate) const MAX_LEN_WTF8: usize = 4;

#[inline]
pub(crate) const fn is_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDFFF)
}

#[inline]
pub(crate) const fn is_lead_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

#[inline]
pub(crate) const fn is_trail_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

/// Lead surrogates accepted by [`crate::is_utf16`]. Leads in
/// `0xD800..0xD840` are rejected there even when a trail follows.
#[inline]
pub(crate) const fn is_pairable_lead(unit: u16) -> bool {
    matches!(unit, 0xD840..=0xDBFF)
}

#[inline]
pub(crate) const fn decode_surrogate_pair(lead: u16, trail: u16) -> u32 {
    0x10000 + (((lead - 0xD800) as u32) << 10 | (trail - 0xDC00) as u32)
}

/// Splits a supplementary code point (`0x10000..=0x10FFFF`) into its lead
/// and trail surrogates.
#[inline]
pub(crate) const fn encode_surrogate_pair(code: u32) -> [u16; 2] {
    let offset = code - 0x10000;
    [
        0xD800 | (offset >> 10) as u16,
        0xDC00 | (offset & 0x3FF) as u16,
    ]
}

#[inline]
pub(crate) const fn len_wtf8(code: u32) -> usize {
    match code {
        0x0000..=0x007F => 1,
        0x0080..=0x07FF => 2,
        0x0800..=0xFFFF => 3,
        _ => 4,
    }
}

/// Encodes `code` as generalized UTF-8, surrogates included, and returns
/// the written prefix of `dst`.
#[inline]
pub(crate) fn encode_wtf8_raw(code: u32, dst: &mut [u8; MAX_LEN_WTF8]) -> &[u8] {
    let len = len_wtf8(code);
    match len {
        1 => dst[0] = code as u8,
        2 => {
            dst[0] = 0xC0 | (code >> 6) as u8;
            dst[1] = 0x80 | (code & 0x3F) as u8;
        }
        3 => {
            dst[0] = 0xE0 | (code >> 12) as u8;
            dst[1] = 0x80 | (code >> 6 & 0x3F) as u8;
            dst[2] = 0x80 | (code & 0x3F) as u8;
        }
        _ => {
            dst[0] = 0xF0 | (code >> 18) as u8;
            dst[1] = 0x80 | (code >> 12 & 0x3F) as u8;
            dst[2] = 0x80 | (code >> 6 & 0x3F) as u8;
            dst[3] = 0x80 | (code & 0x3F) as u8;
        }
    }
    &dst[..len]
}

/// Iterates over the code points of potentially ill-formed UTF-16.
///
/// A lead surrogate immediately followed by a trail surrogate is joined into
/// one supplementary code point; any other surrogate is yielded on its own.
#[derive(Clone)]
pub(crate) struct WideCodePoints<'a, W> {
    units: &'a [W],
}

impl<'a, W: WideUnit> WideCodePoints<'a, W> {
    #[inline]
    pub(crate) fn new(units: &'a [W]) -> Self {
        WideCodePoints { units }
    }
}

impl<W: WideUnit> Iterator for WideCodePoints<'_, W> {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        let (&first, rest) = self.units.split_first()?;
        let first = first.to_unit();
        match rest.split_first() {
            Some((&next, tail))
                if is_lead_surrogate(first) && is_trail_surrogate(next.to_unit()) =>
            {
                self.units = tail;
                Some(decode_surrogate_pair(first, next.to_unit()))
            }
            _ => {
                self.units = rest;
                Some(first as u32)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.units.len();
        // every code point takes one or two units
        (len.div_ceil(2), Some(len))
    }
}

impl<W: WideUnit> FusedIterator for WideCodePoints<'_, W> {}
