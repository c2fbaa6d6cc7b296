//! Slice-based decoder implementation.

use either::Either::{self, Left, Right};
use log::{debug, trace};
use thiserror::Error;

use crate::sans::{
    Decoder,
    endian::Endianness,
    entry::{CatalogNumber, NextEntry, Position},
};

use super::{FromEntries, FromEntry, inspect};

/// Errors occurring while decoding from a slice.
#[derive(Debug, Error)]
pub enum Error {
    /// Unexpectedly reached the end of the slice.
    #[error("Unexpectedly reached the end of the slice.")]
    EndOfSlice,
}

/// Decode a catalog from a slice, publishing to a receiver.
///
/// The receiver may hold a partial catalog if an error is returned.
///
/// This method is also re-exported as `brightstar::avec::decode_slice`.
pub fn decode(r: &[u8], endianness: Endianness, o: &mut impl FromEntries) -> Result<(), Error> {
    let i = &mut 0; // Offset of the next unread byte.

    let (header, mut next) = Decoder::advance(take(r, i)?, endianness);
    inspect(&header);
    o.add_header(&header);

    while let Some(state) = next {
        next = decode_entry(state, r, i, o.add_entry())?;
    }

    if *i < r.len() {
        debug!("ignoring {} bytes after the last entry", r.len() - *i);
    }

    trace!("decoded {} entries from a slice", header.entry_count());

    Ok(())
}

fn decode_entry(
    state: Either<CatalogNumber, Position>,
    r: &[u8],
    i: &mut usize,
    mut o: Option<&mut dyn FromEntry>,
) -> Result<NextEntry, Error> {
    let state = match state {
        Left(state) => {
            let (number, state) = state.advance(take(r, i)?);
            if let Some(o) = o.as_deref_mut() {
                o.add_catalog_number(number);
            }
            state
        }
        Right(state) => state,
    };

    let ((ra, dec), state) = state.advance(take(r, i)?);
    if let Some(o) = o.as_deref_mut() {
        o.add_right_ascension(ra);
        o.add_declination(dec);
    }

    let ((spectral_type, magnitude), successor) = state.advance(take(r, i)?);
    if let Some(o) = o.as_deref_mut() {
        o.add_spectral_type(spectral_type);
        o.add_magnitude(magnitude);
    }

    Ok(match successor {
        Left(state) => {
            let ((ra, dec), next) = state.advance(take(r, i)?);
            if let Some(o) = o.as_deref_mut() {
                o.add_ra_proper_motion(ra);
                o.add_dec_proper_motion(dec);
            }
            next
        }
        Right(next) => next,
    })
}

/// Take an exact number of bytes from an offset in a slice, advancing the offset.
fn take<const N: usize>(r: &[u8], i: &mut usize) -> Result<[u8; N], Error> {
    let s = *i;
    let e = s.checked_add(N).ok_or(Error::EndOfSlice)?;

    let bytes = r.get(s..e).ok_or(Error::EndOfSlice)?;
    *i = e;

    bytes.try_into().map_err(|_| Error::EndOfSlice)
}
