//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::{io::Read, path::PathBuf};

use either::Either::{self, Left, Right};
use log::trace;
use thiserror::Error;

use crate::sans::{
    Decoder,
    endian::Endianness,
    entry::{CatalogNumber, NextEntry, Position},
};

use super::{FromEntries, FromEntry, inspect};

extern crate std;

/// Errors occurring while decoding from a reader or a file.
#[derive(Debug, Error)]
pub enum Error {
    /// The catalog file could not be opened.
    #[error("Could not open {}: {source}.", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The reader ended before the catalog was complete.
    #[error("Unexpectedly reached the end of the catalog.")]
    Truncated,
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(std::io::Error),
    /// A read of zero bytes was requested.
    #[error("Requested an empty read.")]
    EmptyRead,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof => Self::Truncated,
            _ => Self::Io(err),
        }
    }
}

/// Decode a catalog from a reader, publishing to a receiver.
///
/// Reads exactly the bytes described by the header, leaving any trailing data
/// unread. The receiver may hold a partial catalog if an error is returned.
///
/// This method is also re-exported as `brightstar::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(
    r: &mut impl Read,
    endianness: Endianness,
    o: &mut impl FromEntries,
) -> Result<(), Error> {
    let (header, mut next) = Decoder::advance(take(r)?, endianness);
    inspect(&header);
    o.add_header(&header);

    while let Some(state) = next {
        next = decode_entry(state, r, o.add_entry())?;
    }

    trace!("decoded {} entries from a reader", header.entry_count());

    Ok(())
}

fn decode_entry(
    state: Either<CatalogNumber, Position>,
    r: &mut impl Read,
    mut o: Option<&mut dyn FromEntry>,
) -> Result<NextEntry, Error> {
    let state = match state {
        Left(state) => {
            let (number, state) = state.advance(take(r)?);
            if let Some(o) = o.as_deref_mut() {
                o.add_catalog_number(number);
            }
            state
        }
        Right(state) => state,
    };

    let ((ra, dec), state) = state.advance(take(r)?);
    if let Some(o) = o.as_deref_mut() {
        o.add_right_ascension(ra);
        o.add_declination(dec);
    }

    let ((spectral_type, magnitude), successor) = state.advance(take(r)?);
    if let Some(o) = o.as_deref_mut() {
        o.add_spectral_type(spectral_type);
        o.add_magnitude(magnitude);
    }

    Ok(match successor {
        Left(state) => {
            let ((ra, dec), next) = state.advance(take(r)?);
            if let Some(o) = o.as_deref_mut() {
                o.add_ra_proper_motion(ra);
                o.add_dec_proper_motion(dec);
            }
            next
        }
        Right(next) => next,
    })
}

/// Fill a buffer with the next bytes from a reader.
///
/// Fails with [`Error::Truncated`] if the reader ends first, and with
/// [`Error::EmptyRead`] if the buffer is empty.
pub fn read_into(r: &mut impl Read, buf: &mut [u8]) -> Result<(), Error> {
    if buf.is_empty() {
        Err(Error::EmptyRead)?;
    }

    r.read_exact(buf)?;

    Ok(())
}

/// Take an exact number of bytes from a reader.
fn take<const N: usize>(r: &mut impl Read) -> Result<[u8; N], Error> {
    let mut buf = [0; N];
    read_into(r, &mut buf)?;
    Ok(buf)
}
