//! File-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use log::debug;

use crate::sans::endian::Endianness;

use super::{FromEntries, reader, reader::Error};

extern crate std;

/// Decode a catalog from a file, publishing to a receiver.
///
/// The file is closed before returning, whether or not decoding succeeded.
///
/// This method is also re-exported as `brightstar::avec::decode_file`.
///
/// _Requires Cargo feature `std`._
pub fn decode(
    path: impl AsRef<Path>,
    endianness: Endianness,
    o: &mut impl FromEntries,
) -> Result<(), Error> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("decoding {:?} catalog {}", endianness, path.display());

    reader::decode(&mut BufReader::new(file), endianness, o)
}

/// Name of the distributed catalog file stored in a given byte order.
pub fn bundled_name(endianness: Endianness) -> &'static str {
    match endianness {
        Endianness::Little => "bsc5_binary_little_endian.bin",
        Endianness::Big => "bsc5_binary_big_endian.bin",
    }
}

/// Path of the distributed catalog file in a directory that suits the host
/// byte order.
pub fn native_path(dir: impl AsRef<Path>) -> PathBuf {
    dir.as_ref().join(bundled_name(Endianness::NATIVE))
}
