//! Owned, in-memory catalogs.
//!
//! _Requires Cargo feature `std`._

use std::{io::Read, path::Path, vec::Vec};

use crate::sans::{endian::Endianness, header::Header};

use super::{FromEntries, FromEntry, file, reader, slice};

extern crate std;

/// Upper bound on entries reserved ahead of decoding, so that a corrupt
/// header cannot trigger a huge allocation.
const MAX_RESERVED_ENTRIES: usize = 1 << 14;

/// A fully decoded catalog.
///
/// Constructed only when every entry announced by the header was decoded, so
/// `entries.len()` always equals [`Header::entry_count`].
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub header: Header,
    pub entries: Vec<Entry>,
}

/// A single star.
///
/// Fields that the header declares absent hold zero.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Entry {
    /// Catalog number, stored as a float.
    pub catalog_number: f32,
    /// Right ascension in radians.
    pub right_ascension: f64,
    /// Declination in radians.
    pub declination: f64,
    /// Spectral type, as two raw characters.
    pub spectral_type: [u8; 2],
    /// Visual magnitude multiplied by 100.
    pub scaled_magnitude: i16,
    /// Proper motion in right ascension, in radians per year.
    pub ra_proper_motion: f32,
    /// Proper motion in declination, in radians per year.
    pub dec_proper_motion: f32,
}

impl Entry {
    /// Visual magnitude.
    pub fn magnitude(&self) -> f32 {
        f32::from(self.scaled_magnitude) / 100.0
    }

    /// Spectral type as text, if it is valid UTF-8. Trailing spaces and NULs
    /// are removed.
    pub fn spectral_type_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.spectral_type)
            .ok()
            .map(|s| s.trim_end_matches([' ', '\0']))
    }

    /// Catalog number as an integer, if the entry carries a whole, positive
    /// number.
    pub fn hr_number(&self) -> Option<u32> {
        let n = self.catalog_number;
        (n >= 1.0 && n <= u32::MAX as f32 && n.fract() == 0.0).then_some(n as u32)
    }
}

impl FromEntry for Entry {
    fn add_catalog_number(&mut self, value: f32) {
        self.catalog_number = value;
    }
    fn add_right_ascension(&mut self, value: f64) {
        self.right_ascension = value;
    }
    fn add_declination(&mut self, value: f64) {
        self.declination = value;
    }
    fn add_spectral_type(&mut self, value: [u8; 2]) {
        self.spectral_type = value;
    }
    fn add_magnitude(&mut self, value: i16) {
        self.scaled_magnitude = value;
    }
    fn add_ra_proper_motion(&mut self, value: f32) {
        self.ra_proper_motion = value;
    }
    fn add_dec_proper_motion(&mut self, value: f32) {
        self.dec_proper_motion = value;
    }
}

/// Receiver accumulating a catalog, which is only released on success.
#[derive(Default)]
struct Builder(Header, Vec<Entry>);

impl FromEntries for Builder {
    fn add_header(&mut self, header: &Header) {
        self.0 = *header;
        let reserve = usize::try_from(header.entry_count()).unwrap_or(usize::MAX);
        self.1.reserve(reserve.min(MAX_RESERVED_ENTRIES));
    }

    fn add_entry(&mut self) -> Option<&mut dyn FromEntry> {
        self.1.push(Entry::default());
        self.1.last_mut().map(|e| e as _)
    }
}

impl Builder {
    fn finish(self) -> Catalog {
        Catalog {
            header: self.0,
            entries: self.1,
        }
    }
}

impl Catalog {
    /// Decode a catalog from a slice.
    pub fn from_slice(r: &[u8], endianness: Endianness) -> Result<Self, slice::Error> {
        let mut builder = Builder::default();
        slice::decode(r, endianness, &mut builder)?;
        Ok(builder.finish())
    }

    /// Decode a catalog from a reader.
    pub fn from_reader(r: &mut impl Read, endianness: Endianness) -> Result<Self, reader::Error> {
        let mut builder = Builder::default();
        reader::decode(r, endianness, &mut builder)?;
        Ok(builder.finish())
    }

    /// Decode a catalog from a file.
    pub fn open(path: impl AsRef<Path>, endianness: Endianness) -> Result<Self, reader::Error> {
        let mut builder = Builder::default();
        file::decode(path, endianness, &mut builder)?;
        Ok(builder.finish())
    }

    /// Decode the distributed catalog file matching the host byte order from
    /// a directory.
    ///
    /// See [`file::bundled_name`] for the expected file names.
    pub fn open_native_in(dir: impl AsRef<Path>) -> Result<Self, reader::Error> {
        Self::open(file::native_path(dir), Endianness::NATIVE)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for a catalog number, counting from the header's first number.
    ///
    /// Assumes entries are stored in sequence, as in the Bright Star Catalog.
    pub fn by_number(&self, number: i32) -> Option<&Entry> {
        let index = number.checked_sub(self.header.first_number)?;
        self.entries.get(usize::try_from(index).ok()?)
    }
}
