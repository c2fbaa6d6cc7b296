//! State processing the catalog header.

use zerocopy::FromBytes;

use super::{
    endian::{Endianness, FromEndianBytes},
    entry::{Layout, NextEntry},
};

/// The 28-byte header of a catalog.
///
/// Values are passed through as stored, without validation. Callers that need
/// to verify a particular catalog (for example, that the Bright Star Catalog
/// announces 9,110 entries) should do so themselves.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
    /// Subtracted from a catalog number to get its sequence number. Usually 0.
    pub origin_offset: i32,
    /// Catalog number of the first entry. Usually 1.
    pub first_number: i32,
    /// Number of entries, negated when coordinates are J2000 instead of
    /// B1950.
    pub record_count: i32,
    /// Presence of catalog numbers. See [`Header::numbering`].
    pub id_mode: i32,
    /// Presence of motion data. See [`Header::motion`].
    pub motion_mode: i32,
    /// Number of magnitude columns (0 to 10), negated for J2000 coordinates.
    pub magnitude_count: i32,
    /// Declared number of bytes per entry. Usually 32.
    ///
    /// The decoder derives the entry layout from the mode flags, and never
    /// from this value.
    pub bytes_per_entry: i32,
}

/// Reference frame of the catalog's coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Epoch {
    B1950,
    J2000,
}

/// Source of the catalog number of each entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Numbering {
    /// Entries carry no catalog numbers.
    Absent,
    /// Entries carry catalog numbers from this catalog.
    Catalog,
    /// Entries carry catalog numbers from another source.
    External,
    /// An undocumented mode. Entries carry no catalog numbers.
    Unknown(i32),
}

/// Kind of motion data carried by each entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    /// Entries carry no motion data.
    Absent,
    /// Entries carry proper motion in right ascension and declination.
    ProperMotion,
    /// Entries carry radial velocity in the proper motion fields.
    RadialVelocity,
    /// An undocumented mode. Entries carry no motion data.
    Unknown(i32),
}

impl Header {
    /// Size of an encoded header in bytes.
    pub const SIZE: usize = 28;

    /// Number of entries following the header.
    pub fn entry_count(&self) -> u32 {
        self.record_count.unsigned_abs()
    }

    /// Reference frame of the catalog's coordinates, as given by the sign of
    /// [`Header::record_count`].
    ///
    /// The sign of [`Header::magnitude_count`] is documented inconsistently
    /// and is not consulted.
    pub fn epoch(&self) -> Epoch {
        if self.record_count < 0 {
            Epoch::J2000
        } else {
            Epoch::B1950
        }
    }

    /// Whether the sign conventions of [`Header::record_count`] and
    /// [`Header::magnitude_count`] agree.
    pub fn is_epoch_consistent(&self) -> bool {
        (self.record_count < 0) == (self.magnitude_count < 0)
    }

    pub fn numbering(&self) -> Numbering {
        match self.id_mode {
            0 => Numbering::Absent,
            1 => Numbering::Catalog,
            2 => Numbering::External,
            n => Numbering::Unknown(n),
        }
    }

    pub fn motion(&self) -> Motion {
        match self.motion_mode {
            0 => Motion::Absent,
            1 => Motion::ProperMotion,
            2 => Motion::RadialVelocity,
            n => Motion::Unknown(n),
        }
    }

    /// Whether each entry begins with a catalog number.
    pub fn has_catalog_numbers(&self) -> bool {
        matches!(self.numbering(), Numbering::Catalog | Numbering::External)
    }

    /// Whether each entry ends with two motion components.
    pub fn has_proper_motion(&self) -> bool {
        matches!(self.motion(), Motion::ProperMotion | Motion::RadialVelocity)
    }

    /// Number of magnitude columns, ignoring the epoch sign.
    ///
    /// Only the first magnitude is stored in an entry; further columns are
    /// not part of the decoded layout.
    pub fn magnitude_columns(&self) -> u32 {
        self.magnitude_count.unsigned_abs()
    }

    /// Number of bytes the decoder consumes for each entry.
    pub fn entry_size(&self) -> usize {
        let number = if self.has_catalog_numbers() { 4 } else { 0 };
        let motion = if self.has_proper_motion() { 8 } else { 0 };
        number + 16 + 4 + motion
    }

    /// Number of bytes the decoder consumes for the whole catalog.
    pub fn catalog_size(&self) -> u64 {
        Self::SIZE as u64 + self.entry_count() as u64 * self.entry_size() as u64
    }
}

/// State token to decode the catalog header.
#[derive(Debug)]
pub struct CatalogHeader;

impl CatalogHeader {
    /// Transition to another state by decoding the catalog header, stored in
    /// the given byte order.
    ///
    /// Returns the header, and the state for the first entry (or `None` for
    /// an empty catalog).
    pub fn advance(r: [u8; Header::SIZE], endianness: Endianness) -> (Header, NextEntry) {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct RawHeader {
            star0: [u8; 4],
            star1: [u8; 4],
            starn: [u8; 4],
            stnum: [u8; 4],
            mprop: [u8; 4],
            nmag: [u8; 4],
            nbent: [u8; 4],
        }

        let RawHeader {
            star0,
            star1,
            starn,
            stnum,
            mprop,
            nmag,
            nbent,
        } = zerocopy::transmute!(r);

        let value = |r: [u8; 4]| i32::from_endian_bytes(r, endianness);

        let header = Header {
            origin_offset: value(star0),
            first_number: value(star1),
            record_count: value(starn),
            id_mode: value(stnum),
            motion_mode: value(mprop),
            magnitude_count: value(nmag),
            bytes_per_entry: value(nbent),
        };

        let successor = Layout::new(&header, endianness).next_entry();

        (header, successor)
    }
}
