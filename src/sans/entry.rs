//! States processing catalog entries.

use either::Either::{self, Left, Right};
use zerocopy::FromBytes;

use super::{
    endian::{Endianness, FromEndianBytes},
    header::Header,
};

/// The state following a complete entry (or the header).
///
/// `None` once every entry announced by the header has been decoded.
/// Otherwise, the next entry begins with a [`CatalogNumber`] if the header
/// declares catalog numbers, and with a [`Position`] if not.
pub type NextEntry = Option<Either<CatalogNumber, Position>>;

/// Entry layout fixed by the header, carried through every entry state.
#[derive(Debug)]
pub(super) struct Layout {
    endianness: Endianness,
    has_catalog_number: bool,
    has_proper_motion: bool,
    entries_remaining: u32,
}

impl Layout {
    pub(super) fn new(header: &Header, endianness: Endianness) -> Self {
        Self {
            endianness,
            has_catalog_number: header.has_catalog_numbers(),
            has_proper_motion: header.has_proper_motion(),
            entries_remaining: header.entry_count(),
        }
    }

    pub(super) fn next_entry(self) -> NextEntry {
        if self.entries_remaining == 0 {
            return None;
        }

        let layout = Self {
            entries_remaining: self.entries_remaining - 1,
            ..self
        };

        Some(if layout.has_catalog_number {
            Left(CatalogNumber(layout))
        } else {
            Right(Position(layout))
        })
    }
}

/// State token to decode the catalog number of an entry.
#[derive(Debug)]
pub struct CatalogNumber(Layout);

impl CatalogNumber {
    /// Transition to another state by decoding a catalog number.
    ///
    /// Returns the catalog number, which is stored as a float, and the
    /// successor state token.
    pub fn advance(self, r: [u8; 4]) -> (f32, Position) {
        let number = f32::from_endian_bytes(r, self.0.endianness);
        (number, Position(self.0))
    }
}

/// State token to decode the coordinates of an entry.
#[derive(Debug)]
pub struct Position(Layout);

impl Position {
    /// Transition to another state by decoding right ascension and
    /// declination.
    ///
    /// Returns both coordinates in radians, and the successor state token.
    pub fn advance(self, r: [u8; 16]) -> ((f64, f64), Classification) {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct RawPosition {
            right_ascension: [u8; 8],
            declination: [u8; 8],
        }

        let RawPosition {
            right_ascension,
            declination,
        } = zerocopy::transmute!(r);

        let endianness = self.0.endianness;
        let coordinates = (
            f64::from_endian_bytes(right_ascension, endianness),
            f64::from_endian_bytes(declination, endianness),
        );

        (coordinates, Classification(self.0))
    }
}

/// State token to decode the spectral type and magnitude of an entry.
#[derive(Debug)]
pub struct Classification(Layout);

impl Classification {
    /// Transition to another state by decoding the spectral type and the
    /// visual magnitude.
    ///
    /// Returns the two spectral type characters as stored, the magnitude
    /// multiplied by 100, and a successor state.
    pub fn advance(self, r: [u8; 4]) -> (([u8; 2], i16), Either<ProperMotion, NextEntry>) {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct RawClassification {
            spectral_type: [u8; 2],
            magnitude: [u8; 2],
        }

        let RawClassification {
            spectral_type,
            magnitude,
        } = zerocopy::transmute!(r);

        let magnitude = i16::from_endian_bytes(magnitude, self.0.endianness);

        let successor = if self.0.has_proper_motion {
            Left(ProperMotion(self.0))
        } else {
            Right(self.0.next_entry())
        };

        ((spectral_type, magnitude), successor)
    }
}

/// State token to decode the motion of an entry.
#[derive(Debug)]
pub struct ProperMotion(Layout);

impl ProperMotion {
    /// Transition to another state by decoding the two motion components.
    ///
    /// Returns the motion in right ascension and declination (radians per
    /// year, unless the header declares radial velocity), and the successor
    /// state.
    pub fn advance(self, r: [u8; 8]) -> ((f32, f32), NextEntry) {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct RawProperMotion {
            right_ascension: [u8; 4],
            declination: [u8; 4],
        }

        let RawProperMotion {
            right_ascension,
            declination,
        } = zerocopy::transmute!(r);

        let endianness = self.0.endianness;
        let motion = (
            f32::from_endian_bytes(right_ascension, endianness),
            f32::from_endian_bytes(declination, endianness),
        );

        (motion, self.0.next_entry())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(has_catalog_number: bool, has_proper_motion: bool, entries: u32) -> Layout {
        Layout {
            endianness: Endianness::Big,
            has_catalog_number,
            has_proper_motion,
            entries_remaining: entries,
        }
    }

    #[test]
    fn visits_every_field_of_a_full_entry() {
        let Some(Left(state)) = layout(true, true, 1).next_entry() else {
            panic!("expected a catalog number");
        };

        let (number, state) = state.advance(1.0_f32.to_be_bytes());
        assert_eq!(number, 1.0);

        let mut r = [0; 16];
        r[..8].copy_from_slice(&0.0225_f64.to_be_bytes());
        r[8..].copy_from_slice(&0.7893_f64.to_be_bytes());
        let ((ra, dec), state) = state.advance(r);
        assert_eq!((ra, dec), (0.0225, 0.7893));

        let ((spectral_type, magnitude), successor) = state.advance([b'A', b'1', 0x02, 0x9E]);
        assert_eq!(&spectral_type, b"A1");
        assert_eq!(magnitude, 670);

        let Left(state) = successor else {
            panic!("expected proper motion");
        };

        let mut r = [0; 8];
        r[..4].copy_from_slice(&(-0.5e-7_f32).to_be_bytes());
        r[4..].copy_from_slice(&1.5e-7_f32.to_be_bytes());
        let ((ra_pm, dec_pm), successor) = state.advance(r);
        assert_eq!((ra_pm, dec_pm), (-0.5e-7, 1.5e-7));
        assert!(successor.is_none());
    }

    #[test]
    fn skips_absent_fields() {
        let Some(Right(state)) = layout(false, false, 2).next_entry() else {
            panic!("expected a position");
        };

        let (_, state) = state.advance([0; 16]);
        let (_, successor) = state.advance([b'B', b'9', 0x01, 0xC2]);

        assert!(matches!(successor, Right(Some(Right(_)))));
    }

    #[test]
    fn counts_down_entries() {
        let mut next = layout(false, false, 3).next_entry();
        let mut visited = 0;

        while let Some(Right(state)) = next {
            let (_, state) = state.advance([0; 16]);
            let (_, successor) = state.advance([0; 4]);
            let Right(successor) = successor else {
                panic!("unexpected proper motion");
            };
            next = successor;
            visited += 1;
        }

        assert_eq!(visited, 3);
    }
}
