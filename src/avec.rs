//! Convenience interfaces for common decoding patterns.
//!
//! The functions in this module decode catalogs from data slices, readers and
//! files, publishing to the [`FromEntries`] and [`FromEntry`] traits. Most
//! users will want [`Catalog`](catalog::Catalog), which collects every entry
//! into memory.
//!
//! When only some fields are needed, these traits can be derived. See the
//! [`FromEntries`](macro@FromEntries) and [`FromEntry`](macro@FromEntry)
//! macros for details.

use log::{debug, warn};

use crate::sans::header::Header;

#[cfg(feature = "std")]
pub mod catalog;
#[cfg(feature = "std")]
pub mod file;
#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use file::decode as decode_file;
#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;

/// Derive [`FromEntries`] for a struct collecting a catalog.
///
/// _Requires Cargo feature `derive`._
///
/// # Example
///
/// Add the `header` attribute to an `Option<Header>` struct field to receive
/// the catalog header. Add the `entries` attribute to a `Vec<T>` struct field,
/// where `T` implements [`FromEntry`] and [`Default`], to collect every entry.
///
/// ```
/// #[derive(Debug, Default, FromEntries)]
/// struct Stars {
///     #[header]
///     header: Option<Header>,
///     #[entries]
///     stars: Vec<Star>,
/// }
/// ```
#[cfg(feature = "derive")]
pub use brightstar_derive::FromEntries;

/// Produce entry receivers for a catalog.
///
/// See the [`FromEntries`](macro@FromEntries) derive macro for an automatic
/// implementation of this trait.
pub trait FromEntries {
    /// Receive the catalog header. Called once, before any entry.
    fn add_header(&mut self, _: &Header) {}
    /// Retrieve a receiver for the next entry, if one exists.
    ///
    /// Entries without a receiver are still read, and their values dropped.
    fn add_entry(&mut self) -> Option<&mut dyn FromEntry>;
}

/// Derive [`FromEntry`] for a struct representing a single entry.
///
/// _Requires Cargo feature `derive`._
///
/// # Examples
///
/// To receive a value, add the `field(name)` attribute to an `Option<T>`
/// struct field, where `name` is one of `catalog_number`, `right_ascension`,
/// `declination`, `spectral_type`, `magnitude`, `ra_proper_motion` or
/// `dec_proper_motion`, and `T` is the primitive of the matching
/// [`FromEntry`] method.
///
/// ```
/// #[derive(Debug, Default, FromEntry)]
/// struct Star {
///     #[field(catalog_number)]
///     number: Option<f32>,
///     #[field(right_ascension)]
///     ra: Option<f64>,
///     #[field(declination)]
///     dec: Option<f64>,
/// }
/// ```
///
/// To convert a value as it arrives, supply an accumulator closure taking the
/// struct field and the received value.
///
/// ```
/// #[derive(Debug, Default, FromEntry)]
/// struct Star {
///     #[field(magnitude, |m, x: i16| *m = f32::from(x) / 100.0)]
///     magnitude: f32,
/// }
/// ```
#[cfg(feature = "derive")]
pub use brightstar_derive::FromEntry;

/// Receive field values for an entry.
///
/// Values are published in file order. Catalog numbers and motion components
/// are only published when the header declares them.
///
/// The default implementation of each method ignores received values.
///
/// See the [`FromEntry`](macro@FromEntry) derive macro for an automatic
/// implementation of this trait.
pub trait FromEntry {
    /// Add the catalog number, stored as a float.
    fn add_catalog_number(&mut self, _: f32) {}
    /// Add the right ascension in radians.
    fn add_right_ascension(&mut self, _: f64) {}
    /// Add the declination in radians.
    fn add_declination(&mut self, _: f64) {}
    /// Add the two spectral type characters, as stored.
    fn add_spectral_type(&mut self, _: [u8; 2]) {}
    /// Add the visual magnitude multiplied by 100.
    fn add_magnitude(&mut self, _: i16) {}
    /// Add the proper motion in right ascension, in radians per year.
    fn add_ra_proper_motion(&mut self, _: f32) {}
    /// Add the proper motion in declination, in radians per year.
    fn add_dec_proper_motion(&mut self, _: f32) {}
}

/// Report a freshly decoded header, warning about inconsistencies that do not
/// affect decoding.
fn inspect(header: &Header) {
    debug!(
        "catalog header: {} entries of {} bytes, {:?} coordinates",
        header.entry_count(),
        header.entry_size(),
        header.epoch(),
    );

    if !header.is_epoch_consistent() {
        warn!(
            "entry count ({}) and magnitude count ({}) disagree on the coordinate epoch",
            header.record_count, header.magnitude_count,
        );
    }

    if usize::try_from(header.bytes_per_entry).ok() != Some(header.entry_size()) {
        warn!(
            "header declares {} bytes per entry, but its flags describe {}",
            header.bytes_per_entry,
            header.entry_size(),
        );
    }
}
