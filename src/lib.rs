#![no_std]

//! A byte-order aware decoder for the Yale Bright Star Catalog binary format.
//!
//! A catalog is a 28-byte header followed by fixed-size star entries. The
//! header decides which optional fields (catalog numbers, proper motion) each
//! entry carries. Catalogs are distributed in both byte orders, which is
//! always given explicitly when decoding and never taken from the host.
//!
//! Most users should begin with [`Catalog`](avec::catalog::Catalog) or the
//! functions and derive macros in the [`avec`] module. If these prove
//! insufficient, consider implementing a decoder as described in the
//! [`sans`] module.
//!
//! ```
//! use brightstar::{Endianness, avec::catalog::Catalog};
//!
//! let catalog = Catalog::open("bsc5_binary_little_endian.bin", Endianness::Little)?;
//! let first = &catalog.entries[0];
//! println!("{:?} {}", first.spectral_type_str(), first.magnitude());
//! ```
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `derive`: enable derive macros (default).
//! - `std`: enable reader-based and file-based decoders, and owned catalogs
//!   (default).

pub mod avec;
pub mod sans;

pub use sans::endian::Endianness;
pub use sans::header::Header;
