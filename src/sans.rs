//! Internal finite-state machine for implementing decoders.
//!
//! This module is intended for applications that need fine control over how
//! bytes reach the decoder (for instance, reading from a memory-mapped region
//! or a custom transport). See [`crate::avec`] for implementations covering
//! common decoding patterns.
//!
//! # Architecture
//!
//! Every step of the catalog layout is represented by a non-copy state token.
//! Once enough bytes are ready, transition to another state by calling the
//! token's `advance` method with exactly that many bytes. This will return a
//! successor state token, along with any extracted data.
//!
//! A catalog is decoded as follows:
//!
//! 1. [`Decoder`] consumes the 28-byte header and yields a [`Header`], along
//!    with the state for the first entry.
//! 2. Each entry optionally begins with a [`CatalogNumber`], then always
//!    continues through [`Position`] and [`Classification`], and optionally
//!    ends with [`ProperMotion`].
//! 3. The state following an entry is a [`NextEntry`]. When it is `None`,
//!    every entry announced by the header has been decoded.
//!
//! Which optional states are visited is decided once, by the header, and
//! carried through the tokens. Only the initial state can be constructed, so
//! an implementation cannot skip or reorder fields.
//!
//! Some areas of the decoding process are not represented in the
//! finite-state machine and must be carefully written:
//!
//! - Reading bytes in order from the start of the catalog, without gaps.
//!
//! - Failing when the source ends before a state has been advanced. The
//!   machine never sees a short read.
//!
//! [`Header`]: header::Header
//! [`CatalogNumber`]: entry::CatalogNumber
//! [`Position`]: entry::Position
//! [`Classification`]: entry::Classification
//! [`ProperMotion`]: entry::ProperMotion
//! [`NextEntry`]: entry::NextEntry

pub mod endian;
pub mod entry;
pub mod header;

/// Entrypoint to the finite-state machine.
pub type Decoder = header::CatalogHeader;
