//! Reference catalog encoded in memory for decoder tests.

#![allow(dead_code)]

use std::{f64::consts::PI, vec::Vec};

use brightstar::{Endianness, Header, avec::catalog::Entry};
use csv::ReaderBuilder;

pub const REFERENCE: &str = "fixtures/reference.csv";

/// Expected values for one reference star, in the units they are published in.
#[derive(Debug)]
pub struct Star {
    pub hr: u32,
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub spectral_type: String,
    pub magnitude: f32,
    pub ra_pm: f32,
    pub dec_pm: f32,
}

pub fn reference_stars() -> Vec<Star> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_path(REFERENCE)
        .unwrap();

    reader
        .records()
        .map(|r| {
            let r = r.unwrap();
            Star {
                hr: r[0].parse().unwrap(),
                ra_deg: r[1].parse().unwrap(),
                dec_deg: r[2].parse().unwrap(),
                spectral_type: r[3].to_string(),
                magnitude: r[4].parse().unwrap(),
                ra_pm: r[5].parse().unwrap(),
                dec_pm: r[6].parse().unwrap(),
            }
        })
        .collect()
}

pub fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// A J2000 header announcing `count` entries with catalog numbers and proper
/// motion, as in the Bright Star Catalog.
pub fn reference_header(count: usize) -> Header {
    Header {
        origin_offset: 0,
        first_number: 1,
        record_count: -(count as i32),
        id_mode: 1,
        motion_mode: 1,
        magnitude_count: -1,
        bytes_per_entry: 32,
    }
}

pub fn reference_entries() -> Vec<Entry> {
    reference_stars()
        .iter()
        .map(|s| {
            let t = s.spectral_type.as_bytes();
            Entry {
                catalog_number: s.hr as f32,
                right_ascension: to_radians(s.ra_deg),
                declination: to_radians(s.dec_deg),
                spectral_type: [t[0], t[1]],
                scaled_magnitude: (s.magnitude * 100.0).round() as i16,
                ra_proper_motion: s.ra_pm,
                dec_proper_motion: s.dec_pm,
            }
        })
        .collect()
}

/// The reference catalog, stored in the given byte order.
pub fn reference_catalog(endianness: Endianness) -> Vec<u8> {
    let entries = reference_entries();
    encode(&reference_header(entries.len()), &entries, endianness)
}

/// Encode a catalog, writing only the optional fields the header declares.
pub fn encode(header: &Header, entries: &[Entry], endianness: Endianness) -> Vec<u8> {
    fn order<const N: usize>(e: Endianness, le: [u8; N], be: [u8; N]) -> [u8; N] {
        match e {
            Endianness::Little => le,
            Endianness::Big => be,
        }
    }

    macro_rules! put {
        ($out:expr, $value:expr) => {
            $out.extend_from_slice(&order(endianness, $value.to_le_bytes(), $value.to_be_bytes()))
        };
    }

    let mut out = Vec::new();

    for field in [
        header.origin_offset,
        header.first_number,
        header.record_count,
        header.id_mode,
        header.motion_mode,
        header.magnitude_count,
        header.bytes_per_entry,
    ] {
        put!(out, field);
    }

    for entry in entries {
        if header.has_catalog_numbers() {
            put!(out, entry.catalog_number);
        }
        put!(out, entry.right_ascension);
        put!(out, entry.declination);
        out.extend_from_slice(&entry.spectral_type);
        put!(out, entry.scaled_magnitude);
        if header.has_proper_motion() {
            put!(out, entry.ra_proper_motion);
            put!(out, entry.dec_proper_motion);
        }
    }

    out
}
