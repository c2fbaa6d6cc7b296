#![allow(dead_code)]
#![cfg(all(feature = "derive", feature = "std"))]

mod fixture;

use brightstar::{
    Endianness, Header,
    avec::{FromEntries, FromEntry},
};
use fixture::{reference_catalog, reference_stars, to_radians};

#[derive(Debug, Default, FromEntries)]
struct StarSet {
    #[header]
    header: Option<Header>,
    #[entries]
    stars: Vec<Star>,
}

#[derive(Debug, Default, FromEntry)]
struct Star {
    #[field(catalog_number, |n, x: f32| *n = Some(x as u32))]
    hr: Option<u32>,
    #[field(right_ascension)]
    ra: Option<f64>,
    #[field(declination)]
    dec: Option<f64>,
    #[field(spectral_type, |s, c: [u8; 2]| s.extend_from_slice(&c))]
    spectral_type: Vec<u8>,
    #[field(magnitude, |m, x: i16| *m = f32::from(x) / 100.0)]
    magnitude: f32,
    #[field(ra_proper_motion)]
    ra_pm: Option<f32>,
    untouched: Option<u8>,
}

impl Star {
    fn spectral_type(&self) -> Option<&str> {
        std::str::from_utf8(&self.spectral_type).ok()
    }
}

#[test]
fn decode_slice_into_derived() {
    let data = reference_catalog(Endianness::Little);
    let mut set = StarSet::default();
    brightstar::avec::decode_slice(&data, Endianness::Little, &mut set).unwrap();

    let header = set.header.unwrap();
    assert_eq!(header.entry_count(), 11);
    assert_eq!(set.stars.len(), 11);

    for (star, expected) in set.stars.iter().zip(reference_stars()) {
        assert_eq!(star.hr, Some(expected.hr));
        assert_eq!(star.ra, Some(to_radians(expected.ra_deg)));
        assert_eq!(star.dec, Some(to_radians(expected.dec_deg)));
        assert_eq!(star.spectral_type(), Some(expected.spectral_type.as_str()));
        assert!((star.magnitude - expected.magnitude).abs() < 1e-3);
        assert_eq!(star.ra_pm, Some(expected.ra_pm));
        assert_eq!(star.untouched, None);
    }
}

#[test]
fn decode_reader_into_derived() {
    let data = reference_catalog(Endianness::Big);
    let mut set = StarSet::default();
    brightstar::avec::decode_reader(&mut data.as_slice(), Endianness::Big, &mut set).unwrap();

    assert_eq!(set.stars.len(), 11);
    assert_eq!(set.stars[0].spectral_type(), Some("A1"));
    assert_eq!(set.stars[0].magnitude, 6.7);
}

#[derive(Debug, Default, FromEntries)]
struct HeaderOnly {
    #[header]
    header: Option<Header>,
}

#[test]
fn decode_header_only() {
    let data = reference_catalog(Endianness::Big);
    let mut set = HeaderOnly::default();
    brightstar::avec::decode_slice(&data, Endianness::Big, &mut set).unwrap();

    assert_eq!(set.header.map(|h| h.record_count), Some(-11));
}
