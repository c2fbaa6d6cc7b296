//! Byte order of catalog data.

/// The byte order of the multi-byte values in a catalog.
///
/// Catalogs are distributed in both orders. The order of a file is unrelated
/// to the order of the host decoding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// The byte order of the host.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::Little;
    /// The byte order of the host.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::Big;
}

/// Conversion from the bytes of a value stored in a given byte order.
pub trait FromEndianBytes: Sized {
    /// The data storing this value.
    type Bytes;

    /// Convert stored data to a value.
    fn from_endian_bytes(r: Self::Bytes, endianness: Endianness) -> Self;
}

macro_rules! from_endian_bytes {
    ($($t:ident),*) => {
        $(
            impl FromEndianBytes for $t {
                type Bytes = [u8; size_of::<$t>()];

                fn from_endian_bytes(r: Self::Bytes, endianness: Endianness) -> Self {
                    match endianness {
                        Endianness::Little => $t::from_le_bytes(r),
                        Endianness::Big => $t::from_be_bytes(r),
                    }
                }
            }
        )*
    };
}

from_endian_bytes!(i16, i32, f32, f64);
