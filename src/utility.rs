//! Byte-order aware conversions between raw bytes and numbers.
//!
//! Reading past the end of a slice is a caller bug and panics, the same
//! as slice indexing does.

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// "II", little endian
    Intel,
    /// "MM", big endian
    Motorola,
}

impl ByteOrder {
    pub const INTEL_MARKER: u16 = 0x4949;
    pub const MOTOROLA_MARKER: u16 = 0x4d4d;

    pub fn from_marker(marker: u16) -> Option<Self> {
        match marker {
            Self::INTEL_MARKER => Some(ByteOrder::Intel),
            Self::MOTOROLA_MARKER => Some(ByteOrder::Motorola),
            _ => None,
        }
    }

    pub fn marker(self) -> u16 {
        match self {
            ByteOrder::Intel => Self::INTEL_MARKER,
            ByteOrder::Motorola => Self::MOTOROLA_MARKER,
        }
    }

    pub fn is_le(self) -> bool {
        self == ByteOrder::Intel
    }
}

pub trait GetNumFromBytes {
    fn u16(&self, order: ByteOrder, start: usize) -> u16;
    fn i16(&self, order: ByteOrder, start: usize) -> i16;
    fn u32(&self, order: ByteOrder, start: usize) -> u32;
    fn i32(&self, order: ByteOrder, start: usize) -> i32;
    fn f32(&self, order: ByteOrder, start: usize) -> f32;
    fn f64(&self, order: ByteOrder, start: usize) -> f64;
    /// unsigned numerator / unsigned denominator
    fn r64(&self, order: ByteOrder, start: usize) -> f64;
    /// signed numerator / signed denominator
    fn sr64(&self, order: ByteOrder, start: usize) -> f64;
}

pub trait PutNumToBytes {
    fn put_u16(&mut self, v: u16, order: ByteOrder, start: usize);
    fn put_u32(&mut self, v: u32, order: ByteOrder, start: usize);
    fn put_i32(&mut self, v: i32, order: ByteOrder, start: usize);
}

pub trait GetBytesFromInt<T> {
    fn to_bytes(self, order: ByteOrder) -> T;
}

macro_rules! gen_impl_get_num {
    ($t:tt, $len:expr) => {
        fn $t(&self, order: ByteOrder, start: usize) -> $t {
            let mut bytes = [0u8; $len];
            bytes.copy_from_slice(&self[start..start + $len]);
            match order {
                ByteOrder::Intel => $t::from_le_bytes(bytes),
                ByteOrder::Motorola => $t::from_be_bytes(bytes),
            }
        }
    };
}

impl GetNumFromBytes for [u8] {
    gen_impl_get_num!(u16, 2);
    gen_impl_get_num!(i16, 2);
    gen_impl_get_num!(u32, 4);
    gen_impl_get_num!(i32, 4);
    gen_impl_get_num!(f32, 4);
    gen_impl_get_num!(f64, 8);

    fn r64(&self, order: ByteOrder, start: usize) -> f64 {
        let n = self.u32(order, start) as f64;
        let d = self.u32(order, start + 4) as f64;
        if d == 0. {
            0.
        } else {
            n / d
        }
    }

    fn sr64(&self, order: ByteOrder, start: usize) -> f64 {
        let n = self.i32(order, start) as f64;
        let d = self.i32(order, start + 4) as f64;
        if d == 0. {
            0.
        } else {
            n / d
        }
    }
}

macro_rules! gen_get_bytes_impls {
    ($t:ty, $n:expr) => {
        impl GetBytesFromInt<[u8; $n]> for $t {
            fn to_bytes(self, order: ByteOrder) -> [u8; $n] {
                match order {
                    ByteOrder::Intel => self.to_le_bytes(),
                    ByteOrder::Motorola => self.to_be_bytes(),
                }
            }
        }
    };
}
gen_get_bytes_impls!(u16, 2);
gen_get_bytes_impls!(u32, 4);
gen_get_bytes_impls!(i32, 4);

impl PutNumToBytes for [u8] {
    fn put_u16(&mut self, v: u16, order: ByteOrder, start: usize) {
        self[start..start + 2].copy_from_slice(&v.to_bytes(order));
    }
    fn put_u32(&mut self, v: u32, order: ByteOrder, start: usize) {
        self[start..start + 4].copy_from_slice(&v.to_bytes(order));
    }
    fn put_i32(&mut self, v: i32, order: ByteOrder, start: usize) {
        self[start..start + 4].copy_from_slice(&v.to_bytes(order));
    }
}

/// Reverses every `width`-byte element of `data` in place.
pub(crate) fn swap_elements(data: &mut [u8], width: usize) {
    if width < 2 {
        return;
    }
    for chunk in data.chunks_exact_mut(width) {
        chunk.reverse();
    }
}
