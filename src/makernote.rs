//! Recognition of vendor maker note layouts.
//!
//! A maker note is an opaque `UNDEFINED` blob as far as TIFF is concerned.
//! Most vendors store an IFD in it, sometimes behind a signature header and
//! with offsets counted from somewhere other than the TIFF header. The
//! layout found here tells the parser where the directory starts and how
//! its offsets resolve, and tells the writer how to rebuild the blob.
use crate::attrib::{
    TagAttrib, CANON_ATTRIBS, FUJI_ATTRIBS, MINOLTA_ATTRIBS, NIKON2_ATTRIBS, NIKON3_ATTRIBS,
    OLYMPUS_ATTRIBS, PENTAX_ATTRIBS, SONY_ATTRIBS,
};
use crate::utility::{ByteOrder, GetNumFromBytes};
use phf::phf_map;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum MakerNoteKind {
    /// Not a maker note: a plain pointer to one or more IFDs
    #[default]
    None,
    /// Bare IFD, offsets relative to the TIFF header
    Ifd,
    /// Signature header, then an IFD with offsets relative to the TIFF header
    HeaderIfd,
    /// Signature header and an embedded TIFF header that offsets are
    /// relative to
    Nikon3,
    /// Signature header, then an IFD with offsets relative to the maker note
    Olympus2,
    /// Little endian header holding the IFD offset, offsets relative to the
    /// maker note
    Fuji,
    /// Fixed layout array exposed as a table directory
    TableSubDir,
}

#[derive(Debug, Copy, Clone)]
enum Vendor {
    Nikon,
    Olympus,
    Fuji,
    Pentax,
    Sony,
}

/// first 4 bytes of the maker note => vendor
static SIGNATURES: phf::Map<[u8; 4], Vendor> = phf_map! {
    [0x4e, 0x69, 0x6b, 0x6f] => Vendor::Nikon, // Niko
    [0x4f, 0x4c, 0x59, 0x4d] => Vendor::Olympus, // OLYM
    [0x46, 0x55, 0x4a, 0x49] => Vendor::Fuji, // FUJI
    [0x41, 0x4f, 0x43, 0x00] => Vendor::Pentax, // AOC\0
    [0x50, 0x45, 0x4e, 0x54] => Vendor::Pentax, // PENT
    [0x53, 0x4f, 0x4e, 0x59] => Vendor::Sony, // SONY
};

/// Where the directory of a maker note lives and how to read it.
#[derive(Debug, Copy, Clone)]
pub struct MakerNoteLayout {
    pub kind: MakerNoteKind,
    pub attribs: &'static [TagAttrib],
    /// Leading bytes kept verbatim and written back in front of the IFD
    pub header_len: usize,
    /// Start of the IFD, counted from the start of the maker note
    pub ifd_offset: usize,
    /// Offsets inside the IFD are counted from this position in the maker
    /// note. `None` keeps the enclosing TIFF base.
    pub base_shift: Option<usize>,
    /// Byte order of the IFD. `None` keeps the enclosing order.
    pub order: Option<ByteOrder>,
}

impl MakerNoteLayout {
    fn plain(kind: MakerNoteKind, attribs: &'static [TagAttrib], header_len: usize) -> Self {
        MakerNoteLayout {
            kind,
            attribs,
            header_len,
            ifd_offset: header_len,
            base_shift: None,
            order: None,
        }
    }
}

fn order_at(block: &[u8], pos: usize) -> Option<ByteOrder> {
    let marker = block.get(pos..pos + 2)?;
    ByteOrder::from_marker(u16::from_be_bytes([marker[0], marker[1]]))
}

/// Finds the layout of the maker note `block` written by a camera of make
/// `make`. `None` means the blob is kept as opaque bytes.
pub fn identify(block: &[u8], make: &str) -> Option<MakerNoteLayout> {
    let signature: Option<[u8; 4]> = block.get(..4).and_then(|b| b.try_into().ok());
    if let Some(vendor) = signature.and_then(|s| SIGNATURES.get(&s)) {
        if let Some(layout) = by_header(*vendor, block) {
            return Some(layout);
        }
    }
    by_make(make)
}

fn by_header(vendor: Vendor, block: &[u8]) -> Option<MakerNoteLayout> {
    match vendor {
        Vendor::Nikon if block.starts_with(b"Nikon\0\x02") => {
            let order = order_at(block, 10)?;
            let ifd = block.get(14..18)?.u32(order, 0) as usize;
            Some(MakerNoteLayout {
                kind: MakerNoteKind::Nikon3,
                attribs: NIKON3_ATTRIBS,
                header_len: 18,
                ifd_offset: 10 + ifd,
                base_shift: Some(10),
                order: Some(order),
            })
        }
        Vendor::Nikon if block.starts_with(b"Nikon\0\x01") => {
            Some(MakerNoteLayout::plain(MakerNoteKind::HeaderIfd, NIKON2_ATTRIBS, 8))
        }
        Vendor::Olympus if block.starts_with(b"OLYMPUS\0") => Some(MakerNoteLayout {
            kind: MakerNoteKind::Olympus2,
            attribs: OLYMPUS_ATTRIBS,
            header_len: 12,
            ifd_offset: 12,
            base_shift: Some(0),
            order: Some(order_at(block, 8)?),
        }),
        Vendor::Olympus if block.starts_with(b"OLYMP\0") => {
            Some(MakerNoteLayout::plain(MakerNoteKind::HeaderIfd, OLYMPUS_ATTRIBS, 8))
        }
        Vendor::Fuji if block.starts_with(b"FUJIFILM") => {
            let ifd = block.get(8..12)?.u32(ByteOrder::Intel, 0) as usize;
            if ifd < 12 {
                return None;
            }
            Some(MakerNoteLayout {
                kind: MakerNoteKind::Fuji,
                attribs: FUJI_ATTRIBS,
                header_len: ifd,
                ifd_offset: ifd,
                base_shift: Some(0),
                order: Some(ByteOrder::Intel),
            })
        }
        Vendor::Pentax if block.starts_with(b"AOC\0") => Some(MakerNoteLayout {
            order: order_at(block, 4),
            ..MakerNoteLayout::plain(MakerNoteKind::HeaderIfd, PENTAX_ATTRIBS, 6)
        }),
        Vendor::Pentax if block.starts_with(b"PENTAX \0") => Some(MakerNoteLayout {
            kind: MakerNoteKind::Olympus2,
            attribs: PENTAX_ATTRIBS,
            header_len: 10,
            ifd_offset: 10,
            base_shift: Some(0),
            order: Some(order_at(block, 8)?),
        }),
        Vendor::Sony if block.starts_with(b"SONY DSC ") || block.starts_with(b"SONY CAM ") => {
            Some(MakerNoteLayout::plain(MakerNoteKind::HeaderIfd, SONY_ATTRIBS, 12))
        }
        _ => None,
    }
}

fn by_make(make: &str) -> Option<MakerNoteLayout> {
    let make = make.trim();
    let attribs = if make.starts_with("Canon") {
        CANON_ATTRIBS
    } else if make.starts_with("Minolta") || make.starts_with("KONICA MINOLTA") {
        MINOLTA_ATTRIBS
    } else if make.starts_with("SONY") {
        SONY_ATTRIBS
    } else if make.starts_with("NIKON") {
        NIKON3_ATTRIBS
    } else {
        return None;
    };
    Some(MakerNoteLayout::plain(MakerNoteKind::Ifd, attribs, 0))
}

/// Attribute table of the maker note vendors write through a bare IFD,
/// used when building a maker note from scratch.
pub fn attribs_for_make(make: &str) -> Option<&'static [TagAttrib]> {
    by_make(make).map(|l| l.attribs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nikon3_header() {
        let mut block = b"Nikon\0\x02\x10\0\0MM\0\x2a\0\0\0\x08".to_vec();
        block.extend_from_slice(&[0, 0]);
        let layout = identify(&block, "NIKON CORPORATION").unwrap();
        assert_eq!(layout.kind, MakerNoteKind::Nikon3);
        assert_eq!(layout.ifd_offset, 18);
        assert_eq!(layout.base_shift, Some(10));
        assert_eq!(layout.order, Some(ByteOrder::Motorola));
    }

    #[test]
    fn fuji_header() {
        let mut block = b"FUJIFILM".to_vec();
        block.extend_from_slice(&12u32.to_le_bytes());
        let layout = identify(&block, "FUJIFILM").unwrap();
        assert_eq!(layout.kind, MakerNoteKind::Fuji);
        assert_eq!((layout.header_len, layout.ifd_offset), (12, 12));
    }

    #[test]
    fn make_fallback_and_opaque() {
        let layout = identify(&[0, 5, 0, 0], "Canon").unwrap();
        assert_eq!(layout.kind, MakerNoteKind::Ifd);
        assert_eq!(layout.header_len, 0);

        assert!(identify(b"ACME maker data", "ACME").is_none());
        // a signature without the full header falls back on the make
        assert!(identify(b"Nikon\0\x07", "ACME").is_none());
    }
}
