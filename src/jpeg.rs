//! JPEG framing of EXIF data: locating the APP1 segment on read and
//! building one on write.
use crate::utility::{ByteOrder, GetNumFromBytes};
use log::debug;

const SOI: u16 = 0xffd8;
const EOI: u16 = 0xffd9;
const SOS: u16 = 0xffda;
const APP1: u16 = 0xffe1;
const TEM: u16 = 0xff01;

pub const EXIF_IDENT: &[u8; 6] = b"Exif\0\0";
/// Largest value the 16 bit segment length can carry.
const MAX_SEGMENT_LEN: usize = 0xffff;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid header for JPEG: {0:x}")]
    InvalidHeader(u16),
    #[error("No Exif APP1 segment before the image data.")]
    NoExif,
    #[error("Segment {marker:x} at {pos:#x} runs past the end of the file.")]
    Truncated { marker: u16, pos: usize },
    #[error("The Exif block of {0} bytes does not fit in one APP1 segment.")]
    SegmentTooLarge(usize),
}

/// Markers without a length field.
fn is_standalone(marker: u16) -> bool {
    marker == TEM || (0xffd0..=0xffd7).contains(&marker)
}

/// Walks the segments from SOI and returns the position of the TIFF header
/// inside the first APP1 segment tagged `Exif\0\0`.
pub fn find_exif(buffer: &[u8]) -> Result<usize, Error> {
    let header = buffer.get(..2).map_or(0, |b| b.u16(ByteOrder::Motorola, 0));
    if header != SOI {
        return Err(Error::InvalidHeader(header));
    }

    let mut pos = 2;
    while pos + 2 <= buffer.len() {
        // fill bytes may precede a marker
        if buffer[pos] == 0xff && buffer.get(pos + 1) == Some(&0xff) {
            pos += 1;
            continue;
        }
        let marker = buffer.u16(ByteOrder::Motorola, pos);
        if marker == SOS || marker == EOI {
            break;
        }
        if is_standalone(marker) {
            pos += 2;
            continue;
        }
        let len = buffer
            .get(pos + 2..pos + 4)
            .ok_or(Error::Truncated { marker, pos })?
            .u16(ByteOrder::Motorola, 0) as usize;
        let end = pos + 2 + len;
        if end > buffer.len() {
            return Err(Error::Truncated { marker, pos });
        }
        if marker == APP1 && buffer[pos + 4..end].starts_with(EXIF_IDENT) {
            debug!("Exif segment at {:#x}, {} bytes.", pos, len);
            return Ok(pos + 4 + EXIF_IDENT.len());
        }
        pos = end;
    }
    Err(Error::NoExif)
}

/// Wraps a TIFF block into an APP1 segment: marker, big-endian length,
/// `Exif\0\0` and the block.
pub fn app1_segment(tiff: &[u8]) -> Result<Vec<u8>, Error> {
    let len = 2 + EXIF_IDENT.len() + tiff.len();
    if len > MAX_SEGMENT_LEN {
        return Err(Error::SegmentTooLarge(tiff.len()));
    }
    let mut segment = Vec::with_capacity(2 + len);
    segment.extend_from_slice(&APP1.to_be_bytes());
    segment.extend_from_slice(&(len as u16).to_be_bytes());
    segment.extend_from_slice(EXIF_IDENT);
    segment.extend_from_slice(tiff);
    Ok(segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(marker: u16, payload: &[u8]) -> Vec<u8> {
        let mut v = marker.to_be_bytes().to_vec();
        v.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
        v.extend_from_slice(payload);
        v
    }

    #[test]
    fn exif_after_other_segments() {
        let mut jpeg = vec![0xff, 0xd8];
        jpeg.extend(segment(0xffe0, b"JFIF\0\x01\x02"));
        jpeg.extend(segment(0xffe1, b"http://ns.adobe.com/xap/1.0/\0"));
        let tiff_pos = jpeg.len() + 4 + 6;
        jpeg.extend(segment(0xffe1, b"Exif\0\0II\x2a\0\x08\0\0\0"));
        jpeg.extend([0xff, 0xda, 0, 2]);
        assert_eq!(find_exif(&jpeg).unwrap(), tiff_pos);
    }

    #[test]
    fn scan_stops_at_image_data() {
        let mut jpeg = vec![0xff, 0xd8];
        jpeg.extend([0xff, 0xda, 0, 2]);
        jpeg.extend(segment(0xffe1, b"Exif\0\0II\x2a\0\x08\0\0\0"));
        assert!(matches!(find_exif(&jpeg), Err(Error::NoExif)));
        assert!(matches!(find_exif(b"\x89PNG"), Err(Error::InvalidHeader(0x8950))));
    }

    #[test]
    fn segment_layout() {
        let app1 = app1_segment(&[1, 2, 3, 4]).unwrap();
        assert_eq!(&app1[..4], &[0xff, 0xe1, 0, 12]);
        assert_eq!(&app1[4..10], b"Exif\0\0");
        assert_eq!(app1.len(), 14);
        assert!(app1_segment(&vec![0; 70000]).is_err());
    }
}
