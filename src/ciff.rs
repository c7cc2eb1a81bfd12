//! Canon CIFF heaps, as found in CRW files.
//!
//! A heap is a block whose last four bytes point to a record table. Each
//! 10 byte record carries a kind, a length and an offset into the heap, or
//! up to 8 bytes of data inline. Records of the heap kinds are heaps
//! themselves. The interesting records are translated into the same tree a
//! TIFF file would give: IFD0, an Exif directory and a Canon maker note.
use crate::attrib::{lookup_attrib, TagAttrib, CANON_ATTRIBS, EXIF_ATTRIBS, IFD_ATTRIBS};
use crate::directory::TagDirectory;
use crate::makernote::MakerNoteKind;
use crate::tag::Tag;
use crate::utility::{ByteOrder, GetNumFromBytes};
use crate::value::TagType;
use chrono::DateTime;
use log::{debug, warn};
use thiserror::Error;

const ORDER: ByteOrder = ByteOrder::Intel;
const MAX_RECORDS: usize = 100;
const MAX_DEPTH: usize = 4;
const RECORD_LEN: usize = 10;

const USER_COMMENT: u16 = 0x0805;
const MAKE_MODEL: u16 = 0x080a;
const OWNER_NAME: u16 = 0x0810;
const SHOT_INFO: u16 = 0x102a;
const CAMERA_SETTINGS: u16 = 0x102d;
const FOCAL_LENGTH: u16 = 0x1029;
const SENSOR_INFO: u16 = 0x1031;
const CAPTURE_TIME: u16 = 0x180e;
const IMAGE_INFO: u16 = 0x1810;
const EXPOSURE_INFO: u16 = 0x1818;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid CRW header.")]
    InvalidHeader,
    #[error("The heap at {0:#x} is out of range.")]
    HeapOutOfRange(usize),
}

/// Exposure values gathered across records, in APEX units.
#[derive(Debug, Default)]
struct Exposure {
    tv: Option<f64>,
    av: Option<f64>,
    ev: Option<f64>,
    iso: Option<f64>,
    focal_length: Option<u16>,
}

struct Ciff<'a> {
    buffer: &'a [u8],
    root: TagDirectory,
    exif: TagDirectory,
    maker: TagDirectory,
    exposure: Exposure,
}

/// Checks the CRW file header and parses its root heap.
pub fn parse_crw(buffer: &[u8]) -> Result<TagDirectory, Error> {
    if buffer.get(..2) != Some(b"II") || buffer.get(6..14) != Some(b"HEAPCCDR") {
        return Err(Error::InvalidHeader);
    }
    let header_len = buffer.u32(ORDER, 2) as usize;
    if header_len > buffer.len() {
        return Err(Error::InvalidHeader);
    }
    parse_ciff(buffer, header_len, buffer.len() - header_len)
}

/// Parses the heap of `length` bytes at `base`.
pub fn parse_ciff(buffer: &[u8], base: usize, length: usize) -> Result<TagDirectory, Error> {
    let mut ciff = Ciff {
        buffer,
        root: TagDirectory::new(IFD_ATTRIBS, ORDER),
        exif: TagDirectory::new(EXIF_ATTRIBS, ORDER),
        maker: TagDirectory::new(CANON_ATTRIBS, ORDER),
        exposure: Exposure::default(),
    };
    ciff.walk_heap(base, length, 0)?;
    Ok(ciff.finish())
}

fn attrib(table: &'static [TagAttrib], name: &str) -> Option<&'static TagAttrib> {
    let found = lookup_attrib(table, name);
    if found.is_none() {
        warn!("No attribute named {}.", name);
    }
    found
}

fn rational(v: f64, den: i32) -> (i32, i32) {
    ((v * den as f64).round() as i32, den)
}

fn exposure_time(tv: f64) -> (i32, i32) {
    let t = 2f64.powf(-tv);
    if t < 1. {
        (1, (1. / t).round() as i32)
    } else {
        rational(t, 10)
    }
}

impl<'a> Ciff<'a> {
    fn walk_heap(&mut self, base: usize, length: usize, depth: usize) -> Result<(), Error> {
        let buffer = self.buffer;
        let end = base.checked_add(length).filter(|&e| e <= buffer.len() && length >= 4);
        let Some(end) = end else {
            return Err(Error::HeapOutOfRange(base));
        };
        let table = base.saturating_add(buffer.u32(ORDER, end - 4) as usize);
        let Some(count) = buffer.get(table..table.saturating_add(2)).map(|b| b.u16(ORDER, 0) as usize) else {
            return Err(Error::HeapOutOfRange(table));
        };
        if count > MAX_RECORDS {
            warn!("Heap at {:#x} claims {} records, skipped.", base, count);
            return Ok(());
        }

        for i in 0..count {
            let rec = table + 2 + RECORD_LEN * i;
            if buffer.get(rec..rec + RECORD_LEN).is_none() {
                warn!("Record table at {:#x} truncated after {} records.", table, i);
                break;
            }
            let kind = buffer.u16(ORDER, rec);
            let (pos, len) = if kind & 0xc000 == 0x4000 {
                (rec + 2, 8)
            } else {
                (
                    base.saturating_add(buffer.u32(ORDER, rec + 6) as usize),
                    buffer.u32(ORDER, rec + 2) as usize,
                )
            };
            let Some(data) = buffer.get(pos..pos.saturating_add(len)) else {
                warn!("Record {:#06x} at {:#x} is out of range, skipped.", kind, pos);
                continue;
            };

            match (kind >> 8) & 0x38 {
                0x28 | 0x30 if depth < MAX_DEPTH => {
                    if let Err(e) = self.walk_heap(pos, len, depth + 1) {
                        warn!("Sub heap {:#06x} skipped: {}", kind, e);
                    }
                }
                0x28 | 0x30 => warn!("Sub heap {:#06x} nested too deep, skipped.", kind),
                _ => self.record(kind & 0x3fff, data),
            }
        }
        Ok(())
    }

    fn record(&mut self, code: u16, data: &[u8]) {
        debug!("CIFF record {:#06x}, {} bytes.", code, data.len());
        match code {
            OWNER_NAME => self.add_string(IFD_ATTRIBS, "Artist", data),
            MAKE_MODEL => {
                let mut parts = data.split(|&b| b == 0);
                if let Some(make) = parts.next() {
                    self.add_string(IFD_ATTRIBS, "Make", make);
                }
                if let Some(model) = parts.next() {
                    self.add_string(IFD_ATTRIBS, "Model", model);
                }
            }
            USER_COMMENT => {
                let text = cstr(data);
                if !text.is_empty() {
                    if let Some(a) = attrib(EXIF_ATTRIBS, "UserComment") {
                        let mut tag = Tag::new(a, ORDER);
                        tag.value_from_string(&text);
                        self.exif.replace_tag(tag);
                    }
                }
            }
            EXPOSURE_INFO if data.len() >= 12 => {
                self.exposure.tv = Some(data.f32(ORDER, 4) as f64);
                self.exposure.av = Some(data.f32(ORDER, 8) as f64);
            }
            SHOT_INFO if data.len() >= 14 => {
                let s = |i: usize| data.i16(ORDER, i * 2) as f64;
                let iso = s(2);
                if iso != 0. {
                    self.exposure.iso = Some(50. * 2f64.powf(iso / 32. - 4.));
                }
                if s(4) != 0. {
                    self.exposure.av = Some(s(4) / 32.);
                }
                if s(5) != 0. {
                    self.exposure.tv = Some(s(5) / 32.);
                }
                self.exposure.ev = Some(s(6) / 32.);
                self.add_table("CanonShotInfo", data);
            }
            FOCAL_LENGTH if data.len() >= 4 => {
                self.exposure.focal_length = Some(data.u16(ORDER, 2));
                self.add_table("CanonFocalLength", data);
            }
            CAMERA_SETTINGS => self.add_table("CanonCameraSettings", data),
            SENSOR_INFO => self.add_table("SensorInfo", data),
            CAPTURE_TIME if data.len() >= 4 => {
                let seconds = data.u32(ORDER, 0) as i64;
                if let Some(time) = DateTime::from_timestamp(seconds, 0) {
                    let text = time.format("%Y:%m:%d %H:%M:%S").to_string();
                    self.add_string(EXIF_ATTRIBS, "DateTimeOriginal", text.as_bytes());
                }
            }
            IMAGE_INFO if data.len() >= 16 => {
                let width = data.u32(ORDER, 0) as i32;
                let height = data.u32(ORDER, 4) as i32;
                let orientation = match data.i32(ORDER, 12) {
                    90 => 6,
                    180 => 3,
                    270 => 8,
                    _ => 1,
                };
                self.add_int(IFD_ATTRIBS, "ImageWidth", width, TagType::Long);
                self.add_int(IFD_ATTRIBS, "ImageHeight", height, TagType::Long);
                self.add_int(IFD_ATTRIBS, "Orientation", orientation, TagType::Short);
            }
            _ => {}
        }
    }

    fn target(&mut self, table: &'static [TagAttrib]) -> &mut TagDirectory {
        if std::ptr::eq(table, EXIF_ATTRIBS) {
            &mut self.exif
        } else {
            &mut self.root
        }
    }

    fn add_string(&mut self, table: &'static [TagAttrib], name: &str, data: &[u8]) {
        let text = cstr(data);
        if let Some(a) = attrib(table, name) {
            self.target(table).replace_tag(Tag::with_string(a, ORDER, &text));
        }
    }

    fn add_int(&mut self, table: &'static [TagAttrib], name: &str, v: i32, t: TagType) {
        if let Some(a) = attrib(table, name) {
            self.target(table).replace_tag(Tag::with_int(a, ORDER, v, t));
        }
    }

    fn add_rational(&mut self, name: &str, (num, den): (i32, i32)) {
        if let Some(a) = attrib(EXIF_ATTRIBS, name) {
            self.exif.replace_tag(Tag::with_rational(a, ORDER, num, den));
        }
    }

    /// Stores a record as a SHORT table of the Canon maker note.
    fn add_table(&mut self, name: &str, data: &[u8]) {
        if let Some(a) = attrib(CANON_ATTRIBS, name) {
            let mut tag = Tag::new(a, ORDER);
            tag.init_table(&data[..data.len() & !1], TagType::Short);
            self.maker.replace_tag(tag);
        }
    }

    fn focal_units(&self) -> f64 {
        self.maker
            .get_tag("CanonCameraSettings")
            .and_then(|t| t.directory(0))
            .and_then(|d| d.get_local_tag("FocalUnits"))
            .map(|t| t.to_int(0, TagType::Short))
            .filter(|&u| u > 0)
            .map_or(1., |u| u as f64)
    }

    fn finish(mut self) -> TagDirectory {
        let exposure = std::mem::take(&mut self.exposure);
        if let Some(tv) = exposure.tv {
            self.add_rational("ShutterSpeedValue", rational(tv, 1000));
            self.add_rational("ExposureTime", exposure_time(tv));
        }
        if let Some(av) = exposure.av {
            self.add_rational("ApertureValue", rational(av, 1000));
            self.add_rational("FNumber", rational(2f64.powf(av / 2.), 10));
        }
        if let Some(ev) = exposure.ev {
            self.add_rational("ExposureBiasValue", rational(ev, 1000));
        }
        if let Some(iso) = exposure.iso {
            self.add_int(EXIF_ATTRIBS, "ISOSpeedRatings", iso.round() as i32, TagType::Short);
        }
        if let Some(focal) = exposure.focal_length {
            let mm = focal as f64 / self.focal_units();
            self.add_rational("FocalLength", rational(mm, 10));
        }

        let Ciff {
            mut root,
            mut exif,
            mut maker,
            ..
        } = self;
        maker.sort();
        if let Some(a) = lookup_attrib(EXIF_ATTRIBS, "MakerNote") {
            let mut note = Tag::new(a, ORDER);
            note.init_maker_note(MakerNoteKind::Ifd, CANON_ATTRIBS);
            if let Some(dir) = note.directory_mut(0) {
                *dir = maker;
            }
            exif.replace_tag(note);
        }
        if let Some(a) = lookup_attrib(IFD_ATTRIBS, "Exif") {
            let mut pointer = Tag::new(a, ORDER);
            pointer.init_sub_dir_with(exif);
            root.replace_tag(pointer);
        }
        root.sort();
        root
    }
}

/// Text up to the first NUL.
fn cstr(data: &[u8]) -> String {
    let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    String::from_utf8_lossy(&data[..end]).trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apex_exposure_time() {
        assert_eq!(exposure_time(8.), (1, 256));
        assert_eq!(exposure_time(-1.), (20, 10));
    }

    #[test]
    fn crw_header_is_checked() {
        assert!(matches!(parse_crw(b"MM\x1a\0\0\0HEAPCCDR"), Err(Error::InvalidHeader)));
        assert!(matches!(parse_crw(b"II\x1a\0\0\0HEAPJPGM"), Err(Error::InvalidHeader)));
    }

    #[test]
    fn heap_out_of_range() {
        let heap = [0u8; 8];
        assert!(matches!(parse_ciff(&heap, 4, 100), Err(Error::HeapOutOfRange(4))));
    }
}
