//! Reads TIFF directories out of a byte buffer into a tag tree.
//!
//! Offsets found in the file are untrusted. A directory that points outside
//! the buffer only drops the tag that references it, so that a damaged
//! maker note does not cost the rest of the metadata. Only a broken header
//! or a broken first directory fails the whole parse.
use crate::attrib::{
    attrib_by_id, IgnorePolicy, TagAttrib, IFD_ATTRIBS, SONY_CAMERA_INFO2_ATTRIBS, SONY_CAMERA_INFO_ATTRIBS,
    SONY_CAMERA_SETTINGS2_ATTRIBS, SONY_CAMERA_SETTINGS3_ATTRIBS, SONY_CAMERA_SETTINGS_ATTRIBS,
};
use crate::directory::{TagDirectory, TagDirectoryTable};
use crate::makernote::{self, MakerNoteKind};
use crate::tag::Tag;
use crate::utility::{ByteOrder, GetNumFromBytes};
use crate::value::TagType;
use crate::ToReport;
use erreport::Report;
use log::{debug, trace, warn};
use thiserror::Error;

/// Directories claiming more entries are treated as garbage.
const MAX_ENTRIES: usize = 1000;
const MAX_DEPTH: usize = 12;

const TIFF_MAGIC: u16 = 42;
const ORF_MAGIC: u16 = 0x4f52;
const ORF_MAGIC_S: u16 = 0x5352;
const RW2_MAGIC: u16 = 0x55;

const NEW_SUBFILE_TYPE: u16 = 0x00fe;
const MAKE: u16 = 0x010f;
const MODEL: u16 = 0x0110;
const MAKER_NOTE: u16 = 0x927c;
const PENTAX_LENS_INFO: u16 = 0x0207;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The buffer is too short for a tiff header at {0:#x}.")]
    TooShort(usize),
    #[error("The byte order of tiff header {0:#06x} is invalid.")]
    InvalidByteOrder(u16),
    #[error("The tiff magic number {0:#06x} is invalid.")]
    InvalidMagic(u16),
    #[error("The directory at {0:#x} is out of range.")]
    DirectoryOutOfRange(usize),
    #[error("Directories nest deeper than {0} levels.")]
    TooDeep(usize),
}

/// Reads the byte order marker and the magic number of the TIFF header at
/// `base`, and returns the order with the offset of the first directory.
pub fn read_tiff_header(buffer: &[u8], base: usize) -> Result<(ByteOrder, usize), Error> {
    let header = buffer
        .get(base..base.saturating_add(8))
        .ok_or(Error::TooShort(base))?;
    let marker = header.u16(ByteOrder::Motorola, 0);
    let order = ByteOrder::from_marker(marker).ok_or(Error::InvalidByteOrder(marker))?;
    let magic = header.u16(order, 2);
    if !matches!(magic, TIFF_MAGIC | ORF_MAGIC | ORF_MAGIC_S | RW2_MAGIC) {
        return Err(Error::InvalidMagic(magic));
    }
    Ok((order, header.u32(order, 4) as usize))
}

/// Parses the TIFF structure whose header starts at `base`. With
/// `skip_ignored`, tags whose attribute says so are dropped while reading.
pub fn parse_tiff_block(buffer: &[u8], base: usize, skip_ignored: bool) -> Result<TagDirectory, Report> {
    let (order, ifd0) = read_tiff_header(buffer, base).to_report()?;
    let mut parser = Parser::new(buffer, skip_ignored);
    let pos = base.checked_add(ifd0).ok_or(Error::DirectoryOutOfRange(ifd0)).to_report()?;
    parser
        .parse_directory(base, pos, IFD_ATTRIBS, order, 0)
        .to_report()
}

struct Parser<'a> {
    buffer: &'a [u8],
    skip_ignored: bool,
    make: String,
    model: String,
}

impl<'a> Parser<'a> {
    fn new(buffer: &'a [u8], skip_ignored: bool) -> Self {
        Parser {
            buffer,
            skip_ignored,
            make: String::new(),
            model: String::new(),
        }
    }

    /// Reads the directory at absolute position `pos`. Value offsets inside
    /// it are relative to `base`.
    fn parse_directory(
        &mut self,
        base: usize,
        pos: usize,
        attribs: &'static [TagAttrib],
        order: ByteOrder,
        depth: usize,
    ) -> Result<TagDirectory, Error> {
        if depth > MAX_DEPTH {
            return Err(Error::TooDeep(MAX_DEPTH));
        }
        let buffer = self.buffer;
        let count = buffer
            .get(pos..pos.saturating_add(2))
            .ok_or(Error::DirectoryOutOfRange(pos))?
            .u16(order, 0) as usize;
        let mut dir = TagDirectory::new(attribs, order);
        if count > MAX_ENTRIES {
            warn!("Directory at {:#x} claims {} entries, read as empty.", pos, count);
            return Ok(dir);
        }
        trace!("Directory at {:#x} with {} entries.", pos, count);
        let mut reduced = false;
        for i in 0..count {
            let entry = pos + 2 + 12 * i;
            if buffer.get(entry..entry + 12).is_none() {
                warn!("Directory at {:#x} truncated after {} of {} entries.", pos, i, count);
                break;
            }
            let Some(tag) = self.parse_tag(base, entry, attribs, order, depth, reduced) else {
                continue;
            };
            if tag.id() == NEW_SUBFILE_TYPE && tag.attrib().is_some() {
                reduced = tag.to_int(0, TagType::Long) != 0;
            }
            dir.add_tag(tag);
        }
        Ok(dir)
    }

    fn parse_tag(
        &mut self,
        base: usize,
        entry: usize,
        attribs: &'static [TagAttrib],
        order: ByteOrder,
        depth: usize,
        reduced: bool,
    ) -> Option<Tag> {
        let buffer = self.buffer;
        let id = buffer.u16(order, entry);
        let code = buffer.u16(order, entry + 2);
        let count = buffer.u32(order, entry + 4) as usize;
        let Some(tag_type) = TagType::from_u16(code) else {
            debug!("Tag {:#06x} has invalid type {}, skipped.", id, code);
            return None;
        };

        let attrib = attrib_by_id(attribs, id);
        if let (true, Some(a)) = (self.skip_ignored, attrib) {
            match a.ignore {
                IgnorePolicy::Always => return None,
                IgnorePolicy::IfReduced if reduced => return None,
                _ => {}
            }
        }

        let Some(size) = count.checked_mul(tag_type.size()) else {
            warn!("Tag {:#06x} claims {} elements, skipped.", id, count);
            return None;
        };
        let value_pos = if size <= 4 {
            entry + 8
        } else {
            base.saturating_add(buffer.u32(order, entry + 8) as usize)
        };
        let Some(value) = buffer.get(value_pos..value_pos.saturating_add(size)) else {
            warn!("Value of tag {:#06x} at {:#x} is out of range, skipped.", id, value_pos);
            return None;
        };
        let mut tag = Tag::from_parts(id, tag_type, count as u32, value.to_vec(), order, attrib);

        let Some(attrib) = attrib else {
            return Some(tag);
        };
        if std::ptr::eq(attribs, IFD_ATTRIBS) {
            match id {
                MAKE => self.make = tag.to_string().trim().to_owned(),
                MODEL => self.model = tag.to_string().trim().to_owned(),
                _ => {}
            }
        }
        if let Some(sub) = attrib.sub_attribs {
            self.parse_sub_dirs(&mut tag, base, value_pos, attrib, sub, depth);
        } else if id == MAKER_NOTE && tag_type == TagType::Undefined {
            self.parse_maker_note(&mut tag, value_pos, base, order, depth);
        }
        Some(tag)
    }

    fn parse_sub_dirs(
        &mut self,
        tag: &mut Tag,
        base: usize,
        value_pos: usize,
        attrib: &'static TagAttrib,
        sub: &'static [TagAttrib],
        depth: usize,
    ) {
        let order = tag.order();
        let stored = tag.stored_type();
        // pointer attributes are declared AUTO, tables carry their element type
        if stored.is_pointer() && attrib.tag_type == TagType::Auto {
            let mut dirs = vec![];
            for i in 0..tag.count() as usize {
                let pos = base.saturating_add(tag.value().u32(order, i * 4) as usize);
                match self.parse_directory(base, pos, sub, order, depth + 1) {
                    Ok(dir) => dirs.push(dir),
                    Err(e) => warn!("Sub directory {} of {} skipped: {}", i, attrib.name, e),
                }
            }
            if !dirs.is_empty() {
                tag.set_directories(dirs, MakerNoteKind::None);
            }
        } else if stored == TagType::Undefined && attrib.tag_type == TagType::Auto {
            // the directory is stored inline as the value itself
            match self.parse_directory(base, value_pos, sub, order, depth + 1) {
                Ok(dir) => tag.init_sub_dir_with(dir),
                Err(e) => warn!("Inline directory {} skipped: {}", attrib.name, e),
            }
        } else {
            let (sub, table_type, zero_offset, table_order) = self.table_layout(attrib, sub, tag);
            let dir = TagDirectoryTable::build(tag.value(), zero_offset, table_type, sub, table_order);
            tag.set_directories(vec![dir], MakerNoteKind::TableSubDir);
        }
    }

    /// Attribute table, element type, start and byte order of the table
    /// stored in `tag`.
    fn table_layout(
        &self,
        attrib: &TagAttrib,
        sub: &'static [TagAttrib],
        tag: &Tag,
    ) -> (&'static [TagAttrib], TagType, usize, ByteOrder) {
        let order = tag.order();
        let len = tag.value().len();
        if std::ptr::eq(sub, SONY_CAMERA_SETTINGS_ATTRIBS) {
            // the record size tells the body generation apart
            return match len {
                332 => (SONY_CAMERA_SETTINGS2_ATTRIBS, TagType::Short, 0, ByteOrder::Motorola),
                1536 | 2048 => (SONY_CAMERA_SETTINGS3_ATTRIBS, TagType::Byte, 0, order),
                _ => (sub, TagType::Short, 0, ByteOrder::Motorola),
            };
        }
        if std::ptr::eq(sub, SONY_CAMERA_INFO_ATTRIBS) && matches!(len, 5506 | 6118) {
            return (SONY_CAMERA_INFO2_ATTRIBS, TagType::Byte, 0, order);
        }
        let table_type = match tag.stored_type() {
            TagType::Undefined | TagType::Byte | TagType::SByte | TagType::Ascii => TagType::Byte,
            t => t,
        };
        let zero_offset = if attrib.id == PENTAX_LENS_INFO && attrib.name == "LensInfo" {
            pentax_lens_data_offset(&self.model)
        } else {
            0
        };
        (sub, table_type, zero_offset, order)
    }

    fn parse_maker_note(&mut self, tag: &mut Tag, value_pos: usize, base: usize, order: ByteOrder, depth: usize) {
        let Some(layout) = makernote::identify(tag.value(), &self.make) else {
            debug!("Maker note of '{}' kept as opaque bytes.", self.make);
            return;
        };
        let Some(header) = tag.value().get(..layout.header_len).map(<[u8]>::to_vec) else {
            warn!("Maker note shorter than its {} byte header.", layout.header_len);
            return;
        };
        let note_order = layout.order.unwrap_or(order);
        let note_base = layout.base_shift.map_or(base, |shift| value_pos + shift);
        match self.parse_directory(note_base, value_pos + layout.ifd_offset, layout.attribs, note_order, depth + 1) {
            // garbage read as an IFD comes back empty, the blob stays intact
            Ok(dir) if dir.count() == 0 => {
                warn!("Maker note of '{}' holds no readable tags, kept as opaque bytes.", self.make)
            }
            Ok(dir) => {
                tag.set_header(&header);
                tag.set_directories(vec![dir], layout.kind);
            }
            Err(e) => warn!("Maker note kept as opaque bytes: {}", e),
        }
    }
}

/// Start of the lens data inside the Pentax LensInfo record.
fn pentax_lens_data_offset(model: &str) -> usize {
    let has = |name: &str| model.contains(name);
    if has("*ist") || has("GX-1") || has("K200D") || (has("K100D") && !has("K100D Super")) || has("K110D") || has("645Z") {
        3
    } else if has("645D") {
        13
    } else if has("K-01") || has("K-30") || has("K-50") || has("RICOH") {
        15
    } else if has("K-5") || has("K-r") {
        12
    } else {
        4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_checks() {
        assert_eq!(
            read_tiff_header(b"II\x2a\0\x08\0\0\0", 0).unwrap(),
            (ByteOrder::Intel, 8)
        );
        assert_eq!(
            read_tiff_header(b"MM\0\x2a\0\0\0\x10", 0).unwrap(),
            (ByteOrder::Motorola, 16)
        );
        assert!(matches!(
            read_tiff_header(b"XX\x2a\0\x08\0\0\0", 0),
            Err(Error::InvalidByteOrder(_))
        ));
        assert!(matches!(read_tiff_header(b"II\x2b\0\x08\0\0\0", 0), Err(Error::InvalidMagic(0x2b))));
        assert!(matches!(read_tiff_header(b"II\x2a\0", 0), Err(Error::TooShort(0))));
    }

    #[test]
    fn oversized_directory_reads_as_empty() {
        let mut data = b"II\x2a\0\x08\0\0\0".to_vec();
        data.extend_from_slice(&2000u16.to_le_bytes());
        let root = parse_tiff_block(&data, 0, false).unwrap();
        assert_eq!(root.count(), 0);
    }

    #[test]
    fn missing_first_directory_fails() {
        let data = b"II\x2a\0\x40\0\0\0".to_vec();
        assert!(parse_tiff_block(&data, 0, false).is_err());
    }

    #[test]
    fn empty_directory_is_accepted() {
        let data = b"II\x2a\0\x08\0\0\0\0\0\0\0\0\0".to_vec();
        let root = parse_tiff_block(&data, 0, false).unwrap();
        assert_eq!(root.count(), 0);
    }

    #[test]
    fn pentax_lens_offsets() {
        assert_eq!(pentax_lens_data_offset("PENTAX K10D"), 4);
        assert_eq!(pentax_lens_data_offset("PENTAX K100D"), 3);
        assert_eq!(pentax_lens_data_offset("PENTAX K100D Super"), 4);
        assert_eq!(pentax_lens_data_offset("PENTAX K-50"), 15);
        assert_eq!(pentax_lens_data_offset("PENTAX K-5 II"), 12);
        assert_eq!(pentax_lens_data_offset("PENTAX 645D"), 13);
    }
}
