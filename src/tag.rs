//! A single directory entry: id, type, count and raw value bytes, plus
//! any directories nested under it.
//!
use crate::attrib::{ActionCode, TagAttrib};
use crate::directory::{TagDirectory, TagDirectoryTable};
use crate::interpreter::{self, parse_double, parse_int, Interpreter, STD_INTERPRETER};
use crate::makernote::MakerNoteKind;
use crate::utility::{swap_elements, ByteOrder, GetNumFromBytes, PutNumToBytes};
use crate::value::TagType;
use std::borrow::Cow;
use std::fmt;

/// Rendering stops after this many elements.
const MAX_SHOWN_ELEMENTS: usize = 10;

#[derive(Debug, Clone)]
pub struct Tag {
    id: u16,
    /// Type as stored on disk
    tag_type: TagType,
    count: u32,
    value: Vec<u8>,
    order: ByteOrder,
    keep: bool,
    attrib: Option<&'static TagAttrib>,
    directories: Vec<TagDirectory>,
    maker_note_kind: MakerNoteKind,
}

impl Tag {
    /// A tag read from a file. `value` holds `count` elements of `tag_type`.
    pub(crate) fn from_parts(
        id: u16,
        tag_type: TagType,
        count: u32,
        value: Vec<u8>,
        order: ByteOrder,
        attrib: Option<&'static TagAttrib>,
    ) -> Self {
        Tag {
            id,
            tag_type,
            count,
            value,
            order,
            // unknown tags are carried through a rewrite untouched
            keep: attrib.map_or(true, |a| a.is_written()),
            attrib,
            directories: vec![],
            maker_note_kind: MakerNoteKind::None,
        }
    }

    /// An empty tag for `attrib`. It is written only after one of the
    /// `init_*` methods gives it a type and a value.
    pub fn new(attrib: &'static TagAttrib, order: ByteOrder) -> Self {
        Tag {
            id: attrib.id,
            tag_type: TagType::Invalid,
            count: 0,
            value: vec![],
            order,
            keep: true,
            attrib: Some(attrib),
            directories: vec![],
            maker_note_kind: MakerNoteKind::None,
        }
    }

    pub fn with_int(attrib: &'static TagAttrib, order: ByteOrder, v: i32, t: TagType) -> Self {
        let mut tag = Tag::new(attrib, order);
        tag.init_int(v, t, 1);
        tag
    }

    pub fn with_string(attrib: &'static TagAttrib, order: ByteOrder, text: &str) -> Self {
        let mut tag = Tag::new(attrib, order);
        tag.init_string(text);
        tag
    }

    pub fn with_rational(attrib: &'static TagAttrib, order: ByteOrder, num: i32, den: i32) -> Self {
        let mut tag = Tag::new(attrib, order);
        tag.init_rational(num, den);
        tag
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    /// Attribute name, or the hex id for unknown tags.
    pub fn name(&self) -> Cow<'static, str> {
        match self.attrib {
            Some(a) => Cow::Borrowed(a.name),
            None => Cow::Owned(format!("0x{:04x}", self.id)),
        }
    }

    /// Name of the `i`-th nested directory, `Name[i]` when there are several.
    pub fn name_indexed(&self, i: usize) -> String {
        if self.directories.len() > 1 {
            format!("{}[{}]", self.name(), i)
        } else {
            self.name().into_owned()
        }
    }

    /// Effective type: the attribute's when it names a concrete one.
    pub fn tag_type(&self) -> TagType {
        match self.attrib {
            Some(a) if a.tag_type.is_concrete() => a.tag_type,
            _ => self.tag_type,
        }
    }

    pub fn stored_type(&self) -> TagType {
        self.tag_type
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    pub fn keep(&self) -> bool {
        self.keep
    }

    pub fn set_keep(&mut self, keep: bool) {
        self.keep = keep;
    }

    pub fn attrib(&self) -> Option<&'static TagAttrib> {
        self.attrib
    }

    pub fn interpreter(&self) -> &'static dyn Interpreter {
        match self.attrib {
            Some(a) => a.interpreter,
            None => &STD_INTERPRETER,
        }
    }

    pub fn is_directory(&self) -> bool {
        !self.directories.is_empty()
    }

    pub fn directories(&self) -> &[TagDirectory] {
        &self.directories
    }

    pub fn directory(&self, i: usize) -> Option<&TagDirectory> {
        self.directories.get(i)
    }

    pub fn directory_mut(&mut self, i: usize) -> Option<&mut TagDirectory> {
        self.directories.get_mut(i)
    }

    pub fn maker_note_kind(&self) -> MakerNoteKind {
        self.maker_note_kind
    }

    /// Shown in listings unless the writer manages the tag itself.
    pub fn is_visible(&self) -> bool {
        !matches!(
            self.attrib.map(|a| a.action),
            Some(ActionCode::System) | Some(ActionCode::New)
        )
    }

    pub(crate) fn set_directories(&mut self, dirs: Vec<TagDirectory>, kind: MakerNoteKind) {
        self.directories = dirs;
        self.maker_note_kind = kind;
    }

    pub(crate) fn set_header(&mut self, header: &[u8]) {
        self.value = header.to_vec();
    }

    pub fn to_int(&self, ofs: usize, as_type: TagType) -> i32 {
        self.interpreter().to_int(self, ofs, as_type)
    }

    pub fn to_double(&self, ofs: usize) -> f64 {
        self.interpreter().to_double(self, ofs)
    }

    /// Every element from byte offset `ofs` on, as doubles.
    pub fn to_double_array(&self, ofs: usize) -> Vec<f64> {
        let size = self.tag_type().size();
        (ofs..self.value.len())
            .step_by(size)
            .take_while(|&i| i + size <= self.value.len())
            .map(|i| self.to_double(i))
            .collect()
    }

    /// Numerator and denominator at `ofs`. Integers read as `n/1`.
    pub fn to_rational(&self, ofs: usize) -> (i32, i32) {
        let t = self.tag_type();
        match t {
            TagType::Rational | TagType::SRational if ofs + 8 <= self.value.len() => (
                self.value.i32(self.order, ofs),
                self.value.i32(self.order, ofs + 4),
            ),
            TagType::Byte
            | TagType::SByte
            | TagType::Short
            | TagType::SShort
            | TagType::Long
            | TagType::SLong => (interpreter::decode_int(self, ofs, t), 1),
            _ => (0, 0),
        }
    }

    pub fn value_to_string(&self, scope: &TagDirectory) -> String {
        self.interpreter().to_string(self, scope)
    }

    pub fn value_from_string(&mut self, text: &str) {
        let interp = self.interpreter();
        interp.from_string(self, text);
    }

    /// Overwrites the value in place from text. The element count never
    /// changes. Strings are truncated or zero padded.
    pub fn from_string(&mut self, text: &str) {
        let t = self.tag_type();
        match t {
            TagType::Ascii | TagType::Undefined => {
                let limit = if t == TagType::Ascii {
                    self.value.len().saturating_sub(1)
                } else {
                    self.value.len()
                };
                let bytes = text.as_bytes();
                let n = bytes.len().min(limit);
                self.value[..n].copy_from_slice(&bytes[..n]);
                self.value[n..].fill(0);
            }
            _ => {
                let size = t.size();
                for (i, token) in text.split_whitespace().enumerate() {
                    let ofs = i * size;
                    if ofs + size > self.value.len() {
                        break;
                    }
                    match t {
                        TagType::Rational | TagType::SRational => {
                            let (n, d) = parse_rational(token);
                            self.value.put_i32(n, self.order, ofs);
                            self.value.put_i32(d, self.order, ofs + 4);
                        }
                        TagType::Float => {
                            let bits = (parse_double(token) as f32).to_bits();
                            self.value.put_u32(bits, self.order, ofs);
                        }
                        TagType::Double => self.put_double(parse_double(token), ofs),
                        _ => self.set_int(parse_int(token), ofs, t),
                    }
                }
            }
        }
    }

    fn put_double(&mut self, v: f64, ofs: usize) {
        let bytes = match self.order {
            ByteOrder::Intel => v.to_le_bytes(),
            ByteOrder::Motorola => v.to_be_bytes(),
        };
        self.value[ofs..ofs + 8].copy_from_slice(&bytes);
    }

    /// Stores `v` at byte offset `ofs` encoded as `as_type`, or as the
    /// effective type when `as_type` is not concrete.
    pub fn set_int(&mut self, v: i32, ofs: usize, as_type: TagType) {
        let t = if as_type.is_concrete() {
            as_type
        } else {
            self.tag_type()
        };
        if ofs + t.size() > self.value.len() {
            return;
        }
        let order = self.order;
        match t {
            TagType::Byte | TagType::SByte | TagType::Undefined | TagType::Ascii => {
                self.value[ofs] = v as u8
            }
            TagType::Short | TagType::SShort => self.value.put_u16(v as u16, order, ofs),
            TagType::Rational | TagType::SRational => {
                self.value.put_i32(v, order, ofs);
                self.value.put_i32(1, order, ofs + 4);
            }
            TagType::Float => self.value.put_u32((v as f32).to_bits(), order, ofs),
            TagType::Double => self.put_double(v as f64, ofs),
            _ => self.value.put_i32(v, order, ofs),
        }
    }

    pub fn from_int(&mut self, v: i32) {
        self.set_int(v, 0, TagType::Auto);
    }

    /// Resets the tag to `count` elements of `t`, the first holding `v`.
    pub fn init_int(&mut self, v: i32, t: TagType, count: u32) {
        self.tag_type = t;
        self.count = count;
        self.value = vec![0; t.size() * count as usize];
        self.set_int(v, 0, t);
    }

    pub fn init_string(&mut self, text: &str) {
        self.tag_type = TagType::Ascii;
        self.value = text.as_bytes().to_vec();
        self.value.push(0);
        self.count = self.value.len() as u32;
    }

    pub fn init_undef_array(&mut self, data: &[u8]) {
        self.tag_type = TagType::Undefined;
        self.value = data.to_vec();
        self.count = data.len() as u32;
    }

    /// Raw bytes as a LONG array, zero padded to a multiple of four.
    pub fn init_long_array(&mut self, data: &[u8]) {
        self.tag_type = TagType::Long;
        self.value = data.to_vec();
        self.value.resize((data.len() + 3) / 4 * 4, 0);
        self.count = (self.value.len() / 4) as u32;
    }

    pub fn init_rational(&mut self, num: i32, den: i32) {
        self.tag_type = match self.attrib.map(|a| a.tag_type) {
            Some(TagType::SRational) => TagType::SRational,
            _ => TagType::Rational,
        };
        self.count = 1;
        self.value = vec![0; 8];
        self.value.put_i32(num, self.order, 0);
        self.value.put_i32(den, self.order, 4);
    }

    /// Turns the tag into a pointer to one empty directory built from the
    /// attribute's sub table.
    pub fn init_sub_dir(&mut self) {
        let attribs = self.attrib.and_then(|a| a.sub_attribs).unwrap_or(&[]);
        self.init_sub_dir_with(TagDirectory::new(attribs, self.order));
    }

    pub fn init_sub_dir_with(&mut self, dir: TagDirectory) {
        self.init_int(0, TagType::Long, 1);
        self.directories = vec![dir];
        self.maker_note_kind = MakerNoteKind::None;
    }

    pub fn init_maker_note(&mut self, kind: MakerNoteKind, attribs: &'static [TagAttrib]) {
        self.tag_type = TagType::Undefined;
        self.count = 0;
        self.value = vec![];
        self.directories = vec![TagDirectory::new(attribs, self.order)];
        self.maker_note_kind = kind;
    }

    /// Stores `data` as elements of `t` and exposes them as a table
    /// directory over the attribute's sub table.
    pub fn init_table(&mut self, data: &[u8], t: TagType) {
        let attribs = self.attrib.and_then(|a| a.sub_attribs).unwrap_or(&[]);
        self.tag_type = t;
        self.count = (data.len() / t.size()) as u32;
        self.value = data.to_vec();
        let table = TagDirectoryTable::build(data, 0, t, attribs, self.order);
        self.directories = vec![table];
        self.maker_note_kind = MakerNoteKind::TableSubDir;
    }

    /// Re-encodes the value for `order`. Maker notes and tables keep their
    /// own layout, only the entry itself follows.
    pub(crate) fn set_order(&mut self, order: ByteOrder) {
        if self.order == order {
            return;
        }
        self.order = order;
        if self.maker_note_kind != MakerNoteKind::None {
            return;
        }
        let width = match self.tag_type {
            TagType::Rational | TagType::SRational => 4,
            t => t.size(),
        };
        swap_elements(&mut self.value, width);
        for dir in self.directories.iter_mut() {
            dir.set_order(order);
        }
    }

    fn maker_note_size(&self) -> usize {
        let dir = self.directories.first().map_or(0, |d| d.calculate_size());
        self.value.len() + dir
    }

    fn written_count(&self) -> u32 {
        if self.directories.is_empty() {
            return self.count;
        }
        let size = self.tag_type.size();
        match self.maker_note_kind {
            MakerNoteKind::None => self.directories.len() as u32,
            MakerNoteKind::TableSubDir => (self.directories[0].calculate_size() / size) as u32,
            _ => (self.maker_note_size() / size) as u32,
        }
    }

    /// Bytes this tag needs outside its 12 byte entry.
    pub fn calculate_size(&self) -> usize {
        let padded = |len: usize| if len > 4 { len + (len & 1) } else { 0 };
        if self.directories.is_empty() {
            return padded(self.value.len());
        }
        match self.maker_note_kind {
            MakerNoteKind::None => {
                let mut size: usize = self.directories.iter().map(|d| d.calculate_size()).sum();
                if self.directories.len() > 1 {
                    size += 4 * self.directories.len();
                }
                size
            }
            MakerNoteKind::TableSubDir => padded(self.directories[0].calculate_size()),
            _ => padded(self.maker_note_size()),
        }
    }

    /// Writes the 12 byte entry at `offs` and any out of line data at
    /// `data_offs`. Returns the next free data offset.
    pub fn write(&self, offs: usize, data_offs: usize, buffer: &mut [u8]) -> usize {
        let order = self.order;
        buffer.put_u16(self.id, order, offs);
        buffer.put_u16(self.tag_type.code(), order, offs + 2);
        buffer.put_u32(self.written_count(), order, offs + 4);
        let slot = offs + 8;

        let Some(first) = self.directories.first() else {
            return write_value(&self.value, slot, data_offs, buffer, order);
        };
        match self.maker_note_kind {
            MakerNoteKind::TableSubDir => {
                let blob = first.table_bytes().unwrap_or_default();
                write_value(&blob, slot, data_offs, buffer, order)
            }
            MakerNoteKind::None => {
                buffer.put_u32(data_offs as u32, order, slot);
                if self.directories.len() == 1 {
                    return first.write(data_offs, buffer);
                }
                let mut link = data_offs;
                let mut pos = data_offs + 4 * self.directories.len();
                for dir in self.directories.iter() {
                    buffer.put_u32(pos as u32, order, link);
                    link += 4;
                    pos = dir.write(pos, buffer);
                }
                pos
            }
            MakerNoteKind::Ifd | MakerNoteKind::HeaderIfd => {
                buffer.put_u32(data_offs as u32, order, slot);
                let header = self.value.len();
                buffer[data_offs..data_offs + header].copy_from_slice(&self.value);
                let end = first.write(data_offs + header, buffer);
                end + (end & 1)
            }
            MakerNoteKind::Nikon3 => {
                buffer.put_u32(data_offs as u32, order, slot);
                let block = &mut buffer[data_offs..];
                block[..self.value.len()].copy_from_slice(&self.value);
                // embedded TIFF header with the directory right behind it
                let tiff = &mut block[10..];
                let inner = first.order();
                tiff.put_u16(inner.marker(), inner, 0);
                tiff.put_u16(42, inner, 2);
                tiff.put_u32(8, inner, 4);
                let end = first.write(8, tiff);
                data_offs + 10 + end
            }
            MakerNoteKind::Olympus2 | MakerNoteKind::Fuji => {
                buffer.put_u32(data_offs as u32, order, slot);
                let block = &mut buffer[data_offs..];
                let header = self.value.len();
                block[..header].copy_from_slice(&self.value);
                if self.maker_note_kind == MakerNoteKind::Fuji {
                    block.put_u32(header as u32, ByteOrder::Intel, 8);
                }
                let end = first.write(header, block);
                data_offs + end
            }
        }
    }
}

fn write_value(value: &[u8], slot: usize, data_offs: usize, buffer: &mut [u8], order: ByteOrder) -> usize {
    let len = value.len();
    if len > 4 {
        buffer.put_u32(data_offs as u32, order, slot);
        buffer[data_offs..data_offs + len].copy_from_slice(value);
        if len & 1 == 1 {
            buffer[data_offs + len] = 0;
        }
        data_offs + len + (len & 1)
    } else {
        buffer[slot..slot + len].copy_from_slice(value);
        buffer[slot + len..slot + 4].fill(0);
        data_offs
    }
}

/// Parses `n/d` or a decimal number.
fn parse_rational(token: &str) -> (i32, i32) {
    match token.split_once('/') {
        Some((n, d)) => (parse_int(n), parse_int(d)),
        None if token.contains('.') => ((parse_double(token) * 10000.).round() as i32, 10000),
        None => (parse_int(token), 1),
    }
}

impl fmt::Display for Tag {
    /// Raw rendering: strings up to their terminator, numbers separated by
    /// spaces, long arrays elided.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.tag_type();
        let v = &self.value;
        match t {
            TagType::Ascii => {
                let end = v.iter().position(|&b| b == 0).unwrap_or(v.len());
                f.write_str(&String::from_utf8_lossy(&v[..end]))
            }
            TagType::Undefined if !self.is_directory() => {
                let end = v.iter().position(|&b| b == 0).unwrap_or(v.len());
                let printable = end > 0
                    && v[end..].iter().all(|&b| b == 0)
                    && v[..end].iter().all(|b| b.is_ascii_graphic() || *b == b' ');
                if printable {
                    f.write_str(&String::from_utf8_lossy(&v[..end]))
                } else {
                    f.write_str("undef")
                }
            }
            _ => {
                let size = t.size();
                let total = v.len() / size;
                for i in 0..total.min(MAX_SHOWN_ELEMENTS) {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    let ofs = i * size;
                    match t {
                        TagType::Rational => write!(
                            f,
                            "{}/{}",
                            v.u32(self.order, ofs),
                            v.u32(self.order, ofs + 4)
                        )?,
                        TagType::SRational => write!(
                            f,
                            "{}/{}",
                            v.i32(self.order, ofs),
                            v.i32(self.order, ofs + 4)
                        )?,
                        TagType::Float => write!(f, "{}", v.f32(self.order, ofs))?,
                        TagType::Double => write!(f, "{}", v.f64(self.order, ofs))?,
                        TagType::Long => write!(f, "{}", v.u32(self.order, ofs))?,
                        TagType::Undefined => write!(f, "{}", v[ofs])?,
                        _ => write!(f, "{}", interpreter::decode_int(self, ofs, t))?,
                    }
                }
                if total > MAX_SHOWN_ELEMENTS {
                    f.write_str("...")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrib::{lookup_attrib, EXIF_ATTRIBS, IFD_ATTRIBS};

    #[test]
    fn attribute_type_wins_over_stored_type() {
        let attrib = lookup_attrib(EXIF_ATTRIBS, "ExposureTime").unwrap();
        // stored as LONG by a sloppy writer, described as RATIONAL
        let mut value = vec![0; 8];
        value.put_u32(1, ByteOrder::Intel, 0);
        value.put_u32(200, ByteOrder::Intel, 4);
        let tag = Tag::from_parts(0x829a, TagType::Long, 2, value, ByteOrder::Intel, Some(attrib));
        assert_eq!(tag.tag_type(), TagType::Rational);
        assert_eq!(tag.stored_type(), TagType::Long);
        assert_eq!(tag.to_double(0), 0.005);
    }

    #[test]
    fn in_place_string_keeps_count() {
        let attrib = lookup_attrib(IFD_ATTRIBS, "Artist").unwrap();
        let mut tag = Tag::with_string(attrib, ByteOrder::Intel, "abcdef");
        assert_eq!(tag.count(), 7);
        tag.from_string("xy");
        assert_eq!(tag.count(), 7);
        assert_eq!(tag.value(), b"xy\0\0\0\0\0");
        tag.from_string("0123456789");
        assert_eq!(tag.value(), b"012345\0");
    }

    #[test]
    fn rational_text_forms() {
        assert_eq!(parse_rational("1/250"), (1, 250));
        assert_eq!(parse_rational("2.5"), (25000, 10000));
        assert_eq!(parse_rational("7"), (7, 1));
    }

    #[test]
    fn byte_order_swap_per_element() {
        let mut tag = Tag::from_parts(0x0102, TagType::Short, 3, vec![8, 0, 8, 0, 8, 0], ByteOrder::Intel, None);
        tag.set_order(ByteOrder::Motorola);
        assert_eq!(tag.value(), &[0, 8, 0, 8, 0, 8]);
        assert_eq!(tag.to_int(0, TagType::Auto), 8);
    }
}
