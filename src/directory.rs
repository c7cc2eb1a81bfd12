//! Ordered collections of tags (IFDs) and fixed-layout table directories.
//!
use crate::attrib::{attrib_by_id, lookup_attrib, TagAttrib};
use crate::tag::Tag;
use crate::utility::{ByteOrder, PutNumToBytes};
use crate::value::TagType;
use std::fmt;

/// Bytes of an IFD besides its entries: the entry count and the link to
/// the next IFD.
const DIRECTORY_OVERHEAD: usize = 2 + 4;
const ENTRY_SIZE: usize = 12;

#[derive(Clone)]
pub struct TagDirectory {
    tags: Vec<Tag>,
    attribs: &'static [TagAttrib],
    order: ByteOrder,
    table: Option<TagDirectoryTable>,
}

/// Binary blob whose elements are addressed by index instead of by an
/// IFD entry. Element `i` lives at `zero_offset + i * size(default_type)`.
#[derive(Debug, Clone)]
pub struct TagDirectoryTable {
    values: Vec<u8>,
    zero_offset: usize,
    default_type: TagType,
}

impl fmt::Debug for TagDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagDirectory")
            .field("order", &self.order)
            .field("table", &self.table.is_some())
            .field("tags", &self.tags)
            .finish()
    }
}

/// Splits `Name[3]` into `("Name", Some(3))`.
fn split_index(segment: &str) -> (&str, Option<usize>) {
    if let Some(open) = segment.find('[') {
        if let Some(index) = segment[open + 1..]
            .strip_suffix(']')
            .and_then(|x| x.parse().ok())
        {
            return (&segment[..open], Some(index));
        }
    }
    (segment, None)
}

impl TagDirectory {
    pub fn new(attribs: &'static [TagAttrib], order: ByteOrder) -> Self {
        TagDirectory {
            tags: vec![],
            attribs,
            order,
            table: None,
        }
    }

    pub fn attribs(&self) -> &'static [TagAttrib] {
        self.attribs
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Re-encodes every value for `order`, except inside maker notes and
    /// tables which keep their own layout.
    pub fn set_order(&mut self, order: ByteOrder) {
        if self.table.is_some() {
            return;
        }
        self.order = order;
        for tag in self.tags.iter_mut() {
            tag.set_order(order);
        }
    }

    pub fn count(&self) -> usize {
        self.tags.len()
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn tags_mut(&mut self) -> &mut [Tag] {
        &mut self.tags
    }

    pub fn table(&self) -> Option<&TagDirectoryTable> {
        self.table.as_ref()
    }

    pub fn is_table(&self) -> bool {
        self.table.is_some()
    }

    pub fn get_attrib_by_id(&self, id: u16) -> Option<&'static TagAttrib> {
        attrib_by_id(self.attribs, id)
    }

    /// Attribute named `name` in this directory's table or, failing that,
    /// in the table of any nested directory.
    pub fn get_attrib(&self, name: &str) -> Option<&'static TagAttrib> {
        lookup_attrib(self.attribs, name).or_else(|| {
            self.tags
                .iter()
                .flat_map(|t| t.directories())
                .find_map(|d| d.get_attrib(name))
        })
    }

    /// Follows a `/` separated path through the static tables only, so it
    /// resolves attributes of directories that do not exist yet.
    pub fn get_attrib_p(&self, path: &str) -> Option<&'static TagAttrib> {
        let mut table = self.attribs;
        let mut segments = path.split('/').filter(|s| !s.is_empty()).peekable();
        while let Some(segment) = segments.next() {
            let (name, _) = split_index(segment);
            let attrib = lookup_attrib(table, name)?;
            if segments.peek().is_none() {
                return Some(attrib);
            }
            table = attrib.sub_attribs?;
        }
        None
    }

    pub fn get_tag_by_id(&self, id: u16) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id() == id)
    }

    pub fn get_tag_by_id_mut(&mut self, id: u16) -> Option<&mut Tag> {
        self.tags.iter_mut().find(|t| t.id() == id)
    }

    /// Tag of this directory only.
    pub fn get_local_tag(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name() == name)
    }

    /// Resolves `name` as a path when it contains `/`, else searches the
    /// whole subtree.
    pub fn get_tag(&self, name: &str) -> Option<&Tag> {
        if name.contains('/') {
            self.get_tag_p(name)
        } else {
            self.find_tag(name)
        }
    }

    pub fn get_tag_mut(&mut self, name: &str) -> Option<&mut Tag> {
        if name.contains('/') {
            self.get_tag_p_mut(name)
        } else {
            self.find_tag_mut(name)
        }
    }

    /// Depth first search, local tags before nested ones.
    pub fn find_tag(&self, name: &str) -> Option<&Tag> {
        if let Some(tag) = self.get_local_tag(name) {
            return Some(tag);
        }
        self.tags
            .iter()
            .flat_map(|t| t.directories())
            .find_map(|d| d.find_tag(name))
    }

    pub fn find_tag_mut(&mut self, name: &str) -> Option<&mut Tag> {
        if let Some(i) = self.tags.iter().position(|t| t.name() == name) {
            return Some(&mut self.tags[i]);
        }
        let (ti, di) = self.tags.iter().enumerate().find_map(|(ti, t)| {
            t.directories()
                .iter()
                .position(|d| d.find_tag(name).is_some())
                .map(|di| (ti, di))
        })?;
        self.tags[ti].directory_mut(di)?.find_tag_mut(name)
    }

    /// Path like `Exif/MakerNote/LensType`. `Name[i]` selects the i-th
    /// directory of a tag holding several.
    pub fn get_tag_p(&self, path: &str) -> Option<&Tag> {
        let path = path.trim_start_matches('/');
        let (head, rest) = match path.split_once('/') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        let (name, index) = split_index(head);
        let tag = self.get_local_tag(name)?;
        match rest {
            None => Some(tag),
            Some(rest) => tag.directory(index.unwrap_or(0))?.get_tag_p(rest),
        }
    }

    pub fn get_tag_p_mut(&mut self, path: &str) -> Option<&mut Tag> {
        let path = path.trim_start_matches('/');
        let (head, rest) = match path.split_once('/') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        let (name, index) = split_index(head);
        let tag = self.tags.iter_mut().find(|t| t.name() == name)?;
        match rest {
            None => Some(tag),
            Some(rest) => tag.directory_mut(index.unwrap_or(0))?.get_tag_p_mut(rest),
        }
    }

    /// Appends `tag` unless one with the same id is already present.
    pub fn add_tag(&mut self, tag: Tag) -> bool {
        if self.get_tag_by_id(tag.id()).is_some() {
            log::debug!("duplicate tag {} dropped", tag.name());
            return false;
        }
        self.tags.push(tag);
        true
    }

    pub fn add_tag_front(&mut self, tag: Tag) -> bool {
        if self.get_tag_by_id(tag.id()).is_some() {
            log::debug!("duplicate tag {} dropped", tag.name());
            return false;
        }
        self.tags.insert(0, tag);
        true
    }

    /// Swaps in `tag` for the one with the same id, or appends it.
    pub fn replace_tag(&mut self, tag: Tag) {
        match self.tags.iter_mut().find(|t| t.id() == tag.id()) {
            Some(slot) => *slot = tag,
            None => self.tags.push(tag),
        }
    }

    /// Marks the tag with `id` to be written.
    pub fn keep_tag(&mut self, id: u16) {
        if let Some(tag) = self.get_tag_by_id_mut(id) {
            tag.set_keep(true);
        }
    }

    /// Orders tags by id at every level.
    pub fn sort(&mut self) {
        self.tags.sort_by_key(|t| t.id());
        for tag in self.tags.iter_mut() {
            for i in 0..tag.directories().len() {
                if let Some(dir) = tag.directory_mut(i) {
                    dir.sort();
                }
            }
        }
    }

    fn written_tags(&self) -> impl Iterator<Item = &Tag> {
        self.tags
            .iter()
            .filter(|t| t.keep() && t.stored_type().is_concrete())
    }

    /// Serialized size including the data of every nested structure.
    pub fn calculate_size(&self) -> usize {
        if let Some(table) = &self.table {
            return table.values.len();
        }
        let entries = self.written_tags().count();
        let data: usize = self.written_tags().map(|t| t.calculate_size()).sum();
        DIRECTORY_OVERHEAD + ENTRY_SIZE * entries + data
    }

    /// Writes the directory at `start` with its data right behind the
    /// entries. The next IFD link is always 0. Returns the end offset.
    pub fn write(&self, start: usize, buffer: &mut [u8]) -> usize {
        if let Some(blob) = self.table_bytes() {
            buffer[start..start + blob.len()].copy_from_slice(&blob);
            return start + blob.len();
        }
        let size = self.calculate_size();
        let entries = self.written_tags().count();
        buffer.put_u16(entries as u16, self.order, start);
        let mut pos = start + 2;
        let mut data_offs = pos + ENTRY_SIZE * entries + 4;
        for tag in self.written_tags() {
            data_offs = tag.write(pos, data_offs, buffer);
            pos += ENTRY_SIZE;
        }
        buffer.put_u32(0, self.order, pos);
        debug_assert_eq!(data_offs, start + size);
        start + size
    }

    /// Table blob with every tag's current value laid over it.
    pub fn table_bytes(&self) -> Option<Vec<u8>> {
        let table = self.table.as_ref()?;
        let mut blob = table.values.clone();
        for tag in self.tags.iter() {
            let ofs = table.offset_of(tag.id() as usize);
            let value = tag.value();
            if let Some(dst) = blob.get_mut(ofs..ofs + value.len()) {
                dst.copy_from_slice(value);
            }
        }
        Some(blob)
    }

    /// Applies one textual edit. `field` is a `.` or `/` separated path,
    /// `value` the new text, or `#keep` / `#delete` to toggle writing.
    /// Missing editable tags and directories are created from the
    /// attribute tables.
    pub fn apply_change(&mut self, field: &str, value: &str) {
        let is_flag = value == "#keep" || value == "#delete";
        let Some(split) = field.find(|c| c == '.' || c == '/') else {
            return self.apply_final_change(field, value, is_flag);
        };
        let (segment, rest) = (&field[..split], &field[split + 1..]);
        let (name, index) = split_index(segment);
        let index = index.unwrap_or(0);

        if let Some(tag) = self
            .tags
            .iter_mut()
            .find(|t| t.is_directory() && t.name() == name)
        {
            if let Some(dir) = tag.directory_mut(index) {
                dir.apply_change(rest, value);
            }
            return;
        }
        if is_flag {
            return;
        }
        let Some(attrib) = lookup_attrib(self.attribs, name).filter(|a| a.sub_attribs.is_some()) else {
            log::debug!("no directory {} to apply {}", name, field);
            return;
        };
        if self.get_tag_by_id(attrib.id).is_some() {
            return;
        }
        let mut tag = Tag::new(attrib, self.order);
        tag.init_sub_dir();
        if let Some(dir) = tag.directory_mut(0) {
            dir.apply_change(rest, value);
        }
        self.tags.push(tag);
    }

    fn apply_final_change(&mut self, name: &str, value: &str, is_flag: bool) {
        if let Some(tag) = self.tags.iter_mut().find(|t| t.name() == name) {
            match value {
                "#keep" => tag.set_keep(true),
                "#delete" => tag.set_keep(false),
                _ if !tag.is_directory() => tag.value_from_string(value),
                _ => {}
            }
            return;
        }
        if is_flag {
            return;
        }
        let Some(attrib) = lookup_attrib(self.attribs, name)
            .filter(|a| a.editable && a.sub_attribs.is_none())
        else {
            log::debug!("tag {} is not editable", name);
            return;
        };
        let mut tag = Tag::new(attrib, self.order);
        match attrib.tag_type {
            TagType::Ascii | TagType::Auto => tag.init_string(value),
            TagType::Undefined => tag.init_undef_array(value.as_bytes()),
            t => tag.init_int(0, t, 1),
        }
        tag.value_from_string(value);
        if self.table.is_none() {
            self.tags.push(tag);
        }
    }

    /// One line per tag, nested directories indented.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(self, 0, &mut out);
        out
    }

    fn dump_into(&self, scope: &TagDirectory, level: usize, out: &mut String) {
        let indent = "  ".repeat(level);
        for tag in self.tags.iter() {
            if tag.is_directory() {
                for (i, dir) in tag.directories().iter().enumerate() {
                    out.push_str(&format!("{}{}:\n", indent, tag.name_indexed(i)));
                    dir.dump_into(scope, level + 1, out);
                }
            } else {
                out.push_str(&format!(
                    "{}{} = {}\n",
                    indent,
                    tag.name(),
                    tag.value_to_string(scope)
                ));
            }
        }
    }
}

impl TagDirectoryTable {
    /// Builds a table directory over `values`. Every attribute within
    /// range yields a tag; indices not covered by any attribute yield
    /// unknown tags of `default_type`.
    pub fn build(
        values: &[u8],
        zero_offset: usize,
        default_type: TagType,
        attribs: &'static [TagAttrib],
        order: ByteOrder,
    ) -> TagDirectory {
        let table = TagDirectoryTable {
            values: values.to_vec(),
            zero_offset,
            default_type,
        };
        let mut tags = vec![];
        let mut covered = zero_offset;
        for index in 0..table.len() {
            let ofs = table.offset_of(index);
            let mut described = false;
            for attrib in attribs.iter().filter(|a| a.id as usize == index) {
                described = true;
                let (t, count) = match attrib.tag_type {
                    // text runs up to the next described element
                    TagType::Ascii => {
                        let next = attribs
                            .iter()
                            .map(|a| a.id as usize)
                            .filter(|&i| i > index)
                            .min()
                            .unwrap_or(table.len())
                            .min(table.len());
                        let end = table.offset_of(next).min(values.len());
                        (TagType::Ascii, end.saturating_sub(ofs))
                    }
                    t if t.is_concrete() => (t, 1),
                    _ => (default_type, 1),
                };
                let len = t.size() * count;
                let Some(bytes) = values.get(ofs..ofs + len).filter(|b| !b.is_empty()) else {
                    continue;
                };
                tags.push(Tag::from_parts(index as u16, t, count as u32, bytes.to_vec(), order, Some(attrib)));
                covered = covered.max(ofs + len);
            }
            // bytes already owned by a wider element stay with it
            if !described && ofs >= covered {
                let size = default_type.size();
                tags.push(Tag::from_parts(
                    index as u16,
                    default_type,
                    1,
                    values[ofs..ofs + size].to_vec(),
                    order,
                    None,
                ));
                covered = ofs + size;
            }
        }
        TagDirectory {
            tags,
            attribs,
            order,
            table: Some(table),
        }
    }

    /// Number of addressable elements.
    pub fn len(&self) -> usize {
        let n = self.values.len().saturating_sub(self.zero_offset) / self.default_type.size();
        n.min(u16::MAX as usize + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn zero_offset(&self) -> usize {
        self.zero_offset
    }

    pub fn default_type(&self) -> TagType {
        self.default_type
    }

    pub fn offset_of(&self, index: usize) -> usize {
        self.zero_offset + index * self.default_type.size()
    }

    /// Index of the element stored at byte `offset` of the blob.
    pub fn index_of(&self, offset: usize) -> Option<usize> {
        if offset < self.zero_offset || offset >= self.values.len() {
            return None;
        }
        Some((offset - self.zero_offset) / self.default_type.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrib::{EXIF_ATTRIBS, IFD_ATTRIBS, PENTAX_LENS_INFO_Q_ATTRIBS};

    #[test]
    fn path_segment_index() {
        assert_eq!(split_index("SubIFD[2]"), ("SubIFD", Some(2)));
        assert_eq!(split_index("Exif"), ("Exif", None));
        assert_eq!(split_index("Odd[x]"), ("Odd[x]", None));
    }

    #[test]
    fn table_index_from_zero_offset() {
        let dir = TagDirectoryTable::build(&[0u8; 32], 16, TagType::Byte, &[], ByteOrder::Intel);
        let table = dir.table().unwrap();
        assert_eq!(table.index_of(20), Some(4));
        assert_eq!(table.index_of(8), None);
        assert_eq!(table.offset_of(4), 20);
        assert_eq!(dir.count(), 16);
    }

    #[test]
    fn nested_tag_is_editable() {
        let mut exif = TagDirectory::new(EXIF_ATTRIBS, ByteOrder::Intel);
        let iso = lookup_attrib(EXIF_ATTRIBS, "ISOSpeedRatings").unwrap();
        exif.add_tag(Tag::with_int(iso, ByteOrder::Intel, 100, TagType::Short));
        let mut pointer = Tag::new(lookup_attrib(IFD_ATTRIBS, "Exif").unwrap(), ByteOrder::Intel);
        pointer.init_sub_dir_with(exif);
        let mut root = TagDirectory::new(IFD_ATTRIBS, ByteOrder::Intel);
        root.add_tag(pointer);

        root.find_tag_mut("ISOSpeedRatings").unwrap().set_int(400, 0, TagType::Short);
        assert_eq!(root.get_tag_p("Exif/ISOSpeedRatings").unwrap().to_int(0, TagType::Short), 400);
        assert!(root.find_tag_mut("FNumber").is_none());
    }

    #[test]
    fn table_text_spans_to_next_element() {
        let mut blob = vec![0u8; 64];
        blob[12..25].copy_from_slice(b"01 Standard P");
        blob[42..46].copy_from_slice(b"TAIL");
        let dir = TagDirectoryTable::build(&blob, 0, TagType::Byte, PENTAX_LENS_INFO_Q_ATTRIBS, ByteOrder::Intel);
        let model = dir.get_tag("LensModel").unwrap();
        assert_eq!(model.count(), 30);
        assert_eq!(model.to_string(), "01 Standard P");
        assert_eq!(dir.get_tag("LensInfo").unwrap().to_string(), "TAIL");
        // bytes inside the strings are not exposed separately
        assert!(dir.get_tag_by_id(13).is_none());
        assert!(dir.get_tag_by_id(11).is_some());
        assert_eq!(dir.table_bytes().unwrap(), blob);
    }

    #[test]
    fn empty_directory_size() {
        let dir = TagDirectory::new(&[], ByteOrder::Intel);
        assert_eq!(dir.calculate_size(), 6);
    }
}
