//! Container level entry points: parse a TIFF, JPEG or CIFF container into
//! a tag tree, and build output metadata blocks from a tree plus a list of
//! field overrides.
use crate::attrib::{lookup_attrib, EXIF_ATTRIBS, IFD_ATTRIBS};
use crate::ciff;
use crate::directory::TagDirectory;
use crate::jpeg;
use crate::parser;
use crate::tag::Tag;
use crate::utility::{ByteOrder, PutNumToBytes};
use crate::value::TagType;
use crate::ToReport;
use erreport::Report;
use log::debug;
use std::collections::BTreeMap;

/// Field path => new value. Paths use `.` or `/` between directory
/// names, values `#keep` and `#delete` toggle writing of existing tags.
pub type ExifPairs = BTreeMap<String, String>;

const TIFF_HEADER_LEN: usize = 8;
const ROWS_PER_STRIP: u32 = 8;
const SAMPLES_PER_PIXEL: u32 = 3;

/// Geometry and payloads of an uncompressed RGB TIFF to be written.
#[derive(Debug, Clone, Copy, Default)]
pub struct TiffOutput<'a> {
    pub width: u32,
    pub height: u32,
    pub bits_per_sample: u16,
    pub icc_profile: Option<&'a [u8]>,
    pub iptc: Option<&'a [u8]>,
}

impl TiffOutput<'_> {
    fn strip_bytes(&self) -> u32 {
        ROWS_PER_STRIP * self.row_bytes()
    }

    fn row_bytes(&self) -> u32 {
        self.width * SAMPLES_PER_PIXEL * self.bits_per_sample as u32 / 8
    }

    fn strips(&self) -> u32 {
        self.height.div_ceil(ROWS_PER_STRIP)
    }
}

pub struct ExifManager;

impl ExifManager {
    /// Parses the TIFF structure with its header at `base`. Nikon trees
    /// without an Exif ISO get one from the maker note, Kodak trees get
    /// the shot settings of their textual info.
    pub fn parse(buffer: &[u8], base: usize, skip_ignored: bool) -> Result<TagDirectory, Report> {
        let mut root = parser::parse_tiff_block(buffer, base, skip_ignored)?;
        fix_nikon_iso(&mut root);
        fix_kodak_textual_info(&mut root);
        Ok(root)
    }

    pub fn parse_tiff(buffer: &[u8], skip_ignored: bool) -> Result<TagDirectory, Report> {
        Self::parse(buffer, 0, skip_ignored)
    }

    /// Parses the Exif APP1 segment of a JPEG file.
    pub fn parse_jpeg(buffer: &[u8]) -> Result<TagDirectory, Report> {
        let base = jpeg::find_exif(buffer).to_report()?;
        debug!("Exif block of the jpeg at {:#x}.", base);
        Self::parse(buffer, base, true)
    }

    /// Parses the CIFF heap of `length` bytes at `base`.
    pub fn parse_ciff(buffer: &[u8], base: usize, length: usize) -> Result<TagDirectory, Report> {
        ciff::parse_ciff(buffer, base, length).to_report()
    }

    /// Parses a whole CRW file.
    pub fn parse_crw(buffer: &[u8]) -> Result<TagDirectory, Report> {
        ciff::parse_crw(buffer).to_report()
    }

    /// Tags every TIFF written from scratch carries: a single RGB image of
    /// `width` x `height` at `bits_per_sample`.
    pub fn default_tiff_tags(output: &TiffOutput, order: ByteOrder) -> Vec<Tag> {
        let bps = output.bits_per_sample as i32;
        let ints: [(&str, i32, TagType); 7] = [
            ("ImageWidth", output.width as i32, TagType::Long),
            ("ImageHeight", output.height as i32, TagType::Long),
            ("ResolutionUnit", 2, TagType::Short),
            ("Orientation", 1, TagType::Short),
            ("SamplesPerPixel", SAMPLES_PER_PIXEL as i32, TagType::Short),
            ("PlanarConfiguration", 1, TagType::Short),
            ("PhotometricInterpretation", 2, TagType::Short),
        ];
        let mut tags: Vec<Tag> = ints
            .into_iter()
            .filter_map(|(name, v, t)| Some(Tag::with_int(lookup_attrib(IFD_ATTRIBS, name)?, order, v, t)))
            .collect();
        tags.extend(lookup_attrib(IFD_ATTRIBS, "Compression").map(|a| Tag::with_int(a, order, 1, TagType::Short)));
        for name in ["XResolution", "YResolution"] {
            tags.extend(lookup_attrib(IFD_ATTRIBS, name).map(|a| Tag::with_rational(a, order, 300, 1)));
        }
        if let Some(a) = lookup_attrib(IFD_ATTRIBS, "Software") {
            let software = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));
            tags.push(Tag::with_string(a, order, software));
        }
        if let Some(a) = lookup_attrib(IFD_ATTRIBS, "BitsPerSample") {
            let mut tag = Tag::new(a, order);
            tag.init_int(bps, TagType::Short, SAMPLES_PER_PIXEL);
            for i in 1..SAMPLES_PER_PIXEL as usize {
                tag.set_int(bps, i * 2, TagType::Short);
            }
            tags.push(tag);
        }
        tags
    }

    /// Serializes `root` as a TIFF block, header included, with no change.
    pub fn write_tiff_block(root: &TagDirectory) -> Vec<u8> {
        let mut buffer = vec![0; TIFF_HEADER_LEN + root.calculate_size()];
        write_header(root.order(), &mut buffer);
        root.write(TIFF_HEADER_LEN, &mut buffer);
        buffer
    }

    /// Serializes `root` as an APP1 segment with no change.
    pub fn write_jpeg_segment(root: &TagDirectory) -> Result<Vec<u8>, Report> {
        jpeg::app1_segment(&Self::write_tiff_block(root)).to_report()
    }

    /// Builds the APP1 segment of a `width` x `height` JPEG: a copy of
    /// `root` (or an empty IFD0) with `changes` applied and the pixel
    /// dimensions updated.
    pub fn create_jpeg_marker(
        root: Option<&TagDirectory>,
        changes: &ExifPairs,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, Report> {
        let mut cl = clone_root(root);
        apply_changes(&mut cl, changes);

        let order = cl.order();
        if let Some(exif) = exif_dir_mut(&mut cl) {
            for (name, v) in [("PixelXDimension", width), ("PixelYDimension", height)] {
                if let Some(a) = lookup_attrib(EXIF_ATTRIBS, name) {
                    exif.replace_tag(Tag::with_int(a, order, v as i32, TagType::Long));
                }
            }
        }

        cl.sort();
        Self::write_jpeg_segment(&cl)
    }

    /// Builds the header of an uncompressed TIFF: TIFF header, IFD0 with
    /// the strip layout and everything `root` holds, then the metadata.
    /// The strips are expected right after the returned bytes.
    pub fn create_tiff_header(root: Option<&TagDirectory>, changes: &ExifPairs, output: &TiffOutput) -> Vec<u8> {
        let mut cl = clone_root(root);
        let order = cl.order();
        let strips = output.strips();

        if let Some(a) = lookup_attrib(IFD_ATTRIBS, "RowsPerStrip") {
            cl.replace_tag(Tag::with_int(a, order, ROWS_PER_STRIP as i32, TagType::Long));
        }
        if let Some(a) = lookup_attrib(IFD_ATTRIBS, "StripByteCounts") {
            let mut counts = Tag::new(a, order);
            counts.init_int(0, TagType::Long, strips);
            for i in 0..strips as usize {
                counts.set_int(output.strip_bytes() as i32, i * 4, TagType::Long);
            }
            let remaining = output.height % ROWS_PER_STRIP;
            if strips > 0 && remaining > 0 {
                let last = (strips as usize - 1) * 4;
                counts.set_int((remaining * output.row_bytes()) as i32, last, TagType::Long);
            }
            cl.replace_tag(counts);
        }
        if let Some(a) = lookup_attrib(IFD_ATTRIBS, "StripOffsets") {
            let mut offsets = Tag::new(a, order);
            offsets.init_int(0, TagType::Long, strips);
            cl.replace_tag(offsets);
        }
        if let (Some(icc), Some(a)) = (output.icc_profile, lookup_attrib(IFD_ATTRIBS, "ICCProfile")) {
            let mut tag = Tag::new(a, order);
            tag.init_undef_array(icc);
            cl.replace_tag(tag);
        }
        if let (Some(iptc), Some(a)) = (output.iptc, lookup_attrib(IFD_ATTRIBS, "IPTCData")) {
            let mut tag = Tag::new(a, order);
            tag.init_long_array(iptc);
            cl.replace_tag(tag);
        }

        apply_changes(&mut cl, changes);

        // geometry always follows the output, the rest only fills gaps
        for tag in Self::default_tiff_tags(output, order) {
            match tag.attrib().map(|a| a.name) {
                Some("ImageWidth" | "ImageHeight" | "BitsPerSample" | "SamplesPerPixel" | "Compression"
                | "PlanarConfiguration" | "PhotometricInterpretation") => cl.replace_tag(tag),
                _ => {
                    cl.add_tag(tag);
                }
            }
        }
        cl.sort();

        let mut buffer = vec![0; TIFF_HEADER_LEN + cl.calculate_size()];
        let end = buffer.len() as u32;
        if let Some(offsets) = cl.get_tag_p_mut("StripOffsets") {
            for i in 0..strips {
                offsets.set_int((end + i * output.strip_bytes()) as i32, i as usize * 4, TagType::Long);
            }
        }
        write_header(order, &mut buffer);
        cl.write(TIFF_HEADER_LEN, &mut buffer);
        buffer
    }
}

fn write_header(order: ByteOrder, buffer: &mut [u8]) {
    buffer.put_u16(order.marker(), order, 0);
    buffer.put_u16(42, order, 2);
    buffer.put_u32(TIFF_HEADER_LEN as u32, order, 4);
}

fn clone_root(root: Option<&TagDirectory>) -> TagDirectory {
    root.cloned()
        .unwrap_or_else(|| TagDirectory::new(IFD_ATTRIBS, ByteOrder::Intel))
}

/// Exif directory of `root`, created empty when missing.
fn exif_dir_mut(root: &mut TagDirectory) -> Option<&mut TagDirectory> {
    if root.get_local_tag("Exif").is_none() {
        let mut exif = Tag::new(lookup_attrib(IFD_ATTRIBS, "Exif")?, root.order());
        exif.init_sub_dir();
        root.add_tag(exif);
    }
    root.get_tag_p_mut("Exif").and_then(|t| t.directory_mut(0))
}

fn apply_changes(dir: &mut TagDirectory, changes: &ExifPairs) {
    for (field, value) in changes.iter() {
        debug!("Change {} to {}.", field, value);
        dir.apply_change(field, value);
    }
}

/// Nikon bodies record the ISO only in their maker note.
fn fix_nikon_iso(root: &mut TagDirectory) {
    let is_nikon = root
        .get_local_tag("Make")
        .map_or(false, |t| t.to_string().to_uppercase().starts_with("NIKON"));
    if !is_nikon || root.get_tag_p("Exif/ISOSpeedRatings").is_some() {
        return;
    }
    let Some(iso) = root
        .get_tag_p("Exif/MakerNote/ISOSpeed")
        .map(|t| t.to_int(2, TagType::Short))
        .filter(|&iso| iso > 0)
    else {
        return;
    };
    let Some(exif) = root.get_tag_p_mut("Exif").and_then(|t| t.directory_mut(0)) else {
        return;
    };
    if let Some(a) = lookup_attrib(EXIF_ATTRIBS, "ISOSpeedRatings") {
        let order = exif.order();
        exif.add_tag_front(Tag::with_int(a, order, iso, TagType::Short));
        debug!("ISO {} taken from the Nikon maker note.", iso);
    }
}

/// Kodak bodies describe the shot in `key: value` lines of their
/// TextualInfo tag. Exif fields still missing are filled from it.
fn fix_kodak_textual_info(root: &mut TagDirectory) {
    let Some(text) = root
        .find_tag("TextualInfo")
        .map(|t| String::from_utf8_lossy(t.value()).trim_end_matches('\0').to_owned())
    else {
        return;
    };
    let tags = kodak_textual_tags(&text, root.order());
    if tags.is_empty() {
        return;
    }
    let Some(exif) = exif_dir_mut(root) else {
        return;
    };
    let mut added = 0;
    for tag in tags {
        if exif.get_tag_by_id(tag.id()).is_none() && exif.add_tag(tag) {
            added += 1;
        }
    }
    if added > 0 {
        exif.sort();
        debug!("{} Exif tags taken from the Kodak textual info.", added);
    }
}

fn kodak_textual_tags(text: &str, order: ByteOrder) -> Vec<Tag> {
    let exif = |name: &str| lookup_attrib(EXIF_ATTRIBS, name);
    // rationals with one decimal, as the text prints them
    let tenths = |v: &str| v.trim().parse::<f64>().ok().map(|f| (f * 10.).round() as i32);

    let mut tags = vec![];
    let (mut date, mut time) = (None, None);
    for line in text.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "Date" => date = Some(value.replace('/', ":")),
            "Time" => time = Some(value.to_owned()),
            "ISO" | "ISO Speed" => {
                if let (Some(a), Ok(iso)) = (exif("ISOSpeedRatings"), value.parse::<i32>()) {
                    tags.push(Tag::with_int(a, order, iso, TagType::Short));
                }
            }
            "Exposure" | "Shutter" => {
                if let (Some(a), Some((num, den))) = (exif("ExposureTime"), parse_exposure(value)) {
                    tags.push(Tag::with_rational(a, order, num, den));
                }
            }
            "Aperture" => {
                let number = value.trim_start_matches(['F', 'f', '/']);
                if let (Some(a), Some(f)) = (exif("FNumber"), tenths(number)) {
                    tags.push(Tag::with_rational(a, order, f, 10));
                }
            }
            "Focal" | "Focal Length" => {
                if let (Some(a), Some(f)) = (exif("FocalLength"), tenths(value.trim_end_matches("mm"))) {
                    tags.push(Tag::with_rational(a, order, f, 10));
                }
            }
            "Exposure Mode" | "Exposure Program" => {
                let program = match value {
                    "Manual" => 1,
                    "Program" => 2,
                    "Aperture Priority" => 3,
                    "Shutter Priority" => 4,
                    _ => continue,
                };
                if let Some(a) = exif("ExposureProgram") {
                    tags.push(Tag::with_int(a, order, program, TagType::Short));
                }
            }
            _ => {}
        }
    }
    if let (Some(date), Some(time), Some(a)) = (date, time, exif("DateTimeOriginal")) {
        tags.push(Tag::with_string(a, order, &format!("{} {}", date, time)));
    }
    tags
}

/// `1/250`, `2` or `0.5` seconds as a rational.
fn parse_exposure(text: &str) -> Option<(i32, i32)> {
    if let Some((num, den)) = text.split_once('/') {
        let den: i32 = den.trim().parse().ok()?;
        return (den > 0).then_some((num.trim().parse().ok()?, den));
    }
    let secs: f64 = text.trim_end_matches('s').trim().parse().ok()?;
    if secs.fract() == 0. {
        Some((secs as i32, 1))
    } else {
        Some(((secs * 1000.).round() as i32, 1000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_layout() {
        let output = TiffOutput {
            width: 10,
            height: 20,
            bits_per_sample: 16,
            ..Default::default()
        };
        assert_eq!(output.strips(), 3);
        assert_eq!(output.row_bytes(), 60);
        assert_eq!(output.strip_bytes(), 480);
    }

    #[test]
    fn default_tags_carry_geometry() {
        let output = TiffOutput {
            width: 640,
            height: 480,
            bits_per_sample: 8,
            ..Default::default()
        };
        let tags = ExifManager::default_tiff_tags(&output, ByteOrder::Motorola);
        let find = |name: &str| tags.iter().find(|t| t.name() == name).unwrap();
        assert_eq!(find("ImageWidth").to_int(0, TagType::Auto), 640);
        assert_eq!(find("ImageHeight").to_int(0, TagType::Auto), 480);
        assert_eq!(find("BitsPerSample").count(), 3);
        assert_eq!(find("BitsPerSample").to_int(4, TagType::Auto), 8);
        assert_eq!(find("XResolution").to_double(0), 300.);
        assert!(find("Software").to_string().starts_with("rtexif"));
        assert_eq!(tags.len(), 12);
    }

    #[test]
    fn exposure_text() {
        assert_eq!(parse_exposure("1/250"), Some((1, 250)));
        assert_eq!(parse_exposure("2"), Some((2, 1)));
        assert_eq!(parse_exposure("0.5 s"), Some((500, 1000)));
        assert_eq!(parse_exposure("1/0"), None);
        assert_eq!(parse_exposure("bulb"), None);
    }

    #[test]
    fn kodak_lines_become_exif_tags() {
        let text = "Camera: DCS Pro 14N\nDate: 2003/10/22\nTime: 10:10:15\nISO: 160\nNotes: none\n";
        let tags = kodak_textual_tags(text, ByteOrder::Intel);
        let names: Vec<_> = tags.iter().map(|t| t.name()).collect();
        assert_eq!(names, ["ISOSpeedRatings", "DateTimeOriginal"]);
        assert_eq!(tags[1].to_string(), "2003:10:22 10:10:15");
    }
}
