mod common;

use common::*;
use rtexif::{ExifManager, ExifPairs, TagType, TiffOutput};

fn longs(root: &rtexif::TagDirectory, name: &str) -> Vec<i32> {
    let tag = root.get_tag(name).unwrap();
    (0..tag.count() as usize)
        .map(|i| tag.to_int(i * 4, TagType::Long))
        .collect()
}

#[test]
fn tiff_header_strip_layout() {
    init_logger();
    let icc = [1u8, 2, 3, 4, 5, 6, 7];
    let iptc = [9u8; 5];
    let output = TiffOutput {
        width: 10,
        height: 20,
        bits_per_sample: 8,
        icc_profile: Some(&icc),
        iptc: Some(&iptc),
    };
    let header = ExifManager::create_tiff_header(None, &ExifPairs::new(), &output);
    assert_eq!(&header[..8], b"II\x2a\0\x08\0\0\0");

    let root = ExifManager::parse_tiff(&header, false).unwrap();
    let end = header.len() as i32;
    assert_eq!(longs(&root, "StripOffsets"), [end, end + 240, end + 480]);
    assert_eq!(longs(&root, "StripByteCounts"), [240, 240, 120]);
    assert_eq!(root.get_tag("RowsPerStrip").unwrap().to_int(0, TagType::Long), 8);
    assert_eq!(root.get_tag("ImageWidth").unwrap().to_int(0, TagType::Auto), 10);
    assert_eq!(root.get_tag("ImageHeight").unwrap().to_int(0, TagType::Auto), 20);
    assert_eq!(root.get_tag("BitsPerSample").unwrap().to_string(), "8 8 8");
    assert_eq!(root.get_tag("SamplesPerPixel").unwrap().to_int(0, TagType::Auto), 3);
    assert_eq!(root.get_tag("ICCProfile").unwrap().value(), &icc);
    let iptc_tag = root.get_tag("IPTCData").unwrap();
    assert_eq!(iptc_tag.stored_type(), TagType::Long);
    assert_eq!(iptc_tag.count(), 2);
    assert_eq!(&iptc_tag.value()[..5], &iptc);

    let ids: Vec<u16> = root.tags().iter().map(|t| t.id()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[test]
fn tiff_header_keeps_source_metadata() {
    let b = TiffBuilder::MOTOROLA;
    let exif = Ifd::new().with(0x829a, b.rational(1, 500));
    let ifd0 = Ifd::new()
        .with(0x0100, b.long(6000))
        .with(0x010f, b.ascii("ACME"))
        .with(0x0112, b.short(8))
        .with(0x0111, b.long(0x1234))
        .with(0x8769, Value::Dir(exif));
    let source = ExifManager::parse_tiff(&b.tiff(&ifd0), false).unwrap();

    let mut changes = ExifPairs::new();
    changes.insert("Artist".into(), "Me".into());
    let output = TiffOutput {
        width: 64,
        height: 8,
        bits_per_sample: 16,
        ..Default::default()
    };
    let header = ExifManager::create_tiff_header(Some(&source), &changes, &output);
    assert_eq!(&header[..2], b"MM");

    let root = ExifManager::parse_tiff(&header, false).unwrap();
    let show = |name: &str| root.get_tag(name).unwrap().value_to_string(&root);
    assert_eq!(show("ImageWidth"), "64");
    assert_eq!(show("Make"), "ACME");
    assert_eq!(show("Artist"), "Me");
    assert_eq!(show("Orientation"), "Rotate 270 CW");
    assert_eq!(show("ResolutionUnit"), "Inches");
    assert_eq!(show("ExposureTime"), "1/500");
    assert_eq!(longs(&root, "StripOffsets"), [header.len() as i32]);
    assert_eq!(longs(&root, "StripByteCounts"), [64 * 3 * 2 * 8]);
    assert!(root.get_tag("ICCProfile").is_none());
    assert!(root.get_tag("Software").unwrap().to_string().starts_with("rtexif "));
}
