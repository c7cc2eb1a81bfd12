mod common;

use common::*;
use rtexif::{ByteOrder, ExifManager, ExifPairs, TagType};

fn sample(b: TiffBuilder) -> Vec<u8> {
    let exif = Ifd::new()
        .with(0x829a, b.rational(1, 250))
        .with(0x829d, b.rational(28, 10))
        .with(0x8827, b.short(200))
        .with(0x9204, b.srational(-1, 3))
        .with(0x920a, b.rational(50, 1))
        .with(0x9286, b.undefined(b"ASCII\0\0\0hello"))
        .with(0x9999, b.long(7));
    let ifd0 = Ifd::new()
        .with(0x010f, b.ascii("ACME"))
        .with(0x0110, b.ascii("Model 1"))
        .with(0x0112, b.short(6))
        .with(0x011a, b.rational(300, 1))
        .with(0x013b, b.ascii("Someone"))
        .with(0x8769, Value::Dir(exif));
    b.tiff(&ifd0)
}

#[test]
fn round_trip_both_orders() {
    init_logger();
    for b in [TiffBuilder::INTEL, TiffBuilder::MOTOROLA] {
        let data = sample(b);
        let root = ExifManager::parse_tiff(&data, false).unwrap();
        assert_eq!(ExifManager::write_tiff_block(&root), data);
    }
}

#[test]
fn interpreted_values() {
    let data = sample(TiffBuilder::MOTOROLA);
    let root = ExifManager::parse_tiff(&data, false).unwrap();
    assert_eq!(root.order(), ByteOrder::Motorola);

    let show = |name: &str| root.get_tag(name).unwrap().value_to_string(&root);
    assert_eq!(show("ExposureTime"), "1/250");
    assert_eq!(show("FNumber"), "2.8");
    assert_eq!(show("ExposureBiasValue"), "-0.33");
    assert_eq!(show("FocalLength"), "50.0");
    assert_eq!(show("UserComment"), "hello");
    assert_eq!(show("Orientation"), "Rotate 90 CW");
    assert_eq!(show("Model"), "Model 1");
    assert_eq!(show("Exif/ISOSpeedRatings"), "200");
}

#[test]
fn attribute_type_is_authoritative() {
    let b = TiffBuilder::INTEL;
    // ExposureTime stored as two LONGs
    let exif = Ifd::new().with(0x829a, Value::Raw(4, 2, [b.u32(1), b.u32(100)].concat()));
    let data = b.tiff(&Ifd::new().with(0x8769, Value::Dir(exif)));
    let root = ExifManager::parse_tiff(&data, false).unwrap();
    let tag = root.get_tag("ExposureTime").unwrap();
    assert_eq!(tag.tag_type(), TagType::Rational);
    assert_eq!(tag.stored_type(), TagType::Long);
    assert_eq!(tag.to_double(0), 0.01);
}

#[test]
fn zero_denominator_reads_as_zero() {
    let b = TiffBuilder::INTEL;
    let exif = Ifd::new().with(0x829d, b.rational(1, 0));
    let data = b.tiff(&Ifd::new().with(0x8769, Value::Dir(exif)));
    let root = ExifManager::parse_tiff(&data, false).unwrap();
    let tag = root.get_tag("FNumber").unwrap();
    assert_eq!(tag.to_double(0), 0.);
    assert_eq!(tag.to_rational(0), (1, 0));
    // past the end of the value
    assert_eq!(tag.to_double(8), 0.);
    assert_eq!(tag.to_int(64, TagType::Long), 0);
}

#[test]
fn unknown_tags_survive() {
    let data = sample(TiffBuilder::INTEL);
    let root = ExifManager::parse_tiff(&data, false).unwrap();
    let exif = root.get_tag("Exif").unwrap().directory(0).unwrap();
    assert_eq!(exif.count(), 7);
    let unknown = exif.get_tag_by_id(0x9999).unwrap();
    assert!(unknown.attrib().is_none());
    assert!(unknown.keep());
    assert_eq!(unknown.name(), "0x9999");
    assert_eq!(unknown.to_int(0, TagType::Auto), 7);
}

#[test]
fn invalid_types_and_bad_offsets_drop_one_tag() {
    let b = TiffBuilder::INTEL;
    let ifd0 = Ifd::new()
        .with(0x010f, b.ascii("ACME"))
        .with(0x0110, Value::Raw(42, 1, vec![1, 0, 0, 0]))
        .with(0x0112, b.short(1));
    let mut data = b.tiff(&ifd0);
    // point the Make value far past the end
    data[10 + 8..10 + 12].copy_from_slice(&b.u32(0x10000));
    let root = ExifManager::parse_tiff(&data, false).unwrap();
    assert!(root.get_tag("Make").is_none());
    assert!(root.get_tag("Model").is_none());
    assert_eq!(root.get_tag("Orientation").unwrap().to_int(0, TagType::Auto), 1);
}

#[test]
fn broken_sub_directory_is_skipped() {
    let b = TiffBuilder::INTEL;
    let ifd0 = Ifd::new()
        .with(0x0112, b.short(1))
        .with(0x8769, b.long(0x7fff_0000));
    let data = b.tiff(&ifd0);
    let root = ExifManager::parse_tiff(&data, false).unwrap();
    let exif = root.get_tag("Exif").unwrap();
    assert!(!exif.is_directory());
    assert_eq!(root.count(), 2);
}

#[test]
fn broken_header_fails() {
    assert!(ExifManager::parse_tiff(b"II\x2a\0", false).is_err());
    assert!(ExifManager::parse_tiff(b"PK\x03\x04\x08\0\0\0", false).is_err());
}

#[test]
fn thumbnail_tags_are_skipped_when_reduced() {
    let b = TiffBuilder::INTEL;
    let ifd0 = Ifd::new()
        .with(0x00fe, b.long(1))
        .with(0x0100, b.long(160))
        .with(0x0111, b.long(0x400))
        .with(0x0112, b.short(1));
    let data = b.tiff(&ifd0);

    let all = ExifManager::parse_tiff(&data, false).unwrap();
    assert_eq!(all.count(), 4);

    let skipped = ExifManager::parse_tiff(&data, true).unwrap();
    assert!(skipped.get_tag("ImageWidth").is_none());
    assert!(skipped.get_tag("StripOffsets").is_none());
    assert!(skipped.get_tag("Orientation").is_some());
}

#[test]
fn paths_and_deep_search() {
    let data = sample(TiffBuilder::INTEL);
    let root = ExifManager::parse_tiff(&data, false).unwrap();
    assert!(root.get_tag_p("Exif/FNumber").is_some());
    assert!(root.get_tag_p("FNumber").is_none());
    assert!(root.find_tag("FNumber").is_some());
    assert_eq!(root.get_attrib_p("Exif/MakerNote").unwrap().id, 0x927c);
    assert_eq!(root.get_attrib("UserComment").unwrap().id, 0x9286);
}

#[test]
fn apply_change_is_idempotent() {
    let data = sample(TiffBuilder::INTEL);
    let root = ExifManager::parse_tiff(&data, false).unwrap();

    let mut once = root.clone();
    once.apply_change("Artist", "Somebody else");
    once.apply_change("Exif.UserComment", "edited");
    let mut twice = once.clone();
    twice.apply_change("Artist", "Somebody else");
    twice.apply_change("Exif.UserComment", "edited");

    let a = ExifManager::write_tiff_block(&once);
    assert_eq!(a, ExifManager::write_tiff_block(&twice));
    assert_ne!(a, data);
    assert_eq!(once.get_tag("Artist").unwrap().to_string(), "Somebody else");
    assert_eq!(once.get_tag("UserComment").unwrap().value_to_string(&once), "edited");
    // the source tree is untouched
    assert_eq!(ExifManager::write_tiff_block(&root), data);
}

#[test]
fn apply_change_creates_and_deletes() {
    let data = sample(TiffBuilder::INTEL);
    let mut root = ExifManager::parse_tiff(&data, false).unwrap();

    root.apply_change("Copyright", "CC0");
    root.apply_change("GPSInfo/GPSLatitudeRef", "N");
    root.apply_change("Exif/FNumber", "#delete");
    // not editable, not created
    root.apply_change("Exif/FocalPlaneXResolution", "100");

    assert_eq!(root.get_tag("Copyright").unwrap().to_string(), "CC0");
    assert_eq!(root.get_tag_p("GPSInfo/GPSLatitudeRef").unwrap().to_string(), "N");
    assert!(!root.get_tag("FNumber").unwrap().keep());
    assert!(root.get_tag("FocalPlaneXResolution").is_none());

    let reparsed = ExifManager::parse_tiff(&ExifManager::write_tiff_block(&root), false).unwrap();
    assert!(reparsed.get_tag("FNumber").is_none());
    assert_eq!(reparsed.get_tag("Copyright").unwrap().to_string(), "CC0");

    root.apply_change("Exif/FNumber", "#keep");
    assert!(root.get_tag("FNumber").unwrap().keep());
}

#[test]
fn system_tags_stay_out_of_output_unless_kept() {
    let b = TiffBuilder::INTEL;
    let ifd0 = Ifd::new()
        .with(0x0112, b.short(1))
        .with(0x0131, b.ascii("Some editor 1.0"));
    let data = b.tiff(&ifd0);
    let mut root = ExifManager::parse_tiff(&data, false).unwrap();
    assert!(!root.get_tag("Software").unwrap().keep());
    assert!(!root.get_tag("Software").unwrap().is_visible());

    let written = ExifManager::write_tiff_block(&root);
    let reparsed = ExifManager::parse_tiff(&written, false).unwrap();
    assert!(reparsed.get_tag("Software").is_none());

    root.keep_tag(0x0131);
    assert_eq!(ExifManager::write_tiff_block(&root), data);
}

#[test]
fn order_change_reencodes_values() {
    let data = sample(TiffBuilder::INTEL);
    let mut root = ExifManager::parse_tiff(&data, false).unwrap();
    root.set_order(ByteOrder::Motorola);
    assert_eq!(ExifManager::write_tiff_block(&root), sample(TiffBuilder::MOTOROLA));
}

#[test]
fn sort_and_dump() {
    let b = TiffBuilder::INTEL;
    let exif = Ifd::new()
        .with(0x920a, b.rational(35, 1))
        .with(0x829a, b.rational(1, 60));
    let ifd0 = Ifd::new()
        .with(0x8769, Value::Dir(exif))
        .with(0x0112, b.short(1));
    let mut root = ExifManager::parse_tiff(&b.tiff(&ifd0), false).unwrap();
    root.sort();
    let ids: Vec<u16> = root.tags().iter().map(|t| t.id()).collect();
    assert_eq!(ids, [0x0112, 0x8769]);
    assert_eq!(
        root.dump(),
        "Orientation = Horizontal (normal)\nExif:\n  ExposureTime = 1/60\n  FocalLength = 35.0\n"
    );
}

#[test]
fn added_tags_are_written_sorted() {
    let mut changes = ExifPairs::new();
    changes.insert("Artist".into(), "Me".into());
    changes.insert("Make".into(), "ACME".into());
    let segment = ExifManager::create_jpeg_marker(None, &changes, 8, 6).unwrap();
    let root = ExifManager::parse_tiff(&segment[10..], false).unwrap();
    let ids: Vec<u16> = root.tags().iter().map(|t| t.id()).collect();
    assert_eq!(ids, [0x010f, 0x013b, 0x8769]);
}
