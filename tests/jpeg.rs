mod common;

use common::*;
use rtexif::{ExifManager, ExifPairs, TagType};

fn exif_tiff() -> Vec<u8> {
    let b = TiffBuilder::MOTOROLA;
    let exif = Ifd::new()
        .with(0x829a, b.rational(1, 125))
        .with(0x8827, b.short(400))
        .with(0xa002, b.long(4000))
        .with(0xa003, b.long(3000));
    let ifd0 = Ifd::new()
        .with(0x010f, b.ascii("ACME"))
        .with(0x0112, b.short(1))
        .with(0x8769, Value::Dir(exif));
    b.tiff(&ifd0)
}

#[test]
fn parse_and_rewrite_segment() {
    init_logger();
    let tiff = exif_tiff();
    let jpeg = jpeg_with_exif(&tiff);
    let root = ExifManager::parse_jpeg(&jpeg).unwrap();
    assert_eq!(root.get_tag("ISOSpeedRatings").unwrap().to_int(0, TagType::Auto), 400);
    assert_eq!(ExifManager::write_jpeg_segment(&root).unwrap(), app1(&tiff));
}

#[test]
fn jpeg_without_exif_fails() {
    let mut jpeg = vec![0xff, 0xd8, 0xff, 0xe0, 0, 4, 0, 0];
    jpeg.extend([0xff, 0xda, 0, 2]);
    assert!(ExifManager::parse_jpeg(&jpeg).is_err());
    assert!(ExifManager::parse_jpeg(&exif_tiff()).is_err());
}

#[test]
fn marker_updates_dimensions_and_applies_changes() {
    let jpeg = jpeg_with_exif(&exif_tiff());
    let root = ExifManager::parse_jpeg(&jpeg).unwrap();

    let mut changes = ExifPairs::new();
    changes.insert("Exif.UserComment".into(), "resized".into());
    changes.insert("Make".into(), "#delete".into());
    let segment = ExifManager::create_jpeg_marker(Some(&root), &changes, 800, 600).unwrap();
    assert_eq!(&segment[..2], &[0xff, 0xe1]);
    assert_eq!(u16::from_be_bytes([segment[2], segment[3]]) as usize, segment.len() - 2);
    assert_eq!(&segment[4..10], b"Exif\0\0");

    let mut out = vec![0xff, 0xd8];
    out.extend(&segment);
    out.extend([0xff, 0xd9]);
    let written = ExifManager::parse_jpeg(&out).unwrap();
    let int = |name: &str| written.get_tag(name).unwrap().to_int(0, TagType::Auto);
    assert_eq!(int("PixelXDimension"), 800);
    assert_eq!(int("PixelYDimension"), 600);
    assert_eq!(int("ISOSpeedRatings"), 400);
    assert_eq!(
        written.get_tag("UserComment").unwrap().value_to_string(&written),
        "resized"
    );
    assert!(written.get_tag("Make").is_none());

    // the parsed tree is left as it was
    assert_eq!(root.get_tag("PixelXDimension").unwrap().to_int(0, TagType::Auto), 4000);
    assert!(root.get_tag("UserComment").is_none());
}

#[test]
fn marker_from_scratch() {
    let segment = ExifManager::create_jpeg_marker(None, &ExifPairs::new(), 32, 16).unwrap();
    let root = ExifManager::parse_tiff(&segment[10..], false).unwrap();
    assert_eq!(root.count(), 1);
    let exif = root.get_tag("Exif").unwrap().directory(0).unwrap();
    assert_eq!(exif.count(), 2);
}
