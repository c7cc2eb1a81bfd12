mod common;

use common::*;
use rtexif::{ExifManager, ExifPairs, MakerNoteKind, TagType};

fn shorts(v: &[i16]) -> Vec<u8> {
    v.iter().flat_map(|x| x.to_le_bytes()).collect()
}

fn inline(v: &[u8]) -> [u8; 8] {
    let mut out = [0; 8];
    out[..v.len()].copy_from_slice(v);
    out
}

fn sample_crw() -> Vec<u8> {
    let mut settings = vec![0i16; 30];
    settings[0] = 60;
    settings[22] = 22;
    settings[25] = 1;

    let mut image_info = vec![];
    image_info.extend(2160u32.to_le_bytes());
    image_info.extend(1440u32.to_le_bytes());
    image_info.extend(1.5f32.to_le_bytes());
    image_info.extend(90i32.to_le_bytes());
    image_info.extend([0; 12]);

    crw(&[Record::Heap(
        0x300a,
        vec![
            Record::Data(0x0810, b"Owner Name\0".to_vec()),
            Record::Data(0x080a, b"Canon\0Canon EOS D30\0".to_vec()),
            Record::Data(0x0805, b"a comment\0".to_vec()),
            // ISO 100, Av 5, Tv 8, EV -1
            Record::Data(0x102a, shorts(&[0, 0, 160, 0, 160, 256, -32, 0])),
            Record::Data(0x102d, shorts(&settings)),
            Record::Inline(0x5029, inline(&[0, 0, 50, 0])),
            Record::Inline(0x580e, inline(&1_000_000_000u32.to_le_bytes())),
            Record::Data(0x1810, image_info),
        ],
    )])
}

#[test]
fn crw_records_become_tags() {
    init_logger();
    let root = ExifManager::parse_crw(&sample_crw()).unwrap();
    let show = |name: &str| root.get_tag(name).unwrap().value_to_string(&root);

    assert_eq!(show("Artist"), "Owner Name");
    assert_eq!(show("Make"), "Canon");
    assert_eq!(show("Model"), "Canon EOS D30");
    assert_eq!(show("UserComment"), "a comment");
    assert_eq!(show("DateTimeOriginal"), "2001:09:09 01:46:40");
    assert_eq!(show("ImageWidth"), "2160");
    assert_eq!(show("ImageHeight"), "1440");
    assert_eq!(show("Orientation"), "Rotate 90 CW");
    assert_eq!(show("ISOSpeedRatings"), "100");
    assert_eq!(show("FNumber"), "5.7");
    assert_eq!(show("ExposureTime"), "1/256");
    assert_eq!(show("ExposureBiasValue"), "-1.00");
    assert_eq!(show("FocalLength"), "50.0");
    assert_eq!(show("LensType"), "Tokina AT-X 280 AF Pro 28-80mm f/2.8 Aspherical");

    let note = root.get_tag_p("Exif/MakerNote").unwrap();
    assert_eq!(note.maker_note_kind(), MakerNoteKind::Ifd);
    let focal = root.get_tag_p("Exif/MakerNote/CanonFocalLength/FocalLength").unwrap();
    assert_eq!(focal.to_int(0, TagType::Auto), 50);
}

#[test]
fn exposure_info_record() {
    let mut info = vec![];
    for v in [0f32, 7., 4.] {
        info.extend(v.to_le_bytes());
    }
    let data = crw(&[Record::Data(0x1818, info)]);
    let root = ExifManager::parse_crw(&data).unwrap();
    let show = |name: &str| root.get_tag(name).unwrap().value_to_string(&root);
    assert_eq!(show("ExposureTime"), "1/128");
    assert_eq!(show("ShutterSpeedValue"), "1/128");
    assert_eq!(show("FNumber"), "4.0");
    assert_eq!(show("ApertureValue"), "4.0");
}

fn nested(depth: usize) -> Vec<u8> {
    let mut record = Record::Data(0x080a, b"Canon\0EOS\0".to_vec());
    for _ in 0..depth {
        record = Record::Heap(0x300b, vec![record]);
    }
    crw(&[record])
}

#[test]
fn sub_heap_depth_is_capped() {
    let root = ExifManager::parse_crw(&nested(4)).unwrap();
    assert!(root.get_tag("Make").is_some());
    let root = ExifManager::parse_crw(&nested(5)).unwrap();
    assert!(root.get_tag("Make").is_none());
}

#[test]
fn heap_without_crw_header() {
    let heap = ciff_heap(&[Record::Data(0x0810, b"Me\0".to_vec())]);
    let root = ExifManager::parse_ciff(&heap, 0, heap.len()).unwrap();
    assert_eq!(root.get_tag("Artist").unwrap().to_string(), "Me");
    assert!(ExifManager::parse_ciff(&heap, 0, heap.len() + 10).is_err());
}

#[test]
fn bad_crw_header_fails() {
    let mut data = sample_crw();
    data[6..14].copy_from_slice(b"HEAPJPGM");
    assert!(ExifManager::parse_crw(&data).is_err());
    assert!(ExifManager::parse_crw(b"II").is_err());
}

#[test]
fn crw_metadata_converts_to_exif() {
    let root = ExifManager::parse_crw(&sample_crw()).unwrap();
    let segment = ExifManager::create_jpeg_marker(Some(&root), &ExifPairs::new(), 1080, 720).unwrap();
    let converted = ExifManager::parse_tiff(&segment[10..], false).unwrap();
    let show = |name: &str| converted.get_tag(name).unwrap().value_to_string(&converted);
    assert_eq!(show("Model"), "Canon EOS D30");
    assert_eq!(show("PixelXDimension"), "1080");
    assert_eq!(show("LensType"), "Tokina AT-X 280 AF Pro 28-80mm f/2.8 Aspherical");
    assert_eq!(
        converted.get_tag("MakerNote").unwrap().maker_note_kind(),
        MakerNoteKind::Ifd
    );
}
