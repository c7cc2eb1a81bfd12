mod common;

use common::*;
use rtexif::{ExifManager, MakerNoteKind, TagType};

fn with_note(b: TiffBuilder, make: &str, exif: Ifd, note: Value) -> Vec<u8> {
    let exif = exif.with(0x927c, note);
    let ifd0 = Ifd::new()
        .with(0x010f, b.ascii(make))
        .with(0x8769, Value::Dir(exif));
    b.tiff(&ifd0)
}

fn nikon_note() -> Vec<u8> {
    let n = TiffBuilder::INTEL;
    let ifd = Ifd::new()
        .with(0x0002, n.shorts(&[0, 800]))
        .with(0x0004, n.ascii("FINE   "));
    n.nikon3_note(&ifd)
}

#[test]
fn nikon3_round_trip() {
    init_logger();
    let b = TiffBuilder::MOTOROLA;
    let exif = Ifd::new().with(0x8827, b.short(800));
    let data = with_note(b, "NIKON CORPORATION", exif, b.undefined(&nikon_note()));
    let root = ExifManager::parse_tiff(&data, false).unwrap();

    let note = root.get_tag("MakerNote").unwrap();
    assert_eq!(note.maker_note_kind(), MakerNoteKind::Nikon3);
    let dir = note.directory(0).unwrap();
    assert_eq!(dir.order(), rtexif::ByteOrder::Intel);
    assert_eq!(dir.get_tag("Quality").unwrap().value_to_string(&root), "FINE");
    assert_eq!(root.get_tag("ISOSpeed").unwrap().value_to_string(&root), "800");

    assert_eq!(ExifManager::write_tiff_block(&root), data);
}

#[test]
fn nikon_iso_moves_into_exif() {
    let b = TiffBuilder::MOTOROLA;
    let exif = Ifd::new().with(0x829a, b.rational(1, 30));
    let data = with_note(b, "NIKON CORPORATION", exif, b.undefined(&nikon_note()));
    let root = ExifManager::parse_tiff(&data, false).unwrap();
    let exif = root.get_tag("Exif").unwrap().directory(0).unwrap();
    let first = &exif.tags()[0];
    assert_eq!(first.name(), "ISOSpeedRatings");
    assert_eq!(first.to_int(0, TagType::Auto), 800);
}

#[test]
fn fuji_round_trip() {
    let b = TiffBuilder::MOTOROLA;
    let f = TiffBuilder::INTEL;
    let ifd = Ifd::new()
        .with(0x0000, f.undefined(b"0130"))
        .with(0x1000, f.ascii("NORMAL "))
        .with(0x1002, f.short(256));
    let note = TiffBuilder::fuji_note(&ifd);
    let data = with_note(b, "FUJIFILM", Ifd::new(), b.undefined(&note));
    let root = ExifManager::parse_tiff(&data, false).unwrap();

    let tag = root.get_tag("MakerNote").unwrap();
    assert_eq!(tag.maker_note_kind(), MakerNoteKind::Fuji);
    let wb = root.get_tag("WhiteBalance").unwrap();
    assert_eq!(wb.value_to_string(&root), "Daylight");
    assert_eq!(ExifManager::write_tiff_block(&root), data);
}

#[test]
fn olympus_sub_directory_offsets_are_local() {
    let b = TiffBuilder::INTEL;
    let equipment = Ifd::new().with(0x0207, b.short(14));
    let ifd = Ifd::new()
        .with(0x0207, b.ascii("D4322"))
        .with(0x2010, Value::Dir(equipment));
    let mut note = b"OLYMPUS\0II\x03\0".to_vec();
    b.put_ifd(&mut note, 0, &ifd);
    let data = with_note(b, "OLYMPUS IMAGING CORP.", Ifd::new(), b.undefined(&note));
    let root = ExifManager::parse_tiff(&data, false).unwrap();

    assert_eq!(root.get_tag("MakerNote").unwrap().maker_note_kind(), MakerNoteKind::Olympus2);
    let min_focal = root.get_tag_p("Exif/MakerNote/Equipment/MinFocalLength").unwrap();
    assert_eq!(min_focal.to_int(0, TagType::Auto), 14);
    assert_eq!(root.get_tag("CameraType").unwrap().to_string(), "D4322");
    assert_eq!(ExifManager::write_tiff_block(&root), data);
}

fn canon_tiff(focal_length: u32) -> Vec<u8> {
    let b = TiffBuilder::INTEL;
    let mut settings = vec![0u16; 30];
    settings[0] = 60;
    settings[22] = 22;
    settings[25] = 1;
    let note = Ifd::new()
        .with(0x0001, b.shorts(&settings))
        .with(0x0002, b.shorts(&[0, focal_length as u16, 0, 0]));
    let exif = Ifd::new().with(0x920a, b.rational(focal_length, 1));
    with_note(b, "Canon", exif, Value::Note(vec![], note))
}

#[test]
fn canon_tables_round_trip() {
    let data = canon_tiff(50);
    let root = ExifManager::parse_tiff(&data, false).unwrap();
    let note = root.get_tag("MakerNote").unwrap();
    assert_eq!(note.maker_note_kind(), MakerNoteKind::Ifd);

    let settings = root.get_tag("CanonCameraSettings").unwrap();
    assert_eq!(settings.maker_note_kind(), MakerNoteKind::TableSubDir);
    let table = settings.directory(0).unwrap();
    assert!(table.is_table());
    assert_eq!(table.get_tag("FocalUnits").unwrap().to_int(0, TagType::Auto), 1);

    assert_eq!(ExifManager::write_tiff_block(&root), data);
}

#[test]
fn lens_resolved_from_the_tree() {
    let lens = |focal: u32| {
        let root = ExifManager::parse_tiff(&canon_tiff(focal), false).unwrap();
        let tag = root.get_tag("LensType").unwrap();
        tag.value_to_string(&root)
    };
    assert_eq!(lens(50), "Tokina AT-X 280 AF Pro 28-80mm f/2.8 Aspherical");
    assert_eq!(lens(24), "Canon EF 20-35mm f/2.8L");
    assert_eq!(
        lens(30),
        "Canon EF 20-35mm f/2.8L\n or Tokina AT-X 280 AF Pro 28-80mm f/2.8 Aspherical"
    );
}

#[test]
fn table_edit_is_written_back() {
    let data = canon_tiff(50);
    let mut root = ExifManager::parse_tiff(&data, false).unwrap();
    root.apply_change("Exif/MakerNote/CanonCameraSettings/FocalUnits", "10");
    let written = ExifManager::write_tiff_block(&root);
    assert_eq!(written.len(), data.len());

    let reparsed = ExifManager::parse_tiff(&written, false).unwrap();
    let units = reparsed.get_tag("FocalUnits").unwrap();
    assert_eq!(units.to_int(0, TagType::Auto), 10);
}

#[test]
fn unknown_maker_note_stays_opaque() {
    let b = TiffBuilder::INTEL;
    let blob = b"ACME\0\x01proprietary data here".to_vec();
    let data = with_note(b, "ACME", Ifd::new(), b.undefined(&blob));
    let root = ExifManager::parse_tiff(&data, false).unwrap();

    let note = root.get_tag("MakerNote").unwrap();
    assert!(!note.is_directory());
    assert_eq!(note.maker_note_kind(), MakerNoteKind::None);
    assert_eq!(note.value(), blob.as_slice());
    assert_eq!(ExifManager::write_tiff_block(&root), data);
}

#[test]
fn damaged_maker_note_stays_opaque() {
    let b = TiffBuilder::INTEL;
    // Nikon signature pointing its IFD far outside the block
    let mut blob = b"Nikon\0\x02\x10\0\0II\x2a\0".to_vec();
    blob.extend(0x00ff_0000u32.to_le_bytes());
    let data = with_note(b, "NIKON CORPORATION", Ifd::new(), b.undefined(&blob));
    let root = ExifManager::parse_tiff(&data, false).unwrap();

    let note = root.get_tag("MakerNote").unwrap();
    assert!(!note.is_directory());
    assert_eq!(ExifManager::write_tiff_block(&root), data);
}

#[test]
fn garbage_note_with_known_make_stays_opaque() {
    let b = TiffBuilder::INTEL;
    let mut one_bad_entry = vec![1, 0, 0x01, 0x00, 0xff, 0xff];
    one_bad_entry.resize(16, 0);
    for blob in [vec![0xff; 16], one_bad_entry] {
        let data = with_note(b, "Canon", Ifd::new(), b.undefined(&blob));
        let root = ExifManager::parse_tiff(&data, false).unwrap();

        let note = root.get_tag("MakerNote").unwrap();
        assert!(!note.is_directory());
        assert_eq!(note.maker_note_kind(), MakerNoteKind::None);
        assert_eq!(note.value(), blob.as_slice());
        assert_eq!(ExifManager::write_tiff_block(&root), data);
    }
}

fn pentax_tiff(model: &str) -> Vec<u8> {
    let b = TiffBuilder::INTEL;
    let mut lens_info = vec![0u8; 32];
    lens_info[14] = 0x55;
    lens_info[22] = 0x66;
    let camera_info: Vec<u8> = [0x12b9c, 20071215, 1, 2, 4711]
        .iter()
        .flat_map(|&v: &u32| b.u32(v))
        .collect();
    let note = Ifd::new()
        .with(0x0008, b.short(2))
        .with(0x003f, Value::Raw(1, 2, vec![4, 252]))
        .with(0x0207, b.undefined(&lens_info))
        .with(0x0215, Value::Raw(4, 5, camera_info));
    let exif = Ifd::new().with(0x927c, Value::Note(b"AOC\0II".to_vec(), note));
    let ifd0 = Ifd::new()
        .with(0x010f, b.ascii("PENTAX Corporation"))
        .with(0x0110, b.ascii(model))
        .with(0x8769, Value::Dir(exif));
    b.tiff(&ifd0)
}

#[test]
fn pentax_aoc_round_trip() {
    let data = pentax_tiff("PENTAX K10D");
    let root = ExifManager::parse_tiff(&data, false).unwrap();
    let show = |name: &str| root.get_tag(name).unwrap().value_to_string(&root);

    assert_eq!(root.get_tag("MakerNote").unwrap().maker_note_kind(), MakerNoteKind::HeaderIfd);
    assert_eq!(show("Quality"), "Best");
    assert_eq!(show("LensType"), "smc PENTAX-DA 18-55mm F3.5-5.6 AL");

    let camera_info = root.get_tag_p("Exif/MakerNote/CameraInfo").unwrap();
    assert_eq!(camera_info.maker_note_kind(), MakerNoteKind::TableSubDir);
    let serial = root.get_tag_p("Exif/MakerNote/CameraInfo/InternalSerialNumber").unwrap();
    assert_eq!(serial.to_int(0, TagType::Auto), 4711);

    assert_eq!(ExifManager::write_tiff_block(&root), data);
}

#[test]
fn pentax_lens_data_start_depends_on_model() {
    let focal = |model: &str| {
        let root = ExifManager::parse_tiff(&pentax_tiff(model), false).unwrap();
        let tag = root.get_tag_p("Exif/MakerNote/LensInfo/LensFocalLength").unwrap();
        tag.to_int(0, TagType::Auto)
    };
    assert_eq!(focal("PENTAX K10D"), 0x55);
    assert_eq!(focal("PENTAX K-5"), 0x66);
}

#[test]
fn pentax_note_with_local_offsets() {
    let b = TiffBuilder::INTEL;
    let ifd = Ifd::new()
        .with(0x0008, b.short(4))
        .with(0x0216, b.undefined(&[2, 0x30, 180, 170, 0, 0]));
    let mut note = b"PENTAX \0II".to_vec();
    b.put_ifd(&mut note, 0, &ifd);
    let data = with_note(b, "RICOH IMAGING COMPANY, LTD.", Ifd::new(), b.undefined(&note));
    let root = ExifManager::parse_tiff(&data, false).unwrap();

    assert_eq!(root.get_tag("MakerNote").unwrap().maker_note_kind(), MakerNoteKind::Olympus2);
    assert_eq!(root.get_tag("Quality").unwrap().value_to_string(&root), "RAW");
    let power = root.get_tag_p("Exif/MakerNote/BatteryInfo/PowerSource").unwrap();
    assert_eq!(power.value_to_string(&root), "Body Battery");
    assert_eq!(ExifManager::write_tiff_block(&root), data);
}

#[test]
fn sony_header_note_and_settings_generation() {
    let b = TiffBuilder::INTEL;
    let mut settings = vec![0u8; 332];
    // big-endian shorts whatever the file order
    settings[5] = 1;
    let ifd = Ifd::new()
        .with(0x0114, Value::Raw(3, 166, settings))
        .with(0xb027, b.long(4));
    let data = with_note(
        b,
        "SONY",
        Ifd::new(),
        Value::Note(b"SONY DSC \0\0\0".to_vec(), ifd),
    );
    let root = ExifManager::parse_tiff(&data, false).unwrap();

    assert_eq!(root.get_tag("MakerNote").unwrap().maker_note_kind(), MakerNoteKind::HeaderIfd);
    assert_eq!(root.get_tag("LensID").unwrap().value_to_string(&root), "Minolta AF 85mm F1.4G");
    let settings = root.get_tag_p("Exif/MakerNote/CameraSettings").unwrap();
    let table = settings.directory(0).unwrap();
    assert!(std::ptr::eq(table.attribs(), rtexif::attrib::SONY_CAMERA_SETTINGS2_ATTRIBS));
    assert_eq!(table.get_tag("HighSpeedSync").unwrap().value_to_string(&root), "On");
    assert_eq!(ExifManager::write_tiff_block(&root), data);
}

#[test]
fn kodak_textual_info_fills_exif() {
    let b = TiffBuilder::MOTOROLA;
    let text = "Camera: DCS Pro 14N\nDate: 2003/10/22\nTime: 10:10:15\nISO: 160\n\
                Exposure: 1/60\nAperture: F5.6\nFocal: 50mm\nExposure Mode: Manual\n";
    let kodak = Ifd::new().with(0x03f1, b.ascii(text));
    let exif = Ifd::new().with(0x8827, b.short(200));
    let ifd0 = Ifd::new()
        .with(0x010f, b.ascii("EASTMAN KODAK COMPANY"))
        .with(0x8290, Value::Dir(kodak))
        .with(0x8769, Value::Dir(exif));
    let root = ExifManager::parse_tiff(&b.tiff(&ifd0), false).unwrap();

    let show = |name: &str| root.get_tag(name).unwrap().value_to_string(&root);
    assert_eq!(show("ExposureTime"), "1/60");
    assert_eq!(show("FNumber"), "5.6");
    assert_eq!(show("FocalLength"), "50.0");
    assert_eq!(root.get_tag("DateTimeOriginal").unwrap().to_string(), "2003:10:22 10:10:15");
    assert_eq!(root.get_tag("ExposureProgram").unwrap().to_int(0, TagType::Auto), 1);
    // present in the Exif IFD already
    assert_eq!(root.get_tag("ISOSpeedRatings").unwrap().to_int(0, TagType::Auto), 200);

    let exif = root.get_tag("Exif").unwrap().directory(0).unwrap();
    let ids: Vec<u16> = exif.tags().iter().map(|t| t.id()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}
