use super::SONY_LENS;
use crate::interpreter::{ChoiceInterpreter, EXPOSURE_BIAS};
use phf::phf_map;

pub static MINOLTA_QUALITY: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Raw",
    1i32 => "Super Fine",
    2i32 => "Fine",
    3i32 => "Standard",
    4i32 => "Economy",
    5i32 => "Extra fine",
});

pub static MINOLTA_COLOR_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Natural color",
    1i32 => "Black & White",
    2i32 => "Vivid color",
    3i32 => "Solarization",
    4i32 => "Adobe RGB",
    5i32 => "Sepia",
    9i32 => "Natural",
    12i32 => "Portrait",
    13i32 => "Natural sRGB",
    14i32 => "Natural+ sRGB",
    15i32 => "Landscape",
    16i32 => "Evening",
    17i32 => "Night Scene",
    18i32 => "Night Portrait",
    132i32 => "Embed Adobe RGB",
});

pub static MINOLTA_SCENE_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Standard",
    1i32 => "Portrait",
    2i32 => "Text",
    3i32 => "Night Scene",
    4i32 => "Sunset",
    5i32 => "Sports",
    6i32 => "Landscape",
    7i32 => "Night Portrait",
    8i32 => "Macro",
    9i32 => "Super Macro",
    16i32 => "Auto",
    17i32 => "Night View/Portrait",
});

pub static MINOLTA_TELECONVERTER: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0x00i32 => "None",
    0x04i32 => "Minolta/Sony AF 1.4x APO (D) (0x04)",
    0x05i32 => "Minolta/Sony AF 2x APO (D) (0x05)",
    0x48i32 => "Minolta/Sony AF 2x APO (D)",
    0x50i32 => "Minolta AF 2x APO II",
    0x60i32 => "Minolta AF 2x APO",
    0x88i32 => "Minolta/Sony AF 1.4x APO (D)",
    0x90i32 => "Minolta AF 1.4x APO II",
    0xa0i32 => "Minolta AF 1.4x APO",
});

tag_table! {
    pub static MINOLTA_ATTRIBS = [
        (Never, Write, false, 0x0000, Undefined, "MakerNoteVersion"),
        (Never, Write, false, 0x0001, Undefined, "MinoltaCameraSettingsOld"),
        (Never, Write, false, 0x0003, Undefined, "MinoltaCameraSettings"),
        (Never, Write, false, 0x0004, Undefined, "MinoltaCameraSettings7D"),
        (Never, Write, false, 0x0010, Undefined, "CameraInfoA100"),
        (Never, Write, false, 0x0018, Undefined, "ImageStabilizationData"),
        (Never, Write, false, 0x0040, Long, "CompressedImageSize"),
        (Never, Write, false, 0x0081, Undefined, "PreviewImage"),
        (Never, Write, false, 0x0088, Long, "PreviewImageStart"),
        (Never, Write, false, 0x0089, Long, "PreviewImageLength"),
        (Never, Write, false, 0x0100, Long, "SceneMode", interp = &MINOLTA_SCENE_MODE),
        (Never, Write, false, 0x0101, Long, "ColorMode", interp = &MINOLTA_COLOR_MODE),
        (Never, Write, false, 0x0102, Long, "MinoltaQuality", interp = &MINOLTA_QUALITY),
        (Never, Write, false, 0x0103, Long, "MinoltaImageSize"),
        (Never, Write, false, 0x0104, SRational, "FlashExposureComp", interp = &EXPOSURE_BIAS),
        (Never, Write, false, 0x0105, Long, "Teleconverter", interp = &MINOLTA_TELECONVERTER),
        (Never, Write, false, 0x0107, Long, "ImageStabilization"),
        (Never, Write, false, 0x0109, Long, "RawAndJpegRecording"),
        (Never, Write, false, 0x010a, Long, "ZoneMatching"),
        (Never, Write, false, 0x010b, Long, "ColorTemperature"),
        (Never, Write, false, 0x010c, Long, "LensID", interp = &SONY_LENS),
        (Never, Write, false, 0x0111, SLong, "ColorCompensationFilter"),
        (Never, Write, false, 0x0112, Long, "WhiteBalanceFineTune"),
        (Never, Write, false, 0x0113, Long, "ImageStabilization2"),
        (Never, Write, false, 0x0115, Long, "WhiteBalance"),
        (Never, Write, false, 0x0e00, Undefined, "PrintIM"),
        (Never, Write, false, 0x0f00, Undefined, "MinoltaCameraSettings2"),
    ];
}
