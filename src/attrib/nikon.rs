use crate::interpreter::{ChoiceInterpreter, EXPOSURE_BIAS, NIKON_ISO};
use phf::phf_map;

pub static NIKON_SHOOTING_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Single frame",
    1i32 => "Continuous",
    2i32 => "Delay",
    8i32 => "PC control",
    16i32 => "Exposure bracketing",
    32i32 => "Auto ISO",
    64i32 => "White balance bracketing",
    128i32 => "IR control",
});

pub static NIKON_LENS_TYPE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "MF",
    1i32 => "MF D",
    2i32 => "AF",
    6i32 => "AF D",
    10i32 => "AF D VR",
    14i32 => "AF G",
    15i32 => "AF G VR",
    78i32 => "AF-S G VR",
    142i32 => "AF-P G",
    143i32 => "AF-P G VR",
});

pub static NIKON2_QUALITY: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    1i32 => "VGA Basic",
    2i32 => "VGA Normal",
    3i32 => "VGA Fine",
    4i32 => "SXGA Basic",
    5i32 => "SXGA Normal",
    6i32 => "SXGA Fine",
});

pub static NIKON2_COLOR_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    1i32 => "Color",
    2i32 => "Monochrome",
});

pub static NIKON2_WHITE_BALANCE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Auto",
    1i32 => "Preset",
    2i32 => "Daylight",
    3i32 => "Incandescent",
    4i32 => "Fluorescent",
    5i32 => "Cloudy",
    6i32 => "SpeedLight",
});

tag_table! {
    pub static NIKON3_ATTRIBS = [
        (Never, Write, false, 0x0001, Undefined, "MakerNoteVersion"),
        (Never, Write, false, 0x0002, Short, "ISOSpeed", interp = &NIKON_ISO),
        (Never, Write, false, 0x0003, Ascii, "ColorMode"),
        (Never, Write, false, 0x0004, Ascii, "Quality"),
        (Never, Write, false, 0x0005, Ascii, "WhiteBalance"),
        (Never, Write, false, 0x0006, Ascii, "Sharpness"),
        (Never, Write, false, 0x0007, Ascii, "FocusMode"),
        (Never, Write, false, 0x0008, Ascii, "FlashSetting"),
        (Never, Write, false, 0x0009, Ascii, "FlashType"),
        (Never, Write, false, 0x000b, SShort, "WhiteBalanceFineTune"),
        (Never, Write, false, 0x000c, Rational, "WB_RBLevels"),
        (Never, Write, false, 0x000d, Undefined, "ProgramShift"),
        (Never, Write, false, 0x000e, Undefined, "ExposureDifference"),
        (Never, Write, false, 0x0011, Auto, "PreviewIFD"),
        (Never, Write, false, 0x0012, Undefined, "FlashExposureComp"),
        (Never, Write, false, 0x0013, Short, "ISOSetting", interp = &NIKON_ISO),
        (Never, Write, false, 0x0016, Short, "ImageBoundary"),
        (Never, Write, false, 0x0017, Undefined, "ExternalFlashExposureComp"),
        (Never, Write, false, 0x0018, Undefined, "FlashExposureBracketValue"),
        (Never, Write, false, 0x0019, SRational, "ExposureBracketValue", interp = &EXPOSURE_BIAS),
        (Never, Write, false, 0x001b, Short, "CropHiSpeed"),
        (Never, Write, false, 0x001d, Ascii, "SerialNumber"),
        (Never, Write, false, 0x001e, Short, "ColorSpace"),
        (Never, Write, false, 0x0022, Short, "ActiveD-Lighting"),
        (Never, Write, false, 0x0080, Ascii, "ImageAdjustment"),
        (Never, Write, false, 0x0081, Ascii, "ToneComp"),
        (Never, Write, false, 0x0082, Ascii, "AuxiliaryLens"),
        (Never, Write, false, 0x0083, Byte, "LensType", interp = &NIKON_LENS_TYPE),
        (Never, Write, false, 0x0084, Rational, "Lens"),
        (Never, Write, false, 0x0085, Rational, "ManualFocusDistance"),
        (Never, Write, false, 0x0086, Rational, "DigitalZoom"),
        (Never, Write, false, 0x0087, Byte, "FlashMode"),
        (Never, Write, false, 0x0088, Undefined, "AFInfo"),
        (Never, Write, false, 0x0089, Short, "ShootingMode", interp = &NIKON_SHOOTING_MODE),
        (Never, Write, false, 0x008b, Undefined, "LensFStops"),
        (Never, Write, false, 0x008c, Undefined, "ContrastCurve"),
        (Never, Write, false, 0x008d, Ascii, "ColorHue"),
        (Never, Write, false, 0x0090, Ascii, "LightSource"),
        (Never, Write, false, 0x0092, SShort, "HueAdjustment"),
        (Never, Write, false, 0x0095, Ascii, "NoiseReduction"),
        (Never, Write, false, 0x0097, Undefined, "ColorBalance"),
        (Never, Write, false, 0x0098, Undefined, "LensData"),
        (Never, Write, false, 0x00a7, Long, "ShutterCount"),
        (Never, Write, false, 0x00a9, Ascii, "ImageOptimization"),
        (Never, Write, false, 0x00aa, Ascii, "Saturation"),
        (Never, Write, false, 0x00ab, Ascii, "VariProgram"),
        (Never, Write, false, 0x00b1, Short, "HighISONoiseReduction"),
        (Never, Write, false, 0x0e00, Undefined, "PrintIM"),
    ];
}

tag_table! {
    pub static NIKON2_ATTRIBS = [
        (Never, Write, false, 0x0002, Auto, "Unknown1"),
        (Never, Write, false, 0x0003, Short, "Quality", interp = &NIKON2_QUALITY),
        (Never, Write, false, 0x0004, Short, "ColorMode", interp = &NIKON2_COLOR_MODE),
        (Never, Write, false, 0x0005, Short, "ImageAdjustment"),
        (Never, Write, false, 0x0006, Short, "ISOSpeed"),
        (Never, Write, false, 0x0007, Short, "WhiteBalance", interp = &NIKON2_WHITE_BALANCE),
        (Never, Write, false, 0x0008, Rational, "Focus"),
        (Never, Write, false, 0x000a, Rational, "DigitalZoom"),
        (Never, Write, false, 0x000b, Short, "Converter"),
        (Never, Write, false, 0x0f00, Auto, "Unknown2"),
    ];
}
