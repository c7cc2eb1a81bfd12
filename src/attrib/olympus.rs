use crate::interpreter::{ChoiceInterpreter, FOCAL_LENGTH};
use phf::phf_map;

pub static OLYMPUS_QUALITY: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    1i32 => "SQ",
    2i32 => "HQ",
    3i32 => "SHQ",
    4i32 => "RAW",
    5i32 => "SQ (5)",
});

pub static OLYMPUS_ON_OFF: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Off",
    1i32 => "On",
});

pub static OLYMPUS_MACRO: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Off",
    1i32 => "On",
    2i32 => "Super Macro",
});

pub static OLYMPUS_FLASH_TYPE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "None",
    2i32 => "Simple E-System",
    3i32 => "E-System",
    4i32 => "E-System (body powered)",
});

pub static OLYMPUS_EXPOSURE_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    1i32 => "Manual",
    2i32 => "Program",
    3i32 => "Aperture-priority AE",
    4i32 => "Shutter speed priority AE",
    5i32 => "Program-shift",
});

pub static OLYMPUS_METERING_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    2i32 => "Center-weighted average",
    3i32 => "Spot",
    5i32 => "ESP",
    261i32 => "Pattern+AF",
    515i32 => "Spot+Highlight control",
    1027i32 => "Spot+Shadow control",
});

pub static OLYMPUS_FOCUS_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Single AF",
    1i32 => "Sequential shooting AF",
    2i32 => "Continuous AF",
    3i32 => "Multi AF",
    4i32 => "Face detect",
    10i32 => "MF",
});

pub static OLYMPUS_WHITE_BALANCE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Auto",
    1i32 => "Auto (Keep Warm Color Off)",
    16i32 => "7500K (Fine Weather with Shade)",
    17i32 => "6000K (Cloudy)",
    18i32 => "5300K (Fine Weather)",
    20i32 => "3000K (Tungsten light)",
    21i32 => "3600K (Tungsten light-like)",
    33i32 => "6600K (Daylight fluorescent)",
    34i32 => "4500K (Neutral white fluorescent)",
    35i32 => "4000K (Cool white fluorescent)",
    48i32 => "3600K (Tungsten light-like)",
    256i32 => "One Touch WB 1",
    512i32 => "Custom WB 1",
});

tag_table! {
    pub static OLYMPUS_EQUIPMENT_ATTRIBS = [
        (Never, Write, false, 0x0000, Undefined, "EquipmentVersion"),
        (Never, Write, false, 0x0100, Ascii, "CameraType2"),
        (Never, Write, false, 0x0101, Ascii, "SerialNumber"),
        (Never, Write, false, 0x0102, Ascii, "InternalSerialNumber"),
        (Never, Write, false, 0x0103, Rational, "FocalPlaneDiagonal"),
        (Never, Write, false, 0x0104, Long, "BodyFirmwareVersion"),
        (Never, Write, false, 0x0201, Byte, "LensType"),
        (Never, Write, false, 0x0202, Ascii, "LensSerialNumber"),
        (Never, Write, false, 0x0203, Ascii, "LensModel"),
        (Never, Write, false, 0x0204, Long, "LensFirmwareVersion"),
        (Never, Write, false, 0x0205, Short, "MaxApertureAtMinFocal"),
        (Never, Write, false, 0x0206, Short, "MaxApertureAtMaxFocal"),
        (Never, Write, false, 0x0207, Short, "MinFocalLength"),
        (Never, Write, false, 0x0208, Short, "MaxFocalLength"),
        (Never, Write, false, 0x020a, Short, "MaxAperture"),
        (Never, Write, false, 0x020b, Short, "LensProperties"),
        (Never, Write, false, 0x0301, Byte, "Extender"),
        (Never, Write, false, 0x0302, Ascii, "ExtenderSerialNumber"),
        (Never, Write, false, 0x0303, Ascii, "ExtenderModel"),
        (Never, Write, false, 0x0304, Long, "ExtenderFirmwareVersion"),
        (Never, Write, false, 0x1000, Short, "FlashType", interp = &OLYMPUS_FLASH_TYPE),
        (Never, Write, false, 0x1001, Short, "FlashModel"),
        (Never, Write, false, 0x1002, Long, "FlashFirmwareVersion"),
        (Never, Write, false, 0x1003, Ascii, "FlashSerialNumber"),
    ];
}

tag_table! {
    pub static OLYMPUS_CAMERA_SETTINGS_ATTRIBS = [
        (Never, Write, false, 0x0000, Undefined, "CameraSettingsVersion"),
        (Never, Write, false, 0x0100, Long, "PreviewImageValid"),
        (Never, Write, false, 0x0101, Long, "PreviewImageStart"),
        (Never, Write, false, 0x0102, Long, "PreviewImageLength"),
        (Never, Write, false, 0x0200, Short, "ExposureMode", interp = &OLYMPUS_EXPOSURE_MODE),
        (Never, Write, false, 0x0201, Short, "AELock", interp = &OLYMPUS_ON_OFF),
        (Never, Write, false, 0x0202, Short, "MeteringMode", interp = &OLYMPUS_METERING_MODE),
        (Never, Write, false, 0x0203, SRational, "ExposureShift"),
        (Never, Write, false, 0x0300, Short, "MacroMode", interp = &OLYMPUS_MACRO),
        (Never, Write, false, 0x0301, Short, "FocusMode", interp = &OLYMPUS_FOCUS_MODE),
        (Never, Write, false, 0x0302, Short, "FocusProcess"),
        (Never, Write, false, 0x0303, Short, "AFSearch"),
        (Never, Write, false, 0x0304, Long, "AFAreas"),
        (Never, Write, false, 0x0400, Short, "FlashMode"),
        (Never, Write, false, 0x0401, SRational, "FlashExposureComp"),
        (Never, Write, false, 0x0500, Short, "WhiteBalance2", interp = &OLYMPUS_WHITE_BALANCE),
        (Never, Write, false, 0x0501, Short, "WhiteBalanceTemperature"),
        (Never, Write, false, 0x0502, SShort, "WhiteBalanceBracket"),
        (Never, Write, false, 0x0503, SShort, "CustomSaturation"),
        (Never, Write, false, 0x0504, Short, "ModifiedSaturation"),
        (Never, Write, false, 0x0505, SShort, "ContrastSetting"),
        (Never, Write, false, 0x0506, SShort, "SharpnessSetting"),
        (Never, Write, false, 0x0507, Short, "ColorSpace"),
        (Never, Write, false, 0x0509, Short, "SceneMode"),
        (Never, Write, false, 0x050a, Short, "NoiseReduction"),
        (Never, Write, false, 0x050b, Short, "DistortionCorrection", interp = &OLYMPUS_ON_OFF),
        (Never, Write, false, 0x050c, Short, "ShadingCompensation", interp = &OLYMPUS_ON_OFF),
        (Never, Write, false, 0x0600, Short, "DriveMode"),
        (Never, Write, false, 0x0603, Short, "ImageQuality2"),
    ];
}

tag_table! {
    pub static OLYMPUS_RAW_DEVELOPMENT_ATTRIBS = [
        (Never, Write, false, 0x0000, Undefined, "RawDevVersion"),
        (Never, Write, false, 0x0100, Short, "RawDevExposureBiasValue"),
        (Never, Write, false, 0x0101, Short, "RawDevWhiteBalanceValue"),
        (Never, Write, false, 0x0102, Short, "RawDevWBFineAdjustment"),
        (Never, Write, false, 0x0103, Short, "RawDevGrayPoint"),
        (Never, Write, false, 0x0104, Short, "RawDevSaturationEmphasis"),
        (Never, Write, false, 0x0105, Short, "RawDevMemoryColorEmphasis"),
        (Never, Write, false, 0x0106, Short, "RawDevContrastValue"),
        (Never, Write, false, 0x0107, Short, "RawDevSharpnessValue"),
        (Never, Write, false, 0x0108, Short, "RawDevColorSpace"),
        (Never, Write, false, 0x0109, Short, "RawDevEngine"),
        (Never, Write, false, 0x010a, Short, "RawDevNoiseReduction"),
        (Never, Write, false, 0x010b, Short, "RawDevEditStatus"),
        (Never, Write, false, 0x010c, Short, "RawDevSettings"),
    ];
}

tag_table! {
    pub static OLYMPUS_IMAGE_PROCESSING_ATTRIBS = [
        (Never, Write, false, 0x0000, Undefined, "ImageProcessingVersion"),
        (Never, Write, false, 0x0100, Short, "WB_RBLevels"),
        (Never, Write, false, 0x0102, Short, "WB_RBLevels3000K"),
        (Never, Write, false, 0x0103, Short, "WB_RBLevels3300K"),
        (Never, Write, false, 0x0104, Short, "WB_RBLevels3600K"),
        (Never, Write, false, 0x0105, Short, "WB_RBLevels3900K"),
        (Never, Write, false, 0x0106, Short, "WB_RBLevels4000K"),
        (Never, Write, false, 0x0200, Short, "ColorMatrix"),
        (Never, Write, false, 0x0300, Short, "Enhancer"),
        (Never, Write, false, 0x0301, Short, "EnhancerValues"),
        (Never, Write, false, 0x0310, Short, "CoringFilter"),
        (Never, Write, false, 0x0600, Short, "BlackLevel2"),
        (Never, Write, false, 0x0611, Short, "ValidBits"),
        (Never, Write, false, 0x1010, Short, "NoiseReduction2"),
        (Never, Write, false, 0x1011, Short, "DistortionCorrection2", interp = &OLYMPUS_ON_OFF),
        (Never, Write, false, 0x1012, Short, "ShadingCompensation2", interp = &OLYMPUS_ON_OFF),
        (Never, Write, false, 0x1103, Short, "FaceDetect"),
    ];
}

tag_table! {
    pub static OLYMPUS_FOCUS_INFO_ATTRIBS = [
        (Never, Write, false, 0x0000, Undefined, "FocusInfoVersion"),
        (Never, Write, false, 0x0209, Undefined, "AutoFocus"),
        (Never, Write, false, 0x0210, Undefined, "SceneDetect"),
        (Never, Write, false, 0x0305, Rational, "FocusDistance"),
        (Never, Write, false, 0x0308, Short, "AFPoint"),
        (Never, Write, false, 0x1201, Short, "ExternalFlash"),
        (Never, Write, false, 0x1500, SShort, "SensorTemperature"),
        (Never, Write, false, 0x1600, Undefined, "ImageStabilization"),
    ];
}

tag_table! {
    pub static OLYMPUS_ATTRIBS = [
        (Never, Write, false, 0x0000, Undefined, "MakerNoteVersion"),
        (Never, Write, false, 0x0200, Long, "SpecialMode"),
        (Never, Write, false, 0x0201, Short, "Quality", interp = &OLYMPUS_QUALITY),
        (Never, Write, false, 0x0202, Short, "Macro", interp = &OLYMPUS_MACRO),
        (Never, Write, false, 0x0203, Short, "BWMode", interp = &OLYMPUS_ON_OFF),
        (Never, Write, false, 0x0204, Rational, "DigitalZoom"),
        (Never, Write, false, 0x0205, Rational, "FocalPlaneDiagonal", interp = &FOCAL_LENGTH),
        (Never, Write, false, 0x0207, Ascii, "CameraType"),
        (Never, Write, false, 0x0208, Ascii, "TextInfo"),
        (Never, Write, false, 0x0209, Undefined, "CameraID"),
        (Never, Write, false, 0x0e00, Undefined, "PrintIM"),
        (Never, Write, false, 0x1004, Short, "FlashMode"),
        (Never, Write, false, 0x1005, Short, "FlashDevice"),
        (Never, Write, false, 0x1006, SRational, "Bracket"),
        (Never, Write, false, 0x100b, Short, "FocusMode"),
        (Never, Write, false, 0x100c, Rational, "FocusDistance"),
        (Never, Write, false, 0x100d, Short, "Zoom"),
        (Never, Write, false, 0x100e, Short, "MacroFocus"),
        (Never, Write, false, 0x100f, Short, "SharpnessFactor"),
        (Never, Write, false, 0x1015, Short, "WhiteBalance"),
        (Never, Write, false, 0x1029, Short, "Contrast"),
        (Never, Write, false, 0x2010, Auto, "Equipment", sub = OLYMPUS_EQUIPMENT_ATTRIBS),
        (Never, Write, false, 0x2020, Auto, "CameraSettings", sub = OLYMPUS_CAMERA_SETTINGS_ATTRIBS),
        (Never, Write, false, 0x2030, Auto, "RawDevelopment", sub = OLYMPUS_RAW_DEVELOPMENT_ATTRIBS),
        (Never, Write, false, 0x2040, Auto, "ImageProcessing", sub = OLYMPUS_IMAGE_PROCESSING_ATTRIBS),
        (Never, Write, false, 0x2050, Auto, "FocusInfo", sub = OLYMPUS_FOCUS_INFO_ATTRIBS),
    ];
}
