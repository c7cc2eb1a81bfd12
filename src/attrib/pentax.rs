use crate::interpreter::ChoiceInterpreter;
use crate::lens::{two_byte_lens_id, IntLensInterpreter};
use phf::phf_map;

pub static PENTAX_QUALITY: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Good",
    1i32 => "Better",
    2i32 => "Best",
    3i32 => "TIFF",
    4i32 => "RAW",
    5i32 => "Premium",
    7i32 => "RAW (pixel shift enabled)",
    8i32 => "Dynamic Pixel Shift",
    65535i32 => "n/a",
});

pub static PENTAX_FLASH_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Auto, Did not fire",
    1i32 => "Off, Did not fire",
    2i32 => "On, Did not fire",
    3i32 => "Auto, Did not fire, Red-eye reduction",
    5i32 => "On, Did not fire, Wireless (Master)",
    256i32 => "Auto, Fired",
    258i32 => "On, Fired",
    259i32 => "Auto, Fired, Red-eye reduction",
    260i32 => "On, Red-eye reduction",
    264i32 => "On, Soft",
    265i32 => "On, Slow-sync",
    266i32 => "On, Slow-sync, Red-eye reduction",
    267i32 => "On, Trailing-curtain Sync",
});

pub static PENTAX_FOCUS_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Normal",
    1i32 => "Macro",
    2i32 => "Infinity",
    3i32 => "Manual",
    4i32 => "Super Macro",
    5i32 => "Pan Focus",
    16i32 => "AF-S",
    17i32 => "AF-C",
    18i32 => "AF-A",
    32i32 => "Contrast-detect",
    33i32 => "Tracking Contrast-detect",
});

pub static PENTAX_WHITE_BALANCE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Auto",
    1i32 => "Daylight",
    2i32 => "Shade",
    3i32 => "Fluorescent",
    4i32 => "Tungsten",
    5i32 => "Manual",
    6i32 => "Daylight Fluorescent",
    7i32 => "Day White Fluorescent",
    8i32 => "White Fluorescent",
    9i32 => "Flash",
    10i32 => "Cloudy",
    11i32 => "Warm White Fluorescent",
    14i32 => "Multi Auto",
    15i32 => "Color Temperature Enhancement",
    17i32 => "Kelvin",
    65534i32 => "Unknown",
    65535i32 => "User-Selected",
});

pub static PENTAX_METERING_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Multi-segment",
    1i32 => "Center-weighted average",
    2i32 => "Spot",
});

pub static PENTAX_COLOR_SPACE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "sRGB",
    1i32 => "Adobe RGB",
});

pub static PENTAX_IMAGE_TONE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Natural",
    1i32 => "Bright",
    2i32 => "Portrait",
    3i32 => "Landscape",
    4i32 => "Vibrant",
    5i32 => "Monochrome",
    6i32 => "Muted",
    7i32 => "Reversal Film",
    8i32 => "Bleach Bypass",
    9i32 => "Radiant",
    10i32 => "Cross Processing",
    11i32 => "Flat",
    256i32 => "Standard",
    32768i32 => "n/a",
});

pub static PENTAX_FLASH_STATUS: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Off",
    1i32 => "Off (1)",
    2i32 => "External, Did not fire",
    6i32 => "External, Fired",
    8i32 => "Internal, Did not fire (0x08)",
    9i32 => "Internal, Did not fire",
    13i32 => "Internal, Fired",
});

pub static PENTAX_SHAKE_REDUCTION: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Off",
    1i32 => "On",
    4i32 => "Off (4)",
    5i32 => "On but Disabled",
    6i32 => "On (Video)",
    7i32 => "On (7)",
    15i32 => "On (15)",
});

pub static PENTAX_POWER_SOURCE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    1i32 => "Camera Battery",
    2i32 => "Body Battery",
    3i32 => "Grip Battery",
    4i32 => "External Power Supply",
});

static PENTAX_LENSES: &[(i32, &str)] = &[
    (0, "M-42 or No Lens"),
    (256, "K or M Lens"),
    (512, "A Series Lens"),
    (768, "Sigma"),
    (3 * 256 + 17, "smc PENTAX-FA SOFT 85mm F2.8"),
    (3 * 256 + 18, "smc PENTAX-F 1.7X AF ADAPTER"),
    (3 * 256 + 19, "smc PENTAX-F 24-50mm F4"),
    (3 * 256 + 20, "smc PENTAX-F 35-80mm F4-5.6"),
    (3 * 256 + 21, "smc PENTAX-F 80-200mm F4.7-5.6"),
    (3 * 256 + 22, "smc PENTAX-F FISH-EYE 17-28mm F3.5-4.5"),
    (3 * 256 + 23, "smc PENTAX-F 100-300mm F4.5-5.6"),
    (3 * 256 + 23, "Sigma AF 28-300mm F3.5-5.6 DL IF"),
    (3 * 256 + 24, "smc PENTAX-F 35-135mm F3.5-4.5"),
    (3 * 256 + 25, "smc PENTAX-F 35-105mm F4-5.6"),
    (3 * 256 + 25, "Sigma AF 10-20mm F4-5.6 EX DC"),
    (3 * 256 + 25, "Sigma 55-200mm F4-5.6 DC"),
    (3 * 256 + 25, "Sigma AF 28-300mm F3.5-6.3 DL IF"),
    (3 * 256 + 25, "Sigma AF 28-300mm F3.5-6.3 DG IF Macro"),
    (3 * 256 + 25, "Tokina 80-200mm F2.8 ATX-Pro"),
    (3 * 256 + 26, "smc PENTAX-F* 250-600mm F5.6 ED[IF]"),
    (3 * 256 + 27, "smc PENTAX-F 28-80mm F3.5-4.5"),
    (3 * 256 + 28, "smc PENTAX-F 35-70mm F3.5-4.5"),
    (3 * 256 + 29, "smc PENTAX-F 28-80mm F3.5-4.5"),
    (3 * 256 + 29, "Sigma 17-35mm F2.8-4 EX DG"),
    (3 * 256 + 44, "Sigma 18-50mm F3.5-5.6 DC"),
    (3 * 256 + 44, "Sigma 17-70mm F2.8-4.5 DC Macro"),
    (3 * 256 + 44, "Sigma 18-200mm F3.5-6.3 DC"),
    (3 * 256 + 44, "Sigma 12-24mm F4.5-5.6 EX DG"),
    (3 * 256 + 44, "Tamron 35-90mm F4 AF"),
    (4 * 256 + 1, "smc PENTAX-FA SOFT 28mm F2.8"),
    (4 * 256 + 2, "smc PENTAX-FA 80-320mm F4.5-5.6"),
    (4 * 256 + 3, "smc PENTAX-FA 43mm F1.9 Limited"),
    (4 * 256 + 6, "smc PENTAX-FA 35-80mm F4-5.6"),
    (4 * 256 + 12, "smc PENTAX-FA 50mm F1.4"),
    (4 * 256 + 15, "smc PENTAX-FA 28-105mm F4-5.6 [IF]"),
    (4 * 256 + 16, "Tamron AF 80-210mm F4-5.6 (178D)"),
    (4 * 256 + 19, "Tamron SP AF 90mm F2.8 (172E)"),
    (4 * 256 + 20, "smc PENTAX-FA 28-80mm F3.5-5.6"),
    (4 * 256 + 22, "Tokina 28-80mm F3.5-5.6"),
    (4 * 256 + 23, "smc PENTAX-FA 20-35mm F4 AL"),
    (4 * 256 + 24, "smc PENTAX-FA 77mm F1.8 Limited"),
    (4 * 256 + 25, "Tamron SP AF 14mm F2.8"),
    (4 * 256 + 26, "smc PENTAX-FA Macro 100mm F3.5"),
    (4 * 256 + 28, "smc PENTAX-FA 35mm F2 AL"),
    (4 * 256 + 34, "smc PENTAX-FA 24-90mm F3.5-4.5 AL[IF]"),
    (4 * 256 + 35, "smc PENTAX-FA 100-300mm F4.7-5.8"),
    (4 * 256 + 38, "smc PENTAX-FA 28-105mm F3.2-4.5 AL[IF]"),
    (4 * 256 + 39, "smc PENTAX-FA 31mm F1.8 AL Limited"),
    (4 * 256 + 43, "smc PENTAX-FA 28-90mm F3.5-5.6"),
    (4 * 256 + 44, "smc PENTAX-FA J 75-300mm F4.5-5.8 AL"),
    (4 * 256 + 45, "Tamron 28-300mm F3.5-6.3 Ultra zoom XR"),
    (4 * 256 + 46, "smc PENTAX-FA J 28-80mm F3.5-5.6 AL"),
    (4 * 256 + 47, "smc PENTAX-FA J 18-35mm F4-5.6 AL"),
    (4 * 256 + 49, "Tamron SP AF 28-75mm F2.8 XR Di LD Aspherical [IF] Macro"),
    (4 * 256 + 229, "smc PENTAX-DA 18-55mm F3.5-5.6 AL II"),
    (4 * 256 + 230, "Tamron SP AF 17-50mm F2.8 XR Di II"),
    (4 * 256 + 231, "smc PENTAX-DA 18-250mm F3.5-6.3 ED AL [IF]"),
    (4 * 256 + 237, "Samsung/Schneider D-XENOGON 10-17mm F3.5-4.5"),
    (4 * 256 + 239, "Samsung/Schneider D-XENON 12-24mm F4 ED AL [IF]"),
    (4 * 256 + 243, "smc PENTAX-DA 70mm F2.4 Limited"),
    (4 * 256 + 244, "smc PENTAX-DA 21mm F3.2 AL Limited"),
    (4 * 256 + 245, "Schneider D-XENON 50-200mm"),
    (4 * 256 + 246, "Schneider D-XENON 18-55mm"),
    (4 * 256 + 247, "smc PENTAX-DA FISH-EYE 10-17mm F3.5-4.5 ED [IF]"),
    (4 * 256 + 248, "smc PENTAX-DA 12-24mm F4 ED AL [IF]"),
    (4 * 256 + 249, "Tamron XR DiII 18-200mm F3.5-6.3 (A14)"),
    (4 * 256 + 250, "smc PENTAX-DA 50-200mm F4-5.6 ED"),
    (4 * 256 + 251, "smc PENTAX-DA 40mm F2.8 Limited"),
    (4 * 256 + 252, "smc PENTAX-DA 18-55mm F3.5-5.6 AL"),
    (4 * 256 + 253, "smc PENTAX-DA 14mm F2.8 ED[IF]"),
    (4 * 256 + 254, "smc PENTAX-DA 16-45mm F4 ED AL"),
    (5 * 256 + 1, "smc PENTAX-FA* 24mm F2 AL[IF]"),
    (5 * 256 + 2, "smc PENTAX-FA 28mm F2.8 AL"),
    (5 * 256 + 3, "smc PENTAX-FA 50mm F1.7"),
    (5 * 256 + 4, "smc PENTAX-FA 50mm F1.4"),
    (6 * 256 + 1, "smc PENTAX-FA* 85mm F1.4 [IF]"),
    (7 * 256 + 0, "smc PENTAX-DA 21mm F3.2 AL Limited"),
    (7 * 256 + 201, "smc Pentax-DA L 50-200mm F4-5.6 ED WR"),
    (7 * 256 + 202, "smc PENTAX-DA L 18-55mm F3.5-5.6 AL WR"),
    (7 * 256 + 203, "HD PENTAX-DA 55-300mm F4-5.8 ED WR"),
    (7 * 256 + 204, "HD PENTAX-DA 15mm F4 ED AL Limited"),
    (7 * 256 + 214, "smc PENTAX-DA 35mm F2.4 AL"),
    (7 * 256 + 215, "smc PENTAX-DA 18-135mm F3.5-5.6 ED AL [IF] DC WR"),
    (7 * 256 + 217, "smc PENTAX-DA 50-200mm F4-5.6 ED WR"),
    (7 * 256 + 218, "smc PENTAX-DA 18-55mm F3.5-5.6 AL WR"),
    (7 * 256 + 220, "Tamron SP AF 10-24mm F3.5-4.5 Di II LD Aspherical [IF]"),
    (7 * 256 + 222, "smc PENTAX-DA 18-55mm F3.5-5.6 AL II"),
    (7 * 256 + 223, "Samsung D-XENON 18-55mm F3.5-5.6 II"),
    (7 * 256 + 224, "smc PENTAX-DA 15mm F4 ED AL Limited"),
    (7 * 256 + 225, "Samsung D-XENON 18-250mm F3.5-6.3"),
    (7 * 256 + 229, "smc PENTAX-DA 18-55mm F3.5-5.6 AL II"),
    (7 * 256 + 233, "smc PENTAX-D FA Macro 100mm F2.8 WR"),
    (7 * 256 + 234, "smc PENTAX-DA* 300mm F4 ED [IF] SDM"),
    (7 * 256 + 235, "smc PENTAX-DA* 200mm F2.8 ED [IF] SDM"),
    (7 * 256 + 236, "smc PENTAX-DA 55-300mm F4-5.8 ED"),
    (7 * 256 + 238, "Tamron AF 18-250mm F3.5-6.3 Di II LD Aspherical [IF] Macro"),
    (7 * 256 + 241, "smc PENTAX-DA* 50-135mm F2.8 ED [IF] SDM"),
    (7 * 256 + 242, "smc PENTAX-DA* 16-50mm F2.8 ED AL [IF] SDM"),
    (7 * 256 + 243, "smc PENTAX-DA 70mm F2.4 Limited"),
    (7 * 256 + 244, "smc PENTAX-DA 21mm F3.2 AL Limited"),
    (8 * 256 + 3, "Sigma 18-35mm F1.8 DC HSM"),
    (8 * 256 + 4, "Sigma 50-150mm F2.8 II APO EX DC HSM"),
    (8 * 256 + 8, "Sigma 18-250mm F3.5-6.3 DC OS HSM"),
    (8 * 256 + 13, "Sigma 24-105mm F4 DG OS HSM | A"),
    (8 * 256 + 16, "Sigma 70-200mm F2.8 EX DG Macro HSM II"),
    (8 * 256 + 18, "Sigma 8-16mm F4.5-5.6 DC HSM"),
    (8 * 256 + 21, "Sigma 17-50mm F2.8 EX DC OS HSM"),
    (8 * 256 + 23, "Sigma 17-70mm F2.8-4 DC Macro OS HSM"),
    (8 * 256 + 26, "Sigma 10-20mm F3.5 EX DC HSM"),
    (8 * 256 + 27, "Sigma 18-200mm F3.5-6.3 II DC HSM"),
    (8 * 256 + 28, "Sigma 18-250mm F3.5-6.3 DC Macro OS HSM"),
    (8 * 256 + 209, "HD PENTAX-DA 20-40mm F2.8-4 ED Limited DC WR"),
    (8 * 256 + 210, "smc PENTAX-DA 18-270mm F3.5-6.3 ED SDM"),
    (8 * 256 + 211, "HD PENTAX-DA 560mm F5.6 ED AW"),
    (8 * 256 + 215, "smc PENTAX-DA 18-135mm F3.5-5.6 ED AL [IF] DC WR"),
    (8 * 256 + 226, "smc PENTAX-DA* 55mm F1.4 SDM"),
    (8 * 256 + 227, "smc PENTAX-DA* 60-250mm F4 [IF] SDM"),
    (8 * 256 + 232, "smc PENTAX-DA 17-70mm F4 AL [IF] SDM"),
    (8 * 256 + 234, "smc PENTAX-DA* 300mm F4 ED [IF] SDM"),
    (8 * 256 + 235, "smc PENTAX-DA* 200mm F2.8 ED [IF] SDM"),
    (8 * 256 + 241, "smc PENTAX-DA* 50-135mm F2.8 ED [IF] SDM"),
    (8 * 256 + 242, "smc PENTAX-DA* 16-50mm F2.8 ED AL [IF] SDM"),
    (8 * 256 + 255, "Sigma 70-200mm F2.8 EX DG Macro HSM II"),
];

pub static PENTAX_LENS: IntLensInterpreter<i32> = IntLensInterpreter::new(PENTAX_LENSES, two_byte_lens_id);

tag_table! {
    pub static PENTAX_CAMERA_SETTINGS_ATTRIBS = [
        (Never, Write, false, 0, Byte, "PictureMode2"),
        (Never, Write, false, 1, Byte, "ProgramLine"),
        (Never, Write, false, 2, Byte, "FlashOptions"),
        (Never, Write, false, 3, Byte, "AFPointMode"),
        (Never, Write, false, 4, Byte, "AFPointSelected2"),
        (Never, Write, false, 5, Byte, "ISOFloor"),
        (Never, Write, false, 6, Byte, "DriveMode2"),
        (Never, Write, false, 7, Byte, "ExposureBracketStepSize"),
        (Never, Write, false, 8, Byte, "BracketShotNumber"),
        (Never, Write, false, 9, Byte, "WhiteBalanceSet"),
        (Never, Write, false, 10, Byte, "MultipleExposureSet"),
        (Never, Write, false, 13, Byte, "RawAndJpgRecording"),
        (Never, Write, false, 14, Byte, "JpgRecordedPixels"),
        (Never, Write, false, 16, Byte, "FlashOptions2"),
        (Never, Write, false, 17, Byte, "MeteringMode3"),
        (Never, Write, false, 18, Byte, "SRActive"),
        (Never, Write, false, 19, Byte, "Rotation"),
        (Never, Write, false, 20, Byte, "SensitivitySteps"),
    ];
}

tag_table! {
    pub static PENTAX_AE_INFO_ATTRIBS = [
        (Never, Write, false, 0, Byte, "AEExposureTime"),
        (Never, Write, false, 1, Byte, "AEAperture"),
        (Never, Write, false, 2, Byte, "AE_ISO"),
        (Never, Write, false, 3, Byte, "AEXv"),
        (Never, Write, false, 4, SByte, "AEBXv"),
        (Never, Write, false, 5, Byte, "AEMinExposureTime"),
        (Never, Write, false, 6, Byte, "AEProgramMode"),
        (Never, Write, false, 7, Byte, "AEFlags"),
        (Never, Write, false, 8, Byte, "AEApertureSteps"),
        (Never, Write, false, 9, Byte, "AEMaxAperture"),
        (Never, Write, false, 10, Byte, "AEMaxAperture2"),
        (Never, Write, false, 11, Byte, "AEMinAperture"),
        (Never, Write, false, 12, Byte, "AEMeteringMode"),
    ];
}

// element indices count from the model dependent start of the lens data
tag_table! {
    pub static PENTAX_LENS_DATA_ATTRIBS = [
        (Never, Write, false, 0, Byte, "AutoAperture"),
        (Never, Write, false, 1, Byte, "LensFStops"),
        (Never, Write, false, 3, Byte, "LensKFocalLength"),
        (Never, Write, false, 9, Byte, "NominalMaxAperture"),
        (Never, Write, false, 10, Byte, "LensFocalLength"),
        (Never, Write, false, 14, Byte, "MaxAperture"),
    ];
}

// Q-mount bodies record the lens name as text
tag_table! {
    pub static PENTAX_LENS_INFO_Q_ATTRIBS = [
        (Never, Write, false, 12, Ascii, "LensModel"),
        (Never, Write, false, 42, Ascii, "LensInfo"),
    ];
}

tag_table! {
    pub static PENTAX_FLASH_INFO_ATTRIBS = [
        (Never, Write, false, 0, Byte, "FlashStatus", interp = &PENTAX_FLASH_STATUS),
        (Never, Write, false, 1, Byte, "InternalFlashMode"),
        (Never, Write, false, 2, Byte, "ExternalFlashMode"),
        (Never, Write, false, 3, Byte, "InternalFlashStrength"),
        (Never, Write, false, 24, Byte, "ExternalFlashGuideNumber"),
        (Never, Write, false, 25, SByte, "ExternalFlashExposureComp"),
        (Never, Write, false, 26, Byte, "ExternalFlashBounce"),
    ];
}

tag_table! {
    pub static PENTAX_SR_INFO_ATTRIBS = [
        (Never, Write, false, 0, Byte, "SRResult"),
        (Never, Write, false, 1, Byte, "ShakeReduction", interp = &PENTAX_SHAKE_REDUCTION),
        (Never, Write, false, 2, Byte, "SRHalfPressTime"),
        (Never, Write, false, 3, Byte, "SRFocalLength"),
    ];
}

tag_table! {
    pub static PENTAX_BATTERY_INFO_ATTRIBS = [
        (Never, Write, false, 0, Byte, "PowerSource", interp = &PENTAX_POWER_SOURCE),
        (Never, Write, false, 1, Byte, "BatteryStates"),
        (Never, Write, false, 2, Byte, "BatteryADBodyNoLoad"),
        (Never, Write, false, 3, Byte, "BatteryADBodyLoad"),
        (Never, Write, false, 4, Byte, "BatteryADGripNoLoad"),
        (Never, Write, false, 5, Byte, "BatteryADGripLoad"),
    ];
}

// table of LONGs
tag_table! {
    pub static PENTAX_CAMERA_INFO_ATTRIBS = [
        (Never, Write, false, 0, Long, "PentaxModelID"),
        (Never, Write, false, 1, Long, "ManufactureDate"),
        (Never, Write, false, 2, Long, "ProductionCode"),
        (Never, Write, false, 4, Long, "InternalSerialNumber"),
    ];
}

tag_table! {
    pub static PENTAX_ATTRIBS = [
        (Never, Write, false, 0x0000, Byte, "PentaxVersion"),
        (Never, Write, false, 0x0001, Short, "PentaxModelType"),
        (Never, Write, false, 0x0002, Short, "PreviewImageSize"),
        (Never, Write, false, 0x0003, Long, "PreviewImageLength"),
        (Never, Write, false, 0x0004, Long, "PreviewImageStart"),
        (Never, Write, false, 0x0005, Long, "PentaxModelID"),
        (Never, Write, false, 0x0006, Undefined, "Date"),
        (Never, Write, false, 0x0007, Undefined, "Time"),
        (Never, Write, false, 0x0008, Short, "Quality", interp = &PENTAX_QUALITY),
        (Never, Write, false, 0x0009, Short, "PentaxImageSize"),
        (Never, Write, false, 0x000b, Short, "PictureMode"),
        (Never, Write, false, 0x000c, Short, "FlashMode", interp = &PENTAX_FLASH_MODE),
        (Never, Write, false, 0x000d, Short, "FocusMode", interp = &PENTAX_FOCUS_MODE),
        (Never, Write, false, 0x000e, Short, "AFPointSelected"),
        (Never, Write, false, 0x000f, Long, "AFPointsInFocus"),
        (Never, Write, false, 0x0010, Short, "FocusPosition"),
        (Never, Write, false, 0x0012, Long, "ExposureTime"),
        (Never, Write, false, 0x0013, Short, "FNumber"),
        (Never, Write, false, 0x0014, Short, "ISO"),
        (Never, Write, false, 0x0015, SShort, "LightReading"),
        (Never, Write, false, 0x0016, Short, "ExposureCompensation"),
        (Never, Write, false, 0x0017, Short, "MeteringMode", interp = &PENTAX_METERING_MODE),
        (Never, Write, false, 0x0018, Short, "AutoBracketing"),
        (Never, Write, false, 0x0019, Short, "WhiteBalance", interp = &PENTAX_WHITE_BALANCE),
        (Never, Write, false, 0x001a, Short, "WhiteBalanceMode"),
        (Never, Write, false, 0x001d, Long, "FocalLength"),
        (Never, Write, false, 0x001e, Short, "DigitalZoom"),
        (Never, Write, false, 0x001f, Short, "Saturation"),
        (Never, Write, false, 0x0020, Short, "Contrast"),
        (Never, Write, false, 0x0021, Short, "Sharpness"),
        (Never, Write, false, 0x0022, Short, "WorldTimeLocation"),
        (Never, Write, false, 0x0029, Long, "FrameNumber"),
        (Never, Write, false, 0x0033, Byte, "PictureMode3"),
        (Never, Write, false, 0x0034, Byte, "DriveMode"),
        (Never, Write, false, 0x0037, Short, "ColorSpace", interp = &PENTAX_COLOR_SPACE),
        (Never, Write, false, 0x003f, Byte, "LensType", interp = &PENTAX_LENS),
        (Never, Write, false, 0x0041, Short, "DigitalFilter"),
        (Never, Write, false, 0x0047, SByte, "CameraTemperature"),
        (Never, Write, false, 0x004d, SLong, "FlashExposureComp"),
        (Never, Write, false, 0x004f, Short, "ImageTone", interp = &PENTAX_IMAGE_TONE),
        (Never, Write, false, 0x005c, Undefined, "ShakeReductionInfo", sub = PENTAX_SR_INFO_ATTRIBS),
        (Never, Write, false, 0x0200, Short, "BlackPoint"),
        (Never, Write, false, 0x0201, Short, "WhitePoint"),
        (Never, Write, false, 0x0205, Undefined, "CameraSettings", sub = PENTAX_CAMERA_SETTINGS_ATTRIBS),
        (Never, Write, false, 0x0206, Undefined, "AEInfo", sub = PENTAX_AE_INFO_ATTRIBS),
        (Never, Write, false, 0x0207, Undefined, "LensInfo", sub = PENTAX_LENS_DATA_ATTRIBS),
        (Never, Write, false, 0x0208, Undefined, "FlashInfo", sub = PENTAX_FLASH_INFO_ATTRIBS),
        (Never, Write, false, 0x0215, Long, "CameraInfo", sub = PENTAX_CAMERA_INFO_ATTRIBS),
        (Never, Write, false, 0x0216, Undefined, "BatteryInfo", sub = PENTAX_BATTERY_INFO_ATTRIBS),
        (Never, Write, false, 0x021f, Undefined, "AFInfo"),
        (Never, Write, false, 0x0222, Undefined, "ColorInfo"),
        (Never, Write, false, 0x0229, Ascii, "SerialNumber"),
        (Never, Write, false, 0x0239, Undefined, "LensInfoQ", sub = PENTAX_LENS_INFO_Q_ATTRIBS),
    ];
}
