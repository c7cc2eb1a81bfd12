use crate::interpreter::{ChoiceInterpreter, EXPOSURE_BIAS};
use crate::lens::{long_lens_id, IntLensInterpreter};
use phf::phf_map;

pub static SONY_ON_OFF: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Off",
    1i32 => "On",
});

pub static SONY_DRO: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Off",
    1i32 => "Standard",
    2i32 => "Advanced Auto",
    3i32 => "Auto",
    8i32 => "Advanced Lv1",
    9i32 => "Advanced Lv2",
    10i32 => "Advanced Lv3",
    11i32 => "Advanced Lv4",
    12i32 => "Advanced Lv5",
    16i32 => "Lv1",
    17i32 => "Lv2",
    18i32 => "Lv3",
    19i32 => "Lv4",
    20i32 => "Lv5",
});

pub static SONY_WHITE_BALANCE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Auto",
    4i32 => "Custom",
    5i32 => "Daylight",
    6i32 => "Cloudy",
    7i32 => "Cool White Fluorescent",
    8i32 => "Day White Fluorescent",
    9i32 => "Daylight Fluorescent",
    10i32 => "Incandescent2",
    11i32 => "Warm White Fluorescent",
    14i32 => "Incandescent",
    15i32 => "Flash",
    17i32 => "Underwater 1 (Blue Water)",
    18i32 => "Underwater 2 (Green Water)",
    19i32 => "Underwater Auto",
});

pub static SONY_SCENE_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
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
    18i32 => "Sweep Panorama",
    19i32 => "Handheld Night Shot",
    20i32 => "Anti Motion Blur",
    21i32 => "Cont. Priority AE",
    22i32 => "Auto+",
    23i32 => "3D Sweep Panorama",
});

pub static SONY_DRIVE_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    1i32 => "Single Frame",
    2i32 => "Continuous High",
    4i32 => "Self-timer 10 sec",
    5i32 => "Self-timer 2 sec, Mirror Lock-up",
    6i32 => "Single-frame Bracketing",
    7i32 => "Continuous Bracketing",
    10i32 => "Remote Commander",
    11i32 => "Mirror Lock-up",
    18i32 => "Continuous Low",
    24i32 => "White Balance Bracketing Low",
    25i32 => "D-Range Optimizer Bracketing Low",
    40i32 => "White Balance Bracketing High",
    41i32 => "D-Range Optimizer Bracketing High",
});

pub static SONY_FOCUS_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Manual",
    1i32 => "AF-S",
    2i32 => "AF-C",
    3i32 => "AF-A",
    4i32 => "DMF",
});

pub static SONY_METERING_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    1i32 => "Multi-segment",
    2i32 => "Center-weighted average",
    4i32 => "Spot",
});

pub static SONY_CREATIVE_STYLE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    1i32 => "Standard",
    2i32 => "Vivid",
    3i32 => "Neutral",
    4i32 => "Portrait",
    5i32 => "Landscape",
    6i32 => "B&W",
    7i32 => "Clear",
    8i32 => "Deep",
    9i32 => "Light",
    10i32 => "Sunset",
    11i32 => "Night View",
    12i32 => "Autumn Leaves",
    13i32 => "Sepia",
});

pub static SONY_QUALITY: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "RAW",
    1i32 => "Super Fine",
    2i32 => "Fine",
    3i32 => "Standard",
    4i32 => "Economy",
    5i32 => "Extra Fine",
    6i32 => "RAW + JPEG",
    7i32 => "Compressed RAW",
    8i32 => "Compressed RAW + JPEG",
});

pub static SONY_EXPOSURE_PROGRAM: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Auto",
    1i32 => "Manual",
    2i32 => "Program AE",
    3i32 => "Aperture-priority AE",
    4i32 => "Shutter speed priority AE",
    8i32 => "Program Shift A",
    9i32 => "Program Shift S",
    16i32 => "Portrait",
    17i32 => "Sports",
    18i32 => "Sunset",
    19i32 => "Night view/portrait",
    20i32 => "Landscape",
    21i32 => "Macro",
    35i32 => "Auto No Flash",
});

static SONY_LENSES: &[(i32, &str)] = &[
    (0, "Minolta AF 28-85mm F3.5-4.5 New"),
    (1, "Minolta AF 80-200mm F2.8 HS-APO G"),
    (2, "Minolta AF 28-70mm F2.8 G"),
    (3, "Minolta AF 28-80mm F4-5.6"),
    (4, "Minolta AF 85mm F1.4G"),
    (5, "Minolta AF 35-70mm F3.5-4.5 [II]"),
    (6, "Minolta AF 24-85mm F3.5-4.5 [New]"),
    (7, "Minolta AF 100-300mm F4.5-5.6 APO [New]"),
    (7, "Minolta AF 100-400mm F4.5-6.7 APO"),
    (7, "Sigma AF 100-300mm F4 EX DG IF"),
    (8, "Minolta AF 70-210mm F4.5-5.6 [II]"),
    (9, "Minolta AF 50mm F3.5 Macro"),
    (10, "Minolta AF 28-105mm F3.5-4.5 [New]"),
    (11, "Minolta AF 300mm F4 HS-APO G"),
    (12, "Minolta AF 100mm F2.8 Soft Focus"),
    (13, "Minolta AF 75-300mm F4.5-5.6 (New or II)"),
    (14, "Minolta AF 100-400mm F4.5-6.7 APO"),
    (15, "Minolta AF 400mm F4.5 HS-APO G"),
    (16, "Minolta AF 17-35mm F3.5 G"),
    (17, "Minolta AF 20-35mm F3.5-4.5"),
    (18, "Minolta AF 28-80mm F3.5-5.6 II"),
    (19, "Minolta AF 35mm F1.4 G"),
    (20, "Minolta/Sony 135mm F2.8 [T4.5] STF"),
    (22, "Minolta AF 35-80mm F4-5.6 II"),
    (23, "Minolta AF 200mm F4 Macro APO G"),
    (24, "Minolta/Sony AF 24-105mm F3.5-4.5 (D)"),
    (24, "Sigma 18-50mm F2.8"),
    (24, "Sigma 17-70mm F2.8-4.5 DC Macro"),
    (24, "Sigma 20-40mm F2.8 EX DG Aspherical IF"),
    (24, "Sigma 18-200mm F3.5-6.3 DC"),
    (24, "Sigma DC 18-125mm F4-5.6 D"),
    (24, "Tamron SP AF 28-75mm F2.8 XR Di LD Aspherical [IF] Macro"),
    (25, "Minolta AF 100-300mm F4.5-5.6 APO (D)"),
    (25, "Sigma 100-300mm F4 EX DG APO"),
    (27, "Minolta AF 85mm F1.4 G (D)"),
    (28, "Minolta/Sony AF 100mm F2.8 Macro (D)"),
    (28, "Tamron SP AF 90mm F2.8 Di Macro"),
    (29, "Minolta/Sony AF 75-300mm F4.5-5.6 (D)"),
    (30, "Minolta AF 28-80mm F3.5-5.6 (D)"),
    (30, "Sigma AF 10-20mm F4-5.6 EX DC"),
    (30, "Sigma AF 12-24mm F4.5-5.6 EX DG"),
    (30, "Sigma 28-70mm EX DG F2.8"),
    (30, "Sigma 55-200mm F4-5.6 DC"),
    (31, "Minolta/Sony AF 50mm F2.8 Macro (D)"),
    (31, "Minolta/Sony AF 50mm F3.5 Macro"),
    (32, "Minolta/Sony AF 300mm F2.8 G APO (D) SSM"),
    (33, "Minolta/Sony AF 70-200mm F2.8 G"),
    (35, "Minolta AF 85mm F1.4 G (D) Limited"),
    (36, "Minolta AF 28-100mm F3.5-5.6 (D)"),
    (38, "Minolta AF 17-35mm F2.8-4 (D)"),
    (39, "Minolta AF 28-75mm F2.8 (D)"),
    (40, "Minolta/Sony AF DT 18-70mm F3.5-5.6 (D)"),
    (41, "Minolta/Sony AF DT 11-18mm F4.5-5.6 (D)"),
    (42, "Minolta/Sony AF DT 18-200mm F3.5-6.3 (D)"),
    (43, "Sony 35mm F1.4 G (SAL35F14G)"),
    (44, "Sony 50mm F1.4 (SAL50F14)"),
    (45, "Carl Zeiss Planar T* 85mm F1.4 ZA (SAL85F14Z)"),
    (46, "Carl Zeiss Vario-Sonnar T* DT 16-80mm F3.5-4.5 ZA (SAL1680Z)"),
    (47, "Carl Zeiss Sonnar T* 135mm F1.8 ZA (SAL135F18Z)"),
    (48, "Carl Zeiss Vario-Sonnar T* 24-70mm F2.8 ZA SSM (SAL2470Z)"),
    (49, "Sony DT 55-200mm F4-5.6 (SAL55200)"),
    (50, "Sony DT 18-250mm F3.5-6.3 (SAL18250)"),
    (51, "Sony DT 16-105mm F3.5-5.6 (SAL16105)"),
    (52, "Sony 70-300mm F4.5-5.6 G SSM (SAL70300G)"),
    (53, "Sony 70-400mm F4-5.6 G SSM (SAL70400G)"),
    (54, "Carl Zeiss Vario-Sonnar T* 16-35mm F2.8 ZA SSM (SAL1635Z)"),
    (55, "Sony DT 18-55mm F3.5-5.6 SAM (SAL1855)"),
    (56, "Sony DT 55-200mm F4-5.6 SAM (SAL55200-2)"),
    (57, "Sony DT 50mm F1.8 SAM (SAL50F18)"),
    (58, "Sony DT 30mm F2.8 Macro SAM (SAL30M28)"),
    (59, "Sony 28-75mm F2.8 SAM (SAL2875)"),
    (60, "Carl Zeiss Distagon T* 24mm F2 ZA SSM (SAL24F20Z)"),
    (61, "Sony 85mm F2.8 SAM (SAL85F28)"),
    (62, "Sony DT 35mm F1.8 SAM (SAL35F18)"),
    (63, "Sony DT 16-50mm F2.8 SSM (SAL1650)"),
    (64, "Sony 500mm F4 G SSM (SAL500F40G)"),
    (65, "Sony DT 18-135mm F3.5-5.6 SAM (SAL18135)"),
    (66, "Sony 300mm F2.8 G SSM II (SAL300F28G2)"),
    (67, "Sony 70-200mm F2.8 G SSM II (SAL70200G2)"),
    (68, "Sony DT 55-300mm F4.5-5.6 SAM (SAL55300)"),
    (69, "Sony 70-400mm F4-5.6 G SSM II (SAL70400G2)"),
    (70, "Carl Zeiss Planar T* 50mm F1.4 ZA SSM (SAL50F14Z)"),
    (128, "Tamron AF 18-200mm F3.5-6.3 XR Di II LD Aspherical [IF] Macro"),
    (128, "Tamron 17-50mm F2.8 XR Di II LD Aspherical"),
    (128, "Sigma 10-20mm F3.5 EX DC HSM"),
    (128, "Sigma 70-200mm F2.8 II EX DG APO MACRO HSM"),
    (128, "Sigma 18-250mm F3.5-6.3 DC OS HSM"),
    (129, "Tamron 200-400mm F5.6 LD"),
    (129, "Tamron 70-300mm F4-5.6 LD"),
    (131, "Tamron 20-40mm F2.7-3.5 SP Aspherical IF"),
    (135, "Vivitar 28-210mm F3.5-5.6"),
    (136, "Tokina EMZ M100 AF 100mm F3.5"),
    (137, "Cosina 70-210mm F2.8-4 AF"),
    (138, "Soligor 19-35mm F3.5-4.5"),
    (142, "Voigtlander 70-300mm F4.5-5.6"),
    (146, "Voigtlander Macro APO-Lanthar 125mm F2.5 SL"),
    (255, "Tamron SP AF 17-50mm F2.8 XR Di II LD Aspherical"),
    (255, "Tamron AF 18-250mm F3.5-6.3 XR Di II LD"),
    (255, "Tamron AF 55-200mm F4-5.6 Di II LD Macro"),
    (255, "Tamron AF 70-300mm F4-5.6 Di LD Macro 1:2"),
    (255, "Tamron SP AF 200-500mm F5.0-6.3 Di LD IF"),
    (255, "Tamron SP AF 10-24mm F3.5-4.5 Di II LD Aspherical IF"),
    (255, "Tamron SP AF 70-200mm F2.8 Di LD IF Macro"),
    (255, "Tamron SP AF 28-75mm F2.8 XR Di LD Aspherical IF"),
    (25501, "Minolta AF 50mm F1.7"),
    (25511, "Minolta AF 35-70mm F4"),
    (25511, "Sigma UC AF 28-70mm F3.5-4.5"),
    (25511, "Sigma AF 28-70mm F2.8"),
    (25511, "Sigma M-AF 70-200mm F2.8 EX Aspherical"),
    (25511, "Quantaray M-AF 35-80mm F4-5.6"),
    (25511, "Tokina 28-70mm F2.8-4.5 AF"),
    (25521, "Minolta AF 28-85mm F3.5-4.5"),
    (25521, "Tokina 19-35mm F3.5-4.5"),
    (25521, "Tokina 28-70mm F2.8 AT-X"),
    (25521, "Tokina 80-400mm F4.5-5.6 AT-X AF II 840"),
    (25521, "Tokina AF PRO 28-80mm F2.8 AT-X 280"),
    (25521, "Tamron AF 19-35mm F3.5-4.5"),
    (25521, "Angenieux AF 28-70mm F2.6"),
    (25521, "Tokina AT-X 17 AF 17mm F3.5"),
    (25521, "Tokina 20-35mm F3.5-4.5 II AF"),
    (25531, "Minolta AF 28-135mm F4-4.5"),
    (25531, "Sigma ZOOM-alpha 35-135mm F3.5-4.5"),
    (25531, "Sigma 28-105mm F2.8-4 Aspherical"),
    (25531, "Sigma 28-105mm F4-5.6 UC"),
    (25541, "Minolta AF 35-105mm F3.5-4.5"),
    (25551, "Minolta AF 70-210mm F4 Macro"),
    (25551, "Sigma 70-210mm F4-5.6 APO"),
    (25551, "Sigma M-AF 70-200mm F2.8 EX APO"),
    (25551, "Sigma 75-200mm F2.8-3.5"),
    (25561, "Minolta AF 135mm F2.8"),
    (25571, "Minolta/Sony AF 28mm F2.8"),
    (25581, "Minolta AF 24-50mm F4"),
    (25601, "Minolta AF 100-200mm F4.5"),
    (25611, "Minolta AF 75-300mm F4.5-5.6"),
    (25611, "Sigma 70-300mm F4-5.6 DL Macro"),
    (25611, "Sigma 300mm F4 APO Macro"),
    (25611, "Sigma AF 500mm F4.5 APO"),
    (25611, "Sigma AF 170-500mm F5-6.3 APO Aspherical"),
    (25611, "Tokina AT-X AF 300mm F4"),
    (25611, "Tokina AT-X AF 400mm F5.6 SD"),
    (25611, "Tokina AF 730 II 75-300mm F4.5-5.6"),
    (25611, "Sigma 800mm F5.6 APO"),
    (25611, "Sigma AF 400mm F5.6 APO Macro"),
    (25611, "Sigma 1000mm F8 APO"),
    (25621, "Minolta AF 50mm F1.4 [New]"),
    (25631, "Minolta AF 300mm F2.8 APO"),
    (25631, "Sigma AF 50-500mm F4-6.3 EX DG APO"),
    (25631, "Sigma AF 170-500mm F5-6.3 APO Aspherical"),
    (25631, "Sigma AF 500mm F4.5 EX DG APO"),
    (25631, "Sigma 400mm F5.6 APO"),
    (25641, "Minolta AF 50mm F2.8 Macro"),
    (25641, "Sigma 50mm F2.8 EX Macro"),
    (25651, "Minolta AF 600mm F4 APO"),
    (25661, "Minolta AF 24mm F2.8"),
    (25661, "Sigma 17-35mm F2.8-4 EX Aspherical"),
    (25721, "Minolta/Sony AF 500mm F8 Reflex"),
    (25781, "Minolta/Sony AF 16mm F2.8 Fisheye"),
    (25781, "Sigma 8mm F4 EX [DG] Fisheye"),
    (25781, "Sigma 14mm F3.5"),
    (25781, "Sigma 15mm F2.8 Fisheye"),
    (25791, "Minolta/Sony AF 20mm F2.8"),
    (25791, "Tokina AT-X Pro DX 11-16mm F2.8"),
    (25811, "Minolta AF 100mm F2.8 Macro [New]"),
    (25811, "Sigma AF 90mm F2.8 Macro"),
    (25811, "Sigma AF 105mm F2.8 EX [DG] Macro"),
    (25811, "Sigma 180mm F5.6 Macro"),
    (25811, "Sigma 180mm F3.5 EX DG Macro"),
    (25811, "Tamron 90mm F2.8 Macro"),
    (25858, "Minolta AF 35-105mm F3.5-4.5 New"),
    (25858, "Tamron 24-135mm F3.5-5.6"),
    (25881, "Minolta AF 70-210mm F3.5-4.5"),
    (25891, "Minolta AF 80-200mm F2.8 APO"),
    (25891, "Tokina 80-200mm F2.8"),
    (25911, "Minolta AF 35mm F1.4"),
    (25921, "Minolta AF 85mm F1.4 G (D)"),
    (25931, "Minolta AF 200mm F2.8 G APO"),
    (25961, "Minolta AF 28mm F2"),
    (25981, "Minolta AF 100mm F2"),
    (26061, "Minolta AF 100-300mm F4.5-5.6"),
    (26081, "Minolta AF 300mm F2.8 G"),
    (26121, "Minolta AF 200mm F2.8 G(D)"),
    (26131, "Minolta AF 50mm F1.7 New"),
    (26241, "Minolta AF 35-80mm F4-5.6 Power Zoom"),
    (45741, "Minolta AF 200mm F2.8 G x2"),
    (45741, "Tokina 300mm F2.8 x2"),
    (65535, "E-Mount, T-Mount, Other Lens or no lens"),
];

/// A-mount lens ids, shared by the Minolta and Sony maker notes.
pub static SONY_LENS: IntLensInterpreter<i32> = IntLensInterpreter::new(SONY_LENSES, long_lens_id);

// camera settings are always big-endian shorts, whatever the maker note order
tag_table! {
    pub static SONY_CAMERA_SETTINGS_ATTRIBS = [
        (Never, Write, false, 0x04, Short, "DriveMode", interp = &SONY_DRIVE_MODE),
        (Never, Write, false, 0x06, SShort, "WhiteBalanceFineTune"),
        (Never, Write, false, 0x10, Short, "FocusMode", interp = &SONY_FOCUS_MODE),
        (Never, Write, false, 0x11, Short, "AFAreaMode"),
        (Never, Write, false, 0x12, Short, "LocalAFAreaPoint"),
        (Never, Write, false, 0x15, Short, "MeteringMode", interp = &SONY_METERING_MODE),
        (Never, Write, false, 0x16, Short, "ISOSetting"),
        (Never, Write, false, 0x18, Short, "DynamicRangeOptimizerMode"),
        (Never, Write, false, 0x19, Short, "DynamicRangeOptimizerLevel"),
        (Never, Write, false, 0x1a, Short, "CreativeStyle", interp = &SONY_CREATIVE_STYLE),
        (Never, Write, false, 0x1c, SShort, "Sharpness"),
        (Never, Write, false, 0x1d, SShort, "Contrast"),
        (Never, Write, false, 0x1e, SShort, "Saturation"),
        (Never, Write, false, 0x1f, Short, "ZoneMatchingValue"),
        (Never, Write, false, 0x22, SShort, "Brightness"),
        (Never, Write, false, 0x23, Short, "FlashMode"),
        (Never, Write, false, 0x28, Short, "PrioritySetupShutterRelease"),
        (Never, Write, false, 0x29, Short, "AFIlluminator"),
        (Never, Write, false, 0x2a, Short, "AFWithShutter"),
        (Never, Write, false, 0x2b, Short, "LongExposureNoiseReduction"),
        (Never, Write, false, 0x2c, Short, "HighISONoiseReduction"),
        (Never, Write, false, 0x2d, Short, "ImageStyle"),
        (Never, Write, false, 0x3c, Short, "ExposureProgram", interp = &SONY_EXPOSURE_PROGRAM),
        (Never, Write, false, 0x3d, Short, "ImageStabilization", interp = &SONY_ON_OFF),
        (Never, Write, false, 0x3f, Short, "Rotation"),
        (Never, Write, false, 0x54, Short, "SonyImageSize"),
        (Never, Write, false, 0x55, Short, "AspectRatio"),
        (Never, Write, false, 0x56, Short, "Quality"),
        (Never, Write, false, 0x58, Short, "ExposureLevelIncrements"),
    ];
}

// A230 to A580 bodies, picked over the base table by record size
tag_table! {
    pub static SONY_CAMERA_SETTINGS2_ATTRIBS = [
        (Never, Write, false, 0x00, Short, "ExposureTime"),
        (Never, Write, false, 0x01, Short, "FNumber"),
        (Never, Write, false, 0x02, Short, "HighSpeedSync", interp = &SONY_ON_OFF),
        (Never, Write, false, 0x03, Short, "ExposureCompensationSet"),
        (Never, Write, false, 0x04, Short, "WhiteBalanceSetting"),
        (Never, Write, false, 0x05, SShort, "WhiteBalanceFineTune"),
        (Never, Write, false, 0x06, Short, "ColorTemperatureSet"),
        (Never, Write, false, 0x07, SShort, "ColorCompensationFilterSet"),
        (Never, Write, false, 0x0b, Short, "ColorTemperatureCustom"),
        (Never, Write, false, 0x0c, SShort, "ColorCompensationFilterCustom"),
        (Never, Write, false, 0x0e, Short, "WhiteBalance"),
        (Never, Write, false, 0x0f, Short, "FocusModeSetting"),
        (Never, Write, false, 0x10, Short, "AFAreaMode"),
        (Never, Write, false, 0x11, Short, "AFPointSetting"),
        (Never, Write, false, 0x12, Short, "FlashMode"),
        (Never, Write, false, 0x13, SShort, "FlashExposureCompSet"),
        (Never, Write, false, 0x15, Short, "MeteringMode", interp = &SONY_METERING_MODE),
        (Never, Write, false, 0x16, Short, "ISOSetting"),
        (Never, Write, false, 0x18, Short, "DynamicRangeOptimizerMode"),
        (Never, Write, false, 0x19, Short, "DynamicRangeOptimizerLevel"),
        (Never, Write, false, 0x1a, Short, "CreativeStyle", interp = &SONY_CREATIVE_STYLE),
        (Never, Write, false, 0x1b, Short, "ColorSpace"),
        (Never, Write, false, 0x1c, SShort, "Sharpness"),
        (Never, Write, false, 0x1d, SShort, "Contrast"),
        (Never, Write, false, 0x1e, SShort, "Saturation"),
        (Never, Write, false, 0x3c, Short, "ExposureProgram", interp = &SONY_EXPOSURE_PROGRAM),
        (Never, Write, false, 0x3d, Short, "ImageStabilization", interp = &SONY_ON_OFF),
        (Never, Write, false, 0x3f, Short, "Rotation"),
        (Never, Write, false, 0x54, Short, "SonyImageSize"),
    ];
}

// SLT and NEX bodies, one byte per setting
tag_table! {
    pub static SONY_CAMERA_SETTINGS3_ATTRIBS = [
        (Never, Write, false, 0x00, Byte, "ShutterSpeedSetting"),
        (Never, Write, false, 0x01, Byte, "ApertureSetting"),
        (Never, Write, false, 0x02, Byte, "ISOSetting"),
        (Never, Write, false, 0x03, Byte, "ExposureCompensationSet"),
        (Never, Write, false, 0x04, Byte, "DriveModeSetting"),
        (Never, Write, false, 0x05, Byte, "ExposureProgram"),
        (Never, Write, false, 0x06, Byte, "FocusModeSetting"),
        (Never, Write, false, 0x07, Byte, "MeteringMode"),
        (Never, Write, false, 0x09, Byte, "SonyImageSize"),
        (Never, Write, false, 0x0a, Byte, "AspectRatio"),
        (Never, Write, false, 0x0b, Byte, "Quality"),
        (Never, Write, false, 0x0c, Byte, "DynamicRangeOptimizerSetting"),
        (Never, Write, false, 0x0d, Byte, "DynamicRangeOptimizerLevel"),
        (Never, Write, false, 0x0e, Byte, "ColorSpace"),
        (Never, Write, false, 0x0f, Byte, "CreativeStyleSetting"),
    ];
}

tag_table! {
    pub static SONY_CAMERA_INFO_ATTRIBS = [
        (Never, Write, false, 0x14, Byte, "FocusModeSetting"),
        (Never, Write, false, 0x15, Byte, "AFPointSelected"),
        (Never, Write, false, 0x19, Byte, "FocusMode"),
        (Never, Write, false, 0x1e, Byte, "AFPoint"),
        (Never, Write, false, 0x20, Byte, "FocusStatus"),
    ];
}

tag_table! {
    pub static SONY_CAMERA_INFO2_ATTRIBS = [
        (Never, Write, false, 0x10, Byte, "AFPointSelected"),
        (Never, Write, false, 0x11, Byte, "FocusMode"),
        (Never, Write, false, 0x14, Byte, "AFPoint"),
        (Never, Write, false, 0x15, Byte, "AFStatusActiveSensor"),
    ];
}

// the camera enciphers this block, values are exposed as stored
tag_table! {
    pub static SONY_TAG9405_ATTRIBS = [
        (Never, Write, false, 0x04, Short, "SonyISO"),
        (Never, Write, false, 0x06, Short, "BaseISO"),
        (Never, Write, false, 0x0a, Short, "StopsAboveBaseISO"),
        (Never, Write, false, 0x0e, Short, "SonyExposureTime2"),
        (Never, Write, false, 0x10, Short, "ExposureTime"),
        (Never, Write, false, 0x14, Short, "SonyFNumber"),
        (Never, Write, false, 0x16, Short, "SonyMaxApertureValue"),
        (Never, Write, false, 0x24, Byte, "SequenceImageNumber"),
        (Never, Write, false, 0x34, Byte, "ReleaseMode2"),
    ];
}

tag_table! {
    pub static SONY_ATTRIBS = [
        (Never, Write, false, 0x0010, Undefined, "CameraInfo", sub = SONY_CAMERA_INFO_ATTRIBS),
        (Never, Write, false, 0x0102, Long, "Quality", interp = &SONY_QUALITY),
        (Never, Write, false, 0x0104, SRational, "FlashExposureComp", interp = &EXPOSURE_BIAS),
        (Never, Write, false, 0x0105, Long, "Teleconverter"),
        (Never, Write, false, 0x0112, SLong, "WhiteBalanceFineTune"),
        (Never, Write, false, 0x0114, Short, "CameraSettings", sub = SONY_CAMERA_SETTINGS_ATTRIBS),
        (Never, Write, false, 0x0115, Long, "WhiteBalance", interp = &SONY_WHITE_BALANCE),
        (Never, Write, false, 0x0e00, Undefined, "PrintIM"),
        (Never, Write, false, 0x1000, Undefined, "MultiBurstMode"),
        (Never, Write, false, 0x2001, Undefined, "PreviewImage"),
        (Never, Write, false, 0x2002, Long, "Rating"),
        (Never, Write, false, 0x2004, SLong, "Contrast"),
        (Never, Write, false, 0x2005, SLong, "Saturation"),
        (Never, Write, false, 0x2006, SLong, "Sharpness"),
        (Never, Write, false, 0x2007, SLong, "Brightness"),
        (Never, Write, false, 0x200a, Long, "HDR"),
        (Never, Write, false, 0x200b, Long, "MultiFrameNoiseReduction"),
        (Never, Write, false, 0x3000, Undefined, "ShotInfo"),
        (Never, Write, false, 0x9405, Undefined, "Tag9405", sub = SONY_TAG9405_ATTRIBS),
        (Never, Write, false, 0xb020, Ascii, "CreativeStyle"),
        (Never, Write, false, 0xb021, Long, "ColorTemperature"),
        (Never, Write, false, 0xb023, Long, "SceneMode", interp = &SONY_SCENE_MODE),
        (Never, Write, false, 0xb024, Long, "ZoneMatching"),
        (Never, Write, false, 0xb025, Long, "DynamicRangeOptimizer", interp = &SONY_DRO),
        (Never, Write, false, 0xb026, Long, "ImageStabilization", interp = &SONY_ON_OFF),
        (Never, Write, false, 0xb027, Long, "LensID", interp = &SONY_LENS),
        (Never, Write, false, 0xb029, Long, "ColorMode"),
        (Never, Write, false, 0xb02a, Undefined, "LensSpec"),
        (Never, Write, false, 0xb02b, Long, "FullImageSize"),
        (Never, Write, false, 0xb02c, Long, "PreviewImageSize"),
        (Never, Write, false, 0xb040, Short, "Macro"),
        (Never, Write, false, 0xb041, Short, "ExposureMode"),
        (Never, Write, false, 0xb042, Short, "FocusMode"),
        (Never, Write, false, 0xb043, Short, "AFMode"),
        (Never, Write, false, 0xb044, Short, "AFIlluminator"),
        (Never, Write, false, 0xb047, Short, "JPEGQuality"),
        (Never, Write, false, 0xb048, SShort, "FlashLevel"),
        (Never, Write, false, 0xb049, Short, "ReleaseMode"),
        (Never, Write, false, 0xb04a, Short, "SequenceNumber"),
        (Never, Write, false, 0xb04b, Short, "AntiBlur"),
        (Never, Write, false, 0xb04e, Short, "LongExposureNoiseReduction"),
        (Never, Write, false, 0xb04f, Short, "DynamicRangeOptimizer2"),
        (Never, Write, false, 0xb052, Short, "IntelligentAuto"),
    ];
}
