use crate::interpreter::ChoiceInterpreter;
use crate::lens::{short_lens_id, IntLensInterpreter};
use phf::phf_map;

pub static CANON_MACRO_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    1i32 => "Macro",
    2i32 => "Normal",
});

pub static CANON_QUALITY: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    1i32 => "Economy",
    2i32 => "Normal",
    3i32 => "Fine",
    4i32 => "RAW",
    5i32 => "Superfine",
    130i32 => "Normal Movie",
});

pub static CANON_FLASH_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Off",
    1i32 => "Auto",
    2i32 => "On",
    3i32 => "Red-eye reduction",
    4i32 => "Slow-sync",
    5i32 => "Red-eye reduction (Auto)",
    6i32 => "Red-eye reduction (On)",
    16i32 => "External flash",
});

pub static CANON_DRIVE_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Single",
    1i32 => "Continuous",
    2i32 => "Movie",
    3i32 => "Continuous, Speed Priority",
    4i32 => "Continuous, Low",
    5i32 => "Continuous, High",
});

pub static CANON_FOCUS_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "One-shot AF",
    1i32 => "AI Servo AF",
    2i32 => "AI Focus AF",
    3i32 => "Manual Focus (3)",
    4i32 => "Single",
    5i32 => "Continuous",
    6i32 => "Manual Focus (6)",
    16i32 => "Pan Focus",
});

pub static CANON_IMAGE_SIZE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Large",
    1i32 => "Medium",
    2i32 => "Small",
    5i32 => "Medium 1",
    6i32 => "Medium 2",
    7i32 => "Medium 3",
    14i32 => "Small 1",
    15i32 => "Small 2",
    16i32 => "Small 3",
});

pub static CANON_METERING_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Default",
    1i32 => "Spot",
    2i32 => "Average",
    3i32 => "Evaluative",
    4i32 => "Partial",
    5i32 => "Center-weighted average",
});

pub static CANON_EXPOSURE_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Easy",
    1i32 => "Program AE",
    2i32 => "Shutter speed priority AE",
    3i32 => "Aperture-priority AE",
    4i32 => "Manual",
    5i32 => "Depth-of-field AE",
    6i32 => "M-Dep",
    7i32 => "Bulb",
});

pub static CANON_FOCAL_TYPE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Fixed",
    1i32 => "Fixed",
    2i32 => "Zoom",
});

pub static CANON_ON_OFF: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Off",
    1i32 => "On",
});

pub static CANON_LENS: IntLensInterpreter<i32> = IntLensInterpreter::new(CANON_LENSES, short_lens_id);

static CANON_LENSES: &[(i32, &str)] = &[
    (1, "Canon EF 50mm f/1.8"),
    (2, "Canon EF 28mm f/2.8"),
    (2, "Sigma 24mm f/2.8 Super Wide II"),
    (3, "Canon EF 135mm f/2.8 Soft"),
    (4, "Canon EF 35-105mm f/3.5-4.5"),
    (4, "Sigma UC Zoom 35-135mm f/4-5.6"),
    (5, "Canon EF 35-70mm f/3.5-4.5"),
    (6, "Canon EF 28-70mm f/3.5-4.5"),
    (6, "Sigma 18-50mm f/3.5-5.6 DC"),
    (6, "Sigma 18-125mm f/3.5-5.6 DC IF ASP"),
    (6, "Tokina AF 193-2 19-35mm f/3.5-4.5"),
    (6, "Sigma 28-80mm f/3.5-5.6 II Macro"),
    (7, "Canon EF 100-300mm f/5.6L"),
    (8, "Canon EF 100-300mm f/5.6"),
    (8, "Sigma 70-300mm f/4-5.6 DG Macro"),
    (8, "Tokina AT-X 242 AF 24-200mm f/3.5-5.6"),
    (9, "Canon EF 70-210mm f/4"),
    (9, "Sigma 55-200mm f/4-5.6 DC"),
    (10, "Canon EF 50mm f/2.5 Macro"),
    (10, "Sigma 50mm f/2.8 EX"),
    (10, "Sigma 28mm f/1.8"),
    (10, "Sigma 105mm f/2.8 Macro EX"),
    (10, "Sigma 70mm f/2.8 EX DG Macro EF"),
    (11, "Canon EF 35mm f/2"),
    (13, "Canon EF 15mm f/2.8 Fisheye"),
    (14, "Canon EF 50-200mm f/3.5-4.5L"),
    (15, "Canon EF 50-200mm f/3.5-4.5"),
    (16, "Canon EF 35-135mm f/3.5-4.5"),
    (17, "Canon EF 35-70mm f/3.5-4.5A"),
    (18, "Canon EF 28-70mm f/3.5-4.5"),
    (20, "Canon EF 100-200mm f/4.5A"),
    (21, "Canon EF 80-200mm f/2.8L"),
    (22, "Canon EF 20-35mm f/2.8L"),
    (22, "Tokina AT-X 280 AF Pro 28-80mm f/2.8 Aspherical"),
    (23, "Canon EF 35-105mm f/3.5-4.5"),
    (24, "Canon EF 35-80mm f/4-5.6 Power Zoom"),
    (25, "Canon EF 35-80mm f/4-5.6 Power Zoom"),
    (26, "Canon EF 100mm f/2.8 Macro"),
    (26, "Cosina 100mm f/3.5 Macro AF"),
    (26, "Tamron SP AF 90mm f/2.8 Di Macro"),
    (26, "Tamron SP AF 180mm f/3.5 Di Macro"),
    (26, "Carl Zeiss Planar T* 50mm f/1.4"),
    (27, "Canon EF 35-80mm f/4-5.6"),
    (28, "Canon EF 80-200mm f/4.5-5.6"),
    (28, "Tamron SP AF 28-105mm f/2.8 LD Aspherical IF"),
    (28, "Tamron SP AF 28-75mm f/2.8 XR Di LD Aspherical IF Macro"),
    (28, "Tamron AF 70-300mm f/4-5.6 Di LD 1:2 Macro"),
    (28, "Tamron AF Aspherical 28-200mm f/3.8-5.6"),
    (29, "Canon EF 50mm f/1.8 II"),
    (30, "Canon EF 35-105mm f/4.5-5.6"),
    (31, "Canon EF 75-300mm f/4-5.6"),
    (31, "Tamron SP AF 300mm f/2.8 LD IF"),
    (32, "Canon EF 24mm f/2.8"),
    (32, "Sigma 15mm f/2.8 EX Fisheye"),
    (35, "Canon EF 35-80mm f/4-5.6"),
    (36, "Canon EF 38-76mm f/4.5-5.6"),
    (37, "Canon EF 35-80mm f/4-5.6"),
    (37, "Tamron 70-200mm f/2.8 Di LD IF Macro"),
    (37, "Tamron AF 28-300mm f/3.5-6.3 XR Di VC LD Aspherical IF Macro"),
    (38, "Canon EF 80-200mm f/4.5-5.6"),
    (39, "Canon EF 75-300mm f/4-5.6"),
    (40, "Canon EF 28-80mm f/3.5-5.6"),
    (41, "Canon EF 28-90mm f/4-5.6"),
    (42, "Canon EF 28-200mm f/3.5-5.6"),
    (42, "Tamron AF 28-300mm f/3.5-6.3 XR Di VC LD Aspherical IF Macro"),
    (43, "Canon EF 28-105mm f/4-5.6"),
    (44, "Canon EF 90-300mm f/4.5-5.6"),
    (45, "Canon EF-S 18-55mm f/3.5-5.6"),
    (46, "Canon EF 28-90mm f/4-5.6"),
    (48, "Canon EF-S 18-55mm f/3.5-5.6 IS"),
    (49, "Canon EF-S 55-250mm f/4-5.6 IS"),
    (50, "Canon EF-S 18-200mm f/3.5-5.6 IS"),
    (51, "Canon EF-S 18-135mm f/3.5-5.6 IS"),
    (52, "Canon EF-S 18-55mm f/3.5-5.6 IS II"),
    (124, "Canon MP-E 65mm f/2.8 1-5x Macro Photo"),
    (125, "Canon TS-E 24mm f/3.5L"),
    (126, "Canon TS-E 45mm f/2.8"),
    (127, "Canon TS-E 90mm f/2.8"),
    (129, "Canon EF 300mm f/2.8L"),
    (130, "Canon EF 50mm f/1.0L"),
    (131, "Canon EF 28-80mm f/2.8-4L"),
    (131, "Sigma 8mm f/3.5 EX DG Circular Fisheye"),
    (131, "Sigma 17-35mm f/2.8-4 EX DG Aspherical HSM"),
    (131, "Sigma 17-70mm f/2.8-4.5 DC Macro"),
    (131, "Sigma APO 50-150mm f/2.8 EX DC HSM"),
    (131, "Sigma APO 120-300mm f/2.8 EX DG HSM"),
    (132, "Canon EF 1200mm f/5.6L"),
    (134, "Canon EF 600mm f/4L IS"),
    (135, "Canon EF 200mm f/1.8L"),
    (136, "Canon EF 300mm f/2.8L"),
    (137, "Canon EF 85mm f/1.2L"),
    (137, "Sigma 18-50mm f/2.8-4.5 DC OS HSM"),
    (137, "Sigma 50-200mm f/4-5.6 DC OS HSM"),
    (137, "Sigma 18-250mm f/3.5-6.3 DC OS HSM"),
    (137, "Sigma 24-70mm f/2.8 IF EX DG HSM"),
    (137, "Sigma 18-125mm f/3.8-5.6 DC OS HSM"),
    (137, "Sigma 17-70mm f/2.8-4 DC Macro OS HSM"),
    (137, "Tamron AF 18-270mm f/3.5-6.3 Di II VC PZD"),
    (138, "Canon EF 28-80mm f/2.8-4L"),
    (139, "Canon EF 400mm f/2.8L"),
    (140, "Canon EF 500mm f/4.5L"),
    (141, "Canon EF 500mm f/4.5L"),
    (142, "Canon EF 300mm f/2.8L IS"),
    (143, "Canon EF 500mm f/4L IS"),
    (144, "Canon EF 35-135mm f/4-5.6 USM"),
    (145, "Canon EF 100-300mm f/4.5-5.6 USM"),
    (146, "Canon EF 70-210mm f/3.5-4.5 USM"),
    (147, "Canon EF 35-135mm f/4-5.6 USM"),
    (148, "Canon EF 28-80mm f/3.5-5.6 USM"),
    (149, "Canon EF 100mm f/2 USM"),
    (150, "Canon EF 14mm f/2.8L"),
    (150, "Sigma 20mm EX f/1.8"),
    (150, "Sigma 30mm f/1.4 DC HSM"),
    (150, "Sigma 24mm f/1.8 DG Macro EX"),
    (151, "Canon EF 200mm f/2.8L"),
    (152, "Canon EF 300mm f/4L IS"),
    (152, "Sigma 12-24mm f/4.5-5.6 EX DG ASPHERICAL HSM"),
    (152, "Sigma 14mm f/2.8 EX Aspherical HSM"),
    (152, "Sigma 10-20mm f/4-5.6"),
    (152, "Sigma 100-300mm f/4"),
    (153, "Canon EF 35-350mm f/3.5-5.6L"),
    (153, "Sigma 50-500mm f/4-6.3 APO HSM EX"),
    (153, "Tamron AF 28-300mm f/3.5-6.3 XR LD Aspherical IF Macro"),
    (153, "Tamron AF 18-200mm f/3.5-6.3 XR Di II LD Aspherical IF Macro"),
    (153, "Tamron 18-250mm f/3.5-6.3 Di II LD Aspherical IF Macro"),
    (154, "Canon EF 20mm f/2.8 USM"),
    (155, "Canon EF 85mm f/1.8 USM"),
    (156, "Canon EF 28-105mm f/3.5-4.5 USM"),
    (156, "Tamron SP 70-300mm f/4-5.6 Di VC USD"),
    (160, "Canon EF 20-35mm f/3.5-4.5 USM"),
    (160, "Tamron AF 19-35mm f/3.5-4.5"),
    (160, "Tokina AT-X 124 AF 12-24mm f/4 DX"),
    (161, "Canon EF 28-70mm f/2.8L"),
    (161, "Sigma 24-70mm EX f/2.8"),
    (161, "Sigma 28-70mm f/2.8 EX"),
    (161, "Tamron AF 17-50mm f/2.8 Di-II LD Aspherical"),
    (161, "Tamron 90mm f/2.8"),
    (162, "Canon EF 200mm f/2.8L"),
    (163, "Canon EF 300mm f/4L"),
    (164, "Canon EF 400mm f/5.6L"),
    (165, "Canon EF 70-200mm f/2.8L"),
    (166, "Canon EF 70-200mm f/2.8L + 1.4x"),
    (167, "Canon EF 70-200mm f/2.8L + 2x"),
    (168, "Canon EF 28mm f/1.8 USM"),
    (169, "Canon EF 17-35mm f/2.8L"),
    (169, "Sigma 18-200mm f/3.5-6.3 DC OS"),
    (169, "Sigma 15-30mm f/3.5-4.5 EX DG Aspherical"),
    (169, "Sigma 18-50mm f/2.8 Macro"),
    (169, "Sigma 50mm f/1.4 EX DG HSM"),
    (169, "Sigma 85mm f/1.4 EX DG HSM"),
    (169, "Sigma 30mm f/1.4 EX DC HSM"),
    (170, "Canon EF 200mm f/2.8L II"),
    (171, "Canon EF 300mm f/4L"),
    (172, "Canon EF 400mm f/5.6L"),
    (173, "Canon EF 180mm Macro f/3.5L"),
    (173, "Sigma 180mm EX HSM Macro f/3.5"),
    (173, "Sigma APO Macro 150mm f/3.5 EX DG IF HSM"),
    (174, "Canon EF 135mm f/2L"),
    (174, "Sigma 70-200mm f/2.8 EX DG APO OS HSM"),
    (175, "Canon EF 400mm f/2.8L"),
    (176, "Canon EF 24-85mm f/3.5-4.5 USM"),
    (177, "Canon EF 300mm f/4L IS"),
    (178, "Canon EF 28-135mm f/3.5-5.6 IS"),
    (179, "Canon EF 24mm f/1.4L"),
    (180, "Canon EF 35mm f/1.4L"),
    (180, "Sigma 50mm f/1.4 DG HSM A"),
    (181, "Canon EF 100-400mm f/4.5-5.6L IS + 1.4x"),
    (182, "Canon EF 100-400mm f/4.5-5.6L IS + 2x"),
    (183, "Canon EF 100-400mm f/4.5-5.6L IS"),
    (183, "Sigma 150mm f/2.8 EX DG OS HSM APO Macro"),
    (183, "Sigma 105mm f/2.8 EX DG OS HSM Macro"),
    (184, "Canon EF 400mm f/2.8L + 2x"),
    (185, "Canon EF 600mm f/4L IS"),
    (186, "Canon EF 70-200mm f/4L"),
    (187, "Canon EF 70-200mm f/4L + 1.4x"),
    (188, "Canon EF 70-200mm f/4L + 2x"),
    (189, "Canon EF 70-200mm f/4L + 2.8x"),
    (190, "Canon EF 100mm f/2.8 Macro USM"),
    (191, "Canon EF 400mm f/4 DO IS"),
    (193, "Canon EF 35-80mm f/4-5.6 USM"),
    (194, "Canon EF 80-200mm f/4.5-5.6 USM"),
    (195, "Canon EF 35-105mm f/4.5-5.6 USM"),
    (196, "Canon EF 75-300mm f/4-5.6 USM"),
    (197, "Canon EF 75-300mm f/4-5.6 IS USM"),
    (198, "Canon EF 50mm f/1.4 USM"),
    (198, "Zeiss Otus 55mm f/1.4 ZE"),
    (199, "Canon EF 28-80mm f/3.5-5.6 USM"),
    (200, "Canon EF 75-300mm f/4-5.6 USM"),
    (201, "Canon EF 28-80mm f/3.5-5.6 USM"),
    (202, "Canon EF 28-80mm f/3.5-5.6 USM IV"),
    (208, "Canon EF 22-55mm f/4-5.6 USM"),
    (209, "Canon EF 55-200mm f/4.5-5.6"),
    (210, "Canon EF 28-90mm f/4-5.6 USM"),
    (211, "Canon EF 28-200mm f/3.5-5.6 USM"),
    (212, "Canon EF 28-105mm f/4-5.6 USM"),
    (213, "Canon EF 90-300mm f/4.5-5.6 USM"),
    (213, "Tamron SP 150-600mm f/5-6.3 Di VC USD"),
    (214, "Canon EF-S 18-55mm f/3.5-5.6 USM"),
    (215, "Canon EF 55-200mm f/4.5-5.6 II USM"),
    (224, "Canon EF 70-200mm f/2.8L IS"),
    (225, "Canon EF 70-200mm f/2.8L IS + 1.4x"),
    (226, "Canon EF 70-200mm f/2.8L IS + 2x"),
    (227, "Canon EF 70-200mm f/2.8L IS + 2.8x"),
    (228, "Canon EF 28-105mm f/3.5-4.5 USM"),
    (229, "Canon EF 16-35mm f/2.8L"),
    (230, "Canon EF 24-70mm f/2.8L"),
    (231, "Canon EF 17-40mm f/4L"),
    (232, "Canon EF 70-300mm f/4.5-5.6 DO IS USM"),
    (233, "Canon EF 28-300mm f/3.5-5.6L IS"),
    (234, "Canon EF-S 17-85mm f/4-5.6 IS USM"),
    (235, "Canon EF-S 10-22mm f/3.5-4.5 USM"),
    (236, "Canon EF-S 60mm f/2.8 Macro USM"),
    (237, "Canon EF 24-105mm f/4L IS"),
    (238, "Canon EF 70-300mm f/4-5.6 IS USM"),
    (239, "Canon EF 85mm f/1.2L II"),
    (240, "Canon EF-S 17-55mm f/2.8 IS USM"),
    (241, "Canon EF 50mm f/1.2L"),
    (242, "Canon EF 70-200mm f/4L IS"),
    (243, "Canon EF 70-200mm f/4L IS + 1.4x"),
    (244, "Canon EF 70-200mm f/4L IS + 2x"),
    (245, "Canon EF 70-200mm f/4L IS + 2.8x"),
    (246, "Canon EF 16-35mm f/2.8L II"),
    (247, "Canon EF 14mm f/2.8L II USM"),
    (248, "Canon EF 200mm f/2L IS"),
    (249, "Canon EF 800mm f/5.6L IS"),
    (250, "Canon EF 24mm f/1.4L II"),
    (251, "Canon EF 70-200mm f/2.8L IS II USM"),
    (252, "Canon EF 70-200mm f/2.8L IS II USM + 1.4x"),
    (253, "Canon EF 70-200mm f/2.8L IS II USM + 2x"),
    (254, "Canon EF 100mm f/2.8L Macro IS USM"),
    (488, "Canon EF-S 15-85mm f/3.5-5.6 IS USM"),
    (489, "Canon EF 70-300mm f/4-5.6L IS USM"),
    (490, "Canon EF 8-15mm f/4L Fisheye USM"),
    (491, "Canon EF 300mm f/2.8L IS II USM"),
    (493, "Canon EF 500mm f/4L IS II USM"),
    (494, "Canon EF 600mm f/4L IS II USM"),
    (495, "Canon EF 24-70mm f/2.8L II USM"),
    (496, "Canon EF 200-400mm f/4L IS USM"),
    (499, "Canon EF 200-400mm f/4L IS USM + 1.4x"),
    (502, "Canon EF 28mm f/2.8 IS USM"),
    (503, "Canon EF 24mm f/2.8 IS USM"),
    (504, "Canon EF 24-70mm f/4L IS USM"),
    (505, "Canon EF 35mm f/2 IS USM"),
    (4142, "Canon EF-S 18-135mm f/3.5-5.6 IS STM"),
    (4143, "Canon EF-M 18-55mm f/3.5-5.6 IS STM"),
    (4144, "Canon EF 40mm f/2.8 STM"),
    (4145, "Canon EF-M 22mm f/2 STM"),
    (4146, "Canon EF-S 18-55mm f/3.5-5.6 IS STM"),
    (4147, "Canon EF-M 11-22mm f/4-5.6 IS STM"),
    (4148, "Canon EF-S 55-250mm f/4-5.6 IS STM"),
    (4149, "Canon EF-M 55-200mm f/4.5-6.3 IS STM"),
    (4150, "Canon EF-S 10-18mm f/4.5-5.6 IS STM"),
    (4152, "Canon EF 24-105mm f/3.5-5.6 IS STM"),
    (4153, "Canon EF-M 15-45mm f/3.5-6.3 IS STM"),
    (4154, "Canon EF-S 24mm f/2.8 STM"),
    (4156, "Canon EF 50mm f/1.8 STM"),
];

tag_table! {
    pub static CANON_CAMERA_SETTINGS_ATTRIBS = [
        (Never, Write, false, 1, Auto, "MacroMode", interp = &CANON_MACRO_MODE),
        (Never, Write, false, 2, Auto, "SelfTimer"),
        (Never, Write, false, 3, Auto, "Quality", interp = &CANON_QUALITY),
        (Never, Write, false, 4, Auto, "CanonFlashMode", interp = &CANON_FLASH_MODE),
        (Never, Write, false, 5, Auto, "ContinuousDrive", interp = &CANON_DRIVE_MODE),
        (Never, Write, false, 7, Auto, "FocusMode", interp = &CANON_FOCUS_MODE),
        (Never, Write, false, 9, Auto, "RecordMode"),
        (Never, Write, false, 10, Auto, "CanonImageSize", interp = &CANON_IMAGE_SIZE),
        (Never, Write, false, 11, Auto, "EasyMode"),
        (Never, Write, false, 12, Auto, "DigitalZoom"),
        (Never, Write, false, 13, SShort, "Contrast"),
        (Never, Write, false, 14, SShort, "Saturation"),
        (Never, Write, false, 15, SShort, "Sharpness"),
        (Never, Write, false, 16, Auto, "CameraISO"),
        (Never, Write, false, 17, Auto, "MeteringMode", interp = &CANON_METERING_MODE),
        (Never, Write, false, 18, Auto, "FocusRange"),
        (Never, Write, false, 19, Auto, "AFPoint"),
        (Never, Write, false, 20, Auto, "CanonExposureMode", interp = &CANON_EXPOSURE_MODE),
        (Never, Write, false, 22, Auto, "LensType", interp = &CANON_LENS),
        (Never, Write, false, 23, Auto, "LongFocal"),
        (Never, Write, false, 24, Auto, "ShortFocal"),
        (Never, Write, false, 25, Auto, "FocalUnits"),
        (Never, Write, false, 26, Auto, "MaxAperture"),
        (Never, Write, false, 27, Auto, "MinAperture"),
        (Never, Write, false, 28, Auto, "FlashActivity"),
        (Never, Write, false, 29, Auto, "FlashBits"),
        (Never, Write, false, 32, Auto, "FocusContinuous"),
        (Never, Write, false, 33, Auto, "AESetting"),
        (Never, Write, false, 34, Auto, "ImageStabilization"),
        (Never, Write, false, 35, Auto, "DisplayAperture"),
        (Never, Write, false, 36, Auto, "ZoomSourceWidth"),
        (Never, Write, false, 37, Auto, "ZoomTargetWidth"),
        (Never, Write, false, 39, Auto, "SpotMeteringMode"),
        (Never, Write, false, 40, Auto, "PhotoEffect"),
        (Never, Write, false, 41, Auto, "ManualFlashOutput"),
        (Never, Write, false, 42, Auto, "ColorTone"),
        (Never, Write, false, 46, Auto, "SRAWQuality"),
    ];
}

tag_table! {
    pub static CANON_FOCAL_LENGTH_ATTRIBS = [
        (Never, Write, false, 0, Auto, "FocalType", interp = &CANON_FOCAL_TYPE),
        (Never, Write, false, 1, Auto, "FocalLength"),
        (Never, Write, false, 2, Auto, "FocalPlaneXSize"),
        (Never, Write, false, 3, Auto, "FocalPlaneYSize"),
    ];
}

tag_table! {
    pub static CANON_SHOT_INFO_ATTRIBS = [
        (Never, Write, false, 1, SShort, "AutoISO"),
        (Never, Write, false, 2, SShort, "BaseISO"),
        (Never, Write, false, 3, SShort, "MeasuredEV"),
        (Never, Write, false, 4, SShort, "TargetAperture"),
        (Never, Write, false, 5, SShort, "TargetExposureTime"),
        (Never, Write, false, 6, SShort, "ExposureCompensation"),
        (Never, Write, false, 7, Auto, "WhiteBalance"),
        (Never, Write, false, 8, Auto, "SlowShutter"),
        (Never, Write, false, 9, Auto, "SequenceNumber"),
        (Never, Write, false, 10, Auto, "OpticalZoomCode"),
        (Never, Write, false, 12, Auto, "CameraTemperature"),
        (Never, Write, false, 13, Auto, "FlashGuideNumber"),
        (Never, Write, false, 14, Auto, "AFPointsInFocus"),
        (Never, Write, false, 15, SShort, "FlashExposureComp"),
        (Never, Write, false, 16, Auto, "AutoExposureBracketing"),
        (Never, Write, false, 17, SShort, "AEBBracketValue"),
        (Never, Write, false, 18, Auto, "ControlMode"),
        (Never, Write, false, 19, Auto, "FocusDistanceUpper"),
        (Never, Write, false, 20, Auto, "FocusDistanceLower"),
        (Never, Write, false, 21, Auto, "FNumber"),
        (Never, Write, false, 22, Auto, "ExposureTime"),
        (Never, Write, false, 23, Auto, "MeasuredEV2"),
        (Never, Write, false, 24, Auto, "BulbDuration"),
        (Never, Write, false, 26, Auto, "CameraType"),
        (Never, Write, false, 27, Auto, "AutoRotate"),
        (Never, Write, false, 28, Auto, "NDFilter", interp = &CANON_ON_OFF),
        (Never, Write, false, 29, Auto, "SelfTimer2"),
        (Never, Write, false, 33, Auto, "FlashOutput"),
    ];
}

tag_table! {
    pub static CANON_SENSOR_INFO_ATTRIBS = [
        (Never, Write, false, 1, Auto, "SensorWidth"),
        (Never, Write, false, 2, Auto, "SensorHeight"),
        (Never, Write, false, 5, Auto, "SensorLeftBorder"),
        (Never, Write, false, 6, Auto, "SensorTopBorder"),
        (Never, Write, false, 7, Auto, "SensorRightBorder"),
        (Never, Write, false, 8, Auto, "SensorBottomBorder"),
        (Never, Write, false, 9, Auto, "BlackMaskLeftBorder"),
        (Never, Write, false, 10, Auto, "BlackMaskTopBorder"),
        (Never, Write, false, 11, Auto, "BlackMaskRightBorder"),
        (Never, Write, false, 12, Auto, "BlackMaskBottomBorder"),
    ];
}

tag_table! {
    pub static CANON_PROCESSING_INFO_ATTRIBS = [
        (Never, Write, false, 1, SShort, "ToneCurve"),
        (Never, Write, false, 2, SShort, "Sharpness"),
        (Never, Write, false, 3, SShort, "SharpnessFrequency"),
        (Never, Write, false, 4, SShort, "SensorRedLevel"),
        (Never, Write, false, 5, SShort, "SensorBlueLevel"),
        (Never, Write, false, 6, SShort, "WhiteBalanceRed"),
        (Never, Write, false, 7, SShort, "WhiteBalanceBlue"),
        (Never, Write, false, 8, SShort, "WhiteBalance"),
        (Never, Write, false, 9, SShort, "ColorTemperature"),
        (Never, Write, false, 10, SShort, "PictureStyle"),
        (Never, Write, false, 11, SShort, "DigitalGain"),
        (Never, Write, false, 12, SShort, "WBShiftAB"),
        (Never, Write, false, 13, SShort, "WBShiftGM"),
    ];
}

tag_table! {
    pub static CANON_ATTRIBS = [
        (Never, Write, false, 0x0001, Short, "CanonCameraSettings", sub = CANON_CAMERA_SETTINGS_ATTRIBS),
        (Never, Write, false, 0x0002, Short, "CanonFocalLength", sub = CANON_FOCAL_LENGTH_ATTRIBS),
        (Never, Write, false, 0x0003, Auto, "CanonFlashInfo"),
        (Never, Write, false, 0x0004, Short, "CanonShotInfo", sub = CANON_SHOT_INFO_ATTRIBS),
        (Never, Write, false, 0x0005, Auto, "CanonPanorama"),
        (Never, Write, false, 0x0006, Ascii, "CanonImageType"),
        (Never, Write, false, 0x0007, Ascii, "CanonFirmwareVersion"),
        (Never, Write, false, 0x0008, Auto, "FileNumber"),
        (Never, Write, true, 0x0009, Ascii, "OwnerName"),
        (Never, Write, false, 0x000a, Auto, "ColorInfoD30"),
        (Never, Write, false, 0x000c, Auto, "SerialNumber"),
        (Never, Write, false, 0x000d, Auto, "CanonCameraInfo"),
        (Never, Write, false, 0x000e, Auto, "CanonFileLength"),
        (Never, Write, false, 0x000f, Auto, "CustomFunctions"),
        (Never, Write, false, 0x0010, Auto, "CanonModelID"),
        (Never, Write, false, 0x0012, Auto, "CanonAFInfo"),
        (Never, Write, false, 0x0015, Auto, "SerialNumberFormat"),
        (Never, Write, false, 0x001c, Auto, "DateStampMode"),
        (Never, Write, false, 0x001d, Auto, "MyColors"),
        (Never, Write, false, 0x001e, Auto, "FirmwareRevision"),
        (Never, Write, false, 0x0026, Auto, "CanonAFInfo2"),
        (Never, Write, false, 0x0083, Auto, "OriginalDecisionData"),
        (Never, Write, false, 0x0093, Auto, "CanonFileInfo"),
        (Never, Write, false, 0x0095, Ascii, "LensModel"),
        (Never, Write, false, 0x0096, Ascii, "InternalSerialNumber"),
        (Never, Write, false, 0x0097, Auto, "DustRemovalData"),
        (Never, Write, false, 0x0099, Auto, "CustomFunctions2"),
        (Never, Write, false, 0x00a0, Short, "ProcessingInfo", sub = CANON_PROCESSING_INFO_ATTRIBS),
        (Never, Write, false, 0x00aa, Auto, "MeasuredColor"),
        (Never, Write, false, 0x00b4, Auto, "ColorSpace"),
        (Never, Write, false, 0x00d0, Auto, "VRDOffset"),
        (Never, Write, false, 0x00e0, Short, "SensorInfo", sub = CANON_SENSOR_INFO_ATTRIBS),
        (Never, Write, false, 0x4001, Auto, "ColorData"),
    ];
}
