use crate::interpreter::ChoiceInterpreter;
use phf::phf_map;

pub static FUJI_ON_OFF: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Off",
    1i32 => "On",
});

pub static FUJI_SHARPNESS: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "-4 (softest)",
    1i32 => "-3 (very soft)",
    2i32 => "-2 (soft)",
    3i32 => "0 (normal)",
    4i32 => "+2 (hard)",
    5i32 => "+3 (very hard)",
    6i32 => "+4 (hardest)",
    130i32 => "-1 (medium soft)",
    132i32 => "+1 (medium hard)",
    32768i32 => "Film Simulation",
    65535i32 => "n/a",
});

pub static FUJI_WHITE_BALANCE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Auto",
    256i32 => "Daylight",
    512i32 => "Cloudy",
    768i32 => "Daylight Fluorescent",
    769i32 => "Day White Fluorescent",
    770i32 => "White Fluorescent",
    771i32 => "Warm White Fluorescent",
    772i32 => "Living Room Warm White Fluorescent",
    1024i32 => "Incandescent",
    1280i32 => "Flash",
    1536i32 => "Underwater",
    3840i32 => "Custom",
    3841i32 => "Custom2",
    3842i32 => "Custom3",
    3843i32 => "Custom4",
    3844i32 => "Custom5",
    4080i32 => "Kelvin",
});

pub static FUJI_SATURATION: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "0 (normal)",
    128i32 => "+1 (medium high)",
    192i32 => "+3 (very high)",
    224i32 => "+4 (highest)",
    256i32 => "+2 (high)",
    384i32 => "-1 (medium low)",
    512i32 => "Low",
    768i32 => "None (B&W)",
    769i32 => "B&W Red Filter",
    770i32 => "B&W Yellow Filter",
    771i32 => "B&W Green Filter",
    784i32 => "B&W Sepia",
    1024i32 => "-2 (low)",
    1216i32 => "-3 (very low)",
    1248i32 => "-4 (lowest)",
    1280i32 => "Acros",
    32768i32 => "Film Simulation",
});

pub static FUJI_FLASH_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Auto",
    1i32 => "On",
    2i32 => "Off",
    3i32 => "Red-eye reduction",
    4i32 => "External",
    16i32 => "Commander",
    32768i32 => "Not Attached",
    33056i32 => "TTL",
    38976i32 => "Manual",
    39040i32 => "Multi-flash",
    43296i32 => "1st Curtain (front)",
    51488i32 => "2nd Curtain (rear)",
    59680i32 => "High Speed Sync (HSS)",
});

pub static FUJI_FOCUS_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Auto",
    1i32 => "Manual",
    65535i32 => "Movie",
});

pub static FUJI_PICTURE_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Auto",
    1i32 => "Portrait",
    2i32 => "Landscape",
    3i32 => "Macro",
    4i32 => "Sports",
    5i32 => "Night Scene",
    6i32 => "Program AE",
    7i32 => "Natural Light",
    8i32 => "Anti-blur",
    9i32 => "Beach & Snow",
    10i32 => "Sunset",
    11i32 => "Museum",
    12i32 => "Party",
    13i32 => "Flower",
    14i32 => "Text",
    15i32 => "Natural Light & Flash",
    16i32 => "Beach",
    17i32 => "Snow",
    18i32 => "Fireworks",
    19i32 => "Underwater",
    256i32 => "Aperture-priority AE",
    512i32 => "Shutter speed priority AE",
    768i32 => "Manual",
});

pub static FUJI_DYNAMIC_RANGE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    1i32 => "Standard",
    3i32 => "Wide",
});

pub static FUJI_FILM_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "F0/Standard (Provia)",
    256i32 => "F1/Studio Portrait",
    272i32 => "F1a/Studio Portrait Enhanced Saturation",
    288i32 => "F1b/Studio Portrait Smooth Skin Tone (Astia)",
    304i32 => "F1c/Studio Portrait Increased Sharpness",
    512i32 => "F2/Fujichrome (Velvia)",
    768i32 => "F3/Studio Portrait Ex",
    1024i32 => "F4/Velvia",
    1280i32 => "Pro Neg. Std",
    1281i32 => "Pro Neg. Hi",
    1536i32 => "Classic Chrome",
    1792i32 => "Eterna",
    2048i32 => "Classic Negative",
});

pub static FUJI_DYNAMIC_RANGE_SETTING: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Auto (100-400%)",
    1i32 => "Manual",
    256i32 => "Standard (100%)",
    512i32 => "Wide1 (230%)",
    513i32 => "Wide2 (400%)",
    32768i32 => "Film Simulation",
});

tag_table! {
    pub static FUJI_ATTRIBS = [
        (Never, Write, false, 0x0000, Undefined, "Version"),
        (Never, Write, false, 0x0010, Ascii, "InternalSerialNumber"),
        (Never, Write, false, 0x1000, Ascii, "Quality"),
        (Never, Write, false, 0x1001, Short, "Sharpness", interp = &FUJI_SHARPNESS),
        (Never, Write, false, 0x1002, Short, "WhiteBalance", interp = &FUJI_WHITE_BALANCE),
        (Never, Write, false, 0x1003, Short, "Saturation", interp = &FUJI_SATURATION),
        (Never, Write, false, 0x1004, Short, "Contrast"),
        (Never, Write, false, 0x1005, Short, "ColorTemperature"),
        (Never, Write, false, 0x100a, Short, "WhiteBalanceFineTune"),
        (Never, Write, false, 0x100b, Short, "NoiseReduction"),
        (Never, Write, false, 0x100e, Short, "HighISONoiseReduction"),
        (Never, Write, false, 0x1010, Short, "FujiFlashMode", interp = &FUJI_FLASH_MODE),
        (Never, Write, false, 0x1011, SRational, "FlashExposureComp"),
        (Never, Write, false, 0x1020, Short, "Macro", interp = &FUJI_ON_OFF),
        (Never, Write, false, 0x1021, Short, "FocusMode", interp = &FUJI_FOCUS_MODE),
        (Never, Write, false, 0x1023, Short, "FocusPixel"),
        (Never, Write, false, 0x1030, Short, "SlowSync", interp = &FUJI_ON_OFF),
        (Never, Write, false, 0x1031, Short, "PictureMode", interp = &FUJI_PICTURE_MODE),
        (Never, Write, false, 0x1033, Short, "EXRAuto"),
        (Never, Write, false, 0x1034, Short, "EXRMode"),
        (Never, Write, false, 0x1100, Short, "AutoBracketing", interp = &FUJI_ON_OFF),
        (Never, Write, false, 0x1101, Short, "SequenceNumber"),
        (Never, Write, false, 0x1210, Short, "ColorMode"),
        (Never, Write, false, 0x1300, Short, "BlurWarning", interp = &FUJI_ON_OFF),
        (Never, Write, false, 0x1301, Short, "FocusWarning", interp = &FUJI_ON_OFF),
        (Never, Write, false, 0x1302, Short, "ExposureWarning", interp = &FUJI_ON_OFF),
        (Never, Write, false, 0x1400, Short, "DynamicRange", interp = &FUJI_DYNAMIC_RANGE),
        (Never, Write, false, 0x1401, Short, "FilmMode", interp = &FUJI_FILM_MODE),
        (Never, Write, false, 0x1402, Short, "DynamicRangeSetting", interp = &FUJI_DYNAMIC_RANGE_SETTING),
        (Never, Write, false, 0x1403, Short, "DevelopmentDynamicRange"),
        (Never, Write, false, 0x1404, Rational, "MinFocalLength"),
        (Never, Write, false, 0x1405, Rational, "MaxFocalLength"),
        (Never, Write, false, 0x1406, Rational, "MaxApertureAtMinFocal"),
        (Never, Write, false, 0x1407, Rational, "MaxApertureAtMaxFocal"),
        (Never, Write, false, 0x140b, Short, "AutoDynamicRange"),
        (Never, Write, false, 0x4100, Short, "FacesDetected"),
        (Never, Write, false, 0x8000, Ascii, "FileSource"),
        (Never, Write, false, 0x8002, Long, "OrderNumber"),
        (Never, Write, false, 0x8003, Short, "FrameNumber"),
    ];
}
