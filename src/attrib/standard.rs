use super::KODAK_IFD_ATTRIBS;
use crate::interpreter::{
    ChoiceInterpreter, APEX_APERTURE, APEX_SHUTTER, EXPOSURE_BIAS, EXPOSURE_TIME, FOCAL_LENGTH,
    F_NUMBER, USER_COMMENT,
};
use phf::phf_map;

pub static ORIENTATION: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    1i32 => "Horizontal (normal)",
    2i32 => "Mirror horizontal",
    3i32 => "Rotate 180",
    4i32 => "Mirror vertical",
    5i32 => "Mirror horizontal and rotate 270 CW",
    6i32 => "Rotate 90 CW",
    7i32 => "Mirror horizontal and rotate 90 CW",
    8i32 => "Rotate 270 CW",
});

pub static RESOLUTION_UNIT: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    1i32 => "None",
    2i32 => "Inches",
    3i32 => "Centimeters",
});

pub static COMPRESSION: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    1i32 => "Uncompressed",
    2i32 => "CCITT 1D",
    5i32 => "LZW",
    6i32 => "JPEG (old-style)",
    7i32 => "JPEG",
    8i32 => "Adobe Deflate",
    32773i32 => "PackBits",
    32767i32 => "Sony ARW Compressed",
    34892i32 => "Lossy JPEG",
    65535i32 => "Pentax PEF Compressed",
});

pub static PHOTOMETRIC: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "WhiteIsZero",
    1i32 => "BlackIsZero",
    2i32 => "RGB",
    5i32 => "CMYK",
    6i32 => "YCbCr",
    32803i32 => "Color Filter Array",
    34892i32 => "Linear Raw",
});

pub static PLANAR_CONFIG: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    1i32 => "Chunky",
    2i32 => "Planar",
});

pub static YCBCR_POSITIONING: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    1i32 => "Centered",
    2i32 => "Co-sited",
});

pub static EXPOSURE_PROGRAM: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Not Defined",
    1i32 => "Manual",
    2i32 => "Program AE",
    3i32 => "Aperture-priority AE",
    4i32 => "Shutter speed priority AE",
    5i32 => "Creative (Slow speed)",
    6i32 => "Action (High speed)",
    7i32 => "Portrait",
    8i32 => "Landscape",
});

pub static METERING_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Unknown",
    1i32 => "Average",
    2i32 => "Center weighted",
    3i32 => "Spot",
    4i32 => "Multi-spot",
    5i32 => "Multi-segment",
    6i32 => "Partial",
    255i32 => "Other",
});

pub static LIGHT_SOURCE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Unknown",
    1i32 => "Daylight",
    2i32 => "Fluorescent",
    3i32 => "Tungsten",
    4i32 => "Flash",
    9i32 => "Fine Weather",
    10i32 => "Cloudy",
    11i32 => "Shade",
    12i32 => "Daylight Fluorescent",
    13i32 => "Day White Fluorescent",
    14i32 => "Cool White Fluorescent",
    15i32 => "White Fluorescent",
    17i32 => "Standard Light A",
    18i32 => "Standard Light B",
    19i32 => "Standard Light C",
    20i32 => "D55",
    21i32 => "D65",
    22i32 => "D75",
    23i32 => "D50",
    24i32 => "ISO Studio Tungsten",
    255i32 => "Other",
});

pub static FLASH: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0x00i32 => "No Flash",
    0x01i32 => "Fired",
    0x05i32 => "Fired, Return not detected",
    0x07i32 => "Fired, Return detected",
    0x08i32 => "On, Did not fire",
    0x09i32 => "On, Fired",
    0x0di32 => "On, Return not detected",
    0x0fi32 => "On, Return detected",
    0x10i32 => "Off, Did not fire",
    0x14i32 => "Off, Did not fire, Return not detected",
    0x18i32 => "Auto, Did not fire",
    0x19i32 => "Auto, Fired",
    0x1di32 => "Auto, Fired, Return not detected",
    0x1fi32 => "Auto, Fired, Return detected",
    0x20i32 => "No flash function",
    0x41i32 => "Fired, Red-eye reduction",
    0x45i32 => "Fired, Red-eye reduction, Return not detected",
    0x47i32 => "Fired, Red-eye reduction, Return detected",
    0x49i32 => "On, Red-eye reduction",
    0x59i32 => "Auto, Fired, Red-eye reduction",
});

pub static COLOR_SPACE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    1i32 => "sRGB",
    2i32 => "Adobe RGB",
    65533i32 => "Wide Gamut RGB",
    65534i32 => "ICC Profile",
    65535i32 => "Uncalibrated",
});

pub static SENSING_METHOD: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    1i32 => "Not defined",
    2i32 => "One-chip color area",
    3i32 => "Two-chip color area",
    4i32 => "Three-chip color area",
    5i32 => "Color sequential area",
    7i32 => "Trilinear",
    8i32 => "Color sequential linear",
});

pub static FOCAL_PLANE_UNIT: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    1i32 => "None",
    2i32 => "inches",
    3i32 => "cm",
    4i32 => "mm",
    5i32 => "um",
});

pub static CUSTOM_RENDERED: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Normal",
    1i32 => "Custom",
});

pub static EXPOSURE_MODE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Auto",
    1i32 => "Manual",
    2i32 => "Auto bracket",
});

pub static WHITE_BALANCE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Auto",
    1i32 => "Manual",
});

pub static SCENE_CAPTURE_TYPE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Standard",
    1i32 => "Landscape",
    2i32 => "Portrait",
    3i32 => "Night",
});

pub static GAIN_CONTROL: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "None",
    1i32 => "Low gain up",
    2i32 => "High gain up",
    3i32 => "Low gain down",
    4i32 => "High gain down",
});

pub static CONTRAST: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Normal",
    1i32 => "Low",
    2i32 => "High",
});

pub static SHARPNESS: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Normal",
    1i32 => "Soft",
    2i32 => "Hard",
});

pub static SUBJECT_DISTANCE_RANGE: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Unknown",
    1i32 => "Macro",
    2i32 => "Close",
    3i32 => "Distant",
});

pub static GPS_ALTITUDE_REF: ChoiceInterpreter = ChoiceInterpreter::new(phf_map! {
    0i32 => "Above Sea Level",
    1i32 => "Below Sea Level",
});

tag_table! {
    pub static IFD_ATTRIBS = [
        (Never, System, false, 0x00fe, Auto, "NewSubFileType"),
        (IfReduced, Write, false, 0x0100, Auto, "ImageWidth"),
        (IfReduced, Write, false, 0x0101, Auto, "ImageHeight"),
        (IfReduced, Write, false, 0x0102, Short, "BitsPerSample"),
        (IfReduced, Write, false, 0x0103, Short, "Compression", interp = &COMPRESSION),
        (IfReduced, Write, false, 0x0106, Short, "PhotometricInterpretation", interp = &PHOTOMETRIC),
        (Never, Write, true, 0x010e, Ascii, "ImageDescription"),
        (Never, Write, true, 0x010f, Ascii, "Make"),
        (Never, Write, true, 0x0110, Ascii, "Model"),
        (Always, DontWrite, false, 0x0111, Auto, "StripOffsets"),
        (Never, Write, false, 0x0112, Short, "Orientation", interp = &ORIENTATION),
        (IfReduced, Write, false, 0x0115, Short, "SamplesPerPixel"),
        (Always, DontWrite, false, 0x0116, Auto, "RowsPerStrip"),
        (Always, DontWrite, false, 0x0117, Auto, "StripByteCounts"),
        (Never, Write, false, 0x011a, Rational, "XResolution"),
        (Never, Write, false, 0x011b, Rational, "YResolution"),
        (IfReduced, Write, false, 0x011c, Short, "PlanarConfiguration", interp = &PLANAR_CONFIG),
        (Never, Write, false, 0x0128, Short, "ResolutionUnit", interp = &RESOLUTION_UNIT),
        (Never, DontWrite, false, 0x012d, Auto, "TransferFunction"),
        (Never, System, false, 0x0131, Ascii, "Software"),
        (Never, Write, true, 0x0132, Ascii, "DateTime"),
        (Never, Write, true, 0x013b, Ascii, "Artist"),
        (Never, Write, false, 0x013e, Rational, "WhitePoint"),
        (Never, Write, false, 0x013f, Rational, "PrimaryChromaticities"),
        (Never, Write, false, 0x014a, Auto, "SubIFD", sub = SUB_IFD_ATTRIBS),
        (Always, DontWrite, false, 0x0201, Auto, "JPEGInterchangeFormat"),
        (Always, DontWrite, false, 0x0202, Auto, "JPEGInterchangeFormatLength"),
        (Never, Write, false, 0x0211, Rational, "YCbCrCoefficients"),
        (Never, Write, false, 0x0212, Short, "YCbCrSubSampling"),
        (Never, Write, false, 0x0213, Short, "YCbCrPositioning", interp = &YCBCR_POSITIONING),
        (Never, Write, false, 0x0214, Rational, "ReferenceBlackWhite"),
        (Never, Write, true, 0x4746, Short, "Rating"),
        (Never, Write, false, 0x4749, Short, "RatingPercent"),
        (Never, Write, false, 0x828d, Short, "CFAPatternDim"),
        (Never, Write, false, 0x828e, Byte, "CFAPattern"),
        (Never, Write, false, 0x8290, Auto, "KodakIFD", sub = KODAK_IFD_ATTRIBS),
        (Never, Write, true, 0x8298, Ascii, "Copyright"),
        (Never, DontWrite, false, 0x8606, Auto, "LeafData"),
        (Never, Write, false, 0x83bb, Auto, "IPTCData"),
        (Never, Write, false, 0x8769, Auto, "Exif", sub = EXIF_ATTRIBS),
        (Never, System, false, 0x8773, Undefined, "ICCProfile"),
        (Never, Write, false, 0x8825, Auto, "GPSInfo", sub = GPS_ATTRIBS),
        (Never, Write, false, 0x9003, Ascii, "DateTimeOriginal"),
        (Never, Write, false, 0x9216, Byte, "TIFFEPStandardID"),
        (Never, Write, false, 0x9217, Short, "SensingMethod", interp = &SENSING_METHOD),
        (Never, DontWrite, false, 0xc612, Byte, "DNGVersion"),
        (Never, DontWrite, false, 0xc613, Byte, "DNGBackwardVersion"),
        (Never, Write, false, 0xc614, Ascii, "UniqueCameraModel"),
        (Never, Write, false, 0xc630, Rational, "DNGLensInfo"),
    ];
}

tag_table! {
    pub static SUB_IFD_ATTRIBS = [
        (Never, System, false, 0x00fe, Auto, "NewSubFileType"),
        (IfReduced, Write, false, 0x0100, Auto, "ImageWidth"),
        (IfReduced, Write, false, 0x0101, Auto, "ImageHeight"),
        (IfReduced, Write, false, 0x0102, Short, "BitsPerSample"),
        (IfReduced, Write, false, 0x0103, Short, "Compression", interp = &COMPRESSION),
        (IfReduced, Write, false, 0x0106, Short, "PhotometricInterpretation", interp = &PHOTOMETRIC),
        (Always, DontWrite, false, 0x0111, Auto, "StripOffsets"),
        (IfReduced, Write, false, 0x0115, Short, "SamplesPerPixel"),
        (Always, DontWrite, false, 0x0116, Auto, "RowsPerStrip"),
        (Always, DontWrite, false, 0x0117, Auto, "StripByteCounts"),
        (IfReduced, Write, false, 0x011c, Short, "PlanarConfiguration", interp = &PLANAR_CONFIG),
        (Never, Write, false, 0x0142, Auto, "TileWidth"),
        (Never, Write, false, 0x0143, Auto, "TileLength"),
        (Always, DontWrite, false, 0x0144, Auto, "TileOffsets"),
        (Always, DontWrite, false, 0x0145, Auto, "TileByteCounts"),
        (Always, DontWrite, false, 0x0201, Auto, "JPEGInterchangeFormat"),
        (Always, DontWrite, false, 0x0202, Auto, "JPEGInterchangeFormatLength"),
        (Never, Write, false, 0x0212, Short, "YCbCrSubSampling"),
        (Never, Write, false, 0x828d, Short, "CFARepeatPatternDim"),
        (Never, Write, false, 0x828e, Byte, "CFAPattern2"),
        (Never, Write, false, 0xc61a, Auto, "BlackLevel"),
        (Never, Write, false, 0xc61d, Auto, "WhiteLevel"),
        (Never, Write, false, 0xc61f, Auto, "DefaultCropOrigin"),
        (Never, Write, false, 0xc620, Auto, "DefaultCropSize"),
        (Never, Write, false, 0xc68d, Auto, "ActiveArea"),
    ];
}

tag_table! {
    pub static EXIF_ATTRIBS = [
        (Never, Write, false, 0x829a, Rational, "ExposureTime", interp = &EXPOSURE_TIME),
        (Never, Write, false, 0x829d, Rational, "FNumber", interp = &F_NUMBER),
        (Never, Write, false, 0x8822, Short, "ExposureProgram", interp = &EXPOSURE_PROGRAM),
        (Never, Write, false, 0x8824, Ascii, "SpectralSensitivity"),
        (Never, Write, false, 0x8827, Short, "ISOSpeedRatings"),
        (Never, Write, false, 0x8828, Undefined, "OECF"),
        (Never, Write, false, 0x8830, Short, "SensitivityType"),
        (Never, Write, false, 0x8832, Long, "RecommendedExposureIndex"),
        (Never, Write, false, 0x9000, Undefined, "ExifVersion"),
        (Never, Write, true, 0x9003, Ascii, "DateTimeOriginal"),
        (Never, Write, true, 0x9004, Ascii, "DateTimeDigitized"),
        (Never, Write, false, 0x9010, Ascii, "OffsetTime"),
        (Never, Write, false, 0x9011, Ascii, "OffsetTimeOriginal"),
        (Never, Write, false, 0x9012, Ascii, "OffsetTimeDigitized"),
        (Never, Write, false, 0x9101, Undefined, "ComponentsConfiguration"),
        (Never, Write, false, 0x9102, Rational, "CompressedBitsPerPixel"),
        (Never, Write, false, 0x9201, SRational, "ShutterSpeedValue", interp = &APEX_SHUTTER),
        (Never, Write, false, 0x9202, Rational, "ApertureValue", interp = &APEX_APERTURE),
        (Never, Write, false, 0x9203, SRational, "BrightnessValue"),
        (Never, Write, false, 0x9204, SRational, "ExposureBiasValue", interp = &EXPOSURE_BIAS),
        (Never, Write, false, 0x9205, Rational, "MaxApertureValue", interp = &APEX_APERTURE),
        (Never, Write, false, 0x9206, Rational, "SubjectDistance"),
        (Never, Write, false, 0x9207, Short, "MeteringMode", interp = &METERING_MODE),
        (Never, Write, false, 0x9208, Short, "LightSource", interp = &LIGHT_SOURCE),
        (Never, Write, false, 0x9209, Short, "Flash", interp = &FLASH),
        (Never, Write, false, 0x920a, Rational, "FocalLength", interp = &FOCAL_LENGTH),
        (Never, Write, false, 0x9214, Short, "SubjectArea"),
        (Never, DontWrite, false, 0x9216, Byte, "TIFFEPStandardID"),
        (Never, Write, false, 0x927c, Undefined, "MakerNote"),
        (Never, Write, true, 0x9286, Undefined, "UserComment", interp = &USER_COMMENT),
        (Never, Write, false, 0x9290, Ascii, "SubSecTime"),
        (Never, Write, false, 0x9291, Ascii, "SubSecTimeOriginal"),
        (Never, Write, false, 0x9292, Ascii, "SubSecTimeDigitized"),
        (Never, Write, false, 0xa000, Undefined, "FlashpixVersion"),
        (Never, DontWrite, false, 0xa001, Short, "ColorSpace", interp = &COLOR_SPACE),
        (Never, Write, false, 0xa002, Auto, "PixelXDimension"),
        (Never, Write, false, 0xa003, Auto, "PixelYDimension"),
        (Never, DontWrite, false, 0xa004, Ascii, "RelatedSoundFile"),
        (Never, Write, false, 0xa005, Auto, "Interoperability", sub = IOP_ATTRIBS),
        (Never, Write, false, 0xa20b, Rational, "FlashEnergy"),
        (Never, Write, false, 0xa20e, Rational, "FocalPlaneXResolution"),
        (Never, Write, false, 0xa20f, Rational, "FocalPlaneYResolution"),
        (Never, Write, false, 0xa210, Short, "FocalPlaneResolutionUnit", interp = &FOCAL_PLANE_UNIT),
        (Never, Write, false, 0xa214, Short, "SubjectLocation"),
        (Never, Write, false, 0xa215, Rational, "ExposureIndex"),
        (Never, Write, false, 0xa217, Short, "SensingMethod", interp = &SENSING_METHOD),
        (Never, Write, false, 0xa300, Undefined, "FileSource"),
        (Never, Write, false, 0xa301, Undefined, "SceneType"),
        (Never, DontWrite, false, 0xa302, Undefined, "CFAPattern"),
        (Never, Write, false, 0xa401, Short, "CustomRendered", interp = &CUSTOM_RENDERED),
        (Never, Write, false, 0xa402, Short, "ExposureMode", interp = &EXPOSURE_MODE),
        (Never, Write, false, 0xa403, Short, "WhiteBalance", interp = &WHITE_BALANCE),
        (Never, Write, false, 0xa404, Rational, "DigitalZoomRatio"),
        (Never, Write, false, 0xa405, Short, "FocalLengthIn35mmFilm"),
        (Never, Write, false, 0xa406, Short, "SceneCaptureType", interp = &SCENE_CAPTURE_TYPE),
        (Never, Write, false, 0xa407, Short, "GainControl", interp = &GAIN_CONTROL),
        (Never, Write, false, 0xa408, Short, "Contrast", interp = &CONTRAST),
        (Never, Write, false, 0xa409, Short, "Saturation", interp = &CONTRAST),
        (Never, Write, false, 0xa40a, Short, "Sharpness", interp = &SHARPNESS),
        (Never, Write, false, 0xa40b, Undefined, "DeviceSettingDescription"),
        (Never, Write, false, 0xa40c, Short, "SubjectDistanceRange", interp = &SUBJECT_DISTANCE_RANGE),
        (Never, Write, false, 0xa420, Ascii, "ImageUniqueID"),
        (Never, Write, true, 0xa430, Ascii, "OwnerName"),
        (Never, Write, false, 0xa431, Ascii, "SerialNumber"),
        (Never, Write, false, 0xa432, Rational, "LensSpecification"),
        (Never, Write, true, 0xa433, Ascii, "LensMake"),
        (Never, Write, true, 0xa434, Ascii, "LensModel"),
        (Never, Write, false, 0xa435, Ascii, "LensSerialNumber"),
        (Never, Write, false, 0xa500, Rational, "Gamma"),
    ];
}

tag_table! {
    pub static IOP_ATTRIBS = [
        (Never, Write, false, 0x0001, Ascii, "InteroperabilityIndex"),
        (Never, Write, false, 0x0002, Undefined, "InteroperabilityVersion"),
        (Never, Write, false, 0x1000, Ascii, "RelatedImageFileFormat"),
        (Never, Write, false, 0x1001, Auto, "RelatedImageWidth"),
        (Never, Write, false, 0x1002, Auto, "RelatedImageLength"),
    ];
}

tag_table! {
    pub static GPS_ATTRIBS = [
        (Never, Write, false, 0x0000, Byte, "GPSVersionID"),
        (Never, Write, true, 0x0001, Ascii, "GPSLatitudeRef"),
        (Never, Write, true, 0x0002, Rational, "GPSLatitude"),
        (Never, Write, true, 0x0003, Ascii, "GPSLongitudeRef"),
        (Never, Write, true, 0x0004, Rational, "GPSLongitude"),
        (Never, Write, true, 0x0005, Byte, "GPSAltitudeRef", interp = &GPS_ALTITUDE_REF),
        (Never, Write, true, 0x0006, Rational, "GPSAltitude"),
        (Never, Write, false, 0x0007, Rational, "GPSTimeStamp"),
        (Never, Write, false, 0x0008, Ascii, "GPSSatellites"),
        (Never, Write, false, 0x0009, Ascii, "GPSStatus"),
        (Never, Write, false, 0x000a, Ascii, "GPSMeasureMode"),
        (Never, Write, false, 0x000b, Rational, "GPSDOP"),
        (Never, Write, false, 0x000c, Ascii, "GPSSpeedRef"),
        (Never, Write, false, 0x000d, Rational, "GPSSpeed"),
        (Never, Write, false, 0x000e, Ascii, "GPSTrackRef"),
        (Never, Write, false, 0x000f, Rational, "GPSTrack"),
        (Never, Write, false, 0x0010, Ascii, "GPSImgDirectionRef"),
        (Never, Write, false, 0x0011, Rational, "GPSImgDirection"),
        (Never, Write, false, 0x0012, Ascii, "GPSMapDatum"),
        (Never, Write, false, 0x0013, Ascii, "GPSDestLatitudeRef"),
        (Never, Write, false, 0x0014, Rational, "GPSDestLatitude"),
        (Never, Write, false, 0x0015, Ascii, "GPSDestLongitudeRef"),
        (Never, Write, false, 0x0016, Rational, "GPSDestLongitude"),
        (Never, Write, false, 0x0017, Ascii, "GPSDestBearingRef"),
        (Never, Write, false, 0x0018, Rational, "GPSDestBearing"),
        (Never, Write, false, 0x0019, Ascii, "GPSDestDistanceRef"),
        (Never, Write, false, 0x001a, Rational, "GPSDestDistance"),
        (Never, Write, false, 0x001b, Undefined, "GPSProcessingMethod"),
        (Never, Write, false, 0x001c, Undefined, "GPSAreaInformation"),
        (Never, Write, false, 0x001d, Ascii, "GPSDateStamp"),
        (Never, Write, false, 0x001e, Short, "GPSDifferential"),
    ];
}
