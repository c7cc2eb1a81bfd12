
tag_table! {
    pub static KODAK_IFD_ATTRIBS = [
        (Never, Write, false, 0x0001, Auto, "KodakVersion"),
        (Never, Write, false, 0x0003, Auto, "UnknownEV"),
        (Never, Write, false, 0x03e9, Ascii, "OriginalFileName"),
        (Never, Write, false, 0x03eb, Auto, "SensorLeftBorder"),
        (Never, Write, false, 0x03ec, Auto, "SensorTopBorder"),
        (Never, Write, false, 0x03ed, Auto, "SensorRightBorder"),
        (Never, Write, false, 0x03ee, Auto, "SensorBottomBorder"),
        (Never, Write, false, 0x03f1, Auto, "TextualInfo"),
        (Never, Write, false, 0x03fc, Auto, "WhiteBalance"),
        (Never, Write, false, 0x0401, Auto, "Time"),
        (Never, Write, false, 0x0414, Auto, "NCDFileInfo"),
        (Never, Write, false, 0x0846, Auto, "ColorTemperature"),
        (Never, Write, false, 0x0852, Auto, "WB_RGBMul0"),
        (Never, Write, false, 0x0853, Auto, "WB_RGBMul1"),
        (Never, Write, false, 0x0854, Auto, "WB_RGBMul2"),
        (Never, Write, false, 0x0855, Auto, "WB_RGBMul3"),
        (Never, Write, false, 0x085c, Auto, "WB_RGBCoeffs0"),
        (Never, Write, false, 0x085d, Auto, "WB_RGBCoeffs1"),
        (Never, Write, false, 0x085e, Auto, "WB_RGBCoeffs2"),
        (Never, Write, false, 0x085f, Auto, "WB_RGBCoeffs3"),
        (Never, Write, false, 0x0fa0, Ascii, "FirmwareVersion"),
    ];
}
