//! Represents the on-disk value types a tag may carry.
//!
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TagType {
    Invalid = 0,
    Byte = 1,
    Ascii = 2,
    Short = 3,
    Long = 4,
    Rational = 5,
    SByte = 6,
    Undefined = 7,
    SShort = 8,
    SLong = 9,
    SRational = 10,
    Float = 11,
    Double = 12,
    /// Olympus sub-IFD pointer, 4 bytes wide
    OlympusUndefined = 13,
    /// Defer to the stored type
    Auto = 98,
    /// The value is an offset to a nested directory
    SubDir = 99,
}

impl TagType {
    /// Maps an on-disk type code. Meta types never appear on disk.
    pub fn from_u16(code: u16) -> Option<TagType> {
        use TagType::*;
        Some(match code {
            1 => Byte,
            2 => Ascii,
            3 => Short,
            4 => Long,
            5 => Rational,
            6 => SByte,
            7 => Undefined,
            8 => SShort,
            9 => SLong,
            10 => SRational,
            11 => Float,
            12 => Double,
            13 => OlympusUndefined,
            _ => return None,
        })
    }

    pub fn code(self) -> u16 {
        self as u16
    }

    /// Bytes per element.
    pub fn size(self) -> usize {
        use TagType::*;
        match self {
            Byte | Ascii | SByte | Undefined => 1,
            Short | SShort => 2,
            Long | SLong | Float | OlympusUndefined => 4,
            Rational | SRational | Double => 8,
            Invalid | Auto | SubDir => 1,
        }
    }

    /// True for types that can be stored in a file.
    pub fn is_concrete(self) -> bool {
        !matches!(self, TagType::Invalid | TagType::Auto | TagType::SubDir)
    }

    pub fn is_rational(self) -> bool {
        matches!(self, TagType::Rational | TagType::SRational)
    }

    /// True for the types whose elements are directory offsets when the
    /// attribute describes a sub-directory.
    pub fn is_pointer(self) -> bool {
        matches!(self, TagType::Long | TagType::OlympusUndefined)
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TagType::*;
        let s = match self {
            Invalid => "INVALID",
            Byte => "BYTE",
            Ascii => "ASCII",
            Short => "SHORT",
            Long => "LONG",
            Rational => "RATIONAL",
            SByte => "SBYTE",
            Undefined => "UNDEFINED",
            SShort => "SSHORT",
            SLong => "SLONG",
            SRational => "SRATIONAL",
            Float => "FLOAT",
            Double => "DOUBLE",
            OlympusUndefined => "OLYUNDEF",
            Auto => "AUTO",
            SubDir => "SUBDIR",
        };
        f.write_str(s)
    }
}
