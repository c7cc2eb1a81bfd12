//! Converts tag values between their binary form and text.
//!
//! Every attribute carries a `&'static dyn Interpreter`. Tags without an
//! attribute fall back to [`STD_INTERPRETER`].
use crate::directory::TagDirectory;
use crate::tag::Tag;
use crate::utility::GetNumFromBytes;
use crate::value::TagType;

pub trait Interpreter: Sync + Send {
    /// Human readable form. `scope` is the root of the tree the tag lives
    /// in, used by interpreters that consult neighbouring tags.
    fn to_string(&self, tag: &Tag, _scope: &TagDirectory) -> String {
        tag.to_string().trim().to_owned()
    }

    fn from_string(&self, tag: &mut Tag, value: &str) {
        match tag.tag_type() {
            TagType::Short | TagType::Long => tag.from_int(parse_int(value)),
            TagType::Ascii => tag.init_string(value),
            _ => tag.from_string(value),
        }
    }

    fn to_double(&self, tag: &Tag, ofs: usize) -> f64 {
        decode_double(tag, ofs)
    }

    fn to_int(&self, tag: &Tag, ofs: usize, as_type: TagType) -> i32 {
        decode_int(tag, ofs, as_type)
    }
}

fn resolve(tag: &Tag, as_type: TagType) -> TagType {
    if as_type.is_concrete() {
        as_type
    } else {
        tag.tag_type()
    }
}

/// Integer view of the element at byte offset `ofs`. Non numeric types and
/// out of range offsets yield 0.
pub fn decode_int(tag: &Tag, ofs: usize, as_type: TagType) -> i32 {
    let t = resolve(tag, as_type);
    let v = tag.value();
    if ofs + t.size() > v.len() {
        return 0;
    }
    let order = tag.order();
    match t {
        TagType::Byte => v[ofs] as i32,
        TagType::SByte => v[ofs] as i8 as i32,
        TagType::Short => v.u16(order, ofs) as i32,
        TagType::SShort => v.i16(order, ofs) as i32,
        TagType::Long | TagType::SLong | TagType::OlympusUndefined => v.i32(order, ofs),
        TagType::Rational => {
            let n = v.u32(order, ofs);
            let d = v.u32(order, ofs + 4);
            n.checked_div(d).unwrap_or(0) as i32
        }
        TagType::SRational => {
            let n = v.i32(order, ofs);
            let d = v.i32(order, ofs + 4);
            n.checked_div(d).unwrap_or(0)
        }
        TagType::Float => v.f32(order, ofs) as i32,
        TagType::Double => v.f64(order, ofs) as i32,
        TagType::Ascii
        | TagType::Undefined
        | TagType::Invalid
        | TagType::Auto
        | TagType::SubDir => 0,
    }
}

/// Floating point view of the element at byte offset `ofs`. A zero
/// denominator reads as 0.
pub fn decode_double(tag: &Tag, ofs: usize) -> f64 {
    let t = tag.tag_type();
    let v = tag.value();
    if ofs + t.size() > v.len() {
        return 0.;
    }
    let order = tag.order();
    match t {
        TagType::Rational => v.r64(order, ofs),
        TagType::SRational => v.sr64(order, ofs),
        TagType::Float => v.f32(order, ofs) as f64,
        TagType::Double => v.f64(order, ofs),
        _ => decode_int(tag, ofs, t) as f64,
    }
}

/// Leading decimal integer of `text`, like C's `atoi`.
pub(crate) fn parse_int(text: &str) -> i32 {
    let text = text.trim_start();
    let end = text
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    text[..end].parse::<i64>().map(|x| x as i32).unwrap_or(0)
}

pub(crate) fn parse_double(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.)
}

pub struct StdInterpreter;

impl Interpreter for StdInterpreter {}

pub static STD_INTERPRETER: StdInterpreter = StdInterpreter;

/// Maps integer codes to labels. Values without a label print raw.
pub struct ChoiceInterpreter {
    choices: phf::Map<i32, &'static str>,
}

impl ChoiceInterpreter {
    pub const fn new(choices: phf::Map<i32, &'static str>) -> Self {
        ChoiceInterpreter { choices }
    }

    pub fn label(&self, code: i32) -> Option<&'static str> {
        self.choices.get(&code).copied()
    }

    pub fn code_of(&self, label: &str) -> Option<i32> {
        self.choices
            .entries()
            .find(|(_, &l)| l.eq_ignore_ascii_case(label))
            .map(|(&code, _)| code)
    }
}

impl Interpreter for ChoiceInterpreter {
    fn to_string(&self, tag: &Tag, _scope: &TagDirectory) -> String {
        match self.label(tag.to_int(0, TagType::Auto)) {
            Some(label) => label.to_owned(),
            None => tag.to_string().trim().to_owned(),
        }
    }

    fn from_string(&self, tag: &mut Tag, value: &str) {
        match self.code_of(value.trim()) {
            Some(code) => tag.from_int(code),
            None => STD_INTERPRETER.from_string(tag, value),
        }
    }
}

pub struct ExposureTimeInterpreter;

pub(crate) fn format_exposure_time(d: f64) -> String {
    if d > 0. && d < 0.9 {
        format!("1/{:.0}", 1. / d)
    } else {
        format!("{:.1}", d)
    }
}

impl Interpreter for ExposureTimeInterpreter {
    fn to_string(&self, tag: &Tag, _scope: &TagDirectory) -> String {
        format_exposure_time(tag.to_double(0))
    }
}

pub struct FNumberInterpreter;

impl Interpreter for FNumberInterpreter {
    fn to_string(&self, tag: &Tag, _scope: &TagDirectory) -> String {
        let v = tag.to_double(0);
        if !(0. ..=1000.).contains(&v) {
            return "undef".to_owned();
        }
        format!("{:.1}", v)
    }
}

pub struct FocalLengthInterpreter;

impl Interpreter for FocalLengthInterpreter {
    fn to_string(&self, tag: &Tag, _scope: &TagDirectory) -> String {
        format!("{:.1}", tag.to_double(0))
    }
}

pub struct ExposureBiasInterpreter;

impl Interpreter for ExposureBiasInterpreter {
    fn to_string(&self, tag: &Tag, _scope: &TagDirectory) -> String {
        format!("{:+.2}", tag.to_double(0))
    }
}

/// APEX aperture value, shown as an f-number
pub struct ApexApertureInterpreter;

impl Interpreter for ApexApertureInterpreter {
    fn to_string(&self, tag: &Tag, _scope: &TagDirectory) -> String {
        format!("{:.1}", 2f64.powf(tag.to_double(0) / 2.))
    }
}

/// APEX shutter speed, shown as an exposure time
pub struct ApexShutterInterpreter;

impl Interpreter for ApexShutterInterpreter {
    fn to_string(&self, tag: &Tag, _scope: &TagDirectory) -> String {
        format_exposure_time(2f64.powf(-tag.to_double(0)))
    }
}

/// UNDEFINED text prefixed by an 8 byte character code
pub struct UserCommentInterpreter;

const CHARSET_ASCII: &[u8; 8] = b"ASCII\0\0\0";

impl Interpreter for UserCommentInterpreter {
    fn to_string(&self, tag: &Tag, _scope: &TagDirectory) -> String {
        let v = tag.value();
        if v.len() < 8 {
            return String::new();
        }
        let text = &v[8..];
        let end = text.iter().position(|&b| b == 0).unwrap_or(text.len());
        String::from_utf8_lossy(&text[..end]).trim().to_owned()
    }

    fn from_string(&self, tag: &mut Tag, value: &str) {
        let mut data = CHARSET_ASCII.to_vec();
        data.extend_from_slice(value.as_bytes());
        tag.init_undef_array(&data);
    }
}

/// Nikon ISO tags hold the sensitivity in their second short
pub struct NikonIsoInterpreter;

impl Interpreter for NikonIsoInterpreter {
    fn to_string(&self, tag: &Tag, _scope: &TagDirectory) -> String {
        tag.to_int(2, TagType::Short).to_string()
    }
}

pub static EXPOSURE_TIME: ExposureTimeInterpreter = ExposureTimeInterpreter;
pub static F_NUMBER: FNumberInterpreter = FNumberInterpreter;
pub static FOCAL_LENGTH: FocalLengthInterpreter = FocalLengthInterpreter;
pub static EXPOSURE_BIAS: ExposureBiasInterpreter = ExposureBiasInterpreter;
pub static APEX_APERTURE: ApexApertureInterpreter = ApexApertureInterpreter;
pub static APEX_SHUTTER: ApexShutterInterpreter = ApexShutterInterpreter;
pub static USER_COMMENT: UserCommentInterpreter = UserCommentInterpreter;
pub static NIKON_ISO: NikonIsoInterpreter = NikonIsoInterpreter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atoi_like_parsing() {
        assert_eq!(parse_int("42"), 42);
        assert_eq!(parse_int("  -7 apples"), -7);
        assert_eq!(parse_int("+3"), 3);
        assert_eq!(parse_int("abc"), 0);
        assert_eq!(parse_int(""), 0);
    }

    #[test]
    fn exposure_time_format() {
        assert_eq!(format_exposure_time(1. / 250.), "1/250");
        assert_eq!(format_exposure_time(2.), "2.0");
        assert_eq!(format_exposure_time(0.), "0.0");
    }
}
