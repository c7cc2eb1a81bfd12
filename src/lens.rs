//! Lens identification.
//!
//! Vendors reuse one lens id for several lenses. The candidates are
//! disambiguated by comparing the focal length and aperture recorded for
//! the shot, and the lens specification when the file carries one.
use crate::directory::TagDirectory;
use crate::interpreter::Interpreter;
use crate::tag::Tag;
use crate::value::TagType;
use std::fmt::Display;

/// Candidates closer than this to the shot's aperture are all reported.
const APERTURE_MATCH: f64 = 0.15;
/// Slack allowed around a candidate's focal range, in mm.
const FOCAL_SLACK: f64 = 0.5;

/// Focal range and maximum apertures, as printed in a lens name
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LensInfo {
    pub min_focal: f64,
    pub max_focal: f64,
    pub max_aperture_at_min_focal: f64,
    pub max_aperture_at_max_focal: f64,
}

fn parse_range(text: &str) -> Option<(f64, f64)> {
    match text.split_once('-') {
        Some((a, b)) => Some((a.trim().parse().ok()?, b.trim().parse().ok()?)),
        None => {
            let v = text.trim().parse().ok()?;
            Some((v, v))
        }
    }
}

/// Position of the aperture marker and of the number behind it. Both
/// `f/2.8` and `F2.8` spellings occur in vendor tables.
fn find_aperture(name: &str) -> Option<(usize, usize)> {
    if let Some(i) = name.find("f/") {
        return Some((i, i + 2));
    }
    name.match_indices(" F")
        .map(|(i, _)| i + 1)
        .find(|&i| name[i + 1..].starts_with(|c: char| c.is_ascii_digit()))
        .map(|i| (i, i + 1))
}

/// Reads `24-70mm f/2.8` or `50mm F1.4` out of a lens name.
pub fn extract_lens_info(name: &str) -> Option<LensInfo> {
    let (marker, number) = find_aperture(name)?;
    let mm = name[..marker].rfind("mm")?;
    let start = name[..mm].rfind(' ').map_or(0, |i| i + 1);
    let (min_focal, max_focal) = parse_range(&name[start..mm])?;

    let aperture = &name[number..];
    let end = aperture
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(aperture.len());
    let (a1, a2) = parse_range(aperture[..end].trim_end_matches('-'))?;
    Some(LensInfo {
        min_focal,
        max_focal,
        max_aperture_at_min_focal: a1,
        max_aperture_at_max_focal: a2,
    })
}

/// Resolves vendor lens ids through a table where an id may appear more
/// than once.
pub struct IntLensInterpreter<T: 'static> {
    choices: &'static [(T, &'static str)],
    lens_id: fn(&Tag) -> T,
}

impl<T> IntLensInterpreter<T>
where
    T: Copy + PartialEq + Display + Sync + Send + 'static,
{
    pub const fn new(choices: &'static [(T, &'static str)], lens_id: fn(&Tag) -> T) -> Self {
        IntLensInterpreter { choices, lens_id }
    }

    pub fn candidates(&self, id: T) -> impl Iterator<Item = &'static str> + '_ {
        self.choices
            .iter()
            .filter(move |(k, _)| *k == id)
            .map(|(_, name)| *name)
    }

    /// Picks the lens name for `id`. `focal_length` and `aperture` describe
    /// the shot, 0 when unknown. `lens_info` is the specification recorded
    /// in the file.
    pub fn guess(&self, id: T, focal_length: f64, aperture: f64, lens_info: Option<&LensInfo>) -> String {
        let candidates: Vec<&'static str> = self.candidates(id).collect();
        match candidates.as_slice() {
            [] => return id.to_string(),
            [only] => return (*only).to_owned(),
            _ => {}
        }

        let mut best_match = String::from("Unknown");
        if let Some(info) = lens_info {
            for name in candidates.iter() {
                if extract_lens_info(name).as_ref() == Some(info) {
                    return (*name).to_owned();
                }
            }
            best_match = unknown_lens_label(info);
        }

        let mut best_dif = f64::MAX;
        let mut scored = vec![];
        for name in candidates {
            let Some(c) = extract_lens_info(name) else {
                continue;
            };
            if c.min_focal == 0. || c.max_aperture_at_min_focal == 0. {
                continue;
            }
            if focal_length < c.min_focal - FOCAL_SLACK || focal_length > c.max_focal + FOCAL_SLACK {
                continue;
            }
            let mut dif = 0.;
            if aperture > 0.1 {
                let (a1, a2) = (c.max_aperture_at_min_focal, c.max_aperture_at_max_focal);
                if aperture < a1 - APERTURE_MATCH || aperture > a2 + APERTURE_MATCH {
                    continue;
                }
                let lens_aperture = if a1 == a2 || c.min_focal == c.max_focal {
                    a1
                } else {
                    // aperture falls off log-linearly across the zoom range
                    let slope = (a2.ln() - a1.ln()) / (c.max_focal.ln() - c.min_focal.ln());
                    (a1.ln() + slope * (focal_length.ln() - c.min_focal.ln())).exp()
                };
                dif = (lens_aperture - aperture).abs();
            }
            if dif < best_dif {
                best_dif = dif;
                best_match = name.to_owned();
            }
            if dif < APERTURE_MATCH {
                scored.push(name);
            }
        }
        if scored.len() > 1 {
            return scored.join("\n or ");
        }
        best_match
    }
}

fn unknown_lens_label(info: &LensInfo) -> String {
    let focal = if info.min_focal == info.max_focal {
        format!("{}mm", info.min_focal as i32)
    } else {
        format!("{}-{}mm", info.min_focal as i32, info.max_focal as i32)
    };
    let aperture = if info.max_aperture_at_min_focal == info.max_aperture_at_max_focal {
        format!("f/{:.1}", info.max_aperture_at_min_focal)
    } else {
        format!(
            "f/{:.1}-{:.1}",
            info.max_aperture_at_min_focal, info.max_aperture_at_max_focal
        )
    };
    format!("Unknown ({} {})", focal, aperture)
}

/// Lens specification recorded by the camera, if any.
fn recorded_lens_info(scope: &TagDirectory) -> Option<LensInfo> {
    let tag = ["LensSpecification", "DNGLensInfo"]
        .iter()
        .filter_map(|name| scope.find_tag(name))
        .find(|t| !t.is_directory() && t.tag_type().is_rational())?;
    let values = tag.to_double_array(0);
    match values[..] {
        [min_focal, max_focal, a1, a2, ..] if min_focal > 0. => Some(LensInfo {
            min_focal,
            max_focal,
            max_aperture_at_min_focal: a1,
            max_aperture_at_max_focal: a2,
        }),
        _ => None,
    }
}

impl<T> Interpreter for IntLensInterpreter<T>
where
    T: Copy + PartialEq + Display + Sync + Send + 'static,
{
    fn to_string(&self, tag: &Tag, scope: &TagDirectory) -> String {
        let id = (self.lens_id)(tag);
        let focal_length = scope
            .find_tag("FocalLength")
            .map_or(0., |t| t.to_double(0));
        let aperture = scope
            .find_tag("MaxApertureValue")
            .map_or(0., |t| 2f64.powf(t.to_double(0) / 2.));
        let lens_info = recorded_lens_info(scope);
        self.guess(id, focal_length, aperture, lens_info.as_ref())
    }
}

pub(crate) fn short_lens_id(tag: &Tag) -> i32 {
    tag.to_int(0, TagType::Short)
}

pub(crate) fn long_lens_id(tag: &Tag) -> i32 {
    tag.to_int(0, TagType::Long)
}

/// Two byte ids, series byte first
pub(crate) fn two_byte_lens_id(tag: &Tag) -> i32 {
    tag.to_int(0, TagType::Byte) * 256 + tag.to_int(1, TagType::Byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    static LENSES: &[(i32, &str)] = &[
        (1, "Vendor 50mm f/1.8"),
        (7, "Vendor 24-70mm f/2.8"),
        (7, "Vendor 70-200mm f/2.8"),
        (7, "Other 18-55mm f/3.5-5.6"),
    ];

    fn no_id(_: &Tag) -> i32 {
        0
    }

    static INTERP: IntLensInterpreter<i32> = IntLensInterpreter::new(LENSES, no_id);

    #[test]
    fn lens_name_parsing() {
        let info = extract_lens_info("Canon EF 24-70mm f/2.8L USM").unwrap();
        assert_eq!(info.min_focal, 24.);
        assert_eq!(info.max_focal, 70.);
        assert_eq!(info.max_aperture_at_min_focal, 2.8);
        assert_eq!(info.max_aperture_at_max_focal, 2.8);

        let info = extract_lens_info("Sigma 18-125mm f/3.5-5.6 DC").unwrap();
        assert_eq!(info.max_aperture_at_max_focal, 5.6);

        let info = extract_lens_info("Canon EF 50mm f/1.4 USM").unwrap();
        assert_eq!((info.min_focal, info.max_focal), (50., 50.));

        let info = extract_lens_info("smc PENTAX-DA 18-55mm F3.5-5.6 AL").unwrap();
        assert_eq!((info.min_focal, info.max_aperture_at_max_focal), (18., 5.6));

        assert!(extract_lens_info("Unnamed lens").is_none());
    }

    #[test]
    fn single_and_missing_candidates() {
        assert_eq!(INTERP.guess(1, 0., 0., None), "Vendor 50mm f/1.8");
        assert_eq!(INTERP.guess(99, 0., 0., None), "99");
    }

    #[test]
    fn focal_length_disambiguates() {
        assert_eq!(INTERP.guess(7, 50., 2.8, None), "Vendor 24-70mm f/2.8");
        assert_eq!(INTERP.guess(7, 135., 2.8, None), "Vendor 70-200mm f/2.8");
    }

    #[test]
    fn overlapping_candidates_are_listed() {
        // both zooms cover 70mm at f/2.8
        assert_eq!(
            INTERP.guess(7, 70., 2.8, None),
            "Vendor 24-70mm f/2.8\n or Vendor 70-200mm f/2.8"
        );
    }

    #[test]
    fn lens_specification_wins() {
        let spec = LensInfo {
            min_focal: 70.,
            max_focal: 200.,
            max_aperture_at_min_focal: 2.8,
            max_aperture_at_max_focal: 2.8,
        };
        assert_eq!(INTERP.guess(7, 50., 2.8, Some(&spec)), "Vendor 70-200mm f/2.8");

        let unknown = LensInfo {
            min_focal: 100.,
            max_focal: 400.,
            max_aperture_at_min_focal: 4.5,
            max_aperture_at_max_focal: 5.6,
        };
        assert_eq!(INTERP.guess(7, 1000., 0., Some(&unknown)), "Unknown (100-400mm f/4.5-5.6)");
    }

    #[test]
    fn no_candidate_fits_the_shot() {
        assert_eq!(INTERP.guess(7, 500., 2.8, None), "Unknown");
    }

    #[test]
    fn unknown_label_truncates_focal_lengths() {
        let prime = LensInfo {
            min_focal: 17.5,
            max_focal: 17.5,
            max_aperture_at_min_focal: 2.,
            max_aperture_at_max_focal: 2.,
        };
        assert_eq!(INTERP.guess(7, 1000., 0., Some(&prime)), "Unknown (17mm f/2.0)");
    }
}
