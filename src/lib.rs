//! Read, edit and re-serialize EXIF metadata trees.
//!
//! A file is parsed into a [`TagDirectory`] tree: IFD0 at the root, the
//! Exif, GPS and interoperability IFDs below it, and vendor maker notes
//! decoded into their own directories. Tags render through interpreters
//! declared in static attribute tables, and a tree can be written back
//! byte for byte or rebuilt with field overrides for a new JPEG or TIFF.
//!
//! ```no_run
//! use rtexif::{ExifManager, ExifPairs};
//!
//! let data = std::fs::read("photo.jpg").unwrap();
//! let root = ExifManager::parse_jpeg(&data).unwrap();
//! if let Some(tag) = root.get_tag("ExposureTime") {
//!     println!("{}", tag.value_to_string(&root));
//! }
//! let mut changes = ExifPairs::new();
//! changes.insert("Exif.UserComment".into(), "edited".into());
//! let app1 = ExifManager::create_jpeg_marker(Some(&root), &changes, 640, 480).unwrap();
//! ```

erreport::gen_trait_to_report!();

pub mod attrib;
pub mod ciff;
pub mod directory;
pub mod interpreter;
pub mod jpeg;
pub mod lens;
pub mod makernote;
mod manager;
pub mod parser;
pub mod tag;
pub mod utility;
pub mod value;

pub use directory::{TagDirectory, TagDirectoryTable};
pub use interpreter::Interpreter;
pub use makernote::MakerNoteKind;
pub use manager::{ExifManager, ExifPairs, TiffOutput};
pub use tag::Tag;
pub use utility::ByteOrder;
pub use value::TagType;
