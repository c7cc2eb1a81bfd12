//! Static descriptor tables mapping tag ids to names, types and
//! interpreters, one table per IFD dialect.
//!
use crate::interpreter::Interpreter;
use crate::value::TagType;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IgnorePolicy {
    Never,
    Always,
    /// Ignored when the directory describes a reduced (thumbnail) image
    IfReduced,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ActionCode {
    /// Kept in the tree, not written
    DontWrite,
    Write,
    /// Managed by the writer itself, never shown nor edited
    System,
    /// Synthesized field, written but not shown
    New,
}

pub struct TagAttrib {
    pub ignore: IgnorePolicy,
    pub action: ActionCode,
    pub editable: bool,
    /// Set when the tag points to a nested directory
    pub sub_attribs: Option<&'static [TagAttrib]>,
    /// Tag id, or element index inside a table directory
    pub id: u16,
    pub tag_type: TagType,
    pub name: &'static str,
    pub interpreter: &'static dyn Interpreter,
}

impl fmt::Debug for TagAttrib {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagAttrib")
            .field("id", &format_args!("{:#06x}", self.id))
            .field("name", &self.name)
            .field("type", &self.tag_type)
            .field("action", &self.action)
            .finish()
    }
}

impl TagAttrib {
    /// True when tags described by this attribute are written by default.
    pub fn is_written(&self) -> bool {
        matches!(self.action, ActionCode::Write | ActionCode::New)
    }
}

pub fn lookup_attrib(table: &'static [TagAttrib], name: &str) -> Option<&'static TagAttrib> {
    table.iter().find(|a| a.name == name)
}

pub fn attrib_by_id(table: &'static [TagAttrib], id: u16) -> Option<&'static TagAttrib> {
    table.iter().find(|a| a.id == id)
}

macro_rules! __sub_attribs {
    () => {
        None
    };
    ($sub:expr) => {
        Some($sub)
    };
}
pub(crate) use __sub_attribs;

macro_rules! __interpreter {
    () => {
        &$crate::interpreter::STD_INTERPRETER
    };
    ($interp:expr) => {
        $interp
    };
}
pub(crate) use __interpreter;

/// Declares a static attribute table.
///
/// Every row reads `(ignore, action, editable, id, type, name)` with the
/// optional trailers `sub = TABLE` and `interp = &INTERPRETER`.
macro_rules! tag_table {
    ($vis:vis static $table:ident = [
        $(($ignore:ident, $action:ident, $editable:literal, $id:literal, $t:ident, $name:literal
            $(, sub = $sub:expr)? $(, interp = $interp:expr)?)),* $(,)?
    ];) => {
        $vis static $table: &[$crate::attrib::TagAttrib] = &[
            $($crate::attrib::TagAttrib {
                ignore: $crate::attrib::IgnorePolicy::$ignore,
                action: $crate::attrib::ActionCode::$action,
                editable: $editable,
                sub_attribs: $crate::attrib::__sub_attribs!($($sub)?),
                id: $id,
                tag_type: $crate::value::TagType::$t,
                name: $name,
                interpreter: $crate::attrib::__interpreter!($($interp)?),
            }),*
        ];
    };
}

mod canon;
mod fuji;
mod kodak;
mod minolta;
mod nikon;
mod olympus;
mod pentax;
mod sony;
mod standard;

pub use canon::*;
pub use fuji::*;
pub use kodak::*;
pub use minolta::*;
pub use nikon::*;
pub use olympus::*;
pub use pentax::*;
pub use sony::*;
pub use standard::*;
