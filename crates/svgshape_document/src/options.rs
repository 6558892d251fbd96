//! Options for importing and exporting documents.
use crate::xmlwriter::{self, Indent};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// The shape elements that are imported
    pub struct Shapes: u8 {
        /// `<path>`
        const PATH = 0b0000_0001;
        /// `<rect>`
        const RECT = 0b0000_0010;
        /// `<circle>`
        const CIRCLE = 0b0000_0100;
        /// `<ellipse>`
        const ELLIPSE = 0b0000_1000;
        /// `<line>`
        const LINE = 0b0001_0000;
        /// `<polyline>`
        const POLYLINE = 0b0010_0000;
        /// `<polygon>`
        const POLYGON = 0b0100_0000;
    }
}

impl Default for Shapes {
    fn default() -> Self {
        Self::all()
    }
}

impl Shapes {
    /// Returns the flag for a shape element's local name
    pub fn from_element(name: &str) -> Option<Self> {
        Some(match name {
            "path" => Self::PATH,
            "rect" => Self::RECT,
            "circle" => Self::CIRCLE,
            "ellipse" => Self::ELLIPSE,
            "line" => Self::LINE,
            "polyline" => Self::POLYLINE,
            "polygon" => Self::POLYGON,
            _ => return None,
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Shapes {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.iter().count()))?;
        for (name, _) in self.iter_names() {
            seq.serialize_element(&name.to_lowercase())?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Shapes {
    /// Reads a list of element names, such as `["path", "rect"]`
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        names.iter().try_fold(Self::empty(), |shapes, name| {
            Self::from_element(name)
                .map(|shape| shapes | shape)
                .ok_or_else(|| serde::de::Error::custom(format!("unknown shape `{name}`")))
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
/// Options for [`import_with_options`](crate::import_with_options)
pub struct ImportOptions {
    /// Which shape elements produce paths
    pub shapes: Shapes,
    /// Whether paths resolved with `display: none` are left out
    pub skip_hidden: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
/// Options for [`export_with_options`](crate::export_with_options)
pub struct ExportOptions {
    /// The indentation of nested elements
    pub indent: Indent,
    /// Whether attributes are quoted with `'` instead of `"`
    pub use_single_quote: bool,
}

impl From<ExportOptions> for xmlwriter::Options {
    fn from(value: ExportOptions) -> Self {
        Self {
            use_single_quote: value.use_single_quote,
            indent: value.indent,
        }
    }
}
