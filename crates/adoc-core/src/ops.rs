//! The enumerated conversion operation table.

use std::fmt;

use crate::constants;

/// A conversion operation offered by the bridge.
///
/// Each variant maps to exactly one function name registered by the script
/// modules; the dynamic-by-name binding is confined to the interpreter
/// invocation itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConvertKind {
    /// AsciiDoc to DocBook.
    Docbook,
    /// AsciiDoc to the live-preview representation.
    Asciidoc,
    /// AsciiDoc to standalone HTML.
    Html,
    /// AsciiDoc to ODF.
    Odf,
}

impl ConvertKind {
    /// The interpreter function this operation invokes.
    pub fn function_name(self) -> &'static str {
        match self {
            Self::Docbook => constants::FN_CONVERT_DOCBOOK,
            Self::Asciidoc => constants::FN_CONVERT_ASCIIDOC,
            Self::Html => constants::FN_CONVERT_HTML,
            Self::Odf => constants::FN_CONVERT_ODF,
        }
    }

    /// Short operation name used in errors and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Docbook => "docbook",
            Self::Asciidoc => "asciidoc",
            Self::Html => "html",
            Self::Odf => "odf",
        }
    }
}

impl fmt::Display for ConvertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_names_match_script_contract() {
        assert_eq!(ConvertKind::Docbook.function_name(), "convertDocbook");
        assert_eq!(ConvertKind::Asciidoc.function_name(), "convertAsciidoc");
        assert_eq!(ConvertKind::Html.function_name(), "convertHtml");
        assert_eq!(ConvertKind::Odf.function_name(), "convertOdf");
    }
}
