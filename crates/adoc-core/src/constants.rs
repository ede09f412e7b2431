//! Names fixed by the script module contract.
//!
//! Modules evaluated into the interpreter register conversion functions
//! under these global names; the host capability object and the baseline
//! shims are likewise bound under fixed names. Changing any of these is a
//! breaking change to every script bundle.

/// Global name of the host capability object inside the interpreter.
pub const HOST_BINDING: &str = "host";

/// `navigator.appVersion` reported to scripts that sniff their environment.
pub const ENVIRONMENT_ID: &str = "adoc";

/// Conversion entry points registered by the script modules.
pub const FN_CONVERT_DOCBOOK: &str = "convertDocbook";
pub const FN_CONVERT_ASCIIDOC: &str = "convertAsciidoc";
pub const FN_CONVERT_HTML: &str = "convertHtml";
pub const FN_CONVERT_ODF: &str = "convertOdf";

/// Best-effort outline refresh entry point.
pub const FN_FILL_OUTLINES: &str = "fillOutlines";

/// Required field of every conversion result object: the content body.
pub const RENDERED_FIELD: &str = "rendered";
