//! Syntax-highlighting names accepted by PrivatePaste.

/// Sentinel sent when a paste should not be highlighted.
pub const NO_FORMATTING: &str = "No Formatting";

/// Every formatting name the service recognizes, in the service's order.
pub const FORMATTINGS: &[&str] = &[
    NO_FORMATTING,
    "ActionScript",
    "AppleScript",
    "Apache",
    "Bash",
    "BBCode",
    "Boo",
    "C",
    "Clojure",
    "CSS",
    "C++",
    "C#",
    "Delphi",
    "Diff",
    "Erlang",
    "Fortran",
    "Haskell",
    "HTML",
    "INI",
    "IRC",
    "Java",
    "JavaScript",
    "JSP",
    "Lighttpd",
    "LUA",
    "Makefile",
    "Matlab",
    "NASM",
    "Nginx",
    "Objective C",
    "OCaml",
    "Pascal",
    "Perl",
    "PHP",
    "Python",
    "Rst",
    "Ruby",
    "Scheme",
    "Smalltalk",
    "Smarty",
    "Squid",
    "SQL",
    "TeX",
    "TCL",
    "Wiki",
    "VBNet",
    "VimL",
    "XML",
    "XSLT",
    "YAML",
];

/// Check whether `name` is an exact (case-sensitive) member of [`FORMATTINGS`].
pub fn is_known_formatting(name: &str) -> bool {
    FORMATTINGS.contains(&name)
}

/// Map a caller-supplied formatting to the value sent on the wire.
///
/// Unknown or absent names fall back to [`NO_FORMATTING`]; nothing is rejected.
pub fn normalize_formatting(formatting: Option<&str>) -> &str {
    match formatting {
        Some(name) if is_known_formatting(name) => name,
        _ => NO_FORMATTING,
    }
}
