// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Call-site metadata attached to every record.
///
/// Usually captured with [`here!`](crate::here), but callers bridging from
/// other sources can build one directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: &'static str,
    pub function: &'static str,
    pub line: u32,
}

impl Location {
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }

    /// Last path component of `file` with its extension removed.
    ///
    /// ```
    /// use tagged_log::format::Location;
    ///
    /// let location = Location::new("src/storage/Storage.rs", "save", 42);
    /// assert_eq!(location.file_name(), "Storage");
    /// ```
    pub fn file_name(&self) -> &'static str {
        let base = self
            .file
            .rsplit(|c: char| c == '/' || c == '\\')
            .next()
            .unwrap_or(self.file);

        match base.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => base,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} [{}]", self.file_name(), self.function, self.line)
    }
}

/// Name of the enclosing function, without its module path.
#[doc(hidden)]
pub fn enclosing_function(marker_type_name: &'static str) -> &'static str {
    // Marker is `path::to::function::__here_marker`, possibly with closure segments
    let path = marker_type_name
        .strip_suffix("::__here_marker")
        .unwrap_or(marker_type_name);

    path.rsplit("::")
        .find(|segment| *segment != "{{closure}}")
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_variants() {
        assert_eq!(Location::new("Storage.ext", "save", 1).file_name(), "Storage");
        assert_eq!(Location::new("a\\b\\Win.rs", "f", 1).file_name(), "Win");
        assert_eq!(Location::new("src/archive.tar.gz", "f", 1).file_name(), "archive.tar");
        assert_eq!(Location::new("Makefile", "f", 1).file_name(), "Makefile");
        assert_eq!(Location::new("conf/.env", "f", 1).file_name(), ".env");
    }

    #[test]
    fn test_display() {
        let location = Location::new("Sources/Storage.ext", "save", 42);
        assert_eq!(location.to_string(), "Storage.save [42]");
    }

    #[test]
    fn test_enclosing_function_strips_path_and_closures() {
        assert_eq!(enclosing_function("app::store::save::__here_marker"), "save");
        assert_eq!(
            enclosing_function("app::store::save::{{closure}}::__here_marker"),
            "save"
        );
    }

    #[test]
    fn test_here_captures_this_function() {
        let location = crate::here!();
        assert_eq!(location.function, "test_here_captures_this_function");
        assert_eq!(location.file_name(), "location");
        assert_eq!(location.line, line!() - 3);
    }
}
