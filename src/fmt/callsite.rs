//! Source location of a log call, captured at the call expression.
//!
//! Level methods are `#[track_caller]`, so `Location::caller()` already points at
//! the user's line. The macros go one step further and record the enclosing
//! function, which `Location` cannot provide.

use std::fmt;
use std::panic::Location;

/// Printed when there is no usable location at all.
pub const UNKNOWN_SOURCE: &str = "Unknown Source";

/// Where a log call came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    function: Option<&'static str>,
}

impl CallSite {
    /// `function` is a full path as produced by `std::any::type_name`
    /// (`my_app::worker::run`); only its last named segment is kept.
    #[must_use]
    pub fn new(file: &'static str, line: u32, function: Option<&'static str>) -> Self {
        Self {
            file,
            line,
            function: function.and_then(method_name),
        }
    }

    /// Location of whoever called the `#[track_caller]` function this runs in.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// Sentinel for the pathological case where no location was recorded.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            file: "",
            line: 0,
            function: None,
        }
    }

    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    #[must_use]
    pub const fn function(&self) -> Option<&'static str> {
        self.function
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line(), None)
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.file.is_empty() {
            return f.write_str(UNKNOWN_SOURCE);
        }

        let slash = if self.file.starts_with('/') { "" } else { "/" };
        write!(f, "{slash}{}:{}", self.file.replace('\\', "/"), self.line)?;
        if let Some(function) = self.function {
            write!(f, " >> {function}()")?;
        }
        Ok(())
    }
}

/// `crate::module::run::{{closure}}` → `run`. Closure and helper segments say
/// nothing a reader can search for, so the nearest named function wins.
fn method_name(path: &'static str) -> Option<&'static str> {
    path.rsplit("::")
        .find(|segment| !segment.is_empty() && !segment.starts_with('{'))
}

/// Full path of the function this expands in; used by the logging macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        name.strip_suffix("::__here").unwrap_or(name)
    }};
}
