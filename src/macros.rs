//! Logging macros. Unlike the level methods, these also record the enclosing
//! function, so the location reads `/src/jobs.rs:42 >> run()`.
//!
//! The first argument is anything with a `log_at` method — a `Logger`, a
//! `TaggedLogger`, or `microlog::get()`. Fragments may be `&str` or `String`
//! and are joined with single spaces.

/// Logs at an explicit level.
#[macro_export]
macro_rules! log {
    ($target:expr, $level:expr, $($part:expr),+ $(,)?) => {
        $target.log_at(
            $level,
            $crate::fmt::CallSite::new(
                ::std::file!(),
                ::std::line!(),
                ::std::option::Option::Some($crate::__function_path!()),
            ),
            &[$(::std::convert::AsRef::<str>::as_ref(&$part)),+].join(" "),
        )
    };
}

#[macro_export]
macro_rules! error {
    ($target:expr, $($part:expr),+ $(,)?) => {
        $crate::log!($target, $crate::Level::Error, $($part),+)
    };
}

#[macro_export]
macro_rules! info {
    ($target:expr, $($part:expr),+ $(,)?) => {
        $crate::log!($target, $crate::Level::Info, $($part),+)
    };
}

#[macro_export]
macro_rules! debug {
    ($target:expr, $($part:expr),+ $(,)?) => {
        $crate::log!($target, $crate::Level::Debug, $($part),+)
    };
}

#[macro_export]
macro_rules! statement {
    ($target:expr, $($part:expr),+ $(,)?) => {
        $crate::log!($target, $crate::Level::Statement, $($part),+)
    };
}

#[macro_export]
macro_rules! details {
    ($target:expr, $($part:expr),+ $(,)?) => {
        $crate::log!($target, $crate::Level::Details, $($part),+)
    };
}
