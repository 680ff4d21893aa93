//! Call-site sugar for the [`Logger`](crate::Logger) emitters.
//!
//! The `*f!` macros take a format string like [`format!`]; the `*ln!` macros
//! take any number of [`Display`](std::fmt::Display) values and join them with
//! single spaces.
//!
//! ```
//! use alogger::{errorf, warnln, Logger};
//!
//! let logger = Logger::with_writer(std::io::sink(), true).with_tag("db");
//! errorf!(logger, "{} - {}", 1, "bad thing happened");
//! warnln!(logger, "pool", "exhausted", 32);
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __alogger_ln {
    ($logger:expr, $method:ident, $($arg:expr),* $(,)?) => {
        $logger.$method(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! infoln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__alogger_ln!($logger, infoln, $($arg),*)
    };
}

#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debugln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__alogger_ln!($logger, debugln, $($arg),*)
    };
}

#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warnln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__alogger_ln!($logger, warnln, $($arg),*)
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! errorln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__alogger_ln!($logger, errorln, $($arg),*)
    };
}

/// Emit at fatal severity, then exit the process with status 1.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
}

/// Emit at fatal severity, then exit the process with status 1.
#[macro_export]
macro_rules! fatalln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::__alogger_ln!($logger, fatalln, $($arg),*)
    };
}
