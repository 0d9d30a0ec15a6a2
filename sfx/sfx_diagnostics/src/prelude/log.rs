use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

#[inline(always)]
pub fn is_verbose() -> bool {
    #[cfg(debug_assertions)]
    {
        VERBOSE.load(Ordering::Acquire)
    }
    #[cfg(not(debug_assertions))]
    {
        false
    }
}

#[inline(always)]
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Release);
}

#[macro_export]
macro_rules! fatal {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        panic!("[ FATAL ] {}", format_args!($fmt, $($arg),*));
    };
}

#[macro_export]
macro_rules! log {
    ($prelude:tt, $arg:expr) => {
        $crate::log::emit_log_msg(file!(), line!(), $prelude, &format!("{}", $arg));
    };
}

#[macro_export]
macro_rules! lok {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        $crate::log!("OK", format_args!($fmt, $($arg),*));
    };
}

#[macro_export]
macro_rules! lerr {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        $crate::log!("ERROR", format_args!($fmt, $($arg),*));
    };
}

#[macro_export]
macro_rules! lwarn {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        $crate::log!("WARNING", format_args!($fmt, $($arg),*));
    };
}

#[macro_export]
macro_rules! linfo {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        $crate::log!("INFO", format_args!($fmt, $($arg),*));
    };
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! ldebug {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        $crate::log!("DEBUG", format_args!($fmt, $($arg),*));
    };
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! lverbose {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        if $crate::prelude::is_verbose() {
            $crate::log!("VERBOSE", format_args!($fmt, $($arg),*));
        }
    };
}

/// Like `debug_assert!`, but logs a warning instead of panicking.
#[macro_export]
#[cfg(debug_assertions)]
macro_rules! lassert {
    ($cond:expr, $fmt:tt $(,$arg:expr)* $(,)?) => {
        if !$cond {
            $crate::lwarn!($fmt $(,$arg)*);
        }
    };
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! ldebug {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        ()
    };
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! lverbose {
    ($fmt:tt $(,$arg:expr)* $(,)?) => {
        ()
    };
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! lassert {
    ($cond:expr, $fmt:tt $(,$arg:expr)* $(,)?) => {
        ()
    };
}
