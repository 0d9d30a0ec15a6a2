use std::sync::{Arc, Mutex};

pub trait Logger: Send {
    fn log(&mut self, file: &'static str, line: u32, tag: &'static str, msg: &str);
}

lazy_static! {
    static ref LOGGERS: Arc<Mutex<Vec<Box<dyn Logger>>>> = Arc::new(Mutex::new(vec![]));
}

/// Dispatches a log message to all the registered loggers.
/// If no logger was registered, the message is printed like Println_Logger does.
#[inline]
pub fn emit_log_msg(file: &'static str, line: u32, tag: &'static str, msg: &str) {
    match LOGGERS.lock() {
        Ok(mut loggers) => dispatch(&mut loggers, &mut Println_Logger, file, line, tag, msg),
        Err(_) => Println_Logger.log(file, line, tag, msg),
    }
}

fn dispatch(
    loggers: &mut [Box<dyn Logger>],
    fallback: &mut dyn Logger,
    file: &'static str,
    line: u32,
    tag: &'static str,
    msg: &str,
) {
    if loggers.is_empty() {
        fallback.log(file, line, tag, msg);
    } else {
        loggers
            .iter_mut()
            .for_each(|logger| logger.log(file, line, tag, msg));
    }
}

pub struct Println_Logger;

impl Logger for Println_Logger {
    fn log(&mut self, _file: &'static str, _line: u32, tag: &'static str, msg: &str) {
        if tag == "DEBUG" || tag == "VERBOSE" {
            eprintln!("[ {} ] {}", tag, msg);
        } else {
            println!("[ {} ] {}", tag, msg);
        }
    }
}

pub fn add_default_logger() {
    add_logger(Box::new(Println_Logger {}));
}

pub fn add_logger(logger: Box<dyn Logger>) {
    if let Ok(mut loggers) = LOGGERS.lock() {
        loggers.push(logger);
    }
}
