use sfx_diagnostics::log::{add_logger, Logger};
use std::sync::{Arc, Mutex};
use std::thread::{self, ThreadId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Log_Record {
    pub tag: &'static str,
    pub msg: String,
}

type Records = Arc<Mutex<Vec<Log_Record>>>;

/// Records the diagnostics emitted by the thread that installed it.
/// Tests run in parallel and loggers are global, so other threads are ignored.
pub struct Log_Capture {
    records: Records,
}

struct Capture_Logger {
    owner: ThreadId,
    records: Records,
}

impl Logger for Capture_Logger {
    fn log(&mut self, _file: &'static str, _line: u32, tag: &'static str, msg: &str) {
        if thread::current().id() != self.owner {
            return;
        }
        if let Ok(mut records) = self.records.lock() {
            records.push(Log_Record {
                tag,
                msg: String::from(msg),
            });
        }
    }
}

impl Log_Capture {
    pub fn install() -> Self {
        let records = Records::default();
        add_logger(Box::new(Capture_Logger {
            owner: thread::current().id(),
            records: records.clone(),
        }));
        Log_Capture { records }
    }

    pub fn records(&self) -> Vec<Log_Record> {
        self.records.lock().expect("log capture poisoned").clone()
    }

    pub fn messages_with_tag(&self, tag: &str) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|r| r.tag == tag)
            .map(|r| r.msg)
            .collect()
    }

    pub fn n_with_tag(&self, tag: &str) -> usize {
        self.messages_with_tag(tag).len()
    }
}
