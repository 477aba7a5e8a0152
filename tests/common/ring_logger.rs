use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::sync::Mutex;

// Enough to cover the short programs the tests run.
const RING_BUFFER_SIZE: usize = 60;

lazy_static::lazy_static! {
    static ref LOG_BUFFER: Mutex<VecDeque<String>> = Mutex::new(VecDeque::with_capacity(RING_BUFFER_SIZE));
}

struct RingLogger;

impl log::Log for RingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut buffer = LOG_BUFFER.lock().unwrap();
            if buffer.len() >= RING_BUFFER_SIZE {
                buffer.pop_front();
            }
            buffer.push_back(format!("{}", record.args()));
        }
    }

    fn flush(&self) {}
}

/// Installs the ring logger. Only the first call in a test binary succeeds.
pub fn init_logger() -> Result<(), SetLoggerError> {
    log::set_logger(&RingLogger).map(|()| log::set_max_level(LevelFilter::Trace))
}

pub fn captured_lines() -> Vec<String> {
    LOG_BUFFER.lock().unwrap().iter().cloned().collect()
}

pub fn dump_log() {
    let buffer = LOG_BUFFER.lock().unwrap();
    if buffer.is_empty() {
        println!("Log buffer is empty.");
        return;
    }

    println!("--- LAST {} LOG LINES ---", buffer.len());
    let len = buffer.len() as i32;
    for (i, line) in buffer.iter().enumerate() {
        // Relative index, 0 being the most recent line.
        println!("{:>3}. {}", i as i32 - len + 1, line);
    }
}
