use std::sync::{Mutex, MutexGuard, Once, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Global mutex to serialize integration tests that share the process-wide
/// recording logger.
pub fn serial() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner())
}

/// Logger capturing formatted records so tests can assert on breadcrumbs.
pub struct Recorder {
    records: Mutex<Vec<String>>,
}

impl Recorder {
    pub fn drain(&self) -> Vec<String> {
        let mut records = self.records.lock().unwrap_or_else(|err| err.into_inner());
        std::mem::take(&mut *records)
    }
}

impl Log for Recorder {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut records = self.records.lock().unwrap_or_else(|err| err.into_inner());
        records.push(format!("{} {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}

/// Install (once per process) and return the recording logger.
pub fn recorder() -> &'static Recorder {
    static RECORDER: Recorder = Recorder {
        records: Mutex::new(Vec::new()),
    };
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let _ = log::set_logger(&RECORDER);
        log::set_max_level(LevelFilter::Debug);
    });
    &RECORDER
}
