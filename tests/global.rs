//! The global logger lives for the whole test binary, so this file holds a single test.

use microlog::Config;
use std::fs;
use std::sync::{Arc, Barrier};
use std::thread;
use tempfile::TempDir;

#[test]
fn racing_first_callers_create_one_file() {
    let tmp = TempDir::new().unwrap();
    let config = Config::new()
        .print_to_console(false)
        .log_directory(tmp.path().to_string_lossy());

    assert!(microlog::try_get().is_none());

    let barrier = Arc::new(Barrier::new(8));
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            let config = config.clone().color_enabled(i % 2 == 0);
            thread::spawn(move || {
                barrier.wait();
                let logger = microlog::init(config);
                let id = i.to_string();
                logger.info(&["hello from", id.as_str()]);
                std::ptr::from_ref(logger) as usize
            })
        })
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(std::ptr::from_ref(microlog::get()) as usize, addresses[0]);

    let files: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
    assert_eq!(files.len(), 1);

    let content = fs::read_to_string(microlog::get().file_name().unwrap()).unwrap();
    assert_eq!(content.matches("Log file created at").count(), 1);
    assert_eq!(content.lines().count(), 9);

    microlog::shutdown();
    assert_eq!(microlog::get().file_name(), None);
}
