use prio_logger::sink::MemorySink;
use prio_logger::{set_stdlog_logger, Build, LoggerOptions};
use slog::o;
use std::sync::Arc;

#[test]
fn log_facade_records_reach_the_logger() {
    let sink = Arc::new(MemorySink::new());
    let logger = LoggerOptions::new()
        .facility("local1")
        .level("info")
        .sink(sink.clone())
        .build()
        .unwrap()
        .into_slog(o!());

    let _guard = set_stdlog_logger(logger).unwrap();
    log::info!("connected to {}", "db");
    log::debug!("filtered out");
    log::warn!("slow query");

    assert_eq!(sink.contents(), "<142>connected to db\n<140>slow query\n");

    // Only one `log` backend may be installed per process.
    let second = LoggerOptions::new().build().unwrap().into_slog(o!());
    assert!(set_stdlog_logger(second).is_err());
}
