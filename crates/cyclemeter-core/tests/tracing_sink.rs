#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::io;
use std::sync::{Arc, Mutex};

use cyclemeter_core::MetricRegistry;

/// Collects formatted subscriber output in memory.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn lines(&self) -> Vec<String> {
        let buf = self.0.lock().unwrap();
        String::from_utf8(buf.clone())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for Captured {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(f: F) -> Vec<String> {
    let out = Captured::default();
    let writer = out.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_target(true)
        .without_time()
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    out.lines()
}

#[test]
fn default_sink_logs_reports_at_info_under_metrics_target() {
    let lines = capture(|| {
        let reg = MetricRegistry::new(0);
        reg.accumulate("rx", 1234.56);
        reg.accumulate("rx", 0.0);
        reg.snapshot();
        reg.roll_cycle();
        reg.summarize(10_000);
    });

    let info: Vec<&String> = lines
        .iter()
        .filter(|l| l.trim_start().starts_with("INFO cyclemeter::metrics: "))
        .collect();
    let messages: Vec<&str> = info
        .iter()
        .map(|l| l.split_once("cyclemeter::metrics: ").unwrap().1)
        .collect();
    assert_eq!(
        messages,
        vec![
            "Metric stats: rx: 1,234.6",
            "** Logging metrics. Total run time: 10 seconds **",
            "rx: average: 123.5 peak: 1,234.6 total: 1,234.6",
        ]
    );
}

#[test]
fn first_accumulation_logs_registration_at_debug() {
    let lines = capture(|| {
        let reg = MetricRegistry::new(0);
        reg.accumulate("rx", 1.0);
        reg.accumulate("rx", 1.0);
        reg.accumulate("tx", 1.0);
    });

    let registrations: Vec<&String> = lines
        .iter()
        .filter(|l| l.contains("registering metric"))
        .collect();
    assert_eq!(registrations.len(), 2);
    assert!(registrations.iter().all(|l| l
        .trim_start()
        .starts_with("DEBUG cyclemeter_core::registry: registering metric")));
    assert!(registrations[0].contains("metric=rx"));
    assert!(registrations[1].contains("metric=tx"));
}
