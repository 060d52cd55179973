#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::io::Write;

use cyclemeter_reporter::config;

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.reporter.cycle_interval_ms, 1000);
    assert!(cfg.reporter.snapshot_each_cycle);
    assert!(cfg.reporter.summary_on_shutdown);
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
reporter:
  cycle_interval_ms: 250
  snapshot_each_cycle: false
  summary_on_shutdown: true
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.reporter.cycle_interval().as_millis(), 250);
    assert!(!cfg.reporter.snapshot_each_cycle);
}

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
reporter:
  cycle_interval: 500 # typo should fail
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_out_of_range_interval() {
    for ms in [0u64, 99, 3_600_001] {
        let s = format!("version: 1\nreporter:\n  cycle_interval_ms: {ms}\n");
        let err = config::load_from_str(&s).expect_err("must fail");
        assert_eq!(err.code().as_str(), "INVALID_CONFIG");
    }
}

#[test]
fn load_from_file_reads_and_reports_io() {
    let path = std::env::temp_dir().join(format!("cyclemeter-cfg-{}.yaml", std::process::id()));
    {
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "version: 1\nreporter:\n  cycle_interval_ms: 2000").unwrap();
    }
    let cfg = config::load_from_file(path.to_str().unwrap()).expect("must load");
    assert_eq!(cfg.reporter.cycle_interval_ms, 2000);
    std::fs::remove_file(&path).unwrap();

    let err = config::load_from_file(path.to_str().unwrap()).expect_err("must fail");
    assert_eq!(err.code().as_str(), "IO");
}
