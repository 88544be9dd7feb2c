use std::collections::BTreeSet;

use attackr_common::config::Config;
use attackr_common::error::LogSourceError;
use attackr_common::models::report::Report;
use attackr_common::models::threshold::Threshold;
use attackr_core::geo::{GeoResolver, UNAVAILABLE_LABEL, UNKNOWN_LABEL};
use attackr_core::pipeline::Pipeline;
use attackr_core::render;
use attackr_core::source::FileLineSource;

use crate::utils::{StubGeo, failed, log_file, report_date};

fn run_with(file: &tempfile::NamedTempFile, geo: StubGeo, threshold: Threshold) -> Report {
    Pipeline::new(
        Box::new(FileLineSource::new(file.path())),
        GeoResolver::new(Box::new(geo)),
        threshold,
    )
    .run_on(report_date())
    .unwrap()
}

#[test]
fn report_contains_exactly_the_addresses_over_threshold() {
    let file = log_file(
        &[("203.0.113.5", 25), ("198.51.100.7", 9), ("192.0.2.44", 10), ("192.0.2.45", 1)],
        &["Oct 29 03:13:00 bastion sshd[4122]: Accepted publickey for deploy from 10.1.1.1 port 51000 ssh2"],
    );

    let report = run_with(&file, StubGeo::default(), Threshold::DEFAULT);

    let reported: BTreeSet<&str> = report.rows.iter().map(|row| row.address.as_str()).collect();
    assert_eq!(reported, BTreeSet::from(["192.0.2.44", "203.0.113.5"]));
    assert!(report.rows.windows(2).all(|pair| pair[0].count <= pair[1].count));
    assert_eq!(report.rows[0].count, 10);
    assert_eq!(report.rows[1].count, 25);
    assert_eq!(report.failures_matched, 45);
    assert_eq!(report.lines_scanned, 46);
}

#[test]
fn countries_resolve_and_failures_stay_local() {
    let file = log_file(&[("203.0.113.5", 12), ("198.51.100.7", 14), ("192.0.2.44", 16)], &[]);
    let geo = StubGeo::default()
        .with_country("203.0.113.5", "Netherlands", "NL")
        .with_country("192.0.2.44", "Brazil", "BR")
        .failing_for("198.51.100.7");

    let report = run_with(&file, geo, Threshold::DEFAULT);

    let countries: Vec<(&str, &str)> = report
        .rows
        .iter()
        .map(|row| (row.address.as_str(), row.country.as_str()))
        .collect();
    assert_eq!(
        countries,
        vec![
            ("203.0.113.5", "Netherlands"),
            ("198.51.100.7", UNKNOWN_LABEL),
            ("192.0.2.44", "Brazil"),
        ]
    );
}

#[test]
fn malformed_tokens_are_never_counted() {
    let mut noise: Vec<String> = Vec::new();
    for _ in 0..20 {
        noise.push("sshd[1]: Failed password for root from 203.0.113 port 22 ssh2".to_owned());
        noise.push("sshd[1]: Failed password for root from 1.2.3.4.5 port 22 ssh2".to_owned());
        noise.push("sshd[1]: Failed password for root from unknown port 22 ssh2".to_owned());
    }
    let noise: Vec<&str> = noise.iter().map(String::as_str).collect();
    let file = log_file(&[], &noise);

    let report = run_with(&file, StubGeo::default(), Threshold::new(0));
    assert!(report.is_empty(), "unexpected rows: {:?}", report.rows);
    assert_eq!(report.failures_matched, 0);
}

#[test]
fn empty_log_renders_the_no_results_message() {
    let file = log_file(&[], &[]);
    let report = run_with(&file, StubGeo::default(), Threshold::DEFAULT);

    let text = render::render(&report);
    assert!(text.starts_with("Attacker Report - October 29, 2025\n"));
    assert!(text.contains("No IP addresses with 10 or more failed attempts were found."));
    assert!(!text.contains("203."));
}

#[test]
fn identical_input_gives_identical_output() {
    let file = log_file(&[("192.0.2.9", 11), ("192.0.2.10", 11), ("192.0.2.1", 30)], &[]);
    let first = render::render(&run_with(&file, StubGeo::default(), Threshold::DEFAULT));
    let second = render::render(&run_with(&file, StubGeo::default(), Threshold::DEFAULT));
    assert_eq!(first, second);
}

#[test]
fn parallel_lookups_preserve_order() {
    let failures: Vec<(String, usize)> = (0..40).map(|i| (format!("10.9.{}.{}", i / 10, i), 10 + i)).collect();
    let failures: Vec<(&str, usize)> = failures.iter().map(|(a, n)| (a.as_str(), *n)).collect();
    let file = log_file(&failures, &[]);

    let sequential = run_with(&file, StubGeo::default(), Threshold::DEFAULT);
    let parallel = Pipeline::new(
        Box::new(FileLineSource::new(file.path())),
        GeoResolver::new(Box::new(StubGeo::default())),
        Threshold::DEFAULT,
    )
    .with_parallel_lookups(true)
    .run_on(report_date())
    .unwrap();

    assert_eq!(sequential.rows, parallel.rows);
}

#[test]
fn without_a_database_every_row_is_unavailable() {
    let file = log_file(&[("203.0.113.5", 10)], &[]);
    let config = Config {
        log_path: file.path().to_path_buf(),
        geoip_db: None,
        ..Config::default()
    };

    let report = Pipeline::from_config(&config).run_on(report_date()).unwrap();
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].country, UNAVAILABLE_LABEL);
}

#[test]
fn unreadable_database_degrades_instead_of_failing() {
    let file = log_file(&[("203.0.113.5", 10)], &[]);
    let bogus_db = log_file(&[], &["not a maxmind database"]);
    let config = Config {
        log_path: file.path().to_path_buf(),
        geoip_db: Some(bogus_db.path().to_path_buf()),
        ..Config::default()
    };

    let report = Pipeline::from_config(&config).run_on(report_date()).unwrap();
    assert_eq!(report.rows[0].country, UNAVAILABLE_LABEL);
}

#[test]
fn missing_log_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("syslog.log");
    let config = Config {
        log_path: path.clone(),
        ..Config::default()
    };

    let err = Pipeline::from_config(&config).run_on(report_date()).unwrap_err();
    assert!(matches!(err, LogSourceError::NotFound { .. }), "got {err:?}");
    assert!(err.to_string().contains(&path.display().to_string()));
}

#[test]
#[cfg(unix)]
fn unreadable_log_is_permission_denied() {
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;

    let file = log_file(&[("203.0.113.5", 10)], &[]);
    fs::set_permissions(file.path(), Permissions::from_mode(0o000)).unwrap();

    // Root ignores file modes.
    if fs::read(file.path()).is_ok() {
        eprintln!("Skipping permission test: running with elevated privileges.");
        return;
    }

    let config = Config {
        log_path: file.path().to_path_buf(),
        ..Config::default()
    };
    let err = Pipeline::from_config(&config).run_on(report_date()).unwrap_err();
    assert!(matches!(err, LogSourceError::PermissionDenied { .. }), "got {err:?}");
}

#[test]
fn failure_line_helper_matches_the_extractor() {
    assert_eq!(
        attackr_core::extractor::extract_address(&failed("198.51.100.200")).map(|t| t.to_string()),
        Some("198.51.100.200".to_owned())
    );
}
