//! Suites declarativas cargadas desde disco.

mod common;

use std::path::PathBuf;

use common::{assert_all_passed, run};
use subject_core::SubjectError;
use subject_runner::{load_suite, parse_suite, RunnerError, SuiteFileError};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

#[test]
fn nested_fixture_runs_green() {
    let spec = load_suite(fixture("nested_subjects.json")).unwrap();
    let root = spec.build().unwrap();
    assert_eq!(root.test_count(), 6);

    let (_, report) = run(root);
    assert_all_passed(&report, 6);
}

#[test]
fn wrong_expectation_is_reported_as_mismatch() {
    let spec = parse_suite(r#"{
        "title": "mismatch",
        "subjects": [{ "name": "sub", "value": { "a": 1 } }],
        "tests": [{ "title": "wrong", "expect": { "sub": { "a": 2 } } }]
    }"#).unwrap();

    let (_, report) = run(spec.build().unwrap());
    assert_eq!(report.failed, 1);
    assert!(report.failures[0].error.contains("`sub`"), "{}", report.failures[0].error);
}

#[test]
fn non_string_name_fails_at_build_time() {
    let spec = parse_suite(r#"{ "title": "bad", "subjects": [{ "name": 123, "value": {} }] }"#).unwrap();
    let err = spec.build().unwrap_err();
    assert!(matches!(err,
                     SuiteFileError::Definition(RunnerError::Subject(SubjectError::InvalidArgument { param: "name", .. }))),
            "{err:?}");
}

#[test]
fn missing_value_is_rejected_as_object_argument() {
    let spec = parse_suite(r#"{ "title": "bad", "subjects": [{ "name": "sub" }] }"#).unwrap();
    let err = spec.build().unwrap_err();
    assert!(err.to_string().contains("object"), "{err}");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_suite(fixture("does_not_exist.json")).unwrap_err();
    match err {
        SuiteFileError::Io { path, .. } => assert!(path.ends_with("does_not_exist.json")),
        other => panic!("unexpected error: {other:?}"),
    }
}
