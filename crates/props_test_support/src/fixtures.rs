//! Fixture manifests for the reconciler suites.
//!
//! A fixture file holds `[[cases]]`, each an inline scenario (`mode`, `gate`,
//! `element`, `steps`) plus the `expected` snapshot lines and, optionally, the
//! exact `journal` lines.
//!
//! Environment knobs:
//! - `PROPSYNC_FIXTURE_FILTER`: only run cases whose id contains the value.
//! - `PROPSYNC_FIXTURE_VERBOSE`: print actual lines for every case.
//! - `PROPSYNC_XFAIL_STRICT`: an `xfail` case that passes fails the suite.

use crate::{diff_lines, parse_env_bool};
use dom::SnapshotOptions;
use scenario::{ElementDef, GateDef, Scenario, StepDef};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const FIXTURE_FORMAT_V1: &str = "propsync-fixtures-v1";

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Active,
    Xfail,
    Skip,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureCase {
    pub id: String,
    #[serde(default = "active_status")]
    pub status: CaseStatus,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub gate: Option<GateDef>,
    pub element: ElementDef,
    #[serde(default)]
    pub steps: Vec<StepDef>,
    pub expected: Vec<String>,
    #[serde(default)]
    pub journal: Option<Vec<String>>,
}

fn active_status() -> CaseStatus {
    CaseStatus::Active
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FixtureFile {
    format: String,
    cases: Vec<FixtureCase>,
}

impl FixtureCase {
    pub fn scenario(&self) -> Scenario {
        Scenario {
            format: None,
            mode: self.mode.clone(),
            gate: self.gate.clone(),
            element: self.element.clone(),
            steps: self.steps.clone(),
        }
    }

    /// Runs the case; `Err` carries a printable mismatch report.
    pub fn check(&self) -> Result<Vec<String>, String> {
        let outcome = self
            .scenario()
            .run()
            .map_err(|err| format!("scenario error: {err}"))?;
        let actual = outcome.snapshot(SnapshotOptions::default()).into_lines();
        if actual != self.expected {
            return Err(format!(
                "snapshot mismatch\n{}",
                diff_lines(&self.expected, &actual)
            ));
        }
        if let Some(journal) = &self.journal
            && *journal != outcome.journal
        {
            return Err(format!(
                "journal mismatch\n{}",
                diff_lines(journal, &outcome.journal)
            ));
        }
        Ok(actual)
    }
}

pub fn load_fixture_file(path: &Path) -> Vec<FixtureCase> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read fixture file {path:?}: {err}"));
    let file: FixtureFile = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse fixture file {path:?}: {err}"));
    assert_eq!(
        file.format, FIXTURE_FORMAT_V1,
        "unsupported fixture format in {path:?}"
    );
    validate_cases(&file.cases, path);
    file.cases
}

fn validate_cases(cases: &[FixtureCase], path: &Path) {
    let mut seen = BTreeSet::new();
    for case in cases {
        assert!(!case.id.trim().is_empty(), "empty case id in {path:?}");
        assert!(
            seen.insert(case.id.as_str()),
            "duplicate case id '{}' in {path:?}",
            case.id
        );
        let has_reason = case.reason.as_deref().is_some_and(|r| !r.trim().is_empty());
        match case.status {
            CaseStatus::Active => assert!(
                case.reason.is_none(),
                "active case '{}' in {path:?} must not carry a reason",
                case.id
            ),
            CaseStatus::Xfail | CaseStatus::Skip => assert!(
                has_reason,
                "case '{}' in {path:?} is {:?} without a reason",
                case.id,
                case.status
            ),
        }
    }
}

/// Every `*.toml` file under `dir`, sorted.
pub fn fixture_files(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir)
        .unwrap_or_else(|err| panic!("failed to read fixture dir {dir:?}: {err}"));
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    files.sort();
    files
}

#[derive(Debug, Default)]
pub struct SuiteReport {
    pub passed: usize,
    pub skipped: usize,
    pub xfailed: usize,
    pub failures: Vec<String>,
}

impl SuiteReport {
    pub fn assert_clean(&self) {
        assert!(
            self.failures.is_empty(),
            "{} fixture case(s) failed:\n\n{}",
            self.failures.len(),
            self.failures.join("\n\n")
        );
    }
}

pub fn run_fixture_dir(dir: &Path) -> SuiteReport {
    let filter = std::env::var("PROPSYNC_FIXTURE_FILTER").ok();
    let verbose = parse_env_bool("PROPSYNC_FIXTURE_VERBOSE");
    let xfail_strict = parse_env_bool("PROPSYNC_XFAIL_STRICT");
    let mut report = SuiteReport::default();

    for path in fixture_files(dir) {
        for case in load_fixture_file(&path) {
            if filter.as_deref().is_some_and(|f| !case.id.contains(f)) {
                continue;
            }
            if case.status == CaseStatus::Skip {
                report.skipped += 1;
                continue;
            }
            let result = case.check();
            if verbose {
                match &result {
                    Ok(lines) => eprintln!("[{}] {}\n{}", case.id, path.display(), lines.join("\n")),
                    Err(detail) => eprintln!("[{}] {}\n{detail}", case.id, path.display()),
                }
            }
            match (case.status, result) {
                (CaseStatus::Active, Ok(_)) => report.passed += 1,
                (CaseStatus::Active, Err(detail)) => report
                    .failures
                    .push(format!("[{}] {}: {detail}", case.id, path.display())),
                (CaseStatus::Xfail, Err(_)) => report.xfailed += 1,
                (CaseStatus::Xfail, Ok(_)) if xfail_strict => report.failures.push(format!(
                    "[{}] {}: xfail case passed; mark it active",
                    case.id,
                    path.display()
                )),
                (CaseStatus::Xfail, Ok(_)) => report.passed += 1,
                (CaseStatus::Skip, _) => unreachable!("skipped above"),
            }
        }
    }
    report
}
