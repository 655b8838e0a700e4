//! Bootstrapper behavior through the public API, with a fake runner.

use depstrap::bootstrap::{Bootstrapper, ToolOutcome};
use depstrap::environment::{Environment, Platform, RestrictedHost, ELEVATION_PROBE};
use depstrap::shell::RecordingRunner;
use depstrap::tools::ToolRegistry;
use depstrap::ui::MockUI;
use depstrap::DepstrapError;

const CHECKS: [&str; 3] = ["gs --version", "gm -version", "soffice --version"];

fn all_missing() -> RecordingRunner {
    let runner = RecordingRunner::new();
    for check in CHECKS {
        runner.fail(check);
    }
    runner
}

#[test]
fn present_tools_are_never_installed() {
    let runner = RecordingRunner::new();
    let registry = ToolRegistry::new();
    for platform in [
        Platform::MacOS,
        Platform::Linux,
        Platform::Other("windows".into()),
    ] {
        let env = Environment::new(platform).with_elevation(true);
        let mut ui = MockUI::new();
        Bootstrapper::new(&runner, &env)
            .bootstrap(registry.tools(), &mut ui)
            .unwrap();
    }

    assert!(runner.commands().iter().all(|c| CHECKS.contains(&c.as_str())));
}

#[test]
fn linux_resolution_and_install_end_to_end() {
    let runner = all_missing();
    let env = Environment::resolve_with_env(
        Platform::Linux,
        &depstrap::environment::RestrictedHostDetector::new(),
        &runner,
        |_| Err(std::env::VarError::NotPresent),
    );
    let mut ui = MockUI::new();

    let reports = Bootstrapper::new(&runner, &env)
        .bootstrap(ToolRegistry::new().tools(), &mut ui)
        .unwrap();

    assert_eq!(
        runner.commands(),
        [
            ELEVATION_PROBE,
            "gs --version",
            "sudo yum update -y && sudo yum install -y ghostscript",
            "gm -version",
            "sudo yum update -y && sudo yum install -y graphicsmagick",
            "soffice --version",
            "sudo yum update -y && sudo yum install -y libreoffice",
        ]
    );
    assert!(reports
        .iter()
        .all(|r| matches!(r.outcome, ToolOutcome::Installed { .. })));
}

#[test]
fn failed_probe_means_plain_yum() {
    let runner = all_missing();
    runner.fail_with(ELEVATION_PROBE, 1, "sudo: a password is required");
    let env = Environment::resolve_with_env(
        Platform::Linux,
        &depstrap::environment::RestrictedHostDetector::new(),
        &runner,
        |_| Err(std::env::VarError::NotPresent),
    );
    let mut ui = MockUI::new();

    Bootstrapper::new(&runner, &env)
        .bootstrap(ToolRegistry::new().tools(), &mut ui)
        .unwrap();

    let installs: Vec<String> = runner
        .commands()
        .into_iter()
        .filter(|c| c.contains("yum"))
        .collect();
    assert_eq!(
        installs,
        [
            "yum update -y && yum install -y ghostscript",
            "yum update -y && yum install -y graphicsmagick",
            "yum update -y && yum install -y libreoffice",
        ]
    );
}

#[test]
fn restricted_linux_runs_no_installs() {
    let runner = all_missing();
    let env = Environment::new(Platform::Linux)
        .with_elevation(true)
        .with_restricted_host(Some(RestrictedHost::vercel()));
    let mut ui = MockUI::new();

    Bootstrapper::new(&runner, &env)
        .bootstrap(ToolRegistry::new().tools(), &mut ui)
        .unwrap();

    assert_eq!(runner.commands(), CHECKS);
    assert_eq!(ui.warnings().len(), 3);
}

#[test]
fn first_install_failure_stops_the_run() {
    let runner = all_missing();
    runner.fail_with(
        "yum update -y && yum install -y ghostscript",
        1,
        "Error: Unable to find a match: ghostscript",
    );
    let env = Environment::new(Platform::Linux);
    let mut ui = MockUI::new();

    let err = Bootstrapper::new(&runner, &env)
        .bootstrap(ToolRegistry::new().tools(), &mut ui)
        .unwrap_err();

    match err {
        DepstrapError::InstallFailed { tool, message } => {
            assert_eq!(tool, "Ghostscript");
            assert_eq!(message, "Error: Unable to find a match: ghostscript");
        }
        other => panic!("expected InstallFailed, got {other:?}"),
    }
    assert!(!runner.ran("gm -version"));
}
