#![cfg(unix)]

mod common;

use common::TestEnv;

#[test]
fn run_pinned_release_executes_steps_in_order() {
    let env = TestEnv::new();
    let result = env.run(&["run", "deploy-test-wjs:1.2.3"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(
        env.calls(),
        vec![
            "pip install --upgrade --pre wjs.jcom_profile==1.2.3",
            "python src/manage.py link_plugins",
            "python src/manage.py install_themes",
            "python src/manage.py migrate --noinput",
            "python src/manage.py build_assets",
            "python src/manage.py collectstatic --noinput",
        ]
    );
    assert!(env.marker().exists());
    assert!(result.stdout.contains("✓ test-wjs deployed"));
}

#[test]
fn run_stops_at_failing_step_and_does_not_reload() {
    let env = TestEnv::new();
    let result = env.run_with_env(&["run", "deploy-prod-wjs"], &[("WJS_TEST_FAIL", "migrate")]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("migrate step failed"));

    let calls = env.calls();
    assert_eq!(calls.last().unwrap(), "python src/manage.py migrate --noinput");
    assert!(!calls.iter().any(|c| c.contains("build_assets")));
    assert!(!env.marker().exists());
}

#[test]
fn run_json_emits_event_stream() {
    let env = TestEnv::new();
    let result = env.run(&["--json", "run", "deploy-dev-wjs"]);

    assert!(result.success, "stderr: {}", result.stderr);
    let events = result.json_events();
    assert_eq!(events.first().unwrap()["event"], "start");
    assert_eq!(events.first().unwrap()["profile"], "dev-wjs");
    assert_eq!(events.last().unwrap()["event"], "complete");
    assert_eq!(events.last().unwrap()["step_count"], 7);

    let started = events.iter().filter(|e| e["event"] == "step_start").count();
    assert_eq!(started, 7);
}

#[test]
fn run_json_failure_ends_with_failed_event() {
    let env = TestEnv::new();
    let result = env.run_with_env(
        &["--json", "run", "deploy-pp-wjs"],
        &[("WJS_TEST_FAIL", "collectstatic")],
    );

    assert_eq!(result.exit_code, 1);
    let events = result.json_events();
    let n = events.len();
    assert_eq!(events[n - 2]["event"], "step_failed");
    assert_eq!(events[n - 2]["phase"], "build-assets");
    assert!(events[n - 1]["error"]
        .as_str()
        .unwrap()
        .starts_with("build-assets step failed"));
    assert_eq!(events[n - 1]["event"], "failed");
    assert_eq!(events[n - 1]["exit_code"], 1);
}

#[test]
fn run_refuses_while_another_deploy_holds_the_lock() {
    use fs2::FileExt;

    let env = TestEnv::new();
    let lock = std::fs::File::create(env.root().join(".wjs-deploy.lock")).unwrap();
    lock.lock_exclusive().unwrap();

    let result = env.run(&["run", "deploy-prod-wjs"]);

    assert_eq!(result.exit_code, 75);
    assert!(result.stderr.contains("another deployment is in progress"));
    assert!(env.calls().is_empty());

    let unlocked = env.run(&["run", "deploy-prod-wjs", "--no-lock"]);
    assert!(unlocked.success, "stderr: {}", unlocked.stderr);
}

#[test]
fn run_with_missing_venv_reports_spawn_failure() {
    let env = TestEnv::new();
    std::fs::remove_dir_all(env.path("venv")).unwrap();

    let result = env.run(&["run", "deploy-prod-wjs"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("failed to start"));
    assert!(!env.marker().exists());
}

#[test]
fn run_janeway_pulls_source_then_deploys() {
    let env = TestEnv::new();
    env.write_config_with_janeway("");

    let result = env.run(&["run", "deploy-prod-janeway"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(
        env.calls(),
        vec![
            "git pull --ff-only origin master",
            "pip install -r requirements.txt",
            "python src/manage.py migrate --noinput",
            "python src/manage.py build_assets",
            "python src/manage.py collectstatic --noinput",
        ]
    );
    assert!(env.marker().exists());
}

#[test]
fn run_janeway_failed_pull_runs_nothing_else() {
    let env = TestEnv::new();
    env.write_config_with_janeway("");

    let result = env.run_with_env(
        &["run", "deploy-dev-janeway"],
        &[("WJS_TEST_FAIL", "pull --ff-only")],
    );

    assert_eq!(result.exit_code, 1);
    assert!(result
        .stderr
        .contains("update-source step failed: `git pull --ff-only origin develop`"));
    assert_eq!(env.calls(), vec!["git pull --ff-only origin develop"]);
    assert!(!env.marker().exists());
}
