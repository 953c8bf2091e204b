#![cfg(unix)]

mod common;

use common::{stderr_of, TestEnv};

const CONFIG: &str = r#"
addons = ["x:plan1", "y:plan2"]
vars = ["A=1"]
"#;

#[test]
fn bootstrap_runs_full_pipeline_in_order() {
    let env = TestEnv::new();
    env.write_config(CONFIG);
    env.fake_cli("heroku", &[]);
    env.fake_cli("git", &[]);

    let out = env.skiff(&["bootstrap", "my-app"]);
    assert!(out.status.success(), "stderr: {}", stderr_of(&out));

    assert_eq!(
        env.logged(),
        vec![
            "heroku create my-app",
            "heroku addons:add x:plan1",
            "heroku addons:add y:plan2",
            "heroku config:add A=1",
            "git push heroku master",
            "heroku run python manage.py syncdb --noinput",
            "heroku run python manage.py migrate --noinput",
            "heroku run python manage.py collectstatic --noinput",
            "heroku run python manage.py compress",
            "heroku run python manage.py newrelic-admin validate-config - stdout",
        ]
    );
}

#[test]
fn bootstrap_without_name_lets_platform_pick() {
    let env = TestEnv::new();
    env.write_config(CONFIG);
    env.fake_cli("heroku", &[]);
    env.fake_cli("git", &[]);

    let out = env.skiff(&["bootstrap"]);
    assert!(out.status.success(), "stderr: {}", stderr_of(&out));
    assert_eq!(env.logged()[0], "heroku create");
}

#[test]
fn declined_push_stops_with_fixed_message() {
    // stdin is not a tty here, so the continue-anyway question is
    // answered "no" without a prompt.
    let env = TestEnv::new();
    env.write_config(CONFIG);
    env.fake_cli("heroku", &[]);
    env.fake_cli("git", &["push"]);

    let out = env.skiff(&["bootstrap", "my-app"]);
    assert!(!out.status.success());
    assert!(stderr_of(&out).contains("Stopped execution per user request."));

    let logged = env.logged();
    assert!(logged.contains(&"git push heroku master".to_string()));
    assert!(!logged.iter().any(|line| line.contains("syncdb")));
}

#[test]
fn yes_flag_tolerates_failed_addons() {
    let env = TestEnv::new();
    env.write_config(CONFIG);
    env.fake_cli("heroku", &["addons:add"]);
    env.fake_cli("git", &[]);

    let out = env.skiff(&["--yes", "bootstrap", "my-app"]);
    assert!(out.status.success(), "stderr: {}", stderr_of(&out));

    // Both addon installs failed and were tolerated; the pipeline
    // still reached config vars and the database steps.
    let logged = env.logged();
    assert!(logged.contains(&"heroku addons:add x:plan1".to_string()));
    assert!(logged.contains(&"heroku addons:add y:plan2".to_string()));
    assert!(logged.contains(&"heroku config:add A=1".to_string()));
    assert!(logged
        .contains(&"heroku run python manage.py syncdb --noinput".to_string()));
}

#[test]
fn unguarded_step_failure_fails_even_with_yes() {
    let env = TestEnv::new();
    env.write_config(CONFIG);
    env.fake_cli("heroku", &["syncdb"]);
    env.fake_cli("git", &[]);

    let out = env.skiff(&["--yes", "bootstrap", "my-app"]);
    assert!(!out.status.success());
    assert!(stderr_of(&out).contains("exited with status"));

    // The chain stops at the failed step.
    let logged = env.logged();
    assert!(!logged.iter().any(|line| line.contains("migrate")));
}

#[test]
fn malformed_config_is_an_error() {
    let env = TestEnv::new();
    env.write_config("addons = not-an-array");
    env.fake_cli("heroku", &[]);

    let out = env.skiff(&["bootstrap"]);
    assert!(!out.status.success());
    assert!(stderr_of(&out).contains("invalid config"));
    assert!(env.logged().is_empty());
}
