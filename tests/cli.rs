//! Runs the `production` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use bakery_planner::report::{FAILURE_MESSAGE, SUCCESS_MESSAGE};

fn production(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_production"))
        .args(args)
        .output()
        .expect("failed to run production")
}

fn interactive(script: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_production"))
        .args(["--interactive", "--no-plot"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run production");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(script.as_bytes())
        .expect("failed to write the script");
    child.wait_with_output().expect("production did not finish")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn help_lists_the_fields() {
    let output = production(&["--help"]);
    assert!(output.status.success());
    let text = stdout(&output);
    for flag in [
        "--capacity",
        "--budget",
        "--cost-sweet",
        "--cost-plain",
        "--min-sweet",
        "--min-plain",
        "--no-plot",
        "--interactive",
        "--gui",
    ] {
        assert!(text.contains(flag), "{flag} missing from:\n{text}");
    }
}

#[test]
fn default_inputs_succeed() {
    let output = production(&["--no-plot"]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.starts_with(SUCCESS_MESSAGE), "{text}");
    assert!(text.contains("Sweet bread: 300 units"), "{text}");
    assert!(text.contains("Plain bread: 400 units"), "{text}");
    assert!(text.contains("Total cost: Rp1,200,000"), "{text}");
}

#[test]
fn infeasible_inputs_exit_with_failure() {
    let output = production(&["--no-plot", "--budget", "1000000"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output).trim_end(), FAILURE_MESSAGE);
}

#[test]
fn out_of_range_flags_are_rejected_before_solving() {
    let output = production(&["--no-plot", "--capacity", "0"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("capacity must be at least 1"));

    let output = production(&["--no-plot", "--cost-sweet", "1e20"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("cost-sweet must be at most"));

    let output = production(&["--no-plot", "--min-plain", "plenty"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("min-plain must be a number"));
}

#[test]
fn gui_and_interactive_are_exclusive() {
    let output = production(&["--gui", "--interactive"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let output = production(&["--no-plot", "--verbosity", "verbose"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("optimal plan found"));
    assert!(!stdout(&output).contains("optimal plan found"));
}

#[test]
fn interactive_script() {
    let output = interactive(
        "set min-sweet -5\n\
         set min-sweet 350\n\
         set min_plain 500\n\
         set budget 2000000\n\
         compute\n\
         reset\n\
         quit\n\
         compute\n",
    );
    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);

    assert!(text.contains("error: min-sweet must be at least 0, got -5"), "{text}");
    assert!(text.contains("Total cost: Rp1,450,000"), "{text}");
    // reset prints the defaults again
    assert!(text.matches("1800000").count() >= 2, "{text}");
    // nothing after quit runs
    assert_eq!(text.matches(SUCCESS_MESSAGE).count(), 1, "{text}");
}

#[test]
fn interactive_ends_at_end_of_input() {
    let output = interactive("set capacity 600\ncompute\n");
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains(FAILURE_MESSAGE));
}
