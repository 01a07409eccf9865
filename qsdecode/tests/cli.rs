use std::io::Write;
use std::process::{Command, Output, Stdio};

fn qsdecode(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_qsdecode"))
        .args(args)
        .env_remove("QSDECODE_PREFIX")
        .env_remove("QSDECODE_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|err| panic!("failed to spawn qsdecode: {err}"));

    let mut pipe = child.stdin.take().expect("stdin is piped");
    if !stdin.is_empty() {
        pipe.write_all(stdin).expect("write stdin");
    }
    drop(pipe);

    child.wait_with_output().expect("wait for qsdecode")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

#[test]
fn given_string_argument_when_decoding_then_prints_field_lines() {
    let output = qsdecode(&["-s", "field1=value1&field2=value2"], b"");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "field1=\"value1\"\nfield2=\"value2\"\n");
}

#[test]
fn given_stdin_flag_when_decoding_then_reads_standard_input() {
    let output = qsdecode(&["-i"], b"v=say%20%22hi%22&a.b=1");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "v=\"say \\\"hi\\\"\"\na_b=\"1\"\n");
}

#[test]
fn given_empty_string_when_decoding_then_prints_nothing() {
    let output = qsdecode(&["-s", ""], b"");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn given_orphan_value_when_decoding_then_it_is_dropped() {
    let output = qsdecode(&["-s", "=orphan&ok=1"], b"");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "ok=\"1\"\n");
}

#[test]
fn given_prefix_after_source_when_decoding_then_prefix_still_applies() {
    let output = qsdecode(&["-s", "a=1&b", "-p", "QS_"], b"");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "QS_a=\"1\"\nQS_b\n");
}

#[test]
fn given_prefix_env_when_decoding_then_prefix_applies() {
    let output = Command::new(env!("CARGO_BIN_EXE_qsdecode"))
        .args(["-s", "a=1"])
        .env("QSDECODE_PREFIX", "ENV_")
        .output()
        .expect("run qsdecode");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "ENV_a=\"1\"\n");
}

#[test]
fn given_split_lines_when_reading_echo_output_then_newline_ends_value() {
    let output = qsdecode(&["-i", "-l"], b"a=1&b=2\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "a=\"1\"\nb=\"2\"\n");
}

#[test]
fn given_echoed_stdin_without_split_lines_when_decoding_then_newline_stays_in_value() {
    let output = qsdecode(&["-i"], b"a=1\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "a=\"1\n\"\n");
}

#[test]
fn given_no_source_when_running_then_fails_with_usage() {
    let output = qsdecode(&[], b"");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

#[test]
fn given_two_sources_when_running_then_fails_without_output() {
    let output = qsdecode(&["-i", "-s", "a=1"], b"");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot be used with"), "stderr: {stderr}");
}
