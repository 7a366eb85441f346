#[path = "../common/mod.rs"]
mod common;

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn haconv(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_haconv"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn haconv");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin)
        .expect("write stdin");
    child.wait_with_output().expect("wait haconv")
}

#[test]
fn encode_from_stdin() {
    let out = haconv(&["-as"], common::fixtures::HELLO_WORLD);
    assert!(out.status.success());
    assert_eq!(out.stdout, common::fixtures::HELLO_WORLD_SPACED_HEX);
}

#[test]
fn decode_from_stdin_without_newline() {
    let out = haconv(&["-xn"], common::fixtures::HELLO_WORLD_HEX_INPUT);
    assert!(out.status.success());
    assert_eq!(out.stdout, common::fixtures::HELLO_WORLD);
}

#[test]
fn decode_from_file() -> anyhow::Result<()> {
    let path = common::fixtures::temp_path("decode.hex");
    std::fs::write(&path, b"0x48, 0x69")?;

    let out = haconv(&[path.to_str().expect("utf-8 temp path")], b"");
    std::fs::remove_file(&path)?;

    assert!(out.status.success());
    assert_eq!(out.stdout, b"Hi\n");
    Ok(())
}

#[test]
fn dash_reads_stdin() {
    let out = haconv(&["-"], b"41 42");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"AB\n");

    let out = haconv(&["-a", "-"], b"AB");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"4142\n");
}

#[test]
fn only_first_path_is_read() -> anyhow::Result<()> {
    let path = common::fixtures::temp_path("first.hex");
    std::fs::write(&path, b"4869")?;
    let missing = common::fixtures::temp_path("second.hex");

    let out = haconv(
        &[
            "-x",
            path.to_str().expect("utf-8 temp path"),
            missing.to_str().expect("utf-8 temp path"),
        ],
        b"",
    );
    std::fs::remove_file(&path)?;

    assert!(out.status.success());
    assert_eq!(out.stdout, b"Hi\n");
    Ok(())
}

#[test]
fn version_flag_is_unknown() {
    let out = haconv(&["-V"], b"");
    assert!(!out.status.success());
}

#[test]
fn pipe_roundtrip() {
    let bytes = common::fixtures::all_bytes();
    let hex = haconv(&["-a"], &bytes);
    let back = haconv(&["-n"], &hex.stdout);
    assert_eq!(back.stdout, bytes);
}

#[test]
fn missing_file_fails() {
    let path = common::fixtures::temp_path("missing.hex");
    let out = haconv(&[path.to_str().expect("utf-8 temp path")], b"");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error while opening file"));
}

#[test]
fn help_prints_usage_and_fails() {
    let out = haconv(&["-h"], b"");
    assert!(!out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("Examples"));
}

#[test]
fn unknown_flag_fails() {
    let out = haconv(&["-z"], b"");
    assert!(!out.status.success());
}
