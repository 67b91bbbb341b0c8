use assert_cmd::Command;
use wasi_error_codes::{ERROR_CODE_COUNT, TABLE_RULE, TABLE_TITLE, name_of};

fn run() -> String {
    let mut cmd = Command::cargo_bin("error-codes").unwrap();
    let output = cmd.assert().success().code(0).get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn prints_header_and_full_table() {
    let stdout = run();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), ERROR_CODE_COUNT + 2);
    assert_eq!(lines[0], TABLE_TITLE);
    assert_eq!(lines[1], TABLE_RULE);

    for (i, line) in lines[2..].iter().enumerate() {
        assert_eq!(*line, format!("{:2}: {}", i, name_of(i as i64)));
    }
}

#[test]
fn output_matches_expected_text() {
    let mut expected = String::from(
        "Error Codes and their Numeric Values:\n====================================\n",
    );
    for (i, name) in [
        "access",
        "would-block",
        "already",
        "bad-descriptor",
        "busy",
        "deadlock",
        "quota",
        "exist",
        "file-too-large",
        "illegal-byte-sequence",
        "in-progress",
        "interrupted",
        "invalid",
        "io",
        "is-directory",
        "loop",
        "too-many-links",
        "message-size",
        "name-too-long",
        "no-device",
        "no-entry",
        "no-lock",
        "insufficient-memory",
        "insufficient-space",
        "not-directory",
        "not-empty",
        "not-recoverable",
        "unsupported",
        "no-tty",
        "no-such-device",
        "overflow",
        "not-permitted",
        "pipe",
        "read-only",
        "invalid-seek",
        "text-file-busy",
        "cross-device",
    ]
    .iter()
    .enumerate()
    {
        expected.push_str(&format!("{i:2}: {name}\n"));
    }

    let mut cmd = Command::cargo_bin("error-codes").unwrap();
    cmd.assert().success().stdout(expected).stderr("");
}

#[test]
fn arguments_are_ignored() {
    let mut cmd = Command::cargo_bin("error-codes").unwrap();
    let assert = cmd.arg("--help").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();

    assert_eq!(stdout, run());
}
