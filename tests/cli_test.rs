/*
Copyright 2025 Connor Nolan

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

use std::fs;
use std::io::Write;
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lc3asm"))
}

#[test]
fn test_assemble_file_to_file_defaults_to_raw() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("prog.asm");
    let output = dir.path().join("prog.obj");
    fs::write(&input, ".ORIG x3000\nHALT TRAP x25\n.END\n").unwrap();

    let status = bin().arg(&input).arg("-o").arg(&output).status().unwrap();
    assert!(status.success());

    let bytes = fs::read(&output).unwrap();
    assert_eq!(bytes, vec![0x30, 0x00, 0xF0, 0x25]);
}

#[test]
fn test_symbols_mode_prints_sorted_dump() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("prog.asm");
    fs::write(&input, ".ORIG x3000\nA TRAP x25\nB TRAP x25\n.END\n").unwrap();

    let output = bin().arg(&input).arg("--symbols").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "A 0x3000\nB 0x3001\n");
}

#[test]
fn test_parse_failure_exits_nonzero_with_empty_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.asm");
    fs::write(&input, ".ORIG x3000\nBRpz LOOP\nLOOP TRAP x25\n.END\n").unwrap();

    let output = bin().arg(&input).output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_stdin_input_defaults_to_binascii_on_stdout() {
    let mut child = bin()
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b".ORIG x3000\nHALT TRAP x25\n.END\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "0011000000000000\n1111000000100101\n");
}
