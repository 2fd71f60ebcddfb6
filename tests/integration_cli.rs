// modloader: CLI Mod Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests running the `modloader` binary.

use std::io::{Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use tempfile::TempDir;

fn spawn_shell(home: &TempDir) -> Child {
    Command::new(env!("CARGO_BIN_EXE_modloader"))
        .args(["--no-default-configs", "--no-color", "--prompt", "$ "])
        .arg("--plugins-home")
        .arg(home.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap()
}

fn wait_with_timeout(child: &mut Child, timeout: Duration) -> Option<ExitStatus> {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if let Some(status) = child.try_wait().unwrap() {
            return Some(status);
        }
        std::thread::sleep(Duration::from_millis(50));
    }
    child.kill().ok();
    child.wait().ok();
    None
}

fn read_prompt(child: &mut Child) {
    let mut prompt = [0_u8; 2];
    child.stdout.as_mut().unwrap().read_exact(&mut prompt).unwrap();
    assert_eq!(&prompt, b"$ ");
}

#[test]
fn cli_exit_command_ends_process() {
    let home = tempfile::tempdir().unwrap();
    let mut child = spawn_shell(&home);

    child.stdin.as_mut().unwrap().write_all(b"lsmod\nexit\n").unwrap();

    let status = wait_with_timeout(&mut child, Duration::from_secs(10));
    assert!(status.is_some_and(|s| s.success()));

    let mut output = String::new();
    child.stdout.take().unwrap().read_to_string(&mut output).unwrap();
    assert_eq!(output, "$ No modules loaded\n$ Exiting...\n");
}

#[test]
#[cfg(unix)]
fn cli_interrupt_ends_process_with_stdin_open() {
    let home = tempfile::tempdir().unwrap();
    let mut child = spawn_shell(&home);

    read_prompt(&mut child);
    // Let the shell reach its select on input and the interrupt listener.
    std::thread::sleep(Duration::from_millis(300));

    let sent = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(sent.success());

    // stdin stays open: the process must not wait for another line.
    let status = wait_with_timeout(&mut child, Duration::from_secs(10));
    assert!(status.is_some_and(|s| s.success()), "status: {status:?}");

    let mut rest = String::new();
    child.stdout.take().unwrap().read_to_string(&mut rest).unwrap();
    assert_eq!(rest, "\n");
}
