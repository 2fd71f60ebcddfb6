// modloader: CLI Mod Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{CLEAR_SCREEN, Console};

fn render(styled: bool, write: impl FnOnce(&mut Console<'_>)) -> String {
    let mut buffer = Vec::new();
    let mut console = Console::new(&mut buffer, styled);
    write(&mut console);
    String::from_utf8(buffer).unwrap()
}

#[test]
fn test_unstyled_output_is_verbatim() {
    let output = render(false, |console| {
        console.success("Module greetings.so loaded").unwrap();
        console.error("Module not found").unwrap();
        console.warning("Module greetings.so unloaded").unwrap();
        console.println("plain").unwrap();
    });

    insta::assert_snapshot!(output, @r"
    Module greetings.so loaded
    Module not found
    Module greetings.so unloaded
    plain
    ");
}

#[test]
fn test_styled_output_wraps_in_ansi() {
    let output = render(true, |console| console.error("boom").unwrap());

    assert!(output.starts_with('\u{1b}'), "expected escape prefix: {output:?}");
    assert!(output.contains("boom"));
    assert!(output.trim_end().ends_with("\u{1b}[0m"), "expected reset suffix: {output:?}");
}

#[test]
fn test_clear_writes_clear_sequence() {
    let output = render(false, |console| console.clear().unwrap());
    assert_eq!(output, CLEAR_SCREEN);
}

#[test]
fn test_is_styled() {
    let mut sink = Vec::new();
    assert!(Console::new(&mut sink, true).is_styled());
    assert!(!Console::new(&mut sink, false).is_styled());
}
