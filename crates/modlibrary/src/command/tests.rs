// modloader: CLI Mod Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{CommandError, CommandGroup, Invocation};
use crate::console::Console;

fn argv(words: &[&str]) -> Vec<String> {
    words.iter().map(ToString::to_string).collect()
}

#[test]
fn test_invocation_rejects_empty_argv() {
    assert!(Invocation::new(Vec::new()).is_none());
}

#[test]
fn test_invocation_splits_name_and_args() {
    let inv = Invocation::new(argv(&["modprobe", "greetings.so"])).unwrap();

    assert_eq!(inv.name(), "modprobe");
    assert_eq!(inv.args(), ["greetings.so"]);
    assert_eq!(inv.argv().len(), 2);
    assert_eq!(inv.len(), 2);
    assert!(!inv.is_empty());
}

#[test]
fn test_invocation_with_args() {
    let inv = Invocation::with_args("rmmod", ["greetings.so"]);
    assert_eq!(inv.argv(), ["rmmod", "greetings.so"]);
    assert_eq!(Invocation::with_args("lsmod", Vec::<String>::new()).len(), 1);
}

#[test]
fn test_invocation_without_args() {
    let inv = Invocation::new(argv(&["lsmod"])).unwrap();
    assert!(inv.args().is_empty());
}

#[test]
fn test_group_names_sorted() {
    let group = CommandGroup::new("tools")
        .command("zeta", |_, _| Ok(()))
        .command("alpha", |_, _| Ok(()))
        .command("mid", |_, _| Ok(()));

    assert_eq!(group.name(), "tools");
    assert_eq!(group.names().collect::<Vec<_>>(), ["alpha", "mid", "zeta"]);
    assert_eq!(group.len(), 3);
}

#[test]
fn test_group_later_command_replaces_earlier() {
    let group = CommandGroup::new("dup")
        .command("same", |_, _| Err(CommandError::failed("first")))
        .command("same", |_, _| Ok(()));

    assert_eq!(group.len(), 1);

    let mut sink = Vec::new();
    let mut console = Console::new(&mut sink, false);
    let inv = Invocation::new(argv(&["same"])).unwrap();
    assert!(group.get("same").unwrap()(&inv, &mut console).is_ok());
}

#[test]
fn test_handler_writes_to_console() {
    let group = CommandGroup::new("echo").command("echo", |inv, console| {
        console.println(inv.args().join(" "))?;
        Ok(())
    });

    let mut sink = Vec::new();
    let mut console = Console::new(&mut sink, false);
    let inv = Invocation::new(argv(&["echo", "a", "b"])).unwrap();
    group.get("echo").unwrap()(&inv, &mut console).unwrap();

    assert_eq!(String::from_utf8(sink).unwrap(), "a b\n");
}

#[test]
fn test_command_error_display() {
    let errors = [
        CommandError::InvalidArguments.to_string(),
        CommandError::failed("disk on fire").to_string(),
    ];
    assert_eq!(errors, ["invalid arguments", "disk on fire"]);
}

#[test]
fn test_group_debug_lists_command_names() {
    let group = CommandGroup::new("g").command("x", |_, _| Ok(()));
    assert_eq!(format!("{group:?}"), r#"CommandGroup { name: "g", commands: ["x"] }"#);
}
