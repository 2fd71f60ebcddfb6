// modloader: CLI Mod Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use modlibrary::{CommandError, CommandGroup, CommandResult, Console, Invocation, ModRegistrar};

use super::{MODLOADER_DECLARATION, greetings};

fn run(line: &str) -> (CommandResult, String) {
    let argv = line.split_whitespace().map(ToString::to_string).collect();
    let inv = Invocation::new(argv).unwrap();
    let group = greetings();
    let handler = group.get(inv.name()).unwrap();

    let mut buffer = Vec::new();
    let result = handler(&inv, &mut Console::new(&mut buffer, false));
    (result, String::from_utf8(buffer).unwrap())
}

#[derive(Default)]
struct Collected(Vec<CommandGroup>);

impl ModRegistrar for Collected {
    fn register_group(&mut self, group: CommandGroup) {
        self.0.push(group);
    }
}

#[test]
fn test_declaration_registers_greetings() {
    assert!(MODLOADER_DECLARATION.is_compatible());

    let mut collected = Collected::default();
    (MODLOADER_DECLARATION.register)(&mut collected);

    assert_eq!(collected.0.len(), 1);
    assert_eq!(collected.0[0].name(), "greetings");
    assert_eq!(
        collected.0[0].names().collect::<Vec<_>>(),
        ["echo", "hello", "sum"]
    );
}

#[test]
fn test_hello_defaults_to_world() {
    let (result, output) = run("hello");
    assert!(result.is_ok());
    assert_eq!(output, "Hello, world!\n");
}

#[test]
fn test_hello_with_name() {
    let (_, output) = run("hello modder");
    assert_eq!(output, "Hello, modder!\n");
}

#[test]
fn test_echo_joins_arguments() {
    let (_, output) = run("echo one  two three");
    assert_eq!(output, "one two three\n");
}

#[test]
fn test_sum_adds_integers() {
    let (result, output) = run("sum 1 2 -4 10");
    assert!(result.is_ok());
    assert_eq!(output, "9\n");
}

#[test]
fn test_sum_rejects_non_numbers() {
    let (result, output) = run("sum 1 two");
    assert!(matches!(result, Err(CommandError::InvalidArguments)));
    assert!(output.is_empty());
}

#[test]
fn test_sum_requires_arguments() {
    let (result, _) = run("sum");
    assert!(matches!(result, Err(CommandError::InvalidArguments)));
}

#[test]
fn test_sum_overflow_fails() {
    let (result, _) = run(&format!("sum {} 1", i64::MAX));
    assert!(matches!(result, Err(CommandError::Failed(_))));
}
