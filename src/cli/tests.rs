// modloader: CLI Mod Loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use crate::cli::try_parse_from;
use crate::logging::LogLevel;

#[test]
fn test_parse_no_args() {
    let cli = try_parse_from(["modloader"]).unwrap();

    assert!(cli.configs.is_empty());
    assert!(cli.preload.is_empty());
    assert!(!cli.no_color);
    assert!(!cli.show_config);
    assert_eq!(cli.log_level, None);
}

#[test]
fn test_parse_all_options() {
    let cli = try_parse_from([
        "modloader",
        "-c",
        "a.yml",
        "--config",
        "b.yml",
        "-p",
        "/opt/mods",
        "--prompt",
        "> ",
        "--no-color",
        "-l",
        "4",
        "--log-file",
        "ml.log",
        "greetings.so",
        "/abs/other.so",
    ])
    .unwrap();

    assert_eq!(cli.configs, [PathBuf::from("a.yml"), PathBuf::from("b.yml")]);
    assert_eq!(cli.plugins_home, Some(PathBuf::from("/opt/mods")));
    assert_eq!(cli.prompt.as_deref(), Some("> "));
    assert!(cli.no_color);
    assert_eq!(cli.log_level, Some(4));
    assert_eq!(cli.log_file, Some(PathBuf::from("ml.log")));
    assert_eq!(cli.preload, ["greetings.so", "/abs/other.so"]);
}

#[test]
fn test_log_level_out_of_range_rejected() {
    assert!(try_parse_from(["modloader", "-l", "6"]).is_err());
}

#[test]
fn test_log_config_from_cli() {
    let cli = try_parse_from(["modloader", "-l", "5", "--no-color", "--log-file", "x.log"]).unwrap();
    let config = cli.log_config();

    assert_eq!(config.console_level(), LogLevel::TRACE);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert_eq!(config.log_file(), Some("x.log"));
    assert!(!config.ansi());
}

#[test]
fn test_log_config_defaults_to_warn() {
    let cli = try_parse_from(["modloader"]).unwrap();
    let config = cli.log_config();

    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::DEBUG);
}

#[test]
fn test_config_loader_applies_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("extra.yml");
    std::fs::write(&file, "pluginshome: /from/file\nshell:\n  prompt: \"file> \"\n").unwrap();

    let cli = try_parse_from([
        "modloader".to_string(),
        "--no-default-configs".to_string(),
        "-c".to_string(),
        file.display().to_string(),
        "--plugins-home".to_string(),
        "/from/cli".to_string(),
        "--no-color".to_string(),
    ])
    .unwrap();

    let config = cli.config_loader().unwrap().build().unwrap();
    assert_eq!(config.plugins_home, PathBuf::from("/from/cli"));
    assert_eq!(config.shell.prompt, "file> ");
    assert!(!config.shell.color);
}
