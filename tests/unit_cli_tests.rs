//! # CLI Module Unit Tests / CLI 模块单元测试
//!
//! Unit tests for the `cli.rs` argument surface. Arguments are passed the
//! way a process would receive them, binary name first.
//!
//! `cli.rs` 参数接口的单元测试。参数按进程接收的方式传入，
//! 二进制名称在最前。

use std::path::PathBuf;
use unit_runner::cli::parse_args;

fn args(list: &[&str]) -> Vec<String> {
    let mut full = vec!["unit-runner".to_string()];
    full.extend(list.iter().map(|s| s.to_string()));
    full
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_no_arguments_yields_defaults() {
        let options = parse_args(args(&[])).unwrap();

        assert!(options.lang.is_none());
        assert!(options.config.is_none());
        assert!(options.html.is_none());
        assert!(options.json.is_none());
        assert!(!options.no_color);
    }

    #[test]
    fn test_language_and_color_flags() {
        let options = parse_args(args(&["--lang", "zh-CN", "--no-color"])).unwrap();

        assert_eq!(options.lang.as_deref(), Some("zh-CN"));
        assert!(options.no_color);
    }

    #[test]
    fn test_config_path_long_and_short() {
        let long = parse_args(args(&["--config", "Custom.toml"])).unwrap();
        let short = parse_args(args(&["-c", "Custom.toml"])).unwrap();

        assert_eq!(long.config, Some(PathBuf::from("Custom.toml")));
        assert_eq!(short.config, Some(PathBuf::from("Custom.toml")));
    }

    #[test]
    fn test_report_paths() {
        let options =
            parse_args(args(&["--html", "out/report.html", "--json", "out/report.json"])).unwrap();

        assert_eq!(options.html, Some(PathBuf::from("out/report.html")));
        assert_eq!(options.json, Some(PathBuf::from("out/report.json")));
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        assert!(parse_args(args(&["--jobs", "4"])).is_err());
    }

    #[test]
    fn test_missing_value_is_an_error() {
        assert!(parse_args(args(&["--config"])).is_err());
    }
}
