//! # Report Integration Tests / 报告集成测试
//!
//! End-to-end tests of the HTML and JSON report writers, driven through a
//! real run and through the summary path that writes configured reports.
//!
//! HTML 和 JSON 报告生成器的端到端测试，通过真实运行以及写出已配置
//! 报告的摘要路径来驱动。

use std::fs;
use unit_runner::reporting::{html, json};
use unit_runner::{RunSettings, TestCase, TestEnv, test_expect};

fn env_with_reports(html: Option<std::path::PathBuf>, json: Option<std::path::PathBuf>) -> TestEnv {
    TestEnv::with_settings(RunSettings {
        color: false,
        html_report: html,
        json_report: json,
        ..RunSettings::default()
    })
}

fn run_mixed_cases(env: &mut TestEnv) {
    env.add(
        TestCase::new("passes", |ctx| {
            test_expect!(ctx, true);
        }),
        None,
    );
    env.add(
        TestCase::new("fails", |ctx| {
            test_expect!(ctx, false, "intended miss");
        }),
        None,
    );
    env.add(TestCase::new("empty_body", |_ctx| {}), None);
    env.run().unwrap();
}

#[cfg(test)]
mod html_tests {
    use super::*;

    #[test]
    fn test_html_report_contains_cases_and_statuses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");

        let mut env = env_with_reports(None, None);
        run_mixed_cases(&mut env);
        html::generate_html_report(env.records(), &env.stats, &path, "en").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("<title>Unit Runner Report</title>"));
        assert!(content.contains("passes"));
        assert!(content.contains("fails"));
        assert!(content.contains("status-Passed"));
        assert!(content.contains("status-Failed"));
        assert!(content.contains("status-Empty"));
    }

    #[test]
    fn test_html_report_escapes_case_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");

        let mut env = env_with_reports(None, None);
        env.add(
            TestCase::new("compares <a> & <b>", |ctx| {
                test_expect!(ctx, true);
            }),
            None,
        );
        env.run().unwrap();
        html::generate_html_report(env.records(), &env.stats, &path, "en").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("compares &lt;a&gt; &amp; &lt;b&gt;"));
        assert!(!content.contains("compares <a>"));
    }
}

#[cfg(test)]
mod json_tests {
    use super::*;

    #[test]
    fn test_json_report_carries_stats_and_cases() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        let mut env = env_with_reports(None, None);
        run_mixed_cases(&mut env);
        json::write_json_report(env.records(), &env.stats, &env.timer, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let report: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(report["stats"]["expected_passed"], 1);
        assert_eq!(report["stats"]["expected_failed"], 1);
        assert_eq!(report["stats"]["expected_empty"], 1);
        assert_eq!(report["failure_signal"], 1);
        assert_eq!(report["cases"][0]["name"], "passes");
        assert_eq!(report["cases"][0]["outcome"], "Passed");
        assert_eq!(report["cases"][0]["mark"], "plain");
        assert!(report["generated_at"].is_string());
    }
}

#[cfg(test)]
mod summary_tests {
    use super::*;

    #[test]
    fn test_summarize_writes_configured_reports() {
        let dir = tempfile::tempdir().unwrap();
        let html_path = dir.path().join("report.html");
        let json_path = dir.path().join("report.json");

        let mut env = env_with_reports(Some(html_path.clone()), Some(json_path.clone()));
        run_mixed_cases(&mut env);
        let signal = env.summarize();

        assert_eq!(signal, 1);
        assert!(html_path.exists());
        assert!(json_path.exists());
    }
}
