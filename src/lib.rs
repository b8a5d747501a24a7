//! # Unit Runner Library / Unit Runner 库
//!
//! This library provides the core functionality of Unit Runner,
//! a lightweight, marker-driven unit test harness. Cases are registered
//! into a session, executed strictly in order, checked through a
//! three-tier assertion evaluator and classified into a fixed outcome
//! taxonomy for reporting.
//!
//! 此库为 Unit Runner 提供核心功能，
//! 这是一个轻量级的、标记驱动的单元测试执行器。测试用例注册到会话中，
//! 严格按顺序执行，通过三级断言求值器进行检查，
//! 并被归类到固定的结果分类中以供报告。
//!
//! ## Modules / 模块
//!
//! - `core` - Case model, queue, markers, assertions and the execution engine
//! - `infra` - Infrastructure services like duration decomposition and i18n
//! - `reporting` - Console, HTML and JSON result reporting
//! - `cli` - Command-line argument parsing
//!
//! - `core` - 用例模型、队列、标记、断言和执行引擎
//! - `infra` - 基础设施服务，如时长分解和国际化
//! - `reporting` - 控制台、HTML 和 JSON 结果报告
//! - `cli` - 命令行参数解析
//!
//! ## Example / 示例
//!
//! ```no_run
//! use unit_runner::{TestEnv, TestCase, test_expect};
//!
//! let mut env = TestEnv::with_defaults();
//! let case = TestCase::new("math_still_works", |ctx| {
//!     test_expect!(ctx, 2 + 2 == 4, "addition holds");
//! });
//! env.add(case, None);
//! let _ = env.run();
//! std::process::exit(env.summarize());
//! ```

pub mod core;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items
pub use core::assertion::{AbortReason, AssertKind, AssertionContext, CaseContext};
pub use core::config::HarnessConfig;
pub use core::execution::{ABORT_STATUS, RunAborted, RunSettings, TestEnv};
pub use core::models::{CaseRecord, Fixture, Mark, Outcome, RuleFlags, RunStats, Tag, TestCase};
pub use core::queue::TestQueue;

/// Initializes the harness's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the harness's console output. It attempts to match the full
/// locale (e.g., "zh-CN"), then just the language code (e.g., "en"), and
/// finally falls back to the default language ("en").
pub fn init() {
    // Detect system locale and set it for i18n.
    // Fallback to "en" if detection fails.
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    // Try to match the full locale first (e.g., "zh-CN")
    // Then try to match the language part only (e.g., "en" from "en-US")
    // Finally, fall back to "en"
    let lang = if available_locales.contains(&locale.as_str()) {
        &locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
