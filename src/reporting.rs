//! # Reporting Module / 报告模块
//!
//! This module handles test result reporting for Unit Runner,
//! including console output, HTML reports and JSON reports.
//!
//! 此模块处理 Unit Runner 的测试结果报告，
//! 包括控制台输出、HTML 报告和 JSON 报告。

pub mod console;
pub mod html;
pub mod json;
