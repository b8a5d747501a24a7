//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Unit Runner,
//! including the case model, the test queue, marker resolution,
//! the assertion evaluator and the execution engine.
//!
//! 此模块包含 Unit Runner 的核心功能，
//! 包括用例模型、测试队列、标记解析、断言求值器和执行引擎。

pub mod models;
pub mod config;
pub mod queue;
pub mod marker;
pub mod assertion;
pub mod execution;

// Re-exports
pub use execution::TestEnv;
pub use models::TestCase;
pub use queue::TestQueue;
