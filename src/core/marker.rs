//! # Marker Resolver Module / 标记解析模块
//!
//! Applies named markers, tags and priorities to test cases before a run
//! begins. Markers are the only application that also mutates the
//! run-wide rule flags; tags and priorities only touch the case record.
//!
//! 在运行开始前将具名标记、标签和优先级应用到测试用例上。
//! 标记是唯一同时修改运行级规则标志的应用；
//! 标签和优先级只影响用例记录本身。

use crate::core::models::{Mark, RuleFlags, Tag, TestCase};
use crate::reporting::console;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Named priority levels accepted by [`apply_priority`].
/// [`apply_priority`] 接受的具名优先级级别。
static PRIORITY_LEVELS: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    HashMap::from([
        ("lowest", 0),
        ("very low", 10),
        ("low", 20),
        ("medium", 50),
        ("normal", 50),
        ("high", 70),
        ("very high", 90),
        ("urgent", 95),
        ("highest", 100),
        ("critical", 100),
    ])
});

/// Applies a named marker to a case, including its run-wide flag effect:
/// `skip` arms the skip rule, `error` and `fail` clear the current pass
/// expectation. An absent marker is a no-op; an unrecognized one is
/// reported through the console and leaves both the case and the flags
/// unchanged.
///
/// 将具名标记应用到用例上，包括其运行级标志效果：
/// `skip` 激活跳过规则，`error` 和 `fail` 清除当前的通过预期。
/// 缺失的标记是无操作；无法识别的标记通过控制台报告，
/// 并使用例和标志都保持不变。
pub fn apply_mark(case: &mut TestCase, rule: &mut RuleFlags, mark: Option<&str>, locale: &str) {
    let Some(name) = mark else {
        return;
    };

    match Mark::parse(name) {
        Some(mark @ Mark::Skip) => {
            case.mark = mark;
            rule.skipped = true;
        }
        Some(mark @ (Mark::Error | Mark::Fail)) => {
            case.mark = mark;
            rule.should_pass = false;
        }
        Some(mark) => case.mark = mark,
        None => console::invalid_marker(name, locale),
    }
}

/// Applies a tag from the fixed vocabulary to a case. Tags never touch the
/// rule flags. An absent tag is a no-op; an unrecognized one is reported
/// and ignored.
///
/// 将固定词汇表中的标签应用到用例上。标签从不影响规则标志。
/// 缺失的标签是无操作；无法识别的标签会被报告并忽略。
pub fn apply_tag(case: &mut TestCase, tag: Option<&str>, locale: &str) {
    let Some(name) = tag else {
        return;
    };

    match Tag::parse(name) {
        Some(tag) => case.tag = Some(tag),
        None => console::invalid_tag(name, locale),
    }
}

/// Applies a priority to a case, either as a named level or a literal
/// integer in `[0, 100]`. Out-of-range or unparseable input is silently
/// ignored; priority is informational metadata and never reorders the run.
///
/// 将优先级应用到用例上，可以是具名级别，也可以是 `[0, 100]` 范围内的
/// 字面整数。超出范围或无法解析的输入会被静默忽略；
/// 优先级是信息性元数据，从不改变运行顺序。
pub fn apply_priority(case: &mut TestCase, priority: Option<&str>) {
    let Some(name) = priority else {
        return;
    };

    if let Some(level) = PRIORITY_LEVELS.get(name) {
        case.priority = *level;
        return;
    }

    if let Ok(value) = name.parse::<i64>() {
        if (0..=100).contains(&value) {
            case.priority = value as u8;
        }
    }
}
