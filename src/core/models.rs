//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the harness.
//! It includes the test case record, behavioral markers and tags, the
//! per-run rule flags and counters, and the outcome taxonomy used for
//! reporting.
//!
//! 此模块定义了整个执行器中使用的核心数据结构。
//! 它包括测试用例记录、行为标记和标签、每次运行的规则标志和计数器，
//! 以及用于报告的结果分类。

use crate::core::assertion::CaseContext;
use crate::infra::t;
use crate::infra::timer::{self, TimerDetail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// A behavioral marker attached to a test case.
/// Markers drive run-time control flow: a `Skip` case never executes its
/// body, a `Fail` case inverts assertion polarity for scoring, and so on.
/// `Plain` is the unmarked default and is distinct from the applyable
/// `none` marker.
///
/// 附加到测试用例上的行为标记。
/// 标记驱动运行时的控制流：`Skip` 用例不会执行其主体，
/// `Fail` 用例在计分时反转断言极性，等等。
/// `Plain` 是未标记的默认值，与可应用的 `none` 标记不同。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    /// The unmarked default state of a freshly created case.
    /// 新创建用例的未标记默认状态。
    #[default]
    Plain,
    /// Explicitly marked as carrying no feature behavior.
    /// 明确标记为不带任何特性行为。
    None,
    /// The case body must not be executed this run.
    /// 本次运行不得执行该用例主体。
    Skip,
    /// An intentionally empty case, kept as a placeholder.
    /// 有意为空的用例，作为占位符保留。
    Ghost,
    /// The case is expected to raise an error condition.
    /// 预期该用例会引发错误情况。
    Error,
    /// The case is expected to fail; assertion polarity is inverted.
    /// 预期该用例会失败；断言极性被反转。
    Fail,
    /// The case is singled out for a focused run.
    /// 该用例被单独挑出以进行聚焦运行。
    Only,
}

impl Mark {
    /// Parses an applyable marker name. `Plain` is not a marker a user can
    /// apply, so it is never returned here.
    pub fn parse(name: &str) -> Option<Mark> {
        match name {
            "none" => Some(Mark::None),
            "skip" => Some(Mark::Skip),
            "ghost" => Some(Mark::Ghost),
            "error" => Some(Mark::Error),
            "fail" => Some(Mark::Fail),
            "only" => Some(Mark::Only),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::Plain => "plain",
            Mark::None => "none",
            Mark::Skip => "skip",
            Mark::Ghost => "ghost",
            Mark::Error => "error",
            Mark::Fail => "fail",
            Mark::Only => "only",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A descriptive tag from the fixed vocabulary. Tags never influence
/// execution; they are carried for filtering and reporting by callers.
///
/// 来自固定词汇表的描述性标签。标签从不影响执行；
/// 它们被保留下来供调用方进行过滤和报告。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Fast,
    Slow,
    Bug,
    Feature,
    Security,
    Performance,
    Stress,
    Regression,
    Compatibility,
    Usability,
    Robustness,
    #[serde(rename = "corner case")]
    CornerCase,
}

impl Tag {
    pub fn parse(name: &str) -> Option<Tag> {
        match name {
            "fast" => Some(Tag::Fast),
            "slow" => Some(Tag::Slow),
            "bug" => Some(Tag::Bug),
            "feature" => Some(Tag::Feature),
            "security" => Some(Tag::Security),
            "performance" => Some(Tag::Performance),
            "stress" => Some(Tag::Stress),
            "regression" => Some(Tag::Regression),
            "compatibility" => Some(Tag::Compatibility),
            "usability" => Some(Tag::Usability),
            "robustness" => Some(Tag::Robustness),
            "corner case" => Some(Tag::CornerCase),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Fast => "fast",
            Tag::Slow => "slow",
            Tag::Bug => "bug",
            Tag::Feature => "feature",
            Tag::Security => "security",
            Tag::Performance => "performance",
            Tag::Stress => "stress",
            Tag::Regression => "regression",
            Tag::Compatibility => "compatibility",
            Tag::Usability => "usability",
            Tag::Robustness => "robustness",
            Tag::CornerCase => "corner case",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The final classification of a single completed case.
/// Exactly one of these buckets is chosen by the scoreboard.
///
/// 单个已完成用例的最终分类。
/// 记分板为每个用例恰好选择其中一个分类。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// At least one assertion fired and the expectation held.
    /// 至少触发了一个断言，并且预期成立。
    Passed,
    /// The expectation did not hold.
    /// 预期不成立。
    Failed,
    /// The run-wide skip rule was armed when the case completed.
    /// 用例完成时运行级跳过规则处于激活状态。
    Skipped,
    /// The run-wide timeout rule was armed when the case completed.
    /// 用例完成时运行级超时规则处于激活状态。
    TimedOut,
    /// The body fired no assertions at all.
    /// 用例主体完全没有触发断言。
    Empty,
}

impl Outcome {
    /// Gets the status of the outcome as a localized string for display.
    /// 以字符串形式获取结果的状态以供显示。
    pub fn status_str(&self, locale: &str) -> String {
        match self {
            Outcome::Passed => t!("report.status_passed", locale = locale).to_string(),
            Outcome::Failed => t!("report.status_failed", locale = locale).to_string(),
            Outcome::Skipped => t!("report.status_skipped", locale = locale).to_string(),
            Outcome::TimedOut => t!("report.status_timeout", locale = locale).to_string(),
            Outcome::Empty => t!("report.status_empty", locale = locale).to_string(),
        }
    }

    /// Gets the appropriate CSS class for the outcome in HTML reports.
    pub fn status_class(&self) -> &'static str {
        match self {
            Outcome::Passed => "status-Passed",
            Outcome::Failed => "status-Failed",
            Outcome::Skipped => "status-Skipped",
            Outcome::TimedOut => "status-Timeout",
            Outcome::Empty => "status-Empty",
        }
    }
}

/// A record of one completed case, kept for the report writers.
/// 一条已完成用例的记录，保留给报告生成器使用。
#[derive(Debug, Clone, Serialize)]
pub struct CaseRecord {
    pub name: String,
    pub mark: Mark,
    pub outcome: Outcome,
}

/// An optional setup/teardown pair attached to a case at registration.
/// Setup runs before the body, teardown after it.
///
/// 注册时附加到用例上的可选 setup/teardown 组合。
/// setup 在主体之前运行，teardown 在其之后运行。
#[derive(Debug, Clone, Copy, Default)]
pub struct Fixture {
    pub setup: Option<fn()>,
    pub teardown: Option<fn()>,
}

/// The body of a test case. The context carries the assertion surface.
pub type TestBody = Box<dyn Fn(&mut CaseContext)>;

/// One registered unit of test work: a named body plus its metadata.
/// A case belongs to exactly one [`crate::core::queue::TestQueue`] at a
/// time; marker, tag and priority are only mutated before the run begins.
///
/// 一个已注册的测试工作单元：带名称的主体及其元数据。
/// 一个用例同一时间只属于一个 [`crate::core::queue::TestQueue`]；
/// 标记、标签和优先级只在运行开始前被修改。
pub struct TestCase {
    /// The unique name for the case, used for identification in output.
    /// 用例的唯一名称，用于在输出中进行识别。
    pub name: String,
    /// The behavioral marker currently applied to this case.
    /// 当前应用于此用例的行为标记。
    pub mark: Mark,
    /// The descriptive tag currently applied to this case, if any.
    /// 当前应用于此用例的描述性标签（如果有）。
    pub tag: Option<Tag>,
    /// Informational priority in `[0, 100]`. Never affects run order.
    /// `[0, 100]` 范围内的信息性优先级。从不影响运行顺序。
    pub priority: u8,
    /// The setup/teardown pair attached at registration.
    /// 注册时附加的 setup/teardown 组合。
    pub fixture: Fixture,
    body: TestBody,
}

impl TestCase {
    /// Creates a new unmarked case with the "normal" priority level.
    pub fn new(name: impl Into<String>, body: impl Fn(&mut CaseContext) + 'static) -> Self {
        TestCase {
            name: name.into(),
            mark: Mark::default(),
            tag: None,
            priority: 50,
            fixture: Fixture::default(),
            body: Box::new(body),
        }
    }

    pub(crate) fn run_body(&self, ctx: &mut CaseContext) {
        (self.body)(ctx)
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("mark", &self.mark)
            .field("tag", &self.tag)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// The transient rule flags of a run. `should_pass` tracks the current
/// expectation and is reset at every case start; `skipped` and `timeout`
/// stay armed until the scoreboard consumes them; `error` is reserved for
/// the error marker path.
///
/// 一次运行的瞬态规则标志。`should_pass` 跟踪当前预期并在每个用例开始时
/// 重置；`skipped` 和 `timeout` 保持激活直到记分板消费它们；
/// `error` 保留给 error 标记路径使用。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleFlags {
    pub should_pass: bool,
    pub skipped: bool,
    pub timeout: bool,
    pub error: bool,
}

impl Default for RuleFlags {
    fn default() -> Self {
        RuleFlags {
            should_pass: true,
            skipped: false,
            timeout: false,
            error: false,
        }
    }
}

/// The aggregate counters of a run. One bucket is incremented per scored
/// case; `untested` always equals registered minus scored cases.
///
/// 一次运行的聚合计数器。每个已计分用例使一个分类计数递增；
/// `untested` 始终等于已注册减去已计分的用例数。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub expected_passed: u32,
    pub expected_failed: u32,
    pub unexpected_passed: u32,
    pub unexpected_failed: u32,
    pub expected_skipped: u32,
    pub expected_empty: u32,
    pub expected_timeout: u32,
    pub total: u32,
    pub untested: u32,
}

impl RunStats {
    /// The process failure signal: the sum of every bucket that should make
    /// a run exit non-zero. Zero means a fully clean run.
    ///
    /// 进程失败信号：所有应使运行以非零状态退出的分类之和。
    /// 零表示一次完全干净的运行。
    pub fn failure_signal(&self) -> u32 {
        self.expected_failed
            + self.unexpected_failed
            + self.unexpected_passed
            + self.expected_timeout
            + self.untested
    }
}

/// Wall-clock timing for one full run, written once around the whole run.
/// 一次完整运行的挂钟计时，在整次运行前后各写入一次。
#[derive(Debug, Clone, Copy, Default)]
pub struct RunTimer {
    start: Option<Instant>,
    pub elapsed: Duration,
    pub detail: TimerDetail,
}

impl RunTimer {
    pub(crate) fn begin(&mut self) {
        self.start = Some(Instant::now());
    }

    pub(crate) fn finish(&mut self) {
        if let Some(start) = self.start {
            self.elapsed = start.elapsed();
            self.detail = timer::decompose(self.elapsed);
        }
    }
}
