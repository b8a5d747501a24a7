//! # Assertion Evaluator Module / 断言求值模块
//!
//! The three-tier assertion evaluator. Every assertion enters through one
//! unified entry point, [`CaseContext::assert_class`], which stamps the
//! per-assertion context and routes to the matching tier:
//!
//! - **Expect** is soft: a miss is recorded and the run continues.
//! - **Assert** is hard: a miss cuts the body short and aborts the run.
//! - **Assume** is soft but bounded: recorded misses draw down a per-run
//!   budget, and an exhausted budget aborts regardless of the expression.
//!
//! Under a case's expected-failure mode the polarity of every tier is
//! inverted: a false expression is the anticipated outcome and a true one
//! is the miss.
//!
//! 三级断言求值器。每个断言都通过统一入口
//! [`CaseContext::assert_class`] 进入，该入口填充每断言上下文并路由到
//! 匹配的级别：
//!
//! - **Expect** 是软断言：未命中会被记录，运行继续。
//! - **Assert** 是硬断言：未命中会截断用例主体并中止运行。
//! - **Assume** 是软但有界的断言：被记录的未命中会消耗每次运行的预算，
//!   预算耗尽后无论表达式如何都会中止。
//!
//! 在用例的预期失败模式下，每个级别的极性都被反转：
//! false 表达式是预期结果，true 表达式才是未命中。

use crate::core::models::RuleFlags;
use crate::reporting::console;
use std::ops::ControlFlow;

/// The strictness tier an assertion is evaluated under.
/// 断言求值所采用的严格级别。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertKind {
    Assume,
    Assert,
    Expect,
}

/// Why a run was cut short.
/// 运行被截断的原因。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// A hard (`Assert`) assertion missed.
    /// 一个硬断言（`Assert`）未命中。
    AssertionFailure,
    /// The per-run assumption budget was exhausted.
    /// 每次运行的假设预算已耗尽。
    AssumeBudget,
}

/// Per-assertion scratch record: the message and source location of the
/// most recent assertion, the case's declared expectation, and whether any
/// assertion fired at all this case. Reset at every case start, stamped by
/// every evaluator call, read by the scoreboard.
///
/// 每断言临时记录：最近一次断言的消息和源位置、用例声明的预期，
/// 以及本用例是否触发过任何断言。在每个用例开始时重置，
/// 由每次求值调用填充，由记分板读取。
#[derive(Debug, Clone, Default)]
pub struct AssertionContext {
    pub message: String,
    pub file: &'static str,
    pub line: u32,
    pub function: String,
    pub should_fail: bool,
    pub has_assert: bool,
}

/// The assertion surface handed to a running case body. It borrows the
/// run-wide rule flags and assumption counter for the duration of the case,
/// so every tier's side effects land directly in the environment.
///
/// 交给正在运行的用例主体的断言接口。它在用例执行期间借用运行级规则
/// 标志和假设计数器，因此每个级别的副作用都直接落入环境中。
pub struct CaseContext<'run> {
    info: AssertionContext,
    rule: &'run mut RuleFlags,
    assume_count: &'run mut u32,
    assume_max: u32,
    locale: String,
    abort: Option<AbortReason>,
}

impl<'run> CaseContext<'run> {
    pub(crate) fn new(
        function: String,
        should_fail: bool,
        rule: &'run mut RuleFlags,
        assume_count: &'run mut u32,
        assume_max: u32,
        locale: String,
    ) -> Self {
        CaseContext {
            info: AssertionContext {
                function,
                should_fail,
                ..AssertionContext::default()
            },
            rule,
            assume_count,
            assume_max,
            locale,
            abort: None,
        }
    }

    /// The unified assertion entry point. Stamps the context (location,
    /// message, `has_assert`) regardless of outcome, then routes to the
    /// tier evaluator. Returns `Break` when the body must stop immediately;
    /// the assertion macros turn that into an early return.
    ///
    /// 统一断言入口。无论结果如何都填充上下文（位置、消息、
    /// `has_assert`），然后路由到级别求值器。当主体必须立即停止时返回
    /// `Break`；断言宏会将其转换为提前返回。
    pub fn assert_class(
        &mut self,
        expression: bool,
        kind: AssertKind,
        message: impl Into<String>,
        file: &'static str,
        line: u32,
    ) -> ControlFlow<()> {
        self.info.message = message.into();
        self.info.file = file;
        self.info.line = line;
        self.info.has_assert = true;

        match kind {
            AssertKind::Assume => self.eval_assume(expression),
            AssertKind::Assert => self.eval_assert(expression),
            AssertKind::Expect => self.eval_expect(expression),
        }
    }

    fn eval_expect(&mut self, expression: bool) -> ControlFlow<()> {
        if self.info.should_fail {
            if expression {
                self.rule.should_pass = false;
                self.record();
            } else {
                self.rule.should_pass = true;
            }
        } else if !expression {
            self.rule.should_pass = false;
            self.record();
        }
        ControlFlow::Continue(())
    }

    fn eval_assert(&mut self, expression: bool) -> ControlFlow<()> {
        if self.info.should_fail {
            if expression {
                self.rule.should_pass = false;
                self.record();
                self.abort = Some(AbortReason::AssertionFailure);
                return ControlFlow::Break(());
            }
            self.rule.should_pass = true;
        } else if !expression {
            self.rule.should_pass = false;
            self.record();
            self.abort = Some(AbortReason::AssertionFailure);
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }

    fn eval_assume(&mut self, expression: bool) -> ControlFlow<()> {
        // Budget check comes first: once exhausted, the triggering
        // expression no longer matters.
        if *self.assume_count >= self.assume_max {
            self.abort = Some(AbortReason::AssumeBudget);
            return ControlFlow::Break(());
        }

        if self.info.should_fail {
            if expression {
                self.rule.should_pass = false;
                *self.assume_count += 1;
                self.record();
            } else {
                self.rule.should_pass = true;
            }
        } else if !expression {
            self.rule.should_pass = false;
            *self.assume_count += 1;
            self.record();
        }
        ControlFlow::Continue(())
    }

    fn record(&self) {
        console::asserted(&self.info, &self.locale);
    }

    /// The accumulated per-assertion context of this case.
    pub fn info(&self) -> &AssertionContext {
        &self.info
    }

    pub(crate) fn take_abort(&mut self) -> Option<AbortReason> {
        self.abort.take()
    }
}

/// Soft assertion: records a miss and keeps the body running.
/// The message defaults to the stringified expression.
///
/// 软断言：记录未命中并让主体继续运行。消息默认为表达式的字符串形式。
#[macro_export]
macro_rules! test_expect {
    ($ctx:expr, $cond:expr $(,)?) => {
        $crate::test_expect!($ctx, $cond, stringify!($cond))
    };
    ($ctx:expr, $cond:expr, $msg:expr $(,)?) => {
        if $ctx
            .assert_class($cond, $crate::AssertKind::Expect, $msg, file!(), line!())
            .is_break()
        {
            return;
        }
    };
}

/// Hard assertion: a miss cuts the body short and aborts the whole run.
/// The message defaults to the stringified expression.
///
/// 硬断言：未命中会截断主体并中止整个运行。消息默认为表达式的字符串形式。
#[macro_export]
macro_rules! test_assert {
    ($ctx:expr, $cond:expr $(,)?) => {
        $crate::test_assert!($ctx, $cond, stringify!($cond))
    };
    ($ctx:expr, $cond:expr, $msg:expr $(,)?) => {
        if $ctx
            .assert_class($cond, $crate::AssertKind::Assert, $msg, file!(), line!())
            .is_break()
        {
            return;
        }
    };
}

/// Bounded soft assertion: like [`test_expect!`], but recorded misses draw
/// down the per-run assumption budget and an exhausted budget aborts.
///
/// 有界软断言：与 [`test_expect!`] 类似，但被记录的未命中会消耗每次
/// 运行的假设预算，预算耗尽时中止。
#[macro_export]
macro_rules! test_assume {
    ($ctx:expr, $cond:expr $(,)?) => {
        $crate::test_assume!($ctx, $cond, stringify!($cond))
    };
    ($ctx:expr, $cond:expr, $msg:expr $(,)?) => {
        if $ctx
            .assert_class($cond, $crate::AssertKind::Assume, $msg, file!(), line!())
            .is_break()
        {
            return;
        }
    };
}
