//! # Lifecycle Integration Tests / 生命周期集成测试
//!
//! End-to-end tests of the execution engine: registration, the skip path,
//! the three assertion tiers under both expectation modes, hard aborts,
//! and the scoreboard's bucket selection and counter bookkeeping.
//!
//! 执行引擎的端到端测试：注册、跳过路径、两种预期模式下的三个断言
//! 级别、硬中止，以及记分板的分类选择和计数维护。

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use unit_runner::{
    AbortReason, Fixture, Outcome, RunSettings, TestCase, TestEnv, test_assert, test_assume,
    test_expect,
};

fn quiet_env() -> TestEnv {
    TestEnv::with_settings(RunSettings {
        color: false,
        ..RunSettings::default()
    })
}

#[cfg(test)]
mod bookkeeping_tests {
    use super::*;

    #[test]
    fn test_untested_drains_to_zero_over_a_full_run() {
        let mut env = quiet_env();
        for i in 0..4 {
            env.add(
                TestCase::new(format!("case_{i}"), |ctx| {
                    test_expect!(ctx, true);
                }),
                None,
            );
        }
        assert_eq!(env.stats.untested, 4);

        env.run().unwrap();

        assert_eq!(env.stats.untested, 0);
        assert_eq!(env.stats.total, 4);
        assert_eq!(env.stats.expected_passed, 4);
        assert_eq!(env.summarize(), 0);
    }

    #[test]
    fn test_env_from_process_arguments() {
        let args = vec![
            "unit-runner".to_string(),
            "--lang".to_string(),
            "en".to_string(),
            "--no-color".to_string(),
        ];

        let mut env = TestEnv::new(args).unwrap();
        assert_eq!(env.settings().language, "en");
        assert!(!env.settings().color);

        env.add(
            TestCase::new("still_runs", |ctx| {
                test_expect!(ctx, true);
            }),
            None,
        );
        env.run().unwrap();
        assert_eq!(env.summarize(), 0);
    }

    #[test]
    fn test_empty_registration_is_a_clean_run() {
        let mut env = quiet_env();

        env.run().unwrap();

        assert_eq!(env.stats.total, 0);
        assert_eq!(env.summarize(), 0);
    }

    #[test]
    fn test_cases_run_in_registration_order_despite_priority() {
        let mut env = quiet_env();
        for (name, priority) in [("third", "critical"), ("first", "lowest"), ("second", "high")] {
            let mut case = TestCase::new(name, |ctx| {
                test_expect!(ctx, true);
            });
            env.apply_priority(&mut case, Some(priority));
            env.add(case, None);
        }

        env.run().unwrap();

        let order: Vec<&str> = env.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["third", "first", "second"]);
    }

    #[test]
    fn test_fixture_setup_and_teardown_wrap_the_body() {
        static SETUP_CALLS: AtomicUsize = AtomicUsize::new(0);
        static TEARDOWN_CALLS: AtomicUsize = AtomicUsize::new(0);

        fn setup() {
            SETUP_CALLS.fetch_add(1, Ordering::SeqCst);
        }
        fn teardown() {
            TEARDOWN_CALLS.fetch_add(1, Ordering::SeqCst);
        }

        let mut env = quiet_env();
        env.add(
            TestCase::new("with_fixture", |ctx| {
                test_expect!(ctx, true);
            }),
            Some(Fixture {
                setup: Some(setup),
                teardown: Some(teardown),
            }),
        );

        env.run().unwrap();

        assert_eq!(SETUP_CALLS.load(Ordering::SeqCst), 1);
        assert_eq!(TEARDOWN_CALLS.load(Ordering::SeqCst), 1);
    }
}

#[cfg(test)]
mod scoreboard_tests {
    use super::*;

    #[test]
    fn test_body_without_assertions_is_always_empty() {
        let mut env = quiet_env();
        env.add(TestCase::new("does_nothing", |_ctx| {}), None);

        env.run().unwrap();

        assert_eq!(env.stats.expected_empty, 1);
        assert_eq!(env.stats.expected_passed, 0);
        assert_eq!(env.stats.expected_failed, 0);
        assert_eq!(env.records()[0].outcome, Outcome::Empty);
    }

    #[test]
    fn test_ghost_marked_case_lands_in_empty() {
        let mut env = quiet_env();
        let mut case = TestCase::new("placeholder", |_ctx| {});
        env.apply_mark(&mut case, Some("ghost"));
        env.add(case, None);

        env.run().unwrap();

        assert_eq!(env.stats.expected_empty, 1);
    }

    #[test]
    fn test_timeout_flag_wins_over_pass() {
        let mut env = quiet_env();
        env.add(
            TestCase::new("slowpoke", |ctx| {
                test_expect!(ctx, true);
            }),
            None,
        );
        env.rule.timeout = true;

        env.run().unwrap();

        assert_eq!(env.stats.expected_timeout, 1);
        assert_eq!(env.stats.expected_passed, 0);
        assert!(!env.rule.timeout, "scoreboard clears the flag");
        assert_eq!(env.summarize(), 1);
    }

    #[test]
    fn test_three_plain_cases_scenario() {
        let mut env = quiet_env();
        env.add(
            TestCase::new("expects_true", |ctx| {
                test_expect!(ctx, true);
            }),
            None,
        );
        env.add(
            TestCase::new("expects_false", |ctx| {
                test_expect!(ctx, false);
            }),
            None,
        );
        env.add(
            TestCase::new("assumes_true", |ctx| {
                test_assume!(ctx, true);
            }),
            None,
        );

        env.run().unwrap();

        assert_eq!(env.stats.expected_passed, 2);
        assert_eq!(env.stats.expected_failed, 1);
        assert_eq!(env.stats.untested, 0);
        assert_eq!(env.summarize(), 1);
    }

    #[test]
    fn test_error_marked_case_classifies_as_passed() {
        let mut env = quiet_env();
        let mut case = TestCase::new("raises", |ctx| {
            test_expect!(ctx, false);
        });
        env.apply_mark(&mut case, Some("error"));
        env.add(case, None);

        env.run().unwrap();

        assert_eq!(env.stats.expected_passed, 1);
        assert_eq!(env.stats.expected_failed, 0);
    }

    #[test]
    fn test_unexpected_buckets_stay_untouched() {
        let mut env = quiet_env();
        env.add(
            TestCase::new("fails_plainly", |ctx| {
                test_expect!(ctx, false);
            }),
            None,
        );

        env.run().unwrap();

        assert_eq!(env.stats.unexpected_passed, 0);
        assert_eq!(env.stats.unexpected_failed, 0);
        assert_eq!(env.stats.expected_failed, 1);
    }
}

#[cfg(test)]
mod skip_tests {
    use super::*;

    #[test]
    fn test_skip_marked_body_never_executes() {
        let mut env = quiet_env();
        let body_ran = Arc::new(AtomicBool::new(false));
        let witness = body_ran.clone();

        let mut case = TestCase::new("skipped", move |_ctx| {
            witness.store(true, Ordering::SeqCst);
        });
        env.apply_mark(&mut case, Some("skip"));
        env.add(case, None);

        env.run().unwrap();

        assert!(!body_ran.load(Ordering::SeqCst));
        // The case never reaches the scoreboard; it stays untested.
        assert_eq!(env.stats.total, 0);
        assert_eq!(env.stats.untested, 1);
        assert_eq!(env.summarize(), 1);
    }

    #[test]
    fn test_armed_skip_rule_classifies_the_next_completed_case() {
        let mut env = quiet_env();
        let mut skipped = TestCase::new("skipped", |_ctx| {});
        env.apply_mark(&mut skipped, Some("skip"));
        env.add(skipped, None);
        env.add(
            TestCase::new("follower", |ctx| {
                test_expect!(ctx, true);
            }),
            None,
        );

        env.run().unwrap();

        // The armed rule is consumed by the first case that completes.
        assert_eq!(env.stats.expected_skipped, 1);
        assert_eq!(env.stats.expected_passed, 0);
        assert_eq!(env.stats.untested, 1);
    }
}

#[cfg(test)]
mod expectation_mode_tests {
    use super::*;

    #[test]
    fn test_fail_mode_expect_false_is_passed() {
        let mut env = quiet_env();
        let mut case = TestCase::new("meant_to_fail", |ctx| {
            test_expect!(ctx, false);
        });
        env.apply_mark(&mut case, Some("fail"));
        env.add(case, None);

        env.run().unwrap();

        assert_eq!(env.stats.expected_passed, 1);
        assert_eq!(env.stats.expected_failed, 0);
    }

    #[test]
    fn test_fail_mode_expect_true_is_failed() {
        let mut env = quiet_env();
        let mut case = TestCase::new("meant_to_fail", |ctx| {
            test_expect!(ctx, true);
        });
        env.apply_mark(&mut case, Some("fail"));
        env.add(case, None);

        env.run().unwrap();

        assert_eq!(env.stats.expected_failed, 1);
        assert_eq!(env.stats.expected_passed, 0);
    }

    #[test]
    fn test_fail_mode_hard_assert_false_does_not_abort() {
        let mut env = quiet_env();
        let mut case = TestCase::new("meant_to_fail", |ctx| {
            test_assert!(ctx, false);
        });
        env.apply_mark(&mut case, Some("fail"));
        env.add(case, None);

        env.run().unwrap();

        assert_eq!(env.stats.expected_passed, 1);
        assert_eq!(env.summarize(), 0);
    }

    #[test]
    fn test_fail_expectation_does_not_leak_into_later_cases() {
        let mut env = quiet_env();
        let mut failing = TestCase::new("meant_to_fail", |ctx| {
            test_expect!(ctx, false);
        });
        env.apply_mark(&mut failing, Some("fail"));
        env.add(failing, None);
        env.add(
            TestCase::new("ordinary", |ctx| {
                test_expect!(ctx, true);
            }),
            None,
        );

        env.run().unwrap();

        assert_eq!(env.stats.expected_passed, 2);
        assert_eq!(env.stats.expected_failed, 0);
    }
}

#[cfg(test)]
mod abort_tests {
    use super::*;

    #[test]
    fn test_hard_assert_stops_the_body_and_the_run() {
        let mut env = quiet_env();
        let reached = Arc::new(AtomicBool::new(false));
        let later_case_ran = Arc::new(AtomicBool::new(false));

        let witness = reached.clone();
        env.add(
            TestCase::new("aborts", move |ctx| {
                test_assert!(ctx, false, "must stop here");
                witness.store(true, Ordering::SeqCst);
            }),
            None,
        );
        let witness = later_case_ran.clone();
        env.add(
            TestCase::new("never_runs", move |_ctx| {
                witness.store(true, Ordering::SeqCst);
            }),
            None,
        );

        let aborted = env.run().unwrap_err();

        assert_eq!(aborted.case, "aborts");
        assert_eq!(aborted.reason, AbortReason::AssertionFailure);
        assert!(!reached.load(Ordering::SeqCst));
        assert!(!later_case_ran.load(Ordering::SeqCst));
        // Neither case was scored; both count into the failure signal.
        assert_eq!(env.stats.total, 0);
        assert_eq!(env.stats.untested, 2);
        assert_eq!(env.summarize(), 2);
    }

    #[test]
    fn test_aborted_case_skips_teardown() {
        static TEARDOWN_CALLS: AtomicUsize = AtomicUsize::new(0);

        fn teardown() {
            TEARDOWN_CALLS.fetch_add(1, Ordering::SeqCst);
        }

        let mut env = quiet_env();
        env.add(
            TestCase::new("aborts", |ctx| {
                test_assert!(ctx, false);
            }),
            Some(Fixture {
                setup: None,
                teardown: Some(teardown),
            }),
        );

        assert!(env.run().is_err());
        assert_eq!(TEARDOWN_CALLS.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_assume_budget_overflow_aborts() {
        let mut env = TestEnv::with_settings(RunSettings {
            color: false,
            assume_max: 1,
            ..RunSettings::default()
        });

        env.add(
            TestCase::new("burns_the_budget", |ctx| {
                test_assume!(ctx, false);
            }),
            None,
        );
        env.add(
            TestCase::new("over_budget", |ctx| {
                // The budget is exhausted before this expression matters.
                test_assume!(ctx, true);
            }),
            None,
        );

        let aborted = env.run().unwrap_err();

        assert_eq!(aborted.case, "over_budget");
        assert_eq!(aborted.reason, AbortReason::AssumeBudget);
        assert_eq!(env.stats.total, 1);
        assert_eq!(env.stats.untested, 1);
    }

    #[test]
    fn test_abort_status_is_fixed_and_non_zero() {
        let mut env = quiet_env();
        env.add(
            TestCase::new("aborts", |ctx| {
                test_assert!(ctx, false);
            }),
            None,
        );

        let aborted = env.run().unwrap_err();

        assert_eq!(aborted.status(), unit_runner::ABORT_STATUS);
        assert_ne!(aborted.status(), 0);
    }
}
