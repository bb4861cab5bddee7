//! Engine module for SuiteRunner implementation
//!
//! Provides the runner that walks a suite tree, fires scope hooks around the
//! contained tests and records every transition as a `RunEvent`.

pub mod core;
pub mod report;

pub use core::SuiteRunner;
pub use report::{FailureRecord, RunReport};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ensure;
    use crate::event::RunEventKind;
    use crate::suite::HookPhase;
    use subject_core::{ExecutionContext, SubjectError};

    fn codes(runner: &SuiteRunner, report: &RunReport) -> String {
        runner.events_for(report.run_id).iter().map(|e| e.kind.code()).collect()
    }

    #[test]
    fn hooks_wrap_tests_then_children() {
        let root = SuiteRunner::define("root", |s| {
                       s.before(|ctx: &mut ExecutionContext| {
                            ctx.set("trace", serde_json::json!(["enter root"]));
                            Ok(())
                        })?;
                       s.it("sees root hook", |ctx| ensure(ctx.contains_key("trace"), "trace missing"));
                       s.describe("child", |c| {
                           c.it("inherits context", |ctx| ensure(ctx.contains_key("trace"), "trace missing"));
                           Ok(())
                       })?;
                       s.after(|ctx: &mut ExecutionContext| {
                            ctx.remove("trace");
                            Ok(())
                        })
                   }).unwrap();
        let mut runner = SuiteRunner::new(root);
        let report = runner.run();

        assert!(report.is_success(), "{report:?}");
        assert_eq!(report.passed, 2);
        assert_eq!(codes(&runner, &report), "REPEPXXC");
    }

    #[test]
    fn failing_entry_hook_skips_and_disarms_later_exits() {
        let root = SuiteRunner::define("root", |s| {
                       s.describe("broken", |b| {
                           b.before(|ctx: &mut ExecutionContext| {
                                ctx.set("first", serde_json::json!(1));
                                Ok(())
                            })?;
                           b.after(|ctx: &mut ExecutionContext| {
                                ctx.remove("first");
                                Ok(())
                            })?;
                           b.before(|_: &mut ExecutionContext| Err(SubjectError::MissingSubject { property: "x".into() }))?;
                           b.after(|_: &mut ExecutionContext| Err(SubjectError::StackUnderflow { name: "never".into() }))?;
                           b.it("never runs", |_| Ok(()));
                           b.describe("nested", |n| {
                               n.it("also skipped", |_| Ok(()));
                               Ok(())
                           })
                       })?;
                       s.describe("after broken", |a| {
                           a.it("clean afterwards", |ctx| ensure(ctx.is_empty(), "context leaked"));
                           Ok(())
                       })
                   }).unwrap();
        let mut runner = SuiteRunner::new(root);
        let report = runner.run();

        assert_eq!(report.skipped, 2);
        assert_eq!(report.hook_failures, 1);
        assert_eq!(report.passed, 1);
        let failed_hooks: Vec<_> = runner.events_for(report.run_id)
                                         .into_iter()
                                         .filter_map(|e| match e.kind {
                                             RunEventKind::HookFailed { phase, .. } => Some(phase),
                                             _ => None,
                                         })
                                         .collect();
        assert_eq!(failed_hooks, vec![HookPhase::Entry]);
    }

    #[test]
    fn failed_tests_carry_the_context_fingerprint() {
        let root = SuiteRunner::define("root", |s| {
                       s.before(|ctx: &mut ExecutionContext| {
                            ctx.set("seed", serde_json::json!({"b": 2, "a": 1}));
                            Ok(())
                        })?;
                       s.it("fails", |_| ensure(false, "boom"));
                       Ok(())
                   }).unwrap();
        let mut runner = SuiteRunner::new(root);
        let report = runner.run();

        let mut expected = ExecutionContext::new();
        expected.set("seed", serde_json::json!({"a": 1, "b": 2}));
        assert_eq!(report.failures[0].context, expected.fingerprint());
        let event_context = runner.events_for(report.run_id)
                                  .into_iter()
                                  .find_map(|e| match e.kind {
                                      RunEventKind::TestFailed { context, .. } => Some(context),
                                      _ => None,
                                  });
        assert_eq!(event_context, Some(expected.fingerprint()));
    }
}
