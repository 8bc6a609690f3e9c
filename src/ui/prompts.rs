//! ui::prompts
//!
//! Line-oriented prompts for the interactive checkout.
//!
//! # Design
//!
//! Prompts are only shown in interactive mode. Each typed line is decoded
//! into a [`FlowEvent`] and handed to the [`CheckoutFlow`]; the flow decides
//! what is valid. End of input counts as an interrupt.
//!
//! The reader and writer are generic so the whole exchange can be driven from
//! a byte buffer.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::core::types::TargetKind;
use crate::git::GitExecutor;
use crate::ops::{CheckoutFlow, FlowEvent, FlowOutcome, FlowReply, FlowState};

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("not in interactive mode")]
    NotInteractive,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Decode an answer to the branch/tag menu.
pub fn parse_kind(line: &str) -> FlowEvent {
    match line.trim().to_ascii_lowercase().as_str() {
        "1" | "b" | "branch" | "branches" => FlowEvent::ChooseKind(TargetKind::Branch),
        "2" | "t" | "tag" | "tags" => FlowEvent::ChooseKind(TargetKind::Tag),
        "q" | "quit" => FlowEvent::Quit,
        _ => FlowEvent::Invalid,
    }
}

/// Decode an answer to the candidate list.
///
/// Numbers are 1-based as displayed, so `"1"` becomes `SelectIndex(0)` and
/// `"0"` becomes `SelectIndex(-1)`, which the flow rejects.
pub fn parse_selection(line: &str) -> FlowEvent {
    let answer = line.trim();
    if answer.is_empty() {
        return FlowEvent::Invalid;
    }
    if answer.eq_ignore_ascii_case("q") {
        return FlowEvent::Quit;
    }
    match answer.parse::<i64>() {
        Ok(n) => FlowEvent::SelectIndex(n.saturating_sub(1)),
        Err(_) => FlowEvent::SelectName(answer.to_string()),
    }
}

fn show_kind_menu(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Checkout target:")?;
    writeln!(out, "  1) Branch")?;
    writeln!(out, "  2) Tag")?;
    writeln!(out, "  q) Quit")?;
    write!(out, "Choice: ")?;
    out.flush()
}

fn show_candidates(
    out: &mut impl Write,
    kind: TargetKind,
    candidates: &[String],
) -> std::io::Result<()> {
    writeln!(out, "Available {}:", kind.plural())?;
    for (i, name) in candidates.iter().enumerate() {
        writeln!(out, "  {:>3}. {}", i + 1, name)?;
    }
    write!(out, "Select (number or name, q to quit): ")?;
    out.flush()
}

/// Drive `flow` to a terminal outcome from lines on `input`.
///
/// # Errors
///
/// `NotInteractive` when prompts are off, before anything is shown or read.
/// Otherwise only I/O failures on `input` or `out`; refused answers are shown
/// and asked again.
pub fn run_checkout<E, R, W>(
    flow: &mut CheckoutFlow<'_, E>,
    interactive: bool,
    input: &mut R,
    out: &mut W,
) -> Result<FlowOutcome, PromptError>
where
    E: GitExecutor,
    R: BufRead,
    W: Write,
{
    if !interactive {
        return Err(PromptError::NotInteractive);
    }

    show_kind_menu(out)?;

    loop {
        let mut line = String::new();
        let read = input.read_line(&mut line)?;

        let event = if read == 0 {
            writeln!(out)?;
            FlowEvent::Interrupt
        } else {
            match flow.state() {
                FlowState::ChoosingTarget(_) => parse_selection(&line),
                _ => parse_kind(&line),
            }
        };

        match flow.handle(event) {
            FlowReply::Finished(outcome) => return Ok(outcome),
            FlowReply::Candidates { kind, candidates } => {
                show_candidates(out, kind, &candidates)?;
            }
            FlowReply::Rejected(message) => {
                writeln!(out, "{}", message)?;
                match flow.state() {
                    FlowState::ChoosingTarget(selection) => {
                        show_candidates(out, selection.kind, &selection.candidates)?;
                    }
                    _ => show_kind_menu(out)?,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::RepositoryHandle;
    use crate::git::mock::MockGit;
    use crate::git::RawOutput;
    use crate::ops::Operations;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn ops(git: &MockGit) -> Operations<MockGit> {
        let handle = RepositoryHandle {
            path: "/work/repo".into(),
            absolute_path: PathBuf::from("/work/repo"),
            name: "repo".into(),
            exists: true,
            is_repository: true,
        };
        Operations::new(handle, git.clone())
    }

    fn git() -> MockGit {
        MockGit::new()
            .on(
                "for-each-ref",
                RawOutput::success("refs/heads/main\nrefs/heads/develop\n"),
            )
            .on("checkout", RawOutput::success(""))
    }

    fn drive(git: &MockGit, answers: &str) -> (FlowOutcome, String) {
        let ops = ops(git);
        let mut flow = CheckoutFlow::new(&ops);
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut out = Vec::new();
        let outcome = run_checkout(&mut flow, true, &mut input, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    mod parsing {
        use super::*;

        #[test]
        fn kind_answers() {
            assert_eq!(parse_kind("1\n"), FlowEvent::ChooseKind(TargetKind::Branch));
            assert_eq!(parse_kind(" T "), FlowEvent::ChooseKind(TargetKind::Tag));
            assert_eq!(parse_kind("q"), FlowEvent::Quit);
            assert_eq!(parse_kind("3"), FlowEvent::Invalid);
        }

        #[test]
        fn selection_is_one_based() {
            assert_eq!(parse_selection("1\n"), FlowEvent::SelectIndex(0));
            assert_eq!(parse_selection("0"), FlowEvent::SelectIndex(-1));
            assert_eq!(parse_selection("-1"), FlowEvent::SelectIndex(-2));
        }

        #[test]
        fn selection_text() {
            assert_eq!(parse_selection("Q"), FlowEvent::Quit);
            assert_eq!(parse_selection("   "), FlowEvent::Invalid);
            assert_eq!(
                parse_selection("feature/x"),
                FlowEvent::SelectName("feature/x".into())
            );
        }
    }

    mod session {
        use super::*;

        #[test]
        fn pick_second_branch() {
            let git = git();
            let (outcome, shown) = drive(&git, "1\n2\n");

            assert_eq!(outcome.message(), "Successfully checked out main");
            assert!(shown.contains("Available branches:"));
            assert!(shown.contains("  1. develop"));
            let calls = git.calls();
            let checkout = calls.iter().find(|c| c.args[0] == "checkout").unwrap();
            assert_eq!(checkout.args[1], "main");
        }

        #[test]
        fn out_of_range_reprompts() {
            let git = git();
            let (outcome, shown) = drive(&git, "b\n5\ndevelop\n");

            assert!(shown.contains("Invalid selection"));
            assert_eq!(outcome.message(), "Successfully checked out develop");
            assert_eq!(git.call_count("checkout"), 1);
        }

        #[test]
        fn quit_checks_nothing_out() {
            let git = git();
            let (outcome, _) = drive(&git, "1\nq\n");

            assert_eq!(outcome.message(), "Cancelled.");
            assert!(!outcome.is_failure());
            assert_eq!(git.call_count("checkout"), 0);
        }

        #[test]
        fn end_of_input_cancels() {
            let git = git();
            let (outcome, _) = drive(&git, "");

            assert_eq!(outcome.message(), "Cancelled.");
            assert_eq!(git.total_calls(), 0);
        }

        #[test]
        fn bad_menu_choice_reprompts() {
            let git = git();
            let (outcome, shown) = drive(&git, "x\nq\n");

            assert!(shown.contains("Invalid choice"));
            assert_eq!(shown.matches("Checkout target:").count(), 2);
            assert_eq!(outcome.message(), "Cancelled.");
        }

        #[test]
        fn refuses_when_not_interactive() {
            let git = git();
            let ops = ops(&git);
            let mut flow = CheckoutFlow::new(&ops);
            let mut input = Cursor::new(b"1\n1\n".to_vec());
            let mut out = Vec::new();

            let result = run_checkout(&mut flow, false, &mut input, &mut out);

            assert!(matches!(result, Err(PromptError::NotInteractive)));
            assert!(out.is_empty());
            assert_eq!(input.position(), 0);
            assert_eq!(git.total_calls(), 0);
            assert_eq!(*flow.state(), FlowState::ChoosingKind);
        }

        #[test]
        fn no_tags_stays_on_menu() {
            let git = MockGit::new().on("for-each-ref", RawOutput::success(""));
            let (outcome, shown) = drive(&git, "2\nq\n");

            assert!(shown.contains("No tags found"));
            assert_eq!(outcome.message(), "Cancelled.");
        }
    }
}
