//! checkout command - Check out a branch or tag

use std::io;

use anyhow::{bail, Context as _, Result};

use crate::cli::Context;
use crate::ops::{CheckoutFlow, FlowOutcome};
use crate::ui::output;
use crate::ui::prompts::{self, PromptError};

/// Check out a branch or tag.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `target` - Target to check out directly; prompts for one when absent
pub fn checkout(ctx: &Context, target: Option<&str>) -> Result<bool> {
    if let Some(target) = target {
        let result = CheckoutFlow::direct(&ctx.ops, target);
        if ctx.json {
            output::json(&result)?;
            return Ok(result.success());
        }
        return Ok(output::report_checkout(&result, ctx.verbosity));
    }

    let mut flow = CheckoutFlow::new(&ctx.ops);
    let prompted = prompts::run_checkout(
        &mut flow,
        ctx.interactive,
        &mut io::stdin().lock(),
        &mut io::stdout(),
    );
    let outcome = match prompted {
        Ok(outcome) => outcome,
        Err(PromptError::NotInteractive) => {
            bail!("no checkout target given; pass TARGET or run interactively")
        }
        Err(err) => return Err(err).context("Checkout prompt failed"),
    };

    match outcome {
        FlowOutcome::Confirmed(result) => Ok(output::report_checkout(&result, ctx.verbosity)),
        FlowOutcome::Cancelled { message } => {
            output::print(message, ctx.verbosity);
            Ok(true)
        }
    }
}
