//! Assertion-style adapter for the cogent coherence judge.
//!
//! Wraps [`cogent_core::Judge`] behind the contract test suites expect from
//! a matcher: a boolean `pass` plus an explanation that is only rendered
//! when someone asks for it. `pass` always equals the judge's own
//! `makesSense`; negation is the caller's concern
//! (`assert!(!outcome.pass())`), never inverted here.
//!
//! Engine faults (network, endpoint, decode) stay on the error channel so a
//! broken judge service fails tests visibly instead of reading like an
//! incoherent reply.
//!
//! ```no_run
//! use cogent_assert::assert_makes_sense;
//! use cogent_core::{Exchange, Judge, JudgeConfig, Message};
//!
//! # async fn example() -> cogent_core::JudgeResult<()> {
//! let judge = Judge::new(JudgeConfig::default())?;
//! let exchange = Exchange::new(vec![
//!     Message::user("What is 2+2?"),
//!     Message::assistant("2+2 equals 4."),
//! ]);
//!
//! assert_makes_sense(&judge, &exchange).await;
//! # Ok(())
//! # }
//! ```

use cogent_core::{Exchange, Judge, JudgeResult, Verdict};

/// Prefix marking a failed coherence assertion.
const FAILURE_MARKER: &str = "Response does not make sense: ";

/// Outcome of one coherence assertion.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    verdict: Verdict,
}

impl MatchOutcome {
    /// Whether the exchange passed, exactly the judge's `makesSense`.
    pub fn pass(&self) -> bool {
        self.verdict.makes_sense
    }

    /// Explanation text, rendered on demand.
    ///
    /// On a pass this is the judge's reasoning alone; on a failure the
    /// reasoning is prefixed with an explicit failure marker.
    pub fn message(&self) -> String {
        if self.verdict.makes_sense {
            self.verdict.reasoning.clone()
        } else {
            format!("{}{}", FAILURE_MARKER, self.verdict.reasoning)
        }
    }

    /// The underlying verdict.
    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }
}

/// Run one coherence judgment and adapt the verdict for assertion use.
///
/// Transport, endpoint, and decode faults come back as `Err`; they are
/// never folded into a failing outcome.
pub async fn to_make_sense(judge: &Judge, exchange: &Exchange) -> JudgeResult<MatchOutcome> {
    let verdict = judge.evaluate(exchange).await?;
    Ok(MatchOutcome { verdict })
}

/// Assert that the exchange makes sense, panicking otherwise.
///
/// A negative verdict panics with the judge's reasoning behind the failure
/// marker; an engine fault panics with the raw error so the two stay
/// visibly distinguishable in test output.
pub async fn assert_makes_sense(judge: &Judge, exchange: &Exchange) {
    match to_make_sense(judge, exchange).await {
        Ok(outcome) => {
            if !outcome.pass() {
                panic!("{}", outcome.message());
            }
        }
        Err(err) => panic!("coherence evaluation failed: {err:?}"),
    }
}
