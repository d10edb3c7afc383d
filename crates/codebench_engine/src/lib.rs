//! Execution pipeline for runnable workspace languages.
//!
//! JavaScript runs directly in an embedded QuickJS context; TypeScript is
//! type-stripped first and then follows the same path. Languages without
//! local execution support short-circuit to an `Unsupported` result without
//! ever touching an evaluation context. All per-run faults are converted into
//! a structured [`ExecutionResult`] at this boundary; nothing escapes `run`
//! except the deliberate busy rejection.

/// Per-run output capture channel.
pub mod capture;
mod runner;
mod transpile;

use capture::CaptureBuffer;
use chrono::{DateTime, Utc};
use codebench_core::languages::{LanguageDescriptor, TYPESCRIPT_ID};
use serde::Serialize;
use std::cell::Cell;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

pub use transpile::TranspileError;

/// Leading marker of the success annotation line.
pub const SUCCESS_PREFIX: &str = "✓";
/// Leading marker of failure lines.
pub const FAILURE_PREFIX: &str = "✗";
/// Placeholder emitted when a successful run produced no output.
pub const NO_OUTPUT_PLACEHOLDER: &str = "(no output)";

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// The program ran to completion.
    Success,
    /// Transpilation or execution raised a fault.
    Failure,
    /// The wall-clock deadline aborted the run.
    TimedOut,
    /// The language has no local runner; nothing was executed.
    Unsupported,
}

/// Structured report for a single run.
///
/// `lines` is the full renderable set: captured output in call order followed
/// by the annotation lines, ready for the console to append verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    pub outcome: Outcome,
    pub lines: Vec<String>,
    pub elapsed_ms: u64,
    pub error: Option<String>,
}

impl ExecutionResult {
    pub fn succeeded(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

/// Ephemeral description of one run, built fresh per invocation.
#[derive(Debug, Clone)]
pub struct ExecutionRequest {
    pub language: String,
    pub source: String,
    pub started_at: DateTime<Utc>,
}

impl ExecutionRequest {
    fn new(language: &LanguageDescriptor, source: &str) -> Self {
        Self {
            language: language.id.to_string(),
            source: source.to_string(),
            started_at: Utc::now(),
        }
    }
}

/// Engine tuning knobs.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Wall-clock deadline for one run; `None` disables the deadline.
    pub timeout: Option<Duration>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_millis(
                codebench_core::config::DEFAULT_RUN_TIMEOUT_MS,
            )),
        }
    }
}

/// Rejection returned instead of queueing a second concurrent run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("an execution is already in flight")]
    Busy,
}

/// Synchronous, serialized run pipeline.
pub struct ExecutionEngine {
    busy: Cell<bool>,
    config: EngineConfig,
}

impl ExecutionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            busy: Cell::new(false),
            config,
        }
    }

    /// Whether a run is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Run `source` as `language` and report the outcome.
    ///
    /// The source is an immutable snapshot: edits made while the run is in
    /// flight cannot affect it. Captured output, annotations, and timing are
    /// folded into the returned [`ExecutionResult`]; transpile and runtime
    /// faults never propagate as errors.
    ///
    /// # Errors
    /// Returns [`EngineError::Busy`] when invoked while a run is already in
    /// flight; the in-flight run is unaffected.
    pub fn run(
        &self,
        language: &LanguageDescriptor,
        source: &str,
    ) -> Result<ExecutionResult, EngineError> {
        if self.busy.replace(true) {
            return Err(EngineError::Busy);
        }
        let _guard = BusyGuard(&self.busy);

        let request = ExecutionRequest::new(language, source);
        let started = Instant::now();
        debug!(
            language = request.language.as_str(),
            bytes = request.source.len(),
            started_at = %request.started_at,
            "run started"
        );

        if !language.execution_supported {
            let message = unsupported_message(language);
            let elapsed_ms = elapsed_millis(&started);
            return Ok(ExecutionResult {
                outcome: Outcome::Unsupported,
                lines: failure_lines(Vec::new(), &message, elapsed_ms),
                elapsed_ms,
                error: Some(message),
            });
        }

        let runnable = if language.id == TYPESCRIPT_ID {
            match transpile::strip_types(source) {
                Ok(javascript) => javascript,
                Err(err) => {
                    let message = err.to_string();
                    let elapsed_ms = elapsed_millis(&started);
                    warn!(language = language.id, "transpile failed: {}", message);
                    return Ok(ExecutionResult {
                        outcome: Outcome::Failure,
                        lines: failure_lines(Vec::new(), &message, elapsed_ms),
                        elapsed_ms,
                        error: Some(message),
                    });
                }
            }
        } else {
            source.to_string()
        };

        let capture = CaptureBuffer::new();
        let run = runner::execute(&runnable, &capture, self.config.timeout);
        let elapsed_ms = elapsed_millis(&started);
        let captured = capture.snapshot();

        match run {
            Ok(()) => {
                debug!(
                    language = language.id,
                    elapsed_ms,
                    lines = captured.len(),
                    "run completed"
                );
                Ok(ExecutionResult {
                    outcome: Outcome::Success,
                    lines: success_lines(captured, elapsed_ms),
                    elapsed_ms,
                    error: None,
                })
            }
            Err(fault) if fault.interrupted => {
                let deadline_ms = self
                    .config
                    .timeout
                    .map(|timeout| timeout.as_millis() as u64)
                    .unwrap_or(elapsed_ms);
                let message = format!("Execution timed out after {}ms", deadline_ms);
                warn!(language = language.id, elapsed_ms, "run timed out");
                Ok(ExecutionResult {
                    outcome: Outcome::TimedOut,
                    lines: failure_lines(captured, &message, elapsed_ms),
                    elapsed_ms,
                    error: Some(message),
                })
            }
            Err(fault) => {
                debug!(
                    language = language.id,
                    elapsed_ms,
                    "run faulted: {}",
                    fault.message
                );
                Ok(ExecutionResult {
                    outcome: Outcome::Failure,
                    lines: failure_lines(captured, &fault.message, elapsed_ms),
                    elapsed_ms,
                    error: Some(fault.message),
                })
            }
        }
    }
}

impl Default for ExecutionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Clears the busy flag on every exit path out of `run`.
struct BusyGuard<'a>(&'a Cell<bool>);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

fn elapsed_millis(started: &Instant) -> u64 {
    (started.elapsed().as_secs_f64() * 1000.0).round() as u64
}

fn timing_line(elapsed_ms: u64) -> String {
    format!("  Execution time: {}ms", elapsed_ms)
}

fn unsupported_message(language: &LanguageDescriptor) -> String {
    format!(
        "Runner not implemented for {} yet. Try JavaScript or TypeScript for now.",
        language.display_name
    )
}

fn success_lines(captured: Vec<String>, elapsed_ms: u64) -> Vec<String> {
    let mut lines = if captured.is_empty() {
        vec![NO_OUTPUT_PLACEHOLDER.to_string()]
    } else {
        captured
    };
    lines.push(String::new());
    lines.push(format!("{} Code executed successfully", SUCCESS_PREFIX));
    lines.push(timing_line(elapsed_ms));
    lines
}

fn failure_lines(captured: Vec<String>, message: &str, elapsed_ms: u64) -> Vec<String> {
    let mut lines = captured;
    lines.push(format!("{} {}", FAILURE_PREFIX, message));
    lines.push(String::new());
    lines.push(timing_line(elapsed_ms));
    lines
}
