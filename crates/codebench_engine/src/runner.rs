//! Isolated QuickJS evaluation with console capture and a wall-clock deadline.
//!
//! Every run gets a fresh runtime and context. The only host binding exposed
//! to user code is the console shim, which forwards formatted lines into the
//! run's [`CaptureBuffer`]; both are dropped when the run returns, on every
//! exit path.

use crate::capture::CaptureBuffer;
use rquickjs::{Context, Ctx, Error, Function, Runtime};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Fault raised by a run that did not complete normally.
#[derive(Debug)]
pub(crate) struct RunnerFault {
    pub(crate) message: String,
    /// True when the run was aborted by the interrupt deadline.
    pub(crate) interrupted: bool,
}

/// Installs a `console` whose writers forward to the capture sink.
///
/// Formatting matches the editor console contract: string arguments pass
/// through untouched, everything else is rendered with `JSON.stringify`, and
/// arguments are joined with single spaces.
const CONSOLE_BOOTSTRAP: &str = r#"
(function (emit) {
  delete globalThis.__capture_emit;
  function formatValue(value) {
    return typeof value === "string" ? value : JSON.stringify(value);
  }
  function write() {
    emit(Array.prototype.map.call(arguments, formatValue).join(" "));
  }
  globalThis.console = { log: write, info: write, warn: write, error: write };
})(globalThis.__capture_emit);
"#;

pub(crate) fn execute(
    source: &str,
    capture: &CaptureBuffer,
    timeout: Option<Duration>,
) -> Result<(), RunnerFault> {
    let runtime = Runtime::new().map_err(setup_fault)?;
    let interrupted = Arc::new(AtomicBool::new(false));
    if let Some(limit) = timeout {
        let deadline = Instant::now() + limit;
        let flag = Arc::clone(&interrupted);
        runtime.set_interrupt_handler(Some(Box::new(move || {
            if Instant::now() < deadline {
                return false;
            }
            flag.store(true, Ordering::Relaxed);
            true
        })));
    }
    let context = Context::full(&runtime).map_err(setup_fault)?;

    let result = context.with(|ctx| -> Result<(), RunnerFault> {
        install_console(&ctx, capture).map_err(setup_fault)?;
        match ctx.eval::<(), _>(source) {
            Ok(()) => Ok(()),
            Err(Error::Exception) => Err(RunnerFault {
                message: caught_message(&ctx),
                interrupted: false,
            }),
            Err(other) => Err(RunnerFault {
                message: other.to_string(),
                interrupted: false,
            }),
        }
    });

    result.map_err(|mut fault| {
        fault.interrupted = interrupted.load(Ordering::Relaxed);
        fault
    })
}

fn install_console(ctx: &Ctx<'_>, capture: &CaptureBuffer) -> Result<(), Error> {
    let sink = capture.clone();
    let emit = Function::new(ctx.clone(), move |line: String| sink.push(line))?;
    ctx.globals().set("__capture_emit", emit)?;
    ctx.eval::<(), _>(CONSOLE_BOOTSTRAP)?;
    Ok(())
}

fn setup_fault(error: Error) -> RunnerFault {
    RunnerFault {
        message: format!("evaluation context setup failed: {}", error),
        interrupted: false,
    }
}

/// Pull the pending exception out of the context and render its message.
fn caught_message(ctx: &Ctx<'_>) -> String {
    let caught = ctx.catch();
    if let Some(exception) = caught.as_exception() {
        if let Some(message) = exception.message() {
            return message;
        }
    }
    if let Some(text) = caught
        .as_string()
        .and_then(|value| value.to_string().ok())
    {
        return text;
    }
    "uncaught exception".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_lines_in_call_order() {
        let capture = CaptureBuffer::new();
        execute(
            r#"console.log("one"); console.error("two");"#,
            &capture,
            None,
        )
        .expect("run");
        assert_eq!(capture.snapshot(), vec!["one", "two"]);
    }

    #[test]
    fn non_string_arguments_are_json_rendered() {
        let capture = CaptureBuffer::new();
        execute(r#"console.log("n:", 1, { a: 2 }, [3]);"#, &capture, None).expect("run");
        assert_eq!(capture.snapshot(), vec![r#"n: 1 {"a":2} [3]"#]);
    }

    #[test]
    fn thrown_errors_surface_their_message() {
        let capture = CaptureBuffer::new();
        let fault = execute(
            r#"console.log("before"); throw new Error("boom");"#,
            &capture,
            None,
        )
        .unwrap_err();
        assert_eq!(fault.message, "boom");
        assert!(!fault.interrupted);
        assert_eq!(capture.snapshot(), vec!["before"]);
    }

    #[test]
    fn thrown_strings_surface_verbatim() {
        let capture = CaptureBuffer::new();
        let fault = execute(r#"throw "plain failure";"#, &capture, None).unwrap_err();
        assert_eq!(fault.message, "plain failure");
    }

    #[test]
    fn deadline_interrupts_unbounded_loops() {
        let capture = CaptureBuffer::new();
        let fault = execute(
            r#"console.log("spinning"); while (true) {}"#,
            &capture,
            Some(Duration::from_millis(50)),
        )
        .unwrap_err();
        assert!(fault.interrupted);
        assert_eq!(capture.snapshot(), vec!["spinning"]);
    }

    #[test]
    fn capture_shim_is_not_left_as_a_global() {
        let capture = CaptureBuffer::new();
        execute(
            r#"console.log(typeof globalThis.__capture_emit);"#,
            &capture,
            None,
        )
        .expect("run");
        assert_eq!(capture.snapshot(), vec!["undefined"]);
    }
}
