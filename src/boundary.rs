//! Last line of defence: whatever goes wrong while rendering a page ends
//! up here instead of aborting with a raw panic message.

use std::{
    any::Any,
    io::{self, Write},
    panic::{self, UnwindSafe},
    process::ExitCode,
};

const RELOAD_HINT: &str = "Run the same command again to reload the page.";
const HOME_HINT: &str = "Run `dinefinder list` to go to the home page.";

/// Send panic messages to the log instead of stderr.
pub fn log_panics() {
    panic::set_hook(Box::new(|info| log::debug!("{info}")));
}

/// Run `render` and report any error or panic to stderr.
pub fn guard<F>(show_trace: bool, render: F) -> ExitCode
where
    F: FnOnce() -> anyhow::Result<()> + UnwindSafe,
{
    let outcome = panic::catch_unwind(render);

    let report = match outcome {
        Ok(Ok(())) => return ExitCode::SUCCESS,
        Ok(Err(err)) => {
            log::error!("{err:#}");
            Failure::Error(err)
        }
        Err(payload) => {
            let msg = panic_message(payload.as_ref());
            log::error!("Panic: {msg}");
            Failure::Panic(msg)
        }
    };
    let stderr = io::stderr();
    let _ = report.write(&mut stderr.lock(), show_trace);
    ExitCode::FAILURE
}

enum Failure {
    Error(anyhow::Error),
    Panic(String),
}

impl Failure {
    fn write<W: Write>(&self, out: &mut W, show_trace: bool) -> io::Result<()> {
        writeln!(out, "Oops! Something went wrong")?;
        match self {
            Self::Error(err) => {
                writeln!(out, "{err}")?;
                if show_trace {
                    writeln!(out)?;
                    writeln!(out, "{err:?}")?;
                }
            }
            Self::Panic(msg) => {
                writeln!(out, "{msg}")?;
            }
        }
        writeln!(out)?;
        writeln!(out, "{RELOAD_HINT}")?;
        writeln!(out, "{HOME_HINT}")?;
        if !show_trace {
            writeln!(out, "Add --show-trace for details.")?;
        }
        Ok(())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "Unknown error".to_string()
    }
}
