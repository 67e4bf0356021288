//! Driving the external font compiler over the staged UFO.
//!
//! The compiler runs as a child process with piped output. Two reader
//! threads keep the pipes drained (so the child never blocks on a full
//! buffer), mirror every line through `log`, and watch for the ligature
//! overflow signature so that failure mode gets its own actionable error.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;

use crate::error::EmitError;

/// Whether a compiler output line indicates the ligature-table overflow.
///
/// fontTools reports the condition as an `OTLOffsetOverflowError` (the
/// "OverflowError" spelling survives wrapping and tracebacks) or as a
/// subtable-too-large message.
fn is_overflow_line(line: &str) -> bool {
    line.contains("OverflowError") || (line.contains("subtable") && line.contains("too large"))
}

fn spawn_drain<R>(
    stream: R,
    overflow: Arc<AtomicBool>,
    stream_name: &'static str,
) -> JoinHandle<()>
where
    R: Read + Send + 'static,
{
    std::thread::spawn(move || {
        let reader = BufReader::new(stream);
        for line in reader.lines() {
            match line {
                Ok(text) => {
                    if is_overflow_line(&text) {
                        overflow.store(true, Ordering::Relaxed);
                    }
                    log::info!("fontmake: {text}");
                }
                Err(e) => {
                    log::warn!("error reading fontmake {stream_name}: {e}");
                    break;
                }
            }
        }
    })
}

/// Compile the staged UFO with the configured command and wait for it.
///
/// Invocation shape: `{command} {args...} -u {staged_ufo}`.
///
/// # Errors
/// [`EmitError::FontmakeSpawn`] when the command cannot start,
/// [`EmitError::LigatureOverflow`] when the run fails and its output carries
/// the overflow signature, [`EmitError::FontmakeFailed`] for any other
/// unsuccessful exit.
pub fn compile_ufo(command: &str, args: &[String], staged_ufo: &Path) -> Result<(), EmitError> {
    log::info!(
        "Running {} {} -u {}",
        command,
        args.join(" "),
        staged_ufo.display()
    );

    let mut child = Command::new(command)
        .args(args)
        .arg("-u")
        .arg(staged_ufo)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| EmitError::FontmakeSpawn {
            command: command.to_string(),
            source,
        })?;

    let stdout = child
        .stdout
        .take()
        .ok_or(EmitError::FontmakeCapture { stream: "stdout" })?;
    let stderr = child
        .stderr
        .take()
        .ok_or(EmitError::FontmakeCapture { stream: "stderr" })?;

    let overflow = Arc::new(AtomicBool::new(false));
    let stdout_thread = spawn_drain(stdout, Arc::clone(&overflow), "stdout");
    let stderr_thread = spawn_drain(stderr, Arc::clone(&overflow), "stderr");

    let status = child.wait()?;
    let _ = stdout_thread.join();
    let _ = stderr_thread.join();

    if status.success() {
        log::info!("Font compilation succeeded");
        return Ok(());
    }
    if overflow.load(Ordering::Relaxed) {
        return Err(EmitError::LigatureOverflow);
    }
    Err(EmitError::FontmakeFailed { status })
}
