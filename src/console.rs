//! Console chat channel: reads questions from stdin, prints answers to stdout.
//!
//! Each line is submitted on its own task through the shared
//! [`ChatController`], so a line typed while a request is in flight hits the
//! single-flight guard and is dropped. Output is driven by the transcript
//! subscription, not by the submit tasks. Runs until the `shutdown` token is
//! cancelled (Ctrl-C) or stdin is closed and every pending answer is printed.

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::chat::{ChatController, Role, Submission, TranscriptView, format_reply, render_terminal};
use crate::error::AppError;

/// Run against the process stdin/stdout.
pub async fn run(controller: Arc<ChatController>, shutdown: CancellationToken) -> Result<(), AppError> {
    info!("console started: type a question and press Enter. Ctrl-C to quit.");
    println!("─────────────────────────────────");
    println!(" folio console  (Ctrl-C to quit)");
    println!("─────────────────────────────────");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_with(controller, stdin, &mut stdout, shutdown).await
}

pub async fn run_with<R, W>(
    controller: Arc<ChatController>,
    input: R,
    out: &mut W,
    shutdown: CancellationToken,
) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut rx = controller.subscribe();
    let mut printed = 0;
    let view = rx.borrow_and_update().clone();
    print_new(&view, &mut printed, out)?;

    let mut lines = input.lines();
    let mut pending = JoinSet::new();
    let mut input_open = true;

    loop {
        tokio::select! {
            biased;

            _ = shutdown.cancelled() => {
                info!("console shutting down");
                break;
            }

            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let view = rx.borrow_and_update().clone();
                print_new(&view, &mut printed, out)?;
            }

            Some(_) = pending.join_next(), if !pending.is_empty() => {}

            line = lines.next_line(), if input_open => {
                match line {
                    Err(e) => {
                        warn!("console read error: {e}");
                        input_open = false;
                    }
                    Ok(None) => {
                        debug!("console input closed");
                        input_open = false;
                    }
                    Ok(Some(text)) => {
                        let controller = controller.clone();
                        pending.spawn(async move {
                            if let Submission::Ignored(reason) = controller.submit(&text).await {
                                debug!(?reason, "console input ignored");
                            }
                        });
                    }
                }
            }
        }

        if !input_open && pending.is_empty() {
            let view = rx.borrow_and_update().clone();
            print_new(&view, &mut printed, out)?;
            break;
        }
    }

    pending.abort_all();
    Ok(())
}

/// Print ai messages appended since the last call.
fn print_new(view: &TranscriptView, printed: &mut usize, out: &mut impl Write) -> Result<(), AppError> {
    for message in view.messages.iter().skip(*printed) {
        if message.role == Role::Ai {
            writeln!(out, "{}\n", render_terminal(&format_reply(&message.text)))?;
        }
    }
    *printed = view.messages.len();
    out.flush()?;
    Ok(())
}
