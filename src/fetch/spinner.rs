//! Terminal spinner shown while a download is in flight.

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use std::io::Write;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub const FRAMES: [char; 8] = ['⢿', '⣻', '⣽', '⣾', '⣷', '⣯', '⣟', '⡿'];
pub const INTERVAL: Duration = Duration::from_millis(50);

#[inline]
pub fn frame(i: usize) -> char {
    FRAMES[i % FRAMES.len()]
}

/// Redraws a frame on `out` every [`INTERVAL`] while `control` reads
/// `true`. Stops when it flips to `false` or its sender goes away, clears
/// the line and hands `out` back.
pub fn spawn<W>(mut out: W, mut control: watch::Receiver<bool>) -> JoinHandle<W>
where
    W: Write + Send + 'static,
{
    tokio::spawn(async move {
        let mut i = 0;

        while *control.borrow_and_update() {
            let _ = queue!(out, MoveToColumn(0), Print(frame(i)));
            let _ = out.flush();
            i += 1;

            tokio::select! {
                _ = tokio::time::sleep(INTERVAL) => {}
                changed = control.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        let _ = queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine));
        let _ = out.flush();
        out
    })
}

/// Tells the spinner to stop when dropped.
pub struct StopOnDrop(pub watch::Sender<bool>);

impl Drop for StopOnDrop {
    fn drop(&mut self) {
        self.0.send_replace(false);
    }
}
