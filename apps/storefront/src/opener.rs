//! # Console Opener
//!
//! The session has no browser to navigate, so the deep link is written out
//! as a line for whoever is driving the session to follow.

use std::io::Write;

use combinado_core::LinkOpener;
use tracing::{info, warn};
use url::Url;

/// Writes each opened link to `W` (stderr in the binary).
#[derive(Debug)]
pub struct ConsoleOpener<W: Write> {
    out: W,
}

impl<W: Write> ConsoleOpener<W> {
    pub fn new(out: W) -> Self {
        ConsoleOpener { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LinkOpener for ConsoleOpener<W> {
    fn open(&mut self, uri: &Url) {
        info!(host = ?uri.host_str(), "Opening chat link");

        // Fire-and-forget: a failed write is logged, the order stays dispatched.
        if let Err(e) = writeln!(self.out, "open {}", uri).and_then(|()| self.out.flush()) {
            warn!(error = %e, "Could not write chat link");
        }
    }
}
