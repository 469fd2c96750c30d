//! User-facing report lines.
//!
//! Write failures are ignored: once branches are being mutated, a closed
//! stdout must not stop the run halfway through.

use crate::config::Palette;
use std::io::Write;

/// Prints one line per branch that changed or needs attention.
pub struct Reporter<W: Write> {
    out: W,
    palette: Palette,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, palette: Palette) -> Self {
        Self { out, palette }
    }

    pub fn updated(&mut self, branch: &str, previous: &str) {
        let p = self.palette;
        let _ = writeln!(
            self.out,
            "{}Updated branch {}{}{} (was {}).",
            p.green, p.light_green, branch, p.reset, previous
        );
    }

    pub fn deleted(&mut self, branch: &str, previous: &str) {
        let p = self.palette;
        let _ = writeln!(
            self.out,
            "{}Deleted branch {}{}{} (was {}).",
            p.red, p.light_red, branch, p.reset, previous
        );
    }

    pub fn unpushed(&mut self, branch: &str) {
        let _ = writeln!(
            self.out,
            "warning: '{}' seems to contain unpushed commits",
            branch
        );
    }

    pub fn unmerged(&mut self, branch: &str, remote: &str, default_branch: &str) {
        let _ = writeln!(
            self.out,
            "warning: '{}' was deleted on {}, but appears not merged into '{}'",
            branch, remote, default_branch
        );
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
