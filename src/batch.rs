//! Line-by-line driving of the dispatcher over a whole document.

use crate::error::ParseError;
use crate::record::Record;
use crate::registry::Registry;

/// How the batch layer treats blank lines.
///
/// Default is fail-fast: a blank line reaches the dispatcher and fails
/// like any other too-short line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlankLines {
    #[default]
    Error,
    Skip,
}

impl Registry {
    /// Lazily dispatch each line of `text`, in input order.
    ///
    /// Errors are yielded, not swallowed; collecting into
    /// `Result<Vec<Record>, _>` gives fail-fast behavior, aborting at the
    /// first bad line. This layer adds nothing else: no per-line recovery,
    /// no line numbering (a CLI wrapper that wants to report line numbers
    /// enumerates the lines itself).
    pub fn parse_lines<'a>(
        &'a self,
        text: &'a str,
        blank_lines: BlankLines,
    ) -> impl Iterator<Item = Result<Record, ParseError>> + 'a {
        text.lines()
            .filter(move |line| !(blank_lines == BlankLines::Skip && line.is_empty()))
            .map(move |line| self.dispatch(line))
    }
}
