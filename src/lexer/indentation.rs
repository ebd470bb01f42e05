use tracing::trace;

use crate::errors::errors::ErrorImpl;

/// Outcome of measuring one logical line against the open blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indentation {
    /// Same width as the innermost block.
    Unchanged,
    /// A new, deeper block was opened.
    Indent,
    /// This many blocks were closed.
    Dedent(usize),
}

/// Stack of the indentation widths of the currently open blocks.
///
/// The bottom entry is always `0` and entries strictly increase towards the
/// top. One tracker lives for exactly one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentationTracker {
    stack: Vec<usize>,
}

impl Default for IndentationTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl IndentationTracker {
    pub fn new() -> Self {
        IndentationTracker { stack: vec![0] }
    }

    pub fn current(&self) -> usize {
        *self.stack.last().unwrap_or(&0)
    }

    /// Number of open blocks above the top level.
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }

    pub fn levels(&self) -> &[usize] {
        &self.stack
    }

    /// Compares `width` with the innermost block and updates the stack.
    ///
    /// A width smaller than the current one must equal some enclosing level;
    /// otherwise the stack is left as it was and an `IndentationError` is
    /// returned.
    pub fn resolve(&mut self, width: usize) -> Result<Indentation, ErrorImpl> {
        let current = self.current();

        if width > current {
            self.stack.push(width);
            trace!(width, depth = self.depth(), "indent");
            return Ok(Indentation::Indent);
        }

        if width == current {
            return Ok(Indentation::Unchanged);
        }

        let target = self
            .stack
            .binary_search(&width)
            .map_err(|_| ErrorImpl::IndentationError { width })?;

        let closed = self.stack.len() - 1 - target;
        self.stack.truncate(target + 1);
        trace!(width, closed, depth = self.depth(), "dedent");

        Ok(Indentation::Dedent(closed))
    }

    /// Closes every open block, returning how many were closed.
    pub fn flush(&mut self) -> usize {
        let closed = self.depth();
        self.stack.truncate(1);
        if closed > 0 {
            trace!(closed, "dedent at end of input");
        }
        closed
    }
}

/// Width of the leading whitespace of `line`; a tab counts the same as a space.
pub fn measure(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

/// True for lines that carry no tokens: empty, whitespace only, or a comment
/// after optional whitespace.
pub fn is_blank(line: &str) -> bool {
    let rest = &line[measure(line)..];
    rest.is_empty() || rest.starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tracker_is_at_top_level() {
        let tracker = IndentationTracker::new();
        assert_eq!(tracker.levels(), &[0]);
        assert_eq!(tracker.current(), 0);
        assert_eq!(tracker.depth(), 0);
    }

    #[test]
    fn test_nested_indents_push_each_width() {
        let mut tracker = IndentationTracker::new();
        assert_eq!(tracker.resolve(2), Ok(Indentation::Indent));
        assert_eq!(tracker.resolve(6), Ok(Indentation::Indent));
        assert_eq!(tracker.resolve(6), Ok(Indentation::Unchanged));
        assert_eq!(tracker.levels(), &[0, 2, 6]);
    }

    #[test]
    fn test_partial_dedent_to_outer_level() {
        let mut tracker = IndentationTracker::new();
        tracker.resolve(2).unwrap();
        tracker.resolve(4).unwrap();
        tracker.resolve(8).unwrap();

        assert_eq!(tracker.resolve(2), Ok(Indentation::Dedent(2)));
        assert_eq!(tracker.levels(), &[0, 2]);
    }

    #[test]
    fn test_dedent_to_zero() {
        let mut tracker = IndentationTracker::new();
        tracker.resolve(4).unwrap();
        tracker.resolve(8).unwrap();

        assert_eq!(tracker.resolve(0), Ok(Indentation::Dedent(2)));
        assert_eq!(tracker.levels(), &[0]);
    }

    #[test]
    fn test_unmatched_dedent_leaves_stack_untouched() {
        let mut tracker = IndentationTracker::new();
        tracker.resolve(4).unwrap();

        assert_eq!(
            tracker.resolve(3),
            Err(ErrorImpl::IndentationError { width: 3 })
        );
        assert_eq!(tracker.levels(), &[0, 4]);
    }

    #[test]
    fn test_flush_closes_all_blocks() {
        let mut tracker = IndentationTracker::new();
        tracker.resolve(1).unwrap();
        tracker.resolve(2).unwrap();
        tracker.resolve(3).unwrap();

        assert_eq!(tracker.flush(), 3);
        assert_eq!(tracker.levels(), &[0]);
        assert_eq!(tracker.flush(), 0);
    }

    #[test]
    fn test_measure_counts_tabs_like_spaces() {
        assert_eq!(measure("x = 1"), 0);
        assert_eq!(measure("    x"), 4);
        assert_eq!(measure("\tx"), 1);
        assert_eq!(measure(" \t x"), 3);
        assert_eq!(measure("   "), 3);
    }

    #[test]
    fn test_blank_lines() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t"));
        assert!(is_blank("# comment"));
        assert!(is_blank("      # indented comment"));
        assert!(!is_blank("x # trailing comment"));
        assert!(!is_blank("  x"));
    }
}
