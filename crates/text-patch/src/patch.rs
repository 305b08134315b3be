//! Recorded edits and position translation between input and output coordinates.
//!
//! A [`Patch`] keeps an ordered list of hunks. Each hunk stores the unchanged gap that
//! precedes it, the extent of the input text it replaces, and the replacement text. Because
//! unchanged text is identical in the input and the output, a single gap serves both
//! coordinate spaces and absolute positions in either space are prefix traversals over the
//! list.
//!
//! Hunks never overlap and never touch: a splice that reaches an existing hunk (or lands
//! exactly on its boundary) merges with it.

use crate::config::PatchConfig;
use crate::error::PatchError;
use crate::point::{Extent, Point};
use crate::text::split_at_extent;

/// A single recorded change, as reported by [`Patch::changes`].
///
/// Applying the changes of a patch in order to a copy of the input document produces the
/// output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// Start of the change, in output coordinates.
    pub start: Point,
    /// Extent of the input text the change replaces.
    pub replaced_extent: Extent,
    /// Text occupying the change in the output document.
    pub replacement_text: String,
}

impl Change {
    /// Extent of [`Change::replacement_text`].
    pub fn replacement_extent(&self) -> Extent {
        Extent::of_text(&self.replacement_text)
    }

    /// End of the change, in output coordinates.
    pub fn end(&self) -> Point {
        self.start.traverse(self.replacement_extent())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Hunk {
    /// Unchanged span between the previous hunk (or the document start) and this hunk.
    leading: Extent,
    input_extent: Extent,
    output_extent: Extent,
    text: String,
}

impl Hunk {
    fn new(leading: Extent, input_extent: Extent, text: String) -> Self {
        Self {
            leading,
            input_extent,
            output_extent: Extent::of_text(&text),
            text,
        }
    }

    fn is_identity(&self) -> bool {
        self.input_extent.is_zero() && self.text.is_empty()
    }

    /// Append a hunk that starts exactly where this one ends.
    fn absorb(&mut self, next: Hunk) {
        self.input_extent = self.input_extent.concat(next.input_extent);
        self.output_extent = self.output_extent.concat(next.output_extent);
        self.text.push_str(&next.text);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Space {
    Input,
    Output,
}

impl Space {
    fn other(self) -> Self {
        match self {
            Space::Input => Space::Output,
            Space::Output => Space::Input,
        }
    }
}

/// A hunk with its absolute positions resolved.
#[derive(Debug, Clone, Copy)]
struct Located<'a> {
    index: usize,
    hunk: &'a Hunk,
    input_start: Point,
    input_end: Point,
    output_start: Point,
    output_end: Point,
}

impl Located<'_> {
    fn span(&self, space: Space) -> (Point, Point) {
        match space {
            Space::Input => (self.input_start, self.input_end),
            Space::Output => (self.output_start, self.output_end),
        }
    }

    fn contains(&self, position: Point, space: Space) -> bool {
        let (start, end) = self.span(space);
        start <= position && position < end
    }

    fn to_change(self) -> Change {
        Change {
            start: self.output_start,
            replaced_extent: self.hunk.input_extent,
            replacement_text: self.hunk.text.clone(),
        }
    }
}

/// Half-open span intersection, where an empty span intersects anything it touches.
fn spans_intersect(a: (Point, Point), b: (Point, Point)) -> bool {
    if a.0 == a.1 || b.0 == b.1 {
        a.0 <= b.1 && b.0 <= a.1
    } else {
        a.0 < b.1 && b.0 < a.1
    }
}

/// A record of text replacements that translates positions between the document before
/// the replacements (input) and after them (output).
///
/// # Example
///
/// ```rust
/// use text_patch::{Extent, Patch, Point};
///
/// let mut patch = Patch::new();
/// patch.splice_with_text(Point::new(0, 3), Extent::new(0, 4), "hello world");
/// patch.splice_with_text(Point::new(0, 9), Extent::new(0, 7), "sun");
///
/// let changes = patch.changes();
/// assert_eq!(changes.len(), 1);
/// assert_eq!(changes[0].replacement_text, "hello sun");
/// assert_eq!(changes[0].replaced_extent, Extent::new(0, 6));
///
/// assert_eq!(patch.translate_input_position(Point::new(0, 20)), Point::new(0, 23));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Patch {
    hunks: Vec<Hunk>,
    config: PatchConfig,
}

impl Patch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty patch with a deterministic seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(PatchConfig::with_seed(seed))
    }

    /// Create an empty patch from a config.
    pub fn with_config(config: PatchConfig) -> Self {
        Self {
            hunks: Vec::new(),
            config,
        }
    }

    /// The seed this patch was created with.
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// The config this patch was created with.
    pub fn config(&self) -> &PatchConfig {
        &self.config
    }

    /// Number of recorded changes.
    pub fn change_count(&self) -> usize {
        self.hunks.len()
    }

    /// Returns `true` if no changes are recorded.
    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }

    /// Forget every recorded change.
    pub fn clear(&mut self) {
        self.hunks.clear();
    }

    fn located(&self) -> impl Iterator<Item = Located<'_>> + '_ {
        let mut input = Point::ZERO;
        let mut output = Point::ZERO;
        self.hunks.iter().enumerate().map(move |(index, hunk)| {
            let input_start = input.traverse(hunk.leading);
            let output_start = output.traverse(hunk.leading);
            input = input_start.traverse(hunk.input_extent);
            output = output_start.traverse(hunk.output_extent);
            Located {
                index,
                hunk,
                input_start,
                input_end: input,
                output_start,
                output_end: output,
            }
        })
    }

    /// The recorded changes, ordered by output position.
    pub fn changes(&self) -> Vec<Change> {
        self.located().map(Located::to_change).collect()
    }

    /// Changes whose output span intersects `start..end`.
    ///
    /// Pure deletions (empty output span) and empty query ranges match when they touch.
    pub fn changes_in_output_range(&self, start: Point, end: Point) -> Vec<Change> {
        self.located()
            .take_while(|h| h.output_start <= end)
            .filter(|h| spans_intersect((h.output_start, h.output_end), (start, end)))
            .map(Located::to_change)
            .collect()
    }

    /// Returns `true` if `position` lies inside the input span of a recorded change.
    pub fn is_changed_at_input_position(&self, position: Point) -> bool {
        self.find_containing(position, Space::Input).is_some()
    }

    /// Returns `true` if `position` lies inside the output span of a recorded change.
    pub fn is_changed_at_output_position(&self, position: Point) -> bool {
        self.find_containing(position, Space::Output).is_some()
    }

    /// The change whose input span contains `position`.
    pub fn change_for_input_position(&self, position: Point) -> Option<Change> {
        self.find_containing(position, Space::Input)
            .map(Located::to_change)
    }

    /// The change whose output span contains `position`.
    pub fn change_for_output_position(&self, position: Point) -> Option<Change> {
        self.find_containing(position, Space::Output)
            .map(Located::to_change)
    }

    fn find_containing(&self, position: Point, space: Space) -> Option<Located<'_>> {
        self.located()
            .take_while(|h| h.span(space).0 <= position)
            .find(|h| h.contains(position, space))
    }

    /// Map an input position to the output document.
    ///
    /// A position inside a changed region maps to the output start of that change.
    pub fn translate_input_position(&self, position: Point) -> Point {
        self.translate(position, Space::Input)
    }

    /// Map an output position to the input document.
    ///
    /// A position inside a changed region maps to the input start of that change.
    pub fn translate_output_position(&self, position: Point) -> Point {
        self.translate(position, Space::Output)
    }

    fn translate(&self, position: Point, from: Space) -> Point {
        let to = from.other();
        let mut from_cursor = Point::ZERO;
        let mut to_cursor = Point::ZERO;
        for hunk in self.located() {
            let (from_start, from_end) = hunk.span(from);
            if position < from_start {
                break;
            }
            if position < from_end {
                return hunk.span(to).0;
            }
            from_cursor = from_end;
            to_cursor = hunk.span(to).1;
        }
        to_cursor.traverse(position.traversal(from_cursor))
    }

    /// Record that the output text in `start..start + replaced_extent` was replaced by
    /// `replacement_text`.
    ///
    /// Existing changes that overlap or touch the replaced range are merged into a single
    /// change. Changes after the range keep their input positions; their output positions
    /// move by the difference between the replaced and the inserted extent.
    pub fn splice_with_text(&mut self, start: Point, replaced_extent: Extent, replacement_text: &str) {
        log::trace!(
            "splice_with_text start={start} replaced={replaced_extent} inserted={}",
            Extent::of_text(replacement_text)
        );
        let end = start.traverse(replaced_extent);

        let (range, merged, next_leading) = {
            let mut prev_input_end = Point::ZERO;
            let mut prev_output_end = Point::ZERO;
            let mut first: Option<Located<'_>> = None;
            let mut last: Option<Located<'_>> = None;
            let mut next: Option<Located<'_>> = None;

            for hunk in self.located() {
                if hunk.output_end < start {
                    prev_input_end = hunk.input_end;
                    prev_output_end = hunk.output_end;
                    continue;
                }
                if hunk.output_start > end {
                    next = Some(hunk);
                    break;
                }
                first.get_or_insert(hunk);
                last = Some(hunk);
            }

            let (input_start, output_start) = match first {
                Some(h) if h.output_start <= start => (h.input_start, h.output_start),
                _ => (
                    prev_input_end.traverse(start.traversal(prev_output_end)),
                    start,
                ),
            };
            let input_end = match last {
                Some(h) if end <= h.output_end => h.input_end,
                Some(h) => h.input_end.traverse(end.traversal(h.output_end)),
                None => prev_input_end.traverse(end.traversal(prev_output_end)),
            };

            let mut text = String::new();
            if let Some(h) = first.filter(|h| h.output_start <= start) {
                let (prefix, _) = split_at_extent(&h.hunk.text, start.traversal(h.output_start));
                text.push_str(prefix);
            }
            text.push_str(replacement_text);
            if let Some(h) = last.filter(|h| end <= h.output_end) {
                let (_, suffix) = split_at_extent(&h.hunk.text, end.traversal(h.output_start));
                text.push_str(suffix);
            }

            let merged = Hunk::new(
                output_start.traversal(prev_output_end),
                input_end.traversal(input_start),
                text,
            );
            let range = match (first, last) {
                (Some(f), Some(l)) => f.index..l.index + 1,
                _ => {
                    let at = next.map_or(self.hunks.len(), |h| h.index);
                    at..at
                }
            };
            if range.len() > 1 {
                log::debug!("merging {} hunks into one at output {output_start}", range.len());
            }
            let next_leading = next.map(|h| h.input_start.traversal(input_end));
            (range, merged, next_leading)
        };

        let at = range.start;
        self.hunks.splice(range, std::iter::once(merged));
        if let Some(leading) = next_leading {
            self.hunks[at + 1].leading = leading;
        }
        self.normalize();
    }

    /// Rebase the patch onto an edit of the input document.
    ///
    /// The input text in `input_start..input_start + replaced_extent` was replaced by new
    /// content spanning `replacement_extent`. The same content is assumed to replace the
    /// output text between the translated ends of that range, so it becomes unchanged text
    /// shared by both documents.
    ///
    /// A change cut by the edit keeps the part of its input before the edit as a deletion,
    /// and the part after the edit together with its full replacement text. Changes the
    /// edit swallows are dropped.
    pub fn splice_input(
        &mut self,
        input_start: Point,
        replaced_extent: Extent,
        replacement_extent: Extent,
    ) {
        log::trace!(
            "splice_input start={input_start} replaced={replaced_extent} inserted={replacement_extent}"
        );
        let input_end = input_start.traverse(replaced_extent);

        let mut before_end = Point::ZERO;
        let mut first: Option<(usize, Point)> = None;
        let mut last: Option<(usize, Point)> = None;
        let mut after: Option<(usize, Point)> = None;
        for hunk in self.located() {
            if hunk.input_end <= input_start {
                before_end = hunk.input_end;
                continue;
            }
            if hunk.input_start > input_end
                || (hunk.input_start == input_end && !hunk.hunk.input_extent.is_zero())
            {
                after = Some((hunk.index, hunk.input_start));
                break;
            }
            first.get_or_insert((hunk.index, hunk.input_start));
            last = Some((hunk.index, hunk.input_end));
        }

        let mut replacement = Vec::with_capacity(2);
        let mut gap = match first {
            Some((index, start)) if start < input_start => {
                replacement.push(Hunk::new(
                    self.hunks[index].leading,
                    input_start.traversal(start),
                    String::new(),
                ));
                Extent::ZERO
            }
            _ => input_start.traversal(before_end),
        };
        gap = gap.concat(replacement_extent);

        let mut resume = input_end;
        if let Some((index, end)) = last.filter(|&(_, end)| end > input_end) {
            let text = std::mem::take(&mut self.hunks[index].text);
            replacement.push(Hunk::new(gap, end.traversal(input_end), text));
            gap = Extent::ZERO;
            resume = end;
        }

        let range = match (first, last) {
            (Some((f, _)), Some((l, _))) => f..l + 1,
            _ => {
                let at = after.map_or(self.hunks.len(), |(index, _)| index);
                at..at
            }
        };
        if range.len() > replacement.len() {
            log::debug!(
                "input edit at {input_start} dropped {} hunk(s)",
                range.len() - replacement.len()
            );
        }

        let next_at = range.start + replacement.len();
        self.hunks.splice(range, replacement);
        if let Some((_, start)) = after {
            self.hunks[next_at].leading = gap.concat(start.traversal(resume));
        }
        self.normalize();
    }

    /// Drop identity hunks and merge hunks that touch.
    fn normalize(&mut self) {
        let mut carry: Option<Extent> = None;
        let mut normalized: Vec<Hunk> = Vec::with_capacity(self.hunks.len());
        for mut hunk in self.hunks.drain(..) {
            if let Some(extra) = carry.take() {
                hunk.leading = extra.concat(hunk.leading);
            }
            if hunk.is_identity() {
                log::debug!("dropping identity hunk");
                carry = Some(hunk.leading);
                continue;
            }
            match normalized.last_mut() {
                Some(prev) if hunk.leading.is_zero() => {
                    log::debug!("merging adjacent hunks");
                    prev.absorb(hunk);
                }
                _ => normalized.push(hunk),
            }
        }
        self.hunks = normalized;

        if self.config.validate_after_splice {
            debug_assert_eq!(self.check_invariants(), Ok(()));
        }
    }

    /// Verify the structural invariants of the hunk list.
    pub fn check_invariants(&self) -> Result<(), PatchError> {
        for hunk in self.located() {
            if hunk.index > 0 && hunk.hunk.leading.is_zero() {
                return Err(PatchError::AdjacentHunks {
                    index: hunk.index,
                    start: hunk.output_start,
                });
            }
            if hunk.hunk.is_identity() {
                return Err(PatchError::IdentityHunk {
                    index: hunk.index,
                    start: hunk.output_start,
                });
            }
            let actual = Extent::of_text(&hunk.hunk.text);
            if actual != hunk.hunk.output_extent {
                return Err(PatchError::ExtentMismatch {
                    index: hunk.index,
                    recorded: hunk.hunk.output_extent,
                    actual,
                });
            }
        }
        Ok(())
    }
}
