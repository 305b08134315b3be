//! Reference document used to check patches against real text.
//!
//! Positions are row/column [`Point`]s over a `ropey::Rope`, with columns counted in `char`s,
//! matching the coordinates `text_patch` uses.

#![allow(dead_code)]

use rand::Rng;
use ropey::Rope;
use text_patch::{Extent, Point};

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// A random splice performed on a [`TestDocument`].
#[derive(Debug, Clone)]
pub struct RandomSplice {
    pub start: Point,
    pub replaced_extent: Extent,
    pub replacement_extent: Extent,
    pub replacement_text: String,
}

#[derive(Debug, Clone)]
pub struct TestDocument {
    rope: Rope,
}

impl TestDocument {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// A document of a few short rows of random letters.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let rows = rng.gen_range(1..=6);
        let lines: Vec<String> = (0..rows).map(|_| random_text(rng, 12, false)).collect();
        Self::new(&lines.join("\n"))
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Rows without their trailing `'\n'`.
    pub fn lines(&self) -> Vec<String> {
        self.text().split('\n').map(str::to_string).collect()
    }

    pub fn char_at(&self, position: Point) -> Option<char> {
        if position.row >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(position.row);
        let len = line.len_chars() - usize::from(line.chars().last() == Some('\n'));
        if position.column >= len {
            return None;
        }
        Some(line.char(position.column))
    }

    fn char_index(&self, position: Point) -> usize {
        self.rope.line_to_char(position.row) + position.column
    }

    fn point_for_char(&self, index: usize) -> Point {
        let row = self.rope.char_to_line(index);
        Point::new(row, index - self.rope.line_to_char(row))
    }

    pub fn splice(&mut self, start: Point, replaced_extent: Extent, text: &str) {
        let start_index = self.char_index(start);
        let end_index = self.char_index(start.traverse(replaced_extent));
        self.rope.remove(start_index..end_index);
        self.rope.insert(start_index, text);
    }

    /// Replace a random range with random text and describe what was done.
    pub fn perform_random_splice<R: Rng>(&mut self, rng: &mut R) -> RandomSplice {
        let len = self.rope.len_chars();
        let a = rng.gen_range(0..=len);
        let b = rng.gen_range(0..=len);
        let (start_index, end_index) = (a.min(b), a.max(b).min(a.min(b) + 8));

        let start = self.point_for_char(start_index);
        let replaced_extent = self.point_for_char(end_index).traversal(start);
        let replacement_text = random_text(rng, 6, true);
        let replacement_extent = Extent::of_text(&replacement_text);

        self.splice(start, replaced_extent, &replacement_text);
        RandomSplice {
            start,
            replaced_extent,
            replacement_extent,
            replacement_text,
        }
    }
}

fn random_text<R: Rng>(rng: &mut R, max_len: usize, newlines: bool) -> String {
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .map(|_| {
            if newlines && rng.gen_ratio(1, 5) {
                '\n'
            } else {
                char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())])
            }
        })
        .collect()
}
