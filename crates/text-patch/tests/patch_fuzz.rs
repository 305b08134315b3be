//! Randomized validation against a reference document pair.
//!
//! Each run keeps an input document and an output document side by side. Most steps splice
//! the output and record the edit in the patch; some steps splice the input, mirror the edit
//! into the output through the patch's own translation, and rebase the patch.
//!
//! After every step:
//! 1. Replaying `changes()` onto the input reproduces the output.
//! 2. Changes are ordered and never touch.
//! 3. Unchanged characters translate onto identical characters in both directions.

mod common;

use common::TestDocument;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use text_patch::{Patch, PatchConfig, Point};

const RUNS: u64 = 500;
const STEPS: usize = 30;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn verify_patch(patch: &Patch, input: &TestDocument, output: &TestDocument, seed: u64) {
    let seed_message = format!("random seed: {seed}");

    patch
        .check_invariants()
        .unwrap_or_else(|err| panic!("{err} ({seed_message})"));

    let changes = patch.changes();
    for pair in changes.windows(2) {
        assert!(pair[0].end() < pair[1].start, "{seed_message}");
    }

    verify_input_position_translation(patch, input, output, &seed_message);
    verify_output_position_translation(patch, input, output, &seed_message);

    let mut replay = input.clone();
    for change in &changes {
        replay.splice(change.start, change.replaced_extent, &change.replacement_text);
    }
    assert_eq!(replay.text(), output.text(), "{seed_message}");
}

fn verify_input_position_translation(
    patch: &Patch,
    input: &TestDocument,
    output: &TestDocument,
    seed_message: &str,
) {
    for (row, line) in input.lines().iter().enumerate() {
        for (column, character) in line.chars().enumerate() {
            let input_position = Point::new(row, column);
            if !patch.is_changed_at_input_position(input_position) {
                let output_position = patch.translate_input_position(input_position);
                assert_eq!(
                    output.char_at(output_position),
                    Some(character),
                    "input {input_position} -> output {output_position} ({seed_message})"
                );
            }
        }
    }
}

fn verify_output_position_translation(
    patch: &Patch,
    input: &TestDocument,
    output: &TestDocument,
    seed_message: &str,
) {
    for (row, line) in output.lines().iter().enumerate() {
        for (column, character) in line.chars().enumerate() {
            let output_position = Point::new(row, column);
            if !patch.is_changed_at_output_position(output_position) {
                let input_position = patch.translate_output_position(output_position);
                assert_eq!(
                    input.char_at(input_position),
                    Some(character),
                    "output {output_position} -> input {input_position} ({seed_message})"
                );
            }
        }
    }
}

fn run(seed: u64, input_splice_ratio: u32) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut input = TestDocument::random(&mut rng);
    let mut output = input.clone();
    let mut patch = Patch::with_config(PatchConfig::with_seed(seed).validate_after_splice(true));

    for _ in 0..STEPS {
        if rng.gen_range(0..10) < input_splice_ratio {
            let splice = input.perform_random_splice(&mut rng);
            let output_start = patch.translate_input_position(splice.start);
            let output_end =
                patch.translate_input_position(splice.start.traverse(splice.replaced_extent));
            output.splice(
                output_start,
                output_end.traversal(output_start),
                &splice.replacement_text,
            );
            patch.splice_input(splice.start, splice.replaced_extent, splice.replacement_extent);
        } else {
            let splice = output.perform_random_splice(&mut rng);
            patch.splice_with_text(splice.start, splice.replaced_extent, &splice.replacement_text);
        }
        verify_patch(&patch, &input, &output, seed);
    }
}

#[test]
fn test_random_output_splices() {
    init_logger();
    for seed in 0..RUNS {
        run(seed, 0);
    }
}

#[test]
fn test_random_interleaved_splices() {
    init_logger();
    for seed in 0..RUNS {
        run(seed, 2);
    }
}

#[test]
fn test_random_input_heavy_splices() {
    init_logger();
    for seed in 10_000..10_000 + RUNS {
        run(seed, 6);
    }
}
