//! Randomized checks of the wrapper's invariants on seeded inputs.

use license_header::wrap::wrap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SEEDS: std::ops::Range<u64> = 0..200;

/// Builds a text of words, whitespace runs and newlines.
fn random_text(rng: &mut ChaCha8Rng) -> String {
  const LETTERS: [char; 8] = ['a', 'b', 'x', 'Z', '0', '.', 'é', '✓'];
  const SPACES: [char; 3] = [' ', ' ', '\t'];

  let mut text = String::new();
  for _ in 0..rng.random_range(0..40) {
    match rng.random_range(0..10) {
      0 => text.push('\n'),
      1..=3 => {
        for _ in 0..rng.random_range(1..4) {
          text.push(SPACES[rng.random_range(0..SPACES.len())]);
        }
      }
      _ => {
        for _ in 0..rng.random_range(1..16) {
          text.push(LETTERS[rng.random_range(0..LETTERS.len())]);
        }
      }
    }
  }
  text
}

fn cases() -> impl Iterator<Item = (String, usize)> {
  SEEDS.map(|seed| {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let text = random_text(&mut rng);
    let width = rng.random_range(1..30);
    (text, width)
  })
}

#[test]
fn test_lines_fit_or_hold_a_single_word() {
  for (text, width) in cases() {
    let wrapped = wrap(&text, width);
    for line in wrapped.split('\n') {
      assert!(
        line.chars().count() <= width || !line.contains(char::is_whitespace),
        "line {line:?} of wrap({text:?}, {width}) is too wide"
      );
    }
  }
}

#[test]
fn test_words_are_preserved_in_order() {
  for (text, width) in cases() {
    let wrapped = wrap(&text, width);
    assert_eq!(
      wrapped.split_whitespace().collect::<Vec<_>>(),
      text.split_whitespace().collect::<Vec<_>>(),
      "wrap({text:?}, {width})"
    );
  }
}

#[test]
fn test_hard_breaks_are_preserved() {
  for (text, width) in cases() {
    let wrapped = wrap(&text, width);
    assert!(wrapped.matches('\n').count() >= text.matches('\n').count());
    assert_eq!(
      wrapped.ends_with('\n'),
      text.trim_end_matches([' ', '\t']).ends_with('\n'),
      "wrap({text:?}, {width})"
    );
  }
}

#[test]
fn test_lines_are_trimmed() {
  for (text, width) in cases() {
    let wrapped = wrap(&text, width);
    for line in wrapped.split('\n') {
      assert_eq!(line, line.trim(), "wrap({text:?}, {width})");
    }
  }
}

#[test]
fn test_wrapping_is_idempotent() {
  for (text, width) in cases() {
    let once = wrap(&text, width);
    assert_eq!(wrap(&once, width), once, "wrap({text:?}, {width})");
  }
}

#[test]
fn test_wide_enough_text_only_loses_edge_whitespace() {
  for (text, _) in cases() {
    let width = text.chars().count().max(1);
    let expected = text
      .split('\n')
      .map(str::trim)
      .collect::<Vec<_>>()
      .join("\n");
    assert_eq!(wrap(&text, width), expected, "wrap({text:?}, {width})");
  }
}
