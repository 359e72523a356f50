//! # Wrap Module
//!
//! Greedy line filling for license header text.
//!
//! Text is split into words (runs of non-whitespace) and whitespace runs. A
//! whitespace run is kept verbatim between two words on the same line and is
//! dropped whenever a line break lands on it, so produced lines never start or
//! end with whitespace. Newlines in the input are hard breaks and are always
//! preserved.
//!
//! ## Example
//!
//! ```rust
//! use license_header::wrap::wrap;
//!
//! assert_eq!(wrap("x x x\n", 3), "x x\nx\n");
//! assert_eq!(wrap("xxx", 3), "xxx");
//! ```

/// Reflows `text` so that no line is wider than `width` code points.
///
/// A word wider than `width` is never split; it is emitted alone on its own
/// line. A trailing newline is kept only if the input had one.
///
/// # Parameters
///
/// * `text` - The text to reflow
/// * `width` - Maximum line width in code points
///
/// # Returns
///
/// The reflowed text.
pub fn wrap(text: &str, width: usize) -> String {
  let mut filler = LineFiller::new(width, text.len());

  for c in text.chars() {
    match c {
      '\n' => {
        filler.commit();
        filler.hard_break();
      }
      c if c.is_whitespace() => {
        filler.commit();
        filler.push_space(c);
      }
      c => filler.push_word(c),
    }
  }

  filler.commit();
  filler.finish()
}

/// Streaming accumulator behind [`wrap`].
///
/// Lengths are tracked in code points alongside the buffers so that width
/// decisions never have to rescan them.
struct LineFiller {
  width: usize,
  out: String,
  line_len: usize,

  word: String,
  word_len: usize,

  space: String,
  space_len: usize,
}

impl LineFiller {
  fn new(width: usize, capacity: usize) -> Self {
    Self {
      width,
      out: String::with_capacity(capacity),
      line_len: 0,
      word: String::new(),
      word_len: 0,
      space: String::new(),
      space_len: 0,
    }
  }

  fn push_word(&mut self, c: char) {
    self.word.push(c);
    self.word_len += 1;
  }

  fn push_space(&mut self, c: char) {
    self.space.push(c);
    self.space_len += 1;
  }

  fn clear_space(&mut self) {
    self.space.clear();
    self.space_len = 0;
  }

  /// Ends the current output line. Pending whitespace belongs to the line
  /// being closed and is swallowed.
  fn hard_break(&mut self) {
    self.out.push('\n');
    self.line_len = 0;
    self.clear_space();
  }

  /// Writes the pending whitespace and word, breaking first if they don't fit.
  fn commit(&mut self) {
    // Pending whitespace is only written ahead of a word, so trailing whitespace is never flushed.
    if self.word_len == 0 {
      return;
    }

    if self.line_len == 0 {
      self.clear_space(); // trim leading
    }

    // A word that opens a line is written as is, even when it is too wide.
    if self.line_len > 0 && self.line_len + self.space_len + self.word_len > self.width {
      self.hard_break();
    }

    self.out.push_str(&self.space);
    self.line_len += self.space_len;
    self.clear_space();

    self.out.push_str(&self.word);
    self.line_len += self.word_len;
    self.word.clear();
    self.word_len = 0;
  }

  fn finish(self) -> String {
    self.out
  }
}
