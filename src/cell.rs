//! Cell formatting shared by every renderer.
//!
//! A cell is the reading of one witness at one column. Readings are the
//! concatenated token texts; a missing or empty reading is shown as the
//! [`GAP`] placeholder. Display cells are word-wrapped to [`WRAP_WIDTH`]
//! characters, export fields are not.

use crate::data::Token;

/// Placeholder displayed for a witness without a reading at a column.
pub const GAP: &str = "-";

/// Maximum line length, in characters, of a wrapped display cell.
pub const WRAP_WIDTH: usize = 20;

/// Tab stop interval used when wrapping.
pub const TAB_SIZE: usize = 8;

/// Concatenates token texts in order, without a separator.
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// Returns the unwrapped reading text, or [`GAP`] for an absent or empty reading.
///
/// This is the value the horizontal renderer compares against the base text.
pub fn reading_text(tokens: Option<&[Token]>) -> String {
    match tokens {
        Some(tokens) if !tokens.is_empty() => join_tokens(tokens),
        _ => GAP.to_string(),
    }
}

/// Formats a reading for display: [`reading_text`] wrapped to [`WRAP_WIDTH`].
pub fn format_cell(tokens: Option<&[Token]>) -> String {
    wrap(&reading_text(tokens), WRAP_WIDTH)
}

/// Greedy word wrap.
///
/// Tabs are expanded to the next multiple of [`TAB_SIZE`] columns, then every
/// other whitespace character counts as one space. Hyphenated words may break
/// after a hyphen between letters, and em-dashes (`--`) between words stand
/// alone. Whitespace is dropped at the end of every line and at the start of
/// every line but the first. Words longer than `width` are broken, after
/// their last fitting hyphen if they have one. Lines are joined with `\n`.
pub fn wrap(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut chunks: Vec<Vec<char>> = split_chunks(text);
    chunks.reverse();

    let mut lines: Vec<String> = Vec::new();
    while !chunks.is_empty() {
        let mut line: Vec<Vec<char>> = Vec::new();
        let mut len = 0;

        if !lines.is_empty() && chunks.last().is_some_and(|c| is_space(c)) {
            chunks.pop();
        }

        while let Some(chunk) = chunks.last() {
            if len + chunk.len() > width {
                break;
            }
            len += chunk.len();
            if let Some(chunk) = chunks.pop() {
                line.push(chunk);
            }
        }

        // Long word: take as much as fits on this line, the rest stays queued.
        match chunks.last_mut() {
            Some(chunk) if chunk.len() > width => {
                let room = width - len;
                let end = match chunk[..room].iter().rposition(|c| *c == '-') {
                    Some(hyphen) if chunk[..hyphen].iter().any(|c| *c != '-') => hyphen + 1,
                    _ => room,
                };
                let tail = chunk.split_off(end);
                line.push(std::mem::replace(chunk, tail));
            }
            _ => {}
        }

        while line.last().is_some_and(|c| is_space(c)) {
            line.pop();
        }

        if !line.is_empty() {
            lines.push(line.into_iter().flatten().collect());
        }
    }

    lines.join("\n")
}

/// Splits text into alternating runs of spaces and words, normalizing every
/// whitespace character to a plain space. Words are further split at hyphens.
fn split_chunks(text: &str) -> Vec<Vec<char>> {
    let mut runs: Vec<Vec<char>> = Vec::new();
    for ch in expand_tabs(text).chars() {
        let ch = if is_wrap_whitespace(ch) { ' ' } else { ch };
        match runs.last_mut() {
            Some(run) if (run[0] == ' ') == (ch == ' ') => run.push(ch),
            _ => runs.push(vec![ch]),
        }
    }

    let mut chunks = Vec::with_capacity(runs.len());
    for run in runs {
        if is_space(&run) {
            chunks.push(run);
        } else {
            split_word(&run, &mut chunks);
        }
    }
    chunks
}

/// Splits one word after each hyphen that joins letters (`well-` `known`),
/// and around a run of two or more hyphens between words (`over` `--` `under`).
fn split_word(word: &[char], chunks: &mut Vec<Vec<char>>) {
    let is_letter = |i: usize| word.get(i).is_some_and(|c| c.is_alphabetic() || *c == '_');
    let is_word = |i: usize| word.get(i).is_some_and(|c| c.is_alphanumeric() || *c == '_');

    let mut start = 0;
    let mut i = 1;
    while i < word.len() {
        if word[i] != '-' {
            i += 1;
            continue;
        }

        let dashes = word[i..].iter().take_while(|c| **c == '-').count();
        let after_word_punct = is_word(i - 1) || "!\"'&.,?".contains(word[i - 1]);
        if dashes >= 2 && after_word_punct && is_word(i + dashes) {
            chunks.push(word[start..i].to_vec());
            chunks.push(word[i..i + dashes].to_vec());
            start = i + dashes;
            i = start + 1;
            continue;
        }

        let joins_before = (i >= 2 && is_letter(i - 1) && is_letter(i - 2))
            || (i >= 3 && is_letter(i - 1) && word[i - 2] == '-' && is_letter(i - 3));
        let joins_after =
            is_letter(i + 1) && (is_letter(i + 2) || (word.get(i + 2) == Some(&'-') && is_letter(i + 3)));
        if joins_before && joins_after {
            chunks.push(word[start..=i].to_vec());
            start = i + 1;
        }
        i += 1;
    }
    chunks.push(word[start..].to_vec());
}

/// Replaces tabs with spaces up to the next tab stop; line breaks reset the column.
fn expand_tabs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for ch in text.chars() {
        match ch {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat_n(' ', pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(ch);
                column = 0;
            }
            _ => {
                out.push(ch);
                column += 1;
            }
        }
    }
    out
}

/// Only ASCII whitespace separates words; a no-break space stays inside its word.
fn is_wrap_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

fn is_space(chunk: &[char]) -> bool {
    chunk.iter().all(|c| *c == ' ')
}
