// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/parser.rs
//!
//! AutoHotkey script line parser
//!
//! This module recognizes two statement forms per line:
//! - Comments: everything from the first `;` to end of line
//! - Hotkey declarations: `^!k::`, `~$F::`, chords like `^k & ^m::`
//!
//! # Architecture
//! Lines are split on every `\r` and `\n`. Each line is offered to the
//! comment recognizer first, then the hotkey recognizer; the first match
//! is appended to the parser's `ExpressionTree`. A line that matches
//! neither is recorded as unrecognized and parsing moves on.
//!
//! Hotkey halves are decomposed by `core::tokenizer`.
//!
//! # Outcome
//! `Parser::try_parse` reports success when at least one line matched, or
//! when there was nothing to match (blank input). Callers that need every
//! line accounted for use `ParseReport::all_matched`.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

use crate::core::{
    tokenizer::{tokenize_half, TokenizeError},
    tree::ExpressionTree,
    types::{CommentExpression, Expression, HotkeyExpression},
};

/// Starts a comment
pub const COMMENT_TOKEN: char = ';';

/// Separates the key specification from the action body
pub const DECLARATION_TOKEN: &str = "::";

/// Joins the two keys of a chord
pub const CHORD_SEPARATOR: char = '&';

/// Why a line is not a hotkey declaration
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum HotkeyError {
    #[error("Line is blank")]
    Blank,

    #[error("Missing '::' declaration token")]
    MissingDeclaration,

    #[error("Nothing before the '::' declaration token")]
    EmptyDeclaration,

    #[error("Chord must join exactly two keys, found {0} parts")]
    ChordArity(usize),

    #[error("Invalid hotkey: {0}")]
    Tokenize(#[from] TokenizeError),
}

/// Recognize a comment anywhere in the line
///
/// Text before the `;` is discarded without validation.
///
/// # Example
/// ```
/// use ahk_hotkey_parser::core::parser::parse_comment;
///
/// let comment = parse_comment("Run notepad ; editor").unwrap();
/// assert_eq!(comment.text(), "; editor");
/// ```
pub fn parse_comment(line: &str) -> Option<CommentExpression> {
    line.find(COMMENT_TOKEN)
        .map(|index| CommentExpression::new(&line[index..]))
}

/// Recognize a hotkey declaration
///
/// Returns `None` for anything that is not a well-formed declaration.
/// Use [`try_parse_hotkey`] to find out why.
pub fn parse_hotkey(line: &str) -> Option<HotkeyExpression> {
    try_parse_hotkey(line).ok()
}

/// Recognize a hotkey declaration, reporting the reason for rejection
///
/// Whitespace is insignificant and stripped first. The key specification
/// is everything before the *last* `::`; whatever follows it (the action
/// body) is ignored. A specification containing `&` must split into
/// exactly two halves, which become the chord's first and second pair.
///
/// # Example
/// ```
/// use ahk_hotkey_parser::core::parser::try_parse_hotkey;
/// use ahk_hotkey_parser::core::Modifiers;
///
/// let hotkey = try_parse_hotkey("^k & ^m::").unwrap();
/// assert_eq!(hotkey.first().key, Some('k'));
/// assert_eq!(hotkey.second().map(|pair| pair.modifiers), Some(Modifiers::CTRL));
/// ```
pub fn try_parse_hotkey(line: &str) -> Result<HotkeyExpression, HotkeyError> {
    if line.trim().is_empty() {
        return Err(HotkeyError::Blank);
    }

    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();

    let declaration_end = compact
        .rfind(DECLARATION_TOKEN)
        .ok_or(HotkeyError::MissingDeclaration)?;

    if declaration_end == 0 {
        return Err(HotkeyError::EmptyDeclaration);
    }

    let declaration = &compact[..declaration_end];

    if !declaration.contains(CHORD_SEPARATOR) {
        let first = tokenize_half(declaration)?;
        return Ok(HotkeyExpression::simple(line, first));
    }

    let halves: Vec<&str> = declaration.split(CHORD_SEPARATOR).collect();
    let [first, second] = halves.as_slice() else {
        return Err(HotkeyError::ChordArity(halves.len()));
    };

    let first = tokenize_half(first)?;
    let second = tokenize_half(second)?;

    Ok(HotkeyExpression::chord(line, first, second))
}

/// Offer a line to each recognizer in priority order
///
/// Comments win over hotkeys, so `^k:: ; note` is a comment.
pub fn recognize_line(line: &str) -> Option<Expression> {
    parse_comment(line)
        .map(Expression::from)
        .or_else(|| parse_hotkey(line).map(Expression::from))
}

/// Split source text into lines on every `\r` and `\n`
///
/// `\r\n` therefore yields an empty line between the two, which simply
/// matches nothing.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\r', '\n'])
}

/// Which recognizer accepted a line
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Comment,
    Hotkey,
    Unrecognized,
}

impl LineKind {
    fn of(expression: &Expression) -> Self {
        match expression {
            Expression::Comment(_) => LineKind::Comment,
            Expression::Hotkey(_) => LineKind::Hotkey,
        }
    }
}

/// Outcome of one source line
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LineOutcome {
    /// 1-based line number (counting every `\r` and `\n` as a break)
    pub number: usize,
    pub kind: LineKind,
    pub text: String,
}

impl LineOutcome {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn matched(&self) -> bool {
        self.kind != LineKind::Unrecognized
    }
}

/// Per-line results of one `Parser::parse` call
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ParseReport {
    lines: Vec<LineOutcome>,
}

impl ParseReport {
    pub fn lines(&self) -> &[LineOutcome] {
        &self.lines
    }

    /// Number of lines that produced an expression
    pub fn matched(&self) -> usize {
        self.lines.iter().filter(|line| line.matched()).count()
    }

    pub fn count(&self, kind: LineKind) -> usize {
        self.lines.iter().filter(|line| line.kind == kind).count()
    }

    /// Non-blank lines that matched neither recognizer
    pub fn unrecognized(&self) -> impl Iterator<Item = &LineOutcome> {
        self.lines
            .iter()
            .filter(|line| !line.matched() && !line.is_blank())
    }

    /// Strict policy: every non-blank line produced an expression.
    pub fn all_matched(&self) -> bool {
        self.unrecognized().next().is_none()
    }

    /// OR-accumulated policy: any line matched, or the text was blank.
    ///
    /// A script with one comment and ten malformed hotkeys succeeds.
    pub fn succeeded(&self) -> bool {
        self.matched() > 0 || self.lines.iter().all(LineOutcome::is_blank)
    }
}

/// Parses script text into an `ExpressionTree`
///
/// The tree lives as long as the parser; repeated `parse` calls keep
/// appending to it.
#[derive(Clone, Debug, Default)]
pub struct Parser {
    script: ExpressionTree,
}

impl Parser {
    /// Creates a parser with an empty tree.
    pub fn new() -> Self {
        Self {
            script: ExpressionTree::new(),
        }
    }

    /// Everything recognized so far
    pub fn script(&self) -> &ExpressionTree {
        &self.script
    }

    pub fn into_script(self) -> ExpressionTree {
        self.script
    }

    /// Parse `text`, returning the OR-accumulated outcome
    ///
    /// See [`ParseReport::succeeded`]. The OR is not seeded with success, so
    /// this is not always `true`: text whose non-blank lines are all
    /// unrecognized reports `false`.
    ///
    /// # Example
    /// ```
    /// use ahk_hotkey_parser::core::{CommentExpression, Expression, Parser};
    ///
    /// let mut parser = Parser::new();
    /// assert!(parser.try_parse("; hello\n^x::"));
    ///
    /// let comment = Expression::from(CommentExpression::new("; hello"));
    /// assert!(parser.script().contains(&comment));
    /// ```
    pub fn try_parse(&mut self, text: &str) -> bool {
        self.parse(text).succeeded()
    }

    /// Parse `text`, returning what happened to each line
    pub fn parse(&mut self, text: &str) -> ParseReport {
        let mut report = ParseReport::default();

        for (index, line) in split_lines(text).enumerate() {
            let number = index + 1;

            let kind = match recognize_line(line) {
                Some(expression) => {
                    let kind = LineKind::of(&expression);
                    debug!(line = number, ?kind, text = line, "recognized");
                    self.script.add(expression);
                    kind
                }
                None => {
                    trace!(line = number, text = line, "no recognizer matched");
                    LineKind::Unrecognized
                }
            };

            report.lines.push(LineOutcome {
                number,
                kind,
                text: line.to_string(),
            });
        }

        debug!(
            lines = report.lines.len(),
            matched = report.matched(),
            "parse finished"
        );

        report
    }
}
