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

//! src/core/tokenizer.rs
//!
//! Modifier/key decomposition of one hotkey half
//!
//! A "half" is the whitespace-free text before the `::` declaration token,
//! or one side of a `&` chord. It is a run of modifier symbols with at most
//! one key character somewhere in it:
//!
//! ```text
//! ^!k     -> Ctrl|Alt, 'k'
//! <^>!    -> Left|Ctrl|Right|Alt, no key
//! ~*$     -> DontBlock|Wildcard|UseHook, no key
//! ```
//!
//! # Rules
//! - `<` and `>` must be followed by another modifier symbol; the pair is
//!   consumed together. The partner may itself be `<` or `>`.
//! - Any character that is not a modifier symbol is the key.
//! - A second key character rejects the whole half.
//! - An empty half is valid and yields an empty pair.
//!
//! Each step is one nom token parser; the driving loop accumulates flags
//! and enforces the single-key rule.

use nom::{
    branch::alt,
    character::complete::{anychar, satisfy},
    combinator::{map, map_opt},
    IResult, Parser,
};
use thiserror::Error;
use tracing::trace;

use crate::core::types::{KeyPair, Modifiers};

/// Reasons a hotkey half is rejected
///
/// Offsets are byte offsets into the half that was tokenized.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum TokenizeError {
    /// `<` or `>` at the end, or followed by a non-modifier
    #[error("'{symbol}' at offset {offset} must be followed by a modifier symbol")]
    DanglingDirectional { symbol: char, offset: usize },

    /// More than one key character in a single half
    #[error("second key '{second}' at offset {offset} (already have '{first}')")]
    MultipleKeys {
        first: char,
        second: char,
        offset: usize,
    },
}

/// One step of the scan
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Token {
    Modifier(Modifiers),
    Key(char),
}

/// Decompose one hotkey half into its modifiers and key
///
/// # Example
/// ```
/// use ahk_hotkey_parser::core::tokenizer::tokenize_half;
/// use ahk_hotkey_parser::core::Modifiers;
///
/// let pair = tokenize_half("^!k").unwrap();
/// assert_eq!(pair.modifiers, Modifiers::CTRL | Modifiers::ALT);
/// assert_eq!(pair.key, Some('k'));
/// ```
pub fn tokenize_half(half: &str) -> Result<KeyPair, TokenizeError> {
    let mut pair = KeyPair::default();
    let mut rest = half;

    while let Some(symbol) = rest.chars().next() {
        let offset = half.len() - rest.len();

        let (remaining, token) = token(rest).map_err(|_| {
            // Every character is either a key or a modifier, so only a
            // directional without a partner can fail here
            trace!(half, offset, "dangling directional modifier");
            TokenizeError::DanglingDirectional { symbol, offset }
        })?;

        match token {
            Token::Modifier(modifier) => pair.modifiers |= modifier,
            Token::Key(key) => {
                if let Some(first) = pair.key {
                    trace!(half, offset, "more than one key in hotkey half");
                    return Err(TokenizeError::MultipleKeys {
                        first,
                        second: key,
                        offset,
                    });
                }
                pair.key = Some(key);
            }
        }

        rest = remaining;
    }

    Ok(pair)
}

fn token(input: &str) -> IResult<&str, Token> {
    alt((
        map(directional_pair, Token::Modifier),
        map(plain_modifier, Token::Modifier),
        map(key_char, Token::Key),
    ))
    .parse(input)
}

/// `<` or `>` plus the modifier it qualifies, e.g. `<^`
fn directional_pair(input: &str) -> IResult<&str, Modifiers> {
    map(
        (map_opt(anychar, directional_symbol), map_opt(anychar, Modifiers::from_symbol)),
        |(direction, modifier)| direction | modifier,
    )
    .parse(input)
}

fn plain_modifier(input: &str) -> IResult<&str, Modifiers> {
    map_opt(anychar, |c| {
        Modifiers::from_symbol(c).filter(|modifier| !modifier.is_directional())
    })
    .parse(input)
}

fn key_char(input: &str) -> IResult<&str, char> {
    satisfy(|c| Modifiers::from_symbol(c).is_none()).parse(input)
}

fn directional_symbol(c: char) -> Option<Modifiers> {
    Modifiers::from_symbol(c).filter(|modifier| modifier.is_directional())
}
