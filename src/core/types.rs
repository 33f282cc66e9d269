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

//! src/core/types.rs
//!
//! Core type definitions for AutoHotkey script parsing
//!
//! This module defines the fundamental types used throughout the crate:
//! - `Modifiers`: Bitset of hotkey modifier flags (Win, Alt, Ctrl, ...)
//! - `MODIFIER_TABLE`: The fixed symbol → flag mapping (`^` → Ctrl, ...)
//! - `KeyPair`: A modifier set plus at most one key character
//! - `CommentExpression` / `HotkeyExpression`: The recognized statements
//! - `Expression`: The closed sum of all recognized statements
//!
//! Equality on hotkey expressions is not structural:
//! only the first key pair takes part, and its key compares
//! case-insensitively. See [`HotkeyExpression`].

use serde::{Deserialize, Serialize};
use std::fmt;

bitflags::bitflags! {
    /// Hotkey modifier flags
    ///
    /// Flags are independent bits and combine by union. `ALT_GR` and `UP`
    /// exist in the set but have no symbol, so parsing never produces them.
    #[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
    #[serde(transparent)]
    pub struct Modifiers: u16 {
        /// Windows logo key (`#`)
        const WIN = 1;
        /// Alt key (`!`)
        const ALT = 1 << 1;
        /// Control key (`^`)
        const CTRL = 1 << 2;
        /// Shift key (`+`)
        const SHIFT = 1 << 3;
        /// AltGr (reserved, no symbol)
        const ALT_GR = 1 << 4;
        /// Left-hand variant of the paired modifier (`<`)
        const LEFT = 1 << 5;
        /// Right-hand variant of the paired modifier (`>`)
        const RIGHT = 1 << 6;
        /// Fire even if extra modifiers are held (`*`)
        const WILDCARD = 1 << 7;
        /// Don't block the native key event (`~`)
        const DONT_BLOCK = 1 << 8;
        /// Force the keyboard hook (`$`)
        const USE_HOOK = 1 << 9;
        /// Key-up trigger (reserved, no symbol)
        const UP = 1 << 10;
    }
}

/// Symbol → modifier mapping, in canonical rendering order
pub const MODIFIER_TABLE: &[(char, Modifiers)] = &[
    ('#', Modifiers::WIN),
    ('!', Modifiers::ALT),
    ('^', Modifiers::CTRL),
    ('+', Modifiers::SHIFT),
    ('<', Modifiers::LEFT),
    ('>', Modifiers::RIGHT),
    ('*', Modifiers::WILDCARD),
    ('~', Modifiers::DONT_BLOCK),
    ('$', Modifiers::USE_HOOK),
];

/// Human-readable names used by `Modifiers::names`
const MODIFIER_NAMES: &[(Modifiers, &str)] = &[
    (Modifiers::LEFT, "Left"),
    (Modifiers::RIGHT, "Right"),
    (Modifiers::WIN, "Win"),
    (Modifiers::ALT, "Alt"),
    (Modifiers::CTRL, "Ctrl"),
    (Modifiers::SHIFT, "Shift"),
    (Modifiers::ALT_GR, "AltGr"),
    (Modifiers::WILDCARD, "Wildcard"),
    (Modifiers::DONT_BLOCK, "DontBlock"),
    (Modifiers::USE_HOOK, "UseHook"),
    (Modifiers::UP, "Up"),
];

impl Default for Modifiers {
    fn default() -> Self {
        Modifiers::empty()
    }
}

impl Modifiers {
    /// Looks up the flag for a single modifier symbol
    pub fn from_symbol(symbol: char) -> Option<Self> {
        MODIFIER_TABLE
            .iter()
            .find(|(candidate, _)| *candidate == symbol)
            .map(|(_, modifier)| *modifier)
    }

    /// True if any of the Left/Right qualifier bits is set
    pub fn is_directional(self) -> bool {
        self.intersects(Modifiers::LEFT | Modifiers::RIGHT)
    }

    /// Names of every set flag, directional qualifiers first
    pub fn names(self) -> Vec<&'static str> {
        MODIFIER_NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl fmt::Display for Modifiers {
    /// Renders the flags back to their symbols.
    ///
    /// `<` and `>` come first so they prefix the modifier they qualify.
    /// Flags without a symbol (AltGr, Up) are omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let directional = self.intersection(Modifiers::LEFT | Modifiers::RIGHT);
        let rest = self.difference(directional);

        for flag in [directional, rest] {
            for (symbol, modifier) in MODIFIER_TABLE {
                if flag.contains(*modifier) {
                    write!(f, "{}", symbol)?;
                }
            }
        }

        Ok(())
    }
}

/// One half of a hotkey declaration: modifiers plus at most one key
///
/// `key` is `None` for a bare modifier combo such as `^::`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct KeyPair {
    /// Union of every modifier symbol in the half
    pub modifiers: Modifiers,

    /// The single key character, if any
    pub key: Option<char>,
}

impl KeyPair {
    pub fn new(modifiers: Modifiers, key: Option<char>) -> Self {
        Self { modifiers, key }
    }

    /// Case-insensitive key comparison (absent keys only match absent keys)
    pub fn key_eq_ignore_case(&self, other: &KeyPair) -> bool {
        match (self.key, other.key) {
            (None, None) => true,
            (Some(a), Some(b)) => a.to_lowercase().eq(b.to_lowercase()),
            _ => false,
        }
    }

    /// Human-readable form, e.g. `Ctrl+Shift+k`
    pub fn describe(&self) -> String {
        let mut parts: Vec<String> = self
            .modifiers
            .names()
            .into_iter()
            .map(str::to_string)
            .collect();

        if let Some(key) = self.key {
            parts.push(key.to_string());
        }

        parts.join("+")
    }
}

impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.modifiers)?;

        if let Some(key) = self.key {
            write!(f, "{}", key)?;
        }

        Ok(())
    }
}

/// A `;` comment, holding the text from the marker to end of line
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct CommentExpression {
    text: String,
}

impl CommentExpression {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A hotkey declaration such as `^!k::` or the chord `^k & ^m::`
///
/// # Equality
/// Two hotkeys are equal when their *first* pairs have identical modifier
/// bits and keys that match ignoring case. The original line text and the
/// chord partner (`second`) are not compared, so `a & b::` equals `a & c::`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HotkeyExpression {
    text: String,
    first: KeyPair,
    second: Option<KeyPair>,
}

impl HotkeyExpression {
    /// A single-key hotkey
    pub fn simple(text: impl Into<String>, first: KeyPair) -> Self {
        Self {
            text: text.into(),
            first,
            second: None,
        }
    }

    /// A two-key chord joined by `&`
    pub fn chord(text: impl Into<String>, first: KeyPair, second: KeyPair) -> Self {
        Self {
            text: text.into(),
            first,
            second: Some(second),
        }
    }

    /// The original, unstripped line
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn first(&self) -> &KeyPair {
        &self.first
    }

    pub fn second(&self) -> Option<&KeyPair> {
        self.second.as_ref()
    }

    pub fn is_chord(&self) -> bool {
        self.second.is_some()
    }

    /// Human-readable form, e.g. `Ctrl+k & Ctrl+m`
    pub fn describe(&self) -> String {
        match &self.second {
            Some(second) => format!("{} & {}", self.first.describe(), second.describe()),
            None => self.first.describe(),
        }
    }
}

impl PartialEq for HotkeyExpression {
    fn eq(&self, other: &Self) -> bool {
        self.first.modifiers == other.first.modifiers && self.first.key_eq_ignore_case(&other.first)
    }
}

impl Eq for HotkeyExpression {}

/// Every statement form the parser recognizes
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expression {
    Comment(CommentExpression),
    Hotkey(HotkeyExpression),
}

impl Expression {
    /// The source text the expression was recognized from
    pub fn text(&self) -> &str {
        match self {
            Expression::Comment(comment) => comment.text(),
            Expression::Hotkey(hotkey) => hotkey.text(),
        }
    }
}

impl From<CommentExpression> for Expression {
    fn from(comment: CommentExpression) -> Self {
        Expression::Comment(comment)
    }
}

impl From<HotkeyExpression> for Expression {
    fn from(hotkey: HotkeyExpression) -> Self {
        Expression::Hotkey(hotkey)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
