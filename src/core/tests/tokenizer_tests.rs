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

//! Tokenizer tests
//!
//! Tests for decomposing one hotkey half:
//! - Empty halves
//! - Plain modifiers and keys
//! - Left/Right pairing rules
//! - Single-key enforcement

use crate::core::{
    tokenizer::{tokenize_half, TokenizeError},
    types::{KeyPair, Modifiers},
};

#[test]
fn test_empty_half_is_valid() {
    assert_eq!(tokenize_half(""), Ok(KeyPair::default()));
}

#[test]
fn test_key_only() {
    let pair = tokenize_half("k").unwrap();
    assert_eq!(pair.modifiers, Modifiers::empty());
    assert_eq!(pair.key, Some('k'));
}

#[test]
fn test_modifiers_before_key() {
    let pair = tokenize_half("^!k").unwrap();
    assert_eq!(pair.modifiers, Modifiers::CTRL | Modifiers::ALT);
    assert_eq!(pair.key, Some('k'));
}

#[test]
fn test_modifier_after_key_is_accepted() {
    // Position of the key within the half is not significant
    let pair = tokenize_half("k^").unwrap();
    assert_eq!(pair.modifiers, Modifiers::CTRL);
    assert_eq!(pair.key, Some('k'));
}

#[test]
fn test_repeated_modifier_is_idempotent() {
    let pair = tokenize_half("^^k").unwrap();
    assert_eq!(pair.modifiers, Modifiers::CTRL);
}

#[test]
fn test_behaviour_flags() {
    let pair = tokenize_half("~*$").unwrap();
    assert_eq!(
        pair.modifiers,
        Modifiers::DONT_BLOCK | Modifiers::WILDCARD | Modifiers::USE_HOOK
    );
    assert_eq!(pair.key, None);
}

#[test]
fn test_directional_pairs_with_modifier() {
    let pair = tokenize_half("<^k").unwrap();
    assert_eq!(pair.modifiers, Modifiers::LEFT | Modifiers::CTRL);

    let pair = tokenize_half(">!").unwrap();
    assert_eq!(pair.modifiers, Modifiers::RIGHT | Modifiers::ALT);
    assert_eq!(pair.key, None);
}

#[test]
fn test_directional_pair_with_directional_is_permitted() {
    let pair = tokenize_half("<>").unwrap();
    assert_eq!(pair.modifiers, Modifiers::LEFT | Modifiers::RIGHT);

    let pair = tokenize_half("<<").unwrap();
    assert_eq!(pair.modifiers, Modifiers::LEFT);
}

#[test]
fn test_directional_consumes_exactly_one_partner() {
    // "<<" is one pair; the trailing "^" is a separate plain modifier
    let pair = tokenize_half("<<^").unwrap();
    assert_eq!(pair.modifiers, Modifiers::LEFT | Modifiers::CTRL);

    // "<>" is one pair; the trailing ">" has no partner
    assert!(tokenize_half("<>>").is_err());
}

#[test]
fn test_trailing_directional_fails() {
    assert_eq!(
        tokenize_half("<"),
        Err(TokenizeError::DanglingDirectional { symbol: '<', offset: 0 })
    );
    assert_eq!(
        tokenize_half("^>"),
        Err(TokenizeError::DanglingDirectional { symbol: '>', offset: 1 })
    );
}

#[test]
fn test_directional_before_key_fails() {
    assert_eq!(
        tokenize_half("<k"),
        Err(TokenizeError::DanglingDirectional { symbol: '<', offset: 0 })
    );
}

#[test]
fn test_second_key_fails() {
    assert_eq!(
        tokenize_half("ab"),
        Err(TokenizeError::MultipleKeys {
            first: 'a',
            second: 'b',
            offset: 1
        })
    );
    assert!(tokenize_half("^a!b").is_err());
}

#[test]
fn test_non_ascii_key() {
    let pair = tokenize_half("^é").unwrap();
    assert_eq!(pair.key, Some('é'));
}

#[test]
fn test_error_messages() {
    let err = tokenize_half("ab").unwrap_err();
    assert!(err.to_string().contains("second key 'b'"));
}
