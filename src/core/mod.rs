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

//! src/core/mod.rs
//!
//! Core parsing logic
//!
//! This module contains the data structures and algorithms for
//! recognizing AutoHotkey statements, including:
//! - Type definitions for modifiers, key pairs and expressions
//! - The hotkey half tokenizer (modifier/key decomposition)
//! - Line recognizers and the line-by-line parser
//! - The expression tree with breadth-first membership search
//!
//! Nothing here touches the filesystem; see `crate::script` for loading.

pub mod parser;
pub mod tokenizer;
pub mod tree;
pub mod types;

pub use parser::{HotkeyError, LineKind, LineOutcome, ParseReport, Parser};
pub use tokenizer::TokenizeError;
pub use tree::{ExpressionTree, Node, NodeId, NodeKind, TreeError};
pub use types::*;

#[cfg(test)]
mod tests;
