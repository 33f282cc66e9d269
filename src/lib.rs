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

//! AutoHotkey Hotkey Parser
//!
//! Recognizes comments and hotkey declarations in AutoHotkey scripts and
//! collects them into a queryable expression tree.
//!
//! # Features
//!
//! - **Hotkey Declarations:** `^!k::`, bare modifiers like `#::`, and
//!   two-key chords like `^k & ^m::`
//! - **Modifier Symbols:** `# ! ^ + < > * ~ $` decoded into a bitset
//! - **Comments:** everything from the first `;` to end of line
//! - **Membership Queries:** "was this statement recognized?"
//!
//! # Architecture
//!
//! - **`core`:** Parsing logic (types, tokenizer, recognizers, tree)
//! - **`script`:** Loading script files from disk
//!
//! Other AutoHotkey statements (commands, variables, control flow) are not
//! recognized; such lines are reported as unrecognized and skipped.
//!
//! # Examples
//!
//! ## Parsing script text
//!
//! ```
//! use ahk_hotkey_parser::{Expression, HotkeyExpression, KeyPair, Modifiers, Parser};
//!
//! let mut parser = Parser::new();
//! assert!(parser.try_parse("; launchers\n#n::Run notepad"));
//!
//! let win_n = HotkeyExpression::simple("#n::", KeyPair::new(Modifiers::WIN, Some('n')));
//! assert!(parser.script().contains(&Expression::from(win_n)));
//! ```
//!
//! ## Loading a script file
//!
//! ```no_run
//! use ahk_hotkey_parser::script::ScriptFile;
//!
//! let script = ScriptFile::load("~/scripts/main.ahk")?;
//! for line in script.report().unrecognized() {
//!     println!("line {}: {}", line.number, line.text);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod script;

// Re-export commonly used types for convenience
pub use core::{
    CommentExpression, Expression, ExpressionTree, HotkeyExpression, KeyPair, Modifiers, Parser,
};
