//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Type tests (Modifiers, KeyPair, expression equality)
//! - Tokenizer tests (modifier/key decomposition)
//! - Parser tests (recognizers and line orchestration)
//! - Tree tests (append and membership search)

#[cfg(test)]
mod tokenizer_tests;
