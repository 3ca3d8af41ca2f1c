/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * Core Recursive-Descent Parser Entry Point
 * 
 * This file defines the primary `Parser` structure and the public `parse()`
 * driver functions used to transform a token stream into a concrete parse
 * tree rooted at a single `class` node.
 * 
 * The grammar itself is split across multiple modules:
 * - `declarations.rs` → Class, member and subroutine declarations
 * - `statements.rs`   → Statement-level grammar (`let`, `if`, `while`, ...)
 * - `expressions.rs`  → Expressions, terms and argument lists
 * - `helpers.rs`      → Token matching, consumption and lookahead utilities
 * 
 * --------------------------------------------------------------------------
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/pawx
 * 
 * License:
 * This file is part of the PAWX programming language project.
 * 
 * PAWX is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */

use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::lexer::token::Token;
use crate::tree::ParseTree;

/// The core recursive-descent parser.
///
/// This structure maintains:
/// - The full token stream handed over by the lexer
/// - The cursor, the only mutable parse state. It only moves forward.
/// - The current nesting depth, checked against `ParserConfig::max_depth`
///
/// The grammar procedures live in the sibling modules as additional
/// `impl Parser` blocks. Each one is public so callers can parse a single
/// production out of a token stream:
///
/// ```text
/// let mut parser = Parser::new(tokens);
/// let expr = parser.expression()?;
/// ```
#[derive(Debug)]
pub struct Parser {
    /// Complete list of tokens to be parsed.
    pub(crate) tokens: Vec<Token>,

    /// Index of the next unconsumed token.
    pub(crate) current: usize,

    pub(crate) config: ParserConfig,

    pub(crate) depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_config(tokens, ParserConfig::default())
    }

    pub fn with_config(tokens: Vec<Token>, config: ParserConfig) -> Self {
        Self {
            tokens,
            current: 0,
            config,
            depth: 0,
        }
    }

    /// Index of the next unconsumed token.
    pub fn position(&self) -> usize {
        self.current
    }

    /// Returns `true` once every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.current.min(self.tokens.len())..]
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }
}

/// Public entry point for the parsing phase.
///
/// Parses a complete program (a single class) with the default settings.
///
/// # Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → Parse Tree → Analyzer / Code Generator
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<ParseTree, ParseError> {
    Parser::new(tokens).program()
}

/// Parses a complete program with explicit settings.
pub fn parse_with(tokens: Vec<Token>, config: ParserConfig) -> Result<ParseTree, ParseError> {
    Parser::with_config(tokens, config).program()
}
