/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * Jack Front End
 * 
 * Syntactic front end for the Jack class language: a lexer producing a flat
 * token stream and a recursive-descent parser turning that stream into a
 * concrete parse tree for later semantic analysis and code generation.
 * 
 * Source → Lexer → Tokens → Parser → Parse Tree
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

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod tree;

pub use config::ParserConfig;
pub use diagnostics::DiagnosticPrinter;
pub use error::{Error, LexError, ParseError, Result};
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::{parse, parse_with, Parser};
pub use span::Span;
pub use tree::{NodeKind, ParseTree};

/// Tokenizes and parses a complete source file with default settings.
pub fn parse_source(source: &str) -> Result<ParseTree> {
    parse_source_with(source, ParserConfig::default())
}

/// Tokenizes and parses a complete source file.
pub fn parse_source_with(source: &str, config: ParserConfig) -> Result<ParseTree> {
    let tokens = tokenize(source)?;
    Ok(parse_with(tokens, config)?)
}
