/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
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

//! Closed vocabularies of the Jack language.
//!
//! The lexer uses these to classify words and punctuation; the parser uses
//! the grammar-level groupings for its lookahead decisions.

/// Primitive type keywords usable wherever a `type` is expected.
pub const PRIMITIVE_TYPES: &[&str] = &["int", "char", "boolean"];

/// Keywords that open a class variable declaration.
pub const CLASS_VAR_KINDS: &[&str] = &["static", "field"];

/// Keywords that open a subroutine declaration.
pub const SUBROUTINE_KINDS: &[&str] = &["constructor", "function", "method"];

/// Keywords usable as a term on their own.
pub const KEYWORD_CONSTANTS: &[&str] = &["true", "false", "null", "this"];

/// Binary operators. All share one precedence level.
pub const BINARY_OPERATORS: &[&str] = &["+", "-", "*", "/", "&", "|", "<", ">", "="];

/// Prefix operators of a unary term.
pub const UNARY_OPERATORS: &[&str] = &["-", "~"];

/// Determines whether a given word is a **reserved keyword**.
///
/// Any word not listed here is lexed as an identifier.
///
/// # Examples
/// ```text
/// class   -> keyword
/// Main    -> identifier
/// skip    -> identifier
/// ```
pub fn is_keyword(word: &str) -> bool {
    matches!(
        word,
        "class"
            | "constructor"
            | "function"
            | "method"
            | "field"
            | "static"
            | "var"
            | "int"
            | "char"
            | "boolean"
            | "void"
            | "true"
            | "false"
            | "null"
            | "this"
            | "let"
            | "do"
            | "if"
            | "else"
            | "while"
            | "return"
    )
}

/// Determines whether a character is one of the language's symbols.
pub fn is_symbol(ch: char) -> bool {
    matches!(
        ch,
        '{' | '}' | '(' | ')' | '[' | ']' | '.' | ',' | ';' | '+' | '-' | '*' | '/' | '&' | '|'
            | '<' | '>' | '=' | '~'
    )
}
