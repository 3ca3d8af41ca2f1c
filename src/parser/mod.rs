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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the `parse(tokens)` entry points
#[allow(clippy::module_inception)]
pub mod parser;

/// Program and class-level grammar:
/// - class, classVarDec, subroutine
/// - parameterList, subroutineBody, varDec
pub mod declarations;

/// Statement-level grammar:
/// - statements, let / if / while / do / return
pub mod statements;

/// Expression-level grammar:
/// - expression → term (op term)*
/// - term alternatives, calls, indexing, expressionList
pub mod expressions;

/// Shared parser helpers:
/// - cursor access and lookahead
/// - consuming matches with syntax errors
/// - nesting guard
pub mod helpers;

/// Re-export the public parse entry points so callers can use:
/// `crate::parser::parse(...)`
pub use parser::{parse, parse_with, Parser};
