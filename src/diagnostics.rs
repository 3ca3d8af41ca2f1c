/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * Diagnostics
 * 
 * Renders front-end errors as compiler-style messages pointing into the
 * source text.
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

use crate::error::Error;
use std::fmt::Write;

/// Responsible for rendering human-friendly, compiler-style diagnostics.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the exact error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
pub struct DiagnosticPrinter {
    /// Full source text of the file being parsed.
    source: String,

    /// Name of the source file (e.g. `Main.jack`). Display only.
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders an error diagnostic.
    ///
    /// # Output Example
    /// ```text
    /// error[E0002]: expected symbol:=, found symbol:;
    ///   --> Main.jack:3:15
    ///    |
    ///  3 |         let x ;
    ///    |               ^
    /// ```
    ///
    /// Errors without a known position (a token stream loaded without
    /// spans, or an exhausted input) print only the header and file name.
    pub fn render(&self, error: &Error) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "error[{}]: {}", error.code(), error);

        match error.span() {
            Some(span) => {
                let src_line = self
                    .source
                    .lines()
                    .nth(span.line.saturating_sub(1))
                    .unwrap_or("");

                let _ = writeln!(out, "  --> {}:{}", self.file_name, span);
                let _ = writeln!(out, "   |");
                let _ = writeln!(out, "{:>3} | {}", span.line, src_line);
                let _ = writeln!(out, "   | {}^", " ".repeat(span.column));
            }
            None => {
                let _ = writeln!(out, "  --> {}", self.file_name);
            }
        }

        if let Some(help) = error.help() {
            let _ = writeln!(out, "help: {help}");
        }

        out
    }

    /// Prints a rendered diagnostic to stderr.
    pub fn print(&self, error: &Error) {
        eprint!("{}", self.render(error));
    }
}
