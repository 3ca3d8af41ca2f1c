/*
 * ==========================================================================
 * PAWX - Code with Claws!
 * ==========================================================================
 * 
 * Parser Configuration
 * 
 * Switches that tune how strictly the parser treats its input. The defaults
 * describe the real language; every relaxation is opt-in.
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

use serde::Deserialize;

/// Default limit on nested expressions, terms and statement blocks.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parser settings.
///
/// Loadable from JSON, where every field is optional:
/// ```text
/// { "max_depth": 64, "allow_skip": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Deepest nesting of expressions, terms and blocks accepted before the
    /// parse fails with `NestingTooDeep`.
    pub max_depth: usize,

    /// Accepts the `skip` keyword wherever an expression is expected.
    ///
    /// `skip` is not part of the language; it lets grammar tests stand in
    /// for an arbitrary expression. Keep it off for real programs.
    pub allow_skip: bool,

    /// Accepts tokens after the class's closing brace instead of failing.
    pub allow_trailing: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_skip: false,
            allow_trailing: false,
        }
    }
}

impl ParserConfig {
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn allow_skip(mut self, allow: bool) -> Self {
        self.allow_skip = allow;
        self
    }

    pub fn allow_trailing(mut self, allow: bool) -> Self {
        self.allow_trailing = allow;
        self
    }

    /// Parses a JSON configuration document.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
