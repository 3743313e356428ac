//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


use is_terminal::IsTerminal;
use tracing::debug;

/// Where styled output is headed, which decides the escape dialect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputTarget {
    /// No usable terminal was found. Styling renders as plain text.
    Unknown,
    /// An ANSI capable terminal.
    #[default]
    Console,
    /// The Xcode debug console with the XcodeColors plugin enabled.
    XcodeColors,
}

/// Styling configuration captured by a [`Painter`](crate::Painter) and its generators.
///
/// There is no process-wide switch: a configuration is a plain value handed to whatever
/// renders. Use [`StyleConfig::detect`] to derive one from the current environment.
///
/// # Examples
///
/// ```
/// use tinct_ansistyle::{OutputTarget, StyleConfig};
///
/// let config = StyleConfig::default().with_target(OutputTarget::XcodeColors);
/// assert!(config.is_styling());
/// assert!(!config.with_enabled(false).is_styling());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StyleConfig {
    /// Master switch. When `false` every styling operation passes its input through.
    pub enabled: bool,
    /// Escape dialect to generate and parse
    pub target: OutputTarget,
}

impl StyleConfig {
    /// Styling enabled, ANSI console output.
    pub fn console() -> StyleConfig {
        StyleConfig {
            enabled: true,
            target: OutputTarget::Console,
        }
    }

    /// Styling disabled.
    pub fn disabled() -> StyleConfig {
        StyleConfig {
            enabled: false,
            target: OutputTarget::Console,
        }
    }

    /// Styling enabled, XcodeColors output.
    pub fn xcode_colors() -> StyleConfig {
        StyleConfig {
            enabled: true,
            target: OutputTarget::XcodeColors,
        }
    }

    /// Set the master switch
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the output target
    pub fn with_target(mut self, target: OutputTarget) -> Self {
        self.target = target;
        self
    }

    /// Returns `true` if generated output will carry escape sequences.
    pub fn is_styling(&self) -> bool {
        self.enabled && self.target != OutputTarget::Unknown
    }

    /// Derives a configuration from the process environment and stdout.
    ///
    /// Reads `XcodeColors`, `TERM` and `NO_COLOR`; see
    /// [`from_environment`](StyleConfig::from_environment) for the rules.
    pub fn detect() -> StyleConfig {
        let xcode_colors = std::env::var("XcodeColors").ok();
        let term = std::env::var("TERM").ok();
        let no_color = std::env::var("NO_COLOR").ok();
        let config = StyleConfig::from_environment(
            xcode_colors.as_deref(),
            term.as_deref(),
            no_color.as_deref(),
            std::io::stdout().is_terminal(),
        );
        debug!(
            enabled = config.enabled,
            target = ?config.target,
            "detected style configuration"
        );
        config
    }

    /// Decides the configuration from already gathered environment facts.
    ///
    /// - `XcodeColors=YES` selects [`OutputTarget::XcodeColors`].
    /// - Otherwise a `TERM` other than `dumb` (any case) on a terminal stdout selects
    ///   [`OutputTarget::Console`].
    /// - Otherwise the target is [`OutputTarget::Unknown`].
    /// - A non-empty `NO_COLOR` turns styling off regardless of target.
    pub fn from_environment(
        xcode_colors: Option<&str>,
        term: Option<&str>,
        no_color: Option<&str>,
        stdout_is_terminal: bool,
    ) -> StyleConfig {
        let target = if xcode_colors == Some("YES") {
            OutputTarget::XcodeColors
        } else if term.is_some_and(|t| !t.eq_ignore_ascii_case("dumb")) && stdout_is_terminal {
            OutputTarget::Console
        } else {
            OutputTarget::Unknown
        };
        let enabled = no_color.is_none_or(str::is_empty);
        StyleConfig { enabled, target }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::console()
    }
}
