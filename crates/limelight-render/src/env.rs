//! Stackable prefix/suffix environments.
//!
//! An [`Environment`] wraps text as `prefix + text + suffix`. Environments are
//! created by an [`EnvManager`], which owns them and keeps an ordered stack of
//! the enabled ones. [`EnvManager::format`] applies the stack according to the
//! manager's [`EnvMode`]:
//!
//! - [`EnvMode::Single`]: only the topmost active environment wraps the text.
//! - [`EnvMode::Multiple`]: every active environment wraps the text, bottom
//!   to top, so the earliest enabled ends up outermost.
//!
//! ```
//! use limelight_render::{EnvManager, EnvMode};
//! use limelight_tags::Color;
//!
//! let mut envs = EnvManager::new();
//! envs.set_mode(EnvMode::Multiple);
//! let outer = envs.new_env(Some(Color::new("<")), Some(Color::new(">")));
//! let inner = envs.new_env(Some(Color::new("(")), Some(Color::new(")")));
//! envs.enable(outer);
//! envs.enable(inner);
//!
//! assert_eq!(envs.format("x"), "<(x)>");
//! ```

use std::fmt;
use std::str::FromStr;

use limelight_tags::Color;
use serde::{Deserialize, Serialize};

/// Handle to an environment owned by an [`EnvManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnvId(usize);

/// How the environment stack composes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvMode {
    /// Only the nearest active environment applies.
    #[default]
    Single,
    /// Every active environment applies, nested.
    Multiple,
}

impl FromStr for EnvMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(EnvMode::Single),
            "multiple" => Ok(EnvMode::Multiple),
            _ => Err(format!(
                "Invalid environment mode: '{}'. Expected 'single' or 'multiple'.",
                s
            )),
        }
    }
}

impl fmt::Display for EnvMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvMode::Single => write!(f, "single"),
            EnvMode::Multiple => write!(f, "multiple"),
        }
    }
}

/// Lifecycle state of an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvState {
    Inactive,
    Active,
}

/// A prefix/suffix decoration rule.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    prefix: Option<Color>,
    suffix: Option<Color>,
    active: bool,
    formatted: Vec<String>,
}

impl Environment {
    fn new(prefix: Option<Color>, suffix: Option<Color>) -> Self {
        Self {
            prefix,
            suffix,
            active: false,
            formatted: Vec::new(),
        }
    }

    pub fn prefix_color(&self) -> Option<&Color> {
        self.prefix.as_ref()
    }

    pub fn suffix_color(&self) -> Option<&Color> {
        self.suffix.as_ref()
    }

    /// The prefix sequence, empty when unset.
    pub fn prefix(&self) -> &str {
        self.prefix.as_ref().map_or("", Color::ansi)
    }

    /// The suffix sequence, empty when unset.
    pub fn suffix(&self) -> &str {
        self.suffix.as_ref().map_or("", Color::ansi)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn state(&self) -> EnvState {
        if self.active {
            EnvState::Active
        } else {
            EnvState::Inactive
        }
    }

    /// Every text this environment has wrapped, oldest first.
    pub fn formatted(&self) -> &[String] {
        &self.formatted
    }

    /// Wraps `text` and records it in the formatted log.
    pub fn wrap(&mut self, text: &str) -> String {
        self.formatted.push(text.to_string());
        let mut out = String::with_capacity(self.prefix().len() + text.len() + self.suffix().len());
        out.push_str(self.prefix());
        out.push_str(text);
        out.push_str(self.suffix());
        out
    }
}

/// Owner of all environments and of the enabled stack.
#[derive(Debug, Clone, Default)]
pub struct EnvManager {
    envs: Vec<Environment>,
    stack: Vec<EnvId>,
    mode: EnvMode,
}

impl EnvManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: EnvMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> EnvMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: EnvMode) {
        self.mode = mode;
    }

    /// Creates an inactive environment. It joins the stack on [`enable`](Self::enable).
    pub fn new_env(&mut self, prefix: Option<Color>, suffix: Option<Color>) -> EnvId {
        let id = EnvId(self.envs.len());
        self.envs.push(Environment::new(prefix, suffix));
        id
    }

    pub fn get(&self, id: EnvId) -> Option<&Environment> {
        self.envs.get(id.0)
    }

    /// Pushes the environment if absent and marks it active.
    ///
    /// Returns `false` for an id this manager did not create.
    pub fn enable(&mut self, id: EnvId) -> bool {
        let Some(env) = self.envs.get_mut(id.0) else {
            tracing::warn!(?id, "enable called with an unknown environment");
            return false;
        };
        env.active = true;
        if !self.stack.contains(&id) {
            self.stack.push(id);
        }
        tracing::debug!(?id, depth = self.stack.len(), "environment enabled");
        true
    }

    /// Removes the environment from the stack and marks it inactive.
    pub fn disable(&mut self, id: EnvId) {
        if let Some(env) = self.envs.get_mut(id.0) {
            env.active = false;
        }
        self.stack.retain(|entry| *entry != id);
        tracing::debug!(?id, depth = self.stack.len(), "environment disabled");
    }

    /// Pops every environment off the stack, deactivating each.
    pub fn disable_all(&mut self) {
        while let Some(id) = self.stack.pop() {
            if let Some(env) = self.envs.get_mut(id.0) {
                env.active = false;
            }
        }
        tracing::debug!("all environments disabled");
    }

    /// Enabled environment ids, bottom first.
    pub fn stack(&self) -> &[EnvId] {
        &self.stack
    }

    /// True if any environment on the stack is active.
    pub fn is_active(&self) -> bool {
        self.stack
            .iter()
            .any(|id| self.envs.get(id.0).is_some_and(Environment::is_active))
    }

    /// Applies the enabled environments to `text` according to the mode.
    pub fn format(&mut self, text: &str) -> String {
        if !self.is_active() {
            return text.to_string();
        }

        match self.mode {
            EnvMode::Single => {
                let top = self
                    .stack
                    .iter()
                    .rev()
                    .copied()
                    .find(|id| self.envs.get(id.0).is_some_and(Environment::is_active));
                match top.and_then(|id| self.envs.get_mut(id.0)) {
                    Some(env) => env.wrap(text),
                    None => text.to_string(),
                }
            }
            EnvMode::Multiple => {
                // Topmost wraps first so earlier-enabled environments end up outermost.
                let mut out = text.to_string();
                for id in self.stack.iter().rev() {
                    if let Some(env) = self.envs.get_mut(id.0).filter(|env| env.active) {
                        out = env.wrap(&out);
                    }
                }
                out
            }
        }
    }
}
