use serde::{Deserialize, Serialize};

/// Tri-state display preference as stored and persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Dark,
    Light,
    /// Follow the environment's ambient light/dark signal.
    #[default]
    System,
}

/// Concrete binary value derived from the preference. Never `System`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    Dark,
    #[default]
    Light,
}

impl ThemePreference {
    /// Resolves against the ambient signal: `System` follows the signal,
    /// anything else is itself.
    pub fn resolve(self, ambient: ResolvedTheme) -> ResolvedTheme {
        match self {
            ThemePreference::Dark => ResolvedTheme::Dark,
            ThemePreference::Light => ResolvedTheme::Light,
            ThemePreference::System => ambient,
        }
    }
}

/// Snapshot of the provisioned display preference, handed to consumers that
/// render outside the update loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub preference: ThemePreference,
    pub resolved: ResolvedTheme,
}

/// Process-wide handle to the display preference, injected by the shell.
///
/// Reading before [`ThemeContext::provision`] has run is a programmer error,
/// not a runtime condition, and panics with a descriptive message instead of
/// silently returning a default.
#[derive(Debug, Default)]
pub struct ThemeContext {
    snapshot: Option<ThemeSnapshot>,
}

impl ThemeContext {
    pub fn provision(&mut self, preference: ThemePreference, resolved: ResolvedTheme) {
        self.snapshot = Some(ThemeSnapshot {
            preference,
            resolved,
        });
    }

    /// Current snapshot; panics if the context was never provisioned.
    pub fn current(&self) -> ThemeSnapshot {
        match self.snapshot {
            Some(snapshot) => snapshot,
            None => panic!(
                "theme context read before provisioning; the shell must call \
                 ThemeContext::provision before any consumer renders"
            ),
        }
    }
}
