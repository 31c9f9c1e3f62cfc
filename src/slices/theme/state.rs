use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::store::mvi::SliceState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// The theme this preference forces, or `None` when it defers to the system.
    pub fn forced(&self) -> Option<ResolvedTheme> {
        match self {
            ThemePreference::Light => Some(ResolvedTheme::Light),
            ThemePreference::Dark => Some(ResolvedTheme::Dark),
            ThemePreference::System => None,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(format!("unknown theme preference '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ThemeState {
    pub preference: ThemePreference,
    pub resolved: ResolvedTheme,
    /// Last theme reported by the operating system.
    pub system: ResolvedTheme,
}

impl SliceState for ThemeState {}
