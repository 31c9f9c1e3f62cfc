use serde::{Deserialize, Serialize};

use crate::store::mvi::SliceState;

/// Responsive breakpoints, ordered from narrowest to widest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    #[default]
    Xl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl Breakpoint {
    /// Lower bound of each breakpoint in CSS pixels.
    pub const fn min_width(&self) -> u32 {
        match self {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => 640,
            Breakpoint::Md => 768,
            Breakpoint::Lg => 1024,
            Breakpoint::Xl => 1280,
        }
    }

    pub fn from_width(width: u32) -> Self {
        match width {
            w if w < Breakpoint::Sm.min_width() => Breakpoint::Xs,
            w if w < Breakpoint::Md.min_width() => Breakpoint::Sm,
            w if w < Breakpoint::Lg.min_width() => Breakpoint::Md,
            w if w < Breakpoint::Xl.min_width() => Breakpoint::Lg,
            _ => Breakpoint::Xl,
        }
    }

    pub fn device_type(&self) -> DeviceType {
        match self {
            Breakpoint::Xs | Breakpoint::Sm => DeviceType::Mobile,
            Breakpoint::Md | Breakpoint::Lg => DeviceType::Tablet,
            Breakpoint::Xl => DeviceType::Desktop,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewportState {
    pub breakpoint: Breakpoint,
    /// Always `breakpoint.device_type()`.
    pub device_type: DeviceType,
}

impl ViewportState {
    pub fn at(breakpoint: Breakpoint) -> Self {
        Self {
            breakpoint,
            device_type: breakpoint.device_type(),
        }
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::at(Breakpoint::default())
    }
}

impl SliceState for ViewportState {}
