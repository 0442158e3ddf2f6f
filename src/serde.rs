//! JSON-deserializable configuration.
//!
//! These types describe render and cursor settings as they appear in a
//! config file (for example one shipped with your application). Deserialize
//! them with serde, then convert into core types ([crate::render::RenderOptions])
//! or apply to a live cursor ([crate::cursor::Cursor::apply_config]).

use serde::{Deserialize, Serialize};

/// Render settings as they appear in a config file.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RenderOptionsDef {
    /// Radix to print in; defaults to 16 (hex).
    #[serde(default = "default_radix")]
    pub radix: u32,
    /// Optional space after every this many printed bytes.
    #[serde(default)]
    pub group_every: Option<usize>,
}

fn default_radix() -> u32 {
    16
}

/// Cursor settings as they appear in a config file. Every field is
/// optional; unset fields keep the cursor's current values.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CursorConfigDef {
    /// Whether stride and stride width are locked together.
    #[serde(default)]
    pub locked: Option<bool>,
    /// Field width per access, 1..=8.
    #[serde(default)]
    pub stride_width: Option<usize>,
    /// Bits advanced per step.
    #[serde(default)]
    pub stride: Option<usize>,
    /// Bit position of the next access.
    #[serde(default)]
    pub position: Option<usize>,
}
