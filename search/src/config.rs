/// Plies searched when the caller does not ask for a specific depth.
pub const DEFAULT_DEPTH: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Search depth in plies. Depth 0 behaves like depth 1.
    pub depth: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

impl EngineConfig {
    pub fn with_depth(depth: u8) -> Self {
        Self { depth }
    }
}
