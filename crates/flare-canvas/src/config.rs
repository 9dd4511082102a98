/// Prefix used to derive the host element id of a surface (`canvas-<id>`).
pub const DEFAULT_KEY_PREFIX: &str = "canvas-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prepended to the decimal surface id to form the host lookup key.
    pub key_prefix: String,
    /// Maximum number of live renderer handles; `create` returns the null handle past this point.
    pub max_renderers: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_owned(),
            max_renderers: u16::MAX,
        }
    }
}
