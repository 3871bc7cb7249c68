//! Tree configuration for quadex
//!
//! The node capacity and depth cap are fixed policy with well-known defaults,
//! but they can be tuned per index and loaded from JSON or TOML.
use serde::de::Error;

/// Maximum number of items a leaf holds before it splits.
pub const DEFAULT_MAX_ELEMENTS_PER_NODE: usize = 64;

/// Depth at which leaves stop splitting and accept any number of items.
pub const DEFAULT_MAX_DEPTH: usize = 30;

/// Upper limit accepted for `max_depth`. Deeper splits of f64 bounds
/// degenerate to zero-width quadrants long before this.
pub const MAX_DEPTH_LIMIT: usize = 64;

/// Quad-tree configuration
///
/// # Example
///
/// ```rust
/// use quadex::Config;
///
/// let config = Config::default();
/// assert_eq!(config.max_elements_per_node, 64);
/// assert_eq!(config.max_depth, 30);
///
/// let json = r#"{ "max_elements_per_node": 16 }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.max_elements_per_node, 16);
/// assert_eq!(config.max_depth, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Number of items a leaf may hold before splitting into four children
    #[serde(default = "Config::default_max_elements_per_node")]
    pub max_elements_per_node: usize,

    /// Depth of the deepest splittable level (root is 0)
    #[serde(default = "Config::default_max_depth")]
    pub max_depth: usize,
}

impl Config {
    const fn default_max_elements_per_node() -> usize {
        DEFAULT_MAX_ELEMENTS_PER_NODE
    }

    const fn default_max_depth() -> usize {
        DEFAULT_MAX_DEPTH
    }

    pub fn with_max_elements_per_node(mut self, max_elements: usize) -> Self {
        assert!(
            max_elements > 0,
            "Max elements per node must be greater than zero"
        );

        if max_elements > 100_000 {
            log::warn!(
                "Node capacity of {} is very large; leaf scans during search and remove \
                become linear in this many items.",
                max_elements
            );
        }

        self.max_elements_per_node = max_elements;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        assert!(
            max_depth <= MAX_DEPTH_LIMIT,
            "Max depth must not exceed {}",
            MAX_DEPTH_LIMIT
        );
        self.max_depth = max_depth;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_elements_per_node == 0 {
            return Err("Max elements per node must be greater than zero".to_string());
        }

        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(format!("Max depth must not exceed {}", MAX_DEPTH_LIMIT));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_elements_per_node: Self::default_max_elements_per_node(),
            max_depth: Self::default_max_depth(),
        }
    }
}
