// Thu Jan 15 2026 - Alex

use crate::config::Config;

/// Closure classes emitted by the C# compiler.
pub const DISPLAY_CLASS_MARKER: &str = "___c__DisplayClass";
/// Iterator and async state machines.
pub const STATE_MACHINE_MARKER: &str = "_d__";

/// Drops compiler-synthesized types whose names are unstable between builds.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    markers: Vec<String>,
}

impl ExclusionFilter {
    pub fn new() -> Self {
        Self {
            markers: vec![DISPLAY_CLASS_MARKER.to_string(), STATE_MACHINE_MARKER.to_string()],
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            markers: config.exclusion_markers.clone(),
        }
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.markers.iter().any(|marker| name.contains(marker.as_str()))
    }
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_markers() {
        let filter = ExclusionFilter::new();

        assert!(filter.is_excluded("Player___c__DisplayClass12_0_o"));
        assert!(filter.is_excluded("Player__Spawn_d__4_o"));
        assert!(!filter.is_excluded("Player_o"));
        assert!(!filter.is_excluded("Player_Fields"));
    }
}
