//! `.tidyclass.toml` configuration.
//!
//! Every section is optional and every key has a default, so an empty file
//! (or no file at all) is a valid configuration. Command-line flags are
//! applied on top with [`TidyConfig::apply_overrides`].

mod loader;

pub use loader::{directory_ancestors, load_config, load_config_from, parse_config, CONFIG_FILE_NAME};

use crate::io::walker::DEFAULT_IGNORE_PATTERNS;
use crate::io::FormatterKind;
use crate::sorting::{DocTagFilter, OverloadPolicy, DEFAULT_SKIP_TAG};
use serde::{Deserialize, Serialize};

fn default_extensions() -> Vec<String> {
    vec!["ts".to_string()]
}

fn default_ignore() -> Vec<String> {
    DEFAULT_IGNORE_PATTERNS.iter().map(|p| p.to_string()).collect()
}

fn default_skip_tag() -> String {
    DEFAULT_SKIP_TAG.to_string()
}

fn default_enabled() -> bool {
    true
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TidyConfig {
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub sorting: SortingConfig,

    #[serde(default)]
    pub formatter: FormatterConfig,

    #[serde(default)]
    pub parallel: ParallelConfig,
}

/// Which files are considered when no single file is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// File extensions to sort, without the leading dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns relative to the search root
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignore: default_ignore(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortingConfig {
    #[serde(default)]
    pub overloads: OverloadPolicy,

    /// Doc-comment tag that excludes a class. Empty disables exclusion.
    #[serde(default = "default_skip_tag")]
    pub skip_tag: String,
}

impl Default for SortingConfig {
    fn default() -> Self {
        Self {
            overloads: OverloadPolicy::default(),
            skip_tag: default_skip_tag(),
        }
    }
}

impl SortingConfig {
    /// The exclusion filter, or `None` when the tag is disabled.
    pub fn skip_filter(&self) -> Option<DocTagFilter> {
        let tag = self.skip_tag.trim();
        (!tag.is_empty()).then(|| DocTagFilter::new(tag))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatterConfig {
    #[serde(default)]
    pub tool: FormatterKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallelConfig {
    /// When disabled, files are processed sequentially
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Worker threads; 0 uses every available core
    #[serde(default)]
    pub jobs: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            jobs: 0,
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub formatter: Option<FormatterKind>,
    pub overloads: Option<OverloadPolicy>,
    pub no_parallel: bool,
    pub jobs: Option<usize>,
}

impl TidyConfig {
    pub fn apply_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(tool) = overrides.formatter {
            self.formatter.tool = tool;
        }
        if let Some(policy) = overrides.overloads {
            self.sorting.overloads = policy;
        }
        if overrides.no_parallel {
            self.parallel.enabled = false;
        }
        if let Some(jobs) = overrides.jobs {
            self.parallel.jobs = jobs;
        }
        self
    }

    /// Default configuration as TOML, used to seed a new config file.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&TidyConfig::default()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, TidyConfig::default());
        assert_eq!(config.discovery.extensions, vec!["ts".to_string()]);
        assert_eq!(config.sorting.skip_tag, DEFAULT_SKIP_TAG);
        assert!(config.parallel.enabled);
    }

    #[test]
    fn test_partial_sections() {
        let config = parse_config(indoc! {r#"
            [sorting]
            overloads = "reject"

            [formatter]
            tool = "prettier"
        "#})
        .unwrap();

        assert_eq!(config.sorting.overloads, OverloadPolicy::Reject);
        assert_eq!(config.sorting.skip_tag, DEFAULT_SKIP_TAG);
        assert_eq!(config.formatter.tool, FormatterKind::Prettier);
        assert_eq!(config.discovery, DiscoveryConfig::default());
    }

    #[test]
    fn test_empty_skip_tag_disables_filter() {
        let sorting = SortingConfig {
            skip_tag: "  ".to_string(),
            ..SortingConfig::default()
        };
        assert!(sorting.skip_filter().is_none());
        assert!(SortingConfig::default().skip_filter().is_some());
    }

    #[test]
    fn test_overrides_win() {
        let config = TidyConfig::default().apply_overrides(&ConfigOverrides {
            formatter: Some(FormatterKind::Biome),
            overloads: None,
            no_parallel: true,
            jobs: Some(2),
        });

        assert_eq!(config.formatter.tool, FormatterKind::Biome);
        assert_eq!(config.sorting.overloads, OverloadPolicy::Group);
        assert!(!config.parallel.enabled);
        assert_eq!(config.parallel.jobs, 2);
    }

    #[test]
    fn test_default_toml_parses_back() {
        let text = TidyConfig::default_toml();
        assert!(text.contains("[discovery]"));
        assert_eq!(parse_config(&text).unwrap(), TidyConfig::default());
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        assert!(parse_config("[scoring]\nweight = 1").is_err());
    }
}
