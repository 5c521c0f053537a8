//! Generator configuration
//!
//! Only the output path is exposed on the command line; the rest are library-level settings with
//! defaults matching the upstream mustache spec checkout.

use std::path::PathBuf;

use crate::spec::{SPEC_EXTENSION, TopicFilter};

/// Default location of the generated file.
pub const DEFAULT_OUTPUT: &str = "mustache_spec_test.rs";

/// Default root of the spec corpus.
pub const DEFAULT_SPEC_ROOT: &str = "ext/spec/specs";

/// Default renderer called by generated tests.
pub const DEFAULT_RENDERER: &str = "crate::render";

/// Name of the generator binary, as recorded in the DO-NOT-EDIT header.
pub const GENERATOR_COMMAND: &str = "mustache-specgen";

/// Generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory walked for spec documents
    pub spec_root: PathBuf,
    /// Topic allow-list applied to spec paths
    pub topics: TopicFilter,
    /// Extension marking spec documents
    pub extension: String,
    /// Where the generated file is written
    pub output: PathBuf,
    /// Path of the `render(&str, &serde_json::Value) -> String` function under test
    pub renderer_path: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            spec_root: PathBuf::from(DEFAULT_SPEC_ROOT),
            topics: TopicFilter::default(),
            extension: SPEC_EXTENSION.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            renderer_path: DEFAULT_RENDERER.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spec root directory
    pub fn with_spec_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.spec_root = root.into();
        self
    }

    /// Set the topic allow-list
    pub fn with_topics(mut self, topics: TopicFilter) -> Self {
        self.topics = topics;
        self
    }

    /// Set the output path
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the renderer path used by generated tests
    pub fn with_renderer_path(mut self, path: impl Into<String>) -> Self {
        self.renderer_path = path.into();
        self
    }

    /// The command line that reproduces this run.
    pub fn command_line(&self) -> String {
        format!("{} --output {}", GENERATOR_COMMAND, self.output.display())
    }
}
