// ============================================================================
// submatch-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for MatchConfig
//
// Fluent construction of MatchConfig from CLI flags. Extensions are
// normalised on the way in and the finished config is validated by build().

use std::path::PathBuf;

use super::{ErrorPolicy, MatchConfig, normalize_extension};
use crate::error::CoreResult;
use crate::matcher::MatchStrategy;

/// Builder for creating MatchConfig instances.
///
/// # Examples
///
/// ```rust
/// use submatch_core::config::{ErrorPolicy, MatchConfigBuilder};
/// use std::path::PathBuf;
///
/// let config = MatchConfigBuilder::new(PathBuf::from("/videos"))
///     .video_extensions(["mp4", ".MKV"])
///     .error_policy(ErrorPolicy::SkipAndWarn)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.video_extensions, vec!["mp4", "mkv"]);
/// assert_eq!(config.subtitle_paths, vec![PathBuf::from("/videos")]);
/// ```
#[derive(Debug, Clone)]
pub struct MatchConfigBuilder {
    video_path: PathBuf,
    subtitle_paths: Vec<PathBuf>,
    video_extensions: Option<Vec<String>>,
    subtitle_extensions: Option<Vec<String>>,
    tolerance_secs: u64,
    strategy: MatchStrategy,
    error_policy: ErrorPolicy,
    parallel: bool,
}

impl MatchConfigBuilder {
    /// Creates a builder for the given video location with default values.
    pub fn new(video_path: PathBuf) -> Self {
        Self {
            video_path,
            subtitle_paths: Vec::new(),
            video_extensions: None,
            subtitle_extensions: None,
            tolerance_secs: super::DEFAULT_TOLERANCE_SECS,
            strategy: MatchStrategy::default(),
            error_policy: ErrorPolicy::default(),
            parallel: false,
        }
    }

    /// Adds a location to search for subtitles.
    pub fn subtitle_path(mut self, path: PathBuf) -> Self {
        self.subtitle_paths.push(path);
        self
    }

    /// Adds several subtitle locations, keeping their order.
    pub fn subtitle_paths<I>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.subtitle_paths.extend(paths);
        self
    }

    pub fn video_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.video_extensions = Some(normalize_all(extensions));
        self
    }

    pub fn subtitle_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.subtitle_extensions = Some(normalize_all(extensions));
        self
    }

    pub fn tolerance_secs(mut self, tolerance_secs: u64) -> Self {
        self.tolerance_secs = tolerance_secs;
        self
    }

    pub fn strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// When no subtitle location was added, the video location is used.
    pub fn build(self) -> CoreResult<MatchConfig> {
        let mut config = MatchConfig::new(self.video_path);

        if !self.subtitle_paths.is_empty() {
            config.subtitle_paths = self.subtitle_paths;
        }
        if let Some(extensions) = self.video_extensions {
            config.video_extensions = extensions;
        }
        if let Some(extensions) = self.subtitle_extensions {
            config.subtitle_extensions = extensions;
        }
        config.tolerance_secs = self.tolerance_secs;
        config.strategy = self.strategy;
        config.error_policy = self.error_policy;
        config.parallel = self.parallel;

        config.validate()?;
        Ok(config)
    }
}

fn normalize_all<I, S>(extensions: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for ext in extensions {
        if let Some(ext) = normalize_extension(ext.as_ref()) {
            if !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }
    }
    normalized
}
