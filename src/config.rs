use std::{fs, path::Path, thread};

use serde::{Deserialize, Serialize};
use tweetprep::reader::Layout;

use crate::{
    cli::{CleanArgs, PreviewArgs},
    error::ConfigError,
};

/// Settings for a cleaning run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub workers: usize,
    pub batch_size: usize,
    pub progress_every: u64,
    pub limit: Option<u64>,
    pub drop_empty: bool,
    pub layout: Layout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: thread::available_parallelism().map_or(1, |n| n.get()),
            batch_size: 1_000,
            progress_every: 10_000,
            limit: None,
            drop_empty: false,
            layout: Layout::default(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents =
            fs::read_to_string(path).map_err(|error| ConfigError::File(error.kind()))?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(contents)
            .map_err(|error| ConfigError::Serialization(error.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// File settings (or defaults) overridden by whatever the flags set.
    pub fn from_args(args: &CleanArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(workers) = args.workers {
            config.workers = workers.get();
        }
        if let Some(batch_size) = args.batch_size {
            config.batch_size = batch_size.get();
        }
        if let Some(progress_every) = args.progress_every {
            config.progress_every = progress_every.get();
        }
        if args.limit.is_some() {
            config.limit = args.limit;
        }
        config.drop_empty |= args.drop_empty;
        config.layout.has_headers |= args.has_headers;

        config.validate()?;
        Ok(config)
    }

    /// Column layout for `preview`: the config file's layout, or the default.
    pub fn preview_layout(args: &PreviewArgs) -> Result<Layout, ConfigError> {
        let mut layout = match &args.config {
            Some(path) => Self::load(path)?.layout,
            None => Layout::default(),
        };
        layout.has_headers |= args.has_headers;
        Ok(layout)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::Invalid("workers must be at least 1".into()));
        }
        if self.batch_size == 0 {
            return Err(ConfigError::Invalid("batch_size must be at least 1".into()));
        }
        if self.progress_every == 0 {
            return Err(ConfigError::Invalid("progress_every must be at least 1".into()));
        }

        let Layout { label, id, text, .. } = self.layout;
        if label == text || id == text || label == id {
            return Err(ConfigError::Invalid(format!(
                "layout columns must differ (label {label}, id {id}, text {text})"
            )));
        }

        Ok(())
    }
}
