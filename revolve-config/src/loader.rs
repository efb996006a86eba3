use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use revolve_model::CarouselOptions;
use serde::Serialize;
use tracing::{debug, info};

use crate::env::EnvOverrides;
use crate::source::CarouselConfigSource;

pub const CONFIG_PATH_VAR: &str = "REVOLVE_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "REVOLVE_CONFIG_JSON";

const DEFAULT_FILES: &[&str] = &[
    "revolve.toml",
    "revolve.json",
    "config/revolve.toml",
    "config/revolve.json",
];

/// Resolved carousel options plus where they came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselConfig {
    pub options: CarouselOptions,
    pub source: CarouselConfigSource,
    /// `REVOLVE_*` variables that overrode a field.
    pub env_overrides: Vec<&'static str>,
}

impl CarouselConfig {
    /// Load options from the process environment, searching the working
    /// directory for default files.
    ///
    /// Evaluation order:
    /// 1) `$REVOLVE_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$REVOLVE_CONFIG_JSON` (inline JSON),
    /// 3) the first default file that exists,
    /// 4) defaults.
    ///
    /// Per-field `REVOLVE_*` overrides are applied last, then the options
    /// are validated.
    pub fn load_from_env() -> anyhow::Result<Self> {
        Self::load_with(|name| std::env::var(name).ok(), Path::new("."))
    }

    /// Same as [`Self::load_from_env`] with an explicit variable lookup and
    /// default-file search root.
    pub fn load_with<F>(lookup: F, search_root: &Path) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (mut options, source) = Self::load_base(&lookup, search_root)?;

        let overrides = EnvOverrides::from_lookup(&lookup)
            .context("invalid carousel environment override")?;
        let env_overrides = overrides.apply(&mut options);
        if !env_overrides.is_empty() {
            debug!(?env_overrides, "applied carousel environment overrides");
        }

        options.validate().with_context(|| {
            format!("invalid carousel configuration from {source}")
        })?;
        info!(%source, axis = %options.axis, "carousel configuration loaded");

        Ok(Self {
            options,
            source,
            env_overrides,
        })
    }

    fn load_base<F>(
        lookup: &F,
        search_root: &Path,
    ) -> anyhow::Result<(CarouselOptions, CarouselConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(CONFIG_PATH_VAR)
            && !raw.trim().is_empty()
        {
            let path = PathBuf::from(raw.trim());
            let options = read_options(&path)?;
            return Ok((options, CarouselConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_VAR)
            && !raw.trim().is_empty()
        {
            let options = OptionsFormat::Json
                .parse(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            return Ok((options, CarouselConfigSource::EnvInline));
        }

        let discovered = DEFAULT_FILES
            .iter()
            .map(|candidate| search_root.join(candidate))
            .find(|path| path.is_file());
        if let Some(path) = discovered {
            let options = read_options(&path)?;
            return Ok((options, CarouselConfigSource::File(path)));
        }

        Ok((CarouselOptions::default(), CarouselConfigSource::Default))
    }
}

/// Encoding of a carousel options document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsFormat {
    Toml,
    Json,
}

impl OptionsFormat {
    /// Format named by the file extension, if it names one.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// An options document in JSON is an object; anything else is TOML.
    pub fn sniff(contents: &str) -> Self {
        if contents.trim_start().starts_with('{') {
            Self::Json
        } else {
            Self::Toml
        }
    }

    pub fn parse(self, contents: &str) -> anyhow::Result<CarouselOptions> {
        match self {
            Self::Toml => toml::from_str(contents)
                .context("carousel options are not valid TOML"),
            Self::Json => serde_json::from_str(contents)
                .context("carousel options are not valid JSON"),
        }
    }
}

/// Read carousel options from `path`, picking the format from the extension
/// or, failing that, from the contents.
pub fn read_options(path: &Path) -> anyhow::Result<CarouselOptions> {
    let contents = fs::read_to_string(path).with_context(|| {
        format!("failed to read carousel config from {}", path.display())
    })?;
    let format = OptionsFormat::from_path(path)
        .unwrap_or_else(|| OptionsFormat::sniff(&contents));
    debug!(path = %path.display(), ?format, "reading carousel options");
    format
        .parse(&contents)
        .with_context(|| format!("invalid carousel config {}", path.display()))
}

/// Load a `.env` file into the process environment. With no explicit path
/// the usual `.env` lookup applies. A missing file is not an error; the
/// return value says whether one was loaded. Any other I/O failure, such as
/// an unreadable file, is.
pub fn load_env_file(path: Option<&Path>) -> anyhow::Result<bool> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|_| true),
        None => dotenvy::dotenv().map(|_| true),
    };
    match loaded {
        Ok(loaded) => Ok(loaded),
        Err(dotenvy::Error::Io(err)) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err).context("failed to load .env file"),
    }
}
