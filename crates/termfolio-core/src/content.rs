use crate::{Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

static BUILTIN: Lazy<Portfolio> = Lazy::new(|| {
    toml::from_str(include_str!("builtin.toml")).expect("embedded portfolio content must parse")
});

/// Everything the page displays. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub intro: Intro,
    pub work: Vec<TimelineEntry>,
    pub connect: Connect,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intro {
    pub kicker: String,
    pub name: String,
    pub tagline: String,
    pub availability: String,
    pub location: String,
    #[serde(default)]
    pub focus: Vec<String>,
    pub current: Current,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Current {
    pub role: String,
    pub org: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: String,
    pub role: String,
    pub company: String,
    /// May contain literal newlines; layout keeps them.
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connect {
    pub pitch: String,
    pub email: String,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub handle: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub credit: String,
}

/// Where a loaded portfolio came from. Only the `--content` flag case is
/// watched for changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Explicit `--content` path.
    Flag(PathBuf),
    /// `portfolio.toml` found under the user config directory.
    ConfigDir(PathBuf),
    /// Compiled-in default content.
    Builtin,
}

impl ContentSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ContentSource::Flag(path) | ContentSource::ConfigDir(path) => Some(path),
            ContentSource::Builtin => None,
        }
    }

    pub fn is_watchable(&self) -> bool {
        matches!(self, ContentSource::Flag(_))
    }
}

impl Portfolio {
    /// Compiled-in default content.
    pub fn builtin() -> &'static Portfolio {
        &BUILTIN
    }

    /// `<config_dir>/termfolio/portfolio.toml`, if a config directory
    /// exists on this platform.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("termfolio").join("portfolio.toml"))
    }

    /// Load and validate a portfolio file. A missing file is an error
    /// here, unlike the config-dir probe in `resolve`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let portfolio: Portfolio = toml::from_str(&raw).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Resolve content by priority:
    /// 1. Explicit `--content` path (must exist and parse)
    /// 2. `portfolio.toml` in the user config directory, when present
    /// 3. Embedded default content
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, ContentSource)> {
        if let Some(path) = explicit {
            let portfolio = Self::load_from(path)?;
            return Ok((portfolio, ContentSource::Flag(path.to_path_buf())));
        }

        if let Some(path) = Self::default_path()
            && path.exists()
        {
            let portfolio = Self::load_from(&path)?;
            return Ok((portfolio, ContentSource::ConfigDir(path)));
        }

        Ok((Self::builtin().clone(), ContentSource::Builtin))
    }

    fn validate(&self) -> Result<()> {
        if self.intro.name.trim().is_empty() {
            return Err(Error::Content("intro.name must not be empty".to_string()));
        }
        for link in &self.connect.links {
            if link.url.trim().is_empty() {
                return Err(Error::Content(format!(
                    "connect link '{}' has an empty url",
                    link.name
                )));
            }
        }
        Ok(())
    }
}
