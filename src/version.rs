//! Version string resolution from build metadata

use std::fmt;

/// Number of commit characters shown after the version
pub const SHA_LEN: usize = 7;

/// Placeholder used when no version metadata is available
pub const UNKNOWN_VERSION: &str = "unknown (built from source)";

/// Version injected by the release build (`GUM_VERSION=1.2.3 cargo build`)
const INJECTED_VERSION: Option<&str> = option_env!("GUM_VERSION");

/// Commit injected by the release build (`GUM_COMMIT_SHA=...`)
const INJECTED_COMMIT: Option<&str> = option_env!("GUM_COMMIT_SHA");

/// Package metadata recorded by Cargo; absent when built without it
const PACKAGE_VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// Resolved version information, used only for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    version: String,
    commit: Option<String>,
}

impl VersionInfo {
    /// Resolve version information from this binary's build metadata
    #[must_use]
    pub fn from_build() -> Self {
        Self::resolve(INJECTED_VERSION, PACKAGE_VERSION, INJECTED_COMMIT)
    }

    /// Resolve from explicit metadata
    ///
    /// The injected version wins over package metadata, which wins over
    /// [`UNKNOWN_VERSION`]. Empty strings count as missing.
    #[must_use]
    pub fn resolve(injected: Option<&str>, package: Option<&str>, commit: Option<&str>) -> Self {
        let version = [injected, package]
            .into_iter()
            .flatten()
            .find(|v| !v.is_empty())
            .unwrap_or(UNKNOWN_VERSION)
            .to_owned();

        Self {
            version,
            commit: commit.filter(|c| !c.is_empty()).map(str::to_owned),
        }
    }

    /// Version without the commit suffix
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Leading [`SHA_LEN`] characters of the commit, if it is long enough
    #[must_use]
    pub fn short_commit(&self) -> Option<&str> {
        let commit = self.commit.as_deref()?;
        if commit.chars().count() < SHA_LEN {
            return None;
        }
        let end = commit
            .char_indices()
            .nth(SHA_LEN)
            .map_or(commit.len(), |(i, _)| i);
        Some(&commit[..end])
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.version)?;
        if let Some(sha) = self.short_commit() {
            write!(f, " ({sha})")?;
        }
        Ok(())
    }
}
