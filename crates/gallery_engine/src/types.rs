use std::fmt;

use url::Url;

/// The two page surfaces a discovery run populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Grid,
    Ribbon,
}

/// The full probe set for one surface: numbered files `{stem}{n}.{ext}`
/// under `{base}/{folder}` for `n` in `1..=count`, every candidate
/// extension per index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryPlan {
    base: Url,
    folder: String,
    stem: String,
    count: u32,
    extensions: Vec<String>,
}

impl DiscoveryPlan {
    pub fn new(
        base_url: &str,
        folder: impl Into<String>,
        stem: impl Into<String>,
        count: u32,
        extensions: Vec<String>,
    ) -> Result<Self, ProbeError> {
        let mut base = Url::parse(base_url)
            .map_err(|err| ProbeError::new(FailureKind::InvalidUrl, err.to_string()))?;
        // Url::join replaces the last path segment unless the base ends
        // with a slash.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            base,
            folder: folder.into(),
            stem: stem.into(),
            count,
            extensions,
        })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Number of probes a run of this plan issues: `count × extensions`.
    pub fn total_probes(&self) -> usize {
        self.count as usize * self.extensions.len()
    }

    /// Expands the plan into concrete probe targets, index-major and in
    /// candidate-extension order within each index.
    pub fn targets(&self) -> Result<Vec<ProbeTarget>, ProbeError> {
        let folder = self.folder.trim_matches('/');
        let mut targets = Vec::with_capacity(self.total_probes());
        for index in 1..=self.count {
            for extension in &self.extensions {
                let relative = format!("{folder}/{stem}{index}.{extension}", stem = self.stem);
                let url = self
                    .base
                    .join(&relative)
                    .map_err(|err| ProbeError::new(FailureKind::InvalidUrl, err.to_string()))?;
                targets.push(ProbeTarget {
                    index,
                    extension: extension.clone(),
                    url,
                });
            }
        }
        Ok(targets)
    }
}

/// One `(index, extension)` pair to probe. Transient; not retained after
/// discovery completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    pub index: u32,
    pub extension: String,
    pub url: Url,
}

/// An index for which at least one extension probe succeeded, paired with
/// the winning extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHit {
    pub index: u32,
    pub extension: String,
    pub url: Url,
}

/// Outcome of one discovery run. `resolved` is ordered by ascending index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryReport {
    pub resolved: Vec<ResolvedHit>,
    /// Probes that reported an outcome. Always equals the plan's
    /// `total_probes`; discovery never completes on a partial set.
    pub probes_settled: usize,
    pub probes_failed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    DiscoveryCompleted {
        surface: Surface,
        report: DiscoveryReport,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeError {
    pub kind: FailureKind,
    pub message: String,
}

impl ProbeError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    NotAnImage { content_type: Option<String> },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::NotAnImage { content_type } => {
                write!(f, "not an image (content type {content_type:?})")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
