use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ScenarioError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Toml(toml::de::Error),
    Json {
        step: usize,
        source: serde_json::Error,
    },
    UnsupportedFormat {
        found: Option<String>,
    },
    UnknownOp {
        step: usize,
        op: String,
    },
    UnknownMode {
        mode: String,
    },
    /// Both `value` and `json` were given for one step.
    ConflictingValue {
        step: usize,
    },
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Toml(err) => write!(f, "invalid scenario TOML: {err}"),
            Self::Json { step, source } => write!(f, "step {step}: invalid json value: {source}"),
            Self::UnsupportedFormat { found: Some(found) } => {
                write!(f, "unsupported scenario format `{found}`")
            }
            Self::UnsupportedFormat { found: None } => {
                write!(f, "missing required `format` field")
            }
            Self::UnknownOp { step, op } => {
                write!(f, "step {step}: unknown op `{op}` (expected `set` or `remove`)")
            }
            Self::UnknownMode { mode } => {
                write!(f, "unknown mode `{mode}` (expected `attributes` or `properties`)")
            }
            Self::ConflictingValue { step } => {
                write!(f, "step {step}: `value` and `json` are mutually exclusive")
            }
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Toml(err) => Some(err),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for ScenarioError {
    fn from(err: toml::de::Error) -> Self {
        Self::Toml(err)
    }
}
