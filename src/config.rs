use regex::Regex;
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;

fn expand_placeholders(text: &str) -> Result<String, ConfigError> {
    let env_re =
        Regex::new(r"\$ENV\{([^}]+)\}").map_err(|e| ConfigError::Invalid(e.to_string()))?;
    let file_re =
        Regex::new(r"\$FILE\{([^}]+)\}").map_err(|e| ConfigError::Invalid(e.to_string()))?;
    let mut out = String::new();
    let mut last = 0;
    for caps in env_re.captures_iter(text) {
        let m = caps.get(0).unwrap();
        out.push_str(&text[last..m.start()]);
        let var = std::env::var(&caps[1]).map_err(|e| ConfigError::Placeholder {
            placeholder: m.as_str().to_string(),
            reason: e.to_string(),
        })?;
        out.push_str(&var);
        last = m.end();
    }
    out.push_str(&text[last..]);
    let text = out;
    let mut out = String::new();
    let mut last = 0;
    for caps in file_re.captures_iter(&text) {
        let m = caps.get(0).unwrap();
        out.push_str(&text[last..m.start()]);
        let contents =
            std::fs::read_to_string(&caps[1]).map_err(|e| ConfigError::Placeholder {
                placeholder: m.as_str().to_string(),
                reason: e.to_string(),
            })?;
        out.push_str(&contents);
        last = m.end();
    }
    out.push_str(&text[last..]);
    Ok(out)
}

fn deserialize_extensions<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ExtensionsVisitor;

    impl<'de> Visitor<'de> for ExtensionsVisitor {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a list of extension strings")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut extensions = Vec::new();
            while let Some(ext) = seq.next_element::<String>()? {
                let ext = ext.to_lowercase();
                if ext.is_empty() {
                    return Err(de::Error::custom("extension must not be empty"));
                }
                extensions.push(ext);
            }
            Ok(extensions)
        }
    }

    deserializer.deserialize_seq(ExtensionsVisitor)
}

/// Upload policy table plus the optional check-chain override.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub restrictions: Vec<UploadRule>,
    #[serde(default)]
    pub checks: Vec<String>,
}

/// One field's policy entry as configured.
///
/// A rule may be incomplete (no extensions, or no positive size limit);
/// such a field rejects every upload as unconfigured rather than failing
/// at load time, so one bad entry cannot take down the whole table.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UploadRule {
    pub field: String,
    #[serde(default, deserialize_with = "deserialize_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub max_upload_mb: Option<f64>,
}

/// A complete, enforceable policy entry.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadPolicy {
    pub field: String,
    pub extensions: Vec<String>,
    pub max_upload_mb: f64,
}

impl UploadRule {
    /// Resolve this rule into its enforceable form.
    ///
    /// Returns `None` when the extension set is empty or the size limit is
    /// missing or not positive.
    #[must_use]
    pub fn policy(&self) -> Option<UploadPolicy> {
        if self.extensions.is_empty() {
            return None;
        }
        let max_upload_mb = self.max_upload_mb.filter(|mb| *mb > 0.0)?;
        Some(UploadPolicy {
            field: self.field.clone(),
            extensions: self.extensions.clone(),
            max_upload_mb,
        })
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a `$ENV{..}` or
    /// `$FILE{..}` placeholder cannot be expanded, or the TOML is invalid.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_string(),
            source: e,
        })?;
        let text = expand_placeholders(&text)?;
        let cfg: Config = toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            source: e,
        })?;
        Ok(cfg)
    }

    /// Look up the policy rule for a field. First match wins, so duplicate
    /// field ids behave like the earlier entry.
    #[must_use]
    pub fn restriction_for(&self, field: &str) -> Option<&UploadRule> {
        self.restrictions.iter().find(|r| r.field == field)
    }
}

impl Default for Config {
    /// The built-in policy table used when no configuration file is given.
    fn default() -> Self {
        Self {
            restrictions: vec![
                UploadRule {
                    field: "backgroundImage".to_string(),
                    extensions: vec![
                        "png".to_string(),
                        "jpg".to_string(),
                        "jpeg".to_string(),
                        "gif".to_string(),
                    ],
                    max_upload_mb: Some(50.0),
                },
                UploadRule {
                    field: "uploadedActivity".to_string(),
                    extensions: vec!["gpx".to_string()],
                    max_upload_mb: Some(50.0),
                },
            ],
            checks: Vec::new(),
        }
    }
}
