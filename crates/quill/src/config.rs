//! Layered TOML configuration.
//!
//! Sources, later overriding earlier:
//! - Bundled defaults (include_str! from quill.toml)
//! - `~/.config/quill/quill.toml`
//! - `./quill.toml`

use config::{Config, File, FileFormat};
use quill_core::Favicon;
use quill_error::{ConfigError, QuillError, QuillResult, TranscriptError, TranscriptErrorKind};
use quill_transcript::{CreateTranscriptOptions, ExportReturnType, FetchLimit, GenerateOptions};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../quill.toml");

/// Defaults for transcript generation.
///
/// # Example
///
/// ```toml
/// [transcript]
/// limit = 500
/// save_images = true
/// favicon = "https://example.org/icon.png"
/// return_type = "attachment"
/// filename = "support-ticket.html"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TranscriptConfig {
    /// Maximum number of messages, `None` for the whole channel
    pub limit: Option<usize>,
    /// Inline image attachments
    pub save_images: bool,
    /// Append the generator footer
    pub powered_by: bool,
    /// Favicon selection
    pub favicon: Favicon,
    /// Output shape
    pub return_type: ExportReturnType,
    /// Attachment file name
    pub filename: Option<String>,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            limit: None,
            save_images: false,
            powered_by: true,
            favicon: Favicon::Guild,
            return_type: ExportReturnType::Attachment,
            filename: None,
        }
    }
}

impl TranscriptConfig {
    /// Build transcript options from these settings.
    ///
    /// # Errors
    ///
    /// Returns `TranscriptErrorKind::InvalidOption` for an empty filename or
    /// favicon URL.
    pub fn to_options(&self) -> QuillResult<CreateTranscriptOptions> {
        if let Favicon::Url(url) = &self.favicon
            && url.trim().is_empty()
        {
            return Err(TranscriptError::new(TranscriptErrorKind::InvalidOption(
                "favicon URL is empty".to_string(),
            ))
            .into());
        }

        let mut generate = GenerateOptions::default()
            .with_save_images(self.save_images)
            .with_powered_by(self.powered_by)
            .with_favicon(self.favicon.clone())
            .with_return_type(self.return_type);

        if let Some(filename) = &self.filename {
            if filename.trim().is_empty() {
                return Err(TranscriptError::new(TranscriptErrorKind::InvalidOption(
                    "filename is empty".to_string(),
                ))
                .into());
            }
            generate = generate.with_filename(filename.clone());
        }

        Ok(CreateTranscriptOptions::default()
            .with_limit(FetchLimit::from(self.limit))
            .with_generate(generate))
    }
}

/// Top-level Quill configuration.
///
/// # Example
///
/// ```no_run
/// use quill::QuillConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = QuillConfig::load()?;
/// let options = config.transcript.to_options()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct QuillConfig {
    /// Transcript defaults
    #[serde(default)]
    pub transcript: TranscriptConfig,
}

impl QuillConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> QuillResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                QuillError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                QuillError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> QuillResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/quill/quill.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("quill").required(false));

        builder
            .build()
            .map_err(|e| {
                QuillError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                QuillError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Bundled defaults only, ignoring user files.
    pub fn bundled() -> QuillResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| {
                QuillError::from(ConfigError::new(format!(
                    "Bundled configuration is invalid: {}",
                    e
                )))
            })
    }
}
