use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::sheet::{MonthKey, WorkedDays};
use crate::template::TemplateId;

/// The text blocks framing the attendance table.
///
/// All values are opaque to the sheet generation, a missing value renders
/// as empty text and is never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateText {
    pub sender: String,
    pub receiver: String,
    pub subject_prefix: String,
    pub total_label: String,
    pub sender_signature_title: String,
    pub receiver_signature_title: String,
}

impl TemplateText {
    /// Reads the text blocks from a toml file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        Ok(toml::from_str(&crate::utils::read_to_string(path)?)?)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    month: MonthKey,
    worked_days: WorkedDays,
    template: TemplateId,
    output: PathBuf,
    text: TemplateText,
}

impl Config {
    #[must_use]
    pub fn builder(month: MonthKey) -> ConfigBuilder {
        ConfigBuilder {
            month,
            worked_days: WorkedDays::new(),
            template: TemplateId::default(),
            output: None,
            text: TemplateText::default(),
        }
    }

    #[must_use]
    pub const fn month(&self) -> MonthKey {
        self.month
    }

    #[must_use]
    pub const fn worked_days(&self) -> &WorkedDays {
        &self.worked_days
    }

    #[must_use]
    pub const fn template(&self) -> TemplateId {
        self.template
    }

    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    #[must_use]
    pub const fn text(&self) -> &TemplateText {
        &self.text
    }
}

#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    month: MonthKey,
    worked_days: WorkedDays,
    template: TemplateId,
    output: Option<PathBuf>,
    text: TemplateText,
}

impl ConfigBuilder {
    pub fn worked_days(&mut self, worked_days: WorkedDays) -> &mut Self {
        self.worked_days = worked_days;
        self
    }

    pub fn template(&mut self, template: TemplateId) -> &mut Self {
        self.template = template;
        self
    }

    pub fn output(&mut self, output: impl Into<PathBuf>) -> &mut Self {
        self.output = Some(output.into());
        self
    }

    pub fn text(&mut self, text: TemplateText) -> &mut Self {
        self.text = text;
        self
    }

    #[must_use]
    pub fn build(&self) -> Config {
        let output = self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!(
                "cra-{:04}-{:02}.txt",
                self.month.year().as_i64(),
                self.month.month().as_usize()
            ))
        });

        Config {
            month: self.month,
            worked_days: self.worked_days.clone(),
            template: self.template,
            output,
            text: self.text.clone(),
        }
    }
}
