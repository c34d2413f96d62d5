//! Generation settings.

use crate::writer::DEFAULT_INDENT_WIDTH;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use visitgen_schema::UntaggedPolicy;

/// Banner date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Generation notice written at the top of every artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Project the headers belong to.
    pub project: String,
    /// Who (or what) generated the headers.
    pub author: String,
    /// Generation date.
    pub date: NaiveDate,
}

impl Banner {
    /// Creates the default banner for the given date.
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            project: "Croix".to_string(),
            author: "visitgen".to_string(),
            date,
        }
    }

    /// Creates the default banner dated today (local time).
    #[must_use]
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    /// Sets the project name.
    #[must_use]
    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    /// Sets the author line.
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Returns the formatted date.
    #[must_use]
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Settings for a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    output_dir: PathBuf,
    indent_width: usize,
    banner: Banner,
    untagged_policy: UntaggedPolicy,
}

impl GeneratorConfig {
    /// Creates a configuration writing into `output_dir` with default settings.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        GeneratorConfigBuilder::new(output_dir).build()
    }

    /// Starts building a configuration writing into `output_dir`.
    #[must_use]
    pub fn builder(output_dir: impl Into<PathBuf>) -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new(output_dir)
    }

    /// Returns the output directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the indentation unit in spaces.
    #[must_use]
    pub const fn indent_width(&self) -> usize {
        self.indent_width
    }

    /// Returns the banner.
    #[must_use]
    pub const fn banner(&self) -> &Banner {
        &self.banner
    }

    /// Returns the untagged-node policy.
    #[must_use]
    pub const fn untagged_policy(&self) -> UntaggedPolicy {
        self.untagged_policy
    }
}

/// Builder for [`GeneratorConfig`].
#[derive(Debug, Clone)]
pub struct GeneratorConfigBuilder {
    output_dir: PathBuf,
    indent_width: usize,
    banner: Option<Banner>,
    date: Option<NaiveDate>,
    untagged_policy: UntaggedPolicy,
}

impl GeneratorConfigBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            indent_width: DEFAULT_INDENT_WIDTH,
            banner: None,
            date: None,
            untagged_policy: UntaggedPolicy::default(),
        }
    }

    /// Sets the indentation unit in spaces.
    #[must_use]
    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Sets the banner.
    #[must_use]
    pub fn banner(mut self, banner: Banner) -> Self {
        self.banner = Some(banner);
        self
    }

    /// Sets the banner date, overriding the banner's own.
    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the treatment of nodes without a type tag.
    #[must_use]
    pub fn untagged_policy(mut self, policy: UntaggedPolicy) -> Self {
        self.untagged_policy = policy;
        self
    }

    /// Builds the configuration. Without an explicit banner or date the
    /// banner is dated today.
    #[must_use]
    pub fn build(self) -> GeneratorConfig {
        let mut banner = match (self.banner, self.date) {
            (Some(banner), _) => banner,
            (None, Some(date)) => Banner::new(date),
            (None, None) => Banner::today(),
        };
        if let Some(date) = self.date {
            banner.date = date;
        }

        GeneratorConfig {
            output_dir: self.output_dir,
            indent_width: self.indent_width,
            banner,
            untagged_policy: self.untagged_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 1, 8).expect("valid date")
    }

    #[test]
    fn test_banner_defaults() {
        let banner = Banner::new(date());
        assert_eq!(banner.project, "Croix");
        assert_eq!(banner.author, "visitgen");
        assert_eq!(banner.date_string(), "2022-01-08");
    }

    #[test]
    fn test_banner_builder() {
        let banner = Banner::new(date()).project("Lox").author("build.rs");
        assert_eq!(banner.project, "Lox");
        assert_eq!(banner.author, "build.rs");
    }

    #[test]
    fn test_config_defaults() {
        let config = GeneratorConfig::new("out");
        assert_eq!(config.output_dir(), Path::new("out"));
        assert_eq!(config.indent_width(), 4);
        assert_eq!(config.untagged_policy(), UntaggedPolicy::Warn);
        assert_eq!(config.banner().project, "Croix");
    }

    #[test]
    fn test_config_builder() {
        let config = GeneratorConfig::builder("out")
            .indent_width(2)
            .banner(Banner::new(date()).project("Lox"))
            .untagged_policy(UntaggedPolicy::Deny)
            .build();

        assert_eq!(config.indent_width(), 2);
        assert_eq!(config.banner().project, "Lox");
        assert_eq!(config.banner().date, date());
        assert_eq!(config.untagged_policy(), UntaggedPolicy::Deny);
    }

    #[test]
    fn test_config_date_overrides_banner() {
        let other = NaiveDate::from_ymd_opt(2021, 12, 6).expect("valid date");
        let config = GeneratorConfig::builder("out")
            .date(other)
            .banner(Banner::new(date()).project("Lox"))
            .build();

        assert_eq!(config.banner().date_string(), "2021-12-06");
        assert_eq!(config.banner().project, "Lox");

        let config = GeneratorConfig::builder("out").date(date()).build();
        assert_eq!(config.banner().date, date());
        assert_eq!(config.banner().author, "visitgen");
    }
}
