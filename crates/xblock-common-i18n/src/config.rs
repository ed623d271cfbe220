// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! i18n configuration.
//!
//! Layered from lowest to highest precedence: built-in defaults, an optional
//! TOML document (`[i18n]` table), then environment variables:
//!
//! - `XBLOCK_DEFAULT_LANGUAGE`
//! - `XBLOCK_FALLBACK_LANGUAGE`

use serde::Deserialize;
use tracing::debug;

use crate::error::{I18nError, I18nResult};
use crate::language::{self, DEFAULT_LANGUAGE};

pub const ENV_DEFAULT_LANGUAGE: &str = "XBLOCK_DEFAULT_LANGUAGE";
pub const ENV_FALLBACK_LANGUAGE: &str = "XBLOCK_FALLBACK_LANGUAGE";

/// Fully resolved i18n configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nConfig {
	pub default_language: String,
	pub fallback_language: String,
}

impl Default for I18nConfig {
	fn default() -> Self {
		Self {
			default_language: DEFAULT_LANGUAGE.to_string(),
			fallback_language: DEFAULT_LANGUAGE.to_string(),
		}
	}
}

/// A partial configuration from a single source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct I18nConfigLayer {
	pub default_language: Option<String>,
	pub fallback_language: Option<String>,
}

impl I18nConfigLayer {
	/// Overlay `other` on top of `self`.
	pub fn merge(self, other: I18nConfigLayer) -> Self {
		Self {
			default_language: other.default_language.or(self.default_language),
			fallback_language: other.fallback_language.or(self.fallback_language),
		}
	}

	pub fn from_toml_str(content: &str) -> I18nResult<Self> {
		#[derive(Deserialize)]
		struct File {
			#[serde(default)]
			i18n: I18nConfigLayer,
		}

		let file: File = toml::from_str(content).map_err(|e| I18nError::Config(e.to_string()))?;
		Ok(file.i18n)
	}

	/// Read the layer from `lookup`, treating empty values as unset.
	pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
		let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
		Self {
			default_language: var(ENV_DEFAULT_LANGUAGE),
			fallback_language: var(ENV_FALLBACK_LANGUAGE),
		}
	}

	pub fn from_env() -> Self {
		Self::from_vars(|name| std::env::var(name).ok())
	}

	/// Resolve into a full configuration, validating language codes.
	pub fn finalize(self) -> I18nResult<I18nConfig> {
		let defaults = I18nConfig::default();
		let default_language = self.default_language.unwrap_or(defaults.default_language);
		let fallback_language = self.fallback_language.unwrap_or(defaults.fallback_language);

		Ok(I18nConfig {
			default_language: language::require_valid(&default_language)?,
			fallback_language: language::require_valid(&fallback_language)?,
		})
	}
}

impl I18nConfig {
	/// Load configuration from an optional TOML document and the environment.
	pub fn load(toml: Option<&str>) -> I18nResult<Self> {
		let mut layer = I18nConfigLayer::default();
		if let Some(content) = toml {
			debug!("loading i18n config from TOML");
			layer = layer.merge(I18nConfigLayer::from_toml_str(content)?);
		}
		layer.merge(I18nConfigLayer::from_env()).finalize()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	#[test]
	fn test_defaults() {
		let config = I18nConfigLayer::default().finalize().unwrap();
		assert_eq!(config, I18nConfig::default());
		assert_eq!(config.default_language, "en");
	}

	#[test]
	fn test_toml_layer() {
		let layer = I18nConfigLayer::from_toml_str(
			r#"
			[i18n]
			default_language = "es_MX"
			"#,
		)
		.unwrap();

		let config = layer.finalize().unwrap();
		assert_eq!(config.default_language, "es-mx");
		assert_eq!(config.fallback_language, "en");
	}

	#[test]
	fn test_toml_without_section_is_empty() {
		let layer = I18nConfigLayer::from_toml_str("[other]\nkey = 1\n").unwrap();
		assert_eq!(layer, I18nConfigLayer::default());
	}

	#[test]
	fn test_toml_unknown_key_is_rejected() {
		let err = I18nConfigLayer::from_toml_str("[i18n]\nlanguage = \"fr\"\n").unwrap_err();
		assert!(matches!(err, I18nError::Config(_)));
	}

	#[test]
	fn test_env_overrides_toml() {
		let vars: HashMap<&str, &str> = [(ENV_DEFAULT_LANGUAGE, "de")].into_iter().collect();
		let env = I18nConfigLayer::from_vars(|name| vars.get(name).map(|v| v.to_string()));

		let toml = I18nConfigLayer::from_toml_str(
			"[i18n]\ndefault_language = \"fr\"\nfallback_language = \"es\"\n",
		)
		.unwrap();

		let config = toml.merge(env).finalize().unwrap();
		assert_eq!(config.default_language, "de");
		assert_eq!(config.fallback_language, "es");
	}

	#[test]
	fn test_empty_env_value_is_unset() {
		let env = I18nConfigLayer::from_vars(|_| Some(String::new()));
		assert_eq!(env, I18nConfigLayer::default());
	}

	#[test]
	fn test_invalid_language_fails_finalize() {
		let layer = I18nConfigLayer {
			default_language: Some("not a language".to_string()),
			fallback_language: None,
		};

		assert_eq!(
			layer.finalize().unwrap_err(),
			I18nError::InvalidLanguage("not a language".to_string())
		);
	}
}
