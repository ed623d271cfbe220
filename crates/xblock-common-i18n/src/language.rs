// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Process-wide current language.
//!
//! There is one selected language per process. It starts at the configured
//! default and can be switched with [`activate`] and reset with
//! [`deactivate`].

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

use crate::config::I18nConfig;
use crate::error::{I18nError, I18nResult};

/// Language used when nothing else is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

struct LanguageState {
	default: String,
	active: Option<String>,
}

static STATE: Lazy<RwLock<LanguageState>> = Lazy::new(|| {
	RwLock::new(LanguageState {
		default: DEFAULT_LANGUAGE.to_string(),
		active: None,
	})
});

/// Normalize a language code to lowercase with `-` separators.
///
/// Returns `None` for codes that are empty or contain anything other than
/// ASCII letters, digits, `-` and `_`.
///
/// ```
/// use xblock_common_i18n::language::normalize;
///
/// assert_eq!(normalize("pt_BR").as_deref(), Some("pt-br"));
/// assert_eq!(normalize(" fr ").as_deref(), Some("fr"));
/// assert_eq!(normalize(""), None);
/// ```
pub fn normalize(code: &str) -> Option<String> {
	let code = code.trim();
	if code.is_empty() || code.starts_with(['-', '_']) || code.ends_with(['-', '_']) {
		return None;
	}

	if !code
		.chars()
		.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
	{
		return None;
	}

	Some(code.to_ascii_lowercase().replace('_', "-"))
}

/// Normalize `code`, failing with [`I18nError::InvalidLanguage`].
pub fn require_valid(code: &str) -> I18nResult<String> {
	normalize(code).ok_or_else(|| I18nError::InvalidLanguage(code.to_string()))
}

/// Resolve the effective language.
///
/// Resolution order (highest to lowest priority):
/// 1. `preferred` (if valid)
/// 2. `default` (if valid)
/// 3. `fallback` (if valid)
/// 4. [`DEFAULT_LANGUAGE`]
pub fn resolve_language(preferred: Option<&str>, default: &str, fallback: &str) -> String {
	preferred
		.and_then(normalize)
		.or_else(|| normalize(default))
		.or_else(|| normalize(fallback))
		.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// Seed the process default language from configuration.
pub fn init(config: &I18nConfig) {
	let default = resolve_language(None, &config.default_language, &config.fallback_language);
	debug!(language = %default, "Initialized default language");
	STATE.write().default = default;
}

/// The currently selected language code.
pub fn get_language() -> String {
	let state = STATE.read();
	state.active.clone().unwrap_or_else(|| state.default.clone())
}

/// Select `code` as the current language.
pub fn activate(code: &str) -> I18nResult<()> {
	let code = require_valid(code)?;
	debug!(language = %code, "Activated language");
	STATE.write().active = Some(code);
	Ok(())
}

/// Drop the selected language, returning to the configured default.
pub fn deactivate() {
	STATE.write().active = None;
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_normalize_lowercases_and_swaps_separator() {
		assert_eq!(normalize("en").as_deref(), Some("en"));
		assert_eq!(normalize("pt_BR").as_deref(), Some("pt-br"));
		assert_eq!(normalize("zh-Hans").as_deref(), Some("zh-hans"));
	}

	#[test]
	fn test_normalize_rejects_malformed() {
		assert_eq!(normalize(""), None);
		assert_eq!(normalize("   "), None);
		assert_eq!(normalize("-en"), None);
		assert_eq!(normalize("en_"), None);
		assert_eq!(normalize("en us"), None);
		assert_eq!(normalize("../fr"), None);
	}

	#[test]
	fn test_require_valid() {
		assert_eq!(require_valid("FR"), Ok("fr".to_string()));
		assert_eq!(
			require_valid(""),
			Err(I18nError::InvalidLanguage(String::new()))
		);
	}

	#[test]
	fn test_preferred_takes_priority() {
		assert_eq!(resolve_language(Some("es"), "fr", "en"), "es");
	}

	#[test]
	fn test_default_when_no_preference() {
		assert_eq!(resolve_language(None, "fr", "en"), "fr");
		assert_eq!(resolve_language(Some(""), "fr", "en"), "fr");
	}

	#[test]
	fn test_fallback_chain() {
		assert_eq!(resolve_language(Some("bad code"), "", "de"), "de");
		assert_eq!(resolve_language(None, "", ""), DEFAULT_LANGUAGE);
	}

	// The current language is process-wide, so every assertion about it
	// lives in this one test.
	#[test]
	fn test_activate_and_deactivate() {
		init(&I18nConfig::default());
		assert_eq!(get_language(), "en");

		activate("fr_CA").unwrap();
		assert_eq!(get_language(), "fr-ca");

		assert!(activate("not valid").is_err());
		assert_eq!(get_language(), "fr-ca");

		deactivate();
		assert_eq!(get_language(), "en");
	}

	proptest! {
		/// Normalization is idempotent.
		#[test]
		fn normalize_is_idempotent(code in "[a-zA-Z]{2,3}([_-][a-zA-Z0-9]{2,8})?") {
			let once = normalize(&code).unwrap();
			prop_assert_eq!(normalize(&once), Some(once.clone()));
		}

		/// Normalized codes never contain uppercase or underscores.
		#[test]
		fn normalized_codes_are_canonical(code in "[a-zA-Z]{2,3}([_-][a-zA-Z0-9]{2,8})?") {
			let normalized = normalize(&code).unwrap();
			prop_assert!(!normalized.contains('_'));
			prop_assert_eq!(normalized.to_ascii_lowercase(), normalized.clone());
		}
	}
}
