// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation catalogs.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A source of translated messages for one language.
pub trait Translator: Send + Sync {
	/// The translation for `msgid`, or `None` if this catalog has no
	/// (non-empty) entry for it.
	fn lookup(&self, msgid: &str) -> Option<String>;
}

pub type SharedTranslator = Arc<dyn Translator>;

/// An in-memory catalog mapping source strings to translations.
///
/// Empty translations are treated as missing, as gettext does for an empty
/// `msgstr`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
	messages: HashMap<String, String>,
}

impl Catalog {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, msgid: impl Into<String>, msgstr: impl Into<String>) {
		self.messages.insert(msgid.into(), msgstr.into());
	}

	pub fn len(&self) -> usize {
		self.messages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}

	pub fn into_shared(self) -> SharedTranslator {
		Arc::new(self)
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Catalog {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut catalog = Catalog::new();
		for (msgid, msgstr) in iter {
			catalog.insert(msgid, msgstr);
		}
		catalog
	}
}

impl Translator for Catalog {
	fn lookup(&self, msgid: &str) -> Option<String> {
		self.messages
			.get(msgid)
			.filter(|msgstr| !msgstr.is_empty())
			.cloned()
	}
}

/// Compiled MO catalogs. `gettext` hands back the `msgid` it was given when
/// there is no entry, so a miss is detected by pointer identity.
impl Translator for gettext::Catalog {
	fn lookup(&self, msgid: &str) -> Option<String> {
		let msgstr = self.gettext(msgid);
		if std::ptr::eq(msgstr, msgid) {
			None
		} else {
			Some(msgstr.to_string())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_lookup_hits_and_misses() {
		let catalog: Catalog = [("Hello", "Bonjour"), ("Yes", "Oui")].into_iter().collect();

		assert_eq!(catalog.lookup("Hello").as_deref(), Some("Bonjour"));
		assert_eq!(catalog.lookup("Goodbye"), None);
		assert_eq!(catalog.len(), 2);
	}

	#[test]
	fn test_empty_translation_is_a_miss() {
		let mut catalog = Catalog::new();
		catalog.insert("Hello", "");

		assert_eq!(catalog.lookup("Hello"), None);
	}

	#[test]
	fn test_lookup_is_exact() {
		let catalog: Catalog = [("Hello", "Bonjour")].into_iter().collect();

		assert_eq!(catalog.lookup("hello"), None);
		assert_eq!(catalog.lookup("Hello "), None);
	}

	#[test]
	fn test_deserializes_from_toml_table() {
		let catalog: Catalog = toml::from_str(
			r#"
			"Hello" = "Hola"
			"Submit" = "Enviar"
			"#,
		)
		.unwrap();

		assert_eq!(catalog.lookup("Submit").as_deref(), Some("Enviar"));
	}

	#[test]
	fn test_empty_gettext_catalog_misses() {
		let catalog = gettext::Catalog::empty();

		assert_eq!(Translator::lookup(&catalog, "Hello"), None);
	}
}
