// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Active translation contexts, one per language.
//!
//! The process-wide [`TranslationRegistry::global`] is shared by every block
//! instance. Contexts are created on first use and are never removed; the
//! only mutation is [`TranslationContext::merge`], which appends a catalog.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

use crate::error::I18nResult;
use crate::language;
use crate::translator::SharedTranslator;

/// The merged translations for one language.
///
/// Catalogs are consulted newest first, so a later merge shadows earlier
/// entries for the same msgid while leaving the rest visible.
pub struct TranslationContext {
	language: String,
	layers: RwLock<Vec<SharedTranslator>>,
}

impl TranslationContext {
	fn new(language: String) -> Self {
		Self {
			language,
			layers: RwLock::new(Vec::new()),
		}
	}

	pub fn language(&self) -> &str {
		&self.language
	}

	/// Merge `translator` into this context.
	///
	/// Merging a translator that is already part of the context (the same
	/// `Arc`) is a no-op. Returns whether the context changed.
	pub fn merge(&self, translator: SharedTranslator) -> bool {
		let mut layers = self.layers.write();
		if layers.iter().any(|layer| Arc::ptr_eq(layer, &translator)) {
			return false;
		}

		layers.push(translator);
		debug!(language = %self.language, catalogs = layers.len(), "Merged catalog");
		true
	}

	/// Look `msgid` up across all merged catalogs.
	pub fn lookup(&self, msgid: &str) -> Option<String> {
		self.layers
			.read()
			.iter()
			.rev()
			.find_map(|layer| layer.lookup(msgid))
	}

	/// The translation of `msgid`, or `msgid` itself.
	pub fn gettext(&self, msgid: &str) -> String {
		self.lookup(msgid).unwrap_or_else(|| msgid.to_string())
	}

	/// Number of distinct catalogs merged so far.
	pub fn catalog_count(&self) -> usize {
		self.layers.read().len()
	}
}

impl std::fmt::Debug for TranslationContext {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TranslationContext")
			.field("language", &self.language)
			.field("catalogs", &self.catalog_count())
			.finish()
	}
}

/// Translation contexts keyed by normalized language code.
#[derive(Debug, Default)]
pub struct TranslationRegistry {
	contexts: RwLock<HashMap<String, Arc<TranslationContext>>>,
}

static GLOBAL: Lazy<TranslationRegistry> = Lazy::new(TranslationRegistry::new);

impl TranslationRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// The registry shared by the whole process.
	pub fn global() -> &'static TranslationRegistry {
		&GLOBAL
	}

	/// Get the context for `language`, creating it on first use.
	pub fn context_for(&self, language: &str) -> I18nResult<Arc<TranslationContext>> {
		let language = language::require_valid(language)?;

		if let Some(context) = self.contexts.read().get(&language) {
			return Ok(Arc::clone(context));
		}

		let mut contexts = self.contexts.write();
		let context = contexts
			.entry(language.clone())
			.or_insert_with(|| {
				debug!(language = %language, "Created translation context");
				Arc::new(TranslationContext::new(language.clone()))
			});
		Ok(Arc::clone(context))
	}

	/// Get the context for `language` without creating it.
	pub fn get(&self, language: &str) -> Option<Arc<TranslationContext>> {
		let language = language::normalize(language)?;
		self.contexts.read().get(&language).cloned()
	}

	/// Languages that have a context, sorted.
	pub fn languages(&self) -> Vec<String> {
		let mut languages: Vec<String> = self.contexts.read().keys().cloned().collect();
		languages.sort();
		languages
	}
}
