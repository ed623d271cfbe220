// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};
use xblock_runtime::{BlockScope, Runtime, ServiceError};

use crate::context::TranslationRegistry;
use crate::error::I18nResult;
use crate::language;
use crate::service::resolve_i18n_service;

/// Lets a block translate strings through its runtime's `i18n` service.
///
/// A block holds one of these as a field and builds it in its own
/// constructor. Without an `i18n` service the helper still works and
/// returns text untranslated.
pub struct TranslationHelper {
	runtime: Arc<dyn Runtime>,
	scope: BlockScope,
}

impl TranslationHelper {
	/// Build the helper, merging the service catalog into the global
	/// context for the current language.
	pub fn new(runtime: Arc<dyn Runtime>, scope: BlockScope) -> I18nResult<Self> {
		let language = language::get_language();
		Self::with_context(runtime, scope, TranslationRegistry::global(), &language)
	}

	/// Build the helper, merging the service catalog into `registry`'s
	/// context for `language`.
	///
	/// A missing service is logged and tolerated. Any other service error,
	/// or an invalid language, is returned.
	pub fn with_context(
		runtime: Arc<dyn Runtime>,
		scope: BlockScope,
		registry: &TranslationRegistry,
		language: &str,
	) -> I18nResult<Self> {
		match resolve_i18n_service(runtime.as_ref(), &scope) {
			Ok(service) => {
				let context = registry.context_for(language)?;
				let merged = context.merge(service.translator());
				debug!(
					block_type = %scope.block_type(),
					usage_id = %scope.usage_id(),
					language = %context.language(),
					merged,
					"Merged i18n service catalog"
				);
			}
			Err(ServiceError::NoSuchService { .. }) => {
				warn!(
					block_type = %scope.block_type(),
					usage_id = %scope.usage_id(),
					"XBlock needs the i18n runtime service enabled to perform translations."
				);
			}
			Err(e) => return Err(e.into()),
		}

		Ok(Self { runtime, scope })
	}

	/// Translate `text` with the runtime `i18n` service, or return it as is
	/// when the service is unavailable.
	pub fn translate(&self, text: &str) -> String {
		match resolve_i18n_service(self.runtime.as_ref(), &self.scope) {
			Ok(service) => service.gettext(text),
			Err(_) => text.to_string(),
		}
	}

	pub fn scope(&self) -> &BlockScope {
		&self.scope
	}
}

impl fmt::Debug for TranslationHelper {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TranslationHelper")
			.field("scope", &self.scope)
			.finish_non_exhaustive()
	}
}
