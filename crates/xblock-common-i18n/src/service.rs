// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The runtime `i18n` service.

use std::sync::Arc;

use xblock_runtime::{BlockScope, Runtime, ServiceHandle, ServiceResult, ServiceRuntime};

use crate::context::TranslationContext;
use crate::translator::SharedTranslator;

/// Name blocks declare to use the i18n service.
pub const I18N_SERVICE: &str = "i18n";

/// A host-provided localization service.
pub trait I18nService: Send + Sync {
	/// The catalog blocks merge into the active translation context.
	fn translator(&self) -> SharedTranslator;

	/// Translate `text`. What a missing entry yields is up to the service.
	fn gettext(&self, text: &str) -> String;
}

/// How an i18n service is stored in a runtime.
pub type SharedI18nService = Arc<dyn I18nService>;

/// Register `service` with `runtime` under [`I18N_SERVICE`].
pub fn register_i18n_service(runtime: &mut ServiceRuntime, service: SharedI18nService) {
	runtime.register(I18N_SERVICE, ServiceHandle::new(service));
}

/// Resolve the i18n service for `block`.
pub fn resolve_i18n_service(
	runtime: &dyn Runtime,
	block: &BlockScope,
) -> ServiceResult<SharedI18nService> {
	let handle = runtime.service(block, I18N_SERVICE)?;
	handle
		.expect_type::<SharedI18nService>(I18N_SERVICE)
		.map(Arc::clone)
}

/// An i18n service over one catalog.
///
/// Lookups go through the language's active context first, so strings
/// merged there by any block are visible, then through the service's own
/// catalog, and finally fall back to the source text.
pub struct CatalogI18nService {
	translator: SharedTranslator,
	context: Arc<TranslationContext>,
}

impl CatalogI18nService {
	pub fn new(translator: SharedTranslator, context: Arc<TranslationContext>) -> Self {
		Self {
			translator,
			context,
		}
	}

	pub fn language(&self) -> &str {
		self.context.language()
	}

	pub fn into_shared(self) -> SharedI18nService {
		Arc::new(self)
	}
}

impl I18nService for CatalogI18nService {
	fn translator(&self) -> SharedTranslator {
		Arc::clone(&self.translator)
	}

	fn gettext(&self, text: &str) -> String {
		self.context
			.lookup(text)
			.or_else(|| self.translator.lookup(text))
			.unwrap_or_else(|| text.to_string())
	}
}
