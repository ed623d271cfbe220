// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation support for XBlocks.
//!
//! Blocks that declare the runtime `i18n` service get a [`TranslationHelper`]
//! that merges the service catalog into the process-wide translation context
//! for the current language and translates strings through the service.
//! Blocks without the service keep working; their strings are returned
//! untranslated.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use xblock_common_i18n::{
//! 	register_i18n_service, Catalog, CatalogI18nService, TranslationHelper,
//! 	TranslationRegistry, I18N_SERVICE,
//! };
//! use xblock_runtime::{BlockScope, ServiceRuntime};
//!
//! let registry = TranslationRegistry::new();
//! let catalog: Catalog = [("Hello", "Bonjour")].into_iter().collect();
//! let service = CatalogI18nService::new(catalog.into_shared(), registry.context_for("fr")?);
//!
//! let mut runtime = ServiceRuntime::new();
//! register_i18n_service(&mut runtime, service.into_shared());
//!
//! let scope = BlockScope::new("html", "block-v1:demo+html+1").with_service(I18N_SERVICE);
//! let helper = TranslationHelper::with_context(Arc::new(runtime), scope, &registry, "fr")?;
//!
//! assert_eq!(helper.translate("Hello"), "Bonjour");
//! assert_eq!(helper.translate("Goodbye"), "Goodbye");
//! # Ok::<(), xblock_common_i18n::I18nError>(())
//! ```

pub mod config;
mod context;
mod error;
mod helper;
pub mod language;
mod service;
mod translator;

pub use config::{I18nConfig, I18nConfigLayer};
pub use context::{TranslationContext, TranslationRegistry};
pub use error::{I18nError, I18nResult};
pub use helper::TranslationHelper;
pub use language::{get_language, DEFAULT_LANGUAGE};
pub use service::{
	register_i18n_service, resolve_i18n_service, CatalogI18nService, I18nService,
	SharedI18nService, I18N_SERVICE,
};
pub use translator::{Catalog, SharedTranslator, Translator};
