// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;
use xblock_runtime::ServiceError;

pub type I18nResult<T> = Result<T, I18nError>;

#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum I18nError {
	#[error("Runtime service error: {0}")]
	Service(#[from] ServiceError),

	#[error("Invalid language code: {0:?}")]
	InvalidLanguage(String),

	#[error("Invalid i18n configuration: {0}")]
	Config(String),
}
