// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Result type alias for service resolution.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors returned when a block asks its runtime for a service.
#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum ServiceError {
	/// The service is not registered with the runtime, or the block did not
	/// declare it.
	#[error("Service {name:?} is not available to block type {block_type:?}")]
	NoSuchService { name: String, block_type: String },

	#[error("Service {name:?} is registered but is not a {expected}")]
	UnexpectedType { name: String, expected: &'static str },
}

impl ServiceError {
	/// Whether this error means the service is simply absent.
	pub fn is_not_found(&self) -> bool {
		matches!(self, ServiceError::NoSuchService { .. })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_is_not_found() {
		let missing = ServiceError::NoSuchService {
			name: "i18n".to_string(),
			block_type: "html".to_string(),
		};
		assert!(missing.is_not_found());

		let wrong = ServiceError::UnexpectedType {
			name: "i18n".to_string(),
			expected: "SharedI18nService",
		};
		assert!(!wrong.is_not_found());
	}

	#[test]
	fn test_display_names_service_and_block() {
		let err = ServiceError::NoSuchService {
			name: "i18n".to_string(),
			block_type: "html".to_string(),
		};
		let msg = err.to_string();
		assert!(msg.contains("\"i18n\""));
		assert!(msg.contains("\"html\""));
	}
}
