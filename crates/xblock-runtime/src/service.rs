// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::error::{ServiceError, ServiceResult};
use crate::scope::BlockScope;

/// A shared, type-erased service instance.
///
/// Cloning a handle clones the `Arc`, so every block resolving the same name
/// sees the same service.
#[derive(Clone)]
pub struct ServiceHandle(Arc<dyn Any + Send + Sync>);

impl ServiceHandle {
	pub fn new<T: Any + Send + Sync>(service: T) -> Self {
		Self(Arc::new(service))
	}

	/// Borrow the service as `T`, if that is what was registered.
	pub fn downcast<T: Any + Send + Sync>(&self) -> Option<&T> {
		self.0.downcast_ref::<T>()
	}

	/// Borrow the service as `T`, reporting a type mismatch against `name`.
	pub fn expect_type<T: Any + Send + Sync>(&self, name: &str) -> ServiceResult<&T> {
		self.downcast::<T>().ok_or_else(|| ServiceError::UnexpectedType {
			name: name.to_string(),
			expected: std::any::type_name::<T>(),
		})
	}
}

impl fmt::Debug for ServiceHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ServiceHandle").finish_non_exhaustive()
	}
}

/// The environment hosting blocks.
pub trait Runtime: Send + Sync {
	/// Resolve the named service for `block`.
	///
	/// Returns [`ServiceError::NoSuchService`] when the service is not
	/// registered or the block did not declare it.
	fn service(&self, block: &BlockScope, name: &str) -> ServiceResult<ServiceHandle>;
}

/// A runtime backed by a fixed table of registered services.
#[derive(Debug, Clone, Default)]
pub struct ServiceRuntime {
	services: HashMap<String, ServiceHandle>,
}

impl ServiceRuntime {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_service(mut self, name: impl Into<String>, handle: ServiceHandle) -> Self {
		self.register(name, handle);
		self
	}

	/// Register (or replace) a named service.
	pub fn register(&mut self, name: impl Into<String>, handle: ServiceHandle) {
		self.services.insert(name.into(), handle);
	}

	pub fn is_registered(&self, name: &str) -> bool {
		self.services.contains_key(name)
	}
}

impl Runtime for ServiceRuntime {
	fn service(&self, block: &BlockScope, name: &str) -> ServiceResult<ServiceHandle> {
		let not_found = || ServiceError::NoSuchService {
			name: name.to_string(),
			block_type: block.block_type().to_string(),
		};

		if !block.declares(name) {
			trace!(block = %block, service = name, "Block did not declare service");
			return Err(not_found());
		}

		self.services.get(name).cloned().ok_or_else(not_found)
	}
}

impl<R: Runtime + ?Sized> Runtime for Arc<R> {
	fn service(&self, block: &BlockScope, name: &str) -> ServiceResult<ServiceHandle> {
		(**self).service(block, name)
	}
}
