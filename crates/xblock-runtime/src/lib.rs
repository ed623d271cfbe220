// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Host runtime primitives for XBlocks.
//!
//! A runtime hosts block instances and hands them named services. Blocks
//! declare the services they use in their [`BlockScope`]; the runtime only
//! resolves services that are both registered and declared.
//!
//! # Example
//!
//! ```
//! use xblock_runtime::{BlockScope, Runtime, ServiceError, ServiceHandle, ServiceRuntime};
//!
//! let runtime = ServiceRuntime::new().with_service("settings", ServiceHandle::new(42u32));
//! let block = BlockScope::new("problem", "block-v1:demo+problem+1").with_service("settings");
//!
//! let handle = runtime.service(&block, "settings").unwrap();
//! assert_eq!(handle.downcast::<u32>(), Some(&42));
//!
//! assert!(matches!(
//! 	runtime.service(&block, "i18n"),
//! 	Err(ServiceError::NoSuchService { .. })
//! ));
//! ```

mod error;
mod scope;
mod service;

pub use error::{ServiceError, ServiceResult};
pub use scope::BlockScope;
pub use service::{Runtime, ServiceHandle, ServiceRuntime};
