// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::BTreeSet;
use std::fmt;

/// Identity of a block instance as seen by its runtime, plus the services
/// the block type declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockScope {
	block_type: String,
	usage_id: String,
	services: BTreeSet<String>,
}

impl BlockScope {
	pub fn new(block_type: impl Into<String>, usage_id: impl Into<String>) -> Self {
		Self {
			block_type: block_type.into(),
			usage_id: usage_id.into(),
			services: BTreeSet::new(),
		}
	}

	/// Declare that this block uses the named service.
	pub fn with_service(mut self, name: impl Into<String>) -> Self {
		self.services.insert(name.into());
		self
	}

	pub fn block_type(&self) -> &str {
		&self.block_type
	}

	pub fn usage_id(&self) -> &str {
		&self.usage_id
	}

	pub fn declares(&self, name: &str) -> bool {
		self.services.contains(name)
	}

	pub fn declared_services(&self) -> impl Iterator<Item = &str> {
		self.services.iter().map(String::as_str)
	}
}

impl fmt::Display for BlockScope {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}({})", self.block_type, self.usage_id)
	}
}
