//! Common test fixtures for execution adapter integration tests

// Suppress warnings for items that may not be used in all test files.
// Each test binary compiles common.rs separately, causing unused code warnings.
#![allow(dead_code, unreachable_pub)]

use restorm_client::{ClientConfig, ClientError, ErrorReporter, Manager, Model};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Minimal model backed by the mocked `/articles` resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
	pub id: Option<i64>,
	pub title: String,
	pub status: String,
}

impl Model for Article {
	type PrimaryKey = i64;

	fn resource_name() -> &'static str {
		"articles"
	}

	fn primary_key(&self) -> Option<Self::PrimaryKey> {
		self.id
	}
}

pub fn article(id: i64, title: &str) -> Article {
	Article {
		id: Some(id),
		title: title.to_string(),
		status: "draft".to_string(),
	}
}

/// Reporter double that records every reported error message.
#[derive(Default)]
pub struct CapturingReporter {
	errors: Mutex<Vec<String>>,
}

impl CapturingReporter {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn reported(&self) -> Vec<String> {
		self.errors.lock().unwrap().clone()
	}
}

impl ErrorReporter for CapturingReporter {
	fn report(&self, error: &ClientError) {
		self.errors.lock().unwrap().push(error.to_string());
	}
}

/// Manager wired against a mockito server, with a capturing reporter.
pub fn manager_for(
	server: &mockito::ServerGuard,
	reporter: Arc<CapturingReporter>,
) -> Manager<Article> {
	Manager::new(ClientConfig::new(server.url()))
		.expect("failed to build manager")
		.with_reporter(reporter)
}
