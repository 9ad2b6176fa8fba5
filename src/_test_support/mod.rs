pub type Result<T> = core::result::Result<T, Error>;
pub type Error = Box<dyn std::error::Error>; // For early dev.

use crate::store::{DeleteReport, ObjectStore};
use std::collections::BTreeMap;
use std::sync::Mutex;

pub const TEST_BUCKET: &str = "unit-test-bucket";

/// In memory store recording the calls made to it.
#[derive(Default)]
pub struct MemStore {
	/// bucket -> sorted keys
	objects: Mutex<BTreeMap<String, Vec<String>>>,
	list_calls: Mutex<Vec<(String, String)>>,
	delete_calls: Mutex<Vec<(String, Vec<String>)>>,
	fail_list: bool,
	fail_delete: bool,
	/// Keys the store refuses to delete (reported as failed, not as a request error)
	locked_keys: Vec<String>,
}

impl MemStore {
	pub fn with_keys(bucket: &str, keys: &[&str]) -> MemStore {
		let store = MemStore::default();
		let mut keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
		keys.sort();
		store.objects.lock().unwrap().insert(bucket.to_string(), keys);
		store
	}

	pub fn failing_list(mut self) -> Self {
		self.fail_list = true;
		self
	}

	pub fn failing_delete(mut self) -> Self {
		self.fail_delete = true;
		self
	}

	pub fn locking(mut self, key: &str) -> Self {
		self.locked_keys.push(key.to_string());
		self
	}

	pub fn keys(&self, bucket: &str) -> Vec<String> {
		self.objects.lock().unwrap().get(bucket).cloned().unwrap_or_default()
	}

	pub fn list_calls(&self) -> Vec<(String, String)> {
		self.list_calls.lock().unwrap().clone()
	}

	pub fn delete_calls(&self) -> Vec<(String, Vec<String>)> {
		self.delete_calls.lock().unwrap().clone()
	}
}

fn access_denied() -> crate::Error {
	crate::Error::AwsService {
		code: "AccessDenied".to_string(),
		message: "Access Denied".to_string(),
	}
}

impl ObjectStore for MemStore {
	async fn list_keys(&self, bucket: &str, prefix: &str) -> crate::Result<Vec<String>> {
		self.list_calls.lock().unwrap().push((bucket.to_string(), prefix.to_string()));
		if self.fail_list {
			return Err(access_denied());
		}

		let objects = self.objects.lock().unwrap();
		let keys = objects
			.get(bucket)
			.map(|keys| keys.iter().filter(|k| k.starts_with(prefix)).cloned().collect())
			.unwrap_or_default();
		Ok(keys)
	}

	async fn delete_keys(&self, bucket: &str, keys: &[String]) -> crate::Result<DeleteReport> {
		self.delete_calls.lock().unwrap().push((bucket.to_string(), keys.to_vec()));
		if self.fail_delete {
			return Err(access_denied());
		}

		let mut objects = self.objects.lock().unwrap();
		let stored = objects.entry(bucket.to_string()).or_default();
		let mut report = DeleteReport::default();
		for key in keys {
			if self.locked_keys.contains(key) {
				report.failed.push(key.to_string());
			} else {
				// S3 acknowledges deletes of missing keys as well.
				stored.retain(|k| k != key);
				report.deleted += 1;
			}
		}
		Ok(report)
	}
}
