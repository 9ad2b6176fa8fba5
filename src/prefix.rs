//! Prefix level existence check and delete, used to make ETL jobs idempotent.
//!
//! None of these functions fail. Storage errors are logged and folded into the returned status,
//! so the caller can decide to re-run, skip, or alert.

use crate::store::ObjectStore;
use crate::Error;
use tracing::{error, info, warn};

// region:    --- Types

#[derive(Debug)]
pub enum PrefixStatus {
	/// Number of objects found (first listing page only).
	Found(usize),
	Empty,
	QueryFailed(Error),
}

impl PrefixStatus {
	pub fn exists(&self) -> bool {
		matches!(self, PrefixStatus::Found(_))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
	Deleted(usize),
	NothingFound,
	/// Listing failed. No delete was attempted.
	ListFailed,
	DeleteFailed,
}

// endregion: --- Types

/// List `prefix` once and report what was found, keeping a failed query distinct from an empty prefix.
pub async fn check_prefix(store: &impl ObjectStore, bucket: &str, prefix: &str) -> PrefixStatus {
	info!("Checking for existing data in {bucket}/{prefix}");

	match store.list_keys(bucket, prefix).await {
		Ok(keys) if keys.is_empty() => PrefixStatus::Empty,
		Ok(keys) => {
			info!("Data already exists!");
			PrefixStatus::Found(keys.len())
		}
		Err(err) => {
			error!("{err}");
			PrefixStatus::QueryFailed(err)
		}
	}
}

/// Returns true if at least one object is under `prefix`.
///
/// NOTE: A failed query also returns false. Use `check_prefix` to tell the two apart.
pub async fn objects_exist(store: &impl ObjectStore, bucket: &str, prefix: &str) -> bool {
	check_prefix(store, bucket, prefix).await.exists()
}

/// Delete every object listed under `prefix` with one bulk request.
pub async fn delete_prefix(store: &impl ObjectStore, bucket: &str, prefix: &str) -> DeleteOutcome {
	info!("Deleting existing data from {bucket}/{prefix}");

	let keys = match store.list_keys(bucket, prefix).await {
		Ok(keys) => keys,
		Err(err) => {
			error!("{err}");
			return DeleteOutcome::ListFailed;
		}
	};

	if keys.is_empty() {
		info!("No objects found in the specified prefix: {prefix}");
		return DeleteOutcome::NothingFound;
	}

	match store.delete_keys(bucket, &keys).await {
		Ok(report) => {
			if !report.failed.is_empty() {
				warn!("{} objects not deleted: {:?}", report.failed.len(), report.failed);
			}
			info!("Deleted {} objects", report.deleted);
			DeleteOutcome::Deleted(report.deleted)
		}
		Err(err) => {
			error!("{err}");
			DeleteOutcome::DeleteFailed
		}
	}
}
