//! Storage collaborator seam.
//!
//! The prefix operations only need two things from an object store: list the keys under a prefix
//! (first page only) and bulk-delete a set of keys. `S3Store` is the AWS SDK implementation.

// region:    --- Modules

mod cred;
mod s3_store;

pub use self::cred::{new_s3_store, RegionProfile, StoreCred};
pub use self::s3_store::S3Store;

use crate::Result;

// endregion: --- Modules

/// Per request delete report, as acknowledged by the store.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeleteReport {
	pub deleted: usize,
	/// Keys the store reported as not deleted.
	pub failed: Vec<String>,
}

#[allow(async_fn_in_trait)]
pub trait ObjectStore {
	/// Keys of `bucket` starting with `prefix`, first listing page only.
	async fn list_keys(&self, bucket: &str, prefix: &str) -> Result<Vec<String>>;

	/// Delete all `keys` of `bucket` in one bulk request.
	async fn delete_keys(&self, bucket: &str, keys: &[String]) -> Result<DeleteReport>;
}
