//! Check and clear S3 key prefixes so that ETL jobs can be re-run safely.
//!
//! ```no_run
//! # async fn run() -> sprefix::Result<()> {
//! use sprefix::{delete_prefix, objects_exist, StoreCred, S3Store};
//!
//! let cred = StoreCred::new("key_id", "key_secret").with_region("us-east-1");
//! let store = S3Store::from_cred(cred)?;
//!
//! if objects_exist(&store, "my-bucket", "exports/2024-01-01/").await {
//! 	delete_prefix(&store, "my-bucket", "exports/2024-01-01/").await;
//! }
//! # Ok(())
//! # }
//! ```

// region:    --- Modules

mod error;
mod prefix;
mod prelude;
mod spath;
mod store;

#[cfg(test)]
mod _test_support;

pub use crate::error::Error;
pub use crate::prefix::{check_prefix, delete_prefix, objects_exist, DeleteOutcome, PrefixStatus};
pub use crate::prelude::Result;
pub use crate::spath::S3Url;
pub use crate::store::{new_s3_store, DeleteReport, ObjectStore, RegionProfile, S3Store, StoreCred};

// endregion: --- Modules
