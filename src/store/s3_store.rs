use crate::store::{DeleteReport, ObjectStore};
use crate::Result;
use aws_sdk_s3::types::{Delete, ObjectIdentifier};
use aws_sdk_s3::Client;
use tracing::warn;

pub struct S3Store {
	pub client: Client,
}

impl S3Store {
	/// Constructor
	pub fn from_client(client: Client) -> S3Store {
		S3Store { client }
	}
}

impl ObjectStore for S3Store {
	async fn list_keys(&self, bucket: &str, prefix: &str) -> Result<Vec<String>> {
		// BUILD - the aws S3 list request (no continuation token, first page only)
		let builder = self.client.list_objects_v2().bucket(bucket).prefix(prefix);

		// EXECUTE - the AWS S3 request
		let resp = builder.send().await?;

		let keys = resp
			.contents()
			.iter()
			.filter_map(|o| o.key().map(|k| k.to_string()))
			.collect();

		Ok(keys)
	}

	async fn delete_keys(&self, bucket: &str, keys: &[String]) -> Result<DeleteReport> {
		// BUILD - the delete payload
		let objects = keys
			.iter()
			.map(|key| ObjectIdentifier::builder().key(key).build())
			.collect::<core::result::Result<Vec<_>, _>>()?;
		let delete = Delete::builder().set_objects(Some(objects)).build()?;

		// EXECUTE - one bulk request
		let resp = self.client.delete_objects().bucket(bucket).delete(delete).send().await?;

		let mut failed = Vec::new();
		for err in resp.errors() {
			match err.key() {
				Some(key) => failed.push(key.to_string()),
				None => warn!(
					"delete error without key. Code: {}, Message: {}",
					err.code().unwrap_or("Unknown"),
					err.message().unwrap_or_default()
				),
			}
		}

		Ok(DeleteReport {
			deleted: resp.deleted().len(),
			failed,
		})
	}
}

// endregion: --- Tests
