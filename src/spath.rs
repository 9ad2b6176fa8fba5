use crate::{Error, Result};
use regex::Regex;

// region:    S3Url
#[derive(Debug)]
pub struct S3Url {
	bucket: String,
	prefix: String,
}

impl S3Url {
	pub fn bucket(&self) -> &str {
		&self.bucket
	}
	pub fn prefix(&self) -> &str {
		&self.prefix
	}
}

/// Builders
impl S3Url {
	pub fn from_url(url: &str) -> Result<Self> {
		let rx = Regex::new(r"^s3://([^:/\s]+)(.*)$").expect("Invalid S3Url parsing regex");

		if let Some(caps) = rx.captures(url) {
			let bucket = caps[1].to_string();
			let prefix = &caps[2];
			let prefix = prefix.strip_prefix('/').unwrap_or(prefix).to_string();
			return Ok(S3Url { bucket, prefix });
		}

		Err(Error::NotValidS3Url(url.to_string()))
	}
}
// endregion: S3Url

// endregion: --- Tests
