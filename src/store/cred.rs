use crate::store::S3Store;
use crate::{Error, Result};
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Builder, Credentials, Region};
use aws_sdk_s3::Client;
use aws_types::SdkConfig;
use std::env;
use tracing::debug;

// Default AWS environement names (used as last fallback)
const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
const AWS_ENDPOINT: &str = "AWS_ENDPOINT";

/// Explicit store configuration. Build it directly, or let `new_s3_store` resolve it from the environment.
#[derive(Debug, Clone)]
pub struct StoreCred {
	pub key_id: String,
	pub key_secret: String,
	pub region: Option<String>,
	pub endpoint: Option<String>,
}

impl StoreCred {
	pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> StoreCred {
		StoreCred {
			key_id: key_id.into(),
			key_secret: key_secret.into(),
			region: None,
			endpoint: None,
		}
	}

	pub fn with_region(mut self, region: impl Into<String>) -> StoreCred {
		self.region = Some(region.into());
		self
	}

	pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> StoreCred {
		self.endpoint = Some(endpoint.into());
		self
	}
}

enum CredKey {
	Id,
	Secret,
	Region,
	Endpoint,
}

impl CredKey {
	fn env_part(&self) -> &'static str {
		match self {
			CredKey::Id => "KEY_ID",
			CredKey::Secret => "KEY_SECRET",
			CredKey::Region => "REGION",
			CredKey::Endpoint => "ENDPOINT",
		}
	}
}

enum EnvType {
	Profile,
	Bucket,
}

impl EnvType {
	fn env_part(&self) -> &'static str {
		match self {
			EnvType::Profile => "SPREFIX_PROFILE",
			EnvType::Bucket => "SPREFIX_BUCKET",
		}
	}
}

#[derive(Debug, Default, Clone)]
pub struct RegionProfile {
	pub region: Option<String>,
	pub profile: Option<String>,
}

// region:    --- S3Store Builders

impl S3Store {
	pub fn from_cred(cred: StoreCred) -> Result<S3Store> {
		let client = client_from_cred(cred)?;
		Ok(S3Store::from_client(client))
	}
}

/// Resolve the store for a bucket from the environment (see `load_store_source` for the precedence).
pub async fn new_s3_store(reg_pro: RegionProfile, bucket: Option<&str>) -> Result<S3Store> {
	let client = match load_store_source(&reg_pro, bucket)? {
		StoreSource::Cred(mut cred) => {
			// -- If reg_pro as a region, override the one found (arg take precendence)
			if reg_pro.region.is_some() {
				cred.region = reg_pro.region;
			}
			client_from_cred(cred)?
		}
		StoreSource::AwsProfile(profile) => {
			let sdk_config = load_aws_profile_config(&profile, reg_pro.region).await;
			client_from_sdk_config(&sdk_config)
		}
	};

	Ok(S3Store::from_client(client))
}

fn client_from_cred(cred: StoreCred) -> Result<Client> {
	let StoreCred {
		key_id,
		key_secret,
		region,
		endpoint,
	} = cred;

	if let (None, None) = (&region, &endpoint) {
		return Err(Error::MissingConfigMustHaveEndpointOrRegion);
	}

	let cred = Credentials::new(key_id, key_secret, None, None, "loaded-from-config-or-env");

	let mut builder = Builder::new()
		.behavior_version(BehaviorVersion::latest())
		.credentials_provider(cred);

	if let Some(endpoint) = endpoint {
		// S3 compatible services (e.g., minio) are addressed by path, not by bucket subdomain.
		builder = builder.endpoint_url(endpoint).force_path_style(true);
		// The sdk still requires a region to sign, even with an endpoint.
		builder = builder.region(Region::new("endpoint-region"));
	}

	if let Some(region) = region {
		builder = builder.region(Region::new(region));
	}

	Ok(Client::from_conf(builder.build()))
}

fn client_from_sdk_config(sdk_config: &SdkConfig) -> Client {
	let builder = Builder::from(sdk_config);
	// Same path style rule as for the env credentials.
	let builder = match sdk_config.endpoint_url() {
		Some(_) => builder.force_path_style(true),
		None => builder,
	};
	Client::from_conf(builder.build())
}

// endregion: --- S3Store Builders

// region:    --- Loaders

enum StoreSource {
	Cred(StoreCred),
	/// Credentials left to the aws shared config files for this profile.
	AwsProfile(String),
}

/// Resolve where the credentials come from
/// - First check if SPREFIX_BUCKET_... envs
/// - If not, if Profile,
///    - first try the SPREFIX_PROFILE_... envs,
///    - then the standard aws config files
/// - if no profile, the default AWS env keys
/// - if still not found, error
fn load_store_source(reg_pro: &RegionProfile, bucket: Option<&str>) -> Result<StoreSource> {
	// -- Try to get it from the bucket env
	if let Some(bucket) = bucket {
		if let Ok(cred) = load_cred_from_env(EnvType::Bucket, bucket) {
			debug!("credentials for bucket '{bucket}' loaded from SPREFIX_BUCKET envs");
			return Ok(StoreSource::Cred(cred));
		}
	}

	// -- If not bucket env, then, go by profile if specified.
	if let Some(profile) = &reg_pro.profile {
		if let Ok(cred) = load_cred_from_env(EnvType::Profile, profile) {
			debug!("credentials for profile '{profile}' loaded from SPREFIX_PROFILE envs");
			return Ok(StoreSource::Cred(cred));
		}
		debug!("credentials for profile '{profile}' delegated to aws config files");
		return Ok(StoreSource::AwsProfile(profile.to_string()));
	}

	// -- Last fall back standard aws envs
	load_cred_from_default_aws_env()
		.map(StoreSource::Cred)
		.map_err(|_| Error::NoCredentialsFoundForBucket(bucket.map(|s| s.to_string())))
}

/// Attempt to create StoreCred from the SPREFIX environment variables
/// - `SPREFIX_{BUCKET|PROFILE}_name_KEY_ID`
/// - `SPREFIX_{BUCKET|PROFILE}_name_KEY_SECRET`
/// - `SPREFIX_{BUCKET|PROFILE}_name_REGION`
/// - `SPREFIX_{BUCKET|PROFILE}_name_ENDPOINT`
fn load_cred_from_env(typ: EnvType, name: &str) -> Result<StoreCred> {
	let key_id = get_env(&get_env_name(&typ, CredKey::Id, name))?;
	let key_secret = get_env(&get_env_name(&typ, CredKey::Secret, name))?;
	let region = get_env(&get_env_name(&typ, CredKey::Region, name)).ok();
	let endpoint = get_env(&get_env_name(&typ, CredKey::Endpoint, name)).ok();

	Ok(StoreCred {
		key_id,
		key_secret,
		region,
		endpoint,
	})
}

fn load_cred_from_default_aws_env() -> Result<StoreCred> {
	let key_id = get_env(AWS_ACCESS_KEY_ID)?;
	let key_secret = get_env(AWS_SECRET_ACCESS_KEY)?;
	let region = get_env(AWS_DEFAULT_REGION).ok();
	let endpoint = get_env(AWS_ENDPOINT).ok();

	Ok(StoreCred {
		key_id,
		key_secret,
		region,
		endpoint,
	})
}

async fn load_aws_profile_config(profile: &str, region: Option<String>) -> SdkConfig {
	let mut loader = aws_config::defaults(BehaviorVersion::latest()).profile_name(profile);
	if let Some(region) = region {
		loader = loader.region(Region::new(region));
	}
	loader.load().await
}

// endregion: --- Loaders

// region:    --- Utils
fn get_env_name(typ: &EnvType, key: CredKey, name: &str) -> String {
	let name = name.replace('-', "_");
	format!("{}_{}_{}", typ.env_part(), name, key.env_part())
}

fn get_env(name: &str) -> Result<String> {
	match env::var(name) {
		Ok(v) => Ok(v),
		Err(_) => Err(Error::NoCredentialEnv(name.to_string())),
	}
}
// endregion: --- Utils

// endregion: --- Tests
