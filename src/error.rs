use aws_sdk_s3::error::{BuildError, DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::delete_objects::DeleteObjectsError;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Error;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("Not a valid s3 url '{0}'. Should be format 's3://bucket_name[/prefix]'")]
	NotValidS3Url(String),

	#[error("Credential environment variable {0} not found")]
	NoCredentialEnv(String),

	#[error(
		"No credential found for bucket '{0:?}'. Provide the following (by order of precedence):
  - Provide bucket SPREFIX_BUCKET_... environments (will take precendence on profile env/configs)
    - SPREFIX_BUCKET_bucket_name_KEY_ID
    - SPREFIX_BUCKET_bucket_name_KEY_SECRET
    - SPREFIX_BUCKET_bucket_name_REGION
    - SPREFIX_BUCKET_bucket_name_ENDPOINT (optional)
  - Provide '--profile profile_name' with the following SPREFIX_PROFILE_... environments:
    - SPREFIX_PROFILE_profile_name_KEY_ID
    - SPREFIX_PROFILE_profile_name_KEY_SECRET
    - SPREFIX_PROFILE_profile_name_REGION
    - SPREFIX_PROFILE_profile_name_ENDPOINT (optional)
  - Provide '--profile profile_name' which should be configured in aws default config files
  - As a last fallback, use the default AWS environment variables:
    - AWS_ACCESS_KEY_ID
    - AWS_SECRET_ACCESS_KEY
    - AWS_DEFAULT_REGION
    - AWS_ENDPOINT (optional)
  NOTE: '-' characters in profile and bucket names will be replaced by '_' for environment names above.
  	"
	)]
	NoCredentialsFoundForBucket(Option<String>),

	#[error(
		"Missing config. The credential environment variables or config must have either a REGION or ENDPOINT. Both absent."
	)]
	MissingConfigMustHaveEndpointOrRegion,

	#[error("Invalid command. Cause: {0}")]
	CmdInvalid(&'static str),

	/// The one storage client error kind (auth, network, missing bucket, ...).
	#[error("AWS Service Error. Code: {code}, Message: {message}")]
	AwsService { code: String, message: String },

	#[error(transparent)]
	AwsBuild(#[from] BuildError),

	#[error(transparent)]
	IO(#[from] std::io::Error),
}

// region:    --- AWS Error Froms

/// Flatten an sdk error into the code/message pair.
/// Note: Dispatch failures (no service response) have no code, so the full error context becomes the message.
fn aws_service_error<E, R>(err: SdkError<E, R>) -> Error
where
	E: ProvideErrorMetadata + std::error::Error + 'static,
	R: std::fmt::Debug,
{
	let code = err.code().unwrap_or("Unknown").to_string();
	let message = match err.message() {
		Some(message) => message.to_string(),
		None => DisplayErrorContext(&err).to_string(),
	};
	Error::AwsService { code, message }
}

impl<R: std::fmt::Debug> From<SdkError<ListObjectsV2Error, R>> for Error {
	fn from(val: SdkError<ListObjectsV2Error, R>) -> Self {
		aws_service_error(val)
	}
}

impl<R: std::fmt::Debug> From<SdkError<DeleteObjectsError, R>> for Error {
	fn from(val: SdkError<DeleteObjectsError, R>) -> Self {
		aws_service_error(val)
	}
}

// endregion: --- AWS Error Froms
