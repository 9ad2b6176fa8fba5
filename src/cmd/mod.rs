use crate::cmd::app::{cmd_app, ARG_FORCE, ARG_PATH_1, ARG_PROFILE, ARG_REGION, ARG_VERBOSE};
use crate::prompt::prompt;
use clap::ArgMatches;
use sprefix::{
	check_prefix, delete_prefix, new_s3_store, objects_exist, DeleteOutcome, Error, PrefixStatus, RegionProfile, Result,
	S3Store, S3Url,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod app;

pub async fn cmd_run() -> Result<()> {
	let argm = cmd_app().get_matches();
	let sub = argm.subcommand().map(|(_, sub)| sub);

	// get the global args from the root command or sub command
	let get_value = |name: &str| -> Option<String> {
		argm.get_one::<String>(name)
			.or_else(|| sub.and_then(|sub| sub.get_one::<String>(name)))
			.cloned()
	};
	let verbose = argm.get_flag(ARG_VERBOSE.0) || sub.map(|sub| sub.get_flag(ARG_VERBOSE.0)).unwrap_or(false);
	init_logging(verbose);

	let reg_pro = RegionProfile {
		region: get_value(ARG_REGION),
		profile: get_value(ARG_PROFILE.0),
	};

	match argm.subcommand() {
		Some(("exists", sub_cmd)) => exec_exists(reg_pro, sub_cmd).await?,
		Some(("check", sub_cmd)) => exec_check(reg_pro, sub_cmd).await?,
		Some(("rm-prefix", sub_cmd)) => exec_rm_prefix(reg_pro, sub_cmd).await?,
		_ => {
			cmd_app().print_long_help()?;
			println!("\n");
		}
	}

	Ok(())
}

/// Logs go to stderr, so that stdout only has the command result.
fn init_logging(verbose: bool) {
	let level = if verbose { "debug" } else { "info" };

	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

	tracing_subscriber::registry()
		.with(env_filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();
}

// region:    --- Execs

async fn exec_exists(reg_pro: RegionProfile, argm: &ArgMatches) -> Result<()> {
	let (store, s3_url) = get_store_and_url(reg_pro, argm).await?;

	let exists = objects_exist(&store, s3_url.bucket(), s3_url.prefix()).await;
	println!("{exists}");

	Ok(())
}

async fn exec_check(reg_pro: RegionProfile, argm: &ArgMatches) -> Result<()> {
	let (store, s3_url) = get_store_and_url(reg_pro, argm).await?;

	match check_prefix(&store, s3_url.bucket(), s3_url.prefix()).await {
		PrefixStatus::Found(count) => println!("found {count}"),
		PrefixStatus::Empty => println!("empty"),
		PrefixStatus::QueryFailed(err) => println!("failed: {err}"),
	}

	Ok(())
}

async fn exec_rm_prefix(reg_pro: RegionProfile, argm: &ArgMatches) -> Result<()> {
	let (store, s3_url) = get_store_and_url(reg_pro, argm).await?;
	let force = argm.get_flag(ARG_FORCE);

	if !force {
		let answer = prompt(&format!(
			"Delete all objects under s3://{}/{} (Y/n)? ",
			s3_url.bucket(),
			s3_url.prefix()
		))?;
		if answer != "Y" {
			println!("Nothing deleted.");
			return Ok(());
		}
	}

	match delete_prefix(&store, s3_url.bucket(), s3_url.prefix()).await {
		DeleteOutcome::Deleted(count) => println!("deleted {count}"),
		DeleteOutcome::NothingFound => println!("nothing found"),
		DeleteOutcome::ListFailed => println!("failed: could not list the prefix"),
		DeleteOutcome::DeleteFailed => println!("failed: could not delete the objects"),
	}

	Ok(())
}

// endregion: --- Execs

// region:    --- Args Utils
async fn get_store_and_url(reg_pro: RegionProfile, argm: &ArgMatches) -> Result<(S3Store, S3Url)> {
	let path = argm
		.get_one::<String>(ARG_PATH_1)
		.ok_or(Error::CmdInvalid("This command require a S3 url"))?;
	let s3_url = S3Url::from_url(path)?;

	let store = new_s3_store(reg_pro, Some(s3_url.bucket())).await?;

	Ok((store, s3_url))
}
// endregion: --- Args Utils
