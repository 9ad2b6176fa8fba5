use clap::{crate_version, Arg, ArgAction, Command};

pub const ARG_REGION: &str = "region";
pub const ARG_PROFILE: (&str, char) = ("profile", 'p');
pub const ARG_VERBOSE: (&str, char) = ("verbose", 'v');
pub const ARG_FORCE: &str = "force";
pub const ARG_PATH_1: &str = "path_1";

pub fn cmd_app() -> Command {
	Command::new("sprefix")
		.version(crate_version!())
		.about("Check and clear S3 prefixes (e.g., to re-run ETL jobs idempotently)")
		.args(args_global())
		.subcommand(sub_exists())
		.subcommand(sub_check())
		.subcommand(sub_rm_prefix())
}

// region:    --- Sub Commands
fn sub_exists() -> Command {
	Command::new("exists")
		.about(
			"Print 'true' if any object is under the s3 url prefix, 'false' otherwise (also on error). \
			e.g., `sprefix exists s3://my-bucket/exports/`",
		)
		.args(args_global())
		.arg(arg_path_1())
}

fn sub_check() -> Command {
	Command::new("check")
		.about("Print 'found N', 'empty', or 'failed: ...' for the s3 url prefix")
		.args(args_global())
		.arg(arg_path_1())
}

fn sub_rm_prefix() -> Command {
	Command::new("rm-prefix")
		.about("Delete all of the objects under the s3 url prefix (first listing page)")
		.args(args_global())
		.arg(arg_path_1())
		.arg(arg_force())
}
// endregion: --- Sub Commands

// region:    --- Common Args
fn arg_path_1() -> Arg {
	Arg::new(ARG_PATH_1)
		.num_args(1)
		.required(true)
		.help("The s3 url, 's3://bucket_name[/prefix]'.")
}

fn arg_force() -> Arg {
	Arg::new(ARG_FORCE)
		.num_args(0)
		.long(ARG_FORCE)
		.action(ArgAction::SetTrue)
		.help("Force the delete (bypassing the prompt)")
}

fn args_global() -> [Arg; 3] {
	[
		Arg::new(ARG_PROFILE.0)
			.required(false)
			.num_args(1)
			.short(ARG_PROFILE.1)
			.long(ARG_PROFILE.0)
			.help("The profile to use if no bucket environment credentials."),
		Arg::new(ARG_REGION)
			.required(false)
			.num_args(1)
			.long(ARG_REGION)
			.help("The region to use for this command (override profile/env region)."),
		Arg::new(ARG_VERBOSE.0)
			.num_args(0)
			.short(ARG_VERBOSE.1)
			.long(ARG_VERBOSE.0)
			.action(ArgAction::SetTrue)
			.help("Debug level logs (RUST_LOG takes precedence)"),
	]
}
// endregion: --- Common Args
