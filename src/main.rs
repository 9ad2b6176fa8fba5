use cmd::cmd_run;

mod cmd;
mod prompt;

#[tokio::main(flavor = "current_thread")]
async fn main() {
	if let Err(e) = cmd_run().await {
		eprintln!("Error:\n  {}", e);
		std::process::exit(1);
	}
}
