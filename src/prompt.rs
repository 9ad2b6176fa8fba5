use sprefix::Result;
use std::io::{self, Write};

pub fn prompt(msg: &str) -> Result<String> {
	print!("{}", msg);
	io::stdout().flush()?;

	let mut buff: String = String::new();
	io::stdin().read_line(&mut buff)?;
	let buff = buff.trim();

	Ok(buff.to_string())
}
