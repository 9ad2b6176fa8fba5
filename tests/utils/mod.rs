#![allow(unused)]

// --- Re-exports
pub use exec::{exec_sprefix, ExecConfig};

// --- Imports
use std::str::Lines;


// region:    --- Consts
pub const TEST_BUCKET: &str = "test-bucket";
/// Nothing listens there, so every storage call fails with a connection error.
pub const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:1";
// endregion: --- Consts

// region:    --- String Utils
// Note: Personal best practice, "x" prefix to note that this is just private crate interface.

pub trait XString {
	fn x_lines(&self) -> Lines;
	fn x_has_line(&self, line: &str) -> bool;
}

impl XString for str {
	/// Return the str::Lines but for the trimmed text (so no starting or ending empty lines)
	fn x_lines(&self) -> Lines {
		self.trim().lines()
	}
	fn x_has_line(&self, line: &str) -> bool {
		self.x_lines().any(|l| l == line)
	}
}

impl XString for String {
	fn x_lines(&self) -> Lines {
		str::x_lines(self)
	}

	fn x_has_line(&self, line: &str) -> bool {
		str::x_has_line(self, line)
	}
}
// endregion: --- String Utils
