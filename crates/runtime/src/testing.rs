//! Log capture shared by unit tests.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::EnvFilter;

/// Formatted log output collected by a thread-local subscriber.
#[derive(Clone, Default)]
pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
	/// Routes this thread's events matching `directives` into a new buffer
	/// until the guard is dropped.
	pub(crate) fn install(directives: &str) -> (Self, DefaultGuard) {
		let logs = Self::default();
		let writer = logs.clone();
		let subscriber = tracing_subscriber::fmt()
			.with_env_filter(EnvFilter::new(directives))
			.with_writer(move || writer.clone())
			.with_ansi(false)
			.without_time()
			.finish();
		(logs, tracing::subscriber::set_default(subscriber))
	}

	pub(crate) fn lines(&self) -> Vec<String> {
		String::from_utf8_lossy(&self.0.lock()).lines().map(str::to_owned).collect()
	}

	/// Returns the first line containing `needle`.
	pub(crate) fn find(&self, needle: &str) -> Option<String> {
		self.lines().into_iter().find(|line| line.contains(needle))
	}
}

impl io::Write for CapturedLogs {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0.lock().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}
