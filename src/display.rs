use spinoff::{Color, Spinner, Streams, spinners};
use std::io::IsTerminal;

/// A progress spinner that may or may not exist.
///
/// It lives on stderr so the report on stdout stays clean for pipes.
pub struct SpinnerContainer {
    instance: Option<Spinner>,
}

impl SpinnerContainer {
    /// Starts spinning unless the user said no, or stderr isn't a terminal.
    pub fn new(no_animate: bool) -> Self {
        if no_animate || !std::io::stderr().is_terminal() {
            return SpinnerContainer { instance: None };
        }

        SpinnerContainer {
            instance: Some(Spinner::new_with_stream(
                spinners::Dots,
                "Retrieving",
                Color::Blue,
                Streams::Stderr,
            )),
        }
    }

    pub fn update_text(&mut self, message: String) {
        if let Some(spinner) = self.instance.as_mut() {
            spinner.update_text(message)
        }
    }

    /// Gets rid of the spinner, then prints the report as is.
    pub fn finish(&mut self, output: &str) {
        // Note that it has to take ownership to prevent double stopping.
        if let Some(mut s) = self.instance.take() {
            s.clear();
        }

        print!("{output}");
    }
}

impl Drop for SpinnerContainer {
    fn drop(&mut self) {
        if let Some(s) = self.instance.as_mut() {
            s.clear();
        }
    }
}

/// What the spinner says while a repository is being fetched.
pub fn progress_text(full_name: &str, done: usize, total: usize) -> String {
    format!("Retrieving {full_name} ({}/{total})", done + 1)
}
