//! Human-readable summaries of domain values.

use std::io::{self, Write};

use super::task::Task;
use super::user::User;

/// A value that can describe itself in one line.
///
/// The summary always contains the identifying field, plus status and
/// priority where the value has them.
pub trait Displayable {
    /// Returns a one-line, human-readable summary.
    fn summary(&self) -> String;
}

impl Displayable for User {
    fn summary(&self) -> String {
        format!("User #{}: {}", self.id, self.name)
    }
}

impl Displayable for Task {
    fn summary(&self) -> String {
        let mut summary = format!(
            "Task #{} '{}' [{}, {}]",
            self.id, self.title, self.status, self.priority
        );
        if let Some(user_id) = self.assigned_to {
            summary.push_str(&format!(" assigned to #{user_id}"));
        }
        if let Some(project) = &self.project {
            summary.push_str(&format!(" in {project}"));
        }
        if !self.tags.is_empty() {
            summary.push_str(&format!(" tags: {}", self.tags.join(", ")));
        }
        summary
    }
}

/// Writes the item's summary and a newline to `sink`.
///
/// # Errors
///
/// Returns the sink's I/O error unchanged.
pub fn print_displayable_item<W, D>(sink: &mut W, item: &D) -> io::Result<()>
where
    W: Write + ?Sized,
    D: Displayable + ?Sized,
{
    writeln!(sink, "{}", item.summary())
}
