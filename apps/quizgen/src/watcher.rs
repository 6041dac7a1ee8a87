//! File system watcher that regenerates the question bank on input changes.

use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::time::Duration;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::Result;
use crate::pipeline::Pipeline;

/// Window in which bursts of editor events collapse into one run.
const DEBOUNCE: Duration = Duration::from_millis(200);

/// Watch the pipeline's input file and re-run on every change.
///
/// Blocks until the watcher's event channel closes. Failed runs are logged
/// and do not stop watching.
pub fn watch(pipeline: &Pipeline) -> Result<()> {
    let input = pipeline.config().input.clone();
    let dir = watch_dir(&input);

    let (tx, rx) = channel();
    let mut watcher = RecommendedWatcher::new(
        move |result: std::result::Result<Event, notify::Error>| {
            if let Ok(event) = result {
                let _ = tx.send(event);
            }
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    )?;
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;

    tracing::info!("Watching {} for changes", input.display());

    while let Ok(event) = rx.recv() {
        if !is_input_change(&event, &input) {
            continue;
        }

        // Drain the rest of the burst.
        while rx.recv_timeout(DEBOUNCE).is_ok() {}

        tracing::debug!(?event.kind, "input changed");
        if let Err(e) = pipeline.run() {
            tracing::error!("Regeneration failed: {}", e);
        }
    }

    Ok(())
}

/// Directory to watch for a given input file.
fn watch_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Whether an event is a create or modify of the input file.
fn is_input_change(event: &Event, input: &Path) -> bool {
    let relevant = matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_));
    relevant
        && event
            .paths
            .iter()
            .any(|p| p.file_name().is_some() && p.file_name() == input.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, DataChange, ModifyKind, RemoveKind};

    #[test]
    fn watch_dir_defaults_to_current_directory() {
        assert_eq!(watch_dir(Path::new("quiz-content.md")), PathBuf::from("."));
        assert_eq!(
            watch_dir(Path::new("/site/quiz-content.md")),
            PathBuf::from("/site")
        );
    }

    #[test]
    fn modify_of_input_is_relevant() {
        let event = Event::new(EventKind::Modify(ModifyKind::Data(DataChange::Content)))
            .add_path(PathBuf::from("/site/quiz-content.md"));
        assert!(is_input_change(&event, Path::new("/site/quiz-content.md")));
    }

    #[test]
    fn create_of_input_is_relevant() {
        let event = Event::new(EventKind::Create(CreateKind::File))
            .add_path(PathBuf::from("./quiz-content.md"));
        assert!(is_input_change(&event, Path::new("quiz-content.md")));
    }

    #[test]
    fn other_files_are_ignored() {
        let event = Event::new(EventKind::Modify(ModifyKind::Data(DataChange::Content)))
            .add_path(PathBuf::from("/site/quiz-questions.json"));
        assert!(!is_input_change(&event, Path::new("/site/quiz-content.md")));
    }

    #[test]
    fn removals_are_ignored() {
        let event = Event::new(EventKind::Remove(RemoveKind::File))
            .add_path(PathBuf::from("/site/quiz-content.md"));
        assert!(!is_input_change(&event, Path::new("/site/quiz-content.md")));
    }
}
