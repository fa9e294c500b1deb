use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::model::task::Task;
use crate::repository::line_format::{decode_line, encode_line};
use crate::repository::traits::TaskStore;

pub const DEFAULT_FILE_NAME: &str = "todobot.txt";
const DEFAULT_DIR_NAME: &str = ".todobot";
const FALLBACK_DIR: &str = "data";

/// Plain-text save file, rewritten in full on every save.
#[derive(Clone, Debug)]
pub struct FileTaskStore {
    file_path: PathBuf,
}

impl FileTaskStore {
    /// Stores into `<base_dir>/todobot.txt`. Without a base directory this is
    /// `~/.todobot`, or `./data` when no home directory can be found.
    ///
    /// Nothing is created on disk until the first save.
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        let dir = base_dir.unwrap_or_else(|| match dirs::home_dir() {
            Some(home) => home.join(DEFAULT_DIR_NAME),
            None => {
                warn!("could not determine home directory, using ./{FALLBACK_DIR}");
                PathBuf::from(FALLBACK_DIR)
            }
        });
        Self::with_file(dir.join(DEFAULT_FILE_NAME))
    }

    pub fn with_file(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn write_tasks(&self, tasks: &[Task]) -> std::io::Result<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        for task in tasks {
            writeln!(writer, "{}", encode_line(task))?;
        }
        writer.flush()
    }
}

impl TaskStore for FileTaskStore {
    fn load(&self) -> Vec<Task> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "no save file yet");
            return Vec::new();
        }

        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %self.file_path.display(), error = %err, "unable to load tasks");
                return Vec::new();
            }
        };

        let mut tasks = Vec::new();
        for (number, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            match decode_line(line) {
                Ok(task) => tasks.push(task),
                Err(reason) => warn!(
                    path = %self.file_path.display(),
                    line_number = number + 1,
                    %reason,
                    "skipping corrupt line: {line}"
                ),
            }
        }

        debug!(path = %self.file_path.display(), count = tasks.len(), "loaded tasks");
        tasks
    }

    fn save(&self, tasks: &[Task]) {
        match self.write_tasks(tasks) {
            Ok(()) => debug!(path = %self.file_path.display(), count = tasks.len(), "saved tasks"),
            Err(err) => {
                warn!(path = %self.file_path.display(), error = %err, "unable to save tasks")
            }
        }
    }
}
