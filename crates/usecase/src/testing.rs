// crates/usecase/src/testing.rs
//! In-memory port implementations shared by the use-case tests.

use std::{
    io,
    path::{Path, PathBuf},
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use chrono::{NaiveDate, NaiveDateTime};
use corpus_scrape_ports::{
    clock::Clock,
    filesystem::{FileSource, WalkEntries},
    progress::ProgressSink,
};
use corpus_scrape_shared_kernel::{FileSize, InfrastructureError, Result};

pub fn stamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 2)
        .and_then(|d| d.and_hms_micro_opt(3, 4, 5, 600_000))
        .unwrap()
}

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        stamp()
    }
}

enum Entry {
    Text(String),
    Binary(u64),
    Unstatable,
    WalkError,
}

/// Walks entries in insertion order, mimicking a sorted depth-first walk.
#[derive(Default)]
pub struct MemoryFs {
    entries: Vec<(PathBuf, Entry)>,
    missing_roots: Vec<PathBuf>,
    stats: AtomicUsize,
    walked: Mutex<Vec<PathBuf>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.entries.push((path.into(), Entry::Text(content.into())));
        self
    }

    pub fn with_sized(self, path: &str, size: usize) -> Self {
        self.with_file(path, &"x".repeat(size))
    }

    pub fn with_binary(mut self, path: &str, size: u64) -> Self {
        self.entries.push((path.into(), Entry::Binary(size)));
        self
    }

    pub fn with_unstatable(mut self, path: &str) -> Self {
        self.entries.push((path.into(), Entry::Unstatable));
        self
    }

    /// Walking over `path` yields an error at this position.
    pub fn with_walk_error(mut self, path: &str) -> Self {
        self.entries.push((path.into(), Entry::WalkError));
        self
    }

    pub fn with_missing_root(mut self, root: &str) -> Self {
        self.missing_roots.push(root.into());
        self
    }

    pub fn stat_calls(&self) -> usize {
        self.stats.load(Ordering::SeqCst)
    }

    pub fn walked_roots(&self) -> Vec<PathBuf> {
        self.walked.lock().unwrap().clone()
    }

    fn find(&self, path: &Path) -> Option<&Entry> {
        self.entries.iter().find(|(p, _)| p == path).map(|(_, e)| e)
    }
}

fn not_found(operation: &str, path: &Path) -> InfrastructureError {
    InfrastructureError::FileSystemOperation {
        operation: operation.into(),
        path: path.to_path_buf(),
        source: io::Error::from(io::ErrorKind::NotFound),
    }
}

impl FileSource for MemoryFs {
    fn walk<'a>(&'a self, root: &Path) -> WalkEntries<'a> {
        self.walked.lock().unwrap().push(root.to_path_buf());
        if self.missing_roots.iter().any(|r| r == root) {
            let err: Result<PathBuf> =
                Err(InfrastructureError::Walk { root: root.to_path_buf(), details: "no such directory".into() }.into());
            return Box::new(std::iter::once(err));
        }

        let root = root.to_path_buf();
        Box::new(self.entries.iter().filter(move |(p, _)| p.starts_with(&root)).map(
            |(p, e)| -> Result<PathBuf> {
                match e {
                    Entry::WalkError => {
                        Err(InfrastructureError::Walk { root: p.clone(), details: "permission denied".into() }.into())
                    }
                    _ => Ok(p.clone()),
                }
            },
        ))
    }

    fn file_size(&self, path: &Path) -> Result<FileSize> {
        self.stats.fetch_add(1, Ordering::SeqCst);
        match self.find(path) {
            Some(Entry::Text(s)) => Ok(FileSize::new(s.len() as u64)),
            Some(Entry::Binary(n)) => Ok(FileSize::new(*n)),
            _ => Err(not_found("stat", path).into()),
        }
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        match self.find(path) {
            Some(Entry::Text(s)) => Ok(s.clone()),
            Some(Entry::Binary(_)) => Err(InfrastructureError::NotText { path: path.to_path_buf() }.into()),
            _ => Err(not_found("read", path).into()),
        }
    }
}

/// Records every progress callback.
#[derive(Default)]
pub struct RecordingProgress {
    pub directories: Mutex<Vec<(usize, usize, PathBuf)>>,
    pub completed: Mutex<Option<(usize, FileSize)>>,
    pub written: Mutex<Option<PathBuf>>,
}

impl ProgressSink for RecordingProgress {
    fn on_directory(&self, index: usize, total: usize, directory: &Path) -> Result<()> {
        self.directories.lock().unwrap().push((index, total, directory.to_path_buf()));
        Ok(())
    }

    fn on_complete(&self, file_count: usize, total_size: FileSize) -> Result<()> {
        *self.completed.lock().unwrap() = Some((file_count, total_size));
        Ok(())
    }

    fn on_written(&self, output: &Path) -> Result<()> {
        *self.written.lock().unwrap() = Some(output.to_path_buf());
        Ok(())
    }
}
