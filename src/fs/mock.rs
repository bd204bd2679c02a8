// src/fs/mock.rs

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use super::FileSystem;

#[derive(Debug, Clone)]
pub enum MockEntry {
    File(Vec<u8>),
    Dir,
}

#[derive(Debug, Default)]
struct MockState {
    entries: HashMap<PathBuf, MockEntry>,
    /// Files that refuse removal, like an executable still running on Windows.
    busy: HashSet<PathBuf>,
}

/// In-memory filesystem for tests.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    state: Arc<Mutex<MockState>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        let fs = Self::default();
        fs.lock().entries.insert(PathBuf::from("."), MockEntry::Dir);
        fs
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let mut state = self.lock();
        insert_file(&mut state, path.as_ref(), content.into());
    }

    /// Add a file whose removal fails with `PermissionDenied`.
    pub fn add_busy_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        let mut state = self.lock();
        insert_file(&mut state, path, content.into());
        state.busy.insert(path.to_path_buf());
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        match self.lock().entries.get(path.as_ref()) {
            Some(MockEntry::File(content)) => Some(content.clone()),
            _ => None,
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        // A poisoned lock only means another test thread panicked.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn insert_file(state: &mut MockState, path: &Path, content: Vec<u8>) {
    if let Some(parent) = path.parent() {
        insert_dirs(state, parent);
    }
    state
        .entries
        .insert(path.to_path_buf(), MockEntry::File(content));
}

fn insert_dirs(state: &mut MockState, path: &Path) {
    for ancestor in path.ancestors() {
        if ancestor.as_os_str().is_empty() {
            continue;
        }
        state
            .entries
            .entry(ancestor.to_path_buf())
            .or_insert(MockEntry::Dir);
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("not found: {:?}", path))
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.lock().entries.contains_key(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        matches!(self.lock().entries.get(path), Some(MockEntry::File(_)))
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        let mut state = self.lock();
        if state.busy.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("file in use: {:?}", path),
            ));
        }
        match state.entries.get(path) {
            Some(MockEntry::File(_)) => {
                state.entries.remove(path);
                Ok(())
            }
            Some(MockEntry::Dir) => Err(io::Error::other(format!(
                "is a directory: {:?}",
                path
            ))),
            None => Err(not_found(path)),
        }
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        let mut state = self.lock();
        let content = match state.entries.get(from) {
            Some(MockEntry::File(content)) => content.clone(),
            _ => return Err(not_found(from)),
        };
        let len = content.len() as u64;
        insert_file(&mut state, to, content);
        Ok(len)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        insert_dirs(&mut self.lock(), path);
        Ok(())
    }
}
