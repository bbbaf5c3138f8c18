#![forbid(unsafe_code)]

//! Component file discovery
//!
//! Walks a directory tree with `ignore`'s worklist walker. Gitignore handling
//! and the other standard filters are switched off; selection is decided only
//! by the configured extensions, excluded directory names and excluded
//! suffixes.

use crate::config::Config;
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Selection policy for component files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    extensions: Vec<String>,
    excluded_dirs: Vec<String>,
    excluded_suffixes: Vec<String>,
}

impl FileFilter {
    pub fn new(
        extensions: Vec<String>,
        excluded_dirs: Vec<String>,
        excluded_suffixes: Vec<String>,
    ) -> Self {
        FileFilter {
            extensions,
            excluded_dirs,
            excluded_suffixes,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        FileFilter::new(
            config.scan.extensions.clone(),
            config.scan.exclude_dirs.clone(),
            config.excluded_suffixes(),
        )
    }

    /// Whether a directory with this name is pruned
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }

    /// Whether a file with this name is a component file
    ///
    /// Hidden files and excluded suffixes are rejected before the extension
    /// is looked at.
    pub fn is_component_file(&self, name: &str) -> bool {
        if name.starts_with('.') {
            return false;
        }
        if self.excluded_suffixes.iter().any(|s| name.ends_with(s.as_str())) {
            return false;
        }

        match Path::new(name).extension() {
            Some(ext) => self.extensions.iter().any(|e| ext == e.as_str()),
            None => false,
        }
    }
}

/// Lists component files under a root directory
pub struct FileWalker {
    filter: FileFilter,
}

impl FileWalker {
    pub fn new(filter: FileFilter) -> Self {
        FileWalker { filter }
    }

    pub fn from_config(config: &Config) -> Self {
        FileWalker::new(FileFilter::from_config(config))
    }

    pub fn filter(&self) -> &FileFilter {
        &self.filter
    }

    /// Returns every component file under `root`
    ///
    /// Entries are sorted by file name within each directory. Unreadable
    /// directories, including a missing root, contribute nothing.
    pub fn walk(&self, root: &Path) -> Vec<PathBuf> {
        let dir_filter = self.filter.clone();

        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| keep_entry(&dir_filter, entry))
            .build();

        let mut files = Vec::new();
        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            let is_file = entry.file_type().is_some_and(|t| t.is_file());
            if !is_file {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if self.filter.is_component_file(&name) {
                files.push(entry.into_path());
            }
        }

        files
    }
}

/// Prunes excluded directories below the root
fn keep_entry(filter: &FileFilter, entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return true;
    }

    let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
    if is_dir && filter.is_excluded_dir(&entry.file_name().to_string_lossy()) {
        debug!(path = %entry.path().display(), "pruning excluded directory");
        return false;
    }

    true
}
