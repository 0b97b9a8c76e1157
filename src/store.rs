//! Flat-file credential store.
//!
//! One [`Record`] per line, in the order accounts were created. The file is
//! the only record of locally known accounts; nothing is cached between runs.
//! A missing file reads as an empty store.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Record, Result};

/// Handle to the credentials file.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Use `path` as the store. The file is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record and flush it before returning.
    pub fn append(&self, record: &Record) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", record.encode())?;
        file.flush()?;
        debug!(path = %self.path.display(), email = %record.email, "record appended");
        Ok(())
    }

    /// All non-blank lines in file order.
    pub fn read_all(&self) -> Result<Vec<String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(raw
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }

    /// All records in file order, decoded best-effort.
    pub fn records(&self) -> Result<Vec<Record>> {
        Ok(self
            .read_all()?
            .iter()
            .map(|line| Record::decode(line))
            .collect())
    }

    /// Keep only the lines for which `keep(index, line)` is true.
    ///
    /// The new content goes to a temporary file next to the store which is
    /// then renamed over it, so readers see either the old or the new file.
    /// Returns how many lines were dropped.
    pub fn rewrite<F>(&self, mut keep: F) -> Result<usize>
    where
        F: FnMut(usize, &str) -> bool,
    {
        let lines = self.read_all()?;
        let before = lines.len();
        let kept: Vec<String> = lines
            .into_iter()
            .enumerate()
            .filter(|(index, line)| keep(*index, line.as_str()))
            .map(|(_, line)| line)
            .collect();

        let mut temp = tempfile::NamedTempFile::new_in(self.dir())?;
        for line in &kept {
            writeln!(temp, "{line}")?;
        }
        temp.flush()?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path)?;

        let dropped = before - kept.len();
        debug!(path = %self.path.display(), dropped, "store rewritten");
        Ok(dropped)
    }

    /// Remove the record at zero-based `index`, leaving the rest in order.
    ///
    /// Returns the removed record, or `None` (with the file untouched) when
    /// the index is out of range.
    pub fn remove_at(&self, index: usize) -> Result<Option<Record>> {
        let lines = self.read_all()?;
        let Some(line) = lines.get(index) else {
            return Ok(None);
        };
        let removed = Record::decode(line);
        self.rewrite(|i, _| i != index)?;
        Ok(Some(removed))
    }

    /// Password of the first record whose email is `email`.
    ///
    /// Falls back to the first line that merely contains `email`, the lookup
    /// older versions of this tool used. An address that is a substring of
    /// another can therefore match the wrong line when no exact entry exists.
    pub fn find_password_for(&self, email: &str) -> Result<Option<String>> {
        let lines = self.read_all()?;
        let exact = lines
            .iter()
            .map(|line| Record::decode(line))
            .find(|record| record.email == email);
        if let Some(record) = exact {
            return Ok(Some(record.password));
        }
        Ok(lines
            .iter()
            .find(|line| line.contains(email))
            .map(|line| Record::decode(line).password))
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}
