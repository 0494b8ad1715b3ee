//! File store backing the `/files/*` routes.
//!
//! Names map 1:1 onto files beneath a single root directory. Names that
//! would escape the root are refused before touching the filesystem.

use std::io;
use std::path::{Component, Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps `name` to a path under the root.
    ///
    /// Only plain relative components are accepted: no `..`, no `.`, no
    /// leading `/` and nothing empty.
    pub fn resolve(&self, name: &str) -> io::Result<PathBuf> {
        let rel = Path::new(name);
        let mut components = rel.components().peekable();

        if name.is_empty() || components.peek().is_none() {
            return Err(invalid_name(name));
        }

        if !components.all(|c| matches!(c, Component::Normal(_))) {
            return Err(invalid_name(name));
        }

        Ok(self.root.join(rel))
    }

    pub async fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        let path = self.resolve(name)?;
        fs::read(&path).await
    }

    /// Replaces the file's contents, creating it world-accessible if needed.
    pub async fn write(&self, name: &str, contents: &[u8]) -> io::Result<()> {
        let path = self.resolve(name)?;

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o777);

        let mut file = options.open(&path).await?;
        file.write_all(contents).await?;
        file.flush().await?;
        Ok(())
    }
}

fn invalid_name(name: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("file name {:?} escapes the store", name),
    )
}
