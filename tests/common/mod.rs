#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Scratch tree for scanner tests
pub struct TestTree {
    pub temp_dir: TempDir,
}

impl TestTree {
    /// Create an empty tree
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// The standard fixture:
    ///
    /// ```text
    /// a/b/{file1.txt, file2.txt, junk.txt, bad_dir/}
    /// c/{file1.txt, file2.txt, junk.txt, bad_dir/}
    /// ```
    pub fn standard() -> Result<Self> {
        let tree = Self::new()?;
        for dir in ["a/b", "c"] {
            for file in ["file1.txt", "file2.txt", "junk.txt"] {
                tree.file(&format!("{dir}/{file}"))?;
            }
            tree.dir(&format!("{dir}/bad_dir"))?;
        }
        Ok(tree)
    }

    pub fn file(&self, rel: &str) -> Result<()> {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, rel)?;
        Ok(())
    }

    pub fn dir(&self, rel: &str) -> Result<()> {
        fs::create_dir_all(self.path().join(rel))?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// Listing order is unspecified, so compare sorted copies.
pub fn sorted<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut v: Vec<String> = items.iter().map(|s| s.as_ref().to_string()).collect();
    v.sort();
    v
}
