//! Shared helpers for CLI integration tests.

#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::PathBuf;

use anki_clean::cli::Cli;
use tempfile::TempDir;

/// Scratch directory holding one input export.
pub struct TestContext {
    pub dir: TempDir,
    pub input: PathBuf,
}

impl TestContext {
    pub fn new(content: &str) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("deck.txt");
        fs::write(&input, content).expect("write input");
        Self { dir, input }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn cli(&self, extra: &[&str]) -> Cli {
        use clap::Parser;
        let input = self.input.to_string_lossy().into_owned();
        let mut args = vec!["anki-clean".to_string(), input];
        args.extend(extra.iter().map(|s| s.to_string()));
        Cli::parse_from(args)
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("read output")
    }
}
