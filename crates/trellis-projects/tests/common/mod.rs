//! Common test utilities for trellis-projects
//!
//! - Mock installers that record requests or fail on demand
//! - Temporary workspace fixtures
//! - Builders for commands wired to in-memory collaborators

#![allow(dead_code)]
#![allow(unused_imports)]

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use trellis_core::TrellisConfig;
use trellis_projects::{
    BlueprintInstaller, InMemoryWorkingDirectory, InstallReport, InstallRequest, MemoryReporter,
    ProjectCreator, ProjectInitializer, WorkingDirectory,
};

/// Installer that records every request and writes a marker file
#[derive(Default)]
pub struct MockInstaller {
    requests: Mutex<Vec<InstallRequest>>,
}

impl MockInstaller {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn requests(&self) -> Vec<InstallRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> InstallRequest {
        self.requests()
            .pop()
            .expect("installer should have been invoked")
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl BlueprintInstaller for MockInstaller {
    async fn install(&self, request: InstallRequest) -> anyhow::Result<InstallReport> {
        self.requests.lock().unwrap().push(request.clone());
        let mut files = Vec::new();
        if !request.dry_run {
            tokio::fs::write(request.target_dir.join("package.json"), "{}").await?;
            files.push(Utf8PathBuf::from("package.json"));
        }
        Ok(InstallReport {
            blueprint: request.blueprint,
            target_dir: request.target_dir,
            files,
            dry_run: request.dry_run,
        })
    }
}

/// Installer that writes a file into the target, then fails
pub struct FailingInstaller {
    message: String,
    calls: Mutex<usize>,
}

impl FailingInstaller {
    pub fn new(message: &str) -> Arc<Self> {
        Arc::new(Self {
            message: message.to_string(),
            calls: Mutex::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl BlueprintInstaller for FailingInstaller {
    async fn install(&self, request: InstallRequest) -> anyhow::Result<InstallReport> {
        *self.calls.lock().unwrap() += 1;
        tokio::fs::write(request.target_dir.join("partial.txt"), "half done").await?;
        Err(anyhow::anyhow!("{}", self.message))
    }
}

/// A temporary directory standing in for the user's working directory
pub struct Workspace {
    _temp: TempDir,
    pub root: Utf8PathBuf,
    pub workdir: Arc<InMemoryWorkingDirectory>,
    pub reporter: Arc<MemoryReporter>,
}

impl Workspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("UTF-8 temp dir");
        Self {
            workdir: Arc::new(InMemoryWorkingDirectory::new(root.clone())),
            reporter: Arc::new(MemoryReporter::new()),
            root,
            _temp: temp,
        }
    }

    /// Workspace whose root is a subdirectory named `name`
    pub fn named(name: &str) -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let base = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("UTF-8 temp dir");
        let root = base.join(name);
        std::fs::create_dir(&root).expect("create named root");
        Self {
            workdir: Arc::new(InMemoryWorkingDirectory::new(root.clone())),
            reporter: Arc::new(MemoryReporter::new()),
            root,
            _temp: temp,
        }
    }

    pub fn current_dir(&self) -> Utf8PathBuf {
        self.workdir.current().expect("current dir")
    }

    pub fn creator(&self, installer: Arc<dyn BlueprintInstaller>) -> ProjectCreator {
        ProjectCreator::new(installer)
            .with_workdir(self.workdir.clone())
            .with_reporter(self.reporter.clone())
            .with_config(TrellisConfig::default())
    }

    pub fn initializer(&self, installer: Arc<dyn BlueprintInstaller>) -> ProjectInitializer {
        ProjectInitializer::new(installer)
            .with_workdir(self.workdir.clone())
            .with_reporter(self.reporter.clone())
            .with_config(TrellisConfig::default())
    }
}

/// Whether `dir` contains no entries
pub fn is_empty_dir(dir: &Utf8Path) -> bool {
    std::fs::read_dir(dir)
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}
