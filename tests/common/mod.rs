//! Common test utilities for Verforte integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A support matrix root in a temporary directory
pub struct TestMatrix {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the matrix root
    pub path: PathBuf,
    /// Stand-in user config directory, empty unless a test writes to it
    pub config_home: PathBuf,
}

impl TestMatrix {
    /// Create an empty matrix root
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("matrix");
        let config_home = temp.path().join("config");
        std::fs::create_dir_all(&path).expect("Failed to create matrix root");
        std::fs::create_dir_all(&config_home).expect("Failed to create config home");
        Self {
            temp,
            path,
            config_home,
        }
    }

    /// Matrix with three boards, translations and a reserved directory
    #[allow(dead_code)]
    pub fn sample() -> Self {
        let matrix = Self::new();
        matrix.write_file(
            "vf2/README.md",
            "# VisionFive 2\n\nProduct: VisionFive 2\nCPU: JH7110\nCPU_Core: SiFive U74\n",
        );
        matrix.write_file(
            "vf2/debian/README.md",
            "---\nsys: Debian\nsys_ver: 12\nsys_var: null\nstatus: good\nlast_update: 2024-05-01\n---\n\n# Debian\n",
        );
        matrix.write_file(
            "vf2/debian/README_zh.md",
            "---\nsys: Debian\nstatus: basic\n---\n",
        );
        matrix.write_file(
            "vf2/fedora/README.md",
            "---\nsys: Fedora\nsys_ver: 40\nstatus: wip\n---\n",
        );
        matrix.write_file("duo/README.md", "Product: Milk-V Duo\nCPU: CV1800B\n");
        matrix.write_file(
            "duo/buildroot/README.md",
            "---\nsys: Buildroot\nstatus: cfh\n---\n",
        );
        matrix.write_file("duo/notes/draft.md", "No front matter here.\n");
        matrix.write_file("bare/README.md", "Product: Bare Board\n");
        matrix.write_file(".github/README.md", "Product: Not A Board\n");
        matrix.write_file("assets/README.md", "Product: Not A Board Either\n");
        matrix
    }

    /// Write a file below the matrix root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// `verforte` pointed at this matrix root
    #[allow(dead_code)]
    pub fn cmd(&self) -> Command {
        let mut cmd = verforte_cmd();
        cmd.env("XDG_CONFIG_HOME", &self.config_home)
            .arg("--root")
            .arg(&self.path);
        cmd
    }
}

/// `verforte` with every developer override removed
#[allow(deprecated)]
pub fn verforte_cmd() -> Command {
    let mut cmd = Command::cargo_bin("verforte").expect("verforte binary");
    cmd.env_remove("VERFORTE_ROOT");
    cmd.env_remove("VERFORTE_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}
