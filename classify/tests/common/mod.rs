use assert_cmd::assert::Assert;
use assert_cmd::Command;
use assert_fs::TempDir;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct ClassifyTestHelper<'a> {
    pub work_dir: TempDir,
    base_url: String,
    name: &'a str,
    counter: AtomicUsize,
}

impl<'a> ClassifyTestHelper<'a> {
    pub fn new(name: &'a str, base_url: &str) -> Self {
        Self {
            work_dir: TempDir::new().unwrap(),
            base_url: base_url.to_string(),
            name,
            counter: AtomicUsize::new(0),
        }
    }

    pub fn run_command(&self, args: &[&str]) -> Assert {
        let mut cmd = Command::cargo_bin("classify").unwrap();
        cmd.current_dir(self.work_dir.path())
            .env(
                "CLASSIFY_RUN_ID",
                format!(
                    "{}-{}",
                    self.name,
                    self.counter.fetch_add(1, Ordering::Relaxed)
                ),
            )
            .env("CLASSIFY_BASE_URL", &self.base_url)
            .env("CLASSIFY_OUTPUT_PROGRESS", "plain")
            .env_remove("CLASSIFY_CONFIG")
            .env("NO_COLOR", "1")
            .args(args)
            .assert()
    }

    pub fn write_file(&self, name: &str, contents: &str) {
        std::fs::write(self.work_dir.path().join(name), contents).unwrap();
    }
}
