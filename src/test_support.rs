use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A standalone repository on `main` with two commits and no remotes.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());
    commit_file(temp_dir.path(), "README.md", "Initial commit");
    commit_file(temp_dir.path(), "file2.txt", "Commit 2");
    temp_dir
}

/// Three repositories sharing one temp directory:
///
/// - `origin.git`: bare remote whose HEAD points at `main`
/// - `seed`: a clone used to push changes "from someone else"
/// - `work`: the clone under test, with `origin/HEAD` set
pub(crate) struct SyncFixture {
    root: TempDir,
}

impl SyncFixture {
    pub(crate) fn new() -> Self {
        let root = TempDir::new().unwrap();
        let origin = root.path().join("origin.git");
        let seed = root.path().join("seed");

        git(root.path(), &["init", "--quiet", "--bare", "origin.git"]);
        git(&origin, &["symbolic-ref", "HEAD", "refs/heads/main"]);

        std::fs::create_dir_all(&seed).unwrap();
        init_repo(&seed);
        commit_file(&seed, "README.md", "Initial commit");
        commit_file(&seed, "file2.txt", "Commit 2");
        git(&seed, &["remote", "add", "origin", &origin.to_string_lossy()]);
        git(&seed, &["push", "--quiet", "--set-upstream", "origin", "main"]);

        git(root.path(), &["clone", "--quiet", "origin.git", "work"]);
        configure_identity(&root.path().join("work"));

        Self { root }
    }

    pub(crate) fn seed(&self) -> PathBuf {
        self.root.path().join("seed")
    }

    pub(crate) fn work(&self) -> PathBuf {
        self.root.path().join("work")
    }

    /// Commit on the seed's current branch and push it to the same name on origin.
    pub(crate) fn push_from_seed(&self, file: &str, message: &str) -> String {
        let seed = self.seed();
        let sha = commit_file(&seed, file, message);
        git(&seed, &["push", "--quiet", "origin", "HEAD"]);
        sha
    }
}

fn init_repo(path: &Path) {
    git(path, &["init", "--quiet"]);
    // Ensure the repo uses a deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    configure_identity(path);
}

fn configure_identity(path: &Path) {
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);
}

/// Write `file` and commit it, returning the new HEAD id.
pub(crate) fn commit_file(repo_dir: &Path, file: &str, message: &str) -> String {
    std::fs::write(repo_dir.join(file), format!("{}\n", message)).unwrap();
    git(repo_dir, &["add", "."]);
    git(repo_dir, &["commit", "--quiet", "-m", message]);
    git_stdout(repo_dir, &["rev-parse", "HEAD"])
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) {
    git_stdout(repo_dir, args);
}

pub(crate) fn git_stdout(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
