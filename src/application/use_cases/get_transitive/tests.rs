use super::*;
use crate::lock_merge::domain::Lock;
use crate::lock_merge::policies::DevImportBase;
use crate::ports::outbound::LockGuard;
use crate::shared::error::LockError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

type Events = Rc<RefCell<Vec<String>>>;

struct MockLockfileReader {
    files: HashMap<PathBuf, Lockfile>,
}

impl LockfileReader for MockLockfileReader {
    fn read_lockfile(&self, path: &Path) -> Result<Lockfile> {
        self.files.get(path).cloned().ok_or_else(|| {
            LockError::LockfileNotFound {
                path: path.to_path_buf(),
                suggestion: "mock".to_string(),
            }
            .into()
        })
    }

    fn lockfile_exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

struct MockLockfileWriter {
    events: Events,
    written: Rc<RefCell<Option<(PathBuf, Lockfile)>>>,
}

impl LockfileWriter for MockLockfileWriter {
    fn write_lockfile(&self, path: &Path, lockfile: &Lockfile) -> Result<()> {
        self.events.borrow_mut().push("write".to_string());
        *self.written.borrow_mut() = Some((path.to_path_buf(), lockfile.clone()));
        Ok(())
    }
}

struct MockDependencyFetcher {
    events: Events,
    result: Option<FetchedDependency>,
}

impl DependencyFetcher for MockDependencyFetcher {
    fn fetch(
        &self,
        _project_path: &Path,
        spec: &DependencySpec,
        interactive: bool,
    ) -> Result<FetchedDependency> {
        self.events
            .borrow_mut()
            .push(format!("fetch {} interactive={}", spec.raw(), interactive));
        self.result
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Mock fetch failure"))
    }
}

struct MockDependencyInstaller {
    events: Events,
    should_fail: bool,
}

impl DependencyInstaller for MockDependencyInstaller {
    fn install(&self, _project_path: &Path) -> Result<()> {
        self.events.borrow_mut().push("install".to_string());
        if self.should_fail {
            anyhow::bail!("Mock install failure");
        }
        Ok(())
    }
}

struct MockProjectLock {
    events: Events,
    held: bool,
}

impl ProjectLock for MockProjectLock {
    fn acquire(&self, project_path: &Path) -> Result<LockGuard> {
        if self.held {
            return Err(LockError::ProjectLocked {
                path: project_path.join(".lock-transitive.lock"),
            }
            .into());
        }
        self.events.borrow_mut().push("acquire".to_string());
        let events = Rc::clone(&self.events);
        Ok(LockGuard::new(move || {
            events.borrow_mut().push("release".to_string())
        }))
    }
}

struct MockProgressReporter;

impl ProgressReporter for MockProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_error(&self, _message: &str) {}
    fn report_completion(&self, _message: &str) {}
}

const PROJECT: &str = "/work/project";
const CACHE: &str = "/cache/src/https-github.com-tendermint-go-wire";
const DEP: &str = "github.com/tendermint/go-wire";

fn project_lockfile() -> Lockfile {
    Lockfile::new(
        vec![
            Lock::new("github.com/spf13/cobra", "v0.0.1").unwrap(),
            Lock::new("github.com/pkg/errors", "v0.7.0").unwrap(),
        ],
        vec![Lock::new("github.com/stretchr/testify", "v1.1.0")
            .unwrap()
            .with_subpackages(["assert"])],
        "project-hash".to_string(),
    )
    .unwrap()
}

fn dependency_lockfile() -> Lockfile {
    Lockfile::new(
        vec![Lock::new("github.com/pkg/errors", "v0.8.0")
            .unwrap()
            .with_subpackages(["cause"])],
        vec![],
        "dependency-hash".to_string(),
    )
    .unwrap()
}

fn fetched() -> FetchedDependency {
    FetchedDependency::new(
        Lock::new(DEP, "v0.6.2")
            .unwrap()
            .with_repository("https://github.com/tendermint/go-wire")
            .with_vcs("git")
            .with_pin("3c22a7a539411f89a96738fcfa14c1027e24e5ec"),
        PathBuf::from(CACHE),
    )
}

struct Harness {
    events: Events,
    written: Rc<RefCell<Option<(PathBuf, Lockfile)>>>,
    use_case: GetTransitiveUseCase<
        MockLockfileReader,
        MockLockfileWriter,
        MockDependencyFetcher,
        MockDependencyInstaller,
        MockProjectLock,
        MockProgressReporter,
    >,
}

fn harness(
    files: HashMap<PathBuf, Lockfile>,
    fetch_result: Option<FetchedDependency>,
    install_fails: bool,
    lock_held: bool,
) -> Harness {
    let events: Events = Rc::new(RefCell::new(Vec::new()));
    let written = Rc::new(RefCell::new(None));
    let use_case = GetTransitiveUseCase::new(
        MockLockfileReader { files },
        MockLockfileWriter {
            events: Rc::clone(&events),
            written: Rc::clone(&written),
        },
        MockDependencyFetcher {
            events: Rc::clone(&events),
            result: fetch_result,
        },
        MockDependencyInstaller {
            events: Rc::clone(&events),
            should_fail: install_fails,
        },
        MockProjectLock {
            events: Rc::clone(&events),
            held: lock_held,
        },
        MockProgressReporter,
    );
    Harness {
        events,
        written,
        use_case,
    }
}

fn both_lockfiles() -> HashMap<PathBuf, Lockfile> {
    HashMap::from([
        (PathBuf::from(PROJECT).join("glide.lock"), project_lockfile()),
        (PathBuf::from(CACHE).join("glide.lock"), dependency_lockfile()),
    ])
}

fn request() -> GetRequest {
    GetRequest::new(PathBuf::from(PROJECT), format!("{}/data@v0.6.2", DEP), false)
}

#[test]
fn test_execute_splices_dependency_lockfile() {
    let h = harness(both_lockfiles(), Some(fetched()), false, false);

    let response = h.use_case.execute(request()).unwrap();

    assert_eq!(response.dependency.as_str(), DEP);
    assert_eq!(response.pin, "3c22a7a539411f89a96738fcfa14c1027e24e5ec");
    assert!(response.dependency_lockfile_found);
    assert_eq!(response.lockfile_path, PathBuf::from(PROJECT).join("glide.lock"));

    let merged = &response.lockfile;
    let names: Vec<&str> = merged.imports().iter().map(|l| l.name().as_str()).collect();
    assert_eq!(
        names,
        ["github.com/pkg/errors", "github.com/spf13/cobra", DEP]
    );

    let errors = merged.get_import("github.com/pkg/errors").unwrap();
    assert_eq!(errors.version(), "v0.8.0");
    assert_eq!(errors.subpackages(), ["cause"]);

    let dep = merged.get_import(DEP).unwrap();
    assert_eq!(dep.version(), "3c22a7a539411f89a96738fcfa14c1027e24e5ec");
    assert_eq!(dep.repository(), Some("https://github.com/tendermint/go-wire"));

    assert_eq!(merged.dev_imports().len(), 1);
    assert_eq!(
        merged.hash(),
        crate::lock_merge::services::combine_hashes("project-hash", "dependency-hash")
    );
    assert!(merged.updated().is_some());
}

#[test]
fn test_execute_call_order() {
    let h = harness(both_lockfiles(), Some(fetched()), false, false);
    h.use_case.execute(request()).unwrap();

    assert_eq!(
        *h.events.borrow(),
        [
            "acquire".to_string(),
            format!("fetch {}/data@v0.6.2 interactive=false", DEP),
            "write".to_string(),
            "install".to_string(),
            "release".to_string(),
        ]
    );

    let written = h.written.borrow();
    let (path, lockfile) = written.as_ref().unwrap();
    assert_eq!(path, &PathBuf::from(PROJECT).join("glide.lock"));
    assert!(lockfile.get_import(DEP).is_some());
}

#[test]
fn test_execute_without_dependency_lockfile() {
    let files = HashMap::from([(PathBuf::from(PROJECT).join("glide.lock"), project_lockfile())]);
    let h = harness(files, Some(fetched()), false, false);

    let response = h.use_case.execute(request()).unwrap();

    assert!(!response.dependency_lockfile_found);
    assert_eq!(response.lockfile.imports().len(), 3);
    assert_eq!(
        response.lockfile.get_import("github.com/pkg/errors").unwrap().version(),
        "v0.7.0"
    );
    assert_eq!(
        response.lockfile.hash(),
        crate::lock_merge::services::combine_hashes("project-hash", "")
    );
}

#[test]
fn test_execute_passes_interactive_flag() {
    let h = harness(both_lockfiles(), Some(fetched()), false, false);
    let request = GetRequest::new(PathBuf::from(PROJECT), DEP, true);

    h.use_case.execute(request).unwrap();
    assert!(h.events.borrow()[1].ends_with("interactive=true"));
}

#[test]
fn test_execute_custom_lockfile_name_and_policy() {
    let files = HashMap::from([
        (PathBuf::from(PROJECT).join("deps.lock"), project_lockfile()),
        (PathBuf::from(CACHE).join("deps.lock"), dependency_lockfile()),
    ]);
    let h = harness(files, Some(fetched()), false, false);
    let request = request()
        .with_lockfile_name("deps.lock")
        .with_dev_import_base(DevImportBase::Imports);

    let response = h.use_case.execute(request).unwrap();
    assert!(response.dependency_lockfile_found);
    assert_eq!(response.lockfile_path, PathBuf::from(PROJECT).join("deps.lock"));
}

#[test]
fn test_execute_missing_project_lockfile_stops_before_write() {
    let files = HashMap::from([(PathBuf::from(CACHE).join("glide.lock"), dependency_lockfile())]);
    let h = harness(files, Some(fetched()), false, false);

    let err = h.use_case.execute(request()).unwrap_err();

    assert!(err.to_string().contains("Could not read base lock file"));
    let events = h.events.borrow();
    assert!(!events.contains(&"write".to_string()));
    assert!(!events.contains(&"install".to_string()));
    assert_eq!(events.last().unwrap(), "release");
}

#[test]
fn test_execute_fetch_failure() {
    let h = harness(both_lockfiles(), None, false, false);

    let err = h.use_case.execute(request()).unwrap_err();

    assert!(err.to_string().contains("Failed to get"));
    assert!(h.written.borrow().is_none());
    assert_eq!(*h.events.borrow().last().unwrap(), "release");
}

#[test]
fn test_execute_fetched_name_mismatch() {
    let wrong = FetchedDependency::new(
        Lock::new("github.com/other/pkg", "v1").unwrap(),
        PathBuf::from(CACHE),
    );
    let h = harness(both_lockfiles(), Some(wrong), false, false);

    let err = h.use_case.execute(request()).unwrap_err();
    assert!(err.to_string().contains("does not match"));
    assert!(h.written.borrow().is_none());
}

#[test]
fn test_execute_install_failure_after_write() {
    let h = harness(both_lockfiles(), Some(fetched()), true, false);

    let err = h.use_case.execute(request()).unwrap_err();

    assert!(err.to_string().contains("Could not install dependencies"));
    assert!(h.written.borrow().is_some());
}

#[test]
fn test_execute_project_locked() {
    let h = harness(both_lockfiles(), Some(fetched()), false, true);

    let err = h.use_case.execute(request()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<LockError>(),
        Some(LockError::ProjectLocked { .. })
    ));
    assert!(h.events.borrow().is_empty());
}

#[test]
fn test_execute_invalid_dependency_name() {
    let h = harness(both_lockfiles(), Some(fetched()), false, false);
    let request = GetRequest::new(PathBuf::from(PROJECT), "@v1.0", false);

    let err = h.use_case.execute(request).unwrap_err();
    assert!(err.to_string().contains("Package name is required"));
    assert!(h.events.borrow().is_empty());
}
