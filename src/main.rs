mod adapters;
mod application;
mod cli;
mod config;
mod lock_merge;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{FileProjectLock, FileSystemReader, FileSystemWriter};
use adapters::outbound::glide::{default_cache_root, GlideCli, DEFAULT_GLIDE_COMMAND};
use application::dto::{GetRequest, MergeRequest, DEFAULT_LOCKFILE_NAME};
use application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use application::use_cases::{GetTransitiveUseCase, MergeLockfilesUseCase};
use cli::{dev_import_base_flag, Args, Command, GetArgs, LockMergeArgs};
use config::{discover_config, load_config_from_path, ConfigFile};
use owo_colors::OwoColorize;
use shared::error::{ExitCode, LockError};
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\n{} {}", "Caused by:".yellow(), cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Usage errors exit with code 2 inside clap
    let Args { config, command } = Args::parse_args();

    match command {
        Command::LockMerge(args) => run_lock_merge(config.as_deref(), args),
        Command::Get(args) => run_get(config.as_deref(), args),
    }
}

/// Loads the config file given with --config, or discovers one in `dir`
fn load_config(config_path: Option<&Path>, dir: &Path) -> Result<ConfigFile> {
    let config = match config_path {
        Some(path) => {
            let config = load_config_from_path(path)?;
            eprintln!("⚙️  Loaded config from: {}", path.display());
            config
        }
        None => match discover_config(dir)? {
            Some(config) => {
                eprintln!(
                    "⚙️  Loaded config from: {}",
                    dir.join(config::CONFIG_FILENAME).display()
                );
                config
            }
            None => ConfigFile::default(),
        },
    };
    Ok(config)
}

fn run_lock_merge(config_path: Option<&Path>, args: LockMergeArgs) -> Result<()> {
    let config = load_config(config_path, Path::new("."))?;

    // CLI flags take precedence over the config file
    let dev_import_base = dev_import_base_flag(args.legacy_dev_lookup)
        .or(config.dev_import_base()?)
        .unwrap_or_default();
    let format = args.format.or(config.format()?).unwrap_or_default();

    let use_case = MergeLockfilesUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
    let request = MergeRequest::new(args.base, args.override_lockfile)
        .with_dev_import_base(dev_import_base);
    let response = use_case.execute(request)?;

    let formatter = FormatterFactory::create(format);
    let formatted_output = formatter.format(&response.lockfile)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

fn run_get(config_path: Option<&Path>, args: GetArgs) -> Result<()> {
    let project_path = args.path.unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    let config = load_config(config_path, &project_path)?;

    let dev_import_base = dev_import_base_flag(args.legacy_dev_lookup)
        .or(config.dev_import_base()?)
        .unwrap_or_default();
    let lockfile_name = config
        .lock_file
        .clone()
        .unwrap_or_else(|| DEFAULT_LOCKFILE_NAME.to_string());
    let glide_command = config
        .glide_command
        .clone()
        .unwrap_or_else(|| DEFAULT_GLIDE_COMMAND.to_string());
    let cache_root = match config.cache_dir.clone().or_else(default_cache_root) {
        Some(cache_root) => cache_root,
        None => anyhow::bail!(
            "Could not locate the glide cache.\n\n\
             💡 Hint: Set GLIDE_HOME or cache_dir in {}",
            config::CONFIG_FILENAME
        ),
    };

    // Create adapters (Dependency Injection)
    let use_case = GetTransitiveUseCase::new(
        FileSystemReader::new(),
        FileSystemWriter::new(),
        GlideCli::new(glide_command.clone(), cache_root.clone()),
        GlideCli::new(glide_command, cache_root),
        FileProjectLock::new(),
        StderrProgressReporter::new(),
    );

    let request = GetRequest::new(project_path, args.dependency, args.interactive)
        .with_lockfile_name(lockfile_name)
        .with_dev_import_base(dev_import_base);

    use_case.execute(request)?;
    Ok(())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(LockError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| LockError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(LockError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(LockError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
