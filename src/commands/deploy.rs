use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{cursor, ExecutableCommand};

use skyhook::application::{scan_workflows, DeployExecutor, GitValidator};
use skyhook::config::{resolve_root, ConfigWarning, OutputConfig, RunConfig, RunFlags};
use skyhook::domain::{Exclusions, GitValidationResult, WorkflowFolder};
use skyhook::error::{SkyhookError, SkyhookResult};
use skyhook::infrastructure::{fetch_quote, GitCli, GsutilSync};
use skyhook::logging::{RunLog, Stage, LOG_FILE_NAME};

use crate::commands::report::report_error;
use crate::ui::activity::Activity;
use crate::ui::blocks::header::IntroHeader;
use crate::ui::blocks::summary::DeploySummary;
use crate::ui::context::UiContext;
use crate::ui::menu::select_folder;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Run one deployment and return the process exit code.
///
/// `Err` is reserved for start-up faults outside the pipeline itself.
pub fn cmd_deploy(path: Option<&Path>, verbose: bool, no_git: bool) -> Result<i32> {
    let cwd = std::env::current_dir().context("failed to read the current directory")?;
    let log = RunLog::for_run(verbose, resolve_root(&cwd, path).join(LOG_FILE_NAME));
    log.info(Stage::Init, "Skyhook started");

    install_interrupt_handler(log.clone())?;

    let flags = RunFlags {
        verbose,
        skip_git_check: no_git,
    };
    let mut ui = UiContext::new(verbose, &OutputConfig::default());

    let code = match run_pipeline(&cwd, path, flags, &log, &mut ui) {
        Ok(()) => 0,
        Err(err) => report_error(&err, &ui, &log),
    };
    Ok(code)
}

fn install_interrupt_handler(log: RunLog) -> Result<()> {
    ctrlc::set_handler(move || {
        let _ = io::stdout().execute(cursor::Show);
        log.warn(Stage::Init, "Interrupted by user.");
        println!("\nOperation cancelled.");
        std::process::exit(0);
    })
    .context("failed to install Ctrl+C handler")
}

fn run_pipeline(
    cwd: &Path,
    path: Option<&Path>,
    flags: RunFlags,
    log: &RunLog,
    ui: &mut UiContext,
) -> SkyhookResult<()> {
    let (config, warnings) = RunConfig::resolve(path, flags).inspect_err(|err| {
        log.error(Stage::Config, err.to_string());
    })?;
    *ui = UiContext::new(flags.verbose, &config.settings.output);
    let ui = &*ui;

    log.info(
        Stage::Config,
        format!(
            "Root: {}, DAGs: {}, bucket: {}",
            config.root_dir.display(),
            config.workflows_dir.display(),
            config.bucket_url()
        ),
    );
    print_config_warnings(&warnings, ui, log);
    print_intro(&config, ui);

    let mut activity = Activity::stdout(ui);

    // 1. Scan
    activity.start(format!(
        "Looking for DAGs in: {}",
        relative_display(&config.workflows_dir, cwd)
    ));
    let folders = match scan_workflows(&config.workflows_dir, log) {
        Ok(folders) => folders,
        Err(err) => {
            activity.fail(&scan_failure(&err));
            return Err(err);
        }
    };
    activity.succeed(&format!("Found {} Airflow DAGs.", folders.len()));

    // 2. Select
    let folder = select_folder(&folders, ui, log)?;

    // 3. Validate
    if config.skip_git_check {
        log.warn(Stage::Git, "Git validation skipped (--no-git).");
        activity.warn("Skipping git validation (--no-git).");
    } else {
        validate_git(&config, &folder, &mut activity, ui, log)?;
    }

    // 4. Deploy
    let destination = config.destination_for(folder.name());
    let sync = &config.settings.sync;
    let executor = DeployExecutor::new(GsutilSync::from_config(sync), Exclusions::from_config(sync));

    activity.start("Starting GCS Upload...");
    let outcome = match executor.run(&folder, &destination, log, &mut activity) {
        Ok(outcome) => outcome,
        Err(err) => {
            activity.fail("Deployment Failed");
            return Err(err);
        }
    };
    activity.succeed("GCS sync complete.");

    let summary = DeploySummary::new(
        folder.name(),
        relative_display(folder.path(), &config.root_dir),
        outcome.destination_uri.as_str(),
        outcome.files_synced,
        config.console_url_for(folder.name()),
    );
    println!();
    print!("{}", summary.render(ui.color, ui.unicode, ui.hyperlinks));
    println!();
    println!(
        "{} {}",
        Icon::Deploy.colored(ui.color, ui.unicode),
        ColoredText::success("Deployment Successful!").bold().render(ui.color)
    );
    log.info(Stage::Deploy, "Deployment steps completed successfully.");

    // 5. Quote
    if config.settings.quote.enabled {
        print_quote(Duration::from_secs(config.settings.quote.timeout_secs), ui, log);
    }

    Ok(())
}

fn validate_git(
    config: &RunConfig,
    folder: &WorkflowFolder,
    activity: &mut Activity<io::Stdout>,
    ui: &UiContext,
    log: &RunLog,
) -> SkyhookResult<()> {
    let validator = GitValidator::from_config(&config.settings.git);
    let repo = GitCli::new(folder.path());

    activity.start("Validating Git status...");
    let result = validator.validate(&repo, log, |check| activity.set_message(check.description()));
    let result = match result {
        Ok(result) => result,
        Err(err) => {
            activity.fail("Git validation could not complete.");
            return Err(err);
        }
    };

    if result.is_passed() {
        activity.succeed(&format!(
            "Git validation passed ({} branch, in sync).",
            validator.branch()
        ));
        return Ok(());
    }

    activity.fail(&result.headline());
    if let GitValidationResult::OutOfSync {
        counts: Some(counts), ..
    } = &result
    {
        if counts.ahead > 0 {
            let line = format!("   - Ahead by {} commit(s)", counts.ahead);
            activity.println(&ColoredText::warning(line).render(ui.color));
        }
        if counts.behind > 0 {
            let line = format!("   - Behind by {} commit(s)", counts.behind);
            activity.println(&ColoredText::warning(line).render(ui.color));
        }
    }
    Err(SkyhookError::Validation(result))
}

fn scan_failure(err: &SkyhookError) -> String {
    match err {
        SkyhookError::DirectoryNotFound { path } => format!("Directory '{}' not found.", path.display()),
        SkyhookError::NoFoldersFound { path } => format!("No folders found in {}", path.display()),
        other => other.to_string(),
    }
}

fn print_intro(config: &RunConfig, ui: &UiContext) {
    let mut header = IntroHeader::new();
    header.add("Root", config.root_dir.display().to_string());
    header.add("Bucket", config.bucket_url());
    if config.verbose {
        header.add("Log", config.log_path().display().to_string());
    }
    print!("{}", header.render(ui.color, ui.unicode, ui.caps.width));
    println!();
}

fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext, log: &RunLog) {
    for warning in warnings {
        let message = format!(
            "Unknown key '{}' in {} (ignored)",
            warning.key,
            warning.file.display()
        );
        log.warn(Stage::Config, &message);
        println!(
            "{} {}",
            Icon::Warning.colored(ui.color, ui.unicode),
            ColoredText::warning(message).render(ui.color)
        );
    }
}

fn print_quote(timeout: Duration, ui: &UiContext, log: &RunLog) {
    match fetch_quote(timeout) {
        Some(quote) => {
            log.info(Stage::Quote, "Quote fetched.");
            println!("\n{}\n", ColoredText::dim(quote).italic().render(ui.color));
        }
        None => log.warn(Stage::Quote, "No quote available."),
    }
}

/// `path` relative to `base` when it lies inside it
fn relative_display(path: &Path, base: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
        _ => path.display().to_string(),
    }
}
