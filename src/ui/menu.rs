use std::io::{self, BufRead, Write};

use dialoguer::Select;

use skyhook::application::resolve_choice;
use skyhook::domain::WorkflowFolder;
use skyhook::error::{SkyhookError, SkyhookResult};
use skyhook::logging::{RunLog, Stage};

use crate::ui::context::UiContext;
use crate::ui::theme::SkyhookTheme;

const PROMPT: &str = "Select an Airflow DAG to deploy";
const CANCELLED: &str = "Deployment cancelled.";

/// Ask the user which folder to deploy.
///
/// Uses an arrow-key menu on a terminal. Without one, reads a folder name or
/// 1-based index from stdin so the tool stays scriptable.
pub fn select_folder(folders: &[WorkflowFolder], ui: &UiContext, log: &RunLog) -> SkyhookResult<WorkflowFolder> {
    let choice = if ui.interactive {
        select_interactive(folders, ui)?
    } else {
        let stdin = io::stdin();
        select_from_reader(folders, &mut stdin.lock(), &mut io::stdout())?
    };

    match choice {
        Some(folder) => {
            log.info(Stage::Select, format!("User selected: {}", folder.name()));
            Ok(folder)
        }
        None => {
            log.warn(Stage::Select, "User cancelled selection.");
            Err(SkyhookError::cancelled(CANCELLED))
        }
    }
}

fn select_interactive(folders: &[WorkflowFolder], ui: &UiContext) -> SkyhookResult<Option<WorkflowFolder>> {
    let theme = SkyhookTheme::new(ui.color, ui.unicode);
    let items: Vec<&str> = folders.iter().map(WorkflowFolder::name).collect();

    let picked = Select::with_theme(&theme)
        .with_prompt(PROMPT)
        .items(&items)
        .default(0)
        .interact_opt();

    match picked {
        Ok(index) => Ok(index.map(|i| folders[i].clone())),
        // Ctrl+C inside the prompt surfaces as an interrupted read.
        Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(dialoguer::Error::IO(err)) => Err(err.into()),
    }
}

fn select_from_reader(
    folders: &[WorkflowFolder],
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> SkyhookResult<Option<WorkflowFolder>> {
    writeln!(out, "{}:", PROMPT)?;
    for (i, folder) in folders.iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, folder.name())?;
    }
    write!(out, "> ")?;
    out.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(None);
    }
    writeln!(out)?;

    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(None);
    }
    match resolve_choice(folders, answer) {
        Some(folder) => Ok(Some(folder.clone())),
        None => Err(SkyhookError::cancelled(format!(
            "'{}' is not one of the listed DAG folders.",
            answer
        ))),
    }
}
