//! Line-driven task list surface.
//!
//! # Responsibility
//! - Stand in for a renderer: read gestures from stdin, forward them to
//!   `TaskListService`, print the resulting list.
//! - Resolve platform and logging settings once at startup.

mod command;

use clap::Parser;
use command::{parse_line, Command};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tasklist_core::{
    default_log_level, init_from_config, CoreConfig, TaskListService, TaskListView,
};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(version)]
#[command(about = "Drive the task list core from the terminal")]
struct Cli {
    /// Host platform: touch|pointer (falls back to TASKLIST_PLATFORM)
    #[arg(short, long)]
    platform: Option<String>,
    /// Log level: trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// Print the view as JSON after every command
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let platform = match CoreConfig::resolve_platform(cli.platform.as_deref()) {
        Ok(platform) => platform,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let config = CoreConfig {
        platform,
        log_level: cli
            .log_level
            .unwrap_or_else(|| default_log_level().to_string()),
        log_dir: cli.log_dir,
    };
    if let Err(err) = init_from_config(&config) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    let mut service = TaskListService::from_config(&config);
    match run(&mut service, io::stdin().lock(), io::stdout().lock(), cli.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    service: &mut TaskListService,
    input: impl BufRead,
    mut out: impl Write,
    json: bool,
) -> io::Result<()> {
    writeln!(out, "platform={} (type `help`)", service.platform())?;
    for line in input.lines() {
        let line = line?;
        let command = match parse_line(&line, service.store()) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "? {message}")?;
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{}", command::HELP)?,
            Command::Show => render(&service.view(), &mut out, json)?,
            Command::Event(event) => {
                let outcome = service.dispatch(event);
                log::debug!("event=cli_command module=cli outcome={:?}", outcome);
                render(&service.view(), &mut out, json)?;
            }
        }
    }
    Ok(())
}

fn render(view: &TaskListView, out: &mut impl Write, json: bool) -> io::Result<()> {
    if json {
        let text = serde_json::to_string(view).map_err(io::Error::other)?;
        return writeln!(out, "{text}");
    }

    for (index, row) in view.rows.iter().enumerate() {
        let mark = if row.task.completed { "x" } else { " " };
        match &row.draft {
            Some(draft) => writeln!(out, "{:>3}. [{mark}] > {draft}_", index + 1)?,
            None => writeln!(out, "{:>3}. [{mark}] {}", index + 1, row.task.text)?,
        }
    }
    writeln!(
        out,
        "     {}/{} done{}",
        view.completed,
        view.total,
        if view.compose.is_empty() {
            String::new()
        } else {
            format!(" | new: {}", view.compose)
        }
    )
}

#[cfg(test)]
mod tests {
    use super::run;
    use tasklist_core::{Platform, TaskListService};

    fn drive(platform: Platform, script: &str) -> (TaskListService, String) {
        let mut service = TaskListService::new(platform);
        let mut out = Vec::new();
        run(&mut service, script.as_bytes(), &mut out, false).unwrap();
        (service, String::from_utf8(out).unwrap())
    }

    #[test]
    fn touch_script_edits_through_blur() {
        let (service, out) = drive(
            Platform::Touch,
            "new milk\nadd\ntap 1\ntype milk and eggs\nblur\n",
        );
        let texts: Vec<_> = service.store().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["milk and eggs"]);
        assert!(out.contains("milk and eggs"));
    }

    #[test]
    fn unknown_row_is_reported_not_fatal() {
        let (service, out) = drive(Platform::Pointer, "toggle 4\nnew a\nenter\nquit\nnew b\n");
        assert!(out.contains("? no task at row 4"));
        assert_eq!(service.store().len(), 1);
        assert_eq!(service.compose_text(), "");
    }
}
