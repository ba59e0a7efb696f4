//! `studydash` terminal front end.
//!
//! # Responsibility
//! - Map subcommands to dashboard views and user actions.
//! - Resolve configuration, start logging, open the slot database.
//! - Ask for confirmation before wiping stored data.

mod render;

use clap::{Parser, Subcommand};
use log::info;
use std::error::Error;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use studydash_core::config::absolutize;
use studydash_core::db::open_db;
use studydash_core::{
    init_logging, AssignmentDraft, AssignmentService, AssignmentStatus, CollectionStore,
    DashConfig, DashboardService, Navigator, SlotBackend, SqliteSlotBackend, SyllabusService,
    TaskService, ThemePreference, View,
};

#[derive(Debug, Parser)]
#[command(name = "studydash", version, about = "Student dashboard kept in local storage")]
struct Cli {
    /// Slot database file (overrides STUDYDASH_DB_PATH).
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,

    /// trace|debug|info|warn|error (overrides STUDYDASH_LOG_LEVEL).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Summary tiles and course progress.
    Dashboard,
    /// Per-subject completion.
    Progress,
    /// Study distribution and assignment breakdown.
    Analytics,
    /// List and manage assignments.
    Assignments {
        #[command(subcommand)]
        action: Option<AssignmentAction>,
    },
    /// List and manage daily tasks.
    Tasks {
        #[command(subcommand)]
        action: Option<TaskAction>,
    },
    /// Syllabus tracker.
    Syllabus {
        #[command(subcommand)]
        action: Option<SyllabusAction>,
    },
    /// Profile, theme and storage details.
    Settings,
    /// Open a view by its menu name, e.g. `open "my progress"`.
    Open { view: View },
    /// Show or toggle the dark/light theme.
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Erase every stored collection and start over from defaults.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
enum AssignmentAction {
    List,
    /// Add a pending assignment; all three fields are required.
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        subject: String,
        /// Due date as YYYY-MM-DD.
        #[arg(long, default_value = "")]
        due: String,
    },
    /// Set status to pending, submitted or overdue.
    Status { id: String, status: AssignmentStatus },
    /// Mark as submitted.
    Submit { id: String },
    Delete { id: String },
}

#[derive(Debug, Subcommand)]
enum TaskAction {
    List,
    Add {
        #[arg(num_args = 0.., trailing_var_arg = true)]
        text: Vec<String>,
    },
    Toggle { id: String },
    Delete { id: String },
}

#[derive(Debug, Subcommand)]
enum SyllabusAction {
    List,
    Toggle { subject_id: String, topic_id: String },
}

#[derive(Debug, Subcommand)]
enum ThemeAction {
    Show,
    Toggle,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("studydash: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = DashConfig::from_env()?;
    if let Some(path) = cli.db_path {
        config.db_path = absolutize(&path)?;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("studydash: file logging disabled: {err}");
    }

    let conn = open_db(&config.db_path)?;
    let mut store = CollectionStore::new(SqliteSlotBackend::new(&conn));
    let command = cli.command.unwrap_or(Command::Dashboard);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let output = execute(command, &config, &mut store, &mut stdin.lock(), &mut stdout)?;
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Runs one command and returns the rendered view.
///
/// `input`/`prompt` carry the reset confirmation dialogue.
fn execute<B: SlotBackend>(
    command: Command,
    config: &DashConfig,
    store: &mut CollectionStore<B>,
    input: &mut impl BufRead,
    prompt: &mut impl Write,
) -> Result<String, Box<dyn Error>> {
    let mut nav = Navigator::new();
    let mut notes = Vec::new();

    match command {
        Command::Dashboard => nav.select(View::Dashboard),
        Command::Progress => nav.select(View::Progress),
        Command::Analytics => nav.select(View::Analytics),
        Command::Settings => nav.select(View::Settings),
        Command::Open { view } => nav.select(view),
        Command::Assignments { action } => {
            nav.select(View::Assignments);
            let mut service = AssignmentService::new(store);
            match action.unwrap_or(AssignmentAction::List) {
                AssignmentAction::List => {}
                AssignmentAction::Add {
                    title,
                    subject,
                    due,
                } => {
                    let draft = AssignmentDraft {
                        title,
                        subject,
                        due_date: due,
                    };
                    if let Some(added) = service.add(draft) {
                        notes.push(format!("Added assignment {}.", added.id));
                    }
                }
                AssignmentAction::Status { id, status } => {
                    if service.set_status(&id, status) {
                        notes.push(format!("Assignment {id} is now {status}."));
                    }
                }
                AssignmentAction::Submit { id } => {
                    if service.mark_submitted(&id) {
                        notes.push(format!("Assignment {id} marked as submitted."));
                    }
                }
                AssignmentAction::Delete { id } => {
                    if service.delete(&id) {
                        notes.push(format!("Deleted assignment {id}."));
                    }
                }
            }
        }
        Command::Tasks { action } => {
            nav.select(View::Tasks);
            let mut service = TaskService::new(store);
            match action.unwrap_or(TaskAction::List) {
                TaskAction::List => {}
                TaskAction::Add { text } => {
                    if let Some(added) = service.add(&text.join(" ")) {
                        notes.push(format!("Added task {}.", added.id));
                    }
                }
                TaskAction::Toggle { id } => {
                    if let Some(completed) = service.toggle(&id) {
                        let state = if completed { "done" } else { "open" };
                        notes.push(format!("Task {id} is now {state}."));
                    }
                }
                TaskAction::Delete { id } => {
                    if service.delete(&id) {
                        notes.push(format!("Deleted task {id}."));
                    }
                }
            }
        }
        Command::Syllabus { action } => {
            nav.select(View::Syllabus);
            if let Some(SyllabusAction::Toggle {
                subject_id,
                topic_id,
            }) = action
            {
                if let Some(completed) =
                    SyllabusService::new(store).toggle_topic(&subject_id, &topic_id)
                {
                    let state = if completed { "completed" } else { "not completed" };
                    notes.push(format!("Topic {topic_id} is now {state}."));
                }
            }
        }
        Command::Theme { action } => {
            nav.select(View::Settings);
            if let Some(ThemeAction::Toggle) = action {
                let (theme, _) = ThemePreference::toggle(store, config.system_prefers_dark);
                notes.push(format!("Switched to {} theme.", theme.as_str()));
            }
        }
        Command::Reset { yes } => {
            nav.select(View::Settings);
            if yes || confirm_reset(input, prompt)? {
                store.reset_all()?;
                info!("event=reset module=cli status=ok");
                notes.push("All data reset to defaults.".to_string());
            } else {
                info!("event=reset module=cli status=cancelled");
                notes.push("Reset cancelled.".to_string());
            }
        }
    }

    let theme = ThemePreference::load(store, config.system_prefers_dark);
    let mut out = render::header(nav.current(), theme);
    for note in &notes {
        out.push_str(note);
        out.push('\n');
    }
    out.push_str(&render_view(nav.current(), config, store)?);
    Ok(out)
}

fn render_view<B: SlotBackend>(
    view: View,
    config: &DashConfig,
    store: &mut CollectionStore<B>,
) -> Result<String, Box<dyn Error>> {
    let rendered = match view {
        View::Dashboard => {
            let summary = DashboardService::new(store).summary();
            let progress = SyllabusService::new(store).progress();
            render::dashboard(&config.profile, &summary, &progress)
        }
        View::Progress => render::progress(&SyllabusService::new(store).progress()),
        View::Analytics => render::analytics(&DashboardService::new(store).analytics()),
        View::Assignments => render::assignments(&AssignmentService::new(store).list()),
        View::Tasks => render::tasks(&TaskService::new(store).list()),
        View::Syllabus => render::syllabus(&SyllabusService::new(store).list()),
        View::Settings => {
            let theme = ThemePreference::load(store, config.system_prefers_dark);
            let keys = store.persisted_keys()?;
            render::settings(&config.profile, theme, &config.db_path, &keys)
        }
    };
    Ok(rendered)
}

fn confirm_reset(input: &mut impl BufRead, prompt: &mut impl Write) -> std::io::Result<bool> {
    write!(
        prompt,
        "Are you sure you want to reset all data? This cannot be undone. [y/N] "
    )?;
    prompt.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
