//! Interactive command loop.
//!
//! # Responsibility
//! - Parse one stdin line into a gradebook action.
//! - Drive the service and report failures without ending the session.
//!
//! # Invariants
//! - Service errors are shown to the user and never abort the loop.

use crate::terminal_view::TerminalView;
use gradebook_core::{GradebookService, ServiceError, SubjectRepository};
use std::io::{BufRead, Write};

pub const HELP_TEXT: &str = "commands:
  add <subject name> <marks>   record a subject
  calc                         show total marks and percentage
  list                         reload and show your subjects
  help                         show this text
  quit                         leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Raw form fields, validated by the service.
    Add {
        subject_name: String,
        marks: String,
    },
    Calculate,
    List,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// Parses one input line; blank lines yield `None`.
    ///
    /// For `add`, the last token is the marks and everything between is the
    /// subject name, so names may contain spaces.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (trimmed, ""),
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "" => return None,
            "add" => {
                let (subject_name, marks) = match rest.rsplit_once(char::is_whitespace) {
                    Some((name, marks)) => (name.trim_end(), marks),
                    None => (rest, ""),
                };
                Self::Add {
                    subject_name: subject_name.to_string(),
                    marks: marks.to_string(),
                }
            }
            "calc" | "calculate" => Self::Calculate,
            "list" => Self::List,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        };
        Some(command)
    }
}

/// Reads commands until `quit` or end of input.
pub fn run<R, W, I>(
    service: &mut GradebookService<R, TerminalView<W>>,
    input: I,
) -> std::io::Result<()>
where
    R: SubjectRepository,
    W: Write,
    I: BufRead,
{
    for line in input.lines() {
        let Some(command) = Command::parse(&line?) else {
            continue;
        };
        if !execute(service, command) {
            break;
        }
    }
    Ok(())
}

/// Runs one command; returns `false` when the loop should stop.
pub fn execute<R, W>(service: &mut GradebookService<R, TerminalView<W>>, command: Command) -> bool
where
    R: SubjectRepository,
    W: Write,
{
    match command {
        Command::Add {
            subject_name,
            marks,
        } => match service.add_record(&subject_name, &marks) {
            Ok(outcome) if !outcome.persisted => service
                .view_mut()
                .message("warning: subject shown but not saved to the database"),
            Ok(_) => {}
            Err(err) => {
                let text = describe_error(&err);
                service.view_mut().message(&text);
            }
        },
        Command::Calculate => {
            service.calculate_results();
        }
        Command::List => {
            let owner = service
                .session()
                .map(|session| session.owner().to_string());
            if let Some(owner) = owner {
                service.start_session(owner);
            }
        }
        Command::Help => service.view_mut().message(HELP_TEXT),
        Command::Quit => return false,
        Command::Unknown(keyword) => service
            .view_mut()
            .message(&format!("unknown command `{keyword}`; type `help`")),
    }
    true
}

fn describe_error(err: &ServiceError) -> String {
    match err {
        ServiceError::Validation(_) => {
            format!("error: {err}; both subject name and a whole-number mark are required")
        }
        ServiceError::Store(_) | ServiceError::NoActiveSession => format!("error: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{run, Command};
    use crate::terminal_view::TerminalView;
    use gradebook_core::{FileConnectionProvider, GradebookService, SqliteSubjectRepository};

    #[test]
    fn parse_add_splits_name_and_marks() {
        assert_eq!(
            Command::parse("add Computer Science 91"),
            Some(Command::Add {
                subject_name: "Computer Science".to_string(),
                marks: "91".to_string(),
            })
        );
        assert_eq!(
            Command::parse("ADD Math"),
            Some(Command::Add {
                subject_name: "Math".to_string(),
                marks: String::new(),
            })
        );
        assert_eq!(
            Command::parse("add"),
            Some(Command::Add {
                subject_name: String::new(),
                marks: String::new(),
            })
        );
    }

    #[test]
    fn parse_other_commands() {
        assert_eq!(Command::parse("   "), None);
        assert_eq!(Command::parse("calc"), Some(Command::Calculate));
        assert_eq!(Command::parse(" list "), Some(Command::List));
        assert_eq!(Command::parse("exit"), Some(Command::Quit));
        assert_eq!(
            Command::parse("delete Math"),
            Some(Command::Unknown("delete".to_string()))
        );
    }

    #[test]
    fn run_adds_subjects_and_prints_totals() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SqliteSubjectRepository::new(FileConnectionProvider::new(
            dir.path().join("gradebook.db"),
        ));
        let mut service = GradebookService::new(repo, TerminalView::new(Vec::new()));
        service.set_logged_in_user("alice");

        let script = "add Math 80\nadd Physics abc\nadd Physics 90\ncalc\nquit\nadd Late 1\n";
        run(&mut service, script.as_bytes()).unwrap();

        let output = String::from_utf8(service.view().writer().clone()).unwrap();
        assert!(output.contains("  Math: 80 marks\n"));
        assert!(output.contains("error: not a number"));
        assert!(output.contains("Total Marks: 170\nTotal Percentage: 85.00%\n"));
        assert!(!output.contains("Late"));
        assert_eq!(service.session().unwrap().len(), 2);
    }
}
