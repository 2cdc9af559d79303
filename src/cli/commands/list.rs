//! Read-only commands: list, show

use super::CliSession;
use crate::cli::error::CliError;
use crate::cli::output::{format_student, format_table};
use crate::export::{HtmlTableExporter, export_json};
use std::str::FromStr;

/// Output format for `list`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListFormat {
    #[default]
    Table,
    Json,
    Html,
}

impl FromStr for ListFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(ListFormat::Table),
            "json" => Ok(ListFormat::Json),
            "html" => Ok(ListFormat::Html),
            other => Err(format!(
                "Unknown format: {} (expected table, json or html)",
                other
            )),
        }
    }
}

/// Handle the `list` command
pub fn handle_list(
    session: &mut CliSession,
    query: Option<&str>,
    format: ListFormat,
) -> Result<String, CliError> {
    session.set_query(query.unwrap_or_default());
    let students = session.view();

    let output = match format {
        ListFormat::Table => format_table(&students),
        ListFormat::Json => {
            let mut json = export_json(students.iter().copied())?;
            json.push('\n');
            json
        }
        ListFormat::Html => HtmlTableExporter::new().export(students.iter().copied()),
    };
    Ok(output)
}

/// Handle the `show` command
pub fn handle_show(session: &CliSession, id: &str) -> Result<String, CliError> {
    session
        .store()
        .get(id)
        .map(format_student)
        .ok_or_else(|| CliError::NotFound(id.to_string()))
}
