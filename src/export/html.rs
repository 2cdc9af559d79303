//! HTML table exporter
//!
//! Renders `<tr>` rows for a roster table body. Every field is escaped, and
//! each row carries edit/delete buttons keyed by the record id.

use crate::models::Student;
use crate::validation::escape_html;

/// Text shown in the single placeholder row of an empty table
pub const EMPTY_TABLE_MESSAGE: &str = "No records found";

/// Number of columns in the table (four fields plus actions)
const COLUMN_COUNT: usize = 5;

/// HTML exporter for roster table rows
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlTableExporter;

impl HtmlTableExporter {
    pub fn new() -> Self {
        Self
    }

    /// Render table body rows for `students`
    ///
    /// # Example
    ///
    /// ```rust
    /// use student_roster::export::HtmlTableExporter;
    /// use student_roster::models::Student;
    ///
    /// let html = HtmlTableExporter::new().export(std::iter::empty::<&Student>());
    /// assert!(html.contains("No records found"));
    /// ```
    pub fn export<'a>(&self, students: impl IntoIterator<Item = &'a Student>) -> String {
        let mut output = String::new();

        for student in students {
            output.push_str(&self.render_row(student));
        }

        if output.is_empty() {
            output.push_str(&format!(
                "<tr><td class=\"empty\" colspan=\"{}\">{}</td></tr>\n",
                COLUMN_COUNT, EMPTY_TABLE_MESSAGE
            ));
        }

        output
    }

    fn render_row(&self, student: &Student) -> String {
        let id = escape_html(&student.id);
        format!(
            "<tr>\
             <td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td>\
             <button class=\"action-btn edit\" data-id=\"{id}\">Edit</button>\
             <button class=\"action-btn delete\" data-id=\"{id}\">Delete</button>\
             </td>\
             </tr>\n",
            escape_html(&student.name),
            escape_html(&student.student_id),
            escape_html(&student.email),
            escape_html(&student.contact),
            id = id,
        )
    }
}
