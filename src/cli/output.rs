//! Output formatting for CLI

use crate::models::Student;

const HEADERS: [&str; 5] = ["ID", "NAME", "STUDENT ID", "EMAIL", "CONTACT"];

/// Format records as an aligned plain-text table
pub fn format_table(students: &[&Student]) -> String {
    if students.is_empty() {
        return "No records found\n".to_string();
    }

    let rows: Vec<[&str; 5]> = students
        .iter()
        .map(|s| {
            [
                s.id.as_str(),
                s.name.as_str(),
                s.student_id.as_str(),
                s.email.as_str(),
                s.contact.as_str(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    push_row(&mut output, &HEADERS, &widths);
    for row in &rows {
        push_row(&mut output, row, &widths);
    }
    output.push_str(&format!("\n{} record(s)\n", rows.len()));
    output
}

fn push_row(output: &mut String, cells: &[&str; 5], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    output.push_str(line.join("  ").trim_end());
    output.push('\n');
}

/// Format a single record as labelled lines
pub fn format_student(student: &Student) -> String {
    format!(
        "ID:         {}\nName:       {}\nStudent ID: {}\nEmail:      {}\nContact:    {}\n",
        student.id, student.name, student.student_id, student.email, student.contact
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        assert_eq!(format_table(&[]), "No records found\n");
    }

    #[test]
    fn test_columns_aligned() {
        let s = Student {
            id: "x1".to_string(),
            name: "Ann Lee".to_string(),
            student_id: "1023".to_string(),
            email: "a@b.com".to_string(),
            contact: "5551234567".to_string(),
        };
        let table = format_table(&[&s]);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].starts_with("ID  NAME     STUDENT ID"));
        assert!(lines[1].starts_with("x1  Ann Lee  1023"));
        assert_eq!(lines.last(), Some(&"1 record(s)"));
    }
}
