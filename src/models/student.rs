//! Student record model

use serde::{Deserialize, Serialize};

/// One student entry in the roster.
///
/// `id` is assigned by the store on creation and never changes; the remaining
/// fields are replaced wholesale by an update. Serialized field names follow the
/// persisted document shape (`studentId` rather than `student_id`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub student_id: String,
    pub email: String,
    pub contact: String,
}

impl Student {
    /// Build a record from an id and an already validated field set
    pub fn new(id: impl Into<String>, fields: StudentFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            student_id: fields.student_id,
            email: fields.email,
            contact: fields.contact,
        }
    }

    /// Replace every field except `id`
    pub fn apply(&mut self, fields: StudentFields) {
        self.name = fields.name;
        self.student_id = fields.student_id;
        self.email = fields.email;
        self.contact = fields.contact;
    }

    /// The editable fields of this record
    pub fn fields(&self) -> StudentFields {
        StudentFields {
            name: self.name.clone(),
            student_id: self.student_id.clone(),
            email: self.email.clone(),
            contact: self.contact.clone(),
        }
    }

    /// Case-insensitive match on name, case-sensitive match on student id.
    ///
    /// An empty query matches every record.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query.to_lowercase()) || self.student_id.contains(query)
    }
}

/// Trimmed field values that passed validation.
///
/// Only [`crate::validation::validate_student`] produces these outside of tests,
/// so holding one is proof the values satisfy every field rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentFields {
    pub name: String,
    pub student_id: String,
    pub email: String,
    pub contact: String,
}

/// Raw, untrimmed strings as captured from a form or the command line
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentForm {
    pub name: String,
    pub student_id: String,
    pub email: String,
    pub contact: String,
}

impl StudentForm {
    pub fn new(
        name: impl Into<String>,
        student_id: impl Into<String>,
        email: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            student_id: student_id.into(),
            email: email.into(),
            contact: contact.into(),
        }
    }
}

impl From<StudentFields> for StudentForm {
    fn from(fields: StudentFields) -> Self {
        Self {
            name: fields.name,
            student_id: fields.student_id,
            email: fields.email,
            contact: fields.contact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> Student {
        Student {
            id: "abc".to_string(),
            name: "Ann Lee".to_string(),
            student_id: "1023".to_string(),
            email: "a@b.com".to_string(),
            contact: "5551234567".to_string(),
        }
    }

    #[test]
    fn test_serializes_camel_case_field_names() {
        let json = serde_json::to_value(ann()).unwrap();
        assert_eq!(json["studentId"], "1023");
        assert!(json.get("student_id").is_none());
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 5);
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let s = ann();
        assert!(s.matches("ann"));
        assert!(s.matches("LEE"));
        assert!(s.matches(""));
        assert!(!s.matches("bob"));
    }

    #[test]
    fn test_matches_student_id_substring() {
        let s = ann();
        assert!(s.matches("02"));
        assert!(!s.matches("999"));
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut s = ann();
        s.apply(StudentFields {
            name: "New Name".to_string(),
            student_id: "1".to_string(),
            email: "n@n.org".to_string(),
            contact: "0000000000".to_string(),
        });
        assert_eq!(s.id, "abc");
        assert_eq!(s.name, "New Name");
    }
}
