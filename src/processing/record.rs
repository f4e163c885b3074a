//! The structured output of one extraction

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder stored in a field the extractors could not fill.
pub const NOT_FOUND: &str = "Not Found";

/// The seven extracted fields, in record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Cgpa,
    Skills,
    Education,
    Projects,
    Experience,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Cgpa,
        Field::Skills,
        Field::Education,
        Field::Projects,
        Field::Experience,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Cgpa => "cgpa",
            Field::Skills => "skills",
            Field::Education => "education",
            Field::Projects => "projects",
            Field::Experience => "experience",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Always fully populated: every field holds a value or [`NOT_FOUND`], and
/// `text` holds the collapsed normalized input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub cgpa: String,
    pub skills: String,
    pub education: String,
    pub projects: String,
    pub experience: String,
    pub text: String,
}

impl ResumeRecord {
    /// A record with every field set to the sentinel.
    pub fn empty(text: impl Into<String>) -> Self {
        Self {
            name: NOT_FOUND.to_string(),
            email: NOT_FOUND.to_string(),
            cgpa: NOT_FOUND.to_string(),
            skills: NOT_FOUND.to_string(),
            education: NOT_FOUND.to_string(),
            projects: NOT_FOUND.to_string(),
            experience: NOT_FOUND.to_string(),
            text: text.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Cgpa => &self.cgpa,
            Field::Skills => &self.skills,
            Field::Education => &self.education,
            Field::Projects => &self.projects,
            Field::Experience => &self.experience,
        }
    }

    /// Store `value`, or the sentinel when there is none.
    pub fn set(&mut self, field: Field, value: Option<String>) {
        let value = value
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| NOT_FOUND.to_string());
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Cgpa => self.cgpa = value,
            Field::Skills => self.skills = value,
            Field::Education => self.education = value,
            Field::Projects => self.projects = value,
            Field::Experience => self.experience = value,
        }
    }

    pub fn is_found(&self, field: Field) -> bool {
        self.get(field) != NOT_FOUND
    }

    pub fn found_count(&self) -> usize {
        Field::ALL.iter().filter(|f| self.is_found(**f)).count()
    }

    /// All eight `(key, value)` pairs in record order.
    pub fn fields(&self) -> [(&'static str, &str); 8] {
        [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("cgpa", self.cgpa.as_str()),
            ("skills", self.skills.as_str()),
            ("education", self.education.as_str()),
            ("projects", self.projects.as_str()),
            ("experience", self.experience.as_str()),
            ("text", self.text.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_serializes_all_keys() {
        let record = ResumeRecord::empty("");
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 8);
        for (key, _) in record.fields() {
            assert!(object[key].is_string(), "{} is not a string", key);
        }
        assert_eq!(object["cgpa"], NOT_FOUND);
        assert_eq!(object["text"], "");
    }

    #[test]
    fn test_set_blank_value_becomes_sentinel() {
        let mut record = ResumeRecord::empty("x");
        record.set(Field::Email, Some("a@b.io".to_string()));
        record.set(Field::Name, Some("   ".to_string()));

        assert_eq!(record.get(Field::Email), "a@b.io");
        assert_eq!(record.get(Field::Name), NOT_FOUND);
        assert_eq!(record.found_count(), 1);
    }

    #[test]
    fn test_field_keys_match_record_order() {
        let record = ResumeRecord::empty("");
        let keys: Vec<&str> = record.fields().iter().map(|(k, _)| *k).collect();
        let field_keys: Vec<&str> = Field::ALL.iter().map(|f| f.key()).collect();

        assert_eq!(&keys[..7], field_keys.as_slice());
        assert_eq!(keys[7], "text");
    }
}
