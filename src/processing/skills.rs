//! Closed-vocabulary skill matching

use crate::error::{Result, ResumeParserError};
use crate::processing::extractor::{join_items, ExtractionContext, FieldExtractor};
use crate::processing::patterns::SKILL_VOCABULARY;
use crate::processing::record::Field;
use log::debug;
use regex::{RegexSet, RegexSetBuilder};

pub struct SkillsExtractor {
    skills: Vec<String>,
    matcher: RegexSet,
}

impl SkillsExtractor {
    /// Built-in vocabulary followed by `extra_skills`, duplicates dropped.
    pub fn new(extra_skills: &[String]) -> Result<Self> {
        let mut skills: Vec<String> = Vec::with_capacity(SKILL_VOCABULARY.len() + extra_skills.len());
        for skill in SKILL_VOCABULARY
            .iter()
            .map(|s| s.to_string())
            .chain(extra_skills.iter().map(|s| s.trim().to_lowercase()))
        {
            if skill.is_empty() {
                return Err(ResumeParserError::Configuration(
                    "skill vocabulary contains a blank term".to_string(),
                ));
            }
            if !skills.contains(&skill) {
                skills.push(skill);
            }
        }

        let matcher = RegexSetBuilder::new(skills.iter().map(|s| term_pattern(s)))
            .case_insensitive(true)
            .build()?;

        debug!("Skill vocabulary has {} terms", skills.len());
        Ok(Self { skills, matcher })
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.skills
    }
}

impl FieldExtractor for SkillsExtractor {
    fn field(&self) -> Field {
        Field::Skills
    }

    fn extract(&self, ctx: &ExtractionContext<'_>) -> Result<Option<String>> {
        let found: Vec<String> = self
            .matcher
            .matches(ctx.text.collapsed())
            .into_iter()
            .map(|idx| title_case(&self.skills[idx]))
            .collect();

        Ok(join_items(found, ", "))
    }
}

/// Literal match, with a word boundary on each side that starts or ends with
/// a word character (`c++` can't carry a trailing `\b`).
fn term_pattern(term: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let leading = if term.chars().next().is_some_and(is_word) { r"\b" } else { "" };
    let trailing = if term.chars().last().is_some_and(is_word) { r"\b" } else { "" };
    format!("{}{}{}", leading, regex::escape(term), trailing)
}

/// Uppercase every letter that follows a non-letter, lowercase the rest.
pub fn title_case(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut prev_is_letter = false;
    for c in term.chars() {
        if prev_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_letter = c.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::language::RuleBasedLanguageService;
    use crate::processing::normalizer::TextNormalizer;

    fn run(extractor: &SkillsExtractor, raw: &str) -> Option<String> {
        let language = RuleBasedLanguageService::load().unwrap();
        let text = TextNormalizer::new().normalize(raw);
        let ctx = ExtractionContext {
            text: &text,
            language: &language,
        };
        extractor.extract(&ctx).unwrap()
    }

    #[test]
    fn test_vocabulary_order_not_document_order() {
        let extractor = SkillsExtractor::new(&[]).unwrap();
        assert_eq!(
            run(&extractor, "Proficient in Docker, React and Python"),
            Some("Python, React, Docker".to_string())
        );
    }

    #[test]
    fn test_case_insensitive_single_entry() {
        let extractor = SkillsExtractor::new(&[]).unwrap();
        assert_eq!(
            run(&extractor, "PYTHON scripts, python services, PyThOn tests"),
            Some("Python".to_string())
        );
    }

    #[test]
    fn test_punctuated_terms() {
        let extractor = SkillsExtractor::new(&[]).unwrap();
        assert_eq!(
            run(&extractor, "C++, Node.js and scikit-learn; some Power BI"),
            Some("C++, Node.Js, Scikit-Learn, Power Bi".to_string())
        );
    }

    #[test]
    fn test_word_boundaries() {
        let extractor = SkillsExtractor::new(&[]).unwrap();
        // "javascript" must not also count as "java", "gopher" is not "go"
        assert_eq!(
            run(&extractor, "javascript developer, gopher mascot"),
            Some("Javascript".to_string())
        );
        assert_eq!(run(&extractor, "nothing relevant"), None);
    }

    #[test]
    fn test_extra_skills_appended() {
        let extra = vec!["Terraform".to_string(), "python".to_string()];
        let extractor = SkillsExtractor::new(&extra).unwrap();

        assert_eq!(extractor.vocabulary().last().map(String::as_str), Some("terraform"));
        assert_eq!(
            run(&extractor, "terraform and python"),
            Some("Python, Terraform".to_string())
        );
    }

    #[test]
    fn test_blank_extra_skill_rejected() {
        assert!(SkillsExtractor::new(&["  ".to_string()]).is_err());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("c++"), "C++");
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("ios"), "Ios");
    }
}
