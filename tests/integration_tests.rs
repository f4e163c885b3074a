//! Integration tests for the resume parser

use resume_parser::config::{ExtractionConfig, InputConfig};
use resume_parser::input::manager::InputManager;
use resume_parser::processing::{Field, LanguageService, RuleBasedLanguageService};
use resume_parser::{ResumeParser, ResumeParserError, ResumeRecord, NOT_FOUND};
use std::path::Path;
use std::sync::Arc;

fn default_parser() -> ResumeParser {
    ResumeParser::with_defaults().unwrap()
}

fn assert_sample_fields(record: &ResumeRecord) {
    assert_eq!(record.name, "John Doe");
    assert_eq!(record.email, "john.doe@example.com");
    assert_eq!(record.cgpa, "3.85");
    assert_eq!(
        record.skills,
        "Python, React, Node.Js, Django, Postgresql, Aws, Docker"
    );
    assert_eq!(record.education, "B.Tech in Computer Science, Stanford University");
    assert_eq!(
        record.projects,
        "Realtime chat application built with React and Node.js\n\n\
         Inventory tracker with a Django REST backend and PostgreSQL"
    );
    assert_eq!(
        record.experience,
        "Software Engineer at Initech, Jan 2021 - Present\n\n\
         Backend Developer Intern, Globex, 2019 - 2020"
    );
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    // First extraction
    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    // Second extraction should use cache
    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ResumeParserError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_disallowed_format_is_rejected() {
    let config = InputConfig {
        allowed_formats: vec!["pdf".to_string()],
        enable_cache: false,
    };
    let mut manager = InputManager::from_config(&config);

    let result = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await;
    assert!(matches!(result, Err(ResumeParserError::UnsupportedFormat(_))));
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_file_size_limit() {
    let mut manager = InputManager::new().with_max_bytes(10);

    let result = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await;
    assert!(matches!(
        result,
        Err(ResumeParserError::InputTooLarge { limit: 10, .. })
    ));
}

#[tokio::test]
async fn test_pdf_extension_without_pdf_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.pdf");
    std::fs::write(&path, "John Doe\njohn@doe.dev\n").unwrap();

    let mut manager = InputManager::new();
    let result = manager.extract_text(&path).await;
    assert!(matches!(result, Err(ResumeParserError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_parse_txt_fixture() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let record = default_parser().parse(&text).unwrap();
    assert_sample_fields(&record);
    assert!(!record.text.contains('\n'));
}

#[tokio::test]
async fn test_parse_markdown_fixture() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    let record = default_parser().parse(&text).unwrap();
    assert_sample_fields(&record);
}

#[test]
fn test_record_always_has_eight_keys() {
    let parser = default_parser();

    for input in ["", "   \n\t ", "just some words"] {
        let record = parser.parse(input).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();

        assert_eq!(keys.len(), 8);
        for field in Field::ALL {
            assert!(json.get(field.key()).is_some(), "missing {}", field);
        }
    }
}

#[test]
fn test_empty_input_is_all_sentinels() {
    let record = default_parser().parse("").unwrap();

    for field in Field::ALL {
        assert_eq!(record.get(field), NOT_FOUND);
    }
    assert_eq!(record.text, "");
}

#[test]
fn test_explicit_label_beats_other_lines() {
    let record = default_parser().parse("Name: Alice Smith\nBob Jones").unwrap();
    assert_eq!(record.name, "Alice Smith");
}

#[test]
fn test_skills_in_vocabulary_order() {
    let record = default_parser()
        .parse("Proficient in Python, React and Docker")
        .unwrap();
    assert_eq!(record.skills, "Python, React, Docker");
}

#[test]
fn test_sections_cap_at_three_items() {
    let record = default_parser()
        .parse("Education\nPhD Physics\nM.Sc Physics\nB.Sc Physics\nBachelor Physics")
        .unwrap();
    assert_eq!(record.education, "PhD Physics\nM.Sc Physics\nB.Sc Physics");
}

#[test]
fn test_entity_fallback_can_be_disabled() {
    let text = "curriculum vitae of Priya Raman, a backend developer";
    let language: Arc<dyn LanguageService> = Arc::new(RuleBasedLanguageService::load().unwrap());

    let with_ner = ResumeParser::new(&ExtractionConfig::default(), Arc::clone(&language)).unwrap();
    assert_eq!(with_ner.parse(text).unwrap().name, "Priya Raman");

    let config = ExtractionConfig {
        enable_entity_fallback: false,
        ..ExtractionConfig::default()
    };
    let without_ner = ResumeParser::new(&config, language).unwrap();
    assert_eq!(without_ner.parse(text).unwrap().name, NOT_FOUND);
}

#[test]
fn test_entity_name_beside_role_words() {
    let record = default_parser()
        .parse("prepared for recruiters: Priya Raman Software Engineer based in Pune")
        .unwrap();
    assert_eq!(record.name, "Priya Raman");
}

#[test]
fn test_language_service_is_released_with_parser() {
    let language: Arc<dyn LanguageService> = Arc::new(RuleBasedLanguageService::load().unwrap());
    let parser = ResumeParser::new(&ExtractionConfig::default(), Arc::clone(&language)).unwrap();
    assert_eq!(Arc::strong_count(&language), 2);

    drop(parser);
    assert_eq!(Arc::strong_count(&language), 1);
}

#[test]
fn test_concurrent_parsing_shares_one_parser() {
    let text = std::fs::read_to_string("tests/fixtures/sample_resume.txt").unwrap();
    let parser = Arc::new(default_parser());
    let expected = parser.parse(&text).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let parser = Arc::clone(&parser);
            let text = text.clone();
            std::thread::spawn(move || parser.parse(&text).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
