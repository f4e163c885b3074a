//! Static vocabularies and patterns used by the field extractors
//!
//! Everything the matchers look for lives here so the tables can be extended
//! or tested without touching the matching code.

/// Explicit name labels, tried in order. Compiled multi-line and case-insensitive.
pub const NAME_PATTERNS: &[&str] = &[
    r"\b(?:full name|name)\s*[:=-]\s*(.+)",
    r"^([A-Z][a-z]+ [A-Z][a-z]+)$",
];

pub const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// GPA patterns in priority order. Each captures the value verbatim as group 1.
pub const GPA_PATTERNS: &[(&str, &str)] = &[
    ("labeled_cgpa", r"CGPA\s*[:=\-]?\s*(\d\.\d{1,2})"),
    ("labeled_gpa", r"GPA\s*[:=\-]?\s*(\d\.\d{1,2})"),
    ("suffixed_cgpa", r"(\d\.\d{1,2})\s*\(?CGPA\)?"),
    ("suffixed_gpa", r"(\d\.\d{1,2})\s*\(?GPA\)?"),
    ("cgpa_slash", r"CGPA\s*/\s*(\d\.\d{1,2})"),
    ("cumulative_gpa", r"Cumulative GPA\s*[:=\-]?\s*(\d\.\d{1,2})"),
];

/// Built-in skill vocabulary. Output order follows this list.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python", "java", "c++", "javascript", "html", "css", "react", "angular",
    "node.js", "express", "django", "flask", "spring", "machine learning",
    "data analysis", "sql", "mongodb", "postgresql", "aws", "docker",
    "kubernetes", "git", "rest api", "graphql", "tensorflow", "pytorch",
    "pandas", "numpy", "scikit-learn", "tableau", "power bi", "linux",
    "bash", "php", "ruby", "rails", "swift", "kotlin", "android", "ios",
    "cybersecurity", "networking", "blockchain", "solidity", "rust", "go",
];

/// Degree tokens accepted by the education extractor. Case-insensitive.
pub const DEGREE_PATTERNS: &[&str] = &[
    r"\bB\.?[A-Za-z]\.?\b",
    r"\bM\.?[A-Za-z]\.?\b",
    r"\bPh\.?D\.?\b",
    r"\bBachelor\b",
    r"\bMaster\b",
    r"\bDiploma\b",
    r"\bB\.?Tech\b",
    r"\bB\.?E\.?\b",
    r"\bB\.?Sc\b",
    r"\bM\.?Sc\b",
];

/// Month-year, bare year, or an open-ended marker. Case-sensitive.
pub const DATE_PATTERN: &str = r"\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{4}\b|\b\d{4}\b|\b(?:Present|Current)\b";

pub const EDUCATION_HEADERS: &[&str] = &["education", "academic background", "qualifications"];
pub const PROJECT_HEADERS: &[&str] = &["project", "personal project", "academic project"];
pub const EXPERIENCE_HEADERS: &[&str] = &["experience", "work history", "employment history"];

/// Words that mark a line as belonging to a neighbouring section.
pub const PROJECT_EXCLUDED_WORDS: &[&str] = &["skills", "experience", "education"];

/// Lowercase role cues; matched against the lowercased line.
pub const ROLE_CUES: &[&str] = &[" at ", " intern ", "developer", "engineer", "analyst"];
