//! Static lookup catalog behind the questionnaire.
//!
//! Field keys are lower-case (`engineering`) for subfields and streams, but the
//! exam table is keyed by the title-cased name (`Engineering`). Callers holding
//! a field go through [`Catalog::exams_for_field`]. A direct [`Catalog::exams`]
//! lookup with the lower-case key finds nothing; existing records depend on that
//! behaviour, so it is kept.

use crate::core::error::PathgenError;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Course fields in the order they are offered.
pub const COURSE_FIELDS: [&str; 6] = ["engineering", "medicine", "commerce", "arts", "design", "science"];

const STREAM_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "Science (PCM)",
        "Physics, Chemistry, Mathematics — Ideal for Engineering, Computer Science, and Research.",
    ),
    (
        "Science (PCB)",
        "Physics, Chemistry, Biology — Ideal for Medicine, Biotechnology, and Life Sciences.",
    ),
    (
        "Commerce",
        "Accounts, Business Studies, Economics — Ideal for CA, Business, and Finance.",
    ),
    (
        "Commerce with Maths",
        "Commerce subjects + Maths — Ideal for Finance, Analytics, and Management.",
    ),
    (
        "Arts",
        "History, Political Science, Literature — Ideal for Law, Humanities, and Creative fields.",
    ),
];

const COURSE_SUBFIELDS: &[(&str, &[&str])] = &[
    (
        "engineering",
        &[
            "Computer Engineering",
            "Mechanical Engineering",
            "Civil Engineering",
            "Electrical Engineering",
            "Biomedical Engineering",
            "Aerospace Engineering",
        ],
    ),
    ("medicine", &["MBBS", "Dentistry", "Nursing", "Pharmacy", "Ayurveda", "Homeopathy"]),
    (
        "commerce",
        &[
            "Chartered Accountancy",
            "Company Secretary",
            "Banking",
            "Finance",
            "Business Administration",
        ],
    ),
    (
        "arts",
        &["Law", "Psychology", "Journalism", "Sociology", "Fine Arts", "Political Science"],
    ),
    (
        "design",
        &[
            "Fashion Design",
            "Interior Design",
            "Graphic Design",
            "Product Design",
            "UI/UX Design",
            "Animation Design",
        ],
    ),
    (
        "science",
        &[
            "Biotechnology",
            "Microbiology",
            "Environmental Science",
            "Zoology",
            "Botany",
            "Physics",
            "Chemistry",
            "Mathematics",
        ],
    ),
];

const COURSE_STREAMS: &[(&str, &[&str])] = &[
    ("engineering", &["Science (PCM)", "Commerce with Maths"]),
    ("medicine", &["Science (PCB)"]),
    ("commerce", &["Commerce", "Commerce with Maths"]),
    ("arts", &["Arts", "Commerce"]),
    ("design", &["Arts", "Science (PCM)"]),
    ("science", &["Science (PCM)", "Science (PCB)"]),
];

// Design subfields have no career entries.
const CAREER_OPTIONS: &[(&str, &[&str])] = &[
    ("Computer Engineering", &["Software Developer", "AI Engineer", "System Analyst"]),
    ("Mechanical Engineering", &["Automobile Engineer", "Robotics Engineer", "Production Engineer"]),
    ("Civil Engineering", &["Structural Engineer", "Construction Manager", "Urban Planner"]),
    ("Electrical Engineering", &["Power Engineer", "Control Systems Engineer", "Electronics Engineer"]),
    ("Biomedical Engineering", &["Clinical Engineer", "Rehabilitation Engineer", "Medical Device Designer"]),
    ("Aerospace Engineering", &["Aircraft Designer", "Aviation Engineer", "Space Research Scientist"]),
    ("MBBS", &["Doctor", "Surgeon", "Medical Researcher"]),
    ("Dentistry", &["Dentist", "Orthodontist", "Dental Surgeon"]),
    ("Ayurveda", &["Ayurvedic Doctor", "Therapist", "Pharma Researcher"]),
    ("Homeopathy", &["Homeopathic Doctor", "Alternative Medicine Specialist"]),
    ("Nursing", &["Nurse", "Healthcare Administrator", "Clinical Nurse Specialist"]),
    ("Pharmacy", &["Pharmacist", "Drug Inspector", "Pharma Research Scientist"]),
    ("Chartered Accountancy", &["Auditor", "Tax Consultant", "Finance Manager"]),
    ("Company Secretary", &["Corporate Advisor", "Legal Consultant", "Business Strategist"]),
    ("Banking", &["Bank PO", "Investment Banker", "Credit Analyst"]),
    ("Finance", &["Financial Analyst", "Wealth Manager", "Stock Broker"]),
    ("Business Administration", &["HR Manager", "Operations Manager", "Marketing Specialist"]),
    ("Law", &["Advocate", "Judge", "Legal Advisor"]),
    ("Psychology", &["Counselor", "Clinical Psychologist", "HR Specialist"]),
    ("Journalism", &["Reporter", "Editor", "Media Analyst"]),
    ("Sociology", &["Social Worker", "Policy Analyst", "Researcher"]),
    ("Fine Arts", &["Artist", "Graphic Designer", "Animator"]),
    ("Political Science", &["Civil Services", "Political Analyst", "Diplomat"]),
    ("Biotechnology", &["Biotech Researcher", "Lab Scientist", "Genetic Engineer"]),
    ("Microbiology", &["Microbiologist", "Lab Technician", "Food Safety Officer"]),
    ("Environmental Science", &["Environmental Consultant", "Ecologist", "Sustainability Specialist"]),
    ("Zoology", &["Wildlife Biologist", "Zookeeper", "Research Scientist"]),
    ("Botany", &["Plant Scientist", "Agricultural Researcher", "Forestry Officer"]),
    ("Physics", &["Physicist", "Research Scientist", "Astrophysicist"]),
    ("Chemistry", &["Chemist", "Pharmaceutical Scientist", "Forensic Analyst"]),
    ("Mathematics", &["Data Scientist", "Statistician", "Actuary"]),
];

// Keyed by title-cased field. There is no "Design" entry.
const ENTRANCE_EXAMS: &[(&str, &[&str])] = &[
    ("Engineering", &["JEE Main", "JEE Advanced", "BITSAT", "VITEEE"]),
    ("Medicine", &["NEET-UG", "AIIMS", "JIPMER"]),
    ("Commerce", &["CA Foundation", "CPT", "CS Foundation", "ICWA Foundation"]),
    ("Arts", &["CUET", "TISSNET", "NIFT", "NID"]),
    ("Science", &["CUET", "IISER Aptitude Test", "ICAR AIEEA"]),
];

type Table = FxHashMap<&'static str, &'static [&'static str]>;

/// Immutable lookup tables. Build once with [`Catalog::builtin`] and pass by reference.
#[derive(Debug, Clone)]
pub struct Catalog {
    stream_descriptions: FxHashMap<&'static str, &'static str>,
    subfields: Table,
    streams: Table,
    careers: Table,
    exams: Table,
}

/// Everything the questionnaire shows for one field, for `catalog show`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub field: String,
    pub subfields: Vec<String>,
    pub streams: Vec<String>,
    pub exams: Vec<String>,
}

fn table(rows: &'static [(&'static str, &'static [&'static str])]) -> Table {
    rows.iter().copied().collect()
}

fn unknown(kind: &'static str, key: &str) -> PathgenError {
    PathgenError::UnknownKey {
        kind,
        key: key.to_string(),
    }
}

/// Capitalize the first letter of every word and lower-case the rest
/// (`"engineering"` -> `"Engineering"`, `"fine arts"` -> `"Fine Arts"`).
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            stream_descriptions: STREAM_DESCRIPTIONS.iter().copied().collect(),
            subfields: table(COURSE_SUBFIELDS),
            streams: table(COURSE_STREAMS),
            careers: table(CAREER_OPTIONS),
            exams: table(ENTRANCE_EXAMS),
        }
    }

    pub fn fields(&self) -> &'static [&'static str] {
        &COURSE_FIELDS
    }

    pub fn subfields(&self, field: &str) -> Result<&'static [&'static str], PathgenError> {
        self.subfields.get(field).copied().ok_or_else(|| unknown("course field", field))
    }

    pub fn streams(&self, field: &str) -> Result<&'static [&'static str], PathgenError> {
        self.streams.get(field).copied().ok_or_else(|| unknown("course field", field))
    }

    pub fn careers(&self, subfield: &str) -> Result<&'static [&'static str], PathgenError> {
        self.careers.get(subfield).copied().ok_or_else(|| unknown("subfield", subfield))
    }

    pub fn stream_description(&self, stream: &str) -> Result<&'static str, PathgenError> {
        self.stream_descriptions
            .get(stream)
            .copied()
            .ok_or_else(|| unknown("stream", stream))
    }

    /// Exams by exact (title-cased) key. A miss is an empty list, never an error.
    pub fn exams(&self, key: &str) -> &'static [&'static str] {
        self.exams.get(key).copied().unwrap_or(&[])
    }

    pub fn exams_for_field(&self, field: &str) -> &'static [&'static str] {
        self.exams(&title_case(field))
    }

    pub fn field_view(&self, field: &str) -> Result<FieldView, PathgenError> {
        let owned = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Ok(FieldView {
            field: field.to_string(),
            subfields: owned(self.subfields(field)?),
            streams: owned(self.streams(field)?),
            exams: owned(self.exams_for_field(field)),
        })
    }
}
