//! CV records and the result of one extraction run

use serde_json::{Map, Value};

/// Keys the model is asked to fill, in output order.
pub const FIELD_KEYS: [&str; 12] = [
    "name",
    "email",
    "phone",
    "location",
    "linkedin",
    "github",
    "professional_summary",
    "current_job_title",
    "current_company",
    "years_experience",
    "education",
    "institution",
];

/// Column order of the exported table.
pub const CSV_COLUMNS: [&str; 13] = [
    "filename",
    "name",
    "email",
    "phone",
    "location",
    "linkedin",
    "github",
    "professional_summary",
    "current_job_title",
    "current_company",
    "years_experience",
    "education",
    "institution",
];

/// Fields extracted from one CV. Values are kept as returned by the model.
#[derive(Debug, Clone, PartialEq)]
pub struct CvRecord {
    filename: String,
    fields: Map<String, Value>,
}

impl CvRecord {
    /// The source filename always wins over a `filename` key returned by the model.
    pub fn new(filename: impl Into<String>, mut fields: Map<String, Value>) -> Self {
        fields.remove("filename");
        Self {
            filename: filename.into(),
            fields,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Render one column as table text. Missing and null render empty.
    pub fn column_text(&self, column: &str) -> String {
        if column == "filename" {
            return self.filename.clone();
        }
        match self.fields.get(column) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// The parsed object with the filename attached.
    pub fn to_json(&self) -> Value {
        let mut object = self.fields.clone();
        object.insert("filename".to_string(), Value::String(self.filename.clone()));
        Value::Object(object)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFile {
    pub filename: String,
    pub reason: String,
}

/// Records in processing order, plus what was skipped along the way.
#[derive(Debug, Clone, Default)]
pub struct RunResult {
    records: Vec<CvRecord>,
    skipped: Vec<SkippedFile>,
    files_found: usize,
}

impl RunResult {
    pub fn new(files_found: usize) -> Self {
        Self {
            files_found,
            ..Self::default()
        }
    }

    pub fn push(&mut self, record: CvRecord) {
        self.records.push(record);
    }

    pub fn skip(&mut self, filename: impl Into<String>, reason: impl ToString) {
        self.skipped.push(SkippedFile {
            filename: filename.into(),
            reason: reason.to_string(),
        });
    }

    pub fn records(&self) -> &[CvRecord] {
        &self.records
    }

    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    pub fn files_found(&self) -> usize {
        self.files_found
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<CvRecord> for RunResult {
    fn from_iter<I: IntoIterator<Item = CvRecord>>(iter: I) -> Self {
        let records: Vec<CvRecord> = iter.into_iter().collect();
        Self {
            files_found: records.len(),
            records,
            skipped: Vec::new(),
        }
    }
}
