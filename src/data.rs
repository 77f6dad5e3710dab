// src/data.rs
//
// Records flowing through a run:
//
// - MovieRecord:    one parsed input row (title + year), immutable.
// - Candidate:      one search-result entry, only alive while resolving a record.
// - EnrichedRecord: a MovieRecord paired with its description, ready for output.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieRecord {
    title: String,
    year: String,
}

impl MovieRecord {
    pub fn new(title: impl Into<String>, year: impl Into<String>) -> Self {
        Self { title: title.into(), year: year.into() }
    }
    pub fn title(&self) -> &str { &self.title }
    pub fn year(&self) -> &str { &self.year }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub title: String,
    pub year: Option<String>,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrichedRecord {
    pub record: MovieRecord,
    pub description: String,
}

impl EnrichedRecord {
    pub fn new(record: MovieRecord, description: impl Into<String>) -> Self {
        Self { record, description: description.into() }
    }
    pub fn title(&self) -> &str { self.record.title() }
    pub fn year(&self) -> &str { self.record.year() }
}
