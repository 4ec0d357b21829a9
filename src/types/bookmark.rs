use serde::{Deserialize, Serialize};

/// A saved reference to one code example on a cheat sheet.
///
/// The triple `(cheat_sheet_id, section_id, example_title)` is the logical key.
/// Field names are stored in camelCase to keep the persisted JSON format stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkedExample {
    pub cheat_sheet_id: String,
    pub section_id: String,
    pub example_title: String,
    /// Milliseconds since the UNIX epoch, stamped by the store on insertion.
    pub timestamp: i64,
}

impl BookmarkedExample {
    /// Returns true if this record matches the given triple exactly (case-sensitive).
    pub fn matches(&self, cheat_sheet_id: &str, section_id: &str, example_title: &str) -> bool {
        self.cheat_sheet_id == cheat_sheet_id
            && self.section_id == section_id
            && self.example_title == example_title
    }
}

/// A bookmark as supplied by the caller, before the store stamps a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBookmark {
    pub cheat_sheet_id: String,
    pub section_id: String,
    pub example_title: String,
}

impl NewBookmark {
    pub fn new(
        cheat_sheet_id: impl Into<String>,
        section_id: impl Into<String>,
        example_title: impl Into<String>,
    ) -> Self {
        Self {
            cheat_sheet_id: cheat_sheet_id.into(),
            section_id: section_id.into(),
            example_title: example_title.into(),
        }
    }

    /// Stamps the record with the given timestamp.
    pub fn into_record(self, timestamp: i64) -> BookmarkedExample {
        BookmarkedExample {
            cheat_sheet_id: self.cheat_sheet_id,
            section_id: self.section_id,
            example_title: self.example_title,
            timestamp,
        }
    }
}
