//! Dataset loading for evaluation.
//!
//! A dataset is one JSON file of topics. Each topic holds reference (model)
//! summaries and peer summaries, all given as already-extracted BEs:
//!
//! ```json
//! {
//!   "topics": [{
//!     "id": "d30001",
//!     "references": [{ "name": "A", "elements": [["prices", "rose"]] }],
//!     "peers": [{ "name": "sys1", "elements": [
//!       ["paid", { "text": "$2.5 million", "number": true }],
//!       ["closed", { "text": "June 4", "date": { "month": "june", "day": "4", "year": "1998" } }]
//!     ]}]
//!   }]
//! }
//! ```
//!
//! Numeric and date parts are canonicalized while loading.

use anyhow::{bail, Context, Result};
use bescore_core::canonical::{CanonicalAnnotation, DateFields};
use bescore_core::element::{BasicElement, BePart};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// A loaded evaluation dataset ready for scoring.
#[derive(Debug)]
pub struct EvalDataset {
    pub topics: Vec<Topic>,
}

impl EvalDataset {
    /// Number of topics in the dataset
    pub fn num_topics(&self) -> usize {
        self.topics.len()
    }

    /// Total number of peer summaries across topics
    pub fn num_peers(&self) -> usize {
        self.topics.iter().map(|t| t.peers.len()).sum()
    }

    /// Total number of reference summaries across topics
    pub fn num_references(&self) -> usize {
        self.topics.iter().map(|t| t.references.len()).sum()
    }
}

/// One topic: a reference pool plus the peers scored against it.
#[derive(Debug)]
pub struct Topic {
    pub id: String,
    pub references: Vec<Summary>,
    pub peers: Vec<Summary>,
}

/// A named summary and its BEs.
#[derive(Debug)]
pub struct Summary {
    pub name: String,
    pub elements: Vec<BasicElement>,
}

// =============================================================================
// File format
// =============================================================================

#[derive(Debug, Deserialize)]
struct DatasetFile {
    topics: Vec<TopicRecord>,
}

#[derive(Debug, Deserialize)]
struct TopicRecord {
    id: String,
    references: Vec<SummaryRecord>,
    #[serde(default)]
    peers: Vec<SummaryRecord>,
}

#[derive(Debug, Deserialize)]
struct SummaryRecord {
    name: String,
    elements: Vec<Vec<PartRecord>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PartRecord {
    Plain(String),
    Annotated {
        text: String,
        #[serde(default)]
        number: bool,
        #[serde(default)]
        date: Option<DateFields>,
    },
}

impl PartRecord {
    fn into_part(self) -> Result<BePart> {
        match self {
            Self::Plain(text) => Ok(BePart::new(text)),
            Self::Annotated {
                text,
                number: true,
                date: Some(_),
            } => bail!("part {text:?} is marked as both a number and a date"),
            Self::Annotated {
                text, number: true, ..
            } => Ok(BePart::numeric(text)),
            Self::Annotated {
                text,
                date: Some(fields),
                ..
            } => {
                let span = 0..text.len();
                Ok(BePart::new(text).with_annotation(CanonicalAnnotation::date(&fields, span)))
            }
            Self::Annotated { text, .. } => Ok(BePart::new(text)),
        }
    }
}

impl SummaryRecord {
    fn into_summary(self) -> Result<Summary> {
        let name = self.name;
        let elements = self
            .elements
            .into_iter()
            .enumerate()
            .map(|(i, parts)| {
                if parts.is_empty() {
                    bail!("element {i} of summary {name:?} has no parts");
                }
                let parts = parts
                    .into_iter()
                    .map(PartRecord::into_part)
                    .collect::<Result<Vec<_>>>()?;
                Ok(BasicElement::new(parts))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Summary { name, elements })
    }
}

impl TopicRecord {
    fn into_topic(self) -> Result<Topic> {
        let id = self.id;
        if self.references.is_empty() {
            bail!("topic {id:?} has no reference summaries");
        }

        let mut names = HashSet::new();
        for summary in self.references.iter().chain(&self.peers) {
            if !names.insert(summary.name.as_str()) {
                bail!("topic {id:?} has two summaries named {:?}", summary.name);
            }
        }

        let references = self
            .references
            .into_iter()
            .map(SummaryRecord::into_summary)
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("Invalid reference in topic {id:?}"))?;
        let peers = self
            .peers
            .into_iter()
            .map(SummaryRecord::into_summary)
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("Invalid peer in topic {id:?}"))?;

        Ok(Topic {
            id,
            references,
            peers,
        })
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Parses a dataset from JSON text.
pub fn parse_dataset(json: &str) -> Result<EvalDataset> {
    let file: DatasetFile = serde_json::from_str(json).context("Malformed dataset JSON")?;
    let topics = file
        .topics
        .into_iter()
        .map(TopicRecord::into_topic)
        .collect::<Result<Vec<_>>>()?;
    Ok(EvalDataset { topics })
}

/// Reads and parses a dataset file.
pub fn load_dataset(path: &Path) -> Result<EvalDataset> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset {}", path.display()))?;
    parse_dataset(&json).with_context(|| format!("Failed to load dataset {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "topics": [{
            "id": "t1",
            "references": [
                { "name": "A", "elements": [["paid", { "text": "$2.5 million", "number": true }]] },
                { "name": "B", "elements": [["paid", { "text": "$2,500,000", "number": true }], ["Prices", "rose"]] }
            ],
            "peers": [
                { "name": "sys1", "elements": [
                    ["closed", { "text": "June 4", "date": { "month": "june", "day": "4", "year": "1998" } }],
                    ["prices", { "text": "Rose" }]
                ]}
            ]
        }]
    }"#;

    #[test]
    fn test_parse_sample() {
        let dataset = parse_dataset(SAMPLE).unwrap();
        assert_eq!(dataset.num_topics(), 1);
        assert_eq!(dataset.num_references(), 2);
        assert_eq!(dataset.num_peers(), 1);

        let topic = &dataset.topics[0];
        assert_eq!(topic.id, "t1");
        assert_eq!(
            topic.references[0].elements[0].match_key(),
            topic.references[1].elements[0].match_key()
        );
        assert_eq!(topic.references[1].elements[1].match_key(), "prices|rose");

        let peer = &topic.peers[0];
        assert_eq!(peer.name, "sys1");
        assert_eq!(peer.elements[0].match_key(), "closed|june-4-1998");
        assert_eq!(peer.elements[1].match_key(), "prices|rose");
    }

    #[test]
    fn test_peers_are_optional() {
        let json = r#"{"topics": [{"id": "t", "references": [{"name": "A", "elements": []}]}]}"#;
        let dataset = parse_dataset(json).unwrap();
        assert!(dataset.topics[0].peers.is_empty());
    }

    #[test]
    fn test_topic_without_references_is_rejected() {
        let json = r#"{"topics": [{"id": "t", "references": []}]}"#;
        let err = parse_dataset(json).unwrap_err();
        assert!(err.to_string().contains("no reference summaries"));
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let json = r#"{"topics": [{"id": "t",
            "references": [{"name": "A", "elements": []}],
            "peers": [{"name": "A", "elements": []}]}]}"#;
        assert!(parse_dataset(json).is_err());
    }

    #[test]
    fn test_conflicting_annotations_are_rejected() {
        let json = r#"{"topics": [{"id": "t", "references": [{"name": "A", "elements": [[
            {"text": "4", "number": true, "date": {"month": "june", "day": "4", "year": "1998"}}
        ]]}]}]}"#;
        let err = parse_dataset(json).unwrap_err();
        assert!(format!("{err:#}").contains("both a number and a date"));
    }

    #[test]
    fn test_empty_element_is_rejected() {
        let json = r#"{"topics": [{"id": "t", "references": [{"name": "A", "elements": [[]]}]}]}"#;
        assert!(parse_dataset(json).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.num_topics(), 1);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = load_dataset(&path).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
