use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::document::DocumentError;
use crate::types::identifiers::SourceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Public,
    Private,
}

/// A citation attached to a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub id: SourceId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub kind: SourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    pub citation_number: u32,
    #[serde(default)]
    pub usage_count: u32,
}

/// A source before insertion; the store assigns id and citation number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSource {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub kind: SourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_count: Option<u32>,
}

impl NewSource {
    pub fn new(title: impl Into<String>, kind: SourceKind) -> Self {
        NewSource {
            title: title.into(),
            url: None,
            kind,
            domain: None,
            usage_count: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_usage_count(mut self, usage_count: u32) -> Self {
        self.usage_count = Some(usage_count);
        self
    }

    pub fn validate(&self) -> Result<(), DocumentError> {
        if self.title.trim().is_empty() {
            return Err(DocumentError::EmptySourceTitle);
        }
        Ok(())
    }

    pub(crate) fn into_source(self, citation_number: u32) -> Source {
        Source {
            id: SourceId::generate(),
            title: self.title,
            url: self.url,
            kind: self.kind,
            domain: self.domain,
            citation_number,
            usage_count: self.usage_count.unwrap_or(0),
        }
    }
}

/// Next citation number: one past the highest in use, starting at 1.
pub fn next_citation_number(sources: &[Source]) -> Result<u32, DocumentError> {
    match sources.iter().map(|s| s.citation_number).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(DocumentError::CitationOverflow),
    }
}

/// Citation numbers must be positive and unique within a document.
pub(crate) fn ensure_valid_citations(sources: &[Source]) -> Result<(), DocumentError> {
    let mut seen = HashSet::with_capacity(sources.len());
    for source in sources {
        if source.citation_number == 0 {
            return Err(DocumentError::InvalidCitation(source.id.clone()));
        }
        if !seen.insert(source.citation_number) {
            return Err(DocumentError::DuplicateCitation(source.citation_number));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(n: u32) -> Source {
        Source {
            id: SourceId::generate(),
            title: format!("s{n}"),
            url: None,
            kind: SourceKind::Private,
            domain: None,
            citation_number: n,
            usage_count: 0,
        }
    }

    #[test]
    fn first_citation_is_one() {
        assert_eq!(next_citation_number(&[]), Ok(1));
    }

    #[test]
    fn gaps_do_not_get_filled() {
        assert_eq!(next_citation_number(&[source(7), source(2)]), Ok(8));
    }

    #[test]
    fn exhausted_citations_are_an_error() {
        assert_eq!(
            next_citation_number(&[source(u32::MAX), source(2)]),
            Err(DocumentError::CitationOverflow)
        );
    }

    #[test]
    fn zero_and_repeated_citations_are_rejected() {
        let zero = source(0);
        assert_eq!(
            ensure_valid_citations(&[source(1), zero.clone()]),
            Err(DocumentError::InvalidCitation(zero.id))
        );
        assert_eq!(
            ensure_valid_citations(&[source(3), source(1), source(3)]),
            Err(DocumentError::DuplicateCitation(3))
        );
        assert_eq!(ensure_valid_citations(&[source(2), source(5)]), Ok(()));
    }
}
