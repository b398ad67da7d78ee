use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Arena index into the store's document list. Assignment order follows
/// the feed, which also fixes the ranking tie-break order.
pub type DocId = u32;

/// Indexed document fields, in their fixed iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Title,
    Excerpt,
    Tags,
    Categories,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Title, Field::Excerpt, Field::Tags, Field::Categories];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Excerpt => "excerpt",
            Field::Tags => "tags",
            Field::Categories => "categories",
        }
    }
}

/// Raw document descriptor as it appears in the store feed.
///
/// Absent or null `excerpt`/`tags`/`categories`/`teaser` are tolerated
/// and normalized to empty on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub teaser: Option<String>,
}

impl RawDocument {
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            excerpt: None,
            categories: None,
            tags: None,
            url: url.into(),
            teaser: None,
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = Some(categories);
        self
    }
}

/// Normalized, immutable record as held by the store. No field is ever
/// null: missing feed values become empty strings or empty lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub url: String,
}

impl Document {
    /// Text for one indexable field; list fields join on whitespace so
    /// the tokenizer sees them as ordinary text.
    pub fn field_text(&self, field: Field) -> String {
        match field {
            Field::Title => self.title.clone(),
            Field::Excerpt => self.excerpt.clone(),
            Field::Tags => self.tags.join(" "),
            Field::Categories => self.categories.join(" "),
        }
    }
}

/// The authoritative, read-only collection of indexable records for one
/// build cycle. Populated once via [`DocumentStore::load`], then only
/// read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentStore {
    documents: Vec<Document>,
    by_id: HashMap<String, DocId>,
}

impl DocumentStore {
    /// Validate and ingest the ordered feed. Rejects blank ids, blank
    /// urls, and duplicate ids, naming the offending record.
    pub fn load(records: Vec<RawDocument>) -> Result<Self> {
        let mut documents = Vec::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());

        for (position, raw) in records.into_iter().enumerate() {
            if raw.id.trim().is_empty() {
                return Err(SearchError::MissingId { position });
            }
            if raw.url.trim().is_empty() {
                return Err(SearchError::MissingUrl { id: raw.id });
            }
            if by_id.insert(raw.id.clone(), documents.len() as DocId).is_some() {
                return Err(SearchError::DuplicateDocument { id: raw.id });
            }
            documents.push(Document {
                id: raw.id,
                title: raw.title,
                excerpt: raw.excerpt.unwrap_or_default(),
                tags: raw.tags.unwrap_or_default(),
                categories: raw.categories.unwrap_or_default(),
                url: raw.url,
            });
        }

        Ok(Self { documents, by_id })
    }

    pub fn get(&self, doc: DocId) -> Option<&Document> {
        self.documents.get(doc as usize)
    }

    /// Look up the arena id for an external document id.
    pub fn find(&self, id: &str) -> Option<DocId> {
        self.by_id.get(id).copied()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
