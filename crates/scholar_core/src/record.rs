//! Domain records loaded from the site's JSON resources.
//!
//! Records are immutable once decoded. Collections are shared as `Arc<[R]>`
//! so a reload replaces the whole collection and cached views can compare
//! collections by identity.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Field access used by facets, predicates and sorting.
///
/// Dimensions a record type does not have fall back to empty values and are
/// simply never matched by an active filter on that dimension.
pub trait Record {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn year(&self) -> Option<i32>;
    /// Abstract or description text searched by the free-text query.
    fn summary(&self) -> &str;

    fn date(&self) -> Option<NaiveDate> {
        None
    }
    /// Discriminant used by the "type" filter (publication type, news kind,
    /// project status).
    fn kind_key(&self) -> Option<&str> {
        None
    }
    fn venue(&self) -> Option<&str> {
        None
    }
    fn themes(&self) -> &[String] {
        &[]
    }
    fn authors(&self) -> &[String] {
        &[]
    }
    fn keywords(&self) -> &[String] {
        &[]
    }
    fn is_featured(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationType {
    Journal,
    Conference,
    Workshop,
    BookChapter,
    Preprint,
}

impl PublicationType {
    pub const ALL: [PublicationType; 5] = [
        PublicationType::Journal,
        PublicationType::Conference,
        PublicationType::Workshop,
        PublicationType::BookChapter,
        PublicationType::Preprint,
    ];

    /// Wire name as it appears in `publications.json`.
    pub fn as_str(self) -> &'static str {
        match self {
            PublicationType::Journal => "journal",
            PublicationType::Conference => "conference",
            PublicationType::Workshop => "workshop",
            PublicationType::BookChapter => "book_chapter",
            PublicationType::Preprint => "preprint",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PublicationType::Journal => "Journal",
            PublicationType::Conference => "Conference",
            PublicationType::Workshop => "Workshop",
            PublicationType::BookChapter => "Book Chapter",
            PublicationType::Preprint => "Preprint",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub year: i32,
    #[serde(rename = "type")]
    pub kind: PublicationType,
    pub venue: String,
    #[serde(default)]
    pub venue_short: Option<String>,
    #[serde(default)]
    pub doi: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub pdf: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub dataset: String,
    #[serde(default)]
    pub slides: String,
    #[serde(default)]
    pub video: String,
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub citations: u32,
    #[serde(default)]
    pub awards: Vec<String>,
    #[serde(default)]
    pub bibtex: String,
}

/// An artifact link shown next to a publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLink {
    pub label: &'static str,
    pub href: String,
}

impl Publication {
    pub fn doi_url(&self) -> Option<String> {
        if self.doi.is_empty() {
            None
        } else {
            Some(format!("https://doi.org/{}", self.doi))
        }
    }

    /// Short venue when present, otherwise the full venue.
    pub fn display_venue(&self) -> &str {
        match self.venue_short.as_deref() {
            Some(short) if !short.is_empty() => short,
            _ => &self.venue,
        }
    }

    /// Non-empty artifact links in display order.
    pub fn links(&self) -> Vec<ArtifactLink> {
        let mut links = Vec::new();
        if let Some(href) = self.doi_url() {
            links.push(ArtifactLink { label: "DOI", href });
        }
        let artifacts = [
            ("PDF", &self.pdf),
            ("Code", &self.code),
            ("Data", &self.dataset),
            ("Video", &self.video),
            ("Slides", &self.slides),
        ];
        for (label, href) in artifacts {
            if !href.is_empty() {
                links.push(ArtifactLink {
                    label,
                    href: href.clone(),
                });
            }
        }
        links
    }

    pub fn has_bibtex(&self) -> bool {
        !self.bibtex.trim().is_empty()
    }
}

impl Record for Publication {
    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn year(&self) -> Option<i32> {
        Some(self.year)
    }
    fn summary(&self) -> &str {
        &self.abstract_text
    }
    fn kind_key(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }
    fn venue(&self) -> Option<&str> {
        Some(&self.venue)
    }
    fn themes(&self) -> &[String] {
        &self.themes
    }
    fn authors(&self) -> &[String] {
        &self.authors
    }
    fn keywords(&self) -> &[String] {
        &self.keywords
    }
    fn is_featured(&self) -> bool {
        self.featured
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub role: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub timeframe: String,
    #[serde(default)]
    pub collaborators: Vec<String>,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub links: BTreeMap<String, String>,
}

impl Record for Project {
    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    /// First four-digit number in the timeframe, e.g. `2019` in "2019–2023".
    fn year(&self) -> Option<i32> {
        leading_year(&self.timeframe)
    }
    fn summary(&self) -> &str {
        &self.description
    }
    fn kind_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
    fn themes(&self) -> &[String] {
        &self.themes
    }
    fn authors(&self) -> &[String] {
        &self.collaborators
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    pub level: String,
    pub years: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub links: BTreeMap<String, String>,
}

impl Course {
    /// Links with a non-empty target.
    pub fn visible_links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.links
            .iter()
            .filter(|(_, href)| !href.is_empty())
            .map(|(label, href)| (label.as_str(), href.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supervision {
    pub name: String,
    pub level: String,
    pub years: String,
    pub topic: String,
    #[serde(default)]
    pub outcome: String,
    #[serde(default)]
    pub co_supervisors: Vec<String>,
}

/// Category of a news item. Unknown categories are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NewsKind {
    Award,
    Keynote,
    Media,
    Grant,
    Other(String),
}

impl NewsKind {
    pub fn as_str(&self) -> &str {
        match self {
            NewsKind::Award => "award",
            NewsKind::Keynote => "keynote",
            NewsKind::Media => "media",
            NewsKind::Grant => "grant",
            NewsKind::Other(kind) => kind,
        }
    }
}

impl From<String> for NewsKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "award" => NewsKind::Award,
            "keynote" => NewsKind::Keynote,
            "media" => NewsKind::Media,
            "grant" => NewsKind::Grant,
            _ => NewsKind::Other(value),
        }
    }
}

impl From<NewsKind> for String {
    fn from(value: NewsKind) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for NewsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: NewsKind,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
}

impl Record for NewsItem {
    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn year(&self) -> Option<i32> {
        leading_year(&self.date)
    }
    fn summary(&self) -> &str {
        &self.description
    }
    fn date(&self) -> Option<NaiveDate> {
        parse_news_date(&self.date)
    }
    fn kind_key(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }
}

/// Parses `YYYY-MM-DD`, `YYYY-MM` or `YYYY`, the latter two pinned to the
/// first day of the period.
pub fn parse_news_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    let mut parts = raw.splitn(3, '-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = match parts.next() {
        Some(month) => month.parse::<u32>().ok()?,
        None => 1,
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn leading_year(text: &str) -> Option<i32> {
    let bytes = text.as_bytes();
    let mut start = None;
    for (idx, byte) in bytes.iter().enumerate() {
        if byte.is_ascii_digit() {
            let begin = *start.get_or_insert(idx);
            if idx + 1 - begin == 4 {
                return text[begin..=idx].parse().ok();
            }
        } else {
            start = None;
        }
    }
    None
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileLinks {
    #[serde(default)]
    pub scholar: String,
    #[serde(default)]
    pub dblp: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub bluesky: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub orcid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub year: i32,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub titles: Vec<String>,
    pub affiliation: String,
    #[serde(default)]
    pub bio_short: String,
    #[serde(default)]
    pub bio_long: String,
    #[serde(default)]
    pub portrait_image_path: String,
    #[serde(default)]
    pub cv_pdf_path: String,
    #[serde(default)]
    pub research_statement: String,
    #[serde(default)]
    pub links: ProfileLinks,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

impl Profile {
    /// Long biography split into paragraphs on blank lines.
    pub fn bio_paragraphs(&self) -> impl Iterator<Item = &str> {
        self.bio_long
            .split("\n\n")
            .map(str::trim)
            .filter(|para| !para.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEntry {
    pub role: String,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub years: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

impl ServiceEntry {
    /// Organization or venue, whichever is present.
    pub fn host(&self) -> Option<&str> {
        self.organization.as_deref().or(self.venue.as_deref())
    }

    /// Year range text, or the single year.
    pub fn period(&self) -> Option<String> {
        self.years
            .clone()
            .or_else(|| self.year.map(|year| year.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceData {
    #[serde(default)]
    pub leadership: Vec<ServiceEntry>,
    #[serde(default)]
    pub editorial: Vec<ServiceEntry>,
    #[serde(default)]
    pub program_committees: Vec<ServiceEntry>,
    #[serde(default)]
    pub initiatives: Vec<ServiceEntry>,
}

impl ServiceData {
    /// Sections in display order with their headings.
    pub fn sections(&self) -> [(&'static str, &[ServiceEntry]); 4] {
        [
            ("Leadership", self.leadership.as_slice()),
            ("Editorial", self.editorial.as_slice()),
            ("Program Committees", self.program_committees.as_slice()),
            ("Initiatives", self.initiatives.as_slice()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(default)]
    pub line1: String,
    #[serde(default)]
    pub line2: String,
    #[serde(default)]
    pub line3: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactData {
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: PostalAddress,
    #[serde(default)]
    pub office: String,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}
