#![allow(dead_code)]

use std::sync::{Arc, Once};

use scholar_core::{NewsItem, NewsKind, Project, ProjectStatus, Publication, PublicationType};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scholar_logging::initialize_for_tests);
}

pub fn publication(id: &str, title: &str, year: i32, kind: PublicationType) -> Publication {
    Publication {
        id: id.to_string(),
        title: title.to_string(),
        authors: vec!["A. Researcher".to_string()],
        year,
        kind,
        venue: "Proceedings of Things".to_string(),
        venue_short: None,
        doi: String::new(),
        url: String::new(),
        pdf: String::new(),
        code: String::new(),
        dataset: String::new(),
        slides: String::new(),
        video: String::new(),
        abstract_text: String::new(),
        keywords: Vec::new(),
        themes: Vec::new(),
        featured: false,
        citations: 0,
        awards: Vec::new(),
        bibtex: String::new(),
    }
}

pub fn project(id: &str, status: ProjectStatus, themes: &[&str]) -> Project {
    Project {
        id: id.to_string(),
        title: format!("Project {id}"),
        description: String::new(),
        role: "PI".to_string(),
        status,
        timeframe: "2020–2024".to_string(),
        collaborators: Vec::new(),
        themes: themes.iter().map(|t| t.to_string()).collect(),
        image: String::new(),
        links: Default::default(),
    }
}

pub fn news(id: &str, date: &str, kind: NewsKind) -> NewsItem {
    NewsItem {
        id: id.to_string(),
        date: date.to_string(),
        kind,
        title: format!("News {id}"),
        description: String::new(),
        link: String::new(),
    }
}

/// A small but varied publication corpus.
pub fn corpus() -> Arc<[Publication]> {
    let mut deep = publication("p1", "Deep Learning for Crowds", 2021, PublicationType::Conference);
    deep.themes = vec!["Crowd Computing".into(), "Human-Centered AI".into()];
    deep.authors = vec!["A. Researcher".into(), "B. Colleague".into()];
    deep.keywords = vec!["crowdsourcing".into()];
    deep.bibtex = "@inproceedings{p1}".into();

    let mut journal = publication("p2", "auditing fairness", 2022, PublicationType::Journal);
    journal.themes = vec!["Responsible AI".into()];
    journal.abstract_text = "We study bias in deployed systems.".into();
    journal.featured = true;
    journal.bibtex = "@article{p2}".into();

    let mut preprint = publication("p3", "Active Labeling", 2023, PublicationType::Preprint);
    preprint.themes = vec!["Human-in-the-Loop ML".into(), "Crowd Computing".into()];
    preprint.authors = vec!["C. Student".into(), "A. Researcher".into()];
    preprint.venue = "arXiv".into();

    let mut workshop = publication("p4", "Beyond Accuracy", 2022, PublicationType::Workshop);
    workshop.keywords = vec!["Explainability".into()];
    workshop.featured = true;
    workshop.bibtex = "   ".into();

    Arc::from(vec![deep, journal, preprint, workshop])
}
