//! Scholar core: records, the filter/facet/sort pipeline and the pure state
//! machine behind the site's listing pages.
mod bibtex;
mod effect;
mod facet;
mod filter;
mod icon;
mod materialize;
mod msg;
mod record;
mod resource;
mod route;
mod sort;
mod state;
mod update;
mod view_model;

pub use bibtex::{bibtex_count, collect_bibtex, BIBTEX_FILENAME};
pub use effect::Effect;
pub use facet::{distinct_sorted, distinct_years_desc, Facets};
pub use filter::{FilterChange, FilterState, Predicate, Selection};
pub use icon::Icon;
pub use materialize::{ListingView, Materializer, MaterializerStats};
pub use msg::{Listing, Msg};
pub use record::{
    parse_news_date, ArtifactLink, ContactData, Course, Highlight, NewsItem, NewsKind,
    PostalAddress, Profile, ProfileLinks, Project, ProjectStatus, Publication, PublicationType,
    Record, ServiceData, ServiceEntry, SocialLink, Supervision,
};
pub use resource::{LoadStatus, RequestId, ResourceName, ResourcePayload, ResourceSlot};
pub use route::{theme_from_query, theme_link, Route};
pub use sort::{sort_indices, sorted, SortKey};
pub use state::AppState;
pub use update::update;
pub use view_model::{recent_news, AppViewModel, ResourceStatusView, RECENT_NEWS_LIMIT};
