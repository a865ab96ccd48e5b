use crate::record::NewsKind;

/// Icons the pages can draw. Renderers map these to artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Award,
    Building,
    Brain,
    Library,
    Trophy,
    Globe,
    Sparkles,
    Mic,
    Newspaper,
    Gift,
    Calendar,
}

impl Icon {
    /// Icon for a profile highlight key; unknown keys get `Sparkles`.
    pub fn for_highlight(key: &str) -> Self {
        match key {
            "award" => Icon::Award,
            "building" => Icon::Building,
            "brain" => Icon::Brain,
            "library" => Icon::Library,
            "trophy" => Icon::Trophy,
            "globe" => Icon::Globe,
            _ => Icon::Sparkles,
        }
    }

    pub fn for_news(kind: &NewsKind) -> Self {
        match kind {
            NewsKind::Award => Icon::Award,
            NewsKind::Keynote => Icon::Mic,
            NewsKind::Media => Icon::Newspaper,
            NewsKind::Grant => Icon::Gift,
            NewsKind::Other(_) => Icon::Calendar,
        }
    }

    /// Stable kebab-case name, usable as a CSS class suffix.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Award => "award",
            Icon::Building => "building",
            Icon::Brain => "brain",
            Icon::Library => "library",
            Icon::Trophy => "trophy",
            Icon::Globe => "globe",
            Icon::Sparkles => "sparkles",
            Icon::Mic => "mic",
            Icon::Newspaper => "newspaper",
            Icon::Gift => "gift",
            Icon::Calendar => "calendar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_fall_back() {
        assert_eq!(Icon::for_highlight("trophy"), Icon::Trophy);
        assert_eq!(Icon::for_highlight("rocket"), Icon::Sparkles);
        assert_eq!(Icon::for_news(&NewsKind::Other("talk".into())), Icon::Calendar);
    }
}
