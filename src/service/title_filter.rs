//! Title matching for junior-doctor-grade posts.

/// Lower-case phrases; a title is allowed when any of them is a substring.
/// Short abbreviations (`sho`, `led`, `lat`, `las`) are intentionally broad.
pub const TITLE_PHRASES: &[&str] = &[
    "junior clinical fellow",
    "jcf",
    "fy2",
    "foundation year 2",
    "ctf",
    "clinical teaching fellow",
    "cdf",
    "clinical development fellow",
    "clinical research fellow",
    "clinical fellow",
    "sho",
    "senior house officer",
    "trust grade doctor",
    "trust doctor",
    "locally employed doctor",
    "led",
    "junior doctor",
    "ct1 equivalent",
    "fy2 equivalent",
    "lat",
    "las",
];

#[derive(Debug, Clone, Copy)]
pub struct TitleFilter {
    phrases: &'static [&'static str],
}

impl TitleFilter {
    pub const fn new(phrases: &'static [&'static str]) -> Self {
        Self { phrases }
    }

    pub fn allowed(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.phrases.iter().any(|phrase| title.contains(phrase))
    }
}

impl Default for TitleFilter {
    fn default() -> Self {
        Self::new(TITLE_PHRASES)
    }
}
