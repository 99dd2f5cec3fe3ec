mod generated {
    include!(concat!(env!("OUT_DIR"), "/site_config.rs"));
}

pub(crate) use generated::ASSET_PATHS;

/// Outbound destinations configured in `site.json`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExtraLink {
    Youtube,
    Instagram,
    X,
    Behance,
    Cv,
}

impl ExtraLink {
    #[cfg(test)]
    pub const ALL: [ExtraLink; 5] = [
        ExtraLink::Youtube,
        ExtraLink::Instagram,
        ExtraLink::X,
        ExtraLink::Behance,
        ExtraLink::Cv,
    ];

    /// Key of this link in the `links` table of `site.json`.
    pub const fn key(self) -> &'static str {
        match self {
            ExtraLink::Youtube => "Youtube",
            ExtraLink::Instagram => "Instagram",
            ExtraLink::X => "X",
            ExtraLink::Behance => "Behance",
            ExtraLink::Cv => "CV",
        }
    }

    pub const fn url(self) -> &'static str {
        match self {
            ExtraLink::Youtube => generated::YOUTUBE_URL,
            ExtraLink::Instagram => generated::INSTAGRAM_URL,
            ExtraLink::X => generated::X_URL,
            ExtraLink::Behance => generated::BEHANCE_URL,
            ExtraLink::Cv => generated::CV_URL,
        }
    }
}

/// Page sections that can own the navigation highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionName {
    Home,
    About,
    Projects,
}

impl SectionName {
    pub const fn label(self) -> &'static str {
        match self {
            SectionName::Home => "Home",
            SectionName::About => "About",
            SectionName::Projects => "Projects",
        }
    }

    /// Element id of the section, without the leading `#`.
    pub const fn anchor(self) -> &'static str {
        match self {
            SectionName::Home => "home",
            SectionName::About => "about",
            SectionName::Projects => "projects",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub section: SectionName,
    pub hash: &'static str,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { section: SectionName::Home, hash: "#home" },
    NavLink { section: SectionName::About, hash: "#about" },
    NavLink { section: SectionName::Projects, hash: "#projects" },
];

pub const fn has_asset(path: &str) -> bool {
    let mut i = 0;
    while i < ASSET_PATHS.len() {
        if const_str_eq(ASSET_PATHS[i], path) {
            return true;
        }
        i += 1;
    }
    false
}

const fn const_str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Resolves a path under `public/`, refusing to compile when the file is missing.
macro_rules! asset {
    ($path:literal) => {{
        const PATH: &str = $path;
        const _: () = assert!(
            $crate::config::has_asset(PATH),
            concat!("missing static asset: ", $path)
        );
        PATH
    }};
}

pub(crate) use asset;
