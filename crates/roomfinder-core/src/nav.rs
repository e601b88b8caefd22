// crates/roomfinder-core/src/nav.rs

/// Top-level pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    /// Landing page.
    Home,
    /// The map with the room search.
    Map,
}

impl AppRoute {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Map => "/mapa",
        }
    }

    /// Resolve a location path. Query string and fragment are ignored, as
    /// is a trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or("");
        match path.trim_end_matches('/') {
            "" => Some(Self::Home),
            "/mapa" => Some(Self::Map),
            _ => None,
        }
    }
}

/// Anchors on the landing page, linked from the map's side menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeSection {
    Begin,
    About,
    Devs,
}

impl HomeSection {
    pub const ALL: [HomeSection; 3] = [Self::Begin, Self::About, Self::Devs];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Begin => "Início",
            Self::About => "Sobre",
            Self::Devs => "Desenvolvedores",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Self::Begin => "/#begin",
            Self::About => "/#about",
            Self::Devs => "/#devs",
        }
    }
}
