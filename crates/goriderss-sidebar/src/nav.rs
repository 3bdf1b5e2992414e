//! Navigation model: compiled-in routes, sidebar sections, and the
//! active-route matcher.

/// Route paths the sidebar links to.
pub mod routes {
    pub const DASHBOARD: &str = "/dashboard";
    pub const PROFILE: &str = "/dashboard/profile";
    pub const TRIPS: &str = "/dashboard/trips";
    pub const TRIPS_MINE: &str = "/dashboard/trips/mine";
    pub const TRIPS_JOINED: &str = "/dashboard/trips/joined";
    pub const ROUTE_PLANNER: &str = "/dashboard/route-planner";
    pub const FEED: &str = "/dashboard/feed";
    pub const GROUPS: &str = "/dashboard/groups";
    pub const HELPERS: &str = "/dashboard/helpers";
    pub const EXPENSES: &str = "/dashboard/expenses";
    pub const SOS: &str = "/dashboard/sos";
    pub const SETTINGS: &str = "/dashboard/settings";
    pub const LOGIN: &str = "/login";
}

/// A single sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub destination: &'static str,
}

/// A group of links under an optional heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub heading: Option<&'static str>,
    pub items: &'static [NavItem],
}

impl NavSection {
    /// Key used to tell sections apart when rendering a list of them.
    pub fn key(&self) -> &'static str {
        self.heading.unwrap_or("section")
    }
}

const fn item(label: &'static str, destination: &'static str) -> NavItem {
    NavItem { label, destination }
}

/// Sections shown in the sidebar, in display order.
pub static MAIN_SECTIONS: &[NavSection] = &[
    NavSection {
        heading: Some("Main"),
        items: &[
            item("Dashboard", routes::DASHBOARD),
            item("Profile", routes::PROFILE),
        ],
    },
    NavSection {
        heading: Some("Trips"),
        items: &[
            item("Trips", routes::TRIPS),
            item("My Trips", routes::TRIPS_MINE),
            item("Joined Trips", routes::TRIPS_JOINED),
            item("Route Planner", routes::ROUTE_PLANNER),
        ],
    },
    NavSection {
        heading: Some("Community"),
        items: &[
            item("Rider Feed", routes::FEED),
            item("Groups", routes::GROUPS),
            item("Helpers", routes::HELPERS),
            item("Expenses", routes::EXPENSES),
            item("Safety & SOS", routes::SOS),
        ],
    },
];

/// Whether `destination` should be highlighted while the user is on
/// `current_path`.
///
/// Every destination except the dashboard root also stays active on its
/// nested sub-routes. The root matches by exact equality only, otherwise it
/// would be highlighted everywhere.
pub fn is_active(current_path: &str, destination: &str) -> bool {
    current_path == destination
        || (destination != routes::DASHBOARD && current_path.starts_with(destination))
}

/// Looks up the sidebar label for a path, if one of the links points there.
pub fn label_for(path: &str) -> Option<&'static str> {
    MAIN_SECTIONS
        .iter()
        .flat_map(|section| section.items.iter())
        .find(|item| item.destination == path)
        .map(|item| item.label)
}
