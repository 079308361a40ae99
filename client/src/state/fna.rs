//! FNA form-page state reducer.
//!
//! DESIGN
//! ======
//! One tagged banner replaces the old pair of nullable error/success
//! strings, and section/client selection goes through named transitions.
//! The reducer owns no timers; the banner component schedules the 3-second
//! auto-clear and feeds `ClearBanner` back in.

#[cfg(test)]
#[path = "fna_test.rs"]
mod tests;

/// How long a transient banner stays up before auto-clearing.
pub const BANNER_CLEAR_MS: u32 = 3000;

/// Number of FNA sections.
pub const SECTION_COUNT: u8 = 6;

/// Fixed section titles, indexed by section number minus one.
pub const SECTION_TITLES: [&str; SECTION_COUNT as usize] = [
    "Personal Information",
    "Family & Dependents",
    "Financial Goals",
    "Assets & Liabilities",
    "Insurance Coverage",
    "Risk Assessment",
];

/// Placeholder client roster. Real client lookup lives in a backend this
/// app does not have.
pub const CLIENT_ROSTER: [(&str, &str); 3] =
    [("client1", "John Doe"), ("client2", "Jane Smith"), ("client3", "Robert Johnson")];

/// Display name for a roster client id.
#[must_use]
pub fn client_name(id: &str) -> Option<&'static str> {
    CLIENT_ROSTER.iter().find(|(client_id, _)| *client_id == id).map(|(_, name)| *name)
}

/// Transient page banner. At most one message is visible; a new one
/// replaces whatever is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Banner {
    #[default]
    None,
    Error(String),
    Success(String),
}

impl Banner {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Named state transitions for the FNA page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FnaAction {
    /// Pick the client the analysis is for. An empty id clears the pick.
    SelectClient(String),
    /// Jump to a section by number (1-based). Out-of-range is ignored.
    SelectSection(u8),
    /// Advance to the next section, saturating at the last one.
    NextSection,
    ShowError(String),
    ShowSuccess(String),
    ClearBanner,
}

/// Local state for the FNA form page. No persistence; lifetime is the
/// mounted page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FnaState {
    pub selected_client: Option<String>,
    pub current_section: u8,
    pub banner: Banner,
}

impl Default for FnaState {
    fn default() -> Self {
        Self { selected_client: None, current_section: 1, banner: Banner::None }
    }
}

impl FnaState {
    /// Apply one transition. Total: every action leaves the state valid.
    pub fn apply(&mut self, action: FnaAction) {
        match action {
            FnaAction::SelectClient(id) => {
                self.selected_client = if id.is_empty() { None } else { Some(id) };
            }
            FnaAction::SelectSection(section) => {
                if (1..=SECTION_COUNT).contains(&section) {
                    self.current_section = section;
                }
            }
            FnaAction::NextSection => {
                if self.current_section < SECTION_COUNT {
                    self.current_section += 1;
                }
            }
            FnaAction::ShowError(text) => self.banner = Banner::Error(text),
            FnaAction::ShowSuccess(text) => self.banner = Banner::Success(text),
            FnaAction::ClearBanner => self.banner = Banner::None,
        }
    }

    /// Title of the current section.
    #[must_use]
    pub fn current_section_title(&self) -> &'static str {
        SECTION_TITLES[usize::from(self.current_section) - 1]
    }

    /// Whether the "Next Section" control has anywhere to go.
    #[must_use]
    pub fn has_next_section(&self) -> bool {
        self.current_section < SECTION_COUNT
    }
}
