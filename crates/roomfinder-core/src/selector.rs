// crates/roomfinder-core/src/selector.rs
use crate::search::{SearchResolver, Suggestion};
use std::str::FromStr;

/// Where a search box gets its dropdown rows from. Fixed at construction.
#[derive(Clone, Debug, Default)]
pub enum SuggestionSource {
    #[default]
    None,
    From(SearchResolver),
}

/// Keys the search box reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Enter,
}

impl FromStr for NavKey {
    type Err = ();

    /// Accepts DOM `KeyboardEvent.key` names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowDown" | "Down" => Ok(Self::ArrowDown),
            "ArrowUp" | "Up" => Ok(Self::ArrowUp),
            "Enter" => Ok(Self::Enter),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    /// Dropdown hidden (closed, or nothing to show).
    Idle,
    /// Dropdown visible with at least one row.
    Browsing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitKind {
    /// A dropdown row was chosen (Enter on a highlight, or a click).
    Suggestion,
    /// The trimmed text of the box was submitted.
    Typed,
}

/// A search submitted by the box; the owner runs the actual search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub value: String,
    pub kind: CommitKind,
}

/// Per-search-box interaction state: text, dropdown visibility and the
/// highlighted row.
///
/// Keyboard and mouse drive the same highlight; the last input wins. The
/// highlight is dropped every time the row list is recomputed, so it can
/// never point past the end of a shorter list.
#[derive(Clone, Debug, Default)]
pub struct SuggestionSelector {
    source: SuggestionSource,
    value: String,
    open: bool,
    suggestions: Vec<Suggestion>,
    selected: Option<usize>,
}

impl SuggestionSelector {
    pub fn new(source: SuggestionSource) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }

    /// A plain search box without a dropdown.
    pub fn without_suggestions() -> Self {
        Self::new(SuggestionSource::None)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn has_source(&self) -> bool {
        matches!(self.source, SuggestionSource::From(_))
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Suggestion> {
        self.selected.and_then(|i| self.suggestions.get(i))
    }

    pub fn state(&self) -> SelectorState {
        if self.open && !self.suggestions.is_empty() {
            SelectorState::Browsing
        } else {
            SelectorState::Idle
        }
    }

    /// Rows to render right now (empty while the dropdown is hidden).
    pub fn visible_suggestions(&self) -> &[Suggestion] {
        match self.state() {
            SelectorState::Browsing => &self.suggestions,
            SelectorState::Idle => &[],
        }
    }

    fn recompute(&mut self) {
        self.suggestions = match &self.source {
            SuggestionSource::None => Vec::new(),
            SuggestionSource::From(resolver) => resolver.suggestions(&self.value),
        };
        self.selected = None;
    }

    /// The text in the box changed.
    pub fn input(&mut self, text: impl Into<String>) {
        self.value = text.into();
        self.open = true;
        self.recompute();
    }

    pub fn focus(&mut self) {
        if self.has_source() {
            self.open = true;
        }
    }

    pub fn key(&mut self, key: NavKey) -> Option<Commit> {
        match key {
            NavKey::Enter => self.submit(),
            NavKey::ArrowDown => {
                self.step(|i, n| i.map_or(0, |i| (i + 1) % n));
                None
            }
            NavKey::ArrowUp => {
                self.step(|i, n| i.map_or(n - 1, |i| (i + n - 1) % n));
                None
            }
        }
    }

    fn step(&mut self, next: impl FnOnce(Option<usize>, usize) -> usize) {
        let n = self.suggestions.len();
        if n == 0 {
            return;
        }
        // Visibility is untouched: a closed dropdown keeps its highlight hidden.
        self.selected = Some(next(self.selected, n));
    }

    /// Enter: the highlighted row if any, otherwise the typed text.
    pub fn submit(&mut self) -> Option<Commit> {
        if let Some(i) = self.selected {
            return self.choose(i);
        }
        let term = self.value.trim();
        if term.is_empty() {
            return None;
        }
        let commit = Commit {
            value: term.to_owned(),
            kind: CommitKind::Typed,
        };
        self.open = false;
        Some(commit)
    }

    pub fn hover(&mut self, index: usize) {
        if index < self.suggestions.len() {
            self.selected = Some(index);
        }
    }

    pub fn leave(&mut self) {
        self.selected = None;
    }

    /// A pointer press landed outside the component.
    pub fn click_outside(&mut self) {
        self.open = false;
    }

    pub fn click(&mut self, index: usize) -> Option<Commit> {
        self.choose(index)
    }

    fn choose(&mut self, index: usize) -> Option<Commit> {
        let value = self.suggestions.get(index)?.value.clone();
        self.value = value.clone();
        self.recompute();
        self.open = false;
        Some(Commit {
            value,
            kind: CommitKind::Suggestion,
        })
    }
}
