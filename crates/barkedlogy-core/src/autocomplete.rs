//! Autocomplete widget state machine.
//!
//! The widget moves between four phases:
//!
//! ```text
//! Idle --keystroke--> Debouncing --300ms--> Querying --results--> Showing
//!   ^                     |                     |                    |
//!   +---- short term -----+---- no results -----+--- outside click --+
//! ```
//!
//! Every keystroke issues a new [`DebounceTicket`]; only the newest ticket
//! may start a query, which gives the same effect as clearing a pending
//! timeout. Fetches themselves are not cancellable, so suggestions from an
//! older query are still shown if they arrive late.
//!
//! The view layer owns the timer and the fetch; this type only decides what
//! to do with each event.

use crate::config::SUGGESTION_MIN_CHARS;

/// Observable phase of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Box hidden, nothing pending
    Idle,
    /// Waiting for the debounce period to elapse
    Debouncing,
    /// Suggestion fetch in flight
    Querying,
    /// Suggestions rendered
    Showing,
}

/// Identifies one scheduled debounce timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// What the view must do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Hide the box; no fetch
    Hide,
    /// Start a debounce timer and report back with this ticket
    Schedule(DebounceTicket),
}

/// True if `term` is long enough to query suggestions for.
///
/// Length is counted in UTF-16 code units, the unit browsers report for
/// input values.
pub fn is_queryable(term: &str) -> bool {
    term.trim().encode_utf16().count() >= SUGGESTION_MIN_CHARS
}

#[derive(Debug, Clone, Default)]
pub struct Autocomplete {
    generation: u64,
    pending: Option<(u64, String)>,
    in_flight: usize,
    visible: bool,
    suggestions: Vec<String>,
}

impl Autocomplete {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight > 0 {
            Phase::Querying
        } else if self.pending.is_some() {
            Phase::Debouncing
        } else if self.is_open() {
            Phase::Showing
        } else {
            Phase::Idle
        }
    }

    /// Whether the suggestion box should be displayed.
    pub fn is_open(&self) -> bool {
        self.visible && !self.suggestions.is_empty()
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Handles a change of the host input's value.
    pub fn on_input(&mut self, value: &str) -> InputAction {
        self.generation += 1;
        let term = value.trim();

        if !is_queryable(term) {
            self.pending = None;
            self.visible = false;
            return InputAction::Hide;
        }

        self.pending = Some((self.generation, term.to_string()));
        InputAction::Schedule(DebounceTicket(self.generation))
    }

    /// Handles the end of a debounce period.
    ///
    /// Returns the term to fetch, or `None` if a later keystroke superseded
    /// this ticket.
    pub fn on_debounce_elapsed(&mut self, ticket: DebounceTicket) -> Option<String> {
        match self.pending.take() {
            Some((generation, term)) if generation == ticket.0 => {
                self.in_flight += 1;
                Some(term)
            }
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Handles a completed suggestion fetch.
    pub fn on_suggestions(&mut self, suggestions: Vec<String>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.visible = !suggestions.is_empty();
        self.suggestions = suggestions;
    }

    /// Handles a click that landed outside the widget.
    pub fn on_outside_click(&mut self) {
        self.visible = false;
    }

    /// Handles a click on a suggestion and returns the term to search for.
    pub fn select(&mut self, word: &str) -> String {
        self.generation += 1;
        self.pending = None;
        self.visible = false;
        word.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled(action: InputAction) -> DebounceTicket {
        match action {
            InputAction::Schedule(ticket) => ticket,
            InputAction::Hide => panic!("expected a scheduled query"),
        }
    }

    #[test]
    fn test_starts_idle() {
        let widget = Autocomplete::new();
        assert_eq!(widget.phase(), Phase::Idle);
        assert!(!widget.is_open());
    }

    #[test]
    fn test_short_terms_hide_without_query() {
        let mut widget = Autocomplete::new();
        assert_eq!(widget.on_input("gr"), InputAction::Hide);
        assert_eq!(widget.on_input("  g  "), InputAction::Hide);
        assert_eq!(widget.phase(), Phase::Idle);
    }

    #[test]
    fn test_full_cycle_to_showing() {
        let mut widget = Autocomplete::new();
        let ticket = scheduled(widget.on_input("grav"));
        assert_eq!(widget.phase(), Phase::Debouncing);

        assert_eq!(widget.on_debounce_elapsed(ticket).as_deref(), Some("grav"));
        assert_eq!(widget.phase(), Phase::Querying);

        widget.on_suggestions(vec!["gravity".into(), "microgravity".into()]);
        assert_eq!(widget.phase(), Phase::Showing);
        assert!(widget.is_open());
        assert_eq!(widget.suggestions().len(), 2);
    }

    #[test]
    fn test_newer_keystroke_supersedes_pending_timer() {
        let mut widget = Autocomplete::new();
        let first = scheduled(widget.on_input("grav"));
        let second = scheduled(widget.on_input("gravi"));

        assert_eq!(widget.on_debounce_elapsed(first), None);
        assert_eq!(widget.phase(), Phase::Debouncing);
        assert_eq!(widget.on_debounce_elapsed(second).as_deref(), Some("gravi"));
    }

    #[test]
    fn test_shortening_cancels_pending_query() {
        let mut widget = Autocomplete::new();
        let ticket = scheduled(widget.on_input("grav"));
        assert_eq!(widget.on_input("gr"), InputAction::Hide);
        assert_eq!(widget.on_debounce_elapsed(ticket), None);
        assert_eq!(widget.phase(), Phase::Idle);
    }

    #[test]
    fn test_empty_results_return_to_idle() {
        let mut widget = Autocomplete::new();
        let ticket = scheduled(widget.on_input("zzzz"));
        widget.on_debounce_elapsed(ticket);
        widget.on_suggestions(Vec::new());
        assert_eq!(widget.phase(), Phase::Idle);
    }

    #[test]
    fn test_outside_click_hides() {
        let mut widget = Autocomplete::new();
        let ticket = scheduled(widget.on_input("bone"));
        widget.on_debounce_elapsed(ticket);
        widget.on_suggestions(vec!["bone loss".into()]);

        widget.on_outside_click();
        assert_eq!(widget.phase(), Phase::Idle);
    }

    #[test]
    fn test_late_results_still_render() {
        let mut widget = Autocomplete::new();
        let ticket = scheduled(widget.on_input("grav"));
        widget.on_debounce_elapsed(ticket);
        widget.on_input("gr");

        widget.on_suggestions(vec!["gravity".into()]);
        assert!(widget.is_open());
    }

    #[test]
    fn test_select_returns_exact_word_and_hides() {
        let mut widget = Autocomplete::new();
        let ticket = scheduled(widget.on_input("micro"));
        widget.on_debounce_elapsed(ticket);
        widget.on_suggestions(vec!["microgravity".into()]);

        let term = widget.select("microgravity");
        assert_eq!(term, "microgravity");
        assert!(!widget.is_open());
    }

    #[test]
    fn test_select_cancels_pending_timer() {
        let mut widget = Autocomplete::new();
        let ticket = scheduled(widget.on_input("micro"));
        widget.select("microgravity");
        assert_eq!(widget.on_debounce_elapsed(ticket), None);
    }

    #[test]
    fn test_querying_until_every_fetch_lands() {
        let mut widget = Autocomplete::new();
        let first = scheduled(widget.on_input("grav"));
        widget.on_debounce_elapsed(first);
        let second = scheduled(widget.on_input("gravity"));
        widget.on_debounce_elapsed(second);

        widget.on_suggestions(vec!["gravity".into()]);
        assert_eq!(widget.phase(), Phase::Querying);

        widget.on_input("gr");
        widget.on_suggestions(Vec::new());
        assert_eq!(widget.phase(), Phase::Idle);
        assert!(!widget.is_open());
    }

    #[test]
    fn test_length_counts_utf16_units() {
        assert!(is_queryable("😀a"));
        assert!(!is_queryable("ab"));
        assert!(!is_queryable("  ab  "));
        assert!(is_queryable("día"));
    }
}
