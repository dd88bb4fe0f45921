/// A discrete navigation request produced by an input arbiter or a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Next,
    Prev,
    Start,
    End,
    GoTo(usize),
}

/// Where a navigation request came from. Decides how the URL fragment is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationSource {
    Wheel,
    Touch,
    Keyboard,
    /// A click on one of the navigation dots.
    Indicator,
    /// Panel content or other code calling through the context.
    Programmatic,
    /// A deep link: the fragment already names the target.
    Hash,
}

/// How a successful navigation is recorded in browser history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
    Skip,
}

impl NavigationSource {
    pub fn history_mode(self) -> HistoryMode {
        match self {
            NavigationSource::Indicator => HistoryMode::Push,
            NavigationSource::Hash => HistoryMode::Skip,
            _ => HistoryMode::Replace,
        }
    }
}

/// What an arbiter decided about one raw event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArbiterOutcome {
    pub intent: Option<Intent>,
    /// The event should have its default action cancelled.
    pub suppress: bool,
}

impl ArbiterOutcome {
    pub const IGNORED: ArbiterOutcome = ArbiterOutcome {
        intent: None,
        suppress: false,
    };

    pub fn suppressed() -> Self {
        Self {
            intent: None,
            suppress: true,
        }
    }

    pub fn fire(intent: Intent) -> Self {
        Self {
            intent: Some(intent),
            suppress: true,
        }
    }
}
