//! The full-page scroll state machine.
//!
//! Two states: idle and transitioning. An accepted navigation moves the
//! current section right away and, unless motion is reduced or the jump is
//! immediate, enters the transitioning state until the completion token it
//! handed out is fired back through [`ScrollController::complete_transition`].
//! While transitioning every navigation request is dropped, not queued.
//!
//! The controller never touches the DOM. It returns a [`Navigation`] that the
//! hook layer turns into a timer, a history write and a focus move.

use super::fragment::{self, HashFormat};
use super::intent::{HistoryMode, Intent, NavigationSource};
use super::registry::SectionRegistry;
use crate::error::RegistryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub current_section: usize,
    pub is_transitioning: bool,
}

/// Identifies one scheduled transition completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Fire the token after `after_ms`. Any earlier pending timer is replaced.
    Scheduled { token: TransitionToken, after_ms: u32 },
    /// Nothing to wait for. Any pending timer must be cancelled.
    Immediate,
}

/// The side effects of one accepted navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub from: usize,
    pub to: usize,
    pub source: NavigationSource,
    /// Fragment (without `#`) naming the new section.
    pub fragment: String,
    pub history: HistoryMode,
    pub completion: Completion,
}

#[derive(Debug, Clone)]
pub struct ScrollController {
    total_sections: usize,
    transition_duration_ms: u32,
    hash_format: HashFormat,
    state: NavigationState,
    reduced_motion: bool,
    pending: Option<TransitionToken>,
    next_token: u64,
    registry: SectionRegistry,
}

impl ScrollController {
    /// `total_sections` is clamped to at least one and `initial_section` into range.
    pub fn new(total_sections: usize, transition_duration_ms: u32, initial_section: usize) -> Self {
        let total_sections = total_sections.max(1);
        Self {
            total_sections,
            transition_duration_ms,
            hash_format: HashFormat::default(),
            state: NavigationState {
                current_section: initial_section.min(total_sections - 1),
                is_transitioning: false,
            },
            reduced_motion: false,
            pending: None,
            next_token: 0,
            registry: SectionRegistry::new(),
        }
    }

    pub fn with_hash_format(mut self, hash_format: HashFormat) -> Self {
        self.hash_format = hash_format;
        self
    }

    #[cfg(test)]
    pub fn with_registry(mut self, registry: SectionRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn current_section(&self) -> usize {
        self.state.current_section
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning
    }

    /// Arbiters only run while this is true.
    pub fn is_idle(&self) -> bool {
        !self.state.is_transitioning
    }

    pub fn total_sections(&self) -> usize {
        self.total_sections
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    /// Transition length actually waited for: zero under reduced motion.
    pub fn effective_duration_ms(&self) -> u32 {
        if self.reduced_motion {
            0
        } else {
            self.transition_duration_ms
        }
    }

    /// Wheel cooldown when the wheel arbiter follows this controller.
    pub fn wheel_cooldown_ms(&self) -> u32 {
        self.effective_duration_ms() + 200
    }

    pub fn register_section(&mut self, id: &str, index: usize) -> Result<(), RegistryError> {
        self.registry.register(id, index)
    }

    pub fn fragment_for(&self, index: usize) -> String {
        fragment::fragment_for(index, self.hash_format, &self.registry)
    }

    /// Navigate to `index`. Returns `None` when the request is dropped: out of
    /// range, already there, or a transition is in flight.
    pub fn go_to_section(
        &mut self,
        index: usize,
        immediate: bool,
        source: NavigationSource,
    ) -> Option<Navigation> {
        if index >= self.total_sections {
            log::debug!("Ignoring navigation to out-of-range section {}", index);
            return None;
        }
        if index == self.state.current_section {
            return None;
        }
        if self.state.is_transitioning {
            log::debug!("Dropping navigation to {} from {:?}: transition in flight", index, source);
            return None;
        }

        let from = self.state.current_section;
        self.state.current_section = index;

        let completion = if immediate || self.reduced_motion {
            self.pending = None;
            Completion::Immediate
        } else {
            let token = TransitionToken(self.next_token);
            self.next_token += 1;
            self.pending = Some(token);
            self.state.is_transitioning = true;
            Completion::Scheduled {
                token,
                after_ms: self.transition_duration_ms,
            }
        };

        log::debug!("Section {} -> {} via {:?}", from, index, source);

        Some(Navigation {
            from,
            to: index,
            source,
            fragment: self.fragment_for(index),
            history: source.history_mode(),
            completion,
        })
    }

    pub fn next(&mut self, source: NavigationSource) -> Option<Navigation> {
        if self.state.is_transitioning || self.state.current_section + 1 >= self.total_sections {
            return None;
        }
        self.go_to_section(self.state.current_section + 1, false, source)
    }

    pub fn previous(&mut self, source: NavigationSource) -> Option<Navigation> {
        if self.state.is_transitioning || self.state.current_section == 0 {
            return None;
        }
        self.go_to_section(self.state.current_section - 1, false, source)
    }

    pub fn go_to_start(&mut self, source: NavigationSource) -> Option<Navigation> {
        self.go_to_section(0, false, source)
    }

    pub fn go_to_end(&mut self, source: NavigationSource) -> Option<Navigation> {
        self.go_to_section(self.total_sections - 1, false, source)
    }

    pub fn apply(&mut self, intent: Intent, source: NavigationSource) -> Option<Navigation> {
        match intent {
            Intent::Next => self.next(source),
            Intent::Prev => self.previous(source),
            Intent::Start => self.go_to_start(source),
            Intent::End => self.go_to_end(source),
            Intent::GoTo(index) => self.go_to_section(index, false, source),
        }
    }

    /// The timer for `token` fired. Returns the section that should receive
    /// focus, or `None` if the token is stale.
    pub fn complete_transition(&mut self, token: TransitionToken) -> Option<usize> {
        if self.pending != Some(token) {
            log::debug!("Ignoring stale transition completion {:?}", token);
            return None;
        }
        self.pending = None;
        self.state.is_transitioning = false;
        Some(self.state.current_section)
    }

    pub fn resolve_hash(&self, hash: &str) -> Option<usize> {
        fragment::resolve(hash, &self.registry, self.total_sections)
    }

    /// Jump to whatever `hash` names, without animation. Unresolvable
    /// fragments and the current section are ignored.
    pub fn sync_from_hash(&mut self, hash: &str) -> Option<Navigation> {
        let index = self.resolve_hash(hash)?;
        if index == self.state.current_section {
            return None;
        }
        self.go_to_section(index, true, NavigationSource::Hash)
    }

    /// Drop the pending completion; used on teardown.
    pub fn cancel_pending(&mut self) {
        self.pending = None;
        self.state.is_transitioning = false;
    }
}
