pub mod controller;
pub mod fragment;
pub mod intent;
pub mod keyboard;
pub mod registry;
pub mod touch;
pub mod wheel;

pub use controller::{Completion, Navigation, NavigationState, ScrollController, TransitionToken};
pub use fragment::HashFormat;
pub use intent::{ArbiterOutcome, HistoryMode, Intent, NavigationSource};
pub use registry::SectionRegistry;
