use yew::prelude::*;

use super::section::Section;
use super::section_navigation::SectionNavigation;
use crate::config::{ConfigOverrides, ScrollConfig, DEFAULT_SHELL_TRANSITION_MS};
use crate::hooks::{use_full_page_scroll, use_viewport_height, FullPageScrollOptions, NavRequest};
use crate::scroll::{HashFormat, Intent, NavigationSource};

/// One panel of the sequence: a stable identifier, a label for its
/// navigation dot and its content.
#[derive(Clone, PartialEq)]
pub struct Panel {
    pub id: AttrValue,
    pub label: AttrValue,
    pub content: Html,
}

impl Panel {
    pub fn new(id: impl Into<AttrValue>, label: impl Into<AttrValue>, content: Html) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            content,
        }
    }
}

/// Navigation state and controls available to panel content.
#[derive(Clone, PartialEq)]
pub struct FullPageContext {
    pub current_section: usize,
    pub total_sections: usize,
    pub is_transitioning: bool,
    pub reduced_motion: bool,
    navigate: Callback<NavRequest>,
}

impl FullPageContext {
    fn send(&self, intent: Intent) {
        self.navigate
            .emit(NavRequest::new(intent, NavigationSource::Programmatic));
    }

    pub fn go_to(&self, index: usize) {
        self.send(Intent::GoTo(index));
    }

    /// Jump without the animated transition.
    pub fn jump_to(&self, index: usize) {
        self.navigate.emit(NavRequest {
            intent: Intent::GoTo(index),
            source: NavigationSource::Programmatic,
            immediate: true,
        });
    }

    pub fn next(&self) {
        self.send(Intent::Next);
    }

    pub fn previous(&self) {
        self.send(Intent::Prev);
    }
}

#[hook]
pub fn use_full_page_context() -> Option<FullPageContext> {
    use_context::<FullPageContext>()
}

#[derive(Properties, PartialEq)]
pub struct FullPageScrollProps {
    pub panels: Vec<Panel>,
    #[prop_or(DEFAULT_SHELL_TRANSITION_MS)]
    pub transition_duration_ms: u32,
    #[prop_or_default]
    pub initial_section: usize,
    #[prop_or_default]
    pub hash_format: HashFormat,
    #[prop_or_default]
    pub on_section_change: Option<Callback<usize>>,
    #[prop_or(true)]
    pub show_navigation: bool,
}

/// Offset of the panel track, in px when the viewport height is known.
pub fn track_offset(current_section: usize, viewport_height: f64) -> String {
    if current_section == 0 {
        "translate3d(0, 0, 0)".to_string()
    } else if viewport_height > 0.0 {
        format!("translate3d(0, -{}px, 0)", current_section as f64 * viewport_height)
    } else {
        format!("translate3d(0, -{}vh, 0)", current_section * 100)
    }
}

pub fn track_transition(animate: bool, duration_ms: u32) -> String {
    if animate {
        format!("transform {}ms cubic-bezier(0.16, 1, 0.3, 1)", duration_ms)
    } else {
        "none".to_string()
    }
}

#[function_component]
pub fn FullPageScroll(props: &FullPageScrollProps) -> Html {
    let overrides = use_memo(|_| ConfigOverrides::from_document(), ());
    let options = {
        let config = ScrollConfig {
            transition_duration_ms: props.transition_duration_ms,
            initial_section: props.initial_section,
            hash_format: props.hash_format,
            ..ScrollConfig::new(props.panels.len())
        };
        let config = match &*overrides {
            Some(overrides) => config.with_overrides(overrides),
            None => config,
        };
        FullPageScrollOptions {
            config,
            on_section_change: props.on_section_change.clone(),
        }
    };
    let scroll = use_full_page_scroll(options);
    let viewport_height = use_viewport_height();

    let current = scroll.state.current_section;
    let animate = scroll.state.is_transitioning && !scroll.reduced_motion;
    let track_style = format!(
        "transform: {}; transition: {}; will-change: transform;",
        track_offset(current, viewport_height),
        track_transition(animate, scroll.transition_duration_ms),
    );

    let context = FullPageContext {
        current_section: current,
        total_sections: scroll.total_sections,
        is_transitioning: scroll.state.is_transitioning,
        reduced_motion: scroll.reduced_motion,
        navigate: scroll.navigate.clone(),
    };

    let on_dot = {
        let navigate = scroll.navigate.clone();
        Callback::from(move |index: usize| {
            navigate.emit(NavRequest::new(Intent::GoTo(index), NavigationSource::Indicator))
        })
    };
    let labels: Vec<AttrValue> = props.panels.iter().map(|panel| panel.label.clone()).collect();

    let shell_css = r#"
        .full-page-container {
            position: fixed;
            inset: 0;
            overflow: hidden;
            touch-action: none;
        }
        .full-page-track {
            position: relative;
            width: 100%;
            height: 100%;
        }
        .full-page-section {
            position: relative;
            width: 100%;
            height: 100vh;
            height: 100dvh;
            overflow: hidden;
            outline: none;
        }
        .section-navigation {
            position: fixed;
            right: 1.5rem;
            top: 50%;
            transform: translateY(-50%);
            z-index: 50;
        }
        .section-navigation ul {
            list-style: none;
            margin: 0;
            padding: 0;
            display: flex;
            flex-direction: column;
            gap: 1rem;
        }
        .section-dot {
            position: relative;
            width: 0.5rem;
            height: 0.5rem;
            padding: 0;
            border: none;
            border-radius: 50%;
            background: rgba(192, 192, 192, 0.5);
            cursor: pointer;
            transition: all 233ms ease;
        }
        .section-dot.active {
            width: 0.75rem;
            height: 0.75rem;
            background: #f5f5f0;
            box-shadow: 0 0 12px rgba(245, 245, 240, 0.6);
        }
        .section-dot-label {
            position: absolute;
            right: 1.5rem;
            top: 50%;
            transform: translateY(-50%);
            white-space: nowrap;
            font-size: 0.875rem;
            color: #f5f5f0;
            opacity: 0;
            pointer-events: none;
            transition: opacity 233ms ease;
        }
        .section-dot:hover .section-dot-label {
            opacity: 1;
        }
        @media (max-width: 768px) {
            .section-navigation {
                display: none;
            }
        }
    "#;

    html! {
        <ContextProvider<FullPageContext> {context}>
            <div class="full-page-container">
                <style>{shell_css}</style>
                <div class="full-page-track" style={track_style}>
                    { for props.panels.iter().enumerate().map(|(index, panel)| html! {
                        <Section
                            key={panel.id.to_string()}
                            id={panel.id.clone()}
                            {index}
                            active={index == current}
                            on_register={scroll.register.clone()}
                        >
                            { panel.content.clone() }
                        </Section>
                    }) }
                </div>
                {
                    if props.show_navigation {
                        html! {
                            <SectionNavigation
                                total_sections={scroll.total_sections}
                                current_section={current}
                                on_navigate={on_dot}
                                {labels}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </ContextProvider<FullPageContext>>
    }
}
