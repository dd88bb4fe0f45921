use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: AttrValue,
    pub index: usize,
    pub active: bool,
    pub on_register: Callback<(AttrValue, usize)>,
    #[prop_or_default]
    pub children: Children,
}

/// One full-viewport panel. Registers its identifier on mount and whenever
/// its identifier or position changes.
#[function_component]
pub fn Section(props: &SectionProps) -> Html {
    {
        let on_register = props.on_register.clone();
        use_effect_with_deps(
            move |(id, index)| {
                on_register.emit((id.clone(), *index));
                || ()
            },
            (props.id.clone(), props.index),
        );
    }

    html! {
        <section
            id={props.id.clone()}
            class={classes!("full-page-section", props.active.then_some("active"))}
            data-section-index={props.index.to_string()}
            aria-hidden={if props.active { "false" } else { "true" }}
            tabindex={if props.active { "0" } else { "-1" }}
        >
            { for props.children.iter() }
        </section>
    }
}
