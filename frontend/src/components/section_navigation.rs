use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionNavigationProps {
    pub total_sections: usize,
    pub current_section: usize,
    pub on_navigate: Callback<usize>,
    #[prop_or_default]
    pub labels: Vec<AttrValue>,
}

pub fn dot_label(labels: &[AttrValue], index: usize) -> AttrValue {
    labels
        .get(index)
        .filter(|label| !label.is_empty())
        .cloned()
        .unwrap_or_else(|| AttrValue::from(format!("Section {}", index + 1)))
}

#[function_component]
pub fn SectionNavigation(props: &SectionNavigationProps) -> Html {
    html! {
        <nav class="section-navigation" aria-label="Section navigation">
            <ul>
                { for (0..props.total_sections).map(|index| {
                    let is_active = index == props.current_section;
                    let label = dot_label(&props.labels, index);
                    let onclick = {
                        let on_navigate = props.on_navigate.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_navigate.emit(index);
                        })
                    };
                    html! {
                        <li key={index}>
                            <button
                                class={classes!("section-dot", is_active.then_some("active"))}
                                aria-label={label.clone()}
                                aria-current={is_active.then_some("true")}
                                {onclick}
                            >
                                <span class="section-dot-label">{label.to_string()}</span>
                            </button>
                        </li>
                    }
                }) }
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_fall_back_to_ordinal() {
        let labels = vec![AttrValue::from("Hero"), AttrValue::from("")];
        assert_eq!(&*dot_label(&labels, 0), "Hero");
        assert_eq!(&*dot_label(&labels, 1), "Section 2");
        assert_eq!(&*dot_label(&labels, 4), "Section 5");
    }
}
