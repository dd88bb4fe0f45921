use yew::prelude::*;

const NAV_ITEMS: [(&str, &str); 3] = [
    ("Features", "features"),
    ("Stats", "stats"),
    ("Pricing", "pricing"),
];

fn set_hash(fragment: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(fragment) {
            log::warn!("Failed to set location hash: {:?}", e);
        }
    }
}

/// Header links. They only set `location.hash`; the full-page scroll picks
/// the change up through `hashchange`.
#[function_component]
pub fn TopNav() -> Html {
    let menu_open = use_state(|| false);

    let link = |label: &'static str, fragment: &'static str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            set_hash(fragment);
            menu_open.set(false);
        });
        html! {
            <a class="top-nav-link" href={format!("#{}", fragment)} {onclick}>{label}</a>
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    html! {
        <nav class="top-nav">
            <a class="top-nav-logo" href="#hero" onclick={Callback::from(|e: MouseEvent| {
                e.prevent_default();
                set_hash("hero");
            })}>{"NEURAL"}</a>
            <button class="top-nav-toggle" aria-expanded={(*menu_open).to_string()} onclick={toggle_menu}>
                <i class={if *menu_open { "fas fa-times" } else { "fas fa-bars" }}></i>
            </button>
            <div class={classes!("top-nav-links", menu_open.then_some("open"))}>
                { for NAV_ITEMS.iter().map(|&(label, fragment)| link(label, fragment)) }
            </div>
        </nav>
    }
}
