use crate::components::top_nav::TopNav;
use crate::components::{use_full_page_context, FullPageScroll, Panel};
use yew::prelude::*;

const FEATURES: [(&str, &str, &str); 6] = [
    (
        "fas fa-brain",
        "Contextual Understanding",
        "Deep learning models that truly comprehend context, nuance, and intent beyond simple pattern matching.",
    ),
    (
        "fas fa-bolt",
        "Instant Insights",
        "Real-time analysis and decision-making powered by optimized neural architectures.",
    ),
    (
        "fas fa-plug",
        "Seamless Integration",
        "Connect with your existing tools and workflows through our comprehensive API ecosystem.",
    ),
    (
        "fas fa-shield-alt",
        "Enterprise Security",
        "Bank-level encryption and compliance with SOC 2, GDPR, and HIPAA standards.",
    ),
    (
        "fas fa-tachometer-alt",
        "Lightning Performance",
        "Consistently fast response times under 50ms, even at massive scale.",
    ),
    (
        "fas fa-globe",
        "Global Deployment",
        "Edge computing infrastructure across 100+ locations worldwide for optimal latency.",
    ),
];

const STATS: [(&str, &str); 4] = [
    ("99.9%", "Uptime SLA"),
    ("10M+", "Decisions Daily"),
    ("47ms", "Response Time"),
    ("95%", "Accuracy"),
];

/// Position of the pricing panel in `Landing`.
const PRICING_SECTION: usize = 3;

struct Plan {
    name: &'static str,
    description: &'static str,
    monthly: u32,
    popular: bool,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        description: "Perfect for individuals and small teams",
        monthly: 29,
        popular: false,
    },
    Plan {
        name: "Professional",
        description: "Advanced features for growing businesses",
        monthly: 99,
        popular: true,
    },
    Plan {
        name: "Enterprise",
        description: "Custom solutions for large organizations",
        monthly: 299,
        popular: false,
    },
];

/// Annual billing is two months free.
pub fn displayed_price(monthly: u32, annual: bool) -> u32 {
    if annual {
        monthly * 10 / 12
    } else {
        monthly
    }
}

#[function_component]
fn Hero() -> Html {
    let context = use_full_page_context();
    let explore = {
        let context = context.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(context) = &context {
                context.next();
            }
        })
    };
    let get_started = Callback::from(move |_: MouseEvent| {
        if let Some(context) = &context {
            context.go_to(PRICING_SECTION);
        }
    });
    html! {
        <div class="hero">
            <div class="hero-content">
                <h1 class="hero-title">{"INTELLIGENCE"}<br/>{"THAT"}<br/>{"UNDERSTANDS"}</h1>
                <p class="hero-subtitle">{"Advanced AI that adapts to your world, not the other way around"}</p>
                <div class="hero-cta-group">
                    <button class="hero-cta" onclick={get_started}>{"Get Started"}</button>
                    <button class="hero-explore" onclick={explore}>
                        {"Explore"}<i class="fas fa-arrow-down"></i>
                    </button>
                </div>
            </div>
        </div>
    }
}

fn features() -> Html {
    html! {
        <div class="features">
            <h2>{"Built for what comes next"}</h2>
            <div class="feature-grid">
                { for FEATURES.iter().map(|(icon, title, description)| html! {
                    <div class="feature-card">
                        <i class={*icon}></i>
                        <h3>{*title}</h3>
                        <p>{*description}</p>
                    </div>
                }) }
            </div>
        </div>
    }
}

fn stats() -> Html {
    html! {
        <div class="stats">
            { for STATS.iter().map(|(value, label)| html! {
                <div class="stat">
                    <span class="stat-value">{*value}</span>
                    <span class="stat-label">{*label}</span>
                </div>
            }) }
        </div>
    }
}

#[function_component]
fn Pricing() -> Html {
    let annual = use_state(|| false);
    let toggle = {
        let annual = annual.clone();
        Callback::from(move |_: MouseEvent| annual.set(!*annual))
    };
    html! {
        <div class="pricing">
            <h2>{"Simple, transparent pricing"}</h2>
            <button class={classes!("pricing-toggle", annual.then_some("annual"))} onclick={toggle}>
                { if *annual { "Billed annually" } else { "Billed monthly" } }
            </button>
            <div class="pricing-cards">
                { for PLANS.iter().map(|plan| html! {
                    <div class={classes!("pricing-card", plan.popular.then_some("popular"))}>
                        { if plan.popular { html! { <span class="badge">{"Most Popular"}</span> } } else { html! {} } }
                        <h3>{plan.name}</h3>
                        <p>{plan.description}</p>
                        <span class="price">{format!("${}", displayed_price(plan.monthly, *annual))}</span>
                        <span class="per">{"/month"}</span>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component]
fn Cta() -> Html {
    let context = use_full_page_context();
    let back = {
        let context = context.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(context) = &context {
                context.previous();
            }
        })
    };
    let back_to_top = Callback::from(move |_: MouseEvent| {
        if let Some(context) = &context {
            context.jump_to(0);
        }
    });
    html! {
        <div class="cta">
            <h2>{"Ready to think bigger?"}</h2>
            <p>{"Start free. Scale when you need to."}</p>
            <a class="hero-cta" href="#pricing">{"Start now"}</a>
            <div class="cta-controls">
                <button class="cta-back" onclick={back}>{"Back"}</button>
                <button class="back-to-top" onclick={back_to_top}>{"Back to top"}</button>
            </div>
            <footer>{"© 2025 Neural AI. All rights reserved."}</footer>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let panels = vec![
        Panel::new("hero", "Home", html! { <Hero /> }),
        Panel::new("features", "Features", features()),
        Panel::new("stats", "Stats", stats()),
        Panel::new("pricing", "Pricing", html! { <Pricing /> }),
        Panel::new("cta", "Get Started", html! { <Cta /> }),
    ];
    let on_section_change = Callback::from(|index: usize| {
        log::info!("Landing section {}", index);
    });
    let landing_css = r#"
        .landing-page {
            background: #0a0a0f;
            color: #f5f5f0;
            font-family: 'Inter', sans-serif;
        }
        .top-nav {
            position: fixed;
            top: 1.5rem;
            left: 50%;
            transform: translateX(-50%);
            z-index: 60;
            display: flex;
            align-items: center;
            gap: 2rem;
            padding: 1rem 2rem;
            border-radius: 9999px;
            background: rgba(20, 20, 30, 0.7);
            backdrop-filter: blur(12px);
        }
        .top-nav a {
            color: #c0c0c0;
            text-decoration: none;
        }
        .top-nav-logo {
            font-weight: 600;
            color: #f5f5f0 !important;
        }
        .top-nav-toggle {
            display: none;
        }
        .top-nav-links {
            display: flex;
            gap: 1.5rem;
        }
        .hero, .features, .stats, .pricing, .cta {
            height: 100%;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            text-align: center;
            padding: 0 1.5rem;
        }
        .hero-title {
            font-size: clamp(3rem, 8vw, 6rem);
            line-height: 1;
        }
        .feature-grid, .pricing-cards {
            display: grid;
            grid-template-columns: repeat(3, minmax(0, 1fr));
            gap: 1.5rem;
            max-width: 1100px;
        }
        .stats {
            flex-direction: row;
            gap: 4rem;
        }
        .stat-value {
            display: block;
            font-size: 3rem;
        }
        .pricing-card.popular {
            border: 1px solid #f5f5f0;
        }
        @media (max-width: 768px) {
            .top-nav-toggle {
                display: block;
            }
            .top-nav-links {
                display: none;
            }
            .top-nav-links.open {
                display: flex;
                flex-direction: column;
            }
            .feature-grid, .pricing-cards {
                grid-template-columns: 1fr;
            }
            .stats {
                flex-direction: column;
                gap: 2rem;
            }
        }
    "#;
    html! {
        <div class="landing-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <style>{landing_css}</style>
            <TopNav />
            <FullPageScroll {panels} {on_section_change} />
        </div>
    }
}
