use neural_landing::{config, App};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    gloo_console::log!("NEURAL landing starting");
    yew::Renderer::<App>::new().render();
}
