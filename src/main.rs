mod app;
mod components;
mod config;
mod data;
mod error;
mod hooks;
mod motion;
mod pages;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    gloo::console::log!("Galah Studio starting");
    yew::Renderer::<App>::new().render();
}
