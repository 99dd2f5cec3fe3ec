use yew::prelude::*;
use crate::components::{About, Intro, Projects};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <main class="container">
            <Intro />
            <About />
            <Projects />
        </main>
    }
}
