use yew::prelude::*;
use crate::components::Header;
use crate::hooks::ActiveSectionProvider;
use crate::pages;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ActiveSectionProvider>
            <Header />
            <pages::home::HomePage />
        </ActiveSectionProvider>
    }
}
