use yew::prelude::*;

use crate::config::NAV_LINKS;
use crate::hooks::active_section::now_ms;
use crate::hooks::{use_active_section, ActiveSectionAction};

#[function_component(Header)]
pub fn header() -> Html {
    let active = use_active_section();
    let current = active.as_ref().map(|ctx| ctx.current);

    html! {
        <header class="site-header">
            <nav class="site-nav">
                <ul>
                    { for NAV_LINKS.iter().map(|link| {
                        let section = link.section;
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| {
                                if let Some(ctx) = &active {
                                    ctx.dispatch(ActiveSectionAction::Clicked { section, at_ms: now_ms() });
                                }
                            })
                        };
                        let is_active = current == Some(section);
                        html! {
                            <li key={section.anchor()} class={classes!("nav-item", is_active.then_some("active"))}>
                                <a href={link.hash} {onclick} aria-current={is_active.then_some("true")}>
                                    { section.label() }
                                </a>
                            </li>
                        }
                    }) }
                </ul>
            </nav>
        </header>
    }
}
