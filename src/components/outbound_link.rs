use yew::prelude::*;

pub const NEW_CONTEXT_TARGET: &str = "_blank";
/// Opened pages get neither `window.opener` nor a referrer.
pub const NEW_CONTEXT_REL: &str = "noopener noreferrer";

/// Anchor attributes for a link that leaves the site in a new browsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outbound {
    pub href: &'static str,
    pub target: &'static str,
    pub rel: &'static str,
}

impl Outbound {
    pub const fn to(href: &'static str) -> Self {
        Self {
            href,
            target: NEW_CONTEXT_TARGET,
            rel: NEW_CONTEXT_REL,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct OutboundLinkProps {
    pub href: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(OutboundLink)]
pub fn outbound_link(props: &OutboundLinkProps) -> Html {
    let link = Outbound::to(props.href);

    html! {
        <a
            href={link.href}
            target={link.target}
            rel={link.rel}
            class={props.class.clone()}
            title={props.title.clone()}
            aria-label={props.aria_label.clone()}
        >
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtraLink;
    use crate::data::PROJECTS_DATA;

    fn isolated(link: &Outbound) -> bool {
        let rel: Vec<_> = link.rel.split_whitespace().collect();
        link.target == "_blank" && rel.contains(&"noopener") && rel.contains(&"noreferrer")
    }

    #[test]
    fn every_configured_link_opens_isolated() {
        for extra in ExtraLink::ALL {
            let link = Outbound::to(extra.url());
            assert_eq!(link.href, extra.url());
            assert!(isolated(&link), "{:?}", extra);
        }
    }

    #[test]
    fn every_project_link_opens_isolated() {
        for project in &PROJECTS_DATA {
            let link = Outbound::to(project.project_url);
            assert_eq!(link.href, project.project_url);
            assert!(isolated(&link), "{}", project.title);
        }
    }
}
