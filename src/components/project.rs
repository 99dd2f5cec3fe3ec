use yew::prelude::*;

use crate::components::outbound_link::OutboundLink;
use crate::data::ProjectRecord;
use crate::hooks::use_scroll_progress;
use crate::motion::{CardEmphasis, PROJECT_SCROLL_OFFSET};

/// Which side of the card holds the text; the image takes the other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSide {
    Default,
    Mirrored,
}

impl CardSide {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            CardSide::Default
        } else {
            CardSide::Mirrored
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            CardSide::Default => "project-card--default",
            CardSide::Mirrored => "project-card--mirrored",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectProps {
    pub record: &'static ProjectRecord,
    pub side: CardSide,
}

#[function_component(Project)]
pub fn project(props: &ProjectProps) -> Html {
    let card_ref = use_node_ref();
    let progress = use_scroll_progress(card_ref.clone(), PROJECT_SCROLL_OFFSET);
    let emphasis = CardEmphasis::from_progress(progress);
    let record = props.record;

    html! {
        <article ref={card_ref} class={classes!("project-card", props.side.class())} style={emphasis.style()}>
            <div class="project-body">
                <div class="project-text">
                    <h3 class="project-title">{ record.title }</h3>
                    <p class="project-description">{ record.description }</p>
                    <ul class="project-tags">
                        { for record.tag_badges().map(|(key, tag)| html! {
                            <li key={key} class="project-tag">{ tag }</li>
                        }) }
                    </ul>
                </div>
                <OutboundLink
                    href={record.project_url}
                    class="project-image-link"
                    title={format!("Visit Project: {}", record.title)}
                >
                    <img class="project-image" src={record.image_url} alt={record.title} />
                </OutboundLink>
            </div>
        </article>
    }
}
