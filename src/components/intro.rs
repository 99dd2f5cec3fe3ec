use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::components::outbound_link::OutboundLink;
use crate::config::{asset, ExtraLink, SectionName};
use crate::hooks::{use_entrance, use_section_in_view, DEFAULT_SECTION_THRESHOLD};
use crate::motion::INTRO_ENTRANCE;

const HERO_IMAGE: &str = asset!("/images/galah-studio.svg");

/// Social links in display order, with the icon and label shown for each.
/// Behance is shown with the LinkedIn glyph.
pub const SOCIAL_LINKS: [(ExtraLink, IconId, &str); 4] = [
    (ExtraLink::Youtube, IconId::LucideYoutube, "YouTube"),
    (ExtraLink::Instagram, IconId::LucideInstagram, "Instagram"),
    (ExtraLink::X, IconId::LucideTwitter, "X"),
    (ExtraLink::Behance, IconId::LucideLinkedin, "Behance"),
];

#[function_component(Intro)]
pub fn intro() -> Html {
    let section_ref = use_section_in_view(SectionName::Home, DEFAULT_SECTION_THRESHOLD);
    let entered = use_entrance();

    html! {
        <section ref={section_ref} id={SectionName::Home.anchor()} class="intro">
            <div class="intro-inner">
                <h1 class="intro-title">{"Welcome to Galah Studio"}</h1>
                <p class="intro-subtitle">
                    {"We are a leading animation studio specializing in high-quality 2D animation and exceptional animation services."}
                </p>
                <div class="intro-image" style={INTRO_ENTRANCE.style(entered)}>
                    <img src={HERO_IMAGE} alt="Galah Studio" width="600" height="400" />
                </div>
                <div class="social-links">
                    { for SOCIAL_LINKS.iter().map(|(link, icon, label)| html! {
                        <OutboundLink key={link.key()} href={link.url()} class="social-link" aria_label={*label}>
                            <Icon icon_id={icon.clone()} width={"28"} height={"28"} />
                        </OutboundLink>
                    }) }
                </div>
                <OutboundLink href={ExtraLink::Cv.url()} class="cv-button">
                    {"Download CV"}
                    <Icon icon_id={IconId::LucideDownload} width={"18"} height={"18"} />
                </OutboundLink>
            </div>
        </section>
    }
}
