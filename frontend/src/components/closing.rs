use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::reveal::Reveal;
use crate::content::{anchor_for, Icon};
use crate::motion::{Hover, PANEL_ENTRANCE};

const CTA_HOVER: Hover = Hover::grow(1.05, 0.95);

#[function_component(CtaSection)]
pub fn cta_section() -> Html {
    html! {
        <section class="section">
            <Reveal motion={PANEL_ENTRANCE}>
                <div class="cta-panel">
                    <div class="card-dots"></div>
                    <div class="card-body">
                        <h2 class="cta-title mono">{"PROTECT YOUR ORGANIZATION"}</h2>
                        <p class="cta-lead mono">
                            {"Implement comprehensive cybersecurity measures and stay ahead of emerging threats."}
                        </p>
                        <div class="cta-action hover-fx" style={CTA_HOVER.css_vars()}>
                            <a href={anchor_for("PREVENTION")} class="btn btn-primary mono">
                                <span>{"GET SECURITY ASSESSMENT"}</span>
                                <IconGlyph icon={Icon::Arrow} />
                            </a>
                        </div>
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let resources = [
        ("Threat Catalog", "THREATS"),
        ("Attack Vectors", "VECTORS"),
        ("Prevention Guide", "PREVENTION"),
    ];

    html! {
        <footer class="site-footer">
            <div class="section-inner">
                <div class="grid-3">
                    <div>
                        <h4 class="footer-heading mono">{"CYBER THREATS"}</h4>
                        <p class="footer-text">{"Advanced cybersecurity threat intelligence and defense strategies."}</p>
                    </div>

                    <div>
                        <h4 class="footer-heading mono">{"RESOURCES"}</h4>
                        <ul class="footer-links mono">
                            { for resources.iter().map(|(label, section)| html! {
                                <li><a href={anchor_for(section)}>{*label}</a></li>
                            }) }
                        </ul>
                    </div>

                    <div id="contact">
                        <h4 class="footer-heading mono">{"CONTACT"}</h4>
                        <p class="footer-text mono">{"For security assistance and threat intelligence, contact our team."}</p>
                    </div>
                </div>

                <p class="footer-legal mono">
                    {"© 2026 Cyber Threat Intelligence. All rights reserved. | Stay Secure"}
                </p>
            </div>
        </footer>
    }
}
