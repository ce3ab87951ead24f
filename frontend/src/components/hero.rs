use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::content::{terminal_lines, Icon, LINK_ENDS, THREATS, VISUAL_NODES};
use crate::motion::{
    CORE_BREATHE, LINK_DRAW, NODE_PULSE, PULSE_RING, SCAN_LINE, SECTION_ENTRANCE, VISUAL_ENTRANCE,
};

const SCAN_LINE_COUNT: usize = 5;
const PULSE_RING_COUNT: usize = 3;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    html! {
        <section class="hero">
            <div class="scan-lines">
                { for (0..SCAN_LINE_COUNT).map(|i| html! {
                    <div
                        class="scan-line"
                        style={format!("top: {}%; {}", 20 + i * 15, SCAN_LINE.staggered(i).style())}
                    ></div>
                }) }
            </div>

            <div class="hero-inner">
                <div class="hero-copy">
                    <div class="hero-intro" style={SECTION_ENTRANCE.style()}>
                        <div class="status-badge mono">
                            <span class="status-dot"></span>
                            <span>{"THREAT ANALYSIS: ACTIVE"}</span>
                        </div>

                        <h1 class="hero-title mono">
                            <span class="tone-white">{"TYPES OF"}</span>
                            <br />
                            <span class="tone-red">{"CYBER ATTACKS"}</span>
                        </h1>
                        <p class="hero-credit mono">
                            {"by Manish Yadav under the guidance of"}
                            <br />
                            <span class="tone-blue">{"Dr. Hetal Thaker Ma'am"}</span>
                        </p>

                        <p class="hero-lead mono">
                            {"Comprehensive guide to modern cybersecurity threats, attack vectors, and defense strategies to protect your organization."}
                        </p>

                        <div class="terminal mono">
                            <div class="terminal-prompt">
                                <IconGlyph icon={Icon::Terminal} />
                                <span>{"threat-analysis@system:~$"}</span>
                            </div>
                            <div class="terminal-body">
                                { for terminal_lines().into_iter().map(|(tone, line)| html! {
                                    <div class={tone}>{line}</div>
                                }) }
                            </div>
                        </div>
                    </div>

                    <div class="hero-actions" style={SECTION_ENTRANCE.staggered(1).style()}>
                        <a href="#threats" class="btn btn-primary mono">
                            <span>{"LEARN THREATS"}</span>
                            <IconGlyph icon={Icon::Arrow} />
                        </a>
                        <a href="#prevention" class="btn btn-outline mono">
                            <IconGlyph icon={Icon::Play} />
                            <span>{"SECURITY TIPS"}</span>
                        </a>
                    </div>
                </div>

                <ThreatVisualization />
            </div>
        </section>
    }
}

#[function_component(ThreatVisualization)]
fn threat_visualization() -> Html {
    html! {
        <div class="threat-visual" style={VISUAL_ENTRANCE.delayed(500).style()}>
            <div class="core-anchor">
                <div class="core" style={CORE_BREATHE.style()}>
                    <div class="core-box">
                        <IconGlyph icon={Icon::Alert} />
                        <span class="corner corner-tl"></span>
                        <span class="corner corner-tr"></span>
                        <span class="corner corner-bl"></span>
                        <span class="corner corner-br"></span>
                    </div>
                    { for (0..PULSE_RING_COUNT).map(|i| html! {
                        <div class="pulse-ring" style={PULSE_RING.staggered(i).style()}></div>
                    }) }
                </div>
            </div>

            { for VISUAL_NODES.iter().enumerate().map(|(i, node)| html! {
                <div
                    class={classes!("visual-node", node.tone)}
                    style={format!("{} {}", node.position, NODE_PULSE.staggered(i).style())}
                    title={node.label}
                >
                    <IconGlyph icon={node.icon} />
                </div>
            }) }

            <svg class="visual-links">
                <defs>
                    <linearGradient id="link-gradient" x1="0%" y1="0%" x2="100%" y2="0%">
                        <stop offset="0%" stop-color="#ef4444" />
                        <stop offset="100%" stop-color="#f97316" />
                    </linearGradient>
                </defs>
                { for LINK_ENDS.iter().enumerate().map(|(i, (x2, y2))| html! {
                    <line
                        x1="50%"
                        y1="50%"
                        x2={*x2}
                        y2={*y2}
                        stroke="url(#link-gradient)"
                        stroke-width="1"
                        stroke-dasharray="4,4"
                        style={LINK_DRAW.staggered(i).style()}
                    />
                }) }
            </svg>

            <div class="visual-status mono">
                <div class="tone-red">{"THREAT LEVEL: CRITICAL"}</div>
                <div class="tone-yellow">{format!("ATTACK VECTORS: {}", THREATS.len())}</div>
                <div class="tone-green">{"DEFENSE READY: TRUE"}</div>
            </div>
        </div>
    }
}
