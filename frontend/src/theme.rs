use stylist::GlobalStyle;

use crate::error::StyleError;

/// Registers the page stylesheet. Keyframe names here are the ones the
/// `motion` presets refer to.
pub fn mount() -> Result<GlobalStyle, StyleError> {
    Ok(GlobalStyle::new(PAGE_CSS)?)
}

const PAGE_CSS: &str = r#"
html {
    scroll-behavior: smooth;
}
body {
    margin: 0;
    background: #000;
    color: #fff;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
a {
    color: inherit;
    text-decoration: none;
}
.mono {
    font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace;
}
.tone-white { color: #fff; }
.tone-red { color: #f87171; }
.tone-orange { color: #f97316; }
.tone-yellow { color: #facc15; }
.tone-green { color: #4ade80; }
.tone-cyan { color: #22d3ee; }
.tone-purple { color: #c084fc; }
.tone-blue { color: #3b82f6; }

@keyframes rise-in {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes zoom-in {
    from { opacity: 0; transform: scale(0.8); }
    to { opacity: 1; transform: scale(1); }
}
@keyframes scan-line {
    0% { transform: translateX(-100%); opacity: 0; }
    50% { opacity: 1; }
    100% { transform: translateX(100%); opacity: 0; }
}
@keyframes breathe {
    0% { transform: scale(1); }
    50% { transform: scale(1.05); }
    100% { transform: scale(1); }
}
@keyframes pulse-ring {
    from { transform: scale(1); opacity: 1; }
    to { transform: scale(2.5); opacity: 0; }
}
@keyframes node-pulse {
    0% { transform: scale(1); opacity: 0.7; }
    50% { transform: scale(1.2); opacity: 1; }
    100% { transform: scale(1); opacity: 0.7; }
}
@keyframes link-draw {
    from { stroke-dashoffset: 200; opacity: 0; }
    to { stroke-dashoffset: 0; opacity: 0.6; }
}
@keyframes blink {
    0% { opacity: 1; }
    50% { opacity: 0.3; }
    100% { opacity: 1; }
}

.hover-fx {
    display: block;
    transition: transform 300ms ease-out;
}
.hover-fx:hover {
    transform: translateY(var(--hover-lift, 0px)) scale(var(--hover-scale, 1));
}
.hover-fx:active {
    transform: scale(var(--tap-scale, 1));
}
.reveal {
    opacity: 0;
}
.reveal.revealed {
    opacity: 1;
}

.rain-canvas {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    pointer-events: none;
    opacity: 0.1;
}
.cyber-grid {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    bottom: 0;
    pointer-events: none;
    opacity: 0.2;
    background-image: linear-gradient(rgba(239, 68, 68, 0.15) 1px, transparent 1px), linear-gradient(90deg, rgba(239, 68, 68, 0.15) 1px, transparent 1px);
    background-size: 50px 50px;
}
.catalog-page {
    position: relative;
    min-height: 100vh;
    overflow: hidden;
    background: #000;
}

.top-nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    backdrop-filter: blur(24px);
    border-bottom: 1px solid rgba(239, 68, 68, 0.2);
}
.nav-content {
    max-width: 1280px;
    margin: 0 auto;
    padding: 16px 24px;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.nav-brand {
    display: flex;
    align-items: center;
    gap: 12px;
}
.nav-brand .icon {
    font-size: 32px;
    color: #ef4444;
    animation: blink 2s ease-in-out infinite;
}
.nav-brand-name {
    font-size: 24px;
    font-weight: 700;
}
.nav-brand-tag {
    font-size: 12px;
    letter-spacing: 0.3em;
    color: #f87171;
}
.nav-links {
    display: flex;
    align-items: center;
    gap: 32px;
}
.nav-link {
    position: relative;
    color: #d1d5db;
    font-size: 14px;
    letter-spacing: 0.1em;
}
.nav-link:hover {
    color: #f87171;
}
.nav-underline {
    position: absolute;
    bottom: -2px;
    left: 0;
    width: 0;
    height: 2px;
    background: #ef4444;
    transition: width 300ms;
}
.nav-link:hover .nav-underline {
    width: 100%;
}
.burger-menu {
    display: none;
    background: none;
    border: none;
    cursor: pointer;
}
.burger-menu span {
    display: block;
    width: 24px;
    height: 2px;
    margin: 5px 0;
    background: #f87171;
}
@media (max-width: 768px) {
    .burger-menu {
        display: block;
    }
    .nav-links {
        display: none;
    }
    .nav-links.open {
        display: flex;
        flex-direction: column;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        padding: 24px;
        background: rgba(0, 0, 0, 0.95);
    }
}

.section {
    position: relative;
    padding: 80px 24px;
}
.section-inner {
    max-width: 1280px;
    margin: 0 auto;
}
.section-header {
    text-align: center;
    margin-bottom: 64px;
}
.section-eyebrow {
    display: flex;
    justify-content: center;
    align-items: center;
    gap: 16px;
    margin-bottom: 24px;
    font-size: 14px;
    letter-spacing: 0.3em;
}
.eyebrow-rule {
    height: 1px;
    width: 80px;
    background: currentColor;
    opacity: 0.6;
}
.section-title {
    font-size: 56px;
    font-weight: 700;
    line-height: 1.1;
    margin: 0 0 24px;
}
.section-lead {
    font-size: 20px;
    color: #d1d5db;
    max-width: 768px;
    margin: 0 auto;
}
.grid-2 {
    display: grid;
    grid-template-columns: repeat(2, minmax(0, 1fr));
    gap: 32px;
}
.grid-3 {
    display: grid;
    grid-template-columns: repeat(3, minmax(0, 1fr));
    gap: 32px;
}
@media (max-width: 1024px) {
    .grid-2 {
        grid-template-columns: minmax(0, 1fr);
    }
    .grid-3 {
        grid-template-columns: minmax(0, 1fr);
    }
    .section-title {
        font-size: 40px;
    }
}

.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    padding: 128px 24px 80px;
}
.scan-lines {
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    bottom: 0;
    overflow: hidden;
}
.scan-line {
    position: absolute;
    width: 100%;
    height: 1px;
    background: linear-gradient(to right, transparent, #ef4444, transparent);
    opacity: 0.3;
}
.hero-inner {
    position: relative;
    z-index: 10;
    width: 100%;
    max-width: 1280px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(2, minmax(0, 1fr));
    gap: 64px;
    align-items: center;
}
@media (max-width: 1024px) {
    .hero-inner {
        grid-template-columns: minmax(0, 1fr);
    }
}
.status-badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 8px 16px;
    margin-bottom: 24px;
    font-size: 14px;
    color: #f87171;
    background: rgba(0, 0, 0, 0.8);
    border: 1px solid rgba(239, 68, 68, 0.3);
}
.status-dot {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: #ef4444;
    animation: blink 2s ease-in-out infinite;
}
.hero-title {
    font-size: 72px;
    font-weight: 700;
    line-height: 1.1;
    margin: 0;
}
.hero-credit {
    font-size: 24px;
    color: #f97316;
}
.hero-lead {
    font-size: 20px;
    line-height: 1.6;
    color: #d1d5db;
    margin-top: 40px;
}
.terminal {
    padding: 16px;
    font-size: 14px;
    background: rgba(0, 0, 0, 0.6);
    border: 1px solid rgba(239, 68, 68, 0.2);
}
.terminal-prompt {
    display: flex;
    gap: 8px;
    margin-bottom: 8px;
    color: #4ade80;
}
.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
    margin-top: 32px;
}
.btn {
    position: relative;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    padding: 16px 32px;
    font-size: 14px;
    font-weight: 700;
    letter-spacing: 0.1em;
    overflow: hidden;
    cursor: pointer;
}
.btn-primary {
    color: #fff;
    background: linear-gradient(to right, #dc2626, #ea580c);
    border: 1px solid rgba(239, 68, 68, 0.5);
}
.btn-outline {
    color: #fff;
    border: 1px solid #4b5563;
    transition: color 300ms, border-color 300ms;
}
.btn-outline:hover {
    color: #f87171;
    border-color: #f87171;
}
.btn .icon-arrow-right {
    transition: transform 300ms;
}
.btn:hover .icon-arrow-right {
    transform: translateX(4px);
}

.threat-visual {
    position: relative;
    height: 384px;
    padding: 32px;
    overflow: hidden;
    background: rgba(0, 0, 0, 0.4);
    border: 1px solid rgba(239, 68, 68, 0.2);
}
.core-anchor {
    position: absolute;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
}
.core {
    position: relative;
}
.core-box {
    position: relative;
    width: 80px;
    height: 80px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 36px;
    background: linear-gradient(to bottom right, #dc2626, #ea580c);
    border: 1px solid #ef4444;
}
.corner {
    position: absolute;
    width: 16px;
    height: 16px;
    border-color: #f87171;
    border-style: solid;
    border-width: 0;
}
.corner-tl { top: -8px; left: -8px; border-top-width: 2px; border-left-width: 2px; }
.corner-tr { top: -8px; right: -8px; border-top-width: 2px; border-right-width: 2px; }
.corner-bl { bottom: -8px; left: -8px; border-bottom-width: 2px; border-left-width: 2px; }
.corner-br { bottom: -8px; right: -8px; border-bottom-width: 2px; border-right-width: 2px; }
.pulse-ring {
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    bottom: 0;
    border: 1px solid rgba(239, 68, 68, 0.3);
}
.visual-node {
    position: absolute;
    width: 40px;
    height: 40px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.6);
    border: 1px solid #4b5563;
}
.visual-links {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    pointer-events: none;
}
.visual-status {
    position: absolute;
    bottom: 16px;
    left: 16px;
    padding: 12px;
    font-size: 12px;
    background: rgba(0, 0, 0, 0.8);
    border: 1px solid rgba(239, 68, 68, 0.3);
}

.threat-card {
    position: relative;
    padding: 32px;
    overflow: hidden;
    cursor: pointer;
    background: rgba(0, 0, 0, 0.6);
    border: 1px solid rgba(239, 68, 68, 0.2);
    transition: border-color 500ms, background-color 500ms;
}
.threat-card:hover {
    border-color: rgba(239, 68, 68, 0.4);
}
.threat-card.expanded {
    background: rgba(0, 0, 0, 0.8);
    border-color: rgba(239, 68, 68, 0.6);
}
.card-dots {
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    bottom: 0;
    opacity: 0.1;
    background-image: radial-gradient(#ef4444 1px, transparent 1px);
    background-size: 16px 16px;
}
.card-body {
    position: relative;
    z-index: 10;
}
.card-head {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    margin-bottom: 16px;
}
.card-ordinal {
    font-size: 48px;
    font-weight: 700;
    color: rgba(239, 68, 68, 0.3);
}
.card-title {
    font-size: 24px;
    font-weight: 700;
    margin: 0 0 8px;
}
.card-glyph {
    font-size: 36px;
}
.card-description {
    color: #d1d5db;
    line-height: 1.6;
}
.card-details {
    display: grid;
    grid-template-rows: 0fr;
    opacity: 0;
    transition: grid-template-rows 300ms ease-out, opacity 300ms ease-out;
}
.threat-card.expanded .card-details {
    grid-template-rows: 1fr;
    opacity: 1;
}
.card-details-inner {
    min-height: 0;
    overflow: hidden;
}
.detail-block {
    padding-top: 16px;
    margin-top: 16px;
    border-top: 1px solid rgba(239, 68, 68, 0.2);
}
.detail-label {
    font-size: 14px;
    font-weight: 700;
    color: #f87171;
    margin: 0 0 8px;
}
.detail-text {
    font-size: 14px;
    line-height: 1.6;
    color: #d1d5db;
    margin: 0;
}
.stage-list {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
    list-style: none;
    padding: 0;
    margin: 12px 0 0;
    font-size: 12px;
    color: #fca5a5;
}
.impact-tags {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
    padding-top: 16px;
}
.impact-tag {
    padding: 4px 12px;
    font-size: 12px;
    color: #fca5a5;
    background: rgba(239, 68, 68, 0.2);
    border: 1px solid rgba(239, 68, 68, 0.4);
}
.card-foot {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-top: 16px;
    padding-top: 16px;
    border-top: 1px solid rgba(239, 68, 68, 0.1);
    font-size: 12px;
    color: #9ca3af;
}
.card-arrow {
    color: #f87171;
    transition: transform 300ms;
}
.threat-card.expanded .card-arrow {
    transform: rotate(180deg);
}

.briefing-card {
    position: relative;
    height: 100%;
    box-sizing: border-box;
    padding: 32px;
    overflow: hidden;
    background: rgba(0, 0, 0, 0.6);
    transition: border-color 500ms;
}
.briefing-vector {
    border: 1px solid rgba(249, 115, 22, 0.2);
}
.briefing-vector:hover {
    border-color: rgba(249, 115, 22, 0.4);
}
.briefing-vector .icon {
    font-size: 48px;
    color: #f97316;
    transition: transform 300ms;
}
.briefing-vector:hover .icon {
    transform: scale(1.1);
}
.briefing-strategy {
    border: 1px solid rgba(34, 197, 94, 0.2);
}
.briefing-strategy:hover {
    border-color: rgba(34, 197, 94, 0.4);
}
.strategy-badge {
    width: 64px;
    height: 64px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 32px;
    background: linear-gradient(to bottom right, #16a34a, #0d9488);
}
.briefing-title {
    font-size: 22px;
    font-weight: 700;
    margin: 16px 0 12px;
}
.briefing-text {
    color: #d1d5db;
    line-height: 1.6;
    margin: 0;
}

.cta-panel {
    position: relative;
    max-width: 896px;
    margin: 0 auto;
    padding: 48px;
    overflow: hidden;
    text-align: center;
    background: linear-gradient(to right, rgba(220, 38, 38, 0.2), rgba(234, 88, 12, 0.2));
    border: 1px solid rgba(239, 68, 68, 0.3);
}
.cta-title {
    font-size: 36px;
    font-weight: 700;
    margin: 0 0 24px;
}
.cta-lead {
    font-size: 20px;
    color: #d1d5db;
    margin: 0 0 24px;
}
.cta-action {
    display: inline-block;
}

.site-footer {
    position: relative;
    padding: 48px 24px;
    border-top: 1px solid rgba(239, 68, 68, 0.2);
}
.footer-heading {
    font-weight: 700;
    margin: 0 0 16px;
}
.footer-text {
    font-size: 14px;
    color: #9ca3af;
}
.footer-links {
    list-style: none;
    padding: 0;
    margin: 0;
    font-size: 14px;
    color: #9ca3af;
}
.footer-links li {
    margin-bottom: 8px;
}
.footer-links a:hover {
    color: #f87171;
}
.footer-legal {
    margin-top: 32px;
    padding-top: 32px;
    text-align: center;
    font-size: 14px;
    color: #6b7280;
    border-top: 1px solid rgba(239, 68, 68, 0.2);
}
"#;
