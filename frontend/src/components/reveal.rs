use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::motion::{observe_shared, Motion, RevealGate};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub motion: Motion,
    /// Position in a group of similar elements, used to stagger the start.
    #[prop_or_default]
    pub index: usize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Plays `motion` the first time the wrapped content scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let fired = *revealed;
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |fired: &bool| {
                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) if !*fired => {
                        let gate = Cell::new(RevealGate::default());
                        let check = Rc::new({
                            let window = window.clone();
                            move || {
                                let Some(element) = node.cast::<Element>() else {
                                    return;
                                };
                                let rect = element.get_bounding_client_rect();
                                let viewport_height = window
                                    .inner_height()
                                    .ok()
                                    .and_then(|h| h.as_f64())
                                    .unwrap_or(0.0);
                                if observe_shared(&gate, rect.top(), rect.bottom(), viewport_height) {
                                    revealed.set(true);
                                }
                            }
                        });

                        let scroll_callback = Closure::<dyn Fn()>::new({
                            let check = check.clone();
                            move || check()
                        });
                        if let Err(e) = window.add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        ) {
                            log::warn!("Could not watch scrolling: {:?}", e);
                        }

                        // Content already on screen at mount.
                        check();

                        Box::new(move || {
                            let _ = window.remove_event_listener_with_callback(
                                "scroll",
                                scroll_callback.as_ref().unchecked_ref(),
                            );
                        })
                    }
                    _ => Box::new(|| ()),
                };
                destructor
            },
            fired,
        );
    }

    let style = reveal_style(&props.motion, props.index, *revealed);

    html! {
        <div
            ref={node}
            class={classes!("reveal", (*revealed).then(|| "revealed"), props.class.clone())}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}

/// Inline animation for the wrapped element; empty until it is revealed.
fn reveal_style(motion: &Motion, index: usize, revealed: bool) -> String {
    if revealed {
        motion.staggered(index).style()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{CARD_ENTRANCE, SECTION_ENTRANCE};

    #[test]
    fn hidden_content_has_no_animation() {
        assert_eq!(reveal_style(&CARD_ENTRANCE, 3, false), "");
    }

    #[test]
    fn revealed_content_plays_staggered_motion() {
        assert_eq!(
            reveal_style(&CARD_ENTRANCE, 3, true),
            "animation: rise-in 600ms ease-out 300ms 1 normal both;"
        );
        assert_eq!(reveal_style(&SECTION_ENTRANCE, 0, true), SECTION_ENTRANCE.style());
    }

    #[test]
    fn scroll_checks_share_one_gate() {
        let gate = Cell::new(RevealGate::default());
        assert!(!observe_shared(&gate, 1400.0, 1700.0, 900.0));
        assert!(observe_shared(&gate, 600.0, 900.0, 900.0));
        assert!(observe_shared(&gate, -2000.0, -1700.0, 900.0));
        assert!(gate.get().fired());
    }
}
