use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::config::RainConfig;
use crate::rain::engine::RainLoop;
use crate::rain::surface::CanvasSurface;
use crate::rain::timer::IntervalScheduler;

/// Full-viewport falling glyph backdrop. Runs for as long as it is mounted.
#[function_component(MatrixBackground)]
pub fn matrix_background() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let rain = match CanvasSurface::acquire(canvas_ref.cast::<HtmlCanvasElement>()) {
                    Ok(surface) => Some(RainLoop::start(
                        surface,
                        &IntervalScheduler,
                        RainConfig::default(),
                        StdRng::from_entropy(),
                    )),
                    Err(e) => {
                        log::warn!("Background effect disabled: {}", e);
                        None
                    }
                };

                move || {
                    if let Some(rain) = rain {
                        rain.stop();
                    }
                }
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="rain-canvas" aria-hidden="true"></canvas>
    }
}
