//! Canvas Pong entry point
//!
//! In the browser this mounts the Start screen. Natively it plays a short
//! headless round with a scripted pointer, which exercises the simulation,
//! screen machine and renderer without a canvas.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    canvas_pong::platform::web::run().inspect_err(|e| log::error!("Startup failed: {:?}", e))
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    let path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let settings = canvas_pong::Settings::load_from(path.as_deref());

    let summary = headless::play(&settings, 2_000);
    println!(
        "\nHeadless round: {} ticks, final score {}",
        summary.ticks, summary.final_score
    );
    for line in &summary.final_texts {
        println!("  {}", line);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use canvas_pong::input::hot_zone;
    use canvas_pong::renderer::{RecordingSurface, draw};
    use canvas_pong::screen::{Screen, Step};
    use canvas_pong::sim::GameState;
    use canvas_pong::{PongError, Settings};

    pub struct Summary {
        pub ticks: u64,
        pub final_score: u32,
        /// Text drawn on the game-over screen
        pub final_texts: Vec<String>,
    }

    /// Click Start, follow the ball for `tracking_ticks`, then let it go.
    pub fn play(settings: &Settings, tracking_ticks: u64) -> Summary {
        let mut surface = RecordingSurface::new();
        let mut screen = Screen::start();
        draw(&mut surface, screen.state(), settings);

        let button = (hot_zone().min + hot_zone().max) / 2.0;
        let mut screen = match screen.on_click(button) {
            Some(next) => next,
            None => {
                log::error!("{}", PongError::Invariant("Start button did not respond"));
                return Summary {
                    ticks: 0,
                    final_score: 0,
                    final_texts: Vec::new(),
                };
            }
        };

        let mut ticks = 0;
        loop {
            if let GameState::Playing(p) = screen.state() {
                let pointer = if ticks < tracking_ticks {
                    p.ball.pos.x
                } else {
                    // Park the paddle off the field so the next pass is a miss
                    -1000.0
                };
                screen.paddle_target().track_pointer(pointer);
            }

            match screen.on_tick() {
                Step::Continue => {
                    ticks += 1;
                    surface.reset();
                    draw(&mut surface, screen.state(), settings);
                }
                Step::Transition(next) => {
                    screen = next;
                    break;
                }
                Step::Idle | Step::Cancelled => break,
            }
        }

        surface.reset();
        draw(&mut surface, screen.state(), settings);

        Summary {
            ticks,
            final_score: screen.state().score(),
            final_texts: surface.texts().into_iter().map(String::from).collect(),
        }
    }
}
