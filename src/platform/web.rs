//! Browser glue
//!
//! Owns the canvas element of the active screen, its pointer handlers and
//! the one-shot tick timer. Every screen transition removes the old canvas
//! (and its handlers) and mounts a new one.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, MouseEvent};

use crate::consts::*;
use crate::error::PongError;
use crate::renderer::draw::draw_scaled;
use crate::screen::{Screen, Step};
use crate::settings::Settings;

type Handler = Closure<dyn FnMut(MouseEvent)>;

/// A canvas element attached to the page, with its event handlers
struct Mount {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pixel_ratio: f32,
    handlers: Vec<(&'static str, Handler)>,
}

impl Mount {
    /// Create and attach a canvas sized to the field
    fn create(
        document: &Document,
        parent: &HtmlElement,
        settings: &Settings,
    ) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;

        let pixel_ratio = web_sys::window()
            .map(|w| w.device_pixel_ratio() as f32)
            .filter(|r| *r > 0.0)
            .unwrap_or(1.0);
        canvas.set_width((FIELD_WIDTH * pixel_ratio) as u32);
        canvas.set_height((FIELD_HEIGHT * pixel_ratio) as u32);

        let style = canvas.style();
        style.set_property("width", &format!("{}px", FIELD_WIDTH))?;
        style.set_property("height", &format!("{}px", FIELD_HEIGHT))?;
        style.set_property("display", "block")?;
        style.set_property("border", &format!("1px solid {}", settings.palette.background))?;
        style.set_property("margin", "0px auto 0 auto")?;
        style.set_property("background-color", &settings.palette.background)?;

        parent.append_child(&canvas)?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or(PongError::CanvasUnsupported)?
            .dyn_into()
            .map_err(|_| PongError::CanvasUnsupported)?;

        Ok(Self {
            canvas,
            ctx,
            pixel_ratio,
            handlers: Vec::new(),
        })
    }

    fn listen(&mut self, event: &'static str, handler: Handler) -> Result<(), JsValue> {
        self.canvas
            .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())?;
        self.handlers.push((event, handler));
        Ok(())
    }

    /// Detach handlers and remove the canvas from the page.
    ///
    /// The handlers are handed back instead of dropped: the click handler
    /// that triggered the transition may still be running.
    fn remove(self) -> Vec<Handler> {
        for (event, handler) in &self.handlers {
            let _ = self
                .canvas
                .remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
        }
        self.canvas.remove();
        self.handlers.into_iter().map(|(_, h)| h).collect()
    }
}

/// The running game: active screen plus the canvas showing it
struct App {
    settings: Settings,
    document: Document,
    parent: HtmlElement,
    screen: Screen,
    mount: Option<Mount>,
    /// Handlers of the previous canvas, kept alive for one transition
    retired: Vec<Handler>,
}

type SharedApp = Rc<RefCell<App>>;

impl App {
    fn render(&mut self) {
        if let Some(mount) = self.mount.as_mut() {
            let ratio = mount.pixel_ratio;
            draw_scaled(&mut mount.ctx, self.screen.state(), &self.settings, ratio);
        }
    }
}

/// Replace the active screen, tearing down the old one and its canvas
fn enter(app: &SharedApp, screen: Screen) -> Result<(), JsValue> {
    let mut a = app.borrow_mut();
    a.screen.tear_down();
    a.retired.clear();
    if let Some(old) = a.mount.take() {
        a.retired = old.remove();
    }
    log::info!("Entering {} screen", screen.state().name());
    a.screen = screen;
    drop(a);

    mount_current(app)
}

/// Mount a canvas for the current screen, draw it, and arm the tick loop
fn mount_current(app: &SharedApp) -> Result<(), JsValue> {
    let mut a = app.borrow_mut();
    let screen = &a.screen;
    let target = screen.paddle_target().clone();
    let wants_ticks = screen.wants_ticks();

    let mut mount = Mount::create(&a.document, &a.parent, &a.settings)?;

    // Pointer moves write straight into this screen's paddle slot
    mount.listen(
        "mousemove",
        Closure::new(move |event: MouseEvent| {
            target.track_pointer(event.offset_x() as f32);
        }),
    )?;

    let click_app = app.clone();
    mount.listen(
        "click",
        Closure::new(move |event: MouseEvent| {
            let point = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
            on_click(&click_app, point);
        }),
    )?;

    a.mount = Some(mount);
    a.render();
    let interval = a.settings.tick_interval_ms;
    drop(a);

    if wants_ticks {
        schedule_tick(app, interval)?;
    }
    Ok(())
}

fn on_click(app: &SharedApp, point: Vec2) {
    let next = app.borrow_mut().screen.on_click(point);
    if let Some(next) = next {
        if let Err(e) = enter(app, next) {
            log::error!("Screen transition failed: {:?}", e);
        }
    }
}

/// Arm a one-shot timer for the next tick of the current screen
fn schedule_tick(app: &SharedApp, interval_ms: u32) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or(PongError::Invariant("no window"))?;
    let token = app.borrow().screen.cancel_token().clone();
    let app = app.clone();

    let callback = Closure::once_into_js(move || {
        if token.is_cancelled() {
            log::warn!("Dropping tick for a torn-down screen");
            return;
        }
        if let Err(e) = run_tick(&app) {
            log::error!("Tick failed: {:?}", e);
        }
    });

    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        interval_ms as i32,
    )?;
    Ok(())
}

fn run_tick(app: &SharedApp) -> Result<(), JsValue> {
    let step = app.borrow_mut().screen.on_tick();
    match step {
        Step::Continue => {
            let interval = {
                let mut a = app.borrow_mut();
                a.render();
                a.settings.tick_interval_ms
            };
            schedule_tick(app, interval)
        }
        Step::Transition(next) => enter(app, next),
        Step::Idle => Ok(()),
        Step::Cancelled => {
            log::warn!("Tick reached a torn-down screen");
            Ok(())
        }
    }
}

/// Page-load entry point: set up logging and show the Start screen
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    // Install the logger before reading settings so their warnings show up,
    // then narrow it to the configured level
    if console_log::init_with_level(log::Level::Trace).is_err() {
        web_sys::console::warn_1(&"Logger already initialised".into());
    }
    log::set_max_level(log::LevelFilter::Info);
    let settings = Settings::load();
    log::set_max_level(settings.log_level().to_level_filter());

    log::info!("Canvas Pong starting...");

    let window = web_sys::window().ok_or(PongError::Invariant("no window"))?;
    let document = window
        .document()
        .ok_or(PongError::Invariant("no document"))?;
    let parent = document
        .body()
        .ok_or(PongError::Invariant("document has no body"))?;

    let app = Rc::new(RefCell::new(App {
        settings,
        document,
        parent,
        screen: Screen::start(),
        mount: None,
        retired: Vec::new(),
    }));

    mount_current(&app)?;
    log::info!("Canvas Pong running!");
    Ok(())
}
