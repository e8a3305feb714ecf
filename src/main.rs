//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{KeyboardEvent, MouseEvent};

    use canvas_pong::platform::web;
    use canvas_pong::renderer::CanvasSurface;
    use canvas_pong::sim::GameState;
    use canvas_pong::{CancelToken, FrameDriver, PointerInput, Tuning};

    /// Id of the canvas element in index.html
    const CANVAS_ID: &str = "pong";

    /// Game instance holding all state
    struct Game {
        driver: FrameDriver,
        surface: CanvasSurface,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Canvas Pong starting...");

        let (canvas, ctx) = web::canvas_2d(CANVAS_ID)?;

        // The field takes the canvas's drawing-buffer size
        let tuning = Tuning {
            field_width: canvas.width() as f32,
            field_height: canvas.height() as f32,
            ..Tuning::default()
        };
        let seed = js_sys::Date::now() as u64;
        let pointer = PointerInput::new();
        let cancel = CancelToken::new();

        let game = Rc::new(RefCell::new(Game {
            driver: FrameDriver::new(
                GameState::with_tuning(tuning, seed),
                pointer.clone(),
                cancel.clone(),
            ),
            surface: CanvasSurface::new(ctx),
        }));

        log::info!(
            "Game initialized with seed: {} ({}x{})",
            seed,
            tuning.field_width,
            tuning.field_height
        );

        setup_input_handlers(&canvas, pointer, cancel)?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Canvas Pong running!");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &web_sys::HtmlCanvasElement,
        pointer: PointerInput,
        cancel: CancelToken,
    ) -> Result<(), JsValue> {
        // Mouse move - paddle follows pointer Y relative to the canvas
        {
            let pointer = pointer.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                pointer.set(web::pointer_y_in(&canvas_clone, event.client_y()));
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse leave - forget the position so the paddle holds where it is
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                pointer.clear();
            });
            canvas.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Escape stops the loop
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key() == "Escape" && !cancel.is_cancelled() {
                    log::info!("Stop requested");
                    cancel.cancel();
                }
            });
            web::window()?
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, frame loop cannot continue");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let running = {
            let mut g = game.borrow_mut();
            let Game { driver, surface } = &mut *g;
            driver.frame(surface)
        };

        if running {
            request_animation_frame(game);
        } else {
            game.borrow().driver.log_stopped();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::renderer::RecordingSurface;
    use canvas_pong::sim::GameState;
    use canvas_pong::{CancelToken, FrameDriver, PointerInput, Tuning};

    env_logger::init();
    log::info!("Canvas Pong (native, headless) starting...");

    let opts = match native::parse_args(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("{}", native::USAGE);
            std::process::exit(2);
        }
    };

    let tuning = opts
        .tuning
        .as_deref()
        .map(Tuning::load_or_default)
        .unwrap_or_default();
    log::info!(
        "Seed {}, {} frames, field {}x{}",
        opts.seed,
        opts.frames,
        tuning.field_width,
        tuning.field_height
    );

    let pointer = PointerInput::new();
    let cancel = CancelToken::new();
    let mut driver = FrameDriver::new(
        GameState::with_tuning(tuning, opts.seed),
        pointer.clone(),
        cancel.clone(),
    );
    let mut surface = RecordingSurface::new();

    // Scripted player: pointer trails the ball center
    while !cancel.is_cancelled() {
        pointer.set(driver.state().ball.center().y);
        surface.clear();
        driver.frame(&mut surface);
        if driver.frames() >= opts.frames {
            cancel.cancel();
        }
    }

    let score = driver.state().score;
    println!(
        "After {} frames: player {} - AI {}",
        driver.frames(),
        score.human,
        score.opponent
    );
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    pub const USAGE: &str = "usage: canvas-pong [--seed <u64>] [--frames <n>] [--tuning <path>]";

    #[derive(Debug, PartialEq)]
    pub struct Options {
        pub seed: u64,
        pub frames: u64,
        pub tuning: Option<String>,
    }

    impl Default for Options {
        fn default() -> Self {
            Self {
                seed: 12345,
                frames: 3_600,
                tuning: None,
            }
        }
    }

    pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, String> {
        let mut opts = Options::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let mut value = || args.next().ok_or_else(|| format!("missing value for {arg}"));
            match arg.as_str() {
                "--seed" => {
                    opts.seed = value()?
                        .parse()
                        .map_err(|e| format!("bad --seed: {e}"))?
                }
                "--frames" => {
                    opts.frames = value()?
                        .parse()
                        .map_err(|e| format!("bad --frames: {e}"))?
                }
                "--tuning" => opts.tuning = Some(value()?),
                other => return Err(format!("unknown argument: {other}")),
            }
        }
        Ok(opts)
    }

}
