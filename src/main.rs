//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement, KeyboardEvent};

    use brick_breaker::platform::web::{AlertNotifier, LocalStorage};
    use brick_breaker::renderer::vertex::css_color;
    use brick_breaker::renderer::{Frame, RenderState};
    use brick_breaker::sim::{Key, KeyEdge};
    use brick_breaker::{Game, GameConfig};

    /// Game + rendering state shared by the frame and key callbacks
    struct App {
        game: Game<LocalStorage, AlertNotifier>,
        render_state: Option<RenderState>,
        /// One overlay element per HUD text line
        hud_lines: Vec<HtmlElement>,
    }

    impl App {
        /// Paint the frame, then update (a round end alerts and resets inside update)
        fn frame(&mut self) {
            let Self {
                game,
                render_state,
                hud_lines,
            } = self;
            game.frame_with(|frame| {
                if let Some(render_state) = render_state {
                    render(render_state, frame);
                }
                update_hud(hud_lines, frame);
            });
        }
    }

    fn render(render_state: &mut RenderState, frame: &Frame) {
        match render_state.render(frame) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => {
                render_state.resize(render_state.size.0, render_state.size.1);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }

    /// Paint text commands as absolutely positioned DOM elements
    fn update_hud(hud_lines: &mut Vec<HtmlElement>, frame: &Frame) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(hud) = document.get_element_by_id("hud") else {
            return;
        };

        for (i, (text, pos, size_px, color)) in frame.texts().enumerate() {
            if i >= hud_lines.len() {
                let Some(el) = document
                    .create_element("div")
                    .ok()
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                else {
                    return;
                };
                let _ = hud.append_child(&el);
                hud_lines.push(el);
            }

            let el = &hud_lines[i];
            let style = el.style();
            let _ = style.set_property("position", "absolute");
            let _ = style.set_property("left", &format!("{}px", pos.x));
            // Text positions are baselines
            let _ = style.set_property("top", &format!("{}px", pos.y - size_px));
            let _ = style.set_property("font", &format!("{}px Arial", size_px));
            let _ = style.set_property("color", &css_color(color));
            if el.text_content().as_deref() != Some(text) {
                el.set_text_content(Some(text));
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Game coordinates are CSS pixels; the backing buffer is scaled by DPR
        let css_w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let css_h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);
        let dpr = window.device_pixel_ratio();
        let width = (css_w * dpr) as u32;
        let height = (css_h * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let storage = LocalStorage::new();
        let config = GameConfig::load(&storage);
        let seed = js_sys::Date::now() as u64;
        let game = Game::new(
            config,
            glam::Vec2::new(css_w as f32, css_h as f32),
            storage,
            AlertNotifier,
            seed,
        );
        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;

        let app = Rc::new(RefCell::new(App {
            game,
            render_state: Some(render_state),
            hud_lines: Vec::new(),
        }));

        setup_input_handlers(app.clone());

        request_animation_frame(app);

        log::info!("Brick Breaker running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        for (event_name, edge) in [("keydown", KeyEdge::Pressed), ("keyup", KeyEdge::Released)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    event.prevent_default();
                    app.borrow_mut().game.key(key, edge);
                }
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::consts::MAX_FRAMES_PER_ROUND;
    use brick_breaker::game::run_headless;
    use brick_breaker::platform::LogNotifier;
    use brick_breaker::platform::native::FileStorage;
    use brick_breaker::sim::Autopilot;
    use brick_breaker::{Game, GameConfig};

    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode runs headless with the autopilot - run with `trunk serve` to play");

    // Usage: brick-breaker [ROUNDS] [STORE_PATH]
    let mut args = std::env::args().skip(1);
    let rounds = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);
    let store_path = args
        .next()
        .unwrap_or_else(|| "brick_breaker_store.json".to_string());

    let storage = match FileStorage::open(&store_path) {
        Ok(storage) => storage,
        Err(e) => {
            log::error!("Cannot open store {}: {}", store_path, e);
            std::process::exit(1);
        }
    };

    let config = GameConfig::load(&storage);
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let surface = glam::Vec2::new(1280.0, 720.0);

    log::info!("Best score store: {}", storage.path().display());
    let mut game = Game::new(config, surface, storage, LogNotifier, seed);
    let mut pilot = Autopilot::new();
    let summary = run_headless(&mut game, &mut pilot, rounds, MAX_FRAMES_PER_ROUND);

    println!(
        "{} rounds: {} won, {} lost, {} abandoned ({} frames), best score {}",
        summary.rounds,
        summary.wins,
        summary.losses,
        summary.abandoned,
        summary.frames,
        game.state.best_score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
