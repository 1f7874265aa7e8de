//! Pixel Grid entry point
//!
//! Wires DOM events to the editor and runs the animation timers.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_editor {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, EventTarget, HtmlElement, HtmlInputElement, KeyboardEvent, MouseEvent, TouchEvent};

    use pixel_grid::editor::AnimationStep;
    use pixel_grid::persistence;
    use pixel_grid::platform::{DomRenderer, LocalStore, Shortcut, notify, report};
    use pixel_grid::renderer::Renderer;
    use pixel_grid::{CellPos, Color, Editor, EditorError, PaintMode, Settings};

    /// Editor instance holding all state
    struct App {
        editor: Editor,
        renderer: DomRenderer,
        store: Option<LocalStore>,
        settings: Settings,
    }

    impl App {
        /// Push queued cell changes to the DOM
        fn flush(&mut self) {
            let ops = self.editor.take_render_ops();
            self.renderer.apply(ops);
        }

        /// Map a viewport position to a grid cell
        fn cell_at(&self, client_x: f64, client_y: f64) -> CellPos {
            let container = self.renderer.container();
            let rect = container.get_bounding_client_rect();
            // Cells start inside the container border
            let left = rect.left() + container.client_left() as f64;
            let top = rect.top() + container.client_top() as f64;
            let point = Vec2::new((client_x - left) as f32, (client_y - top) as f32);
            CellPos::from_point(point, self.renderer.cell_px() as f32)
        }

        fn pick_color(&mut self, value: String) {
            let color = Color::new(value);
            self.editor.set_color(color.clone());
            if self.settings.remember_color {
                self.settings.default_color = color;
                self.settings.save();
            }
        }

        fn save(&mut self) -> Result<(), EditorError> {
            let store = self.store.as_mut().ok_or_else(storage_unavailable)?;
            self.editor.save(store)
        }

        fn load(&mut self) -> Result<(), EditorError> {
            let store = self.store.as_ref().ok_or_else(storage_unavailable)?;
            self.editor.load(store)?;
            self.flush();
            Ok(())
        }

        fn clear_saved(&mut self) -> Result<(), EditorError> {
            let store = self.store.as_mut().ok_or_else(storage_unavailable)?;
            persistence::clear(store)
        }
    }

    fn storage_unavailable() -> EditorError {
        EditorError::Storage("localStorage unavailable".into())
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Pixel Grid starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let container: HtmlElement = document
            .get_element_by_id("grid")
            .expect("no grid element")
            .dyn_into()
            .expect("grid is not an HTML element");

        let settings = Settings::load();
        let store = match LocalStore::open() {
            Ok(store) => Some(store),
            Err(e) => {
                log::warn!("Save/load disabled: {e}");
                None
            }
        };

        let editor = Editor::with_settings(&settings);
        let renderer = DomRenderer::new(document.clone(), container.clone(), settings.cell_px);

        if let Some(picker) = input(&document, "colorPicker") {
            picker.set_value(editor.color().as_str());
        }
        if let Some(size) = input(&document, "gridSize") {
            size.set_value(&editor.grid().size().to_string());
        }

        let app = Rc::new(RefCell::new(App {
            editor,
            renderer,
            store,
            settings,
        }));
        app.borrow_mut().flush();

        setup_toolbar(&document, app.clone());
        setup_pointer_handlers(&document, &container, app.clone());
        setup_keyboard(&window, app);

        log::info!("Pixel Grid running!");
    }

    fn input(document: &Document, id: &str) -> Option<HtmlInputElement> {
        document.get_element_by_id(id)?.dyn_into().ok()
    }

    fn listen(target: &EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
        let closure = Closure::<dyn FnMut(_)>::new(handler);
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn on_click(document: &Document, id: &str, handler: impl FnMut(web_sys::Event) + 'static) {
        match document.get_element_by_id(id) {
            Some(el) => listen(&el, "click", handler),
            None => log::debug!("No #{id} in page"),
        }
    }

    fn setup_toolbar(document: &Document, app: Rc<RefCell<App>>) {
        // Color picker (implicitly switches to draw mode)
        if let Some(picker) = input(document, "colorPicker") {
            let app = app.clone();
            let picker_clone = picker.clone();
            listen(&picker, "input", move |_event| {
                app.borrow_mut().pick_color(picker_clone.value());
            });
        }

        {
            let app = app.clone();
            on_click(document, "eraserButton", move |_event| {
                app.borrow_mut().editor.set_mode(PaintMode::Erase);
            });
        }

        {
            let app = app.clone();
            on_click(document, "drawButton", move |_event| {
                app.borrow_mut().editor.set_mode(PaintMode::Draw);
            });
        }

        {
            let app = app.clone();
            on_click(document, "resetButton", move |_event| {
                let mut a = app.borrow_mut();
                a.editor.reset_all();
                a.flush();
            });
        }

        {
            let app = app.clone();
            let size_input = input(document, "gridSize");
            on_click(document, "setSizeButton", move |_event| {
                let value = size_input.as_ref().map(|i| i.value()).unwrap_or_default();
                let result = {
                    let mut a = app.borrow_mut();
                    let result = a.editor.resize_from_input(&value);
                    a.flush();
                    result
                };
                if let Err(e) = result {
                    report(&e);
                }
            });
        }

        {
            let app = app.clone();
            on_click(document, "saveButton", move |_event| {
                let result = app.borrow_mut().save();
                match result {
                    Ok(()) => notify("Grid saved!"),
                    Err(e) => report(&e),
                }
            });
        }

        {
            let app = app.clone();
            let size_input = input(document, "gridSize");
            on_click(document, "loadButton", move |_event| {
                let result = app.borrow_mut().load();
                match result {
                    Ok(()) => {
                        if let Some(size_input) = &size_input {
                            size_input.set_value(&app.borrow().editor.grid().size().to_string());
                        }
                        notify("Grid loaded successfully!");
                    }
                    Err(e) => report(&e),
                }
            });
        }

        {
            let app = app.clone();
            on_click(document, "clearSaveButton", move |_event| {
                let result = app.borrow_mut().clear_saved();
                match result {
                    Ok(()) => notify("Saved grid deleted."),
                    Err(e) => report(&e),
                }
            });
        }

        on_click(document, "animateButton", move |_event| {
            start_animation(app.clone());
        });
    }

    /// Queue one timer per cell; stale timers are ignored by the editor
    fn start_animation(app: Rc<RefCell<App>>) {
        let steps = app.borrow_mut().editor.animate();
        let Some(window) = web_sys::window() else {
            return;
        };
        for step in steps {
            schedule_step(&window, app.clone(), step);
        }
    }

    fn schedule_step(window: &web_sys::Window, app: Rc<RefCell<App>>, step: AnimationStep) {
        let delay = step.delay_ms as i32;
        let closure = Closure::once(move || {
            let mut a = app.borrow_mut();
            if a.editor.apply_animation_step(&step) {
                a.flush();
            }
        });
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay,
        );
        closure.forget();
    }

    fn setup_pointer_handlers(document: &Document, container: &HtmlElement, app: Rc<RefCell<App>>) {
        // Mouse down - start painting
        {
            let app = app.clone();
            listen(container, "mousedown", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                event.prevent_default();
                let mut a = app.borrow_mut();
                let pos = a.cell_at(event.client_x() as f64, event.client_y() as f64);
                a.editor.pointer_down(pos);
                a.flush();
            });
        }

        // Mouse move - paint while held
        {
            let app = app.clone();
            listen(container, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let mut a = app.borrow_mut();
                if !a.editor.is_pointer_down() {
                    return;
                }
                let pos = a.cell_at(event.client_x() as f64, event.client_y() as f64);
                a.editor.pointer_move(pos);
                a.flush();
            });
        }

        // Touch start/move behave like mouse down/move
        {
            let app = app.clone();
            listen(container, "touchstart", move |event| {
                let Some(event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut a = app.borrow_mut();
                    let pos = a.cell_at(touch.client_x() as f64, touch.client_y() as f64);
                    a.editor.pointer_down(pos);
                    a.flush();
                }
            });
        }

        {
            let app = app.clone();
            listen(container, "touchmove", move |event| {
                let Some(event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut a = app.borrow_mut();
                    let pos = a.cell_at(touch.client_x() as f64, touch.client_y() as f64);
                    a.editor.pointer_move(pos);
                    a.flush();
                }
            });
        }

        // Release anywhere on the page ends the stroke
        for event in ["mouseup", "touchend", "touchcancel"] {
            let app = app.clone();
            listen(document, event, move |_event| {
                app.borrow_mut().editor.pointer_up();
            });
        }
    }

    fn setup_keyboard(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        listen(window, "keydown", move |event| {
            // Leave typing in the size box alone
            if event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .is_some()
            {
                return;
            }
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let modified = event.ctrl_key() || event.meta_key() || event.alt_key();
            let Some(shortcut) = Shortcut::from_key(&event.key(), modified, event.repeat()) else {
                return;
            };
            match shortcut {
                Shortcut::Erase => app.borrow_mut().editor.set_mode(PaintMode::Erase),
                Shortcut::Draw => app.borrow_mut().editor.set_mode(PaintMode::Draw),
                Shortcut::Animate => start_animation(app.clone()),
                Shortcut::StopAnimation => app.borrow_mut().editor.cancel_animation(),
                Shortcut::Reset => {
                    let mut a = app.borrow_mut();
                    a.editor.reset_all();
                    a.flush();
                }
            }
        });
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_editor::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pixel Grid (native) starting...");
    log::info!("The editor UI runs in the browser - run with `trunk serve` for the web version");

    if let Err(e) = headless_session() {
        pixel_grid::platform::report(&e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Paint, save, clear and reload a small grid against an in-memory store
#[cfg(not(target_arch = "wasm32"))]
fn headless_session() -> Result<(), pixel_grid::EditorError> {
    use pixel_grid::persistence::MemoryStore;
    use pixel_grid::renderer::{CellBuffer, Renderer};
    use pixel_grid::{CellPos, Color, Editor};

    let mut editor = Editor::new(8);
    let mut view = CellBuffer::default();
    let mut store = MemoryStore::new();

    editor.set_color(Color::from("#112233"));
    editor.pointer_down(CellPos::new(1, 1));
    for col in 2..7 {
        editor.pointer_move(CellPos::new(1, col));
    }
    editor.pointer_up();
    editor.save(&mut store)?;
    pixel_grid::platform::notify("Grid saved!");

    editor.reset_all();
    editor.load(&store)?;
    pixel_grid::platform::notify("Grid loaded successfully!");

    view.apply(editor.take_render_ops());
    println!("{}", view.to_ascii());
    Ok(())
}
