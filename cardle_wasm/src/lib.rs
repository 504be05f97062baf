//! Browser bindings for `cardle`.
//!
//! [`Cardle`] owns a [`GameSession`] and forwards everything it observes to a
//! JavaScript renderer object. The renderer may define any of
//! `onCellChanged(row, col, ch)`, `onRowEvaluated(row, grades)`,
//! `onCellRevealed(row, col, grade)`, `onKeyboardUpdated(keys)`,
//! `onRowRejected(row)`, `onGameWon()` and `onGameLost()`. Missing methods
//! are skipped. Grades are passed as `"correct"`, `"present"` or `"absent"`.
//!
//! Drawing the board and timing the reveal stay on the JavaScript side: call
//! `revealNext()` from a timer until it returns false.

use cardle::{Catalog, GameSession, Grade, Input, KeyboardState, Observer, Response, Rules, Status};
use chrono::{DateTime, Utc};
use js_sys::{Array, Function, Object, Reflect};
use log::warn;
use wasm_bindgen::{prelude::*, JsCast};

// Optional small allocator for size
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Writes `msg` to the browser console. Does nothing outside a browser.
fn console_error(msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(error) = Reflect::get(&console, &"error".into()) else {
        return;
    };
    let Ok(error_fn) = error.dyn_into::<Function>() else {
        return;
    };
    let _ = error_fn.call1(&console, &JsValue::from_str(msg));
}

fn response_name(response: &Response) -> &'static str {
    match response {
        Response::Accepted => "accepted",
        Response::Ignored => "ignored",
        Response::Rejected => "rejected",
        Response::Evaluated(_) => "evaluated",
    }
}

fn status_name(status: Status) -> &'static str {
    match status {
        Status::Playing => "playing",
        Status::Won => "won",
        Status::Lost => "lost",
    }
}

/// Forwards [`Observer`] calls to methods on a JavaScript object.
struct Renderer {
    target: JsValue,
}

impl Renderer {
    /// Calls `method` on the renderer if it has one. An exception thrown by
    /// the callback is reported to the console and play carries on.
    fn call(&self, method: &str, args: &[JsValue]) {
        let Ok(func) = Reflect::get(&self.target, &JsValue::from_str(method)) else {
            return;
        };
        let Ok(func) = func.dyn_into::<Function>() else {
            return;
        };
        let args: Array = args.iter().collect();
        if let Err(e) = func.apply(&self.target, &args) {
            let msg = format!("cardle: renderer {method} threw {e:?}");
            warn!("{msg}");
            console_error(&msg);
        }
    }
}

fn grade_to_js(grade: Grade) -> JsValue {
    JsValue::from_str(grade.as_str())
}

fn index_to_js(i: usize) -> JsValue {
    JsValue::from(i as u32)
}

impl Observer for Renderer {
    fn cell_changed(&mut self, row: usize, col: usize, ch: Option<char>) {
        let ch = ch.map_or(JsValue::NULL, |c| JsValue::from_str(c.encode_utf8(&mut [0; 4])));
        self.call("onCellChanged", &[index_to_js(row), index_to_js(col), ch]);
    }

    fn row_evaluated(&mut self, row: usize, grades: &[Grade]) {
        let grades: Array = grades.iter().map(|&g| grade_to_js(g)).collect();
        self.call("onRowEvaluated", &[index_to_js(row), grades.into()]);
    }

    fn cell_revealed(&mut self, row: usize, col: usize, grade: Grade) {
        self.call(
            "onCellRevealed",
            &[index_to_js(row), index_to_js(col), grade_to_js(grade)],
        );
    }

    fn keyboard_updated(&mut self, keys: &KeyboardState) {
        let obj = Object::new();
        for (ch, grade) in keys.iter() {
            let _ = Reflect::set(
                &obj,
                &JsValue::from_str(ch.encode_utf8(&mut [0; 4])),
                &grade_to_js(grade),
            );
        }
        self.call("onKeyboardUpdated", &[obj.into()]);
    }

    fn row_rejected(&mut self, row: usize) {
        self.call("onRowRejected", &[index_to_js(row)]);
    }

    fn game_won(&mut self) {
        self.call("onGameWon", &[]);
    }

    fn game_lost(&mut self) {
        self.call("onGameLost", &[]);
    }
}

/// One day's game, driven from JavaScript.
#[wasm_bindgen]
pub struct Cardle {
    session: GameSession,
    renderer: Renderer,
}

#[wasm_bindgen]
impl Cardle {
    /// Loads the catalog (a JSON array of `{ name }` records) and starts the
    /// game for the UTC day containing `now_ms`, a Unix timestamp in
    /// milliseconds such as `Date.now()`.
    #[wasm_bindgen(constructor)]
    pub fn new(cards_json: &str, now_ms: f64, renderer: JsValue) -> Result<Cardle, JsError> {
        let catalog = Catalog::from_json(cards_json)?;
        let date = DateTime::<Utc>::from_timestamp_millis(now_ms as i64)
            .ok_or_else(|| JsError::new("timestamp out of range"))?
            .date_naive();

        Ok(Cardle {
            session: GameSession::daily(&catalog, date, Rules::new()),
            renderer: Renderer { target: renderer },
        })
    }

    pub fn rows(&self) -> usize {
        self.session.rows()
    }

    pub fn cols(&self) -> usize {
        self.session.cols()
    }

    /// `"playing"`, `"won"` or `"lost"`.
    pub fn status(&self) -> String {
        status_name(self.session.status()).to_string()
    }

    /// The card's display name, once the game is over.
    pub fn answer(&self) -> Option<String> {
        (self.session.status() != Status::Playing).then(|| self.session.card().name().to_string())
    }

    /// Handles a key name from a `keydown` event or an on-screen key.
    ///
    /// Returns `"accepted"`, `"ignored"`, `"rejected"` or `"evaluated"`.
    pub fn key(&mut self, key: &str) -> String {
        self.input(Input::from_key(key))
    }

    /// Handles text from an input field; only its last character counts.
    pub fn text(&mut self, text: &str) -> String {
        self.input(Input::from_text(text))
    }

    #[wasm_bindgen(js_name = typeChar)]
    pub fn type_char(&mut self, ch: char) -> String {
        response_name(&self.session.type_char(ch, &mut self.renderer)).to_string()
    }

    #[wasm_bindgen(js_name = deleteChar)]
    pub fn delete_char(&mut self) -> String {
        response_name(&self.session.delete_char(&mut self.renderer)).to_string()
    }

    #[wasm_bindgen(js_name = submitGuess)]
    pub fn submit_guess(&mut self) -> String {
        response_name(&self.session.submit_guess(&mut self.renderer)).to_string()
    }

    /// Turns over the next cell of the row being revealed. False once there
    /// is nothing left to reveal.
    #[wasm_bindgen(js_name = revealNext)]
    pub fn reveal_next(&mut self) -> bool {
        self.session.reveal_next(&mut self.renderer).is_some()
    }

    #[wasm_bindgen(js_name = finishReveal)]
    pub fn finish_reveal(&mut self) {
        self.session.finish_reveal(&mut self.renderer);
    }
}

impl Cardle {
    fn input(&mut self, input: Option<Input>) -> String {
        let response = match input {
            Some(input) => self.session.apply(input, &mut self.renderer),
            None => Response::Ignored,
        };
        response_name(&response).to_string()
    }
}
