//! Browser tests; run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use cardle_wasm::Cardle;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const CARDS: &str = r#"[{ "name": "Zap" }]"#;

// 2024-01-01T00:00:00Z
const NOW_MS: f64 = 1_704_067_200_000.0;

#[wasm_bindgen_test]
fn plays_without_a_renderer() {
    let mut game = Cardle::new(CARDS, NOW_MS, JsValue::NULL)
        .map_err(JsValue::from)
        .unwrap();
    assert_eq!(game.cols(), 3);
    assert_eq!(game.rows(), 6);

    assert_eq!(game.key("z"), "accepted");
    assert_eq!(game.key("Enter"), "rejected");
    assert_eq!(game.text("za"), "accepted");
    assert_eq!(game.type_char('P'), "accepted");
    assert_eq!(game.delete_char(), "accepted");
}

#[wasm_bindgen_test]
fn forwards_events_to_the_renderer() {
    let renderer = Object::new();
    let won = Function::new_no_args("this.won = true;");
    Reflect::set(&renderer, &"onGameWon".into(), &won).unwrap();

    let mut game = Cardle::new(CARDS, NOW_MS, renderer.clone().into())
        .map_err(JsValue::from)
        .unwrap();
    for key in ["Z", "A", "P"] {
        game.key(key);
    }
    assert_eq!(game.submit_guess(), "evaluated");
    assert_eq!(game.key("X"), "ignored");
    while game.reveal_next() {}

    assert_eq!(game.status(), "won");
    assert_eq!(game.answer().as_deref(), Some("Zap"));
    assert_eq!(
        Reflect::get(&renderer, &"won".into()).unwrap(),
        JsValue::from_bool(true)
    );
}

#[wasm_bindgen_test]
fn throwing_callbacks_do_not_stop_play() {
    let renderer = Object::new();
    let throws = Function::new_no_args("throw new Error('broken renderer');");
    Reflect::set(&renderer, &"onCellRevealed".into(), &throws).unwrap();
    Reflect::set(&renderer, &"onGameWon".into(), &throws).unwrap();
    let lost = Function::new_no_args("this.lost = true;");
    Reflect::set(&renderer, &"onGameLost".into(), &lost).unwrap();

    let mut game = Cardle::new(CARDS, NOW_MS, renderer.clone().into())
        .map_err(JsValue::from)
        .unwrap();
    assert_eq!(game.text("z"), "accepted");
    assert_eq!(game.text("a"), "accepted");
    assert_eq!(game.text("p"), "accepted");
    assert_eq!(game.submit_guess(), "evaluated");
    game.finish_reveal();

    assert_eq!(game.status(), "won");
    assert_eq!(game.key("Z"), "ignored");
    assert_eq!(
        Reflect::get(&renderer, &"lost".into()).unwrap(),
        JsValue::UNDEFINED
    );
}

#[wasm_bindgen_test]
fn later_callbacks_still_run_after_one_throws() {
    let renderer = Object::new();
    let throws = Function::new_no_args("throw new Error('broken renderer');");
    Reflect::set(&renderer, &"onCellRevealed".into(), &throws).unwrap();
    let won = Function::new_no_args("this.won = true;");
    Reflect::set(&renderer, &"onGameWon".into(), &won).unwrap();

    let mut game = Cardle::new(CARDS, NOW_MS, renderer.clone().into())
        .map_err(JsValue::from)
        .unwrap();
    for key in ["Z", "A", "P", "Enter"] {
        game.key(key);
    }
    while game.reveal_next() {}

    assert_eq!(game.status(), "won");
    assert_eq!(
        Reflect::get(&renderer, &"won".into()).unwrap(),
        JsValue::from_bool(true)
    );
}

#[wasm_bindgen_test]
fn rejects_an_empty_catalog() {
    assert!(Cardle::new("[]", NOW_MS, JsValue::NULL).is_err());
}
