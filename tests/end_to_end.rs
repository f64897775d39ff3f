// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! The six end-to-end scenarios, exercised against the public API rather than any
//! single module's internals: a frame write, an idempotent redraw, a mouse click, an
//! arrow key with modifiers, focus cycling, and a textarea line split.

use pretty_assertions::assert_eq;
use tui_stage::config::EngineConfig;
use tui_stage::core::color::RgbColor;
use tui_stage::core::input::{try_parse_input_event, DecodeOutcome, InputEvent, KeyCode, MouseAction, MouseButton};
use tui_stage::render::{draw, Context};
use tui_stage::widget::node::WidgetKind;
use tui_stage::widget::{Bounds, WidgetManager, WidgetState};

fn tiny_config() -> EngineConfig {
    EngineConfig { max_width: 10, max_height: 3, ..EngineConfig::default() }
}

#[test]
fn hello_write_emits_sync_move_color_and_glyphs() {
    let mut ctx = Context::new(Vec::new(), tiny_config());
    ctx.begin_frame();
    let mut state = ctx.draw_state();
    state.fg = RgbColor::rgb(0xCC, 0x00, 0x00);
    ctx.set_draw_state(state);
    draw::label(&mut ctx, 0, 0, "Hi");
    ctx.end_frame().unwrap();

    let out = ctx.into_sink().unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("\u{1b}[?2026h"));
    assert!(text.contains("\u{1b}[1;1H"));
    assert!(text.contains("\u{1b}[0m"));
    assert!(text.contains("38;2;204;0;0"));
    assert!(text.contains('H'));
    assert!(text.contains('i'));
    assert!(text.contains("\u{1b}[?2026l"));
}

#[test]
fn idempotent_redraw_emits_only_the_sync_wrapper() {
    let mut ctx = Context::new(Vec::new(), tiny_config());
    ctx.begin_frame();
    draw::label(&mut ctx, 0, 0, "Hi");
    ctx.end_frame().unwrap();

    ctx.begin_frame();
    draw::label(&mut ctx, 0, 0, "Hi");
    ctx.end_frame().unwrap();

    let out = ctx.into_sink().unwrap();
    let text = String::from_utf8(out).unwrap();
    let second_half = text.rsplit_once("\u{1b}[?2026h").unwrap().1;
    assert_eq!(second_half, "\u{1b}[?2026l");
}

#[test]
fn mouse_click_then_release_decode_to_left_button_events() {
    let press = b"\x1b[<0;5;3M";
    let DecodeOutcome::Event(event, consumed) = try_parse_input_event(press) else {
        panic!("expected an event")
    };
    assert_eq!(consumed, press.len());
    assert_eq!(
        event,
        InputEvent::Mouse {
            button: MouseButton::Left,
            x: 4,
            y: 2,
            action: MouseAction::Press,
            modifiers: tui_stage::core::input::KeyModifiers::NONE,
        }
    );

    let release = b"\x1b[<0;5;3m";
    let DecodeOutcome::Event(event, _) = try_parse_input_event(release) else { panic!("expected an event") };
    assert_eq!(
        event,
        InputEvent::Mouse {
            button: MouseButton::Left,
            x: 4,
            y: 2,
            action: MouseAction::Release,
            modifiers: tui_stage::core::input::KeyModifiers::NONE,
        }
    );
}

#[test]
fn ctrl_up_arrow_decodes_with_modifier() {
    let bytes = b"\x1b[1;5A";
    let DecodeOutcome::Event(event, consumed) = try_parse_input_event(bytes) else {
        panic!("expected an event")
    };
    assert_eq!(consumed, bytes.len());
    match event {
        InputEvent::Keyboard { code: KeyCode::Up, modifiers } => {
            assert!(modifiers.ctrl);
            assert!(!modifiers.shift);
            assert!(!modifiers.alt);
        }
        other => panic!("expected an Up keyboard event, got {other:?}"),
    }
}

#[test]
fn focus_cycles_through_three_buttons_in_tab_index_order() {
    let config = EngineConfig::default();
    let mut mgr = WidgetManager::new(&config);
    let root = mgr.tree.create(WidgetKind::Container, WidgetState::Container);
    mgr.set_root(root);

    let mut buttons = Vec::new();
    for (tab_index, label) in [(2, "c"), (0, "a"), (1, "b")] {
        let id = mgr.tree.create(WidgetKind::Button, WidgetState::Button { text: label.into(), pressed: false });
        mgr.tree.get_mut(id).unwrap().flags.focusable = true;
        mgr.tree.get_mut(id).unwrap().tab_index = tab_index;
        mgr.tree.set_bounds(id, Bounds { x: 0, y: 0, width: 4, height: 1 });
        mgr.tree.add_child(root, id).unwrap();
        buttons.push(id);
    }
    let [button_tab2, button_tab0, button_tab1] = [buttons[0], buttons[1], buttons[2]];

    assert_eq!(mgr.focus(), None);
    mgr.focus_next();
    assert_eq!(mgr.focus(), Some(button_tab0));
    mgr.focus_next();
    assert_eq!(mgr.focus(), Some(button_tab1));
    mgr.focus_next();
    assert_eq!(mgr.focus(), Some(button_tab2));
    mgr.focus_next();
    assert_eq!(mgr.focus(), Some(button_tab0));
}

#[test]
fn textarea_enter_splits_line_and_preserves_character_count() {
    let mut state = WidgetState::Textarea {
        lines: vec!["Hello World".to_string()],
        cursor_row: 0,
        cursor_col: 5,
        scroll_row: 0,
        scroll_col: 0,
        selection: None,
        line_numbers: false,
        word_wrap: false,
        editable: true,
        max_line_len: 256,
    };
    let enter = InputEvent::Keyboard {
        code: KeyCode::Enter,
        modifiers: tui_stage::core::input::KeyModifiers::NONE,
    };
    tui_stage::behavior::textarea::handle(&mut state, Bounds::default(), 10, &enter);

    let WidgetState::Textarea { lines, cursor_row, cursor_col, .. } = state else {
        panic!("expected textarea state");
    };
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Hello");
    assert_eq!(lines[1], " World");
    assert_eq!(cursor_row, 1);
    assert_eq!(cursor_col, 0);
    assert_eq!(
        lines[0].chars().count() + lines[1].chars().count(),
        "Hello World".chars().count()
    );
}
