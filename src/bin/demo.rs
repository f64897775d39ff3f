// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! A small interactive form, exercising the full stack end to end: the POSIX backend
//! reads raw bytes and the resize latch, the core decoder turns them into events, the
//! router dispatches them against a widget tree, and the default drawer renders it
//! through a diff-driven [`Context`].

use std::fs::OpenOptions;
use std::io::Write;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use tui_stage::backend::posix::{PosixResizeSource, PosixTty};
use tui_stage::backend::{ResizeSource, TtyHandle};
use tui_stage::behavior;
use tui_stage::config::EngineConfig;
use tui_stage::core::ansi::ByteSink;
use tui_stage::core::input::{try_parse_input_event, DecodeOutcome, InputEvent, InputRing, KeyCode, KeyModifiers};
use tui_stage::event::route_event;
use tui_stage::render::{draw_box, label, BorderStyle, Context, Theme};
use tui_stage::widget::{Bounds, WidgetKind, WidgetManager, WidgetState};

/// Which built-in palette to start with.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum ThemeArg {
    Default,
    Dark,
    Light,
    Blue,
    Green,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Theme {
        match arg {
            ThemeArg::Default => Theme::DEFAULT,
            ThemeArg::Dark => Theme::DARK,
            ThemeArg::Light => Theme::LIGHT,
            ThemeArg::Blue => Theme::BLUE,
            ThemeArg::Green => Theme::GREEN,
        }
    }
}

/// A minimal form demonstrating widget focus, hotkeys, and redraw.
#[derive(Debug, Parser)]
#[command(name = "tui_stage_demo", about = "Interactive smoke test for tui_stage")]
struct Args {
    /// Starting palette.
    #[arg(long, value_enum, default_value_t = ThemeArg::Default)]
    theme: ThemeArg,
}

/// A direct, blocking writer over `/dev/tty`, opened independently of [`PosixTty`]'s
/// raw-mode/non-blocking-read setup. Raw mode is a property of the terminal line
/// discipline, not of any one file descriptor, so a second handle to the same
/// controlling terminal sees it exactly as the first does; keeping `Context`'s output
/// path on its own handle avoids tangling write buffering with the input ring's
/// non-blocking reads.
#[derive(Debug)]
struct TtyWriter(std::fs::File);

fn open_tty_writer() -> tui_stage::Result<TtyWriter> {
    OpenOptions::new()
        .write(true)
        .open("/dev/tty")
        .or_else(|_| OpenOptions::new().write(true).open("/dev/stdout"))
        .map(TtyWriter)
        .map_err(tui_stage::Error::Io)
}

impl ByteSink for TtyWriter {
    fn write_bytes(&mut self, data: &[u8]) -> tui_stage::Result<()> {
        self.0.write_all(data).map_err(tui_stage::Error::Io)
    }
}

fn build_form(mgr: &mut WidgetManager) {
    let root = mgr.tree.create(WidgetKind::Panel, WidgetState::Panel);
    mgr.tree.set_bounds(root, Bounds { x: 0, y: 0, width: 40, height: 9 });
    mgr.set_root(root);

    let name_box = mgr.tree.create(
        WidgetKind::Textbox,
        WidgetState::Textbox { buffer: String::new(), capacity: 64, cursor: 0, scroll: 0 },
    );
    mgr.tree.set_bounds(name_box, Bounds { x: 2, y: 2, width: 30, height: 1 });
    {
        let node = mgr.tree.get_mut(name_box).unwrap();
        node.flags.focusable = true;
        node.tab_index = 0;
        node.name = Some("name".into());
    }
    mgr.tree.add_child(root, name_box).unwrap();

    let remember = mgr.tree.create(
        WidgetKind::Checkbox,
        WidgetState::Checkbox { text: "Remember me".into(), checked: false },
    );
    mgr.tree.set_bounds(remember, Bounds { x: 2, y: 4, width: 20, height: 1 });
    {
        let node = mgr.tree.get_mut(remember).unwrap();
        node.flags.focusable = true;
        node.tab_index = 1;
    }
    mgr.tree.add_child(root, remember).unwrap();

    let submit = mgr.tree.create(
        WidgetKind::Button,
        WidgetState::Button { text: "Submit".into(), pressed: false },
    );
    mgr.tree.set_bounds(submit, Bounds { x: 2, y: 6, width: 10, height: 1 });
    {
        let node = mgr.tree.get_mut(submit).unwrap();
        node.flags.focusable = true;
        node.tab_index = 2;
    }
    mgr.tree.add_child(root, submit).unwrap();

    mgr.set_focus(Some(name_box));
}

/// `Ctrl+Q` or `Ctrl+C` ends the loop.
fn is_quit(event: &InputEvent) -> bool {
    matches!(
        event,
        InputEvent::Keyboard { code: KeyCode::Char('q'), modifiers: KeyModifiers { ctrl: true, .. } }
            | InputEvent::Keyboard { code: KeyCode::Char('c'), modifiers: KeyModifiers { ctrl: true, .. } }
    )
}

fn main() -> tui_stage::Result<()> {
    let args = Args::parse();
    let theme: Theme = args.theme.into();

    let mut tty = PosixTty::open()?;
    let mut resize_source = PosixResizeSource::new()?;
    let (cols, rows) = tty.size()?;

    let config = EngineConfig::default();
    let mut ctx = Context::new(open_tty_writer()?, config);
    ctx.set_theme(theme);
    ctx.notify_resize(cols as usize, rows as usize);
    ctx.start()?;

    let mut mgr = WidgetManager::new(&config);
    build_form(&mut mgr);

    let mut ring = InputRing::new(config.input_ring_capacity);
    let mut read_buf = [0u8; 256];
    let mut running = true;

    while running {
        if resize_source.poll_and_clear() {
            if let Ok((cols, rows)) = tty.size() {
                ctx.notify_resize(cols as usize, rows as usize);
            }
        }

        let n = tty.read_nonblocking(&mut read_buf)?;
        if n > 0 {
            ring.push(&read_buf[..n])?;
        }

        loop {
            match try_parse_input_event(ring.as_slice()) {
                DecodeOutcome::Event(event, consumed) => {
                    ring.consume(consumed);
                    if is_quit(&event) {
                        running = false;
                        break;
                    }
                    route_event(&mut mgr, event);
                }
                DecodeOutcome::Invalid => {
                    tracing::debug!(byte = ?ring.as_slice().first(), "dropping malformed input byte");
                    ring.consume(1);
                }
                DecodeOutcome::Incomplete => break,
            }
        }

        ctx.begin_frame();
        if let Some(root) = mgr.root() {
            let bounds = mgr.tree.absolute_bounds(root);
            draw_box(
                &mut ctx,
                bounds.x.max(0) as usize,
                bounds.y.max(0) as usize,
                bounds.width.max(0) as usize,
                bounds.height.max(0) as usize,
                BorderStyle::Rounded,
            );
            label(&mut ctx, 2, 0, "tui_stage demo - Tab to move focus, Ctrl+Q to quit");
            behavior::draw_tree(&mut ctx, &mut mgr.tree, root);
        }
        ctx.end_frame()?;

        std::thread::sleep(Duration::from_millis(16));
    }

    ctx.destroy()?;
    Ok(())
}
