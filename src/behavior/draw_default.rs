// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! The default recursive drawer, grounded on `tui_widget_draw_recursive` in
//! `original_source/tui.h`. Walks the tree depth-first, drawing each visible widget's
//! built-in appearance before its children. `WidgetKind::Custom` has no entry here — the
//! host draws those itself after the pass, using [`crate::widget::Tree::absolute_bounds`].

use crate::core::ansi::encoder::ByteSink;
use crate::core::color::RgbColor;
use crate::render::context::{Context, DrawState};
use crate::render::draw;
use crate::render::theme::Theme;
use crate::widget::node::{Bounds, Flags, StyleOverride, WidgetKind};
use crate::widget::state::WidgetState;
use crate::widget::tree::Tree;
use crate::widget::node::WidgetId;

/// Draw `root` and every visible descendant.
pub fn draw_tree<W: ByteSink>(ctx: &mut Context<W>, tree: &mut Tree, root: WidgetId) {
    draw_recursive(ctx, tree, root);
}

fn draw_recursive<W: ByteSink>(ctx: &mut Context<W>, tree: &mut Tree, id: WidgetId) {
    let Some(node) = tree.get(id) else { return };
    if !node.flags.visible {
        return;
    }
    let kind = node.kind;
    let bounds = tree.absolute_bounds(id);
    let theme = ctx.theme();

    let saved = ctx.draw_state();
    draw_widget(ctx, tree, id, kind, bounds, theme);
    ctx.set_draw_state(saved);

    let children = tree.get(id).map(|n| n.children().to_vec()).unwrap_or_default();
    for child in children {
        draw_recursive(ctx, tree, child);
    }
}

fn to_usize(v: i32) -> usize {
    v.max(0) as usize
}

fn resolve_colors(style: StyleOverride, theme: &Theme) -> (RgbColor, RgbColor) {
    (style.fg.unwrap_or(theme.widget_fg), style.bg.unwrap_or(theme.widget_bg))
}

fn draw_widget<W: ByteSink>(
    ctx: &mut Context<W>,
    tree: &mut Tree,
    id: WidgetId,
    kind: WidgetKind,
    bounds: Bounds,
    theme: Theme,
) {
    let (flags, style) = {
        let Some(node) = tree.get(id) else { return };
        (node.flags, node.style)
    };
    let x = to_usize(bounds.x);
    let y = to_usize(bounds.y);
    let w = to_usize(bounds.width);
    let h = to_usize(bounds.height);

    match kind {
        WidgetKind::Container | WidgetKind::Custom => {}
        WidgetKind::Panel => draw_panel(ctx, style, theme, x, y, w, h),
        WidgetKind::Label => draw_label(ctx, tree, id, style, theme, x, y, w),
        WidgetKind::Button => draw_button(ctx, tree, id, flags, theme, x, y),
        WidgetKind::Checkbox => draw_checkbox(ctx, tree, id, flags, style, theme, x, y),
        WidgetKind::Radio => draw_radio(ctx, tree, id, flags, style, theme, x, y),
        WidgetKind::Textbox => draw_textbox(ctx, tree, id, flags, theme, x, y, w),
        WidgetKind::List => draw_list(ctx, tree, id, flags, style, theme, x, y, w, h),
        WidgetKind::Progress => draw_progress(ctx, tree, id, style, theme, x, y, w),
        WidgetKind::Slider => draw_slider(ctx, tree, id, flags, x, y, w),
        WidgetKind::Spinner => draw_spinner(ctx, tree, id, flags, style, theme, x, y, w),
        WidgetKind::Dropdown => draw_dropdown(ctx, tree, id, flags, theme, x, y, w),
        WidgetKind::Tabs => draw_tabs(ctx, tree, id, flags, x, y, w),
        WidgetKind::Scrollbar => draw_scrollbar(ctx, tree, id, flags, x, y, w, h),
        WidgetKind::Textarea => draw_textarea(ctx, tree, id, flags, style, theme, x, y, w, h),
        WidgetKind::Splitter => draw_splitter(ctx, tree, id, x, y, w, h),
    }
}

fn draw_panel<W: ByteSink>(ctx: &mut Context<W>, style: StyleOverride, theme: Theme, x: usize, y: usize, w: usize, h: usize) {
    let (fg, bg) = resolve_colors(style, &theme);
    ctx.set_draw_state(DrawState { fg, bg, ..ctx.draw_state() });
    if let Some(border) = style.border {
        draw::draw_box(ctx, x, y, w, h, border);
    } else if !bg.is_default() {
        draw::fill(ctx, x, y, w, h, ' ');
    }
}

fn draw_label<W: ByteSink>(
    ctx: &mut Context<W>,
    tree: &Tree,
    id: WidgetId,
    style: StyleOverride,
    theme: Theme,
    x: usize,
    y: usize,
    w: usize,
) {
    let Some(WidgetState::Label { text, align }) = tree.get(id).map(|n| &n.state) else { return };
    let (fg, bg) = resolve_colors(style, &theme);
    ctx.set_draw_state(DrawState { fg, bg, ..ctx.draw_state() });
    draw::label_aligned(ctx, x, y, w, text, *align);
}

fn draw_button<W: ByteSink>(ctx: &mut Context<W>, tree: &mut Tree, id: WidgetId, flags: Flags, theme: Theme, x: usize, y: usize) {
    let Some(node) = tree.get_mut(id) else { return };
    let WidgetState::Button { text, pressed } = &mut node.state else { return };
    let (fg, bg) = if *pressed {
        (RgbColor::BLACK, theme.accent)
    } else if flags.focused {
        (RgbColor::BLACK, theme.focus_bg)
    } else {
        (theme.widget_fg, theme.widget_bg)
    };
    let label = format!("[ {text} ]");
    *pressed = false;
    ctx.set_draw_state(DrawState { fg, bg, ..ctx.draw_state() });
    draw::label(ctx, x, y, &label);
}

fn draw_checkbox<W: ByteSink>(
    ctx: &mut Context<W>,
    tree: &Tree,
    id: WidgetId,
    flags: Flags,
    style: StyleOverride,
    theme: Theme,
    x: usize,
    y: usize,
) {
    let Some(WidgetState::Checkbox { text, checked }) = tree.get(id).map(|n| &n.state) else { return };
    let (fg, bg) = resolve_colors(style, &theme);
    let fg = if flags.focused { theme.accent } else { fg };
    let label = format!("[{}] {text}", if *checked { 'x' } else { ' ' });
    ctx.set_draw_state(DrawState { fg, bg, ..ctx.draw_state() });
    draw::label(ctx, x, y, &label);
}

fn draw_radio<W: ByteSink>(
    ctx: &mut Context<W>,
    tree: &Tree,
    id: WidgetId,
    flags: Flags,
    style: StyleOverride,
    theme: Theme,
    x: usize,
    y: usize,
) {
    let Some(WidgetState::Radio { text, group, value }) = tree.get(id).map(|n| &n.state) else { return };
    let selected = group.get() == *value;
    let (fg, bg) = resolve_colors(style, &theme);
    let fg = if flags.focused { theme.accent } else { fg };
    let label = format!("({}) {text}", if selected { '*' } else { ' ' });
    ctx.set_draw_state(DrawState { fg, bg, ..ctx.draw_state() });
    draw::label(ctx, x, y, &label);
}

fn draw_textbox<W: ByteSink>(
    ctx: &mut Context<W>,
    tree: &mut Tree,
    id: WidgetId,
    flags: Flags,
    theme: Theme,
    x: usize,
    y: usize,
    w: usize,
) {
    let Some(node) = tree.get_mut(id) else { return };
    let WidgetState::Textbox { buffer, cursor, scroll, .. } = &mut node.state else { return };

    if *cursor < *scroll {
        *scroll = *cursor;
    }
    if *cursor >= *scroll + w {
        *scroll = cursor.saturating_sub(w).saturating_add(1);
    }

    let (fg, bg) = if flags.focused {
        (RgbColor::WHITE, RgbColor::rgb(40, 40, 60))
    } else {
        (theme.widget_fg, RgbColor::rgb(30, 30, 30))
    };
    ctx.set_draw_state(DrawState { fg, bg, ..ctx.draw_state() });
    draw::fill(ctx, x, y, w, 1, ' ');

    let chars: Vec<char> = buffer.chars().collect();
    for i in 0..w {
        let idx = *scroll + i;
        if idx >= chars.len() {
            break;
        }
        ctx.set_cell(x + i, y, chars[idx]);
    }

    if flags.focused {
        let cursor_x = x as i32 + (*cursor as i32 - *scroll as i32);
        if cursor_x >= x as i32 && cursor_x < (x + w) as i32 {
            ctx.set_draw_state(DrawState { fg: RgbColor::BLACK, bg: RgbColor::WHITE, ..ctx.draw_state() });
            let ch = chars.get(*cursor).copied().unwrap_or(' ');
            ctx.set_cell(cursor_x as usize, y, ch);
        }
    }
}

fn draw_list<W: ByteSink>(
    ctx: &mut Context<W>,
    tree: &Tree,
    id: WidgetId,
    flags: Flags,
    style: StyleOverride,
    theme: Theme,
    x: usize,
    y: usize,
    w: usize,
    h: usize,
) {
    let Some(WidgetState::List { items, selected, scroll, visible }) = tree.get(id).map(|n| &n.state) else { return };
    let rows = if *visible > 0 { *visible } else { h };
    let (fg, bg) = resolve_colors(style, &theme);

    for i in 0..rows {
        let idx = *scroll + i;
        if idx >= items.len() {
            break;
        }
        let is_sel = idx == *selected;
        let (row_fg, row_bg) = if is_sel {
            if flags.focused { (RgbColor::BLACK, theme.select_bg) } else { (theme.select_fg, RgbColor::rgb(80, 80, 80)) }
        } else {
            (fg, bg)
        };
        ctx.set_draw_state(DrawState { fg: row_fg, bg: row_bg, ..ctx.draw_state() });
        draw::fill(ctx, x, y + i, w, 1, ' ');
        draw::label(ctx, x + 1, y + i, &items[idx]);
    }
}

fn draw_progress<W: ByteSink>(
    ctx: &mut Context<W>,
    tree: &Tree,
    id: WidgetId,
    style: StyleOverride,
    theme: Theme,
    x: usize,
    y: usize,
    w: usize,
) {
    let Some(WidgetState::Progress { value, min, max }) = tree.get(id).map(|n| &n.state) else { return };
    let ratio = if *max > *min { ((*value - *min) / (*max - *min)).clamp(0.0, 1.0) } else { 0.0 };
    let filled = (ratio * (w.saturating_sub(2)) as f32 + 0.5) as usize;
    let (fg, bg) = resolve_colors(style, &theme);

    ctx.set_draw_state(DrawState { fg, bg, ..ctx.draw_state() });
    ctx.set_cell(x, y, '[');
    if w > 0 {
        ctx.set_cell(x + w - 1, y, ']');
    }
    for i in 0..w.saturating_sub(2) {
        if i < filled {
            ctx.set_draw_state(DrawState { fg: theme.success, bg, ..ctx.draw_state() });
            ctx.set_cell(x + 1 + i, y, '█');
        } else {
            ctx.set_draw_state(DrawState { fg: RgbColor::rgb(60, 60, 60), bg, ..ctx.draw_state() });
            ctx.set_cell(x + 1 + i, y, '░');
        }
    }
}

fn draw_slider<W: ByteSink>(ctx: &mut Context<W>, tree: &Tree, id: WidgetId, flags: Flags, x: usize, y: usize, w: usize) {
    let Some(WidgetState::Slider { value, min, max, .. }) = tree.get(id).map(|n| &n.state) else { return };
    let ratio = if *max > *min { ((*value - *min) / (*max - *min)).clamp(0.0, 1.0) } else { 0.0 };
    let pos = (ratio * w.saturating_sub(1) as f32 + 0.5) as usize;

    for i in 0..w {
        if i == pos {
            let fg = if flags.focused { RgbColor::rgb(80, 140, 220) } else { RgbColor::WHITE };
            ctx.set_draw_state(DrawState { fg, ..ctx.draw_state() });
            ctx.set_cell(x + i, y, '●');
        } else {
            ctx.set_draw_state(DrawState { fg: RgbColor::rgb(60, 60, 60), ..ctx.draw_state() });
            ctx.set_cell(x + i, y, '─');
        }
    }
}

fn draw_spinner<W: ByteSink>(
    ctx: &mut Context<W>,
    tree: &Tree,
    id: WidgetId,
    flags: Flags,
    style: StyleOverride,
    theme: Theme,
    x: usize,
    y: usize,
    w: usize,
) {
    let Some(WidgetState::Spinner { value, .. }) = tree.get(id).map(|n| &n.state) else { return };
    let (fg, _) = resolve_colors(style, &theme);

    let dim = if flags.focused { RgbColor::WHITE } else { RgbColor::rgb(150, 150, 150) };
    ctx.set_draw_state(DrawState { fg: dim, bg: RgbColor::rgb(50, 50, 50), ..ctx.draw_state() });
    ctx.set_cell(x, y, '[');
    ctx.set_cell(x + 1, y, '-');
    ctx.set_cell(x + 2, y, ']');

    let val_width = w.saturating_sub(6);
    let inner_bg = if flags.focused { theme.accent } else { RgbColor::rgb(30, 30, 30) };
    ctx.set_draw_state(DrawState { fg: if flags.focused { RgbColor::BLACK } else { fg }, bg: inner_bg, ..ctx.draw_state() });
    draw::fill(ctx, x + 3, y, val_width, 1, ' ');
    let text = value.to_string();
    let vx = x + 3 + val_width.saturating_sub(text.len()) / 2;
    draw::label(ctx, vx, y, &text);

    ctx.set_draw_state(DrawState { fg: dim, bg: RgbColor::rgb(50, 50, 50), ..ctx.draw_state() });
    ctx.set_cell(x + w.saturating_sub(3), y, '[');
    ctx.set_cell(x + w.saturating_sub(2), y, '+');
    ctx.set_cell(x + w.saturating_sub(1), y, ']');
}

fn draw_dropdown<W: ByteSink>(
    ctx: &mut Context<W>,
    tree: &Tree,
    id: WidgetId,
    flags: Flags,
    theme: Theme,
    x: usize,
    y: usize,
    w: usize,
) {
    let Some(WidgetState::Dropdown { items, selected, scroll, open }) = tree.get(id).map(|n| &n.state) else { return };

    let (fg, bg) = if flags.focused { (RgbColor::BLACK, theme.accent) } else { (theme.widget_fg, RgbColor::rgb(50, 50, 50)) };
    ctx.set_draw_state(DrawState { fg, bg, ..ctx.draw_state() });
    draw::fill(ctx, x, y, w, 1, ' ');
    if let Some(item) = items.get(*selected) {
        draw::label(ctx, x + 1, y, item);
    }
    ctx.set_cell(x + w.saturating_sub(2), y, '▼');

    if *open {
        let list_height = items.len().min(5);
        for i in 0..list_height {
            let idx = *scroll + i;
            if idx >= items.len() {
                break;
            }
            let is_sel = idx == *selected;
            let (row_fg, row_bg) = if is_sel { (RgbColor::BLACK, RgbColor::WHITE) } else { (RgbColor::WHITE, RgbColor::rgb(40, 40, 40)) };
            ctx.set_draw_state(DrawState { fg: row_fg, bg: row_bg, ..ctx.draw_state() });
            draw::fill(ctx, x, y + 1 + i, w, 1, ' ');
            draw::label(ctx, x + 1, y + 1 + i, &items[idx]);
        }
    }
}

fn draw_tabs<W: ByteSink>(ctx: &mut Context<W>, tree: &Tree, id: WidgetId, flags: Flags, x: usize, y: usize, w: usize) {
    let Some(WidgetState::Tabs { labels, selected }) = tree.get(id).map(|n| &n.state) else { return };
    let mut cur_x = x;
    for (i, label) in labels.iter().enumerate() {
        if cur_x >= x + w {
            break;
        }
        let is_sel = i == *selected;
        let (fg, bg) = if is_sel {
            if flags.focused { (RgbColor::BLACK, RgbColor::rgb(80, 140, 220)) } else { (RgbColor::WHITE, RgbColor::rgb(80, 80, 80)) }
        } else {
            (RgbColor::rgb(150, 150, 150), RgbColor::rgb(40, 40, 40))
        };
        ctx.set_draw_state(DrawState { fg, bg, ..ctx.draw_state() });
        ctx.set_cell(cur_x, y, ' ');
        cur_x += 1;
        draw::label(ctx, cur_x, y, label);
        cur_x += crate::core::width::text_width(label);
        ctx.set_cell(cur_x, y, ' ');
        cur_x += 1;

        if cur_x < x + w && i + 1 < labels.len() {
            ctx.set_draw_state(DrawState { fg: RgbColor::rgb(60, 60, 60), bg: RgbColor::DEFAULT, ..ctx.draw_state() });
            ctx.set_cell(cur_x, y, '│');
            cur_x += 1;
        }
    }
    ctx.set_draw_state(DrawState { bg: RgbColor::DEFAULT, ..ctx.draw_state() });
    while cur_x < x + w {
        ctx.set_cell(cur_x, y, ' ');
        cur_x += 1;
    }
}

fn draw_scrollbar<W: ByteSink>(
    ctx: &mut Context<W>,
    tree: &Tree,
    id: WidgetId,
    flags: Flags,
    x: usize,
    y: usize,
    w: usize,
    h: usize,
) {
    let Some(WidgetState::Scrollbar { content_size, view_size, scroll, vertical, .. }) = tree.get(id).map(|n| &n.state) else {
        return;
    };
    let bar_len = if *vertical { h } else { w };

    ctx.set_draw_state(DrawState { fg: RgbColor::rgb(60, 60, 60), ..ctx.draw_state() });
    for i in 0..bar_len {
        if *vertical {
            ctx.set_cell(x, y + i, '│');
        } else {
            ctx.set_cell(x + i, y, '─');
        }
    }

    if *content_size > 0 && *content_size > *view_size {
        let thumb_size = ((*view_size as usize * bar_len) / *content_size as usize).clamp(1, bar_len);
        let max_scroll = content_size - view_size;
        let thumb_pos = if max_scroll > 0 {
            ((*scroll as i64 * (bar_len - thumb_size) as i64) / max_scroll as i64) as usize
        } else {
            0
        };
        ctx.set_draw_state(DrawState { fg: if flags.focused { RgbColor::rgb(80, 140, 220) } else { RgbColor::WHITE }, ..ctx.draw_state() });
        for i in 0..thumb_size {
            if *vertical {
                ctx.set_cell(x, y + thumb_pos + i, '█');
            } else {
                ctx.set_cell(x + thumb_pos + i, y, '█');
            }
        }
    }
}

fn draw_textarea<W: ByteSink>(
    ctx: &mut Context<W>,
    tree: &Tree,
    id: WidgetId,
    flags: Flags,
    style: StyleOverride,
    theme: Theme,
    x: usize,
    y: usize,
    w: usize,
    h: usize,
) {
    let Some(WidgetState::Textarea { lines, cursor_row, cursor_col, scroll_row, scroll_col, line_numbers, .. }) =
        tree.get(id).map(|n| &n.state)
    else {
        return;
    };
    let gutter_width = if *line_numbers { 5 } else { 0 };
    let text_x = x + gutter_width;
    let text_width = w.saturating_sub(gutter_width);
    let (fg, bg) = resolve_colors(style, &theme);

    for i in 0..h {
        let line_idx = scroll_row + i;

        if *line_numbers {
            if line_idx < lines.len() {
                ctx.set_draw_state(DrawState { fg: RgbColor::rgb(100, 100, 100), bg: RgbColor::rgb(30, 30, 30), ..ctx.draw_state() });
                draw::label(ctx, x, y + i, &format!("{:>4}", line_idx + 1));
                ctx.set_cell(x + 4, y + i, '│');
            } else {
                ctx.set_draw_state(DrawState { fg: RgbColor::rgb(60, 60, 60), bg: RgbColor::rgb(30, 30, 30), ..ctx.draw_state() });
                draw::fill(ctx, x, y + i, gutter_width, 1, ' ');
            }
        }

        ctx.set_draw_state(DrawState { fg, bg, ..ctx.draw_state() });
        draw::fill(ctx, text_x, y + i, text_width, 1, ' ');

        if let Some(line) = lines.get(line_idx) {
            let chars: Vec<char> = line.chars().collect();
            for j in 0..text_width {
                let idx = scroll_col + j;
                if idx >= chars.len() {
                    break;
                }
                ctx.set_cell(text_x + j, y + i, chars[idx]);
            }

            if flags.focused && line_idx == *cursor_row {
                let cursor_screen_x = text_x as i32 + (*cursor_col as i32 - *scroll_col as i32);
                if cursor_screen_x >= text_x as i32 && cursor_screen_x < (text_x + text_width) as i32 {
                    ctx.set_draw_state(DrawState { fg: RgbColor::BLACK, bg: RgbColor::WHITE, ..ctx.draw_state() });
                    let ch = chars.get(*cursor_col).copied().unwrap_or(' ');
                    ctx.set_cell(cursor_screen_x as usize, y + i, ch);
                }
            }
        }
    }
}

fn draw_splitter<W: ByteSink>(ctx: &mut Context<W>, tree: &mut Tree, id: WidgetId, x: usize, y: usize, w: usize, h: usize) {
    let Some(node) = tree.get(id) else { return };
    let Some(WidgetState::Splitter { vertical, ratio, min_size, dragging }) = Some(&node.state) else { return };
    let (vertical, ratio, min_size, dragging) = (*vertical, *ratio, *min_size, *dragging);
    let children = node.children().to_vec();

    let split_pos = if vertical {
        ((ratio * h as f32) as i32).clamp(min_size, (h as i32 - min_size).max(min_size))
    } else {
        ((ratio * w as f32) as i32).clamp(min_size, (w as i32 - min_size).max(min_size))
    };

    ctx.set_draw_state(DrawState { fg: if dragging { RgbColor::rgb(80, 140, 220) } else { RgbColor::rgb(100, 100, 100) }, ..ctx.draw_state() });
    if vertical {
        draw::hline(ctx, x, y + split_pos as usize, w, '─');
    } else {
        draw::vline(ctx, x + split_pos as usize, y, h, '│');
    }

    if children.len() >= 2 {
        let (a, b) = (children[0], children[1]);
        if vertical {
            tree.set_bounds(a, Bounds { x: 0, y: 0, width: w as i32, height: split_pos });
            tree.set_bounds(b, Bounds { x: 0, y: split_pos + 1, width: w as i32, height: h as i32 - split_pos - 1 });
        } else {
            tree.set_bounds(a, Bounds { x: 0, y: 0, width: split_pos, height: h as i32 });
            tree.set_bounds(b, Bounds { x: split_pos + 1, y: 0, width: w as i32 - split_pos - 1, height: h as i32 });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::widget::node::WidgetKind;

    fn small_ctx() -> Context<Vec<u8>> {
        let cfg = EngineConfig { max_width: 40, max_height: 20, ..EngineConfig::default() };
        let mut ctx = Context::new(Vec::new(), cfg);
        ctx.begin_frame();
        ctx
    }

    #[test]
    fn draws_button_and_resets_pressed_flag() {
        let mut tree = Tree::new(&EngineConfig::default());
        let root = tree.create(WidgetKind::Button, WidgetState::Button { text: "ok".into(), pressed: true });
        tree.set_bounds(root, Bounds { x: 0, y: 0, width: 10, height: 1 });
        let mut ctx = small_ctx();
        draw_tree(&mut ctx, &mut tree, root);
        ctx.end_frame().unwrap();
        let WidgetState::Button { pressed, .. } = tree.get(root).unwrap().state else { unreachable!() };
        assert!(!pressed);
    }

    #[test]
    fn splitter_lays_out_its_first_two_children() {
        let mut tree = Tree::new(&EngineConfig::default());
        let root = tree.create(WidgetKind::Splitter, WidgetState::Splitter { vertical: false, ratio: 0.5, min_size: 1, dragging: false });
        let a = tree.create(WidgetKind::Panel, WidgetState::Panel);
        let b = tree.create(WidgetKind::Panel, WidgetState::Panel);
        tree.add_child(root, a).unwrap();
        tree.add_child(root, b).unwrap();
        tree.set_bounds(root, Bounds { x: 0, y: 0, width: 20, height: 10 });
        let mut ctx = small_ctx();
        draw_tree(&mut ctx, &mut tree, root);
        ctx.end_frame().unwrap();
        assert_eq!(tree.get(a).unwrap().bounds.width, 10);
        assert_eq!(tree.get(b).unwrap().bounds.x, 11);
    }
}
