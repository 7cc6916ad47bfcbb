//! File Explorer Example
//!
//! Demonstrates the TreeView widget in a crossterm terminal:
//! - Hierarchical data with expand/collapse
//! - Keyboard navigation (arrows)
//! - Multi-selection (shift/ctrl + click)
//! - Drag-and-drop node moving with autoscroll
//!
//! The widget thinks in abstract pixels; this host maps one terminal cell
//! to an 8x20 pixel block so the default metrics line up.

use std::fs::File;
use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEventKind,
};
use crossterm::style::{Color as CtColor, Print, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use duskui::tree::{Node, TreeGlyphs, TreeOptions, TreeView};
use duskui::{
    Alignment, Color, ImageId, Key, Modifiers, MouseButton, Point, Rect, Renderer, Size, TreeEvent,
    Viewport,
};

const CELL_W: i32 = 8;
const CELL_H: i32 = 20;

// Glyph image ids; draw_image maps them back to +/- characters.
const GLYPH_CLOSED: u32 = 0;
const GLYPH_OPEN: u32 = 3;

/// Terminal scroll window plus paint surface, in one struct so the widget
/// can borrow it as either collaborator.
struct TerminalHost {
    out: Stdout,
    scroll: Point,
    content: Size,
    cols: u16,
    rows: u16,
    /// Background set by the last `fill_rect` covering each terminal row,
    /// so text and glyphs repaint over the right stripe.
    row_bg: Vec<CtColor>,
}

impl TerminalHost {
    fn new(cols: u16, rows: u16) -> Self {
        Self {
            out: stdout(),
            scroll: Point::new(0, 0),
            content: Size::default(),
            cols,
            rows,
            row_bg: vec![CtColor::Reset; rows as usize],
        }
    }

    fn cell_of(&self, pos: Point) -> Option<(u16, u16)> {
        let col = (pos.x - self.scroll.x) / CELL_W;
        let row = (pos.y - self.scroll.y) / CELL_H;
        if col < 0 || row < 0 || col >= i32::from(self.cols) || row >= i32::from(self.rows) {
            return None;
        }
        Some((col as u16, row as u16))
    }

    /// Center of a terminal cell in content coordinates.
    fn content_point(&self, col: u16, row: u16) -> Point {
        Point::new(
            i32::from(col) * CELL_W + CELL_W / 2 + self.scroll.x,
            i32::from(row) * CELL_H + CELL_H / 2 + self.scroll.y,
        )
    }

    fn clear(&mut self) -> std::io::Result<()> {
        self.row_bg.fill(CtColor::Reset);
        queue!(
            self.out,
            SetBackgroundColor(CtColor::Reset),
            terminal::Clear(terminal::ClearType::All)
        )
    }
}

fn ct(color: Color) -> CtColor {
    CtColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

impl Viewport for TerminalHost {
    fn visible_area(&self) -> Rect {
        Rect::new(
            self.scroll.x,
            self.scroll.y,
            i32::from(self.cols) * CELL_W,
            i32::from(self.rows) * CELL_H,
        )
    }

    fn set_content_size(&mut self, size: Size) {
        self.content = size;
    }

    fn scroll_to(&mut self, x: i32, y: i32) {
        let max_x = (self.content.width - i32::from(self.cols) * CELL_W).max(0);
        let max_y = (self.content.height - i32::from(self.rows) * CELL_H).max(0);
        self.scroll = Point::new(x.clamp(0, max_x), y.clamp(0, max_y));
    }
}

impl Renderer for TerminalHost {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let first = ((rect.top() - self.scroll.y) / CELL_H).max(0);
        let last = ((rect.bottom() - 1 - self.scroll.y) / CELL_H).min(i32::from(self.rows) - 1);
        let bg = ct(color);
        let blank = " ".repeat(self.cols as usize);
        for row in first..=last {
            self.row_bg[row as usize] = bg;
            let _ = queue!(
                self.out,
                MoveTo(0, row as u16),
                SetBackgroundColor(bg),
                Print(&blank)
            );
        }
    }

    fn draw_image(&mut self, image: ImageId, pos: Point) {
        let glyph = if image.0 >= GLYPH_OPEN { '-' } else { '+' };
        if let Some((col, row)) = self.cell_of(pos) {
            let _ = queue!(
                self.out,
                MoveTo(col, row),
                SetBackgroundColor(self.row_bg[row as usize]),
                SetForegroundColor(CtColor::White),
                Print(glyph)
            );
        }
    }

    fn draw_text(&mut self, text: &str, color: Color, rect: Rect, _align: Alignment) {
        if let Some((col, row)) = self.cell_of(rect.position()) {
            let room = (self.cols - col) as usize;
            let clipped: String = text.chars().take(room).collect();
            let _ = queue!(
                self.out,
                MoveTo(col, row),
                SetBackgroundColor(self.row_bg[row as usize]),
                SetForegroundColor(ct(color)),
                Print(clipped)
            );
        }
    }
}

fn build_tree(view: &mut TreeView) {
    let src = view.add_root(Node::new("src").expanded(true));
    view.add_child(src, Node::new("lib.rs"));
    view.add_child(src, Node::new("geometry.rs"));
    let tree = view.add_child(src, Node::new("tree").expanded(true));
    view.add_child(tree, Node::new("mod.rs"));
    view.add_child(tree, Node::new("node.rs"));
    view.add_child(tree, Node::new("layout.rs"));
    view.add_child(tree, Node::new("selection.rs"));
    view.add_child(tree, Node::new("drag.rs"));
    view.add_child(tree, Node::new("view.rs"));

    let tests = view.add_root(Node::new("tests"));
    view.add_child(tests, Node::new("layout.rs"));
    view.add_child(tests, Node::new("selection.rs"));
    view.add_child(tests, Node::new("drag.rs"));

    let docs = view.add_root(Node::new("docs"));
    for name in ["overview.md", "widgets.md", "input.md", "theming.md"] {
        view.add_child(docs, Node::new(name));
    }

    view.add_root(Node::new("Cargo.toml"));
    view.add_root(Node::new("README.md"));
}

fn status_line(events: &[TreeEvent], view: &TreeView) -> Option<String> {
    events.iter().rev().find_map(|ev| match ev {
        TreeEvent::SelectionChanged => Some(format!("{} selected", view.selection().len())),
        TreeEvent::NodeExpanded(id) => {
            view.node(*id).map(|n| format!("expanded {}", n.label()))
        }
        TreeEvent::NodeCollapsed(id) => {
            view.node(*id).map(|n| format!("collapsed {}", n.label()))
        }
        TreeEvent::NodesMoved(nodes) => Some(format!("moved {} node(s)", nodes.len())),
        TreeEvent::MoveRejected(err) => Some(err.to_string()),
    })
}

fn run() -> std::io::Result<()> {
    let (cols, mut rows) = terminal::size()?;
    let mut host = TerminalHost::new(cols, rows.saturating_sub(1));

    let mut view = TreeView::with_options(TreeOptions {
        multi_select: true,
        allow_move_nodes: true,
        ..TreeOptions::default()
    });
    view.set_glyphs(TreeGlyphs {
        closed: ImageId(GLYPH_CLOSED),
        closed_hover: ImageId(GLYPH_CLOSED + 1),
        closed_hover_selected: ImageId(GLYPH_CLOSED + 2),
        open: ImageId(GLYPH_OPEN),
        open_hover: ImageId(GLYPH_OPEN + 1),
        open_hover_selected: ImageId(GLYPH_OPEN + 2),
    });
    build_tree(&mut view);

    let mut status = String::from("arrows: navigate  click: select  drag: move  q: quit");
    let mut pointer = Point::new(0, 0);

    loop {
        view.ensure_layout(&mut host);
        host.clear()?;
        view.paint(&mut host);
        queue!(
            host.out,
            MoveTo(0, rows.saturating_sub(1)),
            SetBackgroundColor(CtColor::Reset),
            SetForegroundColor(CtColor::Grey),
            Print(&status)
        )?;
        host.out.flush()?;

        if !event::poll(Duration::from_millis(100))? {
            view.on_drag_tick(pointer, &mut host);
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.code == KeyCode::Char('q') {
                    break;
                }
                if let Ok(code) = Key::try_from(key.code) {
                    view.on_key_down(code, Modifiers::from(key.modifiers), &mut host);
                }
            }
            Event::Mouse(mouse) => {
                pointer = host.content_point(mouse.column, mouse.row);
                let modifiers = Modifiers::from(mouse.modifiers);
                match mouse.kind {
                    MouseEventKind::Down(button) => {
                        view.on_mouse_down(pointer, MouseButton::from(button), modifiers);
                    }
                    MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                        view.on_mouse_move(pointer);
                        view.on_drag_tick(pointer, &mut host);
                    }
                    MouseEventKind::Up(_) => view.on_mouse_up(pointer),
                    MouseEventKind::ScrollDown => {
                        let visible = host.visible_area();
                        host.scroll_to(visible.x, visible.y + CELL_H);
                    }
                    MouseEventKind::ScrollUp => {
                        let visible = host.visible_area();
                        host.scroll_to(visible.x, visible.y - CELL_H);
                    }
                    _ => {}
                }
            }
            Event::Resize(new_cols, new_rows) => {
                rows = new_rows;
                host.cols = new_cols;
                host.rows = new_rows.saturating_sub(1);
                host.row_bg = vec![CtColor::Reset; host.rows as usize];
            }
            _ => {}
        }

        if let Some(line) = status_line(&view.take_events(), &view) {
            status = line;
        }
    }

    Ok(())
}

fn main() -> std::io::Result<()> {
    if let Ok(log_file) = File::create("explorer.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;

    let result = run();

    execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}
