//! Rendering for the room grid and the status panel.

use app::grid_layout::{GridLayout, ScreenRect, fit_grid};
use macroquad::prelude::*;
use roomgrid::{ConnectionKind, DebugColor, Direction, Grid, ProfileId, Room};


const BORDER_COLOR: Color = Color { r: 0.2, g: 0.2, b: 0.2, a: 1.0 };
const SPAWN_COLOR: Color = YELLOW;
const PANEL_PAD_X: f32 = 15.0;
const PANEL_PAD_Y: f32 = 25.0;
const LINE_HEIGHT: f32 = 20.0;
const FONT_SIZE: f32 = 20.0;
/// Rooms flagged locked are drawn at this opacity.
const LOCKED_ALPHA: f32 = 0.35;

/// Screen area left for the grid once `status_lines` lines of text are drawn on top.
pub fn grid_area(screen_width: f32, screen_height: f32, status_lines: usize) -> ScreenRect {
    let header = PANEL_PAD_Y + status_lines as f32 * LINE_HEIGHT;
    ScreenRect {
        x: PANEL_PAD_X,
        y: header,
        width: (screen_width - 2.0 * PANEL_PAD_X).max(0.0),
        height: (screen_height - header - PANEL_PAD_X).max(0.0),
    }
}

pub fn grid_layout(grid: &Grid, area: ScreenRect) -> GridLayout {
    fit_grid(grid.width(), grid.height(), area)
}

pub fn draw_frame(grid: Option<&Grid>, layout: Option<&GridLayout>, status_lines: &[String]) {
    clear_background(BLACK);
    draw_status_panel(status_lines);
    if let (Some(grid), Some(layout)) = (grid, layout) {
        draw_grid(grid, layout);
    }
}

fn draw_status_panel(lines: &[String]) {
    for (index, line) in lines.iter().enumerate() {
        draw_text(line, PANEL_PAD_X, PANEL_PAD_Y + index as f32 * LINE_HEIGHT, FONT_SIZE, WHITE);
    }
}

fn draw_grid(grid: &Grid, layout: &GridLayout) {
    for room in grid.rooms() {
        let rect = layout.room_rect(room.pos());
        draw_rectangle(rect.x, rect.y, rect.width, rect.height, room_color(room));
        draw_rectangle_lines(rect.x, rect.y, rect.width, rect.height, 1.0, BORDER_COLOR);

        if let Some(label) = room_label(room.profile()) {
            let size = (rect.height * 0.5).max(8.0);
            draw_text(label, rect.x + rect.width * 0.3, rect.y + rect.height * 0.7, size, BLACK);
        }

        for direction in Direction::ALL {
            let Some(color) = door_color(grid.connection_kind(room.pos(), direction)) else {
                continue;
            };
            let door = layout.door_rect(room.pos(), direction);
            draw_rectangle(door.x, door.y, door.width, door.height, color);
        }
    }

    let spawn = layout.room_rect(grid.spawn_room().pos());
    let thickness = (layout.cell_size() * 0.05).max(2.0);
    draw_rectangle_lines(spawn.x, spawn.y, spawn.width, spawn.height, thickness, SPAWN_COLOR);
}

fn to_color(color: DebugColor, alpha: f32) -> Color {
    Color::new(
        f32::from(color.r) / 255.0,
        f32::from(color.g) / 255.0,
        f32::from(color.b) / 255.0,
        alpha,
    )
}

fn room_color(room: &Room) -> Color {
    let alpha = if room.is_locked() { LOCKED_ALPHA } else { 1.0 };
    to_color(room.debug_color(), alpha)
}

fn room_label(profile: ProfileId) -> Option<&'static str> {
    match profile {
        ProfileId::Start => Some("S"),
        ProfileId::Exit => Some("E"),
        ProfileId::Filler | ProfileId::Content(_) => None,
    }
}

/// Sealed walls and missing slots draw nothing.
fn door_color(kind: Option<ConnectionKind>) -> Option<Color> {
    match kind? {
        ConnectionKind::Open => Some(WHITE),
        ConnectionKind::Locked => Some(ORANGE),
        ConnectionKind::Sealed => None,
    }
}
