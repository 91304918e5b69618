//! Plain-text rendering of a generated grid, north row first.

use roomgrid::{ConnectionKind, Direction, Grid, GridPos, ProfileId, Room, RoomFilter};

fn room_glyph(room: &Room) -> char {
    match room.profile() {
        ProfileId::Start => '<',
        ProfileId::Exit => '>',
        ProfileId::Filler => '.',
        ProfileId::Content(_) => room.profile_name().chars().next().unwrap_or('?'),
    }
}

fn east_glyph(kind: Option<ConnectionKind>) -> char {
    match kind {
        Some(ConnectionKind::Open) => '-',
        Some(ConnectionKind::Locked) => '=',
        Some(ConnectionKind::Sealed) | None => ' ',
    }
}

fn south_glyph(kind: Option<ConnectionKind>) -> char {
    match kind {
        Some(ConnectionKind::Open) => '|',
        Some(ConnectionKind::Locked) => '#',
        Some(ConnectionKind::Sealed) | None => ' ',
    }
}

/// One text line per room row, with a connector line between rows.
pub fn render_lines(grid: &Grid) -> Vec<String> {
    let width = grid.width() as i32;
    let height = grid.height() as i32;
    let mut lines = Vec::with_capacity(grid.height() * 2);

    for y in (0..height).rev() {
        let mut rooms = String::new();
        for x in 0..width {
            let pos = GridPos::new(x, y);
            let glyph = grid.room(pos, RoomFilter::any()).map_or('?', room_glyph);
            rooms.push(glyph);
            if x + 1 < width {
                rooms.push(east_glyph(grid.connection_kind(pos, Direction::East)));
            }
        }
        lines.push(rooms.trim_end().to_string());

        if y > 0 {
            let mut doors = String::new();
            for x in 0..width {
                doors.push(south_glyph(grid.connection_kind(GridPos::new(x, y), Direction::South)));
                if x + 1 < width {
                    doors.push(' ');
                }
            }
            lines.push(doors.trim_end().to_string());
        }
    }
    lines
}
