//! Screen-space layout for the room preview. North is drawn at the top.

use roomgrid::{Direction, GridPos};

/// Share of a cell's edge covered by the room square.
const ROOM_FILL: f32 = 0.625;
/// Door bar thickness relative to the room edge.
const DOOR_WIDTH: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    left: f32,
    top: f32,
    cell: f32,
    room: f32,
    columns: usize,
    rows: usize,
}

/// Fits square cells for a `columns` x `rows` grid inside `area`, centred.
pub fn fit_grid(columns: usize, rows: usize, area: ScreenRect) -> GridLayout {
    let columns = columns.max(1);
    let rows = rows.max(1);
    let cell = (area.width / columns as f32).min(area.height / rows as f32).max(0.0);
    GridLayout {
        left: area.x + (area.width - cell * columns as f32) / 2.0,
        top: area.y + (area.height - cell * rows as f32) / 2.0,
        cell,
        room: cell * ROOM_FILL,
        columns,
        rows,
    }
}

impl GridLayout {
    pub fn cell_size(&self) -> f32 {
        self.cell
    }

    pub fn room_rect(&self, pos: GridPos) -> ScreenRect {
        let inset = (self.cell - self.room) / 2.0;
        let row_from_top = self.rows as f32 - 1.0 - pos.y as f32;
        ScreenRect {
            x: self.left + pos.x as f32 * self.cell + inset,
            y: self.top + row_from_top * self.cell + inset,
            width: self.room,
            height: self.room,
        }
    }

    /// The half of the gap on `direction`'s side of the room that a door
    /// mark fills. Neighbouring rooms draw the other half.
    pub fn door_rect(&self, pos: GridPos, direction: Direction) -> ScreenRect {
        let room = self.room_rect(pos);
        let half_gap = (self.cell - self.room) / 2.0;
        let bar = self.room * DOOR_WIDTH;
        let centre_x = room.x + (self.room - bar) / 2.0;
        let centre_y = room.y + (self.room - bar) / 2.0;
        match direction {
            Direction::North => {
                ScreenRect { x: centre_x, y: room.y - half_gap, width: bar, height: half_gap }
            }
            Direction::South => {
                ScreenRect { x: centre_x, y: room.y + self.room, width: bar, height: half_gap }
            }
            Direction::East => {
                ScreenRect { x: room.x + self.room, y: centre_y, width: half_gap, height: bar }
            }
            Direction::West => {
                ScreenRect { x: room.x - half_gap, y: centre_y, width: half_gap, height: bar }
            }
        }
    }

    /// Grid cell under a screen point, if any.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<GridPos> {
        if self.cell <= 0.0 {
            return None;
        }
        let column = ((x - self.left) / self.cell).floor();
        let row_from_top = ((y - self.top) / self.cell).floor();
        if column < 0.0
            || row_from_top < 0.0
            || column >= self.columns as f32
            || row_from_top >= self.rows as f32
        {
            return None;
        }
        Some(GridPos::new(column as i32, self.rows as i32 - 1 - row_from_top as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> ScreenRect {
        ScreenRect { x: 0.0, y: 0.0, width: 400.0, height: 200.0 }
    }

    #[test]
    fn cells_are_square_and_centred() {
        let layout = fit_grid(2, 2, area());
        assert_eq!(layout.cell_size(), 100.0);
        let south_west = layout.room_rect(GridPos::new(0, 0));
        assert_eq!(south_west, ScreenRect { x: 118.75, y: 118.75, width: 62.5, height: 62.5 });
    }

    #[test]
    fn north_row_is_drawn_on_top() {
        let layout = fit_grid(1, 3, area());
        let south = layout.room_rect(GridPos::new(0, 0));
        let north = layout.room_rect(GridPos::new(0, 2));
        assert!(north.y < south.y);
    }

    #[test]
    fn door_halves_meet_between_neighbours() {
        let layout = fit_grid(2, 1, area());
        let east = layout.door_rect(GridPos::new(0, 0), Direction::East);
        let west = layout.door_rect(GridPos::new(1, 0), Direction::West);
        assert_eq!(east.x + east.width, west.x);
        assert_eq!(east.y, west.y);
    }

    #[test]
    fn cell_lookup_inverts_room_placement() {
        let layout = fit_grid(4, 3, area());
        for y in 0..3 {
            for x in 0..4 {
                let pos = GridPos::new(x, y);
                let rect = layout.room_rect(pos);
                let found = layout.cell_at(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0);
                assert_eq!(found, Some(pos));
            }
        }
        assert_eq!(layout.cell_at(-1.0, 10.0), None);
        assert_eq!(layout.cell_at(399.0, 199.0), None);
    }
}
