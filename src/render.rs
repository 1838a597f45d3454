use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::cell::{Cell, Size};
use crate::game::{Game, Status};

pub const TITLE: &str = " Snake Game ";
pub const GAME_OVER_TEXT: &str = "Game Over";
pub const WON_TEXT: &str = "You Win";

/// Terminal columns per grid cell, so cells come out roughly square.
const CELL_WIDTH: u16 = 2;

/// Draws the header, the bordered play area, and either the board or the end
/// screen. Reads the game only.
pub fn draw(frame: &mut Frame, game: &Game) {
    let layout = Layout::default()
        .direction(layout::Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Score
            Constraint::Min(0),    // Play area
        ])
        .split(frame.area());

    frame.render_widget(
        Paragraph::new(format!(
            "Score: {}    Length: {}",
            game.score(),
            game.snek().len()
        ))
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL)),
        layout[0],
    );

    let block = Block::default().title(TITLE).borders(Borders::ALL);
    let inner_area = block.inner(layout[1]);
    frame.render_widget(block, layout[1]);

    match game.status() {
        Status::Running => match board_area(inner_area, game.size()) {
            Some(area) => frame.render_widget(game, area),
            None => frame.render_widget(
                Paragraph::new(format!(
                    "Terminal too small for a {}x{} grid",
                    game.size().width,
                    game.size().height
                ))
                .alignment(Alignment::Center),
                inner_area,
            ),
        },
        Status::Over(_) | Status::Won => {
            let headline = if game.status() == Status::Won {
                WON_TEXT
            } else {
                GAME_OVER_TEXT
            };
            frame.render_widget(
                Paragraph::new(vec![
                    Line::from(headline.red().bold()),
                    Line::from(format!("Final Score: {}", game.score())),
                    Line::from("Press Q to quit".dark_gray()),
                ])
                .alignment(Alignment::Center),
                centered_rows(inner_area, 3),
            );
        }
    }
}

/// The rectangle the board occupies, centered in `area`, or `None` if the
/// grid does not fit.
pub fn board_area(area: Rect, size: Size) -> Option<Rect> {
    let width = size.width.checked_mul(CELL_WIDTH)?;
    let height = size.height;
    if width > area.width || height > area.height {
        return None;
    }
    Some(Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    })
}

fn centered_rows(area: Rect, rows: u16) -> Rect {
    let height = rows.min(area.height);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    }
}

/// Screen position of the left column of `cell`, if it is on the board and
/// inside `area`.
fn screen_pos(cell: Cell, size: Size, area: Rect) -> Option<(u16, u16)> {
    if !size.contains(cell) {
        return None;
    }
    let x = area.x + cell.x as u16 * CELL_WIDTH;
    let y = area.y + cell.y as u16;
    if x + CELL_WIDTH > area.right() || y >= area.bottom() {
        return None;
    }
    Some((x, y))
}

impl Widget for &Game {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let size = self.size();

        for cell in size.cells() {
            if let Some((x, y)) = screen_pos(cell, size, area) {
                buf[(x, y)].set_symbol("·").set_fg(Color::DarkGray);
                buf[(x + 1, y)].set_symbol(" ");
            }
        }

        for (i, cell) in self.snek().cells().enumerate() {
            let color = if i == 0 { Color::LightGreen } else { Color::Green };
            if let Some((x, y)) = screen_pos(*cell, size, area) {
                for dx in 0..CELL_WIDTH {
                    buf[(x + dx, y)].set_symbol(" ").set_bg(color);
                }
            }
        }

        if let Some((x, y)) = self.food().and_then(|f| screen_pos(f, size, area)) {
            for dx in 0..CELL_WIDTH {
                buf[(x + dx, y)].set_symbol(" ").set_bg(Color::Red);
            }
        }
    }
}
