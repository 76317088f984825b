//! User interface rendering functions for all application screens.

use std::{rc::Rc, time::Duration};

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear, Paragraph,
    },
    Frame,
};

use crate::{
    maze::Position,
    session::{Difficulty, GameSession, TerminalState, TileView},
    types::{DifficultyMenuItem, MainMenuItem, MenuType, Screen},
    visibility::Visibility,
    App,
};

/// Terminal columns used to draw a single maze tile.
///
/// Terminal cells are roughly twice as tall as they are wide, so two columns per tile keep the maze
/// square on screen.
pub(crate) const TILE_WIDTH: usize = 2;

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match &app.screen {
        Screen::MainMenu(item) => main_menu(frame, *item, app.difficulty),
        Screen::DifficultyMenu(item) => difficulty_menu(frame, *item),
        Screen::InGame => in_game(app, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the generic layout structure for the main and difficulty menus.
///
/// This function creates the common layout and block structure used by both menus. The generic
/// part includes the centered positioning and border styling, while the specific menu content is
/// handled by the caller using the [`MenuType`] parameter.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, menu: MenuType) -> Rc<[Rect]> {
    let space = Layout::vertical([
        Constraint::Percentage(30),
        Constraint::Percentage(40),
        Constraint::Percentage(30),
    ])
    .split(frame.area())[1];
    let space = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Percentage(40),
        Constraint::Percentage(30),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(u16::from(menu.value() + 2))])
        .flex(Flex::Center)
        .split(space)[0];

    let hint = match menu {
        MenuType::MainMenu(_) => "(j) down / (k) up / (l) select",
        MenuType::DifficultyMenu(_) => "(j) down / (k) up / (l) select / (h) return",
    };
    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom(hint)
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); usize::from(menu.value())]).split(inner_space)
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu with options for "Play", "Difficulty", and "Quit". It
/// highlights the currently selected option and shows the difficulty "Play" will start.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem, difficulty: Difficulty) {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::MainMenu(3));

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let mut opt1 = Line::raw("Play").centered();
    let mut opt2 = Line::raw(format!("Difficulty: {}", difficulty.repr())).centered();
    let mut opt3 = Line::raw("Quit").centered();
    match item {
        MainMenuItem::Play => {
            opt1 = opt1.style(active_content_style);
            opt2 = opt2.style(content_style);
            opt3 = opt3.style(content_style);
        }
        MainMenuItem::Difficulty => {
            opt1 = opt1.style(content_style);
            opt2 = opt2.style(active_content_style);
            opt3 = opt3.style(content_style);
        }
        MainMenuItem::Quit => {
            opt1 = opt1.style(content_style);
            opt2 = opt2.style(content_style);
            opt3 = opt3.style(active_content_style);
        }
    }

    frame.render_widget(opt1, inner_layout[0]);
    frame.render_widget(opt2, inner_layout[1]);
    frame.render_widget(opt3, inner_layout[2]);
}

/// Renders the difficulty menu with one entry per preset.
pub(crate) fn difficulty_menu(frame: &mut Frame, item: DifficultyMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::DifficultyMenu(4));

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (entry, area) in DifficultyMenuItem::ALL.iter().zip(inner_layout.iter()) {
        let style = if *entry == item {
            active_content_style
        } else {
            content_style
        };

        frame.render_widget(Line::raw(entry.repr()).centered().style(style), *area);
    }
}

/// Renders the in-game screen with the maze, the status line and the outcome banner.
///
/// This function reads the active session through its query surface only. Tiles are drawn on a
/// [`Canvas`] in layers so the player always ends up on top of the start and finish markers.
///
/// # Errors
///
/// This function may return errors if there is no active session or from coordinate conversion
/// operations.
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let session = app
        .session
        .as_ref()
        .ok_or_eyre("failed to retrieve the active game session")?;
    let side = session.side();
    let maze_rows = u16::try_from(side)?;
    let maze_columns = u16::try_from(side * TILE_WIDTH)?;

    // Status line on top, maze in the middle, tooltip at the bottom
    let [status_area, maze_content_area, tooltip_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    let [maze_row] = Layout::vertical([Constraint::Length(maze_rows)])
        .flex(Flex::Center)
        .areas(maze_content_area);
    let [space] = Layout::horizontal([Constraint::Length(maze_columns)])
        .flex(Flex::Center)
        .areas(maze_row);

    // Pre-compute canvas coordinates to handle errors before closures
    let mut floor = Vec::new();
    let mut walls = Vec::new();
    let mut revealed_walls = Vec::new();
    for y in 0..side {
        for x in 0..side {
            let position = Position::new(x, y);
            match session.tile_view(position) {
                Some(TileView::Path) => floor.push(position),
                Some(TileView::Wall) => walls.push(position),
                Some(TileView::RevealedWall) => revealed_walls.push(position),
                None => {}
            }
        }
    }
    let layers = [
        (tile_canvas_coords(&floor, side)?, Color::DarkGray),
        (tile_canvas_coords(&walls, side)?, Color::Green),
        (tile_canvas_coords(&revealed_walls, side)?, Color::Red),
        (tile_canvas_coords(&[session.start()], side)?, Color::Cyan),
        (tile_canvas_coords(&[session.finish()], side)?, Color::Magenta),
        (tile_canvas_coords(&[session.player()], side)?, Color::Yellow),
    ];

    let half_width = (f64::from(maze_columns) - 1.) / 2.;
    let half_height = (f64::from(maze_rows) - 1.) / 2.;
    let maze = Canvas::default()
        .x_bounds([-half_width, half_width])
        .y_bounds([-half_height, half_height])
        .marker(Marker::Block)
        .paint(|ctx| {
            for (coords, color) in &layers {
                ctx.draw(&Points {
                    coords,
                    color: *color,
                });
                ctx.layer();
            }
        });

    frame.render_widget(maze, space);

    frame.render_widget(
        Line::styled(status_text(session), Style::default().fg(Color::Green)).centered(),
        status_area,
    );

    let tooltip_block = Block::bordered()
        .title("(arrows / hjkl / wasd) move / (r) restart / (m) menu / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_area);

    outcome_banner(frame, session, maze_content_area);

    Ok(())
}

/// Renders the end-of-game banner over the maze once the session is over.
pub(crate) fn outcome_banner(frame: &mut Frame, session: &GameSession, area: Rect) {
    let (title, message, color) = match session.terminal() {
        TerminalState::Ongoing => return,
        TerminalState::Won => ("Congratulations!", "You found the way out.", Color::Green),
        TerminalState::Lost => ("Game over", "You ran out of lives.", Color::Red),
    };

    let [banner_row] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(area);
    let [banner] = Layout::horizontal([Constraint::Length(36)])
        .flex(Flex::Center)
        .areas(banner_row);

    let block = Block::bordered()
        .title(title)
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(color));
    let text = vec![
        Line::raw(message).centered(),
        Line::raw(format!(
            "{} in {} steps",
            format_duration(session.elapsed()),
            session.steps()
        ))
        .centered(),
        Line::raw("(r) restart / (m) menu").centered(),
    ];

    frame.render_widget(Clear, banner);
    frame.render_widget(Paragraph::new(text).block(block), banner);
}

/// Builds the status line shown above the maze.
///
/// The memorization countdown is only part of it while the walls are still shown.
pub(crate) fn status_text(session: &GameSession) -> String {
    let mut parts = vec![
        format!("Lives {}/{}", session.lives(), session.settings().lives()),
        format!("Time {}", format_duration(session.elapsed())),
        format!("Steps {}", session.steps()),
    ];
    if session.visibility() == Visibility::Revealed {
        parts.push(format!(
            "Memorize {}",
            format_duration(session.remaining_memorization())
        ));
    }

    parts.join("  |  ")
}

/// Formats a duration as seconds with one decimal.
pub(crate) fn format_duration(duration: Duration) -> String {
    format!("{:.1}s", duration.as_secs_f64())
}

/// Transforms maze tiles to canvas coordinates centered on the origin.
///
/// Every tile covers [`TILE_WIDTH`] horizontally adjacent points. Rows follow coordinate[i] =
/// (n - 1) / 2 - i and columns follow coordinate[i] = i - (n - 1) / 2, where n counts points along
/// the axis.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn tile_canvas_coords(tiles: &[Position], side: usize) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(side)?);
    let cols_n = f64::from(u16::try_from(side * TILE_WIDTH)?);

    let mut coords = Vec::with_capacity(tiles.len() * TILE_WIDTH);
    for tile in tiles {
        let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(tile.y)?);
        for offset in 0..TILE_WIDTH {
            let column = f64::from(u16::try_from(tile.x * TILE_WIDTH + offset)?);
            coords.push((column - (cols_n - 1.) / 2., screen_y));
        }
    }

    Ok(coords)
}
