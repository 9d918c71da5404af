//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::{Marker, DOT},
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    game::Game,
    raster,
    types::{MainMenuItem, MenuType, Reveal, Screen},
    App,
};

/// Color of the revealed search order.
const SEARCH_COLOR: Color = Color::Rgb(102, 153, 153);

/// Color of the revealed answer path.
const ANSWER_COLOR: Color = Color::Rgb(255, 165, 0);

/// Key help shown below the maze.
const IN_GAME_HELP: &str =
    "(arrows) move / (a) answer / (b) bfs / (d) dfs / (c) clear / (r) new / (h) menu";

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
        Screen::MainMenu(item) => main_menu(frame, *item),
        Screen::SizeMenu => size_menu(app, frame)?,
        Screen::InGame => in_game(app, frame)?,
        Screen::Solved => {
            in_game(app, frame)?;
            solved(frame);
        }
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

/// Renders the generic layout structure for the main and size menus.
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
        Constraint::Percentage(35),
        Constraint::Percentage(30),
        Constraint::Percentage(35),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(u16::from(menu.value()) + 2)])
        .flex(Flex::Center)
        .split(space)[0];

    let help = match menu {
        MenuType::MainMenu(_) => "(j) down / (k) up / (l) select",
        MenuType::SizeMenu(_) => "(j) down / (k) up / (l) select / (h) return",
    };
    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom(help)
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); menu.value().into()]).split(inner_space)
}

/// Renders the main menu screen with navigation options.
///
/// This function displays the main menu with options for "Start Game", "Size", and "Quit". It
/// highlights the currently selected option and provides visual feedback for user navigation.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::MainMenu(3));

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let mut opt1 = Line::raw("Start Game").centered();
    let mut opt2 = Line::raw("Size").centered();
    let mut opt3 = Line::raw("Quit").centered();
    match item {
        MainMenuItem::StartGame => {
            opt1 = opt1.style(active_content_style);
            opt2 = opt2.style(content_style);
            opt3 = opt3.style(content_style);
        }
        MainMenuItem::Size => {
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

/// Renders the size menu with the list of available maze sizes.
///
/// The entry under the cursor is highlighted, and a dot marks the size the next maze will be
/// generated with.
///
/// # Errors
///
/// This function may return errors if the size list does not fit the menu layout.
pub(crate) fn size_menu(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let inner_layout = init_menu(frame, MenuType::SizeMenu(u8::try_from(app.sizes.len())?));

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (idx, (&(width, height), row)) in app.sizes.iter().zip(inner_layout.iter()).enumerate() {
        let style = if idx == app.size_cursor {
            active_content_style
        } else {
            content_style
        };
        let marker = if (width, height) == app.size { DOT } else { " " };

        frame.render_widget(
            Line::styled(format!("{marker} {width} x {height}"), style).centered(),
            *row,
        );
    }

    Ok(())
}

/// Renders the in-game screen with the maze, the player and the revealed paths.
///
/// The maze is rasterized into blocks and drawn on a [`Canvas`] in layers, later layers covering
/// earlier ones: walls, trail, revealed path, goal and player.
///
/// # Errors
///
/// This function may return errors if no game is running or from coordinate conversion
/// operations.
#[expect(
    clippy::too_many_lines,
    reason = "UI rendering function requires many lines for layout and drawing operations."
)]
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let game = app
        .game
        .as_ref()
        .ok_or_eyre("failed to retrieve the running game")?;
    let size = raster::block_size(&game.maze)?;
    let (maze_columns, maze_rows) = size;

    // Create overall layout: maze area + tooltip at bottom
    let overall_layout = Layout::vertical([
        Constraint::Min(1),    // Maze and padding area
        Constraint::Length(3), // Tooltip block
    ])
    .split(frame.area());

    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    // Create maze layout within the content area
    let main_layout = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(maze_rows)?),
        Constraint::Min(1),
    ])
    .split(maze_content_area);

    let maze_area = main_layout
        .get(1)
        .ok_or_eyre("failed to get maze area from layout")?;

    let space = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(maze_columns)?),
        Constraint::Min(1),
    ])
    .split(*maze_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze space from horizontal layout")?;

    // Pre-compute screen coordinates to handle errors before closures
    let wall_screen_coords =
        raster::transform_to_screen_coords(&raster::wall_blocks(&game.maze)?, size)?;
    let trail_screen_coords = raster::transform_to_screen_coords(
        &raster::cell_blocks(&game.maze, &game.player.trail)?,
        size,
    )?;
    let (reveal_blocks, reveal_color) = reveal_layer(game)?;
    let reveal_screen_coords = raster::transform_to_screen_coords(&reveal_blocks, size)?;
    let goal_screen_coords = raster::transform_to_screen_coords(
        &raster::cell_blocks(&game.maze, &[game.maze.goal()])?,
        size,
    )?;
    let player_screen_coords = raster::transform_to_screen_coords(
        &raster::cell_blocks(&game.maze, &[game.player.current])?,
        size,
    )?;

    let maze = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Block)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &wall_screen_coords,
                color: Color::Green,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &trail_screen_coords,
                color: Color::LightRed,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &reveal_screen_coords,
                color: reveal_color,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &goal_screen_coords,
                color: Color::Blue,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &player_screen_coords,
                color: Color::Red,
            });
        });

    frame.render_widget(maze, space);

    // Render tooltip as a block at the bottom with top border
    let status = match game.replay.kind {
        Some(Reveal::Answer) => format!(
            "{}x{} / seed {} / answer",
            game.maze.width(),
            game.maze.height(),
            game.seed
        ),
        Some(Reveal::Search(mode)) => format!(
            "{}x{} / seed {} / {}",
            game.maze.width(),
            game.maze.height(),
            game.seed,
            mode.label()
        ),
        None => format!(
            "{}x{} / seed {}",
            game.maze.width(),
            game.maze.height(),
            game.seed
        ),
    };
    let tooltip_block = Block::bordered()
        .title(IN_GAME_HELP)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    let status_area = tooltip_block.inner(tooltip_area);

    frame.render_widget(tooltip_block, tooltip_area);
    frame.render_widget(Line::raw(status).centered(), status_area);

    Ok(())
}

/// Blocks and color of the path currently revealed over the maze.
///
/// The answer is drawn as a continuous route, passages included. A search order is drawn cell by
/// cell, since consecutive cells of a discovery order are not necessarily neighbors.
fn reveal_layer(game: &Game) -> Result<(Vec<(usize, usize)>, Color)> {
    let layer = match game.replay.kind {
        Some(Reveal::Answer) => (
            raster::route_blocks(&game.maze, &game.replay.revealed)?,
            ANSWER_COLOR,
        ),
        Some(Reveal::Search(_)) => (
            raster::cell_blocks(&game.maze, &game.replay.revealed)?,
            SEARCH_COLOR,
        ),
        None => (Vec::new(), SEARCH_COLOR),
    };

    Ok(layer)
}

/// Renders the solved banner over the maze.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn solved(frame: &mut Frame) {
    let space = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::Start)
        .split(frame.area())[0];
    let space = Layout::horizontal([Constraint::Max(44)])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title_bottom("(r) new maze / (h) menu / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);
    let inner_space = block.inner(space);

    frame.render_widget(Clear, space);
    frame.render_widget(block, space);
    frame.render_widget(
        Line::styled("The maze is solved!", Style::default().fg(Color::White)).centered(),
        inner_space,
    );
}
