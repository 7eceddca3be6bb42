// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use bodega_app::{BrowseCommand, BrowseState, button_id};
use bodega_catalog::{CatalogEvent, CatalogStore, LoadPhase};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

const CARD_HEIGHT: u16 = 7;
const MIN_CARD_WIDTH: u16 = 26;
const ACTIVE_FILTER_MARK: &str = "▼";
const STATUS_CLEAR_SECS: u64 = 4;

/// Events delivered to the UI loop from outside the key-event path: fetch
/// completions from the runtime's workers and timed status clears.
#[derive(Debug, Clone, PartialEq)]
pub enum InternalEvent {
    Catalog(CatalogEvent),
    ClearStatus { token: u64 },
}

/// Supplied by the binary: launches both catalog fetches. Each fetch runs
/// concurrently and reports its completion as an `InternalEvent::Catalog`;
/// no ordering is guaranteed between the two.
pub trait AppRuntime {
    fn start_catalog_load(&mut self, tx: Sender<InternalEvent>);
}

#[derive(Debug, Clone, PartialEq)]
struct FilterButton {
    label: String,
    id: String,
}

#[derive(Debug, Clone, PartialEq)]
struct ViewData {
    store: CatalogStore,
    buttons: Vec<FilterButton>,
    cursor: usize,
    search_editing: bool,
    scroll_row: usize,
    grid_columns: usize,
    help_visible: bool,
    status_token: u64,
}

impl ViewData {
    fn new(grid_columns: usize) -> Self {
        Self {
            store: CatalogStore::new(),
            buttons: Vec::new(),
            cursor: 0,
            search_editing: false,
            scroll_row: 0,
            grid_columns: grid_columns.max(1),
            help_visible: false,
            status_token: 0,
        }
    }
}

pub fn run_app<R: AppRuntime>(
    state: &mut BrowseState,
    runtime: &mut R,
    grid_columns: usize,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::new(grid_columns);
    let (internal_tx, internal_rx) = mpsc::channel();
    runtime.start_catalog_load(internal_tx.clone());

    let mut result = Ok(());
    loop {
        process_internal_events(state, &mut view_data, &internal_tx, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn process_internal_events(
    state: &mut BrowseState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(BrowseCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
            InternalEvent::Catalog(event) => {
                let trace = view_data.store.apply(event);
                sync_filter_buttons(view_data);
                emit_status(state, view_data, tx, trace);
            }
        }
    }
}

/// Builds the filter-button row, exactly once, when the category fetch
/// settles with data.
fn sync_filter_buttons(view_data: &mut ViewData) {
    if !view_data.buttons.is_empty() {
        return;
    }
    if *view_data.store.categories_phase() != LoadPhase::Ready {
        return;
    }
    view_data.buttons = view_data
        .store
        .categories()
        .iter()
        .map(|label| FilterButton {
            label: label.clone(),
            id: button_id(label),
        })
        .collect();
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(STATUS_CLEAR_SECS));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut BrowseState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(BrowseCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

/// Returns true when the app should exit.
fn handle_key_event(
    state: &mut BrowseState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
        }
        return false;
    }

    if view_data.search_editing {
        handle_search_key(state, view_data, key);
        return false;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return true,
        (KeyCode::Char('?'), _) => {
            view_data.help_visible = true;
        }
        (KeyCode::Char('/'), KeyModifiers::NONE) => {
            view_data.search_editing = true;
            emit_status(state, view_data, internal_tx, "search: type, enter when done");
        }
        (KeyCode::Esc, _) => {
            if !state.search.is_empty() {
                state.dispatch(BrowseCommand::EditSearch(String::new()));
                view_data.scroll_row = 0;
                emit_status(state, view_data, internal_tx, "search cleared");
            }
        }
        (KeyCode::Left, _) | (KeyCode::Char('b'), KeyModifiers::NONE) => {
            move_button_cursor(view_data, -1);
        }
        (KeyCode::Right, _) | (KeyCode::Char('f'), KeyModifiers::NONE) => {
            move_button_cursor(view_data, 1);
        }
        (KeyCode::Enter, _) | (KeyCode::Char(' '), KeyModifiers::NONE) => {
            toggle_selected_filter(state, view_data, internal_tx);
        }
        (KeyCode::Char('s'), KeyModifiers::NONE) => {
            let criterion = state.sort.next();
            state.dispatch(BrowseCommand::SelectSort(criterion));
            view_data.scroll_row = 0;
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("sort: {}", criterion.label()),
            );
        }
        (KeyCode::Up, _) => {
            view_data.scroll_row = view_data.scroll_row.saturating_sub(1);
        }
        (KeyCode::Down, _) => {
            scroll_down(state, view_data, 1);
        }
        (KeyCode::PageUp, _) => {
            view_data.scroll_row = view_data.scroll_row.saturating_sub(3);
        }
        (KeyCode::PageDown, _) => {
            scroll_down(state, view_data, 3);
        }
        _ => {}
    }
    false
}

fn handle_search_key(state: &mut BrowseState, view_data: &mut ViewData, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            view_data.search_editing = false;
        }
        KeyCode::Backspace => {
            let mut text = state.search.clone();
            text.pop();
            state.dispatch(BrowseCommand::EditSearch(text));
            view_data.scroll_row = 0;
        }
        KeyCode::Char(character) => {
            let mut text = state.search.clone();
            text.push(character);
            state.dispatch(BrowseCommand::EditSearch(text));
            view_data.scroll_row = 0;
        }
        _ => {}
    }
}

fn move_button_cursor(view_data: &mut ViewData, delta: isize) {
    if view_data.buttons.is_empty() {
        return;
    }
    let len = view_data.buttons.len() as isize;
    let current = view_data.cursor as isize;
    view_data.cursor = (current + delta).rem_euclid(len) as usize;
}

fn toggle_selected_filter(
    state: &mut BrowseState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(button) = view_data.buttons.get(view_data.cursor) else {
        return;
    };
    let label = button.label.clone();
    state.dispatch(BrowseCommand::ToggleFilter(label));
    view_data.scroll_row = 0;

    let message = match state.filter.label() {
        Some(active) => format!("filter: {active}"),
        None => "filter cleared".to_owned(),
    };
    emit_status(state, view_data, internal_tx, message);
}

fn scroll_down(state: &BrowseState, view_data: &mut ViewData, rows: usize) {
    let visible = state.visible_products(view_data.store.products()).len();
    let total_rows = visible.div_ceil(view_data.grid_columns);
    let max_row = total_rows.saturating_sub(1);
    view_data.scroll_row = (view_data.scroll_row + rows).min(max_row);
}

fn render(frame: &mut ratatui::Frame<'_>, state: &BrowseState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let buttons = Paragraph::new(button_row_line(state, view_data))
        .block(Block::default().title("bodega").borders(Borders::ALL));
    frame.render_widget(buttons, layout[0]);

    let query = Paragraph::new(query_bar_text(state, view_data))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(query, layout[1]);

    render_grid(frame, layout[2], state, view_data);

    let status = Paragraph::new(status_text(state))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(status, layout[3]);

    if view_data.help_visible {
        let area = centered_rect(60, 55, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

/// One span per category button; the cursor is bold, the active filter is
/// cyan with a marker.
fn button_row_line<'a>(state: &BrowseState, view_data: &'a ViewData) -> Line<'a> {
    if view_data.buttons.is_empty() {
        let placeholder = match view_data.store.categories_phase() {
            LoadPhase::Loading => "loading categories...",
            LoadPhase::Failed(_) => "no category buttons (fetch failed)",
            LoadPhase::Ready => "no categories",
        };
        return Line::from(Span::styled(
            placeholder,
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut spans = Vec::with_capacity(view_data.buttons.len() * 2);
    for (index, button) in view_data.buttons.iter().enumerate() {
        let active = state.filter.is_category(&button.label);
        let mut style = Style::default();
        if active {
            style = style.fg(Color::Cyan);
        }
        if index == view_data.cursor {
            style = style.add_modifier(Modifier::BOLD).add_modifier(Modifier::UNDERLINED);
        }
        let text = if active {
            format!("{ACTIVE_FILTER_MARK} {}", button.label)
        } else {
            button.label.clone()
        };
        spans.push(Span::styled(format!(" {text} "), style));
        if index + 1 < view_data.buttons.len() {
            spans.push(Span::raw("|"));
        }
    }
    Line::from(spans)
}

fn query_bar_text(state: &BrowseState, view_data: &ViewData) -> String {
    let search = if view_data.search_editing {
        format!("{}▏", state.search)
    } else if state.search.is_empty() {
        "(none)".to_owned()
    } else {
        state.search.clone()
    };
    format!("search: {search}    sort: {}", state.sort.label())
}

fn render_grid(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &BrowseState,
    view_data: &ViewData,
) {
    if !view_data.store.is_settled() {
        let loading = Paragraph::new("fetching products and categories...")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("products"));
        frame.render_widget(loading, area);
        return;
    }

    let products = state.visible_products(view_data.store.products());
    if products.is_empty() {
        let message = match view_data.store.products_phase() {
            LoadPhase::Failed(reason) => format!("catalog unavailable: {reason}"),
            _ => "no products match".to_owned(),
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("products"));
        frame.render_widget(empty, area);
        return;
    }

    let columns = grid_columns_for_width(area.width, view_data.grid_columns);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let first = view_data.scroll_row * columns;

    let row_constraints = vec![Constraint::Length(CARD_HEIGHT); visible_rows];
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    let column_constraints =
        vec![Constraint::Ratio(1, columns as u32); columns];
    for (row_index, row_area) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(column_constraints.clone())
            .split(*row_area);
        for (column_index, cell_area) in cells.iter().enumerate() {
            let product_index = first + row_index * columns + column_index;
            let Some(product) = products.get(product_index) else {
                continue;
            };
            let card = Paragraph::new(card_body_text(product, cell_area.width)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(truncate(&product.title, cell_area.width.saturating_sub(2) as usize)),
            );
            frame.render_widget(card, *cell_area);
        }
    }
}

/// Cards need a minimum width to stay legible; fewer columns win over
/// unreadable cards.
fn grid_columns_for_width(width: u16, configured: usize) -> usize {
    let fit = (width / MIN_CARD_WIDTH).max(1) as usize;
    configured.min(fit).max(1)
}

fn card_body_text(product: &bodega_app::Product, width: u16) -> String {
    let inner = width.saturating_sub(2) as usize;
    [
        format_price(product.price),
        format!(
            "rating {:.1} ({})",
            product.rating.rate, product.rating.count
        ),
        truncate(&product.category, inner),
        truncate(&product.image, inner),
        "[ add to cart ]".to_owned(),
    ]
    .join("\n")
}

fn format_price(price: f64) -> String {
    format!("$ {price:.2}")
}

fn truncate(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}

fn status_text(state: &BrowseState) -> String {
    match &state.status_line {
        Some(message) => message.clone(),
        None => "?: help  /: search  s: sort  ←/→ + enter: filter  q: quit".to_owned(),
    }
}

fn help_overlay_text() -> String {
    [
        "←/→, b/f     move between category buttons",
        "enter/space  toggle the selected category filter",
        "/            edit the search text (enter/esc to finish)",
        "esc          clear the search text",
        "s            cycle the sort order",
        "↑/↓, pgup/dn scroll the grid",
        "?            toggle this help",
        "q, ctrl-q    quit",
        "",
        "changing the filter or the search resets the sort order.",
    ]
    .join("\n")
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
