use crate::game::{BoardSnapshot, GameState, GameStatus, Player, Position, LINE_LENGTH};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(board_height(game_state.rows())), // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state.status(), chunks[0]);
    render_board(
        frame,
        &game_state.board_snapshot(),
        game_state.winning_line(),
        selected_column,
        chunks[1],
    );
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Board rows plus the column labels, both borders and the selector.
fn board_height(rows: usize) -> u16 {
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(4)
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

/// Header text and color for a status
pub(crate) fn status_line(status: GameStatus) -> (String, Color) {
    match status {
        GameStatus::InProgress { to_move } => (
            format!("Current Player: {}", to_move.name()),
            player_color(to_move),
        ),
        GameStatus::Won(winner) => (
            format!("Game Over  |  {} wins!", winner.name()),
            player_color(winner),
        ),
        GameStatus::Draw => ("Game Over  |  It's a tie!".to_string(), Color::White),
    }
}

fn render_header(frame: &mut Frame, status: GameStatus, area: Rect) {
    let (text, color) = status_line(status);

    let header = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &BoardSnapshot,
    winning_line: Option<[Position; LINE_LENGTH]>,
    selected_column: usize,
    area: Rect,
) {
    let columns = board.columns();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..columns {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(columns * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for (row, cells) in board.iter_rows().enumerate() {
        let mut row_spans = vec![Span::raw("  ║")];

        for (col, cell) in cells.iter().enumerate() {
            let winning = winning_line.is_some_and(|line| line.contains(&Position::new(row, col)));
            let (symbol, mut style) = match cell.player() {
                None => (" . ", Style::default().fg(Color::DarkGray)),
                Some(player) => (" ● ", Style::default().fg(player_color(player))),
            };
            if winning {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..columns {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let text = "←/→: Move  |  Enter: Drop  |  1-9: Drop in column  |  R: Restart  |  Q: Quit";
    let controls = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
