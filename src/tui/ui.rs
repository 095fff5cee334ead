//! Stateless UI rendering for the word entry screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use super::app::{Alert, App};
use word_scramble::{DictionaryOracle, GameSession};

/// Renders the whole screen.
pub fn draw<D, R>(frame: &mut Frame, app: &App<D, R>)
where
    D: DictionaryOracle,
    R: rand::Rng,
{
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Entry field
            Constraint::Min(3),    // Accepted words
            Constraint::Length(4), // Totals
            Constraint::Length(1), // Help
        ])
        .split(area);

    draw_title(frame, chunks[0], app.session());
    draw_input(frame, chunks[1], app.input());
    draw_words(frame, chunks[2], app.session());
    draw_totals(frame, chunks[3], app.session());

    let help = Paragraph::new("Enter: submit   Ctrl-N: new word   Esc: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    if let Some(alert) = app.alert() {
        draw_alert(frame, area, alert);
    }
}

fn draw_title(frame: &mut Frame, area: Rect, session: &GameSession) {
    let title = Paragraph::new(session.root_word().to_string())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().title("Word Scramble").borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn draw_input(frame: &mut Frame, area: Rect, input: &str) {
    let entry = Paragraph::new(input.to_string())
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().title("Enter your word").borders(Borders::ALL));
    frame.render_widget(entry, area);

    let typed = u16::try_from(input.chars().count()).unwrap_or(u16::MAX);
    let max_x = area.x + area.width.saturating_sub(2);
    frame.set_cursor_position(((area.x + 1).saturating_add(typed).min(max_x), area.y + 1));
}

fn draw_words(frame: &mut Frame, area: Rect, session: &GameSession) {
    let items: Vec<ListItem> = session
        .accepted_words()
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("({:>2}) ", word.chars().count()),
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                ),
                Span::raw(word.clone()),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().title("Words").borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn draw_totals(frame: &mut Frame, area: Rect, session: &GameSession) {
    let totals = Paragraph::new(vec![
        Line::from(format!("Total words = {}", session.word_count())),
        Line::from(format!("Total letters = {}", session.total_letters())),
    ])
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(totals, area);
}

fn draw_alert(frame: &mut Frame, area: Rect, alert: Alert) {
    let popup = center_rect(area, 44, 7);
    let body = Paragraph::new(vec![
        Line::from(alert.message),
        Line::from(""),
        Line::from(Span::styled("[ OK ]", Style::default().add_modifier(Modifier::REVERSED))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(alert.title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Red)),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(body, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::InputAction;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};
    use word_scramble::{Game, WordList};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draw_shows_root_words_and_totals() {
        let dictionary = |word: &str, _: &str| word == "cat";
        let game = Game::new(WordList::parse("bobcat"), dictionary, StdRng::seed_from_u64(1), "en");
        let mut app = App::new(game);
        for c in "cat".chars() {
            app.handle(InputAction::Type(c));
        }
        app.handle(InputAction::Submit);

        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("bobcat"));
        assert!(text.contains("( 3) cat"));
        assert!(text.contains("Total words = 1"));
        assert!(text.contains("Total letters = 3"));
    }

    #[test]
    fn test_draw_shows_alert() {
        let dictionary = |_: &str, _: &str| false;
        let game = Game::new(WordList::parse("bobcat"), dictionary, StdRng::seed_from_u64(1), "en");
        let mut app = App::new(game);
        for c in "bobcat".chars() {
            app.handle(InputAction::Type(c));
        }
        app.handle(InputAction::Submit);

        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Invalid word"));
        assert!(text.contains("Nice try"));
    }
}
