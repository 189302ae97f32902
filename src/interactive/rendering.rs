//! TUI rendering with ratatui
//!
//! Root word as the title, the input field, accepted words with their
//! lengths, the score, and a modal dialog for rejected words.

use super::app::{Alert, App};
use crate::dictionary::Dictionary;
use crate::output::formatters::{length_badge, score_label};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<D: Dictionary>(f: &mut Frame, app: &App<'_, D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Input area
            Constraint::Min(6),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_input(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Used words
            Constraint::Percentage(35), // Score
        ])
        .split(chunks[2]);

    render_used_words(f, app, main_chunks[0]);
    render_score(f, app, main_chunks[1]);
    render_status(f, app, chunks[3]);

    if let Some(alert) = &app.alert {
        render_alert(f, alert);
    }
}

fn render_header<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let header = Paragraph::new(app.session.root_word().to_uppercase())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" 🔤 WORD SCRAMBLE ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_input<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let (content, style) = if app.input_buffer.is_empty() {
        (
            "Enter your word",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            app.input_buffer.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    };

    let input = Paragraph::new(content).style(style).block(
        Block::default()
            .title(" Your Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(input, area);
}

fn render_used_words<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .used_words()
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    length_badge(word.chars().count()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(" "),
                Span::raw(word.as_str()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Your Words ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_score<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::raw("Score:  "),
            Span::styled(
                app.session.score().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(format!("Round:  {}", app.stats.rounds_played)),
        Line::from(format!("Best:   {}", score_label(app.stats.best_score))),
        Line::from(format!("Total:  {}", score_label(app.stats.total_words))),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_status<D: Dictionary>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let help_text = if app.alert.is_some() {
        "Enter/Esc: OK"
    } else {
        "Enter: Submit | Ctrl+R: New Word | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_alert(f: &mut Frame, alert: &Alert) {
    let area = centered_rect(50, 7, f.area());

    let content = vec![
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let dialog = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}

/// Rectangle `percent_x` wide and `height` rows tall, centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Language, WordListDictionary};
    use crate::game::GameSession;
    use crate::interactive::app::AppEvent;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen<D: Dictionary>(app: &App<'_, D>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app(corpus: &[String]) -> App<'_, WordListDictionary> {
        let dictionary = WordListDictionary::new(Language::English, ["silent", "net"]);
        App::new(
            GameSession::new(dictionary),
            corpus,
            StdRng::seed_from_u64(5),
        )
    }

    fn submit<D: Dictionary>(app: &mut App<'_, D>, word: &str) {
        for c in word.chars() {
            app.update(AppEvent::Type(c));
        }
        app.update(AppEvent::Submit);
    }

    #[test]
    fn shows_root_word_and_used_words() {
        let corpus = vec!["listen".to_string()];
        let mut app = app(&corpus);
        submit(&mut app, "silent");
        submit(&mut app, "net");

        let text = screen(&app);
        assert!(text.contains("LISTEN"));
        assert!(text.contains("silent"));
        assert!(text.contains("net"));
        assert!(text.contains("Score:  2"));
    }

    #[test]
    fn shows_alert_for_rejection() {
        let corpus = vec!["listen".to_string()];
        let mut app = app(&corpus);
        submit(&mut app, "xq");

        let text = screen(&app);
        assert!(text.contains("Too short!"));
        assert!(text.contains("We want at least 3 letters!"));
        assert!(text.contains("[ OK ]"));
    }

    #[test]
    fn centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 80, 20);
        let rect = centered_rect(50, 7, area);
        assert_eq!(rect.height, 7);
        assert_eq!(rect.width, 40);
        assert!(rect.x > 0 && rect.y > 0);
    }
}
