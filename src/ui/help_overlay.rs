use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::current_theme;

/// Rend l'overlay d'aide centré sur l'écran.
pub fn render(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    // Effacer l'arrière-plan derrière le popup.
    frame.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Aide ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(current_theme().help_key)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
}

/// Construit le contenu textuel de l'overlay d'aide.
fn build_help_content() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        section_header("Scroll"),
        separator(),
        key_line("← / h", "Glisser vers la gauche"),
        key_line("→ / l", "Glisser vers la droite"),
        key_line("Shift+← / H", "Lancer vers la gauche"),
        key_line("Shift+→ / L", "Lancer vers la droite"),
        Line::from(""),
        section_header("Sélection"),
        separator(),
        key_line("0-9", "Sélectionner l'élément"),
        key_line("g / Home", "Premier élément"),
        key_line("G / End", "Dernier élément"),
        Line::from(""),
        section_header("Interface"),
        separator(),
        key_line("?", "Afficher/masquer l'aide"),
        key_line("q / Ctrl+C", "Quitter"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Esc ou ? pour fermer",
            Style::default()
                .fg(current_theme().help_text)
                .add_modifier(Modifier::ITALIC),
        )]),
    ]
}

fn section_header(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(current_theme().marker),
    )])
}

fn separator() -> Line<'static> {
    Line::from("─".repeat(30))
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    let padding = 16usize.saturating_sub(key.len());
    Line::from(vec![
        Span::styled(key.to_string(), Style::default().fg(current_theme().help_key)),
        Span::raw(format!("{}{}", " ".repeat(padding), desc)),
    ])
}

/// Calcule un rectangle centré de dimensions données (en pourcentage).
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}
