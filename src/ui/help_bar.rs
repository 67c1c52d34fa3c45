use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::current_theme;

/// Rend la barre d'aide persistante en bas de l'écran.
pub fn render(frame: &mut Frame, selected: Option<usize>, item_count: usize, area: Rect) {
    let keys = vec![
        ("←/→", "glisser"),
        ("Shift+←/→", "lancer"),
        ("g/G", "premier/dernier"),
        ("0-9", "choisir"),
        ("?", "aide"),
        ("q", "quitter"),
    ];

    let mut spans = build_help_spans(&keys);

    // Ajouter le compteur de sélection à droite.
    let counter = match selected {
        Some(index) => format!("{}/{}", index + 1, item_count),
        None => format!("–/{}", item_count),
    };
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        counter,
        Style::default().fg(current_theme().help_text),
    ));

    let line = Line::from(spans);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(current_theme().border)),
    );

    frame.render_widget(paragraph, area);
}

/// Construit les spans pour la barre d'aide.
fn build_help_spans(keys: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let theme = current_theme();
    let mut spans: Vec<Span> = vec![Span::raw(" ")];

    for (i, (key, label)) in keys.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(theme.help_key)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(":"));
        spans.push(Span::styled(*label, Style::default().fg(theme.help_text)));

        if i < keys.len() - 1 {
            spans.push(Span::raw("  "));
        }
    }

    spans
}
