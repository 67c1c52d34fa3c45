use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};

use crate::error::{Result, RubanError};
use crate::picker::{CenterSnapSelector, PickerGeometry, SettleKind};
use crate::strip::StripSurface;
use crate::ui;

/// Fraction de cellule parcourue par un glissement sans élan.
const DRAG_STEP: f64 = 0.6;

/// Vitesse initiale d'un lancer, en fraction de cellule par image.
const FLING_VELOCITY: f64 = 0.45;

/// Actions possibles déclenchées par l'utilisateur.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Quit,
    StepLeft,
    StepRight,
    FlingLeft,
    FlingRight,
    SelectFirst,
    SelectLast,
    SelectIndex(usize),
    ToggleHelp,
}

/// Mode d'affichage actif.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewMode {
    Picker,
    Help,
}

/// État principal de l'application.
pub struct App {
    pub selector: CenterSnapSelector,
    pub surface: StripSurface,
    pub view_mode: ViewMode,
    pub should_quit: bool,
    /// Sélection initiale demandée par la CLI, appliquée après le premier
    /// layout (la géométrie n'existe pas avant).
    pending_select: Option<usize>,
}

impl App {
    /// Crée une nouvelle instance de l'application.
    pub fn new(items: Vec<String>, initial_select: Option<usize>) -> Self {
        let geometry = PickerGeometry::new(0.0);
        let item_count = items.len();

        Self {
            selector: CenterSnapSelector::new(items, geometry),
            surface: StripSurface::new(geometry, item_count),
            view_mode: ViewMode::Picker,
            should_quit: false,
            pending_select: initial_select,
        }
    }

    /// Met à jour la géométrie à partir de la zone du ruban, puis applique la
    /// sélection initiale en attente le cas échéant.
    pub fn update_layout(&mut self, strip_area: Rect) {
        let geometry = PickerGeometry::new(f64::from(strip_area.width));
        self.selector.set_geometry(geometry);
        self.surface.layout(geometry, self.selector.len());

        if let Some(index) = self.pending_select.take() {
            self.selector.select_item(&mut self.surface, index, false);
        }
    }

    /// Applique une action à l'état de l'application.
    pub fn apply_action(&mut self, action: AppAction) {
        let cell_width = self.surface.geometry().cell_width();

        match action {
            AppAction::Quit => {
                self.should_quit = true;
            }
            AppAction::StepLeft => {
                // Glissement sans élan : le geste se termine immédiatement,
                // sans décélération, donc alignement immédiat.
                self.surface.drag_by(-cell_width * DRAG_STEP);
                self.selector.on_drag_ended(&mut self.surface, false);
            }
            AppAction::StepRight => {
                self.surface.drag_by(cell_width * DRAG_STEP);
                self.selector.on_drag_ended(&mut self.surface, false);
            }
            AppAction::FlingLeft => {
                self.surface.fling(-cell_width * FLING_VELOCITY);
            }
            AppAction::FlingRight => {
                self.surface.fling(cell_width * FLING_VELOCITY);
            }
            AppAction::SelectFirst => {
                self.selector.select_item(&mut self.surface, 0, true);
            }
            AppAction::SelectLast => {
                let last = self.selector.len().saturating_sub(1);
                self.selector.select_item(&mut self.surface, last, true);
            }
            AppAction::SelectIndex(index) => {
                // Un index hors bornes ne fait rien (no-op silencieux).
                self.selector.select_item(&mut self.surface, index, true);
            }
            AppAction::ToggleHelp => {
                self.view_mode = if self.view_mode == ViewMode::Help {
                    ViewMode::Picker
                } else {
                    ViewMode::Help
                };
            }
        }
    }

    /// Avance le scroll d'une image ; la fin de décélération d'un geste
    /// déclenche la résolution d'alignement (une seule fois par geste).
    pub fn tick(&mut self) {
        if self.surface.tick() == Some(SettleKind::Gesture) {
            self.selector.on_scroll_settled(&mut self.surface);
        }
    }

    /// Lance la boucle événementielle principale de l'application.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;

        let result = self.event_loop(&mut terminal);

        restore_terminal(&mut terminal)?;
        result
    }

    /// Boucle événementielle : layout -> render -> poll input -> update.
    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            // Layout : synchroniser la géométrie avec la taille du terminal.
            let size = terminal.size()?;
            if size.width == 0 {
                return Err(RubanError::Terminal(
                    "terminal trop étroit pour afficher le ruban".to_string(),
                ));
            }
            let area = Rect::new(0, 0, size.width, size.height);
            self.update_layout(ui::layout::build_layout(area).strip);

            // Render.
            terminal.draw(|frame| {
                ui::render(
                    frame,
                    self.selector.items(),
                    &self.surface,
                    self.selector.selected_index(),
                    self.view_mode,
                );
            })?;

            // Input.
            if let Some(action) = ui::input::handle_input(self)? {
                self.apply_action(action);
            }

            if self.should_quit {
                break;
            }

            // Avancer les animations de scroll.
            self.tick();
        }
        Ok(())
    }
}

/// Initialise le terminal en mode raw + alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restaure le terminal à son état normal.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
