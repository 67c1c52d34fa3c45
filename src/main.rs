mod app;
mod error;
mod picker;
mod strip;
mod ui;

use clap::Parser;

use crate::app::App;

#[derive(Parser)]
#[command(name = "ruban")]
#[command(about = "Sélecteur horizontal à centrage automatique dans votre terminal")]
#[command(version)]
struct Cli {
    /// Libellés des éléments du ruban (défaut : "0" à "n-1")
    items: Vec<String>,

    /// Nombre d'éléments générés si aucun libellé n'est fourni
    #[arg(short = 'n', long, default_value = "10")]
    count: usize,

    /// Index sélectionné au démarrage
    #[arg(short, long)]
    select: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Données de test par défaut : "0".."n-1".
    let items = if cli.items.is_empty() {
        (0..cli.count).map(|i| i.to_string()).collect()
    } else {
        cli.items
    };

    let mut app = App::new(items, cli.select);
    app.run()?;

    Ok(())
}
