use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use menu_core::{Catalog, MenuSession};
use shared::{
    domain::DishId,
    filters::{CategoryFilter, DietFilter, FilterCriteria, PriceRange, SortBy, ViewMode},
    locale::Language,
    theme::Theme,
};
use storage::{load_catalog, PreferenceStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod browse;
mod config;
mod render;

#[cfg(test)]
#[path = "tests/support.rs"]
mod support;

use config::load_settings;

#[derive(Parser, Debug)]
#[command(name = "menu", about = "Browse a restaurant menu from the terminal")]
struct Cli {
    /// Settings file (defaults to ./menu.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Catalog JSON document.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Display language tag, e.g. `en` or `ar`.
    #[arg(long, global = true)]
    lang: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone)]
struct FilterArgs {
    #[arg(long, default_value = "all")]
    category: String,
    #[arg(long, default_value = "all")]
    diet: String,
    #[arg(long, default_value = "all")]
    price: String,
    #[arg(long, default_value = "default")]
    sort: String,
    #[arg(long)]
    chef_only: bool,
    #[arg(long, default_value = "grid")]
    view: String,
}

impl FilterArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            category: CategoryFilter::parse_lenient(&self.category),
            diet: DietFilter::parse_lenient(&self.diet),
            price_range: PriceRange::parse_lenient(&self.price),
            sort_by: SortBy::parse_lenient(&self.sort),
            chef_special_only: self.chef_only,
            view_mode: ViewMode::parse_lenient(&self.view),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the filtered menu grouped by category.
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Print one dish and step through its neighbours.
    Show {
        id: String,
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long = "step", value_enum)]
        steps: Vec<Step>,
    },
    /// Interactive browsing driven by commands on stdin.
    Browse {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show or change the stored theme.
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Load the catalog and report what it contains.
    Validate,
}

#[derive(Subcommand, Debug)]
enum ThemeAction {
    Show,
    Set { theme: String },
    Toggle,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Step {
    Next,
    Prev,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref());
    if let Some(catalog) = cli.catalog {
        settings.catalog_path = catalog;
    }
    if let Some(lang) = cli.lang {
        settings.language = Some(lang);
    }

    let preferences = PreferenceStore::new(&settings.preferences_path);
    let stored = preferences.load();
    let language = settings
        .language
        .as_deref()
        .map(Language::from_tag)
        .unwrap_or(stored.language);
    info!(
        catalog = %settings.catalog_path.display(),
        %language,
        theme = %stored.theme,
        "starting"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Theme { action } => {
            let mut updated = stored;
            match action.unwrap_or(ThemeAction::Show) {
                ThemeAction::Show => {}
                ThemeAction::Set { theme } => {
                    let Some(theme) = Theme::parse(&theme) else {
                        bail!("unknown theme '{theme}', expected 'dark' or 'light'");
                    };
                    updated.theme = theme;
                }
                ThemeAction::Toggle => updated.theme = updated.theme.toggled(),
            }
            if updated != stored {
                preferences.save(&updated)?;
            }
            writeln!(out, "{}", updated.theme)?;
        }
        Command::Validate => {
            let catalog = open_catalog(&settings.catalog_path)?;
            write_summary(&catalog, language, &mut out)?;
        }
        Command::List { filters } => {
            let session = MenuSession::with_criteria(
                open_catalog(&settings.catalog_path)?,
                filters.criteria(),
            );
            write!(out, "{}", render::render_menu(&session, language))?;
        }
        Command::Show { id, filters, steps } => {
            let mut session = MenuSession::with_criteria(
                open_catalog(&settings.catalog_path)?,
                filters.criteria(),
            );
            if !session.open_by_id(&DishId::new(id.as_str())) {
                bail!("no dish with id '{id}'");
            }
            for step in steps {
                match step {
                    Step::Next => session.next(),
                    Step::Prev => session.previous(),
                };
            }
            if let Some(modal) = session.modal() {
                write!(
                    out,
                    "{}",
                    render::render_detail(&modal, session.visible_len(), language)
                )?;
            }
        }
        Command::Browse { filters } => {
            let mut session = MenuSession::with_criteria(
                open_catalog(&settings.catalog_path)?,
                filters.criteria(),
            );
            let final_language = browse::run(&mut session, language, io::stdin().lock(), &mut out)?;
            if final_language != stored.language {
                let mut updated = stored;
                updated.language = final_language;
                preferences.save(&updated)?;
            }
        }
    }

    Ok(())
}

fn open_catalog(path: &Path) -> Result<Catalog> {
    load_catalog(path).context("could not open the menu catalog")
}

fn write_summary(catalog: &Catalog, language: Language, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "{} dishes in {} categories",
        catalog.len(),
        catalog.categories().len()
    )?;
    for category in catalog.categories() {
        let count = catalog
            .dishes()
            .iter()
            .filter(|dish| dish.category == category.key)
            .count();
        writeln!(out, "  {}: {count}", category.name.resolve(language))?;
    }
    let featured = menu_core::star_rail(catalog.dishes()).len();
    writeln!(out, "  featured: {featured}")?;
    Ok(())
}
