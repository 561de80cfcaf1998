//! Line-driven browsing loop: every input line is one UI event applied to
//! the session, followed by a short status line.

use std::io::{BufRead, Write};

use anyhow::Result;
use menu_core::{input::swipe_dismisses, MenuSession, NavKey};
use shared::{
    domain::DishId,
    filters::{CategoryFilter, DietFilter, PriceRange, SortBy, ViewMode},
    locale::Language,
};
use tracing::debug;

use crate::render;

const HELP: &str = "\
commands:
  category <all|starItems|chefSpecialties|key>   diet <all|vegetarian|non-vegetarian>
  price <all|under30|under50|under100|over100>   sort <default|price-asc|price-desc|popularity>
  chef <on|off>   view <grid|list>   clear
  open <id>   next   prev   close   key <left|right|esc>   swipe <offset> <velocity>
  lang <en|ar>   show   help   quit";

#[derive(Debug, Clone, PartialEq)]
pub enum BrowseEvent {
    Category(CategoryFilter),
    Diet(DietFilter),
    Price(PriceRange),
    Sort(SortBy),
    ChefOnly(bool),
    View(ViewMode),
    Clear,
    Open(DishId),
    Next,
    Previous,
    Close,
    Key(NavKey),
    Swipe { offset: f32, velocity: f32 },
    Language(Language),
    Show,
    Help,
    Quit,
}

pub fn parse_event(line: &str) -> Result<BrowseEvent, String> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let arg = parts.next();
    let missing = || format!("'{command}' needs a value");

    let event = match command {
        "category" => BrowseEvent::Category(CategoryFilter::parse_lenient(arg.ok_or_else(missing)?)),
        "diet" => BrowseEvent::Diet(DietFilter::parse_lenient(arg.ok_or_else(missing)?)),
        "price" => BrowseEvent::Price(PriceRange::parse_lenient(arg.ok_or_else(missing)?)),
        "sort" => BrowseEvent::Sort(SortBy::parse_lenient(arg.ok_or_else(missing)?)),
        "view" => BrowseEvent::View(ViewMode::parse_lenient(arg.ok_or_else(missing)?)),
        "chef" => match arg.ok_or_else(missing)? {
            "on" | "true" | "yes" => BrowseEvent::ChefOnly(true),
            "off" | "false" | "no" => BrowseEvent::ChefOnly(false),
            other => return Err(format!("chef expects on/off, got '{other}'")),
        },
        "clear" => BrowseEvent::Clear,
        "open" => BrowseEvent::Open(DishId::new(arg.ok_or_else(missing)?)),
        "next" => BrowseEvent::Next,
        "prev" | "previous" => BrowseEvent::Previous,
        "close" => BrowseEvent::Close,
        "key" => match arg.ok_or_else(missing)? {
            "left" => BrowseEvent::Key(NavKey::ArrowLeft),
            "right" => BrowseEvent::Key(NavKey::ArrowRight),
            "esc" | "escape" => BrowseEvent::Key(NavKey::Escape),
            other => return Err(format!("unknown key '{other}'")),
        },
        "swipe" => {
            let offset = parse_number(arg.ok_or_else(missing)?)?;
            let velocity = parse_number(parts.next().unwrap_or("0"))?;
            BrowseEvent::Swipe { offset, velocity }
        }
        "lang" => BrowseEvent::Language(Language::from_tag(arg.ok_or_else(missing)?)),
        "show" | "list" => BrowseEvent::Show,
        "help" | "?" => BrowseEvent::Help,
        "quit" | "exit" => BrowseEvent::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };
    Ok(event)
}

fn parse_number(raw: &str) -> Result<f32, String> {
    raw.parse::<f32>()
        .map_err(|_| format!("'{raw}' is not a number"))
}

/// Applies one event. Returns `false` when browsing should stop.
pub fn apply_event(
    session: &mut MenuSession,
    language: &mut Language,
    event: BrowseEvent,
    out: &mut impl Write,
) -> Result<bool> {
    debug!(?event, "browse event");
    match event {
        BrowseEvent::Category(category) => session.set_category(category),
        BrowseEvent::Diet(diet) => session.set_diet(diet),
        BrowseEvent::Price(range) => session.set_price_range(range),
        BrowseEvent::Sort(sort_by) => session.set_sort(sort_by),
        BrowseEvent::ChefOnly(enabled) => session.set_chef_special_only(enabled),
        BrowseEvent::View(view_mode) => session.set_view_mode(view_mode),
        BrowseEvent::Clear => session.clear_filters(),
        BrowseEvent::Open(id) => {
            if !session.open_by_id(&id) {
                writeln!(out, "no dish with id '{id}'")?;
            }
        }
        BrowseEvent::Next => {
            session.next();
        }
        BrowseEvent::Previous => {
            session.previous();
        }
        BrowseEvent::Close => session.close(),
        BrowseEvent::Key(key) => {
            session.handle_key(key, *language);
        }
        BrowseEvent::Swipe { offset, velocity } => {
            if session.active().is_some() && swipe_dismisses(offset, velocity) {
                session.close();
            }
        }
        BrowseEvent::Language(next) => *language = next,
        BrowseEvent::Show => {
            write!(out, "{}", render::render_menu(session, *language))?;
            return Ok(true);
        }
        BrowseEvent::Help => {
            writeln!(out, "{HELP}")?;
            return Ok(true);
        }
        BrowseEvent::Quit => return Ok(false),
    }
    write_status(session, *language, out)?;
    Ok(true)
}

fn write_status(session: &MenuSession, language: Language, out: &mut impl Write) -> Result<()> {
    match session.modal() {
        Some(modal) => write!(
            out,
            "{}",
            render::render_detail(&modal, session.visible_len(), language)
        )?,
        None => writeln!(
            out,
            "{} dishes shown ({} in catalog)",
            session.visible_len(),
            session.catalog().len()
        )?,
    }
    Ok(())
}

/// Runs until `quit` or end of input and returns the final language.
pub fn run(
    session: &mut MenuSession,
    mut language: Language,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<Language> {
    write!(out, "{}", render::render_menu(session, language))?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_event(&line) {
            Ok(event) => {
                if !apply_event(session, &mut language, event, &mut out)? {
                    break;
                }
            }
            Err(message) => writeln!(out, "{message}")?,
        }
        out.flush()?;
    }
    Ok(language)
}

#[cfg(test)]
#[path = "tests/browse_tests.rs"]
mod tests;
