//! Interactive filtering
//!
//! Presents the table and a menu of filter dimensions. Every selection
//! updates the session and the table is drawn again.

use crate::render::{self, RenderOptions};
use console::style;
use dialoguer::Select;
use engine::{ColorFilter, EntryFilter, PrivacyFilter, Session};
use std::io::Write;

/// Menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Color,
    Privacy,
    Entry,
    Reset,
    Quit,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Color,
        Action::Privacy,
        Action::Entry,
        Action::Reset,
        Action::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Action::Color => "Filter by color",
            Action::Privacy => "Filter by privacy",
            Action::Entry => "Filter by friends",
            Action::Reset => "Reset filters",
            Action::Quit => "Quit",
        }
    }

    /// Values offered for this action, as menu labels
    fn choices(&self) -> Vec<String> {
        match self {
            Action::Color => ColorFilter::choices().iter().map(|c| c.to_string()).collect(),
            Action::Privacy => PrivacyFilter::CHOICES.iter().map(|p| p.to_string()).collect(),
            Action::Entry => EntryFilter::CHOICES.iter().map(|e| e.to_string()).collect(),
            Action::Reset | Action::Quit => Vec::new(),
        }
    }

    /// Position of the session's current value among `choices`
    fn current(&self, session: &Session) -> usize {
        let criteria = session.criteria();
        match self {
            Action::Color => ColorFilter::choices()
                .iter()
                .position(|c| *c == criteria.color),
            Action::Privacy => PrivacyFilter::CHOICES
                .iter()
                .position(|p| *p == criteria.privacy),
            Action::Entry => EntryFilter::CHOICES
                .iter()
                .position(|e| *e == criteria.entry),
            Action::Reset | Action::Quit => None,
        }
        .unwrap_or(0)
    }
}

/// Apply a menu choice to the session. Returns false when the user quits.
pub fn apply(session: &mut Session, action: Action, choice: usize) -> bool {
    match action {
        Action::Color => {
            if let Some(color) = ColorFilter::choices().get(choice) {
                session.set_color(*color);
            }
        }
        Action::Privacy => {
            if let Some(privacy) = PrivacyFilter::CHOICES.get(choice) {
                session.set_privacy(*privacy);
            }
        }
        Action::Entry => {
            if let Some(entry) = EntryFilter::CHOICES.get(choice) {
                session.set_entry(*entry);
            }
        }
        Action::Reset => session.reset(),
        Action::Quit => return false,
    }
    true
}

fn draw<W: Write>(out: &mut W, session: &Session, opts: &RenderOptions) -> std::io::Result<()> {
    writeln!(out)?;
    render::render_table(out, &session.visible(), opts)?;
    render::render_summary(
        out,
        session.criteria(),
        session.visible_len(),
        session.groups().len(),
    )
}

/// Run the menu loop until the user quits
pub fn run(session: &mut Session, opts: &RenderOptions) -> engine::Result<()> {
    let mut out = std::io::stdout();
    let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();

    loop {
        draw(&mut out, session, opts)?;

        let selected = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;
        let action = Action::ALL[selected];

        let choice = match action {
            Action::Color | Action::Privacy | Action::Entry => Select::new()
                .with_prompt(action.label())
                .items(&action.choices())
                .default(action.current(session))
                .interact()?,
            Action::Reset | Action::Quit => 0,
        };

        if !apply(session, action, choice) {
            println!("{}", style(">>> Exiting.").yellow().bold());
            return Ok(());
        }
    }
}
