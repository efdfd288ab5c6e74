//! Terminal rendering of the visible group list

use config::DisplayConfig;
use console::{measure_text_width, pad_str, style, Alignment, Color};
use engine::FilterCriteria;
use model::{AvatarColor, Group};
use std::io::{self, Write};

const HEADERS: [&str; 4] = ["Group", "Privacy", "Members", "Friends"];
const PRIVACY_WIDTH: usize = 7;
const NUMBER_WIDTH: usize = 7;

/// Rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// List friend names under each row
    pub show_friends: bool,
}

impl From<&DisplayConfig> for RenderOptions {
    fn from(config: &DisplayConfig) -> Self {
        Self {
            show_friends: config.show_friends,
        }
    }
}

fn terminal_color(color: AvatarColor) -> Color {
    match color {
        AvatarColor::Blue => Color::Blue,
        AvatarColor::Orange => Color::Color256(208),
        AvatarColor::Red => Color::Red,
        AvatarColor::Yellow => Color::Yellow,
        AvatarColor::White => Color::White,
        AvatarColor::Purple => Color::Magenta,
        AvatarColor::Green => Color::Green,
    }
}

fn cell(text: &str, width: usize) -> String {
    pad_str(text, width, Alignment::Left, None).into_owned()
}

/// Write the groups as a table, one row per group
pub fn render_table<W: Write>(out: &mut W, groups: &[&Group], opts: &RenderOptions) -> io::Result<()> {
    if groups.is_empty() {
        writeln!(out, "{}", style("No groups match the current filters").yellow())?;
        return Ok(());
    }

    let name_width = groups
        .iter()
        .map(|g| measure_text_width(&g.name))
        .chain(std::iter::once(HEADERS[0].len()))
        .max()
        .unwrap_or(0);

    let header = format!(
        "{}  {}  {}  {}",
        cell(HEADERS[0], name_width),
        cell(HEADERS[1], PRIVACY_WIDTH),
        cell(HEADERS[2], NUMBER_WIDTH),
        HEADERS[3]
    );
    writeln!(out, "{}", style(header.trim_end()).bold())?;

    for group in groups {
        let name = style(&group.name).fg(terminal_color(group.avatar_color)).to_string();
        let privacy = if group.closed {
            style("closed").red()
        } else {
            style("open").green()
        }
        .to_string();

        writeln!(
            out,
            "{}  {}  {}  {}",
            cell(&name, name_width),
            cell(&privacy, PRIVACY_WIDTH),
            cell(&group.members_count.to_string(), NUMBER_WIDTH),
            group.friend_count()
        )?;

        if opts.show_friends {
            for friend in group.friends() {
                writeln!(out, "    {}", style(friend).dim())?;
            }
        }
    }

    Ok(())
}

/// Write the active criteria and how many groups they let through
pub fn render_summary<W: Write>(
    out: &mut W,
    criteria: &FilterCriteria,
    visible: usize,
    total: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "{} {} of {} groups ({})",
        style(">>>").green().bold(),
        visible,
        total,
        criteria
    )
}
