use colored::{Color, Colorize};
use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};

use crate::engine::ChartSection;
use crate::ledger::ChartColor;

pub const DEFAULT_BAR_WIDTH: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartStyle {
    pub plain: bool,
    pub color: bool,
    pub bar_width: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            plain: false,
            color: true,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }
}

/// Terminal color used for a palette color.
pub fn terminal_color(color: ChartColor) -> Color {
    match color {
        ChartColor::Blue => Color::Blue,
        ChartColor::Green => Color::Green,
        ChartColor::Amber => Color::TrueColor {
            r: 255,
            g: 191,
            b: 0,
        },
        ChartColor::Pink => Color::TrueColor {
            r: 255,
            g: 105,
            b: 180,
        },
        ChartColor::Red => Color::Red,
        ChartColor::Orange => Color::TrueColor {
            r: 255,
            g: 165,
            b: 0,
        },
        ChartColor::Purple => Color::Magenta,
        ChartColor::Teal => Color::Cyan,
        ChartColor::Grey => Color::BrightBlack,
    }
}

/// Draws sections as horizontal bars sized by their share of the total weight.
///
/// Each line reads `<category> |<bar>| <detail>` where the detail is the
/// second line of the section label.
pub fn render_chart(sections: &[ChartSection], style: ChartStyle) -> String {
    let total_weight = sections
        .iter()
        .fold(Decimal::ZERO, |acc, s| acc.saturating_add(s.raw_value));
    let name_width = sections
        .iter()
        .map(|s| s.category.as_str().chars().count())
        .max()
        .unwrap_or(0);
    let (fill, empty) = if style.plain { ('#', '.') } else { ('█', '·') };

    sections
        .iter()
        .map(|section| {
            let filled = bar_cells(section.raw_value, total_weight, style.bar_width);
            let mut bar = fill.to_string().repeat(filled);
            if style.color {
                bar = bar.color(terminal_color(section.color)).to_string();
            }
            bar.push_str(&empty.to_string().repeat(style.bar_width - filled));
            let detail = section
                .label
                .split_once('\n')
                .map(|(_, detail)| detail)
                .unwrap_or(section.label.as_str());
            format!(
                "{:<name_width$} |{}| {}",
                section.category.as_str(),
                bar,
                detail
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bar_cells(value: Decimal, total: Decimal, width: usize) -> usize {
    if total <= Decimal::ZERO {
        return 0;
    }
    let cells = (value / total * Decimal::from(width))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    cells.to_usize().unwrap_or(0).min(width)
}
