mod common;

use expense_tracker::cli::ui::{render_chart, ChartStyle};
use expense_tracker::engine::ChartProjector;
use expense_tracker::ledger::{Category, CategoryPalette, ChartColor, Ledger};
use rust_decimal::Decimal;

use common::{day, dec, session};

fn plain_style() -> ChartStyle {
    ChartStyle {
        plain: true,
        color: false,
        ..ChartStyle::default()
    }
}

#[test]
fn food_and_transport_split_a_quarter_and_three_quarters() {
    let mut session = session();
    session.submit(Some("Food"), "10.00", day()).unwrap();
    session.submit(Some("Transport"), "30.00", day()).unwrap();

    let totals = session.ledger().current_totals();
    assert_eq!(totals.get(&Category::new("Food")), Some(dec("10")));
    assert_eq!(totals.get(&Category::new("Transport")), Some(dec("30")));
    assert_eq!(totals.get(&Category::new("Housing")), Some(Decimal::ZERO));
    assert_eq!(totals.get(&Category::new("Other")), Some(Decimal::ZERO));

    let chart = session.chart();
    assert_eq!(chart.len(), 2);
    assert_eq!(chart[0].label, "Food\n25.0% (10.00)");
    assert_eq!(chart[0].color, ChartColor::Blue);
    assert_eq!(chart[0].percent_of_total, Some(dec("25")));
    assert_eq!(chart[1].label, "Transport\n75.0% (30.00)");
    assert_eq!(chart[1].color, ChartColor::Green);
}

#[test]
fn empty_ledger_projects_equal_placeholders() {
    let palette = CategoryPalette::default();
    let ledger = Ledger::new(palette.clone());
    let chart = ChartProjector::project(&ledger.current_totals(), &palette);

    let labels: Vec<&str> = chart.iter().map(|section| section.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Food\n0.00", "Transport\n0.00", "Housing\n0.00", "Other\n0.00"]
    );
    assert!(chart.iter().all(|section| section.is_placeholder()));
    assert!(chart.iter().all(|section| section.raw_value == Decimal::ONE));
}

#[test]
fn projection_is_pure() {
    let mut session = session();
    session.submit(Some("Housing"), "3", day()).unwrap();
    session.submit(Some("Other"), "0.5", day()).unwrap();

    let totals = session.ledger().current_totals();
    let first = ChartProjector::project(&totals, session.palette());
    let second = ChartProjector::project(&totals, session.palette());
    assert_eq!(first, second);
}

#[test]
fn plain_chart_renders_proportional_bars() {
    let mut session = session();
    session.submit(Some("Food"), "10.00", day()).unwrap();
    session.submit(Some("Transport"), "30.00", day()).unwrap();

    let rendered = render_chart(&session.chart(), plain_style());
    insta::assert_snapshot!(rendered, @r###"
    Food      |#####...............| 25.0% (10.00)
    Transport |###############.....| 75.0% (30.00)
    "###);
}

#[test]
fn plain_chart_renders_empty_state() {
    let rendered = render_chart(&session().chart(), plain_style());
    insta::assert_snapshot!(rendered, @r###"
    Food      |#####...............| 0.00
    Transport |#####...............| 0.00
    Housing   |#####...............| 0.00
    Other     |#####...............| 0.00
    "###);
}
