//! Dashboard panel: roster size with team and shift breakdowns.

use std::collections::BTreeMap;

use eframe::egui::{self, CornerRadius, Margin, RichText, ScrollArea, Ui};

use super::app::App;
use super::components::{loading_indicator, panel_header, stat_card};
use crate::report::roster;

/// Show the dashboard panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Dashboard");
    ui.label(RichText::new("Overview of agent metrics").weak());
    ui.add_space(20.0);

    if app.agents_loading {
        loading_indicator(ui, "Fetching agent data...");
        return;
    }

    let total = app.agents.len();

    ui.horizontal(|ui| {
        stat_card(ui, "Total Agents", &total.to_string(), "Tracked in the roster");
    });

    ui.add_space(20.0);

    let teams = roster::team_breakdown(&app.agents);
    let shifts = roster::shift_breakdown(&app.agents);

    ScrollArea::vertical().show(ui, |ui| {
        breakdown_section(ui, "Breakdown by Team", &teams, total);
        ui.add_space(20.0);
        breakdown_section(ui, "Breakdown by Shift", &shifts, total);
    });
}

/// Render one breakdown section as a row of group cards.
fn breakdown_section(ui: &mut Ui, title: &str, groups: &BTreeMap<String, usize>, total: usize) {
    ui.label(RichText::new(title).size(16.0).strong());
    ui.add_space(10.0);

    if groups.is_empty() {
        ui.label(RichText::new("No agents loaded").weak());
        return;
    }

    ui.horizontal_wrapped(|ui| {
        for (name, count) in groups {
            group_card(ui, name, *count, total);
        }
    });
}

/// Render a single group card with count and share of total.
fn group_card(ui: &mut Ui, name: &str, count: usize, total: usize) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(12))
        .outer_margin(Margin::same(4))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(140.0);

            ui.vertical(|ui| {
                ui.label(RichText::new(name).small());
                ui.label(RichText::new(count.to_string()).heading().strong());
                ui.label(
                    RichText::new(format!("{:.1}% of total", roster::percent_of_total(count, total)))
                        .small()
                        .weak(),
                );
            });
        });
}
