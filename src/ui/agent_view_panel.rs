//! Agent view panel: per-agent details and recent logs.

use eframe::egui::{self, CornerRadius, Margin, RichText, ScrollArea, Ui};

use super::app::App;
use super::components::{badge, colors, loading_indicator, panel_header};
use crate::entities::attendance_logs;

/// Show the agent view panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Agent View");

    if app.agents_loading {
        loading_indicator(ui, "Loading agents...");
        return;
    }

    // Agent selector
    let mut selection_changed = false;
    ui.horizontal(|ui| {
        ui.label("Agent:");
        egui::ComboBox::from_id_salt("agent_select")
            .width(300.0)
            .selected_text(
                app.selected_agent
                    .as_ref()
                    .map(|a| format!("{} ({})", a.display_name, a.ldap))
                    .unwrap_or_else(|| "Select an agent".to_string()),
            )
            .show_ui(ui, |ui| {
                for agent in &app.agents {
                    let selected = app
                        .selected_agent
                        .as_ref()
                        .is_some_and(|a| a.ldap == agent.ldap);
                    let label = format!("{} ({})", agent.display_name, agent.ldap);
                    if ui.selectable_label(selected, label).clicked() && !selected {
                        app.selected_agent = Some(agent.clone());
                        selection_changed = true;
                    }
                }
            });
    });

    if selection_changed {
        app.load_agent_logs();
    }

    ui.add_space(20.0);

    let Some(agent) = app.selected_agent.clone() else {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new("Select an agent from the dropdown to view details").weak());
        });
        return;
    };

    // Details card
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new("Agent Details").strong());
            ui.add_space(10.0);

            egui::Grid::new("agent_details_grid")
                .num_columns(4)
                .spacing([30.0, 6.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Name").small().weak());
                    ui.label(RichText::new("LDAP").small().weak());
                    ui.label(RichText::new("Team").small().weak());
                    ui.label(RichText::new("Shift").small().weak());
                    ui.end_row();

                    ui.label(RichText::new(&agent.display_name).strong());
                    ui.label(RichText::new(&agent.ldap).strong());
                    ui.label(RichText::new(agent.team.as_deref().unwrap_or("-")).strong());
                    ui.label(RichText::new(agent.shift.as_deref().unwrap_or("-")).strong());
                    ui.end_row();
                });
        });

    ui.add_space(20.0);

    // Recent logs
    ui.label(
        RichText::new(format!("Last {} Attendance Logs", app.config.report.agent_log_limit))
            .size(16.0)
            .strong(),
    );
    ui.add_space(10.0);

    if app.agent_logs_loading {
        loading_indicator(ui, "Loading logs...");
        return;
    }

    if app.agent_logs.is_empty() {
        ui.label(RichText::new("No attendance logs found for this agent").weak());
        return;
    }

    ScrollArea::vertical().show(ui, |ui| {
        for log in &app.agent_logs {
            log_row(ui, log);
            ui.add_space(8.0);
        }
    });
}

/// Whether a log was recorded in the office.
///
/// The source writes free-text values like "in office" / "not in office";
/// anything containing "not" counts as remote.
fn is_in_office(log: &attendance_logs::Model) -> bool {
    log.in_office.as_deref().is_some_and(|v| !v.contains("not"))
}

/// Render one attendance log as a card row with status badges.
fn log_row(ui: &mut Ui, log: &attendance_logs::Model) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(12))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(log.logged_at.format("%b %-d, %Y %-I:%M %p").to_string()).strong(),
                    );
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("URL Type:").small().weak());
                        badge(ui, &log.url_type, colors::ACCENT);
                    });
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if log.is_active {
                        badge(ui, "Active", colors::ACCENT);
                    } else {
                        badge(ui, "Inactive", colors::ERROR);
                    }

                    if is_in_office(log) {
                        badge(ui, "In Office", colors::SUCCESS);
                    } else {
                        badge(ui, "Remote", colors::NEUTRAL);
                    }
                });
            });
        });
}
