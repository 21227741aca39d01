//! Late logins panel: date picker plus the late-arrival table.

use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;

use super::app::App;
use super::components::{badge, loading_indicator, panel_header, severity_color};

/// Show the late logins panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Late Logins");

    let cutoff = app.config.report.late_cutoff();

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!(
                "Agents whose first log came after {}",
                cutoff.format("%-I:%M %p")
            ))
            .weak(),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let response = ui.add(DatePickerButton::new(&mut app.selected_date).id_salt("late_login_date"));
            if response.changed() {
                app.load_late_logins();
            }
            ui.label("Date:");
        });
    });

    ui.add_space(15.0);

    if app.late_loading {
        loading_indicator(ui, "Loading late logins...");
        return;
    }

    // Count header
    let count = app.late_entries.len();
    ui.label(
        RichText::new(format!(
            "{count} late login{} on {}",
            if count == 1 { "" } else { "s" },
            app.selected_date.format("%B %-d, %Y")
        ))
        .size(16.0)
        .strong(),
    );

    ui.add_space(10.0);

    if app.late_entries.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.label(RichText::new("No late logins found").size(16.0));
            ui.label(
                RichText::new(format!("All agents logged in on time for {}", app.selected_date))
                    .small()
                    .weak(),
            );
        });
        return;
    }

    ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("late_logins_grid")
            .num_columns(4)
            .striped(true)
            .min_col_width(100.0)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                ui.strong("Role");
                ui.strong("LDAP");
                ui.strong("Login Time");
                ui.strong("Minutes Late");
                ui.end_row();

                for entry in &app.late_entries {
                    ui.label(&entry.display_name);
                    ui.label(RichText::new(&entry.ldap).weak());
                    ui.label(entry.login_time.format("%-I:%M %p").to_string());
                    badge(
                        ui,
                        &format!("{} min", entry.minutes_late()),
                        severity_color(entry.severity()),
                    );
                    ui.end_row();
                }
            });
    });
}
