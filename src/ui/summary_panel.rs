//! Work summary panel: table of pre-aggregated per-agent records from the
//! remote endpoint.

use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_phosphor::regular::ARROWS_CLOCKWISE;

use super::app::App;
use super::components::{badge, colors, loading_indicator, panel_header};

/// Show the work summary panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Agent Work Summary");

    ui.horizontal(|ui| {
        if ui
            .button(format!("{ARROWS_CLOCKWISE} Refresh"))
            .on_hover_text("Fetch the latest summary from the reporting endpoint")
            .clicked()
        {
            app.load_summary();
        }

        ui.add_space(10.0);

        if let Some(as_of) = app.summary_as_of {
            ui.label(
                RichText::new(format!("As of {}", as_of.format("%Y-%m-%d %H:%M:%S")))
                    .small()
                    .weak(),
            );
        }
    });

    ui.add_space(15.0);

    if app.summary_loading {
        loading_indicator(ui, "Loading agent work summary...");
        return;
    }

    if app.summary_records.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.label(RichText::new("No agent data loaded").size(16.0));
            ui.label(RichText::new("Click Refresh to fetch the consolidated report").small().weak());
        });
        return;
    }

    ScrollArea::both().show(ui, |ui| {
        egui::Grid::new("work_summary_grid")
            .num_columns(13)
            .striped(true)
            .min_col_width(70.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.strong("Agent");
                ui.strong("LDAP");
                ui.strong("Shift Type");
                ui.strong("Start Time");
                ui.strong("First In Office");
                ui.strong("Last Log");
                ui.strong("Min Since Last");
                ui.strong("Last Description");
                ui.strong("Last In Office");
                ui.strong("Total Hours");
                ui.strong("Within Shift");
                ui.strong("In Office");
                ui.strong("Status");
                ui.end_row();

                for record in &app.summary_records {
                    ui.label(&record.agent);
                    ui.label(RichText::new(&record.ldap).weak());
                    ui.label(&record.shift_type);
                    ui.label(&record.start_time);
                    ui.label(&record.first_in_office_log);
                    ui.label(&record.last_log_time);
                    ui.label(record.minutes_since_last_log.to_string());
                    ui.label(&record.last_log_description);
                    ui.label(&record.last_in_office_log);
                    ui.label(format!("{:.2}", record.total_work_hours));
                    ui.label(format!("{:.2}", record.total_work_hours_within_shift));
                    ui.label(format!("{:.2}", record.total_work_hours_in_office));

                    let status_color = match record.workday_status.as_str() {
                        "Active" => colors::SUCCESS,
                        "Inactive" => colors::ERROR,
                        _ => colors::WARNING,
                    };
                    badge(ui, &record.workday_status, status_color);

                    ui.end_row();
                }
            });
    });
}
