//! Attendance targets panel: monthly work-hour targets with derived
//! metrics.

use eframe::egui::{self, CornerRadius, Margin, RichText, Ui};
use egui_phosphor::regular::{CALENDAR, CLOCK, TARGET};

use super::app::App;
use super::components::{loading_indicator, panel_header};
use crate::entities::attendance_targets;
use crate::report::targets;

/// Show the attendance targets panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Attendance Targets");

    if app.targets_loading {
        loading_indicator(ui, "Loading attendance targets...");
        return;
    }

    ui.horizontal(|ui| {
        ui.label("Month:");
        egui::ComboBox::from_id_salt("target_month_select")
            .width(200.0)
            .selected_text(app.selected_month.as_deref().unwrap_or("Select month"))
            .show_ui(ui, |ui| {
                for target in &app.targets {
                    let selected = app.selected_month.as_deref() == Some(&target.month_year);
                    if ui.selectable_label(selected, &target.month_year).clicked() {
                        app.selected_month = Some(target.month_year.clone());
                    }
                }
            });
    });

    ui.add_space(20.0);

    let selected = app
        .selected_month
        .as_deref()
        .and_then(|month| app.targets.iter().find(|t| t.month_year == month));

    let Some(target) = selected else {
        ui.label(RichText::new("No data available for selected month").weak());
        return;
    };

    ui.label(RichText::new(&target.month_year).size(20.0).strong());
    ui.add_space(10.0);

    ui.horizontal(|ui| {
        target_card(ui, CALENDAR, "Days Overview", |ui| {
            metric_row(ui, "Days in Month", &target.days_in_month.to_string());
            metric_row(ui, "Days to Work", &target.days_to_work.to_string());
            metric_row(ui, "Adjusted Days", &target.adjusted_days_to_work.to_string());
        });

        target_card(ui, CLOCK, "Hours Overview", |ui| {
            metric_row(ui, "Hours in Month", &format!("{:.0}", target.hours_in_month));
            metric_row(ui, "Hours to Work", &format!("{:.0}", target.hours_to_work));
            metric_row(ui, "Adjusted Hours", &format!("{:.0}", target.adjusted_hours_to_work));
        });

        target_card(ui, TARGET, "Target Summary", |ui| {
            metric_row(ui, "Daily Hours Target", &format_daily_target(target));
            metric_row(ui, "Work Days Percentage", &format_work_days_percent(target));
        });
    });
}

fn format_daily_target(target: &attendance_targets::Model) -> String {
    match targets::daily_hours_target(target) {
        Some(hours) => format!("{hours:.1}h"),
        None => "-".to_string(),
    }
}

fn format_work_days_percent(target: &attendance_targets::Model) -> String {
    match targets::work_days_percent(target) {
        Some(percent) => format!("{percent:.0}%"),
        None => "-".to_string(),
    }
}

/// Render one target card with an icon header and metric rows.
fn target_card(ui: &mut Ui, icon: &str, title: &str, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::same(5))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(220.0);

            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(title).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(icon).weak());
                    });
                });
                ui.add_space(8.0);
                add_contents(ui);
            });
        });
}

/// Render one label/value metric line.
fn metric_row(ui: &mut Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).small().weak());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(value).size(18.0).strong());
        });
    });
    ui.add_space(4.0);
}
