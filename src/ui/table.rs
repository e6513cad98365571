use eframe::egui::{self, Align, Color32, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use super::panels;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Filtered results (central panel)
// ---------------------------------------------------------------------------

/// Render the filtered table and the export control.
pub fn results(ui: &mut Ui, state: &mut AppState) {
    if state.table.is_none() {
        match state.error_message.clone() {
            Some(message) => panels::load_error(ui, state, &message),
            None => {
                ui.label("Aucune donnée chargée.");
            }
        }
        return;
    }

    ui.heading("Résultats Filtrés");
    if let Some(msg) = &state.error_message {
        ui.colored_label(Color32::RED, msg.as_str());
    }
    panels::export_controls(ui, state);
    ui.separator();

    let Some(table) = state.table.as_deref() else {
        return;
    };
    let rows = &state.visible_indices;
    let colors = &state.class_colors;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(60.0).clip(true), table.headers.len())
        .header(ROW_HEIGHT, |mut header| {
            for name in &table.headers {
                header.col(|ui: &mut Ui| {
                    ui.strong(name.as_str());
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let record = &table.records[rows[row.index()]];
                for (col, value) in record.fields.iter().enumerate() {
                    row.col(|ui: &mut Ui| {
                        match record.account_class {
                            Some(class) if Some(col) == table.class_column => {
                                ui.label(
                                    RichText::new(value)
                                        .strong()
                                        .color(colors.color_for(class)),
                                );
                            }
                            _ => {
                                ui.add(egui::Label::new(value.as_str()).truncate());
                            }
                        }
                    });
                }
            });
        });
}
