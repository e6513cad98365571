use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::ALL_CLASSES;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel. Every control change re-runs the filters.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filtres");
    ui.separator();

    if state.table.is_none() {
        ui.label("Aucune donnée chargée.");
        return;
    }

    let mut changed = false;

    // ---- Class selector ----
    let options = state.class_options();
    if options.is_empty() {
        state.filters.class = ALL_CLASSES.to_string();
        ui.colored_label(
            Color32::YELLOW,
            "La colonne 'Classe' n'a pas été trouvée. Le filtrage par classe ne sera pas disponible.",
        );
    } else {
        ui.strong("Sélectionner une Classe");
        egui::ComboBox::from_id_salt("class_filter")
            .selected_text(state.filters.class.as_str())
            .show_ui(ui, |ui: &mut Ui| {
                for option in &options {
                    changed |= ui
                        .selectable_value(&mut state.filters.class, option.clone(), option.as_str())
                        .changed();
                }
            });
    }
    ui.add_space(8.0);

    // ---- Account-number prefix ----
    ui.strong("Filtrer par les premiers chiffres du Numéro de Compte");
    changed |= ui.text_edit_singleline(&mut state.filters.prefix).changed();
    ui.add_space(8.0);

    // ---- Keywords ----
    ui.strong("Rechercher par mots-clés dans l'Intitulé");
    changed |= ui.text_edit_singleline(&mut state.filters.keywords).changed();
    ui.add_space(8.0);

    ui.separator();
    if ui.button("Réinitialiser les filtres").clicked() {
        state.reset_filters();
    } else if changed {
        state.refilter();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the page title and the source file line.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.heading("Explorateur du Plan Comptable OHADA");
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "Basé sur le fichier CSV {}",
            state.config.file_path.display()
        ));
        if let Some(table) = &state.table {
            ui.separator();
            ui.label(format!(
                "{} comptes chargés, {} affichés",
                table.len(),
                state.visible_indices.len()
            ));
        }
    });
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Export button and the outcome of the last export.
pub fn export_controls(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        if ui
            .button("Télécharger les résultats au format CSV")
            .clicked()
        {
            save_file_dialog(state);
        }
        match &state.export_message {
            Some(Ok(msg)) => {
                ui.label(msg.as_str());
            }
            Some(Err(msg)) => {
                ui.colored_label(Color32::RED, msg.as_str());
            }
            None => {}
        }
    });
}

pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Exporter les résultats filtrés")
        .set_file_name(&state.config.export_file_name)
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        state.export_to(&path);
    }
}

// ---------------------------------------------------------------------------
// Load error
// ---------------------------------------------------------------------------

/// Inline load error with a retry button.
pub fn load_error(ui: &mut Ui, state: &mut AppState, message: &str) {
    ui.label(RichText::new(format!("Erreur: {message}")).color(Color32::RED));
    if ui.button("Réessayer").clicked() {
        state.load();
    }
}
