// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : dernière expression, tampon, aperçu en direct
// - Erreur : message + zone fautive soulignée + suggestion à appliquer (jamais auto)
// - Pavé 5 colonnes, gros boutons (tactile)
//
// Note :
// - Aucune logique de saisie ici : chaque clic devient une `Touche`,
//   appliquée APRÈS le dessin (pas d’emprunt croisé sur l’éditeur).

use eframe::egui;
use egui::RichText;

use super::etat::{AppCalc, Touche, PAVE, PAVE_ZEROS};
use crate::noyau::MESSAGE_SANS_CORRECTION;

const TOUCHE_L: f32 = 72.0;
const TOUCHE_H: f32 = 52.0;
const ESPACE: f32 = 6.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        ui.heading("Calculatrice de poche");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(6.0);
        self.ui_diagnostic(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let ed = &self.editeur;

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    let faible = ui.visuals().weak_text_color();

                    let haut = ed
                        .derniere_expression()
                        .map(|e| format!("{e} ="))
                        .unwrap_or_default();
                    ui.label(RichText::new(haut).monospace().color(faible));

                    ui.label(RichText::new(ed.tampon()).monospace().size(32.0).strong());

                    let apercu = ed.apercu().map(|v| format!("= {v}")).unwrap_or_default();
                    ui.label(RichText::new(apercu).monospace().color(faible));
                });
            });
    }

    fn ui_diagnostic(&mut self, ui: &mut egui::Ui) {
        let Some(rapport) = self.editeur.erreur().cloned() else {
            return;
        };
        let suggestion = self.editeur.suggestion().cloned();
        let rouge = ui.visuals().error_fg_color;

        // zone fautive : avant | SURLIGNÉ | après
        if let Some(s) = &rapport.surlignage {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                ui.label(RichText::new(s.avant.as_str()).monospace());
                ui.label(
                    RichText::new(s.surligne.as_str())
                        .monospace()
                        .strong()
                        .underline()
                        .color(rouge),
                );
                ui.label(RichText::new(s.apres.as_str()).monospace());
            });
        }

        ui.colored_label(rouge, rapport.message.as_str());

        let mut appliquer = false;
        match suggestion {
            Some(sg) => {
                ui.horizontal(|ui| {
                    ui.label(format!("{} → {}", sg.message, sg.fix));
                    if ui.button("Appliquer").clicked() {
                        appliquer = true;
                    }
                });
            }
            None => {
                ui.label(RichText::new(MESSAGE_SANS_CORRECTION).italics());
            }
        }

        if appliquer {
            self.appliquer_correction();
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let mut appui: Option<Touche> = None;

        egui::Grid::new("pave_poche")
            .num_columns(5)
            .spacing([ESPACE, ESPACE])
            .show(ui, |ui| {
                for rangee in PAVE.iter() {
                    for &t in rangee.iter() {
                        if Self::bouton(ui, t, TOUCHE_L) {
                            appui = Some(t);
                        }
                    }
                    ui.end_row();
                }
            });

        // dernière rangée hors grille : `=` occupe deux colonnes
        ui.horizontal(|ui| {
            for &t in PAVE_ZEROS.iter() {
                if Self::bouton(ui, t, TOUCHE_L) {
                    appui = Some(t);
                }
            }
            if Self::bouton(ui, Touche::Egal, 2.0 * TOUCHE_L + ESPACE) {
                appui = Some(Touche::Egal);
            }
        });

        if let Some(t) = appui {
            self.appuyer(t);
        }
    }

    fn bouton(ui: &mut egui::Ui, touche: Touche, largeur: f32) -> bool {
        ui.add_sized(
            [largeur, TOUCHE_H],
            egui::Button::new(RichText::new(touche.etiquette()).size(20.0)),
        )
        .clicked()
    }
}
