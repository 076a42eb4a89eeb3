// src/app.rs
//
// Calculatrice de poche : module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (global, aucun champ texte à focaliser) :
// - texte tapé : chiffres, . + - * x / % ( ) =
// - Enter = calcul, Backspace = ←, Escape = AC

pub mod etat;
pub mod vue;

// Ré-export pratique : `use calculatrice_poche::app::AppCalc;`
pub use etat::{AppCalc, Touche};

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Touches lues AVANT le dessin : l’écran affiche déjà leur effet.
        let touches = ctx.input(|i| touches_clavier(&i.events));
        for t in touches {
            self.appuyer(t);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

fn touches_clavier(events: &[egui::Event]) -> Vec<Touche> {
    let mut out = Vec::new();

    for ev in events {
        match ev {
            egui::Event::Text(texte) => {
                out.extend(texte.chars().filter_map(Touche::depuis_clavier));
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Enter => out.push(Touche::Egal),
                egui::Key::Backspace => out.push(Touche::Effacer),
                egui::Key::Escape => out.push(Touche::ToutEffacer),
                _ => {}
            },
            _ => {}
        }
    }

    out
}
