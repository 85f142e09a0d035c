// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Clavier : caractères -> touches, Enter ou '=' -> equals, Escape -> AC
//
// Important:
// - Si un champ texte a le focus (ex: précision), le clavier lui appartient :
//   on ne route rien vers l’écran (sinon double déclenchement).

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

/// Clavier lu pendant une frame.
#[derive(Clone, Debug, Default)]
struct Clavier {
    texte: String,
    enter: bool,
    esc: bool,
    /// Un widget texte a le focus (egui::Context::wants_keyboard_input).
    champ_actif: bool,
}

impl AppCalc {
    fn router_clavier(&mut self, clavier: &Clavier) {
        if clavier.champ_actif {
            return;
        }

        for c in clavier.texte.chars() {
            if c == '=' {
                self.equals();
            } else {
                self.saisir_car(c);
            }
        }
        if clavier.enter {
            self.equals();
        }
        if clavier.esc {
            self.clear();
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let champ_actif = ctx.wants_keyboard_input();
        let clavier = ctx.input(|i| Clavier {
            texte: i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.as_str()),
                    _ => None,
                })
                .collect(),
            enter: i.key_pressed(egui::Key::Enter),
            esc: i.key_pressed(egui::Key::Escape),
            champ_actif,
        });

        self.router_clavier(&clavier);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
