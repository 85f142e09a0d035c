// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : "0" si vide, "Error" après une évaluation impossible
// - Pavé : 17 surfaces (10 chiffres, 4 opérateurs, point, AC, =), 1 surface = 1 action
//
// Le clavier (Enter / Escape / caractères) est géré dans app.rs.

use eframe::egui;

use super::etat::{AppCalc, DIGITS_MAX};
use crate::noyau::{Operateur, Touche};

/// Ce que déclenche une surface du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Touche(Touche),
    Clear,
    Equals,
}

/// Une surface cliquable (id stable + libellé).
#[derive(Clone, Copy, Debug)]
pub struct Surface {
    pub id: &'static str,
    pub label: &'static str,
    pub action: Action,
}

const fn chiffre(id: &'static str, label: &'static str, d: u8) -> Surface {
    Surface {
        id,
        label,
        action: Action::Touche(Touche::Chiffre(d)),
    }
}

const fn op(id: &'static str, label: &'static str, o: Operateur) -> Surface {
    Surface {
        id,
        label,
        action: Action::Touche(Touche::Op(o)),
    }
}

/// Disposition du pavé, rangée par rangée.
pub static RANGEES: [&[Surface]; 5] = [
    &[
        Surface {
            id: "clear",
            label: "AC",
            action: Action::Clear,
        },
        Surface {
            id: "equals",
            label: "=",
            action: Action::Equals,
        },
    ],
    &[
        chiffre("seven", "7", 7),
        chiffre("eight", "8", 8),
        chiffre("nine", "9", 9),
        op("add", "+", Operateur::Plus),
    ],
    &[
        chiffre("four", "4", 4),
        chiffre("five", "5", 5),
        chiffre("six", "6", 6),
        op("subtract", "-", Operateur::Moins),
    ],
    &[
        chiffre("one", "1", 1),
        chiffre("two", "2", 2),
        chiffre("three", "3", 3),
        op("multiply", "*", Operateur::Fois),
    ],
    &[
        chiffre("zero", "0", 0),
        Surface {
            id: "decimal",
            label: ".",
            action: Action::Touche(Touche::Point),
        },
        op("divide", "/", Operateur::Divise),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);

        ui.add_space(8.0);
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Précision :");
            let mut d = self.digits as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DIGITS_MAX as u32)
                    .suffix(" décimales"),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }
        });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let couleur = if self.en_erreur {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().strong_text_color()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id("display", |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(self.texte_affiche())
                                .monospace()
                                .size(32.0)
                                .color(couleur),
                        );
                    });
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        for (i, rangee) in RANGEES.iter().enumerate() {
            ui.push_id(i, |ui| {
                ui.horizontal(|ui| {
                    for s in rangee.iter() {
                        self.bouton(ui, s);
                    }
                });
            });
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, s: &Surface) {
        let resp = ui
            .push_id(s.id, |ui| {
                ui.add_sized([64.0, 48.0], egui::Button::new(s.label))
            })
            .inner;

        if resp.clicked() {
            self.declencher(s.action);
        }
    }

    /// Une surface => une entrée de l’état.
    pub fn declencher(&mut self, action: Action) {
        match action {
            Action::Touche(t) => self.appuyer(t),
            Action::Clear => self.clear(),
            Action::Equals => self.equals(),
        }
    }
}
