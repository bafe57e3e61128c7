// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Cette UI n'a aucun champ texte : le clavier est géré globalement ici,
//   avec le garde wants_keyboard_input() au cas où une vue en ajouterait un.
// - La persistance passe par save() (périodique + à la fermeture) et, dès
//   qu'un effet EcrireParametres l'exige, par frame.storage_mut() en fin
//   de trame.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Operateur;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.gerer_clavier(ctx);

        if self.panneau_historique {
            egui::SidePanel::right("panneau_historique")
                .default_width(230.0)
                .show(ctx, |ui| self.ui_historique(ui));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });

        // Effet EcrireParametres : écriture immédiate, sans attendre
        // l'autosave. Sans stockage (persistence désactivée), l'effet est
        // simplement consommé.
        if self.persistance_demandee {
            if let Some(stockage) = frame.storage_mut() {
                self.ecrire_persistance(stockage);
                stockage.flush();
            }
            self.persistance_demandee = false;
        }
    }

    fn save(&mut self, stockage: &mut dyn eframe::Storage) {
        self.ecrire_persistance(stockage);
    }
}

impl AppCalc {
    /// Surface clavier : chiffres, + - * /, '.', '='/Entrée, Échap (C),
    /// retour arrière, %, H (historique), D (deg/rad).
    fn gerer_clavier(&mut self, ctx: &egui::Context) {
        // Entrée ignorée quand un champ de saisie réclame le clavier.
        if ctx.wants_keyboard_input() {
            return;
        }

        let evenements = ctx.input(|i| i.events.clone());
        for evenement in evenements {
            match evenement {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        self.caractere(c);
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => {
                    let transition = match key {
                        egui::Key::Enter => self.etat.egal(),
                        egui::Key::Escape => self.etat.effacer(),
                        egui::Key::Backspace => self.etat.retour_arriere(),
                        _ => continue,
                    };
                    self.appliquer(transition);
                }
                _ => {}
            }
        }
    }

    fn caractere(&mut self, c: char) {
        let transition = match c {
            '0'..='9' => self.etat.chiffre(c),
            '.' => self.etat.point(),
            '+' => self.etat.operateur(Operateur::Addition),
            '-' => self.etat.operateur(Operateur::Soustraction),
            '*' => self.etat.operateur(Operateur::Multiplication),
            '/' => self.etat.operateur(Operateur::Division),
            '^' => self.etat.operateur(Operateur::Puissance),
            '=' => self.etat.egal(),
            '%' => self.etat.pourcent(),
            'd' | 'D' => self.etat.basculer_unite(),
            'h' | 'H' => {
                self.basculer_panneau_historique();
                return;
            }
            _ => return,
        };
        self.appliquer(transition);
    }
}
