// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Tactile : gros boutons, grille 4 colonnes comme une vraie calculatrice
// - Trois panneaux de pavé (Base / Trig / Fonctions), onglet porté par
//   l'état machine
// - Panneau d'historique latéral (touche H), entrées cliquables
//
// Note :
// - La vue ne calcule RIEN : chaque clic fabrique une transition du noyau
//   et la passe au pilote (appliquer). L'affichage ne fait que lire l'état.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{EntreeHistorique, Fonction, Onglet, OpMemoire, Operateur};

/// Une touche du pavé = une transition du noyau.
#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(char),
    Point,
    Op(Operateur),
    Egal,
    Effacer,
    Retour,
    Signe,
    Pourcent,
    Fonc(Fonction),
    Memoire(OpMemoire),
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité "calc"
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_affichage(ui);

                ui.add_space(4.0);
                self.ui_memoire(ui);

                ui.add_space(6.0);
                ui.separator();

                self.ui_onglets(ui);
                ui.add_space(4.0);

                match self.etat.onglet {
                    Onglet::Base => self.ui_pave_base(ui),
                    Onglet::Trig => self.ui_pave_trig(ui),
                    Onglet::Fonc => self.ui_pave_fonctions(ui),
                }
            });
    }

    /* ------------------------ Affichage ------------------------ */

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        // Bandeau mode + indicateur mémoire (cliquer bascule DEG/RAD)
        ui.horizontal(|ui| {
            let mode = if self.etat.en_degres { "DEG" } else { "RAD" };
            if ui
                .selectable_label(false, mode)
                .on_hover_text("Bascule degrés/radians (touche D)")
                .clicked()
            {
                let t = self.etat.basculer_unite();
                self.appliquer(t);
            }

            if self.etat.memoire_presente() {
                ui.weak("M");
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .selectable_label(self.panneau_historique, "Historique")
                    .on_hover_text("Affiche l'historique (touche H)")
                    .clicked()
                {
                    self.basculer_panneau_historique();
                }
            });
        });

        // Zone d'écran : trace (ou erreur) au-dessus, valeur en grand
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match &self.etat.erreur {
                        Some(message) => {
                            ui.colored_label(ui.visuals().error_fg_color, message);
                        }
                        None => {
                            ui.weak(&self.etat.calcul_precedent);
                        }
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.etat.valeur_courante)
                            .monospace()
                            .size(34.0),
                    );
                });
            });
    }

    /* ------------------------ Rangée mémoire ------------------------ */

    fn ui_memoire(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for op in [
                OpMemoire::Effacer,
                OpMemoire::Rappeler,
                OpMemoire::Ajouter,
                OpMemoire::Soustraire,
                OpMemoire::Stocker,
            ] {
                self.bouton_etroit(ui, op.etiquette(), Touche::Memoire(op));
            }
        });
    }

    /* ------------------------ Onglets ------------------------ */

    fn ui_onglets(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for (onglet, titre) in [
                (Onglet::Base, "Base"),
                (Onglet::Trig, "Trigonométrie"),
                (Onglet::Fonc, "Fonctions"),
            ] {
                if ui
                    .selectable_label(self.etat.onglet == onglet, titre)
                    .clicked()
                {
                    let t = self.etat.changer_onglet(onglet);
                    self.appliquer(t);
                }
            }
        });
    }

    /* ------------------------ Pavés ------------------------ */

    fn ui_pave_base(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_base")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", Touche::Effacer);
                self.bouton(ui, "⌫", Touche::Retour);
                self.bouton(ui, "%", Touche::Pourcent);
                self.bouton(ui, "÷", Touche::Op(Operateur::Division));
                ui.end_row();

                self.bouton(ui, "7", Touche::Chiffre('7'));
                self.bouton(ui, "8", Touche::Chiffre('8'));
                self.bouton(ui, "9", Touche::Chiffre('9'));
                self.bouton(ui, "×", Touche::Op(Operateur::Multiplication));
                ui.end_row();

                self.bouton(ui, "4", Touche::Chiffre('4'));
                self.bouton(ui, "5", Touche::Chiffre('5'));
                self.bouton(ui, "6", Touche::Chiffre('6'));
                self.bouton(ui, "−", Touche::Op(Operateur::Soustraction));
                ui.end_row();

                self.bouton(ui, "1", Touche::Chiffre('1'));
                self.bouton(ui, "2", Touche::Chiffre('2'));
                self.bouton(ui, "3", Touche::Chiffre('3'));
                self.bouton(ui, "+", Touche::Op(Operateur::Addition));
                ui.end_row();

                self.bouton(ui, "±", Touche::Signe);
                self.bouton(ui, "0", Touche::Chiffre('0'));
                self.bouton(ui, ".", Touche::Point);
                self.bouton(ui, "=", Touche::Egal);
                ui.end_row();
            });
    }

    fn ui_pave_trig(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_trig")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "sin", Touche::Fonc(Fonction::Sin));
                self.bouton(ui, "cos", Touche::Fonc(Fonction::Cos));
                self.bouton(ui, "tan", Touche::Fonc(Fonction::Tan));
                self.bouton(ui, "÷", Touche::Op(Operateur::Division));
                ui.end_row();

                self.bouton(ui, "sin⁻¹", Touche::Fonc(Fonction::Asin));
                self.bouton(ui, "cos⁻¹", Touche::Fonc(Fonction::Acos));
                self.bouton(ui, "tan⁻¹", Touche::Fonc(Fonction::Atan));
                self.bouton(ui, "×", Touche::Op(Operateur::Multiplication));
                ui.end_row();

                self.bouton(ui, "7", Touche::Chiffre('7'));
                self.bouton(ui, "8", Touche::Chiffre('8'));
                self.bouton(ui, "9", Touche::Chiffre('9'));
                self.bouton(ui, "−", Touche::Op(Operateur::Soustraction));
                ui.end_row();

                self.bouton(ui, "4", Touche::Chiffre('4'));
                self.bouton(ui, "5", Touche::Chiffre('5'));
                self.bouton(ui, "6", Touche::Chiffre('6'));
                self.bouton(ui, "+", Touche::Op(Operateur::Addition));
                ui.end_row();

                self.bouton(ui, "1", Touche::Chiffre('1'));
                self.bouton(ui, "2", Touche::Chiffre('2'));
                self.bouton(ui, "3", Touche::Chiffre('3'));
                self.bouton(ui, "C", Touche::Effacer);
                ui.end_row();

                self.bouton(ui, "π", Touche::Fonc(Fonction::Pi));
                self.bouton(ui, "0", Touche::Chiffre('0'));
                self.bouton(ui, ".", Touche::Point);
                self.bouton(ui, "=", Touche::Egal);
                ui.end_row();
            });
    }

    fn ui_pave_fonctions(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_fonctions")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "x²", Touche::Fonc(Fonction::Carre));
                self.bouton(ui, "x³", Touche::Fonc(Fonction::Cube));
                self.bouton(ui, "xʸ", Touche::Fonc(Fonction::Puissance));
                self.bouton(ui, "÷", Touche::Op(Operateur::Division));
                ui.end_row();

                self.bouton(ui, "√x", Touche::Fonc(Fonction::RacineCarree));
                self.bouton(ui, "∛x", Touche::Fonc(Fonction::RacineCubique));
                self.bouton(ui, "ʸ√x", Touche::Fonc(Fonction::Racine));
                self.bouton(ui, "×", Touche::Op(Operateur::Multiplication));
                ui.end_row();

                self.bouton(ui, "ln", Touche::Fonc(Fonction::Ln));
                self.bouton(ui, "log", Touche::Fonc(Fonction::Log));
                self.bouton(ui, "eˣ", Touche::Fonc(Fonction::Exp));
                self.bouton(ui, "−", Touche::Op(Operateur::Soustraction));
                ui.end_row();

                self.bouton(ui, "x!", Touche::Fonc(Fonction::Factorielle));
                self.bouton(ui, "1/x", Touche::Fonc(Fonction::Inverse));
                self.bouton(ui, "|x|", Touche::Fonc(Fonction::Abs));
                self.bouton(ui, "+", Touche::Op(Operateur::Addition));
                ui.end_row();

                self.bouton(ui, "e", Touche::Fonc(Fonction::E));
                self.bouton(ui, "0", Touche::Chiffre('0'));
                self.bouton(ui, ".", Touche::Point);
                self.bouton(ui, "=", Touche::Egal);
                ui.end_row();
            });
    }

    /* ------------------------ Panneau d'historique ------------------------ */

    /// Rendu du panneau latéral (appelé par app.rs quand il est ouvert).
    /// La vue relit le magasin partagé à chaque trame : plusieurs vues
    /// resteraient synchronisées sans signal ambiant.
    pub fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.heading("Historique");
        ui.separator();

        if self.historique.est_vide() {
            ui.weak("Aucun calcul pour l'instant");
            return;
        }

        let mut rappel: Option<EntreeHistorique> = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .max_height((ui.available_height() - 40.0).max(60.0))
            .show(ui, |ui| {
                for (i, entree) in self.historique.entrees().iter().enumerate() {
                    ui.push_id(i, |ui| {
                        let texte = format!("{}\n= {}", entree.calcul, entree.resultat);
                        if ui
                            .selectable_label(false, egui::RichText::new(texte).monospace())
                            .on_hover_text("Reprend ce résultat comme opérande")
                            .clicked()
                        {
                            rappel = Some(entree.clone());
                        }
                    });
                }
            });

        if let Some(entree) = rappel {
            let t = self.etat.rappel_historique(&entree);
            self.appliquer(t);
        }

        ui.separator();
        if ui.button("Vider l'historique").clicked() {
            self.historique.vider();
        }
    }

    /* ------------------------ Boutons ------------------------ */

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([64.0, 40.0], egui::Button::new(label));
        if resp.clicked() {
            self.presser(touche);
        }
    }

    fn bouton_etroit(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([52.0, 26.0], egui::Button::new(label));
        if resp.clicked() {
            self.presser(touche);
        }
    }

    /// Traduit une touche en transition du noyau et l'applique.
    fn presser(&mut self, touche: Touche) {
        let transition = match touche {
            Touche::Chiffre(c) => self.etat.chiffre(c),
            Touche::Point => self.etat.point(),
            Touche::Op(op) => self.etat.operateur(op),
            Touche::Egal => self.etat.egal(),
            Touche::Effacer => self.etat.effacer(),
            Touche::Retour => self.etat.retour_arriere(),
            Touche::Signe => self.etat.inverser_signe(),
            Touche::Pourcent => self.etat.pourcent(),
            Touche::Fonc(f) => self.etat.fonction(f),
            Touche::Memoire(op) => self.etat.memoire(op),
        };
        self.appliquer(transition);
    }
}
