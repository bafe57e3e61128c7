//! src/app/etat.rs
//!
//! État applicatif + pilote des effets (sans vue, sans calcul).
//!
//! Rôle : posséder l'état machine et le magasin d'historique, appliquer les
//! transitions du noyau, exécuter leurs effets dans l'ordre, et faire le
//! pont avec la persistance eframe.
//!
//! Contrats (Loi de Clément, version UI) :
//! - Aucune logique de calcul ici (tout vit dans noyau/machine.rs).
//! - Les effets sortent de la machine en valeurs explicites ; le pilote est
//!   le seul à les exécuter.
//! - Un échec ou une absence de persistance est journalisé et avalé, jamais
//!   surfacé, jamais bloquant.

use tracing::debug;

use crate::noyau::{Effet, Etat, Historique, Parametres, Transition, CLE_HISTORIQUE, CLE_PARAMETRES};

pub struct AppCalc {
    /// État machine. La vue le lit, seul `appliquer` le remplace.
    pub etat: Etat,
    /// Magasin partagé : le panneau compare `revision()` pour se
    /// rafraîchir.
    pub historique: Historique,
    /// Panneau d'historique ouvert/fermé (touche H).
    pub panneau_historique: bool,
    /// Écriture demandée par un effet EcrireParametres ; honorée à la
    /// prochaine trame (app.rs), et au plus tard par l'autosave.
    pub(crate) persistance_demandee: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        AppCalc {
            etat: Etat::default(),
            historique: Historique::default(),
            panneau_historique: false,
            persistance_demandee: false,
        }
    }
}

impl AppCalc {
    /// Démarrage de session : relit paramètres + historique persistés.
    /// Absent ou malformé => défauts ({degrés, mémoire 0}, historique vide).
    pub fn nouveau(cc: &eframe::CreationContext<'_>) -> Self {
        let (parametres, entrees) = match cc.storage {
            Some(stockage) => (
                eframe::get_value(stockage, CLE_PARAMETRES).unwrap_or_default(),
                eframe::get_value(stockage, CLE_HISTORIQUE).unwrap_or_default(),
            ),
            None => {
                debug!("pas de stockage disponible, démarrage avec les défauts");
                (Parametres::default(), Vec::new())
            }
        };

        AppCalc {
            etat: Etat::avec_parametres(parametres),
            historique: Historique::depuis_entrees(entrees),
            panneau_historique: false,
            persistance_demandee: false,
        }
    }

    /// Applique une transition : exécute les effets, puis remplace l'état.
    pub fn appliquer(&mut self, transition: Transition) {
        for effet in transition.effets {
            match effet {
                Effet::AjouterHistorique(entree) => {
                    debug!(calcul = %entree.calcul, resultat = %entree.resultat, "historique +");
                    self.historique.ajouter(entree);
                }
                Effet::EcrireParametres => {
                    debug!(
                        memoire = transition.etat.memoire,
                        en_degres = transition.etat.en_degres,
                        "paramètres modifiés"
                    );
                    self.persistance_demandee = true;
                }
            }
        }
        self.etat = transition.etat;
    }

    pub fn basculer_panneau_historique(&mut self) {
        self.panneau_historique = !self.panneau_historique;
    }

    /// Dépose l'état persistable dans le stockage eframe. Appelé dès la
    /// trame qui suit un effet EcrireParametres, et par eframe::App::save
    /// (intervalle régulier + fermeture).
    pub fn ecrire_persistance(&self, stockage: &mut dyn eframe::Storage) {
        eframe::set_value(stockage, CLE_PARAMETRES, &self.etat.parametres());
        eframe::set_value(stockage, CLE_HISTORIQUE, &self.historique.entrees().to_vec());
    }
}
