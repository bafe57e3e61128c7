// src/noyau/parametres.rs
//
// Paramètres persistés
// --------------------
// Le mode d'angle et le registre mémoire survivent aux sessions.
// Lecture unique au démarrage (défauts si absent ou malformé), écriture via
// eframe::Storage (fichier ron en natif, localStorage en wasm).

use serde::{Deserialize, Serialize};

/// Clé de stockage des paramètres.
pub const CLE_PARAMETRES: &str = "calculatrice_parametres";

/// Clé de stockage de l'historique (Vec<EntreeHistorique>).
pub const CLE_HISTORIQUE: &str = "calculatrice_historique";

/// Enregistrement persisté : `{en_degres, memoire}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parametres {
    pub en_degres: bool,
    pub memoire: f64,
}

impl Default for Parametres {
    fn default() -> Self {
        Parametres {
            en_degres: true,
            memoire: 0.0,
        }
    }
}
