// src/noyau/historique.rs
//
// Historique des calculs
// ----------------------
// Liste plafonnée, plus récent en tête. Magasin partagé : toute vue qui
// veut rester synchronisée compare `revision()` entre deux trames au lieu
// d'écouter un signal ambiant.
//
// Cycle de vie indépendant de l'état machine : Effacer (C) ne touche pas
// l'historique, seul le bouton du panneau le vide.

use serde::{Deserialize, Serialize};

/// Nombre maximal d'entrées conservées (les plus anciennes sont évincées).
pub const CAPACITE_HISTORIQUE: usize = 50;

/// Un calcul terminé : trace + résultat formaté. Immuable une fois créé.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntreeHistorique {
    pub calcul: String,
    pub resultat: String,
}

impl EntreeHistorique {
    pub fn nouvelle(calcul: impl Into<String>, resultat: impl Into<String>) -> Self {
        EntreeHistorique {
            calcul: calcul.into(),
            resultat: resultat.into(),
        }
    }
}

/// Magasin d'historique, plus récent d'abord.
#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: Vec<EntreeHistorique>,
    revision: u64,
}

impl Historique {
    /// Reconstruit depuis la persistance ; re-plafonne au cas où le
    /// stockage contiendrait plus que la capacité.
    pub fn depuis_entrees(mut entrees: Vec<EntreeHistorique>) -> Self {
        entrees.truncate(CAPACITE_HISTORIQUE);
        Historique {
            entrees,
            revision: 0,
        }
    }

    /// Insère en tête et évince au-delà de la capacité.
    pub fn ajouter(&mut self, entree: EntreeHistorique) {
        self.entrees.insert(0, entree);
        self.entrees.truncate(CAPACITE_HISTORIQUE);
        self.revision += 1;
    }

    pub fn vider(&mut self) {
        if !self.entrees.is_empty() {
            self.entrees.clear();
            self.revision += 1;
        }
    }

    /// Entrées, index 0 = plus récente.
    pub fn entrees(&self) -> &[EntreeHistorique] {
        &self.entrees
    }

    pub fn est_vide(&self) -> bool {
        self.entrees.is_empty()
    }

    /// Compteur bumpé à chaque mutation : une vue mémorise la valeur lue
    /// et se rafraîchit quand elle change.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
