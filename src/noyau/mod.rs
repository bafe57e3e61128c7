//! Noyau de calcul
//!
//! Organisation interne :
//! - erreurs.rs    : taxonomie fermée + messages contractuels
//! - format.rs     : affichage canonique (10 chiffres significatifs)
//! - operateurs.rs : évaluateur binaire (+ − × ÷ ^ √)
//! - fonctions.rs  : évaluateur unaire (trig, puissances, logs, etc.)
//! - machine.rs    : machine à états (réducteur pur + effets)
//! - historique.rs : magasin plafonné, plus récent d'abord
//! - parametres.rs : enregistrement persisté (mode + mémoire)

pub mod erreurs;
pub mod fonctions;
pub mod format;
pub mod historique;
pub mod machine;
pub mod operateurs;
pub mod parametres;

#[cfg(test)]
mod tests_machine;

// API publique minimale
pub use fonctions::Fonction;
pub use historique::{EntreeHistorique, Historique};
pub use machine::{Effet, Etat, Onglet, OpMemoire, Transition};
pub use operateurs::Operateur;
pub use parametres::{Parametres, CLE_HISTORIQUE, CLE_PARAMETRES};
