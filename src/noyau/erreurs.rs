// src/noyau/erreurs.rs
//
// Taxonomie d'erreurs du noyau (fermée)
// -------------------------------------
// Les évaluateurs ne paniquent jamais au-delà de leur frontière : ils
// retournent Result<_, ErreurCalcul>. La machine (machine.rs) est le SEUL
// traducteur vers le champ `erreur` visible à l'écran.
//
// Les textes sont contractuels : ils sont affichés tels quels et vérifiés
// par les tests de scénarios.

use thiserror::Error;

/* ------------------------ Messages de domaine ------------------------ */

pub const MSG_TAN_INDEFINI: &str = "Undefined result";
pub const MSG_ARC_HORS_BORNES: &str = "Input must be between -1 and 1";
pub const MSG_RACINE_NEGATIF: &str = "Cannot take square root of negative number";
pub const MSG_LOG_NON_POSITIF: &str = "Input must be greater than 0";
pub const MSG_FACTORIELLE_DOMAINE: &str = "Input must be a non-negative integer";
pub const MSG_FACTORIELLE_TROP_GRAND: &str = "Input too large";

/* ------------------------ Taxonomie ------------------------ */

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Division (ou inverse 1/x) avec dénominateur nul.
    #[error("Cannot divide by zero")]
    DivisionParZero,

    /// Résultat non fini (NaN, ±∞) : dépassement, 0^-1, etc.
    /// Vérifié APRÈS chaque évaluation, quel que soit l'opérateur.
    #[error("Invalid calculation result")]
    ResultatInvalide,

    /// Entrée hors du domaine mathématique d'une fonction précise.
    /// Le message est celui de la table de fonctions.rs.
    #[error("{0}")]
    Domaine(&'static str),

    /// Défense en profondeur. Les enums Operateur/Fonction sont fermés et
    /// les matches exhaustifs : cette variante n'est pas constructible par
    /// le pipeline normal, on la garde pour la taxonomie publique.
    #[error("Unknown function")]
    FonctionInconnue,
}
