// src/noyau/fonctions.rs
//
// Évaluateur de fonctions scientifiques (unaires)
// -----------------------------------------------
// Une fonction = un variant. Le match est exhaustif : ajouter une fonction
// est une modification vérifiée à la compilation.
//
// Contrats :
// - chaque précondition de domaine est testée AVANT le calcul, avec son
//   message contractuel (erreurs.rs)
// - tout résultat non fini est refusé APRÈS le calcul (ResultatInvalide)
// - trig directe : l'entrée est convertie vers les radians selon le mode ;
//   trig inverse : le résultat (radians) est reconverti vers le mode
// - π et e sont des constantes : pas de domaine, pas de trace (elles ne
//   sont pas des "calculs", donc jamais dans l'historique)

use super::erreurs::{
    ErreurCalcul, MSG_ARC_HORS_BORNES, MSG_FACTORIELLE_DOMAINE, MSG_FACTORIELLE_TROP_GRAND,
    MSG_LOG_NON_POSITIF, MSG_RACINE_NEGATIF, MSG_TAN_INDEFINI,
};

/// Au-delà, n! dépasse le plus grand double (171! ≈ 1.24e309).
const FACTORIELLE_MAX: f64 = 170.0;

/// Touches de fonctions du pavé scientifique.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Carre,
    Cube,
    /// xʸ : routée par la machine comme Operateur::Puissance (deux opérandes).
    Puissance,
    RacineCarree,
    RacineCubique,
    /// ʸ√x : routée par la machine comme Operateur::Racine (deux opérandes).
    Racine,
    Ln,
    Log,
    Exp,
    Factorielle,
    Inverse,
    Abs,
    Pi,
    E,
}

/// Résultat d'une application : la valeur, et la trace affichable.
/// `trace: None` pour les constantes (pas d'entrée d'historique).
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub trace: Option<String>,
}

impl Evaluation {
    fn calcul(valeur: f64, trace: String) -> Self {
        Evaluation {
            valeur,
            trace: Some(trace),
        }
    }

    fn constante(valeur: f64) -> Self {
        Evaluation {
            valeur,
            trace: None,
        }
    }
}

/* ------------------------ Conversion d'angle ------------------------ */

/// Entrée utilisateur -> radians (trig directe).
fn en_radians(angle: f64, en_degres: bool) -> f64 {
    if en_degres {
        angle.to_radians()
    } else {
        angle
    }
}

/// Radians -> unité active (trig inverse).
fn depuis_radians(angle: f64, en_degres: bool) -> f64 {
    if en_degres {
        angle.to_degrees()
    } else {
        angle
    }
}

/* ------------------------ Application ------------------------ */

/// Applique une fonction unaire à `x` dans l'unité d'angle active.
pub fn appliquer(f: Fonction, x: f64, en_degres: bool) -> Result<Evaluation, ErreurCalcul> {
    let eval = match f {
        Fonction::Sin => Evaluation::calcul(en_radians(x, en_degres).sin(), format!("sin({x})")),
        Fonction::Cos => Evaluation::calcul(en_radians(x, en_degres).cos(), format!("cos({x})")),
        Fonction::Tan => {
            // tan(90° + k·180°) : indéfini. En radians, π/2 n'est pas
            // représentable exactement, le calcul reste fini.
            if en_degres && (x % 180.0).abs() == 90.0 {
                return Err(ErreurCalcul::Domaine(MSG_TAN_INDEFINI));
            }
            Evaluation::calcul(en_radians(x, en_degres).tan(), format!("tan({x})"))
        }

        Fonction::Asin => {
            if !(-1.0..=1.0).contains(&x) {
                return Err(ErreurCalcul::Domaine(MSG_ARC_HORS_BORNES));
            }
            Evaluation::calcul(depuis_radians(x.asin(), en_degres), format!("sin⁻¹({x})"))
        }
        Fonction::Acos => {
            if !(-1.0..=1.0).contains(&x) {
                return Err(ErreurCalcul::Domaine(MSG_ARC_HORS_BORNES));
            }
            Evaluation::calcul(depuis_radians(x.acos(), en_degres), format!("cos⁻¹({x})"))
        }
        Fonction::Atan => {
            Evaluation::calcul(depuis_radians(x.atan(), en_degres), format!("tan⁻¹({x})"))
        }

        Fonction::Carre => Evaluation::calcul(x * x, format!("{x}²")),
        Fonction::Cube => Evaluation::calcul(x * x * x, format!("{x}³")),

        Fonction::RacineCarree => {
            if x < 0.0 {
                return Err(ErreurCalcul::Domaine(MSG_RACINE_NEGATIF));
            }
            Evaluation::calcul(x.sqrt(), format!("√{x}"))
        }
        Fonction::RacineCubique => Evaluation::calcul(x.cbrt(), format!("∛{x}")),

        Fonction::Ln => {
            if x <= 0.0 {
                return Err(ErreurCalcul::Domaine(MSG_LOG_NON_POSITIF));
            }
            Evaluation::calcul(x.ln(), format!("ln({x})"))
        }
        Fonction::Log => {
            if x <= 0.0 {
                return Err(ErreurCalcul::Domaine(MSG_LOG_NON_POSITIF));
            }
            Evaluation::calcul(x.log10(), format!("log({x})"))
        }
        Fonction::Exp => Evaluation::calcul(x.exp(), format!("e^{x}")),

        Fonction::Factorielle => {
            if x < 0.0 || x.fract() != 0.0 {
                return Err(ErreurCalcul::Domaine(MSG_FACTORIELLE_DOMAINE));
            }
            if x > FACTORIELLE_MAX {
                return Err(ErreurCalcul::Domaine(MSG_FACTORIELLE_TROP_GRAND));
            }
            Evaluation::calcul(factorielle(x as u64), format!("{x}!"))
        }

        Fonction::Inverse => {
            if x == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            Evaluation::calcul(1.0 / x, format!("1/{x}"))
        }
        Fonction::Abs => Evaluation::calcul(x.abs(), format!("|{x}|")),

        // Constantes : pas de domaine, pas de trace.
        Fonction::Pi => Evaluation::constante(std::f64::consts::PI),
        Fonction::E => Evaluation::constante(std::f64::consts::E),

        // Deux opérandes : la machine les route vers operateurs.rs ; si on
        // arrive quand même ici, identité (comportement de l'écran d'origine).
        Fonction::Puissance | Fonction::Racine => Evaluation::constante(x),
    };

    if !eval.valeur.is_finite() {
        return Err(ErreurCalcul::ResultatInvalide);
    }
    Ok(eval)
}

/// n! en double, n <= 170 garanti par l'appelant.
fn factorielle(n: u64) -> f64 {
    (1..=n).fold(1.0, |acc, k| acc * k as f64)
}
