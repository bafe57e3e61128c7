// src/noyau/operateurs.rs
//
// Évaluateur binaire
// ------------------
// Les cinq opérations en attente ({+, −, ×, ÷, ^}) plus la racine n-ième
// (alimentée par la touche ʸ√x, qui se comporte comme un opérateur : elle
// attend son deuxième opérande).
//
// Contrats :
// - arithmétique IEEE-754 double, rien d'exact
// - ÷ 0 refusé AVANT le calcul (DivisionParZero)
// - tout résultat non fini refusé APRÈS le calcul (ResultatInvalide),
//   quel que soit l'opérateur (couvre les dépassements de ^)

use super::erreurs::ErreurCalcul;

/// Opération binaire en attente d'un deuxième opérande.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
    Puissance,
    /// a √ b = b-ième racine de a, soit a^(1/b).
    Racine,
}

impl Operateur {
    /// Symbole affiché dans la trace et l'historique.
    /// NOTE: MOINS U+2212 (pas le trait d'union), comme l'écran d'origine.
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Addition => "+",
            Operateur::Soustraction => "−",
            Operateur::Multiplication => "×",
            Operateur::Division => "÷",
            Operateur::Puissance => "^",
            Operateur::Racine => "√",
        }
    }
}

/// Applique `a op b`.
pub fn evaluer(a: f64, b: f64, op: Operateur) -> Result<f64, ErreurCalcul> {
    let resultat = match op {
        Operateur::Addition => a + b,
        Operateur::Soustraction => a - b,
        Operateur::Multiplication => a * b,
        Operateur::Division => {
            if b == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            a / b
        }
        Operateur::Puissance => a.powf(b),
        // b == 0 donne a^∞ : total en flottant, le post-check tranche.
        Operateur::Racine => a.powf(1.0 / b),
    };

    if !resultat.is_finite() {
        return Err(ErreurCalcul::ResultatInvalide);
    }
    Ok(resultat)
}
