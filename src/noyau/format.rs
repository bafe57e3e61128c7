// src/noyau/format.rs
//
// Formatage numérique canonique
// -----------------------------
// Contrat : UNIQUE chemin de formatage avant tout dépôt dans
// `valeur_courante`. Deux calculs équivalents produisent donc exactement le
// même texte à l'écran (et la même entrée d'historique).
//
// Pipeline : arrondi à 10 chiffres significatifs (écriture scientifique),
// re-parse, ré-affichage au plus court (les zéros traînants disparaissent :
// 2.0000000000 -> "2").
//
// Au-delà de 1e21 ou en deçà de 1e-6 (en valeur absolue), l'affichage passe
// en notation scientifique ("1.606938044e+60", "1e-9") ; entre les deux,
// décimal pur ("0.000001", "999999999900000000000").

/// Chiffres significatifs affichés.
const CHIFFRES_SIGNIFICATIFS: usize = 10;

/// Formate un f64 fini en texte d'affichage canonique.
///
/// - arrondi à 10 chiffres significatifs
/// - zéros traînants retirés
/// - `-0` normalisé en `"0"`
///
/// Idempotent : `formater_nombre(s.parse())` redonne `s`.
pub fn formater_nombre(x: f64) -> String {
    if !x.is_finite() {
        // Les évaluateurs rejettent tout résultat non fini (ResultatInvalide)
        // avant d'arriver ici ; on reste néanmoins total.
        return "0".to_string();
    }

    // "{:.9e}" écrit exactement 10 chiffres significatifs ; le re-parse
    // donne le double le plus proche de cette écriture décimale.
    let arrondi: f64 = format!("{x:.prec$e}", prec = CHIFFRES_SIGNIFICATIFS - 1)
        .parse()
        .unwrap_or(x);

    if arrondi == 0.0 {
        return "0".to_string();
    }

    // En décimal pur, 2^200 ferait 61 chiffres et 1e-9 une file de zéros.
    let magnitude = arrondi.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        return notation_scientifique(arrondi);
    }

    // Display f64 = représentation décimale la plus courte qui re-parse
    // au même double : c'est notre "parse-and-restringify".
    format!("{arrondi}")
}

/// Mantisse la plus courte + exposant signé : "1.606938044e+60", "1e-9".
fn notation_scientifique(x: f64) -> String {
    let s = format!("{x:e}");
    match s.split_once('e') {
        Some((mantisse, exposant)) if !exposant.starts_with('-') => {
            format!("{mantisse}e+{exposant}")
        }
        _ => s,
    }
}
