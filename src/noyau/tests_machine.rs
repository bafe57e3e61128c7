//! Tests de scénarios (campagne) : la machine pilotée touche par touche.
//!
//! But : vérifier les séquences complètes (saisie, chaînage, erreurs,
//! mémoire, historique) et non les évaluateurs isolés (ils ont leurs
//! propres tests colocalisés).
//!
//! Notes importantes (aligné avec le comportement spécifié) :
//! - Les asymétries sont VOULUES et testées telles quelles :
//!   % ignore l'opérateur en attente ; les opérations mémoire passent
//!   outre l'état Erreur ; "=" en état Erreur remet TOUT à zéro
//!   (mémoire comprise) alors que toute autre touche conserve le contexte.
//! - Le chaînage d'opérateurs évalue immédiatement, gauche à droite,
//!   sans précédence, et sans entrée d'historique intermédiaire.

use super::fonctions::Fonction;
use super::historique::{EntreeHistorique, Historique};
use super::machine::{Effet, Etat, OpMemoire, Transition};
use super::operateurs::Operateur;

/// Mini-pilote : applique les transitions et exécute leurs effets comme
/// app/etat.rs, pour tester machine + historique ensemble.
struct Pupitre {
    etat: Etat,
    historique: Historique,
    ecritures_parametres: usize,
}

impl Pupitre {
    fn neuf() -> Self {
        Pupitre {
            etat: Etat::default(),
            historique: Historique::default(),
            ecritures_parametres: 0,
        }
    }

    fn appliquer(&mut self, t: Transition) {
        for effet in t.effets {
            match effet {
                Effet::AjouterHistorique(e) => self.historique.ajouter(e),
                Effet::EcrireParametres => self.ecritures_parametres += 1,
            }
        }
        self.etat = t.etat;
    }

    /// Séquence de touches compacte :
    /// chiffres, '.', '+', '-', '*', '/', '^', '=', '%', 'C', '<' (retour),
    /// '~' (±).
    fn tape(&mut self, touches: &str) {
        for c in touches.chars() {
            let t = match c {
                '0'..='9' => self.etat.chiffre(c),
                '.' => self.etat.point(),
                '+' => self.etat.operateur(Operateur::Addition),
                '-' => self.etat.operateur(Operateur::Soustraction),
                '*' => self.etat.operateur(Operateur::Multiplication),
                '/' => self.etat.operateur(Operateur::Division),
                '^' => self.etat.operateur(Operateur::Puissance),
                '=' => self.etat.egal(),
                '%' => self.etat.pourcent(),
                'C' => self.etat.effacer(),
                '<' => self.etat.retour_arriere(),
                '~' => self.etat.inverser_signe(),
                autre => panic!("touche inconnue dans le scénario : {autre:?}"),
            };
            self.appliquer(t);
        }
    }

    fn fonction(&mut self, f: Fonction) {
        let t = self.etat.fonction(f);
        self.appliquer(t);
    }

    fn memoire(&mut self, op: OpMemoire) {
        let t = self.etat.memoire(op);
        self.appliquer(t);
    }

    fn valeur(&self) -> &str {
        &self.etat.valeur_courante
    }

    fn erreur(&self) -> Option<&str> {
        self.etat.erreur.as_deref()
    }
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn saisie_supprime_le_zero_de_tete() {
    let mut p = Pupitre::neuf();
    p.tape("007");
    assert_eq!(p.valeur(), "7");

    p.tape("C0");
    assert_eq!(p.valeur(), "0");
}

#[test]
fn point_decimal_unique() {
    let mut p = Pupitre::neuf();
    p.tape("3.14");
    assert_eq!(p.valeur(), "3.14");

    // deuxième point ignoré
    p.tape(".15");
    assert_eq!(p.valeur(), "3.1415");
}

#[test]
fn point_decimal_amorce_zero() {
    let mut p = Pupitre::neuf();
    p.tape(".5");
    assert_eq!(p.valeur(), "0.5");

    // après un opérateur, "." démarre un opérande frais "0."
    let mut p = Pupitre::neuf();
    p.tape("2+.5");
    assert_eq!(p.valeur(), "0.5");
    p.tape("=");
    assert_eq!(p.valeur(), "2.5");
}

#[test]
fn retour_arriere() {
    let mut p = Pupitre::neuf();
    p.tape("123<");
    assert_eq!(p.valeur(), "12");

    // dernier caractère : retombe sur "0"
    p.tape("<<");
    assert_eq!(p.valeur(), "0");

    // "-5" (longueur 2, signe en tête) retombe sur "0", jamais sur "-"
    p.tape("5~");
    assert_eq!(p.valeur(), "-5");
    p.tape("<");
    assert_eq!(p.valeur(), "0");

    // sans effet pendant l'attente d'un nouvel opérande
    p.tape("7+<");
    assert_eq!(p.valeur(), "7");
}

#[test]
fn inverser_signe() {
    let mut p = Pupitre::neuf();
    p.tape("0~");
    assert_eq!(p.valeur(), "0"); // sans effet sur "0"

    p.tape("42~");
    assert_eq!(p.valeur(), "-42");
    p.tape("~");
    assert_eq!(p.valeur(), "42");
}

/* ------------------------ Opérations binaires ------------------------ */

#[test]
fn cinq_plus_trois() {
    let mut p = Pupitre::neuf();
    p.tape("5+3=");
    assert_eq!(p.valeur(), "8");
    assert_eq!(p.etat.calcul_precedent, "5 + 3 =");
    assert_eq!(
        p.historique.entrees()[0],
        EntreeHistorique::nouvelle("5 + 3", "8")
    );
}

#[test]
fn premier_operateur_laisse_la_valeur_affichee() {
    let mut p = Pupitre::neuf();
    p.tape("5+");
    // le nombre déjà saisi reste visible jusqu'au prochain chiffre
    assert_eq!(p.valeur(), "5");
    assert_eq!(p.etat.calcul_precedent, "5 +");
    assert_eq!(p.etat.valeur_precedente.as_deref(), Some("5"));
    assert!(p.etat.attente_nouvelle_valeur);
}

#[test]
fn chainage_sans_precedence() {
    let mut p = Pupitre::neuf();
    p.tape("4+6*");
    // évaluation immédiate : 4+6 = 10 devient l'opérande gauche
    assert_eq!(p.valeur(), "10");
    assert_eq!(p.etat.calcul_precedent, "10 ×");
    // le chaînage n'a rien journalisé
    assert!(p.historique.est_vide());

    p.tape("2=");
    assert_eq!(p.valeur(), "20");
    assert_eq!(p.etat.calcul_precedent, "10 × 2 =");
    assert_eq!(p.historique.entrees().len(), 1);
    assert_eq!(
        p.historique.entrees()[0],
        EntreeHistorique::nouvelle("10 × 2", "20")
    );
}

#[test]
fn egal_sans_operation_en_attente() {
    let mut p = Pupitre::neuf();
    p.tape("7=");
    assert_eq!(p.valeur(), "7");
    assert!(p.historique.est_vide());
}

#[test]
fn puissance_et_racine_par_fonction() {
    let mut p = Pupitre::neuf();
    p.tape("2");
    p.fonction(Fonction::Puissance);
    p.tape("10=");
    assert_eq!(p.valeur(), "1024");
    assert_eq!(p.etat.calcul_precedent, "2 ^ 10 =");

    let mut p = Pupitre::neuf();
    p.tape("27");
    p.fonction(Fonction::Racine);
    p.tape("3=");
    assert_eq!(p.valeur(), "3");
    assert_eq!(
        p.historique.entrees()[0],
        EntreeHistorique::nouvelle("27 √ 3", "3")
    );
}

#[test]
fn grandes_magnitudes_en_notation_scientifique() {
    // le résultat passe en notation scientifique, à l'écran ET dans
    // l'historique (jamais 61 chiffres en décimal)
    let mut p = Pupitre::neuf();
    p.tape("2^200=");
    assert_eq!(p.valeur(), "1.606938044e+60");
    assert_eq!(
        p.historique.entrees()[0],
        EntreeHistorique::nouvelle("2 ^ 200", "1.606938044e+60")
    );

    let mut p = Pupitre::neuf();
    p.tape("1/1000000000=");
    assert_eq!(p.valeur(), "1e-9");
}

/* ------------------------ Erreurs et sorties d'erreur ------------------------ */

#[test]
fn division_par_zero() {
    let mut p = Pupitre::neuf();
    p.tape("9/0=");
    assert_eq!(p.erreur(), Some("Cannot divide by zero"));
    // les opérandes fautifs restent en place
    assert_eq!(p.etat.valeur_precedente.as_deref(), Some("9"));
    assert_eq!(p.valeur(), "0");
    assert!(p.historique.est_vide());
}

#[test]
fn racine_carree_de_negatif() {
    let mut p = Pupitre::neuf();
    p.tape("1~");
    p.fonction(Fonction::RacineCarree);
    assert_eq!(
        p.erreur(),
        Some("Cannot take square root of negative number")
    );
    // la valeur n'a pas bougé, seule l'erreur est posée
    assert_eq!(p.valeur(), "-1");
}

#[test]
fn un_chiffre_sort_de_l_erreur_en_gardant_le_contexte() {
    let mut p = Pupitre::neuf();
    p.tape("12");
    p.memoire(OpMemoire::Stocker);
    p.tape("9/0=");
    assert!(p.erreur().is_some());

    p.tape("7");
    assert_eq!(p.erreur(), None);
    assert_eq!(p.valeur(), "7");
    assert_eq!(p.etat.valeur_precedente, None);
    // mémoire et mode ont survécu
    assert_eq!(p.etat.memoire, 12.0);
}

#[test]
fn egal_en_erreur_remet_tout_a_zero() {
    let mut p = Pupitre::neuf();
    p.tape("12");
    p.memoire(OpMemoire::Stocker);
    let t = p.etat.basculer_unite();
    p.appliquer(t); // passe en radians
    p.tape("9/0=");
    assert!(p.erreur().is_some());

    let ecritures_avant = p.ecritures_parametres;
    p.tape("=");
    // asymétrie voulue : remise à zéro TOTALE, mémoire et mode compris
    assert_eq!(p.etat, Etat::default());
    // la part persistée a changé : l'effet d'écriture est bien émis
    assert!(p.ecritures_parametres > ecritures_avant);
}

#[test]
fn operateur_en_erreur_abandonne_l_operation() {
    let mut p = Pupitre::neuf();
    p.tape("9/0=+");
    assert_eq!(p.erreur(), None);
    assert_eq!(p.etat.operateur, None);
    assert_eq!(p.etat.valeur_precedente, None);
    assert_eq!(p.valeur(), "0");
}

/* ------------------------ Pourcent (asymétrie préservée) ------------------------ */

#[test]
fn pourcent_simple() {
    let mut p = Pupitre::neuf();
    p.tape("50%");
    assert_eq!(p.valeur(), "0.5");
    assert_eq!(p.etat.calcul_precedent, "50% =");
    assert_eq!(
        p.historique.entrees()[0],
        EntreeHistorique::nouvelle("50%", "0.5")
    );
}

#[test]
fn pourcent_ignore_l_operateur_en_attente() {
    let mut p = Pupitre::neuf();
    p.tape("50+10%");
    // l'opération en attente n'est ni consultée ni effacée
    assert_eq!(p.etat.operateur, Some(Operateur::Addition));
    assert_eq!(p.etat.valeur_precedente.as_deref(), Some("50"));
    assert_eq!(p.valeur(), "0.1");

    p.tape("=");
    assert_eq!(p.valeur(), "50.1");
}

/* ------------------------ Fonctions et constantes ------------------------ */

#[test]
fn fonction_journalisee() {
    let mut p = Pupitre::neuf();
    p.tape("9");
    p.fonction(Fonction::RacineCarree);
    assert_eq!(p.valeur(), "3");
    assert_eq!(p.etat.calcul_precedent, "√9 =");
    assert_eq!(p.historique.entrees()[0], EntreeHistorique::nouvelle("√9", "3"));
    assert!(p.etat.attente_nouvelle_valeur);
}

#[test]
fn trig_respecte_le_mode() {
    let mut p = Pupitre::neuf();
    p.tape("30");
    p.fonction(Fonction::Sin);
    assert_eq!(p.valeur(), "0.5"); // degrés par défaut

    let mut p = Pupitre::neuf();
    let t = p.etat.basculer_unite();
    p.appliquer(t);
    p.tape("30");
    p.fonction(Fonction::Sin);
    assert_eq!(p.valeur(), "-0.9880316241"); // sin(30 rad)
}

#[test]
fn constantes_sans_historique() {
    let mut p = Pupitre::neuf();
    p.fonction(Fonction::Pi);
    assert_eq!(p.valeur(), "3.141592654");
    assert!(p.etat.attente_nouvelle_valeur);
    assert!(p.historique.est_vide());
    // la trace précédente n'est pas écrasée par une constante
    assert_eq!(p.etat.calcul_precedent, "");

    p.fonction(Fonction::E);
    assert_eq!(p.valeur(), "2.718281828");
    assert!(p.historique.est_vide());
}

/* ------------------------ Mémoire ------------------------ */

#[test]
fn memoire_ms_mc() {
    let mut p = Pupitre::neuf();
    p.tape("12");
    p.memoire(OpMemoire::Stocker);
    assert_eq!(p.etat.memoire, 12.0);
    assert!(p.etat.memoire_presente());

    p.memoire(OpMemoire::Effacer);
    assert_eq!(p.etat.memoire, 0.0);
    assert!(!p.etat.memoire_presente());
}

#[test]
fn memoire_plus_moins_rappel() {
    let mut p = Pupitre::neuf();
    p.tape("10");
    p.memoire(OpMemoire::Ajouter);
    p.tape("4");
    p.memoire(OpMemoire::Soustraire);
    assert_eq!(p.etat.memoire, 6.0);

    p.memoire(OpMemoire::Rappeler);
    assert_eq!(p.valeur(), "6");
    assert!(p.etat.attente_nouvelle_valeur);
}

#[test]
fn memoire_survit_a_effacer() {
    let mut p = Pupitre::neuf();
    p.tape("5");
    p.memoire(OpMemoire::Stocker);
    p.tape("C");
    assert_eq!(p.etat.memoire, 5.0);
    assert_eq!(p.valeur(), "0");
}

#[test]
fn memoire_passe_outre_l_erreur() {
    let mut p = Pupitre::neuf();
    p.tape("1~");
    p.fonction(Fonction::RacineCarree); // erreur, valeur affichée "-1"
    assert!(p.erreur().is_some());

    // corner préservé : MS opère sur la valeur périmée, l'erreur reste posée
    p.memoire(OpMemoire::Stocker);
    assert_eq!(p.etat.memoire, -1.0);
    assert!(p.erreur().is_some());
}

#[test]
fn rappel_memoire_passe_outre_l_erreur() {
    let mut p = Pupitre::neuf();
    p.tape("12");
    p.memoire(OpMemoire::Stocker);
    p.tape("9/0=");
    assert!(p.erreur().is_some());

    // MR remplace l'affichage par la mémoire sans lever l'erreur
    p.memoire(OpMemoire::Rappeler);
    assert_eq!(p.valeur(), "12");
    assert!(p.etat.attente_nouvelle_valeur);
    assert_eq!(p.erreur(), Some("Cannot divide by zero"));
}

#[test]
fn ecriture_parametres_seulement_quand_necessaire() {
    let mut p = Pupitre::neuf();
    p.tape("5+3=");
    assert_eq!(p.ecritures_parametres, 0);

    let t = p.etat.basculer_unite();
    p.appliquer(t);
    assert_eq!(p.ecritures_parametres, 1);

    p.tape("7");
    p.memoire(OpMemoire::Stocker);
    assert_eq!(p.ecritures_parametres, 2);

    // MR ne change pas la part persistée
    p.memoire(OpMemoire::Rappeler);
    assert_eq!(p.ecritures_parametres, 2);
}

/* ------------------------ Historique ------------------------ */

#[test]
fn plafond_historique_en_conditions_reelles() {
    let mut p = Pupitre::neuf();
    for _ in 0..51 {
        p.tape("1+1=");
    }
    assert_eq!(p.historique.entrees().len(), 50);
    // toutes identiques ici, mais la longueur prouve l'éviction
}

#[test]
fn rappel_d_une_entree() {
    let mut p = Pupitre::neuf();
    p.tape("6*7=");
    let entree = p.historique.entrees()[0].clone();
    p.tape("C");

    let t = p.etat.rappel_historique(&entree);
    p.appliquer(t);
    assert_eq!(p.valeur(), "42");
    assert!(p.etat.attente_nouvelle_valeur);
}

/* ------------------------ Reproductibilité de l'affichage ------------------------ */

#[test]
fn resultats_identiques_pour_calculs_identiques() {
    // le chemin de formatage unique garantit le même texte affiché
    let mut a = Pupitre::neuf();
    let mut b = Pupitre::neuf();
    a.tape("1/3=");
    b.tape("1/3=");
    assert_eq!(a.valeur(), b.valeur());
    assert_eq!(a.valeur(), "0.3333333333");
}
