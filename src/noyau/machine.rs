// src/noyau/machine.rs
//
// Machine à états de calcul (le coeur)
// ------------------------------------
// Une transition par action utilisateur. Chaque transition prend l'état
// complet et rend l'état complet suivant : réducteur PUR, aucun effet de
// bord caché. Les effets (ajout d'historique, écriture des paramètres)
// sortent explicitement dans `Transition.effets` et sont exécutés par le
// pilote (app/etat.rs).
//
// États conceptuels, encodés par les champs plutôt que par une étiquette :
// - Saisie        : valeur_courante = "0", rien en attente
// - Accumulation  : chiffres ajoutés à valeur_courante
// - OpEnAttente   : operateur fixé, attente_nouvelle_valeur = true
// - Erreur        : erreur = Some(_)
//
// Invariants :
// - erreur != None  => la PROCHAINE action (quelle qu'elle soit) repart
//   d'un état frais (mémoire/mode/onglet conservés, sauf "=" : remise à
//   zéro totale, asymétrie voulue)
// - operateur != None => valeur_precedente != None
// - valeur_courante : toujours un numéral décimal partiel valide, jamais vide
// - memoire et en_degres survivent à tout sauf à leur opération explicite
//
// Corners PRÉSERVÉS tels quels (pas "corrigés", couverts par les tests) :
// - % ne consulte pas l'opérateur en attente
// - les opérations mémoire ne passent pas par la branche d'erreur

use super::fonctions::{appliquer, Fonction};
use super::format::formater_nombre;
use super::historique::EntreeHistorique;
use super::operateurs::{evaluer, Operateur};
use super::parametres::Parametres;

/* ------------------------ Types d'entrée ------------------------ */

/// Panneau de pavé affiché. Purement présentationnel, porté dans l'état
/// par commodité.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Onglet {
    #[default]
    Base,
    Trig,
    Fonc,
}

/// Opérations du registre mémoire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpMemoire {
    /// MC
    Effacer,
    /// MR
    Rappeler,
    /// M+
    Ajouter,
    /// M-
    Soustraire,
    /// MS
    Stocker,
}

impl OpMemoire {
    pub fn etiquette(self) -> &'static str {
        match self {
            OpMemoire::Effacer => "MC",
            OpMemoire::Rappeler => "MR",
            OpMemoire::Ajouter => "M+",
            OpMemoire::Soustraire => "M-",
            OpMemoire::Stocker => "MS",
        }
    }
}

/* ------------------------ Sorties ------------------------ */

/// Effet de bord demandé par une transition, exécuté par le pilote.
#[derive(Clone, Debug, PartialEq)]
pub enum Effet {
    AjouterHistorique(EntreeHistorique),
    EcrireParametres,
}

/// État suivant + effets à exécuter, dans l'ordre.
#[derive(Clone, Debug)]
pub struct Transition {
    pub etat: Etat,
    pub effets: Vec<Effet>,
}

/* ------------------------ État ------------------------ */

/// L'état complet de la calculatrice. Possédé par le pilote ; la vue n'en
/// tient qu'une référence en lecture.
#[derive(Clone, Debug, PartialEq)]
pub struct Etat {
    /// Valeur en cours de saisie ou d'affichage. Textuelle pour préserver
    /// une saisie partielle comme "-3.".
    pub valeur_courante: String,
    /// Opérande gauche de l'opération en attente.
    pub valeur_precedente: Option<String>,
    /// Opération binaire en attente.
    pub operateur: Option<Operateur>,
    /// Registre mémoire : survit à C et aux sessions.
    pub memoire: f64,
    /// Trace lisible du dernier calcul, affichée au-dessus de la valeur.
    pub calcul_precedent: String,
    /// Some(_) exactement quand la machine est en état Erreur.
    pub erreur: Option<String>,
    /// true juste après opérateur/fonction/=/rappel mémoire : le prochain
    /// chiffre démarre un opérande frais au lieu de s'ajouter.
    pub attente_nouvelle_valeur: bool,
    /// Unité d'angle pour la trig.
    pub en_degres: bool,
    pub onglet: Onglet,
}

impl Default for Etat {
    fn default() -> Self {
        Etat {
            valeur_courante: "0".to_string(),
            valeur_precedente: None,
            operateur: None,
            memoire: 0.0,
            calcul_precedent: String::new(),
            erreur: None,
            attente_nouvelle_valeur: false,
            en_degres: true,
            onglet: Onglet::Base,
        }
    }
}

impl Etat {
    /// État initial d'une session : défauts + paramètres persistés.
    pub fn avec_parametres(p: Parametres) -> Self {
        Etat {
            en_degres: p.en_degres,
            memoire: p.memoire,
            ..Etat::default()
        }
    }

    /// Ce que la persistance doit retenir de cet état.
    pub fn parametres(&self) -> Parametres {
        Parametres {
            en_degres: self.en_degres,
            memoire: self.memoire,
        }
    }

    pub fn en_erreur(&self) -> bool {
        self.erreur.is_some()
    }

    /// Indicateur "M" : le registre mémoire est non nul.
    pub fn memoire_presente(&self) -> bool {
        self.memoire != 0.0
    }

    /// Lecture numérique de la valeur affichée. L'invariant garantit un
    /// numéral partiel valide ("3." se parse) ; on reste total malgré tout.
    fn nombre_courant(&self) -> f64 {
        self.valeur_courante.parse().unwrap_or(0.0)
    }

    /// État frais qui conserve mémoire, mode et onglet (toutes les sorties
    /// d'erreur SAUF "=", et le bouton C).
    fn reinitialisation_contexte(&self) -> Etat {
        Etat {
            memoire: self.memoire,
            en_degres: self.en_degres,
            onglet: self.onglet,
            ..Etat::default()
        }
    }

    /* ------------------------ Transitions ------------------------ */

    /// Saisie d'un chiffre '0'..='9'.
    pub fn chiffre(&self, c: char) -> Transition {
        if self.en_erreur() {
            let mut etat = self.reinitialisation_contexte();
            etat.valeur_courante = c.to_string();
            return conclure(self, etat, Vec::new());
        }

        let mut etat = self.clone();
        if etat.attente_nouvelle_valeur {
            etat.valeur_courante = c.to_string();
            etat.attente_nouvelle_valeur = false;
        } else if etat.valeur_courante == "0" {
            // supprime le zéro de tête
            etat.valeur_courante = c.to_string();
        } else {
            etat.valeur_courante.push(c);
        }
        conclure(self, etat, Vec::new())
    }

    /// Point décimal. Amorce "0." sur un opérande frais ; au plus un '.'.
    pub fn point(&self) -> Transition {
        if self.en_erreur() {
            let mut etat = self.reinitialisation_contexte();
            etat.valeur_courante = "0.".to_string();
            return conclure(self, etat, Vec::new());
        }

        let mut etat = self.clone();
        if etat.attente_nouvelle_valeur {
            etat.valeur_courante = "0.".to_string();
            etat.attente_nouvelle_valeur = false;
        } else if !etat.valeur_courante.contains('.') {
            etat.valeur_courante.push('.');
        }
        conclure(self, etat, Vec::new())
    }

    /// Sélection d'un opérateur binaire.
    ///
    /// Sans opération en attente : mémorise l'opérande gauche, la valeur
    /// affichée reste visible jusqu'au prochain chiffre. Avec une opération
    /// déjà en attente : ÉVALUATION IMMÉDIATE (chaînage gauche-droite, pas
    /// de précédence), le résultat devient le nouvel opérande gauche. Pas
    /// d'entrée d'historique pour un chaînage.
    pub fn operateur(&self, op: Operateur) -> Transition {
        if self.en_erreur() {
            // abandonne aussi l'opération en attente
            return conclure(self, self.reinitialisation_contexte(), Vec::new());
        }

        let mut etat = self.clone();
        match (&self.valeur_precedente, self.operateur) {
            (Some(precedente), Some(en_attente)) => {
                let a: f64 = precedente.parse().unwrap_or(0.0);
                match evaluer(a, self.nombre_courant(), en_attente) {
                    Ok(resultat) => {
                        let texte = formater_nombre(resultat);
                        etat.calcul_precedent = format!("{texte} {}", op.symbole());
                        etat.valeur_precedente = Some(texte.clone());
                        etat.valeur_courante = texte;
                        etat.operateur = Some(op);
                        etat.attente_nouvelle_valeur = true;
                    }
                    // le changement d'opérateur est abandonné
                    Err(e) => etat.erreur = Some(e.to_string()),
                }
            }
            _ => {
                etat.calcul_precedent =
                    format!("{} {}", self.valeur_courante, op.symbole());
                etat.valeur_precedente = Some(self.valeur_courante.clone());
                etat.operateur = Some(op);
                etat.attente_nouvelle_valeur = true;
            }
        }
        conclure(self, etat, Vec::new())
    }

    /// "=" : évalue l'opération en attente et journalise le calcul.
    ///
    /// En état Erreur : remise à zéro TOTALE (mémoire/mode/onglet compris),
    /// asymétrie voulue par rapport aux autres sorties d'erreur.
    pub fn egal(&self) -> Transition {
        if self.en_erreur() {
            return conclure(self, Etat::default(), Vec::new());
        }

        let (Some(precedente), Some(op)) = (&self.valeur_precedente, self.operateur) else {
            // rien à évaluer
            return conclure(self, self.clone(), Vec::new());
        };

        let mut etat = self.clone();
        let a: f64 = precedente.parse().unwrap_or(0.0);
        match evaluer(a, self.nombre_courant(), op) {
            Ok(resultat) => {
                let calcul =
                    format!("{precedente} {} {}", op.symbole(), self.valeur_courante);
                let texte = formater_nombre(resultat);

                etat.valeur_courante = texte.clone();
                etat.valeur_precedente = None;
                etat.operateur = None;
                etat.calcul_precedent = format!("{calcul} =");
                etat.attente_nouvelle_valeur = true;

                let effets = vec![Effet::AjouterHistorique(EntreeHistorique::nouvelle(
                    calcul, texte,
                ))];
                return conclure(self, etat, effets);
            }
            // les opérandes fautifs restent en place pour correction
            Err(e) => etat.erreur = Some(e.to_string()),
        }
        conclure(self, etat, Vec::new())
    }

    /// C : état frais, mémoire/mode/onglet conservés.
    pub fn effacer(&self) -> Transition {
        conclure(self, self.reinitialisation_contexte(), Vec::new())
    }

    /// Retrait du dernier caractère saisi.
    pub fn retour_arriere(&self) -> Transition {
        if self.en_erreur() {
            return conclure(self, self.reinitialisation_contexte(), Vec::new());
        }
        if self.attente_nouvelle_valeur {
            return conclure(self, self.clone(), Vec::new());
        }

        let mut etat = self.clone();
        let v = &self.valeur_courante;
        let signe_seul = v == "-" || v.len() == 1;
        let negatif_court = v.starts_with('-') && v.len() == 2;
        if signe_seul || negatif_court {
            // "-5" redevient "0", jamais "-"
            etat.valeur_courante = "0".to_string();
        } else {
            etat.valeur_courante.pop();
        }
        conclure(self, etat, Vec::new())
    }

    /// ± : bascule le signe. Sans effet sur "0".
    pub fn inverser_signe(&self) -> Transition {
        if self.en_erreur() {
            return conclure(self, self.reinitialisation_contexte(), Vec::new());
        }
        if self.valeur_courante == "0" {
            return conclure(self, self.clone(), Vec::new());
        }

        let mut etat = self.clone();
        etat.valeur_courante = match self.valeur_courante.strip_prefix('-') {
            Some(sans_signe) => sans_signe.to_string(),
            None => format!("-{}", self.valeur_courante),
        };
        conclure(self, etat, Vec::new())
    }

    /// % : valeur / 100, journalisée "<n>%".
    /// Corner préservé : l'opérateur en attente n'est NI consulté NI effacé.
    pub fn pourcent(&self) -> Transition {
        if self.en_erreur() {
            return conclure(self, self.reinitialisation_contexte(), Vec::new());
        }

        let n = self.nombre_courant();
        let texte = formater_nombre(n / 100.0);
        let trace = format!("{n}%");

        let mut etat = self.clone();
        etat.valeur_courante = texte.clone();
        etat.calcul_precedent = format!("{trace} =");
        etat.attente_nouvelle_valeur = true;

        let effets = vec![Effet::AjouterHistorique(EntreeHistorique::nouvelle(
            trace, texte,
        ))];
        conclure(self, etat, effets)
    }

    /// Touche de fonction scientifique.
    ///
    /// - π / e : dépôt de la constante (chemin de formatage unique), pas
    ///   d'historique
    /// - xʸ / ʸ√x : deux opérandes, se comportent comme un opérateur
    /// - le reste : évaluateur unaire, historique + trace sur succès
    pub fn fonction(&self, f: Fonction) -> Transition {
        if self.en_erreur() {
            return conclure(self, self.reinitialisation_contexte(), Vec::new());
        }

        // routage "deux opérandes"
        let binaire = match f {
            Fonction::Puissance => Some(Operateur::Puissance),
            Fonction::Racine => Some(Operateur::Racine),
            _ => None,
        };
        if let Some(op) = binaire {
            let mut etat = self.clone();
            etat.calcul_precedent = format!("{} {}", self.valeur_courante, op.symbole());
            etat.valeur_precedente = Some(self.valeur_courante.clone());
            etat.operateur = Some(op);
            etat.attente_nouvelle_valeur = true;
            return conclure(self, etat, Vec::new());
        }

        let mut etat = self.clone();
        let mut effets = Vec::new();
        match appliquer(f, self.nombre_courant(), self.en_degres) {
            Ok(eval) => {
                let texte = formater_nombre(eval.valeur);
                if let Some(trace) = eval.trace {
                    etat.calcul_precedent = format!("{trace} =");
                    effets.push(Effet::AjouterHistorique(EntreeHistorique::nouvelle(
                        trace,
                        texte.clone(),
                    )));
                }
                etat.valeur_courante = texte;
                etat.attente_nouvelle_valeur = true;
            }
            Err(e) => etat.erreur = Some(e.to_string()),
        }
        conclure(self, etat, effets)
    }

    /// Opération mémoire. Corner préservé : pas de branche d'erreur, la
    /// valeur affichée (potentiellement périmée) est utilisée telle quelle.
    pub fn memoire(&self, op: OpMemoire) -> Transition {
        let mut etat = self.clone();
        match op {
            OpMemoire::Effacer => etat.memoire = 0.0,
            OpMemoire::Rappeler => {
                etat.valeur_courante = formater_nombre(self.memoire);
                etat.attente_nouvelle_valeur = true;
            }
            OpMemoire::Ajouter => {
                etat.memoire += self.nombre_courant();
                etat.attente_nouvelle_valeur = true;
            }
            OpMemoire::Soustraire => {
                etat.memoire -= self.nombre_courant();
                etat.attente_nouvelle_valeur = true;
            }
            OpMemoire::Stocker => {
                etat.memoire = self.nombre_courant();
                etat.attente_nouvelle_valeur = true;
            }
        }
        conclure(self, etat, Vec::new())
    }

    /// DEG <-> RAD. Prend effet à la prochaine évaluation trig.
    pub fn basculer_unite(&self) -> Transition {
        let mut etat = self.clone();
        etat.en_degres = !self.en_degres;
        conclure(self, etat, Vec::new())
    }

    /// Changement de panneau de pavé. Présentationnel.
    pub fn changer_onglet(&self, onglet: Onglet) -> Transition {
        let mut etat = self.clone();
        etat.onglet = onglet;
        conclure(self, etat, Vec::new())
    }

    /// Clic sur une entrée d'historique : son résultat redevient la valeur
    /// affichée, prête à servir d'opérande.
    pub fn rappel_historique(&self, entree: &EntreeHistorique) -> Transition {
        let mut etat = self.clone();
        etat.valeur_courante = entree.resultat.clone();
        etat.attente_nouvelle_valeur = true;
        conclure(self, etat, Vec::new())
    }
}

/// Scelle une transition : ajoute EcrireParametres dès que la part
/// persistée de l'état (mémoire, mode d'angle) a changé.
fn conclure(avant: &Etat, etat: Etat, mut effets: Vec<Effet>) -> Transition {
    if etat.memoire != avant.memoire || etat.en_degres != avant.en_degres {
        effets.push(Effet::EcrireParametres);
    }
    Transition { etat, effets }
}
