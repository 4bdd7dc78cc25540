//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche, onglet)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici : du noyau, seul le type `DemarcheNoyau` est repris tel quel.
//! - Actions déterministes, sans effet de bord caché.
//! - Une erreur n’efface jamais le dernier résultat affiché.

use calculatrice_expr::noyau::DemarcheNoyau;

/// Affiché tant qu’aucun calcul n’a réussi.
pub const RESULTAT_VIDE: &str = "?";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Onglet {
    #[default]
    Calculatrice,
    Exemples,
    APropos,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,            // valeur formatée (%g)
    pub expression_calculee: String, // texte qui a produit `resultat`
    pub erreur: String,              // "Kind: message" (si l’évaluation échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: DemarcheNoyau,

    // --- navigation ---
    pub onglet: Onglet,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: RESULTAT_VIDE.to_string(),
            expression_calculee: String::new(),
            erreur: String::new(),
            demarche: DemarcheNoyau::default(),
            onglet: Onglet::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat = RESULTAT_VIDE.to_string();
        self.expression_calculee.clear();
        self.erreur.clear();
        self.demarche = DemarcheNoyau::default();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier caractère (et les espaces qui le précèdent).
    pub fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.focus_entree = true;
    }

    /// Placer une erreur.
    ///
    /// On CONSERVE `resultat` et `expression_calculee` (dernier succès) et la démarche associée.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.focus_entree = true;
    }

    /// Déposer un résultat complet (valeur formatée + expression + démarche).
    pub fn set_resultat(
        &mut self,
        resultat: impl Into<String>,
        expression: impl Into<String>,
        demarche: DemarcheNoyau,
    ) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.expression_calculee = expression.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }
}
