// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Trois onglets : Calculatrice / Exemples / À propos
// - Clavier : Enter évalue (quand le champ vient d’être validé)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)

use eframe::egui;

use calculatrice_expr::noyau::{evaluer_avec_demarche, format_general};

use super::etat::{AppCalc, Onglet};
use super::exemples::tableau_exemples;

const VERT_RESULTAT: egui::Color32 = egui::Color32::from_rgb(0x50, 0xfa, 0x7b);
const ROUGE_ERREUR: egui::Color32 = egui::Color32::from_rgb(0xff, 0x55, 0x55);

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.onglet, Onglet::Calculatrice, "Calculatrice");
            ui.selectable_value(&mut self.onglet, Onglet::Exemples, "Exemples");
            ui.selectable_value(&mut self.onglet, Onglet::APropos, "À propos");
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match self.onglet {
                Onglet::Calculatrice => self.ui_calculatrice(ui),
                Onglet::Exemples => Self::ui_exemples(ui),
                Onglet::APropos => Self::ui_a_propos(ui),
            });
    }

    /* ------------------------ Onglet Calculatrice ------------------------ */

    fn ui_calculatrice(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| ui.heading("Calculatrice d’expressions"));
        ui.add_space(6.0);

        self.ui_entree(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_resultat(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_demarche(ui);
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2 * (3 + 4)^2")
                .id_salt("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton (pavé / C / DEL / etc.), on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter sur un singleline : le champ perd le focus dans la même frame.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.lost_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
            self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", InsertKind::OpenParen);
            self.bouton_insert(ui, ")", InsertKind::CloseParen);

            self.bouton_insert(ui, "+", InsertKind::Op);
            self.bouton_insert(ui, "-", InsertKind::Op);
            self.bouton_insert(ui, "*", InsertKind::Op);
            self.bouton_insert(ui, "/", InsertKind::Op);
            self.bouton_insert(ui, "^", InsertKind::Op);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(3)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"], ["0", ".", ""]] {
                    for touche in ligne {
                        if touche.is_empty() {
                            ui.label("");
                        } else {
                            self.bouton_insert(ui, touche, InsertKind::Digit);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            if !self.expression_calculee.is_empty() {
                ui.monospace(format!("Expression : {}", self.expression_calculee));
            }
            ui.label("Résultat");
            ui.label(
                egui::RichText::new(&self.resultat)
                    .size(36.0)
                    .strong()
                    .color(VERT_RESULTAT),
            );
        });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "Infixe", "demarche_infixe", &self.demarche.infixe);
                Self::champ_demarche(ui, "Arbre", "demarche_arbre", &self.demarche.arbre);
                let mesures = format!(
                    "profondeur {} · {} noeuds",
                    self.demarche.profondeur, self.demarche.noeuds
                );
                Self::champ_demarche(ui, "Mesures", "demarche_mesures", &mesures);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    /* ------------------------ Onglet Exemples ------------------------ */

    fn ui_exemples(ui: &mut egui::Ui) {
        egui::Grid::new("table_exemples")
            .num_columns(2)
            .striped(true)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.strong("Expression");
                ui.strong("Résultat / Erreur");
                ui.end_row();

                for ligne in tableau_exemples() {
                    ui.monospace(&ligne.expression);
                    let couleur = if ligne.ok { VERT_RESULTAT } else { ROUGE_ERREUR };
                    ui.colored_label(couleur, &ligne.texte);
                    ui.end_row();
                }
            });
    }

    /* ------------------------ Onglet À propos ------------------------ */

    fn ui_a_propos(ui: &mut egui::Ui) {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.heading("Calculatrice d’expressions");
            ui.add_space(10.0);
            ui.label(
                "Outil pratique pour l’étude de l’analyse lexicale et syntaxique : \
                 jetons -> descente récursive -> arbre -> évaluation.",
            );
            ui.add_space(6.0);
            ui.label("Opérateurs : + - * / ^ (associatif à droite), moins unaire, parenthèses.");
            ui.add_space(10.0);
            ui.small(format!("version {}", env!("CARGO_PKG_VERSION")));
        });
    }

    /* ------------------------ Boutons ------------------------ */

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, touche: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(touche));
        if !resp.clicked() {
            return;
        }

        match kind {
            InsertKind::CloseParen => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                self.entree.push_str(touche);
            }
            InsertKind::OpenParen => {
                let last = self.entree.chars().rev().find(|c| !c.is_whitespace());
                if let Some(c) = last {
                    if c.is_ascii_digit() || c == ')' {
                        self.entree.push(' ');
                    }
                }
                self.entree.push_str(touche);
            }
            InsertKind::Op => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(touche);
                self.entree.push(' ');
            }
            InsertKind::Digit => {
                // chiffres: pas d’espaces auto
                self.entree.push_str(touche);
            }
        }

        self.focus_entree = true;
    }

    /// Évalue l’entrée via le noyau, puis dépose résultat/démarche (ou l’erreur) dans l’état UI.
    fn eval_via_noyau(&mut self) {
        if self.entree.trim().is_empty() {
            self.set_erreur("Entrée vide : tapez une expression.");
            return;
        }

        let texte = self.entree.clone();
        match evaluer_avec_demarche(&texte) {
            Ok((valeur, d)) => self.set_resultat(format_general(valeur), texte, d),
            // déjà tracée (warn!) par le noyau
            Err(e) => self.set_erreur(e.affichage()),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Op,
    OpenParen,
    CloseParen,
}
