// src/cli.rs
//
// Ligne de commande (natif seulement)
// -----------------------------------
// - `calculatrice_expr "2 + 3 * 4"`        -> 14
// - `calculatrice_expr -d -- -2 ^ 2`       -> 4 + démarche
// - `calculatrice_expr --exemples`         -> table de référence
// - sans argument                          -> fenêtre eframe

use clap::Parser;

use calculatrice_expr::noyau::{evaluer_avec_demarche, format_general, DemarcheNoyau};

use crate::app::exemples::tableau_exemples;

/// Calculatrice d’expressions arithmétiques (+ - * / ^, moins unaire, parenthèses).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Expression à évaluer (les morceaux sont joints par des espaces).
    /// Sans expression : ouvre la fenêtre.
    #[arg(value_name = "EXPRESSION", allow_hyphen_values = true, trailing_var_arg = true)]
    pub expression: Vec<String>,

    /// Affiche la table des exemples de référence puis quitte.
    #[arg(long)]
    pub exemples: bool,

    /// Affiche aussi la démarche (jetons, arbre, mesures).
    #[arg(short, long)]
    pub demarche: bool,

    /// Logs détaillés du pipeline (niveau debug ; RUST_LOG reste prioritaire).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Mode sans fenêtre : une expression OU la table d’exemples.
    pub fn sans_fenetre(&self) -> bool {
        self.exemples || !self.expression.is_empty()
    }
}

/// Logger natif : `info` par défaut, `debug` pour notre crate avec --verbose.
pub fn init_logs(verbose: bool) {
    let defaut = if verbose {
        "info,calculatrice_expr=debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(defaut)).init();
}

/// Exécute le mode sans fenêtre ; rend le code de sortie du processus.
pub fn execute(args: &Args) -> i32 {
    if args.exemples {
        print!("{}", rendu_exemples());
        return 0;
    }

    let texte = args.expression.join(" ");
    match rendu_expression(&texte, args.demarche) {
        Ok(sortie) => {
            print!("{sortie}");
            0
        }
        Err(msg) => {
            eprintln!("{msg}");
            1
        }
    }
}

/// Résultat formaté (+ démarche), ou "Kind: message".
pub fn rendu_expression(texte: &str, avec_demarche: bool) -> Result<String, String> {
    let (valeur, d) = evaluer_avec_demarche(texte).map_err(|e| e.affichage())?;

    let mut out = format!("{}\n", format_general(valeur));
    if avec_demarche {
        out.push_str(&rendu_demarche(&d));
    }
    Ok(out)
}

fn rendu_demarche(d: &DemarcheNoyau) -> String {
    format!(
        "jetons     : {}\ninfixe     : {}\narbre      : {}\nprofondeur : {}\nnoeuds     : {}\n",
        d.jetons, d.infixe, d.arbre, d.profondeur, d.noeuds
    )
}

pub fn rendu_exemples() -> String {
    let lignes = tableau_exemples();
    let largeur = lignes
        .iter()
        .map(|l| l.expression.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for l in lignes {
        let pad = largeur - l.expression.chars().count();
        out.push_str(&format!("{}{}  {}\n", l.expression, " ".repeat(pad), l.texte));
    }
    out
}
