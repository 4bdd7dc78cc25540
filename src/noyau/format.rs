// src/noyau/format.rs

use super::expr::{Expr, Morceau};

/// Chiffres significatifs de l’affichage "général".
const PRECISION: usize = 6;

/* ------------------------ Résultat numérique ------------------------ */

/// Affichage "général" (règle du %g) :
/// - 6 chiffres significatifs
/// - notation scientifique si exposant < -4 ou >= 6 (1e+06, 1.5e-05)
/// - zéros finaux (et point final) supprimés
/// - inf / -inf / nan, et "-0" conservé
pub fn format_general(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Exposant APRÈS arrondi à 6 chiffres : 999999.5 -> 1.00000e6
    let sci = format!("{:.*e}", PRECISION - 1, v);
    let Some((mantisse, exposant)) = sci.split_once('e') else {
        return sci;
    };
    let exposant: i32 = exposant.parse().unwrap_or(0);

    if exposant < -4 || exposant >= PRECISION as i32 {
        let signe = if exposant < 0 { '-' } else { '+' };
        format!("{}e{signe}{:02}", retire_zeros(mantisse), exposant.abs())
    } else {
        let decimales = (PRECISION as i32 - 1 - exposant) as usize;
        retire_zeros(&format!("{:.*}", decimales, v))
    }
}

fn retire_zeros(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/* ------------------------ Arbre (démarche) ------------------------ */

/// Forme structurelle : Add(Constant(2), Mul(Constant(3), Constant(4)))
///
/// Itératif, comme `Display` : pas de récursion sur la profondeur de l’arbre.
pub fn format_arbre(e: &Expr) -> String {
    use Morceau::*;

    let mut out = String::new();
    let mut pile = vec![Noeud(e)];
    while let Some(m) = pile.pop() {
        match m {
            Texte(t) => out.push_str(t),
            Noeud(Expr::Constant(v)) => out.push_str(&format!("Constant({v})")),
            Noeud(Expr::Negate(x)) => {
                out.push_str("Negate(");
                pile.push(Texte(")"));
                pile.push(Noeud(x.as_ref()));
            }
            Noeud(Expr::Binary { op, gauche, droite }) => {
                out.push_str(op.nom());
                out.push('(');
                pile.push(Texte(")"));
                pile.push(Noeud(droite.as_ref()));
                pile.push(Texte(", "));
                pile.push(Noeud(gauche.as_ref()));
            }
        }
    }
    out
}
