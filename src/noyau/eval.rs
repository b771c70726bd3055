//! Noyau — évaluation (pipeline réel)
//!
//! canonise (en amont, côté vue) -> tokenize -> RPN -> pile f64 -> filtre fini
//!
//! Le pipeline est une fonction pure de son texte d'entrée : aucun état entre
//! deux appels, aucun AST conservé au-delà de l'appel.

use super::erreur::ErreurEval;
use super::jetons::tokenize;
use super::rpn::{eval_rpn, to_rpn};

/// API publique : évalue un texte arithmétique canonique en f64.
///
/// Le texte est censé sortir de `canon::canonise` ; un texte non canonique
/// (symboles, identifiants…) échoue en `Syntaxe`.
pub fn eval_expression(canonique: &str) -> Result<f64, ErreurEval> {
    let s = canonique.trim();
    if s.is_empty() {
        return Err(ErreurEval::Syntaxe);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN (shunting-yard)
    let rpn = to_rpn(&jetons)?;

    // 3) Valeur
    let v = eval_rpn(&rpn)?;

    // 4) Jamais de non-fini en sortie (1e308-style débordements, (-8)**0.5…)
    if !v.is_finite() {
        return Err(ErreurEval::Domaine);
    }

    Ok(v)
}
