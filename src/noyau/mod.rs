//! Noyau calculatrice
//!
//! Organisation interne :
//! - erreur.rs    : ErreurEval (Syntaxe / DivisionParZero / Domaine)
//! - canon.rs     : canonisation du texte saisi (^, π, e, mod, 3( )
//! - jetons.rs    : tokenisation du texte canonique
//! - rpn.rs       : shunting-yard + repli RPN -> f64
//! - fonctions.rs : fonctions scientifiques + mode d'angle
//! - format.rs    : affichage des résultats
//! - eval.rs      : pipeline complet
//!
//! Le noyau est sans état : la saisie, le mode d'angle, la mémoire et
//! l'historique vivent côté app/ et sont passés explicitement à chaque appel.

pub mod canon;
pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use canon::canonise;
pub use erreur::ErreurEval;
pub use eval::eval_expression;
pub use fonctions::{applique_fonction, Fonction, ModeAngle};
pub use format::format_nombre;
