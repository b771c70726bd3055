// src/noyau/erreur.rs
//
// Erreurs typées du noyau.
// ------------------------
// Trois familles seulement :
// - Syntaxe        : entrée vide / malformée / jeton inconnu
// - DivisionParZero: diviseur, modulo ou inverse nul
// - Domaine        : argument hors domaine (log, ln, sqrt, factorielle…)
//
// Contrat : toute faute du noyau SORT par cette enum, jamais par un NaN
// silencieux. La vue est libre d'aplatir les trois familles en un seul
// "Error" affiché (parité avec la calculatrice d'origine), le détail reste
// disponible pour les tests.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("expression invalide")]
    Syntaxe,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("argument hors domaine")]
    Domaine,
}
