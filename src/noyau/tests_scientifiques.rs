//! Tests scientifiques (campagne) : dispatch des fonctions + modes d'angle.
//!
//! Points sensibles couverts :
//! - sin/cos/tan convertissent l'OPÉRANDE en mode Degres
//! - asin/acos/atan convertissent le RÉSULTAT en mode Degres (asymétrie
//!   volontaire, héritée de la calculatrice d'origine — ne pas "corriger")
//! - domaines : log/ln (> 0), sqrt (≥ 0), asin/acos ([-1, 1]), factorielle
//! - factorielle : troncature vers zéro, plafond 170!
//! - aucune sortie NaN/±inf : tout passe par ErreurEval

use std::f64::consts::{E, FRAC_PI_2, FRAC_PI_4, PI};

use super::erreur::ErreurEval;
use super::fonctions::{applique_fonction, Fonction, ModeAngle};

fn ok(f: Fonction, x: f64, mode: ModeAngle) -> f64 {
    applique_fonction(f, x, mode)
        .unwrap_or_else(|e| panic!("applique_fonction({f:?}, {x}, {mode:?}) erreur: {e}"))
}

fn erreur(f: Fonction, x: f64, mode: ModeAngle) -> ErreurEval {
    match applique_fonction(f, x, mode) {
        Ok(v) => panic!("applique_fonction({f:?}, {x}, {mode:?}) devrait échouer, a donné {v}"),
        Err(e) => e,
    }
}

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "attendu ≈{b}, obtenu {a}");
}

/* ------------------------ trig directe ------------------------ */

#[test]
fn sci_sin_deux_modes() {
    approx(ok(Fonction::Sin, 90.0, ModeAngle::Degres), 1.0);
    approx(ok(Fonction::Sin, FRAC_PI_2, ModeAngle::Radians), 1.0);
    approx(ok(Fonction::Sin, 30.0, ModeAngle::Degres), 0.5);
}

#[test]
fn sci_cos_tan_deux_modes() {
    approx(ok(Fonction::Cos, 180.0, ModeAngle::Degres), -1.0);
    approx(ok(Fonction::Cos, PI, ModeAngle::Radians), -1.0);
    approx(ok(Fonction::Tan, 45.0, ModeAngle::Degres), 1.0);
    approx(ok(Fonction::Tan, FRAC_PI_4, ModeAngle::Radians), 1.0);
}

#[test]
fn sci_mode_par_defaut_radians() {
    assert_eq!(ModeAngle::default(), ModeAngle::Radians);
}

/* ------------------------ trig inverse (asymétrie) ------------------------ */

#[test]
fn sci_arc_convertit_le_resultat() {
    // l'opérande n'est PAS converti : asin(1) se calcule en radians,
    // puis le résultat passe en degrés
    approx(ok(Fonction::Asin, 1.0, ModeAngle::Degres), 90.0);
    approx(ok(Fonction::Asin, 1.0, ModeAngle::Radians), FRAC_PI_2);
    approx(ok(Fonction::Acos, 0.0, ModeAngle::Degres), 90.0);
    approx(ok(Fonction::Atan, 1.0, ModeAngle::Degres), 45.0);
}

#[test]
fn sci_arc_domaine() {
    assert_eq!(
        erreur(Fonction::Asin, 1.5, ModeAngle::Radians),
        ErreurEval::Domaine
    );
    assert_eq!(
        erreur(Fonction::Acos, -1.1, ModeAngle::Degres),
        ErreurEval::Domaine
    );
}

/* ------------------------ log / ln ------------------------ */

#[test]
fn sci_logs() {
    approx(ok(Fonction::Log, 100.0, ModeAngle::Radians), 2.0);
    approx(ok(Fonction::Ln, E, ModeAngle::Radians), 1.0);

    assert_eq!(
        erreur(Fonction::Log, 0.0, ModeAngle::Radians),
        ErreurEval::Domaine
    );
    assert_eq!(
        erreur(Fonction::Ln, -1.0, ModeAngle::Radians),
        ErreurEval::Domaine
    );
}

/* ------------------------ carré / racine ------------------------ */

#[test]
fn sci_carre_et_racine() {
    assert_eq!(ok(Fonction::Carre, 9.0, ModeAngle::Radians), 81.0);
    assert_eq!(ok(Fonction::Sqrt, 4.0, ModeAngle::Radians), 2.0);
    assert_eq!(ok(Fonction::Sqrt, 0.0, ModeAngle::Radians), 0.0);

    assert_eq!(
        erreur(Fonction::Sqrt, -1.0, ModeAngle::Radians),
        ErreurEval::Domaine
    );
}

/* ------------------------ factorielle ------------------------ */

#[test]
fn sci_factorielle_troncature() {
    // troncature vers zéro, pas d'arrondi
    assert_eq!(ok(Fonction::Factorielle, 5.7, ModeAngle::Radians), 120.0);
    assert_eq!(ok(Fonction::Factorielle, 5.0, ModeAngle::Radians), 120.0);
    assert_eq!(ok(Fonction::Factorielle, 0.0, ModeAngle::Radians), 1.0);
    // -0.5 tronqué vers zéro -> 0! = 1
    assert_eq!(ok(Fonction::Factorielle, -0.5, ModeAngle::Radians), 1.0);
    assert_eq!(
        ok(Fonction::Factorielle, 20.0, ModeAngle::Radians),
        2432902008176640000.0
    );
}

#[test]
fn sci_factorielle_bornes() {
    assert_eq!(
        erreur(Fonction::Factorielle, -3.0, ModeAngle::Radians),
        ErreurEval::Domaine
    );

    // 170! est la dernière factorielle finie en f64
    let v = ok(Fonction::Factorielle, 170.0, ModeAngle::Radians);
    assert!(v.is_finite() && v > 7.25e306);

    assert_eq!(
        erreur(Fonction::Factorielle, 171.0, ModeAngle::Radians),
        ErreurEval::Domaine
    );
}

/* ------------------------ inverse / abs ------------------------ */

#[test]
fn sci_inverse() {
    assert_eq!(ok(Fonction::Inverse, 4.0, ModeAngle::Radians), 0.25);
    assert_eq!(
        erreur(Fonction::Inverse, 0.0, ModeAngle::Radians),
        ErreurEval::DivisionParZero
    );
}

#[test]
fn sci_abs() {
    assert_eq!(ok(Fonction::Abs, -3.5, ModeAngle::Radians), 3.5);
    assert_eq!(ok(Fonction::Abs, 0.0, ModeAngle::Radians), 0.0);
}

/* ------------------------ filet non-fini ------------------------ */

#[test]
fn sci_jamais_de_non_fini() {
    assert_eq!(
        erreur(Fonction::Carre, 1e200, ModeAngle::Radians),
        ErreurEval::Domaine
    );
    assert_eq!(
        erreur(Fonction::Sin, f64::NAN, ModeAngle::Radians),
        ErreurEval::Domaine
    );
}

/* ------------------------ noms pour l'historique ------------------------ */

#[test]
fn sci_noms_historique() {
    assert_eq!(Fonction::Sin.nom(), "sin");
    assert_eq!(Fonction::Carre.nom(), "square");
    assert_eq!(Fonction::Factorielle.nom(), "factorial");
    assert_eq!(Fonction::Inverse.nom(), "reciprocal");
}
