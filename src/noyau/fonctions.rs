// src/noyau/fonctions.rs
//
// Fonctions scientifiques (dispatch unaire) + mode d'angle
// --------------------------------------------------------
// - sin/cos/tan : l'OPÉRANDE est converti degrés -> radians en mode Degres
// - asin/acos/atan : calcul en radians, puis le RÉSULTAT est converti en
//   degrés en mode Degres. L'asymétrie avec sin/cos/tan est le comportement
//   de référence, conservé tel quel.
// - factorielle : troncature vers zéro (pas d'arrondi), calcul exact BigInt,
//   plafonnée à 170! (dernière factorielle finie en f64)

use num_bigint::BigInt;
use num_traits::{One, ToPrimitive};

use super::erreur::ErreurEval;

/// Plus grand n tel que n! reste fini en f64 (171! déborde).
const FACTORIELLE_MAX: f64 = 170.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Radians,
    Degres,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log, // base 10
    Ln,  // base e
    Carre,
    Sqrt,
    Factorielle,
    Inverse,
    Abs,
}

impl Fonction {
    /// Nom affiché dans l'historique ("sin(5) = …").
    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Asin => "asin",
            Fonction::Acos => "acos",
            Fonction::Atan => "atan",
            Fonction::Log => "log",
            Fonction::Ln => "ln",
            Fonction::Carre => "square",
            Fonction::Sqrt => "sqrt",
            Fonction::Factorielle => "factorial",
            Fonction::Inverse => "reciprocal",
            Fonction::Abs => "abs",
        }
    }
}

/// Applique une fonction scientifique à un opérande, sous un mode d'angle.
/// Fonction pure : aucun état entre deux appels.
///
/// Toute faute sort en `ErreurEval`, jamais en NaN/±inf silencieux.
pub fn applique_fonction(f: Fonction, x: f64, mode: ModeAngle) -> Result<f64, ErreurEval> {
    use Fonction::*;

    let v = match f {
        Sin => angle_entree(x, mode).sin(),
        Cos => angle_entree(x, mode).cos(),
        Tan => angle_entree(x, mode).tan(),

        Asin => {
            if !(-1.0..=1.0).contains(&x) {
                return Err(ErreurEval::Domaine);
            }
            angle_sortie(x.asin(), mode)
        }
        Acos => {
            if !(-1.0..=1.0).contains(&x) {
                return Err(ErreurEval::Domaine);
            }
            angle_sortie(x.acos(), mode)
        }
        Atan => angle_sortie(x.atan(), mode),

        Log => {
            if x <= 0.0 {
                return Err(ErreurEval::Domaine);
            }
            x.log10()
        }
        Ln => {
            if x <= 0.0 {
                return Err(ErreurEval::Domaine);
            }
            x.ln()
        }

        Carre => x * x,
        Sqrt => {
            if x < 0.0 {
                return Err(ErreurEval::Domaine);
            }
            x.sqrt()
        }

        Factorielle => factorielle(x)?,

        Inverse => {
            if x == 0.0 {
                return Err(ErreurEval::DivisionParZero);
            }
            1.0 / x
        }

        Abs => x.abs(),
    };

    // Filet final : opérande NaN, carré de 1e200, etc.
    if !v.is_finite() {
        return Err(ErreurEval::Domaine);
    }
    Ok(v)
}

/* ------------------------ conversions d'angle ------------------------ */

fn angle_entree(x: f64, mode: ModeAngle) -> f64 {
    match mode {
        ModeAngle::Radians => x,
        ModeAngle::Degres => x.to_radians(),
    }
}

fn angle_sortie(rad: f64, mode: ModeAngle) -> f64 {
    match mode {
        ModeAngle::Radians => rad,
        ModeAngle::Degres => rad.to_degrees(),
    }
}

/* ------------------------ factorielle ------------------------ */

/// Factorielle sur opérande tronqué vers zéro (5.7 -> 5!, -0.5 -> 0! = 1).
/// - tronqué < 0 : hors domaine
/// - tronqué > 170 : hors domaine (le résultat déborderait f64)
/// - produit exact en BigInt, puis conversion f64
fn factorielle(x: f64) -> Result<f64, ErreurEval> {
    let n = x.trunc();
    if !n.is_finite() || n < 0.0 || n > FACTORIELLE_MAX {
        return Err(ErreurEval::Domaine);
    }

    let mut acc = BigInt::one();
    for k in 2..=(n as u64) {
        acc *= k;
    }

    acc.to_f64()
        .filter(|v| v.is_finite())
        .ok_or(ErreurEval::Domaine)
}
