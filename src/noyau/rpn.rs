// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur f64
// Objectif :
// - Convertir une suite de Tok en RPN (postfix)
// - Puis replier la RPN sur une pile de f64 (aucun AST conservé)
//
// Règles :
// - Précédences : ** (4) > moins unaire (3) > * / % (2) > + - (1)
// - ** et le moins unaire sont associatifs à droite, le reste à gauche
// - Moins unaire : si '-' arrive quand on n'attend PAS une valeur, il devient
//   Tok::MoinsUnaire (opérateur préfixe à part entière, PAS une injection de 0 :
//   "-2**2" doit lire -(2**2))

use super::erreur::ErreurEval;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Moins => 1,
        Tok::Etoile | Tok::Barre | Tok::Pourcent => 2,
        Tok::MoinsUnaire => 3,
        Tok::Puissance => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Puissance | Tok::MoinsUnaire)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple :
///   tokens: [Nombre(2), Plus, Nombre(3), Etoile, Nombre(4)]
///   rpn:    [Nombre(2), Nombre(3), Nombre(4), Etoile, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // "valeur" = un littéral ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().copied() {
        match tok {
            Tok::Nombre(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::ParG => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::ParD => {
                // dépile jusqu'à '(' ; s'il n'y en a pas, parenthèses déséquilibrées
                loop {
                    match ops.pop() {
                        Some(Tok::ParG) => break,
                        Some(op) => out.push(op),
                        None => return Err(ErreurEval::Syntaxe),
                    }
                }
                prev_was_value = true;
            }

            Tok::Moins if !prev_was_value => {
                // préfixe : rien à sa gauche ne peut se fermer, on empile direct
                ops.push(Tok::MoinsUnaire);
            }

            Tok::Plus | Tok::Moins | Tok::Etoile | Tok::Barre | Tok::Pourcent
            | Tok::Puissance => {
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::ParG) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if doit_pop {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            // tokenize ne produit jamais MoinsUnaire
            Tok::MoinsUnaire => return Err(ErreurEval::Syntaxe),
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::ParG) {
            return Err(ErreurEval::Syntaxe);
        }
        out.push(op);
    }

    Ok(out)
}

/// Replie une RPN sur une pile de f64.
///
/// - `/ 0` et `% 0` sont détectés AVANT que l'IEEE ne fabrique un infini
/// - `%` est le modulo plancher (signe du diviseur), pas le reste tronqué
/// - sous-alimentation ou reliquat de pile => expression invalide
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurEval> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn.iter().copied() {
        match tok {
            Tok::Nombre(v) => st.push(v),

            Tok::MoinsUnaire => {
                let x = st.pop().ok_or(ErreurEval::Syntaxe)?;
                st.push(-x);
            }

            Tok::Plus | Tok::Moins | Tok::Etoile | Tok::Barre | Tok::Pourcent
            | Tok::Puissance => {
                let b = st.pop().ok_or(ErreurEval::Syntaxe)?;
                let a = st.pop().ok_or(ErreurEval::Syntaxe)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Moins => a - b,
                    Tok::Etoile => a * b,
                    Tok::Barre => {
                        if b == 0.0 {
                            return Err(ErreurEval::DivisionParZero);
                        }
                        a / b
                    }
                    Tok::Pourcent => {
                        if b == 0.0 {
                            return Err(ErreurEval::DivisionParZero);
                        }
                        a - b * (a / b).floor()
                    }
                    Tok::Puissance => a.powf(b),
                    _ => unreachable!(),
                };

                st.push(v);
            }

            Tok::ParG | Tok::ParD => return Err(ErreurEval::Syntaxe),
        }
    }

    if st.len() != 1 {
        return Err(ErreurEval::Syntaxe);
    }
    Ok(st.pop().unwrap())
}
