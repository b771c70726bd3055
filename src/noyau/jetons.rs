// src/noyau/jetons.rs
//
// Tokenisation du texte canonique (sortie de canon::canonise).
// L'alphabet est volontairement fermé : littéraux décimaux, + - * / % **,
// parenthèses, espaces. Tout le reste est une faute de syntaxe — il n'y a
// ni identifiant ni constante ici, la canonisation les a déjà réécrits.

use super::erreur::ErreurEval;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Nombre(f64),

    Plus,
    Moins,
    Etoile,
    Barre,
    Pourcent,
    Puissance, // **

    // Moins unaire : jamais produit par tokenize, injecté par rpn::to_rpn
    // quand un '-' arrive en position de valeur.
    MoinsUnaire,

    ParG,
    ParD,
}

/// Tokenize une chaîne canonique en jetons.
/// Supporte :
/// - littéraux décimaux (ex: 12, 3.5, .5)
/// - opérateurs + - * / % et ** (puissance)
/// - parenthèses ( )
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::ParG);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::ParD);
            i += 1;
            continue;
        }

        // Opérateurs ('**' avant '*')
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Moins);
                i += 1;
                continue;
            }
            '*' => {
                if i + 1 < chars.len() && chars[i + 1] == '*' {
                    out.push(Tok::Puissance);
                    i += 2;
                } else {
                    out.push(Tok::Etoile);
                    i += 1;
                }
                continue;
            }
            '/' => {
                out.push(Tok::Barre);
                i += 1;
                continue;
            }
            '%' => {
                out.push(Tok::Pourcent);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Littéral décimal : chiffres et points, parse f64 strict.
        // "1.2.3" est rejeté par le parse (faute de syntaxe).
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let lit: String = chars[start..i].iter().collect();
            let v: f64 = lit.parse().map_err(|_| ErreurEval::Syntaxe)?;
            out.push(Tok::Nombre(v));
            continue;
        }

        // Caractère inattendu (identifiant, symbole inconnu…)
        return Err(ErreurEval::Syntaxe);
    }

    Ok(out)
}
