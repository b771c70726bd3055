// src/noyau/canon.rs
//
// Canonisation du texte saisi (déterministe, totale) :
// - `^`   -> `**`          (puissance)
// - `π`   -> littéral décimal f64 (aller-retour le plus court)
// - `e`   -> littéral décimal f64
// - `mod` -> `%`
// - chiffre suivi de `(`   -> insertion d'un `*` explicite (3(4+5) -> 3*(4+5))
//
// Aucune autre réécriture : la multiplication implicite n'est gérée que pour
// chiffre-parenthèse, et l'entrée malformée est laissée telle quelle pour
// l'évaluateur.
//
// ATTENTION (comportement d'origine, conservé volontairement) :
// le remplacement de `e` est purement textuel. Il corrompt donc la notation
// scientifique ("1e5" devient un littéral unique "12.7182818284590455").

/// π en plus courte écriture décimale f64.
pub const PI_TEXTE: &str = "3.141592653589793";

/// e en plus courte écriture décimale f64.
pub const E_TEXTE: &str = "2.718281828459045";

/// Canonise une saisie brute en texte arithmétique pour l'évaluateur.
/// Fonction pure et totale : ne peut pas échouer.
pub fn canonise(brut: &str) -> String {
    let s = brut.replace('^', "**");
    let s = s.replace('π', PI_TEXTE);
    let s = s.replace('e', E_TEXTE);
    let s = s.replace("mod", "%");
    inserer_mul_implicite(&s)
}

/// Insère `*` entre un chiffre et une parenthèse ouvrante.
/// Seul motif de multiplication implicite géré — ni `)(`, ni `)2`.
fn inserer_mul_implicite(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if c == '(' {
            if let Some(p) = prev {
                if p.is_ascii_digit() {
                    out.push('*');
                }
            }
        }
        out.push(c);
        prev = Some(c);
    }

    out
}
