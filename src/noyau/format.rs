// src/noyau/format.rs
//
// Affichage des résultats f64 (texte déposé dans le champ de saisie
// et dans l'historique) :
// - valeur entière : sans point décimal ("14", pas "14.0")
// - sinon : plus courte écriture ronde (aller-retour f64)
// - au-delà de 1e16 ou en deçà de 1e-4 : notation exposant

/// Formate une valeur finie pour l'affichage calculatrice.
pub fn format_nombre(v: f64) -> String {
    if v == 0.0 {
        // couvre aussi -0.0
        return "0".to_string();
    }

    let a = v.abs();
    if a >= 1e16 || a < 1e-4 {
        return format!("{v:e}");
    }

    if v.trunc() == v {
        // |v| < 1e16 : la conversion i64 est exacte
        return format!("{}", v as i64);
    }

    format!("{v}")
}
