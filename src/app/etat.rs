//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l'état de session de la calculatrice (saisie, mode
//! d'angle, mémoire, historique, thème) et offrir des opérations simples
//! sans logique d'affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing d'expression).
//! - Actions déterministes, sans effet de bord caché.
//! - L'historique est borné (3 entrées, éviction FIFO).

use crate::noyau::ModeAngle;

/// Nombre maximal d'entrées d'historique affichées.
const HISTORIQUE_MAX: usize = 3;

/// Texte unique affiché pour toute faute d'évaluation (parité avec la
/// calculatrice d'origine : le détail typé reste côté noyau/journal).
pub const TEXTE_ERREUR: &str = "Error";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- saisie utilisateur (tampon d'expression) ---
    pub entree: String,

    // --- affichage d'erreur ("Error" ou vide) ---
    pub erreur: String,

    // --- paramètres de session ---
    pub mode_angle: ModeAngle,
    pub theme_sombre: bool,

    // --- registre mémoire (MC/MR/M+/M-/MS) ---
    pub memoire: f64,

    // --- historique : (saisie, résultat), du plus ancien au plus récent ---
    pub historique: Vec<(String, String)>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            erreur: String::new(),
            mode_angle: ModeAngle::default(), // radians au démarrage
            theme_sombre: true,
            memoire: 0.0,
            historique: Vec::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ saisie ------------------------ */

    /// Ajoute du texte au tampon (bouton chiffre/opérateur/constante).
    /// Toute saisie neuve efface l'affichage d'erreur.
    pub fn saisir(&mut self, txt: &str) {
        self.erreur.clear();
        self.entree.push_str(txt);
        self.focus_entree = true;
    }

    /// DEL : retire le dernier caractère.
    pub fn effacer_dernier(&mut self) {
        self.erreur.clear();
        self.entree.pop();
        self.focus_entree = true;
    }

    /// C : efface le tampon (et l'erreur affichée).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// Valeur numérique du tampon : champ vide = 0, texte non numérique = None.
    /// Les opérations mémoire ignorent silencieusement le None (référence).
    pub fn valeur_saisie(&self) -> Option<f64> {
        let s = self.entree.trim();
        if s.is_empty() {
            return Some(0.0);
        }
        s.parse().ok()
    }

    /* ------------------------ modes ------------------------ */

    pub fn basculer_mode_angle(&mut self) {
        self.mode_angle = match self.mode_angle {
            ModeAngle::Radians => ModeAngle::Degres,
            ModeAngle::Degres => ModeAngle::Radians,
        };
        self.focus_entree = true;
    }

    pub fn basculer_theme(&mut self) {
        self.theme_sombre = !self.theme_sombre;
        self.focus_entree = true;
    }

    /* ------------------------ mémoire ------------------------ */

    pub fn memoire_clear(&mut self) {
        self.memoire = 0.0;
    }

    pub fn memoire_store(&mut self) {
        if let Some(v) = self.valeur_saisie() {
            self.memoire = v;
        }
    }

    pub fn memoire_add(&mut self) {
        if let Some(v) = self.valeur_saisie() {
            self.memoire += v;
        }
    }

    pub fn memoire_subtract(&mut self) {
        if let Some(v) = self.valeur_saisie() {
            self.memoire -= v;
        }
    }

    /* ------------------------ résultats ------------------------ */

    /// Dépose un résultat : le texte formaté remplace le tampon et la paire
    /// (saisie, résultat) entre dans l'historique borné.
    pub fn deposer_resultat(&mut self, saisie: String, resultat: String) {
        self.erreur.clear();
        self.entree = resultat.clone();
        self.pousser_historique(saisie, resultat);
        self.focus_entree = true;
    }

    /// Toute faute d'évaluation : tampon vidé, "Error" affiché (référence).
    pub fn afficher_erreur(&mut self) {
        self.entree.clear();
        self.erreur = TEXTE_ERREUR.to_string();
        self.focus_entree = true;
    }

    fn pousser_historique(&mut self, saisie: String, resultat: String) {
        self.historique.push((saisie, resultat));
        if self.historique.len() > HISTORIQUE_MAX {
            self.historique.remove(0);
        }
    }
}
