// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// - Même AppCalc (etat.rs), la vue ne porte aucun état propre
// - Disposition de la calculatrice d'origine : barre de modes (RAD/DEG,
//   thème), champ d'affichage, historique (3 lignes), rangée mémoire,
//   fonctions scientifiques, constantes, pavé numérique
// - Clavier : Enter évalue quand le champ a le focus (Échap est géré
//   globalement dans app.rs)
// - Seuls points de contact avec le noyau : eval_via_noyau (bouton "=")
//   et fonction_via_noyau (boutons sin…|x|)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::canon::{E_TEXTE, PI_TEXTE};
use crate::noyau::{applique_fonction, canonise, eval_expression, format_nombre, Fonction};

/* ------------------------ palette ------------------------ */

// Couleurs de la calculatrice d'origine. Les boutons gardent leur teinte
// dans les deux thèmes ; seuls fond, surface et texte basculent.
const BOUTON: egui::Color32 = egui::Color32::from_rgb(0x3b, 0x3b, 0x4d);
const BOUTON_DANGER: egui::Color32 = egui::Color32::from_rgb(0xe7, 0x4c, 0x3c);
const BOUTON_ALERTE: egui::Color32 = egui::Color32::from_rgb(0xf3, 0x9c, 0x12);
const BOUTON_VALIDE: egui::Color32 = egui::Color32::from_rgb(0x27, 0xae, 0x60);

const TAILLE_BOUTON: [f32; 2] = [88.0, 44.0];

struct Palette {
    surface: egui::Color32,
    texte: egui::Color32,
}

impl AppCalc {
    fn palette(&self) -> Palette {
        if self.theme_sombre {
            Palette {
                surface: egui::Color32::from_rgb(0x2d, 0x2d, 0x3a),
                texte: egui::Color32::WHITE,
            }
        } else {
            Palette {
                surface: egui::Color32::from_rgb(0xf0, 0xf0, 0xf0),
                texte: egui::Color32::BLACK,
            }
        }
    }

    /* ------------------------ UI principale ------------------------ */

    /// UI principale : à appeler depuis eframe::App::update(...).
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_barre_modes(ui);
                ui.add_space(6.0);

                self.ui_affichage(ui);
                ui.add_space(4.0);

                self.ui_historique(ui);
                ui.add_space(8.0);

                self.ui_pave(ui);
            });
    }

    fn ui_barre_modes(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mode = match self.mode_angle {
                crate::noyau::ModeAngle::Radians => "RAD",
                crate::noyau::ModeAngle::Degres => "DEG",
            };
            if bouton(ui, mode, BOUTON) {
                self.basculer_mode_angle();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if bouton(ui, "🌓", BOUTON) {
                    self.basculer_theme();
                }
            });
        });
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        let pal = self.palette();

        if self.erreur.is_empty() {
            let resp = ui.add(
                egui::TextEdit::singleline(&mut self.entree)
                    .desired_width(ui.available_width())
                    .font(egui::TextStyle::Heading)
                    .text_color(pal.texte)
                    .background_color(pal.surface)
                    .id_source("entree_edit"),
            );

            // Si on a cliqué un bouton, on redonne le focus au champ.
            if self.focus_entree {
                resp.request_focus();
                self.focus_entree = false;
            }

            // Enter évalue (seulement si le champ est focus, pour éviter les
            // déclenchements quand l'utilisateur clique ailleurs).
            let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
            if resp.has_focus() && enter {
                self.eval_via_noyau();
            }
        } else {
            // Faute d'évaluation : le champ affiche le littéral "Error"
            // (tampon déjà vidé par etat.rs) jusqu'à la prochaine saisie.
            egui::Frame::group(ui.style()).fill(pal.surface).show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.heading(
                    egui::RichText::new(self.erreur.as_str())
                        .color(ui.visuals().error_fg_color),
                );
            });
        }
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let pal = self.palette();

        egui::Frame::group(ui.style()).fill(pal.surface).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.set_min_height(3.0 * ui.text_style_height(&egui::TextStyle::Monospace));

            for (saisie, resultat) in &self.historique {
                ui.monospace(
                    egui::RichText::new(format!("{saisie} = {resultat}")).color(pal.texte),
                );
            }
        });
    }

    /* ------------------------ grille de boutons ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calc")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                // mémoire
                if bouton(ui, "MC", BOUTON_DANGER) {
                    self.memoire_clear();
                }
                if bouton(ui, "MR", BOUTON_ALERTE) {
                    self.erreur.clear();
                    self.entree = format_nombre(self.memoire);
                    self.focus_entree = true;
                }
                if bouton(ui, "M+", BOUTON_VALIDE) {
                    self.memoire_add();
                }
                if bouton(ui, "M-", BOUTON_VALIDE) {
                    self.memoire_subtract();
                }
                if bouton(ui, "MS", BOUTON_VALIDE) {
                    self.memoire_store();
                }
                ui.end_row();

                // fonctions scientifiques — rangée 1
                self.bouton_fonction(ui, "sin", Fonction::Sin);
                self.bouton_fonction(ui, "cos", Fonction::Cos);
                self.bouton_fonction(ui, "tan", Fonction::Tan);
                self.bouton_fonction(ui, "log", Fonction::Log);
                self.bouton_fonction(ui, "ln", Fonction::Ln);
                ui.end_row();

                // fonctions scientifiques — rangée 2
                self.bouton_fonction(ui, "asin", Fonction::Asin);
                self.bouton_fonction(ui, "acos", Fonction::Acos);
                self.bouton_fonction(ui, "atan", Fonction::Atan);
                self.bouton_fonction(ui, "x²", Fonction::Carre);
                self.bouton_fonction(ui, "√", Fonction::Sqrt);
                ui.end_row();

                // constantes + fonctions spéciales
                // π et e déposent leur développement décimal (référence)
                self.bouton_saisie(ui, "π", PI_TEXTE);
                self.bouton_saisie(ui, "e", E_TEXTE);
                self.bouton_fonction(ui, "x!", Fonction::Factorielle);
                self.bouton_fonction(ui, "1/x", Fonction::Inverse);
                self.bouton_fonction(ui, "|x|", Fonction::Abs);
                ui.end_row();

                // pavé
                if bouton(ui, "C", BOUTON_DANGER) {
                    self.clear_entree();
                }
                if bouton(ui, "DEL", BOUTON_ALERTE) {
                    self.effacer_dernier();
                }
                self.bouton_saisie(ui, "(", "(");
                self.bouton_saisie(ui, ")", ")");
                self.bouton_saisie(ui, "^", "^");
                ui.end_row();

                self.bouton_saisie(ui, "7", "7");
                self.bouton_saisie(ui, "8", "8");
                self.bouton_saisie(ui, "9", "9");
                self.bouton_saisie(ui, "/", "/");
                self.bouton_saisie(ui, "mod", "mod");
                ui.end_row();

                self.bouton_saisie(ui, "4", "4");
                self.bouton_saisie(ui, "5", "5");
                self.bouton_saisie(ui, "6", "6");
                self.bouton_saisie(ui, "*", "*");
                self.bouton_saisie(ui, "%", "%");
                ui.end_row();

                self.bouton_saisie(ui, "1", "1");
                self.bouton_saisie(ui, "2", "2");
                self.bouton_saisie(ui, "3", "3");
                self.bouton_saisie(ui, "-", "-");
                self.bouton_saisie(ui, "+", "+");
                ui.end_row();

                self.bouton_saisie(ui, "0", "0");
                self.bouton_saisie(ui, ".", ".");
                if bouton(ui, "=", BOUTON_VALIDE) {
                    self.eval_via_noyau();
                }
                ui.end_row();
            });
    }

    fn bouton_saisie(&mut self, ui: &mut egui::Ui, label: &str, inserer: &str) {
        if bouton(ui, label, BOUTON) {
            self.saisir(inserer);
        }
    }

    fn bouton_fonction(&mut self, ui: &mut egui::Ui, label: &str, f: Fonction) {
        if bouton(ui, label, BOUTON) {
            self.fonction_via_noyau(f);
        }
    }

    /* ------------------------ appels noyau ------------------------ */

    /// "=" : canonise la saisie, évalue, dépose le résultat formaté dans le
    /// champ et pousse (saisie, résultat) dans l'historique.
    fn eval_via_noyau(&mut self) {
        let saisie = self.entree.trim().to_string();

        match eval_expression(&canonise(&saisie)) {
            Ok(v) => {
                self.deposer_resultat(saisie, format_nombre(v));
            }
            Err(e) => {
                // le détail typé part au journal, la vue aplatit en "Error"
                log::debug!("évaluation refusée ({e}) pour {saisie:?}");
                self.afficher_erreur();
            }
        }
    }

    /// Bouton fonction : la référence exige un nombre simple dans le champ
    /// (champ vide = 0) ; une expression non réduite est une faute.
    fn fonction_via_noyau(&mut self, f: Fonction) {
        let Some(x) = self.valeur_saisie() else {
            log::debug!("fonction {} sur saisie non numérique {:?}", f.nom(), self.entree);
            self.afficher_erreur();
            return;
        };

        match applique_fonction(f, x, self.mode_angle) {
            Ok(v) => {
                let affiche = format!("{}({})", f.nom(), format_nombre(x));
                self.deposer_resultat(affiche, format_nombre(v));
            }
            Err(e) => {
                log::debug!("fonction {}({x}) refusée ({e})", f.nom());
                self.afficher_erreur();
            }
        }
    }
}

/* ------------------------ helper bouton ------------------------ */

fn bouton(ui: &mut egui::Ui, label: &str, fond: egui::Color32) -> bool {
    let texte = egui::RichText::new(label)
        .size(18.0)
        .color(egui::Color32::WHITE);

    ui.add_sized(TAILLE_BOUTON, egui::Button::new(texte).fill(fond))
        .clicked()
}
