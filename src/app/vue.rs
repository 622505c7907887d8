// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppMotifs (etat.rs) pour natif + wasm
// - Clavier : Enter teste (quand le champ est focus)
// - Tactile : focus redonné après clic (focus_entree)

use eframe::egui;

use detecteur_motifs::noyau::{evaluer_motif, Motif};

use super::etat::{AppMotifs, Demarche};

/// Vert “vrai” (lisible sur fond clair et sombre).
const VERT_VRAI: egui::Color32 = egui::Color32::from_rgb(34, 160, 90);

impl AppMotifs {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Testeur de motifs");
                ui.label("Entrez une expression (ex: 8, 1e3, 2x+1, x*x) et choisissez un test.");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("ex: 8 ou 1e3")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter teste (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter && self.peut_tester() {
            self.tester_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label("Test :");

            let mut choix = self.motif;
            egui::ComboBox::from_id_salt("choix_motif")
                .selected_text(choix.cle())
                .show_ui(ui, |ui| {
                    for m in Motif::TOUS {
                        ui.selectable_value(&mut choix, m, m.cle())
                            .on_hover_text(m.description());
                    }
                });
            self.set_motif(choix);
        });

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let tester = ui
                .add_enabled(
                    self.peut_tester(),
                    egui::Button::new("Tester").min_size(egui::vec2(120.0, 30.0)),
                )
                .on_hover_text("Applique le test choisi à l’expression");
            if tester.clicked() {
                self.tester_via_noyau();
            }

            let effacer = ui
                .add_sized([80.0, 30.0], egui::Button::new("Effacer"))
                .on_hover_text("Efface l’expression et le résultat");
            if effacer.clicked() {
                self.effacer();
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("Résultat ({}) :", self.motif.description()));

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                match self.resultat {
                    None => {
                        ui.weak("Entrez une valeur puis appuyez sur Tester.");
                    }
                    Some(true) => {
                        ui.colored_label(VERT_VRAI, "Résultat : vrai ✅");
                    }
                    Some(false) => {
                        ui.colored_label(ui.visuals().error_fg_color, "Résultat : faux ❌");
                    }
                }
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
                Self::champ_demarche(ui, "Arbre", "demarche_arbre", &self.demarche.arbre);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    /// Teste l’expression via le noyau, puis dépose résultat/démarche dans l’état UI.
    fn tester_via_noyau(&mut self) {
        match evaluer_motif(&self.entree, self.motif) {
            Ok((resultat, d_noyau)) => {
                let d_ui = Demarche {
                    jetons: d_noyau.jetons,
                    rpn: d_noyau.rpn,
                    arbre: d_noyau.arbre,
                    note: d_noyau.note,
                };
                self.set_resultat(resultat, d_ui);
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
    }
}
