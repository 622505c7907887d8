//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état du testeur (entrée, motif choisi, résultat, démarche)
//! et offrir des opérations simples (Effacer) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune détection ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.

use detecteur_motifs::noyau::Motif;

/// Motif sélectionné au lancement.
const MOTIF_DEFAUT: Motif = Motif::VarNum;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub arbre: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct AppMotifs {
    // --- entrée utilisateur ---
    pub entree: String,
    pub motif: Motif,

    // --- sorties ---
    pub resultat: Option<bool>, // None => “entrez une valeur”
    pub erreur: String,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppMotifs {
    fn default() -> Self {
        Self {
            entree: String::new(),
            motif: MOTIF_DEFAUT,
            resultat: None,
            erreur: String::new(),
            demarche: Demarche::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppMotifs {
    /// Effacer : entrée + résultat + démarche (le motif choisi reste).
    pub fn effacer(&mut self) {
        self.entree.clear();
        self.clear_resultat();
    }

    /// Échap : effacer seulement l’entrée (sans toucher au résultat).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    pub fn clear_resultat(&mut self) {
        self.resultat = None;
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur (le résultat repasse à “aucun”).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.resultat = None;
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (booléen + démarche).
    pub fn set_resultat(&mut self, resultat: bool, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = Some(resultat);
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Changer de motif invalide l’ancien résultat (il répondait à une autre question).
    pub fn set_motif(&mut self, motif: Motif) {
        if motif != self.motif {
            self.motif = motif;
            self.clear_resultat();
        }
    }

    /// Le bouton Tester est inactif tant que l’entrée est blanche.
    pub fn peut_tester(&self) -> bool {
        !self.entree.trim().is_empty()
    }
}
