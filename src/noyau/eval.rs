//! Noyau — évaluation d’un motif (pipeline réel)
//!
//! tokenize -> RPN -> Noeud -> détecteur
//!
//! La démarche garde une trace lisible de chaque étape pour l’UI ;
//! le résultat lui-même vient toujours du détecteur choisi.

use thiserror::Error;

use super::format::format_noeud;
use super::jetons::{format_tokens, tokenize};
use super::motifs::Motif;
use super::rpn::{format_rpn, from_rpn, to_rpn};

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
    pub arbre: String,
    pub note: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum ErreurEval {
    #[error("Entrée vide")]
    EntreeVide,
}

/// API publique : teste `motif` sur l’expression et retourne:
/// - le booléen du détecteur
/// - la démarche (jetons, rpn, arbre)
///
/// Seule une entrée vide est refusée (l’UI affiche alors “entrez une valeur”).
pub fn evaluer_motif(expr_str: &str, motif: Motif) -> Result<(bool, DemarcheNoyau), ErreurEval> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurEval::EntreeVide);
    }

    // 1) Jetons
    let jetons = tokenize(s);

    // 2) RPN
    let rpn = to_rpn(&jetons);

    // 3) Arbre (absent => texte d’erreur dans la démarche, pas d’erreur remontée)
    let arbre = from_rpn(&rpn);
    let arbre_txt = match &arbre {
        Ok(e) => format_noeud(e),
        Err(e) => format!("absent ({e})"),
    };

    // 4) Détecteur, sur l’arbre déjà construit
    let resultat = motif.tester_arbre(s, arbre.as_ref().ok());
    log::debug!("{motif} sur {s:?} => {resultat}");

    let d = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        rpn: format_rpn(&rpn),
        arbre: arbre_txt,
        note: format!("Pipeline: jetons → RPN → arbre → {motif} ({}).", motif.description()),
    };

    Ok((resultat, d))
}
